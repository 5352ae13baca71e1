// Archivo: stubs.rs
// Propósito: implementación en memoria de `EntityService` para pruebas,
// demos sin backend y wiring rápido.
//
// No evalúa los filtros (eso lo hace el backend real): `query` pagina el
// conjunto completo ordenado por `id` y registra las opciones recibidas para
// que las pruebas puedan inspeccionarlas.
use crate::errors::{ApiError, Result};
use crate::repository::EntityService;
use crate::request::{EntityArrayResponse, EntityResponse, QueryOptions};
use async_trait::async_trait;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};
use yuliq_domain::{Entidad, FilterMap};

/// Llamada recibida por el servicio en memoria.
#[derive(Debug, Clone, PartialEq)]
pub enum Llamada {
    Create(Option<i64>),
    Update(i64),
    PartialUpdate(i64),
    Find(i64),
    Query(QueryOptions),
    Delete(i64),
    Count(FilterMap),
}

#[derive(Debug)]
struct Estado<T> {
    registros: BTreeMap<i64, T>,
    siguiente_id: i64,
    llamadas: Vec<Llamada>,
    fallos_pendientes: u32,
    cuerpo_json: Vec<serde_json::Value>,
}

/// Servicio en memoria (no durable).
pub struct InMemoryEntityService<T> {
    estado: Mutex<Estado<T>>,
}

impl<T: Entidad> InMemoryEntityService<T> {
    pub fn new() -> Self {
        Self { estado: Mutex::new(Estado { registros: BTreeMap::new(),
                                           siguiente_id: 1,
                                           llamadas: Vec::new(),
                                           fallos_pendientes: 0,
                                           cuerpo_json: Vec::new() }) }
    }

    /// Crea el servicio con registros iniciales. Los que no tienen `id` se
    /// descartan.
    pub fn with_records(registros: Vec<T>) -> Self {
        let servicio = Self::new();
        if let Ok(mut estado) = servicio.estado.lock() {
            for r in registros {
                if let Some(id) = r.id() {
                    estado.siguiente_id = estado.siguiente_id.max(id + 1);
                    estado.registros.insert(id, r);
                }
            }
        }
        servicio
    }

    /// Helper para mapear `Mutex::lock()` en un `Result` con
    /// `ApiError::Almacenamiento`.
    fn lock(&self) -> Result<MutexGuard<'_, Estado<T>>> {
        self.estado.lock().map_err(|e| ApiError::Almacenamiento(format!("mutex poisoned: {:?}", e)))
    }

    /// Registra la llamada y, si se pidió un fallo, lo consume.
    fn registrar(&self, llamada: Llamada) -> Result<MutexGuard<'_, Estado<T>>> {
        let mut estado = self.lock()?;
        estado.llamadas.push(llamada);
        if estado.fallos_pendientes > 0 {
            estado.fallos_pendientes -= 1;
            return Err(ApiError::Http { status: 500, mensaje: "fallo simulado".into() });
        }
        Ok(estado)
    }

    fn registrar_cuerpo<B: Serialize>(estado: &mut Estado<T>, cuerpo: &B) -> Result<()> {
        estado.cuerpo_json.push(serde_json::to_value(cuerpo)?);
        Ok(())
    }

    /// Hace fallar (HTTP 500) las próximas `n` llamadas.
    pub fn fail_next(&self, n: u32) {
        if let Ok(mut estado) = self.estado.lock() {
            estado.fallos_pendientes = n;
        }
    }

    /// Llamadas recibidas, en orden.
    pub fn calls(&self) -> Vec<Llamada> {
        self.estado.lock().map(|e| e.llamadas.clone()).unwrap_or_default()
    }

    /// Cuerpos JSON enviados en create/update/partial_update, tal como los
    /// vería el backend.
    pub fn sent_bodies(&self) -> Vec<serde_json::Value> {
        self.estado.lock().map(|e| e.cuerpo_json.clone()).unwrap_or_default()
    }

    pub fn records(&self) -> Vec<T> {
        self.estado.lock().map(|e| e.registros.values().cloned().collect()).unwrap_or_default()
    }

    pub fn get(&self, id: i64) -> Option<T> {
        self.estado.lock().ok().and_then(|e| e.registros.get(&id).cloned())
    }
}

impl<T: Entidad> Default for InMemoryEntityService<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Entidad> EntityService<T> for InMemoryEntityService<T> {
    async fn create(&self, registro: &T) -> Result<EntityResponse<T>> {
        let mut estado = self.registrar(Llamada::Create(registro.id()))?;
        Self::registrar_cuerpo(&mut estado, registro)?;
        let id = estado.siguiente_id;
        estado.siguiente_id += 1;
        let mut nuevo = registro.clone();
        nuevo.set_id(id);
        estado.registros.insert(id, nuevo.clone());
        Ok(EntityResponse { status: 201, body: Some(nuevo) })
    }

    async fn update(&self, registro: &T) -> Result<EntityResponse<T>> {
        let id = registro.id().ok_or(ApiError::SinIdentificador(T::RECURSO))?;
        let mut estado = self.registrar(Llamada::Update(id))?;
        Self::registrar_cuerpo(&mut estado, registro)?;
        if !estado.registros.contains_key(&id) {
            return Err(ApiError::NoEncontrado(format!("{} {}", T::RECURSO, id)));
        }
        estado.registros.insert(id, registro.clone());
        Ok(EntityResponse { status: 200, body: Some(registro.clone()) })
    }

    async fn partial_update(&self, registro: &T) -> Result<EntityResponse<T>> {
        let id = registro.id().ok_or(ApiError::SinIdentificador(T::RECURSO))?;
        let mut estado = self.registrar(Llamada::PartialUpdate(id))?;
        Self::registrar_cuerpo(&mut estado, registro)?;
        let actual = estado.registros
                           .get(&id)
                           .cloned()
                           .ok_or_else(|| ApiError::NoEncontrado(format!("{} {}", T::RECURSO, id)))?;
        // merge-patch: sólo se sobrescriben los campos presentes y no nulos
        let mut base = serde_json::to_value(&actual)?;
        if let (Some(destino), serde_json::Value::Object(cambios)) = (base.as_object_mut(), serde_json::to_value(registro)?) {
            for (campo, valor) in cambios {
                if !valor.is_null() {
                    destino.insert(campo, valor);
                }
            }
        }
        let fusionado: T = serde_json::from_value(base)?;
        estado.registros.insert(id, fusionado.clone());
        Ok(EntityResponse { status: 200, body: Some(fusionado) })
    }

    async fn find(&self, id: i64) -> Result<EntityResponse<T>> {
        let estado = self.registrar(Llamada::Find(id))?;
        match estado.registros.get(&id) {
            Some(r) => Ok(EntityResponse { status: 200, body: Some(r.clone()) }),
            None => Err(ApiError::NoEncontrado(format!("{} {}", T::RECURSO, id))),
        }
    }

    async fn query(&self, opciones: &QueryOptions) -> Result<EntityArrayResponse<T>> {
        let estado = self.registrar(Llamada::Query(opciones.clone()))?;
        let total = estado.registros.len();
        let pagina = opciones.page.unwrap_or(0) as usize;
        let registros: Vec<T> = match opciones.size {
            Some(size) => estado.registros
                                .values()
                                .skip(pagina * size as usize)
                                .take(size as usize)
                                .cloned()
                                .collect(),
            None => estado.registros.values().cloned().collect(),
        };
        Ok(EntityArrayResponse { status: 200, body: Some(registros), total_count: Some(total as u64) })
    }

    async fn delete(&self, id: i64) -> Result<u16> {
        let mut estado = self.registrar(Llamada::Delete(id))?;
        match estado.registros.remove(&id) {
            Some(_) => Ok(204),
            None => Err(ApiError::NoEncontrado(format!("{} {}", T::RECURSO, id))),
        }
    }

    async fn count(&self, filtro: &FilterMap) -> Result<u64> {
        let estado = self.registrar(Llamada::Count(filtro.clone()))?;
        Ok(estado.registros.len() as u64)
    }
}
