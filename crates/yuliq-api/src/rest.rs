// Archivo: rest.rs
// Propósito: implementación HTTP de `EntityService` sobre reqwest.
use crate::config::ApiConfig;
use crate::errors::{ApiError, Result};
use crate::repository::EntityService;
use crate::request::{EntityArrayResponse, EntityResponse, QueryOptions};
use async_trait::async_trait;
use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use yuliq_domain::{Entidad, FilterMap};

/// Cabecera con el total de registros que cumplen el filtro.
pub const TOTAL_COUNT_HEADER: &str = "X-Total-Count";
const MERGE_PATCH_JSON: &str = "application/merge-patch+json";

/// Servicio REST de una entidad: `{base_url}/api/{recurso}`.
pub struct RestEntityService<T> {
    client: Client,
    resource_url: String,
    _entidad: PhantomData<fn() -> T>,
}

impl<T: Entidad> RestEntityService<T> {
    /// Crea el servicio con un cliente HTTP propio configurado con el
    /// timeout de `config`.
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout)
                                      .build()
                                      .map_err(|e| ApiError::Configuracion(format!("cliente HTTP: {}", e)))?;
        Ok(Self::with_client(client, config))
    }

    /// Crea el servicio reutilizando un cliente existente (comparte el pool
    /// de conexiones entre entidades).
    pub fn with_client(client: Client, config: &ApiConfig) -> Self {
        Self { client,
               resource_url: config.endpoint_for(&T::resource_path()),
               _entidad: PhantomData }
    }

    pub fn resource_url(&self) -> &str {
        &self.resource_url
    }

    fn item_url(&self, id: i64) -> String {
        format!("{}/{}", self.resource_url, id)
    }

    fn id_requerido(registro: &T) -> Result<i64> {
        registro.id().ok_or(ApiError::SinIdentificador(T::RECURSO))
    }

    async fn leer_entidad(respuesta: Response) -> Result<EntityResponse<T>> {
        let (status, bytes) = leer_cuerpo(respuesta).await?;
        Ok(EntityResponse { status, body: cuerpo_opcional(&bytes)? })
    }
}

/// Lee estado y cuerpo, convirtiendo los estados no exitosos en
/// `ApiError::Http` con el cuerpo como mensaje.
async fn leer_cuerpo(respuesta: Response) -> Result<(u16, Vec<u8>)> {
    let status = respuesta.status();
    let bytes = respuesta.bytes().await?;
    if !status.is_success() {
        return Err(ApiError::Http { status: status.as_u16(),
                                    mensaje: String::from_utf8_lossy(&bytes).into_owned() });
    }
    Ok((status.as_u16(), bytes.to_vec()))
}

/// Cuerpo vacío o `null` → `None`.
fn cuerpo_opcional<B: DeserializeOwned>(bytes: &[u8]) -> Result<Option<B>> {
    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Ok(None);
    }
    Ok(serde_json::from_slice::<Option<B>>(bytes)?)
}

fn total_count(respuesta: &Response) -> Option<u64> {
    respuesta.headers()
             .get(TOTAL_COUNT_HEADER)
             .and_then(|v| v.to_str().ok())
             .and_then(|v| v.trim().parse().ok())
}

#[async_trait]
impl<T: Entidad> EntityService<T> for RestEntityService<T> {
    async fn create(&self, registro: &T) -> Result<EntityResponse<T>> {
        log::debug!("POST {}", self.resource_url);
        let respuesta = self.client.post(&self.resource_url).json(registro).send().await?;
        let resultado = Self::leer_entidad(respuesta).await?;
        log::info!("{} creado (id {:?})", T::RECURSO, resultado.body.as_ref().and_then(Entidad::id));
        Ok(resultado)
    }

    async fn update(&self, registro: &T) -> Result<EntityResponse<T>> {
        let url = self.item_url(Self::id_requerido(registro)?);
        log::debug!("PUT {}", url);
        let respuesta = self.client.put(&url).json(registro).send().await?;
        let resultado = Self::leer_entidad(respuesta).await?;
        log::info!("{} actualizado: {}", T::RECURSO, url);
        Ok(resultado)
    }

    async fn partial_update(&self, registro: &T) -> Result<EntityResponse<T>> {
        let url = self.item_url(Self::id_requerido(registro)?);
        log::debug!("PATCH {}", url);
        let cuerpo = serde_json::to_vec(registro)?;
        let respuesta = self.client
                            .patch(&url)
                            .header(CONTENT_TYPE, MERGE_PATCH_JSON)
                            .body(cuerpo)
                            .send()
                            .await?;
        Self::leer_entidad(respuesta).await
    }

    async fn find(&self, id: i64) -> Result<EntityResponse<T>> {
        let url = self.item_url(id);
        log::debug!("GET {}", url);
        let respuesta = self.client.get(&url).send().await?;
        Self::leer_entidad(respuesta).await
    }

    async fn query(&self, opciones: &QueryOptions) -> Result<EntityArrayResponse<T>> {
        let pares = opciones.to_query_pairs();
        log::debug!("GET {} {:?}", self.resource_url, pares);
        let respuesta = self.client.get(&self.resource_url).query(&pares).send().await?;
        let total = total_count(&respuesta);
        let (status, bytes) = leer_cuerpo(respuesta).await?;
        Ok(EntityArrayResponse { status, body: cuerpo_opcional(&bytes)?, total_count: total })
    }

    async fn delete(&self, id: i64) -> Result<u16> {
        let url = self.item_url(id);
        log::debug!("DELETE {}", url);
        let respuesta = self.client.delete(&url).send().await?;
        let (status, _) = leer_cuerpo(respuesta).await?;
        log::info!("{} eliminado: {}", T::RECURSO, url);
        Ok(status)
    }

    async fn count(&self, filtro: &FilterMap) -> Result<u64> {
        let url = format!("{}/count", self.resource_url);
        let pares: Vec<(&String, &String)> = filtro.iter().collect();
        log::debug!("GET {} {:?}", url, pares);
        let respuesta = self.client.get(&url).query(&pares).send().await?;
        let (_, bytes) = leer_cuerpo(respuesta).await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}
