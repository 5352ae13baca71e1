// Archivo: request.rs
// Propósito: opciones de consulta de colecciones y respuestas de los
// servicios de entidades.
use yuliq_domain::FilterMap;

/// Opciones de `query`: paginación, orden y filtro.
///
/// `page` es 0-based, como la espera el backend.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryOptions {
    pub filter: FilterMap,
    pub page: Option<u32>,
    pub size: Option<u32>,
    /// Entradas `campo,direccion` (o sólo `campo`), en orden de prioridad.
    pub sort: Vec<String>,
}

impl QueryOptions {
    pub fn paged(page: u32, size: u32, sort: Vec<String>) -> Self {
        Self { page: Some(page), size: Some(size), sort, ..Default::default() }
    }

    pub fn with_filter(mut self, filter: FilterMap) -> Self {
        self.filter = filter;
        self
    }

    /// Parámetros de la query string: primero los filtros, luego `page` y
    /// `size`, y un `sort` por cada entrada de orden.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut pares: Vec<(String, String)> = self.filter.iter().map(|(k, v)| (k.clone(), v.clone())).collect();
        if let Some(page) = self.page {
            pares.push(("page".into(), page.to_string()));
        }
        if let Some(size) = self.size {
            pares.push(("size".into(), size.to_string()));
        }
        pares.extend(self.sort.iter().map(|s| ("sort".to_string(), s.clone())));
        pares
    }
}

/// Respuesta de una operación sobre una entidad.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityResponse<T> {
    pub status: u16,
    pub body: Option<T>,
}

/// Respuesta de `query`: registros de la página y total de coincidencias
/// (cabecera `X-Total-Count`).
#[derive(Debug, Clone, PartialEq)]
pub struct EntityArrayResponse<T> {
    pub status: u16,
    pub body: Option<Vec<T>>,
    pub total_count: Option<u64>,
}

impl<T> EntityArrayResponse<T> {
    pub fn into_records(self) -> Vec<T> {
        self.body.unwrap_or_default()
    }
}
