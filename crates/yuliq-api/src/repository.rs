// Archivo: repository.rs
// Propósito: definir el trait `EntityService`, el contrato que cumplen los
// accesos a un recurso REST de la tienda (cliente HTTP real, en memoria, ...).
use crate::errors::Result;
use crate::request::{EntityArrayResponse, EntityResponse, QueryOptions};
use async_trait::async_trait;
use yuliq_domain::{Entidad, FilterMap};

/// Operaciones CRUD sobre el recurso de una entidad.
///
/// Las fechas viajan como ISO 8601 y se convierten en ambos sentidos en la
/// (de)serialización de la propia entidad. Un fallo del backend llega como
/// `Err`; no se reintenta nada.
#[async_trait]
pub trait EntityService<T: Entidad>: Send + Sync {
    /// `POST /api/{recurso}`. El backend asigna el `id`.
    async fn create(&self, registro: &T) -> Result<EntityResponse<T>>;

    /// `PUT /api/{recurso}/{id}`: reemplazo completo.
    async fn update(&self, registro: &T) -> Result<EntityResponse<T>>;

    /// `PATCH /api/{recurso}/{id}` con `application/merge-patch+json`.
    async fn partial_update(&self, registro: &T) -> Result<EntityResponse<T>>;

    /// `GET /api/{recurso}/{id}`. Un cuerpo vacío se devuelve como
    /// `body: None`.
    async fn find(&self, id: i64) -> Result<EntityResponse<T>>;

    /// `GET /api/{recurso}?filtros&page=&size=&sort=`.
    async fn query(&self, opciones: &QueryOptions) -> Result<EntityArrayResponse<T>>;

    /// `DELETE /api/{recurso}/{id}`. Sólo devuelve el estado.
    async fn delete(&self, id: i64) -> Result<u16>;

    /// `GET /api/{recurso}/count?filtros`.
    async fn count(&self, filtro: &FilterMap) -> Result<u64>;
}
