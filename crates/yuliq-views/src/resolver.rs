// Archivo: resolver.rs
// Propósito: resolver el registro de una ruta de edición/detalle antes de
// activar la vista.
use crate::colaboradores::{Navegador, QueryParams};
use crate::errors::Result;
use yuliq_api::EntityService;
use yuliq_domain::Entidad;

/// Ruta de la vista "no encontrado".
pub const NOT_FOUND_ROUTE: &str = "404";

/// Sin `id` devuelve un registro nuevo; con `id` lo busca en el servicio.
/// Un cuerpo vacío redirige a [`NOT_FOUND_ROUTE`] y no resuelve nada
/// (`Ok(None)`). Los errores del servicio se propagan.
pub async fn resolve<T: Entidad>(service: &dyn EntityService<T>, id: Option<i64>, navegador: &dyn Navegador) -> Result<Option<T>> {
    let Some(id) = id else {
        return Ok(Some(T::default()));
    };
    match service.find(id).await?.body {
        Some(registro) => Ok(Some(registro)),
        None => {
            log::warn!("{} {} sin cuerpo, redirigiendo a {}", T::RECURSO, id, NOT_FOUND_ROUTE);
            navegador.navigate(NOT_FOUND_ROUTE, &QueryParams::new());
            Ok(None)
        }
    }
}
