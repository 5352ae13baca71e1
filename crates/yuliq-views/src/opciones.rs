// Archivo: opciones.rs
// Propósito: cargar las opciones de los selectores de relación de un
// formulario sin perder las entidades ya seleccionadas.
use yuliq_api::{EntityService, QueryOptions};
use yuliq_domain::{add_to_collection_if_missing, Entidad};

/// Pide la página por defecto de `service` y antepone los `seleccionados`
/// que no estén en ella. Si la consulta falla se registra y quedan sólo los
/// seleccionados.
pub async fn cargar_opciones<T: Entidad>(service: &dyn EntityService<T>, seleccionados: Vec<Option<T>>) -> Vec<T> {
    let pagina = match service.query(&QueryOptions::default()).await {
        Ok(respuesta) => respuesta.into_records(),
        Err(e) => {
            log::warn!("no se pudieron cargar las opciones de {}: {}", T::RECURSO, e);
            Vec::new()
        }
    };
    add_to_collection_if_missing(pagina, seleccionados)
}
