// Archivo: navegacion.rs
// Propósito: estado de paginación/orden de un listado y su traducción desde
// y hacia los parámetros de la URL.
use crate::colaboradores::QueryParams;

pub const ASC: &str = "asc";
pub const DESC: &str = "desc";
pub const PAGE_PARAM: &str = "page";
pub const SIZE_PARAM: &str = "size";
pub const SORT_PARAM: &str = "sort";

/// Terna (página, campo de orden, ascendente) de un listado. La página es
/// 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EstadoPagina {
    pub page: u32,
    pub predicate: String,
    pub ascending: bool,
}

impl EstadoPagina {
    /// Interpreta un orden `campo,direccion`. Sólo `asc` cuenta como
    /// ascendente; cualquier otra dirección (o ninguna) es descendente.
    pub fn desde_orden(page: u32, orden: &str) -> Self {
        let mut partes = orden.split(',');
        let predicate = partes.next().unwrap_or_default().to_string();
        let ascending = partes.next() == Some(ASC);
        Self { page, predicate, ascending }
    }

    /// Estado pedido por la URL. `page` ausente, no numérico o menor que 1
    /// vale 1; `sort` ausente toma el orden por defecto de la ruta.
    pub fn desde_query(params: &QueryParams, default_sort: &str) -> Self {
        let page = params.get(PAGE_PARAM)
                         .and_then(|p| p.trim().parse::<u32>().ok())
                         .filter(|p| *p >= 1)
                         .unwrap_or(1);
        let orden = params.get(SORT_PARAM).map(String::as_str).unwrap_or(default_sort);
        Self::desde_orden(page, orden)
    }

    /// `campo,asc|desc`, tal como se escribe en la URL.
    pub fn sort_param(&self) -> String {
        format!("{},{}", self.predicate, if self.ascending { ASC } else { DESC })
    }

    /// Orden enviado al backend: el pedido y, como desempate, `id_field`
    /// salvo que ya sea el campo principal.
    pub fn sort_request(&self, id_field: &str) -> Vec<String> {
        let mut orden = vec![self.sort_param()];
        if self.predicate != id_field {
            orden.push(id_field.to_string());
        }
        orden
    }

    /// Parámetros con los que se reescribe la URL tras una carga.
    pub fn to_query_params(&self, size: u32) -> QueryParams {
        let mut params = QueryParams::new();
        params.insert(PAGE_PARAM.into(), self.page.to_string());
        params.insert(SIZE_PARAM.into(), size.to_string());
        params.insert(SORT_PARAM.into(), self.sort_param());
        params
    }

    /// Orden tras pulsar la cabecera `campo`: el mismo campo invierte la
    /// dirección, otro campo empieza ascendente.
    pub fn ordenar_por(&self, campo: &str) -> (String, bool) {
        if self.predicate == campo {
            (campo.to_string(), !self.ascending)
        } else {
            (campo.to_string(), true)
        }
    }
}
