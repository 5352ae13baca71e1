// Archivo: listado.rs
// Propósito: controlador de los listados paginados (producto, carrito,
// factura, compra, banner): sincroniza página/orden/filtro con la URL,
// carga la página con el servicio, abre el diálogo de borrado y exporta.
//
// Estados: Idle -> Loading -> (Idle | Error). Cada carga recibe un ticket;
// una respuesta cuyo ticket no es el último emitido se descarta sin tocar
// el estado, así una petición vieja nunca pisa a una más nueva.
use crate::borrado::DeleteDialog;
use crate::colaboradores::{Alertas, DialogoHost, EventoAlerta, Exportador, Navegador, QueryParams, ResultadoDialogo};
use crate::errors::Result;
use crate::exportacion::{Columna, Documento};
use crate::navegacion::EstadoPagina;
use std::sync::Arc;
use yuliq_api::{ApiError, EntityArrayResponse, EntityService, QueryOptions};
use yuliq_domain::{Banner, Carrito, Compra, Entidad, Factura, Filtro, Producto};

/// Canal de alertas para errores HTTP.
pub const HTTP_ERROR_EVENT: &str = "yuliqApp.httpError";

/// Configuración de la ruta de un listado.
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigListado {
    /// Ruta del listado (`/producto`).
    pub ruta: &'static str,
    /// Orden por defecto cuando la URL no trae `sort`.
    pub default_sort: &'static str,
    /// Campo identificador usado como desempate del orden.
    pub id_field: &'static str,
    /// Nombre del archivo exportado.
    pub export_nombre: &'static str,
    pub columnas: Vec<Columna>,
}

impl ConfigListado {
    pub fn productos() -> Self {
        Self { ruta: "/producto",
               default_sort: "id,asc",
               id_field: "id",
               export_nombre: "productos.pdf",
               columnas: vec![Columna::new("nombreProducto", "nombre"),
                              Columna::new("precio", "Precio"),
                              Columna::new("existencias", "existencias"),
                              Columna::new("calorias", "Calorias")] }
    }

    pub fn facturas() -> Self {
        Self { ruta: "/factura",
               default_sort: "id,asc",
               id_field: "id",
               export_nombre: "facturas.pdf",
               columnas: vec![Columna::new("id", "Id"),
                              Columna::new("fechaFactura", "FechaFactura"),
                              Columna::new("cantidadPagada", "Cantidad")] }
    }

    pub fn carritos() -> Self {
        Self { ruta: "/carrito",
               default_sort: "id,asc",
               id_field: "id",
               export_nombre: "carritos.pdf",
               columnas: vec![Columna::new("id", "Id"),
                              Columna::new("cantidad", "Cantidad"),
                              Columna::new("fechaCarrito", "FechaCarrito")] }
    }

    pub fn compras() -> Self {
        Self { ruta: "/compra",
               default_sort: "id,asc",
               id_field: "id",
               export_nombre: "compras.pdf",
               columnas: vec![Columna::new("id", "Id"),
                              Columna::new("cantidadComprada", "CantidadComprada"),
                              Columna::new("precioPagado", "PrecioPagado")] }
    }

    pub fn banners() -> Self {
        Self { ruta: "/banner",
               default_sort: "id,asc",
               id_field: "id",
               export_nombre: "banners.pdf",
               columnas: vec![Columna::new("id", "Id"), Columna::new("fechaPuesta", "FechaPuesta")] }
    }
}

/// Configuración por defecto del listado de cada entidad.
pub trait ListadoPorDefecto: Entidad {
    fn config_listado() -> ConfigListado;
}

impl ListadoPorDefecto for Producto {
    fn config_listado() -> ConfigListado {
        ConfigListado::productos()
    }
}

impl ListadoPorDefecto for Factura {
    fn config_listado() -> ConfigListado {
        ConfigListado::facturas()
    }
}

impl ListadoPorDefecto for Carrito {
    fn config_listado() -> ConfigListado {
        ConfigListado::carritos()
    }
}

impl ListadoPorDefecto for Compra {
    fn config_listado() -> ConfigListado {
        ConfigListado::compras()
    }
}

impl ListadoPorDefecto for Banner {
    fn config_listado() -> ConfigListado {
        ConfigListado::banners()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstadoListado {
    Idle,
    Loading,
    Error,
}

/// Carga emitida y todavía sin respuesta.
#[derive(Debug, Clone, PartialEq)]
pub struct PeticionCarga {
    pub ticket: u64,
    /// Página pedida (1-based).
    pub page: u32,
    /// Reescribir la URL al aplicar la respuesta.
    pub navigate: bool,
    pub opciones: QueryOptions,
}

/// Qué pasó con una respuesta.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultadoCarga {
    Aplicada,
    Fallida,
    /// Llegó después de una carga más nueva; se ignoró.
    Descartada,
}

/// Controlador de un listado paginado.
pub struct ListView<T: Entidad, F: Filtro> {
    service: Arc<dyn EntityService<T>>,
    navegador: Arc<dyn Navegador>,
    alertas: Arc<dyn Alertas>,
    config: ConfigListado,
    items_per_page: u32,
    estado: EstadoListado,
    registros: Vec<T>,
    total_items: u64,
    /// Página cargada con éxito por última vez.
    page: Option<u32>,
    predicate: Option<String>,
    ascending: bool,
    /// Página que muestra el paginador.
    pager_page: u32,
    filtro: F,
    ultimo_ticket: u64,
}

impl<T: Entidad, F: Filtro> ListView<T, F> {
    pub fn new(service: Arc<dyn EntityService<T>>,
               navegador: Arc<dyn Navegador>,
               alertas: Arc<dyn Alertas>,
               config: ConfigListado,
               items_per_page: u32)
               -> Self {
        Self { service,
               navegador,
               alertas,
               config,
               items_per_page,
               estado: EstadoListado::Idle,
               registros: Vec::new(),
               total_items: 0,
               page: None,
               predicate: None,
               ascending: true,
               pager_page: 1,
               filtro: F::default(),
               ultimo_ticket: 0 }
    }

    pub fn estado(&self) -> EstadoListado {
        self.estado
    }

    pub fn is_loading(&self) -> bool {
        self.estado == EstadoListado::Loading
    }

    pub fn registros(&self) -> &[T] {
        &self.registros
    }

    pub fn total_items(&self) -> u64 {
        self.total_items
    }

    pub fn page(&self) -> Option<u32> {
        self.page
    }

    pub fn pager_page(&self) -> u32 {
        self.pager_page
    }

    pub fn predicate(&self) -> Option<&str> {
        self.predicate.as_deref()
    }

    pub fn ascending(&self) -> bool {
        self.ascending
    }

    pub fn filtro(&self) -> &F {
        &self.filtro
    }

    pub fn config(&self) -> &ConfigListado {
        &self.config
    }

    pub fn items_per_page(&self) -> u32 {
        self.items_per_page
    }

    /// Número de páginas según el último total recibido.
    pub fn total_pages(&self) -> u32 {
        let size = u64::from(self.items_per_page.max(1));
        self.total_items.div_ceil(size).max(1) as u32
    }

    pub fn track_id(registro: &T) -> Option<i64> {
        registro.id()
    }

    fn estado_pagina(&self, page: u32) -> EstadoPagina {
        match &self.predicate {
            Some(predicate) => EstadoPagina { page, predicate: predicate.clone(), ascending: self.ascending },
            None => EstadoPagina::desde_orden(page, self.config.default_sort),
        }
    }

    /// Entrada en la vista o cambio de `page`/`sort` en la URL. Si la terna
    /// pedida difiere de la actual la adopta y carga sin reescribir la URL.
    /// Devuelve `None` si no hacía falta cargar.
    pub async fn handle_navigation(&mut self, params: &QueryParams) -> Option<ResultadoCarga> {
        let pedido = EstadoPagina::desde_query(params, self.config.default_sort);
        let sin_cambios = Some(pedido.page) == self.page
                          && self.predicate.as_deref() == Some(pedido.predicate.as_str())
                          && pedido.ascending == self.ascending;
        if sin_cambios {
            log::debug!("{}: navegación sin cambios", self.config.ruta);
            return None;
        }
        self.predicate = Some(pedido.predicate);
        self.ascending = pedido.ascending;
        Some(self.load_page(Some(pedido.page), true).await)
    }

    /// Prepara una carga: pasa a `Loading` y emite un ticket nuevo. La
    /// página es la pedida, la actual o la primera.
    pub fn begin_load(&mut self, page: Option<u32>, dont_navigate: bool) -> PeticionCarga {
        let page = page.or(self.page).unwrap_or(1).max(1);
        self.ultimo_ticket += 1;
        self.estado = EstadoListado::Loading;
        let orden = self.estado_pagina(page).sort_request(self.config.id_field);
        let opciones = QueryOptions::paged(page - 1, self.items_per_page, orden).with_filter(self.filtro.to_query_map());
        log::debug!("{}: cargando página {} (ticket {})", self.config.ruta, page, self.ultimo_ticket);
        PeticionCarga { ticket: self.ultimo_ticket, page, navigate: !dont_navigate, opciones }
    }

    /// Aplica la respuesta de una carga, salvo que haya otra más nueva.
    pub fn complete_load(&mut self,
                         peticion: PeticionCarga,
                         resultado: std::result::Result<EntityArrayResponse<T>, ApiError>)
                         -> ResultadoCarga {
        if peticion.ticket != self.ultimo_ticket {
            log::warn!("{}: respuesta de la página {} descartada (ticket {} < {})",
                       self.config.ruta, peticion.page, peticion.ticket, self.ultimo_ticket);
            return ResultadoCarga::Descartada;
        }
        match resultado {
            Ok(respuesta) => {
                self.on_success(respuesta, peticion.page, peticion.navigate);
                ResultadoCarga::Aplicada
            }
            Err(e) => {
                self.on_error(&e);
                ResultadoCarga::Fallida
            }
        }
    }

    /// Carga `page` (o la actual). Con `dont_navigate == false` la URL se
    /// reescribe al terminar con éxito.
    pub async fn load_page(&mut self, page: Option<u32>, dont_navigate: bool) -> ResultadoCarga {
        let peticion = self.begin_load(page, dont_navigate);
        let resultado = self.service.query(&peticion.opciones).await;
        self.complete_load(peticion, resultado)
    }

    fn on_success(&mut self, respuesta: EntityArrayResponse<T>, page: u32, navigate: bool) {
        self.estado = EstadoListado::Idle;
        self.total_items = respuesta.total_count.unwrap_or(0);
        self.page = Some(page);
        if navigate {
            let params = self.estado_pagina(page).to_query_params(self.items_per_page);
            self.navegador.navigate(self.config.ruta, &params);
        }
        self.registros = respuesta.into_records();
        self.pager_page = page;
        log::debug!("{}: página {} con {} registros de {}", self.config.ruta, page, self.registros.len(), self.total_items);
    }

    fn on_error(&mut self, error: &ApiError) {
        self.estado = EstadoListado::Error;
        self.pager_page = self.page.unwrap_or(1);
        log::warn!("{}: error cargando la página: {}", self.config.ruta, error);
        let status = error.status().unwrap_or(0);
        self.alertas.broadcast(EventoAlerta::new(HTTP_ERROR_EVENT, format!("error.http.{}", status), error.to_string()));
    }

    /// Aplica el filtro y carga la primera página reescribiendo la URL.
    pub async fn filter(&mut self, filtro: F) -> ResultadoCarga {
        self.filtro = filtro;
        self.load_page(Some(1), false).await
    }

    /// Vacía el filtro y vuelve a la primera página con el orden por
    /// defecto.
    pub async fn reset_filter(&mut self) -> ResultadoCarga {
        self.filtro = F::default();
        let defecto = EstadoPagina::desde_orden(1, self.config.default_sort);
        self.predicate = Some(defecto.predicate);
        self.ascending = defecto.ascending;
        self.load_page(Some(1), false).await
    }

    pub async fn clear(&mut self) -> ResultadoCarga {
        self.reset_filter().await
    }

    /// Clic en la cabecera de la columna `campo`.
    pub async fn sort_by(&mut self, campo: &str) -> ResultadoCarga {
        let (predicate, ascending) = self.estado_pagina(1).ordenar_por(campo);
        self.predicate = Some(predicate);
        self.ascending = ascending;
        self.load_page(Some(1), false).await
    }

    pub async fn change_page(&mut self, page: u32) -> ResultadoCarga {
        self.load_page(Some(page), false).await
    }

    /// Abre el diálogo de borrado de `registro`. Sólo si se cierra con
    /// `Deleted` se recarga la página actual.
    pub async fn delete(&mut self, registro: &T, host: &dyn DialogoHost) -> Result<ResultadoDialogo> {
        let dialogo = DeleteDialog::new(self.service.clone(), registro.clone());
        let resultado = dialogo.abrir(host).await?;
        if resultado == ResultadoDialogo::Deleted {
            self.load_page(None, false).await;
        }
        Ok(resultado)
    }

    /// Exporta la página mostrada con las columnas de la ruta.
    pub fn export(&self, exportador: &dyn Exportador) -> Result<Documento> {
        let documento = Documento::construir(self.config.export_nombre, &self.config.columnas, &self.registros)?;
        exportador.exportar(&documento)?;
        log::info!("{}: exportadas {} filas a {}", self.config.ruta, documento.filas.len(), documento.nombre);
        Ok(documento)
    }
}

impl<T: ListadoPorDefecto, F: Filtro> ListView<T, F> {
    /// Listado con la configuración de ruta propia de la entidad.
    pub fn por_defecto(service: Arc<dyn EntityService<T>>,
                       navegador: Arc<dyn Navegador>,
                       alertas: Arc<dyn Alertas>,
                       items_per_page: u32)
                       -> Self {
        Self::new(service, navegador, alertas, T::config_listado(), items_per_page)
    }
}
