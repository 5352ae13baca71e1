//! Crate `yuliq-views`: controladores de las vistas del back office
//!
//! Cada vista recibe explícitamente sus colaboradores (servicios de
//! `yuliq-api`, navegador, alertas, host de diálogos, exportador) y guarda
//! su propio estado: no hay estado global compartido entre vistas.
//!
//! - [`listado::ListView`]: paginación, orden y filtro sincronizados con la
//!   URL, borrado con confirmación y exportación.
//! - [`edicion::UpdateView`]: alta/edición con opciones de relación.
//! - [`detalle::DetailView`], [`resolver::resolve`], [`borrado::DeleteDialog`].
pub mod archivos;
pub mod borrado;
pub mod colaboradores;
pub mod detalle;
pub mod edicion;
pub mod errors;
pub mod exportacion;
pub mod formularios;
pub mod listado;
pub mod navegacion;
pub mod opciones;
pub mod resolver;
pub mod stubs;

pub use borrado::DeleteDialog;
pub use colaboradores::{Alertas, DialogoHost, EventoAlerta, Exportador, Navegador, QueryParams, ResultadoDialogo};
pub use detalle::DetailView;
pub use edicion::UpdateView;
pub use errors::{Result, ViewError};
pub use exportacion::{Columna, Documento};
pub use formularios::{BannerForm, CarritoForm, CompraForm, EntityForm, FacturaForm, ProductoForm};
pub use listado::{ConfigListado, EstadoListado, ListView, ListadoPorDefecto, ResultadoCarga};
pub use navegacion::EstadoPagina;
pub use resolver::resolve;
