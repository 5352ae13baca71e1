//! Modelos de la tienda: entidades, identidad por `id`, filtros de listado y
//! conversión de fechas entre el formato de la API y el de los formularios.
mod banner;
mod carrito;
mod compra;
mod domain_stubs;
mod entidad;
mod errors;
mod factura;
pub mod fecha;
pub mod filtros;
mod producto;
mod tipo_producto;
mod user;

pub use banner::Banner;
pub use carrito::Carrito;
pub use compra::Compra;
pub use domain_stubs::DomainStubs;
pub use entidad::{add_to_collection_if_missing, seleccion_por_id, Entidad};
pub use errors::DomainError;
pub use factura::Factura;
pub use filtros::{BannerFilter, CarritoFilter, CompraFilter, FacturaFilter, FilterMap, Filtro, ProductoFilter};
pub use producto::{Producto, CALORIAS_MAX, EXISTENCIAS_MAX, NOMBRE_PRODUCTO_MAX, PRECIO_MAX};
pub use tipo_producto::TipoProducto;
pub use user::User;
