//! Crate `yuliq-api`: acceso a los recursos REST de la tienda
//!
//! Define el contrato `EntityService<T>` (create, update, partial_update,
//! find, query, delete, count), su implementación HTTP sobre reqwest
//! (`RestEntityService`) y una implementación en memoria útil para pruebas
//! (`InMemoryEntityService`). `Catalogo` agrupa un servicio por entidad para
//! pasarlo explícitamente a las vistas.
//!
//! Ejemplo rápido:
//! ```rust
//! use yuliq_api::stubs::InMemoryEntityService;
//! use yuliq_domain::Producto;
//! let servicio: InMemoryEntityService<Producto> = InMemoryEntityService::new();
//! assert!(servicio.records().is_empty());
//! ```
pub mod catalogo;
pub mod config;
pub mod errors;
pub mod repository;
pub mod request;
pub mod rest;
pub mod stubs;

pub use catalogo::{new_from_env, Catalogo};
pub use config::{ApiConfig, ITEMS_PER_PAGE};
pub use errors::*;
pub use repository::*;
pub use request::*;
pub use rest::{RestEntityService, TOTAL_COUNT_HEADER};
pub use stubs::{InMemoryEntityService, Llamada};
