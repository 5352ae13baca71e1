// Archivo: catalogo.rs
// Propósito: agrupar los servicios de todas las entidades para inyectarlos
// explícitamente en las vistas (listados, formularios, diálogos).
use crate::config::ApiConfig;
use crate::errors::{ApiError, Result};
use crate::repository::EntityService;
use crate::rest::RestEntityService;
use crate::stubs::InMemoryEntityService;
use reqwest::Client;
use std::sync::Arc;
use yuliq_domain::{Banner, Carrito, Compra, DomainStubs, Factura, Producto, User};

/// Servicios de la tienda, uno por entidad.
///
/// Es `Clone` barato: cada servicio va en un `Arc`.
#[derive(Clone)]
pub struct Catalogo {
    pub productos: Arc<dyn EntityService<Producto>>,
    pub carritos: Arc<dyn EntityService<Carrito>>,
    pub facturas: Arc<dyn EntityService<Factura>>,
    pub compras: Arc<dyn EntityService<Compra>>,
    pub banners: Arc<dyn EntityService<Banner>>,
    pub users: Arc<dyn EntityService<User>>,
    /// Tamaño de página de los listados.
    pub items_per_page: u32,
}

impl Catalogo {
    /// Servicios REST contra `config.base_url`, compartiendo un único
    /// cliente HTTP.
    pub fn rest(config: &ApiConfig) -> Result<Self> {
        let client = Client::builder().timeout(config.timeout)
                                      .build()
                                      .map_err(|e| ApiError::Configuracion(format!("cliente HTTP: {}", e)))?;
        log::info!("catálogo REST contra {}", config.base_url);
        Ok(Self { productos: Arc::new(RestEntityService::<Producto>::with_client(client.clone(), config)),
                  carritos: Arc::new(RestEntityService::<Carrito>::with_client(client.clone(), config)),
                  facturas: Arc::new(RestEntityService::<Factura>::with_client(client.clone(), config)),
                  compras: Arc::new(RestEntityService::<Compra>::with_client(client.clone(), config)),
                  banners: Arc::new(RestEntityService::<Banner>::with_client(client.clone(), config)),
                  users: Arc::new(RestEntityService::<User>::with_client(client, config)),
                  items_per_page: config.items_per_page })
    }

    /// Servicios en memoria pre-poblados con `DomainStubs`.
    pub fn en_memoria() -> Self {
        Self { productos: Arc::new(InMemoryEntityService::with_records(DomainStubs::productos())),
               carritos: Arc::new(InMemoryEntityService::with_records(DomainStubs::carritos())),
               facturas: Arc::new(InMemoryEntityService::with_records(DomainStubs::facturas())),
               compras: Arc::new(InMemoryEntityService::with_records(DomainStubs::compras())),
               banners: Arc::new(InMemoryEntityService::with_records(DomainStubs::banners())),
               users: Arc::new(InMemoryEntityService::with_records(DomainStubs::users())),
               items_per_page: crate::config::ITEMS_PER_PAGE }
    }
}

/// Construye el catálogo REST leyendo la configuración del entorno.
pub fn new_from_env() -> Result<Catalogo> {
    let config = ApiConfig::from_env()?;
    Catalogo::rest(&config)
}
