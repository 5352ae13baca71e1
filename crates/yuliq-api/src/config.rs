// Archivo: config.rs
// Propósito: configuración del cliente REST (URL base, tamaño de página,
// timeout) leída del entorno.
use crate::errors::{ApiError, Result};
use std::time::Duration;

/// Tamaño de página por defecto de los listados.
pub const ITEMS_PER_PAGE: u32 = 20;
pub const DEFAULT_API_URL: &str = "http://localhost:8080/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Configuración del acceso al backend.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// Prefijo de todos los endpoints (`http://host:puerto/`).
    pub base_url: String,
    /// Registros por página en los listados.
    pub items_per_page: u32,
    /// Timeout de cada petición.
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_URL.to_string(),
               items_per_page: ITEMS_PER_PAGE,
               timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS) }
    }
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Default::default() }
    }

    /// Lee `.env` (si existe) y las variables `YULIQ_API_URL`,
    /// `YULIQ_ITEMS_PER_PAGE` y `YULIQ_HTTP_TIMEOUT_SECS`. Las ausentes toman
    /// el valor por defecto; las que no se pueden interpretar son un error.
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        let mut config = Self::default();
        if let Ok(url) = std::env::var("YULIQ_API_URL") {
            if url.trim().is_empty() {
                return Err(ApiError::Configuracion("YULIQ_API_URL vacía".into()));
            }
            config.base_url = url.trim().to_string();
        }
        if let Ok(v) = std::env::var("YULIQ_ITEMS_PER_PAGE") {
            config.items_per_page = v.trim()
                                     .parse::<u32>()
                                     .ok()
                                     .filter(|n| *n > 0)
                                     .ok_or_else(|| ApiError::Configuracion(format!("YULIQ_ITEMS_PER_PAGE inválido: {}", v)))?;
        }
        if let Ok(v) = std::env::var("YULIQ_HTTP_TIMEOUT_SECS") {
            let secs = v.trim()
                        .parse::<u64>()
                        .map_err(|_| ApiError::Configuracion(format!("YULIQ_HTTP_TIMEOUT_SECS inválido: {}", v)))?;
            config.timeout = Duration::from_secs(secs);
        }
        log::debug!("configuración de la API: {:?}", config);
        Ok(config)
    }

    /// URL absoluta de un endpoint relativo (`api/productos`).
    pub fn endpoint_for(&self, api: &str) -> String {
        format!("{}/{}", self.base_url.trim_end_matches('/'), api.trim_start_matches('/'))
    }
}
