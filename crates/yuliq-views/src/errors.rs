use thiserror::Error;

// Errores de las vistas.
//
// Agrupa los errores de la capa de servicios (`ApiError`), los del dominio
// (`DomainError`) y los propios de los controladores de vista: validación
// del formulario, navegación y carga de archivos.
#[derive(Error, Debug)]
pub enum ViewError {
  /// Errores originados por los servicios REST / en memoria.
  #[error("Error de API: {0}")]
  Api(#[from] yuliq_api::ApiError),

  /// Errores originados por las reglas del dominio.
  #[error("Error de dominio: {0}")]
  Domain(#[from] yuliq_domain::DomainError),

  /// El formulario no cumple las reglas de validación locales.
  #[error("Error de validación: {0}")]
  Validacion(String),

  /// No se pudo resolver la ruta pedida.
  #[error("Error de navegación: {0}")]
  Navegacion(String),

  /// Archivo inválido o ilegible. `clave` es el sufijo i18n
  /// (`not.image`, `could.not.extract`).
  #[error("Error de archivo ({clave}): {mensaje}")]
  Archivo { clave: String, mensaje: String },

  /// Errores de serialización JSON (exportación).
  #[error("Error de serialización: {0}")]
  Serializacion(#[from] serde_json::Error),
}

/// Alias de resultado de las vistas.
pub type Result<T> = std::result::Result<T, ViewError>;
