// Archivo: errors.rs
// Propósito: definir los errores de acceso a la API y el alias Result<T>
// usado por los servicios del crate.
use thiserror::Error;
/// Errores comunes de los servicios de entidades.
///
/// - `Http`: el backend respondió con un estado no exitoso.
/// - `Transporte`: no se pudo completar la petición (red, timeout, ...).
/// - `Serializacion`: cuerpo JSON inesperado.
/// - `SinIdentificador`: update/patch de un registro sin `id`.
/// - `NoEncontrado`: entidad inexistente (servicios en memoria).
/// - `Configuracion`: variables de entorno inválidas.
/// - `Almacenamiento`: error interno de los servicios en memoria.
#[derive(Error, Debug)]
pub enum ApiError {
  /// Respuesta con estado 4xx/5xx.
  #[error("Error HTTP {status}: {mensaje}")]
  Http { status: u16, mensaje: String },
  /// Fallo de red o del cliente HTTP.
  #[error("Error de transporte: {0}")]
  Transporte(String),
  /// Error de serialización/deserialización JSON.
  #[error("Error de serialización: {0}")]
  Serializacion(#[from] serde_json::Error),
  /// Se pidió actualizar un registro que todavía no tiene `id`.
  #[error("El registro de {0} no tiene identificador")]
  SinIdentificador(&'static str),
  /// Entidad no encontrada.
  #[error("No encontrado: {0}")]
  NoEncontrado(String),
  /// Configuración inválida.
  #[error("Error de configuración: {0}")]
  Configuracion(String),
  /// Error genérico de almacenamiento en memoria.
  #[error("Error de almacenamiento: {0}")]
  Almacenamiento(String),
}

impl ApiError {
  /// Estado HTTP asociado, si lo hay.
  pub fn status(&self) -> Option<u16> {
    match self {
      ApiError::Http { status, .. } => Some(*status),
      ApiError::NoEncontrado(_) => Some(404),
      _ => None,
    }
  }
}

impl From<reqwest::Error> for ApiError {
  fn from(e: reqwest::Error) -> Self {
    match e.status() {
      Some(status) => ApiError::Http { status: status.as_u16(), mensaje: e.to_string() },
      None => ApiError::Transporte(e.to_string()),
    }
  }
}

/// Alias de resultado usado por las APIs del crate.
pub type Result<T> = std::result::Result<T, ApiError>;
