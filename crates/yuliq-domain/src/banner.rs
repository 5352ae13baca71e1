// banner.rs
use crate::{fecha, DomainError, Entidad};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Banner {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  #[serde(default)]
  pub imagen_content_type: Option<String>,
  #[serde(default)]
  pub imagen: Option<String>,
  #[serde(default, with = "fecha::iso_opcional", skip_serializing_if = "Option::is_none")]
  pub fecha_puesta: Option<DateTime<Utc>>,
}

impl Banner {
  pub fn with_id(id: i64) -> Self {
    Self { id: Some(id), ..Default::default() }
  }

  pub fn validar(&self) -> Result<(), DomainError> {
    if self.fecha_puesta.is_none() {
      return Err(DomainError::ValidationError("fechaPuesta es obligatoria".to_string()));
    }
    Ok(())
  }
}

impl Entidad for Banner {
  const RECURSO: &'static str = "banners";

  fn id(&self) -> Option<i64> {
    self.id
  }

  fn set_id(&mut self, id: i64) {
    self.id = Some(id);
  }
}
