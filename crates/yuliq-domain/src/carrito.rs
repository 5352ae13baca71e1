// carrito.rs
use crate::{fecha, Entidad, Producto, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Carrito {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  #[serde(default)]
  pub cantidad: Option<i32>,
  #[serde(default, with = "fecha::iso_opcional", skip_serializing_if = "Option::is_none")]
  pub fecha_carrito: Option<DateTime<Utc>>,
  #[serde(default)]
  pub assigned_to: Option<User>,
  #[serde(default)]
  pub productos: Option<Vec<Producto>>,
}

impl Carrito {
  pub fn with_id(id: i64) -> Self {
    Self { id: Some(id), ..Default::default() }
  }
}

impl Entidad for Carrito {
  const RECURSO: &'static str = "carritos";

  fn id(&self) -> Option<i64> {
    self.id
  }

  fn set_id(&mut self, id: i64) {
    self.id = Some(id);
  }
}
