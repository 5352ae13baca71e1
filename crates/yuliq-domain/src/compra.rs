// compra.rs
use crate::{Entidad, Factura};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Compra {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  #[serde(default)]
  pub cantidad_comprada: Option<i32>,
  #[serde(default)]
  pub precio_pagado: Option<f32>,
  #[serde(default)]
  pub factura: Option<Box<Factura>>,
}

impl Compra {
  pub fn with_id(id: i64) -> Self {
    Self { id: Some(id), ..Default::default() }
  }
}

impl Entidad for Compra {
  const RECURSO: &'static str = "compras";

  fn id(&self) -> Option<i64> {
    self.id
  }

  fn set_id(&mut self, id: i64) {
    self.id = Some(id);
  }
}
