// factura.rs
use crate::{fecha, Compra, Entidad, User};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Factura {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  #[serde(default, with = "fecha::iso_opcional", skip_serializing_if = "Option::is_none")]
  pub fecha_factura: Option<DateTime<Utc>>,
  #[serde(default)]
  pub cantidad_pagada: Option<i32>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub compras: Option<Vec<Compra>>,
  #[serde(default)]
  pub assigned_to: Option<User>,
}

impl Factura {
  pub fn with_id(id: i64) -> Self {
    Self { id: Some(id), ..Default::default() }
  }
}

impl Entidad for Factura {
  const RECURSO: &'static str = "facturas";

  fn id(&self) -> Option<i64> {
    self.id
  }

  fn set_id(&mut self, id: i64) {
    self.id = Some(id);
  }
}
