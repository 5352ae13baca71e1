// user.rs
use crate::Entidad;
use serde::{Deserialize, Serialize};

/// Usuario de la aplicación, sólo como opción de los campos `assignedTo`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  #[serde(default)]
  pub login: Option<String>,
}

impl User {
  pub fn new(id: i64, login: impl Into<String>) -> Self {
    Self { id: Some(id), login: Some(login.into()) }
  }
}

impl Entidad for User {
  const RECURSO: &'static str = "users";

  fn id(&self) -> Option<i64> {
    self.id
  }

  fn set_id(&mut self, id: i64) {
    self.id = Some(id);
  }
}
