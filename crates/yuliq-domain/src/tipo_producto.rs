// tipo_producto.rs
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// Categoría de un producto en la carta.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum TipoProducto {
  Entrante,
  Principal,
  /// Cualquier valor que el backend conozca y este cliente no. Guarda el
  /// texto recibido para devolverlo igual al guardar.
  Otro(String),
}

impl TipoProducto {
  pub fn as_str(&self) -> &str {
    match self {
      TipoProducto::Entrante => "ENTRANTE",
      TipoProducto::Principal => "PRINCIPAL",
      TipoProducto::Otro(valor) => valor,
    }
  }

  fn desde_wire(valor: String) -> Self {
    match valor.as_str() {
      "ENTRANTE" => TipoProducto::Entrante,
      "PRINCIPAL" => TipoProducto::Principal,
      _ => TipoProducto::Otro(valor),
    }
  }
}

impl fmt::Display for TipoProducto {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}", self.as_str())
  }
}

impl Serialize for TipoProducto {
  fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(self.as_str())
  }
}

impl<'de> Deserialize<'de> for TipoProducto {
  fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
    Ok(Self::desde_wire(String::deserialize(deserializer)?))
  }
}

/// Acepta los valores conocidos sin distinguir mayúsculas; el resto se
/// conserva como `Otro`. Sólo un texto vacío es un error.
impl FromStr for TipoProducto {
  type Err = String;

  fn from_str(s: &str) -> Result<Self, Self::Err> {
    let s = s.trim();
    if s.is_empty() {
      return Err("tipo de producto vacío".to_string());
    }
    Ok(match s.to_uppercase().as_str() {
      "ENTRANTE" => TipoProducto::Entrante,
      "PRINCIPAL" => TipoProducto::Principal,
      _ => TipoProducto::Otro(s.to_string()),
    })
  }
}
