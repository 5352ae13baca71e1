// producto.rs
use crate::{Carrito, Compra, DomainError, Entidad, TipoProducto};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const NOMBRE_PRODUCTO_MAX: usize = 250;
pub const CALORIAS_MAX: i32 = 1000;
pub const PRECIO_MAX: f32 = 200.0;
pub const EXISTENCIAS_MAX: i32 = 50;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Producto {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub id: Option<i64>,
  #[serde(default)]
  pub nombre_producto: Option<String>,
  #[serde(default)]
  pub calorias: Option<i32>,
  #[serde(default)]
  pub imagen_content_type: Option<String>,
  /// Imagen codificada en base64.
  #[serde(default)]
  pub imagen: Option<String>,
  #[serde(default)]
  pub precio: Option<f32>,
  #[serde(default)]
  pub existencias: Option<i32>,
  #[serde(default)]
  pub tipoproducto: Option<TipoProducto>,
  #[serde(default)]
  pub compra: Option<Box<Compra>>,
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub carritos: Option<Vec<Carrito>>,
}

impl Producto {
  pub fn with_id(id: i64) -> Self {
    Self { id: Some(id), ..Default::default() }
  }

  /// Reglas que el formulario comprueba antes de enviar. El resto de la
  /// validación la hace el backend.
  pub fn validar(&self) -> Result<(), DomainError> {
    match self.nombre_producto.as_deref().map(str::trim) {
      None | Some("") => return Err(DomainError::ValidationError("nombreProducto es obligatorio".to_string())),
      Some(nombre) if nombre.chars().count() > NOMBRE_PRODUCTO_MAX => {
        return Err(DomainError::ValidationError(format!("nombreProducto no puede superar {} caracteres",
                                                        NOMBRE_PRODUCTO_MAX)))
      }
      _ => {}
    }
    if let Some(calorias) = self.calorias {
      if calorias > CALORIAS_MAX {
        return Err(DomainError::ValidationError(format!("calorias no puede superar {}", CALORIAS_MAX)));
      }
    }
    match self.precio {
      None => return Err(DomainError::ValidationError("precio es obligatorio".to_string())),
      Some(p) if p > PRECIO_MAX => {
        return Err(DomainError::ValidationError(format!("precio no puede superar {}", PRECIO_MAX)))
      }
      _ => {}
    }
    match self.existencias {
      None => Err(DomainError::ValidationError("existencias es obligatorio".to_string())),
      Some(e) if e > EXISTENCIAS_MAX => {
        Err(DomainError::ValidationError(format!("existencias no puede superar {}", EXISTENCIAS_MAX)))
      }
      _ => Ok(()),
    }
  }
}

impl Entidad for Producto {
  const RECURSO: &'static str = "productos";

  fn id(&self) -> Option<i64> {
    self.id
  }

  fn set_id(&mut self, id: i64) {
    self.id = Some(id);
  }
}

impl fmt::Display for Producto {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f,
           "Producto(id: {}, nombre: {})",
           self.id.map(|i| i.to_string()).unwrap_or_else(|| "-".into()),
           self.nombre_producto.as_deref().unwrap_or("-"))
  }
}
