// filtros.rs
//
// Modelos de filtro de los listados. Cada filtro guarda los valores tal como
// llegan del formulario y los proyecta a parámetros `campo.operador=valor`
// que entiende el backend. No se valida nada aquí: un valor mal formado se
// envía tal cual y es el servidor quien lo rechaza.
use crate::fecha;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Parámetros de filtro en el orden en que se añadieron.
pub type FilterMap = IndexMap<String, String>;

/// Operadores de comparación que admite el backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operador {
  Contains,
  Equals,
  LessThan,
  GreaterThanOrEqual,
  LessThanOrEqual,
}

impl Operador {
  pub fn sufijo(&self) -> &'static str {
    match self {
      Operador::Contains => "contains",
      Operador::Equals => "equals",
      Operador::LessThan => "lessThan",
      Operador::GreaterThanOrEqual => "greaterThanOrEqual",
      Operador::LessThanOrEqual => "lessThanOrEqual",
    }
  }
}

/// Estado de filtro de un listado.
pub trait Filtro: Clone + Default + Send + Sync + 'static {
  fn to_query_map(&self) -> FilterMap;

  fn is_empty(&self) -> bool {
    self.to_query_map().is_empty()
  }
}

/// Acumula criterios omitiendo los vacíos.
#[derive(Debug, Default)]
struct Criterios {
  mapa: FilterMap,
}

impl Criterios {
  fn valor(mut self, campo: &str, operador: Operador, valor: Option<&String>) -> Self {
    if let Some(v) = valor.filter(|v| !v.is_empty()) {
      self.mapa.insert(format!("{}.{}", campo, operador.sufijo()), v.clone());
    }
    self
  }

  /// Como `valor`, pero normaliza a ISO 8601 las fechas de formulario que se
  /// puedan interpretar. El resto pasa sin tocar.
  fn fecha(self, campo: &str, operador: Operador, valor: Option<&String>) -> Self {
    let normalizada = valor.map(|v| match fecha::desde_formulario(v).or_else(|| fecha::desde_iso(v)) {
                             Some(f) => fecha::a_iso(&f),
                             None => v.clone(),
                           });
    self.valor(campo, operador, normalizada.as_ref())
  }

  fn build(self) -> FilterMap {
    self.mapa
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductoFilter {
  pub nombre: Option<String>,
  pub calorias: Option<String>,
  pub precio: Option<String>,
  pub tipo: Option<String>,
  pub existencias: Option<String>,
}

impl Filtro for ProductoFilter {
  fn to_query_map(&self) -> FilterMap {
    Criterios::default().valor("nombreProducto", Operador::Contains, self.nombre.as_ref())
                        .valor("calorias", Operador::LessThan, self.calorias.as_ref())
                        .valor("precio", Operador::LessThan, self.precio.as_ref())
                        .valor("existencias", Operador::LessThan, self.existencias.as_ref())
                        .valor("tipoproducto", Operador::Equals, self.tipo.as_ref())
                        .build()
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FacturaFilter {
  pub fecha_desde: Option<String>,
  pub fecha_hasta: Option<String>,
  pub id: Option<String>,
  pub user: Option<String>,
}

impl Filtro for FacturaFilter {
  fn to_query_map(&self) -> FilterMap {
    Criterios::default().fecha("fechaFactura", Operador::GreaterThanOrEqual, self.fecha_desde.as_ref())
                        .fecha("fechaFactura", Operador::LessThanOrEqual, self.fecha_hasta.as_ref())
                        .valor("id", Operador::Equals, self.id.as_ref())
                        .valor("assignedToId", Operador::Equals, self.user.as_ref())
                        .build()
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CarritoFilter {
  pub cantidad: Option<String>,
  pub fecha_desde: Option<String>,
  pub fecha_hasta: Option<String>,
  pub user: Option<String>,
}

impl Filtro for CarritoFilter {
  fn to_query_map(&self) -> FilterMap {
    Criterios::default().valor("cantidad", Operador::Equals, self.cantidad.as_ref())
                        .fecha("fechaCarrito", Operador::GreaterThanOrEqual, self.fecha_desde.as_ref())
                        .fecha("fechaCarrito", Operador::LessThanOrEqual, self.fecha_hasta.as_ref())
                        .valor("assignedToId", Operador::Equals, self.user.as_ref())
                        .build()
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompraFilter {
  pub cantidad_comprada: Option<String>,
  pub precio_pagado: Option<String>,
  pub factura: Option<String>,
}

impl Filtro for CompraFilter {
  fn to_query_map(&self) -> FilterMap {
    Criterios::default().valor("cantidadComprada", Operador::Equals, self.cantidad_comprada.as_ref())
                        .valor("precioPagado", Operador::LessThanOrEqual, self.precio_pagado.as_ref())
                        .valor("facturaId", Operador::Equals, self.factura.as_ref())
                        .build()
  }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BannerFilter {
  pub fecha_desde: Option<String>,
  pub fecha_hasta: Option<String>,
}

impl Filtro for BannerFilter {
  fn to_query_map(&self) -> FilterMap {
    Criterios::default().fecha("fechaPuesta", Operador::GreaterThanOrEqual, self.fecha_desde.as_ref())
                        .fecha("fechaPuesta", Operador::LessThanOrEqual, self.fecha_hasta.as_ref())
                        .build()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn only_empty_values_are_omitted() {
    let filtro = ProductoFilter { precio: Some("".into()), ..Default::default() };
    assert!(filtro.is_empty());
    let filtro = ProductoFilter { nombre: Some("   ".into()), precio: Some("".into()), ..Default::default() };
    let mapa = filtro.to_query_map();
    assert_eq!(mapa.len(), 1);
    assert_eq!(mapa.get("nombreProducto.contains").map(String::as_str), Some("   "));
  }

  #[test]
  fn malformed_values_pass_through() {
    let filtro = CompraFilter { precio_pagado: Some("barato".into()), ..Default::default() };
    assert_eq!(filtro.to_query_map().get("precioPagado.lessThanOrEqual").map(String::as_str), Some("barato"));
  }
}
