use crate::{Banner, Carrito, Compra, Factura, Producto, TipoProducto, User};
use chrono::{TimeZone, Utc};

/// Datos de ejemplo para demos y pruebas sin backend.
pub struct DomainStubs;

impl DomainStubs {
  pub fn users() -> Vec<User> {
    vec![User::new(1, "admin"), User::new(2, "user")]
  }

  pub fn facturas() -> Vec<Factura> {
    let fecha = Utc.with_ymd_and_hms(2021, 11, 15, 10, 30, 0).single();
    vec![Factura { id: Some(1),
                   fecha_factura: fecha,
                   cantidad_pagada: Some(42),
                   compras: None,
                   assigned_to: Some(User::new(2, "user")) }]
  }

  pub fn compras() -> Vec<Compra> {
    let factura = Self::facturas().into_iter().next().map(Box::new);
    vec![Compra { id: Some(1), cantidad_comprada: Some(3), precio_pagado: Some(12.5), factura }]
  }

  pub fn productos() -> Vec<Producto> {
    let producto = |id: i64, nombre: &str, precio: f32, tipo: TipoProducto| Producto { id: Some(id),
                                                                                       nombre_producto: Some(nombre.into()),
                                                                                       calorias: Some(300),
                                                                                       precio: Some(precio),
                                                                                       existencias: Some(10),
                                                                                       tipoproducto: Some(tipo),
                                                                                       ..Default::default() };
    vec![producto(1, "Croquetas", 6.5, TipoProducto::Entrante),
         producto(2, "Ensalada", 8.0, TipoProducto::Entrante),
         producto(3, "Paella", 14.0, TipoProducto::Principal),
         producto(4, "Merluza", 16.5, TipoProducto::Principal)]
  }

  pub fn carritos() -> Vec<Carrito> {
    let productos = Self::productos().into_iter().take(2).collect();
    vec![Carrito { id: Some(1),
                   cantidad: Some(2),
                   fecha_carrito: Utc.with_ymd_and_hms(2021, 11, 14, 9, 0, 0).single(),
                   assigned_to: Some(User::new(2, "user")),
                   productos: Some(productos) }]
  }

  pub fn banners() -> Vec<Banner> {
    vec![Banner { id: Some(1),
                  imagen_content_type: Some("image/png".into()),
                  imagen: Some("iVBORw0KGgo=".into()),
                  fecha_puesta: Utc.with_ymd_and_hms(2021, 12, 1, 0, 0, 0).single() }]
  }
}
