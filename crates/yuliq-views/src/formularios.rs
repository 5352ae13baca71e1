// Archivo: formularios.rs
// Propósito: modelos de formulario de edición de cada entidad y su
// conversión desde/hacia la entidad. Las fechas se editan como texto
// `YYYY-MM-DDTHH:mm` en hora local.
use crate::archivos::ImagenAdjunta;
use crate::errors::Result;
use crate::opciones::cargar_opciones;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use yuliq_api::{Catalogo, EntityService};
use yuliq_domain::fecha;
use yuliq_domain::{Banner, Carrito, Compra, Entidad, Factura, Producto, TipoProducto, User};

/// Formulario de edición de una entidad.
#[async_trait]
pub trait EntityForm: Default + Clone + Send + Sync {
    type Entidad: Entidad;
    /// Listas de opciones de los selectores de relación.
    type Opciones: Default + Clone + Send + Sync;

    /// Servicio de la entidad dentro del catálogo.
    fn servicio(catalogo: &Catalogo) -> Arc<dyn EntityService<Self::Entidad>>;

    /// Valores por defecto de un registro nuevo (sin `id`).
    fn preparar_nuevo(_registro: &mut Self::Entidad) {}

    fn update_form(&mut self, registro: &Self::Entidad);

    fn create_from_form(&self) -> Self::Entidad;

    /// Reglas locales del formulario.
    fn validar(&self) -> Result<()> {
        Ok(())
    }

    async fn cargar_opciones(catalogo: &Catalogo, registro: &Self::Entidad) -> Self::Opciones;
}

fn fecha_formulario(valor: &Option<DateTime<Utc>>) -> String {
    valor.as_ref().map(fecha::a_formulario).unwrap_or_default()
}

// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductoForm {
    pub id: Option<i64>,
    pub nombre_producto: String,
    pub calorias: Option<i32>,
    pub imagen: Option<String>,
    pub imagen_content_type: Option<String>,
    pub precio: Option<f32>,
    pub existencias: Option<i32>,
    pub tipoproducto: Option<TipoProducto>,
    pub compra: Option<Compra>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductoOpciones {
    pub compras: Vec<Compra>,
}

#[async_trait]
impl EntityForm for ProductoForm {
    type Entidad = Producto;
    type Opciones = ProductoOpciones;

    fn servicio(catalogo: &Catalogo) -> Arc<dyn EntityService<Producto>> {
        catalogo.productos.clone()
    }

    fn update_form(&mut self, p: &Producto) {
        *self = Self { id: p.id,
                       nombre_producto: p.nombre_producto.clone().unwrap_or_default(),
                       calorias: p.calorias,
                       imagen: p.imagen.clone(),
                       imagen_content_type: p.imagen_content_type.clone(),
                       precio: p.precio,
                       existencias: p.existencias,
                       tipoproducto: p.tipoproducto.clone(),
                       compra: p.compra.as_deref().cloned() };
    }

    fn create_from_form(&self) -> Producto {
        Producto { id: self.id,
                   nombre_producto: Some(self.nombre_producto.clone()),
                   calorias: self.calorias,
                   imagen_content_type: self.imagen_content_type.clone(),
                   imagen: self.imagen.clone(),
                   precio: self.precio,
                   existencias: self.existencias,
                   tipoproducto: self.tipoproducto.clone(),
                   compra: self.compra.clone().map(Box::new),
                   carritos: None }
    }

    fn validar(&self) -> Result<()> {
        Ok(self.create_from_form().validar()?)
    }

    async fn cargar_opciones(catalogo: &Catalogo, p: &Producto) -> ProductoOpciones {
        let compras = cargar_opciones(catalogo.compras.as_ref(), vec![p.compra.as_deref().cloned()]).await;
        ProductoOpciones { compras }
    }
}

impl ImagenAdjunta for ProductoForm {
    fn imagen(&self) -> Option<&str> {
        self.imagen.as_deref()
    }

    fn imagen_content_type(&self) -> Option<&str> {
        self.imagen_content_type.as_deref()
    }

    fn set_imagen(&mut self, datos: Option<String>, content_type: Option<String>) {
        self.imagen = datos;
        self.imagen_content_type = content_type;
    }
}

// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarritoForm {
    pub id: Option<i64>,
    pub cantidad: Option<i32>,
    pub fecha_carrito: String,
    pub assigned_to: Option<User>,
    pub productos: Vec<Producto>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CarritoOpciones {
    pub users: Vec<User>,
    pub productos: Vec<Producto>,
}

#[async_trait]
impl EntityForm for CarritoForm {
    type Entidad = Carrito;
    type Opciones = CarritoOpciones;

    fn servicio(catalogo: &Catalogo) -> Arc<dyn EntityService<Carrito>> {
        catalogo.carritos.clone()
    }

    fn preparar_nuevo(c: &mut Carrito) {
        c.fecha_carrito = Some(fecha::inicio_del_dia());
    }

    fn update_form(&mut self, c: &Carrito) {
        *self = Self { id: c.id,
                       cantidad: c.cantidad,
                       fecha_carrito: fecha_formulario(&c.fecha_carrito),
                       assigned_to: c.assigned_to.clone(),
                       productos: c.productos.clone().unwrap_or_default() };
    }

    fn create_from_form(&self) -> Carrito {
        Carrito { id: self.id,
                  cantidad: self.cantidad,
                  fecha_carrito: fecha::desde_formulario(&self.fecha_carrito),
                  assigned_to: self.assigned_to.clone(),
                  productos: Some(self.productos.clone()) }
    }

    async fn cargar_opciones(catalogo: &Catalogo, c: &Carrito) -> CarritoOpciones {
        let seleccionados = c.productos.clone().unwrap_or_default().into_iter().map(Some).collect();
        let users = cargar_opciones(catalogo.users.as_ref(), vec![c.assigned_to.clone()]).await;
        let productos = cargar_opciones(catalogo.productos.as_ref(), seleccionados).await;
        CarritoOpciones { users, productos }
    }
}

// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacturaForm {
    pub id: Option<i64>,
    pub fecha_factura: String,
    pub cantidad_pagada: Option<i32>,
    pub assigned_to: Option<User>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FacturaOpciones {
    pub users: Vec<User>,
}

#[async_trait]
impl EntityForm for FacturaForm {
    type Entidad = Factura;
    type Opciones = FacturaOpciones;

    fn servicio(catalogo: &Catalogo) -> Arc<dyn EntityService<Factura>> {
        catalogo.facturas.clone()
    }

    fn preparar_nuevo(f: &mut Factura) {
        f.fecha_factura = Some(fecha::inicio_del_dia());
    }

    fn update_form(&mut self, f: &Factura) {
        *self = Self { id: f.id,
                       fecha_factura: fecha_formulario(&f.fecha_factura),
                       cantidad_pagada: f.cantidad_pagada,
                       assigned_to: f.assigned_to.clone() };
    }

    fn create_from_form(&self) -> Factura {
        Factura { id: self.id,
                  fecha_factura: fecha::desde_formulario(&self.fecha_factura),
                  cantidad_pagada: self.cantidad_pagada,
                  compras: None,
                  assigned_to: self.assigned_to.clone() }
    }

    async fn cargar_opciones(catalogo: &Catalogo, f: &Factura) -> FacturaOpciones {
        FacturaOpciones { users: cargar_opciones(catalogo.users.as_ref(), vec![f.assigned_to.clone()]).await }
    }
}

// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompraForm {
    pub id: Option<i64>,
    pub cantidad_comprada: Option<i32>,
    pub precio_pagado: Option<f32>,
    pub factura: Option<Factura>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CompraOpciones {
    pub facturas: Vec<Factura>,
}

#[async_trait]
impl EntityForm for CompraForm {
    type Entidad = Compra;
    type Opciones = CompraOpciones;

    fn servicio(catalogo: &Catalogo) -> Arc<dyn EntityService<Compra>> {
        catalogo.compras.clone()
    }

    fn update_form(&mut self, c: &Compra) {
        *self = Self { id: c.id,
                       cantidad_comprada: c.cantidad_comprada,
                       precio_pagado: c.precio_pagado,
                       factura: c.factura.as_deref().cloned() };
    }

    fn create_from_form(&self) -> Compra {
        Compra { id: self.id,
                 cantidad_comprada: self.cantidad_comprada,
                 precio_pagado: self.precio_pagado,
                 factura: self.factura.clone().map(Box::new) }
    }

    async fn cargar_opciones(catalogo: &Catalogo, c: &Compra) -> CompraOpciones {
        let facturas = cargar_opciones(catalogo.facturas.as_ref(), vec![c.factura.as_deref().cloned()]).await;
        CompraOpciones { facturas }
    }
}

// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BannerForm {
    pub id: Option<i64>,
    pub imagen: Option<String>,
    pub imagen_content_type: Option<String>,
    pub fecha_puesta: String,
}

#[async_trait]
impl EntityForm for BannerForm {
    type Entidad = Banner;
    type Opciones = ();

    fn servicio(catalogo: &Catalogo) -> Arc<dyn EntityService<Banner>> {
        catalogo.banners.clone()
    }

    fn preparar_nuevo(b: &mut Banner) {
        b.fecha_puesta = Some(fecha::inicio_del_dia());
    }

    fn update_form(&mut self, b: &Banner) {
        *self = Self { id: b.id,
                       imagen: b.imagen.clone(),
                       imagen_content_type: b.imagen_content_type.clone(),
                       fecha_puesta: fecha_formulario(&b.fecha_puesta) };
    }

    fn create_from_form(&self) -> Banner {
        Banner { id: self.id,
                 imagen_content_type: self.imagen_content_type.clone(),
                 imagen: self.imagen.clone(),
                 fecha_puesta: fecha::desde_formulario(&self.fecha_puesta) }
    }

    fn validar(&self) -> Result<()> {
        Ok(self.create_from_form().validar()?)
    }

    async fn cargar_opciones(_catalogo: &Catalogo, _b: &Banner) -> Self::Opciones {}
}

impl ImagenAdjunta for BannerForm {
    fn imagen(&self) -> Option<&str> {
        self.imagen.as_deref()
    }

    fn imagen_content_type(&self) -> Option<&str> {
        self.imagen_content_type.as_deref()
    }

    fn set_imagen(&mut self, datos: Option<String>, content_type: Option<String>) {
        self.imagen = datos;
        self.imagen_content_type = content_type;
    }
}
