use std::sync::Arc;
use yuliq_api::{Catalogo, InMemoryEntityService, Llamada};
use yuliq_domain::{fecha, Banner, Carrito, Compra, DomainStubs, Factura, Producto, TipoProducto, User};
use yuliq_views::archivos::Archivo;
use yuliq_views::stubs::{AlertasRegistradas, NavegadorRegistrado};
use yuliq_views::{BannerForm, CarritoForm, CompraForm, FacturaForm, ProductoForm, UpdateView, ViewError};

struct Escenario {
  productos: Arc<InMemoryEntityService<Producto>>,
  navegador: Arc<NavegadorRegistrado>,
  alertas: Arc<AlertasRegistradas>,
  catalogo: Catalogo,
}

fn escenario(registros: Vec<Producto>) -> Escenario {
  let productos = Arc::new(InMemoryEntityService::with_records(registros));
  let catalogo = Catalogo { productos: productos.clone(), ..Catalogo::en_memoria() };
  Escenario { productos,
              navegador: Arc::new(NavegadorRegistrado::default()),
              alertas: Arc::new(AlertasRegistradas::default()),
              catalogo }
}

fn vista<Fm: yuliq_views::EntityForm>(e: &Escenario) -> UpdateView<Fm> {
  UpdateView::new(e.catalogo.clone(), e.navegador.clone(), e.alertas.clone())
}

fn producto_valido(id: Option<i64>) -> Producto {
  Producto { id,
             nombre_producto: Some("Tortilla".into()),
             precio: Some(7.0),
             existencias: Some(5),
             tipoproducto: Some(TipoProducto::Entrante),
             ..Default::default() }
}

#[tokio::test]
async fn new_record_is_created_and_view_goes_back() {
  let e = escenario(vec![]);
  let mut v = vista::<ProductoForm>(&e);
  v.init(producto_valido(None)).await;

  let guardado = v.save().await.unwrap();

  assert_eq!(e.productos.calls(), vec![Llamada::Create(None)]);
  assert_eq!(guardado.id, Some(1));
  assert_eq!(e.navegador.veces_atras(), 1);
  assert!(!v.is_saving());
}

#[tokio::test]
async fn existing_record_is_updated_not_created() {
  let e = escenario(vec![producto_valido(Some(123))]);
  let mut v = vista::<ProductoForm>(&e);
  v.init(producto_valido(Some(123))).await;
  v.form_mut().precio = Some(9.5);

  let guardado = v.save().await.unwrap();

  assert_eq!(e.productos.calls(), vec![Llamada::Update(123)]);
  assert_eq!(guardado.precio, Some(9.5));
  assert_eq!(e.productos.sent_bodies()[0]["id"], 123);
}

#[tokio::test]
async fn partial_update_can_replace_update() {
  let e = escenario(vec![producto_valido(Some(123))]);
  let mut v = vista::<ProductoForm>(&e).with_partial_update();
  v.init(producto_valido(Some(123))).await;
  v.save().await.unwrap();
  assert_eq!(e.productos.calls(), vec![Llamada::PartialUpdate(123)]);
}

#[tokio::test]
async fn failed_save_keeps_user_on_form() {
  let e = escenario(vec![producto_valido(Some(123))]);
  let mut v = vista::<ProductoForm>(&e);
  v.init(producto_valido(Some(123))).await;
  v.form_mut().nombre_producto = "Tortilla de patatas".into();
  e.productos.fail_next(1);

  let err = v.save().await.unwrap_err();

  assert!(matches!(err, ViewError::Api(_)));
  assert!(!v.is_saving());
  assert_eq!(e.navegador.veces_atras(), 0);
  assert_eq!(v.form().nombre_producto, "Tortilla de patatas");
}

#[tokio::test]
async fn invalid_form_is_not_sent() {
  let e = escenario(vec![]);
  let mut v = vista::<ProductoForm>(&e);
  v.init(Producto::default()).await;

  let err = v.save().await.unwrap_err();

  assert!(matches!(err, ViewError::Domain(_)));
  assert!(e.productos.calls().is_empty());
  assert!(!v.is_saving());
}

#[tokio::test]
async fn new_carrito_defaults_date_to_start_of_day() {
  let e = escenario(DomainStubs::productos());
  let mut v = vista::<CarritoForm>(&e);
  v.init(Carrito::default()).await;
  assert_eq!(v.form().fecha_carrito, fecha::a_formulario(&fecha::inicio_del_dia()));

  let mut v = vista::<CarritoForm>(&e);
  v.init(Carrito::with_id(5)).await;
  assert_eq!(v.form().fecha_carrito, "");
}

#[tokio::test]
async fn new_factura_and_banner_default_date_to_start_of_day() {
  let e = escenario(vec![]);
  let hoy = fecha::a_formulario(&fecha::inicio_del_dia());

  let mut v = vista::<FacturaForm>(&e);
  v.init(Factura::default()).await;
  assert_eq!(v.form().fecha_factura, hoy);
  let mut v = vista::<FacturaForm>(&e);
  v.init(Factura::with_id(1)).await;
  assert_eq!(v.form().fecha_factura, "");

  let mut v = vista::<BannerForm>(&e);
  v.init(Banner::default()).await;
  assert_eq!(v.form().fecha_puesta, hoy);
  let mut v = vista::<BannerForm>(&e);
  v.init(Banner::with_id(1)).await;
  assert_eq!(v.form().fecha_puesta, "");
}

#[tokio::test]
async fn compra_options_put_the_selected_factura_first() {
  let e = escenario(vec![]);
  let compra = Compra { factura: Some(Box::new(Factura::with_id(99))), ..Compra::with_id(7) };
  let mut v = vista::<CompraForm>(&e);
  v.init(compra).await;
  let ids: Vec<_> = v.opciones().facturas.iter().filter_map(|f| f.id).collect();
  assert_eq!(ids, vec![99, 1]);

  let mut v = vista::<CompraForm>(&e);
  v.init(Compra::with_id(8)).await;
  let ids: Vec<_> = v.opciones().facturas.iter().filter_map(|f| f.id).collect();
  assert_eq!(ids, vec![1]);
}

#[tokio::test]
async fn selected_relations_are_prepended_to_options() {
  let e = escenario(DomainStubs::productos());
  let fuera_de_pagina = Producto { nombre_producto: Some("Flan".into()), ..Producto::with_id(99) };
  let carrito = Carrito { assigned_to: Some(User::new(2, "user")),
                          productos: Some(vec![fuera_de_pagina.clone(), Producto::with_id(1)]),
                          ..Carrito::with_id(1) };
  let mut v = vista::<CarritoForm>(&e);
  v.init(carrito).await;

  let opciones = v.opciones();
  assert_eq!(opciones.users.len(), 2);
  let ids: Vec<_> = opciones.productos.iter().filter_map(|p| p.id).collect();
  assert_eq!(ids, vec![99, 1, 2, 3, 4]);
  assert_eq!(opciones.productos[0], fuera_de_pagina);
  assert_eq!(v.form().productos.len(), 2);
}

#[tokio::test]
async fn non_image_file_is_rejected_with_alert() {
  let e = escenario(vec![]);
  let mut v = vista::<BannerForm>(&e);
  v.init(Default::default()).await;

  let pdf = Archivo { nombre: "folleto.pdf".into(), content_type: "application/pdf".into(), contenido: vec![1, 2, 3] };
  assert!(v.set_file_data(Some(&pdf)).is_err());
  let alertas = e.alertas.eventos();
  assert_eq!(alertas[0].nombre, "yuliqApp.error");
  assert_eq!(alertas[0].clave, "error.file.not.image");

  let png = Archivo { nombre: "banner.png".into(), content_type: "image/png".into(), contenido: vec![0; 1234] };
  v.set_file_data(Some(&png)).unwrap();
  assert_eq!(v.form().imagen_content_type.as_deref(), Some("image/png"));
  assert_eq!(v.byte_size().as_deref(), Some("1 234 bytes"));

  v.clear_input_image();
  assert_eq!(v.form().imagen, None);
}

#[tokio::test]
async fn missing_file_cannot_be_extracted() {
  let e = escenario(vec![]);
  let mut v = vista::<ProductoForm>(&e);
  assert!(v.set_file_data(None).is_err());
  assert_eq!(e.alertas.eventos()[0].clave, "error.file.could.not.extract");
}
