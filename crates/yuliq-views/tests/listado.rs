use std::sync::Arc;
use yuliq_api::{ApiError, EntityArrayResponse, InMemoryEntityService, Llamada, QueryOptions};
use yuliq_domain::{DomainStubs, Producto, ProductoFilter};
use yuliq_views::stubs::{AlertasRegistradas, DialogoGuionado, ExportadorRegistrado, NavegadorRegistrado};
use yuliq_views::{ConfigListado, EstadoListado, ListView, QueryParams, ResultadoCarga, ResultadoDialogo};

struct Escenario {
  vista: ListView<Producto, ProductoFilter>,
  servicio: Arc<InMemoryEntityService<Producto>>,
  navegador: Arc<NavegadorRegistrado>,
  alertas: Arc<AlertasRegistradas>,
}

fn escenario(items_per_page: u32) -> Escenario {
  let servicio = Arc::new(InMemoryEntityService::with_records(DomainStubs::productos()));
  let navegador = Arc::new(NavegadorRegistrado::default());
  let alertas = Arc::new(AlertasRegistradas::default());
  let vista: ListView<Producto, ProductoFilter> =
    ListView::por_defecto(servicio.clone(), navegador.clone(), alertas.clone(), items_per_page);
  Escenario { vista, servicio, navegador, alertas }
}

fn params(pares: &[(&str, &str)]) -> QueryParams {
  pares.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect()
}

fn consultas(servicio: &InMemoryEntityService<Producto>) -> Vec<QueryOptions> {
  servicio.calls()
          .into_iter()
          .filter_map(|c| match c {
            Llamada::Query(o) => Some(o),
            _ => None,
          })
          .collect()
}

#[tokio::test]
async fn url_state_drives_load_without_rewriting_url() {
  let mut e = escenario(2);
  let r = e.vista.handle_navigation(&params(&[("page", "3"), ("sort", "precio,desc")])).await;

  assert_eq!(r, Some(ResultadoCarga::Aplicada));
  assert_eq!(e.vista.page(), Some(3));
  assert_eq!(e.vista.predicate(), Some("precio"));
  assert!(!e.vista.ascending());
  assert!(e.navegador.destinos().is_empty());
  let q = consultas(&e.servicio);
  assert_eq!(q.len(), 1);
  assert_eq!(q[0].page, Some(2));
  assert_eq!(q[0].size, Some(2));
  assert_eq!(q[0].sort, vec!["precio,desc".to_string(), "id".to_string()]);

  // misma URL: no se vuelve a cargar
  assert_eq!(e.vista.handle_navigation(&params(&[("page", "3"), ("sort", "precio,desc")])).await, None);
  assert_eq!(consultas(&e.servicio).len(), 1);
}

#[tokio::test]
async fn user_sort_by_id_rewrites_url_from_first_page() {
  let mut e = escenario(2);
  e.vista.handle_navigation(&params(&[("page", "3"), ("sort", "precio,desc")])).await;
  e.vista.sort_by("id").await;

  let (ruta, query) = e.navegador.ultima_ruta().unwrap();
  assert_eq!(ruta, "/producto");
  assert_eq!(query.get("page").map(String::as_str), Some("1"));
  assert_eq!(query.get("sort").map(String::as_str), Some("id,asc"));
  assert_eq!(query.get("size").map(String::as_str), Some("2"));
  assert_eq!(consultas(&e.servicio).last().unwrap().sort, vec!["id,asc".to_string()]);
  assert_eq!(e.vista.pager_page(), 1);

  // segundo clic en la misma columna: descendente
  e.vista.sort_by("id").await;
  let (_, query) = e.navegador.ultima_ruta().unwrap();
  assert_eq!(query.get("sort").map(String::as_str), Some("id,desc"));
}

#[tokio::test]
async fn default_sort_applies_when_url_has_none() {
  let mut e = escenario(20);
  e.vista.handle_navigation(&QueryParams::new()).await;
  assert_eq!(e.vista.page(), Some(1));
  assert_eq!(e.vista.predicate(), Some("id"));
  assert!(e.vista.ascending());
  assert_eq!(e.vista.registros().len(), 4);
  assert_eq!(e.vista.total_items(), 4);
  assert_eq!(e.vista.estado(), EstadoListado::Idle);
}

#[tokio::test]
async fn first_load_takes_direction_from_route_default_sort() {
  let e = escenario(20);
  let config = ConfigListado { default_sort: "precio,desc", ..ConfigListado::productos() };
  let mut vista: ListView<Producto, ProductoFilter> =
    ListView::new(e.servicio.clone(), e.navegador.clone(), e.alertas.clone(), config, 20);
  let peticion = vista.begin_load(None, true);
  assert_eq!(peticion.opciones.sort, vec!["precio,desc".to_string(), "id".to_string()]);
  assert_eq!(peticion.page, 1);
}

#[tokio::test]
async fn confirmed_delete_reloads_exactly_once() {
  let mut e = escenario(20);
  e.vista.handle_navigation(&QueryParams::new()).await;
  let antes = consultas(&e.servicio).len();

  let host = DialogoGuionado::con_respuestas([true]);
  let objetivo = e.vista.registros()[0].clone();
  let resultado = e.vista.delete(&objetivo, &host).await.unwrap();

  assert_eq!(resultado, ResultadoDialogo::Deleted);
  assert_eq!(consultas(&e.servicio).len(), antes + 1);
  assert!(e.servicio.calls().contains(&Llamada::Delete(1)));
  assert_eq!(e.vista.registros().len(), 3);
  assert_eq!(host.preguntas().len(), 1);
}

#[tokio::test]
async fn dismissed_delete_has_no_side_effects() {
  let mut e = escenario(20);
  e.vista.handle_navigation(&QueryParams::new()).await;
  let llamadas = e.servicio.calls().len();

  let host = DialogoGuionado::con_respuestas([false]);
  let objetivo = e.vista.registros()[0].clone();
  let resultado = e.vista.delete(&objetivo, &host).await.unwrap();

  assert_eq!(resultado, ResultadoDialogo::Dismissed);
  assert_eq!(e.servicio.calls().len(), llamadas);
  assert_eq!(e.vista.registros().len(), 4);
}

#[tokio::test]
async fn failed_load_resets_pager_and_alerts() {
  let mut e = escenario(2);
  e.vista.handle_navigation(&QueryParams::new()).await;
  let registros = e.vista.registros().to_vec();

  e.servicio.fail_next(1);
  let r = e.vista.change_page(2).await;

  assert_eq!(r, ResultadoCarga::Fallida);
  assert_eq!(e.vista.estado(), EstadoListado::Error);
  assert_eq!(e.vista.pager_page(), 1);
  assert_eq!(e.vista.page(), Some(1));
  assert_eq!(e.vista.registros(), registros.as_slice());
  let alertas = e.alertas.eventos();
  assert_eq!(alertas.len(), 1);
  assert_eq!(alertas[0].clave, "error.http.500");
  assert!(e.navegador.destinos().is_empty());
}

#[tokio::test]
async fn stale_response_is_discarded() {
  let mut e = escenario(20);
  let vieja = e.vista.begin_load(Some(1), false);
  let nueva = e.vista.begin_load(Some(2), false);

  let respuesta = |id| EntityArrayResponse { status: 200, body: Some(vec![Producto::with_id(id)]), total_count: Some(30) };
  assert_eq!(e.vista.complete_load(nueva, Ok(respuesta(21))), ResultadoCarga::Aplicada);
  assert_eq!(e.vista.complete_load(vieja, Ok(respuesta(1))), ResultadoCarga::Descartada);

  assert_eq!(e.vista.page(), Some(2));
  assert_eq!(e.vista.registros()[0].id, Some(21));
  assert_eq!(e.vista.total_pages(), 2);
  assert_eq!(e.navegador.destinos().len(), 1);
}

#[tokio::test]
async fn stale_error_does_not_flip_state() {
  let mut e = escenario(20);
  let vieja = e.vista.begin_load(Some(1), true);
  let nueva = e.vista.begin_load(Some(1), true);
  let r = e.vista.complete_load(vieja, Err(ApiError::Transporte("timeout".into())));
  assert_eq!(r, ResultadoCarga::Descartada);
  assert!(e.vista.is_loading());
  assert!(e.alertas.eventos().is_empty());
  e.vista.complete_load(nueva, Ok(EntityArrayResponse { status: 200, body: None, total_count: None }));
  assert_eq!(e.vista.estado(), EstadoListado::Idle);
  assert_eq!(e.vista.total_items(), 0);
}

#[tokio::test]
async fn filter_goes_to_first_page_and_reset_clears_it() {
  let mut e = escenario(2);
  e.vista.handle_navigation(&params(&[("page", "2"), ("sort", "precio,desc")])).await;

  let filtro = ProductoFilter { nombre: Some("ae".into()), ..Default::default() };
  e.vista.filter(filtro).await;
  let q = consultas(&e.servicio);
  let ultima = q.last().unwrap();
  assert_eq!(ultima.page, Some(0));
  assert_eq!(ultima.filter.get("nombreProducto.contains").map(String::as_str), Some("ae"));
  assert_eq!(e.navegador.ultima_ruta().unwrap().1.get("page").map(String::as_str), Some("1"));

  e.vista.reset_filter().await;
  let ultima = consultas(&e.servicio).pop().unwrap();
  assert!(ultima.filter.is_empty());
  assert_eq!(ultima.sort, vec!["id,asc".to_string()]);
  assert_eq!(e.vista.filtro().nombre, None);
}

#[tokio::test]
async fn export_uses_route_columns() {
  let mut e = escenario(20);
  e.vista.handle_navigation(&QueryParams::new()).await;
  let exportador = ExportadorRegistrado::default();
  let documento = e.vista.export(&exportador).unwrap();

  assert_eq!(documento.nombre, "productos.pdf");
  assert_eq!(documento.titulos(), vec!["nombre", "Precio", "existencias", "Calorias"]);
  assert_eq!(documento.filas[0], vec!["Croquetas", "6.5", "10", "300"]);
  assert_eq!(exportador.documentos().len(), 1);
}
