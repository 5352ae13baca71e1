use chrono::{TimeZone, Utc};
use mockito::Matcher;
use serde_json::json;
use yuliq_api::{ApiConfig, ApiError, EntityService, QueryOptions, RestEntityService};
use yuliq_domain::{Carrito, Filtro, Producto, ProductoFilter};

fn servicio<T: yuliq_domain::Entidad>(server: &mockito::Server) -> RestEntityService<T> {
  RestEntityService::new(&ApiConfig::new(server.url())).unwrap()
}

#[tokio::test]
async fn query_sends_filters_paging_and_every_sort_entry() {
  let mut server = mockito::Server::new_async().await;
  let m = server.mock("GET", "/api/productos")
                .match_query(Matcher::AllOf(vec![Matcher::UrlEncoded("nombreProducto.contains".into(), "tor".into()),
                                                 Matcher::UrlEncoded("page".into(), "2".into()),
                                                 Matcher::UrlEncoded("size".into(), "20".into()),
                                                 Matcher::Regex("sort=precio%2Cdesc&sort=id".into())]))
                .with_status(200)
                .with_header("content-type", "application/json")
                .with_header("X-Total-Count", "45")
                .with_body(r#"[{"id":7,"nombreProducto":"Tortilla","tipoproducto":"ENTRANTE"}]"#)
                .expect(1)
                .create_async()
                .await;

  let filtro = ProductoFilter { nombre: Some("tor".into()), ..Default::default() };
  let opciones = QueryOptions::paged(2, 20, vec!["precio,desc".into(), "id".into()]).with_filter(filtro.to_query_map());
  let respuesta = servicio::<Producto>(&server).query(&opciones).await.unwrap();

  m.assert_async().await;
  assert_eq!(respuesta.status, 200);
  assert_eq!(respuesta.total_count, Some(45));
  let registros = respuesta.into_records();
  assert_eq!(registros.len(), 1);
  assert_eq!(registros[0].nombre_producto.as_deref(), Some("Tortilla"));
}

#[tokio::test]
async fn query_without_total_header_leaves_count_absent() {
  let mut server = mockito::Server::new_async().await;
  let _m = server.mock("GET", "/api/productos")
                 .match_query(Matcher::Any)
                 .with_status(200)
                 .with_body("[]")
                 .create_async()
                 .await;
  let respuesta = servicio::<Producto>(&server).query(&QueryOptions::default()).await.unwrap();
  assert_eq!(respuesta.total_count, None);
  assert_eq!(respuesta.body, Some(vec![]));
}

#[tokio::test]
async fn query_with_unparsable_total_header_leaves_count_absent() {
  let mut server = mockito::Server::new_async().await;
  let _m = server.mock("GET", "/api/productos")
                 .match_query(Matcher::Any)
                 .with_status(200)
                 .with_header("X-Total-Count", "abc")
                 .with_body("[]")
                 .create_async()
                 .await;
  let respuesta = servicio::<Producto>(&server).query(&QueryOptions::default()).await.unwrap();
  assert_eq!(respuesta.total_count, None);
  assert_eq!(respuesta.status, 200);
}

#[tokio::test]
async fn create_posts_body_with_iso_date_and_no_id() {
  let mut server = mockito::Server::new_async().await;
  let m = server.mock("POST", "/api/carritos")
                .match_body(Matcher::PartialJson(json!({"cantidad": 2, "fechaCarrito": "2021-11-15T00:00:00.000Z"})))
                .with_status(201)
                .with_body(r#"{"id":12,"cantidad":2,"fechaCarrito":"2021-11-15T00:00:00Z"}"#)
                .expect(1)
                .create_async()
                .await;

  let nuevo = Carrito { cantidad: Some(2),
                        fecha_carrito: Utc.with_ymd_and_hms(2021, 11, 15, 0, 0, 0).single(),
                        ..Default::default() };
  let enviado = serde_json::to_value(&nuevo).unwrap();
  assert!(enviado.get("id").is_none());
  let respuesta = servicio::<Carrito>(&server).create(&nuevo).await.unwrap();

  m.assert_async().await;
  assert_eq!(respuesta.status, 201);
  let creado = respuesta.body.unwrap();
  assert_eq!(creado.id, Some(12));
  assert_eq!(creado.fecha_carrito, nuevo.fecha_carrito);
}

#[tokio::test]
async fn update_puts_to_item_url() {
  let mut server = mockito::Server::new_async().await;
  let m = server.mock("PUT", "/api/productos/123")
                .match_body(Matcher::PartialJson(json!({"id": 123, "precio": 9.5})))
                .with_status(200)
                .with_body(r#"{"id":123,"precio":9.5}"#)
                .expect(1)
                .create_async()
                .await;
  let producto = Producto { precio: Some(9.5), ..Producto::with_id(123) };
  let respuesta = servicio::<Producto>(&server).update(&producto).await.unwrap();
  m.assert_async().await;
  assert_eq!(respuesta.body.and_then(|p| p.id), Some(123));
}

#[tokio::test]
async fn partial_update_uses_merge_patch_content_type() {
  let mut server = mockito::Server::new_async().await;
  let m = server.mock("PATCH", "/api/productos/5")
                .match_header("content-type", "application/merge-patch+json")
                .with_status(200)
                .with_body(r#"{"id":5,"existencias":3}"#)
                .expect(1)
                .create_async()
                .await;
  let cambio = Producto { existencias: Some(3), ..Producto::with_id(5) };
  let respuesta = servicio::<Producto>(&server).partial_update(&cambio).await.unwrap();
  m.assert_async().await;
  assert_eq!(respuesta.body.and_then(|p| p.existencias), Some(3));
}

#[tokio::test]
async fn update_without_id_fails_before_sending() {
  let server = mockito::Server::new_async().await;
  let err = servicio::<Producto>(&server).update(&Producto::default()).await.unwrap_err();
  assert!(matches!(err, ApiError::SinIdentificador("productos")));
}

#[tokio::test]
async fn find_with_empty_body_returns_none() {
  let mut server = mockito::Server::new_async().await;
  let _m = server.mock("GET", "/api/productos/9").with_status(200).create_async().await;
  let respuesta = servicio::<Producto>(&server).find(9).await.unwrap();
  assert_eq!(respuesta.status, 200);
  assert!(respuesta.body.is_none());
}

#[tokio::test]
async fn error_status_surfaces_as_http_error() {
  let mut server = mockito::Server::new_async().await;
  let _m = server.mock("GET", "/api/productos/404")
                 .with_status(404)
                 .with_body(r#"{"title":"Not Found"}"#)
                 .create_async()
                 .await;
  let err = servicio::<Producto>(&server).find(404).await.unwrap_err();
  assert_eq!(err.status(), Some(404));
  match err {
    ApiError::Http { mensaje, .. } => assert!(mensaje.contains("Not Found")),
    otro => panic!("error inesperado: {:?}", otro),
  }
}

#[tokio::test]
async fn delete_returns_status_only() {
  let mut server = mockito::Server::new_async().await;
  let m = server.mock("DELETE", "/api/productos/3").with_status(204).expect(1).create_async().await;
  let status = servicio::<Producto>(&server).delete(3).await.unwrap();
  m.assert_async().await;
  assert_eq!(status, 204);
}

#[tokio::test]
async fn count_hits_count_endpoint_with_filters() {
  let mut server = mockito::Server::new_async().await;
  let m = server.mock("GET", "/api/productos/count")
                .match_query(Matcher::UrlEncoded("tipoproducto.equals".into(), "PRINCIPAL".into()))
                .with_status(200)
                .with_body("7")
                .expect(1)
                .create_async()
                .await;
  let filtro = ProductoFilter { tipo: Some("PRINCIPAL".into()), ..Default::default() };
  let total = servicio::<Producto>(&server).count(&filtro.to_query_map()).await.unwrap();
  m.assert_async().await;
  assert_eq!(total, 7);
}

#[test]
fn resource_url_joins_base_and_path() {
  let config = ApiConfig::new("http://backend:8080/");
  let servicio = RestEntityService::<Producto>::new(&config).unwrap();
  assert_eq!(servicio.resource_url(), "http://backend:8080/api/productos");
}
