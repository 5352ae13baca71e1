use yuliq_api::{ApiError, Catalogo, EntityService, InMemoryEntityService, Llamada, QueryOptions};
use yuliq_domain::{DomainStubs, Entidad, FilterMap, Producto};

#[tokio::test]
async fn create_assigns_ids_and_records_body() {
  let servicio: InMemoryEntityService<Producto> = InMemoryEntityService::new();
  let nuevo = Producto { nombre_producto: Some("Gazpacho".into()), ..Default::default() };
  let primero = servicio.create(&nuevo).await.unwrap().body.unwrap();
  let segundo = servicio.create(&nuevo).await.unwrap().body.unwrap();
  assert_eq!(primero.id(), Some(1));
  assert_eq!(segundo.id(), Some(2));
  assert_eq!(servicio.records().len(), 2);
  assert_eq!(servicio.sent_bodies()[0]["nombreProducto"], "Gazpacho");
  assert!(servicio.sent_bodies()[0].get("id").is_none());
}

#[tokio::test]
async fn query_pages_by_id_and_reports_total() {
  let servicio = InMemoryEntityService::with_records(DomainStubs::productos());
  let respuesta = servicio.query(&QueryOptions::paged(1, 3, vec!["id,asc".into()])).await.unwrap();
  assert_eq!(respuesta.total_count, Some(4));
  let ids: Vec<_> = respuesta.into_records().iter().filter_map(Entidad::id).collect();
  assert_eq!(ids, vec![4]);
  assert!(matches!(&servicio.calls()[0], Llamada::Query(o) if o.page == Some(1)));
}

#[tokio::test]
async fn partial_update_merges_present_fields_only() {
  let servicio = InMemoryEntityService::with_records(DomainStubs::productos());
  let cambio = Producto { existencias: Some(1), ..Producto::with_id(3) };
  let fusionado = servicio.partial_update(&cambio).await.unwrap().body.unwrap();
  assert_eq!(fusionado.existencias, Some(1));
  assert_eq!(fusionado.nombre_producto.as_deref(), Some("Paella"));
  assert_eq!(servicio.get(3), Some(fusionado));
}

#[tokio::test]
async fn missing_records_are_not_found() {
  let servicio: InMemoryEntityService<Producto> = InMemoryEntityService::new();
  assert!(matches!(servicio.find(8).await, Err(ApiError::NoEncontrado(_))));
  assert_eq!(servicio.delete(8).await.unwrap_err().status(), Some(404));
  assert!(matches!(servicio.update(&Producto::with_id(8)).await, Err(ApiError::NoEncontrado(_))));
}

#[tokio::test]
async fn scripted_failures_are_consumed_in_order() {
  let servicio = InMemoryEntityService::with_records(DomainStubs::productos());
  servicio.fail_next(1);
  assert_eq!(servicio.count(&FilterMap::new()).await.unwrap_err().status(), Some(500));
  assert_eq!(servicio.count(&FilterMap::new()).await.unwrap(), 4);
  assert_eq!(servicio.calls().len(), 2);
}

#[tokio::test]
async fn in_memory_catalog_is_seeded() {
  let catalogo = Catalogo::en_memoria();
  let productos = catalogo.productos.query(&QueryOptions::default()).await.unwrap();
  assert_eq!(productos.total_count, Some(4));
  let users = catalogo.users.find(1).await.unwrap().body.unwrap();
  assert_eq!(users.login.as_deref(), Some("admin"));
  assert_eq!(catalogo.items_per_page, yuliq_api::ITEMS_PER_PAGE);
}
