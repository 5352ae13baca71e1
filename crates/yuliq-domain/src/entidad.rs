// entidad.rs
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashSet;

/// Contrato común de los registros persistidos por el backend.
///
/// La identidad de un registro es su `id` numérico, asignado por el servidor.
/// Un registro sin `id` todavía no existe en el backend. Dos registros con el
/// mismo `id` son el mismo registro aunque difieran en el resto de campos.
pub trait Entidad: Clone + Default + Serialize + DeserializeOwned + Send + Sync + 'static {
  /// Nombre del recurso REST en plural (`productos`, `facturas`, ...).
  const RECURSO: &'static str;

  fn id(&self) -> Option<i64>;

  /// Fija el identificador asignado por el almacenamiento.
  fn set_id(&mut self, id: i64);

  /// Ruta relativa de la colección: `api/{recurso}`.
  fn resource_path() -> String {
    format!("api/{}", Self::RECURSO)
  }
}

/// Antepone a `coleccion` los candidatos cuyo id no esté ya presente.
///
/// - Los candidatos `None` se ignoran.
/// - Un candidato sin id nunca se añade.
/// - Entre candidatos con el mismo id sólo sobrevive el primero.
/// - Los añadidos quedan delante, en el orden en que llegaron; la colección
///   original conserva su orden detrás.
///
/// Si no queda ningún candidato tras descartar los `None` se devuelve la misma
/// colección recibida, sin copiarla.
pub fn add_to_collection_if_missing<T, I>(coleccion: Vec<T>, candidatos: I) -> Vec<T>
  where T: Entidad,
        I: IntoIterator,
        I::Item: Into<Option<T>>
{
  let presentes: Vec<T> = candidatos.into_iter().filter_map(Into::into).collect();
  if presentes.is_empty() {
    return coleccion;
  }
  let mut ids: HashSet<i64> = coleccion.iter().filter_map(Entidad::id).collect();
  let mut resultado: Vec<T> = presentes.into_iter()
                                       .filter(|candidato| match candidato.id() {
                                         Some(id) => ids.insert(id),
                                         None => false,
                                       })
                                       .collect();
  resultado.extend(coleccion);
  resultado
}

/// Devuelve la instancia ya seleccionada con el mismo id que `opcion`, o la
/// propia opción si no hay ninguna. Sirve para que los selectores múltiples
/// reconozcan como marcadas las entidades que vienen del registro editado.
pub fn seleccion_por_id<'a, T: Entidad>(opcion: &'a T, seleccionados: Option<&'a [T]>) -> &'a T {
  seleccionados.and_then(|lista| lista.iter().find(|s| s.id() == opcion.id()))
               .unwrap_or(opcion)
}
