// fecha.rs
//
// Conversión de fechas entre el formato de la API (ISO 8601 con milisegundos
// y sufijo `Z`), el formato de los formularios (`YYYY-MM-DDTHH:mm`, hora
// local) y `DateTime<Utc>` en memoria.
use chrono::{DateTime, Local, NaiveDateTime, SecondsFormat, TimeZone, Utc};

/// Formato de los campos de fecha-hora en los formularios.
pub const DATE_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M";

/// Representación ISO 8601 usada en los cuerpos JSON.
pub fn a_iso(fecha: &DateTime<Utc>) -> String {
  fecha.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Interpreta una fecha recibida del servidor. Devuelve `None` si no es
/// ISO 8601 válida.
pub fn desde_iso(valor: &str) -> Option<DateTime<Utc>> {
  DateTime::parse_from_rfc3339(valor.trim()).ok().map(|f| f.with_timezone(&Utc))
}

/// Inicio del día actual en hora local, expresado en UTC.
pub fn inicio_del_dia() -> DateTime<Utc> {
  inicio_del_dia_de(Local::now())
}

pub fn inicio_del_dia_de<Tz: TimeZone>(momento: DateTime<Tz>) -> DateTime<Utc> {
  let zona = momento.timezone();
  let medianoche = momento.date_naive().and_hms_opt(0, 0, 0).unwrap_or_default();
  zona.from_local_datetime(&medianoche)
      .earliest()
      .map(|f| f.with_timezone(&Utc))
      .unwrap_or_else(|| momento.with_timezone(&Utc))
}

/// Valor de un campo de formulario a partir de una fecha.
pub fn a_formulario(fecha: &DateTime<Utc>) -> String {
  fecha.with_timezone(&Local).format(DATE_TIME_FORMAT).to_string()
}

/// Lee un campo de formulario. Un valor vacío o inválido se trata como
/// ausente.
pub fn desde_formulario(valor: &str) -> Option<DateTime<Utc>> {
  let valor = valor.trim();
  if valor.is_empty() {
    return None;
  }
  let ingenua = NaiveDateTime::parse_from_str(valor, DATE_TIME_FORMAT).ok()?;
  Local.from_local_datetime(&ingenua).earliest().map(|f| f.with_timezone(&Utc))
}

/// Módulo serde para campos `Option<DateTime<Utc>>`.
///
/// Serializa en ISO 8601 con milisegundos. Al deserializar, `null`, la cadena
/// vacía o una fecha ilegible producen `None`.
pub mod iso_opcional {
  use chrono::{DateTime, Utc};
  use serde::{Deserialize, Deserializer, Serializer};

  pub fn serialize<S>(fecha: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
    where S: Serializer
  {
    match fecha {
      Some(f) => serializer.serialize_str(&super::a_iso(f)),
      None => serializer.serialize_none(),
    }
  }

  pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
    where D: Deserializer<'de>
  {
    let valor: Option<String> = Option::deserialize(deserializer)?;
    Ok(match valor {
      Some(texto) if !texto.trim().is_empty() => {
        let fecha = super::desde_iso(&texto);
        if fecha.is_none() {
          log::warn!("fecha ilegible recibida del servidor: {}", texto);
        }
        fecha
      }
      _ => None,
    })
  }
}
