// Archivo: exportacion.rs
// Propósito: construir la tabla exportable (columnas + filas de texto) a
// partir de los registros de la página actual.
use crate::errors::Result;
use serde::Serialize;
use serde_json::Value as JsonValue;

/// Columna exportada: campo JSON de la entidad y título visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Columna {
    pub campo: &'static str,
    pub titulo: &'static str,
}

impl Columna {
    pub const fn new(campo: &'static str, titulo: &'static str) -> Self {
        Self { campo, titulo }
    }
}

/// Tabla lista para el motor de exportación.
#[derive(Debug, Clone, PartialEq)]
pub struct Documento {
    /// Nombre del archivo de salida (`productos.pdf`).
    pub nombre: String,
    pub columnas: Vec<Columna>,
    pub filas: Vec<Vec<String>>,
}

impl Documento {
    /// Construye el documento leyendo cada campo de la forma serializada de
    /// los registros. Campos ausentes o nulos quedan vacíos.
    pub fn construir<T: Serialize>(nombre: impl Into<String>, columnas: &[Columna], registros: &[T]) -> Result<Self> {
        let mut filas = Vec::with_capacity(registros.len());
        for registro in registros {
            let valor = serde_json::to_value(registro)?;
            filas.push(columnas.iter().map(|c| celda(valor.get(c.campo))).collect());
        }
        Ok(Self { nombre: nombre.into(), columnas: columnas.to_vec(), filas })
    }

    pub fn titulos(&self) -> Vec<&'static str> {
        self.columnas.iter().map(|c| c.titulo).collect()
    }
}

fn celda(valor: Option<&JsonValue>) -> String {
    match valor {
        None | Some(JsonValue::Null) => String::new(),
        Some(JsonValue::String(s)) => s.clone(),
        Some(otro) => otro.to_string(),
    }
}
