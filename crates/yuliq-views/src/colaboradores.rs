// Archivo: colaboradores.rs
// Propósito: contratos de los colaboradores externos de las vistas
// (enrutador, difusor de alertas, host de diálogos modales y motor de
// exportación). Se inyectan explícitamente en cada vista.
use crate::errors::Result;
use crate::exportacion::Documento;
use async_trait::async_trait;
use indexmap::IndexMap;

/// Parámetros de query de una ruta, en orden de inserción.
pub type QueryParams = IndexMap<String, String>;

/// Enrutador de la aplicación.
pub trait Navegador: Send + Sync {
    /// Navega a `ruta` con los parámetros dados (reescribe la URL).
    fn navigate(&self, ruta: &str, params: &QueryParams);
    /// Vuelve a la vista anterior del historial.
    fn back(&self);
}

/// Evento enviado al difusor de alertas.
#[derive(Debug, Clone, PartialEq)]
pub struct EventoAlerta {
    /// Nombre del canal (`yuliqApp.error`, `yuliqApp.httpError`).
    pub nombre: String,
    /// Clave i18n del mensaje.
    pub clave: String,
    pub mensaje: String,
    pub parametros: IndexMap<String, String>,
}

impl EventoAlerta {
    pub fn new(nombre: impl Into<String>, clave: impl Into<String>, mensaje: impl Into<String>) -> Self {
        Self { nombre: nombre.into(),
               clave: clave.into(),
               mensaje: mensaje.into(),
               parametros: IndexMap::new() }
    }

    pub fn con_parametro(mut self, clave: impl Into<String>, valor: impl Into<String>) -> Self {
        self.parametros.insert(clave.into(), valor.into());
        self
    }
}

/// Difusor de alertas (notificaciones al usuario).
pub trait Alertas: Send + Sync {
    fn broadcast(&self, evento: EventoAlerta);
}

/// Resultado con el que se cierra un diálogo modal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultadoDialogo {
    Deleted,
    Dismissed,
}

/// Host de diálogos modales: muestra la pregunta y espera la decisión del
/// usuario (`true` = confirmar).
#[async_trait]
pub trait DialogoHost: Send + Sync {
    async fn confirmar(&self, pregunta: &str) -> bool;
}

/// Motor de exportación (PDF u otro formato).
pub trait Exportador: Send + Sync {
    fn exportar(&self, documento: &Documento) -> Result<()>;
}
