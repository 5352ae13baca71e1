// Archivo: stubs.rs
// Propósito: colaboradores en memoria que registran lo que reciben. Sirven
// para pruebas y para la ejecución sin interfaz.
use crate::colaboradores::{Alertas, DialogoHost, EventoAlerta, Exportador, Navegador, QueryParams};
use crate::errors::Result;
use crate::exportacion::Documento;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::sync::Mutex;

/// Destino de navegación registrado.
#[derive(Debug, Clone, PartialEq)]
pub enum Destino {
    Ruta(String, QueryParams),
    Atras,
}

/// Navegador que sólo anota las navegaciones.
#[derive(Debug, Default)]
pub struct NavegadorRegistrado {
    destinos: Mutex<Vec<Destino>>,
}

impl NavegadorRegistrado {
    pub fn destinos(&self) -> Vec<Destino> {
        self.destinos.lock().map(|d| d.clone()).unwrap_or_default()
    }

    /// Última ruta navegada (ignora los `back`).
    pub fn ultima_ruta(&self) -> Option<(String, QueryParams)> {
        self.destinos().into_iter().rev().find_map(|d| match d {
                                             Destino::Ruta(r, p) => Some((r, p)),
                                             Destino::Atras => None,
                                         })
    }

    pub fn veces_atras(&self) -> usize {
        self.destinos().iter().filter(|d| **d == Destino::Atras).count()
    }
}

impl Navegador for NavegadorRegistrado {
    fn navigate(&self, ruta: &str, params: &QueryParams) {
        if let Ok(mut d) = self.destinos.lock() {
            d.push(Destino::Ruta(ruta.to_string(), params.clone()));
        }
    }

    fn back(&self) {
        if let Ok(mut d) = self.destinos.lock() {
            d.push(Destino::Atras);
        }
    }
}

/// Alertas que se acumulan en memoria.
#[derive(Debug, Default)]
pub struct AlertasRegistradas {
    eventos: Mutex<Vec<EventoAlerta>>,
}

impl AlertasRegistradas {
    pub fn eventos(&self) -> Vec<EventoAlerta> {
        self.eventos.lock().map(|e| e.clone()).unwrap_or_default()
    }
}

impl Alertas for AlertasRegistradas {
    fn broadcast(&self, evento: EventoAlerta) {
        log::debug!("alerta {} ({})", evento.nombre, evento.clave);
        if let Ok(mut e) = self.eventos.lock() {
            e.push(evento);
        }
    }
}

/// Host de diálogos con respuestas predefinidas. Sin respuestas pendientes
/// el diálogo se descarta.
#[derive(Debug, Default)]
pub struct DialogoGuionado {
    respuestas: Mutex<VecDeque<bool>>,
    preguntas: Mutex<Vec<String>>,
}

impl DialogoGuionado {
    pub fn con_respuestas(respuestas: impl IntoIterator<Item = bool>) -> Self {
        Self { respuestas: Mutex::new(respuestas.into_iter().collect()),
               preguntas: Mutex::default() }
    }

    pub fn preguntas(&self) -> Vec<String> {
        self.preguntas.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

#[async_trait]
impl DialogoHost for DialogoGuionado {
    async fn confirmar(&self, pregunta: &str) -> bool {
        if let Ok(mut p) = self.preguntas.lock() {
            p.push(pregunta.to_string());
        }
        self.respuestas.lock().ok().and_then(|mut r| r.pop_front()).unwrap_or(false)
    }
}

/// Exportador que guarda los documentos recibidos.
#[derive(Debug, Default)]
pub struct ExportadorRegistrado {
    documentos: Mutex<Vec<Documento>>,
}

impl ExportadorRegistrado {
    pub fn documentos(&self) -> Vec<Documento> {
        self.documentos.lock().map(|d| d.clone()).unwrap_or_default()
    }
}

impl Exportador for ExportadorRegistrado {
    fn exportar(&self, documento: &Documento) -> Result<()> {
        if let Ok(mut d) = self.documentos.lock() {
            d.push(documento.clone());
        }
        Ok(())
    }
}
