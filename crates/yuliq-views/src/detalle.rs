// Archivo: detalle.rs
// Propósito: vista de detalle de un registro ya resuelto.
use crate::archivos::{self, ArchivoAbierto, ImagenAdjunta};
use crate::colaboradores::Navegador;
use crate::errors::{Result, ViewError};
use std::sync::Arc;
use yuliq_domain::Entidad;

pub struct DetailView<T: Entidad> {
    registro: T,
    navegador: Arc<dyn Navegador>,
}

impl<T: Entidad> DetailView<T> {
    pub fn new(registro: T, navegador: Arc<dyn Navegador>) -> Self {
        Self { registro, navegador }
    }

    pub fn registro(&self) -> &T {
        &self.registro
    }

    pub fn previous_state(&self) {
        self.navegador.back();
    }
}

impl<T: Entidad + ImagenAdjunta> DetailView<T> {
    pub fn byte_size(&self) -> Option<String> {
        self.registro.imagen().map(archivos::byte_size)
    }

    pub fn open_file(&self) -> Result<ArchivoAbierto> {
        let datos = self.registro.imagen().ok_or_else(|| ViewError::Archivo { clave: archivos::COULD_NOT_EXTRACT.into(),
                                                                               mensaje: format!("{} sin imagen", T::RECURSO) })?;
        archivos::open_file(datos, self.registro.imagen_content_type())
    }
}
