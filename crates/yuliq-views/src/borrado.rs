// Archivo: borrado.rs
// Propósito: diálogo de confirmación de borrado. Es el propio diálogo quien
// llama a `delete` y se cierra con `Deleted`; descartarlo no tiene efectos.
use crate::colaboradores::{DialogoHost, ResultadoDialogo};
use crate::errors::Result;
use std::sync::Arc;
use yuliq_api::{ApiError, EntityService};
use yuliq_domain::Entidad;

/// Diálogo de borrado de un registro.
pub struct DeleteDialog<T: Entidad> {
    service: Arc<dyn EntityService<T>>,
    registro: T,
}

impl<T: Entidad> DeleteDialog<T> {
    pub fn new(service: Arc<dyn EntityService<T>>, registro: T) -> Self {
        Self { service, registro }
    }

    pub fn registro(&self) -> &T {
        &self.registro
    }

    pub fn pregunta(&self) -> String {
        match self.registro.id() {
            Some(id) => format!("¿Seguro que quiere eliminar {} {}?", T::RECURSO, id),
            None => format!("¿Seguro que quiere eliminar este registro de {}?", T::RECURSO),
        }
    }

    /// Cierra el diálogo sin borrar.
    pub fn cancel(&self) -> ResultadoDialogo {
        ResultadoDialogo::Dismissed
    }

    /// Borra el registro `id`. Si el borrado falla el error se propaga y el
    /// diálogo no se da por cerrado con `Deleted`.
    pub async fn confirm_delete(&self, id: i64) -> Result<ResultadoDialogo> {
        self.service.delete(id).await?;
        log::info!("{} {} eliminado desde el diálogo", T::RECURSO, id);
        Ok(ResultadoDialogo::Deleted)
    }

    /// Muestra el diálogo en `host` y actúa según la respuesta.
    pub async fn abrir(&self, host: &dyn DialogoHost) -> Result<ResultadoDialogo> {
        if !host.confirmar(&self.pregunta()).await {
            return Ok(self.cancel());
        }
        let id = self.registro.id().ok_or(ApiError::SinIdentificador(T::RECURSO))?;
        self.confirm_delete(id).await
    }
}
