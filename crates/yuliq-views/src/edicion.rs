// Archivo: edicion.rs
// Propósito: controlador de las vistas de alta/edición. Rellena el
// formulario con el registro resuelto, carga las opciones de relación y
// guarda con create/update/partial_update.
use crate::archivos::{self, Archivo, ImagenAdjunta};
use crate::colaboradores::{Alertas, Navegador};
use crate::errors::Result;
use crate::formularios::EntityForm;
use std::sync::Arc;
use yuliq_api::{Catalogo, EntityService};
use yuliq_domain::Entidad;

/// Vista de edición del formulario `Fm`.
pub struct UpdateView<Fm: EntityForm> {
    service: Arc<dyn EntityService<Fm::Entidad>>,
    catalogo: Catalogo,
    navegador: Arc<dyn Navegador>,
    alertas: Arc<dyn Alertas>,
    form: Fm,
    opciones: Fm::Opciones,
    is_saving: bool,
    partial: bool,
}

impl<Fm: EntityForm> UpdateView<Fm> {
    pub fn new(catalogo: Catalogo, navegador: Arc<dyn Navegador>, alertas: Arc<dyn Alertas>) -> Self {
        Self { service: Fm::servicio(&catalogo),
               catalogo,
               navegador,
               alertas,
               form: Fm::default(),
               opciones: Fm::Opciones::default(),
               is_saving: false,
               partial: false }
    }

    /// Guarda los registros existentes con `partial_update` en lugar de
    /// `update`.
    pub fn with_partial_update(mut self) -> Self {
        self.partial = true;
        self
    }

    /// Prepara la vista con el registro resuelto por la ruta.
    pub async fn init(&mut self, mut registro: Fm::Entidad) {
        if registro.id().is_none() {
            Fm::preparar_nuevo(&mut registro);
        }
        self.form.update_form(&registro);
        self.opciones = Fm::cargar_opciones(&self.catalogo, &registro).await;
        log::debug!("formulario de {} listo (id {:?})", <Fm::Entidad as Entidad>::RECURSO, registro.id());
    }

    pub fn form(&self) -> &Fm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut Fm {
        &mut self.form
    }

    pub fn opciones(&self) -> &Fm::Opciones {
        &self.opciones
    }

    pub fn is_saving(&self) -> bool {
        self.is_saving
    }

    pub fn previous_state(&self) {
        self.navegador.back();
    }

    /// Envía el formulario: `update` (o `partial_update`) si tiene `id`,
    /// `create` si no. Con éxito vuelve a la vista anterior; con error el
    /// usuario sigue en el formulario. En ambos casos `is_saving` queda a
    /// `false`.
    pub async fn save(&mut self) -> Result<Fm::Entidad> {
        self.is_saving = true;
        let resultado = self.enviar().await;
        self.is_saving = false;
        match &resultado {
            Ok(guardado) => {
                log::info!("{} guardado (id {:?})", <Fm::Entidad as Entidad>::RECURSO, guardado.id());
                self.previous_state();
            }
            Err(e) => log::warn!("no se pudo guardar {}: {}", <Fm::Entidad as Entidad>::RECURSO, e),
        }
        resultado
    }

    async fn enviar(&self) -> Result<Fm::Entidad> {
        self.form.validar()?;
        let registro = self.form.create_from_form();
        let respuesta = match registro.id() {
            Some(_) if self.partial => self.service.partial_update(&registro).await?,
            Some(_) => self.service.update(&registro).await?,
            None => self.service.create(&registro).await?,
        };
        Ok(respuesta.body.unwrap_or(registro))
    }
}

impl<Fm: EntityForm + ImagenAdjunta> UpdateView<Fm> {
    pub fn byte_size(&self) -> Option<String> {
        self.form.imagen().map(archivos::byte_size)
    }

    /// Carga `archivo` en el campo de imagen. Los errores se notifican
    /// por las alertas además de devolverse.
    pub fn set_file_data(&mut self, archivo: Option<&Archivo>) -> Result<()> {
        archivos::load_file_to_form(&mut self.form, archivo, true).inspect_err(|e| archivos::notificar_error(self.alertas.as_ref(), e))
    }

    pub fn clear_input_image(&mut self) {
        archivos::clear_input_image(&mut self.form);
    }
}
