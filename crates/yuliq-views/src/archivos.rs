// Archivo: archivos.rs
// Propósito: utilidades de los campos binarios (imágenes en base64):
// tamaño legible, decodificación para abrirlos y carga de un archivo en el
// formulario con sus errores notificados como alertas.
use crate::colaboradores::{Alertas, EventoAlerta};
use crate::errors::{Result, ViewError};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use yuliq_domain::{Banner, Producto};

/// Canal de alertas de errores de la aplicación.
pub const ERROR_EVENT: &str = "yuliqApp.error";
pub const NOT_IMAGE: &str = "not.image";
pub const COULD_NOT_EXTRACT: &str = "could.not.extract";

/// Registro o formulario con un campo de imagen adjunta.
pub trait ImagenAdjunta {
    fn imagen(&self) -> Option<&str>;
    fn imagen_content_type(&self) -> Option<&str>;
    fn set_imagen(&mut self, datos: Option<String>, content_type: Option<String>);
}

impl ImagenAdjunta for Producto {
    fn imagen(&self) -> Option<&str> {
        self.imagen.as_deref()
    }

    fn imagen_content_type(&self) -> Option<&str> {
        self.imagen_content_type.as_deref()
    }

    fn set_imagen(&mut self, datos: Option<String>, content_type: Option<String>) {
        self.imagen = datos;
        self.imagen_content_type = content_type;
    }
}

impl ImagenAdjunta for Banner {
    fn imagen(&self) -> Option<&str> {
        self.imagen.as_deref()
    }

    fn imagen_content_type(&self) -> Option<&str> {
        self.imagen_content_type.as_deref()
    }

    fn set_imagen(&mut self, datos: Option<String>, content_type: Option<String>) {
        self.imagen = datos;
        self.imagen_content_type = content_type;
    }
}

/// Archivo elegido por el usuario.
#[derive(Debug, Clone, PartialEq)]
pub struct Archivo {
    pub nombre: String,
    pub content_type: String,
    pub contenido: Vec<u8>,
}

/// Archivo decodificado, listo para abrirse en un visor externo.
#[derive(Debug, Clone, PartialEq)]
pub struct ArchivoAbierto {
    pub content_type: String,
    pub contenido: Vec<u8>,
}

fn padding(base64: &str) -> usize {
    if base64.ends_with("==") {
        2
    } else if base64.ends_with('=') {
        1
    } else {
        0
    }
}

/// Bytes que ocupa el contenido codificado en `base64`.
pub fn size(base64: &str) -> usize {
    (base64.len() / 4 * 3).saturating_sub(padding(base64))
}

/// `1 234 bytes`: tamaño con los miles separados por espacios.
pub fn format_as_bytes(size: usize) -> String {
    let digitos = size.to_string();
    let mut salida = String::with_capacity(digitos.len() + digitos.len() / 3 + 6);
    for (i, c) in digitos.chars().enumerate() {
        if i > 0 && (digitos.len() - i) % 3 == 0 {
            salida.push(' ');
        }
        salida.push(c);
    }
    salida.push_str(" bytes");
    salida
}

pub fn byte_size(base64: &str) -> String {
    format_as_bytes(size(base64))
}

/// Decodifica el contenido para abrirlo. Sin tipo se asume
/// `application/octet-stream`.
pub fn open_file(base64: &str, content_type: Option<&str>) -> Result<ArchivoAbierto> {
    let contenido = STANDARD.decode(base64.trim())
                            .map_err(|e| ViewError::Archivo { clave: COULD_NOT_EXTRACT.into(), mensaje: e.to_string() })?;
    Ok(ArchivoAbierto { content_type: content_type.unwrap_or("application/octet-stream").to_string(), contenido })
}

/// Carga `archivo` en el campo de imagen de `destino`. Con `solo_imagenes`
/// se rechazan los tipos que no empiezan por `image/`.
pub fn load_file_to_form<D: ImagenAdjunta + ?Sized>(destino: &mut D, archivo: Option<&Archivo>, solo_imagenes: bool) -> Result<()> {
    let archivo = archivo.ok_or_else(|| ViewError::Archivo { clave: COULD_NOT_EXTRACT.into(),
                                                             mensaje: "Could not extract file".into() })?;
    if solo_imagenes && !archivo.content_type.starts_with("image/") {
        return Err(ViewError::Archivo { clave: NOT_IMAGE.into(),
                                        mensaje: format!("File was expected to be an image but was found to be '{}'",
                                                         archivo.content_type) });
    }
    destino.set_imagen(Some(STANDARD.encode(&archivo.contenido)), Some(archivo.content_type.clone()));
    log::debug!("archivo {} cargado ({})", archivo.nombre, archivo.content_type);
    Ok(())
}

/// Difunde un error de archivo como `yuliqApp.error` con clave
/// `error.file.{clave}`. Otros errores se ignoran.
pub fn notificar_error(alertas: &dyn Alertas, error: &ViewError) {
    if let ViewError::Archivo { clave, mensaje } = error {
        alertas.broadcast(EventoAlerta::new(ERROR_EVENT, format!("error.file.{}", clave), mensaje.clone()));
    }
}

/// Vacía el campo de imagen.
pub fn clear_input_image<D: ImagenAdjunta + ?Sized>(destino: &mut D) {
    destino.set_imagen(None, None);
}
