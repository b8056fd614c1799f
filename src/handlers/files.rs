//! # Handlers de Archivos
//! src/handlers/files.rs
//!
//! - GET /files/{name}: Lee `{name}` del directorio base
//! - POST /files/{name}: Escribe el body del request en `{name}`
//!
//! El nombre se une al directorio base tal cual, sin sanitizar.
//! Las escrituras concurrentes sobre el mismo archivo no se sincronizan.

use crate::http::{Request, Response, StatusCode};
use crate::router::RouteContext;
use std::fs;
use std::path::PathBuf;
use tracing::{debug, warn};

/// Resuelve `/files/{name}` contra el directorio base
fn resolve(req: &Request, ctx: &RouteContext) -> Option<PathBuf> {
    req.segment(1).map(|name| ctx.files_dir.join(name))
}

/// Handler para GET /files/{name}
///
/// 200 con `Content-Type: application/octet-stream` y el contenido del
/// archivo, o 404 si no existe.
pub fn get_file_handler(req: &Request, ctx: &RouteContext) -> Response {
    let Some(path) = resolve(req, ctx) else {
        return Response::new(StatusCode::NotFound);
    };

    if !path.is_file() {
        debug!(path = %path.display(), "Archivo no encontrado");
        return Response::new(StatusCode::NotFound);
    }

    match fs::read(&path) {
        Ok(content) => Response::new(StatusCode::Ok)
            .with_header("Content-Type", "application/octet-stream")
            .with_body_bytes(content),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "No se pudo leer el archivo");
            Response::new(StatusCode::NotFound)
        }
    }
}

/// Handler para POST /files/{name}
///
/// Escribe el body completo, sobrescribiendo si el archivo ya existe.
/// 201 si se pudo escribir, 400 ante cualquier error de I/O (el detalle
/// queda solo en el log).
pub fn post_file_handler(req: &Request, ctx: &RouteContext) -> Response {
    let Some(path) = resolve(req, ctx) else {
        return Response::new(StatusCode::NotFound);
    };

    match fs::write(&path, req.body()) {
        Ok(()) => {
            debug!(path = %path.display(), bytes = req.body().len(), "Archivo escrito");
            Response::new(StatusCode::Created)
        }
        Err(e) => {
            warn!(path = %path.display(), error = %e, "No se pudo escribir el archivo");
            Response::new(StatusCode::BadRequest)
        }
    }
}
