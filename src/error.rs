//! # Errores del Servidor
//!
//! Errores fatales para el proceso (bind, configuración) y errores de I/O
//! de una conexión, que solo terminan esa conexión.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("No se pudo escuchar en {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Error de I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuración inválida: {0}")]
    Config(String),

    #[error("No se pudo leer el archivo de configuración '{}': {source}", path.display())]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("No se pudo parsear el archivo de configuración '{}': {source}", path.display())]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ServerError>;
