//! # Configuración del Servidor
//! src/config.rs
//!
//! La configuración sale de tres fuentes, en orden de precedencia:
//!
//! 1. Argumentos CLI / variables de entorno
//! 2. Archivo TOML opcional (`--config`)
//! 3. Valores por defecto
//!
//! ## Ejemplos de uso
//!
//! ### CLI
//! ```bash
//! ./codecrafters_http --directory /tmp/files --port 4221
//! ```
//!
//! ### Variables de entorno
//! ```bash
//! HTTP_PORT=8080 FILES_DIR=/tmp/files ./codecrafters_http
//! ```
//!
//! ### Archivo TOML
//! ```toml
//! [server]
//! host = "127.0.0.1"
//! port = 4221
//! directory = "/tmp/files"
//!
//! [logging]
//! level = "debug"
//! ```

use crate::error::{Result, ServerError};
use clap::Parser;
use serde::Deserialize;
use std::path::{Path, PathBuf};

pub const DEFAULT_PORT: u16 = 4221;
pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Argumentos de línea de comandos
#[derive(Debug, Clone, Parser)]
#[command(name = "codecrafters_http")]
#[command(about = "Servidor HTTP/1.1 mínimo sobre sockets TCP")]
#[command(version = "0.1.0")]
pub struct CliArgs {
    /// Archivo TOML de configuración
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Puerto en el que escucha el servidor
    #[arg(short, long, env = "HTTP_PORT")]
    pub port: Option<u16>,

    /// Host/IP en el que escucha
    #[arg(long, env = "HTTP_HOST")]
    pub host: Option<String>,

    /// Directorio base para /files/{name}
    #[arg(short, long, env = "FILES_DIR")]
    pub directory: Option<PathBuf>,

    /// Nivel de log (trace, debug, info, warn, error)
    #[arg(long, env = "LOG_LEVEL")]
    pub log_level: Option<String>,
}

/// Estructura del archivo TOML
#[derive(Debug, Default, Deserialize)]
pub struct FileConfig {
    #[serde(default)]
    pub server: ServerSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Default, Deserialize)]
pub struct ServerSection {
    pub host: Option<String>,
    pub port: Option<u16>,
    pub directory: Option<PathBuf>,
}

#[derive(Debug, Default, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
}

impl FileConfig {
    /// Lee y parsea un archivo de configuración
    pub fn from_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|source| ServerError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;

        toml::from_str(&contents).map_err(|source| ServerError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Configuración final del servidor
#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub host: String,

    /// Directorio base para operaciones de archivos
    pub directory: PathBuf,

    pub log_level: String,
}

impl Config {
    /// Carga la configuración desde los argumentos del proceso
    pub fn load() -> Result<Self> {
        Self::from_args(CliArgs::parse())
    }

    /// Combina los argumentos CLI con el archivo TOML (si se indicó)
    pub fn from_args(cli: CliArgs) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::from_path(path)?,
            None => FileConfig::default(),
        };

        Ok(Self::merge(cli, file))
    }

    fn merge(cli: CliArgs, file: FileConfig) -> Self {
        let defaults = Config::default();

        Config {
            port: cli.port.or(file.server.port).unwrap_or(defaults.port),
            host: cli.host.or(file.server.host).unwrap_or(defaults.host),
            directory: cli
                .directory
                .or(file.server.directory)
                .unwrap_or(defaults.directory),
            log_level: cli
                .log_level
                .or(file.logging.level)
                .unwrap_or(defaults.log_level),
        }
    }

    /// Obtiene la dirección completa para bind (host:port)
    ///
    /// # Ejemplo
    /// ```rust
    /// use codecrafters_http::config::Config;
    ///
    /// let config = Config::default();
    /// assert_eq!(config.address(), "0.0.0.0:4221");
    /// ```
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Valida la configuración
    pub fn validate(&self) -> Result<()> {
        if self.host.trim().is_empty() {
            return Err(ServerError::Config("host must not be empty".to_string()));
        }

        if self.directory.exists() && !self.directory.is_dir() {
            return Err(ServerError::Config(format!(
                "{} is not a directory",
                self.directory.display()
            )));
        }

        Ok(())
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            host: DEFAULT_HOST.to_string(),
            directory: PathBuf::from("."),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}
