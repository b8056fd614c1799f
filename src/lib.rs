//! # Codecrafters HTTP
//! src/lib.rs
//!
//! Servidor HTTP/1.1 mínimo escrito directamente sobre sockets TCP, sin
//! librerías HTTP. Atiende un request por conexión con estas rutas:
//!
//! - `/` → 200 sin body
//! - `GET /echo/{text}` → devuelve `{text}`
//! - `GET /user-agent` → devuelve el header `User-Agent`
//! - `GET /files/{name}` / `POST /files/{name}` → lee / escribe archivos
//!
//! Si el cliente acepta `gzip`, el body de la respuesta se comprime.
//!
//! ## Arquitectura
//!
//! - `http`: Parsing de requests, construcción de responses, gzip
//! - `router`: Enrutamiento por (método, primer segmento)
//! - `handlers`: Lógica de cada ruta
//! - `server`: Loop de accept y manejo de conexiones
//! - `config`: CLI, variables de entorno y archivo TOML
//! - `error`: Errores del servidor
//!
//! ## Ejemplo de uso
//!
//! ```no_run
//! use codecrafters_http::config::Config;
//! use codecrafters_http::server::Server;
//!
//! let config = Config::default();
//! let mut server = Server::new(config);
//! server.run().expect("Error al iniciar servidor");
//! ```

pub mod config;
pub mod error;
pub mod handlers;
pub mod http;
pub mod router;
pub mod server;
