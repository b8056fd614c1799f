//! # Módulo HTTP
//!
//! Implementación mínima de HTTP/1.1 sin librerías de alto nivel:
//!
//! - Parsing de requests
//! - Construcción de responses
//! - Status codes
//! - Negociación de `Accept-Encoding` (gzip)
//!
//! ### Formato de Request
//!
//! ```text
//! GET /echo/abc HTTP/1.1\r\n
//! Accept-Encoding: gzip\r\n
//! \r\n
//! ```
//!
//! ### Formato de Response
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 3\r\n
//! \r\n
//! abc
//! ```
//!
//! No hay keep-alive ni chunked transfer encoding: una conexión, un request.

pub mod encoding; // Compresión de respuestas
pub mod request; // Parsing de HTTP requests
pub mod response; // Construcción de HTTP responses
pub mod status; // Códigos de estado HTTP

// Re-exportamos los tipos principales para usar `http::Request`
pub use encoding::ContentEncoding;
pub use request::{Method, ParseError, Request};
pub use response::Response;
pub use status::StatusCode;
