//! # Parsing de Requests HTTP/1.1
//! src/http/request.rs
//!
//! Parser HTTP escrito a mano sobre el buffer que se leyó del socket.
//!
//! ## Formato de un Request
//!
//! ```text
//! POST /files/notas.txt HTTP/1.1\r\n
//! Host: localhost:4221\r\n
//! Content-Length: 5\r\n
//! \r\n
//! hola!
//! ```
//!
//! ## Componentes
//!
//! 1. **Request Line**: `METHOD /path VERSION`
//! 2. **Headers**: Pares `Name: Value` (uno por línea)
//! 3. **Empty Line**: `\r\n` que separa headers del body
//! 4. **Body**: Todo lo que sigue a la línea vacía, acotado por
//!    `Content-Length` cuando el cliente lo declara

use std::collections::HashMap;
use std::str::FromStr;
use thiserror::Error;

/// Separador entre la cabecera y el body
const HEAD_TERMINATOR: &[u8] = b"\r\n\r\n";

/// Métodos HTTP soportados
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// GET - Obtener un recurso
    GET,

    /// POST - Enviar datos a un recurso
    POST,
}

impl Method {
    /// Convierte el método a string
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::POST => "POST",
        }
    }
}

impl FromStr for Method {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "GET" => Ok(Method::GET),
            "POST" => Ok(Method::POST),
            _ => Err(ParseError::UnsupportedMethod(s.to_string())),
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errores que pueden ocurrir durante el parsing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Request vacío
    #[error("Empty request")]
    EmptyRequest,

    /// La request line no tiene METHOD PATH VERSION
    #[error("Invalid request line: {0:?}")]
    InvalidRequestLine(String),

    /// Método HTTP no soportado
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    /// Header sin ':'
    #[error("Invalid header: {0:?}")]
    InvalidHeader(String),
}

/// Representa un request HTTP parseado
#[derive(Debug, Clone)]
pub struct Request {
    method: Method,

    /// Path tal como vino en la request line (ej: "/echo/abc")
    path: String,

    /// Segmentos no vacíos del path (ej: ["echo", "abc"])
    segments: Vec<String>,

    /// Versión HTTP, solo informativa
    version: String,

    /// Headers con el nombre tal cual llegó; el último repetido gana
    headers: HashMap<String, String>,

    body: Vec<u8>,
}

impl Request {
    /// Parsea un request HTTP desde los bytes leídos del socket
    ///
    /// # Ejemplo
    ///
    /// ```
    /// use codecrafters_http::http::{Method, Request};
    ///
    /// let raw = b"GET /echo/abc HTTP/1.1\r\nUser-Agent: curl\r\n\r\n";
    /// let request = Request::parse(raw).unwrap();
    ///
    /// assert_eq!(request.method(), Method::GET);
    /// assert_eq!(request.segments(), ["echo", "abc"]);
    /// assert_eq!(request.header("User-Agent"), Some("curl"));
    /// ```
    pub fn parse(buffer: &[u8]) -> Result<Self, ParseError> {
        // Separar cabecera y body en la primera línea vacía
        let (head, rest) = match find_subslice(buffer, HEAD_TERMINATOR) {
            Some(pos) => (&buffer[..pos], &buffer[pos + HEAD_TERMINATOR.len()..]),
            None => (buffer, &buffer[buffer.len()..]),
        };

        let head = String::from_utf8_lossy(head);
        if head.trim().is_empty() {
            return Err(ParseError::EmptyRequest);
        }

        let mut lines = head.split("\r\n");
        let request_line = lines.next().unwrap_or_default();
        let (method, path, version) = Self::parse_request_line(request_line)?;
        let headers = Self::parse_headers(lines)?;

        // Content-Length acota el body; sin él usamos el resto del buffer
        let body_len = headers
            .get("Content-Length")
            .and_then(|value| value.parse::<usize>().ok())
            .map_or(rest.len(), |declared| declared.min(rest.len()));

        Ok(Request {
            method,
            segments: split_segments(&path),
            path,
            version,
            headers,
            body: rest[..body_len].to_vec(),
        })
    }

    /// Parsea la request line
    ///
    /// Formato: `GET /path HTTP/1.1`. Los tokens extra se ignoran.
    fn parse_request_line(line: &str) -> Result<(Method, String, String), ParseError> {
        let mut parts = line.split(' ');

        let (method, path, version) = match (parts.next(), parts.next(), parts.next()) {
            (Some(m), Some(p), Some(v)) => (m, p, v),
            _ => return Err(ParseError::InvalidRequestLine(line.to_string())),
        };

        Ok((method.parse()?, path.to_string(), version.to_string()))
    }

    fn parse_headers<'a>(
        lines: impl Iterator<Item = &'a str>,
    ) -> Result<HashMap<String, String>, ParseError> {
        let mut headers = HashMap::new();

        for line in lines.filter(|line| !line.is_empty()) {
            let (name, value) = line
                .split_once(':')
                .ok_or_else(|| ParseError::InvalidHeader(line.to_string()))?;
            headers.insert(name.to_string(), value.trim().to_string());
        }

        Ok(headers)
    }

    // === Métodos públicos para acceder a los campos ===

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn path(&self) -> &str {
        &self.path
    }

    /// Segmentos no vacíos del path, en orden
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// Segmento en la posición `index`, si existe
    pub fn segment(&self, index: usize) -> Option<&str> {
        self.segments.get(index).map(|s| s.as_str())
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Obtiene un header específico (el nombre distingue mayúsculas)
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).map(|s| s.as_str())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

/// Divide un path por '/' descartando segmentos vacíos
fn split_segments(path: &str) -> Vec<String> {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
        .collect()
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    haystack
        .windows(needle.len())
        .position(|window| window == needle)
}
