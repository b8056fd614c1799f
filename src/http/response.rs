//! # Construcción de Respuestas HTTP
//!
//! Builder de respuestas: los handlers van fijando status, headers y body,
//! y al final la respuesta se serializa una sola vez a bytes.
//!
//! ## Formato de una respuesta
//!
//! ```text
//! HTTP/1.1 200 OK\r\n
//! Content-Type: text/plain\r\n
//! Content-Length: 3\r\n
//! \r\n
//! abc
//! ```
//!
//! ## Ejemplo de uso
//!
//! ```
//! use codecrafters_http::http::{Response, StatusCode};
//!
//! let response = Response::new(StatusCode::Ok)
//!     .with_header("Content-Type", "text/plain")
//!     .with_body("abc");
//!
//! let bytes = response.to_bytes();
//! assert!(bytes.ends_with(b"Content-Length: 3\r\n\r\nabc"));
//! ```

use super::{ContentEncoding, StatusCode};

const CONTENT_LENGTH: &str = "Content-Length";

/// Representa una respuesta HTTP/1.1 completa
#[derive(Debug, Clone)]
pub struct Response {
    status: StatusCode,

    /// Headers en orden de inserción, sin nombres repetidos.
    /// `Content-Length` no se guarda aquí: se calcula al serializar.
    headers: Vec<(String, String)>,

    body: Vec<u8>,
}

impl Response {
    /// Crea una respuesta sin headers ni body
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }

    /// Agrega un header (versión builder)
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        self.set_header(name, value);
        self
    }

    /// Agrega un header a una respuesta existente
    ///
    /// Si el header ya existe se reemplaza su valor sin cambiar su posición.
    ///
    /// # Ejemplo
    /// ```
    /// use codecrafters_http::http::{Response, StatusCode};
    ///
    /// let mut response = Response::new(StatusCode::Ok);
    /// response.set_header("Content-Type", "text/plain");
    /// response.set_header("Content-Type", "application/octet-stream");
    /// assert_eq!(response.header("Content-Type"), Some("application/octet-stream"));
    /// ```
    pub fn set_header(&mut self, name: &str, value: &str) {
        if name.eq_ignore_ascii_case(CONTENT_LENGTH) {
            return;
        }

        match self.headers.iter_mut().find(|(existing, _)| existing == name) {
            Some((_, existing_value)) => *existing_value = value.to_string(),
            None => self.headers.push((name.to_string(), value.to_string())),
        }
    }

    /// Establece el cuerpo de la respuesta desde un string
    pub fn with_body(self, body: &str) -> Self {
        self.with_body_bytes(body.as_bytes().to_vec())
    }

    /// Establece el cuerpo de la respuesta desde bytes
    ///
    /// Útil para contenido de archivos, que puede ser binario.
    pub fn with_body_bytes(mut self, body: Vec<u8>) -> Self {
        self.body = body;
        self
    }

    /// Comprime el body con la codificación negociada
    ///
    /// Agrega `Content-Encoding`. Un body vacío se deja tal cual, sin header.
    pub fn encode(&mut self, encoding: ContentEncoding) -> std::io::Result<()> {
        if self.body.is_empty() {
            return Ok(());
        }

        self.body = encoding.encode(&self.body)?;
        self.set_header("Content-Encoding", encoding.as_str());
        Ok(())
    }

    /// Convierte la respuesta a bytes listos para enviar por el socket
    ///
    /// - Status line: `HTTP/1.1 200 OK\r\n`
    /// - Headers en orden de inserción: `Header-Name: Value\r\n`
    /// - `Content-Length` con el largo final del body
    /// - Línea vacía: `\r\n`
    /// - Body
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut head = format!("HTTP/1.1 {}\r\n", self.status);

        for (name, value) in &self.headers {
            head.push_str(&format!("{}: {}\r\n", name, value));
        }
        head.push_str(&format!("{}: {}\r\n\r\n", CONTENT_LENGTH, self.body.len()));

        let mut result = head.into_bytes();
        result.extend_from_slice(&self.body);
        result
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    /// Obtiene el valor de un header
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use flate2::read::GzDecoder;
    use std::io::Read;

    #[test]
    fn test_new_response() {
        let response = Response::new(StatusCode::Ok);
        assert_eq!(response.status(), StatusCode::Ok);
        assert!(response.headers().is_empty());
        assert!(response.body().is_empty());
    }

    #[test]
    fn test_headers_keep_insertion_order() {
        let response = Response::new(StatusCode::Ok)
            .with_header("X-B", "2")
            .with_header("X-A", "1")
            .with_header("X-B", "3");

        let names: Vec<&str> = response.headers().iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, ["X-B", "X-A"]);
        assert_eq!(response.header("X-B"), Some("3"));
    }

    #[test]
    fn test_content_length_cannot_be_set_by_hand() {
        let response = Response::new(StatusCode::Ok)
            .with_header("Content-Length", "999")
            .with_body("abc");

        let text = String::from_utf8(response.to_bytes()).unwrap();
        assert!(text.contains("Content-Length: 3\r\n"));
        assert!(!text.contains("999"));
    }

    #[test]
    fn test_to_bytes() {
        let response = Response::new(StatusCode::Ok)
            .with_header("Content-Type", "text/plain")
            .with_body("Test");

        let text = String::from_utf8(response.to_bytes()).unwrap();
        assert_eq!(
            text,
            "HTTP/1.1 200 OK\r\nContent-Type: text/plain\r\nContent-Length: 4\r\n\r\nTest"
        );
    }

    #[test]
    fn test_empty_body_response() {
        let text = String::from_utf8(Response::new(StatusCode::NotFound).to_bytes()).unwrap();
        assert_eq!(text, "HTTP/1.1 404 Not Found\r\nContent-Length: 0\r\n\r\n");
    }

    #[test]
    fn test_with_body_bytes() {
        let binary_data = vec![0x00, 0x01, 0x02, 0xFF];
        let response = Response::new(StatusCode::Ok).with_body_bytes(binary_data.clone());

        assert_eq!(response.body(), &binary_data[..]);
        assert!(response.to_bytes().ends_with(&binary_data));
    }

    #[test]
    fn test_encode_gzip() {
        let mut response = Response::new(StatusCode::Ok)
            .with_header("Content-Type", "text/plain")
            .with_body("abc");
        response.encode(ContentEncoding::Gzip).unwrap();

        assert_eq!(response.header("Content-Encoding"), Some("gzip"));

        let mut decoded = String::new();
        GzDecoder::new(response.body()).read_to_string(&mut decoded).unwrap();
        assert_eq!(decoded, "abc");

        let text = String::from_utf8_lossy(&response.to_bytes()).to_string();
        let expected = format!(
            "Content-Encoding: gzip\r\nContent-Length: {}\r\n\r\n",
            response.body().len()
        );
        assert!(text.contains(&expected));
    }

    #[test]
    fn test_encode_empty_body_is_noop() {
        let mut response = Response::new(StatusCode::Ok);
        response.encode(ContentEncoding::Gzip).unwrap();

        assert_eq!(response.header("Content-Encoding"), None);
        assert!(response.body().is_empty());
    }
}
