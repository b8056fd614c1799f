//! # Negociación de Content-Encoding
//!
//! El cliente anuncia en `Accept-Encoding` una lista separada por comas.
//! Se honra la primera codificación soportada de la lista; las demás se
//! ignoran. Hoy la única soportada es gzip.

use flate2::write::GzEncoder;
use flate2::Compression;
use std::io::Write;

/// Codificaciones de respuesta que el servidor sabe producir
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentEncoding {
    Gzip,
}

impl ContentEncoding {
    /// Valor canónico para el header `Content-Encoding`
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentEncoding::Gzip => "gzip",
        }
    }

    fn from_token(token: &str) -> Option<Self> {
        if token.eq_ignore_ascii_case("gzip") {
            Some(ContentEncoding::Gzip)
        } else {
            None
        }
    }

    /// Elige la codificación a partir del valor de `Accept-Encoding`
    ///
    /// # Ejemplo
    /// ```
    /// use codecrafters_http::http::ContentEncoding;
    ///
    /// assert_eq!(
    ///     ContentEncoding::negotiate(Some("invalid-encoding, GZIP")),
    ///     Some(ContentEncoding::Gzip)
    /// );
    /// assert_eq!(ContentEncoding::negotiate(Some("br, deflate")), None);
    /// assert_eq!(ContentEncoding::negotiate(None), None);
    /// ```
    pub fn negotiate(accept_encoding: Option<&str>) -> Option<Self> {
        accept_encoding?
            .split(',')
            .map(str::trim)
            .find_map(Self::from_token)
    }

    /// Codifica `data` con esta codificación
    pub fn encode(&self, data: &[u8]) -> std::io::Result<Vec<u8>> {
        match self {
            ContentEncoding::Gzip => {
                let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
                encoder.write_all(data)?;
                encoder.finish()
            }
        }
    }
}
