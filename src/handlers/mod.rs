//! # Handlers del Servidor
//!
//! Cada handler recibe un Request y el `RouteContext`, y retorna una
//! Response. La compresión la aplica el servidor después, así que los
//! handlers siempre producen el body sin codificar.
//!
//! - **basic**: `/`, `/echo/{text}`, `/user-agent`
//! - **files**: `GET /files/{name}` y `POST /files/{name}`

pub mod basic;
pub mod files;

pub use basic::*;
pub use files::*;
