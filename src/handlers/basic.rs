//! # Handlers Básicos
//! src/handlers/basic.rs
//!
//! - /: Responde 200 sin body
//! - /echo/{text}: Devuelve el segundo segmento del path
//! - /user-agent: Devuelve el header `User-Agent` del cliente

use crate::http::{Request, Response, StatusCode};
use crate::router::RouteContext;
use tracing::debug;

/// Handler para /
pub fn root_handler(_req: &Request, _ctx: &RouteContext) -> Response {
    Response::new(StatusCode::Ok)
}

/// Handler para /echo/{text}
///
/// Sin segundo segmento responde 200 con body vacío.
///
/// # Ejemplo de response
/// ```text
/// HTTP/1.1 200 OK
/// Content-Type: text/plain
/// Content-Length: 3
///
/// abc
/// ```
pub fn echo_handler(req: &Request, _ctx: &RouteContext) -> Response {
    match req.segment(1) {
        Some(text) => Response::new(StatusCode::Ok)
            .with_header("Content-Type", "text/plain")
            .with_body(text),
        None => Response::new(StatusCode::Ok),
    }
}

/// Handler para /user-agent
///
/// 404 si el cliente no mandó `User-Agent`.
pub fn user_agent_handler(req: &Request, _ctx: &RouteContext) -> Response {
    let Some(agent) = req.header("User-Agent") else {
        debug!("Request a /user-agent sin header User-Agent");
        return Response::new(StatusCode::NotFound);
    };

    Response::new(StatusCode::Ok)
        .with_header("Content-Type", "text/plain")
        .with_body(agent)
}
