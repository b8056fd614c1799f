//! # Sistema de Routing
//! src/router/mod.rs
//!
//! Mapea cada request a un handler usando la clave
//! (método, primer segmento del path).
//!
//! ```text
//! Request → Router → Handler → Response
//! ```
//!
//! - Path sin segmentos (`/`) → handler raíz, para cualquier método
//! - Sin coincidencia → 404 Not Found

use crate::http::{Method, Request, Response, StatusCode};
use std::path::PathBuf;
use tracing::debug;

/// Configuración de solo lectura que reciben todos los handlers
#[derive(Debug, Clone)]
pub struct RouteContext {
    /// Directorio base para `/files/{name}`
    pub files_dir: PathBuf,
}

impl RouteContext {
    pub fn new(files_dir: impl Into<PathBuf>) -> Self {
        Self {
            files_dir: files_dir.into(),
        }
    }
}

/// Tipo de función handler
///
/// Un handler recibe el Request y el contexto, y retorna una Response
pub type Handler = fn(&Request, &RouteContext) -> Response;

/// Router que mapea (método, segmento) a handlers
pub struct Router {
    context: RouteContext,
    root: Handler,
    routes: Vec<(Method, String, Handler)>,
}

impl Router {
    /// Crea un router vacío cuyo handler raíz responde 200 sin body
    pub fn new(context: RouteContext) -> Self {
        Self {
            context,
            root: crate::handlers::root_handler,
            routes: Vec::new(),
        }
    }

    /// Crea el router con todas las rutas del servidor
    pub fn with_default_routes(context: RouteContext) -> Self {
        use crate::handlers;

        let mut router = Self::new(context);
        router.register(Method::GET, "echo", handlers::echo_handler);
        router.register(Method::GET, "user-agent", handlers::user_agent_handler);
        router.register(Method::GET, "files", handlers::get_file_handler);
        router.register(Method::POST, "files", handlers::post_file_handler);
        router
    }

    /// Registra una ruta con su handler
    ///
    /// # Ejemplo
    /// ```
    /// use codecrafters_http::http::{Method, Request, Response, StatusCode};
    /// use codecrafters_http::router::{RouteContext, Router};
    ///
    /// fn hello_handler(_req: &Request, _ctx: &RouteContext) -> Response {
    ///     Response::new(StatusCode::Ok).with_body("hello")
    /// }
    ///
    /// let mut router = Router::new(RouteContext::new("."));
    /// router.register(Method::GET, "hello", hello_handler);
    ///
    /// let request = Request::parse(b"GET /hello HTTP/1.1\r\n\r\n").unwrap();
    /// assert_eq!(router.route(&request).body(), b"hello");
    /// ```
    pub fn register(&mut self, method: Method, segment: &str, handler: Handler) {
        self.routes.push((method, segment.to_string(), handler));
    }

    /// Encuentra y ejecuta el handler apropiado para un request
    pub fn route(&self, request: &Request) -> Response {
        let Some(first) = request.segment(0) else {
            return (self.root)(request, &self.context);
        };

        let handler = self
            .routes
            .iter()
            .find(|(method, segment, _)| *method == request.method() && segment == first)
            .map(|(_, _, handler)| handler);

        match handler {
            Some(handler) => handler(request, &self.context),
            None => {
                debug!(method = %request.method(), path = request.path(), "Ruta no encontrada");
                Response::new(StatusCode::NotFound)
            }
        }
    }
}
