//! # Servidor TCP Concurrente
//! src/server/tcp.rs
//!
//! El loop de accept solo espera conexiones nuevas; cada conexión se procesa
//! en su propio thread, que es dueño del `TcpStream` y lo cierra al terminar
//! (éxito o error). Lo único compartido entre threads es el `Router`, de
//! solo lectura.

use crate::config::Config;
use crate::error::{Result, ServerError};
use crate::http::{ContentEncoding, Request, Response, StatusCode};
use crate::router::{RouteContext, Router};
use std::io::{Read, Write};
use std::net::{SocketAddr, TcpListener, TcpStream};
use std::sync::Arc;
use std::thread;
use tracing::{debug, error, info, warn};

/// Tamaño del buffer de lectura. Requests más grandes se truncan.
pub const BUFFER_SIZE: usize = 4096;

/// Servidor HTTP/1.1 concurrente, un thread por conexión
pub struct Server {
    config: Config,
    router: Arc<Router>,
    listener: Option<TcpListener>,
}

impl Server {
    pub fn new(config: Config) -> Self {
        let router = Router::with_default_routes(RouteContext::new(&config.directory));

        Self {
            config,
            router: Arc::new(router),
            listener: None,
        }
    }

    /// Hace bind del socket de escucha y retorna la dirección real
    ///
    /// Con puerto 0 el sistema operativo elige uno libre.
    pub fn start(&mut self) -> Result<SocketAddr> {
        let address = self.config.address();

        let listener = TcpListener::bind(&address).map_err(|source| ServerError::Bind {
            address: address.clone(),
            source,
        })?;
        let local_addr = listener.local_addr()?;

        info!(
            address = %local_addr,
            directory = %self.config.directory.display(),
            "Servidor escuchando"
        );

        self.listener = Some(listener);
        Ok(local_addr)
    }

    /// Loop de accept: nunca retorna mientras el listener siga vivo
    pub fn serve(&self) -> Result<()> {
        let listener = self
            .listener
            .as_ref()
            .ok_or_else(|| ServerError::Config("serve() called before start()".to_string()))?;

        for stream in listener.incoming() {
            match stream {
                Ok(stream) => {
                    let router = Arc::clone(&self.router);

                    let peer_addr = stream
                        .peer_addr()
                        .map(|addr| addr.to_string())
                        .unwrap_or_else(|_| "unknown".to_string());
                    debug!(peer = %peer_addr, "Nueva conexión");

                    thread::spawn(move || {
                        if let Err(e) = handle_connection(stream, &router) {
                            warn!(peer = %peer_addr, error = %e, "Error en la conexión");
                        }
                    });
                }
                Err(e) => {
                    error!(error = %e, "Error al aceptar conexión");
                }
            }
        }

        Ok(())
    }

    /// `start` + `serve`
    pub fn run(&mut self) -> Result<()> {
        self.start()?;
        self.serve()
    }

    pub fn local_addr(&self) -> Option<SocketAddr> {
        self.listener.as_ref().and_then(|l| l.local_addr().ok())
    }
}

/// Atiende un único request y cierra la conexión
///
/// El `TcpStream` se consume: al salir de la función (por cualquier camino)
/// se libera y el socket queda cerrado.
fn handle_connection(mut stream: TcpStream, router: &Router) -> std::io::Result<()> {
    let mut buffer = [0u8; BUFFER_SIZE];
    let bytes_read = stream.read(&mut buffer)?;

    if bytes_read == 0 {
        debug!("Conexión cerrada sin datos");
        return Ok(());
    }

    let response = respond(&buffer[..bytes_read], router)?;

    stream.write_all(&response.to_bytes())?;
    stream.flush()?;

    debug!(status = %response.status(), "Response enviada");
    Ok(())
}

/// Convierte los bytes de un request en la response a enviar
///
/// Un request que no se puede parsear se responde con 400 Bad Request.
/// Si el cliente acepta gzip, el body se comprime aquí.
pub fn respond(raw: &[u8], router: &Router) -> std::io::Result<Response> {
    let request = match Request::parse(raw) {
        Ok(request) => request,
        Err(e) => {
            warn!(error = %e, "Request inválido");
            return Ok(Response::new(StatusCode::BadRequest));
        }
    };

    debug!(method = %request.method(), path = request.path(), "Request recibido");

    let mut response = router.route(&request);
    if let Some(encoding) = ContentEncoding::negotiate(request.header("Accept-Encoding")) {
        response.encode(encoding)?;
    }

    Ok(response)
}
