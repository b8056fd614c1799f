//! # Codecrafters HTTP - Entry Point
//! src/main.rs
//!
//! Carga la configuración, inicializa el logging y arranca el servidor.

use codecrafters_http::config::Config;
use codecrafters_http::server::Server;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() {
    let config = match Config::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error fatal: {}", e);
            std::process::exit(1);
        }
    };

    // RUST_LOG tiene prioridad sobre el nivel configurado
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    info!(
        host = %config.host,
        port = config.port,
        directory = %config.directory.display(),
        "Iniciando servidor HTTP"
    );

    if let Err(e) = config.validate() {
        error!(error = %e, "Configuración inválida");
        std::process::exit(1);
    }

    let mut server = Server::new(config);

    // Iniciar el servidor (esto bloqueará el thread)
    if let Err(e) = server.run() {
        error!(error = %e, "Error fatal");
        std::process::exit(1);
    }
}
