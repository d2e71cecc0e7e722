//! Comercio JSON API Server

use std::process;

use salvo::prelude::*;
use tracing::{error, info};

use crate::{config::ServerConfig, routes::RouteGroups};

#[cfg(not(target_env = "msvc"))]
use tikv_jemallocator::Jemalloc;

#[cfg(not(target_env = "msvc"))]
#[global_allocator]
static GLOBAL: Jemalloc = Jemalloc;

mod config;
mod cors;
mod fallback;
mod healthcheck;
mod observability;
mod router;
mod routes;
mod shutdown;

/// Comercio JSON API Server entry point
#[tokio::main]
pub async fn main() {
    // Load configuration from .env and CLI arguments
    let config = ServerConfig::load().unwrap_or_else(|e| {
        #[expect(
            clippy::print_stderr,
            reason = "logging not initialized yet, must use eprintln for config errors"
        )]
        {
            eprintln!("Configuration error: {e}");
        }

        process::exit(1);
    });

    if let Err(init_error) = observability::init(&config) {
        #[expect(
            clippy::print_stderr,
            reason = "subscriber failed to install, nothing else can report it"
        )]
        {
            eprintln!("failed to initialize logging: {init_error}");
        }

        process::exit(1);
    }

    let listener = TcpListener::new(config.socket_addr()).bind().await;

    info!("{}", config.startup_message());

    let server = Server::new(listener);

    let handle = server.handle();

    // Listen for shutdown signal
    tokio::spawn(async move {
        if let Err(error) = shutdown::listen(handle).await {
            error!("failed to listen for shutdown signal: {error}");
        }
    });

    server
        .serve(router::build_service(RouteGroups::unpopulated(), &config))
        .await;

    info!("server stopped");
}
