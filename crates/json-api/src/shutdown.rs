//! Graceful shutdown signal handling

use std::io;

use salvo::server::ServerHandle;
use thiserror::Error;
use tokio::signal;
use tracing::{error, info};

#[derive(Debug, Error)]
pub(crate) enum ShutdownSignalError {
    #[error("failed to install Ctrl+C handler: {0}")]
    CtrlC(#[source] io::Error),
}

/// Wait for Ctrl+C (or SIGTERM on unix), then stop accepting connections
/// and let in-flight requests finish.
pub(crate) async fn listen(handle: ServerHandle) -> Result<(), ShutdownSignalError> {
    wait_for_signal(signal::ctrl_c(), terminate()).await?;

    handle.stop_graceful(None);

    Ok(())
}

/// Resolves on whichever signal arrives first. A terminate stream that could
/// not be installed leaves Ctrl+C as the only trigger.
async fn wait_for_signal<C, T>(ctrl_c: C, terminate: T) -> Result<(), ShutdownSignalError>
where
    C: Future<Output = io::Result<()>>,
    T: Future<Output = io::Result<()>>,
{
    let terminate = async {
        if let Err(source) = terminate.await {
            error!("failed to install SIGTERM handler, waiting for Ctrl+C only: {source}");

            std::future::pending::<()>().await;
        }
    };

    tokio::select! {
        result = ctrl_c => {
            result.map_err(ShutdownSignalError::CtrlC)?;
            info!("ctrl_c signal received");
        }
        () = terminate => {
            info!("terminate signal received");
        }
    };

    Ok(())
}

#[cfg(unix)]
async fn terminate() -> io::Result<()> {
    signal::unix::signal(signal::unix::SignalKind::terminate())?
        .recv()
        .await;

    Ok(())
}

#[cfg(not(unix))]
async fn terminate() -> io::Result<()> {
    std::future::pending().await
}
