/*
[INPUT]:  OS interrupt signal
[OUTPUT]: A future that resolves when the user interrupts the CLI
[POS]:    Shutdown handling for the binary
[UPDATE]: When changing how in-flight requests are abandoned
*/

use std::future::Future;
use std::io;
use tracing::{info, warn};

/// Resolves on Ctrl-C.
pub async fn interrupted() {
    interrupted_by(tokio::signal::ctrl_c()).await
}

/// Resolves once `signal` fires. Never resolves if the handler could not be installed.
pub async fn interrupted_by<F>(signal: F)
where
    F: Future<Output = io::Result<()>>,
{
    if let Err(err) = signal.await {
        warn!(error = %err, "failed to install SIGINT handler");
        std::future::pending::<()>().await;
    }
    info!("received SIGINT");
}
