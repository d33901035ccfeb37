use tokio_util::sync::CancellationToken;
use tracing::{error, info, warn};

/// Returns a token that is cancelled on the first SIGINT/SIGTERM.
/// A second signal terminates the process with exit code 1.
pub fn setup_signal_handler() -> CancellationToken {
    let token = CancellationToken::new();
    let shutdown = token.clone();

    tokio::spawn(async move {
        wait_for_signal().await;
        info!("Received shutdown signal, stopping");
        shutdown.cancel();

        wait_for_signal().await;
        warn!("Received second shutdown signal, exiting immediately");
        std::process::exit(1);
    });
    token
}

#[cfg(unix)]
pub async fn wait_for_signal() {
    use tokio::signal::unix::{signal, SignalKind};

    match signal(SignalKind::terminate()) {
        Ok(mut sigterm) => {
            tokio::select! {
                _ = tokio::signal::ctrl_c() => {}
                _ = sigterm.recv() => {}
            }
        }
        Err(e) => {
            error!("Failed to install SIGTERM handler: {e}");
            wait_for_ctrl_c().await;
        }
    }
}

#[cfg(not(unix))]
pub async fn wait_for_signal() {
    wait_for_ctrl_c().await;
}

async fn wait_for_ctrl_c() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("Failed to listen for ctrl-c: {e}");
        std::future::pending::<()>().await;
    }
}
