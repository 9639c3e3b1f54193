//! Process lifecycle: credential check, bind, serve, shut down.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::ai::CompletionService;
use crate::api::{AppState, router};
use crate::core::config::AppConfig;
use crate::errors::DilemmaError;

/// Issues one model listing call so a bad credential fails at startup
/// rather than on the first request.
///
/// # Errors
///
/// Returns whatever the listing call returned.
pub async fn validate_credentials(
    completions: &dyn CompletionService,
) -> Result<usize, DilemmaError> {
    let count = completions.list_models().await?;
    info!(models = count, "Completion API credential accepted");
    Ok(count)
}

/// Human-readable explanation printed before exiting on a failed
/// credential check.
#[must_use]
pub fn startup_failure_banner(err: &DilemmaError) -> String {
    let rule = "-".repeat(60);
    format!(
        "{rule}\n\
         FATAL ERROR: Could not connect to Together AI.\n\
         This is almost certainly due to an invalid TOGETHER_API_KEY.\n\
         Please regenerate your key, update your .env file, and restart.\n\
         Underlying error: {err}\n\
         {rule}"
    )
}

/// Binds `config.bind_addr` and serves until Ctrl-C.
///
/// # Errors
///
/// Returns an error if the listener cannot be bound or the server fails.
pub async fn serve(
    config: &AppConfig,
    completions: Arc<dyn CompletionService>,
) -> std::io::Result<()> {
    let app = router(AppState::new(completions));
    let listener = TcpListener::bind(config.bind_addr).await?;
    info!(model = %config.together_model, "listening on http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutdown signal received");
}
