/// Dilemma - a small HTTP API that generates and analyzes ethical dilemmas
/// with a hosted LLM.
///
/// The API forwards prompts to an OpenAI-compatible chat-completion service
/// (Together AI by default) and relays the text back as JSON.
///
/// # Architecture
///
/// The system uses:
/// - axum for the HTTP surface, with tower-http for CORS and request tracing
/// - reqwest for the completion API, behind the `CompletionService` trait
/// - openai-api-rs message types for prompt construction
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use dilemma::ai::{CompletionClient, CompletionService};
/// use dilemma::core::config::AppConfig;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     // Set up structured logging
///     dilemma::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let client: Arc<dyn CompletionService> = Arc::new(CompletionClient::new(&config)?);
///
///     // Refuse to serve with a credential the provider rejects
///     dilemma::server::validate_credentials(client.as_ref()).await?;
///     dilemma::server::serve(&config, client).await?;
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod prompt;
pub mod server;

/// Configure structured JSON logging.
///
/// Verbosity follows `RUST_LOG` and defaults to `info`. Calling this more
/// than once is harmless; later calls leave the first subscriber in place.
///
/// # Example
///
/// ```
/// // Initialize structured logging before serving
/// dilemma::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::prelude::*;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
