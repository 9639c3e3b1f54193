use std::process::ExitCode;
use std::sync::Arc;

use dilemma::ai::{CompletionClient, CompletionService};
use dilemma::core::config::AppConfig;
use dilemma::server::{serve, startup_failure_banner, validate_credentials};
use tracing::error;

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    dotenvy::dotenv().ok();
    dilemma::setup_logging();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Config error: {}", e);
            eprintln!("{}", startup_failure_banner(&e));
            return Ok(ExitCode::FAILURE);
        }
    };

    let client: Arc<dyn CompletionService> = match CompletionClient::new(&config) {
        Ok(client) => Arc::new(client),
        Err(e) => {
            eprintln!("{}", startup_failure_banner(&e));
            return Ok(ExitCode::FAILURE);
        }
    };

    if let Err(e) = validate_credentials(client.as_ref()).await {
        error!("Credential check failed: {}", e);
        eprintln!("{}", startup_failure_banner(&e));
        return Ok(ExitCode::FAILURE);
    }

    serve(&config, client).await?;
    Ok(ExitCode::SUCCESS)
}
