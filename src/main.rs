use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use webhook_loadtest::config::Config;
use webhook_loadtest::{scenario, LoadTestClient};

#[tokio::main]
async fn main() -> ExitCode {
    // Load .env if present
    let _ = dotenvy::dotenv();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Init tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(&config.log_level)
        }))
        .init();

    tracing::info!("Starting load test against {}", config.base_url);

    let client = match LoadTestClient::from_config(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("Failed to build HTTP client: {e}");
            return ExitCode::FAILURE;
        }
    };

    match scenario::run(&client, &config).await {
        Ok(report) => {
            tracing::info!(
                subscription_id = %report.subscription_id,
                event_id = report.event_id.as_deref().unwrap_or("-"),
                "Scenario completed"
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Scenario failed: {e}");
            ExitCode::FAILURE
        }
    }
}
