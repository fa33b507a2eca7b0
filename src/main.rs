use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use setup_environments::config::{Cli, Config};
use setup_environments::github::OctocrabClient;
use setup_environments::run::run;

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "setup_environments=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(error) = try_main().await {
        tracing::error!(%error, "environment setup failed");
        eprintln!("Error: {error}");
        std::process::exit(1);
    }
}

async fn try_main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = Config::from_cli(cli)?;
    tracing::debug!(
        repository = %config.repo,
        environments = config.environments.len(),
        reviewers = config.reviewers.len(),
        "loaded configuration"
    );

    let client = OctocrabClient::from_token(config.token.clone(), config.repo.clone())?;
    run(&config, &client).await?;

    Ok(())
}
