use rust_cep_race::cep::Cep;
use rust_cep_race::client::CepClient;
use rust_cep_race::config::Config;
use rust_cep_race::race::race;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Main entry point for the application.
///
/// Initializes logging, loads configuration, races both services for the
/// configured CEP and prints the winner (or `timeout`) on stdout. Every
/// failure is logged on stderr and the process still exits successfully.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing on stderr so stdout only carries the result
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "rust_cep_race=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("Invalid configuration, using defaults: {}", e);
            Config::default()
        }
    };

    let cep = match Cep::parse(&config.cep) {
        Ok(cep) => cep,
        Err(e) => {
            tracing::error!("{}", e);
            return Ok(());
        }
    };

    let client = match CepClient::new(&config) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!("{}", e);
            return Ok(());
        }
    };

    let outcome = race(&client, &config, &cep).await;
    println!("{}", outcome);

    Ok(())
}
