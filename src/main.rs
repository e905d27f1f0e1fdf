use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use supadata::cli::{self, Cli, Commands};
use supadata::{output, Config, SupadataClient};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so stdout only ever carries the payload
    let default_filter = if cli.verbose { "supadata=debug" } else { "supadata=info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Commands::Config { show } = cli.command {
        let path = Config::config_path()?;
        if show {
            Config::load_from(&path)?.display();
        } else if path.exists() {
            println!("Config file already exists: {}", path.display());
        } else {
            Config::default().save_to(&path)?;
            println!("Created config file: {}", path.display());
            println!("Add your api_key there or set SUPADATA_API_KEY.");
        }
        return Ok(());
    }

    let config = Config::load()?;

    let mut options = config.to_client_options();
    if let Some(base_url) = cli.base_url.clone() {
        options.base_url = Some(base_url);
    }
    let api_key = cli.api_key.clone().or(config.api_key).unwrap_or_default();

    let client = SupadataClient::with_options(api_key, options)
        .context("Could not create Supadata client (set SUPADATA_API_KEY or api_key in the config file)")?;

    tracing::debug!("Running {:?} against {}", cli.command, client.base_url());

    match cli::execute(&client, &cli.command, cli.quiet).await {
        Ok(payload) => output::print_to_console(&payload, &cli.format)?,
        Err(err) => {
            eprintln!("{} {:#}", console::style("error:").red().bold(), err);
            std::process::exit(1);
        }
    }

    Ok(())
}
