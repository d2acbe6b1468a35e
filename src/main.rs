use anyhow::Result;
use clap::Parser;
use std::sync::Arc;
use thompson_digital::http::server;
use thompson_digital::utils::{logger, validation::Validate};
use thompson_digital::{CliConfig, LogSink, SiteConfig};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_server_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting thompson-digital API");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let sink = Arc::new(LogSink);

    if let Some(path) = &cli.config {
        let site = SiteConfig::from_file(path)?;
        site.validate_config()?;
        tracing::info!("Loaded site config from {}", path);
        server::serve(&site, sink).await?;
    } else {
        cli.validate()?;
        server::serve(&cli, sink).await?;
    }

    Ok(())
}
