//! claimcheckd: claim checker web form daemon.
//!
//! Serves the single-page form and the JSON analysis endpoint.

use std::sync::Arc;

use clap::Parser;
use tracing::info;

use claimcheck::config::{Config, Secrets};
use claimcheck::server::FormServer;
use claimcheck::{ClaimCheckerBuilder, RenderOptions};

/// Claim checker web form daemon.
#[derive(Parser)]
#[command(name = "claimcheckd")]
#[command(version = claimcheck::PKG_VERSION)]
#[command(about = "Fake-news claim checker web form")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long)]
    config: Option<std::path::PathBuf>,

    /// Address to bind to (overrides the config file).
    #[arg(short, long, env = "CLAIMCHECK_ADDRESS")]
    address: Option<String>,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    let config = Config::load(args.config.as_deref())?;
    let secrets = Secrets::load()?;

    let checker = ClaimCheckerBuilder::from_config(&config, &secrets).build()?;

    let render = RenderOptions {
        site_name: config.web_search.site_name.clone(),
    };
    let address = args.address.unwrap_or(config.server.address);

    info!(
        version = claimcheck::version_string(),
        model = %config.classifier.model,
        site = %config.web_search.site,
        "claimcheckd starting"
    );

    let mut server = FormServer::start(Arc::new(checker), render, &address).await?;
    server.wait().await;

    Ok(())
}
