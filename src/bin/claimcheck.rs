//! claimcheck: terminal client
//!
//! Runs the same analysis as the web form and prints the report.

use std::io::{self, IsTerminal, Read};

use clap::{Parser, Subcommand};

use claimcheck::config::{Config, Secrets};
use claimcheck::render::render_text;
use claimcheck::{ClaimCheckError, ClaimCheckerBuilder, RenderOptions};

/// Fake-news claim checker
#[derive(Parser)]
#[command(name = "claimcheck")]
#[command(version = claimcheck::PKG_VERSION)]
#[command(about = "Check a claim against a fake-news model, fact-checks and news")]
struct Args {
    /// Path to configuration file.
    #[arg(short, long, global = true)]
    config: Option<std::path::PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Analyse a claim
    Analyze {
        /// Claim text (or omit to read from stdin)
        text: Option<String>,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print build information
    Version,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialise tracing (default: warn for CLI; override with RUST_LOG).
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();

    match args.command {
        Command::Version => {
            println!("claimcheck {}", claimcheck::version_string());
            if let Some(ts) = claimcheck::version::BUILD_TIMESTAMP {
                println!("built {ts}");
            }
        }
        Command::Analyze { text, json } => {
            let text = match text {
                Some(t) => t,
                None => read_stdin()?,
            };

            let config = Config::load(args.config.as_deref())?;
            let secrets = Secrets::load()?;
            let checker = ClaimCheckerBuilder::from_config(&config, &secrets).build()?;

            let report = match checker.analyze(&text).await {
                Ok(report) => report,
                Err(ClaimCheckError::EmptyClaim) => {
                    eprintln!("Enter some text to analyze.");
                    std::process::exit(2);
                }
                Err(e) => return Err(e.into()),
            };

            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                let options = RenderOptions {
                    site_name: config.web_search.site_name.clone(),
                };
                print!("{}", render_text(&report, &options));
            }
        }
    }

    Ok(())
}

/// Read the claim from stdin, refusing to block on an interactive terminal.
fn read_stdin() -> Result<String, Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    if stdin.is_terminal() {
        return Err("no claim given; pass it as an argument or pipe it on stdin".into());
    }
    let mut buf = String::new();
    stdin.lock().read_to_string(&mut buf)?;
    Ok(buf)
}
