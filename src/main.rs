//! Tagging demo
//!
//! Generates a throwaway account, checks that it has been funded, and if so
//! asks a relayer contract to create one tagging record.
//!
//! ```text
//!   tagging-demo run ─────┐
//!                         ├─▶ DemoRunner ─▶ identity ─▶ balance ─▶ relayer
//!   tagging-demo serve ───┘        (POST /api/run-demo)
//! ```

use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use tagging_demo::config::{load_or_default, DemoConfig};
use tagging_demo::http::{shutdown_signal, HttpServer};
use tagging_demo::observability::{logging, metrics};
use tagging_demo::{DemoResponse, DemoRunner};

#[derive(Parser)]
#[command(name = "tagging-demo")]
#[command(about = "Create a tagging record from a freshly generated, funded account", long_about = None)]
struct Cli {
    /// TOML configuration file (defaults apply when omitted).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the demo once and print the result
    Run {
        /// Print `{ result, link? }` as JSON
        #[arg(long)]
        json: bool,
    },
    /// Serve `POST /api/run-demo` over HTTP
    Serve,
    /// Load and validate the configuration, then exit
    CheckConfig,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let config = load_or_default(cli.config.as_deref())?;

    logging::init_logging(&config.observability);
    tracing::info!("tagging-demo v{} starting", env!("CARGO_PKG_VERSION"));

    match cli.command.unwrap_or(Commands::Run { json: false }) {
        Commands::Run { json } => run_once(&config, json).await?,
        Commands::Serve => serve(config).await?,
        Commands::CheckConfig => {
            println!("{}", toml::to_string_pretty(&config)?);
        }
    }

    Ok(())
}

async fn run_once(config: &DemoConfig, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let runner = DemoRunner::from_config(config)?;
    let response = DemoResponse::from(runner.run().await?);

    if json {
        println!("{}", serde_json::to_string_pretty(&response)?);
    } else {
        println!("{}", response.result);
        if let Some(link) = &response.link {
            println!("{}", link);
        }
    }
    Ok(())
}

async fn serve(config: DemoConfig) -> Result<(), Box<dyn std::error::Error>> {
    if config.observability.metrics_enabled {
        let addr: SocketAddr = config.observability.metrics_address.parse()?;
        metrics::init_metrics(addr)?;
    }

    let runner = DemoRunner::from_config(&config)?;
    if let Some(identity) = runner.identity() {
        tracing::info!(address = %identity.address(), "Using one identity for every run");
    }
    if let Some(caveat) = runner.funding_caveat() {
        tracing::warn!("{}", caveat);
    }

    let listener = TcpListener::bind(&config.server.bind_address).await?;
    HttpServer::new(runner).run(listener, shutdown_signal()).await?;

    tracing::info!("Shutdown complete");
    Ok(())
}
