//! Lab API entry point.

use clap::{Parser, Subcommand};
use tracing::{error, info};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use lab_api::config::{Config, ServerMode};
use lab_api::{metrics, server};

/// Minimal JSON HTTP API.
#[derive(Parser, Debug)]
#[command(name = "lab-api")]
#[command(about = "Ping, health, and parameter echo endpoints over HTTP")]
#[command(version)]
struct Args {
    /// Enable verbose logging (overrides APP_MODE).
    #[arg(short, long, global = true, conflicts_with = "release")]
    verbose: bool,

    /// Terse logging (same as APP_MODE=release).
    #[arg(long, global = true)]
    release: bool,

    /// Listening port (overrides PORT).
    #[arg(short, long, global = true)]
    port: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve,

    /// Print the effective configuration and exit.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Load .env before the filter reads RUST_LOG
    let dotenv_found = Config::load_dotenv();
    let loaded = Config::from_env();

    let mode = match (&loaded, args.verbose, args.release) {
        (_, true, _) => ServerMode::Debug,
        (_, _, true) => ServerMode::Release,
        (Ok(config), _, _) => config.mode(),
        (Err(_), _, _) => ServerMode::Debug,
    };
    let log_json = loaded.as_ref().map(|c| c.log_json).unwrap_or(false);
    init_logging(mode, log_json);

    if !dotenv_found {
        info!("No .env file found, using default values");
    }

    let mut config = match loaded {
        Ok(c) => c,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return Err(e.into());
        }
    };
    if let Some(port) = args.port {
        config.port = port;
    }

    // Initialize metrics
    metrics::init_metrics();

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => cmd_serve(config, mode).await,
        Command::CheckConfig => cmd_check_config(&config, mode),
    }
}

fn init_logging(mode: ServerMode, json: bool) {
    let filter = match mode {
        ServerMode::Debug => EnvFilter::new("lab_api=debug,tower_http=debug,info"),
        ServerMode::Release => {
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
        }
    };

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(fmt::layer().json()).init();
    } else {
        registry.with(fmt::layer()).init();
    }
}

/// Run the server; a bind failure is fatal.
async fn cmd_serve(config: Config, mode: ServerMode) -> anyhow::Result<()> {
    if let Err(e) = server::run(&config, mode).await {
        error!("Failed to start server: {}", e);
        return Err(e.into());
    }
    Ok(())
}

/// Print the effective configuration.
fn cmd_check_config(config: &Config, mode: ServerMode) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("LAB API - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Resolving listen address... ");
    match config.socket_addr() {
        Ok(addr) => {
            println!("OK");
            println!("  Address: {}", addr);
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration check failed"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Port: {}", config.port);
    println!("  Mode: {}", mode);
    match config.metrics_port {
        Some(port) => println!("  Metrics: port {}", port),
        None => println!("  Metrics: disabled"),
    }
    println!("  JSON logs: {}", config.log_json);
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    info!("Configuration check passed");
    Ok(())
}
