//! Ad service entry point.

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;
use tracing::{error, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use ad_service::api::{create_router, AppState};
use ad_service::config::Config;
use ad_service::metrics;
use ad_service::utils::shutdown_signal;
use ad_service::ServiceError;

/// Ad resource HTTP service.
#[derive(Parser, Debug)]
#[command(name = "ad-service")]
#[command(about = "HTTP service exposing ad endpoints backed by fake data")]
#[command(version)]
struct Args {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Command>,

    /// HTTP server port (overrides PORT).
    #[arg(short, long)]
    port: Option<u16>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP server (default).
    Serve {
        /// HTTP server port (overrides PORT).
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Check configuration validity.
    CheckConfig,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Parse CLI arguments
    let args = Args::parse();

    // Configuration errors are reported after logging is up
    let loaded = Config::load();
    let (rust_log, log_json) = match &loaded {
        Ok(c) => (c.rust_log.clone(), c.log_json),
        Err(_) => ("info".to_string(), false),
    };

    // Initialize logging
    let filter = if args.verbose {
        EnvFilter::new("ad_service=debug,info")
    } else {
        EnvFilter::try_new(&rust_log).unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let fmt_layer = if log_json {
        fmt::layer().json().boxed()
    } else {
        fmt::layer().boxed()
    };

    tracing_subscriber::registry()
        .with(fmt_layer)
        .with(filter)
        .init();

    // Handle subcommands
    match args.command {
        Some(Command::CheckConfig) => cmd_check_config(loaded),
        Some(Command::Serve { port }) => cmd_serve(loaded, port.or(args.port)).await,
        None => cmd_serve(loaded, args.port).await,
    }
}

/// Check configuration validity.
fn cmd_check_config(loaded: Result<Config, ServiceError>) -> anyhow::Result<()> {
    println!("======================================================================");
    println!("AD SERVICE - CONFIGURATION CHECK");
    println!("======================================================================");

    print!("Loading configuration... ");
    let config = match loaded {
        Ok(c) => {
            println!("OK");
            c
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration load failed"));
        }
    };

    print!("Validating configuration... ");
    match config.validate() {
        Ok(()) => println!("OK"),
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Configuration validation failed"));
        }
    }

    print!("Resolving bind address... ");
    match config.bind_addr() {
        Ok(addr) => {
            println!("OK");
            println!("  Address: {}", addr);
        }
        Err(e) => {
            println!("FAILED");
            println!("  Error: {}", e);
            return Err(anyhow::anyhow!("Bind address invalid"));
        }
    }

    println!("----------------------------------------------------------------------");
    println!("Configuration Summary:");
    println!("  Host: {}", config.host);
    println!("  Port: {}", config.port);
    println!("  Log Filter: {}", config.rust_log);
    println!("  Log Format: {}", if config.log_json { "JSON" } else { "Text" });
    println!("  Metrics: {}", if config.metrics_enabled { "Enabled" } else { "Disabled" });
    println!("======================================================================");
    println!("CONFIGURATION CHECK PASSED");
    println!("======================================================================");

    Ok(())
}

/// Run the HTTP server until a shutdown signal arrives.
async fn cmd_serve(loaded: Result<Config, ServiceError>, port_override: Option<u16>) -> anyhow::Result<()> {
    info!("Loading configuration...");
    let mut config = loaded.map_err(|e| {
        error!("Failed to load configuration: {}", e);
        e
    })?;

    // Override with CLI args if provided
    if let Some(port) = port_override {
        config.port = port;
    }

    if let Err(e) = config.validate() {
        error!("Invalid configuration: {}", e);
        return Err(anyhow::anyhow!("Configuration validation failed: {}", e));
    }

    let app_state = if config.metrics_enabled {
        match metrics::install_recorder() {
            Ok(handle) => AppState::with_metrics(handle),
            Err(e) => {
                warn!("Metrics disabled: {}", e);
                AppState::new()
            }
        }
    } else {
        AppState::new()
    };

    let addr = config.bind_addr()?;
    let listener = TcpListener::bind(addr).await?;
    info!("started-service");
    info!("HTTP server listening on {}", addr);

    axum::serve(listener, create_router(app_state))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("HTTP server stopped");
    Ok(())
}
