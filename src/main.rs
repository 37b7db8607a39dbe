//! String Analyzer - HTTP service for analyzing and querying text strings
//!
//! Run `string-analyzer serve` to start the API, or use `analyze` and
//! `interpret` to try the analyzer and query grammar offline.

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use string_analyzer::{
    analysis,
    config::AnalyzerConfig,
    query::QueryInterpreter,
    server::ServerBuilder,
};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "string-analyzer")]
#[command(version)]
#[command(about = "Analyze, store and query text strings over HTTP")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "STRING_ANALYZER_CONFIG")]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API
    Serve {
        /// Host to bind to (overrides config)
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on (overrides config)
        #[arg(long, env = "PORT")]
        port: Option<u16>,
    },

    /// Analyze a string and print the record
    Analyze {
        /// String to analyze
        value: String,
    },

    /// Show how a natural-language query is interpreted
    Interpret {
        /// Free-text query
        query: String,
    },

    /// Show configuration
    Config {
        /// Show default configuration
        #[arg(long)]
        default: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = match &cli.config {
        Some(path) => AnalyzerConfig::load(path)?,
        None => AnalyzerConfig::default(),
    };

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else {
        config.logging.level.as_str()
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                format!("string_analyzer={},tower_http=debug", log_level).into()
            }),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    match cli.command {
        Commands::Serve { host, port } => {
            run_server(config, host, port).await?;
        }
        Commands::Analyze { value } => {
            let record = analysis::analyze(&value);
            println!("{}", serde_json::to_string_pretty(&record)?);
        }
        Commands::Interpret { query } => {
            run_interpret(&query)?;
        }
        Commands::Config { default } => {
            let config = if default {
                AnalyzerConfig::default()
            } else {
                config
            };
            println!("{}", config.to_toml()?);
        }
    }

    Ok(())
}

async fn run_server(config: AnalyzerConfig, host: Option<String>, port: Option<u16>) -> Result<()> {
    let mut builder = ServerBuilder::new().config(config);
    if let Some(host) = host {
        builder = builder.host(host);
    }
    if let Some(port) = port {
        builder = builder.port(port);
    }
    let server = builder.build()?;

    tracing::info!("Starting String Analyzer API. Press Ctrl+C to stop.");
    server
        .run(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!("Failed to listen for shutdown signal: {}", e);
            }
            tracing::info!("Shutting down...");
        })
        .await?;

    Ok(())
}

fn run_interpret(query: &str) -> Result<()> {
    let interpreter = QueryInterpreter::new()?;
    match interpreter.interpret(query) {
        Ok(interpreted) => println!("{}", serde_json::to_string_pretty(&interpreted)?),
        Err(e) => {
            let partial = interpreter.parse(query).unwrap_or_default();
            println!("✗ {} (HTTP {})", e, e.status().as_u16());
            println!("  parsed filters: {}", serde_json::to_string(&partial)?);
        }
    }
    Ok(())
}
