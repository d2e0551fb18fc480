mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use quizlink_core::AppConfig;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "quizlink")]
#[command(about = "Facebook profile capture and ScoreApp webhook ingest", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP server (creates the table on startup)
    Serve {
        /// Listen port [env: PORT, default 5000]
        #[arg(short, long)]
        port: Option<u16>,
        /// Bind address [env: HOST, default 0.0.0.0]
        #[arg(short = 'H', long)]
        host: Option<String>,
    },
    /// Create the user_responses table and exit
    InitDb,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let cli = Cli::parse();
    let mut config = AppConfig::from_env();

    match cli.command {
        Commands::Serve { port, host } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(host) = host {
                config.host = host;
            }
            commands::serve::run(config).await
        },
        Commands::InitDb => commands::init_db::run(config).await,
    }
}
