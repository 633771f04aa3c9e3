use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// weba - WEBA Consultants website
#[derive(Parser)]
#[command(name = "weba")]
#[command(about = "Marketing site with contact and appointment forms", long_about = None)]
struct Cli {
    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Server host address (overrides config file)
        #[arg(long)]
        host: Option<String>,

        /// Server port (overrides config file)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = weba::Config::load(cli.config)?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    weba::observability::init_observability("weba", env!("CARGO_PKG_VERSION"), &config.logging)?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
    }
}
