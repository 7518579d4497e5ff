// ABOUTME: Fincrew CLI entry point
// ABOUTME: Subcommands: ask (interactive one-shot), agents (list), serve (web form)

use clap::{Parser, Subcommand};

mod ask;
mod config;
mod serve;

#[derive(Parser)]
#[command(name = "fincrew")]
#[command(about = "Fincrew CLI - multi-agent fintech assistant")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run one agent request, reading input from stdin until a blank line
    Ask {
        /// Agent id (see `fincrew agents`)
        agent: String,
    },
    /// List available agents
    Agents,
    /// Start the web form server
    Serve {
        /// Port to bind (overrides the PORT env var)
        #[arg(long)]
        port: Option<u16>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Commands::Ask { agent } => ask::run(&agent).await,
        Commands::Agents => ask::list_agents(),
        Commands::Serve { port } => serve::run(port).await,
    }
}
