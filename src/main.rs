use anyhow::Result;
use clap::{Parser, Subcommand};

mod cli;

/// pantrycam - Snap your groceries, get a week of meals
#[derive(Parser)]
#[command(name = "pantrycam")]
#[command(about = "Photo-driven weekly meal planner and shopping list", long_about = None)]
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
    /// Build a meal plan and its shopping list without starting the server
    Plan {
        /// Ingredient labels, exactly as detected (e.g. tomato onion rice)
        ingredients: Vec<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = pantrycam::Config::load(cli.config.clone())?;
    config.validate().map_err(|e| anyhow::anyhow!(e))?;

    pantrycam::observability::init(env!("CARGO_PKG_VERSION"), &config.logging)?;

    match cli.command {
        Commands::Serve { host, port } => cli::server::serve(config, host, port).await,
        Commands::Plan { ingredients } => cli::plan::run(ingredients),
    }
}
