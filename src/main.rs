use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::{
    ConfigCommand, FavCommand, PlanCommand, PrefsCommand, RecipeCommand, ShoppingCommand, State,
};
use config::Config;
use quickbites_core::{FileStore, MealDbClient};

#[derive(Parser)]
#[command(name = "quickbites")]
#[command(version)]
#[command(about = "Find recipes, plan the week and build a shopping list", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Search and view recipes
    Recipe(RecipeCommand),

    /// Manage favourite recipes
    Fav(FavCommand),

    /// Manage the weekly meal plan
    Plan(PlanCommand),

    /// Build the shopping list for the weekly plan
    Shopping(ShoppingCommand),

    /// View and change preferences
    Prefs(PrefsCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() {
    init_tracing();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "quickbites=warn,quickbites_core=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config)?;
    tracing::debug!(
        "Using data dir {} and API {}",
        config.data_dir.value.display(),
        config.api_url.value
    );

    let Some(command) = cli.command else {
        println!("Use --help to see available commands");
        return Ok(());
    };

    if let Commands::Config(cmd) = &command {
        return cmd.run(&config);
    }

    let mut state = State::load(FileStore::new(config.data_dir.value.clone()));
    let client = MealDbClient::new(config.api_url.value.clone());

    match command {
        Commands::Recipe(cmd) => cmd.run(&mut state, &client).await?,
        Commands::Fav(cmd) => cmd.run(&mut state, &client).await?,
        Commands::Plan(cmd) => cmd.run(&mut state, &client).await?,
        Commands::Shopping(cmd) => cmd.run(&state, &client).await?,
        Commands::Prefs(cmd) => cmd.run(&mut state)?,
        Commands::Config(cmd) => cmd.run(&config)?,
    }

    Ok(())
}
