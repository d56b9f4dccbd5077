use clap::{Args, Subcommand, ValueEnum};

use super::recipe::truncate;
use super::State;
use quickbites_core::RecipeSource;

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct FavCommand {
    #[command(subcommand)]
    pub command: FavSubcommand,
}

#[derive(Subcommand)]
pub enum FavSubcommand {
    /// List favourite recipes
    List {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Add a recipe to favourites, or remove it if already there
    Toggle {
        /// Recipe ID
        id: String,
    },

    /// Remove a recipe from favourites
    Remove {
        /// Recipe ID
        id: String,
    },
}

impl FavCommand {
    pub async fn run(
        &self,
        state: &mut State,
        source: &dyn RecipeSource,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            FavSubcommand::List { format } => {
                let favourites = state.favourites().sorted_by_title();

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&favourites)?);
                    }
                    OutputFormat::Text => {
                        if favourites.is_empty() {
                            println!("No favourites yet");
                            return Ok(());
                        }
                        for summary in &favourites {
                            println!(
                                "{:<8} {:<40} {}",
                                summary.id,
                                truncate(&summary.title, 40),
                                summary.category.as_deref().unwrap_or("-")
                            );
                        }
                        println!("\nTotal: {} favourite(s)", favourites.len());
                    }
                }
                Ok(())
            }

            FavSubcommand::Toggle { id } => {
                // Removing needs no lookup; adding stores the catalogue's summary.
                let summary = match state.favourites().get(id) {
                    Some(existing) => existing.clone(),
                    None => source
                        .get_by_id(id)
                        .await?
                        .map(|recipe| recipe.summary())
                        .ok_or_else(|| format!("Recipe not found: {}", id))?,
                };

                let title = summary.title.clone();
                if state.toggle_favourite(summary) {
                    println!("Added to favourites: {}", title);
                } else {
                    println!("Removed from favourites: {}", title);
                }
                Ok(())
            }

            FavSubcommand::Remove { id } => {
                if !state.is_favourite(id) {
                    return Err(format!("Not a favourite: {}", id).into());
                }
                state.remove_favourite(id);
                println!("Removed from favourites: {}", id);
                Ok(())
            }
        }
    }
}
