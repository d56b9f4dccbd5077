use clap::{Args, Subcommand, ValueEnum};

use super::State;
use quickbites_core::models::recipe_shopping_list;
use quickbites_core::{Recipe, RecipeSource};

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct RecipeCommand {
    #[command(subcommand)]
    pub command: RecipeSubcommand,
}

#[derive(Subcommand)]
pub enum RecipeSubcommand {
    /// Search recipes by name
    Search {
        /// Search text (e.g. pasta, curry)
        query: String,

        /// Only keep recipes in this category (can be repeated)
        #[arg(long = "category", value_name = "CATEGORY")]
        categories: Vec<String>,

        /// Only keep recipes from this cuisine (can be repeated)
        #[arg(long = "area", value_name = "AREA")]
        areas: Vec<String>,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show a recipe's ingredients and instructions
    Show {
        /// Recipe ID
        id: String,

        /// Print the recipe's shopping list instead of the details
        #[arg(long)]
        shopping: bool,

        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Show a random recipe
    Random {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// List recipe categories
    Categories,

    /// List cuisines
    Areas,

    /// Show recent search terms
    Recent {
        /// Forget all recent search terms
        #[arg(long)]
        clear: bool,
    },
}

impl RecipeCommand {
    pub async fn run(
        &self,
        state: &mut State,
        source: &dyn RecipeSource,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            RecipeSubcommand::Search {
                query,
                categories,
                areas,
                format,
            } => {
                let recipes = source.search_by_text(query).await?;
                state.record_search(query);

                let filter = state
                    .search_filter()
                    .with_categories(categories.clone())
                    .with_areas(areas.clone());
                let recipes = filter.apply(recipes);

                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&recipes)?);
                    }
                    OutputFormat::Text => {
                        if recipes.is_empty() {
                            println!("No recipes found");
                            return Ok(());
                        }
                        print_recipe_table(state, &recipes);
                        println!("\nTotal: {} recipe(s)", recipes.len());
                    }
                }
                Ok(())
            }

            RecipeSubcommand::Show {
                id,
                shopping,
                format,
            } => {
                let recipe = source
                    .get_by_id(id)
                    .await?
                    .ok_or_else(|| format!("Recipe not found: {}", id))?;

                if *shopping {
                    let items = recipe_shopping_list(&recipe);
                    match format {
                        OutputFormat::Json => {
                            println!("{}", serde_json::to_string_pretty(&items)?);
                        }
                        OutputFormat::Text => {
                            println!("Shopping list - {}", recipe.title);
                            println!("{}", "=".repeat(44));
                            if items.is_empty() {
                                println!("No ingredients listed.");
                            }
                            for item in &items {
                                println!("[ ] {:<25} {}", item.name, item.amount);
                            }
                        }
                    }
                    return Ok(());
                }

                print_recipe(state, &recipe, format)
            }

            RecipeSubcommand::Random { format } => {
                let recipe = source
                    .get_random()
                    .await?
                    .ok_or("No recipe returned")?;
                print_recipe(state, &recipe, format)
            }

            RecipeSubcommand::Categories => {
                for category in source.list_categories().await? {
                    println!("{}", category);
                }
                Ok(())
            }

            RecipeSubcommand::Areas => {
                for area in source.list_areas().await? {
                    println!("{}", area);
                }
                Ok(())
            }

            RecipeSubcommand::Recent { clear } => {
                if *clear {
                    state.clear_recent_searches();
                    println!("Cleared recent searches");
                    return Ok(());
                }

                let terms = state.recent_searches().terms();
                if terms.is_empty() {
                    println!("No recent searches");
                }
                for term in terms {
                    println!("{}", term);
                }
                Ok(())
            }
        }
    }
}

fn print_recipe(
    state: &State,
    recipe: &Recipe,
    format: &OutputFormat,
) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(recipe)?);
        }
        OutputFormat::Text => {
            print!("{}", recipe);
            if state.is_favourite(&recipe.id) {
                println!("\n* In favourites");
            }
        }
    }
    Ok(())
}

fn print_recipe_table(state: &State, recipes: &[Recipe]) {
    println!(
        "  {:<8} {:<40} {:<14} {}",
        "ID", "Title", "Category", "Area"
    );
    println!("{}", "-".repeat(76));
    for recipe in recipes {
        let marker = if state.is_favourite(&recipe.id) { "*" } else { " " };
        println!(
            "{} {:<8} {:<40} {:<14} {}",
            marker,
            recipe.id,
            truncate(&recipe.title, 40),
            recipe.category.as_deref().unwrap_or("-"),
            recipe.region.as_deref().unwrap_or("-")
        );
    }
}

/// Shorten `s` to at most `max` characters, marking the cut with "...".
pub(crate) fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let kept: String = s.chars().take(max.saturating_sub(3)).collect();
    format!("{}...", kept)
}
