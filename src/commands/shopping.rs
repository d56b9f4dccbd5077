//! Shopping list for the weekly plan.

use clap::{Args, ValueEnum};

use super::State;
use quickbites_core::{build_shopping_list, RecipeSource};

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Args)]
pub struct ShoppingCommand {
    /// Merge duplicate ingredients across recipes
    #[arg(long, conflicts_with = "no_group")]
    group: bool,

    /// List every ingredient per recipe
    #[arg(long)]
    no_group: bool,

    /// Output format
    #[arg(long, short, value_enum, default_value = "table")]
    format: OutputFormat,
}

impl ShoppingCommand {
    /// `--group`/`--no-group` override the stored preference for this run only.
    fn group_override(&self) -> Option<bool> {
        match (self.group, self.no_group) {
            (true, _) => Some(true),
            (_, true) => Some(false),
            _ => None,
        }
    }

    pub async fn run(
        &self,
        state: &State,
        source: &dyn RecipeSource,
    ) -> Result<(), Box<dyn std::error::Error>> {
        let items = match self.group_override() {
            Some(group) => build_shopping_list(state.plan(), source, group).await,
            None => state.shopping_list(source).await,
        };

        match self.format {
            OutputFormat::Json => {
                println!("{}", serde_json::to_string_pretty(&items)?);
            }
            OutputFormat::Table => {
                println!("Shopping List");
                println!("{}", "=".repeat(44));

                if items.is_empty() {
                    if state.plan().assigned_count() == 0 {
                        println!("No meals planned this week.");
                    } else {
                        println!("No ingredients found for planned meals.");
                    }
                    return Ok(());
                }

                for item in &items {
                    println!("[ ] {}", item);
                }
                println!("{}", "-".repeat(44));
                println!("{} item(s)", items.len());
            }
        }
        Ok(())
    }
}
