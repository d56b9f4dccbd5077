use clap::{Args, Subcommand, ValueEnum};

use super::State;
use quickbites_core::{Day, MealSlot, RecipeSource, RecipeSummary, WeeklyPlan};

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Args)]
pub struct PlanCommand {
    #[command(subcommand)]
    pub command: PlanSubcommand,
}

#[derive(Subcommand)]
pub enum PlanSubcommand {
    /// Show the weekly plan
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Put a recipe into a day's meal slot
    Assign {
        /// Day (mon, tue, ... or full name)
        #[arg(long, short)]
        day: String,

        /// Meal slot (breakfast, lunch, snack, dinner)
        #[arg(long, short)]
        slot: String,

        /// Recipe ID
        id: String,
    },

    /// Empty a day's meal slot
    Clear {
        /// Day (mon, tue, ... or full name)
        #[arg(long, short)]
        day: String,

        /// Meal slot (breakfast, lunch, snack, dinner)
        #[arg(long, short)]
        slot: String,
    },

    /// Empty every slot in the week
    ClearAll,
}

impl PlanCommand {
    pub async fn run(
        &self,
        state: &mut State,
        source: &dyn RecipeSource,
    ) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            PlanSubcommand::Show { format } => {
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(&state.plan().to_document())?);
                    }
                    OutputFormat::Text => print_plan(state.plan(), Day::today()),
                }
                Ok(())
            }

            PlanSubcommand::Assign { day, slot, id } => {
                let day: Day = day.parse().map_err(|e: String| e)?;
                let slot: MealSlot = slot.parse().map_err(|e: String| e)?;
                let summary = resolve_summary(state, source, id).await?;

                let title = summary.title.clone();
                state.assign(day, slot, summary)?;
                println!("Planned {} for {} {}", title, day, slot);
                Ok(())
            }

            PlanSubcommand::Clear { day, slot } => {
                let day: Day = day.parse().map_err(|e: String| e)?;
                let slot: MealSlot = slot.parse().map_err(|e: String| e)?;

                state.clear_slot(day, slot)?;
                println!("Cleared {} {}", day, slot);
                Ok(())
            }

            PlanSubcommand::ClearAll => {
                let count = state.plan().assigned_count();
                state.clear_plan();
                println!("Cleared {} planned meal(s)", count);
                Ok(())
            }
        }
    }
}

/// Favourites already carry a summary; anything else is looked up.
async fn resolve_summary(
    state: &State,
    source: &dyn RecipeSource,
    id: &str,
) -> Result<RecipeSummary, Box<dyn std::error::Error>> {
    if let Some(summary) = state.favourites().get(id) {
        return Ok(summary.clone());
    }
    let recipe = source
        .get_by_id(id)
        .await?
        .ok_or_else(|| format!("Recipe not found: {}", id))?;
    Ok(recipe.summary())
}

fn print_plan(plan: &WeeklyPlan, today: Day) {
    println!("Weekly Plan");
    println!("{}", "=".repeat(44));

    for day in plan.days() {
        if *day == today {
            println!("{} (today)", day);
        } else {
            println!("{}", day);
        }
        for slot in plan.slots() {
            match plan.get(*day, *slot) {
                Some(summary) => println!("  {:<10} {}", slot.to_string(), summary),
                None => println!("  {:<10} -", slot.to_string()),
            }
        }
    }

    println!("{}", "-".repeat(44));
    println!("{} meal(s) planned", plan.assigned_count());
}
