use clap::{Args, Subcommand, ValueEnum};

use super::State;
use quickbites_core::{SlotSet, Theme, WeekStart};

#[derive(Clone, ValueEnum, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

impl Switch {
    fn is_on(self) -> bool {
        matches!(self, Switch::On)
    }
}

#[derive(Args)]
pub struct PrefsCommand {
    #[command(subcommand)]
    pub command: PrefsSubcommand,
}

#[derive(Subcommand)]
pub enum PrefsSubcommand {
    /// Show current preferences
    Show {
        /// Output format
        #[arg(long, short, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Set the theme (light, dark or toggle)
    Theme {
        /// light, dark or toggle
        value: String,
    },

    /// Only show vegetarian recipes in search results
    Vegetarian {
        #[arg(value_enum)]
        value: Switch,
    },

    /// Merge duplicate ingredients in the shopping list
    GroupShopping {
        #[arg(value_enum)]
        value: Switch,
    },

    /// First day of the planner week (mon or sun)
    WeekStart {
        value: String,
    },

    /// Number of meal slots per day (3 or 4)
    Slots {
        value: String,
    },
}

impl PrefsCommand {
    pub fn run(&self, state: &mut State) -> Result<(), Box<dyn std::error::Error>> {
        match &self.command {
            PrefsSubcommand::Show { format } => {
                match format {
                    OutputFormat::Json => {
                        println!("{}", serde_json::to_string_pretty(state.preferences())?);
                    }
                    OutputFormat::Text => {
                        println!("{}", state.preferences());
                    }
                }
                Ok(())
            }

            PrefsSubcommand::Theme { value } => {
                let theme = if value.trim().eq_ignore_ascii_case("toggle") {
                    state.toggle_theme()
                } else {
                    let theme: Theme = value.parse().map_err(|e: String| e)?;
                    state.set_theme(theme);
                    theme
                };
                println!("theme: {}", theme);
                Ok(())
            }

            PrefsSubcommand::Vegetarian { value } => {
                state.set_vegetarian_only(value.is_on());
                println!("vegetarian: {}", on_off(value.is_on()));
                Ok(())
            }

            PrefsSubcommand::GroupShopping { value } => {
                state.set_group_shopping(value.is_on());
                println!("group-shopping: {}", on_off(value.is_on()));
                Ok(())
            }

            PrefsSubcommand::WeekStart { value } => {
                let week_start: WeekStart = value.parse().map_err(|e: String| e)?;
                state.set_week_start(week_start);
                println!("week-start: {}", week_start);
                Ok(())
            }

            PrefsSubcommand::Slots { value } => {
                let slot_set: SlotSet = value.parse().map_err(|e: String| e)?;
                let planned = state.plan().assigned_count();
                let changed = state.preferences().slot_set() != slot_set;

                state.set_slot_set(slot_set);

                let names: Vec<String> = slot_set.slots().iter().map(ToString::to_string).collect();
                println!("slots: {}", names.join(", "));
                if changed && planned > 0 {
                    println!("Cleared {} planned meal(s)", planned);
                }
                Ok(())
            }
        }
    }
}

fn on_off(on: bool) -> &'static str {
    if on {
        "on"
    } else {
        "off"
    }
}
