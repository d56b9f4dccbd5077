use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::{MealSlot, SlotSet, WeekStart};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Theme::Light => write!(f, "light"),
            Theme::Dark => write!(f, "dark"),
        }
    }
}

impl FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("Invalid theme '{}'. Valid options: light, dark", s)),
        }
    }
}

/// User preferences. Each field is persisted under its own store key.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Preferences {
    pub theme: Theme,
    pub vegetarian_only: bool,
    pub group_shopping: bool,
    pub week_start: WeekStart,
    pub meal_slots: Vec<MealSlot>,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            theme: Theme::Light,
            vegetarian_only: false,
            group_shopping: true,
            week_start: WeekStart::Mon,
            meal_slots: SlotSet::Three.slots(),
        }
    }
}

impl Preferences {
    pub fn slot_set(&self) -> SlotSet {
        SlotSet::from_slots(&self.meal_slots).unwrap_or_default()
    }
}

impl fmt::Display for Preferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let on_off = |b: bool| if b { "on" } else { "off" };
        let slots: Vec<String> = self.meal_slots.iter().map(ToString::to_string).collect();

        writeln!(f, "theme:          {}", self.theme)?;
        writeln!(f, "vegetarian:     {}", on_off(self.vegetarian_only))?;
        writeln!(f, "group-shopping: {}", on_off(self.group_shopping))?;
        writeln!(f, "week-start:     {}", self.week_start)?;
        write!(f, "slots:          {}", slots.join(", "))
    }
}
