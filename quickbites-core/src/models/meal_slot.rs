use chrono::{Datelike, Local, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A named meal position within a day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum MealSlot {
    Breakfast,
    Lunch,
    Snack,
    Dinner,
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MealSlot::Breakfast => write!(f, "Breakfast"),
            MealSlot::Lunch => write!(f, "Lunch"),
            MealSlot::Snack => write!(f, "Snack"),
            MealSlot::Dinner => write!(f, "Dinner"),
        }
    }
}

impl FromStr for MealSlot {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "breakfast" => Ok(MealSlot::Breakfast),
            "lunch" => Ok(MealSlot::Lunch),
            "snack" => Ok(MealSlot::Snack),
            "dinner" => Ok(MealSlot::Dinner),
            _ => Err(format!(
                "Invalid meal slot '{}'. Valid options: breakfast, lunch, snack, dinner",
                s
            )),
        }
    }
}

/// The two supported slot layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlotSet {
    #[default]
    Three,
    Four,
}

impl SlotSet {
    pub fn slots(self) -> Vec<MealSlot> {
        match self {
            SlotSet::Three => vec![MealSlot::Breakfast, MealSlot::Lunch, MealSlot::Dinner],
            SlotSet::Four => vec![
                MealSlot::Breakfast,
                MealSlot::Lunch,
                MealSlot::Snack,
                MealSlot::Dinner,
            ],
        }
    }

    /// Recognise a stored slot list. Anything other than the two fixed
    /// layouts is rejected.
    pub fn from_slots(slots: &[MealSlot]) -> Option<Self> {
        [SlotSet::Three, SlotSet::Four]
            .into_iter()
            .find(|set| set.slots() == slots)
    }
}

impl FromStr for SlotSet {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "3" => Ok(SlotSet::Three),
            "4" => Ok(SlotSet::Four),
            _ => Err(format!("Invalid slot count '{}'. Valid options: 3, 4", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Day {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Day {
    const MONDAY_FIRST: [Day; 7] = [
        Day::Mon,
        Day::Tue,
        Day::Wed,
        Day::Thu,
        Day::Fri,
        Day::Sat,
        Day::Sun,
    ];

    pub fn today() -> Self {
        Local::now().date_naive().weekday().into()
    }
}

impl From<Weekday> for Day {
    fn from(weekday: Weekday) -> Self {
        Day::MONDAY_FIRST[weekday.num_days_from_monday() as usize]
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Day::Mon => "Mon",
            Day::Tue => "Tue",
            Day::Wed => "Wed",
            Day::Thu => "Thu",
            Day::Fri => "Fri",
            Day::Sat => "Sat",
            Day::Sun => "Sun",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Day {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mon" | "monday" => Ok(Day::Mon),
            "tue" | "tuesday" => Ok(Day::Tue),
            "wed" | "wednesday" => Ok(Day::Wed),
            "thu" | "thursday" => Ok(Day::Thu),
            "fri" | "friday" => Ok(Day::Fri),
            "sat" | "saturday" => Ok(Day::Sat),
            "sun" | "sunday" => Ok(Day::Sun),
            _ => Err(format!(
                "Invalid day '{}'. Valid options: mon, tue, wed, thu, fri, sat, sun",
                s
            )),
        }
    }
}

/// First day of the planner week.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum WeekStart {
    #[default]
    Mon,
    Sun,
}

impl WeekStart {
    pub fn days(self) -> Vec<Day> {
        match self {
            WeekStart::Mon => Day::MONDAY_FIRST.to_vec(),
            WeekStart::Sun => {
                let mut days = vec![Day::Sun];
                days.extend_from_slice(&Day::MONDAY_FIRST[..6]);
                days
            }
        }
    }
}

impl fmt::Display for WeekStart {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WeekStart::Mon => write!(f, "Mon"),
            WeekStart::Sun => write!(f, "Sun"),
        }
    }
}

impl FromStr for WeekStart {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.parse::<Day>() {
            Ok(Day::Mon) => Ok(WeekStart::Mon),
            Ok(Day::Sun) => Ok(WeekStart::Sun),
            _ => Err(format!(
                "Invalid week start '{}'. Valid options: mon, sun",
                s
            )),
        }
    }
}
