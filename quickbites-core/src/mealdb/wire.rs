//! TheMealDB JSON records.
//!
//! A meal record carries its ingredient list as twenty numbered field pairs
//! (`strIngredient1`/`strMeasure1` .. `strIngredient20`/`strMeasure20`).
//! Those are collected into a fixed array of [`IngredientSlot`]s when the
//! record is decoded, and everything downstream walks the array by index.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::HashMap;

use crate::models::{Ingredient, Recipe};

/// Number of ingredient/measure pairs on a meal record.
pub const INGREDIENT_SLOTS: usize = 20;

const INGREDIENT_PREFIX: &str = "strIngredient";
const MEASURE_PREFIX: &str = "strMeasure";

/// `{"meals": [...]}`; the API sends `null` instead of an empty list.
#[derive(Debug, Deserialize)]
pub struct Envelope<T> {
    pub meals: Option<Vec<T>>,
}

impl<T> Envelope<T> {
    pub fn into_items(self) -> Vec<T> {
        self.meals.unwrap_or_default()
    }
}

#[derive(Debug, Deserialize)]
pub struct CategoryEntry {
    #[serde(rename = "strCategory")]
    pub category: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct AreaEntry {
    #[serde(rename = "strArea")]
    pub area: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngredientSlot {
    pub name: Option<String>,
    pub measure: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(from = "RawMeal")]
pub struct MealRecord {
    pub id: String,
    pub title: String,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub area: Option<String>,
    pub instructions: Option<String>,
    pub youtube_url: Option<String>,
    pub slots: [IngredientSlot; INGREDIENT_SLOTS],
}

impl MealRecord {
    /// Non-blank ingredient slots, in slot order, trimmed.
    pub fn ingredients(&self) -> Vec<Ingredient> {
        extract_ingredients(&self.slots)
    }
}

pub fn extract_ingredients(slots: &[IngredientSlot; INGREDIENT_SLOTS]) -> Vec<Ingredient> {
    slots
        .iter()
        .filter_map(|slot| {
            let name = slot.name.as_deref().map(str::trim).unwrap_or("");
            if name.is_empty() {
                return None;
            }
            let amount = slot.measure.as_deref().map(str::trim).unwrap_or("");
            Some(Ingredient::new(name, amount))
        })
        .collect()
}

impl From<MealRecord> for Recipe {
    fn from(record: MealRecord) -> Self {
        let ingredients = record.ingredients();
        Recipe {
            id: record.id,
            title: record.title,
            thumbnail_url: record.thumbnail_url,
            category: record.category,
            region: record.area,
            instructions: record.instructions.unwrap_or_default(),
            video_url: record.youtube_url,
            ingredients,
        }
    }
}

#[derive(Deserialize)]
struct RawMeal {
    #[serde(rename = "idMeal", deserialize_with = "string_or_number")]
    id: String,
    #[serde(rename = "strMeal", default)]
    title: Option<String>,
    #[serde(rename = "strMealThumb", default)]
    thumbnail_url: Option<String>,
    #[serde(rename = "strCategory", default)]
    category: Option<String>,
    #[serde(rename = "strArea", default)]
    area: Option<String>,
    #[serde(rename = "strInstructions", default)]
    instructions: Option<String>,
    #[serde(rename = "strYoutube", default)]
    youtube_url: Option<String>,
    #[serde(flatten)]
    rest: HashMap<String, Value>,
}

impl From<RawMeal> for MealRecord {
    fn from(raw: RawMeal) -> Self {
        let mut slots: [IngredientSlot; INGREDIENT_SLOTS] = Default::default();

        for (field, value) in raw.rest {
            let Some(text) = value.as_str().map(str::to_string) else {
                continue;
            };
            if let Some(index) = slot_index(&field, INGREDIENT_PREFIX) {
                slots[index].name = Some(text);
            } else if let Some(index) = slot_index(&field, MEASURE_PREFIX) {
                slots[index].measure = Some(text);
            }
        }

        MealRecord {
            id: raw.id,
            title: raw.title.unwrap_or_default(),
            thumbnail_url: non_empty(raw.thumbnail_url),
            category: non_empty(raw.category),
            area: non_empty(raw.area),
            instructions: raw.instructions,
            youtube_url: non_empty(raw.youtube_url),
            slots,
        }
    }
}

/// `strIngredient7` -> Some(6). Numbers outside 1..=20 are ignored.
fn slot_index(field: &str, prefix: &str) -> Option<usize> {
    let number: usize = field.strip_prefix(prefix)?.parse().ok()?;
    (1..=INGREDIENT_SLOTS).contains(&number).then(|| number - 1)
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(s),
        Value::Number(n) => Ok(n.to_string()),
        other => Err(serde::de::Error::custom(format!(
            "expected string or number for idMeal, got {}",
            other
        ))),
    }
}
