use serde::{Deserialize, Serialize};
use std::fmt;

/// One line of a recipe's ingredient list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Ingredient {
    pub name: String,
    /// Free-text measure ("1 tsp", "to taste"); empty when the source gave none.
    pub amount: String,
}

impl Ingredient {
    pub fn new(name: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
        }
    }
}

impl fmt::Display for Ingredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.amount.is_empty() {
            write!(f, "{}", self.name)
        } else {
            write!(f, "{} {}", self.amount, self.name)
        }
    }
}

/// A full recipe record as returned by the recipe data source.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Recipe {
    pub id: String,
    pub title: String,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub region: Option<String>,
    pub instructions: String,
    pub video_url: Option<String>,
    pub ingredients: Vec<Ingredient>,
}

impl Recipe {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            thumbnail_url: None,
            category: None,
            region: None,
            instructions: String::new(),
            video_url: None,
            ingredients: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    pub fn with_ingredients(mut self, ingredients: Vec<Ingredient>) -> Self {
        self.ingredients = ingredients;
        self
    }

    /// Instruction text split into non-empty, trimmed lines.
    pub fn steps(&self) -> Vec<&str> {
        self.instructions
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect()
    }

    pub fn summary(&self) -> RecipeSummary {
        RecipeSummary::from(self)
    }
}

impl fmt::Display for Recipe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.title)?;
        writeln!(f, "{}", "=".repeat(self.title.chars().count()))?;
        writeln!(f, "ID: {}", self.id)?;

        match (&self.category, &self.region) {
            (Some(category), Some(region)) => writeln!(f, "{} • {}", category, region)?,
            (Some(category), None) => writeln!(f, "{}", category)?,
            (None, Some(region)) => writeln!(f, "{}", region)?,
            (None, None) => {}
        }

        if !self.ingredients.is_empty() {
            writeln!(f, "\nIngredients:")?;
            for ingredient in &self.ingredients {
                writeln!(f, "  - {}", ingredient)?;
            }
        }

        let steps = self.steps();
        if !steps.is_empty() {
            writeln!(f, "\nInstructions:")?;
            for (i, step) in steps.iter().enumerate() {
                writeln!(f, "  {}. {}", i + 1, step)?;
            }
        }

        if let Some(video) = &self.video_url {
            writeln!(f, "\nVideo: {}", video)?;
        }

        Ok(())
    }
}

/// Display-only subset of a recipe, stored in favourites and plan cells.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecipeSummary {
    pub id: String,
    pub title: String,
    pub thumbnail_url: Option<String>,
    pub category: Option<String>,
    pub region: Option<String>,
}

impl RecipeSummary {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            thumbnail_url: None,
            category: None,
            region: None,
        }
    }
}

impl From<&Recipe> for RecipeSummary {
    fn from(recipe: &Recipe) -> Self {
        Self {
            id: recipe.id.clone(),
            title: recipe.title.clone(),
            thumbnail_url: recipe.thumbnail_url.clone(),
            category: recipe.category.clone(),
            region: recipe.region.clone(),
        }
    }
}

impl fmt::Display for RecipeSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.title, self.id)
    }
}
