//! Client-side filtering of search results.

use crate::models::Recipe;

/// Category name the catalogue uses for meat-free recipes.
pub const VEGETARIAN_CATEGORY: &str = "Vegetarian";

/// Filters applied to recipe search results.
///
/// Empty category/area selections accept everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    pub vegetarian_only: bool,
    pub categories: Vec<String>,
    pub areas: Vec<String>,
}

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn vegetarian_only(mut self, on: bool) -> Self {
        self.vegetarian_only = on;
        self
    }

    pub fn with_categories(mut self, categories: Vec<String>) -> Self {
        self.categories = categories;
        self
    }

    pub fn with_areas(mut self, areas: Vec<String>) -> Self {
        self.areas = areas;
        self
    }

    pub fn matches(&self, recipe: &Recipe) -> bool {
        let category = recipe.category.as_deref();
        if self.vegetarian_only && category != Some(VEGETARIAN_CATEGORY) {
            return false;
        }
        if !selected(&self.categories, category) {
            return false;
        }
        selected(&self.areas, recipe.region.as_deref())
    }

    pub fn apply(&self, recipes: Vec<Recipe>) -> Vec<Recipe> {
        recipes.into_iter().filter(|r| self.matches(r)).collect()
    }
}

fn selected(selection: &[String], value: Option<&str>) -> bool {
    if selection.is_empty() {
        return true;
    }
    value.is_some_and(|v| selection.iter().any(|s| s.eq_ignore_ascii_case(v)))
}
