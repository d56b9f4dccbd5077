use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Ingredient, Recipe};

/// A line on a shopping list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ShoppingItem {
    pub name: String,
    pub amount: String,
    /// Recipe title, or comma-joined titles once duplicates are grouped.
    pub source: String,
}

impl ShoppingItem {
    pub fn new(
        name: impl Into<String>,
        amount: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            amount: amount.into(),
            source: source.into(),
        }
    }

    pub fn from_ingredient(ingredient: &Ingredient, source: &str) -> Self {
        Self::new(
            ingredient.name.trim(),
            ingredient.amount.trim(),
            source,
        )
    }
}

impl fmt::Display for ShoppingItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:<25} {:<20} {}", self.name, self.amount, self.source)
    }
}

/// Shopping list for a single recipe, one item per ingredient.
pub fn recipe_shopping_list(recipe: &Recipe) -> Vec<ShoppingItem> {
    recipe
        .ingredients
        .iter()
        .map(|ingredient| ShoppingItem::from_ingredient(ingredient, &recipe.title))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_aligns_columns() {
        let item = ShoppingItem::new("Salt", "1 tsp", "Soup");
        assert_eq!(
            item.to_string(),
            format!("{:<25} {:<20} {}", "Salt", "1 tsp", "Soup")
        );
    }

    #[test]
    fn test_from_ingredient_trims() {
        let item = ShoppingItem::from_ingredient(&Ingredient::new(" Salt ", " 1 tsp"), "Soup");
        assert_eq!(item, ShoppingItem::new("Salt", "1 tsp", "Soup"));
    }

    #[test]
    fn test_recipe_shopping_list() {
        let recipe = Recipe::new("1", "Omelette").with_ingredients(vec![
            Ingredient::new("Eggs", "3"),
            Ingredient::new("Butter", ""),
        ]);

        let items = recipe_shopping_list(&recipe);
        assert_eq!(items.len(), 2);
        assert_eq!(items[0], ShoppingItem::new("Eggs", "3", "Omelette"));
        assert_eq!(items[1].amount, "");
        assert!(items.iter().all(|i| i.source == "Omelette"));
    }
}
