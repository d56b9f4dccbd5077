//! Shopping list aggregation over a weekly plan.
//!
//! Each distinct planned recipe is fetched once. With grouping enabled,
//! ingredients with the same case-insensitive name collapse into one item
//! whose amount lists every non-empty amount and whose source lists every
//! contributing recipe.

use futures::future::join_all;
use std::collections::HashMap;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use crate::mealdb::RecipeSource;
use crate::models::{recipe_shopping_list, ShoppingItem, WeeklyPlan};

/// Amount shown for a grouped item when no recipe gave a measure.
pub const NO_AMOUNT: &str = "—";

const AMOUNT_SEPARATOR: &str = " + ";
const SOURCE_SEPARATOR: &str = ", ";

/// Build the shopping list for every recipe in `plan`.
///
/// Fetches run concurrently; results are reassembled in plan discovery
/// order. Recipes that are missing or fail to load are skipped.
pub async fn build_shopping_list<S>(
    plan: &WeeklyPlan,
    source: &S,
    group_duplicates: bool,
) -> Vec<ShoppingItem>
where
    S: RecipeSource + ?Sized,
{
    let ids = plan.distinct_recipe_ids();
    let fetches = ids.iter().map(|id| source.get_by_id(id));
    let results = join_all(fetches).await;

    let mut items = Vec::new();
    for (id, result) in ids.iter().zip(results) {
        match result {
            Ok(Some(recipe)) => items.extend(recipe_shopping_list(&recipe)),
            Ok(None) => tracing::debug!("Planned recipe {} not found, skipping", id),
            Err(e) => tracing::warn!("Failed to fetch planned recipe {}: {}", id, e),
        }
    }

    if group_duplicates {
        group_items(items)
    } else {
        items
    }
}

struct Bucket {
    name: String,
    amounts: Vec<String>,
    sources: Vec<String>,
}

/// Merge items by case-insensitive name and sort the result by name,
/// ignoring case and accents.
pub fn group_items(items: Vec<ShoppingItem>) -> Vec<ShoppingItem> {
    let mut buckets: Vec<Bucket> = Vec::new();
    let mut index: HashMap<String, usize> = HashMap::new();

    for item in items {
        let key = item.name.to_lowercase();
        let slot = *index.entry(key).or_insert_with(|| {
            buckets.push(Bucket {
                name: item.name.clone(),
                amounts: Vec::new(),
                sources: Vec::new(),
            });
            buckets.len() - 1
        });
        let bucket = &mut buckets[slot];

        if !item.amount.is_empty() {
            bucket.amounts.push(item.amount);
        }
        if !item.source.is_empty() && !bucket.sources.contains(&item.source) {
            bucket.sources.push(item.source);
        }
    }

    let mut grouped: Vec<ShoppingItem> = buckets
        .into_iter()
        .map(|bucket| {
            let amount = if bucket.amounts.is_empty() {
                NO_AMOUNT.to_string()
            } else {
                bucket.amounts.join(AMOUNT_SEPARATOR)
            };
            ShoppingItem::new(bucket.name, amount, bucket.sources.join(SOURCE_SEPARATOR))
        })
        .collect();

    grouped.sort_by_cached_key(|item| (collation_key(&item.name), item.name.clone()));
    grouped
}

/// Sort key for ingredient names: accents stripped, then lower-cased.
fn collation_key(name: &str) -> String {
    name.nfd()
        .filter(|c| !is_combining_mark(*c))
        .collect::<String>()
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mealdb::ApiError;
    use crate::models::{Day, Ingredient, MealSlot, Recipe, SlotSet, WeekStart};
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Recipe source backed by a map, counting lookups per id.
    #[derive(Default)]
    struct FakeSource {
        recipes: HashMap<String, Recipe>,
        failing: Vec<String>,
        lookups: Mutex<HashMap<String, usize>>,
    }

    impl FakeSource {
        fn with(mut self, recipe: Recipe) -> Self {
            self.recipes.insert(recipe.id.clone(), recipe);
            self
        }

        fn failing(mut self, id: &str) -> Self {
            self.failing.push(id.to_string());
            self
        }

        fn lookups(&self, id: &str) -> usize {
            self.lookups.lock().unwrap().get(id).copied().unwrap_or(0)
        }
    }

    #[async_trait]
    impl RecipeSource for FakeSource {
        async fn search_by_text(&self, _query: &str) -> Result<Vec<Recipe>, ApiError> {
            Ok(self.recipes.values().cloned().collect())
        }

        async fn get_by_id(&self, id: &str) -> Result<Option<Recipe>, ApiError> {
            *self
                .lookups
                .lock()
                .unwrap()
                .entry(id.to_string())
                .or_insert(0) += 1;
            if self.failing.iter().any(|f| f == id) {
                return Err(ApiError::Status {
                    url: format!("lookup.php?i={}", id),
                    status: 500,
                });
            }
            Ok(self.recipes.get(id).cloned())
        }

        async fn get_random(&self) -> Result<Option<Recipe>, ApiError> {
            Ok(None)
        }

        async fn list_categories(&self) -> Result<Vec<String>, ApiError> {
            Ok(Vec::new())
        }

        async fn list_areas(&self) -> Result<Vec<String>, ApiError> {
            Ok(Vec::new())
        }
    }

    fn recipe(id: &str, title: &str, ingredients: &[(&str, &str)]) -> Recipe {
        Recipe::new(id, title).with_ingredients(
            ingredients
                .iter()
                .map(|(name, amount)| Ingredient::new(*name, *amount))
                .collect(),
        )
    }

    fn empty_plan() -> WeeklyPlan {
        WeeklyPlan::empty(WeekStart::Mon.days(), SlotSet::Three.slots())
    }

    fn plan_with(cells: &[(Day, MealSlot, &Recipe)]) -> WeeklyPlan {
        cells.iter().fold(empty_plan(), |plan, (day, slot, r)| {
            plan.assign(*day, *slot, r.summary()).unwrap()
        })
    }

    #[tokio::test]
    async fn test_same_recipe_fetched_once() {
        let soup = recipe("1", "Soup", &[("Leek", "2")]);
        let source = FakeSource::default().with(soup.clone());
        let plan = plan_with(&[
            (Day::Mon, MealSlot::Lunch, &soup),
            (Day::Tue, MealSlot::Dinner, &soup),
            (Day::Fri, MealSlot::Breakfast, &soup),
        ]);

        let items = build_shopping_list(&plan, &source, false).await;

        assert_eq!(source.lookups("1"), 1);
        assert_eq!(items, vec![ShoppingItem::new("Leek", "2", "Soup")]);
    }

    #[tokio::test]
    async fn test_ungrouped_keeps_discovery_order() {
        let a = recipe("a", "Stew", &[("Beef", "500 g"), ("Salt", "1 tsp")]);
        let b = recipe("b", "Curry", &[("Rice", "1 cup")]);
        let source = FakeSource::default().with(a.clone()).with(b.clone());
        // b is planned earlier in the week than a
        let plan = plan_with(&[
            (Day::Wed, MealSlot::Dinner, &a),
            (Day::Mon, MealSlot::Dinner, &b),
        ]);

        let items = build_shopping_list(&plan, &source, false).await;

        assert_eq!(items.len(), 3);
        assert_eq!(items[0], ShoppingItem::new("Rice", "1 cup", "Curry"));
        assert_eq!(items[1].name, "Beef");
        assert_eq!(items[2].name, "Salt");
    }

    #[tokio::test]
    async fn test_grouped_merges_amounts_and_sources() {
        let a = recipe("a", "Stew", &[("Salt", "1 tsp"), ("Beef", "500 g")]);
        let b = recipe("b", "Curry", &[("salt", "2 tsp")]);
        let source = FakeSource::default().with(a.clone()).with(b.clone());
        let plan = plan_with(&[
            (Day::Mon, MealSlot::Dinner, &a),
            (Day::Tue, MealSlot::Dinner, &b),
        ]);

        let items = build_shopping_list(&plan, &source, true).await;

        assert_eq!(
            items,
            vec![
                ShoppingItem::new("Beef", "500 g", "Stew"),
                ShoppingItem::new("Salt", "1 tsp + 2 tsp", "Stew, Curry"),
            ]
        );
    }

    #[tokio::test]
    async fn test_missing_and_failing_recipes_are_skipped() {
        let a = recipe("a", "Stew", &[("Beef", "500 g")]);
        let gone = recipe("gone", "Removed", &[("Ghost", "1")]);
        let broken = recipe("broken", "Broken", &[("Error", "1")]);
        let source = FakeSource::default().with(a.clone()).failing("broken");
        let plan = plan_with(&[
            (Day::Mon, MealSlot::Lunch, &gone),
            (Day::Mon, MealSlot::Dinner, &broken),
            (Day::Tue, MealSlot::Dinner, &a),
        ]);

        let items = build_shopping_list(&plan, &source, false).await;

        assert_eq!(items, vec![ShoppingItem::new("Beef", "500 g", "Stew")]);
        assert_eq!(source.lookups("gone"), 1);
        assert_eq!(source.lookups("broken"), 1);
    }

    #[tokio::test]
    async fn test_empty_plan_gives_empty_list() {
        let source = FakeSource::default();
        let items = build_shopping_list(&empty_plan(), &source, true).await;
        assert!(items.is_empty());
    }

    #[test]
    fn test_group_placeholder_for_empty_amounts() {
        let items = vec![
            ShoppingItem::new("Pepper", "", "Stew"),
            ShoppingItem::new("pepper", "", "Curry"),
        ];

        let grouped = group_items(items);
        assert_eq!(
            grouped,
            vec![ShoppingItem::new("Pepper", NO_AMOUNT, "Stew, Curry")]
        );
    }

    #[test]
    fn test_group_skips_empty_amounts_only() {
        let items = vec![
            ShoppingItem::new("Garlic", "", "Stew"),
            ShoppingItem::new("Garlic", "2 cloves", "Curry"),
        ];

        let grouped = group_items(items);
        assert_eq!(grouped[0].amount, "2 cloves");
    }

    #[test]
    fn test_group_sorts_case_insensitively() {
        let items = vec![
            ShoppingItem::new("Tomato", "1", "A"),
            ShoppingItem::new("apple", "2", "A"),
            ShoppingItem::new("Banana", "3", "A"),
        ];

        let names: Vec<_> = group_items(items).into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["apple", "Banana", "Tomato"]);
    }

    #[test]
    fn test_group_sorts_accented_names_with_base_letter() {
        let items = vec![
            ShoppingItem::new("Zucchini", "1", "A"),
            ShoppingItem::new("Éclair", "2", "A"),
            ShoppingItem::new("eggs", "3", "A"),
        ];

        let names: Vec<_> = group_items(items).into_iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["Éclair", "eggs", "Zucchini"]);
    }

    #[test]
    fn test_collation_key_folds_case_and_accents() {
        assert_eq!(collation_key("Crème Fraîche"), "creme fraiche");
        assert_eq!(collation_key("JALAPEÑO"), "jalapeno");
    }

    #[test]
    fn test_group_lists_each_source_once() {
        let items = vec![
            ShoppingItem::new("Onion", "1", "Stew"),
            ShoppingItem::new("Onion", "1", "Curry"),
            ShoppingItem::new("onion", "2", "Stew"),
        ];

        let grouped = group_items(items);
        assert_eq!(grouped.len(), 1);
        assert_eq!(grouped[0].amount, "1 + 1 + 2");
        assert_eq!(grouped[0].source, "Stew, Curry");
    }
}
