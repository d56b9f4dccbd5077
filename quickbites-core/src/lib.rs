//! QuickBites Core Library
//!
//! Recipe models, the weekly planner, shopping list aggregation and the
//! TheMealDB client shared by QuickBites front ends.

pub mod app_state;
pub mod mealdb;
pub mod models;
pub mod search;
pub mod shopping;
pub mod store;

pub use app_state::AppState;
pub use mealdb::{ApiError, MealDbClient, RecipeSource, DEFAULT_BASE_URL};
pub use models::{
    Day, FavouritesRegistry, Ingredient, MealSlot, PlanDocument, PlanError, Preferences,
    RecentSearches, Recipe, RecipeSummary, ShoppingItem, SlotSet, Theme, WeekStart, WeeklyPlan,
};
pub use search::SearchFilter;
pub use shopping::{build_shopping_list, group_items};
pub use store::{FileStore, KeyValueStore, MemoryStore, StorageError, StoreKey};

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
