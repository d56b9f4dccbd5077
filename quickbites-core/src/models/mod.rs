mod favourites;
mod meal_slot;
mod preferences;
mod recent;
mod recipe;
mod shopping;
mod weekly_plan;

pub use favourites::FavouritesRegistry;
pub use meal_slot::{Day, MealSlot, SlotSet, WeekStart};
pub use preferences::{Preferences, Theme};
pub use recent::RecentSearches;
pub use recipe::{Ingredient, Recipe, RecipeSummary};
pub use shopping::{recipe_shopping_list, ShoppingItem};
pub use weekly_plan::{PlanDocument, PlanError, WeeklyPlan};
