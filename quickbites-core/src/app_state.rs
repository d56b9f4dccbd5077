//! Application state owner.
//!
//! `AppState` holds every piece of user state (favourites, the weekly plan,
//! preferences and recent searches) and is the only thing that writes it
//! to the store. Mutations update memory first, then persist the affected
//! key. Store failures never reach the caller: a failed read falls back to
//! the default value and a failed write is logged and otherwise ignored.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::mealdb::RecipeSource;
use crate::models::{
    Day, FavouritesRegistry, MealSlot, PlanDocument, PlanError, Preferences, RecentSearches,
    RecipeSummary, ShoppingItem, SlotSet, Theme, WeekStart, WeeklyPlan,
};
use crate::search::SearchFilter;
use crate::shopping::build_shopping_list;
use crate::store::{KeyValueStore, StoreKey};

pub struct AppState<S: KeyValueStore> {
    store: S,
    favourites: FavouritesRegistry,
    plan: WeeklyPlan,
    preferences: Preferences,
    recent: RecentSearches,
}

impl<S: KeyValueStore> AppState<S> {
    /// Load all state from `store`, using defaults for anything missing or
    /// unreadable.
    pub fn load(store: S) -> Self {
        let defaults = Preferences::default();

        let meal_slots = match read::<_, Vec<MealSlot>>(&store, StoreKey::MealSlots) {
            Some(slots) if SlotSet::from_slots(&slots).is_some() => slots,
            Some(slots) => {
                tracing::warn!("Ignoring unsupported meal slot layout {:?}", slots);
                defaults.meal_slots.clone()
            }
            None => defaults.meal_slots.clone(),
        };

        let preferences = Preferences {
            theme: read(&store, StoreKey::Theme).unwrap_or(defaults.theme),
            vegetarian_only: read(&store, StoreKey::VegetarianOnly)
                .unwrap_or(defaults.vegetarian_only),
            group_shopping: read(&store, StoreKey::GroupShopping)
                .unwrap_or(defaults.group_shopping),
            week_start: read(&store, StoreKey::WeekStart).unwrap_or(defaults.week_start),
            meal_slots,
        };

        let days = preferences.week_start.days();
        let slots = preferences.meal_slots.clone();
        let plan = match read::<_, PlanDocument>(&store, StoreKey::WeeklyPlan) {
            Some(doc) => WeeklyPlan::from_document(doc, days.clone(), slots.clone())
                .unwrap_or_else(|| {
                    tracing::warn!("Stored weekly plan does not match planner layout, starting empty");
                    WeeklyPlan::empty(days, slots)
                }),
            None => WeeklyPlan::empty(days, slots),
        };

        Self {
            favourites: read(&store, StoreKey::Favourites).unwrap_or_default(),
            recent: read(&store, StoreKey::RecentSearches).unwrap_or_default(),
            store,
            plan,
            preferences,
        }
    }

    // Favourites

    pub fn favourites(&self) -> &FavouritesRegistry {
        &self.favourites
    }

    pub fn is_favourite(&self, id: &str) -> bool {
        self.favourites.is_favourite(id)
    }

    /// Returns true if the recipe is a favourite afterwards.
    pub fn toggle_favourite(&mut self, summary: RecipeSummary) -> bool {
        let now_favourite = self.favourites.toggle(summary);
        self.persist(StoreKey::Favourites, &self.favourites);
        now_favourite
    }

    pub fn remove_favourite(&mut self, id: &str) {
        if self.favourites.remove(id) {
            self.persist(StoreKey::Favourites, &self.favourites);
        }
    }

    // Weekly plan

    pub fn plan(&self) -> &WeeklyPlan {
        &self.plan
    }

    pub fn assign(
        &mut self,
        day: Day,
        slot: MealSlot,
        summary: RecipeSummary,
    ) -> Result<(), PlanError> {
        let next = self.plan.assign(day, slot, summary)?;
        self.replace_plan(next);
        Ok(())
    }

    pub fn clear_slot(&mut self, day: Day, slot: MealSlot) -> Result<(), PlanError> {
        let next = self.plan.clear(day, slot)?;
        self.replace_plan(next);
        Ok(())
    }

    pub fn clear_plan(&mut self) {
        let next = self.plan.cleared();
        self.replace_plan(next);
    }

    fn replace_plan(&mut self, plan: WeeklyPlan) {
        self.plan = plan;
        self.persist(StoreKey::WeeklyPlan, &self.plan.to_document());
    }

    /// Shopping list for the current plan, grouped per the stored preference.
    pub async fn shopping_list<R>(&self, source: &R) -> Vec<ShoppingItem>
    where
        R: RecipeSource + ?Sized,
    {
        build_shopping_list(&self.plan, source, self.preferences.group_shopping).await
    }

    // Preferences

    pub fn preferences(&self) -> &Preferences {
        &self.preferences
    }

    pub fn set_theme(&mut self, theme: Theme) {
        self.preferences.theme = theme;
        self.persist(StoreKey::Theme, &theme);
    }

    pub fn toggle_theme(&mut self) -> Theme {
        let theme = self.preferences.theme.toggled();
        self.set_theme(theme);
        theme
    }

    pub fn set_vegetarian_only(&mut self, on: bool) {
        self.preferences.vegetarian_only = on;
        self.persist(StoreKey::VegetarianOnly, &on);
    }

    pub fn set_group_shopping(&mut self, on: bool) {
        self.preferences.group_shopping = on;
        self.persist(StoreKey::GroupShopping, &on);
    }

    /// Change the first day of the week. The plan keeps its assignments;
    /// only the day order changes.
    pub fn set_week_start(&mut self, week_start: WeekStart) {
        self.preferences.week_start = week_start;
        self.persist(StoreKey::WeekStart, &week_start);

        let days = week_start.days();
        let next = self
            .plan
            .reordered(days.clone())
            .unwrap_or_else(|| WeeklyPlan::empty(days, self.preferences.meal_slots.clone()));
        self.replace_plan(next);
    }

    /// Change the slot layout. The plan is rebuilt empty.
    pub fn set_slot_set(&mut self, slot_set: SlotSet) {
        if self.preferences.slot_set() == slot_set {
            return;
        }
        let slots = slot_set.slots();
        self.preferences.meal_slots = slots.clone();
        self.persist(StoreKey::MealSlots, &slots);

        let dropped = self.plan.assigned_count();
        if dropped > 0 {
            tracing::warn!(
                "Meal slot layout changed, cleared {} planned meal(s)",
                dropped
            );
        }
        self.replace_plan(WeeklyPlan::empty(self.preferences.week_start.days(), slots));
    }

    /// Filter derived from the stored vegetarian preference.
    pub fn search_filter(&self) -> SearchFilter {
        SearchFilter::new().vegetarian_only(self.preferences.vegetarian_only)
    }

    // Recent searches

    pub fn recent_searches(&self) -> &RecentSearches {
        &self.recent
    }

    pub fn record_search(&mut self, term: &str) {
        if self.recent.record(term) {
            self.persist(StoreKey::RecentSearches, &self.recent);
        }
    }

    pub fn clear_recent_searches(&mut self) {
        self.recent.clear();
        self.persist(StoreKey::RecentSearches, &self.recent);
    }

    fn persist<T: Serialize>(&self, key: StoreKey, value: &T) {
        if let Err(e) = self.store.put_as(key, value) {
            tracing::warn!("Failed to save {}: {}", key, e);
        }
    }
}

fn read<S: KeyValueStore, T: DeserializeOwned>(store: &S, key: StoreKey) -> Option<T> {
    match store.get_as(key) {
        Ok(value) => value,
        Err(e) => {
            tracing::warn!("Failed to load {}, using default: {}", key, e);
            None
        }
    }
}
