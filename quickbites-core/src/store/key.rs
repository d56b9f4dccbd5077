//! Keys under which each entity is persisted.

/// Every entity owns exactly one key; values are whole JSON documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreKey {
    Favourites,
    WeeklyPlan,
    Theme,
    VegetarianOnly,
    GroupShopping,
    WeekStart,
    MealSlots,
    RecentSearches,
}

impl StoreKey {
    pub const ALL: [StoreKey; 8] = [
        StoreKey::Favourites,
        StoreKey::WeeklyPlan,
        StoreKey::Theme,
        StoreKey::VegetarianOnly,
        StoreKey::GroupShopping,
        StoreKey::WeekStart,
        StoreKey::MealSlots,
        StoreKey::RecentSearches,
    ];

    /// Returns the key name for this entity.
    pub fn as_str(&self) -> &'static str {
        match self {
            StoreKey::Favourites => "favourites",
            StoreKey::WeeklyPlan => "weekly-plan",
            StoreKey::Theme => "pref:theme",
            StoreKey::VegetarianOnly => "pref:vegetarian-only",
            StoreKey::GroupShopping => "pref:group-shopping",
            StoreKey::WeekStart => "pref:week-start",
            StoreKey::MealSlots => "pref:meal-slots",
            StoreKey::RecentSearches => "recent-searches",
        }
    }

    /// Returns the filename used by the file store.
    pub fn filename(&self) -> String {
        format!("{}.json", self.as_str().replace(':', "_"))
    }
}

impl std::fmt::Display for StoreKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
