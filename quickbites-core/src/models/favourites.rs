//! Favourite recipes keyed by recipe id.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::RecipeSummary;

/// Mapping from recipe id to its summary.
///
/// Enumeration order is unspecified; use [`FavouritesRegistry::sorted_by_title`]
/// when a stable listing is needed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FavouritesRegistry {
    entries: HashMap<String, RecipeSummary>,
}

impl FavouritesRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_favourite(&self, id: &str) -> bool {
        self.entries.contains_key(id)
    }

    /// Remove the recipe if present, otherwise add it.
    /// Returns true if the recipe is a favourite afterwards.
    pub fn toggle(&mut self, summary: RecipeSummary) -> bool {
        if self.entries.remove(&summary.id).is_some() {
            false
        } else {
            self.entries.insert(summary.id.clone(), summary);
            true
        }
    }

    /// Returns true if an entry was removed.
    pub fn remove(&mut self, id: &str) -> bool {
        self.entries.remove(id).is_some()
    }

    pub fn get(&self, id: &str) -> Option<&RecipeSummary> {
        self.entries.get(id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sorted_by_title(&self) -> Vec<&RecipeSummary> {
        let mut items: Vec<_> = self.entries.values().collect();
        items.sort_by(|a, b| {
            a.title
                .to_lowercase()
                .cmp(&b.title.to_lowercase())
                .then_with(|| a.id.cmp(&b.id))
        });
        items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(id: &str, title: &str) -> RecipeSummary {
        RecipeSummary::new(id, title)
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut favs = FavouritesRegistry::new();
        assert!(!favs.is_favourite("1"));

        assert!(favs.toggle(summary("1", "Pancakes")));
        assert!(favs.is_favourite("1"));
        assert_eq!(favs.len(), 1);

        assert!(!favs.toggle(summary("1", "Pancakes")));
        assert!(!favs.is_favourite("1"));
        assert!(favs.is_empty());
    }

    #[test]
    fn test_double_toggle_restores_registry() {
        let mut favs = FavouritesRegistry::new();
        favs.toggle(summary("1", "Pancakes"));
        favs.toggle(summary("2", "Laksa"));
        let before = favs.clone();

        favs.toggle(summary("3", "Ramen"));
        favs.toggle(summary("3", "Ramen"));
        assert_eq!(favs, before);

        favs.toggle(summary("2", "Laksa"));
        favs.toggle(summary("2", "Laksa"));
        assert_eq!(favs, before);
    }

    #[test]
    fn test_remove_absent_is_noop() {
        let mut favs = FavouritesRegistry::new();
        favs.toggle(summary("1", "Pancakes"));

        assert!(!favs.remove("missing"));
        assert_eq!(favs.len(), 1);
        assert!(favs.remove("1"));
        assert!(favs.is_empty());
    }

    #[test]
    fn test_sorted_by_title() {
        let mut favs = FavouritesRegistry::new();
        favs.toggle(summary("1", "tacos"));
        favs.toggle(summary("2", "Apple Pie"));
        favs.toggle(summary("3", "Bibimbap"));

        let titles: Vec<_> = favs
            .sorted_by_title()
            .iter()
            .map(|s| s.title.as_str())
            .collect();
        assert_eq!(titles, vec!["Apple Pie", "Bibimbap", "tacos"]);
    }

    #[test]
    fn test_json_is_plain_mapping() {
        let mut favs = FavouritesRegistry::new();
        favs.toggle(summary("52772", "Teriyaki Chicken Casserole"));

        let json = serde_json::to_value(&favs).unwrap();
        assert_eq!(json["52772"]["title"], "Teriyaki Chicken Casserole");

        let parsed: FavouritesRegistry = serde_json::from_value(json).unwrap();
        assert_eq!(parsed, favs);
    }
}
