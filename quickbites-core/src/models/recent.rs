use serde::{Deserialize, Serialize};

const MAX_RECENT: usize = 8;

/// Recently used search terms, newest first.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecentSearches {
    terms: Vec<String>,
}

impl RecentSearches {
    pub fn new() -> Self {
        Self::default()
    }

    /// Move `term` to the front. Blank terms are ignored.
    /// Returns true if the list changed.
    pub fn record(&mut self, term: &str) -> bool {
        let term = term.trim();
        if term.is_empty() {
            return false;
        }
        if self.terms.first().map(String::as_str) == Some(term) {
            return false;
        }
        self.terms.retain(|t| t != term);
        self.terms.insert(0, term.to_string());
        self.terms.truncate(MAX_RECENT);
        true
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn clear(&mut self) {
        self.terms.clear();
    }
}
