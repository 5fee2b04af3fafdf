//! Most-recent-first list of searched cities

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Maximum number of remembered cities.
pub const HISTORY_LIMIT: usize = 5;

/// Unique city names, newest first. Matching is exact and case-sensitive.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct SearchHistory(Vec<String>);

impl SearchHistory {
    /// Move `city` to the front, dropping entries past the limit.
    pub fn remember(&mut self, city: &str) {
        self.0.retain(|c| c != city);
        self.0.insert(0, city.to_string());
        self.0.truncate(HISTORY_LIMIT);
    }

    pub fn get(&self, index: usize) -> Option<&str> {
        self.0.get(index).map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SearchHistory {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut history = SearchHistory::default();
        let cities: Vec<String> = iter.into_iter().map(Into::into).collect();
        // Oldest first so the first item ends up newest.
        for city in cities.iter().rev() {
            history.remember(city);
        }
        history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_repeat_moves_to_front() {
        let mut history = SearchHistory::default();
        history.remember("Pune");
        history.remember("Delhi");
        history.remember("Pune");
        assert_eq!(history.entries(), ["Pune", "Delhi"]);
    }

    #[test]
    fn test_truncates_to_limit() {
        let mut history = SearchHistory::default();
        for city in ["A", "B", "C", "D", "E", "F", "G"] {
            history.remember(city);
        }
        assert_eq!(history.len(), HISTORY_LIMIT);
        assert_eq!(history.entries(), ["G", "F", "E", "D", "C"]);
    }

    #[test]
    fn test_case_sensitive() {
        let mut history = SearchHistory::default();
        history.remember("pune");
        history.remember("Pune");
        assert_eq!(history.entries(), ["Pune", "pune"]);
    }

    #[test]
    fn test_collect_keeps_order() {
        let history: SearchHistory = ["Pune", "Delhi", "Pune"].into_iter().collect();
        assert_eq!(history.entries(), ["Pune", "Delhi"]);
        assert_eq!(history.get(1), Some("Delhi"));
        assert_eq!(history.get(5), None);
    }
}
