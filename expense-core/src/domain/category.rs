//! Category whitelist

use serde::{Deserialize, Serialize};

/// Categories accepted when no configuration overrides them
pub const DEFAULT_CATEGORIES: &[&str] = &["food", "travel", "bills", "entertainment", "other"];

/// The set of category names a transaction may use
///
/// Matching is exact and case-sensitive. Order is kept so the list can be
/// shown to the user the way it was configured.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AllowedCategories(Vec<String>);

impl AllowedCategories {
    /// Build a set from arbitrary names: trims, drops blanks, removes duplicates
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut categories: Vec<String> = Vec::new();
        for name in names {
            let trimmed = name.as_ref().trim();
            if !trimmed.is_empty() && !categories.iter().any(|c| c == trimmed) {
                categories.push(trimmed.to_string());
            }
        }
        Self(categories)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.0.iter().any(|c| c == category)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl Default for AllowedCategories {
    fn default() -> Self {
        Self::new(DEFAULT_CATEGORIES)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_categories() {
        let allowed = AllowedCategories::default();
        assert_eq!(allowed.len(), 5);
        for name in ["food", "travel", "bills", "entertainment", "other"] {
            assert!(allowed.contains(name), "{name} should be allowed");
        }
    }

    #[test]
    fn test_contains_is_case_sensitive() {
        let allowed = AllowedCategories::default();
        assert!(!allowed.contains("Food"));
        assert!(!allowed.contains(" food"));
        assert!(!allowed.contains(""));
    }

    #[test]
    fn test_new_normalizes_names() {
        let allowed = AllowedCategories::new(["rent", "  rent ", "", "gifts"]);
        assert_eq!(allowed.iter().collect::<Vec<_>>(), vec!["rent", "gifts"]);
    }
}
