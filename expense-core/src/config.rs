//! Configuration management
//!
//! Settings live in `settings.json` in the data directory:
//! ```json
//! {
//!   "app": { "categories": ["food", "bills", "entertainment", "other", "travel"] }
//! }
//! ```
//! Other fields are ignored.

use std::path::Path;

use serde::Deserialize;

use crate::domain::result::{Error, Result};
use crate::domain::{AllowedCategories, DEFAULT_CATEGORIES};

/// Env var that replaces the category list (comma separated)
pub const CATEGORIES_ENV: &str = "EXPENSE_TRACKER_CATEGORIES";

const SETTINGS_FILE: &str = "settings.json";

/// Raw settings.json structure
#[derive(Debug, Clone, Default, Deserialize)]
struct SettingsFile {
    #[serde(default)]
    app: AppSettings,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct AppSettings {
    #[serde(default)]
    categories: Option<Vec<String>>,
}

/// Expense tracker configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub categories: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            categories: DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect(),
        }
    }
}

impl Config {
    /// Load config from the data directory
    ///
    /// A missing or unreadable settings file yields the defaults. The
    /// category list can be overridden with `EXPENSE_TRACKER_CATEGORIES`.
    pub fn load(data_dir: &Path) -> Result<Self> {
        let raw = read_settings(data_dir)?;
        let env_categories = std::env::var(CATEGORIES_ENV).ok();
        Ok(Self::from_sources(raw, env_categories.as_deref()))
    }

    fn from_sources(raw: SettingsFile, env_categories: Option<&str>) -> Self {
        let categories = match env_categories {
            Some(list) if !list.trim().is_empty() => {
                list.split(',').map(|s| s.trim().to_string()).collect()
            }
            _ => raw
                .app
                .categories
                .unwrap_or_else(|| Self::default().categories),
        };

        Self { categories }
    }

    /// The validated category set
    pub fn allowed_categories(&self) -> Result<AllowedCategories> {
        let allowed = AllowedCategories::new(&self.categories);
        if allowed.is_empty() {
            return Err(Error::config("no categories configured"));
        }
        Ok(allowed)
    }
}

fn read_settings(data_dir: &Path) -> Result<SettingsFile> {
    let settings_path = data_dir.join(SETTINGS_FILE);
    if !settings_path.exists() {
        return Ok(SettingsFile::default());
    }
    let content = std::fs::read_to_string(&settings_path)?;
    Ok(serde_json::from_str(&content).unwrap_or_default())
}
