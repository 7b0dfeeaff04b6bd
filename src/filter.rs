use serde::{Deserialize, Serialize};

use crate::model::CatalogItem;

/// Sentinel accepted by the category and difficulty selectors.
pub const ALL: &str = "all";

/// Search box and the two selectors of the course catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFilter {
    pub search_text: String,
    pub category: String,
    pub difficulty: String,
}

impl Default for CatalogFilter {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            category: ALL.to_string(),
            difficulty: ALL.to_string(),
        }
    }
}

impl CatalogFilter {
    pub fn search(text: impl Into<String>) -> Self {
        Self {
            search_text: text.into(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn with_difficulty(mut self, difficulty: impl Into<String>) -> Self {
        self.difficulty = difficulty.into();
        self
    }
}

/// Whether `item` passes every part of `filter`.
pub fn matches(item: &CatalogItem, filter: &CatalogFilter) -> bool {
    matches_text(item, &filter.search_text)
        && matches_category(item, &filter.category)
        && matches_difficulty(item, &filter.difficulty)
}

fn matches_text(item: &CatalogItem, search: &str) -> bool {
    if search.is_empty() {
        return true;
    }
    let needle = search.to_lowercase();
    item.title.to_lowercase().contains(&needle)
        || item.description.to_lowercase().contains(&needle)
        || item
            .skills
            .iter()
            .any(|skill| skill.to_lowercase().contains(&needle))
}

fn matches_category(item: &CatalogItem, category: &str) -> bool {
    category == ALL || item.category == category
}

fn matches_difficulty(item: &CatalogItem, difficulty: &str) -> bool {
    difficulty == ALL || item.difficulty.to_lowercase() == difficulty.to_lowercase()
}

/// Items passing `filter`, in catalog order.
pub fn apply<'a>(items: &'a [CatalogItem], filter: &CatalogFilter) -> Vec<&'a CatalogItem> {
    items.iter().filter(|item| matches(item, filter)).collect()
}
