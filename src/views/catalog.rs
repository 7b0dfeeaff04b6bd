use serde::{Deserialize, Serialize};

use crate::filter::{self, CatalogFilter};
use crate::model::{CatalogItem, Category};

pub const FEATURED_MIN_RATING: f64 = 4.7;
pub const FEATURED_LIMIT: usize = 3;
pub const DIFFICULTY_CHOICES: [&str; 4] = ["all", "beginner", "intermediate", "advanced"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CatalogTab {
    #[default]
    Browse,
    Featured,
    New,
    MyCourses,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogView {
    pub filter: CatalogFilter,
    pub tab: CatalogTab,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogContent {
    pub filter: CatalogFilter,
    pub tab: CatalogTab,
    pub categories: Vec<Category>,
    pub difficulties: [&'static str; 4],
    pub result_count: usize,
    pub courses: Vec<CatalogItem>,
}

impl CatalogView {
    pub fn render(&self, catalog: &[CatalogItem], categories: &[Category]) -> CatalogContent {
        let courses: Vec<CatalogItem> = match self.tab {
            CatalogTab::Browse => filter::apply(catalog, &self.filter)
                .into_iter()
                .cloned()
                .collect(),
            CatalogTab::Featured => featured(catalog).into_iter().cloned().collect(),
            CatalogTab::New => catalog.iter().filter(|c| c.is_new).cloned().collect(),
            CatalogTab::MyCourses => catalog.iter().filter(|c| c.progress > 0).cloned().collect(),
        };

        CatalogContent {
            filter: self.filter.clone(),
            tab: self.tab,
            categories: categories.to_vec(),
            difficulties: DIFFICULTY_CHOICES,
            result_count: courses.len(),
            courses,
        }
    }
}

/// Highly rated courses in catalog order, ignoring the filter.
pub fn featured(catalog: &[CatalogItem]) -> Vec<&CatalogItem> {
    catalog
        .iter()
        .filter(|c| c.rating >= FEATURED_MIN_RATING)
        .take(FEATURED_LIMIT)
        .collect()
}
