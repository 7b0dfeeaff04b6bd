use csv::Reader;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::collections::HashSet;
use std::io::Read;
use std::path::Path;
use tracing::info;

use crate::error::FixtureError;
use crate::model::{
    AdminFixture, AnalyticsFixture, ArchitectureFixture, CatalogItem, Category, ComplianceFixture,
    DashboardFixture, InvestorFixture, RecommendationsFixture, Region,
};

const CATALOG_CSV: &str = include_str!("../data/catalog.csv");
const CATEGORIES_JSON: &str = include_str!("../data/categories.json");
const DASHBOARD_JSON: &str = include_str!("../data/dashboard.json");
const RECOMMENDATIONS_JSON: &str = include_str!("../data/recommendations.json");
const ANALYTICS_JSON: &str = include_str!("../data/analytics.json");
const COMPLIANCE_JSON: &str = include_str!("../data/compliance.json");
const INVESTOR_JSON: &str = include_str!("../data/investor.json");
const ARCHITECTURE_JSON: &str = include_str!("../data/architecture.json");
const ADMIN_JSON: &str = include_str!("../data/admin.json");

/// Static content behind every view. Read-only for the life of the process.
#[derive(Debug, Clone)]
pub struct Fixtures {
    pub catalog: Vec<CatalogItem>,
    pub categories: Vec<Category>,
    pub dashboard: DashboardFixture,
    pub recommendations: RecommendationsFixture,
    pub analytics: AnalyticsFixture,
    pub compliance: ComplianceFixture,
    pub investor: InvestorFixture,
    pub architecture: ArchitectureFixture,
    pub admin: AdminFixture,
}

impl Fixtures {
    /// The content compiled into the binary.
    pub fn embedded() -> Result<Self, FixtureError> {
        let fixtures = Self {
            catalog: load_catalog(CATALOG_CSV.as_bytes())?,
            categories: parse_json("categories.json", CATEGORIES_JSON)?,
            dashboard: parse_json("dashboard.json", DASHBOARD_JSON)?,
            recommendations: parse_json("recommendations.json", RECOMMENDATIONS_JSON)?,
            analytics: parse_json("analytics.json", ANALYTICS_JSON)?,
            compliance: parse_json("compliance.json", COMPLIANCE_JSON)?,
            investor: parse_json("investor.json", INVESTOR_JSON)?,
            architecture: parse_json("architecture.json", ARCHITECTURE_JSON)?,
            admin: parse_json("admin.json", ADMIN_JSON)?,
        };
        fixtures.validate()?;
        Ok(fixtures)
    }

    /// Loads fixtures from `dir`, which must hold the same file names as `data/`.
    pub fn load_dir(dir: &Path) -> Result<Self, FixtureError> {
        let catalog_path = dir.join("catalog.csv");
        let catalog_file = std::fs::File::open(&catalog_path).map_err(|source| FixtureError::Io {
            path: catalog_path.display().to_string(),
            source,
        })?;

        let fixtures = Self {
            catalog: load_catalog(catalog_file)?,
            categories: read_json(dir, "categories.json")?,
            dashboard: read_json(dir, "dashboard.json")?,
            recommendations: read_json(dir, "recommendations.json")?,
            analytics: read_json(dir, "analytics.json")?,
            compliance: read_json(dir, "compliance.json")?,
            investor: read_json(dir, "investor.json")?,
            architecture: read_json(dir, "architecture.json")?,
            admin: read_json(dir, "admin.json")?,
        };
        fixtures.validate()?;
        info!(
            dir = %dir.display(),
            courses = fixtures.catalog.len(),
            "loaded fixtures from disk"
        );
        Ok(fixtures)
    }

    fn validate(&self) -> Result<(), FixtureError> {
        let mut ids = HashSet::new();
        for item in &self.catalog {
            if !ids.insert(item.id) {
                return Err(FixtureError::Invalid(format!(
                    "duplicate catalog id {}",
                    item.id
                )));
            }
            if item.progress > 100 {
                return Err(FixtureError::Invalid(format!(
                    "course {} has progress {} above 100",
                    item.id, item.progress
                )));
            }
            if !(0.0..=5.0).contains(&item.rating) {
                return Err(FixtureError::Invalid(format!(
                    "course {} has rating {} outside 0..=5",
                    item.id, item.rating
                )));
            }
        }

        for region in Region::ALL {
            if !self.admin.institutions.iter().any(|i| i.region == region) {
                return Err(FixtureError::Invalid(format!(
                    "no institution configured for region {:?}",
                    region
                )));
            }
        }
        if let Some(institution) = self
            .admin
            .institutions
            .iter()
            .find(|i| i.requirements.is_empty())
        {
            return Err(FixtureError::Invalid(format!(
                "institution {} lists no regional requirements",
                institution.name
            )));
        }
        Ok(())
    }
}

/// One line of `catalog.csv`; skills are `;`-separated.
#[derive(Debug, Deserialize)]
struct CatalogRow {
    id: u32,
    title: String,
    description: String,
    instructor: String,
    category: String,
    difficulty: String,
    rating: f64,
    students: u32,
    duration: String,
    price: u32,
    skills: String,
    is_new: bool,
    is_premium: bool,
    progress: u8,
}

impl From<CatalogRow> for CatalogItem {
    fn from(row: CatalogRow) -> Self {
        CatalogItem {
            id: row.id,
            title: row.title,
            description: row.description,
            instructor: row.instructor,
            category: row.category,
            difficulty: row.difficulty,
            rating: row.rating,
            students: row.students,
            duration: row.duration,
            price: row.price,
            skills: row
                .skills
                .split(';')
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(String::from)
                .collect(),
            is_new: row.is_new,
            is_premium: row.is_premium,
            progress: row.progress,
        }
    }
}

pub fn load_catalog<R: Read>(source: R) -> Result<Vec<CatalogItem>, FixtureError> {
    let mut rdr = Reader::from_reader(source);
    let mut items = Vec::new();

    for result in rdr.deserialize::<CatalogRow>() {
        let row = result?;
        items.push(row.into());
    }

    Ok(items)
}

fn parse_json<T: DeserializeOwned>(name: &'static str, raw: &str) -> Result<T, FixtureError> {
    serde_json::from_str(raw).map_err(|source| FixtureError::Json { name, source })
}

fn read_json<T: DeserializeOwned>(dir: &Path, name: &'static str) -> Result<T, FixtureError> {
    let path = dir.join(name);
    let raw = std::fs::read_to_string(&path).map_err(|source| FixtureError::Io {
        path: path.display().to_string(),
        source,
    })?;
    parse_json(name, &raw)
}
