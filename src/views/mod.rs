//! The eight dashboard panels.
//!
//! Every view is a pure function of the fixtures plus its own local state.
//! Local state lives in a [`ViewInstance`], which the shell recreates each
//! time the active gate is re-keyed, so nothing survives navigation or a
//! refresh tick.

pub mod admin;
pub mod analytics;
pub mod architecture;
pub mod catalog;
pub mod compliance;
pub mod dashboard;
pub mod investor;
pub mod recommendations;

use serde::{Deserialize, Serialize};

use crate::data::Fixtures;
use crate::error::ShellError;
use crate::filter::CatalogFilter;
use crate::model::Region;
use crate::view::ViewId;

use admin::{AdminContent, AdminTab, AdminView, InstitutionType};
use analytics::AnalyticsContent;
use architecture::ArchitectureContent;
use catalog::{CatalogContent, CatalogTab, CatalogView};
use compliance::ComplianceContent;
use dashboard::{DashboardContent, DashboardView, EducationLevel};
use investor::InvestorContent;
use recommendations::RecommendationsContent;

/// A live view together with its local state.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewInstance {
    Dashboard(DashboardView),
    Recommendations,
    Analytics,
    Compliance,
    Investor,
    Catalog(CatalogView),
    Architecture,
    Admin(AdminView),
}

impl ViewInstance {
    /// A view in its initial state.
    pub fn fresh(id: ViewId) -> Self {
        match id {
            ViewId::Dashboard => ViewInstance::Dashboard(DashboardView::default()),
            ViewId::Recommendations => ViewInstance::Recommendations,
            ViewId::Analytics => ViewInstance::Analytics,
            ViewId::Compliance => ViewInstance::Compliance,
            ViewId::Investor => ViewInstance::Investor,
            ViewId::Catalog => ViewInstance::Catalog(CatalogView::default()),
            ViewId::Architecture => ViewInstance::Architecture,
            ViewId::Admin => ViewInstance::Admin(AdminView::default()),
        }
    }

    pub fn id(&self) -> ViewId {
        match self {
            ViewInstance::Dashboard(_) => ViewId::Dashboard,
            ViewInstance::Recommendations => ViewId::Recommendations,
            ViewInstance::Analytics => ViewId::Analytics,
            ViewInstance::Compliance => ViewId::Compliance,
            ViewInstance::Investor => ViewId::Investor,
            ViewInstance::Catalog(_) => ViewId::Catalog,
            ViewInstance::Architecture => ViewId::Architecture,
            ViewInstance::Admin(_) => ViewId::Admin,
        }
    }

    pub fn render(&self, fixtures: &Fixtures) -> ViewContent {
        match self {
            ViewInstance::Dashboard(view) => {
                ViewContent::Dashboard(view.render(&fixtures.dashboard))
            }
            ViewInstance::Recommendations => {
                ViewContent::Recommendations(recommendations::render(&fixtures.recommendations))
            }
            ViewInstance::Analytics => {
                ViewContent::Analytics(analytics::render(&fixtures.analytics))
            }
            ViewInstance::Compliance => {
                ViewContent::Compliance(compliance::render(&fixtures.compliance))
            }
            ViewInstance::Investor => ViewContent::Investor(investor::render(&fixtures.investor)),
            ViewInstance::Catalog(view) => {
                ViewContent::Catalog(view.render(&fixtures.catalog, &fixtures.categories))
            }
            ViewInstance::Architecture => {
                ViewContent::Architecture(architecture::render(&fixtures.architecture))
            }
            ViewInstance::Admin(view) => ViewContent::Admin(view.render(&fixtures.admin)),
        }
    }

    /// Applies a view-local action. Actions for another view are rejected
    /// and leave the state untouched.
    pub fn apply(&mut self, action: ViewAction) -> Result<(), ShellError> {
        let active = self.id();
        match (self, action) {
            (ViewInstance::Catalog(view), ViewAction::SetCatalogFilter { filter }) => {
                view.filter = filter;
            }
            (ViewInstance::Catalog(view), ViewAction::SetCatalogTab { tab }) => view.tab = tab,
            (ViewInstance::Dashboard(view), ViewAction::SetEducationLevel { level }) => {
                view.level = level;
            }
            (ViewInstance::Admin(view), ViewAction::SetAdminRegion { region }) => {
                view.region = region;
            }
            (ViewInstance::Admin(view), ViewAction::SetInstitutionType { institution_type }) => {
                view.institution_type = institution_type;
            }
            (ViewInstance::Admin(view), ViewAction::SetAdminTab { tab }) => view.tab = tab,
            (_, action) => {
                return Err(ShellError::ActionMismatch {
                    action: action.name(),
                    expected: action.target(),
                    active,
                })
            }
        }
        Ok(())
    }
}

/// Rendered content of the active view.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "view", rename_all = "lowercase")]
pub enum ViewContent {
    Dashboard(DashboardContent),
    Recommendations(RecommendationsContent),
    Analytics(AnalyticsContent),
    Compliance(ComplianceContent),
    Investor(InvestorContent),
    Catalog(CatalogContent),
    Architecture(ArchitectureContent),
    Admin(AdminContent),
}

/// User interaction inside a view.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ViewAction {
    SetCatalogFilter { filter: CatalogFilter },
    SetCatalogTab { tab: CatalogTab },
    SetEducationLevel { level: EducationLevel },
    SetAdminRegion { region: Region },
    SetInstitutionType { institution_type: InstitutionType },
    SetAdminTab { tab: AdminTab },
}

impl ViewAction {
    pub fn name(&self) -> &'static str {
        match self {
            ViewAction::SetCatalogFilter { .. } => "set_catalog_filter",
            ViewAction::SetCatalogTab { .. } => "set_catalog_tab",
            ViewAction::SetEducationLevel { .. } => "set_education_level",
            ViewAction::SetAdminRegion { .. } => "set_admin_region",
            ViewAction::SetInstitutionType { .. } => "set_institution_type",
            ViewAction::SetAdminTab { .. } => "set_admin_tab",
        }
    }

    /// The view this action belongs to.
    pub fn target(&self) -> ViewId {
        match self {
            ViewAction::SetCatalogFilter { .. } | ViewAction::SetCatalogTab { .. } => {
                ViewId::Catalog
            }
            ViewAction::SetEducationLevel { .. } => ViewId::Dashboard,
            ViewAction::SetAdminRegion { .. }
            | ViewAction::SetInstitutionType { .. }
            | ViewAction::SetAdminTab { .. } => ViewId::Admin,
        }
    }
}

/// `part / whole` as a percentage rounded to one decimal; zero when `whole` is zero.
pub(crate) fn percent(part: f64, whole: f64) -> f64 {
    if whole == 0.0 {
        return 0.0;
    }
    round1(part / whole * 100.0)
}

pub(crate) fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub(crate) fn mean<I>(values: I) -> f64
where
    I: IntoIterator<Item = f64>,
{
    let (sum, count) = values
        .into_iter()
        .fold((0.0, 0usize), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        0.0
    } else {
        round1(sum / count as f64)
    }
}
