use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ShellError;

/// The eight mutually exclusive top-level panels of the shell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewId {
    #[default]
    Dashboard,
    Recommendations,
    Analytics,
    Compliance,
    Investor,
    Catalog,
    Architecture,
    Admin,
}

impl ViewId {
    pub const ALL: [ViewId; 8] = [
        ViewId::Dashboard,
        ViewId::Recommendations,
        ViewId::Analytics,
        ViewId::Compliance,
        ViewId::Investor,
        ViewId::Catalog,
        ViewId::Architecture,
        ViewId::Admin,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ViewId::Dashboard => "dashboard",
            ViewId::Recommendations => "recommendations",
            ViewId::Analytics => "analytics",
            ViewId::Compliance => "compliance",
            ViewId::Investor => "investor",
            ViewId::Catalog => "catalog",
            ViewId::Architecture => "architecture",
            ViewId::Admin => "admin",
        }
    }

    pub fn nav_entry(&self) -> NavEntry {
        let (title, description, section) = match self {
            ViewId::Dashboard => (
                "Student Dashboard",
                "Progress tracking and overview",
                NavSection::Learning,
            ),
            ViewId::Catalog => (
                "Course Catalog",
                "Browse available courses",
                NavSection::Learning,
            ),
            ViewId::Recommendations => (
                "AI Recommendations",
                "Personalized course suggestions",
                NavSection::Learning,
            ),
            ViewId::Analytics => (
                "Engagement Analytics",
                "Learning behavior insights",
                NavSection::AnalyticsData,
            ),
            ViewId::Architecture => (
                "Data Architecture",
                "Kafka → Delta Lake → AI",
                NavSection::AnalyticsData,
            ),
            ViewId::Compliance => (
                "Regulatory Compliance",
                "COPPA, FERPA, GDPR, UAE",
                NavSection::BusinessCompliance,
            ),
            ViewId::Investor => (
                "Investor View",
                "Market analysis & risks",
                NavSection::BusinessCompliance,
            ),
            ViewId::Admin => ("Admin Portal", "UK, USA, Canada, UAE", NavSection::Admin),
        };
        NavEntry {
            view: *self,
            title,
            description,
            section,
        }
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ViewId {
    type Err = ShellError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ViewId::ALL
            .iter()
            .copied()
            .find(|view| view.as_str() == s)
            .ok_or_else(|| ShellError::UnknownView(s.to_string()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum NavSection {
    #[serde(rename = "Learning Platform")]
    Learning,
    #[serde(rename = "Analytics & Data")]
    AnalyticsData,
    #[serde(rename = "Business & Compliance")]
    BusinessCompliance,
    #[serde(rename = "Admin")]
    Admin,
}

impl NavSection {
    pub const ORDER: [NavSection; 4] = [
        NavSection::Learning,
        NavSection::AnalyticsData,
        NavSection::BusinessCompliance,
        NavSection::Admin,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            NavSection::Learning => "Learning Platform",
            NavSection::AnalyticsData => "Analytics & Data",
            NavSection::BusinessCompliance => "Business & Compliance",
            NavSection::Admin => "Admin",
        }
    }

    /// Entries of this section in sidebar order.
    pub fn views(&self) -> &'static [ViewId] {
        match self {
            NavSection::Learning => &[ViewId::Dashboard, ViewId::Catalog, ViewId::Recommendations],
            NavSection::AnalyticsData => &[ViewId::Analytics, ViewId::Architecture],
            NavSection::BusinessCompliance => &[ViewId::Compliance, ViewId::Investor],
            NavSection::Admin => &[ViewId::Admin],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct NavEntry {
    pub view: ViewId,
    pub title: &'static str,
    pub description: &'static str,
    pub section: NavSection,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavItem {
    pub view: ViewId,
    /// Visible label; absent in compact mode where only the icon is drawn.
    pub label: Option<&'static str>,
    /// Hover title; only set in compact mode.
    pub hover_title: Option<String>,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct NavGroup {
    pub label: Option<&'static str>,
    pub items: Vec<NavItem>,
}

/// Builds the sidebar for the given active view and layout density.
pub fn navigation(current: ViewId, compact: bool) -> Vec<NavGroup> {
    NavSection::ORDER
        .iter()
        .map(|section| NavGroup {
            label: (!compact).then(|| section.label()),
            items: section
                .views()
                .iter()
                .map(|view| {
                    let entry = view.nav_entry();
                    NavItem {
                        view: *view,
                        label: (!compact).then_some(entry.title),
                        hover_title: compact
                            .then(|| format!("{} - {}", entry.title, entry.description)),
                        active: *view == current,
                    }
                })
                .collect(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_view_appears_once_in_navigation() {
        let groups = navigation(ViewId::Dashboard, false);
        let mut seen: Vec<ViewId> = groups
            .iter()
            .flat_map(|g| g.items.iter().map(|i| i.view))
            .collect();
        assert_eq!(seen.len(), 8);
        seen.dedup();
        assert_eq!(seen.len(), 8);
        for view in ViewId::ALL {
            assert!(seen.contains(&view));
        }
    }

    #[test]
    fn compact_navigation_drops_labels() {
        let groups = navigation(ViewId::Investor, true);
        assert!(groups.iter().all(|g| g.label.is_none()));
        let investor = groups
            .iter()
            .flat_map(|g| g.items.iter())
            .find(|i| i.view == ViewId::Investor)
            .unwrap();
        assert!(investor.active);
        assert!(investor.label.is_none());
        assert_eq!(
            investor.hover_title.as_deref(),
            Some("Investor View - Market analysis & risks")
        );
    }
}
