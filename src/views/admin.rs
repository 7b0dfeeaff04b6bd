use serde::{Deserialize, Serialize};

use super::{percent, round1};
use crate::model::{
    Activity, AdminFixture, DirectoryUser, EnrollmentMonth, FinanceLine, Institution, Integration,
    KeyMetric, Region, Requirement, SecuritySettings, Share,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InstitutionType {
    School,
    College,
    #[default]
    University,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AdminTab {
    #[default]
    Overview,
    Users,
    Compliance,
    Analytics,
    Settings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminView {
    pub region: Region,
    pub institution_type: InstitutionType,
    pub tab: AdminTab,
}

#[derive(Debug, Clone, Serialize)]
pub struct AdminContent {
    pub region: Region,
    pub institution_type: InstitutionType,
    pub tab: AdminTab,
    pub institution: Option<Institution>,
    /// The section for the selected tab. Absent when no institution is
    /// configured for the region.
    pub panel: Option<AdminPanel>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "tab", rename_all = "lowercase")]
pub enum AdminPanel {
    Overview {
        student_staff_ratio: Option<f64>,
        /// Student growth from the first to the last enrollment month, in percent.
        enrollment_growth: f64,
        standards_met: usize,
        enrollment: Vec<EnrollmentMonth>,
        performance: Vec<Share>,
        activities: Vec<Activity>,
    },
    Users {
        students: u32,
        faculty: u32,
        staff: u32,
        directory: Vec<DirectoryUser>,
    },
    Compliance {
        regulations: String,
        standards: Vec<String>,
        requirements: Vec<Requirement>,
    },
    Analytics {
        currency: String,
        metrics: Vec<KeyMetric>,
        finances: Vec<FinanceLine>,
        total_revenue: u64,
        total_expenses: u64,
        net: i64,
    },
    Settings {
        language: &'static str,
        time_zone: String,
        currency: String,
        security: SecuritySettings,
        integrations: Vec<Integration>,
        connected_integrations: usize,
    },
}

impl AdminView {
    pub fn render(&self, fixture: &AdminFixture) -> AdminContent {
        let institution = fixture
            .institutions
            .iter()
            .find(|i| i.region == self.region)
            .cloned();
        let panel = institution
            .as_ref()
            .map(|institution| panel_for(self.tab, institution, fixture));

        AdminContent {
            region: self.region,
            institution_type: self.institution_type,
            tab: self.tab,
            institution,
            panel,
        }
    }
}

fn panel_for(tab: AdminTab, institution: &Institution, fixture: &AdminFixture) -> AdminPanel {
    match tab {
        AdminTab::Overview => AdminPanel::Overview {
            student_staff_ratio: (institution.staff > 0)
                .then(|| round1(institution.students as f64 / institution.staff as f64)),
            enrollment_growth: enrollment_growth(&fixture.enrollment),
            standards_met: institution.compliance.len(),
            enrollment: fixture.enrollment.clone(),
            performance: fixture.performance.clone(),
            activities: fixture
                .activities
                .iter()
                .map(|activity| Activity {
                    message: activity
                        .message
                        .replace("{regulations}", &institution.regulations),
                    ..activity.clone()
                })
                .collect(),
        },
        AdminTab::Users => AdminPanel::Users {
            students: institution.students,
            faculty: institution.staff * 7 / 10,
            staff: institution.staff * 3 / 10,
            directory: fixture.users.clone(),
        },
        AdminTab::Compliance => AdminPanel::Compliance {
            regulations: institution.regulations.clone(),
            standards: institution.compliance.clone(),
            requirements: institution.requirements.clone(),
        },
        AdminTab::Analytics => {
            let total_revenue: u64 = fixture.finances.iter().map(|f| f.revenue).sum();
            let total_expenses: u64 = fixture.finances.iter().map(|f| f.expenses).sum();
            AdminPanel::Analytics {
                currency: institution.currency.clone(),
                metrics: fixture.metrics.clone(),
                finances: fixture.finances.clone(),
                total_revenue,
                total_expenses,
                net: total_revenue as i64 - total_expenses as i64,
            }
        }
        AdminTab::Settings => AdminPanel::Settings {
            language: "en",
            time_zone: institution.time_zone.clone(),
            currency: institution.currency.to_lowercase(),
            security: fixture.security,
            integrations: fixture.integrations.clone(),
            connected_integrations: fixture.integrations.iter().filter(|i| i.connected).count(),
        },
    }
}

fn enrollment_growth(months: &[EnrollmentMonth]) -> f64 {
    match (months.first(), months.last()) {
        (Some(first), Some(last)) => percent(
            last.students as f64 - first.students as f64,
            first.students as f64,
        ),
        _ => 0.0,
    }
}
