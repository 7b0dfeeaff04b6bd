use serde::{Deserialize, Serialize};

use super::{mean, percent};
use crate::model::{
    DashboardFixture, GraduateProfile, K12Profile, UndergraduateProfile, WeeklyProgress,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EducationLevel {
    K12,
    #[default]
    Undergraduate,
    University,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Welcome {
    pub name: &'static str,
    pub message: &'static str,
}

impl EducationLevel {
    pub fn welcome(&self) -> Welcome {
        match self {
            EducationLevel::K12 => Welcome {
                name: "Alex",
                message: "Let's make today amazing!",
            },
            EducationLevel::Undergraduate => Welcome {
                name: "Sarah",
                message: "Ready to tackle your goals?",
            },
            EducationLevel::University => Welcome {
                name: "Dr. Johnson",
                message: "Your research journey continues!",
            },
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DashboardView {
    pub level: EducationLevel,
}

#[derive(Debug, Clone, Serialize)]
pub struct DashboardContent {
    pub level: EducationLevel,
    pub welcome: Welcome,
    pub progress: Vec<WeeklyProgress>,
    pub total_study_hours: u32,
    pub panel: LevelPanel,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum LevelPanel {
    K12 {
        profile: K12Profile,
        average_subject_progress: f64,
    },
    Undergraduate {
        profile: UndergraduateProfile,
        degree_progress: f64,
        enrolled_course_credits: u32,
    },
    University {
        profile: GraduateProfile,
        chapter_completion: f64,
        publications_published: usize,
    },
}

impl DashboardView {
    pub fn render(&self, fixture: &DashboardFixture) -> DashboardContent {
        let panel = match self.level {
            EducationLevel::K12 => LevelPanel::K12 {
                average_subject_progress: mean(
                    fixture.k12.subjects.iter().map(|s| s.progress as f64),
                ),
                profile: fixture.k12.clone(),
            },
            EducationLevel::Undergraduate => {
                let credits = &fixture.undergraduate.credits;
                LevelPanel::Undergraduate {
                    degree_progress: percent(
                        credits.completed as f64,
                        (credits.completed + credits.remaining) as f64,
                    ),
                    enrolled_course_credits: fixture
                        .undergraduate
                        .courses
                        .iter()
                        .map(|c| c.credits)
                        .sum(),
                    profile: fixture.undergraduate.clone(),
                }
            }
            EducationLevel::University => {
                let dissertation = &fixture.university.dissertation;
                LevelPanel::University {
                    chapter_completion: percent(
                        dissertation.chapters_completed as f64,
                        dissertation.chapters_total as f64,
                    ),
                    publications_published: fixture
                        .university
                        .publications
                        .iter()
                        .filter(|p| p.status == "Published")
                        .count(),
                    profile: fixture.university.clone(),
                }
            }
        };

        DashboardContent {
            level: self.level,
            welcome: self.level.welcome(),
            total_study_hours: fixture.progress.iter().map(|w| w.hours).sum(),
            progress: fixture.progress.clone(),
            panel,
        }
    }
}
