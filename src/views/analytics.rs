use serde::Serialize;

use super::mean;
use crate::model::{
    AnalyticsFixture, AtRiskStudent, CourseEngagement, DailyEngagement, LearningPattern,
    PerformanceMetric, RetentionPoint, Share,
};

#[derive(Debug, Clone, Serialize)]
pub struct EngagementSummary {
    pub avg_active_users: f64,
    pub avg_session_minutes: f64,
    pub avg_completion_rate: f64,
    pub at_risk_students: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AnalyticsContent {
    pub summary: EngagementSummary,
    pub daily_engagement: Vec<DailyEngagement>,
    pub course_engagement: Vec<CourseEngagement>,
    pub learning_patterns: Vec<LearningPattern>,
    pub retention: Vec<RetentionPoint>,
    pub device_usage: Vec<Share>,
    pub performance_metrics: Vec<PerformanceMetric>,
    /// Highest risk first.
    pub at_risk_students: Vec<AtRiskStudent>,
}

pub fn render(fixture: &AnalyticsFixture) -> AnalyticsContent {
    let daily = &fixture.daily_engagement;
    let summary = EngagementSummary {
        avg_active_users: mean(daily.iter().map(|d| d.active_users as f64)),
        avg_session_minutes: mean(daily.iter().map(|d| d.avg_session_time as f64)),
        avg_completion_rate: mean(daily.iter().map(|d| d.completion_rate as f64)),
        at_risk_students: fixture.at_risk_students.len(),
    };

    let mut at_risk_students = fixture.at_risk_students.clone();
    at_risk_students.sort_by(|a, b| b.risk_score.cmp(&a.risk_score));

    AnalyticsContent {
        summary,
        daily_engagement: daily.clone(),
        course_engagement: fixture.course_engagement.clone(),
        learning_patterns: fixture.learning_patterns.clone(),
        retention: fixture.retention.clone(),
        device_usage: fixture.device_usage.clone(),
        performance_metrics: fixture.performance_metrics.clone(),
        at_risk_students,
    }
}
