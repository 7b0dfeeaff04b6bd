use serde::Serialize;

use super::mean;
use crate::model::{Recommendation, RecommendationsFixture, TrendingSkill};

#[derive(Debug, Clone, Serialize)]
pub struct SkillGap {
    pub skill: String,
    pub current: u32,
    pub potential: u32,
    pub gap: u32,
}

#[derive(Debug, Clone, Serialize)]
pub struct RecommendationsContent {
    pub average_match_score: f64,
    pub top_match: Option<String>,
    /// Recommendations ordered by descending match score.
    pub recommendations: Vec<Recommendation>,
    pub skill_gaps: Vec<SkillGap>,
    pub trending_skills: Vec<TrendingSkill>,
}

pub fn render(fixture: &RecommendationsFixture) -> RecommendationsContent {
    let mut recommendations = fixture.recommendations.clone();
    recommendations.sort_by(|a, b| b.match_score.cmp(&a.match_score));

    RecommendationsContent {
        average_match_score: mean(fixture.recommendations.iter().map(|r| r.match_score as f64)),
        top_match: recommendations.first().map(|r| r.title.clone()),
        recommendations,
        skill_gaps: fixture
            .skill_potential
            .iter()
            .map(|s| SkillGap {
                skill: s.skill.clone(),
                current: s.current,
                potential: s.potential,
                gap: s.potential.saturating_sub(s.current),
            })
            .collect(),
        trending_skills: fixture.trending_skills.clone(),
    }
}
