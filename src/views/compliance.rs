use serde::Serialize;
use std::collections::BTreeMap;

use super::{mean, round1};
use crate::model::{
    ComplianceFixture, Framework, PrivacyRight, ProcessingActivity, SafeguardCategory,
};

#[derive(Debug, Clone, Serialize)]
pub struct ComplianceContent {
    pub overall_compliance: f64,
    pub active_frameworks: usize,
    pub frameworks_by_status: BTreeMap<String, usize>,
    pub total_data_requests: u32,
    /// Mean response time weighted by request count.
    pub avg_response_days: f64,
    pub frameworks: Vec<Framework>,
    pub processing_activities: Vec<ProcessingActivity>,
    pub privacy_rights: Vec<PrivacyRight>,
    pub security_measures: Vec<SafeguardCategory>,
}

pub fn render(fixture: &ComplianceFixture) -> ComplianceContent {
    let mut frameworks_by_status = BTreeMap::new();
    for framework in &fixture.frameworks {
        *frameworks_by_status
            .entry(framework.status.clone())
            .or_insert(0) += 1;
    }

    let total_data_requests: u32 = fixture.privacy_rights.iter().map(|r| r.requests).sum();
    let weighted_days: f64 = fixture
        .privacy_rights
        .iter()
        .map(|r| r.requests as f64 * r.avg_response_days)
        .sum();
    let avg_response_days = if total_data_requests == 0 {
        0.0
    } else {
        round1(weighted_days / total_data_requests as f64)
    };

    ComplianceContent {
        overall_compliance: mean(fixture.frameworks.iter().map(|f| f.compliance as f64)),
        active_frameworks: fixture.frameworks.len(),
        frameworks_by_status,
        total_data_requests,
        avg_response_days,
        frameworks: fixture.frameworks.clone(),
        processing_activities: fixture.processing_activities.clone(),
        privacy_rights: fixture.privacy_rights.clone(),
        security_measures: fixture.security_measures.clone(),
    }
}
