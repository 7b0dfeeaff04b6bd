use serde::Serialize;

use super::{mean, percent};
use crate::model::{
    ArchitectureFixture, DataCategory, DataFlowSample, ModelPerformance, SystemComponent,
};

#[derive(Debug, Clone, Serialize)]
pub struct PipelineSummary {
    pub events: u64,
    pub processed: u64,
    pub success_rate: f64,
    pub avg_latency_ms: f64,
    pub healthy_components: usize,
    pub total_components: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct ArchitectureContent {
    pub summary: PipelineSummary,
    pub data_flow: Vec<DataFlowSample>,
    pub models: Vec<ModelPerformance>,
    pub components: Vec<SystemComponent>,
    pub data_types: Vec<DataCategory>,
}

pub fn render(fixture: &ArchitectureFixture) -> ArchitectureContent {
    let events: u64 = fixture.data_flow.iter().map(|s| s.events).sum();
    let processed: u64 = fixture.data_flow.iter().map(|s| s.processed).sum();

    ArchitectureContent {
        summary: PipelineSummary {
            events,
            processed,
            success_rate: percent(processed as f64, events as f64),
            avg_latency_ms: mean(fixture.data_flow.iter().map(|s| s.latency as f64)),
            healthy_components: fixture
                .components
                .iter()
                .filter(|c| c.status == "Healthy")
                .count(),
            total_components: fixture.components.len(),
        },
        data_flow: fixture.data_flow.clone(),
        models: fixture.models.clone(),
        components: fixture.components.clone(),
        data_types: fixture.data_types.clone(),
    }
}
