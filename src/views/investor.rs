use serde::Serialize;

use crate::model::{
    BusinessMetric, Competitor, InvestorFixture, MarketSegment, MarketYear, RevenueQuarter,
    RiskFactor,
};

const OWN_PLATFORM_PREFIX: &str = "EduCore";

#[derive(Debug, Clone, Serialize)]
pub struct InvestorContent {
    pub latest_market: Option<MarketYear>,
    pub latest_projection: Option<RevenueQuarter>,
    pub own_market_share: Option<f64>,
    pub market: Vec<MarketYear>,
    pub revenue_projections: Vec<RevenueQuarter>,
    pub segments: Vec<MarketSegment>,
    pub competitors: Vec<Competitor>,
    pub business_metrics: Vec<BusinessMetric>,
    pub risk_factors: Vec<RiskFactor>,
}

pub fn render(fixture: &InvestorFixture) -> InvestorContent {
    InvestorContent {
        latest_market: fixture.market.last().cloned(),
        latest_projection: fixture.revenue_projections.last().cloned(),
        own_market_share: fixture
            .competitors
            .iter()
            .find(|c| c.company.starts_with(OWN_PLATFORM_PREFIX))
            .map(|c| c.market_share),
        market: fixture.market.clone(),
        revenue_projections: fixture.revenue_projections.clone(),
        segments: fixture.segments.clone(),
        competitors: fixture.competitors.clone(),
        business_metrics: fixture.business_metrics.clone(),
        risk_factors: fixture.risk_factors.clone(),
    }
}
