use serde::{Deserialize, Serialize};

// Course catalog

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct CatalogItem {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub category: String,
    pub difficulty: String,
    pub rating: f64,
    pub students: u32,
    pub duration: String,
    pub price: u32,
    pub skills: Vec<String>,
    pub is_new: bool,
    pub is_premium: bool,
    pub progress: u8,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub count: u32,
}

// Student dashboard

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DashboardFixture {
    pub progress: Vec<WeeklyProgress>,
    pub k12: K12Profile,
    pub undergraduate: UndergraduateProfile,
    pub university: GraduateProfile,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct WeeklyProgress {
    pub week: String,
    pub hours: u32,
    pub completion: u32,
    pub assignments: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct K12Profile {
    pub subjects: Vec<Subject>,
    pub behavior: Behavior,
    pub attendance: Attendance,
    pub reading_level: String,
    pub parent_messages: u32,
    pub rewards: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Subject {
    pub name: String,
    pub grade: String,
    pub progress: u32,
    pub teacher: String,
    pub next_assignment: String,
    pub due_date: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Behavior {
    pub points: u32,
    pub streak_days: u32,
    pub recent_incidents: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Attendance {
    pub present: u32,
    pub absent: u32,
    pub late: u32,
    pub percentage: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UndergraduateProfile {
    pub courses: Vec<EnrolledCourse>,
    pub gpa: Gpa,
    pub credits: Credits,
    pub study_groups: u32,
    pub internships: Vec<String>,
    pub financial_aid: FinancialAid,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EnrolledCourse {
    pub code: String,
    pub name: String,
    pub instructor: String,
    pub credits: u32,
    pub progress: u32,
    pub grade: String,
    pub next_deadline: String,
    pub status: String,
    pub difficulty: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Gpa {
    pub current: f64,
    pub semester: f64,
    pub cumulative: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Credits {
    pub completed: u32,
    pub remaining: u32,
    pub enrolled: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct FinancialAid {
    pub scholarship: u32,
    pub loans: u32,
    pub work_study: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct GraduateProfile {
    pub program: String,
    pub advisor: String,
    pub research_area: String,
    pub dissertation: Dissertation,
    pub publications: Vec<Publication>,
    pub conferences: Vec<Conference>,
    pub grants: Grants,
    pub teaching: Teaching,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Dissertation {
    pub title: String,
    pub progress: u32,
    pub chapters_completed: u32,
    pub chapters_total: u32,
    pub defense: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Publication {
    pub title: String,
    pub status: String,
    pub journal: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Conference {
    pub name: String,
    pub role: String,
    pub date: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Grants {
    pub applied: u32,
    pub awarded: u32,
    pub total: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Teaching {
    pub courses: u32,
    pub hours: u32,
    pub evaluations: f64,
}

// AI recommendations

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RecommendationsFixture {
    pub recommendations: Vec<Recommendation>,
    pub skill_potential: Vec<SkillPotential>,
    pub trending_skills: Vec<TrendingSkill>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Recommendation {
    pub title: String,
    pub description: String,
    pub instructor: String,
    pub rating: f64,
    pub students: u32,
    pub duration: String,
    pub difficulty: String,
    pub match_score: u32,
    pub reasons: Vec<String>,
    pub tags: Vec<String>,
    pub ai_confidence: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SkillPotential {
    pub skill: String,
    pub current: u32,
    pub potential: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct TrendingSkill {
    pub name: String,
    pub growth: u32,
    pub demand: u32,
}

// Engagement analytics

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AnalyticsFixture {
    pub daily_engagement: Vec<DailyEngagement>,
    pub course_engagement: Vec<CourseEngagement>,
    pub learning_patterns: Vec<LearningPattern>,
    pub retention: Vec<RetentionPoint>,
    pub device_usage: Vec<Share>,
    pub performance_metrics: Vec<PerformanceMetric>,
    pub at_risk_students: Vec<AtRiskStudent>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DailyEngagement {
    pub date: String,
    pub active_users: u32,
    pub avg_session_time: u32,
    pub completion_rate: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CourseEngagement {
    pub course: String,
    pub engagement: u32,
    pub at_risk: u32,
    pub completed: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct LearningPattern {
    pub hour: String,
    pub weekday: u32,
    pub weekend: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RetentionPoint {
    pub week: String,
    pub cohort_a: u32,
    pub cohort_b: u32,
    pub cohort_c: u32,
}

/// A named slice of a distribution, in percent.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Share {
    pub name: String,
    pub value: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PerformanceMetric {
    pub name: String,
    pub avg_score: u32,
    pub sessions: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AtRiskStudent {
    pub name: String,
    pub last_active: String,
    pub completion_rate: u32,
    pub risk_score: u32,
}

// Regulatory compliance

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ComplianceFixture {
    pub frameworks: Vec<Framework>,
    pub processing_activities: Vec<ProcessingActivity>,
    pub privacy_rights: Vec<PrivacyRight>,
    pub security_measures: Vec<SafeguardCategory>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Framework {
    pub name: String,
    pub region: String,
    pub description: String,
    pub compliance: u32,
    pub status: String,
    pub last_audit: String,
    pub requirements: Vec<String>,
    pub risk: String,
    pub actions: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ProcessingActivity {
    pub activity: String,
    pub data_types: Vec<String>,
    pub purpose: String,
    pub legal_basis: String,
    pub retention: String,
    pub processors: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct PrivacyRight {
    pub right: String,
    pub requests: u32,
    pub avg_response_days: f64,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SafeguardCategory {
    pub category: String,
    pub measures: Vec<String>,
    pub implementation: u32,
}

// Investor analysis

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct InvestorFixture {
    pub market: Vec<MarketYear>,
    pub revenue_projections: Vec<RevenueQuarter>,
    pub segments: Vec<MarketSegment>,
    pub competitors: Vec<Competitor>,
    pub business_metrics: Vec<BusinessMetric>,
    pub risk_factors: Vec<RiskFactor>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MarketYear {
    pub year: String,
    pub market: f64,
    pub growth: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RevenueQuarter {
    pub quarter: String,
    pub oss: f64,
    pub saas: f64,
    pub total: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct MarketSegment {
    pub name: String,
    pub value: u32,
    pub growth: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Competitor {
    pub company: String,
    pub model: String,
    pub market_share: f64,
    pub revenue: f64,
    pub growth: f64,
    pub valuation: String,
    pub strengths: Vec<String>,
    pub risks: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BusinessMetric {
    pub metric: String,
    pub value: String,
    pub trend: String,
    pub change: String,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct RiskFactor {
    pub category: String,
    pub level: String,
    pub factors: Vec<String>,
}

// Data architecture

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ArchitectureFixture {
    pub data_flow: Vec<DataFlowSample>,
    pub models: Vec<ModelPerformance>,
    pub components: Vec<SystemComponent>,
    pub data_types: Vec<DataCategory>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DataFlowSample {
    pub time: String,
    pub events: u64,
    pub processed: u64,
    pub latency: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ModelPerformance {
    pub model: String,
    pub accuracy: f64,
    pub latency: u32,
    pub throughput: u32,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SystemComponent {
    pub name: String,
    pub description: String,
    pub status: String,
    pub uptime: f64,
    pub throughput: String,
    pub technologies: Vec<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct DataCategory {
    pub category: String,
    pub examples: Vec<String>,
    pub volume: String,
    pub retention: String,
}

// Admin portal

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
pub enum Region {
    #[serde(rename = "UK")]
    Uk,
    #[default]
    #[serde(rename = "USA")]
    Usa,
    Canada,
    #[serde(rename = "UAE")]
    Uae,
}

impl Region {
    pub const ALL: [Region; 4] = [Region::Uk, Region::Usa, Region::Canada, Region::Uae];
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AdminFixture {
    pub institutions: Vec<Institution>,
    pub enrollment: Vec<EnrollmentMonth>,
    pub performance: Vec<Share>,
    /// `{regulations}` in a message is replaced with the institution's
    /// regulator when rendered.
    pub activities: Vec<Activity>,
    pub users: Vec<DirectoryUser>,
    pub metrics: Vec<KeyMetric>,
    pub finances: Vec<FinanceLine>,
    pub security: SecuritySettings,
    pub integrations: Vec<Integration>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Institution {
    pub region: Region,
    pub name: String,
    pub kind: String,
    pub students: u32,
    pub staff: u32,
    pub campuses: u32,
    pub compliance: Vec<String>,
    pub currency: String,
    pub regulations: String,
    pub time_zone: String,
    pub requirements: Vec<Requirement>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Requirement {
    pub title: String,
    pub description: String,
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Activity {
    pub message: String,
    pub age: String,
    pub kind: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct DirectoryUser {
    pub name: String,
    pub role: String,
    pub email: String,
    pub status: String,
    pub id: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct KeyMetric {
    pub name: String,
    pub value: String,
    pub note: String,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct FinanceLine {
    pub category: String,
    pub revenue: u64,
    pub expenses: u64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SecuritySettings {
    pub two_factor: bool,
    pub session_timeout_minutes: u32,
    pub data_encryption: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct Integration {
    pub name: String,
    pub connected: bool,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EnrollmentMonth {
    pub month: String,
    pub students: u32,
    pub applications: u32,
}
