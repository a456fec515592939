use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub keywords: Option<String>,
    pub location: Option<String>,
    pub salary_min: Option<u32>,
}

/// A posting as a collector extracted it, before the core touches it.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPosting {
    pub title: String,
    pub company: String,
    pub location: Option<String>,
    pub url: Option<String>,
    pub raw: String,
    pub extracted_at: DateTime<Utc>,
    pub search_query: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPosting {
    // not globally stable, uniqueness comes from deduplication
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub url: String,
    pub source: String,
    pub extracted_at: DateTime<Utc>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AlertKind {
    Urgent,
    High,
    Summary,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alert {
    pub kind: AlertKind,
    pub message: String,
    pub action: String,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    pub core: i32,
    pub bonus: i32,
    pub exclude: i32,
    pub seniority: i32,
    pub remote: i32,
    pub source: i32,
}

impl ScoreBreakdown {
    pub fn sum(&self) -> i32 {
        self.core + self.bonus + self.exclude + self.seniority + self.remote + self.source
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Score {
    pub total: i32,
    pub breakdown: ScoreBreakdown,
    pub matched_skills: Vec<String>,
    pub alerts: Vec<Alert>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoredPosting {
    #[serde(flatten)]
    pub posting: NormalizedPosting,
    pub score: Score,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceStatus {
    Success,
    Error,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceStat {
    pub source: String,
    pub jobs: usize,
    pub status: SourceStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SourceErrorRecord {
    pub source: String,
    pub error: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunSummary {
    pub execution_time_ms: u64,
    pub total_jobs: usize,
    pub sources_processed: usize,
    pub urgent_matches: usize,
    pub high_quality_matches: usize,
    pub average_score: f64,
    pub timestamp: DateTime<Utc>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyCount {
    pub company: String,
    pub jobs: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCount {
    pub skill: String,
    pub mentions: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SourceCount {
    pub source: String,
    pub count: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreDistribution {
    pub excellent: usize,
    pub good: usize,
    pub fair: usize,
    pub poor: usize,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Analytics {
    pub top_companies: Vec<CompanyCount>,
    pub skill_trends: Vec<SkillCount>,
    pub source_distribution: Vec<SourceCount>,
    pub score_distribution: ScoreDistribution,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SummaryAlert {
    #[serde(flatten)]
    pub alert: Alert,
    pub jobs: Vec<ScoredPosting>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub summary: RunSummary,
    pub source_stats: Vec<SourceStat>,
    pub jobs: Vec<ScoredPosting>,
    pub top_matches: Vec<ScoredPosting>,
    pub analytics: Analytics,
    pub alerts: Vec<SummaryAlert>,
    pub errors: Vec<SourceErrorRecord>,
}

// Object style note:
// Collectors, exporters and notifiers all meet at these types.
// The aggregator produces exactly one Report per run and never mutates it afterwards.
