#![allow(dead_code)]

use async_trait::async_trait;
use chrono::Utc;
use job_aggregator::{
    AggregatorError, Collector, NormalizedPosting, RawPosting, Result, Score, ScoreBreakdown, ScoredPosting,
    SearchParams, SourceConfig,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};

static INIT: Once = Once::new();

pub fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init()
            .ok();
    });
}

pub fn posting(title: &str, company: &str, location: &str, source: &str, url: &str) -> NormalizedPosting {
    NormalizedPosting {
        id: format!("{}_{}", source.to_lowercase(), url),
        title: title.to_string(),
        company: company.to_string(),
        location: location.to_string(),
        url: url.to_string(),
        source: source.to_string(),
        extracted_at: Utc::now(),
    }
}

pub fn raw(title: &str, company: &str, url: &str) -> RawPosting {
    RawPosting {
        title: title.to_string(),
        company: company.to_string(),
        location: Some("Remote".to_string()),
        url: Some(url.to_string()),
        raw: String::new(),
        extracted_at: Utc::now(),
        search_query: None,
    }
}

pub fn scored(title: &str, company: &str, total: i32, skills: &[&str]) -> ScoredPosting {
    let score = Score {
        total,
        breakdown: ScoreBreakdown {
            core: total,
            ..ScoreBreakdown::default()
        },
        matched_skills: skills.iter().map(|skill| skill.to_string()).collect(),
        alerts: Vec::new(),
    };
    ScoredPosting {
        posting: posting(title, company, "Remote", "LinkedIn", &format!("https://jobs.example/{}-{}", title, company)),
        score,
    }
}

/// Shared log of which collectors ran, in call order.
pub type CallLog = Arc<Mutex<Vec<String>>>;

pub struct MockCollector {
    label: String,
    postings: Vec<RawPosting>,
    failure: Option<String>,
    calls: Arc<AtomicUsize>,
    log: CallLog,
}

impl MockCollector {
    pub fn returning(label: &str, postings: Vec<RawPosting>, log: CallLog) -> Self {
        Self {
            label: label.to_string(),
            postings,
            failure: None,
            calls: Arc::new(AtomicUsize::new(0)),
            log,
        }
    }

    pub fn failing(label: &str, message: &str, log: CallLog) -> Self {
        Self {
            label: label.to_string(),
            postings: Vec::new(),
            failure: Some(message.to_string()),
            calls: Arc::new(AtomicUsize::new(0)),
            log,
        }
    }

    pub fn calls(&self) -> Arc<AtomicUsize> {
        self.calls.clone()
    }
}

#[async_trait]
impl Collector for MockCollector {
    fn source_label(&self) -> String {
        self.label.clone()
    }

    async fn collect(&self, source: &SourceConfig, _params: &SearchParams) -> Result<Vec<RawPosting>> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.log.lock().unwrap().push(source.id.clone());
        match &self.failure {
            Some(message) => Err(AggregatorError::Collection {
                source_id: source.id.clone(),
                message: message.clone(),
            }),
            None => Ok(self.postings.clone()),
        }
    }
}
