use crate::types::NormalizedPosting;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;
use tracing::info;

const FUZZY_TITLE_LEN: usize = 20;
const FUZZY_COMPANY_LEN: usize = 10;

// ASCII word boundaries: a non-ASCII letter ends a word.

static SENIORITY_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u:\b)(senior|jr|junior|lead|principal|staff)(?-u:\b)").unwrap());
static ROLE_WORDS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u:\b)(engineer|developer|architect)(?-u:\b)").unwrap());
static LEGAL_SUFFIXES: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?-u:\b)(inc|llc|ltd|corp|company)(?-u:\b)").unwrap());

/// One candidate identity for a posting. Kinds never collide with each other.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DedupKey {
    Url(String),
    TitleCompany(String),
    Fuzzy(String),
}

impl DedupKey {
    /// URL, title+company and fuzzy keys, in that order.
    pub fn all_for(posting: &NormalizedPosting) -> [DedupKey; 3] {
        [
            // Empty URLs share one key: every URL-less posting after the first is dropped.
            DedupKey::Url(posting.url.clone()),
            DedupKey::TitleCompany(title_company_key(&posting.title, &posting.company)),
            DedupKey::Fuzzy(fuzzy_key(&posting.title, &posting.company)),
        ]
    }
}

pub fn title_company_key(title: &str, company: &str) -> String {
    alphanumeric(&format!("{}{}", title, company).to_lowercase())
}

pub fn fuzzy_key(title: &str, company: &str) -> String {
    let title = title.to_lowercase();
    let title = SENIORITY_WORDS.replace_all(&title, "");
    let title = ROLE_WORDS.replace_all(&title, "dev");
    let title: String = alphanumeric(&title).chars().take(FUZZY_TITLE_LEN).collect();

    let company = company.to_lowercase();
    let company = LEGAL_SUFFIXES.replace_all(&company, "");
    let company: String = alphanumeric(&company).chars().take(FUZZY_COMPANY_LEN).collect();

    format!("{}_{}", title, company)
}

fn alphanumeric(text: &str) -> String {
    text.chars()
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        .collect()
}

/// Keeps the first posting under every key, in input order.
///
/// A posting survives only if none of its three keys has been claimed by an
/// earlier survivor, and then claims all three. Sharing a single key is enough
/// to be dropped, which errs towards merging distinct postings.
pub fn dedupe(postings: Vec<NormalizedPosting>) -> Vec<NormalizedPosting> {
    let before = postings.len();
    let mut seen: HashSet<DedupKey> = HashSet::new();
    let mut unique = Vec::with_capacity(postings.len());

    for posting in postings {
        let keys = DedupKey::all_for(&posting);
        if keys.iter().any(|key| seen.contains(key)) {
            continue;
        }
        seen.extend(keys);
        unique.push(posting);
    }

    info!("Deduplication: {} -> {} jobs", before, unique.len());
    unique
}
