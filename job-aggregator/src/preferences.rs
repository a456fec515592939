use crate::types::{AggregatorError, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SkillCategory {
    Core,
    Bonus,
    Exclude,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillTerm {
    pub term: String,
    pub weight: i32,
    #[serde(default)]
    pub aliases: Vec<String>,
    pub category: SkillCategory,
    #[serde(default)]
    pub description: Option<String>,
}

impl SkillTerm {
    pub fn new(term: impl Into<String>, weight: i32, category: SkillCategory) -> Self {
        Self {
            term: term.into(),
            weight,
            aliases: Vec::new(),
            category,
            description: None,
        }
    }

    pub fn with_aliases(mut self, aliases: &[&str]) -> Self {
        self.aliases = aliases.iter().map(|alias| alias.to_string()).collect();
        self
    }

    /// The term followed by its aliases, lowercased.
    pub fn surface_forms(&self) -> impl Iterator<Item = String> + '_ {
        std::iter::once(&self.term)
            .chain(self.aliases.iter())
            .map(|form| form.to_lowercase())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SeniorityRules {
    pub senior_keywords: Vec<String>,
    pub junior_keywords: Vec<String>,
    pub senior_bonus: i32,
    pub junior_penalty: i32,
}

impl Default for SeniorityRules {
    fn default() -> Self {
        Self {
            senior_keywords: to_strings(&["senior", "lead", "principal", "architect", "staff", "manager"]),
            junior_keywords: to_strings(&["junior", "jr", "entry", "intern", "graduate"]),
            senior_bonus: 3,
            junior_penalty: -5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RemoteRules {
    pub remote_keywords: Vec<String>,
    pub onsite_keywords: Vec<String>,
    pub remote_bonus: i32,
    pub onsite_penalty: i32,
}

impl Default for RemoteRules {
    fn default() -> Self {
        Self {
            remote_keywords: to_strings(&["remote", "work from home", "wfh", "distributed", "anywhere"]),
            onsite_keywords: to_strings(&["on-site only", "office required", "no remote", "in-person only"]),
            remote_bonus: 2,
            onsite_penalty: -2,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertThresholds {
    pub urgent: i32,
    pub high: i32,
    pub medium: i32,
    pub low: i32,
}

impl Default for AlertThresholds {
    fn default() -> Self {
        Self {
            urgent: 10,
            high: 8,
            medium: 6,
            low: 4,
        }
    }
}

/// Weighted preferences a posting is scored against. Immutable once loaded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceModel {
    pub skills: Vec<SkillTerm>,
    pub seniority: SeniorityRules,
    pub remote: RemoteRules,
    pub source_bonus: HashMap<String, i32>,
    pub thresholds: AlertThresholds,
}

impl PreferenceModel {
    pub fn from_json(json: &str) -> Result<Self> {
        let model: PreferenceModel = serde_json::from_str(json)?;
        model.validate()?;
        Ok(model)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        debug!("Loading preference model from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    pub fn with_skill(mut self, skill: SkillTerm) -> Self {
        self.skills.push(skill);
        self
    }

    pub fn with_source_bonus(mut self, source: impl Into<String>, bonus: i32) -> Self {
        self.source_bonus.insert(source.into(), bonus);
        self
    }

    pub fn with_thresholds(mut self, thresholds: AlertThresholds) -> Self {
        self.thresholds = thresholds;
        self
    }

    pub fn skills_in(&self, category: SkillCategory) -> impl Iterator<Item = &SkillTerm> {
        self.skills.iter().filter(move |skill| skill.category == category)
    }

    pub fn source_bonus_for(&self, source: &str) -> i32 {
        self.source_bonus.get(source).copied().unwrap_or(0)
    }

    /// Checks the sign conventions and threshold ordering.
    pub fn validate(&self) -> Result<()> {
        let mut errors = Vec::new();

        for skill in &self.skills {
            match skill.category {
                SkillCategory::Exclude if skill.weight >= 0 => {
                    errors.push(format!("exclude term '{}' must have a negative weight", skill.term));
                }
                SkillCategory::Core | SkillCategory::Bonus if skill.weight < 0 => {
                    errors.push(format!("term '{}' must have a non-negative weight", skill.term));
                }
                _ => {}
            }
            if skill.term.trim().is_empty() {
                errors.push("skill terms must not be empty".to_string());
            }
        }

        if self.seniority.junior_penalty >= 0 {
            errors.push("junior penalty must be negative".to_string());
        }
        if self.seniority.senior_bonus < 0 {
            errors.push("seniority bonus must be non-negative".to_string());
        }
        if self.remote.remote_bonus < 0 {
            errors.push("remote bonus must be non-negative".to_string());
        }
        if self.remote.onsite_penalty > 0 {
            errors.push("on-site penalty must not be positive".to_string());
        }
        for (source, bonus) in &self.source_bonus {
            if *bonus < 0 {
                errors.push(format!("source bonus for '{}' must be non-negative", source));
            }
        }

        let t = &self.thresholds;
        if !(t.urgent >= t.high && t.high >= t.medium && t.medium >= t.low) {
            errors.push(format!(
                "thresholds must satisfy urgent >= high >= medium >= low (got {}/{}/{}/{})",
                t.urgent, t.high, t.medium, t.low
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AggregatorError::Config(errors.join("; ")))
        }
    }

    /// Best total a single posting could reach under this model.
    pub fn max_possible_score(&self) -> i32 {
        let skills: i32 = self
            .skills
            .iter()
            .filter(|skill| skill.category != SkillCategory::Exclude)
            .map(|skill| skill.weight)
            .sum();
        let best_source = self.source_bonus.values().copied().max().unwrap_or(0).max(0);

        skills + self.seniority.senior_bonus + self.remote.remote_bonus + best_source
    }
}

fn to_strings(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}
