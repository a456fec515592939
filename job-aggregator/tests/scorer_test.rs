mod common;

use common::{init_tracing, posting};
use job_aggregator::scorer::score;
use job_aggregator::{AlertKind, PreferenceModel, Result, ScoreBreakdown, SkillCategory, SkillTerm};
use tracing::info;

fn shipped_model() -> Result<PreferenceModel> {
    PreferenceModel::from_file(concat!(env!("CARGO_MANIFEST_DIR"), "/config/preferences.json"))
}

fn csharp_model() -> PreferenceModel {
    PreferenceModel::default()
        .with_skill(SkillTerm::new("c#", 5, SkillCategory::Core).with_aliases(&["csharp"]))
        .with_skill(SkillTerm::new(".net", 5, SkillCategory::Core).with_aliases(&["dotnet"]))
        .with_skill(SkillTerm::new("angular", -5, SkillCategory::Exclude).with_aliases(&["ng"]))
        .with_skill(SkillTerm::new("designer", -5, SkillCategory::Exclude))
}

#[test]
fn test_senior_remote_csharp_is_urgent() -> Result<()> {
    init_tracing();
    let model = shipped_model()?;
    let job = posting("Senior C# Developer", "Contoso", "Remote", "LinkedIn", "https://jobs.example/1");

    let result = score(&job, &model);
    info!("Breakdown: {:?}", result.breakdown);

    assert_eq!(
        result.breakdown,
        ScoreBreakdown {
            core: 5,
            bonus: 0,
            exclude: 0,
            seniority: 3,
            remote: 2,
            source: 1,
        }
    );
    assert_eq!(result.total, 11);
    assert_eq!(result.matched_skills, vec!["c#".to_string()]);
    assert_eq!(result.alerts.len(), 1);
    assert_eq!(result.alerts[0].kind, AlertKind::Urgent);
    assert_eq!(result.alerts[0].message, "Perfect match found: Senior C# Developer at Contoso");
    assert_eq!(result.alerts[0].action, "Apply immediately");
    Ok(())
}

#[test]
fn test_core_and_exclude_cancel_out() -> Result<()> {
    init_tracing();
    let job = posting("C# Developer (Angular)", "Acme", "Austin, TX", "Indeed", "https://jobs.example/2");

    let result = score(&job, &csharp_model());

    assert_eq!(result.breakdown.core, 5);
    assert_eq!(result.breakdown.exclude, -5);
    assert_eq!(result.total, 0);
    assert_eq!(result.matched_skills, vec!["c#".to_string()]);
    assert!(result.alerts.is_empty());
    Ok(())
}

#[test]
fn test_total_is_sum_of_breakdown() -> Result<()> {
    init_tracing();
    let model = shipped_model()?;
    let jobs = vec![
        posting("Principal .NET Architect", "Fabrikam", "Remote", "StackOverflow", "a"),
        posting("Junior React Designer", "Pixel Co", "New York", "Indeed", "b"),
        posting("SQL Server DBA", "Northwind", "", "Dice", "c"),
        posting("Azure DevOps Engineer (Docker, Kubernetes)", "Tailspin", "Work from home", "LinkedIn", "d"),
    ];

    for job in &jobs {
        let result = score(job, &model);
        assert_eq!(result.total, result.breakdown.sum(), "total mismatch for {}", job.title);
        assert!(result.total <= model.max_possible_score());
    }
    Ok(())
}

#[test]
fn test_senior_keyword_suppresses_junior_penalty() -> Result<()> {
    init_tracing();
    let model = PreferenceModel::default();

    let both = score(&posting("Senior Junior Mentor", "Acme", "Austin", "Dice", "a"), &model);
    assert_eq!(both.breakdown.seniority, model.seniority.senior_bonus);

    let junior = score(&posting("Junior Developer", "Acme", "Austin", "Dice", "b"), &model);
    assert_eq!(junior.breakdown.seniority, model.seniority.junior_penalty);
    assert_eq!(junior.total, -5);
    Ok(())
}

#[test]
fn test_alias_counts_once_under_canonical_term() -> Result<()> {
    init_tracing();
    let model = csharp_model();

    let result = score(&posting("C# / CSharp Dotnet Engineer", "Acme", "Austin", "Dice", "a"), &model);

    // c# and csharp are the same term, weight counted once
    assert_eq!(result.breakdown.core, 10);
    assert_eq!(result.matched_skills, vec!["c#".to_string(), ".net".to_string()]);
    Ok(())
}

#[test]
fn test_excluded_terms_are_not_reported_as_matched() -> Result<()> {
    init_tracing();
    let result = score(&posting("Angular Designer", "Acme", "Austin", "Dice", "a"), &csharp_model());

    assert_eq!(result.breakdown.exclude, -10);
    assert!(result.matched_skills.is_empty());
    // never clamped at zero
    assert_eq!(result.total, -10);
    Ok(())
}

#[test]
fn test_short_alias_matches_inside_words() -> Result<()> {
    init_tracing();
    // "ng" is found inside "engineering"; containment is deliberately naive
    let result = score(&posting("Engineering Manager", "Acme", "Austin", "Dice", "a"), &csharp_model());

    assert_eq!(result.breakdown.exclude, -5);
    assert_eq!(result.breakdown.seniority, 3);
    assert_eq!(result.total, -2);
    Ok(())
}

#[test]
fn test_unknown_source_gets_no_bonus() -> Result<()> {
    init_tracing();
    let model = csharp_model().with_source_bonus("LinkedIn", 1);

    let result = score(&posting("C# Developer", "Acme", "Austin", "Craigslist", "a"), &model);

    assert_eq!(result.breakdown.source, 0);
    assert_eq!(result.total, 5);
    Ok(())
}

#[test]
fn test_alert_levels() -> Result<()> {
    init_tracing();
    let model = csharp_model();

    let high = score(&posting("Senior C# Developer", "Acme", "Austin, TX", "Indeed", "a"), &model);
    assert_eq!(high.total, 8);
    assert_eq!(high.alerts.len(), 1);
    assert_eq!(high.alerts[0].kind, AlertKind::High);
    assert_eq!(high.alerts[0].message, "Excellent match: Senior C# Developer at Acme");
    assert_eq!(high.alerts[0].action, "Review and apply soon");

    let plain = score(&posting("C# Developer", "Acme", "Austin, TX", "Indeed", "b"), &model);
    assert_eq!(plain.total, 5);
    assert!(plain.alerts.is_empty());
    Ok(())
}

#[test]
fn test_location_takes_part_in_matching() -> Result<()> {
    init_tracing();
    let model = PreferenceModel::default();

    let remote = score(&posting("Backend Developer", "Acme", "Remote", "Dice", "a"), &model);
    let office = score(&posting("Backend Developer", "Acme", "Austin", "Dice", "b"), &model);

    assert_eq!(remote.breakdown.remote, model.remote.remote_bonus);
    assert_eq!(office.breakdown.remote, 0);
    Ok(())
}
