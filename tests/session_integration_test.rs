use anyhow::Result;
use milestone_days::core::milestones::DEFAULT_MILESTONES;
use milestone_days::core::share;
use milestone_days::utils::validation::Validate;
use milestone_days::{
    MilestoneEngine, MilestoneError, OutputFormat, RemovalPolicy, ScoreTier, Session, TomlConfig,
};
use std::io::Write;
use tempfile::NamedTempFile;

#[test]
fn test_rejected_additions_leave_set_unchanged() {
    let mut session = Session::default();

    assert!(!session.add_milestone(200).unwrap());
    assert!(!session.add_milestone(30).unwrap());
    assert_eq!(session.list_current(), &DEFAULT_MILESTONES);

    let mut strict = Session::new(RemovalPolicy::default(), true);
    assert!(matches!(
        strict.add_milestone(200),
        Err(MilestoneError::MilestoneOutOfRange { .. })
    ));
    assert!(matches!(
        strict.add_milestone(30),
        Err(MilestoneError::DuplicateMilestone { age: 30 })
    ));
    assert_eq!(strict.list_current(), &DEFAULT_MILESTONES);
}

#[test]
fn test_remove_default_policy() {
    let mut locked = Session::new(RemovalPolicy::default(), true);
    assert!(locked.remove_milestone(1).is_err());
    assert!(locked.list_current().contains(&1));

    let mut open = Session::new(
        RemovalPolicy {
            allow_remove_defaults: true,
        },
        true,
    );
    assert!(open.remove_milestone(1).unwrap());
    assert!(!open.list_current().contains(&1));
}

#[test]
fn test_selection_drives_evaluation() {
    let mut session = Session::default();
    session.add_milestone(25).unwrap();
    session.toggle_all(false);
    session.set_selected(18, true);
    session.set_selected(25, true);

    let report = MilestoneEngine::default()
        .run("1998-03-04", &session.selected_ages())
        .unwrap();
    let ages: Vec<u32> = report.result.records.iter().map(|r| r.age).collect();
    assert_eq!(ages, vec![18, 25]);

    session.toggle_all(false);
    assert!(matches!(
        MilestoneEngine::default().run("1998-03-04", &session.selected_ages()),
        Err(MilestoneError::NoMilestonesSelected)
    ));
}

#[test]
fn test_config_file_drives_session_and_engine() -> Result<()> {
    let mut file = NamedTempFile::new()?;
    write!(
        file,
        r#"
[milestones]
custom = [25, 33]
allow_remove_defaults = true

[scoring]
tier_boundaries = [0, 1, 3, 3]

[share]
base_url = "https://example.com/milestones/"

[output]
format = "csv"
"#
    )?;

    let config = TomlConfig::from_file(file.path())?;
    config.validate()?;

    let mut session = Session::from_settings(&config)?;
    assert!(session.list_current().contains(&25));
    assert!(session.list_current().contains(&33));
    assert!(session.remove_milestone(100)?);

    let engine = MilestoneEngine::from_settings(&config)?;
    let report = engine.run("1998-03-04", &[18, 30, 80])?;

    // [0, 1, 3, 3] folds three party days into the modest band
    assert_eq!(report.tier, ScoreTier::Modest);
    assert_eq!(
        report.share_url.as_deref(),
        Some("https://example.com/milestones/?b=1998-03-04")
    );

    let csv = report.render(config.output_format())?;
    assert_eq!(csv.lines().count(), 4);
    assert!(csv.contains("80,2078,Friday,true,false"));
    Ok(())
}

#[test]
fn test_share_link_round_trip() -> Result<()> {
    let engine = MilestoneEngine::default().with_share_base("https://example.com/");
    let report = engine.run("1990-06-15", &DEFAULT_MILESTONES)?;
    let link = report.share_url.clone().unwrap();

    let birth = share::birth_from_link(&link)?;
    let again = engine.report(&birth, &DEFAULT_MILESTONES)?;
    assert_eq!(again.result, report.result);
    assert_eq!(again.result.best.as_ref().map(|r| r.age), Some(40));
    Ok(())
}

#[test]
fn test_json_report() -> Result<()> {
    let report = MilestoneEngine::default().run("1990-06-15", &DEFAULT_MILESTONES)?;
    let json: serde_json::Value = serde_json::from_str(&report.render(OutputFormat::Json)?)?;

    assert_eq!(json["tier"], "great");
    assert_eq!(json["score_class"], "score-great");
    assert_eq!(json["result"]["total_milestones"], 12);
    assert_eq!(json["result"]["records"][0]["weekday"], "Saturday");
    Ok(())
}

#[test]
fn test_example_config_is_valid() -> Result<()> {
    let config = TomlConfig::from_file("configs/milestones-example.toml")?;
    config.validate()?;

    let session = Session::from_settings(&config)?;
    assert_eq!(session.list_current().len(), DEFAULT_MILESTONES.len() + 2);
    assert_eq!(config.output_format(), OutputFormat::Text);
    Ok(())
}
