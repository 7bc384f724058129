use anyhow::Result;
use test_utils::profile_fixture;

use super::Profile;

fn load_fixture() -> Result<Profile> {
    let profile: Profile = serde_yaml::from_str(profile_fixture())?;
    return Ok(profile);
}

#[test]
fn it_finds_current_role() -> Result<()> {
    let profile = load_fixture()?;
    let role = profile.current_role().unwrap();

    assert_eq!(role.company, "Acme");
    return Ok(());
}

#[test]
fn it_splits_featured_and_additional_projects() -> Result<()> {
    let profile = load_fixture()?;

    let featured = profile
        .featured_projects()
        .iter()
        .map(|e| return e.id.to_string())
        .collect::<Vec<String>>();
    let additional = profile
        .additional_projects()
        .iter()
        .map(|e| return e.id.to_string())
        .collect::<Vec<String>>();

    assert_eq!(featured, vec!["tracker"]);
    assert_eq!(additional, vec!["notes"]);
    return Ok(());
}

#[test]
fn it_defaults_optional_fields() -> Result<()> {
    let profile = load_fixture()?;
    let notes = &profile.projects[1];

    assert!(notes.metrics.is_empty());
    assert!(notes.link.is_none());
    assert!(!profile.experience[1].is_current);
    assert_eq!(profile.experience[0].link_label(), "View Details");
    assert_eq!(profile.experience[1].link_label(), "View Reports");
    return Ok(());
}

#[test]
fn it_orders_skill_categories() -> Result<()> {
    let profile = load_fixture()?;
    let headings = profile
        .skills
        .categories()
        .iter()
        .map(|(heading, _)| return heading.to_string())
        .collect::<Vec<String>>();

    assert_eq!(
        headings,
        vec!["Engineering", "ERP & Systems", "Infrastructure", "Strategy"]
    );
    return Ok(());
}

#[test]
fn it_rejects_unknown_keys() {
    let payload = format!("{}\nnickname: Ace", profile_fixture());
    let res = serde_yaml::from_str::<Profile>(&payload);

    assert!(res.is_err());
}
