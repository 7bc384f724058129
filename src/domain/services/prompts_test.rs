use anyhow::Result;
use test_utils::profile_fixture;

use super::greeting;
use super::system_prompt;
use super::FallbackReplies;
use crate::domain::services::Profiles;

#[test]
fn it_describes_owner_in_system_prompt() -> Result<()> {
    let profile = Profiles::parse(profile_fixture())?;
    let prompt = system_prompt(&profile);

    assert!(prompt.starts_with("You are the high-value AI Assistant for Ada Example."));
    assert!(prompt.contains("- Current Role: Platform Engineer at Acme (since 2023 - Present)."));
    assert!(prompt.contains("- Key Achievement 1: 30% Faster Builds."));
    assert!(prompt.contains("    1. Issue Tracker: A tracker for issues."));
    assert!(prompt.contains("- Qualifications: Cloud Practitioner (SAP, 2025)."));
    assert!(prompt.contains("- Engineering: Rust, Python."));
    assert!(prompt.contains("- Years of Exp: 5."));
    assert!(prompt.contains("email (ada@example.com)"));
    assert!(prompt.contains("[DRAFT_EMAIL: Subject: <subject> | Body: <body>]"));
    return Ok(());
}

#[test]
fn it_greets_with_current_role() -> Result<()> {
    let profile = Profiles::parse(profile_fixture())?;
    insta::assert_snapshot!(greeting(&profile), @"Hello! I'm Ada Example's AI assistant. Ask me about the work at Acme, the 30% Faster Builds project, or any of the skills listed here.");
    return Ok(());
}

#[test]
fn it_greets_with_two_topics() -> Result<()> {
    let mut profile = Profiles::parse(profile_fixture())?;
    profile.experience.clear();

    insta::assert_snapshot!(greeting(&profile), @"Hello! I'm Ada Example's AI assistant. Ask me about the 30% Faster Builds project, or any of the skills listed here.");
    return Ok(());
}

#[test]
fn it_greets_without_current_role() -> Result<()> {
    let mut profile = Profiles::parse(profile_fixture())?;
    profile.experience.clear();
    profile.honors.clear();

    insta::assert_snapshot!(greeting(&profile), @"Hello! I'm Ada Example's AI assistant. Ask me about any of the skills listed here.");
    return Ok(());
}

#[test]
fn it_builds_fallback_replies() -> Result<()> {
    let profile = Profiles::parse(profile_fixture())?;
    let replies = FallbackReplies::new(&profile);

    insta::assert_snapshot!(replies.unavailable(), @"The assistant is in maintenance mode right now. Please contact Ada Example via email (ada@example.com) or LinkedIn.");
    insta::assert_snapshot!(replies.connection_failed(), @"I'm having a bit of trouble connecting to my brain right now. Please try again or contact Ada Example directly via email: ada@example.com");
    insta::assert_snapshot!(replies.empty_response(), @"I'm sorry, I couldn't process that request right now. You can reach out to Ada Example via LinkedIn for more details!");
    insta::assert_snapshot!(replies.interrupted(), @"I apologize, I'm having trouble connecting right now. Please try again or message Ada Example on LinkedIn.");
    return Ok(());
}
