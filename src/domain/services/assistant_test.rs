use std::sync::atomic::Ordering;

use anyhow::Result;
use test_utils::profile_fixture;

use super::Assistant;
use crate::domain::models::Query;
use crate::domain::services::fakes::create_assistant;
use crate::domain::services::fakes::FakeBackend;
use crate::domain::services::fakes::FakeReply;
use crate::domain::services::FallbackReplies;
use crate::domain::services::Profiles;

fn replies() -> Result<FallbackReplies> {
    return Ok(FallbackReplies::new(&Profiles::parse(profile_fixture())?));
}

#[tokio::test]
async fn it_returns_backend_text_verbatim() -> Result<()> {
    let (assistant, calls) = create_assistant(FakeReply::Text(
        "He holds an S/4HANA certification.".to_string(),
    ))?;
    let query = Query::parse("Tell me about SAP experience").unwrap();

    let res = assistant.ask(&query).await;

    assert_eq!(res, "He holds an S/4HANA certification.");
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    return Ok(());
}

#[tokio::test]
async fn it_sends_system_prompt_and_query() -> Result<()> {
    let profile = Profiles::parse(profile_fixture())?;
    let backend = FakeBackend::new(FakeReply::Text("Hi".to_string()));
    let prompts = backend.prompts.clone();
    let assistant = Assistant::new(Box::new(backend), &profile);

    assistant.ask(&Query::parse("Who is Ada?").unwrap()).await;

    let prompts = prompts.lock().unwrap();
    assert_eq!(prompts.len(), 1);
    assert_eq!(prompts[0].text, "Who is Ada?");
    assert!(prompts[0]
        .system_prompt
        .starts_with("You are the high-value AI Assistant for Ada Example."));
    return Ok(());
}

#[tokio::test]
async fn it_returns_unavailable_without_credentials() -> Result<()> {
    let (assistant, calls) = create_assistant(FakeReply::MissingCredentials)?;

    let res = assistant.ask(&Query::parse("anything").unwrap()).await;

    assert_eq!(res, replies()?.unavailable());
    assert_eq!(calls.load(Ordering::SeqCst), 0);
    return Ok(());
}

#[tokio::test]
async fn it_hides_provider_errors() -> Result<()> {
    let (assistant, calls) = create_assistant(FakeReply::Status(403))?;

    let res = assistant.ask(&Query::parse("anything").unwrap()).await;

    assert_eq!(res, replies()?.connection_failed());
    assert!(!res.contains("403"));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    return Ok(());
}

#[tokio::test]
async fn it_returns_fallback_on_empty_response() -> Result<()> {
    let (assistant, _calls) = create_assistant(FakeReply::Empty)?;
    let res = assistant.ask(&Query::parse("anything").unwrap()).await;
    assert_eq!(res, replies()?.empty_response());

    let (assistant, _calls) = create_assistant(FakeReply::Text("  \n".to_string()))?;
    let res = assistant.ask(&Query::parse("anything").unwrap()).await;
    assert_eq!(res, replies()?.empty_response());

    return Ok(());
}

#[tokio::test]
async fn it_always_returns_text() -> Result<()> {
    let outcomes = vec![
        FakeReply::Text("A reply".to_string()),
        FakeReply::MissingCredentials,
        FakeReply::Status(500),
        FakeReply::Empty,
    ];

    for outcome in outcomes {
        let (assistant, calls) = create_assistant(outcome)?;
        let res = assistant.ask(&Query::parse("Hello?").unwrap()).await;

        assert!(!res.trim().is_empty());
        assert!(calls.load(Ordering::SeqCst) <= 1);
    }

    return Ok(());
}
