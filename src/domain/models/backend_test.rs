use super::BackendError;
use super::BackendName;
use super::BackendPrompt;
use crate::domain::models::Query;

#[test]
fn it_parses_backend_names() {
    assert_eq!(
        BackendName::parse("gemini".to_string()),
        Some(BackendName::Gemini)
    );
    assert_eq!(
        BackendName::parse("openai".to_string()),
        Some(BackendName::OpenAI)
    );
    assert_eq!(BackendName::parse("ollama".to_string()), None);
}

#[test]
fn it_builds_prompt_from_query() {
    let query = Query::parse("Tell me about SAP experience").unwrap();
    let prompt = BackendPrompt::new(&query, "You are an assistant.");

    assert_eq!(prompt.text, "Tell me about SAP experience");
    assert_eq!(prompt.system_prompt, "You are an assistant.");
}

#[test]
fn it_formats_errors_without_secrets() {
    let err = BackendError::MissingCredentials(BackendName::Gemini);
    insta::assert_snapshot!(err.to_string(), @"gemini credentials are not configured");

    let err = BackendError::Status {
        backend: BackendName::OpenAI,
        status: 401,
    };
    insta::assert_snapshot!(err.to_string(), @"openai responded with status 401");
}
