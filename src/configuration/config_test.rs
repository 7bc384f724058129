use anyhow::Result;

use super::Config;
use super::ConfigKey;
use crate::application::cli;

#[test]
fn it_serializes_to_valid_toml() {
    let res = Config::serialize_default(cli::build());
    let toml_res = res.parse::<toml_edit::Document>();
    assert!(toml_res.is_ok());

    insta::assert_snapshot!(res, @r###"
    # The hosted model provider the assistant talks to. [possible values: gemini, openai]
    backend = "gemini"

    # Time to wait in milliseconds before timing out when doing a healthcheck for a backend.
    backend-health-check-timeout = 1000

    # Google Gemini API token when using the Gemini backend. Without it the assistant runs in maintenance mode.
    # gemini-token = ""

    # Gemini API URL when using the Gemini backend.
    gemini-url = "https://generativelanguage.googleapis.com"

    # The model to request completions from. Defaults to a model picked per backend if not set.
    # model = ""

    # OpenAI API token when using the OpenAI backend. Without it the assistant runs in maintenance mode.
    # open-ai-token = ""

    # OpenAI API URL when using the OpenAI backend. Can be swapped to a compatible proxy.
    open-ai-url = "https://api.openai.com"

    # Path to a YAML profile to present instead of the bundled one.
    # profile-file = ""
    "###);
}

#[test]
fn it_lists_possible_backend_values() {
    let res = Config::possible_values(&cli::build(), ConfigKey::Backend);
    assert_eq!(res, vec!["gemini".to_string(), "openai".to_string()]);
}

#[test]
fn it_defaults_to_gemini() {
    assert_eq!(Config::default(ConfigKey::Backend), "gemini");
    assert!(Config::default(ConfigKey::ConfigFile).ends_with("folio/config.toml"));
}

#[tokio::test]
async fn it_loads_config_from_file() -> Result<()> {
    let matches = cli::build().try_get_matches_from(vec!["chat", "-c", "./config.example.toml"])?;
    Config::load(cli::build(), vec![&matches]).await?;
    return Ok(());
}

#[tokio::test]
async fn it_fails_to_loads_config_from_file() -> Result<()> {
    let matches =
        cli::build().try_get_matches_from(vec!["chat", "-c", "./test/bad-config.toml"])?;
    let res = Config::load(cli::build(), vec![&matches]).await;
    assert!(res.is_err());
    return Ok(());
}
