#[cfg(test)]
#[path = "cli_test.rs"]
mod tests;

use std::env;
use std::io;
use std::path;

use anyhow::bail;
use anyhow::Context;
use anyhow::Result;
use clap::builder::PossibleValuesParser;
use clap::value_parser;
use clap::Arg;
use clap::ArgAction;
use clap::Command;
use clap_complete::generate;
use clap_complete::Generator;
use clap_complete::Shell;
use strum::VariantNames;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use yansi::Paint;

use crate::configuration::Config;
use crate::configuration::ConfigKey;
use crate::domain::models::BackendBox;
use crate::domain::models::BackendName;
use crate::domain::models::DraftExtraction;
use crate::domain::models::Profile;
use crate::domain::models::Query;
use crate::domain::services::Assistant;
use crate::domain::services::ProfileView;
use crate::domain::services::Profiles;
use crate::infrastructure::backends::BackendManager;

const PROFILE_FORMATS: [&str; 3] = ["text", "json", "yaml"];

pub fn help_text() -> String {
    let text = r#"
HOTKEYS:
- Up arrow - Scroll up
- Down arrow - Scroll down
- PageUp / CTRL+U - Page up
- PageDown / CTRL+D - Page down
- CTRL+T - Show or hide the chat panel. Scrolling applies to the profile while the chat is hidden.
- CTRL+Y - Copy the latest draft email from the assistant to your clipboard.
- Enter - Send your question.
- CTRL+C - Exit.
        "#;

    return text.trim().to_string();
}

/// Directory the debug log is written to when `RUST_LOG` contains `folio`.
pub fn debug_log_dir() -> path::PathBuf {
    if let Ok(dir) = env::var("FOLIO_LOG_DIR") {
        return path::PathBuf::from(dir);
    }

    return dirs::cache_dir().unwrap_or_default().join("folio");
}

/// Backend selected by the loaded configuration.
pub fn configured_backend() -> Result<BackendBox> {
    let backend_name = Config::get(ConfigKey::Backend);
    if let Some(name) = BackendName::parse(backend_name.to_string()) {
        return Ok(BackendManager::get(name));
    }

    bail!(format!("No backend implemented for {backend_name}"));
}

fn print_completions<G: Generator>(gen: G, cmd: &mut Command) {
    generate(gen, cmd, cmd.get_name().to_string(), &mut io::stdout());
}

async fn create_config_file() -> Result<()> {
    let config_file_path = Config::default_config_path();
    let config_path_display = config_file_path.to_string_lossy().to_string();
    if config_file_path.exists() {
        bail!(format!(
            "Config file already exists at {config_path_display}"
        ));
    }

    if let Some(parent) = config_file_path.parent() {
        if !parent.exists() {
            fs::create_dir_all(parent).await?;
        }
    }

    let mut file = fs::File::create(&config_file_path).await?;
    file.write_all(Config::serialize_default(build()).as_bytes())
        .await?;

    println!("Created default config file at {config_path_display}");
    return Ok(());
}

async fn ask(text: &str) -> Result<()> {
    let query = match Query::parse(text) {
        Some(query) => query,
        None => bail!("Question must not be empty"),
    };

    let profile = Profiles::load(&Config::get(ConfigKey::ProfileFile)).await?;
    let assistant = Assistant::new(configured_backend()?, &profile);
    let reply = assistant.ask(&query).await;

    let extraction = DraftExtraction::extract(&reply);
    println!("{}", extraction.display_text.trim());

    if let Some(draft) = extraction.draft {
        println!("\n{}", Paint::cyan("DRAFT EMAIL").bold());
        println!("{}", draft.format());
    }

    return Ok(());
}

async fn check() -> Result<()> {
    let backend = configured_backend()?;
    let backend_name = backend.name();

    backend
        .health_check()
        .await
        .with_context(|| return format!("Backend {backend_name} failed its health check"))?;

    println!("{}", Paint::green(format!("Backend {backend_name} is reachable.")));
    return Ok(());
}

pub fn format_profile(format: &str, profile: &Profile) -> Result<String> {
    match format {
        "json" => return Ok(serde_json::to_string_pretty(profile)?),
        "yaml" => return Ok(serde_yaml::to_string(profile)?),
        "text" => return Ok(ProfileView::new(profile, 80).plain_text()),
        _ => bail!(format!("Unknown profile format {format}")),
    }
}

async fn print_profile(format: &str) -> Result<()> {
    let profile = Profiles::load(&Config::get(ConfigKey::ProfileFile)).await?;
    println!("{}", format_profile(format, &profile)?);

    return Ok(());
}

fn subcommand_completions() -> Command {
    return Command::new("completions")
        .about("Generates shell completions.")
        .arg(
            clap::Arg::new("shell")
                .short('s')
                .long("shell")
                .help("Which shell to generate completions for.")
                .action(ArgAction::Set)
                .value_parser(value_parser!(Shell))
                .required(true),
        );
}

fn subcommand_config() -> Command {
    return Command::new("config")
        .about("Configuration file options.")
        .subcommand(
            Command::new("create").about("Saves the default config file to the configuration file path. This command will fail if the file exists already.")
        )
        .subcommand(
            Command::new("default").about("Outputs the default configuration file to stdout.")
        )
        .subcommand(
            Command::new("path").about("Returns the default path for the configuration file.")
        );
}

fn subcommand_debug() -> Command {
    let mut cmd = Command::new("debug");
    cmd = cmd.about("Debug helpers for folio")
        .hide(true)
        .subcommand(
            Command::new("log-path").about("Output path to debug log file generated when running folio with environment variable RUST_LOG=folio")
        )
        .subcommand(
            Command::new("enum-config").about("List all config keys as strings.")
        );

    return cmd;
}

fn arg_backend() -> Arg {
    return Arg::new(ConfigKey::Backend.to_string())
        .short('b')
        .long(ConfigKey::Backend.to_string())
        .env("FOLIO_BACKEND")
        .num_args(1)
        .help(format!(
            "The hosted model provider the assistant talks to. [default: {}]",
            Config::default(ConfigKey::Backend)
        ))
        .value_parser(PossibleValuesParser::new(BackendName::VARIANTS));
}

fn arg_backend_health_check_timeout() -> Arg {
    return Arg::new(ConfigKey::BackendHealthCheckTimeout.to_string())
        .long(ConfigKey::BackendHealthCheckTimeout.to_string())
        .env("FOLIO_BACKEND_HEALTH_CHECK_TIMEOUT")
        .num_args(1)
        .help(
            format!("Time to wait in milliseconds before timing out when doing a healthcheck for a backend. [default: {}]", Config::default(ConfigKey::BackendHealthCheckTimeout)),
        );
}

fn arg_model() -> Arg {
    return Arg::new(ConfigKey::Model.to_string())
        .short('m')
        .long(ConfigKey::Model.to_string())
        .env("FOLIO_MODEL")
        .num_args(1)
        .help("The model to request completions from. Defaults to a model picked per backend if not set.");
}

fn subcommand_chat() -> Command {
    return Command::new("chat")
        .about("Open the portfolio with the assistant chat panel. This is the default command.")
        .arg(arg_backend())
        .arg(arg_backend_health_check_timeout())
        .arg(arg_model());
}

fn subcommand_ask() -> Command {
    return Command::new("ask")
        .about("Ask the assistant a single question and print the reply.")
        .arg(arg_backend())
        .arg(arg_model())
        .arg(
            Arg::new("query")
                .help("Question to ask.")
                .required(true)
                .num_args(1),
        );
}

fn subcommand_check() -> Command {
    return Command::new("check")
        .about("Verify the configured backend is reachable with the configured credentials.")
        .arg(arg_backend())
        .arg(arg_backend_health_check_timeout())
        .arg(arg_model());
}

fn subcommand_profile() -> Command {
    return Command::new("profile")
        .about("Print the profile the portfolio is built from.")
        .arg(
            Arg::new("format")
                .short('f')
                .long("format")
                .help("Output format.")
                .num_args(1)
                .default_value("text")
                .value_parser(PossibleValuesParser::new(PROFILE_FORMATS)),
        );
}

pub fn build() -> Command {
    let hotkeys_text = help_text()
        .split('\n')
        .map(|line| {
            if line.starts_with('-') {
                return format!("  {line}");
            }
            if line.starts_with("HOTKEYS:") {
                return Paint::new(format!("CHAT {line}"))
                    .underline()
                    .bold()
                    .to_string();
            }
            return line.to_string();
        })
        .collect::<Vec<String>>()
        .join("\n");

    let about = format!(
        "{}\n\nVersion: {}",
        env!("CARGO_PKG_DESCRIPTION"),
        env!("CARGO_PKG_VERSION"),
    );

    return Command::new("folio")
        .about(about)
        .author(env!("CARGO_PKG_AUTHORS"))
        .version(env!("CARGO_PKG_VERSION"))
        .after_help(hotkeys_text)
        .arg_required_else_help(false)
        .subcommand(subcommand_chat())
        .subcommand(subcommand_ask())
        .subcommand(subcommand_check())
        .subcommand(subcommand_profile())
        .subcommand(subcommand_completions())
        .subcommand(subcommand_config())
        .subcommand(subcommand_debug())
        .subcommand(Command::new("manpages").about("Generates manpages and outputs to stdout."))
        .arg(arg_backend())
        .arg(arg_backend_health_check_timeout())
        .arg(arg_model())
        .arg(
            Arg::new(ConfigKey::ConfigFile.to_string())
                .short('c')
                .long(ConfigKey::ConfigFile.to_string())
                .env("FOLIO_CONFIG_FILE")
                .num_args(1)
                .help(format!("Path to configuration file [default: {}]", Config::default(ConfigKey::ConfigFile)))
                .global(true)
        )
        .arg(
            Arg::new(ConfigKey::ProfileFile.to_string())
                .short('p')
                .long(ConfigKey::ProfileFile.to_string())
                .env("FOLIO_PROFILE_FILE")
                .num_args(1)
                .help("Path to a YAML profile to present instead of the bundled one.")
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::GeminiURL.to_string())
                .long(ConfigKey::GeminiURL.to_string())
                .env("FOLIO_GEMINI_URL")
                .num_args(1)
                .help(format!("Gemini API URL when using the Gemini backend. [default: {}]", Config::default(ConfigKey::GeminiURL)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::GeminiToken.to_string())
                .long(ConfigKey::GeminiToken.to_string())
                .env("FOLIO_GEMINI_TOKEN")
                .num_args(1)
                .help("Google Gemini API token when using the Gemini backend. Without it the assistant runs in maintenance mode.")
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::OpenAiURL.to_string())
                .long(ConfigKey::OpenAiURL.to_string())
                .env("FOLIO_OPEN_AI_URL")
                .num_args(1)
                .help(format!("OpenAI API URL when using the OpenAI backend. Can be swapped to a compatible proxy. [default: {}]", Config::default(ConfigKey::OpenAiURL)))
                .global(true),
        )
        .arg(
            Arg::new(ConfigKey::OpenAiToken.to_string())
                .long(ConfigKey::OpenAiToken.to_string())
                .env("FOLIO_OPEN_AI_TOKEN")
                .num_args(1)
                .help("OpenAI API token when using the OpenAI backend. Without it the assistant runs in maintenance mode.")
                .global(true),
        );
}

/// Handles every subcommand that runs to completion. Returns true when the
/// terminal UI should start.
pub async fn parse() -> Result<bool> {
    let matches = build().get_matches();

    match matches.subcommand() {
        Some(("debug", debug_matches)) => {
            match debug_matches.subcommand() {
                Some(("log-path", _)) => {
                    let log_path = debug_log_dir().join("debug.log");
                    println!("{}", log_path.to_string_lossy());
                }
                Some(("enum-config", _)) => {
                    let res = ConfigKey::VARIANTS.join("\n");
                    println!("{}", res);
                }
                _ => {
                    subcommand_debug().print_long_help()?;
                }
            }

            return Ok(false);
        }
        Some(("chat", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
        }
        Some(("ask", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            let query = subcmd_matches
                .get_one::<String>("query")
                .map(|query| return query.to_string())
                .unwrap_or_default();
            ask(&query).await?;
            return Ok(false);
        }
        Some(("check", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            check().await?;
            return Ok(false);
        }
        Some(("profile", subcmd_matches)) => {
            Config::load(build(), vec![&matches, subcmd_matches]).await?;
            let format = subcmd_matches
                .get_one::<String>("format")
                .map(|format| return format.to_string())
                .unwrap_or_else(|| return "text".to_string());
            print_profile(&format).await?;
            return Ok(false);
        }
        Some(("completions", subcmd_matches)) => {
            if let Some(completions) = subcmd_matches.get_one::<Shell>("shell").copied() {
                let mut app = build();
                print_completions(completions, &mut app);
            }
            return Ok(false);
        }
        Some(("config", subcmd_matches)) => match subcmd_matches.subcommand() {
            Some(("create", _)) => {
                create_config_file().await?;
                return Ok(false);
            }
            Some(("default", _)) => {
                println!("{}", Config::serialize_default(build()));
                return Ok(false);
            }
            Some(("path", _)) => {
                println!("{}", Config::default(ConfigKey::ConfigFile));
                return Ok(false);
            }
            _ => {
                subcommand_config().print_long_help()?;
                return Ok(false);
            }
        },
        Some(("manpages", _)) => {
            clap_mangen::Man::new(build()).render(&mut io::stdout())?;
            return Ok(false);
        }
        _ => {
            Config::load(build(), vec![&matches]).await?;
        }
    }

    return Ok(true);
}
