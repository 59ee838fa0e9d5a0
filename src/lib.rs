// src/lib.rs
pub mod application;
pub mod cli;
pub mod constants;
pub mod domain;
pub mod infrastructure;
pub mod ports;
pub mod util;

use std::path::Path;
use anyhow::{bail, Context, Result};
use application::{FlashcardGenerator, NoteProcessor, Notifier};
use constants::{API_KEY_ENV_VAR, SUPPORTED_MODELS};
use domain::{NoteOutcome, Settings};
use infrastructure::{Config, FsNoteStore, OpenAiClient};
use ports::ConsoleNotifier;
use tracing::{debug, info, warn};
use crate::cli::args::{Args, Command};

/// Command-line overrides applied on top of the config file
#[derive(Debug, Default, Clone)]
pub struct SettingsOverrides {
    pub model: Option<String>,
    pub separator: Option<String>,
    pub tag: Option<String>,
}

impl SettingsOverrides {
    pub fn apply(self, mut settings: Settings) -> Settings {
        if let Some(model) = self.model {
            settings.model = model;
        }
        if let Some(separator) = self.separator {
            settings.inline_separator = separator;
        }
        if let Some(tag) = self.tag {
            settings.generation_tag = tag;
        }
        settings
    }
}

pub fn run(args: Args) -> Result<()> {
    debug!(?args, "Starting flashcards-llm with arguments");

    let config_path = match args.config {
        Some(path) => {
            debug!(?path, "Using provided config path");
            path
        }
        None => Config::default_path()?,
    };

    match args.command {
        Command::Generate {
            folder,
            recursive,
            model,
            separator,
            tag,
        } => {
            let overrides = SettingsOverrides {
                model,
                separator,
                tag,
            };
            handle_generate_command(&config_path, &folder, recursive, overrides)
        }
        Command::Init { force } => handle_init_command(&config_path, force),
        Command::Models => handle_models_command(),
    }
}

/// Resolve settings from the config file, `OPENAI_API_KEY` and CLI overrides
pub fn resolve_settings(config_path: &Path, overrides: SettingsOverrides) -> Result<Settings> {
    let config = Config::load_or_default(config_path)?;
    let settings = config.into_settings(std::env::var(API_KEY_ENV_VAR).ok());
    Ok(overrides.apply(settings))
}

/// Generate flashcards for every tagged note in `folder` with the given client.
///
/// Aborts before touching any note when the API key is missing.
pub fn generate_for_folder<C, N>(
    client: C,
    notifier: N,
    settings: Settings,
    folder: &Path,
    recursive: bool,
) -> Result<Vec<NoteOutcome>>
where
    C: application::CompletionClient,
    N: Notifier,
{
    if let Err(e) = settings.validate() {
        notifier.notify(&e.to_string());
        return Err(e).context("Generation aborted, no note was touched");
    }

    if !SUPPORTED_MODELS.contains(&settings.model.as_str()) {
        warn!(model = %settings.model, "Model is not in the list of known models, using it anyway");
    }

    info!(?folder, recursive, model = %settings.model, "Generating flashcards");
    let mut processor = NoteProcessor::new(
        FlashcardGenerator::new(client),
        FsNoteStore::new(),
        notifier,
        settings,
    )?;

    let outcomes = processor
        .process_folder(folder, recursive)
        .with_context(|| format!("Failed to scan folder {}", folder.display()))?;

    for outcome in outcomes.iter().filter(|o| !o.is_generated()) {
        debug!(path = ?outcome.path(), "Note left unchanged");
    }
    debug!(
        notes = outcomes.len(),
        generated = outcomes.iter().filter(|o| o.is_generated()).count(),
        "Folder processed"
    );
    Ok(outcomes)
}

fn handle_generate_command(
    config_path: &Path,
    folder: &Path,
    recursive: bool,
    overrides: SettingsOverrides,
) -> Result<()> {
    let settings = resolve_settings(config_path, overrides)?;
    debug!(?settings, "Resolved settings");

    let client = OpenAiClient::new(&settings.base_url)?;
    generate_for_folder(client, ConsoleNotifier::new(), settings, folder, recursive)?;

    Ok(())
}

fn handle_init_command(config_path: &Path, force: bool) -> Result<()> {
    if config_path.exists() && !force {
        bail!(
            "Config file already exists at {}. Use --force to overwrite",
            config_path.display()
        );
    }

    Config::create_default(config_path)
        .with_context(|| format!("Failed to create {}", config_path.display()))?;

    println!("Created config file at {}", config_path.display());
    println!("Set openai.api_key there or export {}", API_KEY_ENV_VAR);
    Ok(())
}

fn handle_models_command() -> Result<()> {
    for model in SUPPORTED_MODELS {
        println!("{}", model);
    }
    Ok(())
}
