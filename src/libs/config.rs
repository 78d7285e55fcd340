//! Configuration management for pwlab.
//!
//! Settings are stored as pretty-printed JSON in the platform data directory
//! (see [`DataStorage`]). The file is optional: a missing file yields
//! [`Config::default`], and every module that is absent from the file falls
//! back to its own defaults.
//!
//! ## Modules
//!
//! - **generator**: default batch size and sampling strategy
//! - **analyzer**: largest `n` whose strings are listed
//! - **export**: output directory and default file names
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pwlab::libs::config::Config;
//!
//! let config = Config::read()?;
//! println!("listing up to n = {}", config.analyzer().list_limit);
//!
//! Config::init()?.save()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::engine::password::{GenerationStrategy, MAX_BATCH, MIN_BATCH};
use crate::libs::messages::Message;
use anyhow::{Context, Result};
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect, Select};
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::path::{Path, PathBuf};

/// Configuration file name inside the data directory.
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Upper bound accepted for [`AnalyzerConfig::list_limit`].
pub const MAX_LIST_LIMIT: i64 = 30;

/// A configurable module shown by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    /// Identifier used to route the wizard
    pub key: String,
    /// Display name
    pub name: String,
}

/// Password generator settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct GeneratorConfig {
    /// Batch size used when a command does not ask for one.
    pub default_count: i64,
    /// Sampling strategy for batches.
    #[serde(default)]
    pub strategy: GenerationStrategy,
}

/// Pattern analyzer settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct AnalyzerConfig {
    /// Strings are listed only for `n <= list_limit`; larger `n` reports the count alone.
    pub list_limit: i64,
}

/// Export settings.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ExportConfig {
    /// Directory for exports without an explicit path. Current directory when unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
    /// Default file name for password exports.
    pub passwords_file: String,
    /// Default file name for pattern exports.
    pub patterns_file: String,
}

/// Root configuration object.
///
/// Absent modules are omitted from the file and resolved to defaults by the
/// accessor methods.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generator: Option<GeneratorConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub analyzer: Option<AnalyzerConfig>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportConfig>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            default_count: 5,
            strategy: GenerationStrategy::AttemptBudget,
        }
    }
}

impl Default for AnalyzerConfig {
    fn default() -> Self {
        AnalyzerConfig { list_limit: 5 }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        ExportConfig {
            directory: None,
            passwords_file: "passwords.txt".to_string(),
            patterns_file: "binary_strings.csv".to_string(),
        }
    }
}

impl ExportConfig {
    /// Joins `file_name` onto the configured export directory.
    pub fn resolve(&self, file_name: &str) -> PathBuf {
        match &self.directory {
            Some(directory) => directory.join(file_name),
            None => PathBuf::from(file_name),
        }
    }
}

impl Config {
    /// Reads the configuration from the data directory.
    ///
    /// Returns the default configuration when no file exists.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        Self::read_from(&config_file_path)
    }

    /// Reads the configuration from an explicit path.
    pub fn read_from(path: &Path) -> Result<Config> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(path)?;
        let config: Config = serde_json::from_str(&config_str).with_context(|| format!("failed to parse {}", path.display()))?;
        Ok(config)
    }

    /// Writes the configuration to the data directory.
    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        self.save_to(&config_file_path)
    }

    /// Writes the configuration as pretty JSON to an explicit path.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        let config_file = File::create(path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Removes the configuration file. Returns `false` when there was none.
    pub fn delete() -> Result<bool> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;
        if !config_file_path.exists() {
            return Ok(false);
        }
        fs::remove_file(config_file_path)?;
        Ok(true)
    }

    pub fn generator(&self) -> GeneratorConfig {
        self.generator.clone().unwrap_or_default()
    }

    pub fn analyzer(&self) -> AnalyzerConfig {
        self.analyzer.clone().unwrap_or_default()
    }

    pub fn export(&self) -> ExportConfig {
        self.export.clone().unwrap_or_default()
    }

    /// Runs the interactive setup wizard.
    ///
    /// Starts from the stored configuration, lets the user pick modules, and
    /// prompts for each selected module with the current values as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let modules = vec![
            ConfigModule {
                key: "generator".to_string(),
                name: Message::ConfigModuleGenerator.to_string(),
            },
            ConfigModule {
                key: "analyzer".to_string(),
                name: Message::ConfigModuleAnalyzer.to_string(),
            },
            ConfigModule {
                key: "export".to_string(),
                name: Message::ConfigModuleExport.to_string(),
            },
        ];
        let names: Vec<&str> = modules.iter().map(|m| m.name.as_str()).collect();

        let selections = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&names)
            .interact()?;

        for selection in selections {
            match modules[selection].key.as_str() {
                "generator" => config.generator = Some(Self::init_generator(&config.generator())?),
                "analyzer" => config.analyzer = Some(Self::init_analyzer(&config.analyzer())?),
                "export" => config.export = Some(Self::init_export(&config.export())?),
                _ => {}
            }
        }

        Ok(config)
    }

    fn init_generator(current: &GeneratorConfig) -> Result<GeneratorConfig> {
        let range_msg = Message::PasswordCountRange.to_string();
        let default_count = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptDefaultCount.to_string())
            .default(current.default_count)
            .validate_with(|input: &i64| -> Result<(), &str> {
                if (MIN_BATCH..=MAX_BATCH).contains(input) {
                    Ok(())
                } else {
                    Err(&range_msg)
                }
            })
            .interact_text()?;

        let strategies = [GenerationStrategy::AttemptBudget, GenerationStrategy::Exact];
        let labels = [Message::StrategyAttemptBudget.to_string(), Message::StrategyExact.to_string()];
        let current_index = strategies.iter().position(|s| *s == current.strategy).unwrap_or(0);
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptStrategy.to_string())
            .items(&labels)
            .default(current_index)
            .interact()?;

        Ok(GeneratorConfig {
            default_count,
            strategy: strategies[selection],
        })
    }

    fn init_analyzer(current: &AnalyzerConfig) -> Result<AnalyzerConfig> {
        let range_msg = Message::ListLimitRange.to_string();
        let list_limit = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptListLimit.to_string())
            .default(current.list_limit)
            .validate_with(|input: &i64| -> Result<(), &str> {
                if (0..=MAX_LIST_LIMIT).contains(input) {
                    Ok(())
                } else {
                    Err(&range_msg)
                }
            })
            .interact_text()?;

        Ok(AnalyzerConfig { list_limit })
    }

    fn init_export(current: &ExportConfig) -> Result<ExportConfig> {
        let directory: String = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptExportDirectory.to_string())
            .default(current.directory.as_ref().map(|d| d.display().to_string()).unwrap_or_default())
            .allow_empty(true)
            .interact_text()?;

        let passwords_file = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPasswordsFile.to_string())
            .default(current.passwords_file.clone())
            .interact_text()?;

        let patterns_file = Input::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptPatternsFile.to_string())
            .default(current.patterns_file.clone())
            .interact_text()?;

        Ok(ExportConfig {
            directory: if directory.trim().is_empty() { None } else { Some(PathBuf::from(directory.trim())) },
            passwords_file,
            patterns_file,
        })
    }
}
