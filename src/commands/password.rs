//! Password generation command.
//!
//! Prints the size of the password space, generates a batch of distinct
//! passwords and optionally exports it.
//!
//! ```bash
//! pwlab password -c 10
//! pwlab password -c 20 --strategy exact --seed 42 -e -f json
//! ```

use crate::{
    engine::password::{total_password_space, GenerationStrategy, MAX_BATCH, MIN_BATCH},
    libs::{
        analysis::PasswordBatch,
        config::{Config, ExportConfig},
        export::{ExportFormat, Exporter},
        formatter::format_count,
        messages::Message,
        view::View,
    },
    msg_debug, msg_error_anyhow, msg_info, msg_print, msg_success, msg_warning,
};
use anyhow::Result;
use clap::{Args, ValueEnum};
use dialoguer::{theme::ColorfulTheme, Input};
use std::path::PathBuf;

/// Sampling strategy as accepted on the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StrategyArg {
    /// Random draws under a `count × 100` attempt budget
    Budget,
    /// Sampling without replacement; always delivers the full count
    Exact,
}

impl From<StrategyArg> for GenerationStrategy {
    fn from(arg: StrategyArg) -> Self {
        match arg {
            StrategyArg::Budget => GenerationStrategy::AttemptBudget,
            StrategyArg::Exact => GenerationStrategy::Exact,
        }
    }
}

#[derive(Debug, Args)]
pub struct PasswordArgs {
    /// Number of passwords to generate (1-20); prompts when omitted
    #[arg(short, long, allow_negative_numbers = true)]
    pub count: Option<i64>,

    /// Sampling strategy; defaults to the configured one
    #[arg(short, long, value_enum)]
    pub strategy: Option<StrategyArg>,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,

    /// Export the generated passwords
    #[arg(short, long)]
    pub export: bool,

    /// Export format; inferred from --output, otherwise txt
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Export file path; implies --export
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn cmd(args: PasswordArgs) -> Result<()> {
    let config = Config::read()?;
    let generator = config.generator();

    msg_print!(Message::PasswordGeneratorHeader, true);
    msg_info!(Message::PasswordSpaceTotal(format_count(total_password_space())));

    let count = match args.count {
        Some(count) => count,
        None => prompt_count(generator.default_count)?,
    };
    let strategy = args.strategy.map(GenerationStrategy::from).unwrap_or(generator.strategy);
    msg_debug!(format!("count = {}, strategy = {:?}, seed = {:?}", count, strategy, args.seed));

    let batch = PasswordBatch::generate(count, strategy, args.seed).map_err(|e| msg_error_anyhow!(Message::EngineFailure(e.to_string())))?;
    show_batch(&batch)?;

    if args.export || args.output.is_some() {
        let format = resolve_format(args.format, args.output.as_ref(), ExportFormat::Txt);
        export_batch(&batch, format, args.output, &config.export())?;
    }

    Ok(())
}

/// Asks for a batch size in `[1, 20]`, re-prompting on invalid input.
pub fn prompt_count(default: i64) -> Result<i64> {
    let range_msg = Message::PasswordCountRange.to_string();
    let count = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPasswordCount.to_string())
        .default(default.clamp(MIN_BATCH, MAX_BATCH))
        .validate_with(|input: &i64| -> Result<(), &str> {
            if (MIN_BATCH..=MAX_BATCH).contains(input) {
                Ok(())
            } else {
                Err(&range_msg)
            }
        })
        .interact_text()?;

    Ok(count)
}

pub fn show_batch(batch: &PasswordBatch) -> Result<()> {
    msg_print!(Message::PasswordsGenerated(batch.passwords.len()), true);
    View::passwords(&batch.passwords)?;

    if batch.is_short() {
        msg_warning!(Message::PasswordBatchShort {
            requested: batch.requested,
            delivered: batch.passwords.len(),
        });
    }

    Ok(())
}

pub fn export_batch(batch: &PasswordBatch, format: ExportFormat, output: Option<PathBuf>, export: &ExportConfig) -> Result<()> {
    let exporter = Exporter::with_default_name(format, output, &export.passwords_file, export);
    exporter.export_passwords(batch)?;
    msg_success!(Message::DataExported(exporter.output_path().display().to_string()));
    Ok(())
}

/// Explicit format wins, then the output file extension, then `fallback`.
pub fn resolve_format(format: Option<ExportFormat>, output: Option<&PathBuf>, fallback: ExportFormat) -> ExportFormat {
    format.or_else(|| output.and_then(|path| ExportFormat::from_path(path))).unwrap_or(fallback)
}
