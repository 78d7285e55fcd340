//! Interactive text menu.
//!
//! Runs when pwlab is started without a subcommand. Loops over a main menu
//! (password generator, pattern analyzer, exit) until the user leaves.
//! Engine and export errors are reported and the loop continues.

use super::{password, pattern};
use crate::{
    engine::password::total_password_space,
    libs::{
        analysis::{PasswordBatch, PatternAnalysis},
        config::{Config, ExportConfig},
        export::{ExportFormat, Exporter},
        formatter::format_count,
        messages::Message,
    },
    msg_error, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};
use std::path::PathBuf;

enum MenuChoice {
    Passwords,
    Patterns,
    Exit,
}

pub fn cmd() -> Result<()> {
    let config = Config::read()?;
    msg_print!(Message::MenuTitle, true);

    loop {
        let outcome = match select()? {
            MenuChoice::Passwords => passwords(&config),
            MenuChoice::Patterns => patterns(&config),
            MenuChoice::Exit => break,
        };

        if let Err(e) = outcome {
            msg_error!(e);
        }
    }

    msg_print!(Message::Goodbye, true);
    Ok(())
}

fn select() -> Result<MenuChoice> {
    let items = [
        Message::MenuPasswordGenerator.to_string(),
        Message::MenuPatternAnalyzer.to_string(),
        Message::MenuExit.to_string(),
    ];

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::MenuPrompt.to_string())
        .items(&items)
        .default(0)
        .interact()?;

    Ok(match selection {
        0 => MenuChoice::Passwords,
        1 => MenuChoice::Patterns,
        _ => MenuChoice::Exit,
    })
}

fn passwords(config: &Config) -> Result<()> {
    let generator = config.generator();

    msg_print!(Message::PasswordGeneratorHeader, true);
    msg_info!(Message::PasswordSpaceTotal(format_count(total_password_space())));

    let count = password::prompt_count(generator.default_count)?;
    let batch = PasswordBatch::generate(count, generator.strategy, None)?;
    password::show_batch(&batch)?;

    let export = config.export();
    if let Some(exporter) = offer_export(&export, &export.passwords_file, ExportFormat::Txt)? {
        exporter.export_passwords(&batch)?;
        msg_success!(Message::DataExported(exporter.output_path().display().to_string()));
    }

    Ok(())
}

fn patterns(config: &Config) -> Result<()> {
    msg_print!(Message::PatternAnalyzerHeader, true);
    msg_info!(Message::PatternAnalyzerSubtitle);

    let n = pattern::prompt_length()?;
    let analysis = PatternAnalysis::analyze(n, config.analyzer().list_limit, false)?;
    pattern::show_analysis(&analysis)?;

    let export = config.export();
    if let Some(exporter) = offer_export(&export, &export.patterns_file, ExportFormat::Csv)? {
        exporter.export_patterns(&analysis)?;
        msg_success!(Message::DataExported(exporter.output_path().display().to_string()));
    }

    Ok(())
}

/// Asks whether to export and for a file name; the format follows the
/// file extension, falling back to `fallback`.
fn offer_export(export: &ExportConfig, default_file: &str, fallback: ExportFormat) -> Result<Option<Exporter>> {
    let confirmed = Confirm::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::ConfirmExport.to_string())
        .default(false)
        .interact()?;
    if !confirmed {
        return Ok(None);
    }

    let file_name: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptExportFileName.to_string())
        .default(default_file.to_string())
        .interact_text()?;

    let path: PathBuf = export.resolve(file_name.trim());
    let format = ExportFormat::from_path(&path).unwrap_or(fallback);
    Ok(Some(Exporter::new(format, path)))
}
