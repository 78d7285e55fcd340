//! Binary pattern analysis command.
//!
//! Counts binary strings of length `n` without consecutive ones, lists them
//! when `n` is small enough, and optionally exports the analysis.
//!
//! ```bash
//! pwlab pattern 5
//! pwlab pattern 8 --list -e -o analysis/n8.csv
//! ```

use super::password::resolve_format;
use crate::{
    libs::{
        analysis::PatternAnalysis,
        config::{Config, ExportConfig},
        export::{ExportFormat, Exporter},
        formatter::format_count,
        messages::Message,
        view::View,
    },
    msg_debug, msg_error_anyhow, msg_info, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct PatternArgs {
    /// String length n (>= 0); prompts when omitted
    #[arg(allow_negative_numbers = true)]
    pub n: Option<i64>,

    /// List the strings even when n is above the configured limit
    #[arg(short, long)]
    pub list: bool,

    /// Export the analysis
    #[arg(short, long)]
    pub export: bool,

    /// Export format; inferred from --output, otherwise csv
    #[arg(short, long, value_enum)]
    pub format: Option<ExportFormat>,

    /// Export file path; implies --export
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

pub fn cmd(args: PatternArgs) -> Result<()> {
    let config = Config::read()?;

    msg_print!(Message::PatternAnalyzerHeader, true);
    msg_info!(Message::PatternAnalyzerSubtitle);

    let n = match args.n {
        Some(n) => n,
        None => prompt_length()?,
    };

    let analysis = PatternAnalysis::analyze(n, config.analyzer().list_limit, args.list)
        .map_err(|e| msg_error_anyhow!(Message::EngineFailure(e.to_string())))?;
    msg_debug!(format!("n = {}, listed = {}", analysis.n, analysis.strings.as_ref().map_or(0, Vec::len)));
    show_analysis(&analysis)?;

    if args.export || args.output.is_some() {
        let format = resolve_format(args.format, args.output.as_ref(), ExportFormat::Csv);
        export_analysis(&analysis, format, args.output, &config.export())?;
    }

    Ok(())
}

/// Asks for a non-negative length, re-prompting on invalid input.
pub fn prompt_length() -> Result<i64> {
    let range_msg = Message::PatternLengthRange.to_string();
    let n = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptPatternLength.to_string())
        .validate_with(|input: &i64| -> Result<(), &str> {
            if *input >= 0 {
                Ok(())
            } else {
                Err(&range_msg)
            }
        })
        .interact_text()?;

    Ok(n)
}

pub fn show_analysis(analysis: &PatternAnalysis) -> Result<()> {
    msg_print!(Message::PatternResultsFor(analysis.n), true);

    match &analysis.strings {
        Some(strings) => {
            msg_print!(Message::PatternValidStrings);
            View::patterns(strings)?;
        }
        None => msg_print!(Message::PatternListHidden(analysis.list_limit)),
    }

    msg_print!(Message::PatternTotal(format_count(&analysis.count)), true);
    Ok(())
}

pub fn export_analysis(analysis: &PatternAnalysis, format: ExportFormat, output: Option<PathBuf>, export: &ExportConfig) -> Result<()> {
    let exporter = Exporter::with_default_name(format, output, &export.patterns_file, export);
    exporter.export_patterns(analysis)?;
    msg_success!(Message::DataExported(exporter.output_path().display().to_string()));
    Ok(())
}
