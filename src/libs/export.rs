//! File export for password batches and pattern analyses.
//!
//! ## Formats
//!
//! | Format | Passwords                          | Patterns                                   |
//! |--------|------------------------------------|--------------------------------------------|
//! | `txt`  | header, numbered lines, total      | header, `n`, numbered strings, total       |
//! | `csv`  | `Index,Password` table             | `Length`/`Total` rows, `Index,String` table |
//! | `json` | serialized [`PasswordBatch`]       | serialized [`PatternAnalysis`]             |
//!
//! The empty binary string is written as `(empty)` in `txt` and `csv`, and
//! as `""` in `json`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use pwlab::libs::analysis::PatternAnalysis;
//! use pwlab::libs::export::{ExportFormat, Exporter};
//! use std::path::PathBuf;
//!
//! let analysis = PatternAnalysis::analyze(3, 5, false)?;
//! Exporter::new(ExportFormat::Csv, PathBuf::from("binary_strings.csv")).export_patterns(&analysis)?;
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::analysis::{PasswordBatch, PatternAnalysis};
use super::config::ExportConfig;
use super::formatter::{display_pattern, format_count, numbered};
use crate::libs::messages::Message;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Supported export formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ExportFormat {
    /// Plain text with a header, numbered lines and a total.
    Txt,
    /// Comma-separated values.
    Csv,
    /// Pretty-printed JSON.
    Json,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Txt => "txt",
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    /// Guesses the format from a file extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()?.to_ascii_lowercase().as_str() {
            "txt" => Some(ExportFormat::Txt),
            "csv" => Some(ExportFormat::Csv),
            "json" => Some(ExportFormat::Json),
            _ => None,
        }
    }
}

/// Writes batches and analyses to a single output file.
pub struct Exporter {
    format: ExportFormat,
    output_path: PathBuf,
}

impl Exporter {
    pub fn new(format: ExportFormat, output_path: PathBuf) -> Self {
        Self { format, output_path }
    }

    /// Uses `output_path` when given, otherwise `default_file` inside the
    /// configured export directory with its extension set to match `format`.
    pub fn with_default_name(format: ExportFormat, output_path: Option<PathBuf>, default_file: &str, export: &ExportConfig) -> Self {
        let output_path = output_path.unwrap_or_else(|| export.resolve(default_file).with_extension(format.extension()));
        Self { format, output_path }
    }

    pub fn format(&self) -> ExportFormat {
        self.format
    }

    pub fn output_path(&self) -> &Path {
        &self.output_path
    }

    pub fn export_passwords(&self, batch: &PasswordBatch) -> Result<()> {
        self.prepare_parent()?;
        match self.format {
            ExportFormat::Txt => self.export_passwords_txt(batch)?,
            ExportFormat::Csv => self.export_passwords_csv(batch)?,
            ExportFormat::Json => self.export_json(batch)?,
        }
        debug!(path = %self.output_path.display(), format = ?self.format, "exported passwords");
        Ok(())
    }

    pub fn export_patterns(&self, analysis: &PatternAnalysis) -> Result<()> {
        self.prepare_parent()?;
        match self.format {
            ExportFormat::Txt => self.export_patterns_txt(analysis)?,
            ExportFormat::Csv => self.export_patterns_csv(analysis)?,
            ExportFormat::Json => self.export_json(analysis)?,
        }
        debug!(path = %self.output_path.display(), format = ?self.format, "exported patterns");
        Ok(())
    }

    fn prepare_parent(&self) -> Result<()> {
        if let Some(parent) = self.output_path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }
        Ok(())
    }

    fn export_passwords_txt(&self, batch: &PasswordBatch) -> Result<()> {
        let mut out = BufWriter::new(File::create(&self.output_path)?);

        writeln!(out, "Generated Passwords:")?;
        writeln!(out)?;
        for line in numbered(&batch.passwords) {
            writeln!(out, "{}", line)?;
        }
        writeln!(out)?;
        writeln!(out, "Total: {}", batch.passwords.len())?;

        out.flush()?;
        Ok(())
    }

    fn export_passwords_csv(&self, batch: &PasswordBatch) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;
        wtr.write_record(["Index", "Password"])?;

        for (i, password) in batch.passwords.iter().enumerate() {
            wtr.write_record([(i + 1).to_string(), password.to_string()])?;
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_patterns_txt(&self, analysis: &PatternAnalysis) -> Result<()> {
        let mut out = BufWriter::new(File::create(&self.output_path)?);

        writeln!(out, "Analyzed Binary Pattern:")?;
        writeln!(out)?;
        writeln!(out, "{}", Message::PatternResultsFor(analysis.n))?;
        writeln!(out)?;
        writeln!(out, "{}", Message::PatternValidStrings)?;
        writeln!(out)?;
        match &analysis.strings {
            Some(strings) => {
                let shown: Vec<&str> = strings.iter().map(|s| display_pattern(s)).collect();
                for line in numbered(&shown) {
                    writeln!(out, "{}", line)?;
                }
            }
            None => writeln!(out, "{}", Message::PatternListHidden(analysis.list_limit))?,
        }
        writeln!(out)?;
        writeln!(out, "{}", Message::PatternTotal(format_count(&analysis.count)))?;

        out.flush()?;
        Ok(())
    }

    fn export_patterns_csv(&self, analysis: &PatternAnalysis) -> Result<()> {
        let mut wtr = csv::Writer::from_path(&self.output_path)?;

        wtr.write_record(["Length".to_string(), analysis.n.to_string()])?;
        wtr.write_record(["Total".to_string(), analysis.count.to_string()])?;

        if let Some(strings) = &analysis.strings {
            wtr.write_record(["", ""])?;
            wtr.write_record(["Index", "String"])?;
            for (i, s) in strings.iter().enumerate() {
                wtr.write_record([(i + 1).to_string(), display_pattern(s).to_string()])?;
            }
        }

        wtr.flush()?;
        Ok(())
    }

    fn export_json<T: Serialize>(&self, data: &T) -> Result<()> {
        let file = File::create(&self.output_path)?;
        serde_json::to_writer_pretty(&file, data)?;
        Ok(())
    }
}
