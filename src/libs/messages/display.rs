//! Text for every [`Message`] variant.
//!
//! Keeping all strings in one match makes wording changes a one-file edit
//! and forces a decision for each new variant.

use super::types::Message;
use crate::engine::password::{MAX_BATCH, MIN_BATCH};
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === MENU MESSAGES ===
            Message::MenuTitle => "PASSWORD GENERATOR AND PATTERN ANALYZER".to_string(),
            Message::MenuPrompt => "Main Menu".to_string(),
            Message::MenuPasswordGenerator => "Password Generator".to_string(),
            Message::MenuPatternAnalyzer => "Pattern Analyzer".to_string(),
            Message::MenuExit => "Exit Program".to_string(),
            Message::Goodbye => "Thank you! Exiting the program...".to_string(),

            // === PASSWORD MESSAGES ===
            Message::PasswordGeneratorHeader => "PASSWORD GENERATOR".to_string(),
            Message::PasswordSpaceTotal(total) => format!("Total possible combinations: {}", total),
            Message::PasswordsGenerated(count) => format!("{} passwords generated:", count),
            Message::PasswordBatchShort { requested, delivered } => {
                format!("Only {} of {} requested passwords could be generated within the attempt budget.", delivered, requested)
            }
            Message::PasswordCountRange => format!("Enter a number between {} and {}.", MIN_BATCH, MAX_BATCH),
            Message::PromptPasswordCount => format!("Generate how many passwords ({}-{})", MIN_BATCH, MAX_BATCH),

            // === PATTERN MESSAGES ===
            Message::PatternAnalyzerHeader => "PATTERN ANALYZER".to_string(),
            Message::PatternAnalyzerSubtitle => "Count binary strings without consecutive 1s".to_string(),
            Message::PatternResultsFor(n) => format!("Results for n = {}:", n),
            Message::PatternValidStrings => "Valid strings:".to_string(),
            Message::PatternTotal(total) => format!("Total: {}", total),
            Message::PatternListHidden(limit) => format!("(List not shown for n > {})", limit),
            Message::PatternLengthRange => "Enter a non-negative integer.".to_string(),
            Message::PromptPatternLength => "Enter length n (>= 0)".to_string(),

            // === EXPORT MESSAGES ===
            Message::ConfirmExport => "Export to file?".to_string(),
            Message::PromptExportFileName => "Enter filename".to_string(),
            Message::DataExported(path) => format!("Exported to '{}'", path),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigNotFound => "No configuration file to remove".to_string(),
            Message::ConfigModuleGenerator => "Password generator".to_string(),
            Message::ConfigModuleAnalyzer => "Pattern analyzer".to_string(),
            Message::ConfigModuleExport => "Export".to_string(),
            Message::PromptSelectModules => "Select modules to configure (space to select, enter to confirm)".to_string(),
            Message::PromptDefaultCount => format!("Default password count ({}-{})", MIN_BATCH, MAX_BATCH),
            Message::PromptStrategy => "Password sampling strategy".to_string(),
            Message::StrategyAttemptBudget => "budget (random draws, may return fewer)".to_string(),
            Message::StrategyExact => "exact (sampling without replacement)".to_string(),
            Message::PromptListLimit => "Largest n whose strings are listed".to_string(),
            Message::PromptExportDirectory => "Export directory (empty for current directory)".to_string(),
            Message::PromptPasswordsFile => "Default password export file".to_string(),
            Message::PromptPatternsFile => "Default pattern export file".to_string(),
            Message::ListLimitRange => "Enter a limit between 0 and 30.".to_string(),

            // === ERROR MESSAGES ===
            Message::EngineFailure(error) => error.clone(),
        };

        write!(f, "{}", text)
    }
}
