/// Every piece of user-facing text in pwlab.
///
/// Variants carry the values they interpolate; the text itself lives in the
/// `Display` impl in [`super::display`].
#[derive(Debug, Clone)]
pub enum Message {
    // === MENU MESSAGES ===
    MenuTitle,
    MenuPrompt,
    MenuPasswordGenerator,
    MenuPatternAnalyzer,
    MenuExit,
    Goodbye,

    // === PASSWORD MESSAGES ===
    PasswordGeneratorHeader,
    PasswordSpaceTotal(String),
    PasswordsGenerated(usize),
    PasswordBatchShort { requested: usize, delivered: usize },
    PasswordCountRange,
    PromptPasswordCount,

    // === PATTERN MESSAGES ===
    PatternAnalyzerHeader,
    PatternAnalyzerSubtitle,
    PatternResultsFor(i64),
    PatternValidStrings,
    PatternTotal(String),
    PatternListHidden(i64),
    PatternLengthRange,
    PromptPatternLength,

    // === EXPORT MESSAGES ===
    ConfirmExport,
    PromptExportFileName,
    DataExported(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigNotFound,
    ConfigModuleGenerator,
    ConfigModuleAnalyzer,
    ConfigModuleExport,
    PromptSelectModules,
    PromptDefaultCount,
    PromptStrategy,
    StrategyAttemptBudget,
    StrategyExact,
    PromptListLimit,
    PromptExportDirectory,
    PromptPasswordsFile,
    PromptPatternsFile,
    ListLimitRange,

    // === ERROR MESSAGES ===
    EngineFailure(String),
}
