use std::io;
use thiserror::Error;

/// Violations of the rule-table invariants, detected once when the core is built.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuleError {
    /// The conversation table is empty or its last rule is not a catch-all.
    #[error("The last conversation rule must be a catch-all")]
    MissingCatchAll,

    /// A catch-all appears before the end of the table, shadowing the rules after it.
    #[error("Catch-all rule '{0}' is not last; the rules after it can never match")]
    UnreachableRule(String),

    /// A rule has nothing to say.
    #[error("Rule '{0}' has an empty response set")]
    EmptyResponses(String),

    /// A rule trigger lists no words, or only blank ones.
    #[error("Rule '{0}' has an empty trigger")]
    EmptyTrigger(String),

    /// Two rules share the same identifier.
    #[error("Duplicate rule id '{0}'")]
    DuplicateRuleId(String),

    /// The designated crisis rule does not exist.
    #[error("Crisis rule '{0}' is not defined")]
    MissingCrisisRule(String),

    /// The designated crisis rule is not flagged as a crisis rule.
    #[error("Rule '{0}' is designated as the crisis rule but is not flagged is_crisis")]
    CrisisRuleNotFlagged(String),

    /// The emotion table has no neutral fallback.
    #[error("Emotion table has no '{0}' rule")]
    MissingNeutral(String),

    /// Base intensity outside 1..=5.
    #[error("Emotion '{emotion}' has base intensity {intensity}, expected 1..=5")]
    IntensityOutOfRange { emotion: String, intensity: u8 },

    /// Display color is not `#RRGGBB`.
    #[error("Emotion '{emotion}' has malformed color '{color}'")]
    InvalidColor { emotion: String, color: String },

    /// A word is listed both as an intensifier and as a mitigator.
    #[error("'{0}' is listed both as an intensifier and as a mitigator")]
    OverlappingModifier(String),

    /// No crisis phrases configured.
    #[error("Crisis phrase list is empty")]
    NoCrisisPhrases,
}

/// Crate-wide error type, consolidating all possible errors into a single enum.
#[derive(Debug, Error)]
pub enum AppError {
    /// Represents standard input/output errors (e.g. reading a rulebook file).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Represents a rule table that breaks one of the core invariants.
    #[error("Rule table error: {0}")]
    Rules(#[from] RuleError),

    /// Represents data validation errors (e.g., invalid input format).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Represents configuration-related errors (e.g., malformed environment variables).
    #[error("Configuration error: {0}")]
    Config(String),

    /// Represents unexpected internal errors that indicate a bug.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Validation(format!("JSON error: {}", err))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::Validation(format!("Validation errors: {}", err))
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Validation(format!("Invalid trigger pattern: {}", err))
    }
}

impl From<aho_corasick::BuildError> for AppError {
    fn from(err: aho_corasick::BuildError) -> Self {
        AppError::Internal(format!("Phrase automaton error: {}", err))
    }
}

impl From<std::num::ParseIntError> for AppError {
    fn from(err: std::num::ParseIntError) -> Self {
        AppError::Config(format!("Invalid number: {}", err))
    }
}
