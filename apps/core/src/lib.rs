//! EmoBuddy core library.
//!
//! The rule-based responder behind the EmoBuddy wellness chat: reply selection,
//! emotion classification and crisis detection over immutable rule tables.

pub mod brain;
pub mod config;
pub mod error;
pub mod telemetry;

#[cfg(test)]
mod tests;

pub use brain::{
    ClassificationResult, CrisisDetector, EmotionClassifier, PatternMatcher, Responder,
    ResponseResult, RuleBook,
};
pub use config::CoreConfig;
pub use error::{AppError, RuleError};
