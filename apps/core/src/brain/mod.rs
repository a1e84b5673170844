//! # Brain Module
//!
//! Rule-based conversational core for EmoBuddy.
//! Classifies a user message without any ML model: picks a reply, detects the
//! emotion and flags crisis language.
//!
//! ## Components
//! - `rules`: Serializable rule tables and their invariants
//! - `catalog`: Built-in rule tables
//! - `pattern`: Normalization and compiled matchers
//! - `matcher`: Pattern Matcher (reply selection)
//! - `emotion`: Emotion Classifier (emotion + intensity)
//! - `crisis`: Crisis Detector (literal phrase search)
//! - `results`: Output data structures
//! - `responder`: Main entry point combining the three

pub mod catalog;
pub mod crisis;
pub mod emotion;
pub mod matcher;
pub mod pattern;
pub mod responder;
pub mod results;
pub mod rules;

// Re-export main types for convenience
pub use crisis::CrisisDetector;
pub use emotion::EmotionClassifier;
pub use matcher::PatternMatcher;
pub use responder::{respond_or_fallback, Responder};
pub use results::{ChatMessage, ClassificationResult, MessageAnalysis, ResponseResult};
pub use rules::{ConversationRule, EmotionRule, IntensityModifiers, RuleBook, Trigger};
