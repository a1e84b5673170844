//! Crisis phrase detection.
//!
//! Literal substring containment over the normalized message, no regex semantics,
//! so apostrophes and hyphens in phrases such as `can't go on` or `self-harm` match
//! exactly as written.

use super::pattern::{normalize, PhraseSet};
use super::rules::check_crisis_phrases;
use crate::error::AppError;

/// Flags messages that contain high-risk phrases.
#[derive(Debug, Clone)]
pub struct CrisisDetector {
    phrases: PhraseSet,
}

impl CrisisDetector {
    pub fn new(phrases: &[String]) -> Result<Self, AppError> {
        check_crisis_phrases(phrases)?;
        Ok(Self {
            phrases: PhraseSet::new(phrases)?,
        })
    }

    /// True iff at least one crisis phrase occurs in the message.
    pub fn is_crisis(&self, message: &str) -> bool {
        self.is_crisis_normalized(&normalize(message))
    }

    pub(crate) fn is_crisis_normalized(&self, normalized: &str) -> bool {
        self.phrases.contains_any(normalized)
    }

    pub fn phrase_count(&self) -> usize {
        self.phrases.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brain::catalog::default_crisis_phrases;

    fn detector() -> CrisisDetector {
        CrisisDetector::new(&default_crisis_phrases()).expect("default phrases are valid")
    }

    #[test]
    fn test_detects_phrases_case_insensitively() {
        let detector = detector();
        assert!(detector.is_crisis("I want to KILL MYSELF"));
        assert!(detector.is_crisis("Sometimes I think about Suicide"));
        assert!(detector.is_crisis("i feel worthless"));
    }

    #[test]
    fn test_punctuation_is_literal() {
        let detector = detector();
        assert!(detector.is_crisis("I just can't go on anymore"));
        assert!(detector.is_crisis("I can\u{2019}t go on"));
        assert!(detector.is_crisis("thoughts of self-harm"));
        assert!(!detector.is_crisis("thoughts of self harm"));
        assert!(!detector.is_crisis("I cant go on"));
    }

    #[test]
    fn test_substring_semantics() {
        // Phrases are not word-bounded.
        assert!(detector().is_crisis("feeling hopelessly lost"));
    }

    #[test]
    fn test_ordinary_messages() {
        let detector = detector();
        assert!(!detector.is_crisis(""));
        assert!(!detector.is_crisis("hello"));
        assert!(!detector.is_crisis("I had a great day at work"));
    }

    #[test]
    fn test_rejects_empty_list() {
        assert!(CrisisDetector::new(&[]).is_err());
        assert_eq!(detector().phrase_count(), 21);
    }
}
