//! Text normalization and compiled matchers shared by the three classifiers.
//!
//! Trigger words compile to one case-insensitive regex alternation matched anywhere in
//! the text, so stems such as `stress` also fire on "stressful".
//! Literal phrase lists (crisis phrases, intensity modifiers) compile to an
//! Aho-Corasick automaton and are matched as plain substrings.

use aho_corasick::AhoCorasick;
use regex::{Regex, RegexBuilder};

use super::rules::Trigger;
use crate::error::AppError;

/// Lower-cases a message and folds typographic apostrophes to `'`.
pub fn normalize(message: &str) -> String {
    message
        .to_lowercase()
        .chars()
        .map(|c| match c {
            '\u{2019}' | '\u{2018}' => '\'',
            other => other,
        })
        .collect()
}

/// Builds `(?:w1|w2|...)` from literal words; blank entries are skipped.
pub fn compile_words(words: &[String]) -> Result<Regex, AppError> {
    let alternatives: Vec<String> = words
        .iter()
        .map(|w| w.trim())
        .filter(|w| !w.is_empty())
        .map(|w| regex::escape(&normalize(w)))
        .collect();

    let regex = RegexBuilder::new(&format!("(?:{})", alternatives.join("|")))
        .case_insensitive(true)
        .build()?;
    Ok(regex)
}

/// A trigger ready to be evaluated against normalized text.
#[derive(Debug, Clone)]
pub enum CompiledTrigger {
    Words(Regex),
    Always,
}

impl CompiledTrigger {
    pub fn compile(trigger: &Trigger) -> Result<Self, AppError> {
        match trigger {
            Trigger::Words(words) => Ok(CompiledTrigger::Words(compile_words(words)?)),
            Trigger::Always => Ok(CompiledTrigger::Always),
        }
    }

    pub fn is_match(&self, normalized: &str) -> bool {
        match self {
            CompiledTrigger::Words(regex) => regex.is_match(normalized),
            CompiledTrigger::Always => true,
        }
    }
}

/// A list of literal phrases matched as substrings of normalized text.
#[derive(Debug, Clone)]
pub struct PhraseSet {
    automaton: AhoCorasick,
    phrases: Vec<String>,
}

impl PhraseSet {
    pub fn new(phrases: &[String]) -> Result<Self, AppError> {
        let phrases: Vec<String> = phrases.iter().map(|p| normalize(p)).collect();
        let automaton = AhoCorasick::new(&phrases)?;
        Ok(Self { automaton, phrases })
    }

    /// True if any phrase occurs in `normalized`.
    pub fn contains_any(&self, normalized: &str) -> bool {
        !self.phrases.is_empty() && self.automaton.is_match(normalized)
    }

    /// Number of list entries that occur at least once in `normalized`.
    ///
    /// Overlapping occurrences count, so `not very` and `very` are both found in
    /// "not very sad".
    pub fn count_present(&self, normalized: &str) -> usize {
        let mut present = vec![false; self.phrases.len()];
        for m in self.automaton.find_overlapping_iter(normalized) {
            present[m.pattern().as_usize()] = true;
        }
        present.into_iter().filter(|&p| p).count()
    }

    pub fn phrases(&self) -> &[String] {
        &self.phrases
    }

    pub fn len(&self) -> usize {
        self.phrases.len()
    }

    pub fn is_empty(&self) -> bool {
        self.phrases.is_empty()
    }
}
