//! Rule tables.
//!
//! A [`RuleBook`] is the complete, serializable configuration the core is built from:
//! the ordered conversation rules, the ordered emotion rules, the intensity modifier
//! word lists and the crisis phrases. It is loaded once at startup and never mutated.
//! The `check_*` functions enforce the table invariants; every component constructor
//! runs the checks for the tables it owns, so a bad table fails at startup rather than
//! per message.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::Path;
use validator::Validate;

use crate::error::{AppError, RuleError};

/// Emotion tag of the mandatory fallback emotion rule.
pub const NEUTRAL_EMOTION: &str = "neutral";

/// Inclusive bounds for emotion intensity.
pub const MIN_INTENSITY: u8 = 1;
pub const MAX_INTENSITY: u8 = 5;

/// What makes a conversation rule match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Trigger {
    /// Any of these words or phrases, found case-insensitively anywhere in the message.
    Words(Vec<String>),
    /// Matches every message, including the empty one.
    Always,
}

impl Trigger {
    pub fn words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Trigger::Words(words.into_iter().map(Into::into).collect())
    }

    pub fn is_catch_all(&self) -> bool {
        matches!(self, Trigger::Always)
    }
}

/// A topical conversation rule: trigger, candidate replies and the tone to reply in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct ConversationRule {
    /// Unique identifier, used to designate the crisis rule.
    #[validate(length(min = 1))]
    pub id: String,
    pub trigger: Trigger,
    pub responses: Vec<String>,
    /// Mood tag reported with the reply.
    #[validate(length(min = 1))]
    pub mood: String,
    #[serde(default)]
    pub is_crisis: bool,
}

/// An emotion rule: trigger words plus the display attributes of the emotion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct EmotionRule {
    #[validate(length(min = 1))]
    pub emotion: String,
    pub words: Vec<String>,
    /// Base intensity before modifiers, 1..=5.
    pub intensity: u8,
    #[validate(length(min = 1))]
    pub label: String,
    /// Hex display color, `#RRGGBB`.
    pub color: String,
}

/// Words that raise or lower the intensity of a detected emotion.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntensityModifiers {
    pub intensifiers: Vec<String>,
    pub mitigators: Vec<String>,
}

/// The complete rule configuration of the core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleBook {
    /// Id of the conversation rule that replaces any match when crisis language is found.
    pub crisis_rule: String,
    pub conversation: Vec<ConversationRule>,
    pub emotions: Vec<EmotionRule>,
    #[serde(default)]
    pub modifiers: IntensityModifiers,
    pub crisis_phrases: Vec<String>,
}

impl Default for RuleBook {
    fn default() -> Self {
        super::catalog::default_rulebook()
    }
}

impl RuleBook {
    /// Reads a rulebook from a JSON file and checks it.
    pub fn from_json_file(path: &Path) -> Result<Self, AppError> {
        let raw = fs::read_to_string(path)?;
        let book: RuleBook = serde_json::from_str(&raw)?;
        book.check()?;
        Ok(book)
    }

    pub fn to_json_pretty(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks every table invariant.
    pub fn check(&self) -> Result<(), AppError> {
        check_conversation(&self.conversation, &self.crisis_rule)?;
        check_emotions(&self.emotions)?;
        check_modifiers(&self.modifiers)?;
        check_crisis_phrases(&self.crisis_phrases)?;
        Ok(())
    }

    /// Looks up a conversation rule by id.
    pub fn rule(&self, id: &str) -> Option<&ConversationRule> {
        self.conversation.iter().find(|r| r.id == id)
    }
}

fn is_blank_list(words: &[String]) -> bool {
    words.iter().all(|w| w.trim().is_empty())
}

/// Conversation table: unique ids, non-blank triggers and replies, exactly one catch-all
/// in last position, and a flagged crisis rule under `crisis_rule`.
pub fn check_conversation(rules: &[ConversationRule], crisis_rule: &str) -> Result<(), AppError> {
    let last = rules.len().checked_sub(1).ok_or(RuleError::MissingCatchAll)?;
    let mut seen = HashSet::new();

    for (index, rule) in rules.iter().enumerate() {
        rule.validate()?;
        if !seen.insert(rule.id.as_str()) {
            return Err(RuleError::DuplicateRuleId(rule.id.clone()).into());
        }
        if rule.responses.is_empty() || rule.responses.iter().any(|r| r.trim().is_empty()) {
            return Err(RuleError::EmptyResponses(rule.id.clone()).into());
        }
        match &rule.trigger {
            Trigger::Words(words) if is_blank_list(words) => {
                return Err(RuleError::EmptyTrigger(rule.id.clone()).into());
            }
            Trigger::Always if index != last => {
                return Err(RuleError::UnreachableRule(rule.id.clone()).into());
            }
            _ => {}
        }
    }

    if !rules[last].trigger.is_catch_all() {
        return Err(RuleError::MissingCatchAll.into());
    }

    let crisis = rules
        .iter()
        .find(|r| r.id == crisis_rule)
        .ok_or_else(|| RuleError::MissingCrisisRule(crisis_rule.to_string()))?;
    if !crisis.is_crisis {
        return Err(RuleError::CrisisRuleNotFlagged(crisis.id.clone()).into());
    }

    Ok(())
}

/// Emotion table: intensities in range, `#RRGGBB` colors, non-blank triggers and a
/// neutral rule.
pub fn check_emotions(rules: &[EmotionRule]) -> Result<(), AppError> {
    for rule in rules {
        rule.validate()?;
        if !(MIN_INTENSITY..=MAX_INTENSITY).contains(&rule.intensity) {
            return Err(RuleError::IntensityOutOfRange {
                emotion: rule.emotion.clone(),
                intensity: rule.intensity,
            }
            .into());
        }
        if !is_hex_color(&rule.color) {
            return Err(RuleError::InvalidColor {
                emotion: rule.emotion.clone(),
                color: rule.color.clone(),
            }
            .into());
        }
        if is_blank_list(&rule.words) {
            return Err(RuleError::EmptyTrigger(rule.emotion.clone()).into());
        }
    }

    if !rules.iter().any(|r| r.emotion == NEUTRAL_EMOTION) {
        return Err(RuleError::MissingNeutral(NEUTRAL_EMOTION.to_string()).into());
    }

    Ok(())
}

/// Modifier lists: no blank entries (they would match every message) and no word in both.
pub fn check_modifiers(modifiers: &IntensityModifiers) -> Result<(), AppError> {
    if modifiers.intensifiers.iter().any(|w| w.trim().is_empty()) {
        return Err(RuleError::EmptyTrigger("intensifiers".to_string()).into());
    }
    if modifiers.mitigators.iter().any(|w| w.trim().is_empty()) {
        return Err(RuleError::EmptyTrigger("mitigators".to_string()).into());
    }

    let intensifiers: HashSet<String> = modifiers
        .intensifiers
        .iter()
        .map(|w| w.to_lowercase())
        .collect();
    if let Some(both) = modifiers
        .mitigators
        .iter()
        .find(|w| intensifiers.contains(&w.to_lowercase()))
    {
        return Err(RuleError::OverlappingModifier(both.clone()).into());
    }

    Ok(())
}

pub fn check_crisis_phrases(phrases: &[String]) -> Result<(), AppError> {
    if phrases.is_empty() {
        return Err(RuleError::NoCrisisPhrases.into());
    }
    if phrases.iter().any(|p| p.trim().is_empty()) {
        return Err(RuleError::EmptyTrigger("crisis_phrases".to_string()).into());
    }
    Ok(())
}

fn is_hex_color(color: &str) -> bool {
    color.len() == 7
        && color.starts_with('#')
        && color[1..].chars().all(|c| c.is_ascii_hexdigit())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn book() -> RuleBook {
        RuleBook::default()
    }

    fn assert_rule_error(result: Result<(), AppError>, expected: RuleError) {
        match result {
            Err(AppError::Rules(actual)) => assert_eq!(actual, expected),
            other => panic!("Expected {:?}, got {:?}", expected, other),
        }
    }

    #[test]
    fn test_default_rulebook_is_valid() {
        assert!(book().check().is_ok());
    }

    #[test]
    fn test_missing_catch_all() {
        let mut book = book();
        book.conversation.pop();
        assert_rule_error(book.check(), RuleError::MissingCatchAll);

        book.conversation.clear();
        assert_rule_error(book.check(), RuleError::MissingCatchAll);
    }

    #[test]
    fn test_catch_all_not_last() {
        let mut book = book();
        let fallback = book.conversation.pop().expect("default table has a catch-all");
        book.conversation.insert(0, fallback.clone());
        book.conversation.push(ConversationRule {
            id: "tail".to_string(),
            ..fallback
        });
        assert_rule_error(book.check(), RuleError::UnreachableRule("fallback".to_string()));
    }

    #[test]
    fn test_empty_and_blank_responses() {
        let mut book = book();
        book.conversation[0].responses.clear();
        assert_rule_error(book.check(), RuleError::EmptyResponses("greeting".to_string()));

        let mut book = self::book();
        book.conversation[0].responses.push("   ".to_string());
        assert_rule_error(book.check(), RuleError::EmptyResponses("greeting".to_string()));
    }

    #[test]
    fn test_crisis_rule_must_exist_and_be_flagged() {
        let mut book = book();
        book.crisis_rule = "nope".to_string();
        assert_rule_error(book.check(), RuleError::MissingCrisisRule("nope".to_string()));

        let mut book = self::book();
        book.crisis_rule = "greeting".to_string();
        assert_rule_error(book.check(), RuleError::CrisisRuleNotFlagged("greeting".to_string()));
    }

    #[test]
    fn test_duplicate_ids() {
        let mut book = book();
        book.conversation[1].id = "greeting".to_string();
        assert_rule_error(book.check(), RuleError::DuplicateRuleId("greeting".to_string()));
    }

    #[test]
    fn test_emotion_invariants() {
        let mut book = book();
        book.emotions.retain(|e| e.emotion != NEUTRAL_EMOTION);
        assert_rule_error(book.check(), RuleError::MissingNeutral("neutral".to_string()));

        let mut book = self::book();
        book.emotions[0].intensity = 6;
        assert_rule_error(
            book.check(),
            RuleError::IntensityOutOfRange {
                emotion: "happy".to_string(),
                intensity: 6,
            },
        );

        let mut book = self::book();
        book.emotions[0].color = "yellow".to_string();
        assert_rule_error(
            book.check(),
            RuleError::InvalidColor {
                emotion: "happy".to_string(),
                color: "yellow".to_string(),
            },
        );
    }

    #[test]
    fn test_modifier_lists() {
        let mut book = book();
        book.modifiers.mitigators.push("Very".to_string());
        assert_rule_error(book.check(), RuleError::OverlappingModifier("Very".to_string()));

        let mut book = self::book();
        book.modifiers.intensifiers.push(String::new());
        assert_rule_error(book.check(), RuleError::EmptyTrigger("intensifiers".to_string()));
    }

    #[test]
    fn test_crisis_phrases() {
        let mut book = book();
        book.crisis_phrases.clear();
        assert_rule_error(book.check(), RuleError::NoCrisisPhrases);
    }

    #[test]
    fn test_blank_id_rejected_by_validator() {
        let mut book = book();
        book.conversation[0].id = String::new();
        assert!(matches!(book.check(), Err(AppError::Validation(_))));
    }

    #[test]
    fn test_hex_color() {
        assert!(is_hex_color("#9CA3AF"));
        assert!(is_hex_color("#fcd34d"));
        assert!(!is_hex_color("9CA3AF"));
        assert!(!is_hex_color("#9CA3A"));
        assert!(!is_hex_color("#GGGGGG"));
    }
}
