//! Emotion Classifier.
//!
//! First matching emotion rule wins, with `neutral` as the fallback. The rule's base
//! intensity is then raised once per intensifier present and lowered once per mitigator
//! present, clamping to 1..=5 after every step. Intensifiers are applied first.

use tracing::debug;

use super::pattern::{compile_words, normalize, PhraseSet};
use super::results::ClassificationResult;
use super::rules::{
    check_emotions, check_modifiers, EmotionRule, IntensityModifiers, MAX_INTENSITY,
    MIN_INTENSITY, NEUTRAL_EMOTION,
};
use crate::error::AppError;
use regex::Regex;

#[derive(Debug, Clone)]
struct CompiledEmotion {
    pattern: Regex,
    emotion: String,
    intensity: u8,
    label: String,
    color: String,
}

/// Detects the emotion of a message and how strongly it is expressed.
#[derive(Debug, Clone)]
pub struct EmotionClassifier {
    rules: Vec<CompiledEmotion>,
    neutral_index: usize,
    intensifiers: PhraseSet,
    mitigators: PhraseSet,
}

impl EmotionClassifier {
    pub fn new(rules: &[EmotionRule], modifiers: &IntensityModifiers) -> Result<Self, AppError> {
        check_emotions(rules)?;
        check_modifiers(modifiers)?;

        let compiled = rules
            .iter()
            .map(|rule| {
                Ok(CompiledEmotion {
                    pattern: compile_words(&rule.words)?,
                    emotion: rule.emotion.clone(),
                    intensity: rule.intensity,
                    label: rule.label.clone(),
                    color: rule.color.clone(),
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        let neutral_index = compiled
            .iter()
            .position(|r| r.emotion == NEUTRAL_EMOTION)
            .ok_or_else(|| AppError::Internal("neutral emotion vanished".to_string()))?;

        Ok(Self {
            rules: compiled,
            neutral_index,
            intensifiers: PhraseSet::new(&modifiers.intensifiers)?,
            mitigators: PhraseSet::new(&modifiers.mitigators)?,
        })
    }

    /// Classifies a message. Deterministic: the same input always yields the same result.
    pub fn classify(&self, message: &str) -> ClassificationResult {
        self.classify_normalized(&normalize(message))
    }

    pub(crate) fn classify_normalized(&self, normalized: &str) -> ClassificationResult {
        let rule = self
            .rules
            .iter()
            .find(|r| r.pattern.is_match(normalized))
            .unwrap_or(&self.rules[self.neutral_index]);

        let raised = self.intensifiers.count_present(normalized);
        let lowered = self.mitigators.count_present(normalized);
        let intensity = adjust_intensity(rule.intensity, raised, lowered);

        debug!(
            emotion = %rule.emotion,
            base = rule.intensity,
            intensity,
            raised,
            lowered,
            "Emotion classified"
        );

        ClassificationResult {
            emotion: rule.emotion.clone(),
            intensity,
            label: rule.label.clone(),
            color: rule.color.clone(),
        }
    }
}

/// Applies `raised` increments then `lowered` decrements, clamping after each step.
pub fn adjust_intensity(base: u8, raised: usize, lowered: usize) -> u8 {
    let mut intensity = base.clamp(MIN_INTENSITY, MAX_INTENSITY);
    for _ in 0..raised {
        intensity = (intensity + 1).min(MAX_INTENSITY);
    }
    for _ in 0..lowered {
        intensity = intensity.saturating_sub(1).max(MIN_INTENSITY);
    }
    intensity
}
