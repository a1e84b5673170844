//! Pattern Matcher.
//!
//! Ordered first-match-wins scan over the conversation rules, with crisis language
//! overriding whatever topical rule matched. The reply is drawn uniformly at random
//! from the winning rule's response set using a caller-supplied random source.

use rand::seq::SliceRandom;
use rand::Rng;
use std::sync::Arc;
use tracing::{debug, warn};

use super::crisis::CrisisDetector;
use super::pattern::{normalize, CompiledTrigger};
use super::results::{ResponseResult, UNAVAILABLE_REPLY};
use super::rules::{check_conversation, ConversationRule};
use crate::error::AppError;

/// Conversation rule with its trigger compiled.
#[derive(Debug, Clone)]
struct MatchRule {
    id: String,
    trigger: CompiledTrigger,
    responses: Vec<String>,
    mood: String,
}

/// Picks a reply for a message.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    rules: Vec<MatchRule>,
    crisis_index: usize,
    detector: Arc<CrisisDetector>,
}

impl PatternMatcher {
    /// Compiles the conversation table. `crisis_rule` names the rule used whenever
    /// `detector` flags a message.
    pub fn new(
        rules: &[ConversationRule],
        crisis_rule: &str,
        detector: Arc<CrisisDetector>,
    ) -> Result<Self, AppError> {
        check_conversation(rules, crisis_rule)?;

        let compiled = rules
            .iter()
            .map(|rule| {
                Ok(MatchRule {
                    id: rule.id.clone(),
                    trigger: CompiledTrigger::compile(&rule.trigger)?,
                    responses: rule.responses.clone(),
                    mood: rule.mood.clone(),
                })
            })
            .collect::<Result<Vec<_>, AppError>>()?;

        let crisis_index = compiled
            .iter()
            .position(|r| r.id == crisis_rule)
            .ok_or_else(|| AppError::Internal(format!("crisis rule '{}' vanished", crisis_rule)))?;

        Ok(Self {
            rules: compiled,
            crisis_index,
            detector,
        })
    }

    /// Replies using the thread-local random source.
    pub fn respond(&self, message: &str) -> ResponseResult {
        self.respond_with(message, &mut rand::thread_rng())
    }

    /// Replies using `rng` to pick among the winning rule's responses.
    pub fn respond_with<R: Rng + ?Sized>(&self, message: &str, rng: &mut R) -> ResponseResult {
        self.respond_normalized(&normalize(message), rng)
    }

    pub(crate) fn respond_normalized<R: Rng + ?Sized>(
        &self,
        normalized: &str,
        rng: &mut R,
    ) -> ResponseResult {
        let detected = self.detector.is_crisis_normalized(normalized);

        let topical = self.select(normalized);
        let rule = if detected {
            &self.rules[self.crisis_index]
        } else {
            topical
        };
        if detected {
            warn!(rule = %rule.id, topical = %topical.id, "Crisis language detected");
        } else {
            debug!(rule = %rule.id, "Conversation rule matched");
        }

        let content = rule
            .responses
            .choose(rng)
            .cloned()
            .unwrap_or_else(|| UNAVAILABLE_REPLY.to_string());

        ResponseResult {
            content,
            emotion: rule.mood.clone(),
            is_crisis: detected,
        }
    }

    /// Id of the rule whose trigger matches first, ignoring crisis detection.
    pub fn matched_rule(&self, message: &str) -> &str {
        &self.select(&normalize(message)).id
    }

    /// Candidate replies of a rule.
    pub fn responses(&self, id: &str) -> Option<&[String]> {
        self.rules
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.responses.as_slice())
    }

    pub fn crisis_rule(&self) -> &str {
        &self.rules[self.crisis_index].id
    }

    pub fn rule_count(&self) -> usize {
        self.rules.len()
    }

    fn select(&self, normalized: &str) -> &MatchRule {
        let last = self.rules.len() - 1;
        self.rules
            .iter()
            .find(|r| r.trigger.is_match(normalized))
            .unwrap_or(&self.rules[last])
    }
}
