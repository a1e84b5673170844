//! Responder - entry point of the core.
//!
//! Builds the Pattern Matcher, Emotion Classifier and Crisis Detector from one
//! [`RuleBook`] and runs them over a single normalization of each message.
//! Construction validates every table and is the only fallible step; all per-message
//! operations are infallible and free of shared mutable state, so one `Responder`
//! can serve any number of threads.

use chrono::Utc;
use rand::Rng;
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, error, info};

use super::crisis::CrisisDetector;
use super::emotion::EmotionClassifier;
use super::matcher::PatternMatcher;
use super::pattern::normalize;
use super::results::{ChatMessage, ClassificationResult, MessageAnalysis, ResponseResult};
use super::rules::RuleBook;
use crate::config::CoreConfig;
use crate::error::AppError;

/// The conversational core.
#[derive(Debug, Clone)]
pub struct Responder {
    matcher: PatternMatcher,
    classifier: EmotionClassifier,
    detector: Arc<CrisisDetector>,
    history_window: usize,
}

impl Responder {
    /// Builds the core from a rulebook, failing on any table invariant violation.
    pub fn new(rulebook: &RuleBook) -> Result<Self, AppError> {
        rulebook.check()?;

        let detector = Arc::new(CrisisDetector::new(&rulebook.crisis_phrases)?);
        let matcher = PatternMatcher::new(
            &rulebook.conversation,
            &rulebook.crisis_rule,
            Arc::clone(&detector),
        )?;
        let classifier = EmotionClassifier::new(&rulebook.emotions, &rulebook.modifiers)?;

        info!(
            conversation_rules = rulebook.conversation.len(),
            emotion_rules = rulebook.emotions.len(),
            crisis_phrases = rulebook.crisis_phrases.len(),
            crisis_rule = %rulebook.crisis_rule,
            "Responder ready"
        );

        Ok(Self {
            matcher,
            classifier,
            detector,
            history_window: CoreConfig::default().history_window,
        })
    }

    /// Builds the core from the built-in tables.
    pub fn with_defaults() -> Result<Self, AppError> {
        Self::new(&RuleBook::default())
    }

    /// Builds the core as configured: rulebook file if set, built-in tables otherwise.
    pub fn from_config(config: &CoreConfig) -> Result<Self, AppError> {
        let rulebook = match &config.rules_path {
            Some(path) => {
                info!("Loading rulebook from {:?}", path);
                RuleBook::from_json_file(path).inspect_err(|e| {
                    error!("Failed to load rulebook {:?}: {}", path, e);
                })?
            }
            None => RuleBook::default(),
        };
        Ok(Self::new(&rulebook)?.with_history_window(config.history_window))
    }

    pub fn with_history_window(mut self, window: usize) -> Self {
        self.history_window = window;
        self
    }

    pub fn history_window(&self) -> usize {
        self.history_window
    }

    /// Picks a reply using the thread-local random source.
    pub fn respond(&self, message: &str) -> ResponseResult {
        self.matcher.respond(message)
    }

    /// Picks a reply using `rng`.
    pub fn respond_with<R: Rng + ?Sized>(&self, message: &str, rng: &mut R) -> ResponseResult {
        self.matcher.respond_with(message, rng)
    }

    /// Like [`respond_with`](Self::respond_with). History does not influence matching;
    /// only the size of the configured window is recorded.
    pub fn respond_with_history<R: Rng + ?Sized>(
        &self,
        message: &str,
        history: &[ChatMessage],
        rng: &mut R,
    ) -> ResponseResult {
        let considered = self.recent(history).len();
        debug!(history = considered, "Responding with history");
        self.matcher.respond_with(message, rng)
    }

    pub fn classify(&self, message: &str) -> ClassificationResult {
        self.classifier.classify(message)
    }

    pub fn is_crisis(&self, message: &str) -> bool {
        self.detector.is_crisis(message)
    }

    /// Reply and classification for one message, normalized once.
    pub fn analyze<R: Rng + ?Sized>(
        &self,
        message: &str,
        history: &[ChatMessage],
        rng: &mut R,
    ) -> MessageAnalysis {
        let start = Instant::now();
        let normalized = normalize(message);

        let reply = self.matcher.respond_normalized(&normalized, rng);
        let classification = self.classifier.classify_normalized(&normalized);

        let analysis = MessageAnalysis {
            message: message.to_string(),
            reply,
            classification,
            history_considered: self.recent(history).len(),
            processing_time_us: u64::try_from(start.elapsed().as_micros()).unwrap_or(u64::MAX),
            timestamp: Utc::now(),
        };
        debug!("{}", analysis.summary());
        analysis
    }

    /// The message a new chat opens with.
    pub fn welcome(&self) -> ResponseResult {
        ResponseResult::welcome()
    }

    pub fn matcher(&self) -> &PatternMatcher {
        &self.matcher
    }

    fn recent<'h>(&self, history: &'h [ChatMessage]) -> &'h [ChatMessage] {
        let skip = history.len().saturating_sub(self.history_window);
        &history[skip..]
    }
}

/// Replies with `core` when it is available and with the fixed fallback otherwise.
pub fn respond_or_fallback<R: Rng + ?Sized>(
    core: Option<&Responder>,
    message: &str,
    rng: &mut R,
) -> ResponseResult {
    match core {
        Some(responder) => responder.respond_with(message, rng),
        None => ResponseResult::fallback(),
    }
}
