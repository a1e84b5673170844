//! Output structures of the core.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Reply the caller shows when the core could not be built.
pub const UNAVAILABLE_REPLY: &str =
    "I'm sorry, I'm having trouble responding right now. Please try again in a moment.";

/// Opening message of a new chat.
pub const WELCOME_REPLY: &str =
    "Hi there! I'm EmoBuddy, your AI emotional support companion. How are you feeling today?";

/// Reply chosen by the pattern matcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseResult {
    /// Reply text, never empty.
    pub content: String,
    /// Mood tag of the winning rule.
    pub emotion: String,
    /// Whether the message contained crisis language.
    pub is_crisis: bool,
}

impl ResponseResult {
    /// Neutral stand-in for when no responder is available.
    pub fn fallback() -> Self {
        Self {
            content: UNAVAILABLE_REPLY.to_string(),
            emotion: "neutral".to_string(),
            is_crisis: false,
        }
    }

    pub fn welcome() -> Self {
        Self {
            content: WELCOME_REPLY.to_string(),
            emotion: "calm".to_string(),
            is_crisis: false,
        }
    }
}

/// Emotion detected in a message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub emotion: String,
    /// 1..=5
    pub intensity: u8,
    pub label: String,
    pub color: String,
}

impl ClassificationResult {
    /// The neutral classification, also used when no classifier is available.
    pub fn neutral() -> Self {
        Self {
            emotion: "neutral".to_string(),
            intensity: 3,
            label: "Neutral".to_string(),
            color: "#9CA3AF".to_string(),
        }
    }
}

/// A chat history entry as the request layer stores it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub content: String,
    pub is_user: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub emotion: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            is_user: true,
            emotion: None,
            created_at: Utc::now(),
        }
    }

    pub fn assistant(reply: &ResponseResult) -> Self {
        Self {
            content: reply.content.clone(),
            is_user: false,
            emotion: Some(reply.emotion.clone()),
            created_at: Utc::now(),
        }
    }
}

/// Everything the core says about one message.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageAnalysis {
    /// Original user message
    pub message: String,
    pub reply: ResponseResult,
    pub classification: ClassificationResult,
    /// History entries inside the configured window
    pub history_considered: usize,
    pub processing_time_us: u64,
    pub timestamp: DateTime<Utc>,
}

impl MessageAnalysis {
    pub fn is_crisis(&self) -> bool {
        self.reply.is_crisis
    }

    /// One-line description for logging. Does not include the message text.
    pub fn summary(&self) -> String {
        format!(
            "Reply mood: {}, Emotion: {} ({}/5), Crisis: {}, History: {}, Took: {}us",
            self.reply.emotion,
            self.classification.emotion,
            self.classification.intensity,
            if self.reply.is_crisis { "yes" } else { "no" },
            self.history_considered,
            self.processing_time_us
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_response_serializes_camel_case() {
        let json = serde_json::to_value(ResponseResult::fallback()).expect("serializable");
        assert_eq!(json["isCrisis"], false);
        assert_eq!(json["emotion"], "neutral");
        assert_eq!(json["content"], UNAVAILABLE_REPLY);
    }

    #[test]
    fn test_neutral_classification() {
        let neutral = ClassificationResult::neutral();
        assert_eq!(neutral.emotion, "neutral");
        assert_eq!(neutral.intensity, 3);
        assert_eq!(neutral.label, "Neutral");
        assert_eq!(neutral.color, "#9CA3AF");
    }

    #[test]
    fn test_chat_message_roundtrip() {
        let raw = r#"{"content":"hi","isUser":true,"createdAt":"2024-05-01T10:00:00Z"}"#;
        let message: ChatMessage = serde_json::from_str(raw).expect("valid history entry");
        assert!(message.is_user);
        assert_eq!(message.emotion, None);
    }

    #[test]
    fn test_summary() {
        let analysis = MessageAnalysis {
            message: "secret".to_string(),
            reply: ResponseResult::welcome(),
            classification: ClassificationResult::neutral(),
            history_considered: 2,
            processing_time_us: 10,
            timestamp: Utc::now(),
        };
        let summary = analysis.summary();

        assert!(summary.contains("Reply mood: calm"));
        assert!(summary.contains("Crisis: no"));
        assert!(!summary.contains("secret"));
    }
}
