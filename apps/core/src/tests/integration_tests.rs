//! Integration Tests
//!
//! End-to-end tests that build the responder the way the binary does: from
//! configuration, optionally from a rulebook file, and share it across tasks.

use crate::brain::rules::{ConversationRule, EmotionRule, IntensityModifiers, RuleBook, Trigger};
use crate::brain::{respond_or_fallback, Responder, ResponseResult};
use crate::config::CoreConfig;
use crate::error::{AppError, RuleError};
use rand::rngs::mock::StepRng;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fs;
use std::sync::Arc;
use tempfile::tempdir;

// ============================================================================
// Test Fixtures
// ============================================================================

/// A small rulebook whose crisis rule is not called "crisis".
fn custom_rulebook() -> RuleBook {
    RuleBook {
        crisis_rule: "urgent".to_string(),
        conversation: vec![
            ConversationRule {
                id: "coffee".to_string(),
                trigger: Trigger::words(["coffee", "espresso"]),
                responses: vec!["Coffee sounds nice.".to_string()],
                mood: "cozy".to_string(),
                is_crisis: false,
            },
            ConversationRule {
                id: "urgent".to_string(),
                trigger: Trigger::words(["emergency"]),
                responses: vec!["Please call your local emergency number.".to_string()],
                mood: "urgent".to_string(),
                is_crisis: true,
            },
            ConversationRule {
                id: "default".to_string(),
                trigger: Trigger::Always,
                responses: vec!["Tell me more.".to_string()],
                mood: "curious".to_string(),
                is_crisis: false,
            },
        ],
        emotions: vec![
            EmotionRule {
                emotion: "sleepy".to_string(),
                words: vec!["tired".to_string(), "sleepy".to_string()],
                intensity: 2,
                label: "Sleepy".to_string(),
                color: "#123456".to_string(),
            },
            EmotionRule {
                emotion: "neutral".to_string(),
                words: vec!["ok".to_string()],
                intensity: 3,
                label: "Neutral".to_string(),
                color: "#9CA3AF".to_string(),
            },
        ],
        modifiers: IntensityModifiers {
            intensifiers: vec!["super".to_string()],
            mitigators: vec!["barely".to_string()],
        },
        crisis_phrases: vec!["help me now".to_string()],
    }
}

fn write_rulebook(dir: &std::path::Path, book: &RuleBook) -> std::path::PathBuf {
    let path = dir.join("rules.json");
    fs::write(&path, book.to_json_pretty().expect("serializable")).expect("Failed to write rulebook");
    path
}

// ============================================================================
// Rulebook Files
// ============================================================================

#[test]
fn test_default_rulebook_survives_json_file() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_rulebook(dir.path(), &RuleBook::default());

    let loaded = RuleBook::from_json_file(&path).expect("valid file");
    assert_eq!(loaded, RuleBook::default());
}

#[test]
fn test_custom_rulebook_from_config() {
    let dir = tempdir().expect("Failed to create temp dir");
    let path = write_rulebook(dir.path(), &custom_rulebook());

    let config = CoreConfig {
        rules_path: Some(path),
        history_window: 3,
        ..CoreConfig::default()
    };
    let responder = Responder::from_config(&config).expect("custom rulebook builds");
    assert_eq!(responder.history_window(), 3);

    let reply = responder.respond("An ESPRESSO please");
    assert_eq!(reply.content, "Coffee sounds nice.");
    assert_eq!(reply.emotion, "cozy");

    // Crisis override refers to the rule by id.
    let reply = responder.respond("coffee, and help me now");
    assert!(reply.is_crisis);
    assert_eq!(reply.emotion, "urgent");

    let reply = responder.respond("");
    assert_eq!(reply.emotion, "curious");

    let result = responder.classify("super tired");
    assert_eq!(result.emotion, "sleepy");
    assert_eq!(result.intensity, 3);

    let result = responder.classify("barely awake");
    assert_eq!(result.emotion, "neutral");
    assert_eq!(result.intensity, 2);
}

#[test]
fn test_rulebook_file_errors() {
    let dir = tempdir().expect("Failed to create temp dir");

    let missing = dir.path().join("missing.json");
    assert!(matches!(RuleBook::from_json_file(&missing), Err(AppError::Io(_))));

    let garbage = dir.path().join("garbage.json");
    fs::write(&garbage, "{ not json").expect("Failed to write file");
    assert!(matches!(RuleBook::from_json_file(&garbage), Err(AppError::Validation(_))));

    let mut book = custom_rulebook();
    book.conversation.retain(|r| r.id != "urgent");
    let path = write_rulebook(dir.path(), &book);
    assert!(matches!(
        RuleBook::from_json_file(&path),
        Err(AppError::Rules(RuleError::MissingCrisisRule(_)))
    ));
}

#[test]
fn test_rulebook_json_shape() {
    let json = serde_json::to_value(custom_rulebook()).expect("serializable");

    assert_eq!(json["crisis_rule"], "urgent");
    assert_eq!(json["conversation"][0]["trigger"]["words"][0], "coffee");
    assert_eq!(json["conversation"][2]["trigger"], "always");
}

#[test]
fn test_is_crisis_defaults_to_false_in_json() {
    let raw = r#"{
        "id": "x",
        "trigger": "always",
        "responses": ["ok"],
        "mood": "calm"
    }"#;
    let rule: ConversationRule = serde_json::from_str(raw).expect("valid rule");
    assert!(!rule.is_crisis);
}

// ============================================================================
// Degraded Operation
// ============================================================================

#[test]
fn test_unbuildable_core_degrades_to_fallback() {
    let mut book = RuleBook::default();
    book.emotions.clear();

    let core = Responder::new(&book).ok();
    assert!(core.is_none());

    let reply = respond_or_fallback(core.as_ref(), "I want to kill myself", &mut StepRng::new(0, 0));
    assert_eq!(reply, ResponseResult::fallback());
}

// ============================================================================
// Concurrent Use
// ============================================================================

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_shared_responder_across_tasks() {
    let responder = Arc::new(Responder::with_defaults().expect("default rules"));
    let expected = responder.respond_with("I feel very anxious", &mut StepRng::new(0, 0));

    let mut handles = Vec::new();
    for i in 0..32u64 {
        let responder = Arc::clone(&responder);
        handles.push(tokio::spawn(async move {
            let mut rng = StdRng::seed_from_u64(i);
            let crisis = responder.respond_with("I can't go on", &mut rng);
            let reply = responder.respond_with("I feel very anxious", &mut StepRng::new(0, 0));
            let emotion = responder.classify("I feel very anxious");
            (crisis, reply, emotion)
        }));
    }

    for handle in handles {
        let (crisis, reply, emotion) = handle.await.expect("task panicked");
        assert!(crisis.is_crisis);
        assert_eq!(reply, expected);
        assert_eq!(emotion.emotion, "anxious");
        assert_eq!(emotion.intensity, 5);
    }
}
