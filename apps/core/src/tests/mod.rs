//! Test Module
//!
//! Test suite for the EmoBuddy core.
//!
//! ## Test Categories
//! - `brain_tests`: Reply selection, emotion classification and crisis detection properties
//! - `config_tests`: Environment-driven configuration
//! - `integration_tests`: Rulebook files, configured construction and concurrent use

pub mod integration_tests;
