//! Test modules for Lau Trie.
//!
//! This module contains crate-level testing infrastructure:
//! - Tests for configuration loading and validation
//! - Tests for error types and the error reporter
//! - Scenario, table-driven and property-based tests for the trie
//! - Test fixtures and utilities

pub mod error_tests;
pub mod lau_trie_tests;

// Re-export commonly used testing tools to simplify imports in test modules
pub use test_utils::{word_strategy, word_set_strategy, TestFixture};
