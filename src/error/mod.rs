//! Error module for Lau Trie.
//!
//! This module provides the error handling framework for the library and the
//! command-line tool: one error enum per layer, converted into [`LauError`]
//! at the boundary, plus a pluggable reporter for errors that are logged
//! rather than returned.

use once_cell::sync::Lazy;
use std::fmt::{Display, Formatter};
use std::sync::{Arc, RwLock};
use thiserror::Error;

use crate::data_structures::lau_trie::LauTrieError;

pub mod config;

/// Result type alias used throughout Lau Trie.
pub type LauResult<T> = Result<T, LauError>;

/// Core error enum for Lau Trie.
#[derive(Error, Debug)]
pub enum LauError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised by trie operations.
    #[error("Trie error: {0}")]
    Trie(#[from] LauTrieError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/Deserialization errors.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: LauError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: LauError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    fn report(&self, context: ErrorContext);
}

/// An error reporter that logs errors using the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

/// Global error reporter accessor.
#[derive(Debug, Default)]
pub struct ErrorReporting {
    reporter: RwLock<Option<Arc<dyn ErrorReporter>>>,
}

impl ErrorReporting {
    /// Set the error reporter.
    pub fn set_reporter(&self, reporter: Arc<dyn ErrorReporter>) {
        let mut slot = self
            .reporter
            .write()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        *slot = Some(reporter);
    }

    /// Report an error with context.
    ///
    /// Falls back to standard error when no reporter is configured.
    pub fn report(&self, context: ErrorContext) {
        let reporter = self
            .reporter
            .read()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone();

        match reporter {
            Some(reporter) => reporter.report(context),
            None => eprintln!("Error: {context}"),
        }
    }
}

static ERROR_REPORTING: Lazy<ErrorReporting> = Lazy::new(ErrorReporting::default);

/// Get the global error reporting instance.
pub fn get_error_reporting() -> &'static ErrorReporting {
    &ERROR_REPORTING
}

/// Set the global error reporter.
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) {
    ERROR_REPORTING.set_reporter(reporter);
}
