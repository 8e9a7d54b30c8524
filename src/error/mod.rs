//! Error module for the Lanai server.
//!
//! This module provides the crate-level error enum, the error context carried
//! to reporters, and the process-wide reporter slot used by the transport to
//! surface failed requests.

use std::fmt::{Display, Formatter};
use std::sync::Arc;

use once_cell::sync::Lazy;
use parking_lot::RwLock;
use thiserror::Error;

use crate::data_structures::trie::TrieError;
use crate::dispatcher::DispatchError;

pub mod config;
pub mod protocol;
pub mod transport;

/// Result type alias used throughout the Lanai server.
pub type LanaiResult<T> = Result<T, LanaiError>;

/// Core error enum for the Lanai server.
#[derive(Error, Debug)]
pub enum LanaiError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Malformed wire messages.
    #[error("Protocol error: {0}")]
    Protocol(#[from] protocol::ProtocolError),

    /// Errors raised by the trie itself.
    #[error("Trie error: {0}")]
    Trie(#[from] TrieError),

    /// Errors surfaced by the dispatcher.
    #[error("Dispatch error: {0}")]
    Dispatch(#[from] DispatchError),

    /// Errors related to the HTTP and WebSocket transport.
    #[error("Transport error: {0}")]
    Transport(#[from] transport::TransportError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: LanaiError,

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
    pub fn new<E, S>(error: E, component: S) -> Self
    where
        E: Into<LanaiError>,
        S: Into<String>,
    {
        Self {
            error: error.into(),
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

/// Error reporter that logs through the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::warn!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}

/// Process-wide reporter slot. Falls back to the tracing reporter until one
/// is installed.
static ERROR_REPORTER: Lazy<RwLock<Arc<dyn ErrorReporter>>> =
    Lazy::new(|| RwLock::new(Arc::new(TracingErrorReporter)));

/// Set the global error reporter.
///
/// # Arguments
///
/// * `reporter` - The error reporter to use
pub fn set_error_reporter(reporter: Arc<dyn ErrorReporter>) {
    *ERROR_REPORTER.write() = reporter;
}

/// Report an error with context through the global reporter.
pub fn report_error(context: ErrorContext) {
    let reporter = Arc::clone(&ERROR_REPORTER.read());
    reporter.report(context);
}
