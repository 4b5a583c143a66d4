//! Error types for the input synthesis engine.

use crate::display::DisplaySize;
use thiserror::Error;

/// Result type alias for puppetry operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while synthesizing input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// An argument was out of range or names something this platform lacks.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// No display could be enumerated (headless session, missing server).
    #[error("display unavailable: {0}")]
    DisplayUnavailable(String),

    /// The OS refused or failed to inject an event.
    #[error("failed to synthesize event: {0}")]
    Synthesis(String),

    /// A refresh returned geometry that differs from the cached value.
    ///
    /// Diagnostic only; the engine logs it and carries on with the fresh value.
    #[error("stale display geometry: cached {cached}, fresh {fresh}")]
    StaleState {
        /// The value that was cached before the refresh.
        cached: DisplaySize,
        /// The value the platform reported.
        fresh: DisplaySize,
    },
}
