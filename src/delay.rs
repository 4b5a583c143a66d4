//! Inter-event delay configuration.

use crate::error::{Error, Result};
use std::time::Duration;

/// Spacing the synthesizer inserts between consecutive raw events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DelayController {
    delay: Duration,
}

impl DelayController {
    /// Create a controller with the given delay in milliseconds.
    pub fn new(ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(ms),
        }
    }

    /// Current delay in milliseconds.
    pub fn get(&self) -> u64 {
        self.delay.as_millis() as u64
    }

    /// Set the delay in milliseconds. Negative values are rejected.
    pub fn set(&mut self, ms: i64) -> Result<()> {
        let ms = u64::try_from(ms)
            .map_err(|_| Error::InvalidArgument(format!("delay must be non-negative, got {ms}")))?;
        self.delay = Duration::from_millis(ms);
        Ok(())
    }

    /// Current delay as a duration.
    pub fn duration(&self) -> Duration {
        self.delay
    }
}
