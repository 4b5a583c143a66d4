//! In-memory backend for tests.
//!
//! Nothing reaches the OS. Every injected event is recorded together with
//! the instant it arrived, so tests can assert on order and spacing.

use super::Backend;
use crate::display::DisplaySize;
use crate::error::{Error, Result};
use crate::event::{Point, RawEvent};
use std::time::{Duration, Instant};

/// A backend that records events instead of injecting them.
#[derive(Debug)]
pub struct MockBackend {
    recorded: Vec<(RawEvent, Instant)>,
    display: Option<DisplaySize>,
    cursor: Point,
    display_queries: usize,
    attempts: usize,
    fail_on: Option<usize>,
}

impl Default for MockBackend {
    fn default() -> Self {
        Self::new()
    }
}

impl MockBackend {
    /// A 1920x1080 display with the cursor at the origin.
    pub fn new() -> Self {
        Self {
            recorded: Vec::new(),
            display: Some(DisplaySize::new(1920, 1080)),
            cursor: Point::default(),
            display_queries: 0,
            attempts: 0,
            fail_on: None,
        }
    }

    /// Report this display size from now on.
    pub fn with_display(mut self, size: DisplaySize) -> Self {
        self.display = Some(size);
        self
    }

    /// Behave like a headless session.
    pub fn headless(mut self) -> Self {
        self.display = None;
        self
    }

    /// Start the OS cursor somewhere other than the origin.
    pub fn with_cursor(mut self, cursor: Point) -> Self {
        self.cursor = cursor;
        self
    }

    /// Change the reported display size, as if the user changed resolution.
    pub fn set_display(&mut self, size: DisplaySize) {
        self.display = Some(size);
    }

    /// Reject the injection attempt with this zero-based index.
    pub fn fail_on(&mut self, attempt: usize) {
        self.fail_on = Some(attempt);
    }

    /// Accepted events in arrival order.
    pub fn events(&self) -> Vec<RawEvent> {
        self.recorded.iter().map(|(e, _)| *e).collect()
    }

    /// Time between each pair of consecutive accepted events.
    pub fn gaps(&self) -> Vec<Duration> {
        self.recorded
            .windows(2)
            .map(|pair| pair[1].1.duration_since(pair[0].1))
            .collect()
    }

    /// How many times the display size was queried.
    pub fn display_queries(&self) -> usize {
        self.display_queries
    }

    /// Forget recorded events.
    pub fn clear(&mut self) {
        self.recorded.clear();
    }
}

impl Backend for MockBackend {
    fn inject(&mut self, event: &RawEvent) -> Result<()> {
        let attempt = self.attempts;
        self.attempts += 1;
        if self.fail_on == Some(attempt) {
            return Err(Error::Synthesis(format!("mock failure on {event:?}")));
        }

        if let RawEvent::MoveTo(point) = event {
            self.cursor = *point;
        }
        self.recorded.push((*event, Instant::now()));
        Ok(())
    }

    fn primary_display_size(&mut self) -> Result<DisplaySize> {
        self.display_queries += 1;
        self.display
            .ok_or_else(|| Error::DisplayUnavailable("mock backend is headless".into()))
    }

    fn cursor_position(&mut self) -> Result<Point> {
        Ok(self.cursor)
    }
}
