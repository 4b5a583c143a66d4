//! The seam between the engine and an OS input-injection mechanism.
//!
//! The native backend for the current platform lives in
//! [`crate::platform::NativeBackend`]; [`mock::MockBackend`] records events
//! in memory for tests.

pub mod mock;

use crate::display::DisplaySize;
use crate::error::Result;
use crate::event::{Point, RawEvent};

/// Something that can inject raw input events and report screen state.
///
/// Backends perform exactly one OS-level action per call and never retry.
pub trait Backend {
    /// Inject a single raw event.
    fn inject(&mut self, event: &RawEvent) -> Result<()>;

    /// Query the size of the primary display.
    fn primary_display_size(&mut self) -> Result<DisplaySize>;

    /// Query where the OS currently puts the cursor.
    fn cursor_position(&mut self) -> Result<Point>;
}

impl<B: Backend + ?Sized> Backend for Box<B> {
    fn inject(&mut self, event: &RawEvent) -> Result<()> {
        (**self).inject(event)
    }

    fn primary_display_size(&mut self) -> Result<DisplaySize> {
        (**self).primary_display_size()
    }

    fn cursor_position(&mut self) -> Result<Point> {
        (**self).cursor_position()
    }
}
