//! macOS backend using CGEvent.
//!
//! Requires the Accessibility permission for the host process; without it
//! posted events are silently dropped by the window server.

mod display;
mod keycodes;
mod simulate;

use crate::backend::Backend;
use crate::display::DisplaySize;
use crate::error::Result;
use crate::event::{Point, RawEvent};
use crate::settings::Settings;

/// Posts events at the HID event tap.
pub struct NativeBackend {
    sim: simulate::Simulator,
}

impl NativeBackend {
    pub fn new(_settings: &Settings) -> Result<Self> {
        Ok(Self {
            sim: simulate::Simulator::default(),
        })
    }
}

impl Backend for NativeBackend {
    fn inject(&mut self, event: &RawEvent) -> Result<()> {
        self.sim.inject(event)
    }

    fn primary_display_size(&mut self) -> Result<DisplaySize> {
        display::primary_display_size()
    }

    fn cursor_position(&mut self) -> Result<Point> {
        simulate::mouse_location()
    }
}
