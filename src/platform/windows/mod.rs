//! Windows backend using SendInput.

mod display;
mod keycodes;
mod simulate;

use crate::backend::Backend;
use crate::display::DisplaySize;
use crate::error::Result;
use crate::event::{Point, RawEvent};
use crate::settings::Settings;

/// Injects events into the current desktop with `SendInput`.
pub struct NativeBackend;

impl NativeBackend {
    pub fn new(_settings: &Settings) -> Result<Self> {
        Ok(Self)
    }
}

impl Backend for NativeBackend {
    fn inject(&mut self, event: &RawEvent) -> Result<()> {
        simulate::inject(event)
    }

    fn primary_display_size(&mut self) -> Result<DisplaySize> {
        display::primary_display_size()
    }

    fn cursor_position(&mut self) -> Result<Point> {
        display::cursor_position()
    }
}
