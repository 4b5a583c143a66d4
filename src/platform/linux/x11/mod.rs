//! X11 backend using XTest.

mod display;
mod simulate;

use crate::backend::Backend;
use crate::display::DisplaySize;
use crate::error::{Error, Result};
use crate::event::{Point, RawEvent};
use crate::settings::Settings;
use std::ptr::null;
use x11::xlib;

/// Injects events into the X server named by `$DISPLAY`.
///
/// Holds one connection for the lifetime of the handle.
pub struct X11Backend {
    display: *mut xlib::Display,
}

impl X11Backend {
    /// Open a connection to the default X display.
    pub fn new(_settings: &Settings) -> Result<Self> {
        let display = unsafe { xlib::XOpenDisplay(null()) };
        if display.is_null() {
            return Err(Error::DisplayUnavailable("XOpenDisplay failed".into()));
        }
        log::debug!("connected to X display");
        Ok(Self { display })
    }
}

impl Drop for X11Backend {
    fn drop(&mut self) {
        unsafe { xlib::XCloseDisplay(self.display) };
    }
}

impl Backend for X11Backend {
    fn inject(&mut self, event: &RawEvent) -> Result<()> {
        simulate::inject(self.display, event)
    }

    fn primary_display_size(&mut self) -> Result<DisplaySize> {
        display::primary_display_size(self.display)
    }

    fn cursor_position(&mut self) -> Result<Point> {
        display::cursor_position(self.display)
    }
}
