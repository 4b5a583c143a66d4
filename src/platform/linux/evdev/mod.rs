//! Linux evdev backend.
//!
//! Events are written to a uinput virtual device, so they reach both X11
//! and Wayland sessions. A uinput mouse only reports relative motion and
//! has no notion of screen geometry:
//!
//! - absolute moves are turned into deltas from the last injected point,
//!   after homing the cursor into the top-left corner on first use;
//! - the display size must come from `Settings::display_override`;
//! - pointer acceleration in the compositor can make landed positions
//!   differ from the requested ones.
//!
//! ## Permissions
//!
//! To create the device, the process must either:
//! - Run as root (not recommended)
//! - Have write access to `/dev/uinput` (e.g. through the `input` group)

mod simulate;

use crate::backend::Backend;
use crate::display::DisplaySize;
use crate::error::{Error, Result};
use crate::event::{Point, RawEvent};
use crate::settings::Settings;
use evdev::uinput::VirtualDevice;

/// Injects events through a uinput virtual device.
pub struct EvdevBackend {
    device: VirtualDevice,
    position: Option<Point>,
}

impl EvdevBackend {
    /// Create the virtual device.
    pub fn new(settings: &Settings) -> Result<Self> {
        let device = simulate::create_device(&settings.device_name)?;
        log::debug!("created uinput device {:?}", settings.device_name);
        Ok(Self {
            device,
            position: None,
        })
    }
}

impl Backend for EvdevBackend {
    fn inject(&mut self, event: &RawEvent) -> Result<()> {
        match *event {
            RawEvent::MoveTo(target) => {
                let from = match self.position {
                    Some(point) => point,
                    None => {
                        log::warn!("cursor position unknown, homing to (0, 0)");
                        simulate::home(&mut self.device)?;
                        Point::default()
                    }
                };
                simulate::move_by(&mut self.device, target.x - from.x, target.y - from.y)?;
                self.position = Some(target);
                Ok(())
            }
            RawEvent::Press(input) => simulate::emit_input(&mut self.device, input, true),
            RawEvent::Release(input) => simulate::emit_input(&mut self.device, input, false),
            RawEvent::Scroll { amount, axis } => simulate::scroll(&mut self.device, amount, axis),
        }
    }

    fn primary_display_size(&mut self) -> Result<DisplaySize> {
        Err(Error::DisplayUnavailable(
            "evdev has no display geometry; set Settings::display_override".into(),
        ))
    }

    fn cursor_position(&mut self) -> Result<Point> {
        self.position.ok_or_else(|| {
            Error::Synthesis("evdev cannot read the cursor before the first absolute move".into())
        })
    }
}
