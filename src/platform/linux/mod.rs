//! Linux platform implementation.
//!
//! Supports two backends:
//! - **X11**: Uses XTest for injection (default)
//! - **evdev**: Creates a uinput virtual device (works on X11 and Wayland)
//!
//! ## Feature Flags
//!
//! - `x11` (default): Inject through the X server
//! - `evdev`: Inject through `/dev/uinput`
//!
//! ## Permissions for evdev
//!
//! The evdev backend requires write access to `/dev/uinput`:
//! ```bash
//! sudo usermod -aG input $USER
//! # Then log out and back in
//! ```

#[cfg(any(feature = "x11", feature = "evdev"))]
mod keycodes;

#[cfg(feature = "x11")]
mod x11;

#[cfg(feature = "evdev")]
mod evdev;

#[cfg(feature = "x11")]
pub use x11::X11Backend;

#[cfg(feature = "evdev")]
pub use evdev::EvdevBackend;

// Default to X11 if available
#[cfg(feature = "x11")]
pub use x11::X11Backend as NativeBackend;

// Use evdev if X11 is not enabled but evdev is
#[cfg(all(feature = "evdev", not(feature = "x11")))]
pub use evdev::EvdevBackend as NativeBackend;

// If neither X11 nor evdev features are enabled, provide a stub backend
#[cfg(not(any(feature = "x11", feature = "evdev")))]
mod stub {
    use crate::backend::Backend;
    use crate::display::DisplaySize;
    use crate::error::{Error, Result};
    use crate::event::{Point, RawEvent};
    use crate::settings::Settings;

    const NO_BACKEND: &str = "No Linux backend enabled. Enable 'x11' or 'evdev' feature.";

    /// Backend used when no Linux injection feature is compiled in.
    pub struct NativeBackend;

    impl NativeBackend {
        pub fn new(_settings: &Settings) -> Result<Self> {
            Ok(Self)
        }
    }

    impl Backend for NativeBackend {
        fn inject(&mut self, _event: &RawEvent) -> Result<()> {
            Err(Error::Synthesis(NO_BACKEND.into()))
        }

        fn primary_display_size(&mut self) -> Result<DisplaySize> {
            Err(Error::DisplayUnavailable(NO_BACKEND.into()))
        }

        fn cursor_position(&mut self) -> Result<Point> {
            Err(Error::Synthesis(NO_BACKEND.into()))
        }
    }
}

#[cfg(not(any(feature = "x11", feature = "evdev")))]
pub use stub::*;
