//! macOS display geometry.

use crate::display::DisplaySize;
use crate::error::Result;
use objc2_core_graphics::{CGDisplayBounds, CGMainDisplayID};

/// Size of the main display in points, the unit CGEvent locations use.
pub fn primary_display_size() -> Result<DisplaySize> {
    let bounds = CGDisplayBounds(CGMainDisplayID());
    DisplaySize::new(
        bounds.size.width.round() as i32,
        bounds.size.height.round() as i32,
    )
    .validate()
}
