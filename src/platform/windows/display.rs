//! Windows geometry and cursor queries.

use crate::display::DisplaySize;
use crate::error::{Error, Result};
use crate::event::Point;
use windows::Win32::Foundation::POINT;
use windows::Win32::UI::WindowsAndMessaging::{
    GetCursorPos, GetSystemMetrics, SM_CXSCREEN, SM_CYSCREEN,
};

pub fn primary_display_size() -> Result<DisplaySize> {
    let width = unsafe { GetSystemMetrics(SM_CXSCREEN) };
    let height = unsafe { GetSystemMetrics(SM_CYSCREEN) };
    DisplaySize::new(width, height).validate()
}

pub fn cursor_position() -> Result<Point> {
    let mut point = POINT::default();
    unsafe { GetCursorPos(&mut point) }
        .map_err(|e| Error::Synthesis(format!("GetCursorPos failed: {e}")))?;
    Ok(Point::new(point.x, point.y))
}
