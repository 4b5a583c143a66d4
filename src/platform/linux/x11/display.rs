//! X11 geometry and pointer queries.

use crate::display::DisplaySize;
use crate::error::{Error, Result};
use crate::event::Point;
use std::os::raw::{c_int, c_uint};
use x11::xlib;

pub fn primary_display_size(display: *mut xlib::Display) -> Result<DisplaySize> {
    let (width, height) = unsafe {
        let screen = xlib::XDefaultScreen(display);
        (
            xlib::XDisplayWidth(display, screen),
            xlib::XDisplayHeight(display, screen),
        )
    };
    DisplaySize::new(width, height).validate()
}

pub fn cursor_position(display: *mut xlib::Display) -> Result<Point> {
    let mut root_return: xlib::Window = 0;
    let mut child_return: xlib::Window = 0;
    let mut root_x: c_int = 0;
    let mut root_y: c_int = 0;
    let mut win_x: c_int = 0;
    let mut win_y: c_int = 0;
    let mut mask: c_uint = 0;

    let found = unsafe {
        let root = xlib::XDefaultRootWindow(display);
        xlib::XQueryPointer(
            display,
            root,
            &mut root_return,
            &mut child_return,
            &mut root_x,
            &mut root_y,
            &mut win_x,
            &mut win_y,
            &mut mask,
        )
    };

    if found == 0 {
        Err(Error::Synthesis(
            "XQueryPointer: pointer is on another screen".into(),
        ))
    } else {
        Ok(Point::new(root_x, root_y))
    }
}
