//! X11 event injection using XTest.

use crate::error::{Error, Result};
use crate::event::{Axis, Button, Input, RawEvent};
use crate::platform::linux::keycodes::key_to_x11_keycode;
use std::os::raw::{c_int, c_uint};
use x11::xlib;
use x11::xtest;

const TRUE: c_int = 1;
const FALSE: c_int = 0;

/// Inject one raw event and wait for the server to process it.
pub fn inject(display: *mut xlib::Display, event: &RawEvent) -> Result<()> {
    let ok = match *event {
        RawEvent::MoveTo(point) => unsafe {
            // screen -1 targets the screen the pointer is on
            xtest::XTestFakeMotionEvent(display, -1, point.x, point.y, 0) != 0
        },
        RawEvent::Press(input) => fake_input(display, input, TRUE),
        RawEvent::Release(input) => fake_input(display, input, FALSE),
        RawEvent::Scroll { amount, axis } => scroll(display, amount, axis),
    };

    unsafe {
        xlib::XFlush(display);
        xlib::XSync(display, FALSE);
    }

    if ok {
        Ok(())
    } else {
        Err(Error::Synthesis(format!("XTest rejected {event:?}")))
    }
}

/// X11 core button number.
fn button_to_code(button: Button) -> c_uint {
    match button {
        Button::Left => 1,
        Button::Middle => 2,
        Button::Right => 3,
        Button::ScrollUp => 4,
        Button::ScrollDown => 5,
        Button::ScrollLeft => 6,
        Button::ScrollRight => 7,
        Button::Back => 8,
        Button::Forward => 9,
    }
}

fn fake_input(display: *mut xlib::Display, input: Input, is_press: c_int) -> bool {
    unsafe {
        match input {
            Input::Button(button) => {
                xtest::XTestFakeButtonEvent(display, button_to_code(button), is_press, 0) != 0
            }
            Input::Key(key) => {
                xtest::XTestFakeKeyEvent(display, key_to_x11_keycode(key), is_press, 0) != 0
            }
        }
    }
}

/// X11 scrolls by clicking buttons 4-7 once per tick.
fn scroll(display: *mut xlib::Display, amount: i32, axis: Axis) -> bool {
    let button = match (axis, amount > 0) {
        (Axis::Vertical, true) => Button::ScrollUp,
        (Axis::Vertical, false) => Button::ScrollDown,
        (Axis::Horizontal, true) => Button::ScrollRight,
        (Axis::Horizontal, false) => Button::ScrollLeft,
    };
    let code = button_to_code(button);

    for _ in 0..amount.unsigned_abs() {
        if unsafe { xtest::XTestFakeButtonEvent(display, code, TRUE, 0) } == 0 {
            return false;
        }
        if unsafe { xtest::XTestFakeButtonEvent(display, code, FALSE, 0) } == 0 {
            return false;
        }
    }
    true
}
