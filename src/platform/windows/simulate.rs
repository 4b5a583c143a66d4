//! Windows event injection using SendInput.

use crate::error::{Error, Result};
use crate::event::{Axis, Button, Input, Point, RawEvent};
use crate::keycode::Key;
use std::mem::size_of;
use windows::Win32::UI::Input::KeyboardAndMouse::{
    INPUT, INPUT_0, INPUT_KEYBOARD, INPUT_MOUSE, KEYBD_EVENT_FLAGS, KEYBDINPUT,
    KEYEVENTF_EXTENDEDKEY, KEYEVENTF_KEYUP, MOUSE_EVENT_FLAGS, MOUSEEVENTF_ABSOLUTE,
    MOUSEEVENTF_HWHEEL, MOUSEEVENTF_LEFTDOWN, MOUSEEVENTF_LEFTUP, MOUSEEVENTF_MIDDLEDOWN,
    MOUSEEVENTF_MIDDLEUP, MOUSEEVENTF_MOVE, MOUSEEVENTF_RIGHTDOWN, MOUSEEVENTF_RIGHTUP,
    MOUSEEVENTF_WHEEL, MOUSEEVENTF_XDOWN, MOUSEEVENTF_XUP, MOUSEINPUT, SendInput, VIRTUAL_KEY,
};

use super::display::primary_display_size;
use super::keycodes::{is_extended, key_to_keycode};

const WHEEL_DELTA: i32 = 120;
const XBUTTON1: u32 = 1;
const XBUTTON2: u32 = 2;

/// Inject one raw event.
pub fn inject(event: &RawEvent) -> Result<()> {
    match *event {
        RawEvent::MoveTo(point) => mouse_move(point),
        RawEvent::Press(Input::Button(button)) => mouse_button(button, true),
        RawEvent::Release(Input::Button(button)) => mouse_button(button, false),
        RawEvent::Press(Input::Key(key)) => key_event(key, true),
        RawEvent::Release(Input::Key(key)) => key_event(key, false),
        RawEvent::Scroll { amount, axis } => mouse_scroll(amount, axis),
    }
}

fn send(input: INPUT, what: &str) -> Result<()> {
    let inputs = [input];
    let sent = unsafe { SendInput(&inputs, size_of::<INPUT>() as i32) };
    if sent != 1 {
        // SendInput returns 0 when UIPI blocks injection into an elevated window
        Err(Error::Synthesis(format!("SendInput failed for {what}")))
    } else {
        Ok(())
    }
}

/// Send a mouse event
fn sim_mouse_event(flags: MOUSE_EVENT_FLAGS, data: u32, dx: i32, dy: i32) -> Result<()> {
    let input = INPUT {
        r#type: INPUT_MOUSE,
        Anonymous: INPUT_0 {
            mi: MOUSEINPUT {
                dx,
                dy,
                mouseData: data,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    };
    send(input, "mouse event")
}

fn key_event(key: Key, pressed: bool) -> Result<()> {
    let mut flags = KEYBD_EVENT_FLAGS(0);
    if is_extended(key) {
        flags |= KEYEVENTF_EXTENDEDKEY;
    }
    if !pressed {
        flags |= KEYEVENTF_KEYUP;
    }

    let input = INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: VIRTUAL_KEY(key_to_keycode(key)),
                wScan: 0,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    };
    send(input, "keyboard event")
}

fn mouse_button(button: Button, pressed: bool) -> Result<()> {
    let (down, up, data) = match button {
        Button::Left => (MOUSEEVENTF_LEFTDOWN, MOUSEEVENTF_LEFTUP, 0),
        Button::Right => (MOUSEEVENTF_RIGHTDOWN, MOUSEEVENTF_RIGHTUP, 0),
        Button::Middle => (MOUSEEVENTF_MIDDLEDOWN, MOUSEEVENTF_MIDDLEUP, 0),
        Button::Back => (MOUSEEVENTF_XDOWN, MOUSEEVENTF_XUP, XBUTTON1),
        Button::Forward => (MOUSEEVENTF_XDOWN, MOUSEEVENTF_XUP, XBUTTON2),
        // Wheel "buttons" tick once on press and have no release
        scroll => {
            return match scroll.scroll_tick() {
                Some((axis, tick)) if pressed => mouse_scroll(tick, axis),
                _ => Ok(()),
            };
        }
    };
    sim_mouse_event(if pressed { down } else { up }, data, 0, 0)
}

/// Absolute moves are expressed in 0..=65535 across the primary display.
fn mouse_move(point: Point) -> Result<()> {
    let size = primary_display_size()?;
    let normalize = |v: i32, extent: i32| -> i32 {
        let span = i64::from((extent - 1).max(1));
        (i64::from(v) * 65_535 / span) as i32
    };

    sim_mouse_event(
        MOUSEEVENTF_MOVE | MOUSEEVENTF_ABSOLUTE,
        0,
        normalize(point.x, size.width),
        normalize(point.y, size.height),
    )
}

/// Positive wheel data scrolls up (vertical) or right (horizontal).
fn mouse_scroll(amount: i32, axis: Axis) -> Result<()> {
    let flags = match axis {
        Axis::Vertical => MOUSEEVENTF_WHEEL,
        Axis::Horizontal => MOUSEEVENTF_HWHEEL,
    };
    sim_mouse_event(flags, wheel_data(amount)?, 0, 0)
}

/// Signed wheel delta as the `mouseData` bit pattern.
fn wheel_data(amount: i32) -> Result<u32> {
    amount
        .checked_mul(WHEEL_DELTA)
        .map(|delta| delta as u32)
        .ok_or_else(|| Error::InvalidArgument(format!("scroll amount {amount} out of range")))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wheel_data_keeps_sign() {
        assert_eq!(wheel_data(1), Ok(120));
        assert_eq!(wheel_data(-1), Ok((-120i32) as u32));
        assert!(matches!(
            wheel_data(i32::MAX),
            Err(Error::InvalidArgument(_))
        ));
        assert!(wheel_data(20_000_000).is_err());
    }
}
