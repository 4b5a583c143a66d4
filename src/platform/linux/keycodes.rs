//! Key to Linux keycode mappings.
//!
//! Codes are evdev (`linux/input-event-codes.h`) values. X11 keycodes on
//! evdev-based servers are the same numbers offset by 8.

#![allow(dead_code)]

use crate::keycode::Key;

// Conversion constant: X11 keycode = evdev keycode + 8
const X11_EVDEV_OFFSET: u16 = 8;

/// Convert a Key to its evdev keycode.
pub fn key_to_evdev_keycode(key: Key) -> u16 {
    match key {
        Key::Escape => 1,
        Key::Num1 => 2,
        Key::Num2 => 3,
        Key::Num3 => 4,
        Key::Num4 => 5,
        Key::Num5 => 6,
        Key::Num6 => 7,
        Key::Num7 => 8,
        Key::Num8 => 9,
        Key::Num9 => 10,
        Key::Num0 => 11,
        Key::Backspace => 14,
        Key::Tab => 15,
        Key::Q => 16,
        Key::W => 17,
        Key::E => 18,
        Key::R => 19,
        Key::T => 20,
        Key::Y => 21,
        Key::U => 22,
        Key::I => 23,
        Key::O => 24,
        Key::P => 25,
        Key::Enter => 28,
        Key::ControlLeft => 29,
        Key::A => 30,
        Key::S => 31,
        Key::D => 32,
        Key::F => 33,
        Key::G => 34,
        Key::H => 35,
        Key::J => 36,
        Key::K => 37,
        Key::L => 38,
        Key::ShiftLeft => 42,
        Key::Z => 44,
        Key::X => 45,
        Key::C => 46,
        Key::V => 47,
        Key::B => 48,
        Key::N => 49,
        Key::M => 50,
        Key::ShiftRight => 54,
        Key::AltLeft => 56,
        Key::Space => 57,
        Key::CapsLock => 58,
        Key::F1 => 59,
        Key::F2 => 60,
        Key::F3 => 61,
        Key::F4 => 62,
        Key::F5 => 63,
        Key::F6 => 64,
        Key::F7 => 65,
        Key::F8 => 66,
        Key::F9 => 67,
        Key::F10 => 68,
        Key::F11 => 87,
        Key::F12 => 88,
        Key::ControlRight => 97,
        Key::AltRight => 100,
        Key::Home => 102,
        Key::ArrowUp => 103,
        Key::PageUp => 104,
        Key::ArrowLeft => 105,
        Key::ArrowRight => 106,
        Key::End => 107,
        Key::ArrowDown => 108,
        Key::PageDown => 109,
        Key::Insert => 110,
        Key::Delete => 111,
        Key::MetaLeft => 125,
        Key::MetaRight => 126,
    }
}

/// Convert a Key to its X11 keycode.
pub fn key_to_x11_keycode(key: Key) -> u32 {
    u32::from(key_to_evdev_keycode(key) + X11_EVDEV_OFFSET)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_x11_offset() {
        assert_eq!(key_to_evdev_keycode(Key::A), 30);
        assert_eq!(key_to_x11_keycode(Key::A), 38);
        assert_eq!(key_to_x11_keycode(Key::Escape), 9);
        assert_eq!(key_to_x11_keycode(Key::ShiftLeft), 50);
    }

    #[test]
    fn test_codes_are_distinct() {
        let keys = [
            Key::A,
            Key::Z,
            Key::Num0,
            Key::Num9,
            Key::F1,
            Key::F12,
            Key::ShiftLeft,
            Key::ShiftRight,
            Key::MetaLeft,
            Key::MetaRight,
            Key::Enter,
            Key::Delete,
            Key::ArrowUp,
            Key::ArrowRight,
        ];
        let codes: std::collections::BTreeSet<u16> =
            keys.iter().map(|&k| key_to_evdev_keycode(k)).collect();
        assert_eq!(codes.len(), keys.len());
        assert!(codes.iter().all(|&c| c > 0));
    }
}
