//! Key to macOS virtual keycode mappings (`kVK_*` from Carbon's Events.h).

use crate::keycode::Key;

/// Convert a Key to its macOS virtual keycode.
pub fn key_to_keycode(key: Key) -> u16 {
    match key {
        Key::A => 0x00,
        Key::S => 0x01,
        Key::D => 0x02,
        Key::F => 0x03,
        Key::H => 0x04,
        Key::G => 0x05,
        Key::Z => 0x06,
        Key::X => 0x07,
        Key::C => 0x08,
        Key::V => 0x09,
        Key::B => 0x0B,
        Key::Q => 0x0C,
        Key::W => 0x0D,
        Key::E => 0x0E,
        Key::R => 0x0F,
        Key::Y => 0x10,
        Key::T => 0x11,
        Key::O => 0x1F,
        Key::U => 0x20,
        Key::I => 0x22,
        Key::P => 0x23,
        Key::L => 0x25,
        Key::J => 0x26,
        Key::K => 0x28,
        Key::N => 0x2D,
        Key::M => 0x2E,

        Key::Num1 => 0x12,
        Key::Num2 => 0x13,
        Key::Num3 => 0x14,
        Key::Num4 => 0x15,
        Key::Num6 => 0x16,
        Key::Num5 => 0x17,
        Key::Num9 => 0x19,
        Key::Num7 => 0x1A,
        Key::Num8 => 0x1C,
        Key::Num0 => 0x1D,

        Key::F1 => 0x7A,
        Key::F2 => 0x78,
        Key::F3 => 0x63,
        Key::F4 => 0x76,
        Key::F5 => 0x60,
        Key::F6 => 0x61,
        Key::F7 => 0x62,
        Key::F8 => 0x64,
        Key::F9 => 0x65,
        Key::F10 => 0x6D,
        Key::F11 => 0x67,
        Key::F12 => 0x6F,

        Key::ShiftLeft => 0x38,
        Key::ShiftRight => 0x3C,
        Key::ControlLeft => 0x3B,
        Key::ControlRight => 0x3E,
        Key::AltLeft => 0x3A,
        Key::AltRight => 0x3D,
        Key::MetaLeft => 0x37,
        Key::MetaRight => 0x36,

        Key::Escape => 0x35,
        Key::Tab => 0x30,
        Key::CapsLock => 0x39,
        Key::Space => 0x31,
        Key::Enter => 0x24,
        Key::Backspace => 0x33,
        Key::Insert => 0x72, // Help
        Key::Delete => 0x75, // Forward delete
        Key::Home => 0x73,
        Key::End => 0x77,
        Key::PageUp => 0x74,
        Key::PageDown => 0x79,
        Key::ArrowUp => 0x7E,
        Key::ArrowDown => 0x7D,
        Key::ArrowLeft => 0x7B,
        Key::ArrowRight => 0x7C,
    }
}
