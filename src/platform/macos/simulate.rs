//! macOS event injection using CGEvent.

#![allow(unused_unsafe)]

use crate::error::{Error, Result};
use crate::event::{Axis, Button, Input, Point, RawEvent};
use crate::keycode::Key;
use objc2_core_foundation::{CFRetained, CGPoint};
use objc2_core_graphics::{
    CGEvent, CGEventField, CGEventFlags, CGEventSource, CGEventSourceStateID, CGEventTapLocation,
    CGEventType, CGMouseButton, CGScrollEventUnit,
};
use std::collections::BTreeSet;

use super::keycodes::key_to_keycode;

fn event_source() -> Result<CFRetained<CGEventSource>> {
    unsafe { CGEventSource::new(CGEventSourceStateID::HIDSystemState) }
        .ok_or_else(|| Error::Synthesis("Failed to create event source".into()))
}

/// Current mouse location as reported by the window server.
pub fn mouse_location() -> Result<Point> {
    let point = current_location()?;
    Ok(Point::new(point.x.round() as i32, point.y.round() as i32))
}

fn current_location() -> Result<CGPoint> {
    unsafe {
        let source = event_source()?;
        let event = CGEvent::new(Some(&source))
            .ok_or_else(|| Error::Synthesis("Failed to create event".into()))?;
        Ok(CGEvent::location(Some(&event)))
    }
}

fn post(event: &CGEvent) {
    unsafe { CGEvent::post(CGEventTapLocation::HIDEventTap, Some(event)) };
}

/// Modifier flag carried by a modifier key.
fn modifier_flag(key: Key) -> Option<CGEventFlags> {
    match key {
        Key::ShiftLeft | Key::ShiftRight => Some(CGEventFlags::MaskShift),
        Key::ControlLeft | Key::ControlRight => Some(CGEventFlags::MaskControl),
        Key::AltLeft | Key::AltRight => Some(CGEventFlags::MaskAlternate),
        Key::MetaLeft | Key::MetaRight => Some(CGEventFlags::MaskCommand),
        _ => None,
    }
}

/// Per-handle injection state.
///
/// Quartz does not infer drags or modifier state from a stream of posted
/// events, so both are tracked here and stamped onto every event.
pub struct Simulator {
    flags: CGEventFlags,
    held: BTreeSet<Button>,
}

impl Default for Simulator {
    fn default() -> Self {
        Self {
            flags: CGEventFlags(0),
            held: BTreeSet::new(),
        }
    }
}

impl Simulator {
    /// Inject one raw event.
    pub fn inject(&mut self, event: &RawEvent) -> Result<()> {
        match *event {
            RawEvent::MoveTo(point) => self.mouse_move(point),
            RawEvent::Press(Input::Key(key)) => self.key_event(key, true),
            RawEvent::Release(Input::Key(key)) => self.key_event(key, false),
            RawEvent::Press(Input::Button(button)) => self.mouse_button(button, true),
            RawEvent::Release(Input::Button(button)) => self.mouse_button(button, false),
            RawEvent::Scroll { amount, axis } => mouse_scroll(amount, axis),
        }
    }

    fn key_event(&mut self, key: Key, pressed: bool) -> Result<()> {
        let keycode = key_to_keycode(key);
        let source = event_source()?;

        unsafe {
            let event = match modifier_flag(key) {
                Some(flag) => {
                    // Modifiers are delivered as FlagsChanged, not key down/up
                    let event = CGEvent::new(Some(&source))
                        .ok_or_else(|| Error::Synthesis("Failed to create event".into()))?;
                    CGEvent::set_type(Some(&event), CGEventType::FlagsChanged);
                    CGEvent::set_integer_value_field(
                        Some(&event),
                        CGEventField::KeyboardEventKeycode,
                        keycode as i64,
                    );
                    if pressed {
                        self.flags.insert(flag);
                    } else {
                        self.flags.remove(flag);
                    }
                    event
                }
                None => CGEvent::new_keyboard_event(Some(&source), keycode, pressed)
                    .ok_or_else(|| {
                        Error::Synthesis("Failed to create keyboard event".into())
                    })?,
            };
            CGEvent::set_flags(Some(&event), self.flags);
            post(&event);
        }
        Ok(())
    }

    fn mouse_button(&mut self, button: Button, pressed: bool) -> Result<()> {
        let (down, up, cg_button, number) = match button {
            Button::Left => (
                CGEventType::LeftMouseDown,
                CGEventType::LeftMouseUp,
                CGMouseButton::Left,
                0,
            ),
            Button::Right => (
                CGEventType::RightMouseDown,
                CGEventType::RightMouseUp,
                CGMouseButton::Right,
                1,
            ),
            Button::Middle => (
                CGEventType::OtherMouseDown,
                CGEventType::OtherMouseUp,
                CGMouseButton::Center,
                2,
            ),
            Button::Back | Button::Forward => (
                CGEventType::OtherMouseDown,
                CGEventType::OtherMouseUp,
                CGMouseButton::Center,
                if button == Button::Back { 3 } else { 4 },
            ),
            // Wheel "buttons" tick once on press and have no release
            scroll => {
                return match scroll.scroll_tick() {
                    Some((axis, tick)) if pressed => mouse_scroll(tick, axis),
                    _ => Ok(()),
                };
            }
        };

        let point = current_location()?;
        let source = event_source()?;
        let event_type = if pressed { down } else { up };

        unsafe {
            let event = CGEvent::new_mouse_event(Some(&source), event_type, point, cg_button)
                .ok_or_else(|| Error::Synthesis("Failed to create mouse event".into()))?;
            if number >= 2 {
                CGEvent::set_integer_value_field(
                    Some(&event),
                    CGEventField::MouseEventButtonNumber,
                    number,
                );
            }
            CGEvent::set_flags(Some(&event), self.flags);
            post(&event);
        }

        if pressed {
            self.held.insert(button);
        } else {
            self.held.remove(&button);
        }
        Ok(())
    }

    /// Moves with a button held are posted as drags, otherwise apps miss them.
    fn mouse_move(&mut self, point: Point) -> Result<()> {
        let (event_type, cg_button) = if self.held.contains(&Button::Left) {
            (CGEventType::LeftMouseDragged, CGMouseButton::Left)
        } else if self.held.contains(&Button::Right) {
            (CGEventType::RightMouseDragged, CGMouseButton::Right)
        } else if !self.held.is_empty() {
            (CGEventType::OtherMouseDragged, CGMouseButton::Center)
        } else {
            (CGEventType::MouseMoved, CGMouseButton::Left)
        };

        let location = CGPoint {
            x: point.x as f64,
            y: point.y as f64,
        };
        let source = event_source()?;

        unsafe {
            let event = CGEvent::new_mouse_event(Some(&source), event_type, location, cg_button)
                .ok_or_else(|| Error::Synthesis("Failed to create mouse event".into()))?;
            CGEvent::set_flags(Some(&event), self.flags);
            post(&event);
        }
        Ok(())
    }
}

/// Scroll in line units. Quartz treats positive horizontal deltas as left,
/// so the sign is flipped to keep positive meaning right.
fn mouse_scroll(amount: i32, axis: Axis) -> Result<()> {
    let (vertical, horizontal) = match axis {
        Axis::Vertical => (amount, 0),
        Axis::Horizontal => (0, amount.saturating_neg()),
    };
    let source = event_source()?;

    unsafe {
        let event = CGEvent::new_scroll_wheel_event2(
            Some(&source),
            CGScrollEventUnit::Line,
            2, // wheel_count
            vertical,
            horizontal,
            0,
        )
        .ok_or_else(|| Error::Synthesis("Failed to create scroll event".into()))?;
        post(&event);
    }
    Ok(())
}
