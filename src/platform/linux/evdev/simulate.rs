//! Linux evdev input injection using uinput.

use crate::error::{Error, Result};
use crate::event::{Axis, Button, Input};
use crate::platform::linux::keycodes::key_to_evdev_keycode;
use evdev::{
    AttributeSet, EventType as EvdevEventType, InputEvent, Key as EvdevKey, RelativeAxisType,
    uinput::{VirtualDevice, VirtualDeviceBuilder},
};

/// Large enough to pin the cursor to the top-left corner on any screen.
const HOMING_DISTANCE: i32 = -32_768;

/// Build a virtual device with keyboard, buttons, motion and wheels.
pub fn create_device(name: &str) -> Result<VirtualDevice> {
    let mut keys = AttributeSet::<EvdevKey>::new();
    for code in 1..256 {
        keys.insert(EvdevKey::new(code));
    }
    keys.insert(EvdevKey::BTN_LEFT);
    keys.insert(EvdevKey::BTN_RIGHT);
    keys.insert(EvdevKey::BTN_MIDDLE);
    keys.insert(EvdevKey::BTN_SIDE);
    keys.insert(EvdevKey::BTN_EXTRA);

    let mut rel_axes = AttributeSet::<RelativeAxisType>::new();
    rel_axes.insert(RelativeAxisType::REL_X);
    rel_axes.insert(RelativeAxisType::REL_Y);
    rel_axes.insert(RelativeAxisType::REL_WHEEL);
    rel_axes.insert(RelativeAxisType::REL_HWHEEL);

    VirtualDeviceBuilder::new()
        .map_err(|e| Error::Synthesis(format!("Failed to create virtual device builder: {e}")))?
        .name(name)
        .with_keys(&keys)
        .map_err(|e| Error::Synthesis(format!("Failed to add keys: {e}")))?
        .with_relative_axes(&rel_axes)
        .map_err(|e| Error::Synthesis(format!("Failed to add relative axes: {e}")))?
        .build()
        .map_err(|e| {
            Error::Synthesis(format!(
                "Failed to create virtual device: {e}. Make sure /dev/uinput is accessible \
                 (you may need to be in the 'input' group or have appropriate udev rules)."
            ))
        })
}

/// Convert a physical Button to its evdev key code.
fn button_to_evdev_key(button: Button) -> Option<EvdevKey> {
    match button {
        Button::Left => Some(EvdevKey::BTN_LEFT),
        Button::Right => Some(EvdevKey::BTN_RIGHT),
        Button::Middle => Some(EvdevKey::BTN_MIDDLE),
        Button::Back => Some(EvdevKey::BTN_SIDE),
        Button::Forward => Some(EvdevKey::BTN_EXTRA),
        _ => None,
    }
}

/// Write events followed by a SYN_REPORT.
fn emit(device: &mut VirtualDevice, events: &[InputEvent]) -> Result<()> {
    let mut batch = events.to_vec();
    batch.push(InputEvent::new(EvdevEventType::SYNCHRONIZATION, 0, 0));
    device
        .emit(&batch)
        .map_err(|e| Error::Synthesis(format!("Failed to emit event: {e}")))
}

fn rel(axis: RelativeAxisType, value: i32) -> InputEvent {
    InputEvent::new(EvdevEventType::RELATIVE, axis.0, value)
}

/// Press or release a button or key.
///
/// Scroll buttons emit one wheel tick on press and nothing on release.
pub fn emit_input(device: &mut VirtualDevice, input: Input, pressed: bool) -> Result<()> {
    let key = match input {
        Input::Key(key) => EvdevKey::new(key_to_evdev_keycode(key)),
        Input::Button(button) => match button_to_evdev_key(button) {
            Some(key) => key,
            None => {
                return match button.scroll_tick() {
                    Some((axis, tick)) if pressed => scroll(device, tick, axis),
                    _ => Ok(()),
                };
            }
        },
    };
    let value = if pressed { 1 } else { 0 };
    emit(device, &[InputEvent::new(EvdevEventType::KEY, key.code(), value)])
}

/// Move by a delta in one report so the motion is diagonal, not stepped.
pub fn move_by(device: &mut VirtualDevice, dx: i32, dy: i32) -> Result<()> {
    if dx == 0 && dy == 0 {
        return Ok(());
    }
    emit(
        device,
        &[
            rel(RelativeAxisType::REL_X, dx),
            rel(RelativeAxisType::REL_Y, dy),
        ],
    )
}

/// Pin the cursor to the top-left corner.
pub fn home(device: &mut VirtualDevice) -> Result<()> {
    move_by(device, HOMING_DISTANCE, HOMING_DISTANCE)
}

/// Scroll the wheel; REL_WHEEL is positive up, REL_HWHEEL positive right.
pub fn scroll(device: &mut VirtualDevice, amount: i32, axis: Axis) -> Result<()> {
    let axis = match axis {
        Axis::Vertical => RelativeAxisType::REL_WHEEL,
        Axis::Horizontal => RelativeAxisType::REL_HWHEEL,
    };
    emit(device, &[rel(axis, amount)])
}
