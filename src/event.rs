//! Input identifiers and the raw events the engine emits.

use crate::error::{Error, Result};
use crate::keycode::Key;
use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A screen-space pixel coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    /// Horizontal position, growing rightwards.
    pub x: i32,
    /// Vertical position, growing downwards.
    pub y: i32,
}

impl Point {
    /// Create a new point.
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

macro_rules! impl_try_from_i32 {
    ($ty:ident, $what:literal, { $($n:literal => $variant:ident),+ $(,)? }) => {
        impl TryFrom<i32> for $ty {
            type Error = Error;

            fn try_from(value: i32) -> Result<Self> {
                match value {
                    $($n => Ok($ty::$variant),)+
                    _ => Err(Error::InvalidArgument(format!(
                        concat!("unknown ", $what, " {}"),
                        value
                    ))),
                }
            }
        }
    };
}

/// How the coordinates of a move request are interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Coordinate {
    /// Screen coordinates.
    Abs,
    /// Offset from the current cursor position.
    Rel,
}

/// Mouse button identifiers.
///
/// The scroll variants are buttons in the X11 sense: pressing one produces
/// a single wheel tick in its direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Button {
    /// Left mouse button.
    Left,
    /// Middle mouse button.
    Middle,
    /// Right mouse button.
    Right,
    /// Wheel tick away from the user.
    ScrollUp,
    /// Wheel tick toward the user.
    ScrollDown,
    /// Horizontal wheel tick to the left.
    ScrollLeft,
    /// Horizontal wheel tick to the right.
    ScrollRight,
    /// Extra button 1 (typically back).
    Back,
    /// Extra button 2 (typically forward).
    Forward,
}

impl Button {
    /// Whether this button is a wheel direction rather than a physical button.
    pub fn is_scroll(&self) -> bool {
        matches!(
            self,
            Button::ScrollUp | Button::ScrollDown | Button::ScrollLeft | Button::ScrollRight
        )
    }

    /// The axis and signed tick a scroll button stands for.
    pub fn scroll_tick(&self) -> Option<(Axis, i32)> {
        match self {
            Button::ScrollUp => Some((Axis::Vertical, 1)),
            Button::ScrollDown => Some((Axis::Vertical, -1)),
            Button::ScrollLeft => Some((Axis::Horizontal, -1)),
            Button::ScrollRight => Some((Axis::Horizontal, 1)),
            _ => None,
        }
    }
}

impl FromStr for Button {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "left" => Ok(Button::Left),
            "middle" => Ok(Button::Middle),
            "right" => Ok(Button::Right),
            "scrollup" | "scroll_up" => Ok(Button::ScrollUp),
            "scrolldown" | "scroll_down" => Ok(Button::ScrollDown),
            "scrollleft" | "scroll_left" => Ok(Button::ScrollLeft),
            "scrollright" | "scroll_right" => Ok(Button::ScrollRight),
            "back" => Ok(Button::Back),
            "forward" => Ok(Button::Forward),
            _ => Err(Error::InvalidArgument(format!("unknown button name {s:?}"))),
        }
    }
}

/// What to do with a button or key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Direction {
    /// Push down.
    Press,
    /// Let go.
    Release,
    /// Press, wait the configured delay, release.
    Click,
}

/// Scroll axis. Positive amounts scroll up on the vertical axis and right
/// on the horizontal one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Axis {
    /// Left/right.
    Horizontal,
    /// Up/down.
    Vertical,
}

impl_try_from_i32!(Button, "button id", {
    0 => Left,
    1 => Middle,
    2 => Right,
    3 => ScrollUp,
    4 => ScrollDown,
    5 => ScrollLeft,
    6 => ScrollRight,
    7 => Back,
    8 => Forward,
});
impl_try_from_i32!(Direction, "direction", { 0 => Press, 1 => Release, 2 => Click });
impl_try_from_i32!(Coordinate, "coordinate mode", { 0 => Abs, 1 => Rel });
impl_try_from_i32!(Axis, "axis", { 0 => Horizontal, 1 => Vertical });

/// Anything with a pressed/released state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Input {
    /// A mouse button.
    Button(Button),
    /// A keyboard key.
    Key(Key),
}

impl From<Button> for Input {
    fn from(button: Button) -> Self {
        Input::Button(button)
    }
}

impl From<Key> for Input {
    fn from(key: Key) -> Self {
        Input::Key(key)
    }
}

/// A single platform-level injection primitive.
///
/// Composites such as a click are expanded into several of these before
/// they reach a backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum RawEvent {
    /// Put the cursor at an already-resolved screen position.
    MoveTo(Point),
    /// Push an input down.
    Press(Input),
    /// Let an input go.
    Release(Input),
    /// Scroll by a signed number of ticks.
    Scroll {
        /// Ticks; positive is up/right.
        amount: i32,
        /// Which wheel.
        axis: Axis,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_button_from_binding_ids() {
        assert_eq!(Button::try_from(0), Ok(Button::Left));
        assert_eq!(Button::try_from(1), Ok(Button::Middle));
        assert_eq!(Button::try_from(2), Ok(Button::Right));
        assert_eq!(Button::try_from(6), Ok(Button::ScrollRight));
        assert!(matches!(
            Button::try_from(9),
            Err(Error::InvalidArgument(_))
        ));
        assert!(Button::try_from(-1).is_err());
    }

    #[test]
    fn test_enum_ids_reject_out_of_range() {
        assert_eq!(Direction::try_from(2), Ok(Direction::Click));
        assert_eq!(Coordinate::try_from(1), Ok(Coordinate::Rel));
        assert_eq!(Axis::try_from(0), Ok(Axis::Horizontal));
        assert!(Direction::try_from(3).is_err());
        assert!(Coordinate::try_from(2).is_err());
        assert!(Axis::try_from(7).is_err());
    }

    #[test]
    fn test_button_from_name() {
        assert_eq!("left".parse::<Button>(), Ok(Button::Left));
        assert_eq!("Middle".parse::<Button>(), Ok(Button::Middle));
        assert_eq!("scroll_up".parse::<Button>(), Ok(Button::ScrollUp));
        assert!("wheel".parse::<Button>().is_err());
    }

    #[test]
    fn test_scroll_ticks_follow_sign_convention() {
        assert_eq!(Button::ScrollUp.scroll_tick(), Some((Axis::Vertical, 1)));
        assert_eq!(Button::ScrollDown.scroll_tick(), Some((Axis::Vertical, -1)));
        assert_eq!(Button::ScrollRight.scroll_tick(), Some((Axis::Horizontal, 1)));
        assert_eq!(Button::ScrollLeft.scroll_tick(), Some((Axis::Horizontal, -1)));
        assert_eq!(Button::Left.scroll_tick(), None);
        assert!(!Button::Back.is_scroll());
    }
}
