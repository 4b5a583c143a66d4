//! # puppetry
//!
//! A pure Rust cross-platform mouse and keyboard input synthesis engine.
//!
//! ## Features
//!
//! - Cross-platform support (macOS, Windows, Linux X11 and evdev)
//! - Absolute and relative cursor moves, clamped to the primary display
//! - Press/release/click for buttons and keys, with duplicate presses and
//!   releases suppressed
//! - Ordered delivery with a configurable delay between raw events
//! - Cached primary display geometry
//!
//! ## Quick Start
//!
//! ```no_run
//! use puppetry::{Button, Coordinate, Direction, Engine, Settings};
//!
//! let mut engine = Engine::new(Settings::default())?;
//! engine.move_to(821, 845, Coordinate::Abs)?;
//! engine.button(Button::Left, Direction::Press)?;
//! engine.move_to(80, 0, Coordinate::Rel)?;
//! engine.button(Button::Left, Direction::Release)?;
//! println!("cursor at {}", engine.cursor_position()?);
//! # Ok::<(), puppetry::Error>(())
//! ```
//!
//! ## Architecture
//!
//! An [`Engine`] owns all of its state: cached cursor position, the set of
//! held inputs (see [`state`]), the inter-event delay and the display cache.
//! High-level calls are expanded into [`RawEvent`]s, which are handed one by
//! one to a [`Backend`]. Nothing is global, and nothing runs in the
//! background.
//!
//! The engine is synchronous. Pacing between calls (waiting half a second
//! between a press and a move, say) is the caller's business.

pub mod backend;
pub mod delay;
pub mod display;
pub mod engine;
pub mod error;
pub mod event;
pub mod keycode;
pub mod resolve;
pub mod settings;
pub mod state;
pub mod synth;

mod platform;

// Re-exports
pub use backend::Backend;
pub use display::DisplaySize;
pub use engine::Engine;
pub use error::{Error, Result};
pub use event::{Axis, Button, Coordinate, Direction, Input, Point, RawEvent};
pub use keycode::Key;
pub use settings::Settings;

// Native backends
pub use platform::NativeBackend;
#[cfg(all(target_os = "linux", feature = "evdev"))]
pub use platform::EvdevBackend;
#[cfg(all(target_os = "linux", feature = "x11"))]
pub use platform::X11Backend;
