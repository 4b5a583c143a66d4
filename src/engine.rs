//! The engine handle: one logical controller of mouse and keyboard input.

use crate::backend::Backend;
use crate::delay::DelayController;
use crate::display::{DisplayCache, DisplaySize};
use crate::error::{Error, Result};
use crate::event::{Axis, Button, Coordinate, Direction, Input, Point, RawEvent};
use crate::keycode::Key;
use crate::platform::NativeBackend;
use crate::resolve::resolve;
use crate::settings::Settings;
use crate::state::InputTracker;
use crate::synth;

/// Largest number of ticks a single [`Engine::scroll`] call accepts, in
/// either direction. Well below the point where a Windows wheel delta
/// (120 per tick) overflows `i32`, and keeps X11's one-button-per-tick
/// loop short.
pub const MAX_SCROLL_TICKS: i32 = 10_000;

/// Synchronous input synthesis engine.
///
/// A handle owns its cursor cache, pressed-input set, delay and display
/// cache. All calls block until the OS has accepted every raw event they
/// produce. Handles are not internally synchronized: callers that share
/// one across threads must serialize access themselves, and two handles
/// driving the same session may interleave.
///
/// Dropping a handle does not release held buttons or keys.
pub struct Engine<B: Backend = NativeBackend> {
    backend: B,
    cursor: Option<Point>,
    tracker: InputTracker,
    delay: DelayController,
    display: DisplayCache,
    display_override: Option<DisplaySize>,
}

impl Engine {
    /// Create an engine driving the native backend of this platform.
    pub fn new(settings: Settings) -> Result<Self> {
        let backend = NativeBackend::new(&settings)?;
        Ok(Self::with_backend(backend, settings))
    }
}

impl<B: Backend> Engine<B> {
    /// Create an engine driving `backend`.
    pub fn with_backend(backend: B, settings: Settings) -> Self {
        Self {
            backend,
            cursor: None,
            tracker: InputTracker::new(),
            delay: DelayController::new(settings.delay_ms),
            display: DisplayCache::new(),
            display_override: settings.display_override,
        }
    }

    /// Move the cursor and return where it ended up.
    ///
    /// The target is clamped to the primary display. The cached cursor is
    /// only updated once the backend has accepted the move.
    pub fn move_to(&mut self, x: i32, y: i32, mode: Coordinate) -> Result<Point> {
        let display = self.primary_display(false)?;
        let cursor = match mode {
            Coordinate::Abs => Point::default(),
            Coordinate::Rel => self.cursor_position()?,
        };
        let target = resolve(Point::new(x, y), mode, cursor, display);
        log::debug!("move ({x}, {y}) {mode:?} resolved to {target}");

        synth::emit(
            &mut self.backend,
            &[RawEvent::MoveTo(target)],
            &self.delay,
            |_| {},
        )?;
        self.cursor = Some(target);
        Ok(target)
    }

    /// Last known cursor position.
    ///
    /// On a fresh handle this asks the backend once; afterwards it returns
    /// the position of the last successful move, which goes stale if the
    /// user moves the physical mouse. See [`Self::refresh_cursor_position`].
    pub fn cursor_position(&mut self) -> Result<Point> {
        match self.cursor {
            Some(point) => Ok(point),
            None => self.refresh_cursor_position(),
        }
    }

    /// Re-read the cursor position from the OS.
    pub fn refresh_cursor_position(&mut self) -> Result<Point> {
        let point = self.backend.cursor_position()?;
        self.cursor = Some(point);
        Ok(point)
    }

    /// Press, release or click a mouse button.
    pub fn button(&mut self, button: Button, direction: Direction) -> Result<()> {
        self.transition(Input::Button(button), direction)
    }

    /// Press, release or click a key.
    pub fn key(&mut self, key: Key, direction: Direction) -> Result<()> {
        self.transition(Input::Key(key), direction)
    }

    /// Scroll by `amount` ticks. Positive is up or right.
    ///
    /// `amount` must be non-zero and at most [`MAX_SCROLL_TICKS`] in
    /// magnitude.
    pub fn scroll(&mut self, amount: i32, axis: Axis) -> Result<()> {
        if amount == 0 {
            return Err(Error::InvalidArgument("scroll amount must be non-zero".into()));
        }
        if amount.unsigned_abs() > MAX_SCROLL_TICKS.unsigned_abs() {
            return Err(Error::InvalidArgument(format!(
                "scroll amount {amount} exceeds {MAX_SCROLL_TICKS} ticks"
            )));
        }
        log::debug!("scroll {amount} {axis:?}");
        synth::emit(
            &mut self.backend,
            &[RawEvent::Scroll { amount, axis }],
            &self.delay,
            |_| {},
        )
    }

    /// Size of the primary display, cached after the first query.
    pub fn primary_display(&mut self, refresh: bool) -> Result<DisplaySize> {
        let Self {
            backend,
            display,
            display_override,
            ..
        } = self;
        display.query(refresh, || match display_override {
            Some(size) => Ok(*size),
            None => backend.primary_display_size(),
        })
    }

    /// Number of times the display cache has been filled. Grows on the
    /// first query and on every refresh or query after an invalidation.
    pub fn display_generation(&self) -> u64 {
        self.display.generation()
    }

    /// Drop the cached display size so the next query asks again.
    pub fn invalidate_display(&mut self) {
        log::debug!("display cache invalidated");
        self.display.invalidate();
    }

    /// Inter-event delay in milliseconds.
    pub fn delay(&self) -> u64 {
        self.delay.get()
    }

    /// Change the inter-event delay. Applies to every later emission.
    pub fn set_delay(&mut self, ms: i64) -> Result<()> {
        self.delay.set(ms)?;
        log::debug!("delay set to {ms}ms");
        Ok(())
    }

    /// Check whether this handle holds `input` down.
    pub fn is_pressed(&self, input: impl Into<Input>) -> bool {
        self.tracker.is_pressed(input.into())
    }

    /// Inputs this handle holds down.
    pub fn pressed(&self) -> Vec<Input> {
        self.tracker.pressed().collect()
    }

    /// Release everything this handle holds down.
    ///
    /// Never called implicitly; use it to recover after a composite failed
    /// halfway.
    pub fn release_all(&mut self) -> Result<()> {
        let events = self.tracker.release_all();
        if events.is_empty() {
            return Ok(());
        }
        log::debug!("releasing {} held input(s)", events.len());
        self.dispatch(&events)
    }

    /// The backend this engine drives.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutable access to the backend.
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn transition(&mut self, input: Input, direction: Direction) -> Result<()> {
        let events = self.tracker.transition(input, direction);
        if events.is_empty() {
            log::debug!("{direction:?} {input:?}: already in that state");
            return Ok(());
        }
        log::debug!("{direction:?} {input:?}");
        self.dispatch(&events)
    }

    fn dispatch(&mut self, events: &[RawEvent]) -> Result<()> {
        let Self {
            backend,
            tracker,
            delay,
            ..
        } = self;
        synth::emit(backend, events, delay, |event| tracker.commit(event))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::mock::MockBackend;
    use std::time::Duration;

    const LEFT: Input = Input::Button(Button::Left);

    fn engine() -> Engine<MockBackend> {
        let settings = Settings {
            delay_ms: 0,
            ..Settings::default()
        };
        Engine::with_backend(MockBackend::new(), settings)
    }

    #[test]
    fn test_absolute_move_is_readable_back() {
        let mut engine = engine();
        for (x, y) in [(0, 0), (1, 1), (960, 540), (1919, 1079)] {
            engine.move_to(x, y, Coordinate::Abs).unwrap();
            assert_eq!(engine.cursor_position().unwrap(), Point::new(x, y));
        }
    }

    #[test]
    fn test_relative_move_clamps() {
        let mut engine = engine();
        engine.move_to(1900, 10, Coordinate::Abs).unwrap();
        let p = engine.move_to(100, -100, Coordinate::Rel).unwrap();
        assert_eq!(p, Point::new(1919, 0));
        assert_eq!(engine.cursor_position().unwrap(), p);
    }

    #[test]
    fn test_absolute_move_clamps_to_display() {
        let mut engine = engine();
        assert_eq!(
            engine.move_to(-50, -50, Coordinate::Abs).unwrap(),
            Point::new(0, 0)
        );
        assert_eq!(
            engine.move_to(5000, 5000, Coordinate::Abs).unwrap(),
            Point::new(1919, 1079)
        );
        assert_eq!(
            engine.backend().events(),
            vec![
                RawEvent::MoveTo(Point::new(0, 0)),
                RawEvent::MoveTo(Point::new(1919, 1079)),
            ]
        );
    }

    #[test]
    fn test_move_scenario() {
        let mut engine = Engine::with_backend(MockBackend::new(), Settings::default());
        engine.set_delay(10).unwrap();
        engine.move_to(100, 200, Coordinate::Abs).unwrap();
        assert_eq!(engine.cursor_position().unwrap(), Point::new(100, 200));
        engine.move_to(50, 0, Coordinate::Rel).unwrap();
        assert_eq!(engine.cursor_position().unwrap(), Point::new(150, 200));
    }

    #[test]
    fn test_relative_move_on_fresh_handle_starts_from_os_cursor() {
        let backend = MockBackend::new().with_cursor(Point::new(300, 400));
        let mut engine = Engine::with_backend(backend, Settings::default());
        let p = engine.move_to(-10, 10, Coordinate::Rel).unwrap();
        assert_eq!(p, Point::new(290, 410));
    }

    #[test]
    fn test_failed_move_keeps_cursor() {
        let mut engine = engine();
        engine.move_to(10, 10, Coordinate::Abs).unwrap();
        engine.backend_mut().fail_on(1);
        let err = engine.move_to(500, 500, Coordinate::Abs).unwrap_err();
        assert!(matches!(err, Error::Synthesis(_)));
        assert_eq!(engine.cursor_position().unwrap(), Point::new(10, 10));
    }

    #[test]
    fn test_headless_move_fails() {
        let mut engine = Engine::with_backend(MockBackend::new().headless(), Settings::default());
        let err = engine.move_to(1, 1, Coordinate::Abs).unwrap_err();
        assert!(matches!(err, Error::DisplayUnavailable(_)));
        assert!(engine.backend().events().is_empty());
    }

    #[test]
    fn test_display_override_bounds_moves() {
        let settings = Settings {
            display_override: Some(DisplaySize::new(800, 600)),
            ..Settings::default()
        };
        let mut engine = Engine::with_backend(MockBackend::new().headless(), settings);
        let p = engine.move_to(1000, 1000, Coordinate::Abs).unwrap();
        assert_eq!(p, Point::new(799, 599));
        assert_eq!(engine.backend().display_queries(), 0);
    }

    #[test]
    fn test_press_twice_emits_once() {
        let mut engine = engine();
        engine.button(Button::Left, Direction::Press).unwrap();
        engine.button(Button::Left, Direction::Press).unwrap();
        assert_eq!(engine.backend().events(), vec![RawEvent::Press(LEFT)]);
        assert!(engine.is_pressed(Button::Left));
    }

    #[test]
    fn test_release_when_free_emits_nothing() {
        let mut engine = engine();
        engine.button(Button::Right, Direction::Release).unwrap();
        assert!(engine.backend().events().is_empty());
    }

    #[test]
    fn test_click_emits_press_then_release() {
        let mut engine = engine();
        engine.button(Button::Left, Direction::Click).unwrap();
        engine.button(Button::Left, Direction::Press).unwrap();
        engine.button(Button::Left, Direction::Click).unwrap();

        assert_eq!(
            engine.backend().events(),
            vec![
                RawEvent::Press(LEFT),
                RawEvent::Release(LEFT),
                RawEvent::Press(LEFT),
                RawEvent::Press(LEFT),
                RawEvent::Release(LEFT),
            ]
        );
        assert!(!engine.is_pressed(Button::Left));
    }

    #[test]
    fn test_click_observes_delay() {
        let mut engine = engine();
        engine.set_delay(25).unwrap();
        engine.button(Button::Left, Direction::Click).unwrap();
        let gaps = engine.backend().gaps();
        assert_eq!(gaps.len(), 1);
        assert!(gaps[0] >= Duration::from_millis(25));
    }

    #[test]
    fn test_larger_delay_widens_gaps() {
        let mut engine = engine();
        engine.set_delay(1).unwrap();
        engine.key(Key::A, Direction::Click).unwrap();
        let short = engine.backend().gaps()[0];

        engine.backend_mut().clear();
        engine.set_delay(40).unwrap();
        engine.key(Key::A, Direction::Click).unwrap();
        let long = engine.backend().gaps()[0];

        assert!(long > short, "{long:?} <= {short:?}");
    }

    #[test]
    fn test_partial_click_leaves_pressed() {
        let mut engine = engine();
        engine.backend_mut().fail_on(1);
        let err = engine.button(Button::Middle, Direction::Click).unwrap_err();
        assert!(matches!(err, Error::Synthesis(_)));
        assert!(engine.is_pressed(Button::Middle));

        engine.release_all().unwrap();
        assert!(engine.pressed().is_empty());
        assert_eq!(
            engine.backend().events(),
            vec![
                RawEvent::Press(Input::Button(Button::Middle)),
                RawEvent::Release(Input::Button(Button::Middle)),
            ]
        );
    }

    #[test]
    fn test_drag_sequence_order() {
        let mut engine = engine();
        engine.move_to(821, 845, Coordinate::Abs).unwrap();
        engine.button(Button::Left, Direction::Press).unwrap();
        engine.move_to(80, 0, Coordinate::Rel).unwrap();
        engine.button(Button::Left, Direction::Release).unwrap();

        assert_eq!(
            engine.backend().events(),
            vec![
                RawEvent::MoveTo(Point::new(821, 845)),
                RawEvent::Press(LEFT),
                RawEvent::MoveTo(Point::new(901, 845)),
                RawEvent::Release(LEFT),
            ]
        );
        assert_eq!(engine.cursor_position().unwrap(), Point::new(901, 845));
    }

    #[test]
    fn test_keys_use_the_tracker() {
        let mut engine = engine();
        engine.key(Key::ShiftLeft, Direction::Press).unwrap();
        engine.key(Key::ShiftLeft, Direction::Press).unwrap();
        engine.key(Key::A, Direction::Click).unwrap();
        engine.key(Key::ShiftLeft, Direction::Release).unwrap();

        let shift = Input::Key(Key::ShiftLeft);
        let a = Input::Key(Key::A);
        assert_eq!(
            engine.backend().events(),
            vec![
                RawEvent::Press(shift),
                RawEvent::Press(a),
                RawEvent::Release(a),
                RawEvent::Release(shift),
            ]
        );
    }

    #[test]
    fn test_scroll() {
        let mut engine = engine();
        engine.scroll(-3, Axis::Vertical).unwrap();
        engine.scroll(2, Axis::Horizontal).unwrap();
        assert_eq!(
            engine.backend().events(),
            vec![
                RawEvent::Scroll {
                    amount: -3,
                    axis: Axis::Vertical
                },
                RawEvent::Scroll {
                    amount: 2,
                    axis: Axis::Horizontal
                },
            ]
        );
        assert!(matches!(
            engine.scroll(0, Axis::Vertical),
            Err(Error::InvalidArgument(_))
        ));
    }

    #[test]
    fn test_scroll_rejects_oversized_amounts() {
        let mut engine = engine();
        for amount in [i32::MAX, i32::MIN, 20_000_000, -20_000_000, MAX_SCROLL_TICKS + 1] {
            assert!(
                matches!(
                    engine.scroll(amount, Axis::Vertical),
                    Err(Error::InvalidArgument(_))
                ),
                "{amount} was accepted"
            );
        }
        assert!(engine.backend().events().is_empty());

        engine.scroll(MAX_SCROLL_TICKS, Axis::Vertical).unwrap();
        engine.scroll(-MAX_SCROLL_TICKS, Axis::Horizontal).unwrap();
        assert_eq!(engine.backend().events().len(), 2);
    }

    #[test]
    fn test_primary_display_is_cached() {
        let mut engine = engine();
        let first = engine.primary_display(false).unwrap();
        let second = engine.primary_display(false).unwrap();
        assert_eq!(first, second);
        assert_eq!(engine.backend().display_queries(), 1);

        engine.backend_mut().set_display(DisplaySize::new(2560, 1440));
        assert_eq!(engine.primary_display(false).unwrap(), first);
        assert_eq!(
            engine.primary_display(true).unwrap(),
            DisplaySize::new(2560, 1440)
        );
        assert_eq!(engine.backend().display_queries(), 2);
    }

    #[test]
    fn test_display_generation_and_invalidation() {
        let mut engine = engine();
        assert_eq!(engine.display_generation(), 0);
        engine.primary_display(false).unwrap();
        engine.primary_display(false).unwrap();
        assert_eq!(engine.display_generation(), 1);

        engine.backend_mut().set_display(DisplaySize::new(1280, 720));
        engine.invalidate_display();
        assert_eq!(
            engine.primary_display(false).unwrap(),
            DisplaySize::new(1280, 720)
        );
        assert_eq!(engine.display_generation(), 2);
        assert_eq!(engine.backend().display_queries(), 2);

        let p = engine.move_to(5000, 5000, Coordinate::Abs).unwrap();
        assert_eq!(p, Point::new(1279, 719));
    }

    #[test]
    fn test_delay_validation() {
        let mut engine = engine();
        assert_eq!(engine.delay(), 0);
        engine.set_delay(15).unwrap();
        assert_eq!(engine.delay(), 15);
        assert!(matches!(
            engine.set_delay(-5),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(engine.delay(), 15);
    }

    #[test]
    fn test_refresh_cursor_reads_os() {
        let mut engine = engine();
        engine.move_to(10, 10, Coordinate::Abs).unwrap();
        assert_eq!(
            engine.refresh_cursor_position().unwrap(),
            Point::new(10, 10)
        );
    }
}
