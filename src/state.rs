//! Pressed-state tracking for buttons and keys.
//!
//! The tracker plans the raw events a [`Direction`] expands to and only
//! records a state change once the backend has accepted the corresponding
//! event. A click whose release fails therefore leaves the input pressed.

use crate::event::{Direction, Input, RawEvent};
use std::collections::BTreeSet;

/// Set of inputs currently held down by this engine handle.
#[derive(Debug, Default, Clone)]
pub struct InputTracker {
    pressed: BTreeSet<Input>,
}

impl InputTracker {
    /// Create a tracker with everything released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw events needed to apply `direction` to `input`.
    ///
    /// Pressing a held input or releasing a free one yields nothing.
    /// A click always yields a press followed by a release.
    pub fn transition(&self, input: Input, direction: Direction) -> Vec<RawEvent> {
        let held = self.is_pressed(input);
        match direction {
            Direction::Press if held => Vec::new(),
            Direction::Press => vec![RawEvent::Press(input)],
            Direction::Release if held => vec![RawEvent::Release(input)],
            Direction::Release => Vec::new(),
            Direction::Click => vec![RawEvent::Press(input), RawEvent::Release(input)],
        }
    }

    /// Record an event the backend accepted.
    pub fn commit(&mut self, event: &RawEvent) {
        match event {
            RawEvent::Press(input) => {
                self.pressed.insert(*input);
            }
            RawEvent::Release(input) => {
                self.pressed.remove(input);
            }
            RawEvent::MoveTo(_) | RawEvent::Scroll { .. } => {}
        }
    }

    /// Check whether an input is held.
    pub fn is_pressed(&self, input: Input) -> bool {
        self.pressed.contains(&input)
    }

    /// Held inputs in a stable order.
    pub fn pressed(&self) -> impl Iterator<Item = Input> + '_ {
        self.pressed.iter().copied()
    }

    /// Release events for everything held, in a stable order.
    pub fn release_all(&self) -> Vec<RawEvent> {
        self.pressed.iter().copied().map(RawEvent::Release).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::Button;
    use crate::keycode::Key;

    const LEFT: Input = Input::Button(Button::Left);

    #[test]
    fn test_press_is_idempotent() {
        let mut tracker = InputTracker::new();
        let first = tracker.transition(LEFT, Direction::Press);
        assert_eq!(first, vec![RawEvent::Press(LEFT)]);
        first.iter().for_each(|e| tracker.commit(e));

        assert!(tracker.transition(LEFT, Direction::Press).is_empty());
        assert!(tracker.is_pressed(LEFT));
    }

    #[test]
    fn test_release_when_free_is_noop() {
        let tracker = InputTracker::new();
        assert!(tracker.transition(LEFT, Direction::Release).is_empty());
    }

    #[test]
    fn test_click_expands_regardless_of_state() {
        let mut tracker = InputTracker::new();
        let expected = vec![RawEvent::Press(LEFT), RawEvent::Release(LEFT)];
        assert_eq!(tracker.transition(LEFT, Direction::Click), expected);

        tracker.commit(&RawEvent::Press(LEFT));
        assert_eq!(tracker.transition(LEFT, Direction::Click), expected);
    }

    #[test]
    fn test_uncommitted_release_leaves_pressed() {
        let mut tracker = InputTracker::new();
        let events = tracker.transition(LEFT, Direction::Click);
        tracker.commit(&events[0]);
        assert!(tracker.is_pressed(LEFT));
    }

    #[test]
    fn test_buttons_and_keys_are_tracked_separately() {
        let mut tracker = InputTracker::new();
        let shift = Input::Key(Key::ShiftLeft);
        tracker.commit(&RawEvent::Press(shift));
        tracker.commit(&RawEvent::Press(LEFT));

        assert_eq!(tracker.pressed().collect::<Vec<_>>(), vec![LEFT, shift]);
        assert_eq!(
            tracker.release_all(),
            vec![RawEvent::Release(LEFT), RawEvent::Release(shift)]
        );

        tracker.commit(&RawEvent::Release(LEFT));
        assert!(!tracker.is_pressed(LEFT));
        assert!(tracker.is_pressed(shift));
    }
}
