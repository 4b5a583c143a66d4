//! Ordered dispatch of raw events to a backend.

use crate::backend::Backend;
use crate::delay::DelayController;
use crate::error::Result;
use crate::event::RawEvent;
use std::thread;

/// Dispatch `events` to `backend` one at a time, in order.
///
/// The configured delay is slept between events, never before the first or
/// after the last. `on_emitted` runs after each event the backend accepts.
/// The first failure stops the sequence and is returned; events already
/// dispatched stay dispatched.
pub fn emit<B, F>(
    backend: &mut B,
    events: &[RawEvent],
    delay: &DelayController,
    mut on_emitted: F,
) -> Result<()>
where
    B: Backend + ?Sized,
    F: FnMut(&RawEvent),
{
    for (i, event) in events.iter().enumerate() {
        if i > 0 {
            let gap = delay.duration();
            if !gap.is_zero() {
                thread::sleep(gap);
            }
        }

        log::trace!("injecting {event:?}");
        if let Err(e) = backend.inject(event) {
            log::debug!("injection of {event:?} failed after {i} event(s): {e}");
            return Err(e);
        }
        on_emitted(event);
    }
    Ok(())
}
