//! Coordinate resolution: turn a move request into an on-screen target.

use crate::display::DisplaySize;
use crate::event::{Coordinate, Point};

/// Resolve a move request to an absolute point inside `display`.
///
/// Relative requests are offset from `cursor`. The result saturates at the
/// display edges, the way a physical cursor does, instead of failing.
pub fn resolve(request: Point, mode: Coordinate, cursor: Point, display: DisplaySize) -> Point {
    let target = match mode {
        Coordinate::Abs => request,
        Coordinate::Rel => Point::new(
            cursor.x.saturating_add(request.x),
            cursor.y.saturating_add(request.y),
        ),
    };
    clamp(target, display)
}

/// Clamp a point to `[0, width) x [0, height)`.
pub fn clamp(point: Point, display: DisplaySize) -> Point {
    Point::new(
        point.x.clamp(0, display.width.saturating_sub(1).max(0)),
        point.y.clamp(0, display.height.saturating_sub(1).max(0)),
    )
}
