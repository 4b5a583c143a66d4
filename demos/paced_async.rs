//! Pacing engine calls from async code.
//!
//! Run with: cargo run --example paced_async
//!
//! The engine itself never sleeps between calls; the caller awaits
//! between them instead, so the runtime stays free in the meantime.

use puppetry::{Axis, Button, Coordinate, Direction, Engine, Settings};
use std::time::Duration;
use tokio::time::sleep;

#[tokio::main]
async fn main() -> puppetry::Result<()> {
    let mut engine = Engine::new(Settings::default())?;
    engine.set_delay(10)?;

    engine.move_to(400, 300, Coordinate::Abs)?;
    sleep(Duration::from_millis(500)).await;

    engine.button(Button::Right, Direction::Click)?;
    sleep(Duration::from_millis(500)).await;

    engine.scroll(-3, Axis::Vertical)?;
    sleep(Duration::from_millis(500)).await;

    let point = engine.cursor_position()?;
    println!("{{ x: {}, y: {} }}", point.x, point.y);
    Ok(())
}
