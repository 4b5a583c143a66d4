//! Drag example: press, move relative, release.
//!
//! Run with: cargo run --example drag
//!
//! WARNING: This will actually move your mouse and hold the left button!

use puppetry::{Button, Coordinate, Direction, Engine, Settings};
use std::thread::sleep;
use std::time::Duration;

fn main() -> puppetry::Result<()> {
    println!("puppetry drag example");
    println!("=====================\n");
    println!("Starting in 3 seconds... (Press Ctrl+C to cancel)\n");
    sleep(Duration::from_secs(3));

    let mut engine = Engine::new(Settings::default())?;

    println!("1. Moving to (821, 845)...");
    let at = engine.move_to(821, 845, Coordinate::Abs)?;
    println!("   Landed at {at}");
    sleep(Duration::from_millis(500));

    println!("2. Pressing left button...");
    engine.button(Button::Left, Direction::Press)?;
    sleep(Duration::from_millis(500));

    println!("3. Dragging 80px to the right...");
    engine.move_to(80, 0, Coordinate::Rel)?;
    sleep(Duration::from_millis(500));

    println!("4. Releasing left button...");
    if let Err(e) = engine.button(Button::Left, Direction::Release) {
        eprintln!("   Error: {e}");
        engine.release_all()?;
    }

    println!("\nCursor is at {}", engine.cursor_position()?);
    Ok(())
}
