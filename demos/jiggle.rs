//! Nudge the cursor back and forth until Ctrl+C.
//!
//! Run with: cargo run --example jiggle

use puppetry::{Coordinate, Engine, Settings};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread::sleep;
use std::time::Duration;

fn main() -> puppetry::Result<()> {
    let running = Arc::new(AtomicBool::new(true));
    let r = running.clone();
    ctrlc::set_handler(move || {
        r.store(false, Ordering::SeqCst);
    })
    .expect("Error setting Ctrl-C handler");

    let mut engine = Engine::new(Settings::default())?;
    println!("Jiggling from {}. Press Ctrl+C to stop.", engine.refresh_cursor_position()?);

    let mut step = 10;
    while running.load(Ordering::SeqCst) {
        let at = engine.move_to(step, 0, Coordinate::Rel)?;
        println!("  {at}");
        step = -step;
        sleep(Duration::from_secs(1));
    }

    println!("Stopped.");
    Ok(())
}
