use puppetry::{Engine, Settings};

fn main() -> puppetry::Result<()> {
    let mut engine = Engine::new(Settings::default())?;

    let display = engine.primary_display(false)?;
    println!("Primary display: {display}");

    let cursor = engine.refresh_cursor_position()?;
    println!("Cursor: {cursor}");

    println!("Delay between events: {}ms", engine.delay());
    Ok(())
}
