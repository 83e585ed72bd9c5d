use anyhow::Result;
use log::info;
use log::Level;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Installs the console logger and prints the banner. Call once, before the first frame.
pub fn init_logging() -> Result<()> {
    #[cfg(debug_assertions)]
    simple_logger::init_with_level(Level::Debug)?;

    #[cfg(not(debug_assertions))]
    simple_logger::init_with_level(Level::Info)?;

    info!("Sandbox {}", VERSION);
    info!("Spawn falling boxes and static barriers, resize them live");

    Ok(())
}
