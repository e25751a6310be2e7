pub mod error;
pub mod logger;
pub mod shell;

#[cfg(test)]
mod tests;

pub use error::{Result, ShellError};
pub use shell::AppShell;

use rh_nav::{DEFAULT_LANDING_PATH, Navigation, PUBLIC_ENTRY_PATH};

use std::error::Error;

use log::{info, warn};

#[tokio::main]
async fn main() -> std::result::Result<(), Box<dyn Error>> {
    // Load and validate configuration
    let config = rh_config::Config::load()?;
    config.validate()?;

    // Construct log file path if configured
    let log_file_path: Option<std::path::PathBuf> = if let Some(ref filename) = config.logging.file
    {
        let config_dir = rh_config::Config::config_dir()?;
        let log_dir = config_dir.join(&config.logging.dir);

        // Ensure log directory exists
        std::fs::create_dir_all(&log_dir)?;

        Some(log_dir.join(filename))
    } else {
        None
    };

    // Initialize logger (before any other logging)
    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting rh-shell v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    // Restore the session and build the route table
    let shell = AppShell::bootstrap(&config)?;

    let entry = if shell.is_authenticated() {
        DEFAULT_LANDING_PATH
    } else {
        PUBLIC_ENTRY_PATH
    };

    match shell.navigate(entry) {
        Navigation::Render { view, .. } => info!("Entry view: {view:?}"),
        Navigation::Redirect { to } => info!("Entry redirected to {to}"),
        Navigation::Pending => warn!("Identity unresolved after restore"),
    }

    Ok(())
}
