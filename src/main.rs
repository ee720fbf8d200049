use eyre::{Context, Result};
use log::info;
use std::fs;
use std::io;
use std::path::PathBuf;

use toolbox::cli::Application;

fn setup_logging() -> Result<()> {
    // Create log directory
    let log_dir = dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("toolbox")
        .join("logs");

    fs::create_dir_all(&log_dir).context("Failed to create log directory")?;

    let log_file = log_dir.join("toolbox.log");

    let target = Box::new(
        fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_file)
            .context("Failed to open log file")?,
    );

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized, writing to: {}", log_file.display());
    Ok(())
}

fn main() -> Result<()> {
    // Setup logging first
    setup_logging().context("Failed to setup logging")?;

    let app = Application::new().context("Failed to initialize application")?;

    let code = app.run(std::env::args_os(), &mut io::stdout().lock(), &mut io::stderr().lock());

    info!("Exiting with status {}", code);
    std::process::exit(code)
}
