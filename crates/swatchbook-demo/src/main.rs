//! Swatchbook Demo — headless host for the color picker tools.
//!
//! Reads `UiToCore` messages as JSON lines on stdin and answers with
//! `CoreToUi` lines on stdout. Logs go to stderr so they never mix with
//! the IPC stream.

mod bridge;
mod config;
mod image_loader;
mod ipc;
mod session;

use std::io;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use crate::config::AppConfig;
use crate::session::Session;

fn main() -> ExitCode {
    let config = AppConfig::default();

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    tracing::info!(
        "swatchbook demo starting (max image {}px, stride {}, {} colors, wheel {}px)",
        config.max_image_size,
        config.extraction.sample_stride,
        config.extraction.max_colors,
        config.wheel_size
    );

    let mut session = Session::new(&config);
    match bridge::run(&mut session, io::stdin().lock(), io::stdout().lock()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("IPC bridge failed: {e}");
            ExitCode::FAILURE
        }
    }
}
