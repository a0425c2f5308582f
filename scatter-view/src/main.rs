//! Application entry point for the focus-map viewer.
//!
//! This binary initializes logging, sets up eframe/egui and delegates all
//! interactive logic and rendering to [`FocusMapViewer`] from the `viewer`
//! module.

mod users;
mod viewer;

use tracing_subscriber::EnvFilter;
use viewer::FocusMapViewer;

/// Starts the native eframe application.
///
/// Logging goes through `tracing`; set `RUST_LOG` to adjust the filter
/// (defaults to `info`).
///
/// ### Returns
/// - `Ok(())` if the application runs to completion without errors.
/// - `Err` if eframe fails to create the native window or event loop.
fn main() -> eframe::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let options = eframe::NativeOptions::default();

    eframe::run_native(
        "Focus Map",
        options,
        Box::new(|_cc| {
            // Construct the root app state for the viewer.
            Ok(Box::new(FocusMapViewer::new()))
        }),
    )
}
