//! # Progress Clocks
//!
//! A companion tool for tabletop role-playing games built around the
//! segmented radial progress tracker ("clock"): stress tracks, doom
//! counters, escalation clocks. Clocks are circles split into equal
//! wedges; filled wedges always form a contiguous run from the top,
//! clockwise.
//!
//! ## Features
//! - Click or drag to set the filled prefix; right-click to reset
//! - Tap-to-commit touch handling with a pending-prefix preview
//! - Display-only mode for character sheets
//! - A board of named clocks with add/remove and step buttons
//! - State persisted between restarts

#![warn(missing_docs)]
#![deny(unsafe_code)]

mod constants;
mod geometry;
mod tracker;
mod types;
mod ui;

// Re-export public types and functions
pub use geometry::*;
pub use tracker::*;
pub use types::*;
use ui::ClockApp;

/// Runs the clock board application with default settings.
///
/// Initializes the egui application window, restores any persisted board
/// state, and starts the main event loop.
///
/// # Example
///
/// ```no_run
/// use progress_clocks::run_app;
///
/// fn main() -> Result<(), eframe::Error> {
///     run_app()
/// }
/// ```
pub fn run_app() -> Result<(), eframe::Error> {
    let options = eframe::NativeOptions::default();
    eframe::run_native(
        "Progress Clocks",
        options,
        Box::new(|cc| {
            let app = cc
                .storage
                .and_then(|storage| storage.get_string("app_state"))
                .and_then(|json| ClockApp::from_json(&json).ok())
                .unwrap_or_default();
            Ok(Box::new(app))
        }),
    )
}
