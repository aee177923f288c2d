//! The segmented radial progress tracker.
//!
//! Two cooperating pieces: the geometry engine (in [`crate::geometry`])
//! turns a section count and diameter into wedge boundary polygons, and
//! the interaction state machine here turns raw pointer/touch input into
//! fill-state commits while keeping filled wedges a contiguous prefix.
//!
//! # Module Organization
//!
//! - `capability` - Touch-device detection behind an injectable trait
//! - `interaction` - The event-level state machine and its transient state
//! - `colors` - Theme palette and per-wedge color resolution
//! - `widget` - The egui widget gluing input, geometry, and painting

mod capability;
mod colors;
mod interaction;
mod widget;

pub use capability::{ForcedTouch, PlatformTouch, TouchCapability};
pub use colors::{wedge_color, ClockPalette};
pub use interaction::ClockInteraction;
pub use widget::{ClockTracker, ClockTrackerOutput};
