//! Shared application-wide constants.
//! Centralizes tweakable values used across UI rendering and interactions.

// Clock dimensions
/// Default clock diameter in logical pixels.
pub const DEFAULT_CLOCK_DIAMETER: f32 = 96.0;
/// Smallest diameter the toolbar slider allows.
pub const MIN_CLOCK_DIAMETER: f32 = 48.0;
/// Largest diameter the toolbar slider allows.
pub const MAX_CLOCK_DIAMETER: f32 = 192.0;

// Sections
/// Default section count for newly added clocks.
pub const DEFAULT_SECTIONS: usize = 6;
/// Minimum section count accepted by the add-clock form.
pub const MIN_SECTIONS: usize = 1;
/// Maximum section count accepted by the add-clock form.
pub const MAX_SECTIONS: usize = 24;

// Rendering
/// Stroke width of wedge outlines (in logical pixels).
pub const WEDGE_STROKE_WIDTH: f32 = 1.0;
/// Width of a clock card in the board layout.
pub const CLOCK_CARD_WIDTH: f32 = 150.0;
