//! Wedge color resolution.
//!
//! Colors are derived per frame as a pure function of the fill state, the
//! interaction state, and the read-only flag. Nothing is cached, which
//! rules out staleness bugs by construction.

use crate::tracker::interaction::ClockInteraction;
use eframe::egui;

/// Theme-resolved colors for one clock tracker.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClockPalette {
    /// Committed fill color
    pub filled: egui::Color32,
    /// Preview color for wedges that would fill if the gesture commits
    pub preview: egui::Color32,
    /// Highlight for already-filled wedges covered by the active gesture
    pub highlight: egui::Color32,
    /// Wedge outline color
    pub stroke: egui::Color32,
}

impl ClockPalette {
    /// Resolves the palette from the current egui visuals.
    pub fn from_visuals(visuals: &egui::Visuals) -> Self {
        if visuals.dark_mode {
            Self {
                filled: egui::Color32::from_rgb(100, 150, 255),
                preview: egui::Color32::from_rgb(160, 120, 220),
                highlight: egui::Color32::from_rgb(90, 200, 220),
                stroke: visuals.text_color(),
            }
        } else {
            Self {
                filled: egui::Color32::from_rgb(60, 110, 220),
                preview: egui::Color32::from_rgb(130, 80, 190),
                highlight: egui::Color32::from_rgb(20, 150, 180),
                stroke: visuals.text_color(),
            }
        }
    }
}

/// Resolves the fill color of wedge `index`.
///
/// Priority order: read-only mode shows committed fill only; on a touch
/// device the pending-touch prefix previews the commit; on the desktop the
/// hover/drag coverage previews it; otherwise the committed fill shows
/// as-is. Unfilled, uncovered wedges are transparent.
pub fn wedge_color(
    palette: &ClockPalette,
    is_filled: bool,
    index: usize,
    state: &ClockInteraction,
    read_only: bool,
) -> egui::Color32 {
    if read_only {
        return if is_filled {
            palette.filled
        } else {
            egui::Color32::TRANSPARENT
        };
    }

    if state.touch_device {
        let covered = state.active_touch.is_some_and(|touched| index <= touched);
        return match (covered, is_filled) {
            (true, true) => palette.highlight,
            (false, true) => palette.filled,
            (true, false) => palette.preview,
            (false, false) => egui::Color32::TRANSPARENT,
        };
    }

    // Desktop: while pressing the whole dragged prefix is covered; when
    // merely hovering only the hovered wedge is.
    let covered = match state.hovered {
        Some(hovered) if state.is_pressing => index <= hovered,
        Some(hovered) => index == hovered,
        None => false,
    };
    match (covered, is_filled) {
        (true, true) => palette.highlight,
        (false, true) => palette.filled,
        (true, false) => palette.preview,
        (false, false) => egui::Color32::TRANSPARENT,
    }
}
