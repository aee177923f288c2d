//! The egui clock tracker widget.
//!
//! Glues the geometry engine, the interaction state machine, and the
//! painter together. The widget reads the caller-owned fill state, feeds
//! per-frame egui input into the event-level machine, paints the wedges,
//! and hands any committed replacement sequence back to the caller, who
//! remains the sole writer of persisted state.

use crate::constants::WEDGE_STROKE_WIDTH;
use crate::geometry::{wedge_at, wedge_outline};
use crate::tracker::capability::TouchCapability;
use crate::tracker::colors::{wedge_color, ClockPalette};
use crate::tracker::interaction::ClockInteraction;
use crate::types::normalized;
use eframe::egui;

/// A segmented radial progress tracker.
///
/// Built per frame in immediate-mode style; transient gesture state lives
/// in the [`ClockInteraction`] the caller retains between frames.
pub struct ClockTracker<'a> {
    sections: usize,
    fill: &'a [bool],
    diameter: f32,
    read_only: bool,
    on_reset: Option<Box<dyn FnOnce() + 'a>>,
}

/// What a tracker produced this frame.
pub struct ClockTrackerOutput {
    /// The egui response for the allocated circle area
    pub response: egui::Response,
    /// Full replacement fill state when an interaction committed this frame
    pub commit: Option<Vec<bool>>,
}

impl<'a> ClockTracker<'a> {
    /// Creates a tracker over the given caller-owned fill state.
    pub fn new(sections: usize, fill: &'a [bool], diameter: f32) -> Self {
        Self {
            sections,
            fill,
            diameter,
            read_only: false,
            on_reset: None,
        }
    }

    /// Display-only "character sheet" mode: no interaction is sensed, and
    /// wedges render committed fill colors only.
    pub fn read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    /// Hook invoked on a right-click / long-press reset gesture.
    ///
    /// When absent the gesture falls back to committing an all-empty
    /// sequence; when present the hook runs instead and no commit is
    /// returned. Either way the gesture fires exactly once.
    pub fn on_reset(mut self, hook: impl FnOnce() + 'a) -> Self {
        self.on_reset = Some(Box::new(hook));
        self
    }

    /// Lays out, handles input for, and paints the tracker.
    pub fn show(
        mut self,
        ui: &mut egui::Ui,
        interaction: &mut ClockInteraction,
        capability: &dyn TouchCapability,
    ) -> ClockTrackerOutput {
        let desired = egui::Vec2::splat(self.diameter.max(0.0));
        let sense = if self.read_only {
            egui::Sense::hover()
        } else {
            egui::Sense::click_and_drag()
        };
        let (rect, response) = ui.allocate_exact_size(desired, sense);

        interaction.refresh_touch_capability(capability, ui.ctx().screen_rect().size());

        let center = rect.center();
        let radius = self.diameter / 2.0;
        let fill = normalized(self.fill, self.sections);

        let mut commit = None;
        if !self.read_only {
            commit = self.handle_input(ui, &response, interaction, center, radius, &fill);
        }

        if ui.is_rect_visible(rect) {
            let palette = ClockPalette::from_visuals(ui.visuals());
            let stroke = egui::Stroke::new(WEDGE_STROKE_WIDTH, palette.stroke);
            let painter = ui.painter();
            for index in 0..self.sections {
                let points = wedge_outline(center, self.diameter, self.sections, index);
                if points.is_empty() {
                    continue;
                }
                let color = wedge_color(&palette, fill[index], index, interaction, self.read_only);
                painter.add(egui::Shape::convex_polygon(
                    points.clone(),
                    color,
                    egui::Stroke::NONE,
                ));
                painter.add(egui::Shape::closed_line(points, stroke));
            }
        }

        let response = if self.read_only {
            response
        } else {
            response.on_hover_cursor(egui::CursorIcon::PointingHand)
        };

        ClockTrackerOutput { response, commit }
    }

    /// Translates this frame's egui input into state-machine events.
    ///
    /// Hover transitions are fed before press edges, matching the
    /// enter-before-down ordering of event-driven platforms. The primary
    /// release is observed globally so a drag that ends off-widget still
    /// clears the press flag.
    fn handle_input(
        &mut self,
        ui: &egui::Ui,
        response: &egui::Response,
        interaction: &mut ClockInteraction,
        center: egui::Pos2,
        radius: f32,
        fill: &[bool],
    ) -> Option<Vec<bool>> {
        let (pointer_pos, pressed, released, any_down, secondary_released) = ui.input(|i| {
            (
                i.pointer.latest_pos(),
                i.pointer.primary_pressed(),
                i.pointer.primary_released(),
                i.pointer.any_down(),
                i.pointer.button_released(egui::PointerButton::Secondary),
            )
        });
        let hit = pointer_pos.and_then(|pos| wedge_at(center, radius, self.sections, pos));

        let mut commit = None;
        if interaction.touch_device {
            if pressed {
                if let Some(index) = hit {
                    interaction.touch_start(index);
                }
            }
            if released {
                match hit {
                    Some(index) => commit = interaction.touch_end(fill, self.sections, index),
                    None => interaction.touch_cancel(),
                }
            } else if interaction.active_touch.is_some() && !any_down {
                // The platform dropped the touch without a release event.
                interaction.touch_cancel();
            }
        } else {
            match hit {
                Some(index) => {
                    if let Some(next) = interaction.pointer_enter(fill, self.sections, index) {
                        commit = Some(next);
                    }
                }
                None => interaction.pointer_leave(),
            }
            if pressed {
                if let Some(index) = hit {
                    let current = commit.as_deref().unwrap_or(fill);
                    if let Some(next) = interaction.pointer_down(current, self.sections, index) {
                        commit = Some(next);
                    }
                }
            }
            if released {
                interaction.pointer_released();
            }
        }

        // Right-click anywhere on the circle, or a touch long-press,
        // resets the whole clock. One gesture, one commit.
        let reset_gesture = (secondary_released && hit.is_some()) || response.long_touched();
        if reset_gesture {
            let emptied = interaction.reset(self.sections);
            match self.on_reset.take() {
                Some(hook) => {
                    hook();
                    commit = None;
                }
                None => commit = Some(emptied),
            }
        }

        commit
    }
}
