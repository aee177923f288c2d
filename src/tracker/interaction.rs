//! The tracker's interaction state machine.
//!
//! Owns the transient per-gesture state (hover index, press-held flag,
//! active touch index, touch-device flag) and translates event-level input
//! into fill-state commits. The machine never stores the fill state: every
//! event takes the current caller-owned fill slice and returns
//! `Some(replacement)` when the event commits, `None` otherwise. The
//! caller stays the sole writer of persisted state.

use crate::tracker::capability::TouchCapability;
use crate::types::{apply_index_toggle, cleared};
use eframe::egui;

/// Transient interaction state for one clock tracker.
///
/// Created on mount, reset on unmount, and updated per gesture. None of
/// this is persisted.
#[derive(Debug, Clone, Default)]
pub struct ClockInteraction {
    /// Wedge currently under the pointer, if any
    pub hovered: Option<usize>,
    /// Whether a primary press that started on a wedge is still held
    pub is_pressing: bool,
    /// Wedge where an uncommitted touch began, if any
    pub active_touch: Option<usize>,
    /// Whether the touch interaction path is active
    pub touch_device: bool,
    /// Viewport size at the last capability check
    last_viewport: Option<(f32, f32)>,
}

impl ClockInteraction {
    /// Creates idle interaction state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Re-resolves the touch capability when the viewport size changes.
    ///
    /// The first call resolves it unconditionally; later calls only re-probe
    /// on an actual resize, mirroring a resize-listener subscription.
    pub fn refresh_touch_capability(
        &mut self,
        capability: &dyn TouchCapability,
        viewport: egui::Vec2,
    ) {
        let size = (viewport.x, viewport.y);
        if self.last_viewport != Some(size) {
            self.touch_device = capability.is_touch_primary();
            self.last_viewport = Some(size);
        }
    }

    /// Primary press on wedge `index`. Desktop path only.
    ///
    /// Commits the toggle immediately and arms drag-painting.
    pub fn pointer_down(
        &mut self,
        fill: &[bool],
        sections: usize,
        index: usize,
    ) -> Option<Vec<bool>> {
        if self.touch_device {
            return None;
        }
        self.is_pressing = true;
        Some(apply_index_toggle(fill, sections, index))
    }

    /// Pointer moved onto wedge `index`. Desktop path only.
    ///
    /// While the press is held, each newly entered wedge becomes the new
    /// prefix boundary and commits; otherwise this only updates the hover
    /// preview. Re-entering the wedge already hovered is a no-op, so one
    /// entry produces at most one commit.
    pub fn pointer_enter(
        &mut self,
        fill: &[bool],
        sections: usize,
        index: usize,
    ) -> Option<Vec<bool>> {
        if self.touch_device || self.hovered == Some(index) {
            return None;
        }
        self.hovered = Some(index);
        if self.is_pressing {
            Some(apply_index_toggle(fill, sections, index))
        } else {
            None
        }
    }

    /// Pointer left the tracker. Clears the hover preview.
    pub fn pointer_leave(&mut self) {
        self.hovered = None;
    }

    /// Global pointer release, observed even when it happens outside the
    /// tracker's bounds. Ends drag-painting.
    pub fn pointer_released(&mut self) {
        self.is_pressing = false;
    }

    /// Touch began on wedge `index`. Touch path only.
    ///
    /// Records the pending wedge without committing, so scroll gestures
    /// that brush a clock do not fill it.
    pub fn touch_start(&mut self, index: usize) {
        if self.touch_device {
            self.active_touch = Some(index);
        }
    }

    /// Touch lifted on wedge `index`. Touch path only.
    ///
    /// Commits the toggle only when the finger lifts on the wedge it
    /// started on; otherwise the gesture is discarded. Either way the
    /// pending touch is cleared.
    pub fn touch_end(&mut self, fill: &[bool], sections: usize, index: usize) -> Option<Vec<bool>> {
        if !self.touch_device {
            return None;
        }
        let commit = if self.active_touch == Some(index) {
            Some(apply_index_toggle(fill, sections, index))
        } else {
            None
        };
        self.active_touch = None;
        commit
    }

    /// Touch was cancelled by the platform. Discards the pending wedge.
    pub fn touch_cancel(&mut self) {
        self.active_touch = None;
    }

    /// Right-click / long-press reset: an all-empty replacement sequence.
    ///
    /// Fired once per gesture by the widget. The commit is produced even
    /// when the fill is already empty, so the caller's change hook still
    /// runs exactly once.
    pub fn reset(&mut self, sections: usize) -> Vec<bool> {
        self.is_pressing = false;
        self.active_touch = None;
        cleared(sections)
    }
}
