//! Application state management structures.
//!
//! This module contains the state the board app keeps between frames and
//! across restarts: the clock board itself, per-clock transient
//! interaction state, and UI preferences.

use crate::constants::{DEFAULT_CLOCK_DIAMETER, DEFAULT_SECTIONS};
use crate::tracker::{ClockInteraction, PlatformTouch};
use crate::types::{ClockBoard, ClockId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The pending add-clock form in the toolbar.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct NewClockForm {
    /// Name for the next clock; empty means auto-name
    pub name: String,
    /// Section count for the next clock
    pub sections: usize,
}

impl Default for NewClockForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            sections: DEFAULT_SECTIONS,
        }
    }
}

/// The main application structure: the clock board plus UI state.
///
/// Implements `eframe::App`; persisted as JSON between restarts, with all
/// transient gesture state skipped.
#[derive(Serialize, Deserialize)]
#[serde(default)]
pub struct ClockApp {
    /// The board of clocks being edited
    pub board: ClockBoard,
    /// Per-clock transient interaction state, keyed by clock id
    #[serde(skip)]
    pub interactions: HashMap<ClockId, ClockInteraction>,
    /// Touch capability probe injected into every tracker
    #[serde(skip)]
    pub touch_probe: PlatformTouch,
    /// Whether dark mode visuals are enabled
    pub dark_mode: bool,
    /// Display-only mode: trackers render without any interaction
    pub display_mode: bool,
    /// Diameter of each clock on the board
    pub clock_diameter: f32,
    /// Toolbar form state for adding a clock
    pub new_clock: NewClockForm,
    /// Counter for generating unique default clock names
    pub clock_counter: u32,
}

impl Default for ClockApp {
    fn default() -> Self {
        Self {
            board: ClockBoard::default(),
            interactions: HashMap::new(),
            touch_probe: PlatformTouch,
            dark_mode: true,
            display_mode: false,
            clock_diameter: DEFAULT_CLOCK_DIAMETER,
            new_clock: NewClockForm::default(),
            clock_counter: 0,
        }
    }
}

impl ClockApp {
    /// Serializes the application state to JSON.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    /// Deserializes application state from JSON.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Returns the interaction state for a clock, creating idle state on
    /// first use and dropping entries for clocks that no longer exist.
    pub fn interaction_for(&mut self, id: ClockId) -> &mut ClockInteraction {
        self.interactions.entry(id).or_default()
    }

    /// Removes interaction state for clocks no longer on the board.
    pub fn prune_interactions(&mut self) {
        let live: Vec<ClockId> = self.board.clocks.iter().map(|c| c.id).collect();
        self.interactions.retain(|id, _| live.contains(id));
    }
}
