//! Core data types for progress clocks.
//!
//! This module defines the clock record, the board that collects clocks,
//! and the fill-state transforms. A fill state is an ordered sequence of
//! booleans where index `i` means "wedge `i` is filled"; every transform
//! here returns a full replacement sequence and maintains the invariant
//! that filled wedges form a contiguous prefix starting at index 0.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for clock records.
pub type ClockId = Uuid;

/// A segmented radial progress clock.
///
/// The fill state is owned here (by the caller of the tracker widget);
/// the widget only ever reads it and hands back a replacement sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Clock {
    /// Unique identifier for this clock
    pub id: ClockId,
    /// User-displayable name of the clock
    pub name: String,
    /// Number of equal wedges the clock is divided into
    pub sections: usize,
    /// Per-wedge fill flags, index 0 is the 12-o'clock wedge
    pub fill: Vec<bool>,
}

impl Clock {
    /// Creates a new all-empty clock with the given name and section count.
    pub fn new(name: impl Into<String>, sections: usize) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            sections,
            fill: cleared(sections),
        }
    }

    /// Number of filled wedges.
    pub fn filled_count(&self) -> usize {
        filled_count(&self.fill)
    }

    /// Replaces the fill state with a committed sequence, normalizing the
    /// length to the section count.
    pub fn set_fill(&mut self, fill: Vec<bool>) {
        self.fill = normalized(&fill, self.sections);
    }

    /// Clears every wedge.
    pub fn reset(&mut self) {
        self.fill = cleared(self.sections);
    }
}

/// Returns `fill` padded or truncated to exactly `sections` entries.
///
/// Missing entries are treated as empty, so a caller handing in a stale
/// array of the wrong length can never make the widget panic.
pub fn normalized(fill: &[bool], sections: usize) -> Vec<bool> {
    let mut next = fill.to_vec();
    next.resize(sections, false);
    next
}

/// Returns an all-empty fill state for `sections` wedges.
pub fn cleared(sections: usize) -> Vec<bool> {
    vec![false; sections]
}

/// Number of filled wedges in a fill state.
pub fn filled_count(fill: &[bool]) -> usize {
    fill.iter().filter(|f| **f).count()
}

/// Whether the filled wedges form an unbroken run starting at index 0.
pub fn is_prefix_contiguous(fill: &[bool]) -> bool {
    let boundary = filled_count(fill);
    fill.iter().take(boundary).all(|f| *f)
}

/// The core toggle transform applied when a wedge is clicked or tapped.
///
/// If the wedge at `index` is filled, it and every wedge after it are
/// cleared; if it is empty, it and every wedge before it are filled. The
/// result always satisfies prefix-contiguity because a contiguous range is
/// set explicitly rather than flipping a single bit. Out-of-range indices
/// are clamped to the last wedge.
pub fn apply_index_toggle(fill: &[bool], sections: usize, index: usize) -> Vec<bool> {
    let mut next = normalized(fill, sections);
    if sections == 0 {
        return next;
    }
    let index = index.min(sections - 1);
    if next[index] {
        for slot in next.iter_mut().skip(index) {
            *slot = false;
        }
    } else {
        for slot in next.iter_mut().take(index + 1) {
            *slot = true;
        }
    }
    next
}

/// Fills the first empty wedge. No-op when the clock is already full.
pub fn advance(fill: &[bool], sections: usize) -> Vec<bool> {
    let mut next = normalized(fill, sections);
    if let Some(slot) = next.iter_mut().find(|f| !**f) {
        *slot = true;
    }
    next
}

/// Clears the last filled wedge. No-op when the clock is already empty.
pub fn retreat(fill: &[bool], sections: usize) -> Vec<bool> {
    let mut next = normalized(fill, sections);
    if let Some(pos) = next.iter().rposition(|f| *f) {
        next[pos] = false;
    }
    next
}

/// The collection of clocks the application edits.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ClockBoard {
    /// All clocks on the board, in display order
    pub clocks: Vec<Clock>,
}

impl ClockBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a clock to the board and returns its id.
    pub fn add_clock(&mut self, clock: Clock) -> ClockId {
        let id = clock.id;
        self.clocks.push(clock);
        id
    }

    /// Removes the clock with the given id.
    ///
    /// Returns `true` if a clock was found and removed.
    pub fn remove_clock(&mut self, id: ClockId) -> bool {
        let before = self.clocks.len();
        self.clocks.retain(|c| c.id != id);
        self.clocks.len() != before
    }

    /// Returns the clock with the given id, if present.
    pub fn get(&self, id: ClockId) -> Option<&Clock> {
        self.clocks.iter().find(|c| c.id == id)
    }

    /// Returns a mutable reference to the clock with the given id.
    pub fn get_mut(&mut self, id: ClockId) -> Option<&mut Clock> {
        self.clocks.iter_mut().find(|c| c.id == id)
    }

    /// Clears every wedge of the clock with the given id.
    pub fn reset(&mut self, id: ClockId) -> bool {
        match self.get_mut(id) {
            Some(clock) => {
                clock.reset();
                true
            }
            None => false,
        }
    }
}
