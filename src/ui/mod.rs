//! User interface components and rendering logic for the clock board.
//!
//! This module contains the eframe application: the toolbar for adding
//! clocks and switching modes, the board layout of clock cards, and the
//! write-back of commits produced by the tracker widgets.
//!
//! # Module Organization
//!
//! - `state` - Application state structures and the main ClockApp

mod state;

#[cfg(test)]
mod tests;

pub use state::ClockApp;

use crate::constants::{
    CLOCK_CARD_WIDTH, MAX_CLOCK_DIAMETER, MAX_SECTIONS, MIN_CLOCK_DIAMETER, MIN_SECTIONS,
};
use crate::tracker::ClockTracker;
use crate::types::{advance, filled_count, retreat, Clock, ClockId};
use eframe::egui;
use log::{debug, warn};

/// Board mutations collected while drawing, applied after layout so the
/// card loop never aliases the board it is rendering.
enum BoardAction {
    /// A tracker committed a replacement fill state
    Commit(ClockId, Vec<bool>),
    /// The + button: fill the next wedge
    Advance(ClockId),
    /// The - button: clear the last filled wedge
    Retreat(ClockId),
    /// Reset button or right-click gesture: clear every wedge
    Reset(ClockId),
    /// Remove the clock from the board
    Remove(ClockId),
}

impl eframe::App for ClockApp {
    /// Persist entire app state between restarts.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        match self.to_json() {
            Ok(json) => {
                storage.set_string("app_state", json);
            }
            Err(err) => {
                warn!("failed to serialize app state: {err}");
            }
        }
    }

    /// Main update function called by egui for each frame.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply theme visuals
        let visuals = if self.dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        };
        ctx.set_visuals(visuals);

        egui::TopBottomPanel::top("top_toolbar").show(ctx, |ui| {
            self.draw_toolbar(ui);
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            self.draw_board(ui);
        });
    }
}

impl ClockApp {
    /// Draws the toolbar: the add-clock form and the mode toggles.
    fn draw_toolbar(&mut self, ui: &mut egui::Ui) {
        ui.horizontal(|ui| {
            ui.add(
                egui::TextEdit::singleline(&mut self.new_clock.name)
                    .hint_text("Clock name")
                    .desired_width(140.0),
            );
            ui.label("Sections:");
            ui.add(
                egui::DragValue::new(&mut self.new_clock.sections)
                    .range(MIN_SECTIONS..=MAX_SECTIONS),
            );
            if ui.button("Add clock").clicked() {
                self.add_clock_from_form();
            }

            ui.separator();

            ui.label("Size:");
            ui.add(
                egui::DragValue::new(&mut self.clock_diameter)
                    .range(MIN_CLOCK_DIAMETER..=MAX_CLOCK_DIAMETER)
                    .speed(1.0),
            );
            ui.checkbox(&mut self.display_mode, "Display mode");
            ui.checkbox(&mut self.dark_mode, "Dark mode");
        });
    }

    /// Adds a clock from the toolbar form, auto-naming it when the name
    /// field is blank.
    pub fn add_clock_from_form(&mut self) -> ClockId {
        let sections = self.new_clock.sections.clamp(MIN_SECTIONS, MAX_SECTIONS);
        self.clock_counter += 1;
        let trimmed = self.new_clock.name.trim();
        let name = if trimmed.is_empty() {
            format!("Clock {}", self.clock_counter)
        } else {
            trimmed.to_string()
        };
        self.new_clock.name.clear();

        debug!("adding clock {name:?} with {sections} sections");
        self.board.add_clock(Clock::new(name, sections))
    }

    /// Draws the board as a wrapped row of clock cards and applies any
    /// actions the cards produced.
    fn draw_board(&mut self, ui: &mut egui::Ui) {
        if self.board.clocks.is_empty() {
            ui.centered_and_justified(|ui| {
                ui.label("No clocks yet. Add one from the toolbar.");
            });
            return;
        }

        let mut actions: Vec<BoardAction> = Vec::new();
        let display_mode = self.display_mode;
        let diameter = self.clock_diameter;

        egui::ScrollArea::vertical().show(ui, |ui| {
            ui.horizontal_wrapped(|ui| {
                let Self {
                    board,
                    interactions,
                    touch_probe,
                    ..
                } = self;
                for clock in &board.clocks {
                    let interaction = interactions.entry(clock.id).or_default();
                    ui.group(|ui| {
                        ui.set_width(CLOCK_CARD_WIDTH);
                        ui.vertical_centered(|ui| {
                            ui.label(egui::RichText::new(&clock.name).strong());

                            let mut reset_requested = false;
                            let output = ClockTracker::new(clock.sections, &clock.fill, diameter)
                                .read_only(display_mode)
                                .on_reset(|| reset_requested = true)
                                .show(ui, interaction, touch_probe);
                            if let Some(next) = output.commit {
                                actions.push(BoardAction::Commit(clock.id, next));
                            }
                            if reset_requested {
                                actions.push(BoardAction::Reset(clock.id));
                            }

                            ui.label(format!("{} / {}", clock.filled_count(), clock.sections));

                            if !display_mode {
                                ui.horizontal(|ui| {
                                    if ui.button("-").clicked() {
                                        actions.push(BoardAction::Retreat(clock.id));
                                    }
                                    if ui.button("+").clicked() {
                                        actions.push(BoardAction::Advance(clock.id));
                                    }
                                    if ui.button("Reset").clicked() {
                                        actions.push(BoardAction::Reset(clock.id));
                                    }
                                    if ui.button("Remove").clicked() {
                                        actions.push(BoardAction::Remove(clock.id));
                                    }
                                });
                            }
                        });
                    });
                }
            });
        });

        for action in actions {
            self.apply_board_action(action);
        }
    }

    /// Applies one deferred board mutation. The board is the single writer
    /// of persisted fill state; trackers only ever hand back replacements.
    fn apply_board_action(&mut self, action: BoardAction) {
        match action {
            BoardAction::Commit(id, next) => {
                if let Some(clock) = self.board.get_mut(id) {
                    debug!(
                        "clock {:?} committed {} / {}",
                        clock.name,
                        filled_count(&next),
                        clock.sections
                    );
                    clock.set_fill(next);
                }
            }
            BoardAction::Advance(id) => {
                if let Some(clock) = self.board.get_mut(id) {
                    clock.set_fill(advance(&clock.fill, clock.sections));
                }
            }
            BoardAction::Retreat(id) => {
                if let Some(clock) = self.board.get_mut(id) {
                    clock.set_fill(retreat(&clock.fill, clock.sections));
                }
            }
            BoardAction::Reset(id) => {
                if self.board.reset(id) {
                    debug!("clock {id} reset");
                }
            }
            BoardAction::Remove(id) => {
                if self.board.remove_clock(id) {
                    self.prune_interactions();
                }
            }
        }
    }
}
