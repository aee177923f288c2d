use super::*;
use crate::tracker::{ClockInteraction, ClockTracker, ForcedTouch};
use crate::types::cleared;
use eframe::egui;

/// Where the tracker is placed in every headless frame.
const TRACKER_POS: egui::Pos2 = egui::pos2(100.0, 100.0);
/// Tracker diameter used in tests: center (140, 140), radius 40.
const DIAMETER: f32 = 80.0;

/// Run a single headless egui frame showing one tracker and return the
/// commit it produced, if any.
fn tracker_frame(
    ctx: &egui::Context,
    events: Vec<egui::Event>,
    sections: usize,
    fill: &[bool],
    interaction: &mut ClockInteraction,
    read_only: bool,
    touch: bool,
) -> Option<Vec<bool>> {
    let mut raw = egui::RawInput::default();
    raw.screen_rect = Some(egui::Rect::from_min_size(
        egui::Pos2::ZERO,
        egui::vec2(800.0, 600.0),
    ));
    raw.events = events;

    let mut commit = None;
    let _ = ctx.run(raw, |ctx| {
        ctx.set_visuals(egui::Visuals::dark());
        egui::Area::new(egui::Id::new("tracker_under_test"))
            .fixed_pos(TRACKER_POS)
            .show(ctx, |ui| {
                let output = ClockTracker::new(sections, fill, DIAMETER)
                    .read_only(read_only)
                    .show(ui, interaction, &ForcedTouch(touch));
                commit = output.commit;
            });
    });
    commit
}

/// A point inside a given quadrant wedge of the 4-section test tracker.
fn wedge_point(index: usize) -> egui::Pos2 {
    let center = egui::pos2(
        TRACKER_POS.x + DIAMETER / 2.0,
        TRACKER_POS.y + DIAMETER / 2.0,
    );
    let (start, end) = crate::geometry::wedge_angles(4, index);
    crate::geometry::polar_to_cartesian(center, 25.0, (start + end) / 2.0)
}

fn press_at(pos: egui::Pos2) -> Vec<egui::Event> {
    vec![
        egui::Event::PointerMoved(pos),
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: true,
            modifiers: egui::Modifiers::NONE,
        },
    ]
}

fn release_at(pos: egui::Pos2) -> Vec<egui::Event> {
    vec![
        egui::Event::PointerMoved(pos),
        egui::Event::PointerButton {
            pos,
            button: egui::PointerButton::Primary,
            pressed: false,
            modifiers: egui::Modifiers::NONE,
        },
    ]
}

#[test]
fn pressing_a_wedge_commits_the_toggle() {
    let ctx = egui::Context::default();
    let mut interaction = ClockInteraction::new();
    let fill = cleared(4);

    // Establish hover, then press on wedge 1.
    let target = wedge_point(1);
    let none = tracker_frame(
        &ctx,
        vec![egui::Event::PointerMoved(target)],
        4,
        &fill,
        &mut interaction,
        false,
        false,
    );
    assert!(none.is_none());

    let commit = tracker_frame(
        &ctx,
        press_at(target),
        4,
        &fill,
        &mut interaction,
        false,
        false,
    );
    assert_eq!(commit, Some(vec![true, true, false, false]));
}

#[test]
fn drag_paints_to_the_last_entered_wedge() {
    let ctx = egui::Context::default();
    let mut interaction = ClockInteraction::new();
    let mut fill = cleared(4);

    fill = tracker_frame(
        &ctx,
        press_at(wedge_point(1)),
        4,
        &fill,
        &mut interaction,
        false,
        false,
    )
    .expect("press should commit");
    assert_eq!(fill, vec![true, true, false, false]);

    // Drag into wedge 3 while the button stays down.
    fill = tracker_frame(
        &ctx,
        vec![egui::Event::PointerMoved(wedge_point(3))],
        4,
        &fill,
        &mut interaction,
        false,
        false,
    )
    .expect("drag-enter should commit");
    assert_eq!(fill, vec![true, true, true, true]);
}

#[test]
fn release_outside_the_widget_ends_the_drag() {
    let ctx = egui::Context::default();
    let mut interaction = ClockInteraction::new();
    let mut fill = cleared(4);

    fill = tracker_frame(
        &ctx,
        press_at(wedge_point(0)),
        4,
        &fill,
        &mut interaction,
        false,
        false,
    )
    .expect("press should commit");

    // Drag far off the widget and release there: the global release must
    // still clear the press flag.
    let off_widget = egui::pos2(500.0, 500.0);
    let none = tracker_frame(
        &ctx,
        release_at(off_widget),
        4,
        &fill,
        &mut interaction,
        false,
        false,
    );
    assert!(none.is_none());
    assert!(!interaction.is_pressing);

    // Hovering back over the tracker without a press changes nothing.
    let none = tracker_frame(
        &ctx,
        vec![egui::Event::PointerMoved(wedge_point(3))],
        4,
        &fill,
        &mut interaction,
        false,
        false,
    );
    assert!(none.is_none());
}

#[test]
fn read_only_tracker_ignores_every_gesture() {
    let ctx = egui::Context::default();
    let mut interaction = ClockInteraction::new();
    let fill = vec![true, true, false, false];

    let frames: Vec<Vec<egui::Event>> = vec![
        vec![egui::Event::PointerMoved(wedge_point(0))],
        press_at(wedge_point(0)),
        vec![egui::Event::PointerMoved(wedge_point(3))],
        release_at(wedge_point(3)),
        vec![egui::Event::PointerButton {
            pos: wedge_point(1),
            button: egui::PointerButton::Secondary,
            pressed: true,
            modifiers: egui::Modifiers::NONE,
        }],
        vec![egui::Event::PointerButton {
            pos: wedge_point(1),
            button: egui::PointerButton::Secondary,
            pressed: false,
            modifiers: egui::Modifiers::NONE,
        }],
    ];

    for events in frames {
        let commit = tracker_frame(&ctx, events, 4, &fill, &mut interaction, true, false);
        assert!(commit.is_none());
    }
    assert!(!interaction.is_pressing);
    assert_eq!(interaction.hovered, None);
}

#[test]
fn touch_commits_only_when_lifted_on_the_same_wedge() {
    let ctx = egui::Context::default();
    let mut interaction = ClockInteraction::new();
    let fill = cleared(4);

    // Tap wedge 2: press and lift on the same wedge commits.
    let none = tracker_frame(
        &ctx,
        press_at(wedge_point(2)),
        4,
        &fill,
        &mut interaction,
        false,
        true,
    );
    assert!(none.is_none(), "touch must not commit on press");
    assert_eq!(interaction.active_touch, Some(2));

    let commit = tracker_frame(
        &ctx,
        release_at(wedge_point(2)),
        4,
        &fill,
        &mut interaction,
        false,
        true,
    );
    assert_eq!(commit, Some(vec![true, true, true, false]));

    // Start on wedge 2 but lift on wedge 3: discarded.
    let _ = tracker_frame(
        &ctx,
        press_at(wedge_point(2)),
        4,
        &fill,
        &mut interaction,
        false,
        true,
    );
    let commit = tracker_frame(
        &ctx,
        release_at(wedge_point(3)),
        4,
        &fill,
        &mut interaction,
        false,
        true,
    );
    assert!(commit.is_none());
    assert_eq!(interaction.active_touch, None);
}

#[test]
fn right_click_resets_to_all_empty_once() {
    let ctx = egui::Context::default();
    let mut interaction = ClockInteraction::new();
    let fill = vec![true, true, true, false];

    let target = wedge_point(1);
    let none = tracker_frame(
        &ctx,
        vec![
            egui::Event::PointerMoved(target),
            egui::Event::PointerButton {
                pos: target,
                button: egui::PointerButton::Secondary,
                pressed: true,
                modifiers: egui::Modifiers::NONE,
            },
        ],
        4,
        &fill,
        &mut interaction,
        false,
        false,
    );
    assert!(none.is_none(), "reset fires on release, not press");

    let commit = tracker_frame(
        &ctx,
        vec![egui::Event::PointerButton {
            pos: target,
            button: egui::PointerButton::Secondary,
            pressed: false,
            modifiers: egui::Modifiers::NONE,
        }],
        4,
        &fill,
        &mut interaction,
        false,
        false,
    );
    assert_eq!(commit, Some(vec![false; 4]));

    // A quiet follow-up frame produces no second commit.
    let none = tracker_frame(&ctx, vec![], 4, &cleared(4), &mut interaction, false, false);
    assert!(none.is_none());
}

#[test]
fn reset_hook_replaces_the_internal_clear() {
    let ctx = egui::Context::default();
    let mut interaction = ClockInteraction::new();
    let fill = vec![true, false, false, false];
    let target = wedge_point(0);

    let mut hook_fired = false;
    let mut commit = None;

    // Press frame, then release frame where the hook should fire.
    for pressed in [true, false] {
        let mut raw = egui::RawInput::default();
        raw.screen_rect = Some(egui::Rect::from_min_size(
            egui::Pos2::ZERO,
            egui::vec2(800.0, 600.0),
        ));
        raw.events = vec![
            egui::Event::PointerMoved(target),
            egui::Event::PointerButton {
                pos: target,
                button: egui::PointerButton::Secondary,
                pressed,
                modifiers: egui::Modifiers::NONE,
            },
        ];
        let _ = ctx.run(raw, |ctx| {
            egui::Area::new(egui::Id::new("tracker_under_test"))
                .fixed_pos(TRACKER_POS)
                .show(ctx, |ui| {
                    let output = ClockTracker::new(4, &fill, DIAMETER)
                        .on_reset(|| hook_fired = true)
                        .show(ui, &mut interaction, &ForcedTouch(false));
                    commit = output.commit;
                });
        });
    }

    assert!(hook_fired);
    assert!(commit.is_none(), "hook suppresses the fallback clear");
}

#[test]
fn add_clock_from_form_auto_names_and_clamps() {
    let mut app = ClockApp::default();
    app.new_clock.sections = 999;

    let id = app.add_clock_from_form();
    let clock = app.board.get(id).unwrap();
    assert_eq!(clock.name, "Clock 1");
    assert_eq!(clock.sections, crate::constants::MAX_SECTIONS);

    app.new_clock.name = "  Doom  ".to_string();
    app.new_clock.sections = 6;
    let id = app.add_clock_from_form();
    assert_eq!(app.board.get(id).unwrap().name, "Doom");
    assert!(app.new_clock.name.is_empty());
}

#[test]
fn board_actions_apply_through_single_writer() {
    let mut app = ClockApp::default();
    app.new_clock.sections = 4;
    let id = app.add_clock_from_form();

    app.apply_board_action(BoardAction::Commit(id, vec![true, true, false, false]));
    assert_eq!(app.board.get(id).unwrap().filled_count(), 2);

    app.apply_board_action(BoardAction::Advance(id));
    assert_eq!(app.board.get(id).unwrap().filled_count(), 3);

    app.apply_board_action(BoardAction::Retreat(id));
    assert_eq!(app.board.get(id).unwrap().filled_count(), 2);

    app.apply_board_action(BoardAction::Reset(id));
    assert_eq!(app.board.get(id).unwrap().filled_count(), 0);

    app.interaction_for(id);
    app.apply_board_action(BoardAction::Remove(id));
    assert!(app.board.get(id).is_none());
    assert!(app.interactions.is_empty());
}

#[test]
fn commit_with_wrong_length_is_normalized() {
    let mut app = ClockApp::default();
    app.new_clock.sections = 4;
    let id = app.add_clock_from_form();

    app.apply_board_action(BoardAction::Commit(id, vec![true, true]));
    assert_eq!(
        app.board.get(id).unwrap().fill,
        vec![true, true, false, false]
    );
}
