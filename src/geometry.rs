//! Wedge geometry for the radial clock tracker.
//!
//! Pure functions mapping `(sections, diameter)` to wedge boundary
//! polygons. Angle 0 points at 12 o'clock and angles grow clockwise, so
//! wedge 0 is the slice immediately right of the top. Everything here is
//! cheap enough to recompute every frame; nothing is cached.

use eframe::egui;

/// Maximum angular step (in degrees) used when tessellating an arc into
/// line segments. egui paints polygons, not SVG arcs, so the rim of each
/// wedge is approximated with short chords.
const MAX_ARC_STEP_DEGREES: f32 = 6.0;

/// Converts a polar coordinate to screen space.
///
/// The -90 degree offset rotates the zero-angle reference from the
/// conventional 3-o'clock position to 12 o'clock. Screen y grows
/// downwards, which together with this offset makes positive angles run
/// clockwise.
pub fn polar_to_cartesian(center: egui::Pos2, radius: f32, angle_degrees: f32) -> egui::Pos2 {
    let angle_radians = (angle_degrees - 90.0).to_radians();
    egui::pos2(
        center.x + radius * angle_radians.cos(),
        center.y + radius * angle_radians.sin(),
    )
}

/// Angular sweep of one wedge, in degrees.
pub fn wedge_sweep(sections: usize) -> f32 {
    if sections == 0 {
        return 0.0;
    }
    360.0 / sections as f32
}

/// Start and end angle of wedge `index`, clockwise from the top.
pub fn wedge_angles(sections: usize, index: usize) -> (f32, f32) {
    let sweep = wedge_sweep(sections);
    (sweep * index as f32, sweep * (index as f32 + 1.0))
}

/// Computes the boundary polygon of wedge `index`.
///
/// The polygon runs center, rim point at the start angle, tessellated arc
/// to the end angle, and closes back to the center implicitly. A single
/// section spans the whole circle; in that case the center point is
/// omitted so the outline is the full disc rather than a degenerate fan
/// with a seam. Returns an empty polygon for zero sections or a
/// non-positive diameter.
pub fn wedge_outline(
    center: egui::Pos2,
    diameter: f32,
    sections: usize,
    index: usize,
) -> Vec<egui::Pos2> {
    if sections == 0 || diameter <= 0.0 || index >= sections {
        return Vec::new();
    }

    let radius = diameter / 2.0;
    let (start_angle, end_angle) = wedge_angles(sections, index);
    let sweep = end_angle - start_angle;
    let full_circle = sweep >= 360.0 - f32::EPSILON;

    let mut points = Vec::new();
    if !full_circle {
        points.push(center);
    }

    let steps = (sweep / MAX_ARC_STEP_DEGREES).ceil().max(1.0) as usize;
    for step in 0..=steps {
        let angle = start_angle + sweep * (step as f32 / steps as f32);
        points.push(polar_to_cartesian(center, radius, angle));
    }

    if full_circle {
        // First and last rim point coincide at the top; drop the duplicate.
        points.pop();
    }

    points
}

/// Finds the wedge under the given position, if any.
///
/// Inverse of the outline math: positions outside the circle miss, and
/// positions inside map to the wedge whose angular span contains the
/// clockwise-from-top angle of the position.
pub fn wedge_at(
    center: egui::Pos2,
    radius: f32,
    sections: usize,
    pos: egui::Pos2,
) -> Option<usize> {
    if sections == 0 || radius <= 0.0 {
        return None;
    }
    let offset = pos - center;
    if offset.length() > radius {
        return None;
    }

    // atan2 over (x, -y) measures clockwise from the up direction in
    // screen space.
    let mut angle = offset.x.atan2(-offset.y).to_degrees();
    if angle < 0.0 {
        angle += 360.0;
    }

    let index = (angle / wedge_sweep(sections)).floor() as usize;
    Some(index.min(sections - 1))
}
