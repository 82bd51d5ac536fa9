//! Geometry helpers shared by the drawing and canvas modules.

use serde::{Deserialize, Serialize};

/// A surface-local coordinate in logical units.
///
/// Callers are responsible for translating raw pointer/device coordinates
/// (including any device-pixel-ratio correction) before handing points to the
/// engine; the engine itself only ever sees logical surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Creates a point from logical surface coordinates.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point.
    ///
    /// Used to derive the circle tool's radius from the drag extent.
    pub fn distance_to(&self, other: Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }
}

/// Calculates the two arrowhead wing points for an arrow shaft.
///
/// The head sits at the shaft's endpoint `(tip)` and opens back toward
/// `tail`. Each wing is exactly `length` units long and deviates from the
/// reverse shaft direction by `angle_degrees`. Unlike screen-annotation
/// arrowheads, the length is never shortened for short shafts; the diagnosis
/// form relies on a consistent head size across the diagram.
///
/// # Arguments
/// * `tail` - Shaft start point (the gesture anchor)
/// * `tip` - Shaft end point, where the head is drawn
/// * `length` - Wing length in surface units
/// * `angle_degrees` - Angle between each wing and the shaft
///
/// # Returns
/// `[left, right]` wing endpoints. If the shaft is shorter than one surface
/// unit, both wings collapse onto the tip (degenerate arrow, drawn as a dot).
pub fn arrowhead_points(tail: Point, tip: Point, length: f64, angle_degrees: f64) -> [Point; 2] {
    let dx = tip.x - tail.x;
    let dy = tip.y - tail.y;
    let shaft_length = (dx * dx + dy * dy).sqrt();

    if shaft_length < 1.0 {
        return [tip, tip];
    }

    // Unit vector pointing from tail to tip
    let ux = dx / shaft_length;
    let uy = dy / shaft_length;

    let angle = angle_degrees.to_radians();
    let cos_a = angle.cos();
    let sin_a = angle.sin();

    let left = Point::new(
        tip.x - length * (ux * cos_a - uy * sin_a),
        tip.y - length * (uy * cos_a + ux * sin_a),
    );
    let right = Point::new(
        tip.x - length * (ux * cos_a + uy * sin_a),
        tip.y - length * (uy * cos_a - ux * sin_a),
    );

    [left, right]
}
