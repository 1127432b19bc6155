//! Geometry helpers for tower separation checks.
//!
//! Distance is the sole interference proxy in this planner, so the module
//! stays deliberately small: Euclidean distance plus its squared form for
//! comparisons that do not need the square root.

use super::types::Point;

/// Squared Euclidean distance in area units (avoids a sqrt when only
/// comparing separations).
pub fn distance2(a: &Point, b: &Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    dx * dx + dy * dy
}

/// Euclidean distance between two points.
///
/// Pure function with no error conditions; coordinates are finite reals in
/// this domain (the scene loader rejects anything else).
pub fn distance(a: &Point, b: &Point) -> f64 {
    distance2(a, b).sqrt()
}
