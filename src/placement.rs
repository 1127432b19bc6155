//! Tower position generation strategies.
//!
//! The planning core is agnostic about where tower coordinates come from: it
//! consumes plain `Point` sequences. This module supplies the random
//! strategy used for generated deployments; tests feed literal coordinates
//! instead.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::planner::types::Point;

/// Generate `count` positions uniformly distributed over a
/// `width` x `height` area.
///
/// A supplied seed makes the deployment reproducible run to run; without one
/// the generator is seeded from entropy.
///
/// # Parameters
///
/// * `width` - Area width in meters (positive)
/// * `height` - Area height in meters (positive)
/// * `count` - Number of positions to generate
/// * `seed` - Optional seed for reproducibility
pub fn uniform_positions(width: f64, height: f64, count: usize, seed: Option<u64>) -> Vec<Point> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };
    (0..count)
        .map(|_| Point {
            x: rng.gen_range(0.0..=width),
            y: rng.gen_range(0.0..=height),
        })
        .collect()
}
