//! Deployment scene loading, parsing, and validation.
//!
//! A scene file describes everything the planner needs for one run: the
//! geographical area, the reuse configuration, and where the towers go
//! (explicit coordinates or a count for random placement). Loading follows
//! read → parse → validate, and formatting/prompting concerns stay out of
//! the planning core entirely.

use anyhow::Context;
use serde::Deserialize;
use std::fs;

use crate::planner::types::{DEFAULT_MAX_TOWERS, Point};

/// Error type for scene loading failures.
#[derive(Debug)]
pub enum SceneLoadError {
    FileReadError(String),
    ParseError(String),
    ValidationError(String),
}

impl std::fmt::Display for SceneLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SceneLoadError::FileReadError(msg) => write!(f, "Failed to read file: {}", msg),
            SceneLoadError::ParseError(msg) => write!(f, "Failed to parse JSON: {}", msg),
            SceneLoadError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
        }
    }
}

impl std::error::Error for SceneLoadError {}

/// Root structure describing a single planning run.
#[derive(Deserialize)]
pub struct DeploymentScene {
    /// Width of the geographical area in meters.
    pub area_width: f64,
    /// Height of the geographical area in meters.
    pub area_height: f64,
    /// Reuse factor K (typically 1, 3, 4, 7, 9 or 12).
    pub reuse_factor: u32,
    /// Number of available channel frequencies.
    pub frequency_pool_size: u32,
    /// Number of towers to place uniformly at random. Mutually exclusive
    /// with `towers`.
    #[serde(default)]
    pub tower_count: Option<usize>,
    /// Seed for reproducible random placement. Entropy-seeded when absent.
    #[serde(default)]
    pub seed: Option<u64>,
    /// Explicit tower positions. Mutually exclusive with `tower_count`.
    #[serde(default)]
    pub towers: Option<Vec<Point>>,
    /// Minimum safe separation for the interference check. When absent, the
    /// conventional heuristic `sqrt(area / count) * 0.5` is used.
    #[serde(default)]
    pub min_distance: Option<f64>,
    /// Override for the tower registry capacity.
    #[serde(default)]
    pub max_towers: Option<usize>,
}

impl DeploymentScene {
    /// Registry capacity for this scene.
    pub fn capacity(&self) -> usize {
        self.max_towers.unwrap_or(DEFAULT_MAX_TOWERS)
    }

    /// Number of towers this scene deploys.
    pub fn deployed_count(&self) -> usize {
        match (&self.towers, self.tower_count) {
            (Some(towers), _) => towers.len(),
            (None, Some(count)) => count,
            (None, None) => 0,
        }
    }

    /// Minimum separation distance for the interference check.
    ///
    /// This is a caller-side heuristic, not part of the detector: the scene's
    /// explicit `min_distance` when present, otherwise
    /// `sqrt(area_width * area_height / tower_count) * 0.5`. An empty
    /// deployment yields 0.0 (there are no pairs to check anyway).
    pub fn interference_min_distance(&self) -> f64 {
        if let Some(min_distance) = self.min_distance {
            return min_distance;
        }
        let count = self.deployed_count();
        if count == 0 {
            return 0.0;
        }
        (self.area_width * self.area_height / count as f64).sqrt() * 0.5
    }
}

/// Load and parse a deployment scene from a file.
///
/// # Parameters
///
/// * `path` - Path to the scene JSON file
///
/// # Returns
///
/// Parsed and validated scene or an error.
pub fn load_scene(path: &str) -> Result<DeploymentScene, SceneLoadError> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("Failed to read file: {}", path))
        .map_err(|e| SceneLoadError::FileReadError(e.to_string()))?;

    let scene: DeploymentScene = serde_json::from_str(&data)
        .context("Invalid JSON format")
        .map_err(|e| SceneLoadError::ParseError(e.to_string()))?;

    validate_scene(&scene).map_err(SceneLoadError::ValidationError)?;

    Ok(scene)
}

/// Validate a deployment scene.
///
/// # Returns
///
/// `Ok(())` if validation passes, `Err(String)` with error description otherwise.
pub fn validate_scene(scene: &DeploymentScene) -> Result<(), String> {
    if !(scene.area_width.is_finite() && scene.area_width > 0.0) {
        return Err(format!("area_width {} must be a positive finite number", scene.area_width));
    }
    if !(scene.area_height.is_finite() && scene.area_height > 0.0) {
        return Err(format!("area_height {} must be a positive finite number", scene.area_height));
    }
    if scene.reuse_factor == 0 {
        return Err("reuse_factor must be at least 1".to_string());
    }
    if scene.frequency_pool_size == 0 {
        return Err("frequency_pool_size must be at least 1".to_string());
    }
    if scene.max_towers == Some(0) {
        return Err("max_towers must be at least 1".to_string());
    }

    match (&scene.towers, scene.tower_count) {
        (Some(_), Some(_)) => {
            return Err("Specify either explicit 'towers' or a 'tower_count', not both".to_string());
        }
        (None, None) => {
            return Err("Scene must specify explicit 'towers' or a 'tower_count'".to_string());
        }
        _ => {}
    }

    let count = scene.deployed_count();
    if count > scene.capacity() {
        return Err(format!("Tower count {} exceeds registry capacity of {}", count, scene.capacity()));
    }

    if let Some(towers) = &scene.towers {
        for (idx, position) in towers.iter().enumerate() {
            if !(position.x.is_finite() && position.y.is_finite()) {
                return Err(format!("Tower {} position ({}, {}) is not finite", idx, position.x, position.y));
            }
            if position.x < 0.0 || position.x > scene.area_width || position.y < 0.0 || position.y > scene.area_height {
                return Err(format!(
                    "Tower {} position ({}, {}) lies outside the {} x {} area",
                    idx, position.x, position.y, scene.area_width, scene.area_height
                ));
            }
        }
    }

    if let Some(min_distance) = scene.min_distance {
        if !(min_distance.is_finite() && min_distance > 0.0) {
            return Err(format!("min_distance {} must be a positive finite number", min_distance));
        }
    }

    Ok(())
}
