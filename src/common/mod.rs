//! Shared boundary utilities around the planning core.
//!
//! - `scene`: deployment scene loading and validation

pub mod scene;

pub use scene::{DeploymentScene, SceneLoadError, load_scene, validate_scene};
