//! Frequency reuse planning core module.
//!
//! This module holds the algorithmic heart of the planner:
//! - Tower registry with bounded insertion
//! - Index-based reuse cluster partitioning
//! - Channel frequency assignment over a finite pool
//! - Exhaustive co-channel interference detection
//!
//! ## Module Organization
//!
//! - `types`: Core data structures (Tower, NetworkConfig, CellularNetwork, PlanError)
//! - `geometry`: Euclidean distance helpers
//! - `assignment`: Cluster and frequency batch passes
//! - `interference`: Pairwise co-channel interference scan
//!
//! A network moves through a simple lifecycle: empty, populated via
//! `add_tower`/`deploy`, clustered and frequency-assigned by the batch
//! passes, and only then interference-checkable. The passes may be re-run at
//! any time; the detector rejects networks containing towers the last pass
//! did not cover.

pub mod assignment;
pub mod geometry;
pub mod interference;
pub mod types;

// Re-export the operations making up the planning pipeline
pub use assignment::{assign_clusters, assign_frequencies};
pub use interference::{find_all_interference, pair_interferes};

// Re-export commonly used types
pub use types::{CellularNetwork, NetworkConfig, PlanError, Point, Tower};
