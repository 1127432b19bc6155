//! Type definitions for the frequency reuse planner.
//!
//! Contains the data structures shared across the planning passes:
//! - Tower records and their 2D positions
//! - Network configuration (reuse factor, frequency pool, capacity)
//! - The tower registry (`CellularNetwork`)
//! - The planner error type

use serde::Deserialize;

/// Default ceiling on the tower registry when a scene does not override it.
/// A soft configuration bound, not a domain invariant: real deployments in
/// this tool stay in the tens-to-hundreds range.
pub const DEFAULT_MAX_TOWERS: usize = 1024;

/// Simple 2D point in area coordinates (meters).
#[derive(Debug, Deserialize, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

/// A single cell tower.
///
/// `frequency` and `cluster_id` stay `None` from insertion until the
/// corresponding assignment pass has run. A tower added after an assignment
/// pass therefore carries unset fields until the caller re-runs the pass;
/// the interference detector rejects such networks instead of silently
/// checking stale data.
#[derive(Debug, Clone, PartialEq)]
pub struct Tower {
    /// Dense id, equal to the tower's insertion index. Never reused.
    pub id: u32,
    pub position: Point,
    /// Assigned channel index in `[0, frequency_pool_size)`, once set.
    pub frequency: Option<u32>,
    /// Reuse cluster label in `[0, reuse_factor)`, once set.
    pub cluster_id: Option<u32>,
}

/// Static configuration of a cellular network.
#[derive(Debug, Clone, Copy)]
pub struct NetworkConfig {
    /// Reuse factor K: the number of distinct reuse clusters
    /// (typically 1, 3, 4, 7, 9 or 12).
    pub reuse_factor: u32,
    /// Number of available channel frequencies `[0, frequency_pool_size)`.
    pub frequency_pool_size: u32,
    /// Maximum number of towers the registry accepts.
    pub max_towers: usize,
}

impl NetworkConfig {
    /// Configuration with the default capacity ceiling.
    pub fn new(reuse_factor: u32, frequency_pool_size: u32) -> Self {
        Self {
            reuse_factor,
            frequency_pool_size,
            max_towers: DEFAULT_MAX_TOWERS,
        }
    }
}

/// Error type for planner operations.
///
/// Every variant is terminal to the call that raised it: all operations are
/// pure and deterministic, so the caller corrects the input and re-invokes.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanError {
    /// Non-positive reuse factor, frequency pool size, or capacity at
    /// network creation.
    InvalidConfiguration(String),
    /// `add_tower` called on a registry already holding `max_towers` towers.
    /// The registry is unchanged.
    CapacityExceeded { limit: usize },
    /// An interference check was attempted on towers without assigned
    /// frequencies.
    PreconditionViolation(String),
}

impl std::fmt::Display for PlanError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PlanError::InvalidConfiguration(msg) => write!(f, "Invalid configuration: {}", msg),
            PlanError::CapacityExceeded { limit } => write!(f, "Tower capacity exceeded: registry is limited to {} towers", limit),
            PlanError::PreconditionViolation(msg) => write!(f, "Precondition violation: {}", msg),
        }
    }
}

impl std::error::Error for PlanError {}

/// The tower registry: configuration plus the ordered tower collection.
///
/// Towers are appended one at a time and never removed or repositioned;
/// insertion order defines the dense id sequence `0..len`.
#[derive(Debug, Clone)]
pub struct CellularNetwork {
    config: NetworkConfig,
    towers: Vec<Tower>,
}

impl CellularNetwork {
    /// Create an empty network with the given configuration.
    ///
    /// # Returns
    ///
    /// `InvalidConfiguration` if the reuse factor, frequency pool size, or
    /// capacity is zero.
    pub fn new(config: NetworkConfig) -> Result<Self, PlanError> {
        if config.reuse_factor == 0 {
            return Err(PlanError::InvalidConfiguration("reuse_factor must be at least 1".to_string()));
        }
        if config.frequency_pool_size == 0 {
            return Err(PlanError::InvalidConfiguration("frequency_pool_size must be at least 1".to_string()));
        }
        if config.max_towers == 0 {
            return Err(PlanError::InvalidConfiguration("max_towers must be at least 1".to_string()));
        }
        Ok(Self {
            config,
            towers: Vec::new(),
        })
    }

    /// Append a tower at `(x, y)` with the next sequential id and unset
    /// frequency/cluster fields.
    ///
    /// # Returns
    ///
    /// The new tower's id, or `CapacityExceeded` if the registry is full
    /// (the registry is left unchanged).
    pub fn add_tower(&mut self, x: f64, y: f64) -> Result<u32, PlanError> {
        if self.towers.len() >= self.config.max_towers {
            return Err(PlanError::CapacityExceeded {
                limit: self.config.max_towers,
            });
        }
        let id = self.towers.len() as u32;
        self.towers.push(Tower {
            id,
            position: Point { x, y },
            frequency: None,
            cluster_id: None,
        });
        Ok(id)
    }

    /// Append one tower per supplied position, stopping at the first
    /// capacity rejection. Returns the number of towers added.
    pub fn deploy(&mut self, positions: impl IntoIterator<Item = Point>) -> Result<usize, PlanError> {
        let mut added = 0;
        for p in positions {
            self.add_tower(p.x, p.y)?;
            added += 1;
        }
        Ok(added)
    }

    pub fn towers(&self) -> &[Tower] {
        &self.towers
    }

    pub(crate) fn towers_mut(&mut self) -> &mut [Tower] {
        &mut self.towers
    }

    pub fn config(&self) -> &NetworkConfig {
        &self.config
    }

    pub fn len(&self) -> usize {
        self.towers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.towers.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> NetworkConfig {
        NetworkConfig {
            reuse_factor: 3,
            frequency_pool_size: 5,
            max_towers: 4,
        }
    }

    #[test]
    fn new_rejects_non_positive_parameters() {
        let err = CellularNetwork::new(NetworkConfig::new(0, 5)).unwrap_err();
        assert!(matches!(err, PlanError::InvalidConfiguration(_)));

        let err = CellularNetwork::new(NetworkConfig::new(3, 0)).unwrap_err();
        assert!(matches!(err, PlanError::InvalidConfiguration(_)));

        let config = NetworkConfig {
            reuse_factor: 3,
            frequency_pool_size: 5,
            max_towers: 0,
        };
        let err = CellularNetwork::new(config).unwrap_err();
        assert!(matches!(err, PlanError::InvalidConfiguration(_)));
    }

    #[test]
    fn add_tower_assigns_dense_sequential_ids() {
        let mut network = CellularNetwork::new(small_config()).unwrap();
        assert_eq!(network.add_tower(0.0, 0.0).unwrap(), 0);
        assert_eq!(network.add_tower(10.0, 20.0).unwrap(), 1);
        assert_eq!(network.add_tower(-5.0, 3.5).unwrap(), 2);

        for (idx, tower) in network.towers().iter().enumerate() {
            assert_eq!(tower.id as usize, idx);
            assert_eq!(tower.frequency, None);
            assert_eq!(tower.cluster_id, None);
        }
    }

    #[test]
    fn add_tower_past_capacity_is_rejected_without_change() {
        let mut network = CellularNetwork::new(small_config()).unwrap();
        for _ in 0..4 {
            network.add_tower(1.0, 1.0).unwrap();
        }
        let err = network.add_tower(2.0, 2.0).unwrap_err();
        assert_eq!(err, PlanError::CapacityExceeded { limit: 4 });
        assert_eq!(network.len(), 4);
    }

    #[test]
    fn deploy_counts_added_towers_and_propagates_capacity() {
        let mut network = CellularNetwork::new(small_config()).unwrap();
        let positions = vec![
            Point { x: 0.0, y: 0.0 },
            Point { x: 1.0, y: 1.0 },
            Point { x: 2.0, y: 2.0 },
        ];
        assert_eq!(network.deploy(positions).unwrap(), 3);

        let too_many = vec![Point { x: 3.0, y: 3.0 }, Point { x: 4.0, y: 4.0 }];
        let err = network.deploy(too_many).unwrap_err();
        assert_eq!(err, PlanError::CapacityExceeded { limit: 4 });
        // The tower that fit before the rejection stays.
        assert_eq!(network.len(), 4);
    }
}
