//! Co-channel interference detection.
//!
//! Two towers interfere when they share a channel frequency and sit closer
//! together than the minimum safe separation. The exhaustive O(n²) pair scan
//! is intentional: problem sizes here are bounded by the registry capacity,
//! so no spatial index is warranted.

use log::info;

use super::geometry::distance;
use super::types::{CellularNetwork, PlanError, Tower};

/// Check a single tower pair for co-channel interference.
///
/// # Returns
///
/// `true` iff both towers use the same frequency and their separation is
/// strictly below `min_distance`. `PreconditionViolation` if either tower
/// has no assigned frequency (the frequency assignment pass has not covered
/// it yet).
pub fn pair_interferes(a: &Tower, b: &Tower, min_distance: f64) -> Result<bool, PlanError> {
    let freq_a = assigned_frequency(a)?;
    let freq_b = assigned_frequency(b)?;
    Ok(freq_a == freq_b && distance(&a.position, &b.position) < min_distance)
}

/// Scan every unordered pair of distinct towers for interference.
///
/// Pairs are reported once each as `(id_a, id_b)` with `id_a < id_b`, in
/// ascending order. An interference-free network yields an empty vec, not an
/// error.
///
/// # Returns
///
/// `PreconditionViolation` before producing any partial result if any tower
/// lacks an assigned frequency, including towers added after the last
/// assignment pass.
pub fn find_all_interference(network: &CellularNetwork, min_distance: f64) -> Result<Vec<(u32, u32)>, PlanError> {
    let towers = network.towers();
    // Validate the whole collection up front so the scan below cannot stop
    // halfway through with a partial pair list.
    for tower in towers {
        assigned_frequency(tower)?;
    }

    let mut pairs = Vec::new();
    for i in 0..towers.len() {
        for j in (i + 1)..towers.len() {
            if pair_interferes(&towers[i], &towers[j], min_distance)? {
                pairs.push((towers[i].id, towers[j].id));
            }
        }
    }
    info!(
        "Interference scan over {} towers (min distance {:.1}): {} conflicting pair(s)",
        towers.len(),
        min_distance,
        pairs.len()
    );
    Ok(pairs)
}

fn assigned_frequency(tower: &Tower) -> Result<u32, PlanError> {
    tower.frequency.ok_or_else(|| {
        PlanError::PreconditionViolation(format!(
            "tower {} has no assigned frequency; run frequency assignment first",
            tower.id
        ))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::assignment::assign_frequencies;
    use crate::planner::types::NetworkConfig;

    fn planned_network(reuse_factor: u32, pool_size: u32, positions: &[(f64, f64)]) -> CellularNetwork {
        let mut network = CellularNetwork::new(NetworkConfig::new(reuse_factor, pool_size)).unwrap();
        for &(x, y) in positions {
            network.add_tower(x, y).unwrap();
        }
        assign_frequencies(&mut network);
        network
    }

    #[test]
    fn distinct_frequencies_never_interfere() {
        // K=3, pool=5, two coincident towers land in different clusters and
        // therefore on different channels.
        let network = planned_network(3, 5, &[(0.0, 0.0), (0.0, 0.0), (100.0, 100.0)]);
        let clusters: Vec<u32> = network.towers().iter().map(|t| t.cluster_id.unwrap()).collect();
        let frequencies: Vec<u32> = network.towers().iter().map(|t| t.frequency.unwrap()).collect();
        assert_eq!(clusters, vec![0, 1, 2]);
        assert_eq!(frequencies, vec![0, 1, 2]);

        assert_eq!(find_all_interference(&network, 1.0).unwrap(), vec![]);
    }

    #[test]
    fn collapsed_pool_reports_every_close_pair() {
        // K=2 with a single channel: all four coincident towers collide.
        let network = planned_network(2, 1, &[(0.0, 0.0); 4]);
        let pairs = find_all_interference(&network, 0.5).unwrap();
        assert_eq!(pairs, vec![(0, 1), (0, 2), (0, 3), (1, 2), (1, 3), (2, 3)]);
    }

    #[test]
    fn pairs_are_canonical_and_never_self() {
        let network = planned_network(1, 1, &[(0.0, 0.0), (1.0, 0.0), (2.0, 0.0), (3.0, 0.0)]);
        let pairs = find_all_interference(&network, 10.0).unwrap();
        for window in pairs.windows(2) {
            assert!(window[0] < window[1], "pairs must be in ascending order");
        }
        for (a, b) in pairs {
            assert!(a < b);
        }
    }

    #[test]
    fn interference_set_grows_with_min_distance() {
        let network = planned_network(1, 1, &[(0.0, 0.0), (5.0, 0.0), (50.0, 0.0)]);
        let near = find_all_interference(&network, 6.0).unwrap();
        let far = find_all_interference(&network, 100.0).unwrap();
        assert_eq!(near, vec![(0, 1)]);
        for pair in &near {
            assert!(far.contains(pair), "smaller radius must yield a subset");
        }
        assert_eq!(far.len(), 3);
    }

    #[test]
    fn separation_at_exactly_min_distance_is_clean() {
        // The rule is strict: distance < min_distance.
        let network = planned_network(1, 1, &[(0.0, 0.0), (10.0, 0.0)]);
        assert_eq!(find_all_interference(&network, 10.0).unwrap(), vec![]);
        assert_eq!(find_all_interference(&network, 10.01).unwrap(), vec![(0, 1)]);
    }

    #[test]
    fn scan_before_assignment_is_a_precondition_violation() {
        let mut network = CellularNetwork::new(NetworkConfig::new(3, 5)).unwrap();
        network.add_tower(0.0, 0.0).unwrap();
        network.add_tower(1.0, 1.0).unwrap();
        let err = find_all_interference(&network, 5.0).unwrap_err();
        assert!(matches!(err, PlanError::PreconditionViolation(_)));
    }

    #[test]
    fn tower_added_after_assignment_invalidates_the_scan() {
        let mut network = planned_network(2, 2, &[(0.0, 0.0), (1.0, 1.0)]);
        network.add_tower(2.0, 2.0).unwrap();
        let err = find_all_interference(&network, 5.0).unwrap_err();
        assert!(matches!(err, PlanError::PreconditionViolation(_)));
        // Explicit re-run restores a checkable state.
        assign_frequencies(&mut network);
        assert!(find_all_interference(&network, 5.0).is_ok());
    }

    #[test]
    fn pair_check_requires_both_frequencies() {
        let network = planned_network(1, 1, &[(0.0, 0.0)]);
        let assigned = network.towers()[0].clone();
        let unassigned = Tower {
            id: 99,
            position: crate::planner::types::Point { x: 0.0, y: 0.0 },
            frequency: None,
            cluster_id: None,
        };
        assert!(pair_interferes(&assigned, &unassigned, 1.0).is_err());
        assert!(pair_interferes(&unassigned, &assigned, 1.0).is_err());
    }

    #[test]
    fn empty_network_scan_is_empty() {
        let network = CellularNetwork::new(NetworkConfig::new(3, 5)).unwrap();
        assert_eq!(find_all_interference(&network, 10.0).unwrap(), vec![]);
    }
}
