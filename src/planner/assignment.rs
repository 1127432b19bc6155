//! Cluster and frequency assignment passes.
//!
//! Both passes are deterministic batch passes over the whole tower
//! collection: given the same tower count and configuration they always
//! produce the same labels, and re-running them is idempotent.

use log::debug;

use super::types::CellularNetwork;

/// Partition all towers into `reuse_factor` clusters.
///
/// Sets `cluster_id = id % reuse_factor` for every tower. The partition is
/// index-based, not geometric: a simplified stand-in for a true
/// hexagonal-lattice reuse pattern that keeps "cluster count = K" decoupled
/// from spatial grouping.
pub fn assign_clusters(network: &mut CellularNetwork) {
    let reuse_factor = network.config().reuse_factor;
    for tower in network.towers_mut() {
        tower.cluster_id = Some(tower.id % reuse_factor);
    }
    debug!("Assigned {} towers to {} reuse clusters", network.len(), reuse_factor);
}

/// Assign a channel frequency to every tower.
///
/// Runs cluster assignment first, then sets
/// `frequency = cluster_id % frequency_pool_size`. When the pool is smaller
/// than the reuse factor, distinct clusters collapse onto the same channel;
/// that is allowed here and is exactly the condition the interference
/// detector exists to surface.
///
/// Towers added after this pass stay unassigned until it is re-run; the
/// interference detector rejects such networks rather than checking stale
/// labels.
pub fn assign_frequencies(network: &mut CellularNetwork) {
    assign_clusters(network);
    let pool_size = network.config().frequency_pool_size;
    for tower in network.towers_mut() {
        // cluster_id was just set for every tower by assign_clusters
        let cluster_id = tower.cluster_id.unwrap_or(0);
        tower.frequency = Some(cluster_id % pool_size);
    }
    debug!("Assigned frequencies from a pool of {} channels", pool_size);
}
