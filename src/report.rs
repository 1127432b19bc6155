//! Human-readable planning reports.
//!
//! Pure string builders consumed by the driver: configuration and tower
//! table, interference findings, and spectrum efficiency metrics. Keeping
//! these out of the planning core lets the core stay formatting-free and the
//! reports trivially testable.

use std::fmt::Write;

use crate::planner::types::CellularNetwork;

/// Render the network configuration and the per-tower assignment table.
///
/// Unassigned cluster/frequency fields are shown as `-`.
pub fn network_summary(network: &CellularNetwork) -> String {
    let config = network.config();
    let mut out = String::new();
    writeln!(out, "Cellular Network Configuration:").unwrap();
    writeln!(out, "Reuse Factor (K): {}", config.reuse_factor).unwrap();
    writeln!(out, "Frequency Pool Size: {}", config.frequency_pool_size).unwrap();
    writeln!(out, "Number of Towers: {}", network.len()).unwrap();
    writeln!(out).unwrap();
    writeln!(out, "Tower Details:").unwrap();
    writeln!(out, "{:<6} {:>10} {:>10} {:>8} {:>10}", "ID", "X", "Y", "Cluster", "Frequency").unwrap();
    writeln!(out, "{}", "-".repeat(48)).unwrap();
    for tower in network.towers() {
        writeln!(
            out,
            "{:<6} {:>10.1} {:>10.1} {:>8} {:>10}",
            tower.id,
            tower.position.x,
            tower.position.y,
            label(tower.cluster_id),
            label(tower.frequency),
        )
        .unwrap();
    }
    out
}

/// Render the result of an interference scan.
pub fn interference_summary(pairs: &[(u32, u32)], min_distance: f64) -> String {
    let mut out = String::new();
    writeln!(out, "Interference Check (Minimum Distance: {:.1} units):", min_distance).unwrap();
    if pairs.is_empty() {
        writeln!(out, "No interference detected with current frequency assignment.").unwrap();
        return out;
    }
    for (id_a, id_b) in pairs {
        writeln!(out, "Interference between Tower {} and Tower {}", id_a, id_b).unwrap();
    }
    writeln!(out, "{} interfering pair(s) found.", pairs.len()).unwrap();
    out
}

/// Render spectrum efficiency metrics for a populated network.
///
/// - Frequency reuse efficiency: towers per available channel.
/// - Spectrum utilization: available channels per hundred towers.
///
/// An empty network yields a short note instead of dividing by zero.
pub fn efficiency_summary(network: &CellularNetwork) -> String {
    let mut out = String::new();
    writeln!(out, "Efficiency Metrics:").unwrap();
    if network.is_empty() {
        writeln!(out, "No towers deployed; efficiency metrics are undefined.").unwrap();
        return out;
    }
    let towers = network.len() as f64;
    let pool = network.config().frequency_pool_size as f64;
    writeln!(out, "Frequency Reuse Efficiency: {:.2}", towers / pool).unwrap();
    writeln!(out, "Spectrum Utilization: {:.2}%", pool * 100.0 / towers).unwrap();
    out
}

fn label(value: Option<u32>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => "-".to_string(),
    }
}
