//! Command-line driver for the cell-grid frequency reuse planner.
//!
//! The driver is the boundary around the planning core: it loads a
//! deployment scene file, generates or copies tower positions, runs the
//! cluster/frequency assignment passes, scans for co-channel interference,
//! and prints the reports. All algorithmic work lives in the `planner`
//! module; everything here is input plumbing and formatting.

use anyhow::{Context, bail};
use env_logger::Builder;
use log::{LevelFilter, info};

mod common;
mod placement;
mod planner;
mod report;

use crate::common::scene::{DeploymentScene, load_scene};
use crate::placement::uniform_positions;
use crate::planner::assignment::assign_frequencies;
use crate::planner::interference::find_all_interference;
use crate::planner::types::{CellularNetwork, NetworkConfig};

/// Result of one planning run, handed to the reporting side.
struct PlanOutcome {
    network: CellularNetwork,
    interference_pairs: Vec<(u32, u32)>,
    min_distance: f64,
}

/// Run the full planning pipeline for a loaded scene:
/// deploy → assign clusters and frequencies → scan for interference.
fn plan_scene(scene: &DeploymentScene) -> anyhow::Result<PlanOutcome> {
    let config = NetworkConfig {
        reuse_factor: scene.reuse_factor,
        frequency_pool_size: scene.frequency_pool_size,
        max_towers: scene.capacity(),
    };
    let mut network = CellularNetwork::new(config).context("Invalid network configuration")?;

    let positions = match &scene.towers {
        Some(towers) => towers.clone(),
        None => uniform_positions(
            scene.area_width,
            scene.area_height,
            scene.tower_count.unwrap_or(0),
            scene.seed,
        ),
    };
    info!(
        "Deploying {} towers in a {:.1} x {:.1} area",
        positions.len(),
        scene.area_width,
        scene.area_height
    );
    network.deploy(positions).context("Tower deployment failed")?;

    assign_frequencies(&mut network);

    let min_distance = scene.interference_min_distance();
    let interference_pairs = find_all_interference(&network, min_distance).context("Interference scan failed")?;

    Ok(PlanOutcome {
        network,
        interference_pairs,
        min_distance,
    })
}

fn main() -> anyhow::Result<()> {
    Builder::new().filter_level(LevelFilter::Info).parse_default_env().init();

    let mut args = std::env::args().skip(1);
    let scene_path = match args.next() {
        Some(path) => path,
        None => {
            eprintln!("Usage: cellgrid-reuse-planner <scene.json>");
            bail!("missing scene file argument");
        }
    };

    let scene = load_scene(&scene_path).with_context(|| format!("Failed to load scene {}", scene_path))?;
    info!(
        "Loaded scene {}: K={}, pool={}",
        scene_path, scene.reuse_factor, scene.frequency_pool_size
    );

    let outcome = plan_scene(&scene)?;

    println!("{}", report::network_summary(&outcome.network));
    println!("{}", report::interference_summary(&outcome.interference_pairs, outcome.min_distance));
    println!("{}", report::efficiency_summary(&outcome.network));

    Ok(())
}
