//! Build the burma14 places, set up all distances and touch the edge state
//! the way a colony would on its first iteration.

use geo_place::config::Config;
use geo_place::instance::Instance;
use log::info;

const BURMA14: [(usize, f64, f64); 14] = [
    (1, 16.47, 96.10),
    (2, 16.47, 94.44),
    (3, 20.09, 92.54),
    (4, 22.39, 93.37),
    (5, 25.23, 97.24),
    (6, 22.00, 96.05),
    (7, 20.47, 97.02),
    (8, 17.20, 96.29),
    (9, 16.30, 97.38),
    (10, 14.05, 98.12),
    (11, 16.53, 97.38),
    (12, 21.52, 95.59),
    (13, 19.41, 97.13),
    (14, 20.09, 94.55),
];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();

    let mut instance = Instance::from_coordinates("burma14", BURMA14, &Config::new())?;
    let pairs = instance.link_all()?;
    info!("{} places, {} edges", instance.len(), pairs);

    // Seed the heuristic indicator with inverse distances
    let ids: Vec<_> = instance.ids().collect();
    for place in instance.places_mut() {
        for &peer in &ids {
            if let Some(distance) = place.distance_to(peer) {
                place.set_indicator(peer, 1.0 / distance as f64);
                place.pheromone(peer);
            }
        }
    }

    for row in instance.distance_matrix()? {
        println!(
            "{}",
            row.iter()
                .map(|d| format!("{:>5}", d))
                .collect::<Vec<_>>()
                .join("")
        );
    }

    if let Some(first) = instance.get(1) {
        println!(
            "{}: trail entries {}, indicator entries {}",
            first,
            first.pheromone_trail().len(),
            first.indicators().len()
        );
    }

    Ok(())
}
