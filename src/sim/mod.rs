//! Simulation layer: every animated population and the rules moving it.
//!
//! Populations are plain records in resources, not entities; systems walk
//! them as slices. Identity is positional, so removal is always an in-place
//! compaction of the owning vector.

use bevy::prelude::*;

pub mod black_hole;
pub mod comet;
pub mod nebula;
pub mod particle;
pub mod planet;
pub mod star;

#[cfg(test)]
mod proptest_sim;

use crate::scene::SceneConfig;
use crate::types::{configure_frame_order, SimSettings, SpawnBurst, SpawnComet};
use crate::view::ViewExtent;

use comet::CometSwarm;
use nebula::NebulaField;
use particle::ParticleField;
use planet::{Planet, PlanetSystem};
use star::Starfield;

/// Seed the starfield, nebula, and planet roster from the scene preset.
/// Comets and particles start empty; they only appear on request.
pub fn seed_scene(
    scene: Res<SceneConfig>,
    extent: Res<ViewExtent>,
    mut settings: ResMut<SimSettings>,
    mut stars: ResMut<Starfield>,
    mut clouds: ResMut<NebulaField>,
    mut planets: ResMut<PlanetSystem>,
) {
    let mut rng = rand::thread_rng();

    settings.star_target = scene.star_target;
    stars.resize_to(scene.star_target as usize, &mut rng, &extent);

    clouds.clouds = (0..scene.cloud_count)
        .map(|_| nebula::make_cloud(&mut rng, &extent))
        .collect();

    planets.planets = scene
        .planets
        .iter()
        .map(|cfg| Planet::from_config(cfg, &mut rng, &extent))
        .collect();

    info!(
        "Scene seeded: {} stars, {} clouds, {} planets",
        stars.stars.len(),
        clouds.clouds.len(),
        planets.planets.len()
    );
}

/// Total number of live simulated objects across every population.
pub fn live_object_count(
    stars: &Starfield,
    clouds: &NebulaField,
    planets: &PlanetSystem,
    comets: &CometSwarm,
    particles: &ParticleField,
) -> usize {
    stars.stars.len()
        + clouds.clouds.len()
        + planets.planets.len()
        + comets.comets.len()
        + particles.particles.len()
}

/// Aggregate plugin wiring every population into the frame order.
pub struct SimPlugin;

impl Plugin for SimPlugin {
    fn build(&self, app: &mut App) {
        configure_frame_order(app);
        app.add_message::<SpawnBurst>()
            .add_message::<SpawnComet>()
            .add_systems(Startup, seed_scene)
            .add_plugins((
                star::StarPlugin,
                nebula::NebulaPlugin,
                planet::PlanetPlugin,
                comet::CometPlugin,
                particle::ParticlePlugin,
            ));
    }
}
