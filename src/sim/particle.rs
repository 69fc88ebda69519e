//! Particle bursts: radial explosions of short-lived glowing motes.

use bevy::prelude::*;
use rand::Rng;

use crate::time::SimClock;
use crate::types::{FrameSet, SimSettings, SpawnBurst};
use crate::view::ViewExtent;

/// Multiplicative velocity damping applied once per frame (drag).
pub const DAMPING: f32 = 0.995;

/// Life decay per millisecond.
pub const LIFE_DECAY: f32 = 0.006;

/// One burst particle.
#[derive(Clone, Copy, Debug)]
pub struct Particle {
    /// Position in surface coordinates.
    pub pos: Vec2,
    /// Velocity, device pixels per millisecond.
    pub vel: Vec2,
    /// Remaining life in [0, 1]; doubles as rendered opacity.
    pub life: f32,
    /// Core radius in device pixels.
    pub radius: f32,
    /// Hue in degrees.
    pub hue: f32,
}

impl Particle {
    /// Integrate one frame and report whether the particle survives.
    pub fn advance(&mut self, dt_ms: f32) -> bool {
        self.pos += self.vel * dt_ms;
        self.vel *= DAMPING;
        self.life -= LIFE_DECAY * dt_ms;
        self.life > 0.0
    }
}

/// Append a radial explosion of `count` particles at `origin`: direction
/// uniform around the full circle, speed and radius uniform within their
/// ranges, hue shared across the burst.
pub fn spawn_burst(
    rng: &mut impl Rng,
    origin: Vec2,
    count: u32,
    hue: f32,
    dpr: f32,
    out: &mut Vec<Particle>,
) {
    out.reserve(count as usize);
    for _ in 0..count {
        let angle = rng.gen_range(0.0..std::f32::consts::TAU);
        let speed = rng.gen_range(0.6..5.0) * dpr;
        out.push(Particle {
            pos: origin,
            vel: Vec2::new(angle.cos(), angle.sin()) * speed,
            life: 1.0,
            radius: rng.gen_range(0.8..2.6) * dpr,
            hue,
        });
    }
}

/// The live particle population.
#[derive(Resource, Default)]
pub struct ParticleField {
    pub particles: Vec<Particle>,
}

/// Drain burst requests into the population, even while paused.
pub fn apply_burst_requests(
    mut bursts: MessageReader<SpawnBurst>,
    extent: Res<ViewExtent>,
    mut field: ResMut<ParticleField>,
) {
    let mut rng = rand::thread_rng();
    for burst in bursts.read() {
        spawn_burst(
            &mut rng,
            burst.position,
            burst.count,
            burst.hue,
            extent.dpr,
            &mut field.particles,
        );
        info!(
            "Burst of {} particles ({} live)",
            burst.count,
            field.particles.len()
        );
    }
}

/// Advance all particles, compacting out the expired in the same pass so a
/// particle is removed the very frame its life crosses zero.
pub fn update_particles(
    clock: Res<SimClock>,
    settings: Res<SimSettings>,
    mut field: ResMut<ParticleField>,
) {
    if settings.paused {
        return;
    }
    let dt = clock.dt_ms as f32;
    field.particles.retain_mut(|particle| particle.advance(dt));
}

/// Plugin registering the particle systems.
pub struct ParticlePlugin;

impl Plugin for ParticlePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ParticleField>()
            .add_systems(Update, apply_burst_requests.in_set(FrameSet::Spawn))
            .add_systems(Update, update_particles.in_set(FrameSet::Simulate));
    }
}
