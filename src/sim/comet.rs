//! Comets: fast transients crossing the screen with a fading tail.

use std::collections::VecDeque;
use std::time::Duration;

use bevy::prelude::*;
use rand::Rng;

use crate::time::SimClock;
use crate::types::{FrameSet, SimSettings, SpawnComet};
use crate::view::ViewExtent;

/// Maximum number of tail points kept per comet.
pub const TAIL_CAP: usize = 120;

/// How far past the visible surface a comet may travel before removal,
/// in device pixels.
pub const OFFSCREEN_MARGIN: f32 = 80.0;

/// Comet life decay per millisecond.
const LIFE_DECAY: f32 = 0.002;

/// Tail-point life decay per millisecond.
const TAIL_DECAY: f32 = 0.008;

/// Auto-spawn interval bounds in seconds.
const AUTO_SPAWN_SECS: (f32, f32) = (12.0, 20.0);

/// One historical comet position, fading independently of the nucleus.
#[derive(Clone, Copy, Debug)]
pub struct TailPoint {
    pub pos: Vec2,
    pub life: f32,
}

/// One comet with its bounded tail buffer.
#[derive(Clone, Debug)]
pub struct Comet {
    /// Nucleus position in surface coordinates.
    pub pos: Vec2,
    /// Constant velocity, device pixels per millisecond.
    pub vel: Vec2,
    /// Remaining life in [0, 1].
    pub life: f32,
    /// Trailing positions, oldest first.
    pub tail: VecDeque<TailPoint>,
}

impl Comet {
    /// Integrate one frame: move, decay, record the tail, expire old tail
    /// points, and report whether the comet survives.
    ///
    /// Tail expiry compacts in a single pass; the following point is never
    /// skipped when one is removed.
    pub fn advance(&mut self, dt_ms: f32, extent: &ViewExtent) -> bool {
        self.pos += self.vel * dt_ms;
        self.life -= LIFE_DECAY * dt_ms;

        for point in self.tail.iter_mut() {
            point.life -= TAIL_DECAY * dt_ms;
        }
        self.tail.retain(|point| point.life > 0.0);

        // This frame's position enters at full life.
        self.tail.push_back(TailPoint {
            pos: self.pos,
            life: 1.0,
        });
        if self.tail.len() > TAIL_CAP {
            self.tail.pop_front();
        }

        self.life > 0.0 && extent.contains_with_margin(self.pos, OFFSCREEN_MARGIN)
    }
}

/// Construct a comet entering from a random horizontal extreme, crossing the
/// screen with a small vertical drift.
pub fn make_comet(rng: &mut impl Rng, extent: &ViewExtent) -> Comet {
    let from_right = rng.gen_bool(0.5);
    let x = if from_right { extent.width + 50.0 } else { -50.0 };
    let direction = if from_right { -1.0 } else { 1.0 };

    Comet {
        pos: Vec2::new(x, rng.gen_range(extent.height * 0.1..extent.height * 0.9)),
        vel: Vec2::new(
            direction * rng.gen_range(0.6..1.2) * extent.dpr,
            rng.gen_range(-0.25..0.25) * extent.dpr,
        ),
        life: 1.0,
        tail: VecDeque::new(),
    }
}

/// The live comet population.
#[derive(Resource, Default)]
pub struct CometSwarm {
    pub comets: Vec<Comet>,
}

/// Recurring auto-spawn timer; the interval is re-randomized within
/// [`AUTO_SPAWN_SECS`] after each firing.
#[derive(Resource)]
pub struct CometSpawnTimer {
    pub timer: Timer,
}

impl CometSpawnTimer {
    fn randomized(rng: &mut impl Rng) -> Self {
        Self {
            timer: Timer::from_seconds(
                rng.gen_range(AUTO_SPAWN_SECS.0..AUTO_SPAWN_SECS.1),
                TimerMode::Once,
            ),
        }
    }
}

impl Default for CometSpawnTimer {
    fn default() -> Self {
        Self::randomized(&mut rand::thread_rng())
    }
}

/// Emit a [`SpawnComet`] on the randomized wall-clock cadence. Ticks in real
/// time, independent of the pause flag, like the interval it models.
pub fn auto_spawn_comets(
    time: Res<Time>,
    mut spawn_timer: ResMut<CometSpawnTimer>,
    mut spawns: MessageWriter<SpawnComet>,
) {
    spawn_timer.timer.tick(time.delta());
    if spawn_timer.timer.is_finished() {
        spawns.write(SpawnComet);
        let mut rng = rand::thread_rng();
        let next = rng.gen_range(AUTO_SPAWN_SECS.0..AUTO_SPAWN_SECS.1);
        spawn_timer.timer.set_duration(Duration::from_secs_f32(next));
        spawn_timer.timer.reset();
    }
}

/// Drain spawn requests into the population. Each request adds exactly one
/// comet, even while paused.
pub fn apply_comet_spawns(
    mut spawns: MessageReader<SpawnComet>,
    extent: Res<ViewExtent>,
    mut swarm: ResMut<CometSwarm>,
) {
    for _ in spawns.read() {
        swarm.comets.push(make_comet(&mut rand::thread_rng(), &extent));
        info!("Comet spawned ({} live)", swarm.comets.len());
    }
}

/// Advance all comets, compacting out the expired and the departed in one
/// pass. A removed comet's tail goes with it.
pub fn update_comets(
    clock: Res<SimClock>,
    settings: Res<SimSettings>,
    extent: Res<ViewExtent>,
    mut swarm: ResMut<CometSwarm>,
) {
    if settings.paused {
        return;
    }
    let dt = clock.dt_ms as f32;
    swarm.comets.retain_mut(|comet| comet.advance(dt, &extent));
}

/// Plugin registering the comet systems.
pub struct CometPlugin;

impl Plugin for CometPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<CometSwarm>()
            .init_resource::<CometSpawnTimer>()
            .add_systems(Update, auto_spawn_comets.in_set(FrameSet::Input))
            .add_systems(Update, apply_comet_spawns.in_set(FrameSet::Spawn))
            .add_systems(Update, update_comets.in_set(FrameSet::Simulate));
    }
}
