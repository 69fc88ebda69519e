//! Frame clock for the scene.
//!
//! Computes the clamped per-frame step, accumulates global scene time, and
//! maintains the rolling FPS readout.

use bevy::prelude::*;

use crate::types::{FrameSet, SimSettings, DELTA_CLAMP_MS, FPS_WINDOW_MS};

/// Global scene clock, advanced once per frame.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct SimClock {
    /// Total simulated time in milliseconds. Drives twinkle phases, the
    /// black hole oscillation, and the disk rotation.
    pub t_ms: f64,
    /// This frame's step in milliseconds, clamped to [`DELTA_CLAMP_MS`].
    /// Zero while paused.
    pub dt_ms: f64,
}

/// Rolling FPS accumulator.
///
/// A read-only projection for the HUD: frames and elapsed time are summed
/// until at least [`FPS_WINDOW_MS`] has passed, then the average is published
/// and the window restarts. Frozen while paused.
#[derive(Resource, Clone, Copy, Debug, Default)]
pub struct FpsCounter {
    acc_ms: f64,
    frames: u32,
    /// Most recently published frames-per-second value.
    pub value: u32,
}

impl FpsCounter {
    /// Fold one frame of `dt_ms` into the window, publishing when full.
    pub fn record(&mut self, dt_ms: f64) {
        self.acc_ms += dt_ms;
        self.frames += 1;
        if self.acc_ms >= FPS_WINDOW_MS {
            self.value = (1000.0 / (self.acc_ms / f64::from(self.frames))).round() as u32;
            self.acc_ms = 0.0;
            self.frames = 0;
        }
    }
}

/// Plugin providing clock advancement.
pub struct TimePlugin;

impl Plugin for TimePlugin {
    fn build(&self, app: &mut App) {
        crate::types::configure_frame_order(app);
        app.init_resource::<SimClock>()
            .init_resource::<FpsCounter>()
            .add_systems(Update, advance_clock.in_set(FrameSet::Clock));
    }
}

/// Advance the scene clock by the clamped frame delta.
fn advance_clock(
    time: Res<Time>,
    settings: Res<SimSettings>,
    mut clock: ResMut<SimClock>,
    mut fps: ResMut<FpsCounter>,
) {
    if settings.paused {
        clock.dt_ms = 0.0;
        return;
    }

    let dt = (time.delta_secs_f64() * 1000.0).min(DELTA_CLAMP_MS);
    clock.dt_ms = dt;
    clock.t_ms += dt;
    fps.record(dt);
}
