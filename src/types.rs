//! Core simulation state, frame ordering, and shared constants.

use bevy::prelude::*;

/// Upper bound on a single simulation step, in milliseconds.
///
/// A long stall (window dragged, app backgrounded) would otherwise produce
/// one destabilizing jump in every integrated quantity.
pub const DELTA_CLAMP_MS: f64 = 33.0;

/// Minimum accumulation window for the rolling FPS readout, in milliseconds.
pub const FPS_WINDOW_MS: f64 = 500.0;

/// System sets enforcing the fixed per-frame order.
///
/// Everything the scene does in one frame happens in this sequence:
/// input handlers emit spawn messages, the clock advances, spawn messages
/// are applied, populations update, and finally every population is drawn
/// back-to-front. Later sets observe the fully-updated state of earlier ones.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum FrameSet {
    /// Keyboard/pointer handlers and the comet auto-spawn timer.
    Input,
    /// Frame delta computation and FPS accumulation.
    Clock,
    /// Drain spawn messages into the populations.
    Spawn,
    /// Per-population update rules.
    Simulate,
    /// Immediate-mode drawing, in compositing order.
    Render,
}

/// Configure the relative order of [`FrameSet`]s on the `Update` schedule.
///
/// Called by every plugin that places systems in these sets; repeated
/// configuration is harmless.
pub fn configure_frame_order(app: &mut App) {
    app.configure_sets(
        Update,
        (
            FrameSet::Input,
            FrameSet::Clock,
            FrameSet::Spawn,
            FrameSet::Simulate,
            FrameSet::Render,
        )
            .chain(),
    );
}

/// Live scene toggles shared by the frame systems and the input handlers.
#[derive(Resource, Clone, Debug)]
pub struct SimSettings {
    /// Whether the simulation is paused. Draw systems keep repainting the
    /// frozen state; update systems skip entirely.
    pub paused: bool,
    /// Whether the nebula layer is drawn. Cloud motion continues regardless.
    pub nebula: bool,
    /// Whether the black hole stack (halo, disk, horizon, photon ring) is
    /// drawn.
    pub accretion_disk: bool,
    /// Star population target, read every frame by the density sync.
    pub star_target: u32,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            paused: false,
            nebula: true,
            accretion_disk: true,
            star_target: 900,
        }
    }
}

/// Request for a radial particle explosion.
///
/// Written by the HUD, the keyboard handler, and the pointer handler;
/// drained by the particle spawn system at a fixed point in the frame.
#[derive(Message, Clone, Copy, Debug)]
pub struct SpawnBurst {
    /// Burst origin in device-pixel surface coordinates.
    pub position: Vec2,
    /// Number of particles to emit.
    pub count: u32,
    /// Base hue (degrees) shared by the whole burst.
    pub hue: f32,
}

/// Request for a single comet, entering from a random screen edge.
#[derive(Message, Clone, Copy, Debug, Default)]
pub struct SpawnComet;
