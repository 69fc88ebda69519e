//! Nebula layer: large, slow, soft clouds behind everything else.

use bevy::prelude::*;
use rand::Rng;

use crate::time::SimClock;
use crate::types::{FrameSet, SimSettings};
use crate::view::ViewExtent;

/// One nebula cloud.
#[derive(Clone, Copy, Debug)]
pub struct Cloud {
    /// Position in surface coordinates.
    pub pos: Vec2,
    /// Blob radius in device pixels.
    pub radius: f32,
    /// Peak opacity at the blob core.
    pub alpha: f32,
    /// Constant drift velocity, device pixels per millisecond.
    pub vel: Vec2,
    /// Base hue in degrees.
    pub hue: f32,
}

impl Cloud {
    /// Drift and wrap at an extended boundary: the cloud travels a full
    /// radius past the edge before reappearing on the opposite side, so the
    /// wrap never pops inside the visible frame.
    pub fn advance(&mut self, dt_ms: f32, extent: &ViewExtent) {
        self.pos += self.vel * dt_ms;

        if self.pos.x < -self.radius {
            self.pos.x = extent.width + self.radius;
        } else if self.pos.x > extent.width + self.radius {
            self.pos.x = -self.radius;
        }
        if self.pos.y < -self.radius {
            self.pos.y = extent.height + self.radius;
        } else if self.pos.y > extent.height + self.radius {
            self.pos.y = -self.radius;
        }
    }
}

/// Construct a cloud with randomized position, size, opacity, drift, and hue.
pub fn make_cloud(rng: &mut impl Rng, extent: &ViewExtent) -> Cloud {
    Cloud {
        pos: Vec2::new(
            rng.gen_range(0.0..extent.width),
            rng.gen_range(0.0..extent.height),
        ),
        radius: rng.gen_range(200.0..640.0),
        alpha: rng.gen_range(0.04..0.12),
        vel: Vec2::new(rng.gen_range(-0.06..0.06), rng.gen_range(-0.04..0.04)),
        hue: rng.gen_range(200.0..300.0),
    }
}

/// The fixed cloud population, seeded once at startup.
#[derive(Resource, Default)]
pub struct NebulaField {
    pub clouds: Vec<Cloud>,
}

/// Advance every cloud. Runs regardless of the nebula visibility toggle:
/// hiding the layer pauses the draw call, not the motion.
pub fn update_nebula(
    clock: Res<SimClock>,
    settings: Res<SimSettings>,
    extent: Res<ViewExtent>,
    mut field: ResMut<NebulaField>,
) {
    if settings.paused {
        return;
    }
    let dt = clock.dt_ms as f32;
    for cloud in &mut field.clouds {
        cloud.advance(dt, &extent);
    }
}

/// Plugin registering the nebula systems.
pub struct NebulaPlugin;

impl Plugin for NebulaPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<NebulaField>()
            .add_systems(Update, update_nebula.in_set(FrameSet::Simulate));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{seeded_rng, test_extent};
    use approx::assert_relative_eq;

    #[test]
    fn cloud_wraps_only_past_expanded_boundary() {
        let extent = test_extent();
        let mut cloud = make_cloud(&mut seeded_rng(2), &extent);
        cloud.radius = 300.0;
        cloud.vel = Vec2::new(-0.05, 0.0);

        // Just inside the expanded boundary: no wrap.
        cloud.pos = Vec2::new(-299.0, 100.0);
        cloud.advance(1.0, &extent);
        assert!(cloud.pos.x < -299.0 && cloud.pos.x >= -300.0);

        // One more step crosses -radius and teleports to the far side.
        cloud.advance(1.0, &extent);
        assert_relative_eq!(cloud.pos.x, extent.width + cloud.radius);
    }

    #[test]
    fn stationary_cloud_never_wraps() {
        let extent = test_extent();
        let mut cloud = make_cloud(&mut seeded_rng(9), &extent);
        cloud.vel = Vec2::ZERO;
        let before = cloud.pos;
        for _ in 0..100 {
            cloud.advance(33.0, &extent);
        }
        assert_eq!(cloud.pos, before);
    }
}
