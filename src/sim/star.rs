//! Parallax starfield: drifting, twinkling background stars.

use bevy::prelude::*;
use rand::Rng;

use crate::time::SimClock;
use crate::types::{FrameSet, SimSettings};
use crate::view::ViewExtent;

/// A depth grouping shared by many stars. Nearer layers drift faster,
/// grow larger, and twinkle harder.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxLayer {
    /// Depth factor; scales drift speed.
    pub z: f32,
    /// Radius range in device pixels.
    pub size: (f32, f32),
    /// Twinkle amplitude.
    pub twinkle: f32,
}

/// The three parallax layers, farthest first.
pub const LAYERS: [ParallaxLayer; 3] = [
    ParallaxLayer {
        z: 0.2,
        size: (0.5, 1.2),
        twinkle: 0.25,
    },
    ParallaxLayer {
        z: 0.5,
        size: (0.7, 1.8),
        twinkle: 0.35,
    },
    ParallaxLayer {
        z: 1.0,
        size: (1.0, 2.4),
        twinkle: 0.5,
    },
];

/// Horizontal drift speed per unit depth, device pixels per millisecond.
const DRIFT_X: f32 = 0.02;

/// Vertical drift speed per unit depth, device pixels per millisecond.
const DRIFT_Y: f32 = 0.015;

/// One background star.
#[derive(Clone, Copy, Debug)]
pub struct Star {
    /// Position in surface coordinates.
    pub pos: Vec2,
    /// Visual radius in device pixels.
    pub radius: f32,
    /// Parallax layer this star belongs to.
    pub layer: ParallaxLayer,
    /// Per-star twinkle phase offset in radians.
    pub twinkle_phase: f32,
    /// Hue in degrees (cool blue-white band).
    pub hue: f32,
}

impl Star {
    /// Drift by the layer velocity and wrap around both screen edges.
    ///
    /// Wrapping preserves fractional overshoot: a star at `W - 0.5` moving
    /// by `+1` lands at `0.5`, never off-screen.
    pub fn advance(&mut self, dt_ms: f32, extent: &ViewExtent) {
        let speed = (self.layer.z - 0.2) * extent.dpr * dt_ms;
        self.pos.x = (self.pos.x + speed * DRIFT_X).rem_euclid(extent.width);
        self.pos.y = (self.pos.y + speed * DRIFT_Y).rem_euclid(extent.height);
    }

    /// Rendered opacity at global time `t_ms`: a sinusoid of the shared
    /// clock plus this star's phase, scaled by the layer amplitude. No
    /// per-star timers.
    pub fn twinkle_alpha(&self, t_ms: f64) -> f32 {
        let wave = ((t_ms * 0.003 + f64::from(self.twinkle_phase)).sin() * 0.5 + 0.5) as f32;
        (0.95 * (wave * self.layer.twinkle + 0.5)).min(1.0)
    }
}

/// Construct a star with randomized position, layer, radius, phase, and hue.
pub fn make_star(rng: &mut impl Rng, extent: &ViewExtent) -> Star {
    let layer = LAYERS[rng.gen_range(0..LAYERS.len())];
    Star {
        pos: Vec2::new(
            rng.gen_range(0.0..extent.width),
            rng.gen_range(0.0..extent.height),
        ),
        radius: rng.gen_range(layer.size.0..layer.size.1),
        layer,
        twinkle_phase: rng.gen_range(0.0..std::f32::consts::TAU),
        hue: 200.0 + rng.gen_range(-25.0..25.0),
    }
}

/// The live star population.
#[derive(Resource, Default)]
pub struct Starfield {
    pub stars: Vec<Star>,
}

impl Starfield {
    /// Resize the population to `target` without disturbing retained stars:
    /// growing appends exactly `target - len` factory-made stars, shrinking
    /// truncates to exactly `target`.
    pub fn resize_to(&mut self, target: usize, rng: &mut impl Rng, extent: &ViewExtent) {
        if self.stars.len() < target {
            let need = target - self.stars.len();
            self.stars
                .extend((0..need).map(|_| make_star(rng, extent)));
        } else {
            self.stars.truncate(target);
        }
    }
}

/// Compare the live density target against the population every frame and
/// resize immediately. Suspended while paused; a target moved during a pause
/// lands on the first unpaused frame.
pub fn sync_star_density(
    settings: Res<SimSettings>,
    extent: Res<ViewExtent>,
    mut field: ResMut<Starfield>,
) {
    if settings.paused {
        return;
    }
    let target = settings.star_target as usize;
    if field.stars.len() != target {
        field.resize_to(target, &mut rand::thread_rng(), &extent);
    }
}

/// Advance every star by this frame's step.
pub fn update_stars(
    clock: Res<SimClock>,
    settings: Res<SimSettings>,
    extent: Res<ViewExtent>,
    mut field: ResMut<Starfield>,
) {
    if settings.paused {
        return;
    }
    let dt = clock.dt_ms as f32;
    for star in &mut field.stars {
        star.advance(dt, &extent);
    }
}

/// Plugin registering the starfield systems.
pub struct StarPlugin;

impl Plugin for StarPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<Starfield>().add_systems(
            Update,
            (sync_star_density, update_stars)
                .chain()
                .in_set(FrameSet::Simulate),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{seeded_rng, test_extent};
    use approx::assert_relative_eq;

    #[test]
    fn wrap_preserves_fractional_overshoot() {
        let extent = test_extent();
        let mut star = make_star(&mut seeded_rng(7), &extent);
        star.layer = LAYERS[2]; // z = 1.0 -> speed 0.8 * DRIFT per ms
        star.pos = Vec2::new(extent.width - 0.5, 10.0);

        // dt chosen so the horizontal step is exactly 1.0 device pixel.
        let dt = 1.0 / ((star.layer.z - 0.2) * DRIFT_X);
        star.advance(dt, &extent);

        assert_relative_eq!(star.pos.x, 0.5, epsilon = 1e-3);
    }

    #[test]
    fn positions_stay_in_bounds_over_many_frames() {
        let extent = test_extent();
        let mut rng = seeded_rng(42);
        let mut stars: Vec<Star> = (0..64).map(|_| make_star(&mut rng, &extent)).collect();

        for _ in 0..1000 {
            for star in &mut stars {
                star.advance(33.0, &extent);
                assert!((0.0..extent.width).contains(&star.pos.x), "x out of range");
                assert!((0.0..extent.height).contains(&star.pos.y), "y out of range");
            }
        }
    }

    #[test]
    fn farthest_layer_is_stationary() {
        let extent = test_extent();
        let mut star = make_star(&mut seeded_rng(3), &extent);
        star.layer = LAYERS[0]; // z = 0.2 cancels the depth factor
        let before = star.pos;
        star.advance(33.0, &extent);
        assert_eq!(star.pos, before);
    }

    #[test]
    fn twinkle_alpha_is_a_valid_opacity() {
        let extent = test_extent();
        let mut rng = seeded_rng(11);
        for _ in 0..32 {
            let star = make_star(&mut rng, &extent);
            for t in [0.0, 123.0, 5_000.0, 1e7] {
                let alpha = star.twinkle_alpha(t);
                assert!((0.0..=1.0).contains(&alpha), "alpha {alpha} out of range");
            }
        }
    }

    #[test]
    fn growing_appends_and_keeps_existing_positions() {
        let extent = test_extent();
        let mut rng = seeded_rng(5);
        let mut field = Starfield::default();
        field.resize_to(10, &mut rng, &extent);
        let kept: Vec<Vec2> = field.stars.iter().map(|s| s.pos).collect();

        field.resize_to(25, &mut rng, &extent);
        assert_eq!(field.stars.len(), 25);
        for (star, pos) in field.stars.iter().zip(kept) {
            assert_eq!(star.pos, pos);
        }
    }

    #[test]
    fn shrinking_truncates_exactly() {
        let extent = test_extent();
        let mut rng = seeded_rng(5);
        let mut field = Starfield::default();
        field.resize_to(25, &mut rng, &extent);
        let prefix: Vec<Vec2> = field.stars[..10].iter().map(|s| s.pos).collect();

        field.resize_to(10, &mut rng, &extent);
        assert_eq!(field.stars.len(), 10);
        for (star, pos) in field.stars.iter().zip(prefix) {
            assert_eq!(star.pos, pos);
        }
    }
}
