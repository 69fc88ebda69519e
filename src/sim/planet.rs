//! Planets on fixed, non-precessing elliptical orbits around the black hole.

use bevy::prelude::*;
use rand::Rng;

use crate::scene::PlanetConfig;
use crate::time::SimClock;
use crate::types::{FrameSet, SimSettings};
use crate::view::ViewExtent;

/// One orbiting planet.
#[derive(Clone, Copy, Debug)]
pub struct Planet {
    /// Horizontal semi-axis in device pixels.
    pub a: f32,
    /// Vertical semi-axis in device pixels.
    pub b: f32,
    /// Angular speed in radians per millisecond.
    pub angular_speed: f64,
    /// Current orbital phase in radians; advances monotonically.
    pub phase: f64,
    /// Visual radius in device pixels.
    pub size: f32,
    /// Base hue in degrees.
    pub hue: f32,
    /// Ring tilt, for ringed planets.
    pub ring_tilt: Option<f32>,
}

impl Planet {
    /// Resolve a preset against the surface extent, with a randomized
    /// starting phase so the roster doesn't line up.
    pub fn from_config(cfg: &PlanetConfig, rng: &mut impl Rng, extent: &ViewExtent) -> Self {
        let m = extent.min_dim();
        Self {
            a: cfg.a_factor * m,
            b: cfg.b_factor * m,
            angular_speed: cfg.angular_speed,
            phase: rng.gen_range(0.0..std::f64::consts::TAU),
            size: cfg.size * extent.dpr,
            hue: cfg.hue,
            ring_tilt: cfg.ring_tilt,
        }
    }

    /// Advance the orbital phase by this frame's step.
    pub fn advance(&mut self, dt_ms: f64) {
        self.phase += self.angular_speed * dt_ms;
    }

    /// Undeflected orbital position around `center`.
    pub fn orbital_pos(&self, center: Vec2) -> Vec2 {
        center
            + Vec2::new(
                self.phase.cos() as f32 * self.a,
                self.phase.sin() as f32 * self.b,
            )
    }
}

/// The planet roster, seeded once at startup.
#[derive(Resource, Default)]
pub struct PlanetSystem {
    pub planets: Vec<Planet>,
}

/// Advance every planet's phase.
pub fn update_planets(
    clock: Res<SimClock>,
    settings: Res<SimSettings>,
    mut system: ResMut<PlanetSystem>,
) {
    if settings.paused {
        return;
    }
    for planet in &mut system.planets {
        planet.advance(clock.dt_ms);
    }
}

/// Plugin registering the orbit systems.
pub struct PlanetPlugin;

impl Plugin for PlanetPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PlanetSystem>()
            .add_systems(Update, update_planets.in_set(FrameSet::Simulate));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::SceneConfig;
    use crate::test_utils::{seeded_rng, test_extent};
    use approx::assert_relative_eq;

    fn sample_planet() -> Planet {
        let cfg = &SceneConfig::default().planets[0];
        Planet::from_config(cfg, &mut seeded_rng(1), &test_extent())
    }

    #[test]
    fn axes_scale_with_min_dimension() {
        let planet = sample_planet();
        assert_relative_eq!(planet.a, 0.18 * 720.0);
        assert_relative_eq!(planet.b, 0.12 * 720.0);
    }

    #[test]
    fn phase_advances_monotonically() {
        let mut planet = sample_planet();
        let mut last = planet.phase;
        for _ in 0..100 {
            planet.advance(33.0);
            assert!(planet.phase > last);
            last = planet.phase;
        }
    }

    #[test]
    fn orbit_stays_on_the_configured_ellipse() {
        let mut planet = sample_planet();
        let center = test_extent().center();
        for _ in 0..500 {
            planet.advance(33.0);
            let p = planet.orbital_pos(center) - center;
            let on_ellipse = (p.x / planet.a).powi(2) + (p.y / planet.b).powi(2);
            assert_relative_eq!(on_ellipse, 1.0, epsilon = 1e-4);
        }
    }

    #[test]
    fn size_scales_with_dpr() {
        let mut extent = test_extent();
        extent.dpr = 2.0;
        let cfg = &SceneConfig::default().planets[1];
        let planet = Planet::from_config(cfg, &mut seeded_rng(4), &extent);
        assert_relative_eq!(planet.size, 24.0);
        assert_eq!(planet.ring_tilt, Some(0.55));
    }
}
