//! Planet rendering, including the lensing deflection near the black hole.

use bevy::prelude::*;

use crate::sim::black_hole::{lens_displacement, BlackHole};
use crate::sim::planet::PlanetSystem;
use crate::time::SimClock;
use crate::view::ViewExtent;

use super::glow::fill_circle;

/// Fixed ring rotation in radians.
const RING_ROTATION: f32 = 0.5;

/// Draw every planet at its lensed position: the orbital position plus the
/// displacement toward the hole. Only the drawn position shifts; the orbital
/// phase underneath is untouched.
pub fn draw_planets(
    clock: Res<SimClock>,
    extent: Res<ViewExtent>,
    system: Res<PlanetSystem>,
    mut gizmos: Gizmos,
) {
    let hole = BlackHole::at(clock.t_ms, &extent);

    for planet in &system.planets {
        // Orbits stay anchored to the screen center; only the hole bobs.
        let surface_pos = planet.orbital_pos(extent.center());
        let drawn = surface_pos + lens_displacement(surface_pos, &hole, extent.dpr);

        let center = extent.to_world(drawn);
        let size = extent.to_world_len(planet.size);

        // Body with an off-center highlight suggesting a lit sphere.
        fill_circle(&mut gizmos, center, size, Color::hsla(planet.hue, 0.7, 0.55, 1.0));
        fill_circle(
            &mut gizmos,
            center + Vec2::new(-size / 3.0, size / 3.0),
            size * 0.45,
            Color::hsla(planet.hue, 0.6, 0.75, 0.9),
        );

        if let Some(tilt) = planet.ring_tilt {
            let iso = Isometry2d::new(center, Rot2::radians(RING_ROTATION));
            gizmos.ellipse_2d(
                iso,
                Vec2::new(size * 2.1, size * 1.1 * tilt),
                Color::hsla(planet.hue, 0.5, 0.8, 0.35),
            );
            gizmos.ellipse_2d(
                iso,
                Vec2::new(size * 2.6, size * 1.4 * tilt),
                Color::hsla(planet.hue, 0.5, 0.8, 0.5),
            );
        }
    }
}
