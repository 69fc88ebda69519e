//! Background layers: nebula clouds and the twinkling starfield.

use bevy::prelude::*;

use crate::sim::nebula::NebulaField;
use crate::sim::star::Starfield;
use crate::time::SimClock;
use crate::types::SimSettings;
use crate::view::ViewExtent;

use super::glow::soft_glow;

/// Draw the nebula clouds as large soft color washes. Hidden entirely when
/// the nebula toggle is off; the population keeps moving underneath.
pub fn draw_nebula(
    settings: Res<SimSettings>,
    extent: Res<ViewExtent>,
    field: Res<NebulaField>,
    mut gizmos: Gizmos,
) {
    if !settings.nebula {
        return;
    }
    for cloud in &field.clouds {
        let center = extent.to_world(cloud.pos);
        let radius = extent.to_world_len(cloud.radius);
        let color = Color::hsla(cloud.hue, 0.8, 0.6, cloud.alpha);
        soft_glow(&mut gizmos, center, 0.0, radius, color);
    }
}

/// Draw every star: a bright core plus one faint ring at twice the radius
/// standing in for the glow falloff. Kept to two strokes per star, the
/// population runs into the thousands.
pub fn draw_stars(
    clock: Res<SimClock>,
    extent: Res<ViewExtent>,
    field: Res<Starfield>,
    mut gizmos: Gizmos,
) {
    for star in &field.stars {
        let alpha = star.twinkle_alpha(clock.t_ms);
        let center = Isometry2d::from_translation(extent.to_world(star.pos));
        let radius = extent.to_world_len(star.radius);
        gizmos.circle_2d(center, radius, Color::hsla(star.hue, 1.0, 0.85, alpha));
        gizmos.circle_2d(
            center,
            radius * 2.0,
            Color::hsla(star.hue, 1.0, 0.85, alpha * 0.25),
        );
    }
}
