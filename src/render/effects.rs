//! Transient rendering: comet tails, nuclei, and burst particles.

use bevy::prelude::*;

use crate::sim::comet::CometSwarm;
use crate::sim::particle::ParticleField;
use crate::view::ViewExtent;

use super::glow::soft_glow;

/// Comet tail and glow tint.
const TAIL_COLOR: Color = Color::srgb(0.627, 0.863, 1.0);

/// Nucleus tint, near-white ice.
const NUCLEUS_COLOR: Color = Color::srgb(0.925, 0.996, 1.0);

/// Tail disc styling: discs shrink toward the oldest point and their alpha
/// follows each point's own fading life.
fn tail_disc(index: usize, len: usize, life: f32, dpr: f32) -> (f32, f32) {
    let taper = (index + 1) as f32 / len as f32;
    (taper * 6.0 * dpr, 0.7 * life)
}

/// Nucleus radius and color. Constant full brightness for the comet's whole
/// life; only the tail fades.
fn nucleus_style(dpr: f32) -> (f32, Color) {
    (2.5 * dpr, NUCLEUS_COLOR)
}

/// Draw every comet: the tail as fading discs shrinking toward the oldest
/// point, then the bright nucleus on top.
pub fn draw_comets(extent: Res<ViewExtent>, swarm: Res<CometSwarm>, mut gizmos: Gizmos) {
    for comet in &swarm.comets {
        let len = comet.tail.len();
        for (i, point) in comet.tail.iter().enumerate() {
            let (radius, alpha) = tail_disc(i, len, point.life, extent.dpr);
            gizmos.circle_2d(
                Isometry2d::from_translation(extent.to_world(point.pos)),
                extent.to_world_len(radius),
                TAIL_COLOR.with_alpha(alpha),
            );
        }

        let center = extent.to_world(comet.pos);
        let (radius, color) = nucleus_style(extent.dpr);
        let nucleus = extent.to_world_len(radius);
        soft_glow(
            &mut gizmos,
            center,
            nucleus,
            nucleus * 4.0,
            TAIL_COLOR.with_alpha(0.6),
        );
        gizmos.circle_2d(Isometry2d::from_translation(center), nucleus, color);
    }
}

/// Draw every burst particle as a glowing dot; life doubles as opacity.
pub fn draw_particles(extent: Res<ViewExtent>, field: Res<ParticleField>, mut gizmos: Gizmos) {
    for particle in &field.particles {
        let center = extent.to_world(particle.pos);
        let radius = extent.to_world_len(particle.radius);
        soft_glow(
            &mut gizmos,
            center,
            radius,
            radius * 3.0,
            Color::hsla(particle.hue, 1.0, 0.6, particle.life.clamp(0.0, 1.0)),
        );
    }
}
