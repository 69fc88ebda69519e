//! Black hole rendering: accretion disk, event horizon, photon ring.

use bevy::color::Mix;
use bevy::prelude::*;

use crate::sim::black_hole::BlackHole;
use crate::time::SimClock;
use crate::types::SimSettings;
use crate::view::ViewExtent;

use super::glow::{fill_circle, soft_glow};

/// Vertical flattening of the disk ellipses.
const DISK_TILT: f32 = 0.55;

/// Rings sampled across the disk gradient, per pass.
const DISK_RINGS: usize = 24;

/// Rings sampled across the photon ring band.
const PHOTON_RINGS: usize = 6;

/// Draw the black hole stack back to front: disk halo and gradient behind,
/// then the opaque horizon, then the photon ring over its rim. The disk
/// toggle hides the whole stack.
pub fn draw_black_hole(
    clock: Res<SimClock>,
    settings: Res<SimSettings>,
    extent: Res<ViewExtent>,
    mut gizmos: Gizmos,
) {
    if !settings.accretion_disk {
        return;
    }

    let hole = BlackHole::at(clock.t_ms, &extent);
    let center = extent.to_world(hole.center);
    let radius = extent.to_world_len(hole.radius);

    // Broad halo behind the disk.
    soft_glow(
        &mut gizmos,
        center,
        radius * 0.6,
        radius * 3.0,
        Color::srgba(1.0, 1.0, 1.0, 0.12),
    );
    draw_disk(&mut gizmos, center, radius, clock.t_ms);
    fill_circle(&mut gizmos, center, radius, Color::BLACK);
    draw_photon_ring(&mut gizmos, center, radius);
}

/// The disk gradient: concentric tilted ellipses from the inner edge out,
/// cool at the inner rim, hot in the middle band, cool again at the outer
/// edge. Two passes with different squash factors thicken the band.
fn draw_disk(gizmos: &mut Gizmos, center: Vec2, radius: f32, t_ms: f64) {
    let rotation = Rot2::radians(0.15 * (t_ms * 0.000_4).sin() as f32);
    let hot = Color::hsla(45.0, 1.0, 0.6, 0.55);
    let cool = Color::hsla(210.0, 0.8, 0.7, 0.1);

    let inner = radius * 0.35;
    let outer = radius * 2.0;

    for (squash_x, squash_y) in [(0.9, 0.9), (1.0, 1.15)] {
        for i in 0..DISK_RINGS {
            let t = i as f32 / (DISK_RINGS - 1) as f32;
            let r = inner + (outer - inner) * t;
            let color = if t < 0.5 {
                cool.mix(&hot, t * 2.0)
            } else {
                hot.mix(&cool, (t - 0.5) * 2.0)
            };
            gizmos.ellipse_2d(
                Isometry2d::new(center, rotation),
                Vec2::new(r * squash_x, r * DISK_TILT * squash_y),
                color,
            );
        }
    }
}

/// Warm rim light hugging the horizon, fading outward.
fn draw_photon_ring(gizmos: &mut Gizmos, center: Vec2, radius: f32) {
    for i in 0..PHOTON_RINGS {
        let t = i as f32 / (PHOTON_RINGS - 1) as f32;
        let r = radius * (1.1 + 0.35 * t);
        gizmos.circle_2d(
            Isometry2d::from_translation(center),
            r,
            Color::srgba(1.0, 0.95, 0.8, 0.5 * (1.0 - t) * (1.0 - t)),
        );
    }
}
