//! Gizmo helpers for soft glows and filled discs.
//!
//! Gizmos only stroke outlines, so fills and radial gradients are built from
//! concentric rings: dense rings for a solid disc, sparse rings with falling
//! alpha for a glow halo.

use bevy::prelude::*;

/// Rings per glow halo.
const GLOW_LAYERS: usize = 8;

/// Ring spacing for solid fills, in world units.
const FILL_STEP: f32 = 1.0;

/// Stroke a filled disc as tightly packed concentric rings.
pub fn fill_circle(gizmos: &mut Gizmos, center: Vec2, radius: f32, color: Color) {
    let rings = (radius / FILL_STEP).ceil().max(1.0) as usize;
    for i in 0..=rings {
        let r = radius * (i as f32 / rings as f32);
        gizmos.circle_2d(Isometry2d::from_translation(center), r, color);
    }
}

/// Approximate a radial gradient from `color` at `core_radius` to transparent
/// at `glow_radius`, alpha falling quadratically outward.
pub fn soft_glow(
    gizmos: &mut Gizmos,
    center: Vec2,
    core_radius: f32,
    glow_radius: f32,
    color: Color,
) {
    let peak = color.alpha();
    for i in 0..GLOW_LAYERS {
        let t = i as f32 / GLOW_LAYERS as f32;
        let r = core_radius + (glow_radius - core_radius) * t;
        let falloff = (1.0 - t) * (1.0 - t);
        gizmos.circle_2d(
            Isometry2d::from_translation(center),
            r,
            color.with_alpha(peak * falloff),
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn glow_alpha_fades_outward() {
        // The falloff curve the rings sample must be monotone to zero.
        let mut last = 1.0;
        for i in 0..GLOW_LAYERS {
            let t = i as f32 / GLOW_LAYERS as f32;
            let falloff = (1.0 - t) * (1.0 - t);
            assert!(falloff <= last);
            assert!(falloff > 0.0);
            last = falloff;
        }
    }
}
