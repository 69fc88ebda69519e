//! Black hole geometry and the stylized lensing approximation.
//!
//! The hole has no persistent state: its center and radius are derived every
//! frame from the surface extent and the global clock.

use bevy::prelude::*;

use crate::view::ViewExtent;

/// Event-horizon radius as a fraction of the smaller surface dimension.
pub const HORIZON_FRACTION: f32 = 0.06;

/// Lensing reach in horizon radii; displacement is zero at or beyond this.
pub const LENS_REACH: f32 = 3.5;

/// Peak lensing displacement in device pixels (before DPR scaling).
pub const LENS_STRENGTH: f32 = 20.0;

/// Derived black hole geometry for one frame.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BlackHole {
    /// Center in surface coordinates.
    pub center: Vec2,
    /// Event-horizon radius in device pixels.
    pub radius: f32,
}

impl BlackHole {
    /// Geometry at global time `t_ms`: screen center plus a small vertical
    /// oscillation, radius proportional to the smaller dimension.
    pub fn at(t_ms: f64, extent: &ViewExtent) -> Self {
        let bob = extent.height * 0.02 * (t_ms * 0.000_7).sin() as f32;
        Self {
            center: extent.center() + Vec2::new(0.0, bob),
            radius: extent.min_dim() * HORIZON_FRACTION,
        }
    }
}

/// Stylized gravitational lensing: the offset to add to a drawn position,
/// pulling it toward the hole with quadratic falloff.
///
/// Zero at distances of [`LENS_REACH`] horizon radii or more, and zero for a
/// position exactly at the center (no meaningful direction there).
pub fn lens_displacement(pos: Vec2, hole: &BlackHole, dpr: f32) -> Vec2 {
    let delta = pos - hole.center;
    let dist = delta.length();
    if dist <= f32::EPSILON {
        return Vec2::ZERO;
    }

    let lens = (1.0 - dist / (LENS_REACH * hole.radius)).clamp(0.0, 1.0);
    -(delta / dist) * (LENS_STRENGTH * dpr * lens * lens)
}
