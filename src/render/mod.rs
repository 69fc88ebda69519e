//! Rendering systems for the space scene.
//!
//! Everything is drawn with gizmos in immediate mode, so compositing order is
//! simply call order: nebula at the back, then stars, planets, the black hole
//! stack, and transients on top. Draw systems run even while paused so the
//! frozen scene keeps repainting.

mod background;
mod black_hole;
mod bodies;
mod effects;
pub mod glow;

use bevy::prelude::*;

use crate::types::FrameSet;

use self::background::{draw_nebula, draw_stars};
use self::black_hole::draw_black_hole;
use self::bodies::draw_planets;
use self::effects::{draw_comets, draw_particles};

/// Plugin aggregating all scene drawing, back to front.
pub struct RenderPlugin;

impl Plugin for RenderPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                draw_nebula,
                draw_stars,
                draw_planets,
                draw_black_hole,
                draw_comets,
                draw_particles,
            )
                .chain()
                .in_set(FrameSet::Render),
        );
    }
}
