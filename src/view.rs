//! Drawing-surface geometry: device-pixel extent and world mapping.
//!
//! All simulation positions live in device-pixel surface space
//! `[0,W) x [0,H)` with the origin at the top-left, W/H being the window's
//! logical size multiplied by a capped device pixel ratio. Rendering maps
//! those coordinates into Bevy's centered, y-up world space.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Device pixel ratio cap. Bounds per-frame draw cost on very dense displays.
pub const MAX_DPR: f32 = 2.0;

/// The simulated drawing surface, in device pixels.
///
/// Resynchronized from the primary window at the start of every frame, so a
/// resize takes effect in the same frame it is observed.
#[derive(Resource, Clone, Copy, Debug, PartialEq)]
pub struct ViewExtent {
    /// Surface width in device pixels.
    pub width: f32,
    /// Surface height in device pixels.
    pub height: f32,
    /// Effective device pixel ratio (window scale factor, capped).
    pub dpr: f32,
}

impl Default for ViewExtent {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            dpr: 1.0,
        }
    }
}

impl ViewExtent {
    /// Surface center, in surface coordinates.
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width * 0.5, self.height * 0.5)
    }

    /// Smaller of the two surface dimensions.
    pub fn min_dim(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Map a surface position to Bevy world space (centered, y-up,
    /// logical-pixel units).
    pub fn to_world(&self, p: Vec2) -> Vec2 {
        Vec2::new(
            (p.x - self.width * 0.5) / self.dpr,
            (self.height * 0.5 - p.y) / self.dpr,
        )
    }

    /// Convert a length in device pixels to world (logical-pixel) units.
    pub fn to_world_len(&self, device_px: f32) -> f32 {
        device_px / self.dpr
    }

    /// Convert a logical cursor position (top-left origin) to surface
    /// coordinates.
    pub fn cursor_to_surface(&self, logical: Vec2) -> Vec2 {
        logical * self.dpr
    }

    /// Whether a surface position lies within the surface expanded by
    /// `margin` device pixels on every side.
    pub fn contains_with_margin(&self, p: Vec2, margin: f32) -> bool {
        p.x > -margin && p.x < self.width + margin && p.y > -margin && p.y < self.height + margin
    }
}

/// Plugin providing the camera and the per-frame extent sync.
pub struct ViewPlugin;

impl Plugin for ViewPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<ViewExtent>()
            .add_systems(PreStartup, (setup_camera, sync_view_extent).chain())
            .add_systems(PreUpdate, sync_view_extent);
    }
}

/// Spawn the 2D camera the scene is composited through.
fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

/// Recompute the surface extent from the primary window.
fn sync_view_extent(
    windows: Query<&Window, With<PrimaryWindow>>,
    mut extent: ResMut<ViewExtent>,
) {
    let Ok(window) = windows.single() else {
        return;
    };

    let dpr = window.scale_factor().min(MAX_DPR);
    let next = ViewExtent {
        width: window.width() * dpr,
        height: window.height() * dpr,
        dpr,
    };

    if next != *extent {
        *extent = next;
    }
}
