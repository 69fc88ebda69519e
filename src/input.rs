//! Keyboard shortcuts and pointer interaction.
//!
//! Input never mutates populations directly: spawning goes through the same
//! messages the HUD uses, so every entry point shares one code path.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;
use bevy_egui::EguiContexts;
use rand::Rng;

use crate::types::{FrameSet, SimSettings, SpawnBurst, SpawnComet};
use crate::view::ViewExtent;

/// Plugin providing keyboard shortcuts and click-to-burst.
pub struct InputPlugin;

impl Plugin for InputPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (keyboard_shortcuts, pointer_burst).in_set(FrameSet::Input),
        );
    }
}

/// Handle keyboard shortcuts for pause, layer toggles, and spawning.
fn keyboard_shortcuts(
    keys: Res<ButtonInput<KeyCode>>,
    extent: Res<ViewExtent>,
    mut settings: ResMut<SimSettings>,
    mut bursts: MessageWriter<SpawnBurst>,
    mut comets: MessageWriter<SpawnComet>,
) {
    // Space: toggle pause
    if keys.just_pressed(KeyCode::Space) {
        settings.paused = !settings.paused;
        info!(
            "Simulation {}",
            if settings.paused { "paused" } else { "running" }
        );
    }

    // N: toggle the nebula layer
    if keys.just_pressed(KeyCode::KeyN) {
        settings.nebula = !settings.nebula;
    }

    // D: toggle the accretion disk
    if keys.just_pressed(KeyCode::KeyD) {
        settings.accretion_disk = !settings.accretion_disk;
    }

    // B: big warm burst at screen center
    if keys.just_pressed(KeyCode::KeyB) {
        let mut rng = rand::thread_rng();
        bursts.write(SpawnBurst {
            position: extent.center(),
            count: 320,
            hue: rng.gen_range(10.0..60.0),
        });
    }

    // C: launch a comet now
    if keys.just_pressed(KeyCode::KeyC) {
        comets.write(SpawnComet);
    }
}

/// Left click spawns a burst at the cursor, unless the HUD wants the pointer.
fn pointer_burst(
    mouse: Res<ButtonInput<MouseButton>>,
    windows: Query<&Window, With<PrimaryWindow>>,
    extent: Res<ViewExtent>,
    mut contexts: EguiContexts,
    mut bursts: MessageWriter<SpawnBurst>,
) {
    if !mouse.just_pressed(MouseButton::Left) {
        return;
    }

    if let Ok(ctx) = contexts.ctx_mut()
        && ctx.wants_pointer_input()
    {
        return;
    }

    let Ok(window) = windows.single() else {
        return;
    };
    let Some(cursor) = window.cursor_position() else {
        return;
    };

    let mut rng = rand::thread_rng();
    bursts.write(SpawnBurst {
        position: extent.cursor_to_surface(cursor),
        count: rng.gen_range(120..220),
        hue: rng.gen_range(180.0..320.0),
    });
}
