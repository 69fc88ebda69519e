//! Eventide - Animated Deep-Space Scene
//!
//! A desktop toy rendering a parallax starfield, nebula, orbiting planets,
//! and a black hole with a stylized accretion disk and lensing.

use bevy::prelude::*;

use eventide::input::InputPlugin;
use eventide::render::RenderPlugin;
use eventide::scene::SceneConfig;
use eventide::sim::SimPlugin;
use eventide::time::TimePlugin;
use eventide::types::SimSettings;
use eventide::ui::UiPlugin;
use eventide::view::ViewPlugin;

fn main() {
    let scene = SceneConfig::default();
    if let Err(err) = scene.validate() {
        eprintln!("invalid scene preset: {err}");
        std::process::exit(1);
    }

    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Eventide".into(),
                ..default()
            }),
            ..default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        // Insert resources before plugins that depend on them
        .insert_resource(scene)
        .insert_resource(SimSettings::default())
        .add_plugins((
            ViewPlugin,
            TimePlugin,
            SimPlugin,
            RenderPlugin,
            InputPlugin,
            UiPlugin,
        ))
        .run();
}
