//! Common test utilities for integration tests.

use bevy::prelude::*;

use eventide::scene::SceneConfig;
use eventide::sim::SimPlugin;
use eventide::time::{FpsCounter, SimClock};
use eventide::types::SimSettings;
use eventide::view::ViewExtent;

/// Build a headless app with the full simulation stack and a fixed
/// 1280x720 surface. The clock is driven manually through [`step`].
pub fn build_sim_app() -> App {
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .insert_resource(ViewExtent {
            width: 1280.0,
            height: 720.0,
            dpr: 1.0,
        })
        .insert_resource(SceneConfig::default())
        .insert_resource(SimSettings::default())
        .insert_resource(SimClock::default())
        .insert_resource(FpsCounter::default())
        .add_plugins(SimPlugin);
    app
}

/// Advance the scene by one frame of `dt_ms`, bypassing wall-clock time.
pub fn step(app: &mut App, dt_ms: f64) {
    {
        let mut clock = app.world_mut().resource_mut::<SimClock>();
        clock.dt_ms = dt_ms;
        clock.t_ms += dt_ms;
    }
    app.update();
}
