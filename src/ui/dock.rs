//! The HUD dock: a single control bar at the bottom of the screen.

use bevy::prelude::*;
use bevy_egui::{egui, EguiContexts};
use rand::Rng;

use crate::scene::{STAR_TARGET_MAX, STAR_TARGET_MIN};
use crate::sim::comet::CometSwarm;
use crate::sim::live_object_count;
use crate::sim::nebula::NebulaField;
use crate::sim::particle::ParticleField;
use crate::sim::planet::PlanetSystem;
use crate::sim::star::Starfield;
use crate::time::FpsCounter;
use crate::types::{SimSettings, SpawnBurst, SpawnComet};
use crate::view::ViewExtent;

/// Render the dock: playback, spawn actions, layer toggles, star density,
/// and the live readouts.
#[allow(clippy::too_many_arguments)]
pub fn dock_system(
    mut contexts: EguiContexts,
    extent: Res<ViewExtent>,
    fps: Res<FpsCounter>,
    stars: Res<Starfield>,
    clouds: Res<NebulaField>,
    planets: Res<PlanetSystem>,
    comets: Res<CometSwarm>,
    particles: Res<ParticleField>,
    mut settings: ResMut<SimSettings>,
    mut bursts: MessageWriter<SpawnBurst>,
    mut comet_spawns: MessageWriter<SpawnComet>,
) {
    let Ok(ctx) = contexts.ctx_mut() else {
        return;
    };

    egui::TopBottomPanel::bottom("dock").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            // Play/Pause button
            let icon = if settings.paused { "\u{25B6}" } else { "\u{23F8}" };
            if ui
                .button(icon)
                .on_hover_text(if settings.paused {
                    "Resume (Space)"
                } else {
                    "Pause (Space)"
                })
                .clicked()
            {
                settings.paused = !settings.paused;
            }

            ui.separator();

            // Spawn actions go through the same messages the keyboard uses.
            if ui.button("Burst").on_hover_text("Center burst (B)").clicked() {
                let mut rng = rand::thread_rng();
                bursts.write(SpawnBurst {
                    position: extent.center(),
                    count: 320,
                    hue: rng.gen_range(10.0..60.0),
                });
            }
            if ui.button("Comet").on_hover_text("Launch a comet (C)").clicked() {
                comet_spawns.write(SpawnComet);
            }

            ui.separator();

            ui.checkbox(&mut settings.nebula, "Nebula")
                .on_hover_text("Toggle the nebula layer (N)");
            ui.checkbox(&mut settings.accretion_disk, "Disk")
                .on_hover_text("Toggle the accretion disk (D)");

            ui.separator();

            ui.label("Stars:");
            ui.add(egui::Slider::new(
                &mut settings.star_target,
                STAR_TARGET_MIN..=STAR_TARGET_MAX,
            ));

            ui.separator();

            let objects = live_object_count(&stars, &clouds, &planets, &comets, &particles);
            ui.label(egui::RichText::new(format!("{} fps", fps.value)).monospace());
            ui.label(egui::RichText::new(format!("{objects} objects")).monospace());
        });
    });
}
