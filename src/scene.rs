//! Scene presets: the fixed configuration the populations are seeded from.
//!
//! A preset is validated once at startup; an invalid preset is a fatal
//! condition since the scene cannot run without its populations.

use bevy::prelude::*;
use thiserror::Error;

/// Smallest accepted star population target (matches the HUD slider).
pub const STAR_TARGET_MIN: u32 = 200;

/// Largest accepted star population target (matches the HUD slider).
pub const STAR_TARGET_MAX: u32 = 2000;

/// Static configuration for one orbiting planet.
///
/// Semi-axes are expressed as fractions of the smaller surface dimension so
/// the preset is resolution-independent; size is in device pixels before DPR
/// scaling.
#[derive(Clone, Debug)]
pub struct PlanetConfig {
    /// Horizontal semi-axis as a fraction of `min(W, H)`.
    pub a_factor: f32,
    /// Vertical semi-axis as a fraction of `min(W, H)`.
    pub b_factor: f32,
    /// Orbital angular speed in radians per millisecond.
    pub angular_speed: f64,
    /// Visual radius in device pixels (scaled by DPR at seed time).
    pub size: f32,
    /// Base hue in degrees.
    pub hue: f32,
    /// Ring tilt (vertical flattening factor), for ringed planets.
    pub ring_tilt: Option<f32>,
}

/// Scene preset: population sizes and the planet roster.
#[derive(Resource, Clone, Debug)]
pub struct SceneConfig {
    /// Initial star-density target.
    pub star_target: u32,
    /// Fixed nebula cloud count.
    pub cloud_count: usize,
    /// Planet roster, innermost first.
    pub planets: Vec<PlanetConfig>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            star_target: 900,
            cloud_count: 18,
            planets: vec![
                PlanetConfig {
                    a_factor: 0.18,
                    b_factor: 0.12,
                    angular_speed: 0.000_12,
                    size: 8.0,
                    hue: 200.0,
                    ring_tilt: None,
                },
                PlanetConfig {
                    a_factor: 0.26,
                    b_factor: 0.20,
                    angular_speed: 0.000_08,
                    size: 12.0,
                    hue: 35.0,
                    ring_tilt: Some(0.55),
                },
                PlanetConfig {
                    a_factor: 0.36,
                    b_factor: 0.30,
                    angular_speed: 0.000_06,
                    size: 5.0,
                    hue: 320.0,
                    ring_tilt: None,
                },
            ],
        }
    }
}

/// Preset validation failure.
#[derive(Debug, Error, PartialEq)]
pub enum SceneError {
    #[error("star target {target} outside accepted range {min}..={max}")]
    StarTargetOutOfRange { target: u32, min: u32, max: u32 },

    #[error("scene preset has no nebula clouds")]
    NoClouds,

    #[error("scene preset has no planets")]
    NoPlanets,

    #[error("planet {index}: {reason}")]
    BadPlanet { index: usize, reason: &'static str },
}

impl SceneConfig {
    /// Check the preset against the ranges the scene can run with.
    pub fn validate(&self) -> Result<(), SceneError> {
        if !(STAR_TARGET_MIN..=STAR_TARGET_MAX).contains(&self.star_target) {
            return Err(SceneError::StarTargetOutOfRange {
                target: self.star_target,
                min: STAR_TARGET_MIN,
                max: STAR_TARGET_MAX,
            });
        }
        if self.cloud_count == 0 {
            return Err(SceneError::NoClouds);
        }
        if self.planets.is_empty() {
            return Err(SceneError::NoPlanets);
        }
        for (index, planet) in self.planets.iter().enumerate() {
            if planet.a_factor <= 0.0 || planet.b_factor <= 0.0 {
                return Err(SceneError::BadPlanet {
                    index,
                    reason: "semi-axes must be positive",
                });
            }
            if planet.angular_speed <= 0.0 {
                return Err(SceneError::BadPlanet {
                    index,
                    reason: "angular speed must be positive",
                });
            }
            if planet.size <= 0.0 {
                return Err(SceneError::BadPlanet {
                    index,
                    reason: "visual size must be positive",
                });
            }
            if let Some(tilt) = planet.ring_tilt
                && tilt <= 0.0
            {
                return Err(SceneError::BadPlanet {
                    index,
                    reason: "ring tilt must be positive",
                });
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_preset_is_valid() {
        assert_eq!(SceneConfig::default().validate(), Ok(()));
    }

    #[test]
    fn star_target_bounds_are_enforced() {
        let mut scene = SceneConfig::default();
        scene.star_target = STAR_TARGET_MAX + 1;
        assert!(matches!(
            scene.validate(),
            Err(SceneError::StarTargetOutOfRange { .. })
        ));

        scene.star_target = STAR_TARGET_MIN;
        assert_eq!(scene.validate(), Ok(()));
    }

    #[test]
    fn empty_planet_roster_is_rejected() {
        let mut scene = SceneConfig::default();
        scene.planets.clear();
        assert_eq!(scene.validate(), Err(SceneError::NoPlanets));
    }

    #[test]
    fn degenerate_planet_is_rejected() {
        let mut scene = SceneConfig::default();
        scene.planets[1].ring_tilt = Some(0.0);
        assert!(matches!(
            scene.validate(),
            Err(SceneError::BadPlanet { index: 1, .. })
        ));
    }
}
