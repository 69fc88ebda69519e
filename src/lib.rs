//! Eventide - Animated Deep-Space Scene
//!
//! A library crate providing the simulation and rendering components
//! of the scene for testing and integration purposes.

pub mod input;
pub mod render;
pub mod scene;
pub mod sim;
pub mod time;
pub mod types;
pub mod ui;
pub mod view;

#[cfg(test)]
pub mod test_utils;
