//! Runtime-tunable roll settings, loaded from a RON file.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RollSettings {
    /// Dice spawned at startup.
    pub initial_dice: usize,
    /// Tumble phase length in milliseconds (quartic-out easing).
    pub tumble_duration_ms: u64,
    /// Face-align phase length in milliseconds (quadratic-out easing).
    pub align_duration_ms: u64,
    /// Dice spawn uniformly inside [-spawn_extent, spawn_extent) per axis.
    pub spawn_extent: f32,
    /// Camera distance from the origin along +Z.
    pub camera_distance: f32,
}

impl Default for RollSettings {
    fn default() -> Self {
        Self {
            initial_dice: 2,
            tumble_duration_ms: 2000,
            align_duration_ms: 500,
            spawn_extent: 2.0,
            camera_distance: 5.0,
        }
    }
}

impl RollSettings {
    pub fn tumble_seconds(&self) -> f32 {
        self.tumble_duration_ms as f32 / 1000.0
    }

    pub fn align_seconds(&self) -> f32 {
        self.align_duration_ms as f32 / 1000.0
    }

    /// Load settings from a RON file, falling back to defaults when the
    /// file is missing or malformed.
    pub fn load_from_file(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match ron::from_str(&contents) {
                Ok(settings) => {
                    println!("Loaded roll settings from {}", path);
                    settings
                }
                Err(e) => {
                    eprintln!("Failed to parse roll settings {}: {}", path, e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}
