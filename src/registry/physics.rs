use bevy::prelude::*;
use serde::Deserialize;

/// Simulation parameters loaded from RON.
#[derive(Resource, Debug, Clone, Deserialize)]
pub struct PhysicsConfig {
    /// Vertical acceleration applied to gravity-affected bodies,
    /// in world units per second squared. Negative is downward.
    pub gravity: f32,
    /// Upward nudge applied to a body that has fallen below the bottom
    /// of the map — a soft respawn rather than a hard floor.
    pub fall_recovery: f32,
}

impl Default for PhysicsConfig {
    fn default() -> Self {
        Self {
            gravity: -11.0,
            fall_recovery: 2.8,
        }
    }
}
