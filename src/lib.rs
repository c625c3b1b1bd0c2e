//! Collision core for a 2D tile-and-polygon physics sandbox.
//!
//! Bodies are entities; the tile grid and simulation parameters are
//! resources. Everything runs on Bevy's fixed timestep. Rendering, input
//! and level loading belong to the embedding application.

pub mod body;
pub mod collision;
pub mod grid;
pub mod math;
pub mod registry;
pub mod sets;
#[cfg(test)]
mod test_helpers;

use bevy::prelude::*;

/// Adds the whole simulation: config resources, body motion, and both
/// collision passes. Equivalent to adding [`registry::RegistryPlugin`],
/// [`body::BodyPlugin`] and [`collision::CollisionPlugin`] individually.
pub struct TumblePlugin;

impl Plugin for TumblePlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            registry::RegistryPlugin,
            body::BodyPlugin,
            collision::CollisionPlugin,
        ));
    }
}
