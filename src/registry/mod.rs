pub mod loader;
pub mod map;
pub mod physics;

use bevy::prelude::*;

use crate::grid::TileGrid;
use map::MapConfig;
use physics::PhysicsConfig;

/// Installs the simulation's config resources and an empty tile grid.
///
/// The embedding application replaces them at level load, either built in
/// code or parsed from RON via [`loader::from_ron_str`].
pub struct RegistryPlugin;

impl Plugin for RegistryPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MapConfig>()
            .init_resource::<PhysicsConfig>()
            .init_resource::<TileGrid>();
        debug!("registry defaults installed");
    }
}
