use bevy::prelude::*;
use serde::Deserialize;

/// Map dimensions and tile metrics, supplied once at level load.
///
/// The map occupies `x ∈ [0, width]` and `y ∈ [-height, 0]` in world
/// units: the top edge of the map sits at `y = 0` and tile rows grow
/// downward from there.
#[derive(Resource, Debug, Clone, Deserialize)]
pub struct MapConfig {
    pub width_tiles: i32,
    pub height_tiles: i32,
    /// World units per tile.
    pub tile_size: f32,
    /// Grid layer consulted by the tile collision pass.
    pub solid_layer: usize,
}

impl MapConfig {
    pub fn world_width(&self) -> f32 {
        self.width_tiles as f32 * self.tile_size
    }

    pub fn world_height(&self) -> f32 {
        self.height_tiles as f32 * self.tile_size
    }
}

impl Default for MapConfig {
    fn default() -> Self {
        Self {
            width_tiles: 128,
            height_tiles: 32,
            tile_size: 0.18,
            solid_layer: 0,
        }
    }
}
