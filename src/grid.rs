use bevy::prelude::*;

/// One layer of tile ids, row-major. Id 0 is empty; anything above is solid.
#[derive(Debug, Clone, Default)]
pub struct TileLayer {
    width: usize,
    height: usize,
    tiles: Vec<u16>,
}

impl TileLayer {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            tiles: vec![0; width * height],
        }
    }

    /// Tile id at `(col, row)`, or `None` when outside the layer.
    pub fn get(&self, col: i32, row: i32) -> Option<u16> {
        if col < 0 || row < 0 {
            return None;
        }
        let (col, row) = (col as usize, row as usize);
        if col >= self.width || row >= self.height {
            return None;
        }
        Some(self.tiles[row * self.width + col])
    }

    /// Write a tile id. Out-of-range writes are ignored.
    pub fn set(&mut self, col: usize, row: usize, id: u16) {
        if col < self.width && row < self.height {
            self.tiles[row * self.width + col] = id;
        }
    }
}

/// Static world geometry: a stack of tile layers, indexed
/// layer → row → column. Read-only to the collision passes; the level
/// collaborator owns its contents.
#[derive(Resource, Debug, Clone, Default)]
pub struct TileGrid {
    layers: Vec<TileLayer>,
}

impl TileGrid {
    pub fn from_layers(layers: Vec<TileLayer>) -> Self {
        Self { layers }
    }

    /// Tile id at `(col, row)` of `layer`, or `None` when any index is
    /// out of range.
    pub fn tile_at(&self, layer: usize, col: i32, row: i32) -> Option<u16> {
        self.layers.get(layer)?.get(col, row)
    }

    /// Whether the cell holds a solid tile. Out-of-range cells are empty.
    pub fn is_solid(&self, layer: usize, col: i32, row: i32) -> bool {
        self.tile_at(layer, col, row).is_some_and(|id| id > 0)
    }

    /// Whether the cell under a world position holds a solid tile.
    pub fn solid_at_world(&self, layer: usize, world_x: f32, world_y: f32, tile_size: f32) -> bool {
        let (col, row) = world_to_cell(world_x, world_y, tile_size);
        self.is_solid(layer, col, row)
    }
}

/// Map a world position to tile coordinates.
///
/// World y grows upward while rows grow downward; the map's top edge is
/// `y = 0` and its interior lies at negative y, so the row is
/// `floor(-y / tile_size)`. The negation must match [`crate::math::tile_bounds`].
pub fn world_to_cell(world_x: f32, world_y: f32, tile_size: f32) -> (i32, i32) {
    (
        (world_x / tile_size).floor() as i32,
        (-world_y / tile_size).floor() as i32,
    )
}
