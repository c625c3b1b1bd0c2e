use bevy::math::Affine2;
use bevy::prelude::*;

/// Axis-aligned bounding box for 2D collision detection.
pub struct Aabb {
    pub min_x: f32,
    pub max_x: f32,
    pub min_y: f32,
    pub max_y: f32,
}

impl Aabb {
    pub fn from_center(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            min_x: x - w / 2.0,
            max_x: x + w / 2.0,
            min_y: y - h / 2.0,
            max_y: y + h / 2.0,
        }
    }
}

/// World-space bounds of the tile at grid coordinates `(col, row)`.
///
/// Rows grow downward from the top of the map at `y = 0`: row 0 spans
/// `[-tile_size, 0]`, row 1 spans `[-2 * tile_size, -tile_size]`, and so on.
pub fn tile_bounds(col: i32, row: i32, tile_size: f32) -> Aabb {
    Aabb {
        min_x: col as f32 * tile_size,
        max_x: (col + 1) as f32 * tile_size,
        min_y: -(row + 1) as f32 * tile_size,
        max_y: -row as f32 * tile_size,
    }
}

/// Local-space corners of a unit rectangle centered on the origin,
/// ordered top-left, bottom-left, bottom-right, top-right.
pub const UNIT_RECT: [Vec2; 4] = [
    Vec2::new(-0.5, 0.5),
    Vec2::new(-0.5, -0.5),
    Vec2::new(0.5, -0.5),
    Vec2::new(0.5, 0.5),
];

/// Body pose as a single affine map, rebuilt from scratch every tick
/// (never mutated incrementally).
///
/// Composition order is translate ∘ scale ∘ rotate: rotation is applied
/// first, then scale in world axes, then translation. Scale outside the
/// rotation means a rotated non-square body shears; that is the
/// sandbox's long-standing behavior and callers rely on it.
pub fn compose_pose(translation: Vec2, scale: Vec2, angle: f32) -> Affine2 {
    Affine2::from_translation(translation)
        * Affine2::from_scale(scale)
        * Affine2::from_angle(angle)
}
