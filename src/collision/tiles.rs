use bevy::prelude::*;

use crate::body::{Acceleration, BodySize, Contacts, Jumping, Velocity};
use crate::grid::{TileGrid, world_to_cell};
use crate::math::{Aabb, tile_bounds};
use crate::registry::map::MapConfig;
use crate::registry::physics::PhysicsConfig;

/// The head probe sits below the true top edge (height / 2.6 rather than
/// height / 2), so a ceiling hit only registers once the body is well
/// into the tile. Long-standing tuning; keep in sync with the tests.
const HEADROOM_DIVISOR: f32 = 2.6;

/// Resolve one rectangular body against the solid tile layer.
///
/// Runs the checks in a fixed order every call: world-boundary clamps,
/// then ground, ceiling, left and right probes. Each edge probes its
/// center cell plus the two corner-adjacent cells and stops at the first
/// solid hit. All four contact flags are recomputed from scratch; a side
/// with no hit this call reads `false` afterwards no matter what earlier
/// passes saw.
///
/// Vertical hits zero `velocity.y`; side hits zero `acceleration.x` and
/// leave velocity alone. Corrections snap the touching edge exactly onto
/// the tile boundary, so re-running on an already-resolved body moves it
/// no further.
pub fn resolve_body(
    translation: &mut Vec3,
    size: &BodySize,
    velocity: &mut Velocity,
    acceleration: &mut Acceleration,
    contacts: &mut Contacts,
    jumping: &mut Jumping,
    grid: &TileGrid,
    map: &MapConfig,
    physics: &PhysicsConfig,
) {
    let ts = map.tile_size;
    let layer = map.solid_layer;
    let half_w = size.width / 2.0;
    let half_h = size.height / 2.0;

    contacts.clear();

    // World-boundary clamps come first and never depend on tiles. The
    // bottom one is a soft respawn: nudge up, don't pin.
    let bounds = Aabb::from_center(translation.x, translation.y, size.width, size.height);
    if bounds.min_x < 0.0 {
        translation.x = half_w;
    }
    if bounds.max_x > map.world_width() {
        translation.x = map.world_width() - half_w;
    }
    if bounds.max_y > 0.0 {
        translation.y = -half_h;
    }
    if bounds.min_y < -map.world_height() {
        translation.y += physics.fall_recovery;
    }

    // Ground: probe at the bottom edge, center column ± one tile.
    let foot_y = translation.y - half_h;
    let (center_col, foot_row) = world_to_cell(translation.x, foot_y, ts);
    for col in [center_col, center_col - 1, center_col + 1] {
        if grid.is_solid(layer, col, foot_row) {
            velocity.y = 0.0;
            jumping.0 = false;
            translation.y += tile_bounds(col, foot_row, ts).max_y - foot_y;
            contacts.bottom = true;
            break;
        }
    }

    // Ceiling: probe below the true top edge, center column ± one tile.
    let head_y = translation.y + size.height / HEADROOM_DIVISOR;
    let (center_col, head_row) = world_to_cell(translation.x, head_y, ts);
    for col in [center_col, center_col + 1, center_col - 1] {
        if grid.is_solid(layer, col, head_row) {
            velocity.y = 0.0;
            translation.y -= head_y - tile_bounds(col, head_row, ts).min_y;
            contacts.top = true;
            break;
        }
    }

    // Left: probe at the left edge, center row ± one tile.
    let left_x = translation.x - half_w;
    let (left_col, center_row) = world_to_cell(left_x, translation.y, ts);
    for row in [center_row, center_row + 1, center_row - 1] {
        if grid.is_solid(layer, left_col, row) {
            translation.x += tile_bounds(left_col, row, ts).max_x - left_x;
            acceleration.x = 0.0;
            contacts.left = true;
            break;
        }
    }

    // Right: probe at the right edge, center row ± one tile.
    let right_x = translation.x + half_w;
    let (right_col, center_row) = world_to_cell(right_x, translation.y, ts);
    for row in [center_row, center_row + 1, center_row - 1] {
        if grid.is_solid(layer, right_col, row) {
            translation.x -= (right_x - tile_bounds(right_col, row, ts).min_x).abs();
            acceleration.x = 0.0;
            contacts.right = true;
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::TileLayer;
    use crate::test_helpers::fixtures;

    struct TestBody {
        translation: Vec3,
        size: BodySize,
        velocity: Velocity,
        acceleration: Acceleration,
        contacts: Contacts,
        jumping: Jumping,
    }

    impl TestBody {
        // Bodies stand about three tiles tall, like the sandbox's own;
        // much squatter and the corner-adjacent side probes would reach
        // the row the body stands on.
        fn at(x: f32, y: f32) -> Self {
            Self {
                translation: Vec3::new(x, y, 0.0),
                size: BodySize {
                    width: 1.0,
                    height: 3.0,
                },
                velocity: Velocity::default(),
                acceleration: Acceleration::default(),
                contacts: Contacts::default(),
                jumping: Jumping(false),
            }
        }

        fn resolve(&mut self, grid: &TileGrid) {
            resolve_body(
                &mut self.translation,
                &self.size,
                &mut self.velocity,
                &mut self.acceleration,
                &mut self.contacts,
                &mut self.jumping,
                grid,
                &fixtures::test_map_config(),
                &fixtures::test_physics_config(),
            );
        }
    }

    // 16x8 map, tile size 1.0: floor along row 7 (y ∈ [-8, -7]).
    fn floor_grid() -> TileGrid {
        let mut layer = TileLayer::new(16, 8);
        for col in 0..16 {
            layer.set(col, 7, 1);
        }
        TileGrid::from_layers(vec![layer])
    }

    fn grid_with_tiles(tiles: &[(usize, usize)]) -> TileGrid {
        let mut layer = TileLayer::new(16, 8);
        for &(col, row) in tiles {
            layer.set(col, row, 1);
        }
        TileGrid::from_layers(vec![layer])
    }

    #[test]
    fn airborne_body_has_no_contacts() {
        let grid = floor_grid();
        let mut body = TestBody::at(5.5, -3.0);
        body.velocity.y = -2.0;
        body.resolve(&grid);

        assert!(!body.contacts.bottom);
        assert!(!body.contacts.top);
        assert!(!body.contacts.left);
        assert!(!body.contacts.right);
        assert_eq!(body.translation.y, -3.0);
        assert_eq!(body.velocity.y, -2.0);
    }

    #[test]
    fn ground_hit_snaps_bottom_edge_to_tile_boundary() {
        let grid = floor_grid();
        let mut body = TestBody::at(5.5, -5.7);
        body.velocity.y = -3.0;
        body.jumping.0 = true;
        body.resolve(&grid);

        // Floor top is y = -7; bottom edge lands exactly on it.
        assert!((body.translation.y - -5.5).abs() < 1e-6);
        assert_eq!(body.velocity.y, 0.0);
        assert!(body.contacts.bottom);
        assert!(!body.jumping.0);
    }

    #[test]
    fn resolution_is_idempotent() {
        let grid = floor_grid();
        let mut body = TestBody::at(5.5, -5.7);
        body.resolve(&grid);
        let settled = body.translation;
        body.resolve(&grid);

        assert_eq!(body.translation, settled);
        assert!(body.contacts.bottom);
    }

    #[test]
    fn contact_flags_are_not_sticky() {
        let grid = floor_grid();
        let mut body = TestBody::at(5.5, -5.7);
        body.resolve(&grid);
        assert!(body.contacts.bottom);

        body.translation.y = -3.0;
        body.resolve(&grid);
        assert!(!body.contacts.bottom);
    }

    #[test]
    fn bottom_probe_spans_adjacent_columns() {
        // Single floor tile at column 4; body centered over column 5
        // still grounds through the corner-adjacent probe.
        let grid = grid_with_tiles(&[(4, 7)]);
        let mut body = TestBody::at(5.5, -5.8);
        body.resolve(&grid);

        assert!(body.contacts.bottom);
        assert!((body.translation.y - -5.5).abs() < 1e-6);
    }

    #[test]
    fn left_boundary_clamp_is_exact() {
        let grid = floor_grid();
        let mut body = TestBody::at(-30.0, -5.0);
        body.resolve(&grid);
        assert_eq!(body.translation.x, 0.5);
    }

    #[test]
    fn right_boundary_clamp_is_exact() {
        let grid = floor_grid();
        let mut body = TestBody::at(99.0, -5.0);
        body.resolve(&grid);
        assert_eq!(body.translation.x, 15.5);
    }

    #[test]
    fn body_never_rises_above_the_map() {
        let grid = floor_grid();
        let mut body = TestBody::at(5.5, 2.0);
        body.resolve(&grid);
        assert_eq!(body.translation.y, -1.5);
    }

    #[test]
    fn falling_out_of_the_map_nudges_back_up() {
        // Empty grid: the nudge alone, without a ground snap on top.
        let grid = TileGrid::from_layers(vec![TileLayer::new(16, 8)]);
        let mut body = TestBody::at(5.5, -9.0);
        body.resolve(&grid);
        // Soft respawn: one recovery step, not a clamp to the floor.
        assert!((body.translation.y - -6.2).abs() < 1e-6);
    }

    #[test]
    fn ceiling_hit_pushes_head_probe_to_tile_bottom() {
        // Ceiling tile at (2, 0); a wide body keeps the side probes away
        // from column 2 so only the head probe can reach it.
        let grid = grid_with_tiles(&[(2, 0)]);
        let mut body = TestBody::at(2.5, -1.5);
        body.size = BodySize {
            width: 3.0,
            height: 2.0,
        };
        body.velocity.y = 3.0;
        body.resolve(&grid);

        assert!(body.contacts.top);
        assert_eq!(body.velocity.y, 0.0);
        // The probe point (center + height/2.6) ends exactly on the tile
        // bottom at y = -1.
        let head = body.translation.y + body.size.height / 2.6;
        assert!((head - -1.0).abs() < 1e-5);
    }

    #[test]
    fn right_contact_pushes_out_of_wall_column() {
        let grid = grid_with_tiles(&[(4, 3)]);
        let mut body = TestBody::at(3.6, -2.6);
        body.velocity.x = 2.0;
        body.acceleration.x = 5.0;
        body.resolve(&grid);

        assert!(body.contacts.right);
        assert!((body.translation.x - 3.5).abs() < 1e-6);
        // Side hits kill acceleration, not velocity.
        assert_eq!(body.acceleration.x, 0.0);
        assert_eq!(body.velocity.x, 2.0);
        assert!(!body.contacts.bottom);
    }

    #[test]
    fn left_contact_pushes_out_of_wall_column() {
        let grid = grid_with_tiles(&[(4, 3)]);
        let mut body = TestBody::at(5.4, -2.6);
        body.acceleration.x = -5.0;
        body.resolve(&grid);

        assert!(body.contacts.left);
        assert!((body.translation.x - 5.5).abs() < 1e-6);
        assert_eq!(body.acceleration.x, 0.0);
    }
}
