pub mod fixtures {
    use bevy::prelude::*;

    use crate::body::{
        Acceleration, BodyKind, BodySize, Colliding, Contacts, Jumping, Kinematics, Orientation,
        Velocity,
    };
    use crate::grid::{TileGrid, TileLayer};
    use crate::registry::map::MapConfig;
    use crate::registry::physics::PhysicsConfig;

    /// 16x8 map with unit tiles; the map spans x ∈ [0, 16], y ∈ [-8, 0].
    pub fn test_map_config() -> MapConfig {
        MapConfig {
            width_tiles: 16,
            height_tiles: 8,
            tile_size: 1.0,
            solid_layer: 0,
        }
    }

    pub fn test_physics_config() -> PhysicsConfig {
        PhysicsConfig::default()
    }

    /// One layer with a solid floor along the bottom row (y ∈ [-8, -7]).
    pub fn platform_grid() -> TileGrid {
        let mut layer = TileLayer::new(16, 8);
        for col in 0..16 {
            layer.set(col, 7, 1);
        }
        TileGrid::from_layers(vec![layer])
    }

    /// A grounded, gravity-affected body that collides with the grid.
    pub fn dynamic_body(x: f32, y: f32, width: f32, height: f32) -> impl Bundle {
        (
            BodyKind::Dynamic,
            Kinematics::default(),
            BodySize { width, height },
            Orientation::default(),
            Velocity::default(),
            Acceleration::default(),
            Contacts::default(),
            Colliding::default(),
            Jumping::default(),
            Transform::from_xyz(x, y, 0.0),
        )
    }

    /// A free-floating body for the polygon pass: no gravity, no tile
    /// resolution.
    pub fn free_body(x: f32, y: f32, width: f32, height: f32) -> impl Bundle {
        (
            BodyKind::Dynamic,
            Kinematics {
                apply_gravity: false,
                check_tiles: false,
                ..Default::default()
            },
            BodySize { width, height },
            Orientation::default(),
            Velocity::default(),
            Acceleration::default(),
            Contacts::default(),
            Colliding::default(),
            Jumping::default(),
            Transform::from_xyz(x, y, 0.0),
        )
    }

    /// Minimal Bevy App with the simulation resources for system tests.
    pub fn test_app() -> App {
        let mut app = App::new();
        app.add_plugins(MinimalPlugins);
        app.insert_resource(test_map_config());
        app.insert_resource(test_physics_config());
        app.insert_resource(platform_grid());
        app
    }
}
