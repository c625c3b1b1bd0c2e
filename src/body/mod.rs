pub mod lifecycle;
pub mod motion;

use bevy::prelude::*;

use crate::sets::PhysicsSet;

/// Fixed simulation rate. One tick is ~16.67 ms regardless of frame rate.
pub const TICK_HZ: f64 = 60.0;

/// Marker: the controllable body. Of a colliding polygon pair, only the
/// body carrying this marker is pushed out (see `collision`).
#[derive(Component)]
pub struct Player;

/// Linear velocity in world units per second.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Velocity {
    pub x: f32,
    pub y: f32,
}

/// Linear acceleration in world units per second squared.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Acceleration {
    pub x: f32,
    pub y: f32,
}

/// Full extents of the body's rectangle; half-extents are size / 2.
#[derive(Component, Debug, Clone, Copy)]
pub struct BodySize {
    pub width: f32,
    pub height: f32,
}

/// Rotation of the body around its center, in radians.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Orientation(pub f32);

/// Static bodies never integrate or move; they still block other bodies
/// in the polygon pass.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BodyKind {
    #[default]
    Dynamic,
    Static,
}

/// Per-body integration switches.
#[derive(Component, Debug, Clone)]
pub struct Kinematics {
    /// Master switch: when false the body keeps its pose untouched.
    pub apply_velocity: bool,
    pub apply_gravity: bool,
    /// Horizontal velocity is held externally; acceleration is ignored
    /// on that axis.
    pub constant_x_velocity: bool,
    /// Resolve against the tile grid after each axis is applied.
    pub check_tiles: bool,
}

impl Default for Kinematics {
    fn default() -> Self {
        Self {
            apply_velocity: true,
            apply_gravity: true,
            constant_x_velocity: false,
            check_tiles: true,
        }
    }
}

/// Which sides of the body touched the tile grid during the last
/// resolution pass. Fully recomputed every pass, never sticky.
#[derive(Component, Debug, Clone, Copy, Default)]
pub struct Contacts {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
}

impl Contacts {
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Set for every body that overlapped another polygon this tick.
#[derive(Component, Debug, Default)]
pub struct Colliding(pub bool);

/// True between a jump and the next ground contact.
#[derive(Component, Debug, Default)]
pub struct Jumping(pub bool);

/// Marks a body for removal. The cleanup pass despawns it; until then
/// both collision passes skip it.
#[derive(Component)]
pub struct Destroyed;

/// Marks the body [`Destroyed`] once the timer runs out.
#[derive(Component)]
pub struct Expires {
    pub timer: Timer,
}

impl Expires {
    pub fn after_seconds(seconds: f32) -> Self {
        Self {
            timer: Timer::from_seconds(seconds, TimerMode::Once),
        }
    }
}

pub struct BodyPlugin;

impl Plugin for BodyPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(Time::<Fixed>::from_hz(TICK_HZ))
            .configure_sets(
                FixedUpdate,
                (PhysicsSet::Motion, PhysicsSet::Overlap, PhysicsSet::Cleanup).chain(),
            )
            .add_systems(FixedUpdate, motion::update_bodies.in_set(PhysicsSet::Motion))
            .add_systems(
                FixedUpdate,
                (lifecycle::expire_bodies, lifecycle::despawn_destroyed)
                    .chain()
                    .in_set(PhysicsSet::Cleanup),
            );
    }
}
