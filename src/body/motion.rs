use bevy::prelude::*;

use crate::body::{
    Acceleration, BodyKind, BodySize, Contacts, Destroyed, Jumping, Kinematics, Orientation,
    Velocity,
};
use crate::collision::tiles;
use crate::grid::TileGrid;
use crate::registry::map::MapConfig;
use crate::registry::physics::PhysicsConfig;

/// Upward offset applied when leaving the ground, so the next tile pass
/// doesn't immediately re-snap the body onto it.
const JUMP_CLEARANCE: f32 = 0.1;

/// Advance every dynamic body by one fixed tick.
///
/// Per body: acceleration and gravity feed velocity, then position is
/// applied one axis at a time — y first, then x — with a tile resolution
/// pass after each axis. The two axes are never applied simultaneously;
/// side contact flags would be wrong otherwise.
pub fn update_bodies(
    time: Res<Time>,
    physics: Res<PhysicsConfig>,
    map: Res<MapConfig>,
    grid: Res<TileGrid>,
    mut bodies: Query<
        (
            &BodyKind,
            &Kinematics,
            &BodySize,
            &Orientation,
            &mut Transform,
            &mut Velocity,
            &mut Acceleration,
            &mut Contacts,
            &mut Jumping,
        ),
        Without<Destroyed>,
    >,
) {
    let dt = time.delta_secs();
    for (kind, kinematics, size, orientation, mut transform, mut vel, mut acc, mut contacts, mut jumping) in
        &mut bodies
    {
        if *kind == BodyKind::Static {
            continue;
        }

        if kinematics.apply_velocity {
            if !kinematics.constant_x_velocity {
                vel.x += acc.x * dt;
            }
            if kinematics.apply_gravity {
                vel.y += physics.gravity * dt;
            }

            transform.translation.y += vel.y * dt;
            if kinematics.check_tiles {
                tiles::resolve_body(
                    &mut transform.translation,
                    size,
                    &mut vel,
                    &mut acc,
                    &mut contacts,
                    &mut jumping,
                    &grid,
                    &map,
                    &physics,
                );
            }

            transform.translation.x += vel.x * dt;
            if kinematics.check_tiles {
                tiles::resolve_body(
                    &mut transform.translation,
                    size,
                    &mut vel,
                    &mut acc,
                    &mut contacts,
                    &mut jumping,
                    &grid,
                    &map,
                    &physics,
                );
            }
        }

        // Pose is rebuilt from the current position/rotation every tick;
        // nothing accumulates into the transform across ticks.
        transform.rotation = Quat::from_rotation_z(orientation.0);
    }
}

/// Launch a grounded body upward. Does nothing unless the body touched
/// the ground on its last tile pass.
pub fn jump(
    velocity: &mut Velocity,
    translation: &mut Vec3,
    contacts: &Contacts,
    jumping: &mut Jumping,
    impulse: f32,
) {
    if contacts.bottom {
        velocity.y = impulse;
        translation.y += JUMP_CLEARANCE;
        jumping.0 = true;
    }
}
