use bevy::prelude::*;

use crate::body::{Destroyed, Expires};

/// Tick expiry timers and mark bodies whose time is up.
pub fn expire_bodies(
    time: Res<Time>,
    mut commands: Commands,
    mut query: Query<(Entity, &mut Expires), Without<Destroyed>>,
) {
    for (entity, mut expires) in &mut query {
        expires.timer.tick(time.delta());
        if expires.timer.just_finished() {
            commands.entity(entity).insert(Destroyed);
        }
    }
}

/// Remove destroyed bodies from the world. Runs after [`expire_bodies`]
/// so a body expiring this tick is gone by the next one.
pub fn despawn_destroyed(mut commands: Commands, query: Query<Entity, With<Destroyed>>) {
    for entity in &query {
        commands.entity(entity).despawn();
    }
}
