pub mod sat;
pub mod tiles;

use bevy::prelude::*;

use crate::body::{BodySize, Colliding, Destroyed, Orientation, Player};
use crate::sets::PhysicsSet;

pub struct CollisionPlugin;

impl Plugin for CollisionPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(FixedUpdate, resolve_overlaps.in_set(PhysicsSet::Overlap));
    }
}

struct OverlapEntry {
    entity: Entity,
    corners: [Vec2; 4],
    player: bool,
}

/// Polygon pass over every ordered pair of live bodies.
///
/// Corners are snapshotted from each body's pose at the start of the
/// tick, so a correction applied mid-pass shows up next tick, not in
/// later pairs of this one. Any overlapping pair flags both bodies
/// `Colliding`; only a body carrying [`Player`] is actually moved, and
/// only in the iteration where it is the first operand, so the push
/// points away from the obstacle. Two overlapping non-player bodies are
/// reported but left where they are.
pub fn resolve_overlaps(
    mut bodies: Query<
        (
            Entity,
            &mut Transform,
            &BodySize,
            &Orientation,
            &mut Colliding,
            Option<&Player>,
        ),
        Without<Destroyed>,
    >,
) {
    for (_, _, _, _, mut colliding, _) in &mut bodies {
        colliding.0 = false;
    }

    let entries: Vec<OverlapEntry> = bodies
        .iter()
        .map(|(entity, transform, size, orientation, _, player)| OverlapEntry {
            entity,
            corners: sat::world_corners(
                transform.translation.truncate(),
                Vec2::new(size.width, size.height),
                orientation.0,
            ),
            player: player.is_some(),
        })
        .collect();

    for i in 0..entries.len() {
        for j in 0..entries.len() {
            if i == j {
                continue;
            }
            let Some(push) = sat::overlap(&entries[i].corners, &entries[j].corners) else {
                continue;
            };

            for entity in [entries[i].entity, entries[j].entity] {
                if let Ok((_, _, _, _, mut colliding, _)) = bodies.get_mut(entity) {
                    colliding.0 = true;
                }
            }

            if entries[i].player {
                if let Ok((_, mut transform, _, _, _, _)) = bodies.get_mut(entries[i].entity) {
                    transform.translation.x += push.x;
                    transform.translation.y += push.y;
                }
            }
        }
    }
}
