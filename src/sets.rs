use bevy::prelude::*;

/// Fixed-tick system ordering for the simulation.
///
/// Configured as a chain: Motion → Overlap → Cleanup. Motion integrates
/// bodies and resolves them against the tile grid; Overlap runs the
/// polygon all-pairs pass; Cleanup expires and despawns dead bodies.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum PhysicsSet {
    Motion,
    Overlap,
    Cleanup,
}
