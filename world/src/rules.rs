//! Traversability and occupancy predicates over the entity registry.
//!
//! These are pure scans of the insertion-ordered entity list. Coordinates
//! outside the loaded grid hold no entities and therefore fail the
//! at-least-one-tile requirement, so out-of-bounds and walled-off cells are
//! indistinguishable to callers.

use gridlock_core::{EntityId, EntityKind, GridPos};

use crate::{Behaviour, Entity};

/// Reports whether a unit or block may stand on the provided coordinate.
///
/// A single closed tile vetoes the cell no matter what else is stacked
/// there; a cell with no tile at all cannot be stood on.
pub(crate) fn traversable(entities: &[Entity], position: GridPos) -> bool {
    let mut found_tile = false;
    for entity in entities {
        if entity.position != position || !entity.kind.is_tile() {
            continue;
        }
        if !tile_open(entity) {
            return false;
        }
        found_tile = true;
    }
    found_tile
}

/// Reports whether any pushable block occupies the provided coordinate.
pub(crate) fn has_block(entities: &[Entity], position: GridPos) -> bool {
    entities
        .iter()
        .any(|entity| entity.kind.is_block() && entity.position == position)
}

/// Reports whether any pressure pad occupies the provided coordinate.
pub(crate) fn has_pressure_pad(entities: &[Entity], position: GridPos) -> bool {
    entities
        .iter()
        .any(|entity| entity.kind.is_pressure_pad() && entity.position == position)
}

/// Reports whether a block outside the moving set occupies the coordinate.
///
/// The push resolver excludes the blocks it is about to move so that blocks
/// sharing an origin do not obstruct each other.
pub(crate) fn block_occupied_excluding(
    entities: &[Entity],
    position: GridPos,
    moving: &[EntityId],
) -> bool {
    entities.iter().any(|entity| {
        entity.kind.is_block() && entity.position == position && !moving.contains(&entity.id)
    })
}

/// Whether a tile-capable entity currently lets movers stand on it.
///
/// Callers guarantee `entity.kind.is_tile()`.
fn tile_open(entity: &Entity) -> bool {
    match entity.kind {
        EntityKind::Wall | EntityKind::CrackedWall => false,
        EntityKind::Door => matches!(entity.behaviour, Behaviour::Door { open: true }),
        _ => true,
    }
}
