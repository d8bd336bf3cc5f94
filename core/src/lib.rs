#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the Gridlock engine.
//!
//! This crate defines the message surface that connects adapters, the
//! authoritative world, and pure systems. Adapters submit [`Command`] values
//! describing desired mutations, the world executes those commands via its
//! `apply` entry point, and then broadcasts [`Event`] values describing what
//! actually happened. Systems and adapters consume event streams, query
//! immutable snapshots, and respond exclusively with new command batches.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Commands that express all permissible world mutations.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    /// Requests that the player attempt one step in the provided direction.
    ///
    /// The step is a full player turn: enemies take their scripted reaction
    /// whether or not the player's own move succeeds.
    MovePlayer {
        /// Direction of the attempted step.
        direction: Direction,
    },
    /// Requests that the most recent recorded player turn be rolled back.
    Undo,
    /// Advances the simulation clock by the provided delta time.
    Tick {
        /// Duration of simulated time that elapsed since the previous tick.
        dt: Duration,
    },
}

/// Events broadcast by the world after processing commands.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Event {
    /// Confirms that the player completed a step between two coordinates.
    PlayerMoved {
        /// Coordinate the player occupied before moving.
        from: GridPos,
        /// Coordinate the player occupies after the move.
        to: GridPos,
    },
    /// Reports that the player's requested step could not be completed.
    MoveRejected {
        /// Direction of the rejected step.
        direction: Direction,
    },
    /// Confirms that a block was pushed between two coordinates.
    BlockPushed {
        /// Identifier of the block that moved.
        block: EntityId,
        /// Coordinate the block occupied before the push.
        from: GridPos,
        /// Coordinate the block occupies after the push.
        to: GridPos,
    },
    /// Reports that a push could not be completed and nothing moved.
    PushRejected {
        /// Coordinate holding the blocks that refused to move.
        origin: GridPos,
        /// Direction of the rejected push.
        direction: Direction,
        /// Specific reason the push failed.
        reason: PushError,
    },
    /// Confirms that a sliding block advanced one cell under momentum.
    BlockSlid {
        /// Identifier of the sliding block.
        block: EntityId,
        /// Coordinate the block occupied before sliding.
        from: GridPos,
        /// Coordinate the block occupies after the slide step.
        to: GridPos,
    },
    /// Announces that explosive material destroyed a cracked wall.
    Detonated {
        /// Identifier of the consumed explosive block.
        tnt: EntityId,
        /// Identifier of the destroyed wall.
        wall: EntityId,
        /// Coordinate where the explosion now burns.
        at: GridPos,
    },
    /// Announces that a door changed between open and closed.
    DoorToggled {
        /// Identifier of the affected door.
        door: EntityId,
        /// Whether the door is now open.
        open: bool,
    },
    /// Reports the target coverage tally after a recount.
    TargetsUpdated {
        /// Number of targets currently covered by a block.
        covered: usize,
        /// Number of covered targets required to win.
        needed: usize,
    },
    /// Announces that the win latch engaged. Emitted at most once per world.
    LevelWon,
    /// Confirms that one recorded player turn was rolled back.
    MoveUndone {
        /// Value of the move counter after the rollback.
        moves: u32,
    },
    /// Confirms that a scripted enemy advanced one cell.
    EnemyStepped {
        /// Identifier of the enemy that moved.
        enemy: EntityId,
        /// Coordinate the enemy occupied before moving.
        from: GridPos,
        /// Coordinate the enemy occupies after the move.
        to: GridPos,
    },
    /// Reports that an enemy occupies the player's coordinate.
    PlayerCaught {
        /// Identifier of the enemy sharing the player's cell.
        enemy: EntityId,
        /// Coordinate where the capture happened.
        at: GridPos,
    },
    /// Confirms that a queued birth entered the registry at the commit.
    EntitySpawned {
        /// Identifier assigned to the new entity.
        id: EntityId,
        /// Kind of the new entity.
        kind: EntityKind,
        /// Coordinate the entity occupies.
        at: GridPos,
    },
    /// Confirms that a queued death left the registry at the commit.
    EntityRemoved {
        /// Identifier of the removed entity.
        id: EntityId,
    },
}

/// Cardinal movement directions available to the player and enemies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Direction {
    /// Movement toward decreasing y coordinates.
    Up,
    /// Movement toward increasing y coordinates.
    Down,
    /// Movement toward decreasing x coordinates.
    Left,
    /// Movement toward increasing x coordinates.
    Right,
}

impl Direction {
    /// Per-axis offset applied by one step in this direction.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The opposite direction, used by patrolling enemies to turn around.
    #[must_use]
    pub const fn reversed(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// Unique identifier assigned to an entity for its world's lifetime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct EntityId(u32);

impl EntityId {
    /// Creates a new entity identifier with the provided numeric value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the numeric representation of the identifier.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

/// Location of a single grid cell expressed as signed x and y coordinates.
///
/// Coordinates outside the loaded grid are legal values; they simply hold no
/// entities and are therefore never traversable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    x: i32,
    y: i32,
}

impl GridPos {
    /// Creates a new grid coordinate.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Horizontal component of the coordinate.
    #[must_use]
    pub const fn x(&self) -> i32 {
        self.x
    }

    /// Vertical component of the coordinate.
    #[must_use]
    pub const fn y(&self) -> i32 {
        self.y
    }

    /// Coordinate reached by one step in the provided direction.
    #[must_use]
    pub const fn step(self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Computes the Manhattan distance between two coordinates.
    #[must_use]
    pub fn manhattan_distance(self, other: GridPos) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

/// Tagged entity kinds populating a world.
///
/// Capabilities are resolved from the tag once and queried through the
/// predicate methods below; nothing in the engine inspects runtime types.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    /// Traversable ground tile.
    Floor,
    /// Impassable wall tile.
    Wall,
    /// Impassable wall tile that explosive blocks can destroy.
    CrackedWall,
    /// Traversable tile that must be covered by a block to win.
    Target,
    /// Plain pushable block.
    Stone,
    /// Pushable block that detonates against cracked walls.
    Tnt,
    /// Pushable block that keeps sliding after a push.
    Ice,
    /// Traversable pressure pad that toggles its linked door.
    Switch,
    /// Tile that is traversable only while its linked switch is covered.
    Door,
    /// The player avatar.
    Player,
    /// Enemy that patrols horizontally and pushes blocks out of its way.
    Rogue,
    /// Enemy that paces vertically on a fixed cadence.
    Skeleton,
    /// Enemy that walks toward the player's position.
    Mage,
    /// Short-lived blast left behind by detonated explosives.
    Explosion,
}

impl EntityKind {
    /// Whether this kind participates in traversability queries.
    #[must_use]
    pub const fn is_tile(self) -> bool {
        matches!(
            self,
            EntityKind::Floor
                | EntityKind::Wall
                | EntityKind::CrackedWall
                | EntityKind::Target
                | EntityKind::Switch
                | EntityKind::Door
        )
    }

    /// Whether this kind can be pushed by the player or a rogue.
    #[must_use]
    pub const fn is_block(self) -> bool {
        matches!(self, EntityKind::Stone | EntityKind::Tnt | EntityKind::Ice)
    }

    /// Whether this kind toggles a linked door when covered.
    #[must_use]
    pub const fn is_pressure_pad(self) -> bool {
        matches!(self, EntityKind::Switch)
    }

    /// Whether this kind records per-turn history and rewinds on undo.
    #[must_use]
    pub const fn is_reversible(self) -> bool {
        self.is_block() || matches!(self, EntityKind::Player)
    }

    /// Whether this kind moves under a script rather than player input.
    #[must_use]
    pub const fn is_enemy(self) -> bool {
        matches!(
            self,
            EntityKind::Rogue | EntityKind::Skeleton | EntityKind::Mage
        )
    }
}

/// Reasons a push request can be refused.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PushError {
    /// A step destination is not a traversable coordinate.
    Impassable,
    /// A step destination is already occupied by another block.
    Occupied,
}

/// Ordered level description handed to the world constructor.
///
/// Record order is semantic: registry iteration order and the door/switch
/// pairing both follow it, so loaders must preserve file order exactly.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelLayout {
    /// Number of grid columns declared by the level.
    pub columns: u32,
    /// Number of grid rows declared by the level.
    pub rows: u32,
    /// Entity records in file order.
    pub entities: Vec<LevelEntity>,
}

/// One entity record within a [`LevelLayout`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelEntity {
    /// Kind of entity to construct.
    pub kind: EntityKind,
    /// Coordinate the entity starts at.
    pub position: GridPos,
}

#[cfg(test)]
mod tests {
    use serde::de::DeserializeOwned;
    use serde::Serialize;

    use crate::{Direction, EntityId, EntityKind, GridPos, LevelEntity, LevelLayout, PushError};

    #[test]
    fn step_applies_directional_offsets() {
        let origin = GridPos::new(3, 5);
        assert_eq!(origin.step(Direction::Up), GridPos::new(3, 4));
        assert_eq!(origin.step(Direction::Down), GridPos::new(3, 6));
        assert_eq!(origin.step(Direction::Left), GridPos::new(2, 5));
        assert_eq!(origin.step(Direction::Right), GridPos::new(4, 5));
    }

    #[test]
    fn step_crosses_the_origin() {
        assert_eq!(GridPos::new(0, 0).step(Direction::Left), GridPos::new(-1, 0));
    }

    #[test]
    fn manhattan_distance_is_symmetric() {
        let origin = GridPos::new(1, 1);
        let destination = GridPos::new(4, 3);
        assert_eq!(origin.manhattan_distance(destination), 5);
        assert_eq!(destination.manhattan_distance(origin), 5);
    }

    #[test]
    fn reversing_twice_restores_direction() {
        for direction in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_eq!(direction.reversed().reversed(), direction);
        }
    }

    #[test]
    fn tiles_and_blocks_are_disjoint_capabilities() {
        for kind in [EntityKind::Stone, EntityKind::Tnt, EntityKind::Ice] {
            assert!(kind.is_block());
            assert!(!kind.is_tile());
            assert!(kind.is_reversible());
        }
        for kind in [
            EntityKind::Floor,
            EntityKind::Wall,
            EntityKind::CrackedWall,
            EntityKind::Target,
            EntityKind::Switch,
            EntityKind::Door,
        ] {
            assert!(kind.is_tile());
            assert!(!kind.is_block());
        }
    }

    #[test]
    fn only_the_switch_is_a_pressure_pad() {
        assert!(EntityKind::Switch.is_pressure_pad());
        assert!(!EntityKind::Door.is_pressure_pad());
        assert!(!EntityKind::Target.is_pressure_pad());
    }

    #[test]
    fn enemies_do_not_rewind() {
        for kind in [EntityKind::Rogue, EntityKind::Skeleton, EntityKind::Mage] {
            assert!(kind.is_enemy());
            assert!(!kind.is_reversible());
        }
        assert!(EntityKind::Player.is_reversible());
    }

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn entity_id_round_trips_through_bincode() {
        assert_round_trip(&EntityId::new(42));
    }

    #[test]
    fn push_error_round_trips_through_bincode() {
        assert_round_trip(&PushError::Occupied);
    }

    #[test]
    fn level_layout_round_trips_through_bincode() {
        let layout = LevelLayout {
            columns: 2,
            rows: 2,
            entities: vec![
                LevelEntity {
                    kind: EntityKind::Floor,
                    position: GridPos::new(0, 0),
                },
                LevelEntity {
                    kind: EntityKind::Player,
                    position: GridPos::new(0, 0),
                },
            ],
        };
        assert_round_trip(&layout);
    }
}
