#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Authoritative world state management for Gridlock.
//!
//! The world owns the entity registry and executes [`Command`] values handed
//! in by adapters, broadcasting [`Event`] values describing every mutation.
//! All registry growth and shrinkage funnels through birth/death queues that
//! apply at a single commit boundary per command, so no update pass ever
//! observes the registry changing underneath it.

use std::time::Duration;

use gridlock_core::{
    Command, Direction, EntityId, EntityKind, Event, GridPos, LevelLayout, PushError,
};

mod rules;

/// Simulated time an ice block needs to slide one further cell.
const SLIDE_QUANTUM: Duration = Duration::from_millis(250);

/// Simulated time between two skeleton steps.
const SENTRY_QUANTUM: Duration = Duration::from_secs(1);

/// Simulated time an explosion burns before removing itself.
const BLAST_FUSE: Duration = Duration::from_millis(400);

/// Represents the authoritative Gridlock world state.
///
/// Constructed once per level from a [`LevelLayout`] and discarded by the
/// host on reset or advance. Registry order is the layout's record order and
/// never changes except at the commit boundary.
#[derive(Debug)]
pub struct World {
    entities: Vec<Entity>,
    births: Vec<Entity>,
    deaths: Vec<EntityId>,
    next_entity: u32,
    columns: u32,
    rows: u32,
    moves: u32,
    targets_needed: usize,
    targets_covered: usize,
    won: bool,
}

impl World {
    /// Builds a world from an ordered level description.
    ///
    /// Entities are registered in record order, the door/switch linkage is
    /// established once, and doors and targets are brought in line with the
    /// starting block positions. Construction cannot fail: unknown kinds are
    /// a loader concern and never reach this constructor.
    #[must_use]
    pub fn from_layout(layout: &LevelLayout) -> Self {
        let mut world = Self {
            entities: Vec::with_capacity(layout.entities.len()),
            births: Vec::new(),
            deaths: Vec::new(),
            next_entity: 0,
            columns: layout.columns,
            rows: layout.rows,
            moves: 0,
            targets_needed: 0,
            targets_covered: 0,
            won: false,
        };

        for record in &layout.entities {
            let id = world.allocate_id();
            world
                .entities
                .push(Entity::from_kind(id, record.kind, record.position));
        }

        world.targets_needed = world
            .entities
            .iter()
            .filter(|entity| entity.kind == EntityKind::Target)
            .count();

        world.link_doors();

        // Initial door and target state is part of construction; the events
        // it would produce have no audience yet.
        let mut discarded = Vec::new();
        world.sync_doors(&mut discarded);
        world.retarget(&mut discarded);

        world
    }

    /// Queues an entity for insertion at the next commit boundary.
    ///
    /// The identifier is assigned immediately so a death can be queued
    /// against an entity birthed in the same pass.
    pub fn queue_birth(&mut self, kind: EntityKind, position: GridPos) -> EntityId {
        let id = self.allocate_id();
        self.births.push(Entity::from_kind(id, kind, position));
        id
    }

    /// Queues an entity for removal at the next commit boundary.
    ///
    /// Queuing an unknown or already-queued identifier is harmless; the
    /// commit simply finds nothing to remove.
    pub fn queue_death(&mut self, id: EntityId) {
        self.deaths.push(id);
    }

    fn allocate_id(&mut self) -> EntityId {
        let id = EntityId::new(self.next_entity);
        self.next_entity = self.next_entity.saturating_add(1);
        id
    }

    fn index_of(&self, id: EntityId) -> Option<usize> {
        self.entities.iter().position(|entity| entity.id == id)
    }

    fn player_position(&self) -> Option<GridPos> {
        self.entities
            .iter()
            .find(|entity| entity.kind == EntityKind::Player)
            .map(|entity| entity.position)
    }

    /// Applies all queued births, then all queued deaths. Idempotent when
    /// both queues are empty.
    fn commit(&mut self, out_events: &mut Vec<Event>) {
        for entity in std::mem::take(&mut self.births) {
            out_events.push(Event::EntitySpawned {
                id: entity.id,
                kind: entity.kind,
                at: entity.position,
            });
            self.entities.push(entity);
        }
        for id in std::mem::take(&mut self.deaths) {
            if let Some(at) = self.index_of(id) {
                let _ = self.entities.remove(at);
                out_events.push(Event::EntityRemoved { id });
            }
        }
    }

    /// Pairs each door with the first switch not yet linked, in registry
    /// order on both sides. Doors beyond the switch supply stay unlinked,
    /// which is legal: they simply never open.
    fn link_doors(&mut self) {
        let doors: Vec<EntityId> = self
            .entities
            .iter()
            .filter(|entity| entity.kind == EntityKind::Door)
            .map(|entity| entity.id)
            .collect();

        for door in doors {
            let unlinked = self
                .entities
                .iter_mut()
                .find(|entity| matches!(entity.behaviour, Behaviour::Switch { door: None }));
            if let Some(switch) = unlinked {
                switch.behaviour = Behaviour::Switch { door: Some(door) };
            }
        }
    }

    /// Opens every linked door whose switch is covered by a block and closes
    /// every linked door whose switch is bare.
    fn sync_doors(&mut self, out_events: &mut Vec<Event>) {
        let desired: Vec<(EntityId, bool)> = self
            .entities
            .iter()
            .filter_map(|entity| match entity.behaviour {
                Behaviour::Switch { door: Some(door) } => {
                    Some((door, rules::has_block(&self.entities, entity.position)))
                }
                _ => None,
            })
            .collect();

        for (door, open) in desired {
            let Some(at) = self.index_of(door) else {
                continue;
            };
            if let Behaviour::Door { open: current } = &mut self.entities[at].behaviour {
                if *current != open {
                    *current = open;
                    out_events.push(Event::DoorToggled { door, open });
                }
            }
        }
    }

    /// Recomputes target coverage and engages the one-way win latch.
    fn retarget(&mut self, out_events: &mut Vec<Event>) {
        let coverage: Vec<(usize, bool)> = self
            .entities
            .iter()
            .enumerate()
            .filter(|(_, entity)| entity.kind == EntityKind::Target)
            .map(|(at, entity)| (at, rules::has_block(&self.entities, entity.position)))
            .collect();

        for (at, on) in coverage {
            if let Behaviour::Target { covered } = &mut self.entities[at].behaviour {
                *covered = on;
            }
        }

        let covered = self
            .entities
            .iter()
            .filter(|entity| matches!(entity.behaviour, Behaviour::Target { covered: true }))
            .count();

        if covered != self.targets_covered {
            self.targets_covered = covered;
            out_events.push(Event::TargetsUpdated {
                covered,
                needed: self.targets_needed,
            });
        }

        if covered >= self.targets_needed && !self.won {
            self.won = true;
            out_events.push(Event::LevelWon);
        }
    }

    /// Attempts to move every block at `origin` by `distance` steps.
    ///
    /// Two-phase: every block's whole path is validated before any block
    /// moves, so a refused push leaves the registry untouched. The one side
    /// effect a refused push may have is a detonation: explosive material
    /// pushed against a cracked wall consumes itself and the wall through
    /// the death queue and leaves a burning explosion behind.
    fn push(
        &mut self,
        distance: u32,
        direction: Direction,
        origin: GridPos,
        out_events: &mut Vec<Event>,
    ) -> bool {
        let moving: Vec<EntityId> = self
            .entities
            .iter()
            .filter(|entity| entity.kind.is_block() && entity.position == origin)
            .map(|entity| entity.id)
            .collect();
        if moving.is_empty() {
            return true;
        }

        let mut failure: Option<PushError> = None;
        let mut detonation: Option<(EntityId, EntityId, GridPos)> = None;
        for id in &moving {
            let Some(at) = self.index_of(*id) else {
                continue;
            };
            let kind = self.entities[at].kind;
            let mut cell = self.entities[at].position;
            for step in 0..distance {
                cell = cell.step(direction);
                if kind == EntityKind::Tnt && step == 0 {
                    if let Some(wall) = self.cracked_wall_at(cell) {
                        detonation = detonation.or(Some((*id, wall, cell)));
                        failure = failure.or(Some(PushError::Impassable));
                        break;
                    }
                }
                if !rules::traversable(&self.entities, cell) {
                    failure = failure.or(Some(PushError::Impassable));
                    break;
                }
                if rules::block_occupied_excluding(&self.entities, cell, &moving) {
                    failure = failure.or(Some(PushError::Occupied));
                    break;
                }
            }
        }

        if let Some((tnt, wall, at)) = detonation {
            self.queue_death(tnt);
            self.queue_death(wall);
            let _ = self.queue_birth(EntityKind::Explosion, at);
            out_events.push(Event::Detonated { tnt, wall, at });
        }
        if let Some(reason) = failure {
            out_events.push(Event::PushRejected {
                origin,
                direction,
                reason,
            });
            return false;
        }

        let index = self.moves;
        for id in &moving {
            let Some(at) = self.index_of(*id) else {
                continue;
            };
            let from = self.entities[at].position;
            let mut to = from;
            for _ in 0..distance {
                to = to.step(direction);
            }
            let entity = &mut self.entities[at];
            let kind = entity.kind;
            if let Behaviour::Block { history, momentum } = &mut entity.behaviour {
                history.record(index, from);
                *momentum = (kind == EntityKind::Ice).then(|| Momentum::new(direction));
            }
            entity.position = to;
            out_events.push(Event::BlockPushed {
                block: *id,
                from,
                to,
            });
        }

        self.retarget(out_events);
        true
    }

    fn cracked_wall_at(&self, position: GridPos) -> Option<EntityId> {
        self.entities
            .iter()
            .find(|entity| entity.kind == EntityKind::CrackedWall && entity.position == position)
            .map(|entity| entity.id)
    }

    /// One full player turn: the attempted step, then every enemy reaction
    /// in registry order. The move counter stays fixed for the whole turn
    /// and advances only afterwards, so a single undo rewinds everything
    /// the turn displaced.
    fn move_player(&mut self, direction: Direction, out_events: &mut Vec<Event>) {
        let Some(player) = self
            .entities
            .iter()
            .position(|entity| entity.kind == EntityKind::Player)
        else {
            return;
        };
        let from = self.entities[player].position;
        let destination = from.step(direction);

        let mut success = rules::traversable(&self.entities, destination);
        if success && rules::has_block(&self.entities, destination) {
            success = self.push(1, direction, destination, out_events);
        }

        if success {
            let index = self.moves;
            let entity = &mut self.entities[player];
            if let Behaviour::Player { history } = &mut entity.behaviour {
                history.record(index, from);
            }
            entity.position = destination;
            out_events.push(Event::PlayerMoved {
                from,
                to: destination,
            });
        } else {
            out_events.push(Event::MoveRejected { direction });
        }

        self.react_enemies(out_events);

        if success {
            self.moves = self.moves.saturating_add(1);
        }
    }

    /// Scripted reactions taken by rogues and mages on every player turn,
    /// successful or not. Skeletons pace on simulated time instead and sit
    /// this pass out.
    fn react_enemies(&mut self, out_events: &mut Vec<Event>) {
        let reactors: Vec<(EntityId, EntityKind)> = self
            .entities
            .iter()
            .filter(|entity| entity.kind.is_enemy())
            .map(|entity| (entity.id, entity.kind))
            .collect();

        for (id, kind) in reactors {
            match kind {
                EntityKind::Rogue => self.step_rogue(id, out_events),
                EntityKind::Mage => self.step_mage(id, out_events),
                _ => {}
            }
        }
    }

    fn step_rogue(&mut self, id: EntityId, out_events: &mut Vec<Event>) {
        let Some(at) = self.index_of(id) else {
            return;
        };
        let Behaviour::Patrol { heading } = self.entities[at].behaviour else {
            return;
        };
        let from = self.entities[at].position;
        let destination = from.step(heading);

        let mut blocked = !rules::traversable(&self.entities, destination);
        if !blocked && rules::has_block(&self.entities, destination) {
            blocked = !self.push(1, heading, destination, out_events);
        }

        let Some(at) = self.index_of(id) else {
            return;
        };
        if blocked {
            self.entities[at].behaviour = Behaviour::Patrol {
                heading: heading.reversed(),
            };
        } else {
            self.entities[at].position = destination;
            out_events.push(Event::EnemyStepped {
                enemy: id,
                from,
                to: destination,
            });
        }
    }

    fn step_mage(&mut self, id: EntityId, out_events: &mut Vec<Event>) {
        let Some(player) = self.player_position() else {
            return;
        };
        let Some(at) = self.index_of(id) else {
            return;
        };
        let from = self.entities[at].position;
        let dx = player.x() - from.x();
        let dy = player.y() - from.y();

        // Larger offset picks the axis; ties fall to the vertical axis.
        let direction = if dx.abs() > dy.abs() {
            if dx > 0 {
                Direction::Right
            } else {
                Direction::Left
            }
        } else if dy != 0 {
            if dy > 0 {
                Direction::Down
            } else {
                Direction::Up
            }
        } else {
            return;
        };

        let destination = from.step(direction);
        if rules::traversable(&self.entities, destination)
            && !rules::has_block(&self.entities, destination)
        {
            self.entities[at].position = destination;
            out_events.push(Event::EnemyStepped {
                enemy: id,
                from,
                to: destination,
            });
        }
    }

    /// Advances simulated time: sliding ice, pacing skeletons and burning
    /// explosions, in registry order.
    fn tick(&mut self, dt: Duration, out_events: &mut Vec<Event>) {
        let ids: Vec<(EntityId, EntityKind)> = self
            .entities
            .iter()
            .map(|entity| (entity.id, entity.kind))
            .collect();

        for (id, kind) in ids {
            match kind {
                EntityKind::Ice => self.slide_ice(id, dt, out_events),
                EntityKind::Skeleton => self.step_sentry(id, dt, out_events),
                EntityKind::Explosion => self.burn_down(id, dt),
                _ => {}
            }
        }
    }

    fn slide_ice(&mut self, id: EntityId, dt: Duration, out_events: &mut Vec<Event>) {
        let Some(at) = self.index_of(id) else {
            return;
        };
        let Behaviour::Block {
            momentum: Some(slide),
            ..
        } = &mut self.entities[at].behaviour
        else {
            return;
        };

        slide.accumulator = slide.accumulator.saturating_add(dt);
        let direction = slide.direction;
        let mut pending = 0;
        while slide.accumulator >= SLIDE_QUANTUM {
            slide.accumulator -= SLIDE_QUANTUM;
            pending += 1;
        }

        for _ in 0..pending {
            let from = self.entities[at].position;
            let destination = from.step(direction);
            if rules::traversable(&self.entities, destination)
                && !rules::block_occupied_excluding(&self.entities, destination, &[id])
            {
                self.entities[at].position = destination;
                out_events.push(Event::BlockSlid {
                    block: id,
                    from,
                    to: destination,
                });
            } else {
                if let Behaviour::Block { momentum, .. } = &mut self.entities[at].behaviour {
                    *momentum = None;
                }
                break;
            }
        }
    }

    fn step_sentry(&mut self, id: EntityId, dt: Duration, out_events: &mut Vec<Event>) {
        let Some(at) = self.index_of(id) else {
            return;
        };
        let Behaviour::Sentry {
            heading,
            accumulator,
        } = &mut self.entities[at].behaviour
        else {
            return;
        };

        *accumulator = accumulator.saturating_add(dt);
        let mut heading = *heading;
        let mut pending = 0;
        while *accumulator >= SENTRY_QUANTUM {
            *accumulator -= SENTRY_QUANTUM;
            pending += 1;
        }

        for _ in 0..pending {
            let from = self.entities[at].position;
            let destination = from.step(heading);
            if rules::traversable(&self.entities, destination)
                && !rules::has_block(&self.entities, destination)
            {
                self.entities[at].position = destination;
                out_events.push(Event::EnemyStepped {
                    enemy: id,
                    from,
                    to: destination,
                });
            } else {
                heading = heading.reversed();
            }
        }

        if let Behaviour::Sentry {
            heading: current, ..
        } = &mut self.entities[at].behaviour
        {
            *current = heading;
        }
    }

    fn burn_down(&mut self, id: EntityId, dt: Duration) {
        let Some(at) = self.index_of(id) else {
            return;
        };
        let Behaviour::Blast { fuse } = &mut self.entities[at].behaviour else {
            return;
        };
        *fuse = fuse.saturating_sub(dt);
        if fuse.is_zero() {
            self.queue_death(id);
        }
    }

    /// Rolls back exactly one recorded player turn, or does nothing at all
    /// when no turn has been recorded yet.
    fn undo(&mut self, out_events: &mut Vec<Event>) {
        if self.moves == 0 {
            return;
        }
        self.moves -= 1;
        let index = self.moves;

        for entity in &mut self.entities {
            match &mut entity.behaviour {
                Behaviour::Block { history, momentum } => {
                    *momentum = None;
                    if let Some(position) = history.rewind(index) {
                        entity.position = position;
                    }
                }
                Behaviour::Player { history } => {
                    if let Some(position) = history.rewind(index) {
                        entity.position = position;
                    }
                }
                _ => {}
            }
        }

        out_events.push(Event::MoveUndone { moves: index });
    }

    fn check_capture(&self, out_events: &mut Vec<Event>) {
        let Some(player) = self.player_position() else {
            return;
        };
        let caught = self
            .entities
            .iter()
            .find(|entity| entity.kind.is_enemy() && entity.position == player);
        if let Some(enemy) = caught {
            out_events.push(Event::PlayerCaught {
                enemy: enemy.id,
                at: player,
            });
        }
    }
}

/// Applies the provided command to the world, mutating state deterministically.
///
/// Every command ends at the same boundary: queued births and deaths commit,
/// doors fall in line with their switches, target coverage recounts, and a
/// capture check runs. No entity update observes any of those mid-pass.
pub fn apply(world: &mut World, command: Command, out_events: &mut Vec<Event>) {
    match command {
        Command::MovePlayer { direction } => world.move_player(direction, out_events),
        Command::Undo => world.undo(out_events),
        Command::Tick { dt } => world.tick(dt, out_events),
    }

    world.commit(out_events);
    world.sync_doors(out_events);
    world.retarget(out_events);
    world.check_capture(out_events);
}

/// Query functions that provide read-only access to the world state.
pub mod query {
    use gridlock_core::{EntityId, EntityKind, GridPos};

    use super::{rules, Behaviour, World};

    /// Reports whether a unit or block may stand on the provided coordinate.
    #[must_use]
    pub fn traversable(world: &World, position: GridPos) -> bool {
        rules::traversable(&world.entities, position)
    }

    /// Reports whether any pushable block occupies the provided coordinate.
    #[must_use]
    pub fn has_block(world: &World, position: GridPos) -> bool {
        rules::has_block(&world.entities, position)
    }

    /// Reports whether any pressure pad occupies the provided coordinate.
    #[must_use]
    pub fn has_pressure_pad(world: &World, position: GridPos) -> bool {
        rules::has_pressure_pad(&world.entities, position)
    }

    /// Captures snapshots of every entity at the provided coordinate, in
    /// registry order.
    #[must_use]
    pub fn entities_at(world: &World, position: GridPos) -> Vec<EntitySnapshot> {
        entity_view(world)
            .into_vec()
            .into_iter()
            .filter(|snapshot| snapshot.position == position)
            .collect()
    }

    /// Grid dimensions declared by the level, as `(columns, rows)`.
    #[must_use]
    pub fn grid_size(world: &World) -> (u32, u32) {
        (world.columns, world.rows)
    }

    /// Current coordinate of the player, if the level declared one.
    #[must_use]
    pub fn player_position(world: &World) -> Option<GridPos> {
        world.player_position()
    }

    /// The door a switch is linked to, if the linkage pass assigned one.
    #[must_use]
    pub fn linked_door(world: &World, switch: EntityId) -> Option<EntityId> {
        world
            .entities
            .iter()
            .find(|entity| entity.id == switch)
            .and_then(|entity| match entity.behaviour {
                Behaviour::Switch { door } => door,
                _ => None,
            })
    }

    /// Captures a read-only view of every entity in registry order.
    ///
    /// Registry order is the level's record order with later births appended,
    /// which is exactly the order renderers are expected to paint in.
    #[must_use]
    pub fn entity_view(world: &World) -> EntityView {
        let snapshots = world
            .entities
            .iter()
            .map(|entity| EntitySnapshot {
                id: entity.id,
                kind: entity.kind,
                position: entity.position,
                door_open: match entity.behaviour {
                    Behaviour::Door { open } => Some(open),
                    _ => None,
                },
            })
            .collect();
        EntityView { snapshots }
    }

    /// Captures the summary counters hosts display and poll.
    #[must_use]
    pub fn score(world: &World) -> ScoreView {
        ScoreView {
            moves: world.moves,
            targets_covered: world.targets_covered,
            targets_needed: world.targets_needed,
            won: world.won,
        }
    }

    /// Immutable representation of a single entity used for queries.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct EntitySnapshot {
        /// Unique identifier assigned to the entity.
        pub id: EntityId,
        /// Kind tag of the entity.
        pub kind: EntityKind,
        /// Coordinate currently occupied by the entity.
        pub position: GridPos,
        /// Whether the door is open; `None` for anything that is not a door.
        pub door_open: Option<bool>,
    }

    /// Read-only snapshot describing all entities in the world.
    #[derive(Clone, Debug)]
    pub struct EntityView {
        snapshots: Vec<EntitySnapshot>,
    }

    impl EntityView {
        /// Iterator over the captured snapshots in registry order.
        pub fn iter(&self) -> impl Iterator<Item = &EntitySnapshot> {
            self.snapshots.iter()
        }

        /// Consumes the view, yielding the underlying snapshots.
        #[must_use]
        pub fn into_vec(self) -> Vec<EntitySnapshot> {
            self.snapshots
        }
    }

    /// Summary counters for the heads-up display and the host's win poll.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct ScoreView {
        /// Number of successful player turns recorded so far.
        pub moves: u32,
        /// Number of targets currently covered by a block.
        pub targets_covered: usize,
        /// Number of covered targets required to win.
        pub targets_needed: usize,
        /// Whether the win latch has engaged. Never resets.
        pub won: bool,
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Entity {
    pub(crate) id: EntityId,
    pub(crate) kind: EntityKind,
    pub(crate) position: GridPos,
    pub(crate) behaviour: Behaviour,
}

impl Entity {
    fn from_kind(id: EntityId, kind: EntityKind, position: GridPos) -> Self {
        Self {
            id,
            kind,
            position,
            behaviour: Behaviour::initial(kind),
        }
    }
}

/// Kind-specific mutable state resolved once at creation.
#[derive(Clone, Debug)]
pub(crate) enum Behaviour {
    Inert,
    Target { covered: bool },
    Door { open: bool },
    Switch { door: Option<EntityId> },
    Block { history: MoveHistory, momentum: Option<Momentum> },
    Player { history: MoveHistory },
    Patrol { heading: Direction },
    Sentry { heading: Direction, accumulator: Duration },
    Seeker,
    Blast { fuse: Duration },
}

impl Behaviour {
    fn initial(kind: EntityKind) -> Self {
        match kind {
            EntityKind::Floor | EntityKind::Wall | EntityKind::CrackedWall => Behaviour::Inert,
            EntityKind::Target => Behaviour::Target { covered: false },
            EntityKind::Door => Behaviour::Door { open: false },
            EntityKind::Switch => Behaviour::Switch { door: None },
            EntityKind::Stone | EntityKind::Tnt | EntityKind::Ice => Behaviour::Block {
                history: MoveHistory::default(),
                momentum: None,
            },
            EntityKind::Player => Behaviour::Player {
                history: MoveHistory::default(),
            },
            EntityKind::Rogue => Behaviour::Patrol {
                heading: Direction::Left,
            },
            EntityKind::Skeleton => Behaviour::Sentry {
                heading: Direction::Up,
                accumulator: Duration::ZERO,
            },
            EntityKind::Mage => Behaviour::Seeker,
            EntityKind::Explosion => Behaviour::Blast { fuse: BLAST_FUSE },
        }
    }
}

/// Per-entity record of coordinates held before each recorded turn.
///
/// Indices are the global move counter and never decrease along the list.
/// Only the first record per index survives: within one turn an entity may
/// be displaced more than once, and the rollback target is the coordinate
/// it held when the turn began.
#[derive(Clone, Debug, Default)]
pub(crate) struct MoveHistory {
    records: Vec<(u32, GridPos)>,
}

impl MoveHistory {
    fn record(&mut self, index: u32, position: GridPos) {
        if self.records.last().map_or(true, |(last, _)| *last < index) {
            self.records.push((index, position));
        }
    }

    /// Restores the coordinate recorded for `index`, discarding that record
    /// and anything recorded after it.
    fn rewind(&mut self, index: u32) -> Option<GridPos> {
        let at = self.records.iter().position(|(i, _)| *i >= index)?;
        let (recorded, position) = self.records[at];
        self.records.truncate(at);
        (recorded == index).then_some(position)
    }
}

/// Leftover slide a pushed ice block resolves on subsequent ticks.
#[derive(Clone, Copy, Debug)]
pub(crate) struct Momentum {
    direction: Direction,
    accumulator: Duration,
}

impl Momentum {
    const fn new(direction: Direction) -> Self {
        Self {
            direction,
            accumulator: Duration::ZERO,
        }
    }
}
