use std::time::Duration;

use gridlock_core::{Direction, EntityKind, Event, GridPos, LevelEntity, LevelLayout};
use gridlock_system_control::{Control, ControlInput};
use gridlock_world::{self as world, query, World};

const FRAME: Duration = Duration::from_millis(250);

fn layout(columns: u32, rows: u32, records: &[(EntityKind, i32, i32)]) -> LevelLayout {
    LevelLayout {
        columns,
        rows,
        entities: records
            .iter()
            .map(|(kind, x, y)| LevelEntity {
                kind: *kind,
                position: GridPos::new(*x, *y),
            })
            .collect(),
    }
}

fn frame(world: &mut World, control: &mut Control, input: ControlInput) -> Vec<Event> {
    let mut commands = Vec::new();
    control.handle(input, FRAME, &mut commands);
    let mut events = Vec::new();
    for command in commands {
        world::apply(world, command, &mut events);
    }
    events
}

fn step(world: &mut World, control: &mut Control, direction: Direction) -> Vec<Event> {
    frame(
        world,
        control,
        ControlInput {
            direction: Some(direction),
            undo: false,
        },
    )
}

#[test]
fn pushing_a_stone_home_wins_the_session() {
    let mut world = World::from_layout(&layout(
        5,
        1,
        &[
            (EntityKind::Floor, 0, 0),
            (EntityKind::Floor, 1, 0),
            (EntityKind::Floor, 2, 0),
            (EntityKind::Floor, 3, 0),
            (EntityKind::Floor, 4, 0),
            (EntityKind::Target, 3, 0),
            (EntityKind::Player, 0, 0),
            (EntityKind::Stone, 1, 0),
        ],
    ));
    let mut control = Control::default();

    let _ = step(&mut world, &mut control, Direction::Right);
    assert_eq!(query::player_position(&world), Some(GridPos::new(1, 0)));
    assert!(!query::score(&world).won);

    // Second thoughts: rewind the turn, then play it again.
    let _ = frame(
        &mut world,
        &mut control,
        ControlInput {
            direction: None,
            undo: true,
        },
    );
    assert_eq!(query::player_position(&world), Some(GridPos::new(0, 0)));
    assert!(!query::has_block(&world, GridPos::new(2, 0)));

    let _ = step(&mut world, &mut control, Direction::Right);
    let events = step(&mut world, &mut control, Direction::Right);

    assert!(events.contains(&Event::LevelWon));
    let score = query::score(&world);
    assert!(score.won);
    assert_eq!(score.moves, 2);
    assert_eq!(score.targets_covered, 1);
}

#[test]
fn idle_frames_carry_sliding_ice_onto_the_target() {
    let mut world = World::from_layout(&layout(
        5,
        1,
        &[
            (EntityKind::Floor, 0, 0),
            (EntityKind::Floor, 1, 0),
            (EntityKind::Floor, 2, 0),
            (EntityKind::Floor, 3, 0),
            (EntityKind::Floor, 4, 0),
            (EntityKind::Target, 4, 0),
            (EntityKind::Player, 0, 0),
            (EntityKind::Ice, 1, 0),
        ],
    ));
    let mut control = Control::default();

    // The push lands the ice on x=2 and the frame's own tick slides it one
    // further cell.
    let _ = step(&mut world, &mut control, Direction::Right);
    assert!(query::has_block(&world, GridPos::new(3, 0)));

    // The player idles while the ice keeps going, one cell per frame.
    let events = frame(&mut world, &mut control, ControlInput::default());
    assert!(query::has_block(&world, GridPos::new(4, 0)));
    assert!(events.contains(&Event::LevelWon));
    assert!(query::score(&world).won);
}
