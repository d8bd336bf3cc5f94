use std::time::Duration;

use gridlock_core::{Command, Direction};
use gridlock_system_control::{Control, ControlInput};

const FRAME: Duration = Duration::from_millis(250);

#[test]
fn movement_emits_a_player_turn_then_a_tick() {
    let mut control = Control::default();
    let mut commands = Vec::new();

    control.handle(
        ControlInput {
            direction: Some(Direction::Right),
            undo: false,
        },
        FRAME,
        &mut commands,
    );

    assert_eq!(
        commands,
        vec![
            Command::MovePlayer {
                direction: Direction::Right,
            },
            Command::Tick { dt: FRAME },
        ],
    );
}

#[test]
fn undo_wins_over_movement() {
    let mut control = Control::default();
    let mut commands = Vec::new();

    control.handle(
        ControlInput {
            direction: Some(Direction::Left),
            undo: true,
        },
        FRAME,
        &mut commands,
    );

    assert_eq!(commands, vec![Command::Undo, Command::Tick { dt: FRAME }]);
}

#[test]
fn idle_frames_still_tick_the_clock() {
    let mut control = Control::default();
    let mut commands = Vec::new();

    control.handle(ControlInput::default(), FRAME, &mut commands);

    assert_eq!(commands, vec![Command::Tick { dt: FRAME }]);
}
