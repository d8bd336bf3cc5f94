#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure control system that turns per-frame input into command batches.

use std::time::Duration;

use gridlock_core::{Command, Direction};

/// Input snapshot gathered by an adapter before updating the world.
///
/// The system only ever reads these booleans and enums; polling raw device
/// state is the adapter's job.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct ControlInput {
    /// Direction the player asked to step in this frame, if any.
    pub direction: Option<Direction>,
    /// Whether the player asked to roll back their latest turn.
    pub undo: bool,
}

/// Pure system that reacts to frame input and emits world commands.
#[derive(Debug, Default)]
pub struct Control;

impl Control {
    /// Consumes one frame of input and appends the commands it implies.
    ///
    /// An undo request wins over a movement request so a single frame never
    /// both rewinds and replays; every frame closes with a clock tick so
    /// sliding blocks, pacing skeletons and burning explosions advance even
    /// while the player idles.
    pub fn handle(&mut self, input: ControlInput, frame_dt: Duration, out: &mut Vec<Command>) {
        if input.undo {
            out.push(Command::Undo);
        } else if let Some(direction) = input.direction {
            out.push(Command::MovePlayer { direction });
        }
        out.push(Command::Tick { dt: frame_dt });
    }
}
