#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Command-line adapter that runs Gridlock levels in a terminal.
//!
//! The adapter owns everything the world refuses to: reading the level file,
//! polling input, presenting scenes, and the level lifecycle (a caught
//! player restarts the level, a won level ends the session).

mod level_file;

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use gridlock_core::{Direction, Event, LevelLayout};
use gridlock_rendering::{Present, Scene};
use gridlock_system_control::{Control, ControlInput};
use gridlock_world::{self as world, query, World};

/// Simulated time granted to the world per accepted input frame.
const FRAME_DT: Duration = Duration::from_millis(250);

/// Command-line arguments accepted by the Gridlock binary.
#[derive(Debug, Parser)]
#[command(name = "gridlock", about = "Terminal block-pushing puzzles")]
struct Args {
    /// Path to the level file to play.
    level: PathBuf,

    /// Scripted input played instead of stdin: `u`, `d`, `l`, `r` step,
    /// `z` undoes, `.` lets a frame pass.
    #[arg(long)]
    script: Option<String>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let layout = level_file::load(&args.level)
        .with_context(|| format!("loading level {}", args.level.display()))?;

    let mut session = Session::new(layout);
    let mut presenter = TerminalPresenter;

    session.present(&mut presenter)?;

    match args.script {
        Some(script) => {
            for token in script.chars().filter(|token| !token.is_whitespace()) {
                let input = input_for(token)
                    .with_context(|| format!("unrecognized script token `{token}`"))?;
                session.advance(input);
                session.present(&mut presenter)?;
                if session.won() {
                    break;
                }
            }
        }
        None => {
            let stdin = io::stdin();
            for line in stdin.lock().lines() {
                let line = line.context("reading input")?;
                let Some(token) = line.trim().chars().next() else {
                    continue;
                };
                if token == 'q' {
                    break;
                }
                let Some(input) = input_for(token) else {
                    println!("keys: u/d/l/r to move, z to undo, . to wait, q to quit");
                    continue;
                };
                session.advance(input);
                session.present(&mut presenter)?;
                if session.won() {
                    break;
                }
            }
        }
    }

    Ok(())
}

/// One playthrough of a loaded level: the world plus the pure systems that
/// feed it.
struct Session {
    layout: LevelLayout,
    world: World,
    control: Control,
}

impl Session {
    fn new(layout: LevelLayout) -> Self {
        let world = World::from_layout(&layout);
        Self {
            layout,
            world,
            control: Control::default(),
        }
    }

    /// Runs one input frame through the control system and the world.
    fn advance(&mut self, input: ControlInput) {
        let mut commands = Vec::new();
        self.control.handle(input, FRAME_DT, &mut commands);

        let mut events = Vec::new();
        for command in commands {
            world::apply(&mut self.world, command, &mut events);
        }

        // The world only reports the capture; the lifecycle is ours.
        if events
            .iter()
            .any(|event| matches!(event, Event::PlayerCaught { .. }))
        {
            println!("Caught! Restarting the level.");
            self.world = World::from_layout(&self.layout);
        }
    }

    fn present(&self, presenter: &mut impl Present) -> Result<()> {
        let (columns, rows) = query::grid_size(&self.world);
        let scene = Scene::compose(
            &query::entity_view(&self.world),
            query::score(&self.world),
            columns,
            rows,
        );
        presenter.present(&scene)
    }

    fn won(&self) -> bool {
        query::score(&self.world).won
    }
}

/// Presenter that prints composed scenes to stdout, one frame per block.
struct TerminalPresenter;

impl Present for TerminalPresenter {
    fn present(&mut self, scene: &Scene) -> Result<()> {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        for line in scene.lines() {
            writeln!(out, "{line}")?;
        }
        writeln!(out)?;
        Ok(())
    }
}

fn input_for(token: char) -> Option<ControlInput> {
    let mut input = ControlInput::default();
    match token {
        'u' => input.direction = Some(Direction::Up),
        'd' => input.direction = Some(Direction::Down),
        'l' => input.direction = Some(Direction::Left),
        'r' => input.direction = Some(Direction::Right),
        'z' => input.undo = true,
        '.' => {}
        _ => return None,
    }
    Some(input)
}
