//! Maze walking over text input.

use anyhow::Result;
use playroom_maze::{Direction, MazeRun, MoveOutcome, RunError, RunStatus};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{debug, instrument};

/// Reads a direction from `w/a/s/d`, `k/h/j/l` or a word like `up`.
pub fn parse_direction(input: &str) -> Option<Direction> {
    let input = input.trim().to_lowercase();
    match input.as_str() {
        "w" | "k" => Some(Direction::Up),
        "a" | "h" => Some(Direction::Left),
        "s" | "j" => Some(Direction::Down),
        "d" | "l" => Some(Direction::Right),
        other => other.parse().ok(),
    }
}

/// Walks `run` with commands from `input` until the player escapes,
/// quits with `q`, or input ends. `r` generates a new maze.
#[instrument(skip_all)]
pub fn play_maze<R, W, G>(
    run: &mut MazeRun,
    input: R,
    out: &mut W,
    rng: &mut G,
) -> Result<RunStatus>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    run.start();
    writeln!(out, "{}", run)?;
    writeln!(out, "Move with w/a/s/d, r for a new maze, q to quit.")?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();
        match command {
            "" => continue,
            "q" | "quit" => break,
            "r" | "restart" => {
                run.restart(rng)?;
                run.start();
                writeln!(out, "{}", run)?;
                continue;
            }
            _ => {}
        }

        let Some(direction) = parse_direction(command) else {
            writeln!(out, "Unknown command '{}'", command)?;
            continue;
        };

        match run.move_player(direction) {
            Ok(MoveOutcome::Moved) => {}
            Ok(MoveOutcome::Collected(symbol)) => {
                writeln!(out, "Found {}! ({} left)", symbol, run.remaining())?;
            }
            Ok(MoveOutcome::Escaped) => {
                writeln!(out, "{}", run)?;
                writeln!(
                    out,
                    "You escaped in {} moves with {} of {} treasures!",
                    run.moves(),
                    run.collected(),
                    run.collected() + run.remaining()
                )?;
                return Ok(run.status());
            }
            Err(RunError::Maze(err)) => {
                debug!(%err, "Blocked move");
                writeln!(out, "Bump! That way is blocked.")?;
                continue;
            }
            Err(err) => return Err(err.into()),
        }
        writeln!(out, "{}", run)?;
        writeln!(out, "Moves: {}  Collected: {}", run.moves(), run.collected())?;
    }

    Ok(run.status())
}
