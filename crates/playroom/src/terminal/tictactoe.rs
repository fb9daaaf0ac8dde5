//! Tic-tac-toe over text input.

use anyhow::{bail, Result};
use playroom_tictactoe::{Bot, MoveError, Outcome, Player, Position, Round, Scoreboard, Strategy};
use rand::Rng;
use std::io::{BufRead, Write};
use tracing::{info, instrument};

/// Human X against `bot` (which must play O), reading squares from
/// `input`. Rounds repeat until `q` or end of input; the tally is returned.
#[instrument(skip_all, fields(strategy = %bot.strategy()))]
pub fn play_tictactoe<R, W, G>(
    bot: &Bot,
    input: R,
    out: &mut W,
    rng: &mut G,
) -> Result<Scoreboard>
where
    R: BufRead,
    W: Write,
    G: Rng + ?Sized,
{
    if bot.mark() != Player::O {
        bail!("the bot must play O; X always opens");
    }

    let mut scores = Scoreboard::new();
    let mut round = Round::new();
    writeln!(out, "{}", round.board())?;
    writeln!(out, "You are X. Pick a square (1-9), q to quit.")?;

    for line in input.lines() {
        let line = line?;
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        if command == "q" || command == "quit" {
            break;
        }

        let Some(position) = Position::from_label_or_number(command) else {
            writeln!(out, "Unknown square '{}'", command)?;
            continue;
        };
        match round.play_at(position) {
            Ok(_) => {}
            Err(MoveError::SquareOccupied(pos)) => {
                writeln!(out, "{} is taken, try another.", pos)?;
                continue;
            }
            Err(err) => return Err(err.into()),
        }

        if !round.status().is_terminal() {
            let reply = round.play_bot(bot, rng)?;
            writeln!(out, "Bot plays {}", reply.position)?;
        }
        writeln!(out, "{}", round.board())?;

        if let Some(outcome) = round.status().outcome() {
            scores.record(outcome);
            writeln!(out, "{}!  {}", outcome, scores)?;
            writeln!(out, "New round. You are X.")?;
            round.reset();
            writeln!(out, "{}", round.board())?;
        }
    }

    Ok(scores)
}

/// Plays one round between two bots, narrating each move.
#[instrument(skip_all)]
pub fn exhibition<W, G>(x: &Bot, o: &Bot, out: &mut W, rng: &mut G) -> Result<Outcome>
where
    W: Write,
    G: Rng + ?Sized,
{
    let mut round = Round::new();
    loop {
        if let Some(outcome) = round.status().outcome() {
            writeln!(out, "{}", outcome)?;
            return Ok(outcome);
        }
        let bot = if round.to_move() == Player::X { x } else { o };
        let action = round.play_bot(bot, rng)?;
        writeln!(out, "{}", action)?;
        writeln!(out, "{}\n", round.board())?;
    }
}

/// Plays `games` rounds of `bot` (as O) against a random X.
#[instrument(skip(bot, rng), fields(strategy = %bot.strategy()))]
pub fn simulate<G: Rng + ?Sized>(bot: &Bot, games: u32, rng: &mut G) -> Result<Scoreboard> {
    if bot.mark() != Player::O {
        bail!("the simulated bot must play O");
    }
    let opponent = Bot::new(Player::X, Strategy::Random);
    let mut scores = Scoreboard::new();
    for _ in 0..games {
        let mut round = Round::new();
        let outcome = loop {
            if let Some(outcome) = round.status().outcome() {
                break outcome;
            }
            let mover = if round.to_move() == Player::X { &opponent } else { bot };
            round.play_bot(mover, rng)?;
        };
        scores.record(outcome);
    }
    info!(%scores, "Simulation finished");
    Ok(scores)
}
