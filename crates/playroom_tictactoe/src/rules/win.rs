//! Win detection logic for tic-tac-toe.

use crate::{Board, Player, Position, Square};
use tracing::instrument;

/// A winning triple of positions.
pub type Line = [Position; 3];

/// The 8 winning lines, in enumeration order: rows, columns, diagonals.
pub const LINES: [Line; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first completed line and its owner.
#[instrument]
pub fn winning_line(board: &Board) -> Option<(Player, Line)> {
    find_line(board)
}

/// Uninstrumented scan shared with the search code.
pub(crate) fn find_line(board: &Board) -> Option<(Player, Line)> {
    for line @ [a, b, c] in LINES {
        let sq = board.get(a);
        if let Square::Occupied(player) = sq
            && sq == board.get(b)
            && sq == board.get(c)
        {
            return Some((player, line));
        }
    }

    None
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument]
pub fn check_winner(board: &Board) -> Option<Player> {
    find_line(board).map(|(player, _)| player)
}

/// Finds the open square that would complete a line for `player`.
///
/// Lines are scanned in enumeration order and the first hit wins.
#[instrument]
pub fn completing_move(board: &Board, player: Player) -> Option<Position> {
    let mark = Square::Occupied(player);
    LINES.iter().find_map(|line| {
        let owned = line.iter().filter(|pos| board.get(**pos) == mark).count();
        let open: Vec<Position> = line
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect();
        match (owned, open.as_slice()) {
            (2, [gap]) => Some(*gap),
            _ => None,
        }
    })
}
