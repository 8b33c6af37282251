use serde::{Deserialize, Serialize};

use crate::games::SessionRng;
use super::board::Board;
use super::errors::PreconditionViolated;
use super::types::{Cell, GameOutcome, Player, Position};

/// Center first, then the four corners.
pub const OPENING_CELLS: [Position; 5] = [
    Position::new(1, 1),
    Position::new(0, 0),
    Position::new(0, 2),
    Position::new(2, 0),
    Position::new(2, 2),
];

/// How the computer picks its first move on an empty board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum OpeningPolicy {
    /// Any of `OPENING_CELLS`, uniformly. All of them hold the draw.
    #[default]
    Random,
    /// Full search, which always answers (0, 0).
    Search,
}

pub fn calculate_move(
    board: &Board,
    computer: Player,
    opening: OpeningPolicy,
    rng: &mut SessionRng,
) -> Result<Position, PreconditionViolated> {
    ensure_in_progress(board)?;

    if board.is_empty() && opening == OpeningPolicy::Random {
        if let Some(pos) = rng.pick(&OPENING_CELLS) {
            return Ok(pos);
        }
    }

    try_best_move(board, computer)
}

/// Optimal move for `computer`.
///
/// # Panics
///
/// If the game is already decided. Check `Board::evaluate` first, or use
/// [`try_best_move`].
pub fn best_move(board: &Board, computer: Player) -> Position {
    match try_best_move(board, computer) {
        Ok(pos) => pos,
        Err(e) => panic!("{}", e),
    }
}

/// Ties go to the first cell in `Board::legal_moves` order.
pub fn try_best_move(board: &Board, computer: Player) -> Result<Position, PreconditionViolated> {
    ensure_in_progress(board)?;

    let mut working = *board;
    let mut best: Option<(Position, i32)> = None;

    for pos in board.legal_moves() {
        working.set(pos, Cell::Marked(computer));
        let value = minimax(&mut working, computer.opponent(), computer);
        working.set(pos, Cell::Empty);

        if best.is_none_or(|(_, best_value)| value > best_value) {
            best = Some((pos, value));
        }
    }

    match best {
        Some((pos, _)) => Ok(pos),
        None => Err(PreconditionViolated {
            outcome: board.evaluate(),
        }),
    }
}

/// Game-theoretic value of `board` for `computer`: 1 win, 0 draw, -1 loss.
pub fn minimax_value(board: &Board, side_to_move: Player, computer: Player) -> i32 {
    let mut working = *board;
    minimax(&mut working, side_to_move, computer)
}

fn ensure_in_progress(board: &Board) -> Result<(), PreconditionViolated> {
    match board.evaluate() {
        GameOutcome::InProgress => Ok(()),
        outcome => Err(PreconditionViolated { outcome }),
    }
}

fn terminal_score(outcome: GameOutcome, computer: Player) -> Option<i32> {
    match outcome {
        GameOutcome::InProgress => None,
        GameOutcome::Win(winner, _) if winner == computer => Some(1),
        GameOutcome::Win(_, _) => Some(-1),
        GameOutcome::Draw => Some(0),
    }
}

// Every mark placed here is cleared before the loop moves on, so `board`
// is back to its input state on return.
fn minimax(board: &mut Board, side_to_move: Player, computer: Player) -> i32 {
    if let Some(score) = terminal_score(board.evaluate(), computer) {
        return score;
    }

    let is_maximizing = side_to_move == computer;
    let mut best = if is_maximizing { i32::MIN } else { i32::MAX };

    for pos in board.legal_moves() {
        board.set(pos, Cell::Marked(side_to_move));
        let value = minimax(board, side_to_move.opponent(), computer);
        board.set(pos, Cell::Empty);

        best = if is_maximizing {
            best.max(value)
        } else {
            best.min(value)
        };
    }

    best
}
