use std::fmt;

use super::types::{GameOutcome, Position};

/// A move the board refuses. The board is left untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMove {
    OutOfBounds(Position),
    CellOccupied(Position),
}

impl fmt::Display for IllegalMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalMove::OutOfBounds(pos) => write!(f, "Position {} is out of bounds", pos),
            IllegalMove::CellOccupied(pos) => write!(f, "Cell {} is already marked", pos),
        }
    }
}

impl std::error::Error for IllegalMove {}

/// The search was asked for a move on a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PreconditionViolated {
    pub outcome: GameOutcome,
}

impl fmt::Display for PreconditionViolated {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cannot search for a move, game is already over: {}", self.outcome)
    }
}

impl std::error::Error for PreconditionViolated {}
