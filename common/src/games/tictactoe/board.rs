use super::errors::IllegalMove;
use super::types::{BOARD_SIZE, Cell, GameOutcome, Player, Position};
use super::win_detector::check_win_with_line;

/// A 3x3 grid, row-major. Turn order is not tracked here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self {
            cells: [[Cell::Empty; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    pub fn get(&self, pos: Position) -> Option<Cell> {
        if !pos.is_on_board() {
            return None;
        }
        Some(self.cells[pos.row][pos.col])
    }

    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), IllegalMove> {
        match self.get(pos) {
            None => Err(IllegalMove::OutOfBounds(pos)),
            Some(Cell::Marked(_)) => Err(IllegalMove::CellOccupied(pos)),
            Some(Cell::Empty) => {
                self.cells[pos.row][pos.col] = Cell::Marked(player);
                Ok(())
            }
        }
    }

    pub fn with_move_applied(&self, pos: Position, player: Player) -> Result<Board, IllegalMove> {
        let mut next = *self;
        next.place(pos, player)?;
        Ok(next)
    }

    /// Unchecked write used by the search for mark/undo on its working copy.
    pub(crate) fn set(&mut self, pos: Position, cell: Cell) {
        self.cells[pos.row][pos.col] = cell;
    }

    pub fn evaluate(&self) -> GameOutcome {
        if let Some((player, line)) = check_win_with_line(self) {
            return GameOutcome::Win(player, line);
        }

        if self.is_full() {
            GameOutcome::Draw
        } else {
            GameOutcome::InProgress
        }
    }

    pub fn legal_moves(&self) -> Vec<Position> {
        let mut moves = Vec::new();
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, &cell) in cells.iter().enumerate() {
                if cell == Cell::Empty {
                    moves.push(Position::new(row, col));
                }
            }
        }
        moves
    }

    pub fn is_full(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell != Cell::Empty))
    }

    pub fn is_empty(&self) -> bool {
        self.cells
            .iter()
            .all(|row| row.iter().all(|&cell| cell == Cell::Empty))
    }

    pub fn mark_count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Marked(player))
            .count()
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}
