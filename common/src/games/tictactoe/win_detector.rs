use super::board::Board;
use super::types::{BOARD_SIZE, Cell, Line, Player, Position};

pub const LINE_COUNT: usize = 2 * BOARD_SIZE + 2;

/// Rows top to bottom, columns left to right, then the main and anti diagonal.
pub const LINES: [Line; LINE_COUNT] = build_lines();

const fn build_lines() -> [Line; LINE_COUNT] {
    let mut lines = [[Position::new(0, 0); BOARD_SIZE]; LINE_COUNT];

    let mut i = 0;
    while i < BOARD_SIZE {
        let mut j = 0;
        while j < BOARD_SIZE {
            lines[i][j] = Position::new(i, j);
            lines[BOARD_SIZE + i][j] = Position::new(j, i);
            j += 1;
        }
        lines[2 * BOARD_SIZE][i] = Position::new(i, i);
        lines[2 * BOARD_SIZE + 1][i] = Position::new(i, BOARD_SIZE - 1 - i);
        i += 1;
    }

    lines
}

/// First completed line in `LINES` order, if any.
pub fn check_win_with_line(board: &Board) -> Option<(Player, Line)> {
    LINES
        .iter()
        .find_map(|line| line_owner(board, line).map(|player| (player, *line)))
}

pub fn line_owner(board: &Board, line: &Line) -> Option<Player> {
    let player = board.get(line[0])?.player()?;

    if line[1..]
        .iter()
        .all(|&pos| board.get(pos) == Some(Cell::Marked(player)))
    {
        Some(player)
    } else {
        None
    }
}
