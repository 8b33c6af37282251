mod board;
mod bot_controller;
mod errors;
mod session;
mod settings;
mod types;
mod win_detector;

pub use board::Board;
pub use bot_controller::{
    OPENING_CELLS, OpeningPolicy, best_move, calculate_move, minimax_value, try_best_move,
};
pub use errors::{IllegalMove, PreconditionViolated};
pub use session::{ScoreTally, SessionError, TicTacToeSession};
pub use settings::{GameMode, TicTacToeSessionSettings};
pub use types::{BOARD_SIZE, CELL_COUNT, Cell, GameOutcome, Line, Player, Position};
pub use win_detector::{LINE_COUNT, LINES, check_win_with_line, line_owner};
