use std::fmt;

use crate::games::SessionRng;
use crate::log;
use super::board::Board;
use super::bot_controller::calculate_move;
use super::errors::{IllegalMove, PreconditionViolated};
use super::settings::{GameMode, TicTacToeSessionSettings};
use super::types::{GameOutcome, Player, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreTally {
    pub x_wins: u32,
    pub o_wins: u32,
    pub ties: u32,
}

impl ScoreTally {
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }

    fn record(&mut self, outcome: &GameOutcome) {
        match outcome {
            GameOutcome::Win(Player::X, _) => self.x_wins += 1,
            GameOutcome::Win(Player::O, _) => self.o_wins += 1,
            GameOutcome::Draw => self.ties += 1,
            GameOutcome::InProgress => {}
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionError {
    GameOver,
    ComputerTurn,
    NotComputerTurn,
    IllegalMove(IllegalMove),
    Search(PreconditionViolated),
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionError::GameOver => write!(f, "Game is already over"),
            SessionError::ComputerTurn => write!(f, "Not your turn, the computer is playing"),
            SessionError::NotComputerTurn => write!(f, "It is not the computer's turn"),
            SessionError::IllegalMove(e) => write!(f, "{}", e),
            SessionError::Search(e) => write!(f, "{}", e),
        }
    }
}

impl std::error::Error for SessionError {}

impl From<IllegalMove> for SessionError {
    fn from(e: IllegalMove) -> Self {
        SessionError::IllegalMove(e)
    }
}

impl From<PreconditionViolated> for SessionError {
    fn from(e: PreconditionViolated) -> Self {
        SessionError::Search(e)
    }
}

/// One table: the running game plus the score across restarts.
pub struct TicTacToeSession {
    settings: TicTacToeSessionSettings,
    board: Board,
    current_player: Player,
    outcome: GameOutcome,
    scores: ScoreTally,
    rng: SessionRng,
}

impl TicTacToeSession {
    pub fn new(settings: TicTacToeSessionSettings, rng: SessionRng) -> Self {
        log!(
            "[session:{}] New session, mode {:?}, computer {}",
            rng.seed(),
            settings.mode,
            settings.computer_player
        );

        Self {
            settings,
            board: Board::new(),
            current_player: Player::X,
            outcome: GameOutcome::InProgress,
            scores: ScoreTally::default(),
            rng,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn current_player(&self) -> Player {
        self.current_player
    }

    pub fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    pub fn scores(&self) -> ScoreTally {
        self.scores
    }

    pub fn settings(&self) -> &TicTacToeSessionSettings {
        &self.settings
    }

    pub fn seed(&self) -> u64 {
        self.rng.seed()
    }

    pub fn is_computer_turn(&self) -> bool {
        self.settings.mode == GameMode::VsComputer
            && self.current_player == self.settings.computer_player
            && !self.outcome.is_terminal()
    }

    pub fn place_mark(&mut self, pos: Position) -> Result<GameOutcome, SessionError> {
        if self.outcome.is_terminal() {
            return Err(SessionError::GameOver);
        }
        if self.is_computer_turn() {
            return Err(SessionError::ComputerTurn);
        }

        let player = self.current_player;
        self.apply_move(pos, player).inspect_err(|e| {
            log!("[session:{}] Player {} failed to place mark at {}: {}", self.rng.seed(), player, pos, e);
        })
    }

    pub fn play_computer_turn(&mut self) -> Result<(Position, GameOutcome), SessionError> {
        if self.outcome.is_terminal() {
            return Err(SessionError::GameOver);
        }
        if !self.is_computer_turn() {
            return Err(SessionError::NotComputerTurn);
        }

        let computer = self.settings.computer_player;
        let pos = calculate_move(&self.board, computer, self.settings.opening, &mut self.rng)?;
        log!("[session:{}] Computer {} chose {}", self.rng.seed(), computer, pos);

        let outcome = self.apply_move(pos, computer)?;
        Ok((pos, outcome))
    }

    /// Fresh board with X to move; scores are kept.
    pub fn restart(&mut self) {
        self.board = Board::new();
        self.current_player = Player::X;
        self.outcome = GameOutcome::InProgress;
    }

    pub fn new_game(&mut self) {
        self.scores = ScoreTally::default();
        self.restart();
    }

    pub fn change_mode(&mut self, mode: GameMode) {
        self.settings.mode = mode;
        self.new_game();
    }

    fn apply_move(&mut self, pos: Position, player: Player) -> Result<GameOutcome, SessionError> {
        self.board.place(pos, player)?;
        self.outcome = self.board.evaluate();

        if self.outcome.is_terminal() {
            self.scores.record(&self.outcome);
            log!("[session:{}] Game finished: {}", self.rng.seed(), self.outcome);
        } else {
            self.current_player = player.opponent();
        }

        Ok(self.outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::OpeningPolicy;

    fn two_player_session() -> TicTacToeSession {
        let settings = TicTacToeSessionSettings {
            mode: GameMode::TwoPlayers,
            ..TicTacToeSessionSettings::default()
        };
        TicTacToeSession::new(settings, SessionRng::new(12345))
    }

    fn vs_computer_session(computer_player: Player, opening: OpeningPolicy) -> TicTacToeSession {
        let settings = TicTacToeSessionSettings {
            mode: GameMode::VsComputer,
            computer_player,
            opening,
        };
        TicTacToeSession::new(settings, SessionRng::new(12345))
    }

    fn play(session: &mut TicTacToeSession, moves: &[(usize, usize)]) -> GameOutcome {
        let mut outcome = session.outcome();
        for &(row, col) in moves {
            outcome = session.place_mark(Position::new(row, col)).unwrap();
        }
        outcome
    }

    #[test]
    fn test_new_session_starts_with_x() {
        let session = two_player_session();

        assert_eq!(session.current_player(), Player::X);
        assert!(session.board().is_empty());
        assert_eq!(session.scores(), ScoreTally::default());
        assert_eq!(session.seed(), 12345);
    }

    #[test]
    fn test_players_alternate() {
        let mut session = two_player_session();

        session.place_mark(Position::new(0, 0)).unwrap();
        assert_eq!(session.current_player(), Player::O);

        session.place_mark(Position::new(1, 1)).unwrap();
        assert_eq!(session.current_player(), Player::X);
    }

    #[test]
    fn test_illegal_move_keeps_turn() {
        let mut session = two_player_session();
        session.place_mark(Position::new(0, 0)).unwrap();

        let result = session.place_mark(Position::new(0, 0));

        assert_eq!(
            result,
            Err(SessionError::IllegalMove(IllegalMove::CellOccupied(Position::new(0, 0))))
        );
        assert_eq!(session.current_player(), Player::O);
    }

    #[test]
    fn test_win_is_scored_once() {
        let mut session = two_player_session();

        let outcome = play(&mut session, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

        assert_eq!(outcome.winner(), Some(Player::X));
        assert_eq!(session.scores().x_wins, 1);
        assert_eq!(session.place_mark(Position::new(2, 2)), Err(SessionError::GameOver));
        assert_eq!(session.scores().x_wins, 1);
    }

    #[test]
    fn test_draw_is_scored_as_tie() {
        let mut session = two_player_session();

        let outcome = play(
            &mut session,
            &[(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0), (2, 2)],
        );

        assert_eq!(outcome, GameOutcome::Draw);
        assert_eq!(session.scores().ties, 1);
    }

    #[test]
    fn test_restart_keeps_scores() {
        let mut session = two_player_session();
        play(&mut session, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

        session.restart();

        assert!(session.board().is_empty());
        assert_eq!(session.current_player(), Player::X);
        assert_eq!(session.outcome(), GameOutcome::InProgress);
        assert_eq!(session.scores().wins(Player::X), 1);
    }

    #[test]
    fn test_new_game_resets_scores() {
        let mut session = two_player_session();
        play(&mut session, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

        session.new_game();

        assert!(session.board().is_empty());
        assert_eq!(session.scores(), ScoreTally::default());
    }

    #[test]
    fn test_change_mode_starts_new_game() {
        let mut session = two_player_session();
        play(&mut session, &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)]);

        session.change_mode(GameMode::VsComputer);

        assert_eq!(session.settings().mode, GameMode::VsComputer);
        assert_eq!(session.scores(), ScoreTally::default());
        assert!(session.board().is_empty());
    }

    #[test]
    fn test_human_cannot_move_on_computer_turn() {
        let mut session = vs_computer_session(Player::O, OpeningPolicy::Random);
        session.place_mark(Position::new(1, 1)).unwrap();

        assert!(session.is_computer_turn());
        assert_eq!(session.place_mark(Position::new(0, 0)), Err(SessionError::ComputerTurn));
    }

    #[test]
    fn test_computer_cannot_move_on_human_turn() {
        let mut session = vs_computer_session(Player::O, OpeningPolicy::Random);

        assert_eq!(session.play_computer_turn(), Err(SessionError::NotComputerTurn));
    }

    #[test]
    fn test_computer_blocks_row() {
        let mut session = vs_computer_session(Player::O, OpeningPolicy::Random);
        session.place_mark(Position::new(0, 0)).unwrap();
        let (first, _) = session.play_computer_turn().unwrap();
        assert_eq!(first, Position::new(1, 1));

        session.place_mark(Position::new(0, 1)).unwrap();
        let (block, outcome) = session.play_computer_turn().unwrap();

        assert_eq!(block, Position::new(0, 2));
        assert_eq!(outcome, GameOutcome::InProgress);
        assert_eq!(session.current_player(), Player::X);
    }

    #[test]
    fn test_computer_opens_from_opening_cells() {
        let mut session = vs_computer_session(Player::X, OpeningPolicy::Random);

        let (pos, _) = session.play_computer_turn().unwrap();

        assert!(crate::games::tictactoe::OPENING_CELLS.contains(&pos));
        assert_eq!(session.current_player(), Player::O);
    }

    #[test]
    fn test_computer_against_optimal_human_draws() {
        let mut session = vs_computer_session(Player::X, OpeningPolicy::Search);

        while !session.outcome().is_terminal() {
            if session.is_computer_turn() {
                session.play_computer_turn().unwrap();
            } else {
                let pos = crate::games::tictactoe::best_move(session.board(), Player::O);
                session.place_mark(pos).unwrap();
            }
        }

        assert_eq!(session.outcome(), GameOutcome::Draw);
        assert_eq!(session.scores().ties, 1);
    }
}
