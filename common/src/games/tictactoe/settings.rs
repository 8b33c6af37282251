use serde::{Deserialize, Serialize};

use super::bot_controller::OpeningPolicy;
use super::types::Player;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GameMode {
    #[default]
    VsComputer,
    TwoPlayers,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeSessionSettings {
    pub mode: GameMode,
    /// Ignored in `GameMode::TwoPlayers`.
    pub computer_player: Player,
    pub opening: OpeningPolicy,
}

impl Default for TicTacToeSessionSettings {
    fn default() -> Self {
        Self {
            mode: GameMode::VsComputer,
            computer_player: Player::O,
            opening: OpeningPolicy::Random,
        }
    }
}
