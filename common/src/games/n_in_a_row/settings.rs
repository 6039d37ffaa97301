use super::types::{Difficulty, EXIT_COMMAND, GameMode, win_length_for};

/// Answer to the main menu prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Play(GameMode),
    Exit,
}

impl MenuChoice {
    /// `404` exits, `2` plays against the bot, any other number starts a
    /// two-player round.
    pub fn from_input(value: i64) -> Self {
        match value {
            EXIT_COMMAND => MenuChoice::Exit,
            2 => MenuChoice::Play(GameMode::VersusBot),
            _ => MenuChoice::Play(GameMode::TwoPlayers),
        }
    }
}

impl Difficulty {
    /// `1` easy, `2` medium, anything else hard.
    pub fn from_input(value: i64) -> Self {
        match value {
            1 => Difficulty::Easy,
            2 => Difficulty::Medium,
            _ => Difficulty::Hard,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundSettings {
    pub mode: GameMode,
    pub difficulty: Option<Difficulty>,
    pub board_size: usize,
}

impl RoundSettings {
    pub fn two_players(board_size: usize) -> Self {
        Self {
            mode: GameMode::TwoPlayers,
            difficulty: None,
            board_size,
        }
    }

    pub fn versus_bot(difficulty: Difficulty, board_size: usize) -> Self {
        Self {
            mode: GameMode::VersusBot,
            difficulty: Some(difficulty),
            board_size,
        }
    }

    pub fn win_length(&self) -> usize {
        win_length_for(self.board_size)
    }

    pub fn bot_difficulty(&self) -> Option<Difficulty> {
        match self.mode {
            GameMode::VersusBot => self.difficulty,
            GameMode::TwoPlayers => None,
        }
    }
}
