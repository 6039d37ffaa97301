use crate::config::Validate;
use super::board::validate_board_size;
use super::settings::RoundSettings;
use super::types::GameMode;

impl Validate for RoundSettings {
    fn validate(&self) -> Result<(), String> {
        validate_board_size(self.board_size)?;
        if self.mode == GameMode::VersusBot && self.difficulty.is_none() {
            return Err("A bot round needs a difficulty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::n_in_a_row::Difficulty;

    #[test]
    fn test_board_size_bounds() {
        assert!(RoundSettings::two_players(2).validate().is_err());
        assert!(RoundSettings::two_players(3).validate().is_ok());
        assert!(RoundSettings::two_players(19).validate().is_ok());
        assert!(RoundSettings::versus_bot(Difficulty::Easy, 20).validate().is_err());
    }

    #[test]
    fn test_bot_round_without_difficulty_is_invalid() {
        let settings = RoundSettings {
            mode: GameMode::VersusBot,
            difficulty: None,
            board_size: 5,
        };
        assert!(settings.validate().is_err());
    }
}
