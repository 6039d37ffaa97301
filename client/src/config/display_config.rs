use common::config::Validate;
use common::games::n_in_a_row::MAX_BOARD_SIZE;
use crossterm::style::Color;
use serde::{Deserialize, Serialize};

#[derive(Debug, PartialEq, Eq, Serialize, Deserialize, Clone, Copy)]
pub enum TerminalColor {
    Red,
    Blue,
    Green,
    Yellow,
    Cyan,
    Magenta,
    White,
}

impl From<TerminalColor> for Color {
    fn from(color: TerminalColor) -> Self {
        match color {
            TerminalColor::Red => Color::Red,
            TerminalColor::Blue => Color::Blue,
            TerminalColor::Green => Color::Green,
            TerminalColor::Yellow => Color::Yellow,
            TerminalColor::Cyan => Color::Cyan,
            TerminalColor::Magenta => Color::Magenta,
            TerminalColor::White => Color::White,
        }
    }
}

#[derive(Debug, PartialEq, Serialize, Deserialize, Clone)]
#[serde(default)]
pub struct DisplayConfig {
    pub cell_width: usize,
    pub use_colors: bool,
    pub x_color: TerminalColor,
    pub o_color: TerminalColor,
    pub winning_color: TerminalColor,
}

impl DisplayConfig {
    /// Widest label on the largest board, e.g. "361".
    pub fn min_cell_width() -> usize {
        (MAX_BOARD_SIZE * MAX_BOARD_SIZE).to_string().len()
    }
}

impl Validate for DisplayConfig {
    fn validate(&self) -> Result<(), String> {
        let min_width = Self::min_cell_width();
        if self.cell_width < min_width || self.cell_width > 12 {
            return Err(format!(
                "cell_width must be between {} and 12, got {}",
                min_width, self.cell_width
            ));
        }
        if self.winning_color == self.x_color || self.winning_color == self.o_color {
            return Err("winning_color must differ from the player colors".to_string());
        }
        Ok(())
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            cell_width: 5,
            use_colors: true,
            x_color: TerminalColor::Red,
            o_color: TerminalColor::Blue,
            winning_color: TerminalColor::Green,
        }
    }
}
