use std::io::Write;

use common::games::n_in_a_row::{
    Board, EXIT_COMMAND, GameRenderer, Mark, Position, RESTART_MOVE, RoundState, SessionEvent,
};
use common::log;
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};

use crate::config::DisplayConfig;

pub struct ConsoleRenderer<W: Write> {
    out: W,
    display: DisplayConfig,
}

impl<W: Write> ConsoleRenderer<W> {
    pub fn new(out: W, display: DisplayConfig) -> Self {
        Self { out, display }
    }

    fn mark_color(&self, mark: Mark, winning: bool) -> Option<Color> {
        if winning {
            return Some(self.display.winning_color.into());
        }
        match mark {
            Mark::X => Some(self.display.x_color.into()),
            Mark::O => Some(self.display.o_color.into()),
            Mark::Empty => None,
        }
    }

    fn write_cell<B: Board>(&mut self, state: &RoundState<B>, pos: Position) -> std::io::Result<()> {
        let width = self.display.cell_width;
        let mark = state.board.get(pos);

        if mark == Mark::Empty {
            let label = pos.to_move_index(state.size()).to_string();
            let (left, right) = padding(width, label.len());
            return write!(self.out, "{}{}{}", " ".repeat(left), label, " ".repeat(right));
        }

        let (left, right) = padding(width, 1);
        write!(self.out, "{}", " ".repeat(left))?;
        match self.mark_color(mark, state.is_winning_cell(pos)) {
            Some(color) if self.display.use_colors => queue!(
                self.out,
                SetForegroundColor(color),
                Print(mark.symbol()),
                ResetColor
            )?,
            _ => write!(self.out, "{}", mark.symbol())?,
        }
        write!(self.out, "{}", " ".repeat(right))
    }

    fn write_board<B: Board>(&mut self, state: &RoundState<B>) -> std::io::Result<()> {
        writeln!(self.out)?;
        let size = state.size();
        for row in 0..size {
            for col in 0..size {
                self.write_cell(state, Position::new(row, col))?;
            }
            writeln!(self.out)?;
        }
        writeln!(
            self.out,
            "\n{} - Restart | {} - Exit Program",
            RESTART_MOVE, EXIT_COMMAND
        )?;
        self.out.flush()
    }

    fn write_event(&mut self, event: SessionEvent) -> std::io::Result<()> {
        match event {
            SessionEvent::BotMove { index, .. } => writeln!(self.out, "Bot chooses: {}", index)?,
            SessionEvent::Winner(mark) => writeln!(self.out, "\nPlayer {} wins!", mark.symbol())?,
            SessionEvent::Draw => writeln!(self.out, "\nDraw!")?,
            SessionEvent::ProgramEnded => writeln!(self.out, "Program ended.")?,
        }
        self.out.flush()
    }
}

/// Splits the free space around a label, the extra column going right.
fn padding(width: usize, len: usize) -> (usize, usize) {
    let free = width.saturating_sub(len);
    let left = free / 2;
    (left, free - left)
}

impl<W: Write> GameRenderer for ConsoleRenderer<W> {
    fn show_board<B: Board>(&mut self, state: &RoundState<B>) {
        if let Err(e) = self.write_board(state) {
            log!("Failed to draw board: {}", e);
        }
    }

    fn show_event(&mut self, event: SessionEvent) {
        if let Err(e) = self.write_event(event) {
            log!("Failed to print {:?}: {}", event, e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TerminalColor;

    fn plain_display() -> DisplayConfig {
        DisplayConfig {
            use_colors: false,
            ..DisplayConfig::default()
        }
    }

    fn render(state: &RoundState, display: DisplayConfig) -> String {
        let mut renderer = ConsoleRenderer::new(Vec::new(), display);
        renderer.show_board(state);
        String::from_utf8(renderer.out).unwrap()
    }

    #[test]
    fn test_padding_centers_labels() {
        assert_eq!(padding(5, 1), (2, 2));
        assert_eq!(padding(5, 2), (1, 2));
        assert_eq!(padding(5, 3), (1, 1));
        assert_eq!(padding(3, 3), (0, 0));
    }

    #[test]
    fn test_empty_cells_show_move_indices() {
        let state = RoundState::new(3).unwrap();
        let text = render(&state, plain_display());
        let rows: Vec<&str> = text.lines().skip(1).take(3).collect();
        assert_eq!(rows, vec!["  1    2    3  ", "  4    5    6  ", "  7    8    9  "]);
        assert!(text.contains("0 - Restart | 404 - Exit Program"));
    }

    #[test]
    fn test_occupied_cells_show_symbols() {
        let mut state = RoundState::new(4).unwrap();
        state.place_mark(Position::new(0, 0)).unwrap();
        state.place_mark(Position::new(3, 3)).unwrap();
        let text = render(&state, plain_display());
        let rows: Vec<&str> = text.lines().skip(1).take(4).collect();
        assert_eq!(rows[0], "  X    2    3    4  ");
        assert_eq!(rows[3], " 13   14   15    O  ");
    }

    #[test]
    fn test_winning_cells_use_their_own_color() {
        let mut state = RoundState::new(3).unwrap();
        for index in [1, 4, 2, 5, 3] {
            let pos = Position::from_move_index(index, 3).unwrap();
            state.place_mark(pos).unwrap();
        }

        let display = DisplayConfig::default();
        let mut green = Vec::new();
        queue!(green, SetForegroundColor(Color::from(TerminalColor::Green))).unwrap();
        let mut blue = Vec::new();
        queue!(blue, SetForegroundColor(Color::from(TerminalColor::Blue))).unwrap();
        let mut red = Vec::new();
        queue!(red, SetForegroundColor(Color::from(TerminalColor::Red))).unwrap();

        let text = render(&state, display);
        let green = String::from_utf8(green).unwrap();
        let blue = String::from_utf8(blue).unwrap();
        let red = String::from_utf8(red).unwrap();
        assert_eq!(text.matches(green.as_str()).count(), 3);
        assert_eq!(text.matches(blue.as_str()).count(), 2);
        assert_eq!(text.matches(red.as_str()).count(), 0);
    }

    #[test]
    fn test_events_are_announced() {
        let mut renderer = ConsoleRenderer::new(Vec::new(), plain_display());
        renderer.show_event(SessionEvent::BotMove {
            mark: Mark::O,
            index: 13,
        });
        renderer.show_event(SessionEvent::Winner(Mark::X));
        renderer.show_event(SessionEvent::Draw);
        renderer.show_event(SessionEvent::ProgramEnded);

        let text = String::from_utf8(renderer.out).unwrap();
        assert!(text.contains("Bot chooses: 13"));
        assert!(text.contains("Player X wins!"));
        assert!(text.contains("Draw!"));
        assert!(text.ends_with("Program ended.\n"));
    }
}
