use super::board::{Board, GridBoard};
use super::types::{GameStatus, InvalidMove, Mark, Position, win_length_for};
use super::win_detector::check_win_with_line;

/// Everything that lives for exactly one round.
#[derive(Debug, Clone)]
pub struct RoundState<B: Board = GridBoard> {
    pub board: B,
    pub win_length: usize,
    pub winning_cells: Vec<Position>,
    pub current_mark: Mark,
    pub status: GameStatus,
}

impl RoundState<GridBoard> {
    pub fn new(board_size: usize) -> Result<Self, String> {
        Ok(Self::with_board(GridBoard::new(board_size)?))
    }
}

impl<B: Board> RoundState<B> {
    pub fn with_board(board: B) -> Self {
        let win_length = win_length_for(board.size());
        Self {
            board,
            win_length,
            winning_cells: Vec::new(),
            current_mark: Mark::X,
            status: GameStatus::InProgress,
        }
    }

    pub fn size(&self) -> usize {
        self.board.size()
    }

    pub fn is_winning_cell(&self, pos: Position) -> bool {
        self.winning_cells.contains(&pos)
    }

    /// Scans for a run of `mark`; the found run replaces `winning_cells`,
    /// which is cleared when there is none.
    pub fn check_win(&mut self, mark: Mark) -> bool {
        self.winning_cells.clear();
        match check_win_with_line(&self.board, mark, self.win_length) {
            Some(line) => {
                self.winning_cells = line.cells;
                true
            }
            None => false,
        }
    }

    /// Places the current mark, then settles win, draw or turn change.
    pub fn place_mark(&mut self, pos: Position) -> Result<GameStatus, InvalidMove> {
        if !self.board.is_empty_at(pos) {
            return Err(InvalidMove::Occupied(pos));
        }

        let mark = self.current_mark;
        self.board.set(pos, mark);

        if self.check_win(mark) {
            self.status = GameStatus::Won(mark);
        } else if self.board.is_full() {
            self.status = GameStatus::Draw;
        } else {
            self.switch_turn();
        }

        Ok(self.status)
    }

    fn switch_turn(&mut self) {
        if let Some(next) = self.current_mark.opponent() {
            self.current_mark = next;
        }
    }
}
