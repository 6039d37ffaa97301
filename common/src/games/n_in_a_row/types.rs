use super::board::Board;

pub const MIN_BOARD_SIZE: usize = 3;
pub const MAX_BOARD_SIZE: usize = 19;

pub const RESTART_MOVE: i64 = 0;
pub const EXIT_COMMAND: i64 = 404;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mark {
    Empty,
    X,
    O,
}

impl Mark {
    pub fn opponent(&self) -> Option<Mark> {
        match self {
            Mark::X => Some(Mark::O),
            Mark::O => Some(Mark::X),
            Mark::Empty => None,
        }
    }

    pub fn symbol(&self) -> char {
        match self {
            Mark::Empty => '.',
            Mark::X => 'X',
            Mark::O => 'O',
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Converts a 1-based move index into a cell, `None` when the index lies
    /// outside `1..=size²`.
    pub fn from_move_index(index: i64, size: usize) -> Option<Self> {
        let total = (size * size) as i64;
        if index < 1 || index > total {
            return None;
        }
        let zero_based = (index - 1) as usize;
        Some(Self::new(zero_based / size, zero_based % size))
    }

    pub fn to_move_index(&self, size: usize) -> usize {
        self.row * size + self.col + 1
    }
}

/// Length of the run required to win on a board of the given side.
pub fn win_length_for(board_size: usize) -> usize {
    if board_size <= 6 {
        3
    } else if board_size <= 9 {
        4
    } else {
        5
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameMode {
    TwoPlayers,
    VersusBot,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveCommand {
    Restart,
    Exit,
    Place(Position),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InvalidMove {
    OutOfRange(i64),
    Occupied(Position),
}

impl std::fmt::Display for InvalidMove {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidMove::OutOfRange(index) => write!(f, "move {} is outside the board", index),
            InvalidMove::Occupied(pos) => {
                write!(f, "cell at row {} column {} is already marked", pos.row, pos.col)
            }
        }
    }
}

/// Sentinels win over board validation: 0 and 404 never reach the board.
pub fn interpret_move<B: Board>(raw: i64, board: &B) -> Result<MoveCommand, InvalidMove> {
    match raw {
        EXIT_COMMAND => Ok(MoveCommand::Exit),
        RESTART_MOVE => Ok(MoveCommand::Restart),
        _ => {
            let pos = Position::from_move_index(raw, board.size())
                .ok_or(InvalidMove::OutOfRange(raw))?;
            if !board.is_empty_at(pos) {
                return Err(InvalidMove::Occupied(pos));
            }
            Ok(MoveCommand::Place(pos))
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WinningLine {
    pub mark: Mark,
    pub cells: Vec<Position>,
}

impl WinningLine {
    pub fn new(mark: Mark, cells: Vec<Position>) -> Self {
        Self { mark, cells }
    }

    pub fn contains(&self, pos: Position) -> bool {
        self.cells.contains(&pos)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won(Mark),
    Draw,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundResult {
    Won(Mark),
    Draw,
    Restarted,
    Exited,
}
