mod board;
mod bot_controller;
mod game_state;
mod session;
mod settings;
mod types;
mod validate;
mod win_detector;

pub use board::{Board, GridBoard, SparseBoard, validate_board_size};
pub use bot_controller::{
    BotInput, calculate_hard_move, calculate_medium_move, calculate_move, calculate_random_move,
    center_position,
};
pub use game_state::RoundState;
pub use session::{BOT_MARK, GameRenderer, GameSession, PlayerInput, Prompt, SessionEvent};
pub use settings::{MenuChoice, RoundSettings};
pub use types::{
    Difficulty, EXIT_COMMAND, GameMode, GameStatus, InvalidMove, MAX_BOARD_SIZE, MIN_BOARD_SIZE,
    Mark, MoveCommand, Position, RESTART_MOVE, RoundResult, WinningLine, interpret_move,
    win_length_for,
};
pub use win_detector::{check_win, check_win_with_line};
