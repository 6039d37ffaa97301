use crate::games::SessionRng;
use super::board::Board;
use super::types::{Difficulty, Mark, Position};
use super::win_detector::check_win;

pub struct BotInput<'a, B: Board> {
    pub board: &'a B,
    pub win_length: usize,
    pub bot_mark: Mark,
}

impl<'a, B: Board> BotInput<'a, B> {
    pub fn new(board: &'a B, win_length: usize, bot_mark: Mark) -> Self {
        Self {
            board,
            win_length,
            bot_mark,
        }
    }
}

/// Picks the bot's next cell. `None` means the board has no empty cell left.
pub fn calculate_move<B: Board>(
    difficulty: Difficulty,
    input: &BotInput<'_, B>,
    rng: &mut SessionRng,
) -> Option<Position> {
    match difficulty {
        Difficulty::Easy => calculate_random_move(input, rng),
        Difficulty::Medium => calculate_medium_move(input, rng),
        Difficulty::Hard => calculate_hard_move(input, rng),
    }
}

pub fn calculate_random_move<B: Board>(
    input: &BotInput<'_, B>,
    rng: &mut SessionRng,
) -> Option<Position> {
    let available_moves = input.board.available_moves();
    rng.pick(&available_moves).copied()
}

/// Takes a win if one exists, otherwise blocks the opponent's win, otherwise
/// plays randomly. One ply only: double threats are not seen.
pub fn calculate_medium_move<B: Board>(
    input: &BotInput<'_, B>,
    rng: &mut SessionRng,
) -> Option<Position> {
    let available_moves = input.board.available_moves();
    if available_moves.is_empty() {
        return None;
    }

    let mut board = input.board.clone();

    if let Some(pos) = find_winning_move(&mut board, input.bot_mark, input.win_length, &available_moves)
    {
        return Some(pos);
    }

    if let Some(opponent_mark) = input.bot_mark.opponent()
        && let Some(pos) =
            find_winning_move(&mut board, opponent_mark, input.win_length, &available_moves)
    {
        return Some(pos);
    }

    rng.pick(&available_moves).copied()
}

/// Takes the center cell (move index `size² / 2 + 1`) while it is free, then
/// plays like the medium bot.
pub fn calculate_hard_move<B: Board>(
    input: &BotInput<'_, B>,
    rng: &mut SessionRng,
) -> Option<Position> {
    let center = center_position(input.board.size());
    if input.board.is_empty_at(center) {
        return Some(center);
    }
    calculate_medium_move(input, rng)
}

pub fn center_position(size: usize) -> Position {
    let center_index = (size * size) / 2;
    Position::new(center_index / size, center_index % size)
}

fn find_winning_move<B: Board>(
    board: &mut B,
    mark: Mark,
    win_length: usize,
    moves: &[Position],
) -> Option<Position> {
    for &pos in moves {
        board.set(pos, mark);
        let wins = check_win(board, mark, win_length);
        board.set(pos, Mark::Empty);

        if wins {
            return Some(pos);
        }
    }
    None
}
