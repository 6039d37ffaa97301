use super::board::Board;
use super::types::{Mark, Position, WinningLine};

/// Forward directions only: right, down, down-right, down-left. Every run has
/// a first cell in row-major order from which one of these reaches the rest.
const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (1, 0), (1, 1), (1, -1)];

pub fn check_win<B: Board>(board: &B, mark: Mark, win_length: usize) -> bool {
    check_win_with_line(board, mark, win_length).is_some()
}

/// Returns the first run of `win_length` cells owned by `mark`, scanning rows
/// top to bottom, columns left to right, directions in `DIRECTIONS` order.
pub fn check_win_with_line<B: Board>(
    board: &B,
    mark: Mark,
    win_length: usize,
) -> Option<WinningLine> {
    if mark == Mark::Empty || win_length == 0 {
        return None;
    }

    let size = board.size();
    for row in 0..size {
        for col in 0..size {
            let origin = Position::new(row, col);
            if board.get(origin) != mark {
                continue;
            }

            for (dr, dc) in DIRECTIONS {
                if let Some(cells) = probe(board, origin, dr, dc, mark, win_length) {
                    return Some(WinningLine::new(mark, cells));
                }
            }
        }
    }

    None
}

fn probe<B: Board>(
    board: &B,
    origin: Position,
    dr: isize,
    dc: isize,
    mark: Mark,
    win_length: usize,
) -> Option<Vec<Position>> {
    let size = board.size();
    let mut cells = Vec::with_capacity(win_length);

    for i in 0..win_length as isize {
        let row = origin.row.checked_add_signed(dr * i)?;
        let col = origin.col.checked_add_signed(dc * i)?;
        if row >= size || col >= size {
            return None;
        }

        let pos = Position::new(row, col);
        if board.get(pos) != mark {
            return None;
        }
        cells.push(pos);
    }

    Some(cells)
}
