use std::collections::HashMap;

use super::types::{MAX_BOARD_SIZE, MIN_BOARD_SIZE, Mark, Position};

/// Square grid of marks. Positions passed to `get` and `set` must already be
/// inside the board; callers validate move indices first.
pub trait Board: Clone {
    fn size(&self) -> usize;

    fn get(&self, pos: Position) -> Mark;

    fn set(&mut self, pos: Position, mark: Mark);

    fn is_empty_at(&self, pos: Position) -> bool {
        self.get(pos) == Mark::Empty
    }

    fn is_full(&self) -> bool {
        let size = self.size();
        (0..size).all(|row| (0..size).all(|col| !self.is_empty_at(Position::new(row, col))))
    }

    /// Empty cells in row-major order.
    fn available_moves(&self) -> Vec<Position> {
        let size = self.size();
        let mut moves = Vec::new();
        for row in 0..size {
            for col in 0..size {
                let pos = Position::new(row, col);
                if self.is_empty_at(pos) {
                    moves.push(pos);
                }
            }
        }
        moves
    }
}

pub fn validate_board_size(size: usize) -> Result<(), String> {
    if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&size) {
        return Err(format!(
            "Board size must be between {} and {}, got {}",
            MIN_BOARD_SIZE, MAX_BOARD_SIZE, size
        ));
    }
    Ok(())
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridBoard {
    cells: Vec<Mark>,
    size: usize,
}

impl GridBoard {
    pub fn new(size: usize) -> Result<Self, String> {
        validate_board_size(size)?;
        Ok(Self {
            cells: vec![Mark::Empty; size * size],
            size,
        })
    }

    fn index(&self, pos: Position) -> usize {
        debug_assert!(pos.row < self.size && pos.col < self.size);
        pos.row * self.size + pos.col
    }
}

impl Board for GridBoard {
    fn size(&self) -> usize {
        self.size
    }

    fn get(&self, pos: Position) -> Mark {
        self.cells[self.index(pos)]
    }

    fn set(&mut self, pos: Position, mark: Mark) {
        let index = self.index(pos);
        self.cells[index] = mark;
    }

    fn is_full(&self) -> bool {
        self.cells.iter().all(|&cell| cell != Mark::Empty)
    }
}

/// Stores occupied cells only; suited to large, mostly empty boards.
#[derive(Clone, Debug, Default)]
pub struct SparseBoard {
    occupied: HashMap<Position, Mark>,
    size: usize,
}

impl SparseBoard {
    pub fn new(size: usize) -> Result<Self, String> {
        validate_board_size(size)?;
        Ok(Self {
            occupied: HashMap::new(),
            size,
        })
    }
}

impl Board for SparseBoard {
    fn size(&self) -> usize {
        self.size
    }

    fn get(&self, pos: Position) -> Mark {
        debug_assert!(pos.row < self.size && pos.col < self.size);
        self.occupied.get(&pos).copied().unwrap_or(Mark::Empty)
    }

    fn set(&mut self, pos: Position, mark: Mark) {
        debug_assert!(pos.row < self.size && pos.col < self.size);
        if mark == Mark::Empty {
            self.occupied.remove(&pos);
        } else {
            self.occupied.insert(pos, mark);
        }
    }

    fn is_full(&self) -> bool {
        self.occupied.len() == self.size * self.size
    }
}
