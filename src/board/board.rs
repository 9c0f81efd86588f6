//! Board structure

use super::bitboard::Bitboard;
use super::{Pos, Stone, TOTAL_CELLS};
use crate::error::GameError;

/// Game board: one bitboard per color.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    /// Black stones bitboard
    pub black: Bitboard,
    /// White stones bitboard
    pub white: Bitboard,
}

impl Board {
    pub fn new() -> Self {
        Self {
            black: Bitboard::new(),
            white: Bitboard::new(),
        }
    }

    /// Get stone at position
    #[inline]
    pub fn get(&self, pos: Pos) -> Stone {
        if self.black.get(pos) {
            Stone::Black
        } else if self.white.get(pos) {
            Stone::White
        } else {
            Stone::Empty
        }
    }

    /// Check if position is empty
    #[inline]
    pub fn is_empty(&self, pos: Pos) -> bool {
        !self.black.get(pos) && !self.white.get(pos)
    }

    /// Checked placement for game moves.
    ///
    /// Fails with [`GameError::InvalidMove`] when `pos` is off the board,
    /// already occupied, or `stone` is `Empty`.
    pub fn place(&mut self, pos: Pos, stone: Stone) -> Result<(), GameError> {
        let invalid = |reason| GameError::InvalidMove {
            row: pos.row,
            col: pos.col,
            reason,
        };
        if !pos.in_bounds() {
            return Err(invalid("out of bounds"));
        }
        if !self.is_empty(pos) {
            return Err(invalid("cell is occupied"));
        }
        if stone == Stone::Empty {
            return Err(invalid("cannot place an empty stone"));
        }
        self.place_stone(pos, stone);
        Ok(())
    }

    /// Speculative placement used by the search. The caller guarantees the
    /// cell is empty and must pair it with [`Board::remove_stone`].
    #[inline]
    pub fn place_stone(&mut self, pos: Pos, stone: Stone) {
        debug_assert!(self.is_empty(pos), "place_stone on occupied cell {pos}");
        match stone {
            Stone::Black => self.black.set(pos),
            Stone::White => self.white.set(pos),
            Stone::Empty => {}
        }
    }

    /// Restore a cell to empty (search rollback)
    #[inline]
    pub fn remove_stone(&mut self, pos: Pos) {
        self.black.clear(pos);
        self.white.clear(pos);
    }

    /// Get bitboard for a color (returns None for Empty)
    #[inline]
    pub fn stones(&self, stone: Stone) -> Option<&Bitboard> {
        match stone {
            Stone::Black => Some(&self.black),
            Stone::White => Some(&self.white),
            Stone::Empty => None,
        }
    }

    /// Every occupied cell regardless of color
    #[inline]
    pub fn occupied(&self) -> Bitboard {
        self.black | self.white
    }

    /// Total stones on board
    #[inline]
    pub fn stone_count(&self) -> u32 {
        self.black.count() + self.white.count()
    }

    /// Check if board is empty
    #[inline]
    pub fn is_board_empty(&self) -> bool {
        self.black.is_empty() && self.white.is_empty()
    }

    /// True iff no empty cell remains
    #[inline]
    pub fn is_full(&self) -> bool {
        self.stone_count() as usize == TOTAL_CELLS
    }

    /// Empty cells in row-major order
    pub fn empty_cells(&self) -> impl Iterator<Item = Pos> + '_ {
        Pos::all().filter(move |&p| self.is_empty(p))
    }

    /// Clear all cells for a new game
    pub fn reset(&mut self) {
        self.black = Bitboard::new();
        self.white = Bitboard::new();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
