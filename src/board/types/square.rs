//! Square types and utilities.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Flat board index of `(row, file)`.
///
/// Row 0 is the first rank written in a FEN string (the eighth rank), so
/// index 0 is a8 and index 63 is h1.
#[inline]
#[must_use]
pub const fn index_of(row: usize, file: usize) -> usize {
    row * 8 + file
}

/// A square on the chess board, stored as its index in `0..64`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u8", into = "u8"))]
pub struct Square(u8);

impl Square {
    /// Create a square with bounds checking
    #[inline]
    #[must_use]
    pub const fn new(row: usize, file: usize) -> Option<Self> {
        if row < 8 && file < 8 {
            Some(Square(index_of(row, file) as u8))
        } else {
            None
        }
    }

    /// Create a square from a flat index (0-63)
    #[inline]
    #[must_use]
    pub const fn from_index(idx: usize) -> Option<Self> {
        if idx < 64 {
            Some(Square(idx as u8))
        } else {
            None
        }
    }

    /// Coordinates known to be on the board (compile-time tables, castling squares).
    #[inline]
    #[must_use]
    pub(crate) const fn at(row: usize, file: usize) -> Self {
        debug_assert!(row < 8 && file < 8);
        Square(index_of(row, file) as u8)
    }

    /// Flat index (0-63, a8=0, h1=63)
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Row (0-7, where 0 = eighth rank)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0 as usize / 8
    }

    /// File (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn file(self) -> usize {
        self.0 as usize % 8
    }

    /// The square `d_row` rows and `d_file` files away, if it is on the board.
    #[inline]
    #[must_use]
    pub fn offset(self, d_row: isize, d_file: isize) -> Option<Self> {
        let row = self.row() as isize + d_row;
        let file = self.file() as isize + d_file;
        if (0..8).contains(&row) && (0..8).contains(&file) {
            Some(Square::at(row as usize, file as usize))
        } else {
            None
        }
    }

    /// All 64 squares in index order
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64u8).map(Square)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.file() as u8 + b'a') as char, 8 - self.row())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, file): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(SquareError::RankOutOfBounds { rank: row });
        }
        if file >= 8 {
            return Err(SquareError::FileOutOfBounds { file });
        }
        Ok(Square::at(row, file))
    }
}

impl TryFrom<u8> for Square {
    type Error = SquareError;

    fn try_from(idx: u8) -> Result<Self, Self::Error> {
        Square::from_index(idx as usize).ok_or(SquareError::RankOutOfBounds {
            rank: idx as usize / 8,
        })
    }
}

impl From<Square> for u8 {
    fn from(sq: Square) -> u8 {
        sq.0
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || SquareError::InvalidNotation {
            notation: s.to_string(),
        };
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return Err(invalid());
        }

        let file = match bytes[0] {
            b'a'..=b'h' => (bytes[0] - b'a') as usize,
            _ => return Err(invalid()),
        };
        let row = match bytes[1] {
            b'1'..=b'8' => 7 - (bytes[1] - b'1') as usize,
            _ => return Err(invalid()),
        };

        Ok(Square::at(row, file))
    }
}
