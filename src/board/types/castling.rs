//! Castling rights type.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::Color;
use super::square::Square;

pub(crate) const CASTLE_WHITE_K: u8 = 1 << 0;
pub(crate) const CASTLE_WHITE_Q: u8 = 1 << 1;
pub(crate) const CASTLE_BLACK_K: u8 = 1 << 2;
pub(crate) const CASTLE_BLACK_Q: u8 = 1 << 3;

/// All castling rights combined
pub(crate) const ALL_CASTLING_RIGHTS: u8 =
    CASTLE_WHITE_K | CASTLE_WHITE_Q | CASTLE_BLACK_K | CASTLE_BLACK_Q;

/// Castling rights represented as a bitmask.
///
/// Bit 0 white king-side, bit 1 white queen-side, bit 2 black king-side,
/// bit 3 black queen-side. Rights are only ever removed by moves, never
/// re-derived from the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "u8", into = "u8"))]
pub struct CastlingRights(u8);

impl CastlingRights {
    /// No castling rights
    #[must_use]
    pub const fn none() -> Self {
        CastlingRights(0)
    }

    /// All castling rights (both sides can castle kingside and queenside)
    #[must_use]
    pub const fn all() -> Self {
        CastlingRights(ALL_CASTLING_RIGHTS)
    }

    /// Check if a specific castling right is set
    #[inline]
    #[must_use]
    pub const fn has(self, color: Color, kingside: bool) -> bool {
        self.0 & Self::bit_for(color, kingside) != 0
    }

    /// Set a specific castling right
    #[inline]
    pub fn set(&mut self, color: Color, kingside: bool) {
        self.0 |= Self::bit_for(color, kingside);
    }

    /// Remove a specific castling right
    #[inline]
    pub fn remove(&mut self, color: Color, kingside: bool) {
        self.0 &= !Self::bit_for(color, kingside);
    }

    /// Remove both rights of one color
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.remove(color, true);
        self.remove(color, false);
    }

    /// Remove the right tied to a rook home square. Other squares are ignored.
    #[inline]
    pub(crate) fn remove_corner(&mut self, sq: Square) {
        self.0 &= !corner_bit(sq);
    }

    /// Get the raw bitmask value
    #[inline]
    #[must_use]
    pub const fn as_u8(self) -> u8 {
        self.0
    }

    /// Create from raw bitmask value (upper bits are dropped)
    #[inline]
    #[must_use]
    pub const fn from_u8(value: u8) -> Self {
        CastlingRights(value & ALL_CASTLING_RIGHTS)
    }

    #[inline]
    const fn bit_for(color: Color, kingside: bool) -> u8 {
        match (color, kingside) {
            (Color::White, true) => CASTLE_WHITE_K,
            (Color::White, false) => CASTLE_WHITE_Q,
            (Color::Black, true) => CASTLE_BLACK_K,
            (Color::Black, false) => CASTLE_BLACK_Q,
        }
    }
}

impl From<u8> for CastlingRights {
    fn from(value: u8) -> Self {
        CastlingRights::from_u8(value)
    }
}

impl From<CastlingRights> for u8 {
    fn from(rights: CastlingRights) -> u8 {
        rights.as_u8()
    }
}

// a8, h8, a1, h1
const fn corner_bit(sq: Square) -> u8 {
    match sq.index() {
        0 => CASTLE_BLACK_Q,
        7 => CASTLE_BLACK_K,
        56 => CASTLE_WHITE_Q,
        63 => CASTLE_WHITE_K,
        _ => 0,
    }
}
