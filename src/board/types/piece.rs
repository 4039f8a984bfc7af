//! Piece and color types.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Chess piece kinds.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Piece {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl Piece {
    /// All piece kinds in index order
    pub const ALL: [Piece; 6] = [
        Piece::Pawn,
        Piece::Knight,
        Piece::Bishop,
        Piece::Rook,
        Piece::Queen,
        Piece::King,
    ];

    /// Parse a piece from a character of either case (p, n, b, r, q, k)
    #[must_use]
    pub fn from_char(c: char) -> Option<Piece> {
        match c.to_ascii_lowercase() {
            'p' => Some(Piece::Pawn),
            'n' => Some(Piece::Knight),
            'b' => Some(Piece::Bishop),
            'r' => Some(Piece::Rook),
            'q' => Some(Piece::Queen),
            'k' => Some(Piece::King),
            _ => None,
        }
    }

    /// Convert piece to lowercase character
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Piece::Pawn => 'p',
            Piece::Knight => 'n',
            Piece::Bishop => 'b',
            Piece::Rook => 'r',
            Piece::Queen => 'q',
            Piece::King => 'k',
        }
    }

    /// Convert piece to character with case based on color (uppercase for White)
    #[inline]
    #[must_use]
    pub fn to_fen_char(self, color: Color) -> char {
        let c = self.to_char();
        if color == Color::White {
            c.to_ascii_uppercase()
        } else {
            c
        }
    }

    /// Returns true if this piece attacks along diagonals (Bishop, Queen)
    #[inline]
    #[must_use]
    pub const fn attacks_diagonally(self) -> bool {
        matches!(self, Piece::Bishop | Piece::Queen)
    }

    /// Returns true if this piece attacks along ranks and files (Rook, Queen)
    #[inline]
    #[must_use]
    pub const fn attacks_straight(self) -> bool {
        matches!(self, Piece::Rook | Piece::Queen)
    }
}

/// Promotion choices, queen first
pub(crate) const PROMOTION_PIECES: [Piece; 4] =
    [Piece::Queen, Piece::Rook, Piece::Bishop, Piece::Knight];

/// Chess colors.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Color {
    White,
    Black,
}

impl Color {
    /// Both colors, White first
    pub const BOTH: [Color; 2] = [Color::White, Color::Black];

    /// Returns the opposite color
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row holding this color's king and rooks at the start (7 for White, 0 for Black).
    ///
    /// Rows follow FEN order: row 0 is the eighth rank.
    #[inline]
    #[must_use]
    pub(crate) const fn back_row(self) -> usize {
        match self {
            Color::White => 7,
            Color::Black => 0,
        }
    }

    /// Row delta of a pawn step (-1 for White, +1 for Black)
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_direction(self) -> isize {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    /// Row from which a pawn may advance two squares
    #[inline]
    #[must_use]
    pub(crate) const fn pawn_start_row(self) -> usize {
        match self {
            Color::White => 6,
            Color::Black => 1,
        }
    }

    /// Row a pawn stands on when its next step promotes
    #[inline]
    #[must_use]
    pub(crate) const fn pre_promotion_row(self) -> usize {
        match self {
            Color::White => 1,
            Color::Black => 6,
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "White"),
            Color::Black => write!(f, "Black"),
        }
    }
}

/// True if the occupant is a white piece.
#[inline]
#[must_use]
pub fn is_white(occupant: Option<(Color, Piece)>) -> bool {
    matches!(occupant, Some((Color::White, _)))
}

/// True if the occupant is a black piece.
#[inline]
#[must_use]
pub fn is_black(occupant: Option<(Color, Piece)>) -> bool {
    matches!(occupant, Some((Color::Black, _)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_chars_round_trip() {
        for piece in Piece::ALL {
            for color in Color::BOTH {
                let c = piece.to_fen_char(color);
                assert_eq!(Piece::from_char(c), Some(piece));
                assert_eq!(c.is_ascii_uppercase(), color == Color::White);
            }
        }
        assert_eq!(Piece::from_char('x'), None);
    }

    #[test]
    fn test_occupant_predicates() {
        assert!(is_white(Some((Color::White, Piece::Rook))));
        assert!(!is_white(Some((Color::Black, Piece::Rook))));
        assert!(is_black(Some((Color::Black, Piece::Pawn))));
        assert!(!is_white(None));
        assert!(!is_black(None));
    }

    #[test]
    fn test_pawn_geometry_is_mirrored() {
        assert_eq!(Color::White.pawn_direction(), -Color::Black.pawn_direction());
        assert_eq!(Color::White.pawn_start_row() + Color::Black.pawn_start_row(), 7);
        assert_eq!(
            Color::White.pre_promotion_row() + Color::Black.pre_promotion_row(),
            7
        );
    }
}
