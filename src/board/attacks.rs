//! Attack queries over the square array.
//!
//! Knight and king destinations are precomputed per square; sliding pieces
//! are ray-scanned on demand.

use once_cell::sync::Lazy;

use super::{Color, Piece, Position, Square};

pub(crate) const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (2, 1),
    (2, -1),
    (-2, 1),
    (-2, -1),
    (1, 2),
    (1, -2),
    (-1, 2),
    (-1, -2),
];

pub(crate) const KING_OFFSETS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

pub(crate) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(crate) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(crate) const QUEEN_DIRECTIONS: [(isize, isize); 8] = KING_OFFSETS;

fn offset_table(offsets: &[(isize, isize)]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        let from = Square::at(idx / 8, idx % 8);
        offsets
            .iter()
            .filter_map(|&(dr, df)| from.offset(dr, df))
            .collect()
    })
}

/// Knight destinations from every square
pub(crate) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| offset_table(&KNIGHT_OFFSETS));

/// King destinations from every square
pub(crate) static KING_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| offset_table(&KING_OFFSETS));

impl Position {
    /// True if any piece of `by` could capture on `square` next move.
    ///
    /// Ignores whose turn it is and ignores pins.
    #[must_use]
    pub fn is_attacked(&self, square: Square, by: Color) -> bool {
        // A pawn attacks diagonally forward, so look one step backward from its view
        let back = -by.pawn_direction();
        for df in [-1, 1] {
            if let Some(src) = square.offset(back, df) {
                if self.piece_at(src) == Some((by, Piece::Pawn)) {
                    return true;
                }
            }
        }

        if KNIGHT_TARGETS[square.index()]
            .iter()
            .any(|&src| self.piece_at(src) == Some((by, Piece::Knight)))
        {
            return true;
        }

        if KING_TARGETS[square.index()]
            .iter()
            .any(|&src| self.piece_at(src) == Some((by, Piece::King)))
        {
            return true;
        }

        let diagonal = BISHOP_DIRECTIONS.iter().any(|&dir| {
            matches!(self.first_occupant(square, dir), Some((c, p)) if c == by && p.attacks_diagonally())
        });
        if diagonal {
            return true;
        }

        ROOK_DIRECTIONS.iter().any(|&dir| {
            matches!(self.first_occupant(square, dir), Some((c, p)) if c == by && p.attacks_straight())
        })
    }

    /// First piece met walking from `from` (exclusive) in direction `dir`.
    fn first_occupant(
        &self,
        from: Square,
        (dr, df): (isize, isize),
    ) -> Option<(Color, Piece)> {
        let mut cursor = from.offset(dr, df);
        while let Some(sq) = cursor {
            if let Some(occupant) = self.piece_at(sq) {
                return Some(occupant);
            }
            cursor = sq.offset(dr, df);
        }
        None
    }

    /// Square of `color`'s king, if it has one.
    #[must_use]
    pub fn king_square(&self, color: Color) -> Option<Square> {
        Square::all().find(|&sq| self.piece_at(sq) == Some((color, Piece::King)))
    }

    /// True if `color`'s king is attacked. A missing king is never in check.
    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        self.king_square(color)
            .is_some_and(|king| self.is_attacked(king, color.opponent()))
    }
}
