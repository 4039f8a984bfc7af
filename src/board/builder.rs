//! Fluent builder for constructing positions.
//!
//! Allows creating positions piece by piece rather than parsing FEN strings.
//!
//! # Example
//! ```
//! use chess_rules::{Color, Piece, PositionBuilder, Square};
//!
//! let e1: Square = "e1".parse().unwrap();
//! let e8: Square = "e8".parse().unwrap();
//! let a7: Square = "a7".parse().unwrap();
//!
//! let position = PositionBuilder::new()
//!     .piece(e1, Color::White, Piece::King)
//!     .piece(e8, Color::Black, Piece::King)
//!     .piece(a7, Color::White, Piece::Pawn)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(position.to_fen(), "4k3/P7/8/8/8/8/8/4K3 w - - 0 1");
//! ```

use super::{CastlingRights, Color, Piece, Position, Square};

/// A fluent builder for constructing `Position` values.
#[derive(Clone, Debug)]
pub struct PositionBuilder {
    pieces: Vec<(Square, Color, Piece)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for PositionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl PositionBuilder {
    /// Create a builder for an empty board.
    #[must_use]
    pub fn new() -> Self {
        PositionBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let start = Position::new();
        let mut builder = Self::new();
        for sq in Square::all() {
            if let Some((color, piece)) = start.piece_at(sq) {
                builder.pieces.push((sq, color, piece));
            }
        }
        builder.castling_rights = CastlingRights::all();
        builder
    }

    /// Place a piece, replacing whatever stood on `square`.
    #[must_use]
    pub fn piece(mut self, square: Square, color: Color, piece: Piece) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self.pieces.push((square, color, piece));
        self
    }

    /// Remove a piece from a square.
    #[must_use]
    pub fn clear(mut self, square: Square) -> Self {
        self.pieces.retain(|(sq, _, _)| *sq != square);
        self
    }

    #[must_use]
    pub const fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    #[must_use]
    pub const fn castling_rights(mut self, rights: CastlingRights) -> Self {
        self.castling_rights = rights;
        self
    }

    /// Enable kingside castling for a color.
    #[must_use]
    pub fn castle_kingside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, true);
        self
    }

    /// Enable queenside castling for a color.
    #[must_use]
    pub fn castle_queenside(mut self, color: Color) -> Self {
        self.castling_rights.set(color, false);
        self
    }

    #[must_use]
    pub const fn en_passant(mut self, target: Square) -> Self {
        self.en_passant_target = Some(target);
        self
    }

    #[must_use]
    pub const fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub const fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number;
        self
    }

    /// Build the position. No legality checks are made.
    #[must_use]
    pub fn build(self) -> Position {
        let mut position = Position::empty();
        for (square, color, piece) in self.pieces {
            position.set(square, Some((color, piece)));
        }
        position.side_to_move = self.side_to_move;
        position.castling_rights = self.castling_rights;
        position.en_passant = self.en_passant_target;
        position.halfmove_clock = self.halfmove_clock;
        position.fullmove_number = self.fullmove_number;
        position
    }
}
