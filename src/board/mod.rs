//! Chess rules core: position, move generation, reversible moves and perft.
//!
//! The board is a 64-entry square array indexed in FEN order (a8 first).
//! Moves are produced only by the generator and carry the castling rights
//! and en-passant target that hold after them, so applying a move is a copy
//! of precomputed state. `apply` returns an [`Undo`] record which the matching
//! `unapply` consumes.
//!
//! # Example
//! ```
//! use chess_rules::board::Position;
//!
//! let mut position = Position::new();
//! let moves = position.generate_legal();
//! assert_eq!(moves.len(), 20);
//!
//! let mv = moves[0];
//! let undo = position.apply(&mv);
//! position.unapply(&mv, undo);
//! assert_eq!(position, Position::new());
//! ```

mod attacks;
mod builder;
mod display;
mod error;
mod fen;
mod make_unmake;
mod movegen;
mod perft;
mod state;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{FenError, MoveParseError, SquareError};
pub use fen::START_FEN;
pub use state::{Position, Undo};
pub use types::{
    index_of, is_black, is_white, CastlingRights, Color, Move, MoveKind, MoveList,
    MoveListIntoIter, Piece, Square,
};

pub(crate) use types::PROMOTION_PIECES;
