//! Core chess types.
//!
//! - `Piece` and `Color` - piece kinds and colors
//! - `Square` - bounds-checked board index
//! - `Move` and `MoveList` - generated moves
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::{Move, MoveKind, MoveList, MoveListIntoIter};
pub use piece::{is_black, is_white, Color, Piece};
pub use square::{index_of, Square};

pub(crate) use piece::PROMOTION_PIECES;
