//! Chess rules core.
//!
//! Holds a chess position, generates legal moves, applies and takes back
//! moves through an explicit undo record, and counts move paths (perft).

pub mod board;

pub use board::{
    index_of, is_black, is_white, CastlingRights, Color, FenError, Move, MoveKind, MoveList,
    MoveParseError, Piece, Position, PositionBuilder, Square, SquareError, Undo, START_FEN,
};
