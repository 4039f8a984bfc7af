//! Move types and move list.

use std::fmt;
use std::ops::Index;

use smallvec::SmallVec;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::castling::CastlingRights;
use super::piece::{Color, Piece};
use super::square::Square;

/// What kind of ply a move is. The special kinds are mutually exclusive.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum MoveKind {
    /// Plain move or capture, including double pawn pushes
    Normal,
    /// King moves two files; the rook jumps over it
    Castling,
    /// Pawn captures the pawn that just double-pushed past it
    EnPassant,
    /// Pawn reaches the last rank and becomes the given piece
    Promotion(Piece),
}

/// One ply, as produced by the move generator.
///
/// Besides origin and destination a move carries the state that holds once it
/// has been applied: the castling rights and the en-passant target. The
/// generator computes both, so applying a move is a plain data copy. Moves
/// are only built by the generator and never changed afterwards.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Move {
    pub(crate) from: Square,
    pub(crate) to: Square,
    pub(crate) moved: (Color, Piece),
    pub(crate) captured: Option<(Color, Piece)>,
    pub(crate) kind: MoveKind,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant: Option<Square>,
}

impl Move {
    /// Get the source square
    #[inline]
    #[must_use]
    pub const fn from(&self) -> Square {
        self.from
    }

    /// Get the destination square
    #[inline]
    #[must_use]
    pub const fn to(&self) -> Square {
        self.to
    }

    /// The piece standing on `from` before the move
    #[inline]
    #[must_use]
    pub const fn moved_piece(&self) -> (Color, Piece) {
        self.moved
    }

    /// The piece removed by this move, if any (the pawn for en passant)
    #[inline]
    #[must_use]
    pub const fn captured_piece(&self) -> Option<(Color, Piece)> {
        self.captured
    }

    #[inline]
    #[must_use]
    pub const fn kind(&self) -> MoveKind {
        self.kind
    }

    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    #[inline]
    #[must_use]
    pub const fn is_castling(&self) -> bool {
        matches!(self.kind, MoveKind::Castling)
    }

    #[inline]
    #[must_use]
    pub const fn is_en_passant(&self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    #[inline]
    #[must_use]
    pub const fn is_promotion(&self) -> bool {
        matches!(self.kind, MoveKind::Promotion(_))
    }

    /// Get the promotion piece, if this is a promotion move
    #[inline]
    #[must_use]
    pub const fn promoted_to(&self) -> Option<Piece> {
        match self.kind {
            MoveKind::Promotion(piece) => Some(piece),
            _ => None,
        }
    }

    /// Castling rights of the position after this move
    #[inline]
    #[must_use]
    pub const fn resulting_castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    /// En-passant target of the position after this move
    #[inline]
    #[must_use]
    pub const fn resulting_en_passant(&self) -> Option<Square> {
        self.en_passant
    }

    /// True for a double pawn push that leaves an en-passant target behind
    #[inline]
    #[must_use]
    pub const fn creates_en_passant(&self) -> bool {
        self.en_passant.is_some()
    }

    /// Pawn moves and captures reset the halfmove clock
    #[inline]
    #[must_use]
    pub(crate) const fn resets_halfmove_clock(&self) -> bool {
        matches!(self.moved.1, Piece::Pawn) || self.captured.is_some()
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({}{}", self.from, self.to)?;
        if let Some(promo) = self.promoted_to() {
            write!(f, "={}", promo.to_char().to_ascii_uppercase())?;
        }
        if self.is_capture() {
            write!(f, " cap")?;
        }
        if self.is_castling() {
            write!(f, " castle")?;
        }
        if self.is_en_passant() {
            write!(f, " ep")?;
        }
        write!(f, ")")
    }
}

/// Coordinate notation: `e2e4`, `e7e8q`, `e1g1`.
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(promo) = self.promoted_to() {
            write!(f, "{}", promo.to_char())?;
        }
        Ok(())
    }
}

/// Moves kept inline before the list spills to the heap. Ordinary positions
/// stay well below this; FEN placements with many queens can exceed it.
pub(crate) const INLINE_MOVES: usize = 256;

/// List of generated moves, stored inline up to `INLINE_MOVES`.
#[derive(Clone, Debug, Default)]
pub struct MoveList {
    moves: SmallVec<[Move; INLINE_MOVES]>,
}

impl MoveList {
    pub(crate) fn new() -> Self {
        MoveList {
            moves: SmallVec::new(),
        }
    }

    #[inline]
    pub(crate) fn push(&mut self, mv: Move) {
        self.moves.push(mv);
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.moves.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Move] {
        self.moves.as_slice()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Move> {
        self.as_slice().iter()
    }

    #[must_use]
    pub fn get(&self, idx: usize) -> Option<Move> {
        self.as_slice().get(idx).copied()
    }

    /// True if any move in the list satisfies the predicate
    pub fn contains_where(&self, mut pred: impl FnMut(&Move) -> bool) -> bool {
        self.iter().any(|mv| pred(mv))
    }

    /// True once the list has outgrown its inline storage
    #[must_use]
    pub fn spilled(&self) -> bool {
        self.moves.spilled()
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Owning iterator over moves in a `MoveList`
pub struct MoveListIntoIter {
    inner: smallvec::IntoIter<[Move; INLINE_MOVES]>,
}

impl Iterator for MoveListIntoIter {
    type Item = Move;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for MoveListIntoIter {}

impl IntoIterator for MoveList {
    type Item = Move;
    type IntoIter = MoveListIntoIter;

    fn into_iter(self) -> Self::IntoIter {
        MoveListIntoIter {
            inner: self.moves.into_iter(),
        }
    }
}

impl Index<usize> for MoveList {
    type Output = Move;

    fn index(&self, idx: usize) -> &Self::Output {
        &self.as_slice()[idx]
    }
}
