//! Move generation.
//!
//! Pseudo-legal moves come from the per-piece rules in the submodules. Every
//! move records the castling rights and en-passant target that hold after it,
//! computed here from the current rights. `generate_legal` filters the
//! pseudo-legal list with apply / attack test / unapply.

mod kings;
mod knights;
mod pawns;
mod sliders;

use super::attacks::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS};
use super::make_unmake::en_passant_victim;
use super::{CastlingRights, Color, Move, MoveKind, MoveList, Piece, Position, Square};

impl Position {
    /// Moves that follow piece movement rules for the side to move, in
    /// square-scan order. Some may leave the mover's king attacked.
    #[must_use]
    pub fn generate_pseudo_legal(&self) -> MoveList {
        let mut moves = MoveList::new();
        let color = self.side_to_move;

        for from in Square::all() {
            let Some((owner, piece)) = self.piece_at(from) else {
                continue;
            };
            if owner != color {
                continue;
            }
            match piece {
                Piece::Pawn => self.generate_pawn_moves(from, &mut moves),
                Piece::Knight => self.generate_knight_moves(from, &mut moves),
                Piece::Bishop => {
                    self.generate_slider_moves(from, piece, &BISHOP_DIRECTIONS, &mut moves);
                }
                Piece::Rook => self.generate_slider_moves(from, piece, &ROOK_DIRECTIONS, &mut moves),
                Piece::Queen => {
                    self.generate_slider_moves(from, piece, &QUEEN_DIRECTIONS, &mut moves);
                }
                Piece::King => {
                    self.generate_king_moves(from, &mut moves);
                    self.generate_castling_moves(from, &mut moves);
                }
            }
        }
        moves
    }

    /// Fully legal moves for the side to move.
    ///
    /// Takes `&mut self` because each candidate is tried on the board and
    /// taken back; the position is unchanged when this returns.
    pub fn generate_legal(&mut self) -> MoveList {
        let mover = self.side_to_move;
        let opponent = mover.opponent();
        let mut legal = MoveList::new();

        for mv in self.generate_pseudo_legal() {
            if mv.is_castling() && !self.castling_path_is_safe(&mv, opponent) {
                continue;
            }
            let undo = self.apply(&mv);
            let exposed = self.is_in_check(mover);
            self.unapply(&mv, undo);
            if !exposed {
                legal.push(mv);
            }
        }
        legal
    }

    /// King origin, crossed square and destination must all be unattacked.
    fn castling_path_is_safe(&self, mv: &Move, opponent: Color) -> bool {
        let crossed = Square::at(mv.from.row(), (mv.from.file() + mv.to.file()) / 2);
        [mv.from, crossed, mv.to]
            .into_iter()
            .all(|sq| !self.is_attacked(sq, opponent))
    }

    /// Build a move of `piece` for the side to move. Fills in the captured
    /// piece and the castling rights after the move; the en-passant target is
    /// left empty for the pawn rule to set.
    pub(crate) fn create_move(&self, from: Square, to: Square, piece: Piece, kind: MoveKind) -> Move {
        let moved = (self.side_to_move, piece);
        let captured = match kind {
            MoveKind::EnPassant => {
                en_passant_victim(to, moved.0).and_then(|victim| self.piece_at(victim))
            }
            MoveKind::Castling => None,
            MoveKind::Normal | MoveKind::Promotion(_) => self.piece_at(to),
        };

        Move {
            from,
            to,
            moved,
            captured,
            kind,
            castling_rights: self.rights_after(from, to, moved),
            en_passant: None,
        }
    }

    /// Castling rights once `moved` goes from `from` to `to`: a king move drops
    /// both of its color's rights, touching a rook home square drops that
    /// corner's right.
    fn rights_after(&self, from: Square, to: Square, moved: (Color, Piece)) -> CastlingRights {
        let mut rights = self.castling_rights;
        if moved.1 == Piece::King {
            rights.remove_color(moved.0);
        }
        rights.remove_corner(from);
        rights.remove_corner(to);
        rights
    }
}
