use super::super::attacks::KING_TARGETS;
use super::super::{MoveKind, MoveList, Piece, Position, Square};

impl Position {
    pub(crate) fn generate_king_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;
        for &to in &KING_TARGETS[from.index()] {
            match self.piece_at(to) {
                Some((owner, _)) if owner == color => {}
                _ => moves.push(self.create_move(from, to, Piece::King, MoveKind::Normal)),
            }
        }
    }

    /// Castling needs the right, empty squares between king and rook, and the
    /// rook still at home. Attacked squares are checked by `generate_legal`.
    pub(crate) fn generate_castling_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;
        let back_row = color.back_row();
        if from != Square::at(back_row, 4) {
            return;
        }
        let rook = Some((color, Piece::Rook));

        if self.castling_rights.has(color, true)
            && self.is_empty(Square::at(back_row, 5))
            && self.is_empty(Square::at(back_row, 6))
            && self.piece_at(Square::at(back_row, 7)) == rook
        {
            let to = Square::at(back_row, 6);
            moves.push(self.create_move(from, to, Piece::King, MoveKind::Castling));
        }
        if self.castling_rights.has(color, false)
            && self.is_empty(Square::at(back_row, 3))
            && self.is_empty(Square::at(back_row, 2))
            && self.is_empty(Square::at(back_row, 1))
            && self.piece_at(Square::at(back_row, 0)) == rook
        {
            let to = Square::at(back_row, 2);
            moves.push(self.create_move(from, to, Piece::King, MoveKind::Castling));
        }
    }
}
