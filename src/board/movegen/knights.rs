use super::super::attacks::KNIGHT_TARGETS;
use super::super::{MoveKind, MoveList, Piece, Position, Square};

impl Position {
    pub(crate) fn generate_knight_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;
        for &to in &KNIGHT_TARGETS[from.index()] {
            match self.piece_at(to) {
                Some((owner, _)) if owner == color => {}
                _ => moves.push(self.create_move(from, to, Piece::Knight, MoveKind::Normal)),
            }
        }
    }
}
