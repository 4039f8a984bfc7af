use super::super::{MoveKind, MoveList, Piece, Position, Square};

impl Position {
    /// Ray-scan each direction until the edge, a friendly piece, or a capture.
    pub(crate) fn generate_slider_moves(
        &self,
        from: Square,
        piece: Piece,
        directions: &[(isize, isize)],
        moves: &mut MoveList,
    ) {
        let color = self.side_to_move;
        for &(dr, df) in directions {
            let mut cursor = from.offset(dr, df);
            while let Some(to) = cursor {
                match self.piece_at(to) {
                    None => moves.push(self.create_move(from, to, piece, MoveKind::Normal)),
                    Some((owner, _)) => {
                        if owner != color {
                            moves.push(self.create_move(from, to, piece, MoveKind::Normal));
                        }
                        break;
                    }
                }
                cursor = to.offset(dr, df);
            }
        }
    }
}
