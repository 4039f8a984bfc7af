use super::super::make_unmake::en_passant_victim;
use super::super::{MoveKind, MoveList, Piece, Position, Square, PROMOTION_PIECES};

impl Position {
    pub(crate) fn generate_pawn_moves(&self, from: Square, moves: &mut MoveList) {
        let color = self.side_to_move;
        let dir = color.pawn_direction();
        let promoting = from.row() == color.pre_promotion_row();

        // Pushes
        if let Some(one) = from.offset(dir, 0) {
            if self.is_empty(one) {
                if promoting {
                    self.push_promotions(from, one, moves);
                } else {
                    moves.push(self.create_move(from, one, Piece::Pawn, MoveKind::Normal));

                    if from.row() == color.pawn_start_row() {
                        if let Some(two) = from.offset(2 * dir, 0) {
                            if self.is_empty(two) {
                                let mut mv =
                                    self.create_move(from, two, Piece::Pawn, MoveKind::Normal);
                                if self.enemy_pawn_beside(two) {
                                    mv.en_passant = Some(one);
                                }
                                moves.push(mv);
                            }
                        }
                    }
                }
            }
        }

        // Captures
        for df in [-1, 1] {
            let Some(to) = from.offset(dir, df) else {
                continue;
            };
            match self.piece_at(to) {
                Some((owner, _)) if owner != color => {
                    if promoting {
                        self.push_promotions(from, to, moves);
                    } else {
                        moves.push(self.create_move(from, to, Piece::Pawn, MoveKind::Normal));
                    }
                }
                Some(_) => {}
                None => {
                    if !promoting && self.en_passant == Some(to) {
                        let victim = en_passant_victim(to, color).and_then(|sq| self.piece_at(sq));
                        if victim == Some((color.opponent(), Piece::Pawn)) {
                            moves.push(self.create_move(from, to, Piece::Pawn, MoveKind::EnPassant));
                        }
                    }
                }
            }
        }
    }

    fn push_promotions(&self, from: Square, to: Square, moves: &mut MoveList) {
        for piece in PROMOTION_PIECES {
            moves.push(self.create_move(from, to, Piece::Pawn, MoveKind::Promotion(piece)));
        }
    }

    /// An en-passant target is only recorded when an enemy pawn could use it.
    fn enemy_pawn_beside(&self, landing: Square) -> bool {
        let enemy_pawn = Some((self.side_to_move.opponent(), Piece::Pawn));
        [-1, 1]
            .into_iter()
            .filter_map(|df| landing.offset(0, df))
            .any(|sq| self.piece_at(sq) == enemy_pawn)
    }
}
