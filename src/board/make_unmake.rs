use super::{Color, Move, MoveKind, Piece, Position, Square, Undo};

/// Rook relocation for a castling king landing on `king_to`: (rook from, rook to).
fn castling_rook_squares(king_to: Square) -> (Square, Square) {
    match king_to.index() {
        // g1: h1 -> f1
        62 => (Square::at(7, 7), Square::at(7, 5)),
        // c1: a1 -> d1
        58 => (Square::at(7, 0), Square::at(7, 3)),
        // g8: h8 -> f8
        6 => (Square::at(0, 7), Square::at(0, 5)),
        // c8: a8 -> d8
        2 => (Square::at(0, 0), Square::at(0, 3)),
        _ => unreachable!("castling move landing on {king_to}"),
    }
}

/// Square of the pawn removed by an en-passant capture landing on `to`.
#[inline]
pub(crate) fn en_passant_victim(to: Square, mover: Color) -> Option<Square> {
    to.offset(-mover.pawn_direction(), 0)
}

impl Position {
    /// Play a generated move and return the record that undoes it.
    ///
    /// The move must come from `generate_pseudo_legal` or `generate_legal` on
    /// this exact position.
    pub fn apply(&mut self, mv: &Move) -> Undo {
        let mut undo = Undo {
            from_piece: self.piece_at(mv.from),
            to_piece: self.piece_at(mv.to),
            previous_castling_rights: self.castling_rights,
            previous_en_passant: self.en_passant,
            previous_side_to_move: self.side_to_move,
            previous_halfmove_clock: self.halfmove_clock,
            previous_fullmove_number: self.fullmove_number,
            en_passant_capture: None,
        };

        let (color, _) = mv.moved;
        match mv.kind {
            MoveKind::Promotion(piece) => {
                self.set(mv.from, None);
                self.set(mv.to, Some((color, piece)));
            }
            MoveKind::EnPassant => {
                if let Some(victim_sq) = en_passant_victim(mv.to, color) {
                    if let Some(victim) = self.piece_at(victim_sq) {
                        undo.en_passant_capture = Some((victim_sq, victim));
                    }
                    self.set(victim_sq, None);
                }
                self.set(mv.from, None);
                self.set(mv.to, Some(mv.moved));
            }
            MoveKind::Castling => {
                self.set(mv.from, None);
                self.set(mv.to, Some(mv.moved));
                let (rook_from, rook_to) = castling_rook_squares(mv.to);
                let rook = self.piece_at(rook_from);
                self.set(rook_from, None);
                self.set(rook_to, rook);
            }
            MoveKind::Normal => {
                self.set(mv.from, None);
                self.set(mv.to, Some(mv.moved));
            }
        }

        self.castling_rights = mv.castling_rights;
        self.en_passant = mv.en_passant;
        if mv.resets_halfmove_clock() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number = self.fullmove_number.saturating_add(1);
        }
        self.side_to_move = self.side_to_move.opponent();

        undo
    }

    /// Take back `mv` using the record its `apply` returned.
    ///
    /// Must be called with the exact `(move, undo)` pair, after every move
    /// applied later has itself been taken back.
    pub fn unapply(&mut self, mv: &Move, undo: Undo) {
        self.side_to_move = undo.previous_side_to_move;
        self.castling_rights = undo.previous_castling_rights;
        self.en_passant = undo.previous_en_passant;
        self.halfmove_clock = undo.previous_halfmove_clock;
        self.fullmove_number = undo.previous_fullmove_number;

        if mv.is_promotion() {
            self.set(mv.from, Some((mv.moved.0, Piece::Pawn)));
            self.set(mv.to, undo.to_piece);
            return;
        }

        self.set(mv.from, undo.from_piece);
        self.set(mv.to, undo.to_piece);

        if mv.is_castling() {
            let (rook_from, rook_to) = castling_rook_squares(mv.to);
            let rook = self.piece_at(rook_to);
            self.set(rook_to, None);
            self.set(rook_from, rook);
        }

        if let Some((victim_sq, victim)) = undo.en_passant_capture {
            self.set(victim_sq, Some(victim));
        }
    }
}
