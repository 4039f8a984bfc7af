use super::{CastlingRights, Color, Piece, Square};

/// Everything `unapply` needs to restore the position an `apply` started from.
///
/// Returned by [`Position::apply`] and consumed by the matching
/// [`Position::unapply`]. Not `Clone`: each record is used exactly once.
#[derive(Debug, PartialEq, Eq)]
pub struct Undo {
    pub(crate) from_piece: Option<(Color, Piece)>,
    pub(crate) to_piece: Option<(Color, Piece)>,
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_en_passant: Option<Square>,
    pub(crate) previous_side_to_move: Color,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
    // Only set for en passant: where the captured pawn stood
    pub(crate) en_passant_capture: Option<(Square, (Color, Piece))>,
}

/// The authoritative board state.
///
/// Squares are indexed `row * 8 + file` in FEN order: index 0 is a8 and
/// index 63 is h1.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub(crate) squares: [Option<(Color, Piece)>; 64],
    pub(crate) side_to_move: Color,
    pub(crate) castling_rights: CastlingRights,
    pub(crate) en_passant: Option<Square>,
    pub(crate) halfmove_clock: u32,
    pub(crate) fullmove_number: u32,
}

const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

impl Position {
    /// The standard starting position.
    #[must_use]
    pub fn new() -> Self {
        let mut position = Position::empty();
        position.reset();
        position
    }

    /// A board without pieces, White to move, no rights.
    pub(crate) fn empty() -> Self {
        Position {
            squares: [None; 64],
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Restore the standard starting position in place.
    pub fn reset(&mut self) {
        self.squares = [None; 64];
        for (file, &piece) in BACK_RANK.iter().enumerate() {
            self.squares[Square::at(0, file).index()] = Some((Color::Black, piece));
            self.squares[Square::at(1, file).index()] = Some((Color::Black, Piece::Pawn));
            self.squares[Square::at(6, file).index()] = Some((Color::White, Piece::Pawn));
            self.squares[Square::at(7, file).index()] = Some((Color::White, piece));
        }
        self.side_to_move = Color::White;
        self.castling_rights = CastlingRights::all();
        self.en_passant = None;
        self.halfmove_clock = 0;
        self.fullmove_number = 1;
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Option<(Color, Piece)> {
        self.squares[sq.index()]
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.squares[sq.index()].is_none()
    }

    #[inline]
    pub(crate) fn set(&mut self, sq: Square, occupant: Option<(Color, Piece)>) {
        self.squares[sq.index()] = occupant;
    }

    /// All 64 squares in index order
    #[must_use]
    pub fn squares(&self) -> &[Option<(Color, Piece)>; 64] {
        &self.squares
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[inline]
    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}
