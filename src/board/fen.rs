use std::str::FromStr;

use super::error::{FenError, MoveParseError};
use super::{CastlingRights, Color, Move, Piece, Position, Square, PROMOTION_PIECES};

/// FEN of the standard starting position.
pub const START_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl Position {
    /// Parse a position from FEN notation.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let mut position = Position::empty();
        let parts: Vec<&str> = fen.split_whitespace().collect();

        if parts.len() < 4 {
            return Err(FenError::TooFewParts { found: parts.len() });
        }

        // Piece placement, eighth rank first
        let ranks: Vec<&str> = parts[0].split('/').collect();
        if ranks.len() != 8 {
            return Err(FenError::RankCount { found: ranks.len() });
        }
        for (row, rank_str) in ranks.iter().enumerate() {
            let mut file = 0;
            for c in rank_str.chars() {
                let (width, occupant) = match c.to_digit(10).filter(|d| (1..=8).contains(d)) {
                    Some(skip) => (skip as usize, None),
                    None => {
                        let piece = Piece::from_char(c).ok_or(FenError::InvalidPiece { char: c })?;
                        let color = if c.is_ascii_uppercase() {
                            Color::White
                        } else {
                            Color::Black
                        };
                        (1, Some((color, piece)))
                    }
                };
                if file + width > 8 {
                    return Err(FenError::RankWidth {
                        rank: 8 - row,
                        files: file + width,
                    });
                }
                if occupant.is_some() {
                    position.set(Square::at(row, file), occupant);
                }
                file += width;
            }
            if file != 8 {
                return Err(FenError::RankWidth {
                    rank: 8 - row,
                    files: file,
                });
            }
        }

        position.side_to_move = match parts[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        };

        for c in parts[2].chars() {
            match c {
                'K' => position.castling_rights.set(Color::White, true),
                'Q' => position.castling_rights.set(Color::White, false),
                'k' => position.castling_rights.set(Color::Black, true),
                'q' => position.castling_rights.set(Color::Black, false),
                '-' => {}
                _ => return Err(FenError::InvalidCastling { char: c }),
            }
        }

        position.en_passant = match parts[3] {
            "-" => None,
            ep => Some(ep.parse::<Square>().map_err(|_| FenError::InvalidEnPassant {
                found: ep.to_string(),
            })?),
        };

        // Counters are best effort
        position.halfmove_clock = parts.get(4).and_then(|s| s.parse().ok()).unwrap_or(0);
        position.fullmove_number = parts.get(5).and_then(|s| s.parse().ok()).unwrap_or(1);

        Ok(position)
    }

    /// Overwrite this position with the one described by `fen`.
    ///
    /// On error the position is left as it was.
    pub fn load_fen(&mut self, fen: &str) -> Result<(), FenError> {
        match Position::from_fen(fen) {
            Ok(position) => {
                log::debug!("loaded FEN {fen}");
                *self = position;
                Ok(())
            }
            Err(err) => {
                log::debug!("rejected FEN {fen:?}: {err}");
                Err(err)
            }
        }
    }

    /// Convert the position to FEN notation.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for row in 0..8 {
            let mut text = String::new();
            let mut empty = 0;
            for file in 0..8 {
                match self.piece_at(Square::at(row, file)) {
                    Some((color, piece)) => {
                        if empty > 0 {
                            text.push_str(&empty.to_string());
                            empty = 0;
                        }
                        text.push(piece.to_fen_char(color));
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                text.push_str(&empty.to_string());
            }
            rows.push(text);
        }

        let active = match self.side_to_move {
            Color::White => "w",
            Color::Black => "b",
        };
        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            active,
            castling_field(self.castling_rights),
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }

    /// Parse a move in coordinate notation (e.g. "e2e4", "e7e8q") against the
    /// legal moves of this position.
    ///
    /// # Example
    /// ```
    /// use chess_rules::Position;
    ///
    /// let mut position = Position::new();
    /// let mv = position.parse_move("e2e4").unwrap();
    /// assert_eq!(mv.to_string(), "e2e4");
    /// ```
    pub fn parse_move(&mut self, text: &str) -> Result<Move, MoveParseError> {
        if !(4..=5).contains(&text.len()) || !text.is_ascii() {
            return Err(MoveParseError::InvalidLength { len: text.len() });
        }

        let invalid_square = || MoveParseError::InvalidSquare {
            notation: text.to_string(),
        };
        let from: Square = text[0..2].parse().map_err(|_| invalid_square())?;
        let to: Square = text[2..4].parse().map_err(|_| invalid_square())?;

        let promotion = match text[4..].chars().next() {
            None => None,
            Some(c) => match Piece::from_char(c) {
                Some(piece) if PROMOTION_PIECES.contains(&piece) => Some(piece),
                _ => return Err(MoveParseError::InvalidPromotion { char: c }),
            },
        };

        self.generate_legal()
            .into_iter()
            .find(|mv| mv.from() == from && mv.to() == to && mv.promoted_to() == promotion)
            .ok_or_else(|| MoveParseError::IllegalMove {
                notation: text.to_string(),
            })
    }
}

fn castling_field(rights: CastlingRights) -> String {
    let mut field = String::new();
    for (color, kingside, c) in [
        (Color::White, true, 'K'),
        (Color::White, false, 'Q'),
        (Color::Black, true, 'k'),
        (Color::Black, false, 'q'),
    ] {
        if rights.has(color, kingside) {
            field.push(c);
        }
    }
    if field.is_empty() {
        field.push('-');
    }
    field
}

impl FromStr for Position {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Position {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_fen())
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Position {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let fen = <String as serde::Deserialize>::deserialize(deserializer)?;
        Position::from_fen(&fen).map_err(serde::de::Error::custom)
    }
}
