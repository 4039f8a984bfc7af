use std::fmt;

use super::{Position, Square};

impl fmt::Display for Position {
    /// Board diagram, White at the bottom, followed by the FEN.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        for row in 0..8 {
            write!(f, "{} |", 8 - row)?;
            for file in 0..8 {
                let ch = match self.piece_at(Square::at(row, file)) {
                    Some((color, piece)) => piece.to_fen_char(color),
                    None => '.',
                };
                write!(f, " {ch} |")?;
            }
            writeln!(f)?;
            writeln!(f, "  +---+---+---+---+---+---+---+---+")?;
        }
        writeln!(f, "    a   b   c   d   e   f   g   h")?;
        write!(f, "FEN: {}", self.to_fen())
    }
}
