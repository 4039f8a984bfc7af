//! Errors raised while reading positions, squares and moves from text.

use std::fmt;

/// Why a FEN string was rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FenError {
    /// Fewer than the four mandatory fields
    TooFewParts { found: usize },
    /// Placement character that is neither a piece letter nor a digit 1-8
    InvalidPiece { char: char },
    InvalidCastling { char: char },
    InvalidSideToMove { found: String },
    InvalidEnPassant { found: String },
    /// Placement field does not have exactly eight ranks
    RankCount { found: usize },
    /// A rank whose pieces and gaps do not add up to eight files.
    /// `rank` is the board rank (8 for the first group of the placement).
    RankWidth { rank: usize, files: usize },
}

impl fmt::Display for FenError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FenError::TooFewParts { found } => write!(
                f,
                "FEN needs placement, side, castling and en passant fields; got {found} field(s)"
            ),
            FenError::InvalidPiece { char } => write!(f, "unexpected '{char}' in piece placement"),
            FenError::InvalidCastling { char } => {
                write!(f, "unexpected '{char}' in castling field")
            }
            FenError::InvalidSideToMove { found } => {
                write!(f, "side to move must be 'w' or 'b', got '{found}'")
            }
            FenError::InvalidEnPassant { found } => {
                write!(f, "en passant field '{found}' is neither '-' nor a square")
            }
            FenError::RankCount { found } => {
                write!(f, "piece placement has {found} rank(s), expected 8")
            }
            FenError::RankWidth { rank, files } => {
                write!(f, "rank {rank} spans {files} file(s), expected 8")
            }
        }
    }
}

impl std::error::Error for FenError {}

/// Why a coordinate-notation move could not be matched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Coordinate moves are 4 characters, 5 with a promotion letter
    InvalidLength { len: usize },
    InvalidSquare { notation: String },
    /// Promotion letter other than q, r, b or n
    InvalidPromotion { char: char },
    /// Well formed, but not among the legal moves of the position
    IllegalMove { notation: String },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "coordinate move has {len} character(s), expected 4 or 5")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "'{notation}' does not name two squares")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "cannot promote to '{char}'")
            }
            MoveParseError::IllegalMove { notation } => {
                write!(f, "'{notation}' is not legal here")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Why a square could not be built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Row index past 7 (rows count down from the eighth rank)
    RankOutOfBounds { rank: usize },
    FileOutOfBounds { file: usize },
    /// Not a file letter a-h followed by a rank digit 1-8
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => write!(f, "row {rank} is off the board"),
            SquareError::FileOutOfBounds { file } => write!(f, "file {file} is off the board"),
            SquareError::InvalidNotation { notation } => {
                write!(f, "'{notation}' is not a square")
            }
        }
    }
}

impl std::error::Error for SquareError {}
