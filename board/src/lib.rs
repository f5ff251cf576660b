//! The rules of chess over an 8x8 grid of squares
//!
//! This crate holds the value types shared by every board representation, the read-only
//! [`BoardQuery`] capability, and the move verifiers which decide legality against it. Executing
//! moves is left to whoever owns the squares (see the `grid` crate).

use core::{fmt, str::FromStr};

mod coordinate;
mod error;
mod moves;
pub mod path;
mod query;
mod square;
pub mod verify;

pub use crate::coordinate::{Coordinate, CoordinateError};
pub use crate::error::Error;
pub use crate::moves::{Move, SpecialMove, Step, VerifiedMove};
pub use crate::query::BoardQuery;
pub use crate::square::Square;

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// The types of pieces there are
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}
impl PieceKind {
    /// All the kinds of pieces there are
    pub const KINDS: [PieceKind; 6] = [
        Self::Pawn,
        Self::Rook,
        Self::Knight,
        Self::Bishop,
        Self::Queen,
        Self::King,
    ];

    /// The capitalized version of the letter used for this piece in FEN
    pub const fn fen_letter(self) -> char {
        match self {
            Self::Pawn => 'P',
            Self::Rook => 'R',
            Self::Knight => 'N',
            Self::Bishop => 'B',
            Self::Queen => 'Q',
            Self::King => 'K',
        }
    }

    /// The kind for a FEN letter, ignoring case
    pub const fn from_fen_letter(letter: char) -> Option<Self> {
        match letter.to_ascii_uppercase() {
            'P' => Some(Self::Pawn),
            'R' => Some(Self::Rook),
            'N' => Some(Self::Knight),
            'B' => Some(Self::Bishop),
            'Q' => Some(Self::Queen),
            'K' => Some(Self::King),
            _ => None,
        }
    }
}

/// The colors a piece can have
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Color {
    White,
    Black,
}
impl Color {
    pub const fn other(self) -> Self {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }
}
impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::White => "white",
            Color::Black => "black",
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("expected `white` or `black`, found {0:?}")]
pub struct ColorFromStrErr(String);

impl FromStr for Color {
    type Err = ColorFromStrErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "white" | "w" => Ok(Color::White),
            "black" | "b" => Ok(Color::Black),
            _ => Err(ColorFromStrErr(s.to_owned())),
        }
    }
}

/// A piece, along with every move it has made so far
///
/// Two pieces compare equal only if their histories match too, which is what lets a [`Move`]
/// name exactly the piece standing on its start square.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    history: Vec<Step>,
}
impl Piece {
    /// A piece which has never moved
    pub const fn new(kind: PieceKind, color: Color) -> Self {
        Self {
            kind,
            color,
            history: Vec::new(),
        }
    }

    /// Parse a FEN letter: uppercase is white, lowercase is black
    pub fn from_fen_letter(letter: char) -> Option<Self> {
        let kind = PieceKind::from_fen_letter(letter)?;
        let color = if letter.is_ascii_uppercase() {
            Color::White
        } else {
            Color::Black
        };
        Some(Self::new(kind, color))
    }

    pub const fn fen_letter(&self) -> char {
        match self.color {
            Color::White => self.kind.fen_letter().to_ascii_uppercase(),
            Color::Black => self.kind.fen_letter().to_ascii_lowercase(),
        }
    }

    /// Whether this piece has made any move yet
    pub fn has_moved(&self) -> bool {
        !self.history.is_empty()
    }

    /// Every move this piece made, oldest first
    pub fn history(&self) -> &[Step] {
        &self.history
    }

    /// Append a move to this piece's history
    ///
    /// Boards call this when executing a [`VerifiedMove`]; history is never rewritten.
    pub fn record(&mut self, step: Step) {
        self.history.push(step);
    }
}
impl fmt::Display for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.color, self.kind)
    }
}

/// Whether a side is in check(mate)
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum CheckStatus {
    None,
    Check,
    Checkmate,
}

/// The possible outcomes of a game
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum GameOutcome {
    /// Nobody has won yet
    InProgress,
    /// White checkmated black
    WhiteCheckmate,
    /// Black checkmated white
    BlackCheckmate,
    /// White gave up
    WhiteResigned,
    /// Black gave up
    BlackResigned,
}
impl GameOutcome {
    /// The outcome where `winner` delivered checkmate
    pub const fn checkmate_by(winner: Color) -> Self {
        match winner {
            Color::White => Self::WhiteCheckmate,
            Color::Black => Self::BlackCheckmate,
        }
    }

    /// The outcome where `loser` resigned
    pub const fn resignation_by(loser: Color) -> Self {
        match loser {
            Color::White => Self::WhiteResigned,
            Color::Black => Self::BlackResigned,
        }
    }

    /// The side that won, if the game is over
    pub const fn winner(self) -> Option<Color> {
        match self {
            Self::InProgress => None,
            Self::WhiteCheckmate | Self::BlackResigned => Some(Color::White),
            Self::BlackCheckmate | Self::WhiteResigned => Some(Color::Black),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fen_letter_round_trip() {
        for kind in PieceKind::KINDS {
            for color in [Color::White, Color::Black] {
                let piece = Piece::new(kind, color);
                assert_eq!(Piece::from_fen_letter(piece.fen_letter()), Some(piece));
            }
        }
        assert_eq!(Piece::from_fen_letter('x'), None);
    }

    #[test]
    fn test_color_parsing() {
        assert_eq!("White".parse::<Color>().unwrap(), Color::White);
        assert_eq!("b".parse::<Color>().unwrap(), Color::Black);
        assert!("green".parse::<Color>().is_err());
    }

    #[test]
    fn test_history_tracks_moved() {
        let mut piece = Piece::new(PieceKind::Rook, Color::Black);
        assert!(!piece.has_moved());
        piece.record(Step {
            start: Coordinate::A8,
            destination: Coordinate::A5,
            special: SpecialMove::None,
        });
        assert!(piece.has_moved());
        assert_eq!(piece.history().len(), 1);
        assert_ne!(piece, Piece::new(PieceKind::Rook, Color::Black));
    }

    #[test]
    fn test_outcome_winner() {
        assert_eq!(GameOutcome::InProgress.winner(), None);
        assert_eq!(GameOutcome::checkmate_by(Color::Black).winner(), Some(Color::Black));
        assert_eq!(GameOutcome::resignation_by(Color::Black).winner(), Some(Color::White));
    }
}
