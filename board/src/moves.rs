use core::fmt;

use crate::{Coordinate, Piece};

/// How a verified move has to be carried out beyond moving one piece
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SpecialMove {
    /// Move the piece, capturing whatever is on the destination
    #[default]
    None,
    /// A pawn capture where the captured pawn is beside the start, not on the destination
    EnPassant,
    /// The king moves two columns and the rook from that corner jumps over it
    Castle,
    /// An ordinary king step, so the board has to track where the king went
    KingMove,
}

/// One entry in a piece's move history
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub start: Coordinate,
    pub destination: Coordinate,
    pub special: SpecialMove,
}
impl Step {
    pub const fn column_movement(&self) -> i8 {
        self.start.columns_to(self.destination)
    }

    pub const fn row_movement(&self) -> i8 {
        self.start.rows_to(self.destination)
    }

    /// Whether this step went straight along a column by two rows
    pub const fn is_double_advance(&self) -> bool {
        self.column_movement() == 0 && self.row_movement().unsigned_abs() == 2
    }
}

/// A proposed move, which may or may not be legal
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Move {
    pub start: Coordinate,
    pub destination: Coordinate,
    /// The piece standing on `start`
    pub piece: Piece,
}
impl Move {
    pub const fn new(start: Coordinate, destination: Coordinate, piece: Piece) -> Self {
        Self {
            start,
            destination,
            piece,
        }
    }

    pub const fn column_movement(&self) -> i8 {
        self.start.columns_to(self.destination)
    }

    pub const fn row_movement(&self) -> i8 {
        self.start.rows_to(self.destination)
    }

    /// The square holding the pawn an en passant capture along this move would take
    pub(crate) const fn en_passant_square(&self) -> Coordinate {
        Coordinate::new_unchecked(self.destination.column(), self.start.row())
    }

    /// Where the rook starts and ends if this move is a castle
    ///
    /// The rook comes from the corner the king moves towards and lands halfway along the king's
    /// path. Returns `None` if the move isn't a two column sideways king move.
    pub const fn castle_rook_squares(&self) -> Option<(Coordinate, Coordinate)> {
        let columns = self.column_movement();
        if columns.unsigned_abs() != 2 || self.row_movement() != 0 {
            return None;
        }
        let row = self.start.row();
        let home_column = if columns > 0 { Coordinate::SIZE - 1 } else { 0 };
        let rook_column = (self.start.column() as i8 + columns / 2) as u8;
        Some((
            Coordinate::new_unchecked(home_column, row),
            Coordinate::new_unchecked(rook_column, row),
        ))
    }
}
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{}{}",
            self.piece.fen_letter(),
            self.start,
            self.destination
        )
    }
}

/// A move which passed verification, together with how it must be executed
///
/// Only the verifiers in [`crate::verify`] can produce one, and nothing can change it afterwards,
/// so executing a `VerifiedMove` never has to second-guess its classification. It isn't `Clone`:
/// performing one consumes it, so it can't be replayed.
///
/// ```compile_fail
/// fn replay(verified: &board::VerifiedMove) -> board::VerifiedMove {
///     verified.clone()
/// }
/// ```
#[derive(Debug, PartialEq, Eq)]
pub struct VerifiedMove {
    mv: Move,
    special: SpecialMove,
}
impl VerifiedMove {
    pub(crate) const fn new(mv: Move, special: SpecialMove) -> Self {
        Self { mv, special }
    }

    pub const fn special(&self) -> SpecialMove {
        self.special
    }

    pub fn into_move(self) -> Move {
        self.mv
    }

    pub const fn start(&self) -> Coordinate {
        self.mv.start
    }

    pub const fn destination(&self) -> Coordinate {
        self.mv.destination
    }

    /// The piece's move history entry for this move
    pub const fn step(&self) -> Step {
        Step {
            start: self.mv.start,
            destination: self.mv.destination,
            special: self.special,
        }
    }

    /// The square of the pawn removed by an en passant capture
    pub const fn en_passant_square(&self) -> Option<Coordinate> {
        match self.special {
            SpecialMove::EnPassant => Some(self.mv.en_passant_square()),
            _ => None,
        }
    }

    /// Where the rook starts and ends, if this move is a castle
    pub const fn castle_rook_squares(&self) -> Option<(Coordinate, Coordinate)> {
        match self.special {
            SpecialMove::Castle => self.mv.castle_rook_squares(),
            _ => None,
        }
    }
}
impl fmt::Display for VerifiedMove {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.special {
            SpecialMove::None | SpecialMove::KingMove => fmt::Display::fmt(&self.mv, f),
            SpecialMove::EnPassant => write!(f, "{} e.p.", self.mv),
            SpecialMove::Castle => write!(f, "{} (castle)", self.mv),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Color, PieceKind};

    fn king_move(start: Coordinate, destination: Coordinate) -> Move {
        Move::new(start, destination, Piece::new(PieceKind::King, Color::White))
    }

    #[test]
    fn test_castle_rook_squares() {
        assert_eq!(
            king_move(Coordinate::E1, Coordinate::G1).castle_rook_squares(),
            Some((Coordinate::H1, Coordinate::F1))
        );
        assert_eq!(
            king_move(Coordinate::E1, Coordinate::C1).castle_rook_squares(),
            Some((Coordinate::A1, Coordinate::D1))
        );
        assert_eq!(
            king_move(Coordinate::D8, Coordinate::B8).castle_rook_squares(),
            Some((Coordinate::A8, Coordinate::C8))
        );
        assert_eq!(
            king_move(Coordinate::E1, Coordinate::F1).castle_rook_squares(),
            None
        );
        assert_eq!(
            king_move(Coordinate::E1, Coordinate::G2).castle_rook_squares(),
            None
        );
    }

    #[test]
    fn test_double_advance() {
        let step = |start, destination| Step {
            start,
            destination,
            special: SpecialMove::None,
        };
        assert!(step(Coordinate::E2, Coordinate::E4).is_double_advance());
        assert!(step(Coordinate::D7, Coordinate::D5).is_double_advance());
        assert!(!step(Coordinate::E2, Coordinate::E3).is_double_advance());
        assert!(!step(Coordinate::E2, Coordinate::G4).is_double_advance());
    }
}
