//! Tracing straight and diagonal lines across the board
//!
//! Every sliding move (rook, bishop, queen), every single king step, and the rook's jump while
//! castling is checked by the same walk: find which of the eight rays leads from the start to the
//! destination, make sure nothing stands on the squares strictly between them, then make sure
//! the destination is either empty or holds something of the other color.

use crate::{BoardQuery, Color, Coordinate, Error, Result};

/// The eight rays along which a line can be traced
///
/// "Positive" diagonals rise to the right, "negative" ones fall to the right. "Forward" means
/// towards higher columns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    PositiveDiagonalForward,
    NegativeDiagonalForward,
    PositiveDiagonalBackward,
    NegativeDiagonalBackward,
    ColumnUp,
    ColumnDown,
    RowRight,
    RowLeft,
}

impl Direction {
    /// All eight directions
    pub const ALL: [Direction; 8] = [
        Self::PositiveDiagonalForward,
        Self::NegativeDiagonalForward,
        Self::PositiveDiagonalBackward,
        Self::NegativeDiagonalBackward,
        Self::ColumnUp,
        Self::ColumnDown,
        Self::RowRight,
        Self::RowLeft,
    ];

    /// Classify the line from `start` to `destination`
    ///
    /// Returns `None` if the two are the same square or aren't on a shared row, column, or
    /// diagonal.
    ///
    /// ```
    /// # use board::{Coordinate, path::Direction};
    /// assert_eq!(
    ///     Direction::between(Coordinate::C1, Coordinate::H6),
    ///     Some(Direction::PositiveDiagonalForward),
    /// );
    /// assert_eq!(Direction::between(Coordinate::A1, Coordinate::B3), None);
    /// assert_eq!(Direction::between(Coordinate::D4, Coordinate::D4), None);
    /// ```
    pub const fn between(start: Coordinate, destination: Coordinate) -> Option<Self> {
        let columns = start.columns_to(destination);
        let rows = start.rows_to(destination);
        Some(match (columns, rows) {
            (0, 0) => return None,
            (0, r) if r > 0 => Self::ColumnUp,
            (0, _) => Self::ColumnDown,
            (c, 0) if c > 0 => Self::RowRight,
            (_, 0) => Self::RowLeft,
            (c, r) if c == r && c > 0 => Self::PositiveDiagonalForward,
            (c, r) if c == r => Self::PositiveDiagonalBackward,
            (c, r) if c == -r && c > 0 => Self::NegativeDiagonalForward,
            (c, r) if c == -r => Self::NegativeDiagonalBackward,
            _ => return None,
        })
    }

    /// The `(columns, rows)` moved by one step along this direction
    pub const fn step(self) -> (i8, i8) {
        match self {
            Self::PositiveDiagonalForward => (1, 1),
            Self::NegativeDiagonalForward => (1, -1),
            Self::PositiveDiagonalBackward => (-1, -1),
            Self::NegativeDiagonalBackward => (-1, 1),
            Self::ColumnUp => (0, 1),
            Self::ColumnDown => (0, -1),
            Self::RowRight => (1, 0),
            Self::RowLeft => (-1, 0),
        }
    }

    /// Whether this direction is one of the four diagonals
    pub const fn is_diagonal(self) -> bool {
        let (columns, rows) = self.step();
        columns != 0 && rows != 0
    }
}

/// Check the line from `start` to `destination` for a piece of color `mover`
///
/// Fails with [`Error::MoveNeverLegal`] if there is no straight or diagonal line between the
/// two, [`Error::MoveBlocked`] if a square strictly between them is occupied, and
/// [`Error::DestinationOccupied`] if `mover` already has a piece on the destination. A piece of
/// the other color on the destination is fine: that's a capture.
pub fn trace(
    query: &impl BoardQuery,
    start: Coordinate,
    destination: Coordinate,
    mover: Color,
) -> Result<()> {
    let Some(direction) = Direction::between(start, destination) else {
        return Err(Error::MoveNeverLegal);
    };
    let (columns, rows) = direction.step();
    let mut current = start;
    loop {
        // Can't run off the board, the destination is on it and on this ray
        let Some(next) = current.offset(columns, rows) else {
            return Err(Error::MoveNeverLegal);
        };
        if next == destination {
            break;
        }
        if query.piece_at(next).is_some() {
            return Err(Error::MoveBlocked);
        }
        current = next;
    }
    match query.piece_at(destination) {
        Some(piece) if piece.color == mover => Err(Error::DestinationOccupied),
        _ => Ok(()),
    }
}
