use crate::{Coordinate, Piece};

/// One cell of the grid: the piece standing there, if any, and where the cell is
///
/// The coordinate is fixed at construction, so a board keeps it equal to the square's grid
/// position by building new squares whenever it rearranges them.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Square {
    piece: Option<Piece>,
    coordinate: Coordinate,
}

impl Square {
    pub const fn new(coordinate: Coordinate, piece: Option<Piece>) -> Self {
        Self { piece, coordinate }
    }

    pub const fn empty(coordinate: Coordinate) -> Self {
        Self::new(coordinate, None)
    }

    /// An 8x8 grid of empty squares, indexed `[column][row]`
    pub fn empty_grid() -> [[Square; 8]; 8] {
        core::array::from_fn(|column| {
            core::array::from_fn(|row| {
                Square::empty(Coordinate::new_unchecked(column as u8, row as u8))
            })
        })
    }

    pub const fn coordinate(&self) -> Coordinate {
        self.coordinate
    }

    pub const fn piece(&self) -> Option<&Piece> {
        self.piece.as_ref()
    }

    pub fn piece_mut(&mut self) -> Option<&mut Piece> {
        self.piece.as_mut()
    }

    /// Remove and return the piece on this square
    pub fn take(&mut self) -> Option<Piece> {
        self.piece.take()
    }

    /// Put a piece on this square, returning whatever stood here before
    pub fn place(&mut self, piece: Piece) -> Option<Piece> {
        self.piece.replace(piece)
    }
}
