use crate::{Color, Coordinate, Piece};

/// Read-only access to a board, which is all the verifiers get to see
pub trait BoardQuery {
    /// The piece on the given square, if any
    fn piece_at(&self, coordinate: Coordinate) -> Option<&Piece>;

    /// The color currently oriented at the near edge of the board
    fn home_color(&self) -> Color;

    /// The pawn which advanced two rows on the move just made, if there is one
    ///
    /// Only this pawn may be captured en passant.
    fn en_passant_target(&self) -> Option<Coordinate>;

    /// The row direction in which pawns of `color` advance
    ///
    /// Pawns of the home color move towards higher rows, the other side's towards lower rows.
    fn forward(&self, color: Color) -> i8 {
        if color == self.home_color() {
            1
        } else {
            -1
        }
    }
}
