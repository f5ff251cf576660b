use crate::{path, BoardQuery, Error, Move, Result, SpecialMove, VerifiedMove};

/// A king steps one square in any direction, or castles
///
/// Castling moves an unmoved king two columns towards a corner. Whatever stands in that corner
/// must never have moved either, and must be able to slide to the square the king passes over.
/// Attacks on the king's squares are not considered: castling out of, through, or into check is
/// accepted here.
pub(super) fn verify(query: &impl BoardQuery, mv: &Move) -> Result<VerifiedMove> {
    let columns = mv.column_movement().unsigned_abs();
    let rows = mv.row_movement().unsigned_abs();
    if columns <= 1 && rows <= 1 {
        path::trace(query, mv.start, mv.destination, mv.piece.color)?;
        return Ok(VerifiedMove::new(mv.clone(), SpecialMove::KingMove));
    }
    let Some((rook_start, rook_destination)) = mv.castle_rook_squares() else {
        return Err(Error::MoveNeverLegal);
    };
    if mv.piece.has_moved() {
        return Err(Error::IllegalCastle);
    }
    let Some(rook) = query.piece_at(rook_start) else {
        return Err(Error::IllegalCastle);
    };
    if rook.has_moved() {
        return Err(Error::IllegalCastle);
    }
    path::trace(query, rook_start, rook_destination, rook.color)?;
    Ok(VerifiedMove::new(mv.clone(), SpecialMove::Castle))
}
