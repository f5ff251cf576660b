//! Deciding whether a proposed move is legal
//!
//! There is one verifier per kind of piece, and [`verify_move`] picks the right one. Verifiers
//! only ever see the board through [`BoardQuery`], so they can't change it; a legal move comes
//! back as a [`VerifiedMove`] that already knows whether it's a castle, en passant, or king step.
//!
//! Verification doesn't consider whether the move leaves the mover's own king in check. That's
//! for the caller to decide, e.g. with a hypothetical move on a cloned board.

use log::trace;

use crate::{path, BoardQuery, Error, Move, PieceKind, Result, SpecialMove, VerifiedMove};

mod king;
mod pawn;

/// Check a move against the rules for the piece making it
///
/// The piece on `mv.start` must be exactly `mv.piece`, history included.
pub fn verify_move(query: &impl BoardQuery, mv: &Move) -> Result<VerifiedMove> {
    if query.piece_at(mv.start) != Some(&mv.piece) {
        trace!("rejected {mv}: {}", Error::SourcePieceNotAtStart);
        return Err(Error::SourcePieceNotAtStart);
    }
    let verified = match mv.piece.kind {
        PieceKind::Pawn => pawn::verify(query, mv),
        PieceKind::Rook => verify_rook(query, mv),
        PieceKind::Knight => verify_knight(query, mv),
        PieceKind::Bishop => verify_bishop(query, mv),
        PieceKind::Queen => verify_queen(query, mv),
        PieceKind::King => king::verify(query, mv),
    };
    if let Err(e) = &verified {
        trace!("rejected {mv}: {e}");
    }
    verified
}

/// Exactly one of the column and row may change
fn verify_rook(query: &impl BoardQuery, mv: &Move) -> Result<VerifiedMove> {
    if (mv.column_movement() == 0) == (mv.row_movement() == 0) {
        return Err(Error::MoveNeverLegal);
    }
    path::trace(query, mv.start, mv.destination, mv.piece.color)?;
    Ok(VerifiedMove::new(mv.clone(), SpecialMove::None))
}

fn verify_bishop(query: &impl BoardQuery, mv: &Move) -> Result<VerifiedMove> {
    let columns = mv.column_movement().unsigned_abs();
    if columns == 0 || columns != mv.row_movement().unsigned_abs() {
        return Err(Error::MoveNeverLegal);
    }
    path::trace(query, mv.start, mv.destination, mv.piece.color)?;
    Ok(VerifiedMove::new(mv.clone(), SpecialMove::None))
}

/// Any line the tracer accepts; it rejects everything that isn't straight or diagonal itself
fn verify_queen(query: &impl BoardQuery, mv: &Move) -> Result<VerifiedMove> {
    path::trace(query, mv.start, mv.destination, mv.piece.color)?;
    Ok(VerifiedMove::new(mv.clone(), SpecialMove::None))
}

/// Knights jump, so only the destination matters
fn verify_knight(query: &impl BoardQuery, mv: &Move) -> Result<VerifiedMove> {
    match (
        mv.column_movement().unsigned_abs(),
        mv.row_movement().unsigned_abs(),
    ) {
        (1, 2) | (2, 1) => {}
        _ => return Err(Error::MoveNeverLegal),
    }
    match query.piece_at(mv.destination) {
        Some(piece) if piece.color == mv.piece.color => Err(Error::DestinationOccupied),
        _ => Ok(VerifiedMove::new(mv.clone(), SpecialMove::None)),
    }
}
