/// Why a move was rejected by verification
///
/// A rejected move is simply not legal; the variants only say which rule it broke. Every variant
/// has the same effect on legality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    #[error("required piece not found at move source")]
    SourcePieceNotAtStart,
    #[error("given move never legal for the moving piece")]
    MoveNeverLegal,
    #[error("given move is blocked by another piece")]
    MoveBlocked,
    #[error("destination holds a piece of the moving side")]
    DestinationOccupied,
    #[error("pawn moved diagonally without capturing")]
    CaptureTargetMissing,
    #[error("pawn moved away from the opposing side")]
    WrongDirection,
    #[error("pawn can only advance two squares on its first move")]
    PawnAlreadyMoved,
    #[error("attempted castle not allowed in current board state")]
    IllegalCastle,
    #[error("attempted en passant not allowed in current board state")]
    IllegalEnPassant,
}
