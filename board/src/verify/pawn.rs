use crate::{BoardQuery, Error, Move, Piece, PieceKind, Result, SpecialMove, VerifiedMove};

/// Pawns have three shapes of move, and all of them have to go forward
///
/// * One square diagonally, only to capture: either a piece on the destination, or the pawn
///   that just advanced two squares past the destination (en passant).
/// * Two squares straight ahead on the pawn's first move, through and onto empty squares.
/// * One square straight ahead onto an empty square.
pub(super) fn verify(query: &impl BoardQuery, mv: &Move) -> Result<VerifiedMove> {
    let forward = query.forward(mv.piece.color);
    let rows = mv.row_movement();
    match (mv.column_movement().unsigned_abs(), rows.unsigned_abs()) {
        (1, 1) => {
            if rows != forward {
                return Err(Error::WrongDirection);
            }
            verify_capture(query, mv)
        }
        (0, 2) => {
            if rows != 2 * forward {
                return Err(Error::WrongDirection);
            }
            if mv.piece.has_moved() {
                return Err(Error::PawnAlreadyMoved);
            }
            let passing = mv.start.offset(0, forward).ok_or(Error::MoveNeverLegal)?;
            if query.piece_at(passing).is_some() || query.piece_at(mv.destination).is_some() {
                return Err(Error::MoveBlocked);
            }
            Ok(VerifiedMove::new(mv.clone(), SpecialMove::None))
        }
        (0, 1) => {
            if rows != forward {
                return Err(Error::WrongDirection);
            }
            if query.piece_at(mv.destination).is_some() {
                return Err(Error::MoveBlocked);
            }
            Ok(VerifiedMove::new(mv.clone(), SpecialMove::None))
        }
        _ => Err(Error::MoveNeverLegal),
    }
}

fn verify_capture(query: &impl BoardQuery, mv: &Move) -> Result<VerifiedMove> {
    if let Some(target) = query.piece_at(mv.destination) {
        return if target.color != mv.piece.color {
            Ok(VerifiedMove::new(mv.clone(), SpecialMove::None))
        } else {
            Err(Error::DestinationOccupied)
        };
    }
    let passed = mv.en_passant_square();
    match query.piece_at(passed) {
        Some(target)
            if target.color != mv.piece.color
                && is_en_passant_capturable(target)
                && query.en_passant_target() == Some(passed) =>
        {
            Ok(VerifiedMove::new(mv.clone(), SpecialMove::EnPassant))
        }
        Some(_) => Err(Error::IllegalEnPassant),
        None => Err(Error::CaptureTargetMissing),
    }
}

/// A pawn whose only move so far was a two square advance
fn is_en_passant_capturable(piece: &Piece) -> bool {
    piece.kind == PieceKind::Pawn
        && matches!(piece.history(), [only] if only.is_double_advance())
}

#[cfg(test)]
mod tests {
    use crate::verify::tests::TestBoard;
    use crate::{Color, Coordinate, Error, PieceKind, SpecialMove, Step};

    fn moved(start: Coordinate, destination: Coordinate) -> Step {
        Step {
            start,
            destination,
            special: SpecialMove::None,
        }
    }

    #[test]
    fn test_single_and_double_advance() {
        let mut board = TestBoard::with(&[
            (Coordinate::E2, PieceKind::Pawn, Color::White),
            (Coordinate::D7, PieceKind::Pawn, Color::Black),
            (Coordinate::A3, PieceKind::Pawn, Color::White),
        ]);
        assert_eq!(board.verify(Coordinate::E2, Coordinate::E3), Ok(SpecialMove::None));
        assert_eq!(board.verify(Coordinate::E2, Coordinate::E4), Ok(SpecialMove::None));
        assert_eq!(board.verify(Coordinate::D7, Coordinate::D6), Ok(SpecialMove::None));
        assert_eq!(board.verify(Coordinate::D7, Coordinate::D5), Ok(SpecialMove::None));
        assert_eq!(board.verify(Coordinate::E2, Coordinate::E5), Err(Error::MoveNeverLegal));

        board.mark_moved(Coordinate::A3, moved(Coordinate::A2, Coordinate::A3));
        assert_eq!(board.verify(Coordinate::A3, Coordinate::A4), Ok(SpecialMove::None));
        assert_eq!(
            board.verify(Coordinate::A3, Coordinate::A5),
            Err(Error::PawnAlreadyMoved)
        );
    }

    #[test]
    fn test_pawns_never_retreat() {
        let board = TestBoard::with(&[
            (Coordinate::E4, PieceKind::Pawn, Color::White),
            (Coordinate::D5, PieceKind::Pawn, Color::Black),
            (Coordinate::F3, PieceKind::Knight, Color::Black),
        ]);
        assert_eq!(board.verify(Coordinate::E4, Coordinate::E3), Err(Error::WrongDirection));
        assert_eq!(board.verify(Coordinate::D5, Coordinate::D6), Err(Error::WrongDirection));
        assert_eq!(board.verify(Coordinate::E4, Coordinate::F3), Err(Error::WrongDirection));
        assert_eq!(board.verify(Coordinate::E4, Coordinate::D5), Ok(SpecialMove::None));
        assert_eq!(board.verify(Coordinate::D5, Coordinate::E4), Ok(SpecialMove::None));
    }

    #[test]
    fn test_direction_follows_home_color() {
        let mut board = TestBoard::with(&[
            (Coordinate::E2, PieceKind::Pawn, Color::White),
            (Coordinate::D2, PieceKind::Pawn, Color::Black),
        ]);
        board.home_color = Color::Black;
        assert_eq!(board.verify(Coordinate::D2, Coordinate::D4), Ok(SpecialMove::None));
        assert_eq!(board.verify(Coordinate::E2, Coordinate::E1), Ok(SpecialMove::None));
        assert_eq!(board.verify(Coordinate::E2, Coordinate::E3), Err(Error::WrongDirection));
    }

    #[test]
    fn test_blocked_advance() {
        let board = TestBoard::with(&[
            (Coordinate::E2, PieceKind::Pawn, Color::White),
            (Coordinate::E3, PieceKind::Knight, Color::Black),
            (Coordinate::D2, PieceKind::Pawn, Color::White),
            (Coordinate::D4, PieceKind::Bishop, Color::Black),
        ]);
        assert_eq!(board.verify(Coordinate::E2, Coordinate::E3), Err(Error::MoveBlocked));
        assert_eq!(board.verify(Coordinate::E2, Coordinate::E4), Err(Error::MoveBlocked));
        assert_eq!(board.verify(Coordinate::D2, Coordinate::D4), Err(Error::MoveBlocked));
        assert_eq!(board.verify(Coordinate::D2, Coordinate::D3), Ok(SpecialMove::None));
    }

    #[test]
    fn test_diagonal_needs_capture() {
        let board = TestBoard::with(&[
            (Coordinate::E2, PieceKind::Pawn, Color::White),
            (Coordinate::F3, PieceKind::Pawn, Color::White),
        ]);
        assert_eq!(
            board.verify(Coordinate::E2, Coordinate::D3),
            Err(Error::CaptureTargetMissing)
        );
        assert_eq!(
            board.verify(Coordinate::E2, Coordinate::F3),
            Err(Error::DestinationOccupied)
        );
    }

    #[test]
    fn test_en_passant_only_right_after_double_advance() {
        let mut board = TestBoard::with(&[
            (Coordinate::E5, PieceKind::Pawn, Color::White),
            (Coordinate::D5, PieceKind::Pawn, Color::Black),
            (Coordinate::F5, PieceKind::Pawn, Color::Black),
        ]);
        board.mark_moved(Coordinate::E5, moved(Coordinate::E4, Coordinate::E5));
        board.mark_moved(Coordinate::D5, moved(Coordinate::D7, Coordinate::D5));
        board.mark_moved(Coordinate::F5, moved(Coordinate::F7, Coordinate::F5));

        // Neither black pawn just moved
        assert_eq!(
            board.verify(Coordinate::E5, Coordinate::D6),
            Err(Error::IllegalEnPassant)
        );

        board.en_passant_target = Some(Coordinate::D5);
        assert_eq!(board.verify(Coordinate::E5, Coordinate::D6), Ok(SpecialMove::EnPassant));
        assert_eq!(
            board.verify(Coordinate::E5, Coordinate::F6),
            Err(Error::IllegalEnPassant)
        );
    }

    #[test]
    fn test_en_passant_needs_single_double_step() {
        let mut board = TestBoard::with(&[
            (Coordinate::E5, PieceKind::Pawn, Color::White),
            (Coordinate::D5, PieceKind::Pawn, Color::Black),
            (Coordinate::F5, PieceKind::Knight, Color::Black),
        ]);
        board.mark_moved(Coordinate::D5, moved(Coordinate::D6, Coordinate::D5));
        board.mark_moved(Coordinate::F5, moved(Coordinate::G7, Coordinate::F5));
        board.en_passant_target = Some(Coordinate::D5);
        assert_eq!(
            board.verify(Coordinate::E5, Coordinate::D6),
            Err(Error::IllegalEnPassant)
        );
        board.en_passant_target = Some(Coordinate::F5);
        assert_eq!(
            board.verify(Coordinate::E5, Coordinate::F6),
            Err(Error::IllegalEnPassant)
        );
    }

    #[test]
    fn test_no_en_passant_on_own_pawn() {
        let mut board = TestBoard::with(&[
            (Coordinate::E5, PieceKind::Pawn, Color::White),
            (Coordinate::D5, PieceKind::Pawn, Color::White),
        ]);
        board.mark_moved(Coordinate::D5, moved(Coordinate::D3, Coordinate::D5));
        board.en_passant_target = Some(Coordinate::D5);
        assert_eq!(
            board.verify(Coordinate::E5, Coordinate::D6),
            Err(Error::IllegalEnPassant)
        );
    }
}
