//! Starting positions

use board::{Color, Coordinate, Piece, PieceKind, Square};

use crate::GridBoard;

/// Why a set of squares couldn't become a board
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LayoutError {
    #[error("square in position {position} stores coordinate {stored}")]
    MisplacedSquare {
        position: Coordinate,
        stored: Coordinate,
    },
    #[error("no {0} king on the board")]
    MissingKing(Color),
    #[error("more than one {0} king on the board")]
    DuplicateKing(Color),
    #[error("two pieces placed on {0}")]
    DuplicateSquare(Coordinate),
    #[error("malformed piece placement {placement:?}: {reason}")]
    MalformedPlacement {
        placement: String,
        reason: &'static str,
    },
}

const BACK_RANK: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// The opening position, with white at the near edge
///
/// ```
/// let board = grid::layout::standard();
/// assert_eq!(
///     board.placement(),
///     "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
/// );
/// ```
pub fn standard() -> GridBoard {
    let mut squares = Square::empty_grid();
    for (column, kind) in BACK_RANK.into_iter().enumerate() {
        squares[column][0].place(Piece::new(kind, Color::White));
        squares[column][1].place(Piece::new(PieceKind::Pawn, Color::White));
        squares[column][6].place(Piece::new(PieceKind::Pawn, Color::Black));
        squares[column][7].place(Piece::new(kind, Color::Black));
    }
    let board = GridBoard {
        squares,
        white_king: Coordinate::E1,
        black_king: Coordinate::E8,
        white_captures: Vec::new(),
        black_captures: Vec::new(),
        home_color: Color::White,
        en_passant_target: None,
    };
    debug_assert!(board.king_in_place(Color::White) && board.king_in_place(Color::Black));
    board
}

/// Parse the piece placement field of a FEN string
///
/// Ranks are listed from row 7 down to row 0, separated by `/`; within a rank, uppercase letters
/// are white pieces, lowercase are black, and digits skip empty squares. Anything after the first
/// whitespace is ignored, so a whole FEN string is accepted too. Every piece starts with an empty
/// history.
///
/// ```
/// # use board::{Color, Coordinate, PieceKind};
/// let board = grid::layout::from_placement("4k3/8/8/8/8/8/8/R3K3", Color::White).unwrap();
/// assert_eq!(board.piece_at(Coordinate::A1).map(|p| p.kind), Some(PieceKind::Rook));
/// assert_eq!(board.king_coordinate(Color::Black), Coordinate::E8);
/// ```
pub fn from_placement(placement: &str, home_color: Color) -> Result<GridBoard, LayoutError> {
    let malformed = |reason| LayoutError::MalformedPlacement {
        placement: placement.to_owned(),
        reason,
    };
    let field = placement.split_whitespace().next().unwrap_or_default();
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != usize::from(Coordinate::SIZE) {
        return Err(malformed("expected 8 ranks"));
    }
    let mut pieces = Vec::with_capacity(32);
    for (rank_idx, rank) in ranks.into_iter().enumerate() {
        let row = Coordinate::SIZE - 1 - rank_idx as u8;
        let mut column = 0u8;
        for letter in rank.chars() {
            if let Some(skip) = letter.to_digit(10) {
                if !(1..=8).contains(&skip) {
                    return Err(malformed("empty square counts must be between 1 and 8"));
                }
                column += skip as u8;
                if column > Coordinate::SIZE {
                    return Err(malformed("rank too long"));
                }
                continue;
            }
            let piece =
                Piece::from_fen_letter(letter).ok_or_else(|| malformed("unknown piece letter"))?;
            let coordinate =
                Coordinate::new(column, row).ok_or_else(|| malformed("rank too long"))?;
            pieces.push((coordinate, piece));
            column += 1;
        }
        if column != Coordinate::SIZE {
            return Err(malformed("rank doesn't cover 8 squares"));
        }
    }
    GridBoard::from_pieces(pieces, home_color)
}
