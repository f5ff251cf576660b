//! A chess board stored as an 8x8 grid of squares
//!
//! [`GridBoard`] owns every square and is the only thing that changes them. It verifies moves
//! through the rules in the `board` crate, executes the ones that pass, and answers check and
//! checkmate questions by asking the same verifiers whether any enemy piece could move onto a
//! king.

use core::fmt;

use board::{
    verify, BoardQuery, CheckStatus, Color, Coordinate, Move, Piece, PieceKind, SpecialMove,
    Square, Step, VerifiedMove,
};
use log::debug;

pub mod layout;

pub use layout::LayoutError;

/// Represent a board as a grid of squares, indexed `[column][row]`
///
/// Besides the squares, the board caches where each king stands, keeps the pieces each side has
/// captured, and remembers which color is oriented at the near edge (row 0). Cloning produces a
/// fully independent board, which is how hypothetical moves are tried out.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridBoard {
    squares: [[Square; 8]; 8],
    white_king: Coordinate,
    black_king: Coordinate,
    /// Black pieces captured by white
    white_captures: Vec<Piece>,
    /// White pieces captured by black
    black_captures: Vec<Piece>,
    home_color: Color,
    /// The pawn which just advanced two rows, if the last move was such an advance
    en_passant_target: Option<Coordinate>,
}

impl GridBoard {
    /// Build a board from a fully populated grid
    ///
    /// Every square must store the coordinate of its grid position, and each color must have
    /// exactly one king. Any other arrangement of pieces is accepted.
    pub fn new(squares: [[Square; 8]; 8], home_color: Color) -> Result<Self, LayoutError> {
        let mut white_king = None;
        let mut black_king = None;
        for coordinate in Coordinate::all() {
            let (column, row) = coordinate.index();
            let square = &squares[column][row];
            if square.coordinate() != coordinate {
                return Err(LayoutError::MisplacedSquare {
                    position: coordinate,
                    stored: square.coordinate(),
                });
            }
            let Some(piece) = square.piece() else {
                continue;
            };
            if piece.kind != PieceKind::King {
                continue;
            }
            let king = match piece.color {
                Color::White => &mut white_king,
                Color::Black => &mut black_king,
            };
            if king.replace(coordinate).is_some() {
                return Err(LayoutError::DuplicateKing(piece.color));
            }
        }
        let board = Self {
            squares,
            white_king: white_king.ok_or(LayoutError::MissingKing(Color::White))?,
            black_king: black_king.ok_or(LayoutError::MissingKing(Color::Black))?,
            white_captures: Vec::new(),
            black_captures: Vec::new(),
            home_color,
            en_passant_target: None,
        };
        debug_assert!(board.invariants_hold());
        Ok(board)
    }

    /// Build a board with the given pieces and every other square empty
    pub fn from_pieces(
        pieces: impl IntoIterator<Item = (Coordinate, Piece)>,
        home_color: Color,
    ) -> Result<Self, LayoutError> {
        let mut squares = Square::empty_grid();
        for (coordinate, piece) in pieces {
            let (column, row) = coordinate.index();
            if squares[column][row].place(piece).is_some() {
                return Err(LayoutError::DuplicateSquare(coordinate));
            }
        }
        Self::new(squares, home_color)
    }

    pub fn square(&self, coordinate: Coordinate) -> &Square {
        let (column, row) = coordinate.index();
        &self.squares[column][row]
    }

    fn square_mut(&mut self, coordinate: Coordinate) -> &mut Square {
        let (column, row) = coordinate.index();
        &mut self.squares[column][row]
    }

    pub fn piece_at(&self, coordinate: Coordinate) -> Option<&Piece> {
        self.square(coordinate).piece()
    }

    /// Every piece on the board along with where it stands, column by column
    pub fn pieces(&self) -> impl Iterator<Item = (Coordinate, &Piece)> {
        self.squares
            .iter()
            .flatten()
            .filter_map(|square| square.piece().map(|piece| (square.coordinate(), piece)))
    }

    /// The pieces `color` has captured, in the order they were taken
    pub fn captured_by(&self, color: Color) -> &[Piece] {
        match color {
            Color::White => &self.white_captures,
            Color::Black => &self.black_captures,
        }
    }

    pub const fn king_coordinate(&self, color: Color) -> Coordinate {
        match color {
            Color::White => self.white_king,
            Color::Black => self.black_king,
        }
    }

    fn king_coordinate_mut(&mut self, color: Color) -> &mut Coordinate {
        match color {
            Color::White => &mut self.white_king,
            Color::Black => &mut self.black_king,
        }
    }

    /// The color currently oriented at row 0
    pub const fn home_color(&self) -> Color {
        self.home_color
    }

    pub const fn en_passant_target(&self) -> Option<Coordinate> {
        self.en_passant_target
    }

    /// Check whether a move is legal for the piece making it
    ///
    /// This doesn't look at whether the mover's own king ends up in check; use
    /// [`Self::perform_king_check_test`] for that.
    pub fn verify_move(&self, mv: &Move) -> board::Result<VerifiedMove> {
        verify::verify_move(self, mv)
    }

    /// Every move the piece on `start` could make, ignoring whether it exposes its own king
    pub fn verified_moves_from(&self, start: Coordinate) -> Vec<VerifiedMove> {
        let Some(piece) = self.piece_at(start) else {
            return Vec::new();
        };
        Coordinate::all()
            .filter_map(|destination| {
                self.verify_move(&Move::new(start, destination, piece.clone())).ok()
            })
            .collect()
    }

    /// Execute a verified move
    ///
    /// Nothing is re-checked: the move's classification decides how it's carried out. A captured
    /// piece goes onto the opposing color's list. Cached king positions follow any king that
    /// moves, including one carried along as the corner piece of a castle.
    pub fn perform_move(&mut self, verified: VerifiedMove) {
        debug!("performing {verified}");
        let step = verified.step();
        let special = verified.special();
        let en_passant_square = verified.en_passant_square();
        let castle_rook_squares = verified.castle_rook_squares();
        let Move {
            start,
            destination,
            mut piece,
        } = verified.into_move();
        let mover = piece.color;

        if let Some(captured) = en_passant_square {
            self.remove_piece_at(captured);
        }
        if let Some((rook_start, rook_destination)) = castle_rook_squares {
            if let Some(mut rook) = self.square_mut(rook_start).take() {
                rook.record(Step {
                    start: rook_start,
                    destination: rook_destination,
                    special: SpecialMove::Castle,
                });
                // Any unmoved piece can stand in the corner, even the other side's king
                if rook.kind == PieceKind::King {
                    *self.king_coordinate_mut(rook.color) = rook_destination;
                }
                self.remove_piece_at(rook_destination);
                self.square_mut(rook_destination).place(rook);
            }
        }

        let left = self.square_mut(start).take();
        debug_assert_eq!(
            left.as_ref(),
            Some(&piece),
            "verified move executed on a board it doesn't fit"
        );
        self.remove_piece_at(destination);
        if matches!(special, SpecialMove::KingMove | SpecialMove::Castle) {
            *self.king_coordinate_mut(mover) = destination;
        }
        self.en_passant_target =
            (piece.kind == PieceKind::Pawn && step.is_double_advance()).then_some(destination);
        piece.record(step);
        self.square_mut(destination).place(piece);

        debug_assert!(self.invariants_hold());
        debug_assert!(self.king_in_place(mover));
    }

    /// Take the piece on `coordinate` off the board and file it with the other color's captures
    ///
    /// The list follows the captured piece, not the mover: a castle can bring the other side's
    /// corner piece down onto one of the mover's own pieces.
    fn remove_piece_at(&mut self, coordinate: Coordinate) {
        let Some(piece) = self.square_mut(coordinate).take() else {
            return;
        };
        debug!("{piece} captured on {coordinate}");
        match piece.color {
            Color::White => self.black_captures.push(piece),
            Color::Black => self.white_captures.push(piece),
        }
    }

    /// Whether the mover's king would be in check after making `mv`
    ///
    /// The move is tried on a clone, so `self` is never changed. A move that doesn't verify
    /// leaves the clone as it is, and the answer is then just whether the mover is in check
    /// right now.
    pub fn perform_king_check_test(&self, mv: &Move) -> bool {
        let mut hypothetical = self.clone();
        if let Ok(verified) = hypothetical.verify_move(mv) {
            hypothetical.perform_move(verified);
        }
        hypothetical.is_king_in_check(mv.piece.color)
    }

    /// Whether any piece of the other color could move onto `color`'s king
    ///
    /// A castle is never an attack, since it can't capture.
    pub fn is_king_in_check(&self, color: Color) -> bool {
        let king = self.king_coordinate(color);
        self.pieces()
            .filter(|(_, piece)| piece.color != color)
            .any(|(start, piece)| {
                let attack = Move::new(start, king, piece.clone());
                matches!(
                    self.verify_move(&attack),
                    Ok(verified) if verified.special() != SpecialMove::Castle
                )
            })
    }

    /// Whether no move of any of `color`'s pieces leaves its king out of check
    ///
    /// Every piece of `color` is tried against all 64 destinations. Candidates that fail
    /// verification count as leaving the board unchanged, so this returns `false` whenever
    /// `color` isn't in check to begin with; see [`Self::check_status`] for the combined answer.
    pub fn test_for_checkmate(&self, color: Color) -> bool {
        let escape = self
            .pieces()
            .filter(|(_, piece)| piece.color == color)
            .find_map(|(start, piece)| {
                Coordinate::all()
                    .map(|destination| Move::new(start, destination, piece.clone()))
                    .find(|candidate| !self.perform_king_check_test(candidate))
            });
        match escape {
            Some(escape) => {
                debug!("{color} can get out of check with {escape}");
                false
            }
            None => {
                debug!("{color} is checkmated");
                true
            }
        }
    }

    /// Whether `color` is in check, checkmate, or neither
    pub fn check_status(&self, color: Color) -> CheckStatus {
        if !self.is_king_in_check(color) {
            CheckStatus::None
        } else if self.test_for_checkmate(color) {
            CheckStatus::Checkmate
        } else {
            CheckStatus::Check
        }
    }

    /// Turn the board around so the other color is at the near edge
    ///
    /// Every piece moves to the square diagonally opposite across the centre, each square keeps
    /// the coordinate of its new grid position, and the cached king and en passant positions move
    /// with their pieces. Flipping twice gives back the same board.
    pub fn flip_board(&mut self) {
        let mut squares = Square::empty_grid();
        for coordinate in Coordinate::all() {
            if let Some(piece) = self.square_mut(coordinate).take() {
                let (column, row) = coordinate.flipped().index();
                squares[column][row].place(piece);
            }
        }
        self.squares = squares;
        self.white_king = self.white_king.flipped();
        self.black_king = self.black_king.flipped();
        self.en_passant_target = self.en_passant_target.map(Coordinate::flipped);
        self.home_color = self.home_color.other();
        debug!("flipped board, {} is now at the near edge", self.home_color);
        debug_assert!(self.invariants_hold());
    }

    /// The piece placement field of a FEN string for this board, row 7 first
    pub fn placement(&self) -> String {
        let mut placement = String::with_capacity(64 + 7);
        for row in (0..8).rev() {
            let mut empty = 0;
            for column in 0..8 {
                match self.squares[column][row].piece() {
                    Some(piece) => {
                        if empty > 0 {
                            placement.push_str(&empty.to_string());
                            empty = 0;
                        }
                        placement.push(piece.fen_letter());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                placement.push_str(&empty.to_string());
            }
            if row > 0 {
                placement.push('/');
            }
        }
        placement
    }

    /// Every square stores the coordinate of its grid position
    fn invariants_hold(&self) -> bool {
        Coordinate::all().all(|coordinate| self.square(coordinate).coordinate() == coordinate)
    }

    fn king_in_place(&self, color: Color) -> bool {
        matches!(
            self.piece_at(self.king_coordinate(color)),
            Some(piece) if piece.kind == PieceKind::King && piece.color == color
        )
    }
}

impl BoardQuery for GridBoard {
    fn piece_at(&self, coordinate: Coordinate) -> Option<&Piece> {
        GridBoard::piece_at(self, coordinate)
    }

    fn home_color(&self) -> Color {
        self.home_color
    }

    fn en_passant_target(&self) -> Option<Coordinate> {
        self.en_passant_target
    }
}

impl fmt::Display for GridBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in (0..8).rev() {
            for column in 0..8 {
                let letter = self.squares[column][row]
                    .piece()
                    .map_or('.', Piece::fen_letter);
                write!(f, "{letter}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
