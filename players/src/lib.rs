//! Traits for an arbitrary player

use core::fmt;

use board::{CheckStatus, Color, Coordinate};
use grid::GridBoard;

/// A player in a game
///
/// This trait is generic over how the player decides what to do, so interactive and scripted
/// players can both implement this. Coordinates are always relative to the board as it is shown
/// to the player, with row 0 at the near edge.
pub trait Player {
    /// Decide on a move for `color`, as a start and destination square
    ///
    /// Returning `None` resigns the game.
    fn choose_move(&mut self, board: &GridBoard, color: Color) -> Option<(Coordinate, Coordinate)>;

    /// The move last returned by [`Self::choose_move`] wasn't accepted
    ///
    /// The player will be asked to choose again straight away.
    fn move_rejected(&mut self, reason: &dyn fmt::Display) {
        let _ = reason;
    }

    /// See the board after a move was made by either side
    ///
    /// `to_move` is the side whose turn it is now, and `status` says whether it is in check.
    fn observe(&mut self, board: &GridBoard, to_move: Color, status: CheckStatus) {
        let _ = (board, to_move, status);
    }
}

impl<P: Player + ?Sized> Player for &mut P {
    fn choose_move(&mut self, board: &GridBoard, color: Color) -> Option<(Coordinate, Coordinate)> {
        (**self).choose_move(board, color)
    }

    fn move_rejected(&mut self, reason: &dyn fmt::Display) {
        (**self).move_rejected(reason)
    }

    fn observe(&mut self, board: &GridBoard, to_move: Color, status: CheckStatus) {
        (**self).observe(board, to_move, status)
    }
}
