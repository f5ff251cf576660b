//! Running a game: whose turn it is, which moves are accepted, and when it's over

use board::{CheckStatus, Color, Coordinate, GameOutcome, Move};
use grid::GridBoard;
use log::{info, warn};
use players::Player;

/// Why a move wasn't played
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("there is no piece on {0}")]
    EmptySquare(Coordinate),
    #[error("the piece on {square} is {owner}'s, but it is {to_move}'s turn")]
    NotYourPiece {
        square: Coordinate,
        owner: Color,
        to_move: Color,
    },
    #[error("move would result in your king being in check")]
    MovingIntoCheck,
    #[error("the game is already over ({0:?})")]
    GameOver(GameOutcome),
    #[error(transparent)]
    Rejected(#[from] board::Error),
}

pub type Result<T, E = Error> = core::result::Result<T, E>;

/// One game on one board
///
/// The side at the near edge of the board moves first. By default the board is flipped after
/// every move, so the side to move is always at the near edge and every player reads coordinates
/// from their own side.
#[derive(Clone, Debug)]
pub struct Game {
    board: GridBoard,
    to_move: Color,
    outcome: GameOutcome,
    flip_between_turns: bool,
}

impl Game {
    pub fn new(board: GridBoard) -> Self {
        Self {
            to_move: board.home_color(),
            board,
            outcome: GameOutcome::InProgress,
            flip_between_turns: true,
        }
    }

    /// Keep the board in its current orientation for the whole game
    pub fn with_fixed_orientation(mut self) -> Self {
        self.flip_between_turns = false;
        self
    }

    pub fn board(&self) -> &GridBoard {
        &self.board
    }

    pub const fn side_to_move(&self) -> Color {
        self.to_move
    }

    pub const fn outcome(&self) -> GameOutcome {
        self.outcome
    }

    /// Move the piece on `start` to `destination` for the side to move
    ///
    /// The piece must belong to the side to move, the move must be legal for it, and it mustn't
    /// leave the mover's own king in check. After the move the turn passes (and the board turns
    /// around, unless the orientation is fixed), and the check status of the side now to move is
    /// returned. A checkmate ends the game.
    pub fn play(&mut self, start: Coordinate, destination: Coordinate) -> Result<CheckStatus> {
        if self.outcome != GameOutcome::InProgress {
            return Err(Error::GameOver(self.outcome));
        }
        let piece = self
            .board
            .piece_at(start)
            .ok_or(Error::EmptySquare(start))?;
        if piece.color != self.to_move {
            return Err(Error::NotYourPiece {
                square: start,
                owner: piece.color,
                to_move: self.to_move,
            });
        }
        let mv = Move::new(start, destination, piece.clone());
        let verified = self.board.verify_move(&mv)?;
        if self.board.perform_king_check_test(&mv) {
            return Err(Error::MovingIntoCheck);
        }

        info!("{} plays {verified}", self.to_move);
        self.board.perform_move(verified);
        if self.flip_between_turns {
            self.board.flip_board();
        }
        let mover = self.to_move;
        self.to_move = mover.other();

        let status = self.board.check_status(self.to_move);
        match status {
            CheckStatus::None => {}
            CheckStatus::Check => info!("{} is in check", self.to_move),
            CheckStatus::Checkmate => {
                self.outcome = GameOutcome::checkmate_by(mover);
                info!("{mover} wins by checkmate");
            }
        }
        Ok(status)
    }

    /// The side to move gives up
    pub fn resign(&mut self) -> Result<GameOutcome> {
        if self.outcome != GameOutcome::InProgress {
            return Err(Error::GameOver(self.outcome));
        }
        self.outcome = GameOutcome::resignation_by(self.to_move);
        info!("{} resigns", self.to_move);
        Ok(self.outcome)
    }
}

/// A backend which queries moves from the two players until the game is done
pub struct Backend<White, Black> {
    game: Game,
    white_player: White,
    black_player: Black,
}

impl<White: Player, Black: Player> Backend<White, Black> {
    pub fn new(game: Game, white_player: White, black_player: Black) -> Self {
        Self {
            game,
            white_player,
            black_player,
        }
    }

    /// Get the state of the game right now
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Query whoever's turn it is until they make an acceptable move or resign
    ///
    /// Rejected moves are reported back to the player, and both players see the board once a
    /// move is made.
    pub fn play_half_move(&mut self) -> GameOutcome {
        if self.game.outcome() != GameOutcome::InProgress {
            return self.game.outcome();
        }
        let color = self.game.side_to_move();
        loop {
            let choice = match color {
                Color::White => self.white_player.choose_move(self.game.board(), color),
                Color::Black => self.black_player.choose_move(self.game.board(), color),
            };
            let Some((start, destination)) = choice else {
                return match self.game.resign() {
                    Ok(outcome) => outcome,
                    Err(e) => {
                        warn!("{color} couldn't resign: {e}");
                        self.game.outcome()
                    }
                };
            };
            match self.game.play(start, destination) {
                Ok(status) => {
                    let to_move = self.game.side_to_move();
                    self.white_player
                        .observe(self.game.board(), to_move, status);
                    self.black_player
                        .observe(self.game.board(), to_move, status);
                    return self.game.outcome();
                }
                Err(e) => match color {
                    Color::White => self.white_player.move_rejected(&e),
                    Color::Black => self.black_player.move_rejected(&e),
                },
            }
        }
    }

    /// Play the game until it ends
    pub fn play_game(&mut self) -> GameOutcome {
        while self.game.outcome() == GameOutcome::InProgress {
            self.play_half_move();
        }
        self.game.outcome()
    }
}
