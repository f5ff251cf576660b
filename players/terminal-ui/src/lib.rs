//! A player which types their moves into a terminal

use core::fmt;
use std::io::{self, BufRead, BufReader, Read, Write};

use board::{CheckStatus, Color, Coordinate, CoordinateError};
use grid::GridBoard;
use log::warn;
use players::Player;

/// Somewhere to read typed lines from
///
/// Stdin is only locked for the duration of each read, so both players of a game can share it.
pub trait LineSource {
    /// Append the next line to `buf`, returning how many bytes were read (0 at the end)
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize>;
}

impl LineSource for io::Stdin {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        io::Stdin::read_line(self, buf)
    }
}

impl<R: Read> LineSource for BufReader<R> {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

impl LineSource for &[u8] {
    fn read_line(&mut self, buf: &mut String) -> io::Result<usize> {
        BufRead::read_line(self, buf)
    }
}

/// An input for a human typing in the terminal
///
/// Moves are entered as two square names, `e2 e4` or `e2e4`. `moves e2` lists where the piece on
/// e2 can go, and `resign` (or closing the input) gives up.
pub struct TerminalUIPlayer<R, W> {
    input: R,
    output: W,
}

impl TerminalUIPlayer<io::Stdin, io::Stdout> {
    /// A player reading from stdin and writing to stdout
    pub fn stdio() -> Self {
        Self::new(io::stdin(), io::stdout())
    }
}

impl<R: LineSource, W: Write> TerminalUIPlayer<R, W> {
    pub const fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the output, e.g. to inspect what was written
    pub fn into_output(self) -> W {
        self.output
    }

    fn prompt(
        &mut self,
        board: &GridBoard,
        color: Color,
    ) -> io::Result<Option<(Coordinate, Coordinate)>> {
        writeln!(self.output, "\n{board}")?;
        loop {
            write!(self.output, "{color} to move: ")?;
            self.output.flush()?;
            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            match parse_command(&line) {
                Ok(Command::Move(start, destination)) => return Ok(Some((start, destination))),
                Ok(Command::Resign) => return Ok(None),
                Ok(Command::ListMoves(start)) => {
                    let destinations = board
                        .verified_moves_from(start)
                        .iter()
                        .map(|verified| verified.destination().to_string())
                        .collect::<Vec<_>>();
                    if destinations.is_empty() {
                        writeln!(self.output, "No moves from {start}")?;
                    } else {
                        writeln!(self.output, "Moves from {start}: {}", destinations.join(" "))?;
                    }
                }
                Err(e) => writeln!(self.output, "{e}")?,
            }
        }
    }
}

impl<R: LineSource, W: Write> Player for TerminalUIPlayer<R, W> {
    fn choose_move(&mut self, board: &GridBoard, color: Color) -> Option<(Coordinate, Coordinate)> {
        match self.prompt(board, color) {
            Ok(choice) => choice,
            Err(e) => {
                warn!("failed to read a move for {color}, resigning: {e}");
                None
            }
        }
    }

    fn move_rejected(&mut self, reason: &dyn fmt::Display) {
        if let Err(e) = writeln!(self.output, "Illegal move: {reason}") {
            warn!("failed to report rejected move: {e}");
        }
    }

    fn observe(&mut self, _board: &GridBoard, to_move: Color, status: CheckStatus) {
        let written = match status {
            CheckStatus::None => Ok(()),
            CheckStatus::Check => writeln!(self.output, "{to_move} is in check!"),
            CheckStatus::Checkmate => {
                writeln!(self.output, "Checkmate! {} wins", to_move.other())
            }
        };
        if let Err(e) = written {
            warn!("failed to report check status: {e}");
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Command {
    Move(Coordinate, Coordinate),
    ListMoves(Coordinate),
    Resign,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
enum InputError {
    #[error(transparent)]
    Square(#[from] CoordinateError),
    #[error("expected two squares like `e2 e4`, `moves <square>`, or `resign`")]
    Unrecognized,
}

fn parse_command(line: &str) -> Result<Command, InputError> {
    let line = line.to_ascii_lowercase();
    let words = line.split_whitespace().collect::<Vec<_>>();
    Ok(match words.as_slice() {
        ["resign"] => Command::Resign,
        ["moves", start] => Command::ListMoves(start.parse()?),
        [start, destination] => Command::Move(start.parse()?, destination.parse()?),
        [both] if both.len() == 4 && both.is_ascii() => {
            Command::Move(both[..2].parse()?, both[2..].parse()?)
        }
        _ => return Err(InputError::Unrecognized),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn player(input: &str) -> TerminalUIPlayer<&[u8], Vec<u8>> {
        TerminalUIPlayer::new(input.as_bytes(), Vec::new())
    }

    fn output(player: TerminalUIPlayer<&[u8], Vec<u8>>) -> String {
        String::from_utf8(player.into_output()).unwrap()
    }

    #[test]
    fn test_parse_command() {
        assert_eq!(
            parse_command("e2 e4\n"),
            Ok(Command::Move(Coordinate::E2, Coordinate::E4))
        );
        assert_eq!(
            parse_command("  G1F3 "),
            Ok(Command::Move(Coordinate::G1, Coordinate::F3))
        );
        assert_eq!(parse_command("moves b1"), Ok(Command::ListMoves(Coordinate::B1)));
        assert_eq!(parse_command("Resign"), Ok(Command::Resign));
        assert_eq!(parse_command(""), Err(InputError::Unrecognized));
        assert_eq!(parse_command("e2 e4 e5"), Err(InputError::Unrecognized));
        assert!(matches!(parse_command("e9 e4"), Err(InputError::Square(_))));
    }

    #[test]
    fn test_reads_a_move() {
        let board = grid::layout::standard();
        let mut player = player("e2 e4\n");
        assert_eq!(
            player.choose_move(&board, Color::White),
            Some((Coordinate::E2, Coordinate::E4))
        );
        assert!(output(player).contains("RNBQKBNR"));
    }

    #[test]
    fn test_retries_after_bad_input_and_lists_moves() {
        let board = grid::layout::standard();
        let mut player = player("hello\nmoves b1\nmoves e4\nb1c3\n");
        assert_eq!(
            player.choose_move(&board, Color::White),
            Some((Coordinate::B1, Coordinate::C3))
        );
        let output = output(player);
        assert!(output.contains("expected two squares"));
        assert!(output.contains("Moves from b1: a3 c3"));
        assert!(output.contains("No moves from e4"));
    }

    #[test]
    fn test_resigning() {
        let board = grid::layout::standard();
        assert_eq!(player("resign\n").choose_move(&board, Color::Black), None);
        assert_eq!(player("").choose_move(&board, Color::Black), None);
    }

    #[test]
    fn test_reports_rejections_and_status() {
        let board = grid::layout::standard();
        let mut player = player("");
        player.move_rejected(&"move would result in your king being in check");
        player.observe(&board, Color::Black, CheckStatus::Check);
        player.observe(&board, Color::Black, CheckStatus::Checkmate);
        let output = output(player);
        assert!(output.contains("Illegal move: move would result in your king being in check"));
        assert!(output.contains("black is in check!"));
        assert!(output.contains("Checkmate! white wins"));
    }
}
