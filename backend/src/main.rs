use std::process::ExitCode;

use backend::{Backend, Game};
use board::Color;
use clap::Parser;
use grid::layout;
use log::error;
use terminal_ui::TerminalUIPlayer;

/// Play chess in the terminal, two players taking turns at the keyboard
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Starting position as a FEN piece placement, rows listed from the far edge
    #[arg(long)]
    layout: Option<String>,

    /// The side at the near edge of the board, which also moves first
    #[arg(long, default_value_t = Color::White)]
    home: Color,

    /// Don't turn the board around between moves
    #[arg(long, default_value_t = false)]
    fixed_orientation: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let board = match args.layout {
        Some(placement) => match layout::from_placement(&placement, args.home) {
            Ok(board) => board,
            Err(e) => {
                error!("bad starting layout: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => {
            let mut board = layout::standard();
            if args.home != board.home_color() {
                board.flip_board();
            }
            board
        }
    };
    let mut game = Game::new(board);
    if args.fixed_orientation {
        game = game.with_fixed_orientation();
    }

    let mut backend = Backend::new(game, TerminalUIPlayer::stdio(), TerminalUIPlayer::stdio());
    let outcome = backend.play_game();
    if let Some(winner) = outcome.winner() {
        println!("{winner} wins ({outcome:?})");
    }
    ExitCode::SUCCESS
}
