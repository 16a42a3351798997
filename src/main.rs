use std::io;

use anyhow::{bail, Context, Result};
use clap::Parser;
use log::info;

use chessboard::driver::DEFAULT_MAX_TURNS;
use chessboard::{Board, ConsoleInput, Game, TurnController};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Move knights and bishops around a chessboard",
    long_about = None
)]
struct Args {
    /// Stop after this many applied half-moves
    #[arg(long, default_value_t = DEFAULT_MAX_TURNS)]
    max_turns: usize,

    /// Starting piece as "<colour> <kind> <square>", e.g. "white bishop e2".
    /// Replaces the default setup when given at least once
    #[arg(long = "place", value_name = "PIECE")]
    placements: Vec<String>,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,
}

const DEFAULT_SETUP: [&str; 2] = ["white bishop e2", "black knight d3"];

fn setup_board(placements: &[String]) -> Result<Board> {
    let mut board = Board::new();
    let placements: Vec<&str> = if placements.is_empty() {
        DEFAULT_SETUP.to_vec()
    } else {
        placements.iter().map(String::as_str).collect()
    };
    for placement in placements {
        let fields: Vec<&str> = placement.split_whitespace().collect();
        let [colour, kind, square] = fields.as_slice() else {
            bail!("expected \"<colour> <kind> <square>\", got {placement:?}");
        };
        board
            .place_named(kind, colour, &square.to_lowercase())
            .with_context(|| format!("cannot place {placement:?}"))?;
    }
    Ok(board)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let board = setup_board(&args.placements)?;
    info!("starting with {} pieces, at most {} turns", board.len(), args.max_turns);

    let mut game = Game::new(TurnController::new(board));
    game.max_turns = args.max_turns;
    game.use_colour_output = !args.no_color;

    let stdin = io::stdin();
    let mut input = ConsoleInput::new(stdin.lock(), io::stdout());
    let ending = game.run(&mut input, &mut io::stdout())?;
    info!("game ended: {ending:?}");
    Ok(())
}
