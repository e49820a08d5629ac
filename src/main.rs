use std::io::{self, Write};
use std::process::ExitCode;

use clap::Parser;
use log::error;

use piece_reach::board::{Color, Piece};
use piece_reach::options::{Placement, SessionOptions};

#[derive(Parser, Debug)]
#[command(author, version, about = "Show the squares a chess piece can reach", long_about = None)]
struct Args {
    /// Piece kind (pawn, rook, knight, bishop, queen, king or its letter)
    #[arg(short, long, default_value = "pawn")]
    piece: Piece,

    /// Piece color; only changes pawn direction
    #[arg(short, long, default_value = "black")]
    color: Color,

    /// Board side length
    #[arg(short, long, default_value_t = 8)]
    size: usize,

    /// Row of the piece (0 is the top row)
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    row: i64,

    /// Column of the piece
    #[arg(long, default_value_t = 1, allow_negative_numbers = true)]
    col: i64,

    /// Prompt for the position instead of using --row/--col
    #[arg(short, long, conflicts_with = "random")]
    interactive: bool,

    /// Place the piece on a random square
    #[arg(short, long)]
    random: bool,

    /// Keep the piece visible and draw markers from a separate overlay
    #[arg(long)]
    overlay: bool,

    /// Enable debug logging
    #[arg(short, long)]
    debug: bool,
}

impl Args {
    fn session(&self) -> SessionOptions {
        let placement = if self.interactive {
            Placement::Interactive
        } else if self.random {
            Placement::Random
        } else {
            Placement::Fixed {
                row: self.row,
                col: self.col,
            }
        };
        SessionOptions {
            size: self.size,
            piece: self.piece,
            color: self.color,
            placement,
            overlay: self.overlay,
        }
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = if args.debug { "debug" } else { "warn" };
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, log_level),
    )
    .format(|buf, record| writeln!(buf, "[{}] {}: {}", record.level(), record.target(), record.args()))
    .init();

    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut output = io::stdout();
    let mut rng = rand::thread_rng();

    match args.session().run(&mut input, &mut output, &mut rng) {
        Ok(report) => {
            print!("{}", report.rendered);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
