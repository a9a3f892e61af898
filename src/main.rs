use anyhow::Result;
use clap::{Parser, ValueEnum};
use tracing::info;

use std::io::{stdin, stdout, Write};
use std::path::PathBuf;

use connect4_engine::*;

mod display;
use display::*;

/// Play connect 4 against a minimax agent
#[derive(Parser, Debug)]
#[command(name = "connect4")]
struct Args {
    /// TOML file overriding board size, weights and depth, defaults are
    /// used if it does not exist
    #[arg(long, default_value = "connect4.toml")]
    config: PathBuf,

    /// Search depth in plies, overrides the config file
    #[arg(long)]
    depth: Option<u32>,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Who moves first, chosen at random if not given
    #[arg(long, value_enum)]
    first: Option<First>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum First {
    Player,
    Ai,
}

fn init_tracing(level: &str) {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(&args.log_level);

    let mut settings = Settings::load_or_default(&args.config)?;
    if let Some(depth) = args.depth {
        settings = settings.with_depth(depth);
    }
    settings.validate()?;
    info!(?settings, "engine configured");

    let engine = SearchEngine::from_settings(&settings);
    let mut board = Board::from_settings(&settings);

    let mut turn = match args.first {
        Some(First::Player) => Piece::Player,
        Some(First::Ai) => Piece::Ai,
        None => {
            if rand::random::<bool>() {
                Piece::Player
            } else {
                Piece::Ai
            }
        }
    };

    println!("Welcome to Connect 4\n");
    let stdin = stdin();

    // game loop
    loop {
        display(&board, None)?;

        let placed = match turn {
            // human player
            Piece::Player => {
                print!("Move input > ");
                stdout().flush()?;
                let mut input_str = String::new();
                if stdin.read_line(&mut input_str)? == 0 {
                    // end of input
                    return Ok(());
                }

                let column = match input_str.trim().parse::<usize>() {
                    Ok(column) if column >= 1 => column - 1,
                    _ => {
                        println!("Invalid number: {}", input_str.trim());
                        continue;
                    }
                };
                match board.play(column, Piece::Player) {
                    Ok(placed) => placed,
                    Err(err) => {
                        println!("{}", err);
                        // try the move again
                        continue;
                    }
                }
            }
            // AI player
            Piece::Ai => {
                println!("AI is thinking...");
                stdout().flush()?;

                let result = engine.choose_move_parallel(
                    &board,
                    engine.depth(),
                    Piece::Ai,
                    Piece::Player,
                );
                let column = match result.column {
                    Some(column) => column,
                    // the board is terminal, which the checks below rule out
                    None => break,
                };
                println!("Best move: {} (score {})", column + 1, result.score);
                board.play(column, Piece::Ai)?
            }
        };

        // end states
        match engine.detector().outcome(&board) {
            Outcome::Won(piece, sequence) => {
                display(&board, Some(&sequence))?;
                match piece {
                    Piece::Player => println!("Player wins!"),
                    Piece::Ai => println!("AI wins!"),
                }
                break;
            }
            Outcome::Draw => {
                display(&board, None)?;
                println!("Draw!");
                break;
            }
            Outcome::InProgress => turn = placed.piece.opponent(),
        }
    }
    Ok(())
}
