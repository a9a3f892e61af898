//! A depth-limited minimax agent for the board game 'Connect 4'
//!
//! The engine answers the three questions an embedding game loop asks:
//! has the game ended (and where is the winning run), how good is a
//! position for a given side, and which column should the automated
//! player drop into next.
//!
//! # Basic Usage
//!
//! ```
//! use connect4_engine::{board::Board, board::Piece, search::SearchEngine};
//!
//!# use std::error::Error;
//!# fn main() -> Result<(), Box<dyn Error>> {
//! let board = Board::from_moves("445")?;
//! let engine = SearchEngine::default();
//! let result = engine.choose_move(&board, 4, Piece::Ai, Piece::Player);
//!
//! assert!(result.column.is_some());
//!# Ok(())
//!# }
//! ```

use static_assertions::*;
pub use anyhow;

pub mod error;

pub mod config;

pub mod board;

pub mod window;

pub mod win;

pub mod eval;

pub mod search;


pub use board::{Board, Cell, Move, Piece};
pub use config::{Settings, Weights};
pub use error::{ConfigError, EngineError};
pub use eval::Evaluator;
pub use search::{SearchEngine, SearchResult, WIN_SCORE};
pub use win::{Outcome, WinDetector, WinSequence};

/// The default number of rows on the game board
pub const ROWS: usize = 6;

/// The default number of columns on the game board
pub const COLUMNS: usize = 7;

/// The default number of aligned pieces needed to win
pub const WINDOW_LENGTH: usize = 4;

/// The default search depth in plies
pub const DEPTH: u32 = 5;

// the default board must admit at least one window in every direction
const_assert!(WINDOW_LENGTH <= ROWS);
const_assert!(WINDOW_LENGTH <= COLUMNS);
const_assert!(DEPTH >= 1);
