//! Detection of finished games

use crate::board::{Board, Cell, Piece};
use crate::config::Settings;
use crate::window::{all_windows, Window};
use crate::WINDOW_LENGTH;

/// The coordinates of a winning run, as `(row, column)` pairs in scan order
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct WinSequence(Vec<(usize, usize)>);

impl WinSequence {
    pub fn cells(&self) -> &[(usize, usize)] {
        &self.0
    }

    pub fn contains(&self, row: usize, column: usize) -> bool {
        self.0.contains(&(row, column))
    }
}

impl From<Window> for WinSequence {
    fn from(window: Window) -> Self {
        Self(window.cells().collect())
    }
}

/// The state of a game as seen by the embedding application
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Outcome {
    InProgress,
    Won(Piece, WinSequence),
    Draw,
}

/// Scans boards for aligned runs of pieces
#[derive(Copy, Clone, Debug)]
pub struct WinDetector {
    window_length: usize,
}

impl WinDetector {
    pub fn new(window_length: usize) -> Self {
        Self { window_length }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.window_length)
    }

    /// Returns the first winning run of `piece`
    ///
    /// Directions are tried horizontal, vertical, down-right then down-left,
    /// and within a direction start columns are the outer loop.
    pub fn find_win(&self, board: &Board, piece: Piece) -> Option<WinSequence> {
        let target: Cell = piece.into();
        all_windows(board.rows(), board.columns(), self.window_length)
            .find(|window| {
                window
                    .cells()
                    .all(|(row, column)| board.get(row, column) == target)
            })
            .map(WinSequence::from)
    }

    /// Returns whether either side has won or no column is left to play
    pub fn is_terminal(&self, board: &Board) -> bool {
        self.find_win(board, Piece::Player).is_some()
            || self.find_win(board, Piece::Ai).is_some()
            || board.valid_columns().is_empty()
    }

    /// Classifies a board, checking the player's pieces before the AI's
    pub fn outcome(&self, board: &Board) -> Outcome {
        for &piece in [Piece::Player, Piece::Ai].iter() {
            if let Some(sequence) = self.find_win(board, piece) {
                return Outcome::Won(piece, sequence);
            }
        }
        if board.is_full() {
            Outcome::Draw
        } else {
            Outcome::InProgress
        }
    }
}

impl Default for WinDetector {
    fn default() -> Self {
        Self::new(WINDOW_LENGTH)
    }
}
