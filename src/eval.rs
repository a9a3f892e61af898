//! Heuristic scoring of non-terminal positions
//!
//! A position is scored by counting pieces in every window a win could be
//! made in, plus a bonus for each piece held in the centre column.

use crate::board::{Board, Cell, Piece};
use crate::config::{Settings, Weights};
use crate::window::all_windows;
use crate::WINDOW_LENGTH;

#[derive(Copy, Clone, Debug)]
pub struct Evaluator {
    window_length: usize,
    weights: Weights,
}

impl Evaluator {
    pub fn new(window_length: usize, weights: Weights) -> Self {
        Self {
            window_length,
            weights,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(settings.window_length, settings.weights)
    }

    /// Scores the cells of one window from the point of view of `piece`
    pub fn score_window(&self, window: &[Cell], piece: Piece) -> i32 {
        let own: Cell = piece.into();
        let opponent: Cell = piece.opponent().into();
        let count = |target: Cell| window.iter().filter(|&&cell| cell == target).count();

        let (mine, theirs, empty) = (count(own), count(opponent), count(Cell::Empty));
        let length = window.len();

        let mut score = 0;
        if mine == length {
            score += self.weights.win;
        } else if mine + 1 == length && empty == 1 {
            score += self.weights.three;
        } else if mine + 2 == length && empty == 2 {
            score += self.weights.two;
        }
        // no matching bonus for the opponent's shorter runs
        if theirs + 1 == length && empty == 1 {
            score += self.weights.opponent_three;
        }
        score
    }

    /// Sums the window scores of every line on the board plus the centre bonus
    pub fn score_position(&self, board: &Board, piece: Piece) -> i32 {
        let own: Cell = piece.into();
        let center = board.columns() / 2;
        let center_count = (0..board.rows())
            .filter(|&row| board.get(row, center) == own)
            .count() as i32;

        let mut cells = Vec::with_capacity(self.window_length);
        let windows_score: i32 = all_windows(board.rows(), board.columns(), self.window_length)
            .map(|window| {
                cells.clear();
                cells.extend(window.cells().map(|(row, column)| board.get(row, column)));
                self.score_window(&cells, piece)
            })
            .sum();

        center_count * self.weights.center + windows_score
    }
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new(WINDOW_LENGTH, Weights::default())
    }
}
