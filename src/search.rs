//! Depth-limited minimax search with alpha-beta pruning

use rayon::prelude::*;
use tracing::{debug, trace};

use crate::board::{Board, Piece};
use crate::config::Settings;
use crate::eval::Evaluator;
use crate::win::WinDetector;
use crate::DEPTH;

/// The score of a position won by the AI; the negation is a position won
/// by the player
pub const WIN_SCORE: i32 = 100_000_000;

/// The column picked by a search and the score backing it
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct SearchResult {
    /// `None` when the searched board was already terminal
    pub column: Option<usize>,
    pub score: i32,
    /// The number of positions visited (for diagnostics only)
    pub nodes: usize,
}

/// An agent choosing moves for the automated player
///
/// # Position Scoring
/// Scores are always taken from the AI's point of view. A board where the
/// AI has a winning run scores [`WIN_SCORE`], one where the player does
/// scores `-WIN_SCORE`, and a full board with no winner scores 0. Positions
/// reached at the depth limit are scored by the [`Evaluator`].
///
/// Among columns with equal scores the lowest index is chosen, so a search
/// is fully deterministic.
#[derive(Copy, Clone, Debug)]
pub struct SearchEngine {
    detector: WinDetector,
    evaluator: Evaluator,
    depth: u32,
}

impl SearchEngine {
    pub fn new(detector: WinDetector, evaluator: Evaluator, depth: u32) -> Self {
        Self {
            detector,
            evaluator,
            depth,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(
            WinDetector::from_settings(settings),
            Evaluator::from_settings(settings),
            settings.depth,
        )
    }

    pub fn detector(&self) -> &WinDetector {
        &self.detector
    }

    pub fn evaluator(&self) -> &Evaluator {
        &self.evaluator
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }

    /// Searches `depth` plies ahead, maximizing for `ai` with `ai` to move
    ///
    /// The caller's board is never modified; every explored move is played on
    /// its own copy.
    pub fn choose_move(&self, board: &Board, depth: u32, ai: Piece, player: Piece) -> SearchResult {
        let mut search = Search::new(self, ai, player, depth);
        let (column, score) = search.minimax(board, depth, i32::MIN, i32::MAX, true);

        let result = SearchResult {
            column,
            score,
            nodes: search.nodes,
        };
        debug!(column = ?result.column, score, depth, nodes = result.nodes, "search complete");
        result
    }

    /// Searches with the configured depth
    pub fn best_move(&self, board: &Board, ai: Piece, player: Piece) -> SearchResult {
        self.choose_move(board, self.depth, ai, player)
    }

    /// Searches each root column on its own thread
    ///
    /// Root children are searched with a full window, so fewer cutoffs are
    /// available than in [`choose_move`], but the returned column and score
    /// are identical.
    ///
    /// [`choose_move`]: #method.choose_move
    pub fn choose_move_parallel(
        &self,
        board: &Board,
        depth: u32,
        ai: Piece,
        player: Piece,
    ) -> SearchResult {
        if depth == 0 || self.detector.is_terminal(board) {
            return self.choose_move(board, depth, ai, player);
        }

        let children: Vec<(usize, i32, usize)> = board
            .valid_columns()
            .into_par_iter()
            .filter_map(|column| {
                let row = board.next_open_row(column)?;
                let mut next = board.clone();
                next.drop_piece(row, column, ai);

                let mut search = Search::new(self, ai, player, depth);
                let (_, score) = search.minimax(&next, depth - 1, i32::MIN, i32::MAX, false);
                trace!(column, score, "root candidate searched");
                Some((column, score, search.nodes))
            })
            .collect();

        let mut result = SearchResult {
            column: None,
            score: i32::MIN,
            nodes: 1,
        };
        // children come back in ascending column order; keep the first best
        for (column, score, nodes) in children {
            result.nodes += nodes;
            if score > result.score {
                result.score = score;
                result.column = Some(column);
            }
        }
        debug!(column = ?result.column, score = result.score, depth, nodes = result.nodes, "parallel search complete");
        result
    }
}

impl Default for SearchEngine {
    fn default() -> Self {
        Self::new(WinDetector::default(), Evaluator::default(), DEPTH)
    }
}

/// State of one search from the root
struct Search<'e> {
    engine: &'e SearchEngine,
    ai: Piece,
    player: Piece,
    root_depth: u32,
    nodes: usize,
}

impl<'e> Search<'e> {
    fn new(engine: &'e SearchEngine, ai: Piece, player: Piece, root_depth: u32) -> Self {
        Self {
            engine,
            ai,
            player,
            root_depth,
            nodes: 0,
        }
    }

    /// Scores a terminal board, or `None` if play can continue
    fn terminal_score(&self, board: &Board) -> Option<i32> {
        let detector = &self.engine.detector;
        if detector.find_win(board, self.ai).is_some() {
            Some(WIN_SCORE)
        } else if detector.find_win(board, self.player).is_some() {
            Some(-WIN_SCORE)
        } else if board.valid_columns().is_empty() {
            Some(0)
        } else {
            None
        }
    }

    fn minimax(
        &mut self,
        board: &Board,
        depth: u32,
        mut alpha: i32,
        mut beta: i32,
        maximizing: bool,
    ) -> (Option<usize>, i32) {
        self.nodes += 1;

        if let Some(score) = self.terminal_score(board) {
            return (None, score);
        }
        if depth == 0 {
            // leaves are always scored for the AI, even on the player's turn
            return (None, self.engine.evaluator.score_position(board, self.ai));
        }

        let mover = if maximizing { self.ai } else { self.player };
        let mut best_column = None;
        let mut best = if maximizing { i32::MIN } else { i32::MAX };

        for column in board.valid_columns() {
            let row = match board.next_open_row(column) {
                Some(row) => row,
                None => continue,
            };
            let mut next = board.clone();
            next.drop_piece(row, column, mover);

            let (_, score) = self.minimax(&next, depth - 1, alpha, beta, !maximizing);
            if depth == self.root_depth {
                trace!(column, score, "root candidate searched");
            }

            if maximizing {
                if score > best {
                    best = score;
                    best_column = Some(column);
                }
                alpha = alpha.max(best);
            } else {
                if score < best {
                    best = score;
                    best_column = Some(column);
                }
                beta = beta.min(best);
            }
            // neither side will let play reach this branch
            if alpha >= beta {
                break;
            }
        }

        debug_assert!(best_column.is_some(), "non-terminal board with no candidate");
        (best_column, best)
    }
}
