//! The game grid and its primitive mutators and queries

use std::fmt;

use crate::config::Settings;
use crate::error::EngineError;
use crate::{COLUMNS, ROWS};

/// A token belonging to one of the two sides
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Piece {
    Player,
    Ai,
}

impl Piece {
    pub fn opponent(self) -> Self {
        match self {
            Piece::Player => Piece::Ai,
            Piece::Ai => Piece::Player,
        }
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Cell {
    Empty,
    Player,
    Ai,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            _ => false,
        }
    }

    fn symbol(&self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Player => 'X',
            Cell::Ai => 'O',
        }
    }
}

impl From<Piece> for Cell {
    fn from(piece: Piece) -> Self {
        match piece {
            Piece::Player => Cell::Player,
            Piece::Ai => Cell::Ai,
        }
    }
}

/// A placement that has been resolved to its landing row
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Move {
    pub column: usize,
    pub row: usize,
    pub piece: Piece,
}

/// A rectangular connect-4 grid
///
/// Row 0 is the top of the board; pieces settle towards the highest row
/// index of their column. The board is a plain value: cloning it yields an
/// independent position that can be played on without touching the original.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>, // cells are stored left-to-right, top-to-bottom
}

impl Board {
    /// Creates an empty board of the default 6x7 size
    pub fn new() -> Self {
        Self::with_size(ROWS, COLUMNS)
    }

    /// Creates an empty board with the given dimensions
    pub fn with_size(rows: usize, columns: usize) -> Self {
        Self {
            rows,
            columns,
            cells: vec![Cell::Empty; rows * columns],
        }
    }

    /// Creates an empty board sized by `settings`
    pub fn from_settings(settings: &Settings) -> Self {
        Self::with_size(settings.rows, settings.columns)
    }

    /// Builds a default-sized board by replaying a move list
    ///
    /// Each character is a 1-indexed column; the player moves first and
    /// sides alternate. Play continues past a win, so fixtures may contain
    /// several winning runs.
    pub fn from_moves<S: AsRef<str>>(moves: S) -> Result<Self, EngineError> {
        let moves = moves.as_ref();
        let mut board = Self::new();
        let mut piece = Piece::Player;

        for (position, column_char) in moves.chars().enumerate() {
            match column_char.to_digit(10).map(|c| c as usize) {
                Some(column) if column >= 1 && column <= board.columns => {
                    board.play(column - 1, piece)?;
                    piece = piece.opponent();
                }
                _ => {
                    return Err(EngineError::Parse {
                        input: moves.to_string(),
                        position,
                        reason: format!("'{}' is not a column between 1 and {}", column_char, board.columns),
                    })
                }
            }
        }
        Ok(board)
    }

    /// Builds a board from a picture of its rows, top row first
    ///
    /// `X` is a player piece, `O` an AI piece and `.` an empty cell. No
    /// gravity is applied, the cells are taken exactly as drawn.
    pub fn from_rows(rows: &[&str]) -> Result<Self, EngineError> {
        let columns = rows.first().map(|row| row.chars().count()).unwrap_or(0);
        let mut board = Self::with_size(rows.len(), columns);

        for (row, line) in rows.iter().enumerate() {
            if line.chars().count() != columns {
                return Err(EngineError::Parse {
                    input: line.to_string(),
                    position: row,
                    reason: format!("expected {} cells in every row", columns),
                });
            }
            for (column, symbol) in line.chars().enumerate() {
                let cell = match symbol {
                    '.' => Cell::Empty,
                    'X' | 'x' => Cell::Player,
                    'O' | 'o' => Cell::Ai,
                    _ => {
                        return Err(EngineError::Parse {
                            input: line.to_string(),
                            position: column,
                            reason: format!("unknown cell '{}'", symbol),
                        })
                    }
                };
                board.set(row, column, cell);
            }
        }
        Ok(board)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    fn index(&self, row: usize, column: usize) -> usize {
        assert!(
            row < self.rows && column < self.columns,
            "cell ({}, {}) outside a {}x{} board",
            row,
            column,
            self.rows,
            self.columns
        );
        row * self.columns + column
    }

    /// # Panics
    /// If `(row, column)` lies outside the board.
    pub fn get(&self, row: usize, column: usize) -> Cell {
        self.cells[self.index(row, column)]
    }

    fn set(&mut self, row: usize, column: usize, cell: Cell) {
        let index = self.index(row, column);
        self.cells[index] = cell;
    }

    /// Returns whether a piece can still be dropped into `column`
    ///
    /// Only the top cell is inspected: pieces stack from the bottom, so an
    /// occupied top means the whole column is full. Out-of-range columns are
    /// never valid.
    pub fn is_valid_column(&self, column: usize) -> bool {
        column < self.columns && self.get(0, column).is_empty()
    }

    /// Returns the lowest empty row of `column`, or `None` if it is full
    /// or outside the board
    pub fn next_open_row(&self, column: usize) -> Option<usize> {
        if column >= self.columns {
            return None;
        }
        (0..self.rows).rev().find(|&row| self.get(row, column).is_empty())
    }

    /// Places `piece` at an already resolved cell
    ///
    /// # Panics
    /// If `(row, column)` lies outside the board.
    pub fn drop_piece(&mut self, row: usize, column: usize, piece: Piece) {
        self.set(row, column, piece.into());
    }

    /// Columns that still accept a piece, in ascending order
    ///
    /// An empty result means the board is full.
    pub fn valid_columns(&self) -> Vec<usize> {
        (0..self.columns)
            .filter(|&column| self.is_valid_column(column))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.valid_columns().is_empty()
    }

    /// Number of pieces on the board
    pub fn num_pieces(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.is_empty()).count()
    }

    /// Validates, resolves and applies a drop into `column`
    pub fn play(&mut self, column: usize, piece: Piece) -> Result<Move, EngineError> {
        if column >= self.columns {
            return Err(EngineError::ColumnOutOfRange {
                column,
                columns: self.columns,
            });
        }
        if !self.is_valid_column(column) {
            return Err(EngineError::InvalidColumn { column });
        }
        let row = self
            .next_open_row(column)
            .ok_or(EngineError::NoOpenRow { column })?;
        self.drop_piece(row, column, piece);

        Ok(Move { column, row, piece })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.rows {
            let line: String = (0..self.columns)
                .map(|column| self.get(row, column).symbol())
                .collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
