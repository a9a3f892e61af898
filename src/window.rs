//! Enumeration of the straight runs of cells shared by win detection and
//! evaluation

/// The four line families, in the order they are scanned
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Direction {
    Horizontal,
    Vertical,
    /// row and column both increase
    DownRight,
    /// row decreases as column increases
    DownLeft,
}

impl Direction {
    pub const ALL: &'static [Direction] = &[
        Direction::Horizontal,
        Direction::Vertical,
        Direction::DownRight,
        Direction::DownLeft,
    ];

    // (row step, column step)
    fn step(self) -> (isize, isize) {
        match self {
            Direction::Horizontal => (0, 1),
            Direction::Vertical => (1, 0),
            Direction::DownRight => (1, 1),
            Direction::DownLeft => (-1, 1),
        }
    }
}

/// A run of `length` cells starting at `(row, column)`
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct Window {
    pub row: usize,
    pub column: usize,
    pub direction: Direction,
    pub length: usize,
}

impl Window {
    /// The `(row, column)` coordinates covered by the window, from its start
    pub fn cells(self) -> impl Iterator<Item = (usize, usize)> {
        let (row_step, column_step) = self.direction.step();
        (0..self.length as isize).map(move |i| {
            (
                (self.row as isize + row_step * i) as usize,
                (self.column as isize + column_step * i) as usize,
            )
        })
    }
}

/// Every window of one direction on a `rows` x `columns` board
///
/// Start columns form the outer loop and start rows the inner one, which
/// fixes which run is reported first when several coexist.
pub fn windows(
    rows: usize,
    columns: usize,
    length: usize,
    direction: Direction,
) -> impl Iterator<Item = Window> {
    // number of valid start positions along each axis
    let spans = |extent: usize| (extent + 1).saturating_sub(length);

    let (start_columns, start_rows) = match direction {
        Direction::Horizontal => (0..spans(columns), 0..rows),
        Direction::Vertical => (0..columns, 0..spans(rows)),
        Direction::DownRight => (0..spans(columns), 0..spans(rows)),
        Direction::DownLeft => (0..spans(columns), length.saturating_sub(1)..rows),
    };

    start_columns.flat_map(move |column| {
        start_rows.clone().map(move |row| Window {
            row,
            column,
            direction,
            length,
        })
    })
}

/// Every window on the board, direction by direction
pub fn all_windows(rows: usize, columns: usize, length: usize) -> impl Iterator<Item = Window> {
    Direction::ALL
        .iter()
        .flat_map(move |&direction| windows(rows, columns, length, direction))
}
