use anyhow::Result;
use crossterm::{
    style::{style, Attribute, Color, PrintStyledContent},
    QueueableCommand,
};

use std::io::{stdout, Write};

use connect4_engine::{Board, Cell, WinSequence};

/// Draws the board to stdout, picking out the cells of a winning run
pub fn display(board: &Board, highlight: Option<&WinSequence>) -> Result<()> {
    let mut stdout = stdout();

    let header: String = (1..=board.columns()).map(|x| (x % 10).to_string()).collect();
    stdout.queue(PrintStyledContent(style(header + "\n")))?;

    for row in 0..board.rows() {
        for column in 0..board.columns() {
            let highlighted = highlight.map_or(false, |sequence| sequence.contains(row, column));
            stdout.queue(PrintStyledContent(
                style("O")
                    .attribute(Attribute::Bold)
                    .on(if highlighted {
                        Color::DarkGreen
                    } else {
                        Color::DarkBlue
                    })
                    .with(match board.get(row, column) {
                        Cell::Player => Color::Cyan,
                        Cell::Ai => Color::Magenta,
                        Cell::Empty => Color::DarkBlue,
                    }),
            ))?;
        }
        stdout.queue(PrintStyledContent(style("\n")))?;
    }
    stdout.flush()?;
    Ok(())
}
