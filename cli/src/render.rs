use std::fmt;

use sweeper_core::{CellView, GameState, Snapshot};

fn glyph(view: CellView) -> char {
    match view {
        CellView::Hidden => '#',
        CellView::Open(0) => '.',
        CellView::Open(count) => char::from(b'0' + count),
        CellView::Mine => '*',
        CellView::Exploded => 'X',
    }
}

fn status(state: GameState) -> &'static str {
    match state {
        GameState::Menu => "Menu, type `start` to play",
        GameState::Start => "Pick any cell, the first click is always safe",
        GameState::Game => "Playing",
        GameState::Fail => "Boom! Type `reset` for a new game",
        GameState::Win => "Cleared! Type `reset` for a new game",
    }
}

/// Text grid of a snapshot with row and column indices.
pub struct BoardText<'a>(pub &'a Snapshot);

impl fmt::Display for BoardText<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let snapshot = self.0;
        let (rows, cols) = snapshot.size;

        write!(f, "    ")?;
        for col in 0..cols {
            write!(f, "{:>3}", col)?;
        }
        writeln!(f)?;

        for row in 0..rows {
            write!(f, "{:>3} ", row)?;
            for col in 0..cols {
                write!(f, "{:>3}", glyph(snapshot.cell_at((row, col))))?;
            }
            writeln!(f)?;
        }

        write!(f, "{} mines, {}", snapshot.mines, status(snapshot.state))
    }
}

pub fn render(snapshot: &Snapshot) -> String {
    BoardText(snapshot).to_string()
}
