use serde::{Deserialize, Serialize};

/// Hidden state of one grid position, owned by the [`Board`](crate::Board).
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    pub revealed: bool,
    pub is_mine: bool,
    /// Mines among the clipped 8-neighborhood, only meaningful once adjacency was computed.
    pub adjacent_mines: u8,
}

impl Cell {
    /// What a renderer may draw for this cell when nothing hidden is exposed.
    pub const fn play_view(self) -> CellView {
        match (self.revealed, self.is_mine) {
            (false, _) => CellView::Hidden,
            (true, true) => CellView::Exploded,
            (true, false) => CellView::Open(self.adjacent_mines),
        }
    }

    /// Debug view: hidden contents are exposed as well.
    pub const fn reveal_all_view(self) -> CellView {
        match (self.revealed, self.is_mine) {
            (true, true) => CellView::Exploded,
            (false, true) => CellView::Mine,
            (_, false) => CellView::Open(self.adjacent_mines),
        }
    }
}

/// Read-only cell state handed to the presentation layer.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum CellView {
    #[default]
    Hidden,
    Open(u8),
    /// Mine that was not stepped on, only shown in the reveal-all view.
    Mine,
    /// Mine the player revealed.
    Exploded,
}

impl CellView {
    pub const fn is_hidden(self) -> bool {
        matches!(self, Self::Hidden)
    }

    /// Numeric label to draw, `None` for hidden, mine and zero cells.
    pub const fn label(self) -> Option<u8> {
        match self {
            Self::Open(count) if count > 0 => Some(count),
            _ => None,
        }
    }
}
