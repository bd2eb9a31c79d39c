#![no_std]

extern crate alloc;

use serde::{Deserialize, Serialize};

pub use board::*;
pub use cell::*;
pub use error::*;
pub use generator::*;
pub use session::*;
pub use types::*;

mod board;
mod cell;
mod error;
mod generator;
mod session;
mod types;

/// Which cells around the first click are kept free of mines.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SafeZone {
    /// The clipped 3×3 block centered on the first click.
    #[default]
    Neighborhood,
    /// Every cell whose row OR column is within one of the first click, a cross-shaped band.
    CrossBand,
}

impl SafeZone {
    pub const fn excludes(self, safe: Coord2, coords: Coord2) -> bool {
        let row_near = coords.0.abs_diff(safe.0) <= 1;
        let col_near = coords.1.abs_diff(safe.1) <= 1;
        match self {
            Self::Neighborhood => row_near && col_near,
            Self::CrossBand => row_near || col_near,
        }
    }

    /// Number of in-bounds cells excluded around `safe`, which must lie inside `size`.
    pub const fn excluded_count(self, size: Coord2, safe: Coord2) -> CellCount {
        let band_rows = band_len(safe.0, size.0);
        let band_cols = band_len(safe.1, size.1);
        match self {
            Self::Neighborhood => band_rows * band_cols,
            Self::CrossBand => {
                band_rows * size.1 as CellCount + band_cols * size.0 as CellCount
                    - band_rows * band_cols
            }
        }
    }
}

/// Length of `[center - 1, center + 1]` clipped to `[0, len)`.
const fn band_len(center: Coord, len: Coord) -> CellCount {
    let low = center.saturating_sub(1) as CellCount;
    let high = center as CellCount + 1;
    let last = len as CellCount - 1;
    let high = if high > last { last } else { high };
    high - low + 1
}

/// Parameters consumed when a game is set up.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub rows: Coord,
    pub cols: Coord,
    pub mines: CellCount,
    pub safe_zone: SafeZone,
    /// Ordinary clicks on a zero cell open the surrounding region instead of a single cell.
    pub open_zero_regions: bool,
}

impl GameConfig {
    pub const DEFAULT_ROWS: Coord = 15;
    pub const DEFAULT_COLS: Coord = 15;
    pub const DEFAULT_MINES: CellCount = 40;

    pub const fn new_unchecked(size: Coord2, mines: CellCount) -> Self {
        Self {
            rows: size.0,
            cols: size.1,
            mines,
            safe_zone: SafeZone::Neighborhood,
            open_zero_regions: false,
        }
    }

    pub fn new(size: Coord2, mines: CellCount) -> Result<Self> {
        let config = Self::new_unchecked(size, mines);
        config.validate()?;
        Ok(config)
    }

    pub const fn with_safe_zone(mut self, safe_zone: SafeZone) -> Self {
        self.safe_zone = safe_zone;
        self
    }

    pub const fn with_open_zero_regions(mut self, open_zero_regions: bool) -> Self {
        self.open_zero_regions = open_zero_regions;
        self
    }

    pub const fn size(&self) -> Coord2 {
        (self.rows, self.cols)
    }

    pub const fn total_cells(&self) -> CellCount {
        mult(self.rows, self.cols)
    }

    /// Checks what can be known before the first click; the exact safe-zone
    /// feasibility is checked at placement time.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(GameError::InvalidDimensions);
        }
        if self.mines > self.total_cells() {
            return Err(GameError::MineCountInfeasible {
                requested: self.mines,
                available: self.total_cells(),
            });
        }
        Ok(())
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new_unchecked(
            (Self::DEFAULT_ROWS, Self::DEFAULT_COLS),
            Self::DEFAULT_MINES,
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RevealOutcome {
    NoChange,
    Revealed,
    HitMine,
    Won,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        use RevealOutcome::*;
        match self {
            NoChange => false,
            Revealed => true,
            HitMine => true,
            Won => true,
        }
    }
}
