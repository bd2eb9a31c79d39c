use alloc::vec::Vec;

use crate::*;
pub use fixed::*;
pub use random::*;

mod fixed;
mod random;

/// Everything a generator needs to know to lay out mines for one game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlacementRequest {
    pub size: Coord2,
    pub safe: Coord2,
    pub mines: CellCount,
    pub safe_zone: SafeZone,
}

impl PlacementRequest {
    /// Number of cells a mine may go on.
    pub fn available_cells(&self) -> CellCount {
        mult(self.size.0, self.size.1) - self.safe_zone.excluded_count(self.size, self.safe)
    }

    pub fn check_feasible(&self) -> Result<()> {
        let available = self.available_cells();
        if self.mines > available {
            log::warn!(
                "Cannot place {} mines around {:?}, only {} cells are eligible",
                self.mines,
                self.safe,
                available
            );
            return Err(GameError::MineCountInfeasible {
                requested: self.mines,
                available,
            });
        }
        Ok(())
    }

    /// Row-major list of the cells outside the safe zone.
    pub fn eligible_cells(&self) -> Vec<Coord2> {
        let (rows, cols) = self.size;
        (0..rows)
            .flat_map(|row| (0..cols).map(move |col| (row, col)))
            .filter(|&coords| !self.safe_zone.excludes(self.safe, coords))
            .collect()
    }
}

pub trait MineGenerator {
    /// Picks exactly `request.mines` distinct cells outside the safe zone.
    fn generate(self, request: &PlacementRequest) -> Result<Vec<Coord2>>;
}
