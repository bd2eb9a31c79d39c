use super::*;

/// Predetermined layout, used for replays and hand-built scenarios.
///
/// The board validates the coordinates when the layout is applied.
#[derive(Clone, Debug, PartialEq)]
pub struct FixedMineGenerator {
    mines: Vec<Coord2>,
}

impl FixedMineGenerator {
    pub fn new(mines: impl Into<Vec<Coord2>>) -> Self {
        Self {
            mines: mines.into(),
        }
    }
}

impl MineGenerator for FixedMineGenerator {
    fn generate(self, request: &PlacementRequest) -> Result<Vec<Coord2>> {
        request.check_feasible()?;
        Ok(self.mines)
    }
}
