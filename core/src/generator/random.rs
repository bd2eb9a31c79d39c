use super::*;

/// Uniformly random layout outside the safe zone, reproducible from `seed`.
#[derive(Clone, Debug, PartialEq)]
pub struct RandomMineGenerator {
    seed: u64,
}

impl RandomMineGenerator {
    pub fn new(seed: u64) -> Self {
        Self { seed }
    }
}

impl MineGenerator for RandomMineGenerator {
    fn generate(self, request: &PlacementRequest) -> Result<Vec<Coord2>> {
        use rand::prelude::*;

        request.check_feasible()?;

        let mut cells = request.eligible_cells();
        let mines = usize::from(request.mines);

        // partial Fisher-Yates: the first `mines` slots end up a uniform sample
        let mut rng = SmallRng::seed_from_u64(self.seed);
        for i in 0..mines {
            let pick = rng.random_range(i..cells.len());
            cells.swap(i, pick);
        }
        cells.truncate(mines);

        log::debug!(
            "Generated {} mines around {:?} with seed {}",
            cells.len(),
            request.safe,
            self.seed
        );
        Ok(cells)
    }
}
