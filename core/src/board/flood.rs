use alloc::collections::VecDeque;
use hashbrown::HashSet;

use super::*;

impl Board {
    /// Opens the zero region around `start`.
    ///
    /// Reveals `start`, then every cell 8-connected to it through zero-count
    /// cells, plus the numbered cells bordering that region. Returns how many
    /// cells were newly revealed. Expansion walks zero cells whether or not they
    /// were already revealed, so the resulting revealed set does not depend on
    /// earlier calls.
    pub fn reveal_area(&mut self, start: Coord2) -> Result<CellCount> {
        let start = self.validate_coords(start)?;
        self.check_adjacency()?;

        if self[start].is_mine {
            return Err(GameError::UnsafeStart);
        }

        let size = self.size();
        let mut newly_revealed = 0;
        let mut visited = HashSet::new();
        visited.insert(start);
        let mut to_visit = VecDeque::from([start]);

        while let Some(coords) = to_visit.pop_front() {
            let cell = &mut self.cells[coords.to_nd_index()];
            if !cell.revealed {
                cell.revealed = true;
                self.revealed_count += 1;
                newly_revealed += 1;
                log::trace!(
                    "Flood opened cell at {:?}, mine count: {}",
                    coords,
                    cell.adjacent_mines
                );
            }

            // numbered cells are the border, they do not spread
            if cell.adjacent_mines != 0 {
                continue;
            }

            for pos in NeighborIter::new(coords, size) {
                // neighbors of a zero cell are never mines
                if visited.insert(pos) && !self[pos].is_mine {
                    to_visit.push_back(pos);
                }
            }
        }

        log::debug!(
            "Flood fill from {:?} revealed {} cells",
            start,
            newly_revealed
        );
        Ok(newly_revealed)
    }
}
