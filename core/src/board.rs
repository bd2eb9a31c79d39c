use alloc::vec::Vec;
use core::ops::Index;

use ndarray::Array2;

use crate::*;

mod flood;

/// Which hidden contents a snapshot exposes.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum SnapshotMode {
    /// Only what the player has revealed.
    #[default]
    Play,
    /// Hidden mines and counts too.
    RevealAll,
}

/// Grid of cells for one game.
///
/// A fresh board has no mines; [`Board::place_mines`] lays them out once, and
/// [`Board::compute_adjacency`] must run before anything is revealed.
#[derive(Clone, Debug, PartialEq)]
pub struct Board {
    cells: Array2<Cell>,
    mine_count: CellCount,
    revealed_count: CellCount,
    mines_placed: bool,
    adjacency_computed: bool,
    triggered_mine: Option<Coord2>,
}

impl Board {
    pub fn new(size: Coord2) -> Result<Self> {
        if size.0 == 0 || size.1 == 0 {
            return Err(GameError::InvalidDimensions);
        }
        Ok(Self::blank(size))
    }

    /// Board with `mines` already placed and adjacency computed, with no safe zone.
    pub fn from_mines(size: Coord2, mines: &[Coord2]) -> Result<Self> {
        let mut board = Self::new(size)?;
        let mask = board.mine_mask(mines, |_| false)?;
        board.apply_mask(&mask, mines.len());
        board.compute_adjacency();
        Ok(board)
    }

    pub(crate) fn blank(size: Coord2) -> Self {
        Self {
            cells: Array2::default(size.to_nd_index()),
            mine_count: 0,
            revealed_count: 0,
            mines_placed: false,
            adjacency_computed: false,
            triggered_mine: None,
        }
    }

    pub fn size(&self) -> Coord2 {
        let (rows, cols) = self.cells.dim();
        (rows as Coord, cols as Coord)
    }

    pub fn rows(&self) -> Coord {
        self.size().0
    }

    pub fn cols(&self) -> Coord {
        self.size().1
    }

    pub fn total_cells(&self) -> CellCount {
        let (rows, cols) = self.size();
        mult(rows, cols)
    }

    pub fn mine_count(&self) -> CellCount {
        self.mine_count
    }

    pub fn safe_cell_count(&self) -> CellCount {
        self.total_cells() - self.mine_count
    }

    /// Revealed cells that are not mines.
    pub fn revealed_count(&self) -> CellCount {
        self.revealed_count
    }

    pub fn mines_placed(&self) -> bool {
        self.mines_placed
    }

    pub fn adjacency_computed(&self) -> bool {
        self.adjacency_computed
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.triggered_mine
    }

    /// Every non-mine cell is revealed.
    pub fn is_cleared(&self) -> bool {
        self.mines_placed && self.revealed_count == self.safe_cell_count()
    }

    pub fn validate_coords(&self, coords: Coord2) -> Result<Coord2> {
        if in_bounds(coords, self.size()) {
            Ok(coords)
        } else {
            Err(GameError::InvalidCoords)
        }
    }

    pub fn cell(&self, coords: Coord2) -> Option<Cell> {
        in_bounds(coords, self.size()).then(|| self[coords])
    }

    pub fn iter_neighbors(&self, coords: Coord2) -> NeighborIter {
        self.cells.iter_neighbors(coords)
    }

    /// Lays out `mines` mines with `generator`, keeping `safe_zone` around `safe` free.
    ///
    /// The board is left untouched when anything about the layout is rejected.
    pub fn place_mines<G: MineGenerator>(
        &mut self,
        safe: Coord2,
        mines: CellCount,
        safe_zone: SafeZone,
        generator: G,
    ) -> Result<()> {
        let safe = self.validate_coords(safe)?;
        if self.mines_placed {
            return Err(GameError::MinesAlreadyPlaced);
        }
        // counts are computed once, they would go stale under new mines
        if self.adjacency_computed {
            return Err(GameError::AdjacencyAlreadyComputed);
        }

        let request = PlacementRequest {
            size: self.size(),
            safe,
            mines,
            safe_zone,
        };
        request.check_feasible()?;

        let layout = generator.generate(&request)?;
        if layout.len() != usize::from(mines) {
            return Err(GameError::MineCountMismatch {
                expected: mines,
                actual: layout.len().try_into().unwrap_or(CellCount::MAX),
            });
        }
        let mask = self.mine_mask(&layout, |coords| safe_zone.excludes(safe, coords))?;
        self.apply_mask(&mask, layout.len());

        log::debug!(
            "Placed {} mines on {:?} board, safe cell {:?} ({:?})",
            mines,
            self.size(),
            safe,
            safe_zone
        );
        Ok(())
    }

    fn mine_mask(
        &self,
        mines: &[Coord2],
        forbidden: impl Fn(Coord2) -> bool,
    ) -> Result<Array2<bool>> {
        let mut mask: Array2<bool> = Array2::default(self.cells.dim());
        for &coords in mines {
            let coords = self.validate_coords(coords)?;
            if forbidden(coords) {
                return Err(GameError::MineInSafeZone);
            }
            let slot = &mut mask[coords.to_nd_index()];
            if *slot {
                return Err(GameError::DuplicateMine);
            }
            *slot = true;
        }
        Ok(mask)
    }

    fn apply_mask(&mut self, mask: &Array2<bool>, count: usize) {
        for (cell, &is_mine) in self.cells.iter_mut().zip(mask.iter()) {
            cell.is_mine = is_mine;
        }
        // a validated mask never holds more mines than there are cells
        self.mine_count = count as CellCount;
        self.mines_placed = true;
    }

    /// Stores the clipped 8-neighbor mine count in every cell; later calls do nothing.
    pub fn compute_adjacency(&mut self) {
        if self.adjacency_computed {
            log::trace!("Adjacency already computed");
            return;
        }

        let (rows, cols) = self.size();
        for row in 0..rows {
            for col in 0..cols {
                let count = self.adjacent_mine_count((row, col));
                self.cells[(row, col).to_nd_index()].adjacent_mines = count;
            }
        }
        self.adjacency_computed = true;
    }

    fn adjacent_mine_count(&self, coords: Coord2) -> u8 {
        // at most 8 neighbors
        self.iter_neighbors(coords)
            .filter(|&pos| self[pos].is_mine)
            .count() as u8
    }

    /// Reveals a single cell; revealing an already revealed cell is a no-op.
    pub fn reveal_cell(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.validate_coords(coords)?;
        self.check_adjacency()?;

        let cell = &mut self.cells[coords.to_nd_index()];
        if cell.revealed {
            return Ok(RevealOutcome::NoChange);
        }
        cell.revealed = true;

        if cell.is_mine {
            log::debug!("Mine revealed at {:?}", coords);
            self.triggered_mine = Some(coords);
            Ok(RevealOutcome::HitMine)
        } else {
            self.revealed_count += 1;
            Ok(RevealOutcome::Revealed)
        }
    }

    fn check_adjacency(&self) -> Result<()> {
        if self.adjacency_computed {
            Ok(())
        } else {
            Err(GameError::AdjacencyNotComputed)
        }
    }

    pub fn view(&self, mode: SnapshotMode) -> Array2<CellView> {
        self.cells.map(|&cell| match mode {
            SnapshotMode::Play => cell.play_view(),
            SnapshotMode::RevealAll => cell.reveal_all_view(),
        })
    }

    /// Coordinates of all revealed cells in row-major order.
    pub fn revealed_cells(&self) -> Vec<Coord2> {
        self.cells
            .indexed_iter()
            .filter(|(_, cell)| cell.revealed)
            .map(|((row, col), _)| (row as Coord, col as Coord))
            .collect()
    }
}

impl Index<Coord2> for Board {
    type Output = Cell;

    fn index(&self, coords: Coord2) -> &Self::Output {
        &self.cells[coords.to_nd_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec;

    fn adjacency_grid(board: &Board) -> Vec<Vec<u8>> {
        let (rows, cols) = board.size();
        (0..rows)
            .map(|row| (0..cols).map(|col| board[(row, col)].adjacent_mines).collect())
            .collect()
    }

    #[test]
    fn new_board_is_blank() {
        let board = Board::new((3, 4)).unwrap();
        assert_eq!(board.size(), (3, 4));
        assert_eq!(board.total_cells(), 12);
        assert_eq!(board.mine_count(), 0);
        assert!(!board.mines_placed());
        assert!(!board.adjacency_computed());
        assert_eq!(board.cell((2, 3)), Some(Cell::default()));
        assert_eq!(board.cell((3, 0)), None);
    }

    #[test]
    fn new_board_rejects_empty_dimensions() {
        assert_eq!(Board::new((0, 3)), Err(GameError::InvalidDimensions));
        assert_eq!(Board::new((3, 0)), Err(GameError::InvalidDimensions));
    }

    #[test]
    fn adjacency_with_center_mine() {
        let board = Board::from_mines((3, 3), &[(1, 1)]).unwrap();
        assert_eq!(
            adjacency_grid(&board),
            vec![vec![1, 1, 1], vec![1, 0, 1], vec![1, 1, 1]]
        );
    }

    #[test]
    fn adjacency_with_corner_mine() {
        let board = Board::from_mines((3, 3), &[(0, 0)]).unwrap();
        assert_eq!(
            adjacency_grid(&board),
            vec![vec![0, 1, 0], vec![1, 1, 0], vec![0, 0, 0]]
        );
    }

    #[test]
    fn adjacency_counts_every_surrounding_mine() {
        let mines = [(0, 0), (0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1), (2, 2)];
        let board = Board::from_mines((3, 3), &mines).unwrap();
        assert_eq!(board[(1, 1)].adjacent_mines, 8);
        assert_eq!(board[(0, 0)].adjacent_mines, 2);
        assert_eq!(board[(0, 1)].adjacent_mines, 4);
        assert_eq!(board.mine_count(), 8);
    }

    #[test]
    fn adjacency_matches_brute_force_on_random_layouts() {
        let size = (7, 5);
        for seed in 0..10 {
            let mut board = Board::new(size).unwrap();
            board
                .place_mines((3, 2), 12, SafeZone::Neighborhood, RandomMineGenerator::new(seed))
                .unwrap();
            board.compute_adjacency();

            for row in 0..size.0 {
                for col in 0..size.1 {
                    let mut expected = 0;
                    for d_row in -1i16..=1 {
                        for d_col in -1i16..=1 {
                            let (r, c) = (row as i16 + d_row, col as i16 + d_col);
                            if (d_row, d_col) == (0, 0)
                                || r < 0
                                || c < 0
                                || r >= size.0 as i16
                                || c >= size.1 as i16
                            {
                                continue;
                            }
                            if board[(r as Coord, c as Coord)].is_mine {
                                expected += 1;
                            }
                        }
                    }
                    assert_eq!(board[(row, col)].adjacent_mines, expected);
                }
            }
        }
    }

    #[test]
    fn placement_respects_count_and_safe_zone() {
        for (seed, safe) in [(1, (0, 0)), (2, (7, 7)), (3, (14, 3)), (4, (5, 14))] {
            let mut board = Board::new((15, 15)).unwrap();
            board
                .place_mines(safe, 40, SafeZone::Neighborhood, RandomMineGenerator::new(seed))
                .unwrap();

            let mines: Vec<_> = board
                .cells
                .indexed_iter()
                .filter(|(_, cell)| cell.is_mine)
                .map(|((row, col), _)| (row as Coord, col as Coord))
                .collect();
            assert_eq!(mines.len(), 40);
            assert_eq!(board.mine_count(), 40);
            assert!(mines.iter().all(|&pos| !SafeZone::Neighborhood.excludes(safe, pos)));
        }
    }

    #[test]
    fn placement_runs_only_once() {
        let mut board = Board::new((5, 5)).unwrap();
        board
            .place_mines((0, 0), 3, SafeZone::Neighborhood, RandomMineGenerator::new(0))
            .unwrap();
        assert_eq!(
            board.place_mines((0, 0), 3, SafeZone::Neighborhood, RandomMineGenerator::new(0)),
            Err(GameError::MinesAlreadyPlaced)
        );
    }

    #[test]
    fn infeasible_placement_leaves_board_untouched() {
        let mut board = Board::new((3, 3)).unwrap();
        let before = board.clone();
        assert_eq!(
            board.place_mines((1, 1), 1, SafeZone::Neighborhood, RandomMineGenerator::new(0)),
            Err(GameError::MineCountInfeasible {
                requested: 1,
                available: 0
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn fixed_layout_is_validated() {
        let zone = SafeZone::Neighborhood;
        let mut board = Board::new((4, 4)).unwrap();
        assert_eq!(
            board.place_mines((0, 0), 1, zone, FixedMineGenerator::new([(1, 1)])),
            Err(GameError::MineInSafeZone)
        );
        assert_eq!(
            board.place_mines((0, 0), 2, zone, FixedMineGenerator::new([(3, 3), (3, 3)])),
            Err(GameError::DuplicateMine)
        );
        assert_eq!(
            board.place_mines((0, 0), 1, zone, FixedMineGenerator::new([(4, 0)])),
            Err(GameError::InvalidCoords)
        );
        assert_eq!(
            board.place_mines((0, 0), 2, zone, FixedMineGenerator::new([(3, 3)])),
            Err(GameError::MineCountMismatch {
                expected: 2,
                actual: 1
            })
        );
        assert!(!board.mines_placed());

        board
            .place_mines((0, 0), 2, zone, FixedMineGenerator::new([(3, 3), (2, 3)]))
            .unwrap();
        assert_eq!(board.mine_count(), 2);
    }

    #[test]
    fn cross_band_placement_avoids_rows_and_columns() {
        let mut board = Board::new((8, 8)).unwrap();
        board
            .place_mines((4, 4), 20, SafeZone::CrossBand, RandomMineGenerator::new(9))
            .unwrap();
        for row in 0..8 {
            for col in 0..8 {
                if board[(row, col)].is_mine {
                    assert!(row.abs_diff(4) > 1 && col.abs_diff(4) > 1);
                }
            }
        }
    }

    #[test]
    fn placement_after_adjacency_is_rejected() {
        let mut board = Board::new((3, 3)).unwrap();
        board.compute_adjacency();

        assert_eq!(
            board.place_mines(
                (0, 0),
                1,
                SafeZone::Neighborhood,
                FixedMineGenerator::new([(2, 2)])
            ),
            Err(GameError::AdjacencyAlreadyComputed)
        );
        assert!(!board.mines_placed());
        assert_eq!(board.mine_count(), 0);
        assert!(!board[(2, 2)].is_mine);
        assert_eq!(board[(1, 1)].adjacent_mines, 0);
    }

    #[test]
    fn adjacency_after_placement_counts_new_mines() {
        let mut board = Board::new((3, 3)).unwrap();
        board
            .place_mines(
                (0, 0),
                1,
                SafeZone::Neighborhood,
                FixedMineGenerator::new([(2, 2)]),
            )
            .unwrap();
        board.compute_adjacency();
        assert_eq!(board[(1, 1)].adjacent_mines, 1);
    }

    #[test]
    fn reveal_requires_adjacency() {
        let mut board = Board::new((2, 2)).unwrap();
        assert_eq!(board.reveal_cell((0, 0)), Err(GameError::AdjacencyNotComputed));
    }

    #[test]
    fn reveal_cell_reports_mine_and_is_idempotent() {
        let mut board = Board::from_mines((2, 2), &[(0, 0)]).unwrap();

        assert_eq!(board.reveal_cell((1, 1)), Ok(RevealOutcome::Revealed));
        assert_eq!(board.reveal_cell((1, 1)), Ok(RevealOutcome::NoChange));
        assert_eq!(board.revealed_count(), 1);

        assert_eq!(board.reveal_cell((0, 0)), Ok(RevealOutcome::HitMine));
        assert_eq!(board.triggered_mine(), Some((0, 0)));
        assert_eq!(board.revealed_count(), 1);
        assert_eq!(board.revealed_cells(), vec![(0, 0), (1, 1)]);
    }

    #[test]
    fn reveal_cell_rejects_out_of_range() {
        let mut board = Board::from_mines((2, 2), &[]).unwrap();
        assert_eq!(board.reveal_cell((2, 0)), Err(GameError::InvalidCoords));
        assert_eq!(board.reveal_cell((0, 2)), Err(GameError::InvalidCoords));
    }

    #[test]
    fn board_is_cleared_after_last_safe_cell() {
        let mut board = Board::from_mines((1, 3), &[(0, 1)]).unwrap();
        board.reveal_cell((0, 0)).unwrap();
        assert!(!board.is_cleared());
        board.reveal_cell((0, 2)).unwrap();
        assert!(board.is_cleared());
    }

    #[test]
    fn views_expose_hidden_contents_only_in_reveal_all() {
        let mut board = Board::from_mines((2, 2), &[(0, 0)]).unwrap();
        board.reveal_cell((1, 1)).unwrap();

        let play = board.view(SnapshotMode::Play);
        assert_eq!(play[[0, 0]], CellView::Hidden);
        assert_eq!(play[[1, 1]], CellView::Open(1));

        let all = board.view(SnapshotMode::RevealAll);
        assert_eq!(all[[0, 0]], CellView::Mine);
        assert_eq!(all[[0, 1]], CellView::Open(1));
    }
}
