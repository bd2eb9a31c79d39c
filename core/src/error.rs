use thiserror::Error;

use crate::CellCount;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board needs at least one row and one column")]
    InvalidDimensions,
    #[error("Cannot place {requested} mines, only {available} cells are eligible")]
    MineCountInfeasible {
        requested: CellCount,
        available: CellCount,
    },
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Mine layout places two mines on the same cell")]
    DuplicateMine,
    #[error("Mine layout places a mine inside the safe zone")]
    MineInSafeZone,
    #[error("Mine layout has {actual} mines, expected {expected}")]
    MineCountMismatch {
        expected: CellCount,
        actual: CellCount,
    },
    #[error("Mines were already placed on this board")]
    MinesAlreadyPlaced,
    #[error("Adjacency counts were computed before the mines were placed")]
    AdjacencyAlreadyComputed,
    #[error("Adjacency counts have not been computed yet")]
    AdjacencyNotComputed,
    #[error("Flood fill cannot start on a mine")]
    UnsafeStart,
    #[error("Game has not been started")]
    NotStarted,
    #[error("Game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
