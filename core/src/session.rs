use ndarray::Array2;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use crate::*;

#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameState {
    /// Waiting for the player to start a game.
    #[default]
    Menu,
    /// Board is blank, the next click places the mines.
    Start,
    Game,
    Fail,
    Win,
}

impl GameState {
    pub const fn is_playing(self) -> bool {
        matches!(self, Self::Start | Self::Game)
    }

    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Fail | Self::Win)
    }
}

/// Read-only picture of a session for the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub size: Coord2,
    pub state: GameState,
    pub mines: CellCount,
    pub cells: Array2<CellView>,
}

impl Snapshot {
    pub fn cell_at(&self, coords: Coord2) -> CellView {
        self.cells[coords.to_nd_index()]
    }
}

/// One player's game: the board plus the state machine sequencing placement
/// and reveals on it.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: GameConfig,
    board: Board,
    state: GameState,
    rng: SmallRng,
}

impl GameSession {
    /// `seed` determines the layouts of every game played in this session.
    pub fn new(config: GameConfig, seed: u64) -> Result<Self> {
        use rand::prelude::*;

        config.validate()?;
        Ok(Self {
            config,
            board: Board::blank(config.size()),
            state: GameState::Menu,
            rng: SmallRng::seed_from_u64(seed),
        })
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn triggered_mine(&self) -> Option<Coord2> {
        self.board.triggered_mine()
    }

    pub fn snapshot(&self, mode: SnapshotMode) -> Snapshot {
        Snapshot {
            size: self.board.size(),
            state: self.state,
            mines: self.config.mines,
            cells: self.board.view(mode),
        }
    }

    /// Leaves the menu with a fresh board. Returns whether anything changed.
    pub fn start(&mut self) -> bool {
        if self.state != GameState::Menu {
            return false;
        }
        self.restart();
        true
    }

    /// Throws the current board away and waits for a new first click.
    pub fn restart(&mut self) {
        self.board = Board::blank(self.config.size());
        self.set_state(GameState::Start);
    }

    pub fn on_reset(&mut self) {
        self.restart();
    }

    pub fn on_board_click(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let coords = self.board.validate_coords(coords).inspect_err(|_| {
            log::warn!("Click outside the board at {:?}", coords);
        })?;

        match self.state {
            GameState::Menu => {
                log::warn!("Board click at {:?} before the game started", coords);
                Err(GameError::NotStarted)
            }
            GameState::Start => self.first_click(coords),
            GameState::Game => self.click(coords),
            GameState::Fail | GameState::Win => Err(GameError::AlreadyEnded),
        }
    }

    fn first_click(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        use rand::prelude::*;

        let seed = self.rng.random();
        self.board.place_mines(
            coords,
            self.config.mines,
            self.config.safe_zone,
            RandomMineGenerator::new(seed),
        )?;
        self.board.compute_adjacency();
        self.board.reveal_area(coords)?;
        self.set_state(GameState::Game);
        Ok(self.check_won())
    }

    fn click(&mut self, coords: Coord2) -> Result<RevealOutcome> {
        let cell = self.board[coords];
        if cell.revealed {
            return Ok(RevealOutcome::NoChange);
        }

        if self.config.open_zero_regions && !cell.is_mine && cell.adjacent_mines == 0 {
            self.board.reveal_area(coords)?;
            return Ok(self.check_won());
        }

        match self.board.reveal_cell(coords)? {
            RevealOutcome::HitMine => {
                self.set_state(GameState::Fail);
                Ok(RevealOutcome::HitMine)
            }
            RevealOutcome::Revealed => Ok(self.check_won()),
            outcome => Ok(outcome),
        }
    }

    fn check_won(&mut self) -> RevealOutcome {
        if self.board.is_cleared() {
            self.set_state(GameState::Win);
            RevealOutcome::Won
        } else {
            RevealOutcome::Revealed
        }
    }

    fn set_state(&mut self, state: GameState) {
        log::debug!("Game state {:?} -> {:?}", self.state, state);
        self.state = state;
    }
}
