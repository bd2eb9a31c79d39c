use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use clap::ValueEnum;
use sweeper_core::{CellCount, Coord, GameConfig, SafeZone};

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SafeZoneArg {
    /// The 3×3 block around the first click
    Neighborhood,
    /// Every row and column within one of the first click
    CrossBand,
}

impl From<SafeZoneArg> for SafeZone {
    fn from(arg: SafeZoneArg) -> Self {
        match arg {
            SafeZoneArg::Neighborhood => SafeZone::Neighborhood,
            SafeZoneArg::CrossBand => SafeZone::CrossBand,
        }
    }
}

/// Command-line values that take precedence over the config file.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Overrides {
    pub rows: Option<Coord>,
    pub cols: Option<Coord>,
    pub mines: Option<CellCount>,
    pub safe_zone: Option<SafeZoneArg>,
    pub open_zero_regions: bool,
}

impl Overrides {
    pub fn apply(&self, mut config: GameConfig) -> GameConfig {
        if let Some(rows) = self.rows {
            config.rows = rows;
        }
        if let Some(cols) = self.cols {
            config.cols = cols;
        }
        if let Some(mines) = self.mines {
            config.mines = mines;
        }
        if let Some(safe_zone) = self.safe_zone {
            config.safe_zone = safe_zone.into();
        }
        if self.open_zero_regions {
            config.open_zero_regions = true;
        }
        config
    }
}

pub fn parse_config(text: &str) -> Result<GameConfig> {
    toml::from_str(text).context("Invalid game config")
}

/// Defaults, then the file at `path` if any, then `overrides`.
pub fn load_config(path: Option<&Path>, overrides: &Overrides) -> Result<GameConfig> {
    let base = match path {
        Some(path) => {
            let text = fs::read_to_string(path)
                .with_context(|| format!("Could not read config file {}", path.display()))?;
            let config = parse_config(&text)?;
            log::debug!("Loaded config from {}: {:?}", path.display(), config);
            config
        }
        None => GameConfig::default(),
    };

    let config = overrides.apply(base);
    config.validate().context("Unusable game config")?;
    Ok(config)
}
