use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use sweeper_core::*;

use command::{Command, HELP};
use config::{Overrides, SafeZoneArg};

mod command;
mod config;
mod render;

#[derive(Parser, Debug)]
#[command(version, about = "Play minesweeper in the terminal", long_about = None)]
struct Args {
    /// What log level to use
    #[command(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// Force a seed instead of random
    #[arg(short, long)]
    seed: Option<u64>,

    /// TOML file with game settings
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[arg(long)]
    rows: Option<Coord>,

    #[arg(long)]
    cols: Option<Coord>,

    #[arg(long)]
    mines: Option<CellCount>,

    /// Cells kept free of mines around the first click
    #[arg(long, value_enum)]
    safe_zone: Option<SafeZoneArg>,

    /// Clicking a zero cell opens its whole region
    #[arg(long)]
    open_zero_regions: bool,
}

impl Args {
    fn overrides(&self) -> Overrides {
        Overrides {
            rows: self.rows,
            cols: self.cols,
            mines: self.mines,
            safe_zone: self.safe_zone,
            open_zero_regions: self.open_zero_regions,
        }
    }
}

fn random_seed() -> u64 {
    rand::random()
}

/// Runs one command, returns `false` when the player wants to leave.
fn execute(session: &mut GameSession, command: Command, out: &mut impl Write) -> Result<bool> {
    match command {
        Command::Start => {
            if !session.start() {
                writeln!(out, "Already started, use `reset` for a new game")?;
            }
        }
        Command::Click(coords) => {
            // the menu button belongs to the UI, pressing a cell implies it
            if session.state() == GameState::Menu {
                session.start();
            }
            match session.on_board_click(coords) {
                Ok(outcome) => log::debug!("click {:?}: {:?}", coords, outcome),
                Err(err) => {
                    writeln!(out, "{}", err)?;
                    return Ok(true);
                }
            }
        }
        Command::Reset => session.on_reset(),
        Command::Show => {}
        Command::Json => {
            let snapshot = session.snapshot(SnapshotMode::Play);
            writeln!(out, "{}", serde_json::to_string(&snapshot)?)?;
            return Ok(true);
        }
        Command::Help => {
            writeln!(out, "{}", HELP)?;
            return Ok(true);
        }
        Command::Quit => return Ok(false),
    }

    let mode = if session.state().is_finished() {
        SnapshotMode::RevealAll
    } else {
        SnapshotMode::Play
    };
    writeln!(out, "{}", render::render(&session.snapshot(mode)))?;
    Ok(true)
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::new()
        .filter_level(args.verbose.log_level_filter())
        .init();

    let config = config::load_config(args.config.as_deref(), &args.overrides())?;
    let seed = args.seed.unwrap_or_else(random_seed);
    log::debug!("seed: {}, config: {:?}", seed, config);

    let mut session = GameSession::new(config, seed)?;

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{}", render::render(&session.snapshot(SnapshotMode::Play)))?;
    writeln!(stdout, "{}", HELP)?;

    for line in stdin.lock().lines() {
        let line = line.context("Could not read from stdin")?;
        if line.trim().is_empty() {
            continue;
        }
        let keep_going = match line.parse::<Command>() {
            Ok(command) => execute(&mut session, command, &mut stdout)?,
            Err(err) => {
                writeln!(stdout, "{}", err)?;
                true
            }
        };
        stdout.flush()?;
        if !keep_going {
            break;
        }
    }

    log::debug!("Bye");
    Ok(())
}
