use std::str::FromStr;

use sweeper_core::{Coord, Coord2};
use thiserror::Error;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Start,
    Click(Coord2),
    Reset,
    Show,
    Json,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseCommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command {0:?}, type `help` for a list")]
    Unknown(String),
    #[error("Expected `<row> <col>`")]
    MissingCoords,
    #[error("Invalid coordinate {0:?}")]
    InvalidCoord(String),
}

pub const HELP: &str = "\
commands:
  start              leave the menu and start a game
  <row> <col>        click a cell (also `click <row> <col>`)
  reset              throw the board away and start over
  show               draw the board
  json               print the board snapshot as JSON
  help               this text
  quit               exit";

fn parse_coord(word: &str) -> Result<Coord, ParseCommandError> {
    word.parse()
        .map_err(|_| ParseCommandError::InvalidCoord(word.to_owned()))
}

fn parse_click<'a>(mut words: impl Iterator<Item = &'a str>) -> Result<Command, ParseCommandError> {
    let row = words.next().ok_or(ParseCommandError::MissingCoords)?;
    let col = words.next().ok_or(ParseCommandError::MissingCoords)?;
    Ok(Command::Click((parse_coord(row)?, parse_coord(col)?)))
}

impl FromStr for Command {
    type Err = ParseCommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let first = words.next().ok_or(ParseCommandError::Empty)?;

        Ok(match first.to_ascii_lowercase().as_str() {
            "start" | "s" => Command::Start,
            "click" | "c" => parse_click(words)?,
            "reset" | "r" => Command::Reset,
            "show" => Command::Show,
            "json" => Command::Json,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            _ if first.starts_with(|c: char| c.is_ascii_digit()) => {
                parse_click(line.split_whitespace())?
            }
            _ => return Err(ParseCommandError::Unknown(first.to_owned())),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_bare_coordinates() {
        assert_eq!("3 4".parse::<Command>(), Ok(Command::Click((3, 4))));
        assert_eq!("  0\t12 ".parse::<Command>(), Ok(Command::Click((0, 12))));
        assert_eq!("click 1 2".parse::<Command>(), Ok(Command::Click((1, 2))));
    }

    #[test]
    fn parses_keywords() {
        assert_eq!("start".parse::<Command>(), Ok(Command::Start));
        assert_eq!("RESET".parse::<Command>(), Ok(Command::Reset));
        assert_eq!("q".parse::<Command>(), Ok(Command::Quit));
        assert_eq!("json".parse::<Command>(), Ok(Command::Json));
    }

    #[test]
    fn reports_bad_input() {
        assert_eq!("".parse::<Command>(), Err(ParseCommandError::Empty));
        assert_eq!(
            "flag 1 1".parse::<Command>(),
            Err(ParseCommandError::Unknown("flag".into()))
        );
        assert_eq!("click 1".parse::<Command>(), Err(ParseCommandError::MissingCoords));
        assert_eq!(
            "3 x".parse::<Command>(),
            Err(ParseCommandError::InvalidCoord("x".into()))
        );
        assert_eq!(
            "300 1".parse::<Command>(),
            Err(ParseCommandError::InvalidCoord("300".into()))
        );
    }
}
