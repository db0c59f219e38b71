use std::num::ParseIntError;
use std::str::FromStr;

use minefield_core::{CellCount, CellIndex, Coord, Coord2};
use thiserror::Error;

pub const HELP: &str = "\
commands:
  r <index>        reveal the cell at a linear index
  r <x> <y>        reveal the cell at a column and row
  g                new board with the current parameters
  g <w> <h> <m>    new board with new parameters
  p                print the board
  h                show this help
  q                quit";

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Command {
    Reveal(CellIndex),
    RevealAt(Coord2),
    Generate(Option<(Coord, Coord, CellCount)>),
    Print,
    Help,
    Quit,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    #[error("Empty command")]
    Empty,
    #[error("Unknown command {0:?}, type h for help")]
    Unknown(String),
    #[error("Wrong number of arguments for {0:?}")]
    Arity(String),
    #[error("Invalid number: {0}")]
    Number(#[from] ParseIntError),
}

impl FromStr for Command {
    type Err = CommandError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let name = words.next().ok_or(CommandError::Empty)?;
        let args: Vec<&str> = words.collect();

        match (name, args.as_slice()) {
            ("r" | "reveal", [index]) => Ok(Self::Reveal(index.parse()?)),
            ("r" | "reveal", [x, y]) => Ok(Self::RevealAt((x.parse()?, y.parse()?))),
            ("g" | "generate", []) => Ok(Self::Generate(None)),
            ("g" | "generate", [w, h, m]) => {
                Ok(Self::Generate(Some((w.parse()?, h.parse()?, m.parse()?))))
            }
            ("p" | "print", []) => Ok(Self::Print),
            ("h" | "help", []) => Ok(Self::Help),
            ("q" | "quit", []) => Ok(Self::Quit),
            ("r" | "reveal" | "g" | "generate" | "p" | "print" | "h" | "help" | "q" | "quit", _) => {
                Err(CommandError::Arity(name.to_owned()))
            }
            _ => Err(CommandError::Unknown(name.to_owned())),
        }
    }
}
