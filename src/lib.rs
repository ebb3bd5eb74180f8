use std::{
    error,
    fmt::Display,
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;

mod grid;
mod report;
mod search;

pub use grid::{Direction, Map, Position, Symbol, TokenGrid};
pub use report::Report;
pub use search::{Trail, Visits};

pub const DEFAULT_DELIMITER: char = ',';

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    MalformedGrid(char),
    MissingStart,
    MissingEnd,
    DuplicateStart(Position, Position),
    DuplicateEnd(Position, Position),
    InvalidCell(String, Position),
    PathImpossible,
    CorruptPathState(Position),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::MalformedGrid(',') => write!(
                f,
                "File must be a file of comma-separated text representing an NxN grid."
            ),
            Error::MalformedGrid(delimiter) => write!(
                f,
                "File must be a file of '{}'-separated text representing an NxN grid.",
                delimiter
            ),
            Error::MissingStart => write!(f, "There is no start '{}'.", Symbol::Start),
            Error::MissingEnd => write!(f, "There is no destination '{}'.", Symbol::End),
            Error::DuplicateStart(first_pos, pos) => write!(
                f,
                "Found more than one start '{}', at {} and {}.",
                Symbol::Start,
                first_pos,
                pos
            ),
            Error::DuplicateEnd(first_pos, pos) => write!(
                f,
                "Found more than one destination '{}', at {} and {}.",
                Symbol::End,
                first_pos,
                pos
            ),
            Error::InvalidCell(token, pos) => write!(
                f,
                "Found '{}' at {}. Only {}, {}, {}, and {} are permitted.",
                token,
                pos,
                Symbol::Start,
                Symbol::End,
                Symbol::Blocked,
                Symbol::Empty
            ),
            Error::PathImpossible => write!(
                f,
                "It is impossible to reach {} from {}.",
                Symbol::End,
                Symbol::Start
            ),
            Error::CorruptPathState(pos) => write!(
                f,
                "Back-references from {} don't lead back to the start.",
                pos
            ),
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    /// Grid file, one row per line.
    pub input_path: PathBuf,
    /// Character separating the cells of a row.
    #[arg(short, long, default_value_t = DEFAULT_DELIMITER)]
    pub delimiter: char,
}

pub fn read_grid<P: AsRef<Path>>(path: P, delimiter: char) -> Result<Map> {
    let text = fs::read_to_string(&path).with_context(|| {
        format!(
            "Failed to read grid from given file({}).",
            path.as_ref().display()
        )
    })?;
    let tokens = TokenGrid::parse(&text, delimiter)?;
    log::debug!(
        "Loaded {0}x{0} grid from {1}.",
        tokens.side_len(),
        path.as_ref().display()
    );

    Ok(Map::from_tokens(&tokens)?)
}

pub fn find_path<P: AsRef<Path>>(path: P, delimiter: char) -> Result<Report> {
    let map = read_grid(path, delimiter)?;
    let trail = map.search().ok_or(Error::PathImpossible)?;
    let visits = trail.reconstruct()?;

    Ok(Report::new(&map, visits, delimiter))
}
