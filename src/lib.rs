use std::{
    error,
    fmt::Display,
    fs::File,
    io::{BufRead, BufReader},
    path::{Path, PathBuf},
    str::FromStr,
};

use anyhow::{Context, Result};
use clap::Parser;

mod lab;
pub mod logging;
mod patrol;
pub mod sweep;

pub use lab::{Direction, Laboratory, ObstacleProbe, PathView, Position, Tile};
pub use patrol::{Guard, Patrol, PatrolEnd, PatrolOutcome, VisitRecord};

use lab::LaboratoryBuilder;

#[derive(Debug)]
pub enum Error {
    InconsistentRow(usize, usize, usize), // (row index, expect column count, given column count).
    NoGuard,
    OutsideLab(Position),
    ObstacleOnGuard(Position),
    AlreadyObstructed(Position),
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Error::InconsistentRow(row_ind, expect_col_n, this_col_n) => write!(
                f,
                "Expect {} columns in row {}, given {}.",
                expect_col_n, row_ind, this_col_n
            ),
            Error::NoGuard => write!(f, "There's no guard in given laboratory, but expect one."),
            Error::OutsideLab(pos) => {
                write!(f, "Position{} is outside of given laboratory.", pos)
            }
            Error::ObstacleOnGuard(pos) => write!(
                f,
                "Can't place obstacle at position{}, the guard starts there.",
                pos
            ),
            Error::AlreadyObstructed(pos) => {
                write!(f, "Position{} is already occupied by an obstacle.", pos)
            }
        }
    }
}

impl error::Error for Error {}

#[derive(Debug, Parser)]
pub struct CLIArgs {
    pub input_path: PathBuf,
    /// Search loop obstructions one by one on a single map, instead of in parallel.
    #[arg(long)]
    pub sequential: bool,
}

impl FromStr for Laboratory {
    type Err = Error;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let mut builder = LaboratoryBuilder::new();
        for line in s.lines() {
            builder.add_row(line)?;
        }

        builder.build()
    }
}

pub fn read_lab<P: AsRef<Path>>(path: P) -> Result<Laboratory> {
    let file = File::open(&path)
        .with_context(|| format!("Failed to open given file({}).", path.as_ref().display()))?;
    let reader = BufReader::new(file);
    let mut builder = LaboratoryBuilder::new();
    for (ind, line) in reader.lines().enumerate() {
        let line = line.with_context(|| {
            format!(
                "Failed to read line {} from given file({}).",
                ind + 1,
                path.as_ref().display()
            )
        })?;
        builder.add_row(line.as_str())?;
    }

    Ok(builder.build()?)
}
