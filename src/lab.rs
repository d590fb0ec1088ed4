use std::{collections::HashSet, fmt::Display, ops::Deref};

use tracing::{debug, warn};

use crate::{Error, Guard, Patrol, PatrolOutcome};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
}

impl Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Direction::Up => write!(f, "^"),
            Direction::Right => write!(f, ">"),
            Direction::Down => write!(f, "v"),
            Direction::Left => write!(f, "<"),
        }
    }
}

impl Direction {
    pub fn turn_right(self) -> Self {
        match self {
            Direction::Up => Direction::Right,
            Direction::Right => Direction::Down,
            Direction::Down => Direction::Left,
            Direction::Left => Direction::Up,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub r: usize,
    pub c: usize,
}

impl Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.r, self.c)
    }
}

impl Position {
    pub fn new(r: usize, c: usize) -> Self {
        Self { r, c }
    }

    /// Neighbor one step along `dir`, `None` when it would leave the top or left edge.
    pub fn along(&self, dir: Direction) -> Option<Position> {
        match dir {
            Direction::Up if self.r > 0 => Some(Self::new(self.r - 1, self.c)),
            Direction::Right => Some(Self::new(self.r, self.c + 1)),
            Direction::Down => Some(Self::new(self.r + 1, self.c)),
            Direction::Left if self.c > 0 => Some(Self::new(self.r, self.c - 1)),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tile {
    Empty,
    Obstacle,
    GuardStart,
}

impl Display for Tile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let tile_char = match self {
            Tile::Empty => '.',
            Tile::Obstacle => '#',
            Tile::GuardStart => '^',
        };

        write!(f, "{}", tile_char)
    }
}

impl Tile {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Tile::Empty),
            '#' => Some(Tile::Obstacle),
            '^' => Some(Tile::GuardStart),
            _ => None,
        }
    }

    pub fn is_obstacle(&self) -> bool {
        matches!(self, Tile::Obstacle)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Laboratory {
    tiles: Vec<Tile>,
    row_n: usize,
    col_n: usize,
    guard_pos: Position,
}

impl Display for Laboratory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.tiles.chunks(self.col_n.max(1)) {
            for tile in row {
                write!(f, "{}", tile)?;
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

impl Laboratory {
    pub fn row_n(&self) -> usize {
        self.row_n
    }

    pub fn col_n(&self) -> usize {
        self.col_n
    }

    /// The guard as it stands before patrolling: on its start tile, facing up.
    pub fn guard(&self) -> Guard {
        Guard::new(self.guard_pos, Direction::Up)
    }

    pub fn is_inside(&self, pos: &Position) -> bool {
        pos.r < self.row_n && pos.c < self.col_n
    }

    pub fn tile(&self, pos: &Position) -> Option<&Tile> {
        if self.is_inside(pos) {
            self.tiles.get(pos.r * self.col_n + pos.c)
        } else {
            None
        }
    }

    fn tile_mut(&mut self, pos: &Position) -> Option<&mut Tile> {
        if self.is_inside(pos) {
            self.tiles.get_mut(pos.r * self.col_n + pos.c)
        } else {
            None
        }
    }

    pub fn is_obstructed(&self, pos: &Position) -> bool {
        self.tile(pos).is_some_and(|tile| tile.is_obstacle())
    }

    /// Patrol from the guard's start without any extra obstacle.
    pub fn patrol(&self) -> PatrolOutcome {
        Patrol::new(self, self.guard()).run()
    }

    /// Put an obstacle on `pos` until the returned probe is dropped.
    pub fn place_obstacle(&mut self, pos: &Position) -> Result<ObstacleProbe<'_>, Error> {
        if *pos == self.guard_pos {
            return Err(Error::ObstacleOnGuard(*pos));
        }

        let tile = self.tile_mut(pos).ok_or(Error::OutsideLab(*pos))?;
        if tile.is_obstacle() {
            return Err(Error::AlreadyObstructed(*pos));
        }

        let replaced = *tile;
        *tile = Tile::Obstacle;
        Ok(ObstacleProbe {
            lab: self,
            pos: *pos,
            replaced,
        })
    }
}

/// A laboratory with one temporary obstacle, restored on drop.
pub struct ObstacleProbe<'a> {
    lab: &'a mut Laboratory,
    pos: Position,
    replaced: Tile,
}

impl ObstacleProbe<'_> {
    pub fn pos(&self) -> &Position {
        &self.pos
    }
}

impl Deref for ObstacleProbe<'_> {
    type Target = Laboratory;

    fn deref(&self) -> &Self::Target {
        self.lab
    }
}

impl Drop for ObstacleProbe<'_> {
    fn drop(&mut self) {
        let pos = self.pos;
        if let Some(tile) = self.lab.tile_mut(&pos) {
            *tile = self.replaced;
        }
    }
}

/// Map text with every position of a patrol marked as `X`.
pub struct PathView<'a> {
    lab: &'a Laboratory,
    visited: HashSet<Position>,
}

impl<'a> PathView<'a> {
    pub fn new(lab: &'a Laboratory, outcome: &PatrolOutcome) -> Self {
        Self {
            lab,
            visited: outcome.positions(),
        }
    }
}

impl Display for PathView<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..self.lab.row_n {
            for c in 0..self.lab.col_n {
                let pos = Position::new(r, c);
                if self.visited.contains(&pos) {
                    write!(f, "X")?;
                } else if let Some(tile) = self.lab.tile(&pos) {
                    write!(f, "{}", tile)?;
                }
            }
            writeln!(f)?;
        }

        Ok(())
    }
}

pub(crate) struct LaboratoryBuilder {
    tiles: Vec<Tile>,
    row_n: usize,
    col_n: Option<usize>,
    guard_pos: Option<Position>,
}

impl LaboratoryBuilder {
    pub fn new() -> Self {
        Self {
            tiles: Vec::new(),
            row_n: 0,
            col_n: None,
            guard_pos: None,
        }
    }

    pub fn add_row(&mut self, row_text: &str) -> Result<(), Error> {
        let row = row_text
            .chars()
            .filter_map(|c| {
                let tile = Tile::from_char(c);
                if tile.is_none() {
                    debug!(row = self.row_n, ch = ?c, "Ignored unknown character");
                }
                tile
            })
            .collect::<Vec<_>>();
        if row.is_empty() {
            return Ok(());
        }

        let this_col_n = row.len();
        let expect_col_n = *self.col_n.get_or_insert(this_col_n);
        if expect_col_n != this_col_n {
            return Err(Error::InconsistentRow(self.row_n, expect_col_n, this_col_n));
        }

        for (ind, tile) in row.into_iter().enumerate() {
            if tile == Tile::GuardStart {
                let pos = Position::new(self.row_n, ind);
                if let Some(first_pos) = &self.guard_pos {
                    warn!(first = %first_pos, ignored = %pos, "Found multiple guards, keep the first one");
                    self.tiles.push(Tile::Empty);
                    continue;
                }

                self.guard_pos = Some(pos);
            }
            self.tiles.push(tile);
        }
        self.row_n += 1;

        Ok(())
    }

    pub fn build(self) -> Result<Laboratory, Error> {
        let guard_pos = self.guard_pos.ok_or(Error::NoGuard)?;
        debug!(
            row_n = self.row_n,
            col_n = self.col_n.unwrap_or(0),
            guard = %guard_pos,
            "Built laboratory"
        );

        Ok(Laboratory {
            tiles: self.tiles,
            row_n: self.row_n,
            col_n: self.col_n.unwrap_or(0),
            guard_pos,
        })
    }
}
