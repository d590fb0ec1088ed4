use std::{
    collections::{HashMap, HashSet},
    fmt::Display,
};

use tracing::trace;

use crate::{Direction, Laboratory, Position};

/// Where the guard stands and which way it faces, the unit of loop detection.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guard {
    pos: Position,
    dir: Direction,
}

impl Display for Guard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.dir, self.pos())
    }
}

impl Guard {
    pub fn new(pos: Position, dir: Direction) -> Self {
        Self { pos, dir }
    }

    pub fn pos(&self) -> &Position {
        &self.pos
    }

    pub fn dir(&self) -> Direction {
        self.dir
    }

    pub fn ahead_pos(&self) -> Option<Position> {
        self.pos.along(self.dir)
    }

    pub fn turn_right(&mut self) {
        self.dir = self.dir.turn_right();
    }
}

#[derive(Debug, Clone, Default)]
pub struct VisitRecord {
    counts: HashMap<Guard, usize>,
}

impl VisitRecord {
    fn record(&mut self, guard: &Guard) {
        *self.counts.entry(guard.clone()).or_insert(0) += 1;
    }

    pub fn contains(&self, guard: &Guard) -> bool {
        self.counts.contains_key(guard)
    }

    pub fn count(&self, guard: &Guard) -> usize {
        self.counts.get(guard).copied().unwrap_or(0)
    }

    /// Count of distinct (position, direction) states.
    pub fn state_n(&self) -> usize {
        self.counts.len()
    }

    pub fn positions(&self) -> HashSet<Position> {
        self.counts.keys().map(|guard| *guard.pos()).collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatrolEnd {
    LeftLab,
    Looped,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Probe,
    Turn,
    Advance(Position),
}

#[derive(Debug, Clone)]
pub struct PatrolOutcome {
    visits: VisitRecord,
    end: PatrolEnd,
    step_n: usize,
}

impl PatrolOutcome {
    pub fn visits(&self) -> &VisitRecord {
        &self.visits
    }

    pub fn end(&self) -> PatrolEnd {
        self.end
    }

    pub fn is_loop(&self) -> bool {
        self.end == PatrolEnd::Looped
    }

    /// Count of moves from one tile to another, turns excluded.
    pub fn step_n(&self) -> usize {
        self.step_n
    }

    pub fn positions(&self) -> HashSet<Position> {
        self.visits.positions()
    }

    pub fn distinct_position_n(&self) -> usize {
        self.positions().len()
    }
}

/// One guard walking through a laboratory until it leaves or repeats itself.
pub struct Patrol<'a> {
    lab: &'a Laboratory,
    guard: Guard,
    phase: Phase,
    visits: VisitRecord,
    extra_obstacle: Option<Position>,
    step_n: usize,
    turn_n: usize, // Turns since the last move.
    end: Option<PatrolEnd>,
}

impl<'a> Patrol<'a> {
    pub fn new(lab: &'a Laboratory, start: Guard) -> Self {
        let mut visits = VisitRecord::default();
        visits.record(&start);
        Self {
            lab,
            guard: start,
            phase: Phase::Probe,
            visits,
            extra_obstacle: None,
            step_n: 0,
            turn_n: 0,
            end: None,
        }
    }

    /// Treat `pos` as occupied without touching the laboratory.
    pub fn with_extra_obstacle(mut self, pos: Position) -> Self {
        self.extra_obstacle = Some(pos);
        self
    }

    pub fn guard(&self) -> &Guard {
        &self.guard
    }

    pub fn end(&self) -> Option<PatrolEnd> {
        self.end
    }

    /// Make one transition, return false once the patrol has ended.
    pub fn step(&mut self) -> bool {
        if self.end.is_some() {
            return false;
        }

        match self.phase {
            Phase::Probe => match self.guard.ahead_pos().filter(|p| self.lab.is_inside(p)) {
                None => self.end = Some(PatrolEnd::LeftLab),
                Some(ahead_pos) if self.is_blocked(&ahead_pos) => self.phase = Phase::Turn,
                Some(ahead_pos) => self.phase = Phase::Advance(ahead_pos),
            },
            Phase::Turn => {
                self.guard.turn_right();
                self.turn_n += 1;
                // Boxed in on all sides, the guard faces its arriving direction again.
                if self.turn_n == 4 {
                    self.end = Some(PatrolEnd::Looped);
                } else {
                    self.phase = Phase::Probe;
                }
            }
            Phase::Advance(ahead_pos) => {
                let next_guard = Guard::new(ahead_pos, self.guard.dir());
                if self.visits.contains(&next_guard) {
                    self.end = Some(PatrolEnd::Looped);
                } else {
                    self.visits.record(&next_guard);
                    self.guard = next_guard;
                    self.step_n += 1;
                    self.turn_n = 0;
                    self.phase = Phase::Probe;
                }
            }
        }

        self.end.is_none()
    }

    pub fn run(mut self) -> PatrolOutcome {
        while self.step() {}

        debug_assert!(self.step_n <= 4 * self.lab.row_n() * self.lab.col_n());
        let end = self.end.unwrap_or(PatrolEnd::LeftLab);
        trace!(
            guard = %self.guard,
            step_n = self.step_n,
            state_n = self.visits.state_n(),
            ?end,
            "Patrol ended"
        );

        PatrolOutcome {
            visits: self.visits,
            end,
            step_n: self.step_n,
        }
    }

    fn is_blocked(&self, pos: &Position) -> bool {
        self.extra_obstacle.as_ref() == Some(pos) || self.lab.is_obstructed(pos)
    }
}
