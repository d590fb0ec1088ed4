//! Search for single obstacles that trap the guard in a loop.
//!
//! Candidates are the tiles the guard walks over when nothing is added, since an
//! obstacle anywhere else never changes its route. The start tile is never a
//! candidate.

use rayon::prelude::*;
use tracing::debug;

use crate::{Error, Laboratory, Patrol, Position};

/// Tiles visited by the unobstructed patrol except the start, in row-major order.
pub fn probe_positions(lab: &Laboratory) -> Vec<Position> {
    let start_guard = lab.guard();
    let mut positions = lab
        .patrol()
        .positions()
        .into_iter()
        .filter(|pos| pos != start_guard.pos())
        .collect::<Vec<_>>();
    positions.sort();

    positions
}

/// Probe the candidates one at a time by obstructing `lab` in place.
///
/// Every obstacle is removed again before the next probe, so `lab` is left as given.
pub fn loop_obstructions(lab: &mut Laboratory) -> Result<Vec<Position>, Error> {
    let positions = probe_positions(lab);
    let start_guard = lab.guard();
    let mut loop_positions = Vec::new();
    for (ind, pos) in positions.iter().enumerate() {
        let probe = lab.place_obstacle(pos)?;
        let outcome = Patrol::new(&probe, start_guard.clone()).run();
        debug!(
            "{}/{}, obstacle at {} ends with {:?} after {} step(s)",
            ind + 1,
            positions.len(),
            probe.pos(),
            outcome.end(),
            outcome.step_n()
        );
        if outcome.is_loop() {
            loop_positions.push(*pos);
        }
    }

    Ok(loop_positions)
}

/// Same result as [`loop_obstructions`], with candidates probed in parallel on a shared `lab`.
pub fn par_loop_obstructions(lab: &Laboratory) -> Vec<Position> {
    let positions = probe_positions(lab);
    let start_guard = lab.guard();
    positions
        .into_par_iter()
        .filter(|pos| {
            Patrol::new(lab, start_guard.clone())
                .with_extra_obstacle(*pos)
                .run()
                .is_loop()
        })
        .collect()
}
