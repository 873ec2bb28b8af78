//! Placement attempts and the bounded retry loop
//!
//! One attempt places every requested length in shuffled order, selecting
//! uniformly among legal candidates. A dead end abandons the whole attempt
//! rather than un-placing earlier ships; the retry loop compensates with a
//! fixed budget of fresh attempts. Bounded retries without backtracking is a
//! deliberate trade of optimality for simplicity and callers rely on that
//! failure mode.

use serde::{Deserialize, Serialize};

use crate::algorithm::candidates::enumerate_candidates;
use crate::algorithm::occupancy::OccupancyGrid;
use crate::algorithm::random::{RandomSource, choose, shuffle};
use crate::spatial::board::BoardConfig;
use crate::spatial::ship::Candidate;

/// A successfully placed fleet
///
/// Ships appear in the order they were placed, which is the shuffled order
/// of the requested lengths, not the request order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFleet {
    /// Board width in cells
    pub width: usize,
    /// Board height in cells
    pub height: usize,
    /// One placement per requested ship length
    pub ships: Vec<Candidate>,
}

/// Run one placement attempt over an already shuffled length order
///
/// Returns `None` on the first length with no legal candidate, discarding
/// all partial progress.
fn run_attempt(
    config: &BoardConfig,
    lengths: &[usize],
    rng: &mut dyn RandomSource,
) -> Option<Vec<Candidate>> {
    let mut occupied = OccupancyGrid::new(config.width, config.height);
    let mut placed = Vec::with_capacity(lengths.len());
    for &length in lengths {
        let candidates = enumerate_candidates(length, config, &occupied);
        let chosen = *choose(&candidates, rng)?;
        for cell in chosen.cells() {
            occupied.insert(cell);
        }
        placed.push(chosen);
    }
    Some(placed)
}

/// Generate a fleet with up to `max_tries` whole-attempt retries
///
/// Each try reshuffles a fresh copy of the requested lengths and starts from
/// an empty board. The first successful attempt wins; `None` means every try
/// dead-ended.
pub fn generate(
    config: &BoardConfig,
    rng: &mut dyn RandomSource,
    max_tries: usize,
) -> Option<GeneratedFleet> {
    for _ in 0..max_tries {
        let mut lengths = config.ships.clone();
        shuffle(&mut lengths, rng);
        if let Some(ships) = run_attempt(config, &lengths, rng) {
            return Some(GeneratedFleet {
                width: config.width,
                height: config.height,
                ships,
            });
        }
    }
    None
}
