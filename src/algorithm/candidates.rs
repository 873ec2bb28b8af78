//! Enumeration of every legal placement for one ship length

use crate::algorithm::occupancy::OccupancyGrid;
use crate::spatial::board::BoardConfig;
use crate::spatial::ship::{Candidate, Coordinate, Direction};

/// Enumerate all legal placements of a ship against the current occupancy
///
/// Scans the board row-major, trying both directions from every start cell.
/// A candidate survives when it lies fully on the board, covers no occupied
/// cell, and, under the no-touching rule, has no occupied 8-neighbour.
/// Return order is the natural scan order; selection over the result is
/// uniform, so the order carries no weight.
pub fn enumerate_candidates(
    length: usize,
    config: &BoardConfig,
    occupied: &OccupancyGrid,
) -> Vec<Candidate> {
    let mut found = Vec::new();
    for y in 0..config.height {
        for x in 0..config.width {
            for direction in [Direction::Horizontal, Direction::Vertical] {
                let candidate = Candidate {
                    direction,
                    start: Coordinate { x, y },
                    length,
                };
                if fits(&candidate, config, occupied) {
                    found.push(candidate);
                }
            }
        }
    }
    found
}

/// Check one candidate against bounds, occupancy, and the adjacency rule
///
/// Adjacency is only tested against previously placed ships, never between
/// the candidate's own cells: a ship's cells are always adjacent to each
/// other.
fn fits(candidate: &Candidate, config: &BoardConfig, occupied: &OccupancyGrid) -> bool {
    let Some(end) = candidate.end() else {
        return false;
    };
    if !config.contains(end) {
        return false;
    }
    for cell in candidate.cells() {
        if occupied.contains(cell) {
            return false;
        }
        if config.no_touching && occupied.any_neighbour_occupied(cell) {
            return false;
        }
    }
    true
}
