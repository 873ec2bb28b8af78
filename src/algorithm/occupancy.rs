//! Occupied-cell tracking for a single placement attempt

use bitvec::prelude::{BitVec, bitvec};
use std::fmt;

use crate::spatial::ship::Coordinate;

/// Fixed-size bitset over board cells, indexed `y * width + x`
///
/// One grid lives for exactly one placement attempt: it starts empty, grows
/// monotonically as ships are committed, and is dropped when the attempt
/// ends. Provides O(1) membership testing for the enumeration hot path.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    bits: BitVec,
    width: usize,
    height: usize,
}

impl OccupancyGrid {
    /// Create a grid with every cell free
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            bits: bitvec![0; width.saturating_mul(height)],
            width,
            height,
        }
    }

    /// Grid width in cells
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Grid height in cells
    pub const fn height(&self) -> usize {
        self.height
    }

    const fn index(&self, cell: Coordinate) -> Option<usize> {
        if cell.x >= self.width || cell.y >= self.height {
            return None;
        }
        Some(cell.y * self.width + cell.x)
    }

    /// Mark a cell as occupied
    ///
    /// Out-of-bounds cells are ignored; callers commit only candidates that
    /// already passed bounds checks.
    pub fn insert(&mut self, cell: Coordinate) {
        if let Some(index) = self.index(cell) {
            self.bits.set(index, true);
        }
    }

    /// Test cell occupancy; out-of-bounds cells read as free
    pub fn contains(&self, cell: Coordinate) -> bool {
        self.index(cell)
            .is_some_and(|index| self.bits.get(index).as_deref() == Some(&true))
    }

    /// Test whether any of a cell's 8 neighbours is occupied
    ///
    /// The cell itself is excluded. Neighbours falling off the board edge
    /// read as free.
    pub fn any_neighbour_occupied(&self, cell: Coordinate) -> bool {
        let x_low = cell.x.saturating_sub(1);
        let y_low = cell.y.saturating_sub(1);
        for y in y_low..=cell.y + 1 {
            for x in x_low..=cell.x + 1 {
                let neighbour = Coordinate { x, y };
                if neighbour == cell {
                    continue;
                }
                if self.contains(neighbour) {
                    return true;
                }
            }
        }
        false
    }

    /// Count occupied cells
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Test if no cells are occupied
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "OccupancyGrid({}x{}, {} occupied)",
            self.width,
            self.height,
            self.count()
        )
    }
}
