/// Legal placement enumeration for one ship length
pub mod candidates;
/// Bitset tracking of cells claimed during an attempt
pub mod occupancy;
/// Placement attempts and the bounded retry loop
pub mod placement;
/// Injected randomness, shuffling, and uniform selection
pub mod random;

pub use occupancy::OccupancyGrid;
pub use placement::{GeneratedFleet, generate};
pub use random::{FnSource, RandomSource, SeededSource};
