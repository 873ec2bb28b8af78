//! Validates candidate enumeration, shuffling, occupancy, and placement behavior

use std::collections::HashSet;

use fleetgen::algorithm::candidates::enumerate_candidates;
use fleetgen::algorithm::occupancy::OccupancyGrid;
use fleetgen::algorithm::placement::{GeneratedFleet, generate};
use fleetgen::algorithm::random::{FnSource, SeededSource, choose, shuffle};
use fleetgen::spatial::board::BoardConfig;
use fleetgen::spatial::ship::{Candidate, Coordinate, Direction};
use proptest::prelude::proptest;

fn board(width: usize, height: usize, ships: Vec<usize>, no_touching: bool) -> BoardConfig {
    BoardConfig {
        width,
        height,
        ships,
        no_touching,
    }
}

fn fleet_cells(fleet: &GeneratedFleet) -> Vec<Coordinate> {
    fleet.ships.iter().flat_map(Candidate::cells).collect()
}

fn assert_fleet_valid(fleet: &GeneratedFleet, config: &BoardConfig) {
    // Every ship fully on the board
    for cell in fleet_cells(fleet) {
        assert!(
            cell.x < config.width && cell.y < config.height,
            "cell {cell:?} off a {}x{} board",
            config.width,
            config.height
        );
    }

    // No two ships share a cell
    let cells = fleet_cells(fleet);
    let distinct: HashSet<_> = cells.iter().copied().collect();
    assert_eq!(cells.len(), distinct.len(), "overlapping ships in {fleet:?}");

    // Multiset of placed lengths matches the request
    let mut placed: Vec<usize> = fleet.ships.iter().map(|ship| ship.length).collect();
    let mut requested = config.ships.clone();
    placed.sort_unstable();
    requested.sort_unstable();
    assert_eq!(placed, requested);
}

fn assert_no_touching(fleet: &GeneratedFleet) {
    for (i, a) in fleet.ships.iter().enumerate() {
        for b in fleet.ships.iter().skip(i + 1) {
            for cell_a in a.cells() {
                for cell_b in b.cells() {
                    let dx = cell_a.x.abs_diff(cell_b.x);
                    let dy = cell_a.y.abs_diff(cell_b.y);
                    assert!(
                        dx > 1 || dy > 1,
                        "ships {a:?} and {b:?} touch at {cell_a:?}/{cell_b:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_enumerate_counts_on_empty_board() {
    let config = board(2, 2, vec![], false);
    let occupied = OccupancyGrid::new(2, 2);

    // Length 1 fits both ways from every cell
    assert_eq!(enumerate_candidates(1, &config, &occupied).len(), 8);

    // Length 2: two horizontal and two vertical starts
    assert_eq!(enumerate_candidates(2, &config, &occupied).len(), 4);

    // Length 3 cannot fit at all
    assert!(enumerate_candidates(3, &config, &occupied).is_empty());
}

#[test]
fn test_enumerate_respects_occupancy() {
    let config = board(3, 1, vec![], false);
    let mut occupied = OccupancyGrid::new(3, 1);
    occupied.insert(Coordinate { x: 1, y: 0 });

    let found = enumerate_candidates(2, &config, &occupied);
    assert!(found.is_empty(), "no 2-run avoids the center of a 3x1 row");

    let singles = enumerate_candidates(1, &config, &occupied);
    assert!(
        singles
            .iter()
            .all(|c| c.start != Coordinate { x: 1, y: 0 })
    );
}

#[test]
fn test_enumerate_no_touching_excludes_neighbours() {
    let config = board(3, 3, vec![], true);
    let mut occupied = OccupancyGrid::new(3, 3);
    occupied.insert(Coordinate { x: 0, y: 0 });

    let found = enumerate_candidates(1, &config, &occupied);
    let starts: HashSet<_> = found.iter().map(|c| c.start).collect();

    // Diagonal neighbour excluded along with the orthogonal ones
    assert!(!starts.contains(&Coordinate { x: 1, y: 1 }));
    assert!(!starts.contains(&Coordinate { x: 1, y: 0 }));
    assert!(!starts.contains(&Coordinate { x: 0, y: 1 }));
    assert!(starts.contains(&Coordinate { x: 2, y: 0 }));
    assert!(starts.contains(&Coordinate { x: 2, y: 2 }));
}

#[test]
fn test_candidate_cells_walk_the_direction() {
    let horizontal = Candidate {
        direction: Direction::Horizontal,
        start: Coordinate { x: 1, y: 2 },
        length: 3,
    };
    let cells: Vec<_> = horizontal.cells().collect();
    assert_eq!(
        cells,
        vec![
            Coordinate { x: 1, y: 2 },
            Coordinate { x: 2, y: 2 },
            Coordinate { x: 3, y: 2 },
        ]
    );

    let vertical = Candidate {
        direction: Direction::Vertical,
        start: Coordinate { x: 0, y: 0 },
        length: 2,
    };
    assert_eq!(vertical.end(), Some(Coordinate { x: 0, y: 1 }));
}

#[test]
fn test_occupancy_neighbours_at_corner() {
    let mut grid = OccupancyGrid::new(4, 4);
    assert!(grid.is_empty());

    grid.insert(Coordinate { x: 0, y: 0 });
    assert_eq!(grid.count(), 1);
    assert!(grid.contains(Coordinate { x: 0, y: 0 }));

    assert!(grid.any_neighbour_occupied(Coordinate { x: 1, y: 1 }));
    assert!(grid.any_neighbour_occupied(Coordinate { x: 0, y: 1 }));
    assert!(!grid.any_neighbour_occupied(Coordinate { x: 2, y: 2 }));

    // The occupied cell itself is not its own neighbour
    assert!(!grid.any_neighbour_occupied(Coordinate { x: 0, y: 0 }));
}

#[test]
fn test_occupancy_ignores_out_of_bounds() {
    let mut grid = OccupancyGrid::new(2, 2);
    grid.insert(Coordinate { x: 5, y: 5 });
    assert!(grid.is_empty());
    assert!(!grid.contains(Coordinate { x: 5, y: 5 }));
}

#[test]
fn test_shuffle_with_zero_source_rotates() {
    let mut items = vec![1, 2, 3, 4];
    let mut rng = FnSource(|| 0.0);
    shuffle(&mut items, &mut rng);
    assert_eq!(items, vec![2, 3, 4, 1]);
}

#[test]
fn test_shuffle_preserves_multiset() {
    let mut items = vec![5, 4, 3, 3, 2];
    let mut rng = SeededSource::new(99);
    shuffle(&mut items, &mut rng);

    let mut sorted = items.clone();
    sorted.sort_unstable();
    assert_eq!(sorted, vec![2, 3, 3, 4, 5]);
}

#[test]
fn test_choose_bounds() {
    let items = [10, 20, 30, 40];

    let mut low = FnSource(|| 0.0);
    assert_eq!(choose(&items, &mut low), Some(&10));

    let mut high = FnSource(|| 0.999);
    assert_eq!(choose(&items, &mut high), Some(&40));

    let empty: [u32; 0] = [];
    let mut any = FnSource(|| 0.5);
    assert_eq!(choose(&empty, &mut any), None);
}

#[test]
fn test_generate_standard_fleet() {
    let config = board(10, 10, vec![5, 4, 3, 3, 2], false);
    let mut rng = SeededSource::new(1);

    let fleet = generate(&config, &mut rng, 100).unwrap();
    assert_fleet_valid(&fleet, &config);
    assert_eq!(fleet.width, 10);
    assert_eq!(fleet.height, 10);
}

#[test]
fn test_generate_no_touching_fleet() {
    let config = board(10, 10, vec![4, 3, 2, 2], true);
    let mut rng = SeededSource::new(7);

    let fleet = generate(&config, &mut rng, 100).unwrap();
    assert_fleet_valid(&fleet, &config);
    assert_no_touching(&fleet);
}

#[test]
fn test_generate_empty_request_succeeds_without_randomness() {
    let config = board(10, 10, vec![], false);
    let mut rng = FnSource(|| -> f64 { unreachable!("no randomness needed for an empty fleet") });

    let fleet = generate(&config, &mut rng, 100).unwrap();
    assert!(fleet.ships.is_empty());
}

#[test]
fn test_generate_gives_up_on_impossible_adjacency() {
    // Two singles on a 2x1 board are always 8-neighbours
    let config = board(2, 1, vec![1, 1], true);
    let mut rng = SeededSource::new(3);

    assert!(generate(&config, &mut rng, 100).is_none());
}

#[test]
fn test_generate_is_deterministic_per_seed() {
    let config = board(8, 8, vec![4, 3, 2], true);

    let mut first_rng = SeededSource::new(123);
    let mut second_rng = SeededSource::new(123);
    let first = generate(&config, &mut first_rng, 100);
    let second = generate(&config, &mut second_rng, 100);

    assert_eq!(first, second);
}

proptest! {
    #[test]
    fn prop_generated_fleets_are_valid(
        width in 1usize..12,
        height in 1usize..12,
        seed in 0u64..500,
        lengths in proptest::collection::vec(1usize..5, 0..6),
    ) {
        let config = board(width, height, lengths, false);
        let mut rng = SeededSource::new(seed);
        if let Some(fleet) = generate(&config, &mut rng, 100) {
            assert_fleet_valid(&fleet, &config);
        }
    }

    #[test]
    fn prop_no_touching_fleets_keep_distance(
        seed in 0u64..500,
        lengths in proptest::collection::vec(1usize..4, 0..5),
    ) {
        let config = board(10, 10, lengths, true);
        let mut rng = SeededSource::new(seed);
        if let Some(fleet) = generate(&config, &mut rng, 100) {
            assert_fleet_valid(&fleet, &config);
            assert_no_touching(&fleet);
        }
    }
}
