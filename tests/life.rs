use std::collections::BTreeSet;
use std::collections::HashSet;

use proptest::prelude::*;

use quadlife::LifeEngine;
use quadlife::cell::Cell;
use quadlife::cell::CellBounds;
use quadlife::cell::bias;
use quadlife::quadtree::Rect;
use quadlife::quadtree::SpatialIndex;

type Coords = BTreeSet<(i64, i64)>;

fn live(engine: &LifeEngine) -> Coords {
    engine.cells().map(|c| c.logical()).collect()
}

fn shifted(cells: &Coords, dx: i64, dy: i64) -> Coords {
    cells.iter().map(|&(x, y)| (x + dx, y + dy)).collect()
}

/// Straightforward hash set Life, for comparison. Only safe away from the `i64` edges.
fn reference_step(cells: &HashSet<(i64, i64)>) -> HashSet<(i64, i64)> {
    let count = |x: i64, y: i64| {
        let mut n = 0;
        for dx in -1..=1 {
            for dy in -1..=1 {
                if (dx, dy) != (0, 0) && cells.contains(&(x + dx, y + dy)) {
                    n += 1;
                }
            }
        }
        n
    };

    let mut next = HashSet::new();
    for &(x, y) in cells {
        if matches!(count(x, y), 2 | 3) {
            next.insert((x, y));
        }

        for dx in -1..=1 {
            for dy in -1..=1 {
                let (nx, ny) = (x + dx, y + dy);
                if !cells.contains(&(nx, ny)) && count(nx, ny) == 3 {
                    next.insert((nx, ny));
                }
            }
        }
    }

    next
}

#[test]
fn block_is_still() {
    let block: Coords = [(0, 0), (1, 0), (0, 1), (1, 1)].into();
    let mut engine = LifeEngine::new(block.clone());

    for _ in 0..5 {
        engine.simulate();
        assert_eq!(live(&engine), block);
    }
}

#[test]
fn blinker_oscillates() {
    let horizontal: Coords = [(0, 0), (1, 0), (2, 0)].into();
    let vertical: Coords = [(1, -1), (1, 0), (1, 1)].into();
    let mut engine = LifeEngine::new(horizontal.clone());

    engine.simulate();
    assert_eq!(live(&engine), vertical);

    engine.simulate();
    assert_eq!(live(&engine), horizontal);
}

#[test]
fn glider_translates() {
    let glider: Coords = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)].into();
    let mut engine = LifeEngine::new(glider.clone());

    engine.advance(4);

    assert_eq!(live(&engine), shifted(&glider, 1, 1));
    assert_eq!(engine.generation(), 4);
}

#[test]
fn glider_crosses_the_origin_split() {
    // the root of the index splits between logical -1 and 0
    let glider: Coords = [(-4, -5), (-3, -4), (-5, -3), (-4, -3), (-3, -3)].into();
    let mut engine = LifeEngine::new(glider.clone());

    engine.advance(40);

    assert_eq!(live(&engine), shifted(&glider, 10, 10));
}

#[test]
fn corner_block_is_still() {
    let max = i64::MAX;
    let block: Coords = [(max - 1, max - 1), (max, max - 1), (max - 1, max), (max, max)].into();
    let mut engine = LifeEngine::new(block.clone());

    engine.advance(3);

    assert_eq!(live(&engine), block);
}

#[test]
fn blinker_on_the_bottom_edge_is_clipped() {
    let min = i64::MIN;
    let mut engine = LifeEngine::new([(0, min), (1, min), (2, min)]);

    engine.simulate();
    assert_eq!(live(&engine), Coords::from([(1, min), (1, min + 1)]));

    engine.simulate();
    assert!(live(&engine).is_empty());
}

#[test]
fn lone_cells_at_every_corner_die_quietly() {
    let (min, max) = (i64::MIN, i64::MAX);
    let mut engine = LifeEngine::new([(min, min), (min, max), (max, min), (max, max)]);

    assert_eq!(engine.population(), 4);

    engine.simulate();

    assert_eq!(engine.population(), 0);
}

#[test]
fn toggle_uses_biased_coordinates() {
    let mut engine = LifeEngine::new([]);

    engine.toggle_point(bias(-3), bias(4));

    assert_eq!(live(&engine), Coords::from([(-3, 4)]));
}

#[test]
fn toggled_cells_join_the_next_step() {
    let mut engine = LifeEngine::new([(0, 0), (1, 0)]);

    engine.toggle_point(bias(2), bias(0));
    engine.simulate();

    assert_eq!(live(&engine), Coords::from([(1, -1), (1, 0), (1, 1)]));
}

fn small_world() -> impl Strategy<Value = Coords> {
    prop::collection::btree_set((-12i64..12, -12i64..12), 0..80)
}

proptest! {
    #[test]
    fn construction_round_trips(cells in small_world()) {
        let engine = LifeEngine::new(cells.clone());

        prop_assert_eq!(engine.population(), cells.len());
        prop_assert_eq!(live(&engine), cells);
    }

    #[test]
    fn extreme_cells_round_trip(
        cells in prop::collection::btree_set((any::<i64>(), any::<i64>()), 0..40)
    ) {
        let engine = LifeEngine::new(cells.clone());

        prop_assert_eq!(live(&engine), cells);
    }

    #[test]
    fn toggle_twice_is_identity(cells in small_world(), x in -14i64..14, y in -14i64..14) {
        let mut engine = LifeEngine::new(cells.clone());
        let was_alive = cells.contains(&(x, y));

        prop_assert_eq!(engine.toggle_point(bias(x), bias(y)), !was_alive);
        prop_assert_eq!(engine.toggle_point(bias(x), bias(y)), was_alive);
        prop_assert_eq!(live(&engine), cells);
    }

    #[test]
    fn overlap_query_finds_every_neighbor(cells in small_world(), threshold in 1usize..10) {
        let mut index = SpatialIndex::with_threshold(Rect::plane(), CellBounds, threshold);
        let stored: Vec<Cell> = cells.iter().map(|&(x, y)| Cell::from_logical(x, y)).collect();

        for &cell in &stored {
            prop_assert!(index.insert(cell));
        }

        for cell in &stored {
            let candidates: HashSet<Cell> = index.overlapping(cell).copied().collect();
            let brute: HashSet<Cell> = stored
                .iter()
                .copied()
                .filter(|other| cell.is_neighbor(other))
                .collect();

            prop_assert!(candidates.is_superset(&brute));
            prop_assert!(candidates.contains(cell));

            let counted = candidates.iter().filter(|other| cell.is_neighbor(other)).count();
            prop_assert_eq!(counted, brute.len());
        }
    }

    #[test]
    fn matches_reference_life(cells in small_world(), steps in 1usize..6) {
        let mut engine = LifeEngine::new(cells.clone());
        let mut reference: HashSet<(i64, i64)> = cells.into_iter().collect();

        for _ in 0..steps {
            engine.simulate();
            reference = reference_step(&reference);

            prop_assert_eq!(live(&engine), reference.iter().copied().collect::<Coords>());
        }
    }

    #[test]
    fn insertion_order_does_not_matter(cells in small_world(), steps in 0usize..8) {
        let mut forward = LifeEngine::new(cells.iter().copied());
        let mut backward = LifeEngine::new(cells.iter().rev().copied());

        forward.advance(steps);
        backward.advance(steps);

        prop_assert_eq!(live(&forward), live(&backward));
    }
}
