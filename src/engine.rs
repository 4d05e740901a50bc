use std::collections::HashSet;

use tracing::debug;

use crate::cell::Cell;
use crate::cell::CellBounds;
use crate::cell::bias;
use crate::quadtree::Rect;
use crate::quadtree::SpatialIndex;
use crate::rule_set::B3S23;
use crate::rule_set::RuleSet;

type CellIndex = SpatialIndex<Cell, CellBounds>;

/// Sparse Life on the whole `u64 x u64` plane.
///
/// Only live cells are stored. A cell being in `live` and a cell being alive are the same
/// thing.
#[derive(Debug)]
pub struct LifeEngine {
    live: CellIndex,

    /// Cells born during the step in progress. Empty between steps.
    births: CellIndex,

    rules: RuleSet,

    generation: u64,
}

impl LifeEngine {
    /// Build a world from logical coordinates under Conway's rules.
    pub fn new<I>(initial: I) -> Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        Self::with_rules(initial, B3S23)
    }

    pub fn with_rules<I>(initial: I, rules: RuleSet) -> Self
    where
        I: IntoIterator<Item = (i64, i64)>,
    {
        let mut engine = LifeEngine {
            live: SpatialIndex::new(Rect::plane(), CellBounds),
            births: SpatialIndex::new(Rect::plane(), CellBounds),
            rules,
            generation: 0,
        };

        for (x, y) in initial {
            let cell = Cell::alive(bias(x), bias(y));

            if engine.live.contains(&cell) || !engine.live.insert(cell) {
                debug!(x, y, "dropping initial cell");
            }
        }

        engine
    }

    pub fn rules(&self) -> RuleSet {
        self.rules
    }

    /// Number of steps taken so far.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn population(&self) -> usize {
        self.live.len()
    }

    /// The live cells, in no particular order.
    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.live.objects()
    }

    pub fn is_alive(&self, x: u64, y: u64) -> bool {
        self.live.contains(&Cell::probe(x, y))
    }

    /// Flip the cell at `(x, y)`, given in biased coordinates. Returns whether it is now
    /// alive.
    pub fn toggle_point(&mut self, x: u64, y: u64) -> bool {
        let probe = Cell::probe(x, y);

        if self.live.remove(&probe) {
            false
        } else {
            self.live.insert(Cell::alive(x, y))
        }
    }

    /// Live Moore neighbours of `cell`, read from the current generation only.
    fn live_neighbors(&self, cell: &Cell) -> usize {
        self.live
            .overlapping(cell)
            .filter(|other| other.alive && cell.is_neighbor(other))
            .count()
    }

    /// Advance one generation.
    ///
    /// Every count is taken against generation N; deaths and births are only applied once
    /// the whole population has been visited.
    pub fn simulate(&mut self) {
        let mut deaths = Vec::new();
        let mut seen = HashSet::new();

        for cell in self.live.objects() {
            if !self.rules.survives(self.live_neighbors(cell)) {
                deaths.push(*cell);
            }

            for candidate in cell.neighbors() {
                if !seen.insert(candidate.key()) || self.live.contains(&candidate) {
                    continue;
                }

                if self.rules.is_born(self.live_neighbors(&candidate)) {
                    self.births.insert(Cell::alive(candidate.x, candidate.y));
                }
            }
        }

        let died = self.live.remove_range(deaths.iter());
        let born = self.live.insert_range(self.births.objects().copied());
        self.births.clear();

        self.generation += 1;

        debug!(
            generation = self.generation,
            population = self.live.len(),
            born,
            died,
            "step"
        );
    }

    /// Run `n` steps.
    pub fn advance(&mut self, n: usize) {
        for _ in 0..n {
            self.simulate();
        }
    }
}
