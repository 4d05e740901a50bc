use std::hash::Hash;
use std::hash::Hasher;

use crate::quadtree::BoundsProvider;
use crate::quadtree::Rect;

/// Offset between logical `i64` coordinates and the `u64` coordinates the index works in.
///
/// `2^63`, the magnitude of `i64::MIN`, so `i64::MIN` lands on `0` and `i64::MAX` on
/// `u64::MAX`.
pub const BIAS: u64 = 1 << 63;

/// Map a logical coordinate into the unsigned domain. Lossless over the whole `i64` range.
pub const fn bias(v: i64) -> u64 {
    // same as `v + 2^63` modulo `2^64`
    (v as u64) ^ BIAS
}

/// Inverse of [`bias`].
pub const fn unbias(v: u64) -> i64 {
    (v ^ BIAS) as i64
}

/// A cell of the plane, addressed in biased coordinates.
///
/// Equality and hashing only look at `(x, y)`: a cell built with [`Cell::probe`] finds the
/// stored cell at the same coordinate whatever its `alive` flag.
#[derive(Debug, Clone, Copy)]
pub struct Cell {
    pub x: u64,
    pub y: u64,
    pub alive: bool,
}

impl Cell {
    pub const fn alive(x: u64, y: u64) -> Self {
        Cell { x, y, alive: true }
    }

    /// A coordinate-only cell, used to query or remove by position.
    pub const fn probe(x: u64, y: u64) -> Self {
        Cell { x, y, alive: false }
    }

    /// Alive cell at a logical coordinate.
    pub const fn from_logical(x: i64, y: i64) -> Self {
        Cell::alive(bias(x), bias(y))
    }

    pub const fn key(&self) -> (u64, u64) {
        (self.x, self.y)
    }

    pub const fn logical(&self) -> (i64, i64) {
        (unbias(self.x), unbias(self.y))
    }

    /// Whether `other` is one of the 8 cells around this one.
    pub const fn is_neighbor(&self, other: &Cell) -> bool {
        let dx = self.x.abs_diff(other.x);
        let dy = self.y.abs_diff(other.y);

        dx <= 1 && dy <= 1 && (dx | dy) != 0
    }

    /// The coordinates of the up-to-8 surrounding cells. Cells on the edge of the domain
    /// have fewer.
    pub fn neighbors(&self) -> impl Iterator<Item = Cell> {
        const OFFSETS: [(i64, i64); 8] = [
            (-1, -1),
            (0, -1),
            (1, -1),
            (-1, 0),
            (1, 0),
            (-1, 1),
            (0, 1),
            (1, 1),
        ];

        let (x, y) = (self.x, self.y);

        OFFSETS.into_iter().filter_map(move |(dx, dy)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;

            Some(Cell::probe(nx, ny))
        })
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key().hash(state);
    }
}

/// Files a cell under the 3x3 box centred on it, clamped at the edges of the domain.
///
/// Two cells' boxes overlap whenever they are within two steps of each other on both axes,
/// so an overlap query against a cell returns every Moore neighbour, the cell itself, and
/// a ring of cells that are not neighbours at all.
#[derive(Debug, Clone, Copy, Default)]
pub struct CellBounds;

impl BoundsProvider<Cell> for CellBounds {
    fn bounds(&self, cell: &Cell) -> Rect {
        Rect::from_edges(
            cell.x.saturating_sub(1),
            cell.y.saturating_sub(1),
            cell.x.saturating_add(2),
            cell.y.saturating_add(2),
        )
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn bias_endpoints() {
        assert_eq!(bias(i64::MIN), 0);
        assert_eq!(bias(i64::MAX), u64::MAX);
        assert_eq!(bias(0), BIAS);
        assert_eq!(bias(-1), BIAS - 1);
        assert_eq!(bias(1), BIAS + 1);
    }

    #[test]
    fn unbias_inverts_bias() {
        for v in [i64::MIN, -12345, -1, 0, 1, 98765, i64::MAX] {
            assert_eq!(unbias(bias(v)), v);
        }
    }

    #[test]
    fn equality_ignores_alive() {
        assert_eq!(Cell::alive(3, 4), Cell::probe(3, 4));
        assert_ne!(Cell::alive(3, 4), Cell::alive(4, 3));
    }

    #[test]
    fn neighbor_relation() {
        let c = Cell::probe(10, 10);

        assert!(c.is_neighbor(&Cell::probe(9, 9)));
        assert!(c.is_neighbor(&Cell::probe(11, 10)));
        assert!(!c.is_neighbor(&Cell::probe(10, 10)));
        assert!(!c.is_neighbor(&Cell::probe(12, 10)));
    }

    #[test]
    fn neighbors_clamped_at_corners() {
        assert_eq!(Cell::probe(5, 5).neighbors().count(), 8);
        assert_eq!(Cell::probe(0, 0).neighbors().count(), 3);
        assert_eq!(Cell::probe(u64::MAX, u64::MAX).neighbors().count(), 3);
        assert_eq!(Cell::probe(0, 7).neighbors().count(), 5);

        assert!(
            Cell::probe(u64::MAX, 0)
                .neighbors()
                .all(|n| n.x == u64::MAX || n.x == u64::MAX - 1)
        );
    }

    #[test]
    fn bounds_are_clamped() {
        let b = CellBounds;

        assert_eq!(b.bounds(&Cell::probe(5, 5)), Rect::new(4, 4, 3, 3));
        assert_eq!(b.bounds(&Cell::probe(0, 0)), Rect::new(0, 0, 2, 2));
        assert_eq!(
            b.bounds(&Cell::probe(u64::MAX, u64::MAX)),
            Rect::new(u64::MAX - 1, u64::MAX - 1, 1, 1)
        );
        assert!(Rect::plane().contains_rect(&b.bounds(&Cell::probe(u64::MAX, 0))));
    }
}
