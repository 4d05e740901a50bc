//! A dynamic region quadtree over axis-aligned boxes.
//!
//! Every object is filed at the deepest node whose region fully contains its box, so an
//! object straddling a split line stays with the ancestor that covers it. This keeps overlap
//! queries exact about what they *might* return: nothing whose box overlaps the probe is
//! ever missed, though callers still filter the candidates by their own relation.

use core::fmt::Debug;

pub use crate::quadtree::bounds::BoundsProvider;
pub use crate::quadtree::iter::Objects;
pub use crate::quadtree::iter::Overlapping;
pub use crate::quadtree::rect::Rect;

use crate::quadtree::node::Entry;
use crate::quadtree::node::Node;

mod bounds;
mod iter;
mod node;
mod rect;

/// Number of objects a leaf holds before it subdivides.
pub const DEFAULT_THRESHOLD: usize = 8;

pub struct SpatialIndex<T, B> {
    root: Node<T>,
    bounds: B,
    threshold: usize,
    len: usize,
}

impl<T, B> SpatialIndex<T, B>
where
    T: PartialEq,
    B: BoundsProvider<T>,
{
    /// Create an empty index covering `region`.
    pub fn new(region: Rect, bounds: B) -> Self {
        Self::with_threshold(region, bounds, DEFAULT_THRESHOLD)
    }

    /// Like [`SpatialIndex::new`], splitting a leaf once it holds more than `threshold`
    /// objects. A threshold of zero is treated as one.
    pub fn with_threshold(region: Rect, bounds: B, threshold: usize) -> Self {
        SpatialIndex {
            root: Node::empty(region),
            bounds,
            threshold: threshold.max(1),
            len: 0,
        }
    }

    pub fn region(&self) -> Rect {
        self.root.region
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert `obj`. Returns `false`, leaving the index untouched, when the object's box is
    /// empty or not entirely inside the indexed region.
    ///
    /// Equal objects are not merged; callers that want set semantics check
    /// [`SpatialIndex::contains`] first.
    pub fn insert(&mut self, obj: T) -> bool {
        let bounds = self.bounds.bounds(&obj);

        if !self.root.region.contains_rect(&bounds) {
            return false;
        }

        let entry = Entry { bounds, value: obj };
        self.root.insert(entry, self.threshold, 0);
        self.len += 1;

        true
    }

    /// Remove one object equal to `obj`. Returns whether anything was removed.
    pub fn remove(&mut self, obj: &T) -> bool {
        let bounds = self.bounds.bounds(obj);

        if !self.root.region.contains_rect(&bounds) {
            return false;
        }

        let removed = self.root.remove(&bounds, |v| v == obj).is_some();
        if removed {
            self.len -= 1;
        }

        removed
    }

    pub fn contains(&self, obj: &T) -> bool {
        self.get(obj).is_some()
    }

    /// The stored object equal to `obj`, if any.
    pub fn get(&self, obj: &T) -> Option<&T> {
        let bounds = self.bounds.bounds(obj);

        if !self.root.region.contains_rect(&bounds) {
            return None;
        }

        self.root
            .find(&bounds, |v| v == obj)
            .map(|entry| &entry.value)
    }

    /// Every stored object, in no particular order. Each call starts a fresh walk.
    pub fn objects(&self) -> Objects<'_, T> {
        Objects::new(&self.root)
    }

    /// Every stored object whose box overlaps the box of `probe`.
    ///
    /// This is a candidate set: two boxes overlapping says nothing about whatever finer
    /// relation the caller cares about.
    pub fn overlapping(&self, probe: &T) -> Overlapping<'_, T> {
        let bounds = self.bounds.bounds(probe);

        Overlapping::new(&self.root, bounds)
    }

    /// Insert every object from `objs`, returning how many were accepted.
    pub fn insert_range<I>(&mut self, objs: I) -> usize
    where
        I: IntoIterator<Item = T>,
    {
        objs.into_iter().fold(0, |n, obj| {
            if self.insert(obj) { n + 1 } else { n }
        })
    }

    /// Remove one object equal to each of `objs`, returning how many were found.
    pub fn remove_range<'a, I>(&mut self, objs: I) -> usize
    where
        I: IntoIterator<Item = &'a T>,
        T: 'a,
    {
        objs.into_iter().filter(|obj| self.remove(obj)).count()
    }

    /// Drop every object and every subdivision.
    pub fn clear(&mut self) {
        self.root = Node::empty(self.root.region);
        self.len = 0;
    }
}

impl<T: Debug, B> Debug for SpatialIndex<T, B> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpatialIndex")
            .field("len", &self.len)
            .field("threshold", &self.threshold)
            .field("root", &self.root)
            .finish()
    }
}
