use crate::quadtree::rect::Rect;

/// Maps an object to the box it occupies in a [`SpatialIndex`](super::SpatialIndex).
///
/// The box decides both where the object is stored and what an overlap query against it
/// returns. Objects that compare equal must map to the same box, otherwise lookups by
/// equality will miss them.
pub trait BoundsProvider<T> {
    fn bounds(&self, obj: &T) -> Rect;
}

impl<T, F> BoundsProvider<T> for F
where
    F: Fn(&T) -> Rect,
{
    fn bounds(&self, obj: &T) -> Rect {
        self(obj)
    }
}
