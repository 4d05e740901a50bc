use crate::quadtree::node::Entry;
use crate::quadtree::node::Node;
use crate::quadtree::rect::Rect;

/// Pre-order walk over every stored object: a node's own entries, then its children.
pub struct Objects<'a, T> {
    stack: Vec<&'a Node<T>>,
    current: std::slice::Iter<'a, Entry<T>>,
}

impl<'a, T> Objects<'a, T> {
    pub(crate) fn new(root: &'a Node<T>) -> Self {
        Objects {
            stack: vec![root],
            current: Default::default(),
        }
    }
}

impl<'a, T> Iterator for Objects<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.current.next() {
                return Some(&entry.value);
            }

            let node = self.stack.pop()?;
            self.current = node.entries.iter();

            if let Some(children) = &node.children {
                self.stack.extend(children.iter().rev());
            }
        }
    }
}

/// Like [`Objects`], but only enters nodes whose region overlaps `probe` and only yields
/// entries whose own box overlaps it.
pub struct Overlapping<'a, T> {
    probe: Rect,
    stack: Vec<&'a Node<T>>,
    current: std::slice::Iter<'a, Entry<T>>,
}

impl<'a, T> Overlapping<'a, T> {
    pub(crate) fn new(root: &'a Node<T>, probe: Rect) -> Self {
        let stack = if root.region.overlaps(&probe) {
            vec![root]
        } else {
            vec![]
        };

        Overlapping {
            probe,
            stack,
            current: Default::default(),
        }
    }
}

impl<'a, T> Iterator for Overlapping<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            for entry in self.current.by_ref() {
                if entry.bounds.overlaps(&self.probe) {
                    return Some(&entry.value);
                }
            }

            let node = self.stack.pop()?;
            self.current = node.entries.iter();

            if let Some(children) = &node.children {
                let probe = self.probe;
                self.stack.extend(
                    children
                        .iter()
                        .rev()
                        .filter(|child| child.region.overlaps(&probe)),
                );
            }
        }
    }
}
