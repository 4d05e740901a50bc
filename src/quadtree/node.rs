use std::fmt::Debug;

use tracing::trace;

use crate::quadtree::rect::Rect;

/// A stored object together with the box it was filed under.
#[derive(Clone)]
pub struct Entry<T> {
    pub bounds: Rect,
    pub value: T,
}

pub struct Node<T> {
    pub region: Rect,

    /// Objects that fit in no single child, or every object while this node is a leaf.
    pub entries: Vec<Entry<T>>,

    /// `None` if leaf. Quadrants are ordered nw, ne, sw, se.
    pub children: Option<Box<[Node<T>; 4]>>,
}

impl<T> Node<T> {
    pub fn empty(region: Rect) -> Self {
        Node {
            region,
            entries: Vec::new(),
            children: None,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.children.is_none()
    }

    /// A leaf holding nothing.
    pub fn is_vacant(&self) -> bool {
        self.is_leaf() && self.entries.is_empty()
    }

    /// Index of the existing child that fully contains `bounds`, if any.
    fn child_for(&self, bounds: &Rect) -> Option<usize> {
        self.children
            .as_ref()?
            .iter()
            .position(|child| child.region.contains_rect(bounds))
    }

    /// File `entry` at the deepest node whose region fully contains its box.
    ///
    /// The caller guarantees `self.region.contains_rect(&entry.bounds)`.
    pub fn insert(&mut self, entry: Entry<T>, threshold: usize, depth: usize) {
        if let Some(i) = self.child_for(&entry.bounds) {
            if let Some(children) = self.children.as_mut() {
                children[i].insert(entry, threshold, depth + 1);
                return;
            }
        }

        self.entries.push(entry);

        if self.is_leaf() && self.entries.len() > threshold && self.region.can_split() {
            self.split(threshold, depth);
        }
    }

    fn split(&mut self, threshold: usize, depth: usize) {
        trace!(region = ?self.region, depth, entries = self.entries.len(), "splitting node");

        let [nw, ne, sw, se] = self.region.split();
        self.children = Some(Box::new([
            Node::empty(nw),
            Node::empty(ne),
            Node::empty(sw),
            Node::empty(se),
        ]));

        let entries = std::mem::take(&mut self.entries);
        for entry in entries {
            match (self.child_for(&entry.bounds), self.children.as_mut()) {
                (Some(i), Some(children)) => children[i].insert(entry, threshold, depth + 1),
                _ => self.entries.push(entry),
            }
        }
    }

    /// Walk down the unique path an object with box `bounds` would have been filed along,
    /// returning the first entry satisfying `is_match`.
    pub fn find<P>(&self, bounds: &Rect, is_match: P) -> Option<&Entry<T>>
    where
        P: Fn(&T) -> bool,
    {
        let mut node = self;

        loop {
            if let Some(entry) = node.entries.iter().find(|e| is_match(&e.value)) {
                return Some(entry);
            }

            let i = node.child_for(bounds)?;
            node = &node.children.as_ref()?[i];
        }
    }

    /// Remove the first entry along `bounds`' path satisfying `is_match`. Children left
    /// entirely vacant are dropped on the way back up.
    pub fn remove<P>(&mut self, bounds: &Rect, is_match: P) -> Option<Entry<T>>
    where
        P: Fn(&T) -> bool,
    {
        if let Some(pos) = self.entries.iter().position(|e| is_match(&e.value)) {
            return Some(self.entries.swap_remove(pos));
        }

        let i = self.child_for(bounds)?;
        let children = self.children.as_mut()?;
        let removed = children[i].remove(bounds, is_match);

        if removed.is_some() && children.iter().all(Node::is_vacant) {
            self.children = None;
        }

        removed
    }
}

impl<T: Debug> Debug for Node<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let mut s = f.debug_struct("Node");
        s.field("region", &self.region);
        s.field(
            "entries",
            &self.entries.iter().map(|e| &e.value).collect::<Vec<_>>(),
        );

        if let Some(children) = &self.children {
            s.field("children", children);
        }

        s.finish()
    }
}
