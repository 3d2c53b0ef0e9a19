//! The recursive tree shape: a tagged enum of two variants, `Leaf` and `Internal`, each owning
//! its children exclusively (`Box`, no back-pointers — traversal carries whatever parent context
//! it needs down through the call or the search queue instead).

use crate::chunk::{chunk, chunk_distance, hamming, FANOUT, MAX_DEPTH};
use crate::entry::Entry;
use crate::stats::SearchStats;

/// A node of the trie: either a bucket of entries or a 16-way fan-out to child subtrees.
///
/// A tagged enum rather than a trait object: the two variants are small, the leaf/internal
/// branch on the hot insert and search paths is perfectly predictable, and the enum's
/// discriminant keeps the in-memory layout compact compared to heterogeneous dynamic dispatch.
pub enum Node {
    Leaf(Leaf),
    Internal(Internal),
}

impl Node {
    pub fn empty_leaf() -> Self {
        Node::Leaf(Leaf::new())
    }

    pub fn len(&self) -> usize {
        match self {
            Node::Leaf(leaf) => leaf.entries.len(),
            Node::Internal(internal) => internal
                .children
                .iter()
                .filter_map(Option::as_ref)
                .map(|child| child.len())
                .sum(),
        }
    }

    pub fn memory_usage(&self) -> usize {
        match self {
            Node::Leaf(leaf) => leaf.memory_usage(),
            Node::Internal(internal) => {
                internal.table_memory_usage()
                    + internal
                        .children
                        .iter()
                        .filter_map(Option::as_ref)
                        .map(|child| child.memory_usage())
                        .sum::<usize>()
            }
        }
    }
}

/// A bucket of entries that all share a routing prefix. Leaves hold no further structure; every
/// stored entry is rescanned in full whenever the leaf is reached during a search.
pub struct Leaf {
    entries: Vec<Entry>,
}

impl Leaf {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends `entry` to the bucket unconditionally. Callers decide whether the leaf now needs
    /// to split.
    pub fn add(&mut self, entry: Entry) {
        self.entries.push(entry);
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn over_capacity(&self, leaf_capacity: usize) -> bool {
        self.entries.len() > leaf_capacity
    }

    /// Removes every stored entry whose `(id, code)` pair matches `target`, returning how many
    /// were removed. Intentionally "delete all matching": duplicate `(id, code)` pairs are all
    /// removed together, because a caller that wants single-shot removal can use unique ids.
    pub fn delete(&mut self, target: Entry) -> usize {
        let before = self.entries.len();
        self.entries.retain(|&e| e != target);
        before - self.entries.len()
    }

    /// Scans every stored entry and appends those within `radius` of `target` to `out`. This is
    /// the one place the *original* radius (not a branch's remaining budget) is applied.
    pub fn search(&self, target: u64, radius: u32, out: &mut Vec<Entry>, stats: &mut SearchStats) {
        stats.leaves_scanned += 1;
        for &entry in &self.entries {
            stats.entries_compared += 1;
            if hamming(entry.code, target) <= radius {
                out.push(entry);
            }
        }
    }

    fn memory_usage(&self) -> usize {
        std::mem::size_of::<Self>() + self.entries.capacity() * std::mem::size_of::<Entry>()
    }
}

impl Default for Leaf {
    fn default() -> Self {
        Self::new()
    }
}

/// A fixed 16-way fan-out. Every slot is either absent or owns a subtree; the slot index `i` is
/// exactly the chunk value a code must route through to reach it.
pub struct Internal {
    children: [Option<Box<Node>>; FANOUT],
}

impl Internal {
    fn empty() -> Self {
        Self {
            children: Default::default(),
        }
    }

    /// Splits a leaf that has grown past capacity into a fresh internal node, re-routing every
    /// entry the leaf held through its chunk at `level`. One level only: a child leaf that is
    /// itself still over capacity is left that way until a later insert drives its own split.
    pub fn split(leaf: Leaf, level: u32) -> Self {
        let mut internal = Internal::empty();
        for entry in leaf.entries {
            let slot = chunk(entry.code, level);
            internal.child_or_insert_leaf(slot).add_entry(entry);
        }
        internal
    }

    pub fn has_child(&self, i: usize) -> bool {
        self.children[i].is_some()
    }

    /// Non-mutating lookup. Read paths (search, delete) must use this rather than the
    /// auto-creating accessor below, so they never pollute the tree with empty leaves.
    pub fn child(&self, i: usize) -> Option<&Node> {
        self.children[i].as_deref()
    }

    pub fn child_mut(&mut self, i: usize) -> Option<&mut Node> {
        self.children[i].as_deref_mut()
    }

    /// Returns the child at slot `i`, creating an empty leaf there first if none exists. Used
    /// only by insert's descent, which always needs somewhere to route the entry to.
    pub fn child_or_insert_leaf(&mut self, i: usize) -> &mut Node {
        self.children[i].get_or_insert_with(|| Box::new(Node::empty_leaf()))
    }

    pub fn set_child(&mut self, i: usize, node: Node) {
        self.children[i] = Some(Box::new(node));
    }

    pub fn children(&self) -> impl Iterator<Item = (usize, &Node)> {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.as_deref().map(|node| (i, node)))
    }

    /// Expands this node one level during range search: for every present child, computes the
    /// chunk-wise sub-distance `δ` to `target_chunk` and yields `(child, new_remaining_radius)`
    /// for every child whose budget does not go negative.
    pub fn expand<'a>(
        &'a self,
        target_chunk: usize,
        remaining_radius: u32,
    ) -> impl Iterator<Item = (&'a Node, u32)> + 'a {
        self.children().filter_map(move |(i, child)| {
            let delta = chunk_distance(target_chunk, i);
            (delta <= remaining_radius).then(|| (child, remaining_radius - delta))
        })
    }

    /// Fast-path expansion: only the exact chunk slot and its four single-bit neighbours.
    pub fn expand_fast<'a>(
        &'a self,
        target_chunk: usize,
        remaining_radius: u32,
    ) -> impl Iterator<Item = (&'a Node, u32)> + 'a {
        let exact = self
            .child(target_chunk)
            .map(|node| (node, remaining_radius));
        let neighbors = (0..4u32).filter_map(move |bit| {
            if remaining_radius == 0 {
                return None;
            }
            let slot = target_chunk ^ (1usize << bit);
            self.child(slot).map(|node| (node, remaining_radius - 1))
        });
        exact.into_iter().chain(neighbors)
    }

    fn table_memory_usage(&self) -> usize {
        std::mem::size_of::<Self>()
    }
}

impl Node {
    fn add_entry(&mut self, entry: Entry) {
        match self {
            Node::Leaf(leaf) => leaf.add(entry),
            Node::Internal(_) => unreachable!("split only routes entries into fresh leaves"),
        }
    }

    /// Descends from `self` (at `level`) to insert `entry`, splitting the terminating leaf into
    /// an internal node if it grows past `leaf_capacity` and has not yet reached `MAX_DEPTH`.
    pub fn insert(&mut self, entry: Entry, level: u32, leaf_capacity: usize) {
        match self {
            Node::Leaf(leaf) => {
                leaf.add(entry);
                if leaf.over_capacity(leaf_capacity) && level < MAX_DEPTH {
                    let drained = std::mem::take(leaf);
                    *self = Node::Internal(Internal::split(drained, level));
                }
            }
            Node::Internal(internal) => {
                let slot = chunk(entry.code, level);
                internal
                    .child_or_insert_leaf(slot)
                    .insert(entry, level + 1, leaf_capacity);
            }
        }
    }

    /// Exact-path descent to delete every entry matching `target`. No-op (and no allocation) if
    /// the routing path is not present.
    pub fn delete(&mut self, target: Entry, level: u32) -> usize {
        match self {
            Node::Leaf(leaf) => leaf.delete(target),
            Node::Internal(internal) => {
                let slot = chunk(target.code, level);
                match internal.child_mut(slot) {
                    Some(child) => child.delete(target, level + 1),
                    None => 0,
                }
            }
        }
    }
}
