use log::trace;

use crate::chunk::{chunk, CODE_BITS, LEAF_CAPACITY};
use crate::entry::Entry;
use crate::node::Node;
use crate::stats::SearchStats;

/// A fan-out-16 trie over 64-bit Hamming fingerprints, answering radius-bounded range queries by
/// pruning branches whose accumulated chunk-wise distance already exceeds the query radius.
///
/// ```
/// # use hf_trie::{Hwt, Entry};
/// let mut hwt = Hwt::new();
/// hwt.insert(Entry::new(0, 0x00));
/// hwt.insert(Entry::new(1, 0x01));
/// hwt.insert(Entry::new(2, 0x03));
/// let mut close = hwt.range_search(0x00, 1);
/// close.sort_by_key(|e| e.id);
/// assert_eq!(close, vec![Entry::new(0, 0x00), Entry::new(1, 0x01)]);
/// ```
pub struct Hwt {
    root: Option<Node>,
    len: usize,
    leaf_capacity: usize,
}

impl Hwt {
    /// Builds an empty tree using the recommended default leaf capacity (`LEAF_CAPACITY = 10`).
    pub fn new() -> Self {
        Self::with_leaf_capacity(LEAF_CAPACITY)
    }

    /// Builds an empty tree whose leaves split once they exceed `leaf_capacity` entries.
    ///
    /// Panics if `leaf_capacity` is zero, since a leaf that splits at zero entries could never
    /// hold anything.
    pub fn with_leaf_capacity(leaf_capacity: usize) -> Self {
        assert!(leaf_capacity > 0, "leaf_capacity must be at least 1");
        Self {
            root: None,
            len: 0,
            leaf_capacity,
        }
    }

    /// Number of entries currently stored (tracked as a running counter, updated by `insert`,
    /// `delete`, and `clear` — mirroring the teacher's own `Internal::count` running-counter
    /// technique rather than rescanning the tree on every call).
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Inserts one entry. Always succeeds and always increases `len()` by one: no duplicate
    /// detection is performed, matching the spec's non-goals.
    ///
    /// ```
    /// # use hf_trie::{Hwt, Entry};
    /// let mut hwt = Hwt::new();
    /// hwt.insert(Entry::new(0, 0b101));
    /// assert_eq!(hwt.len(), 1);
    /// ```
    pub fn insert(&mut self, entry: Entry) {
        match &mut self.root {
            Some(root) => root.insert(entry, 0, self.leaf_capacity),
            None => {
                let mut leaf = Node::empty_leaf();
                leaf.insert(entry, 0, self.leaf_capacity);
                self.root = Some(leaf);
            }
        }
        self.len += 1;
        trace!(
            "insert id={} code={:#018x} -> len={}",
            entry.id,
            entry.code,
            self.len
        );
    }

    /// Removes every stored entry whose `(id, code)` both match `entry`. A no-op if the routing
    /// path does not lead to an occupied leaf; never allocates in that case.
    pub fn delete(&mut self, entry: Entry) {
        let removed = match &mut self.root {
            Some(root) => root.delete(entry, 0),
            None => 0,
        };
        self.len = self.len.saturating_sub(removed);
        if removed > 0 {
            trace!(
                "delete id={} code={:#018x} removed={} -> len={}",
                entry.id,
                entry.code,
                removed,
                self.len
            );
        }
    }

    /// Discards every node; equivalent to destruction followed by fresh construction, except the
    /// `Hwt` value itself (and its configured leaf capacity) is preserved.
    pub fn clear(&mut self) {
        self.root = None;
        self.len = 0;
    }

    /// An estimate, not a guarantee, of the tree's heap footprint in bytes.
    pub fn memory_usage(&self) -> usize {
        std::mem::size_of::<Self>() + self.root.as_ref().map_or(0, Node::memory_usage)
    }

    /// Returns every stored entry within Hamming distance `radius` of `target`. Exhaustive: no
    /// false positives, no false negatives. `radius` is saturated to `CODE_BITS` (64) if larger.
    pub fn range_search(&self, target: u64, radius: u32) -> Vec<Entry> {
        self.range_search_with_stats(target, radius).0
    }

    /// As [`Hwt::range_search`], additionally returning a [`SearchStats`] snapshot of the work
    /// this one call performed.
    pub fn range_search_with_stats(&self, target: u64, radius: u32) -> (Vec<Entry>, SearchStats) {
        self.search(target, radius, false)
    }

    /// A cheaper, heuristic range search: at each level only the target's exact chunk and its
    /// four single-bit chunk neighbours are explored, rather than every chunk within the
    /// remaining budget.
    ///
    /// **This variant is not guaranteed to be exhaustive.** It finds every match with
    /// overwhelming recall on clustered data (the expected workload: perceptual hashes,
    /// near-duplicate fingerprints), but on adversarial or high-radius queries it can miss valid
    /// matches that [`Hwt::range_search`] would find. Use the exact variant whenever completeness
    /// matters.
    pub fn range_search_fast(&self, target: u64, radius: u32) -> Vec<Entry> {
        self.range_search_fast_with_stats(target, radius).0
    }

    /// As [`Hwt::range_search_fast`], additionally returning a [`SearchStats`] snapshot.
    pub fn range_search_fast_with_stats(
        &self,
        target: u64,
        radius: u32,
    ) -> (Vec<Entry>, SearchStats) {
        self.search(target, radius, true)
    }

    /// Level-synchronised BFS shared by the exact and fast variants. A branch is a
    /// `(node, remaining_radius)` pair; the current level's branches are all expanded before any
    /// of the next level's are, so the traversal only ever needs two `Vec`s and a cheap swap.
    fn search(&self, target: u64, radius: u32, fast: bool) -> (Vec<Entry>, SearchStats) {
        let radius = radius.min(CODE_BITS);
        let mut results = Vec::new();
        let mut stats = SearchStats::default();

        let Some(root) = &self.root else {
            return (results, stats);
        };

        let mut current: Vec<(&Node, u32)> = vec![(root, radius)];
        let mut level = 0u32;
        while !current.is_empty() {
            let mut next = Vec::new();
            for (node, remaining) in current {
                stats.nodes_visited += 1;
                match node {
                    Node::Leaf(leaf) => leaf.search(target, radius, &mut results, &mut stats),
                    Node::Internal(internal) => {
                        let target_chunk = chunk(target, level);
                        let before = next.len();
                        if fast {
                            next.extend(internal.expand_fast(target_chunk, remaining));
                        } else {
                            next.extend(internal.expand(target_chunk, remaining));
                        }
                        let yielded = next.len() - before;
                        let total = internal.children().count();
                        stats.branches_pruned += (total - yielded) as u64;
                    }
                }
            }
            current = next;
            level += 1;
        }

        (results, stats)
    }

    /// Recomputes `len()` from scratch by walking the tree, per the BFS definition in the spec.
    /// Only used by tests to cross-check the O(1) running counter.
    #[cfg(test)]
    pub(crate) fn size_by_scan(&self) -> usize {
        self.root.as_ref().map_or(0, Node::len)
    }
}

impl Default for Hwt {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Hwt {
    /// A level-synchronised BFS dump: each line is either an internal node or a leaf, indented by
    /// depth, with leaves listing their entries.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Hwt {{ len: {} }}", self.len)?;
        let Some(root) = &self.root else {
            return Ok(());
        };

        let mut current = vec![(root, 0u32)];
        while !current.is_empty() {
            let mut next = Vec::new();
            for (node, level) in current {
                let indent = "  ".repeat(level as usize);
                match node {
                    Node::Leaf(leaf) => {
                        writeln!(f, "{indent}leaf@{level} entries={}", leaf.len())?;
                        for entry in leaf.entries() {
                            writeln!(f, "{indent}  id={} code={:#018x}", entry.id, entry.code)?;
                        }
                    }
                    Node::Internal(internal) => {
                        writeln!(f, "{indent}internal@{level}")?;
                        for (_, child) in internal.children() {
                            next.push((child, level + 1));
                        }
                    }
                }
            }
            current = next;
        }
        Ok(())
    }
}
