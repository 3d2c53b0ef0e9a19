//! # `hf-trie`
//!
//! An in-memory index over 64-bit binary fingerprints that answers radius-bounded Hamming range
//! queries: given a target code and a radius `r`, return every stored entry whose Hamming
//! distance to the target is `<= r`. It is built for datasets of 10^5-10^8 entries where a
//! sequential scan's O(N) popcounts per query is too slow, and where the data is expected to
//! contain clusters of near-duplicates — perceptual hashes, SimHash, or other locality-sensitive
//! fingerprints.
//!
//! ## The HF-Trie
//!
//! The tree partitions a 64-bit code into 16 chunks of 4 bits each, most-significant chunk
//! first, and routes an entry through one 16-way fan-out per chunk:
//!
//! ```no_build
//! code:    0101 1100 ... (16 nibbles)
//! level:      0    1  ...
//! ```
//!
//! Every internal node has exactly 16 child slots, one per possible chunk value. A leaf holds a
//! small bucket of entries that all share the routing prefix that led to it; once a leaf grows
//! past `LEAF_CAPACITY` entries (and the tree has not yet reached `MAX_DEPTH`), it is replaced by
//! a fresh internal node and its entries are re-routed one level deeper.
//!
//! ## Pruning a range search
//!
//! The key fact that makes range search sub-linear: the four bits that route an entry into a
//! particular child slot `i` differ from the corresponding four bits of the query target in
//! exactly `popcount(target_chunk XOR i)` positions, call it `δ`. Those `δ` bit differences are
//! unavoidably part of the entry's total Hamming distance to the target — no matter what the
//! entry's remaining bits look like, it cannot be closer to the target than `δ`. So a branch can
//! carry a *remaining radius* budget, starting at the query radius, and have `δ` subtracted from
//! it every time it descends through a chunk. The moment that budget would go negative, the
//! branch is provably unable to contain a match and can be pruned without looking at a single
//! stored entry.
//!
//! Unlike a depth-first recursive descent, this crate's traversal is a level-synchronised
//! breadth-first search: the tree processes one whole depth of the frontier before starting the
//! next, using a pair of plain `Vec`s and a cheap swap rather than a growable recursion stack.
//! This keeps the pruning arithmetic (§ above) local to a single expansion step and makes it
//! trivial to reason about which branches survive a given level.
//!
//! Two traversal variants are provided:
//!
//! - [`Hwt::range_search`] is exact: every child slot's `δ` is checked against the remaining
//!   budget, so the result is guaranteed complete.
//! - [`Hwt::range_search_fast`] is a cheaper heuristic: only the exact target chunk and its four
//!   single-bit neighbours are explored at each level, skipping every other slot regardless of
//!   its actual `δ`. This has overwhelming recall on clustered data, but is not guaranteed
//!   exhaustive — prefer the exact variant whenever completeness matters.
//!
//! ## Scope
//!
//! This crate implements the trie itself: insertion and splitting, exact-path deletion, the two
//! range-search variants, and bookkeeping (`len`, `clear`, `memory_usage`). It does not persist to
//! disk, support concurrent mutation, or implement approximate nearest-neighbor search; see the
//! crate's design notes for the full list of non-goals.

mod chunk;
mod entry;
mod hwt;
mod node;
mod stats;

pub use chunk::{chunk, mask, CHUNK_BITS, CODE_BITS, FANOUT, LEAF_CAPACITY, MAX_DEPTH};
pub use entry::Entry;
pub use hwt::Hwt;
pub use stats::SearchStats;
