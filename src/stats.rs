/// Per-call accounting for a single `range_search`/`range_search_fast` invocation.
///
/// The teacher crate tracks a global, process-wide count of distance evaluations for
/// benchmarking; this crate deliberately avoids that shared mutable state. Instead, the
/// `_with_stats` entry points thread a `SearchStats` value through the traversal on the stack and
/// hand it back to the caller alongside the matches, so benchmark and demo code gets the same
/// telemetry without a global.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct SearchStats {
    /// Internal and leaf nodes dequeued from the BFS work queue.
    pub nodes_visited: u64,
    /// Leaves whose entries were individually rescanned.
    pub leaves_scanned: u64,
    /// Entry-to-target Hamming distance computations performed at leaves.
    pub entries_compared: u64,
    /// Present child slots that were not enqueued for the next level: for `range_search`, slots
    /// whose remaining radius would have gone negative; for `range_search_fast`, every slot
    /// outside the exact chunk and its four single-bit neighbours (including neighbour slots
    /// skipped because the remaining radius had already reached zero).
    pub branches_pruned: u64,
}
