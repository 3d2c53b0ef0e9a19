/// A single stored fingerprint.
///
/// `id` is an opaque, caller-assigned identifier; `code` is the 64-bit fingerprint itself. Two
/// entries are equal iff both fields match, and entries are otherwise ordinary `Copy` value
/// types — the tree never interprets `id` beyond storing and returning it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Entry {
    pub id: i64,
    pub code: u64,
}

impl Entry {
    pub fn new(id: i64, code: u64) -> Self {
        Self { id, code }
    }
}
