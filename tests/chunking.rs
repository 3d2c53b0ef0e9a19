//! Chunk-arithmetic and split-depth invariants (spec properties 5 and 6), exercised as
//! integration tests against the public API rather than the private `chunk` module directly.

use hf_trie::{chunk, Entry, Hwt, MAX_DEPTH};

#[test]
fn chunk_arithmetic_matches_spec_constant() {
    let code = 0x0123_4567_89AB_CDEF_u64;
    for level in 0..MAX_DEPTH {
        assert_eq!(chunk(code, level), level as usize);
    }
}

#[test]
fn split_reroutes_every_former_leaf_entry_one_level_deeper() {
    // Eleven entries sharing the first three nibbles but nothing below that: the first split
    // happens at level 0 (root promoted to internal), re-routing on chunk(code, 0).
    let mut hwt = Hwt::new();
    let shared_prefix = 0x1230_0000_0000_0000u64;
    for i in 0..11u64 {
        hwt.insert(Entry::new(i as i64, shared_prefix | (i << 48)));
    }

    // Every entry must still be exactly reachable by its own code at radius 0, proving the
    // descent `chunk(code, 0..=level)` still finds it after the split.
    for i in 0..11u64 {
        let code = shared_prefix | (i << 48);
        let found = hwt.range_search(code, 0);
        assert!(found.iter().any(|e| e.code == code && e.id == i as i64));
    }
    assert_eq!(hwt.len(), 11);
}

#[test]
fn with_leaf_capacity_splits_earlier_than_default() {
    let shared_prefix = 0xB000_0000_0000_0000u64;
    let codes: Vec<u64> = (0..3u64).map(|i| shared_prefix | i).collect();

    let mut default_capacity = Hwt::new();
    for (i, &code) in codes.iter().enumerate() {
        default_capacity.insert(Entry::new(i as i64, code));
    }
    let default_dump = default_capacity.to_string();
    assert!(
        default_dump.contains("leaf@0"),
        "3 entries should stay in a single leaf at the default capacity of 10:\n{default_dump}"
    );

    let mut small_capacity = Hwt::with_leaf_capacity(2);
    for (i, &code) in codes.iter().enumerate() {
        small_capacity.insert(Entry::new(i as i64, code));
    }
    let small_dump = small_capacity.to_string();
    assert!(
        small_dump.contains("internal@0"),
        "3 entries should have split the root with a leaf_capacity of 2:\n{small_dump}"
    );
    assert!(
        !small_dump.contains("leaf@0"),
        "the original depth-0 leaf must not survive the split:\n{small_dump}"
    );
    assert_eq!(small_capacity.len(), 3);
}

#[test]
#[should_panic(expected = "leaf_capacity must be at least 1")]
fn with_leaf_capacity_of_zero_panics() {
    Hwt::with_leaf_capacity(0);
}

#[test]
fn split_promotes_root_leaf_to_depth_one_internal() {
    let mut hwt = Hwt::new();
    let shared_prefix = 0xA000_0000_0000_0000u64;
    for i in 0..11u64 {
        hwt.insert(Entry::new(i as i64, shared_prefix | i));
    }

    let dump = hwt.to_string();
    assert!(
        dump.contains("internal@0"),
        "root should have split into an internal node:\n{dump}"
    );
    assert!(
        !dump.contains("leaf@0"),
        "the original depth-0 leaf must not survive the split:\n{dump}"
    );
}
