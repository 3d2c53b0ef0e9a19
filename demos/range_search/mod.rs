//! Demonstration harness comparing exact and fast range search, wired up as the
//! `demo_range_search` example target (see `[[example]]` in `Cargo.toml`).

use hf_trie::{Entry, Hwt};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

pub fn run(count: usize, radius: u32, queries: usize) {
    let mut rng = SmallRng::from_seed([5; 32]);
    let codes: Vec<u64> = (0..count).map(|_| rng.gen()).collect();

    let mut hwt = Hwt::new();
    for (i, &code) in codes.iter().enumerate() {
        hwt.insert(Entry::new(i as i64, code));
    }

    let targets: Vec<u64> = (0..queries).map(|_| rng.gen()).collect();

    let start = Instant::now();
    let mut total_matches = 0usize;
    for &target in &targets {
        let (matches, stats) = hwt.range_search_with_stats(target, radius);
        total_matches += matches.len();
        if total_matches % 1000 == 0 {
            println!("running stats sample: {stats:?}");
        }
    }
    let elapsed = start.elapsed();
    println!(
        "exact range_search: {queries} queries over {count} entries at radius {radius} \
         in {elapsed:?}, {total_matches} total matches"
    );

    let start = Instant::now();
    let mut total_fast_matches = 0usize;
    for &target in &targets {
        total_fast_matches += hwt.range_search_fast(target, radius).len();
    }
    let elapsed = start.elapsed();
    println!(
        "fast range_search_fast: {queries} queries in {elapsed:?}, {total_fast_matches} total \
         matches (heuristic, may undercount relative to exact)"
    );
}

fn main() {
    run(1 << 18, 8, 256);
}
