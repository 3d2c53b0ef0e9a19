//! Demonstration harness for bulk inserts, wired up as the `demo_insert` example target (see
//! `[[example]]` in `Cargo.toml`).

use hf_trie::{Entry, Hwt};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::time::Instant;

pub fn run(count: usize) {
    let mut rng = SmallRng::from_seed([5; 32]);
    let codes: Vec<u64> = (0..count).map(|_| rng.gen()).collect();

    let mut hwt = Hwt::new();
    let start = Instant::now();
    for (i, &code) in codes.iter().enumerate() {
        hwt.insert(Entry::new(i as i64, code));
    }
    let elapsed = start.elapsed();
    println!(
        "inserted {count} entries in {elapsed:?} ({:.0} entries/sec), memory_usage={} bytes",
        count as f64 / elapsed.as_secs_f64(),
        hwt.memory_usage(),
    );
}

fn main() {
    run(1 << 16);
}
