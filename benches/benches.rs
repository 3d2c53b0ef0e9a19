mod insert;

use criterion::*;

criterion_main! {
    insert::benches,
    range_search::benches,
}
