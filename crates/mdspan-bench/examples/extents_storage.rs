//! Static extents take no space.
//!
//! Builds a rank-5 extents with three static and two dynamic dimensions,
//! shows that only the dynamic ones occupy storage, and prints every extent.

use mdspan::{DExtents, Extents};
use std::mem::size_of;

type Mixed = Extents![3, 4, dyn, dyn, 7];

fn main() {
    println!("=== Extents storage ===\n");

    let m = Mixed::from_array([3, 4, 5, 6, 7]);
    assert_eq!(size_of::<Mixed>(), 2 * size_of::<usize>());

    println!("{m:?}");
    println!(
        "  rank={} rank_dynamic={} size_of={} bytes",
        Mixed::RANK,
        Mixed::RANK_DYNAMIC,
        size_of::<Mixed>()
    );
    for r in 0..Mixed::RANK {
        let kind = if Mixed::is_dynamic(r) { "dynamic" } else { "static" };
        println!("  extent({r}) = {} ({kind})", m.extent(r));
    }

    println!("\nFor comparison:");
    println!(
        "  Extents![3, 4, 5, 6, 7]: {} bytes",
        size_of::<Extents![3, 4, 5, 6, 7]>()
    );
    println!("  DExtents<5>:             {} bytes", size_of::<DExtents<5>>());
}
