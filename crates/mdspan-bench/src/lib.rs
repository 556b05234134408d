//! Benchmark fixtures for the mdspan crate.
//!
//! - [`iota`]: a buffer holding `0..n` as `f64`
//! - [`lcg_indices`]: deterministic pseudo-random multi-indices within a shape

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use mdspan::Dims;

/// Shape used by the rank-3 benchmarks: 64 x 64 x 64 (262K elements).
pub const CUBE: [usize; 3] = [64, 64, 64];

/// A buffer of `n` elements holding `0.0, 1.0, 2.0, ...`.
pub fn iota(n: usize) -> Vec<f64> {
    (0..n).map(|i| i as f64).collect()
}

/// Generate `count` multi-indices, each component below the matching entry
/// of `dims`, from a 64-bit linear congruential generator seeded by `seed`.
///
/// Every entry of `dims` must be non-zero.
pub fn lcg_indices(count: usize, dims: &[usize], seed: u64) -> Vec<Dims> {
    let mut state = seed;
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        let index = dims
            .iter()
            .map(|&d| {
                state = state
                    .wrapping_mul(6364136223846793005)
                    .wrapping_add(1442695040888963407);
                ((state >> 33) % d as u64) as usize
            })
            .collect();
        out.push(index);
    }
    out
}
