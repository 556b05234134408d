//! Mapping compliance test helpers.
//!
//! These functions verify that a [`Mapping`] implementation satisfies the
//! invariants required by the trait contract. Every check walks the full
//! index space, so keep the extents small. Reused by the row-major,
//! column-major, strided, and submdspan test modules.

use crate::extents::{Dims, Extents};
use crate::layout::Mapping;
use indexmap::IndexSet;
use proptest::prelude::*;

/// Call `f` on every multi-index of `extents`, last dimension fastest.
pub fn for_each_index<E: Extents>(extents: &E, mut f: impl FnMut(&[usize])) {
    let dims = extents.to_dims();
    if dims.contains(&0) {
        return;
    }
    let mut index: Dims = Dims::from_elem(0, dims.len());
    loop {
        f(&index);
        let mut r = dims.len();
        loop {
            if r == 0 {
                return;
            }
            r -= 1;
            index[r] += 1;
            if index[r] < dims[r] {
                break;
            }
            index[r] = 0;
        }
    }
}

/// Assert that every offset is below `required_buffer_len()` and that the
/// largest one is its last slot. Dense mappings also need the span to match.
pub fn assert_offsets_within_buffer<M: Mapping>(mapping: &M) {
    let len = mapping.required_buffer_len();
    let mut largest = None;
    for_each_index(&mapping.extents(), |index| {
        let offset = mapping.offset(index);
        assert!(
            offset < len,
            "offset({index:?}) = {offset} not below required_buffer_len {len}"
        );
        largest = largest.max(Some(offset));
    });
    match largest {
        Some(max) => assert_eq!(max + 1, len, "largest offset {max} leaves slack in {len}"),
        None => assert_eq!(len, 0, "empty mapping needs a buffer of {len}"),
    }
    if M::IS_ALWAYS_CONTIGUOUS {
        assert_eq!(mapping.required_span_size(), len);
    }
}

/// Assert that a unique mapping sends distinct indices to distinct offsets.
pub fn assert_offsets_unique<M: Mapping>(mapping: &M) {
    if !mapping.is_unique() {
        return;
    }
    let mut seen = IndexSet::new();
    for_each_index(&mapping.extents(), |index| {
        let offset = mapping.offset(index);
        assert!(
            seen.insert(offset),
            "offset {offset} of {index:?} already produced by another index"
        );
    });
    assert_eq!(seen.len(), mapping.extents().size());
}

/// Assert that `stride(r)` equals the offset step between neighbours along
/// dimension `r`.
pub fn assert_strides_match_offsets<M: Mapping>(mapping: &M) {
    if !mapping.is_strided() {
        return;
    }
    let extents = mapping.extents();
    for_each_index(&extents, |index| {
        let base = mapping.offset(index);
        let mut next: Dims = Dims::from_slice(index);
        for r in 0..<M::Extents as Extents>::RANK {
            if index[r] + 1 >= extents.extent(r) {
                continue;
            }
            next[r] += 1;
            let step = mapping.offset(&next) - base;
            assert_eq!(
                step,
                mapping.stride(r),
                "stride({r}) = {} but stepping {index:?} along {r} moves {step}",
                mapping.stride(r)
            );
            next[r] -= 1;
        }
    });
}

/// Assert that a contiguous mapping hits every offset in
/// `0..required_span_size()`.
pub fn assert_contiguous_is_dense<M: Mapping>(mapping: &M) {
    if !mapping.is_contiguous() {
        return;
    }
    let mut seen = IndexSet::new();
    for_each_index(&mapping.extents(), |index| {
        seen.insert(mapping.offset(index));
    });
    let span = mapping.required_span_size();
    if mapping.extents().size() == 0 {
        assert_eq!(span, 0, "empty contiguous mapping has span {span}");
        return;
    }
    assert_eq!(
        seen.len(),
        span,
        "contiguous mapping reaches {} of {span} offsets",
        seen.len()
    );
}

/// Run all 4 compliance checks on a mapping.
pub fn run_full_compliance<M: Mapping>(mapping: &M) {
    assert_offsets_within_buffer(mapping);
    assert_offsets_unique(mapping);
    assert_strides_match_offsets(mapping);
    assert_contiguous_is_dense(mapping);
}

/// Strategy for `rank` extents in `1..6` together with one valid index.
pub fn arb_dims_and_index(rank: usize) -> impl Strategy<Value = (Vec<usize>, Vec<usize>)> {
    proptest::collection::vec(1usize..6, rank).prop_flat_map(|dims| {
        let index: Vec<_> = dims.iter().map(|&d| 0..d).collect();
        (Just(dims), index)
    })
}
