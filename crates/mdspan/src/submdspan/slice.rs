//! Slice specifications and their type-level kinds.

use super::state::{ColStart, ColTail, Reject, RowStart, RowTail, SliceState};
use crate::extent::{Dyn, Extent};
use crate::extents::{Cons, Extents};
use std::ops::{Range, RangeFull};

/// Run-time form of one slice specification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Slice {
    /// Fix the dimension at one index and drop it.
    Index(usize),
    /// Keep the half-open range `lower..upper`; the result is dynamic.
    Range(usize, usize),
    /// Keep the whole dimension, static or dynamic as before.
    Full,
}

/// Marker selecting the whole of a dimension.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct FullExtent;

/// The [`FullExtent`] marker.
pub const FULL_EXTENT: FullExtent = FullExtent;

/// Kind of a single-index specification.
#[derive(Clone, Copy, Debug, Default)]
pub struct IndexKind;

/// Kind of a range specification.
#[derive(Clone, Copy, Debug, Default)]
pub struct RangeKind;

/// Kind of a full-extent specification.
#[derive(Clone, Copy, Debug, Default)]
pub struct FullKind;

/// A value usable as one slice specification.
///
/// | Type | Kind |
/// |------|------|
/// | `usize` | index |
/// | `Range<usize>`, `(usize, usize)` | half-open range |
/// | [`FullExtent`], `RangeFull` (`..`) | full extent |
///
/// Integer literals need a type: write `2usize` and `1..3usize`.
pub trait SliceSpec {
    /// Type-level kind, which decides the result's extents and layout.
    type Kind: SliceKind;

    /// Run-time form.
    fn to_slice(&self) -> Slice;
}

impl SliceSpec for usize {
    type Kind = IndexKind;

    fn to_slice(&self) -> Slice {
        Slice::Index(*self)
    }
}

impl SliceSpec for Range<usize> {
    type Kind = RangeKind;

    fn to_slice(&self) -> Slice {
        Slice::Range(self.start, self.end)
    }
}

impl SliceSpec for (usize, usize) {
    type Kind = RangeKind;

    fn to_slice(&self) -> Slice {
        Slice::Range(self.0, self.1)
    }
}

impl SliceSpec for FullExtent {
    type Kind = FullKind;

    fn to_slice(&self) -> Slice {
        Slice::Full
    }
}

impl SliceSpec for RangeFull {
    type Kind = FullKind;

    fn to_slice(&self) -> Slice {
        Slice::Full
    }
}

/// What one slice kind does to the extents and to each layout state.
///
/// The `From*` types are the transitions of the layout automaton; see
/// [`SliceState`].
pub trait SliceKind {
    /// Result extents when this kind is applied to slot `H` in front of the
    /// already sliced tail `T`.
    type Sub<H: Extent, T: Extents>: Extents;

    /// Next state after [`RowStart`].
    type FromRowStart: SliceState;
    /// Next state after [`RowTail`].
    type FromRowTail: SliceState;
    /// Next state after [`ColStart`].
    type FromColStart: SliceState;
    /// Next state after [`ColTail`].
    type FromColTail: SliceState;
}

impl SliceKind for IndexKind {
    type Sub<H: Extent, T: Extents> = T;

    type FromRowStart = RowStart;
    type FromRowTail = Reject;
    type FromColStart = ColTail;
    type FromColTail = ColTail;
}

impl SliceKind for RangeKind {
    type Sub<H: Extent, T: Extents> = Cons<Dyn, T>;

    type FromRowStart = RowTail;
    type FromRowTail = Reject;
    type FromColStart = ColTail;
    type FromColTail = Reject;
}

impl SliceKind for FullKind {
    type Sub<H: Extent, T: Extents> = Cons<H, T>;

    type FromRowStart = RowTail;
    type FromRowTail = RowTail;
    type FromColStart = ColStart;
    type FromColTail = Reject;
}
