//! Type-level automaton choosing the layout of a sub-view.
//!
//! Slice kinds are fed left to right into an automaton started in the
//! source layout's start state. The state reached after the last slice
//! names the result layout.
//!
//! ```text
//! row-major      accepts  Index* (Range | Full)? Full*
//!   RowStart --Index--> RowStart
//!   RowStart --Range/Full--> RowTail
//!   RowTail  --Full--> RowTail
//!
//! column-major   accepts  Full* Range? Index*
//!   ColStart --Full--> ColStart
//!   ColStart --Range/Index--> ColTail
//!   ColTail  --Index--> ColTail
//! ```
//!
//! Every other transition goes to `Reject`, which is absorbing and yields
//! the strided layout. A strided source starts in `Reject`.

use super::slice::SliceKind;
use crate::extents::{Dims, Extents};
use crate::layout::{
    ColumnMajor, ColumnMajorMapping, Layout, RowMajor, RowMajorMapping, Strided, StridedMapping,
};

/// One state of the layout automaton.
pub trait SliceState {
    /// Layout of the result if slicing ends in this state.
    type Layout: SubmdspanLayout;

    /// State after consuming a slice of kind `K`.
    type Step<K: SliceKind>: SliceState;
}

/// Row-major source, only leading indices seen so far.
#[derive(Debug)]
pub struct RowStart;

/// Row-major source, the first kept dimension has been seen.
#[derive(Debug)]
pub struct RowTail;

/// Column-major source, only leading full extents seen so far.
#[derive(Debug)]
pub struct ColStart;

/// Column-major source, past the last kept dimension.
#[derive(Debug)]
pub struct ColTail;

/// The result needs explicit strides.
#[derive(Debug)]
pub struct Reject;

impl SliceState for RowStart {
    type Layout = RowMajor;
    type Step<K: SliceKind> = K::FromRowStart;
}

impl SliceState for RowTail {
    type Layout = RowMajor;
    type Step<K: SliceKind> = K::FromRowTail;
}

impl SliceState for ColStart {
    type Layout = ColumnMajor;
    type Step<K: SliceKind> = K::FromColStart;
}

impl SliceState for ColTail {
    type Layout = ColumnMajor;
    type Step<K: SliceKind> = K::FromColTail;
}

impl SliceState for Reject {
    type Layout = Strided;
    type Step<K: SliceKind> = Reject;
}

/// A layout that can be the source or the result of
/// [`submdspan`](super::submdspan()).
pub trait SubmdspanLayout: Layout {
    /// Automaton state for a source of this layout.
    type Start: SliceState;

    /// Mapping of a result in this layout, given the kept extents and the
    /// source strides of the kept dimensions.
    fn sub_mapping<E: Extents>(extents: E, strides: Dims) -> Self::Mapping<E>;
}

impl SubmdspanLayout for RowMajor {
    type Start = RowStart;

    fn sub_mapping<E: Extents>(extents: E, _strides: Dims) -> RowMajorMapping<E> {
        RowMajorMapping::new(extents)
    }
}

impl SubmdspanLayout for ColumnMajor {
    type Start = ColStart;

    fn sub_mapping<E: Extents>(extents: E, _strides: Dims) -> ColumnMajorMapping<E> {
        ColumnMajorMapping::new(extents)
    }
}

impl SubmdspanLayout for Strided {
    type Start = Reject;

    fn sub_mapping<E: Extents>(extents: E, strides: Dims) -> StridedMapping<E> {
        StridedMapping::from_parts(extents, strides)
    }
}
