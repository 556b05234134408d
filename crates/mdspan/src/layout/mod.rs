//! Layout policies: how a multi-index is turned into a linear offset.
//!
//! A [`Layout`] is a zero-sized policy marker; its [`Mapping`] for a given
//! [`Extents`](trait@Extents) type does the arithmetic.
//!
//! - [`RowMajor`]: right-most index varies fastest.
//! - [`ColumnMajor`]: left-most index varies fastest.
//! - [`Strided`]: arbitrary per-dimension strides stored in the mapping.
//!
//! # Conversions
//!
//! [`MappingFrom`] covers the conversions that always succeed: between
//! mappings of the same layout with convertible extents, between row- and
//! column-major at rank 0 or 1, and into [`StridedMapping`] from any
//! always-unique, always-strided mapping. [`TryMappingFrom`] covers strided
//! to row- or column-major, which fails with
//! [`LayoutError::StrideMismatch`](crate::LayoutError::StrideMismatch) unless
//! the strides are exactly the ones the dense layout would produce.

mod column_major;
mod row_major;
mod strided;

pub use column_major::{ColumnMajor, ColumnMajorMapping};
pub use row_major::{RowMajor, RowMajorMapping};
pub use strided::{Strided, StridedMapping};

use crate::error::LayoutError;
use crate::extents::{Dims, Extents};
use std::fmt;

/// Layout policy marker.
pub trait Layout: Copy + fmt::Debug + Default + Send + Sync + 'static {
    /// Human-readable layout name used in errors and logs.
    const NAME: &'static str;

    /// The mapping of this layout for extents `E`.
    type Mapping<E: Extents>: Mapping<Extents = E, Layout = Self>;
}

/// Index-to-offset function for one extents type.
pub trait Mapping: Clone + fmt::Debug + PartialEq + Send + Sync + 'static {
    /// Shape the mapping is defined over.
    type Extents: Extents;

    /// Layout policy this mapping belongs to.
    type Layout: Layout;

    /// Every instance maps distinct indices to distinct offsets.
    const IS_ALWAYS_UNIQUE: bool;

    /// Every instance covers `0..required_span_size()` without gaps.
    const IS_ALWAYS_CONTIGUOUS: bool;

    /// Every instance has a constant stride per dimension.
    const IS_ALWAYS_STRIDED: bool;

    /// The extents this mapping was built over.
    fn extents(&self) -> Self::Extents;

    /// Linear offset of `index`.
    ///
    /// `index.len()` must equal the rank, which is checked in debug builds
    /// only. Components are not range-checked here.
    fn offset(&self, index: &[usize]) -> usize;

    /// Distance between consecutive elements along dimension `r`.
    fn stride(&self, r: usize) -> usize;

    /// Span size of the mapping: the product of the extents for dense
    /// layouts, `max(extent * stride)` for strided ones.
    fn required_span_size(&self) -> usize;

    /// One past the largest offset any valid index reaches, or 0 when the
    /// extents are empty. This is the buffer length indexing needs; a strided
    /// span can fall short of it or exceed it.
    fn required_buffer_len(&self) -> usize {
        self.required_span_size()
    }

    /// Offset of `index`, with the index length checked at compile time.
    #[inline]
    fn offset_of<const N: usize>(&self, index: [usize; N]) -> usize {
        const {
            assert!(
                N == <Self::Extents as Extents>::RANK,
                "index length must equal the rank"
            )
        };
        self.offset(&index)
    }

    /// All strides, in dimension order.
    fn strides(&self) -> Dims {
        (0..<Self::Extents as Extents>::RANK)
            .map(|r| self.stride(r))
            .collect()
    }

    /// Whether this instance is unique.
    fn is_unique(&self) -> bool {
        Self::IS_ALWAYS_UNIQUE
    }

    /// Whether this instance is contiguous.
    fn is_contiguous(&self) -> bool {
        Self::IS_ALWAYS_CONTIGUOUS
    }

    /// Whether this instance is strided.
    fn is_strided(&self) -> bool {
        Self::IS_ALWAYS_STRIDED
    }
}

/// Mappings fully determined by their extents.
pub trait MappingFromExtents: Mapping {
    /// Build the mapping for `extents`.
    fn from_extents(extents: Self::Extents) -> Self;
}

/// Infallible conversion from another mapping.
pub trait MappingFrom<Src: Mapping>: Mapping {
    /// Convert `src`.
    fn mapping_from(src: &Src) -> Self;
}

/// Conversion from another mapping that depends on its run-time strides.
pub trait TryMappingFrom<Src: Mapping>: Mapping {
    /// Convert `src`, or report the first dimension whose stride does not
    /// fit this layout.
    fn try_mapping_from(src: &Src) -> Result<Self, LayoutError>;
}

/// Debug-build check that an index has one component per dimension.
#[inline]
pub(crate) fn debug_check_rank<E: Extents>(index: &[usize]) {
    debug_assert_eq!(
        index.len(),
        E::RANK,
        "expected {} indices, got {}",
        E::RANK,
        index.len()
    );
}
