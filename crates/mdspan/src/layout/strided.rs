//! General strided layout with explicit per-dimension strides.

use super::{debug_check_rank, Layout, Mapping, MappingFrom};
use crate::error::LayoutError;
use crate::extents::{Dims, Extents, ExtentsFrom};

/// Strided layout policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Strided;

impl Layout for Strided {
    const NAME: &'static str = "strided";

    type Mapping<E: Extents> = StridedMapping<E>;
}

/// Mapping with one stored stride per dimension.
///
/// `offset(i) = Σ i[r] * stride[r]`. The strides are taken as given: nothing
/// checks that distinct indices land on distinct offsets.
#[derive(Clone, Debug, Hash)]
pub struct StridedMapping<E> {
    extents: E,
    strides: Dims,
}

impl<E: Extents> StridedMapping<E> {
    /// Mapping over `extents` with one stride per dimension. A stride array
    /// of the wrong length fails to compile.
    pub fn new<const N: usize>(extents: E, strides: [usize; N]) -> Self {
        const { assert!(N == E::RANK, "stride count must equal the rank") };
        Self {
            extents,
            strides: Dims::from_slice(&strides),
        }
    }

    /// Like [`new`](Self::new) with a run-time stride list.
    pub fn try_new(extents: E, strides: &[usize]) -> Result<Self, LayoutError> {
        if strides.len() != E::RANK {
            return Err(LayoutError::RankMismatch {
                expected: E::RANK,
                actual: strides.len(),
            });
        }
        Ok(Self {
            extents,
            strides: Dims::from_slice(strides),
        })
    }

    pub(crate) fn from_parts(extents: E, strides: Dims) -> Self {
        debug_assert_eq!(strides.len(), E::RANK);
        Self { extents, strides }
    }
}

/// Default extents with the strides a row-major mapping would use.
impl<E: Extents> Default for StridedMapping<E> {
    fn default() -> Self {
        let extents = E::default();
        let mut strides = Dims::from_elem(1, E::RANK);
        for r in (0..E::RANK.saturating_sub(1)).rev() {
            strides[r] = strides[r + 1] * extents.extent(r + 1);
        }
        Self { extents, strides }
    }
}

impl<E: Extents> Mapping for StridedMapping<E> {
    type Extents = E;
    type Layout = Strided;

    const IS_ALWAYS_UNIQUE: bool = true;
    const IS_ALWAYS_CONTIGUOUS: bool = false;
    const IS_ALWAYS_STRIDED: bool = true;

    #[inline]
    fn extents(&self) -> E {
        self.extents
    }

    #[inline]
    fn offset(&self, index: &[usize]) -> usize {
        debug_check_rank::<E>(index);
        index
            .iter()
            .zip(&self.strides)
            .map(|(&i, &s)| i * s)
            .sum()
    }

    fn stride(&self, r: usize) -> usize {
        self.strides.get(r).copied().unwrap_or(0)
    }

    fn required_span_size(&self) -> usize {
        let mut span = 1;
        for (r, &s) in self.strides.iter().enumerate() {
            let extent = self.extents.extent(r);
            if extent == 0 {
                return 0;
            }
            span = span.max(extent * s);
        }
        span
    }

    fn required_buffer_len(&self) -> usize {
        let mut last = 0;
        for (r, &s) in self.strides.iter().enumerate() {
            let extent = self.extents.extent(r);
            if extent == 0 {
                return 0;
            }
            last += (extent - 1) * s;
        }
        last + 1
    }

    fn strides(&self) -> Dims {
        self.strides.clone()
    }

    // Reported conservatively even when the strides happen to be dense.
    fn is_contiguous(&self) -> bool {
        false
    }
}

impl<E, E2> PartialEq<StridedMapping<E2>> for StridedMapping<E>
where
    E: Extents,
    E2: Extents,
{
    fn eq(&self, other: &StridedMapping<E2>) -> bool {
        self.extents.eq_extents(&other.extents) && self.strides == other.strides
    }
}

impl<E: Extents> Eq for StridedMapping<E> {}

/// Any always-unique, always-strided mapping, strided ones included. The
/// strides are read from the source one dimension at a time.
impl<E, M> MappingFrom<M> for StridedMapping<E>
where
    M: Mapping,
    E: ExtentsFrom<M::Extents>,
{
    fn mapping_from(src: &M) -> Self {
        const {
            assert!(
                M::IS_ALWAYS_UNIQUE && M::IS_ALWAYS_STRIDED,
                "only always-unique, always-strided mappings convert to strided"
            )
        };
        Self {
            extents: E::extents_from(&src.extents()),
            strides: (0..E::RANK).map(|r| src.stride(r)).collect(),
        }
    }
}
