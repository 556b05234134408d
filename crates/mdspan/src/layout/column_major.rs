//! Column-major (Fortran order) layout: the left-most index varies fastest.

use super::row_major::RowMajorMapping;
use super::strided::StridedMapping;
use super::{debug_check_rank, Layout, Mapping, MappingFrom, MappingFromExtents, TryMappingFrom};
use crate::error::LayoutError;
use crate::extents::{Extents, ExtentsFrom};

/// Column-major layout policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct ColumnMajor;

impl Layout for ColumnMajor {
    const NAME: &'static str = "column-major";

    type Mapping<E: Extents> = ColumnMajorMapping<E>;
}

/// Column-major mapping over extents `E`.
///
/// `stride(r)` is the product of the extents to the left of `r`.
#[derive(Clone, Copy, Debug, Default, Hash)]
pub struct ColumnMajorMapping<E> {
    extents: E,
}

impl<E: Extents> ColumnMajorMapping<E> {
    /// Mapping over `extents`.
    pub fn new(extents: E) -> Self {
        Self { extents }
    }
}

impl<E: Extents> Mapping for ColumnMajorMapping<E> {
    type Extents = E;
    type Layout = ColumnMajor;

    const IS_ALWAYS_UNIQUE: bool = true;
    const IS_ALWAYS_CONTIGUOUS: bool = true;
    const IS_ALWAYS_STRIDED: bool = true;

    #[inline]
    fn extents(&self) -> E {
        self.extents
    }

    #[inline]
    fn offset(&self, index: &[usize]) -> usize {
        debug_check_rank::<E>(index);
        let last = index.len().saturating_sub(1);
        let mut x = 0;
        for (r, &i) in index.iter().enumerate().rev() {
            if r != last {
                x *= self.extents.extent(r);
            }
            x += i;
        }
        x
    }

    fn stride(&self, r: usize) -> usize {
        (0..r.min(E::RANK)).map(|d| self.extents.extent(d)).product()
    }

    fn required_span_size(&self) -> usize {
        self.extents.size()
    }
}

impl<E: Extents> MappingFromExtents for ColumnMajorMapping<E> {
    fn from_extents(extents: E) -> Self {
        Self::new(extents)
    }
}

impl<E, E2> PartialEq<ColumnMajorMapping<E2>> for ColumnMajorMapping<E>
where
    E: Extents,
    E2: Extents,
{
    fn eq(&self, other: &ColumnMajorMapping<E2>) -> bool {
        self.extents.eq_extents(&other.extents)
    }
}

impl<E: Extents> Eq for ColumnMajorMapping<E> {}

impl<E, E2> MappingFrom<ColumnMajorMapping<E2>> for ColumnMajorMapping<E>
where
    E: ExtentsFrom<E2>,
    E2: Extents,
{
    fn mapping_from(src: &ColumnMajorMapping<E2>) -> Self {
        Self::new(E::extents_from(&src.extents))
    }
}

/// Rank 0 and 1 only; see the matching row-major conversion.
impl<E, E2> MappingFrom<RowMajorMapping<E2>> for ColumnMajorMapping<E>
where
    E: ExtentsFrom<E2>,
    E2: Extents,
{
    fn mapping_from(src: &RowMajorMapping<E2>) -> Self {
        const {
            assert!(
                E::RANK <= 1,
                "row-major converts to column-major only at rank 0 or 1"
            )
        };
        Self::new(E::extents_from(&src.extents()))
    }
}

impl<E, E2> TryMappingFrom<StridedMapping<E2>> for ColumnMajorMapping<E>
where
    E: ExtentsFrom<E2>,
    E2: Extents,
{
    fn try_mapping_from(src: &StridedMapping<E2>) -> Result<Self, LayoutError> {
        let extents = E::extents_from(&src.extents());
        let mut expected = 1;
        for r in 0..E::RANK {
            let actual = src.stride(r);
            if actual != expected {
                tracing::debug!(
                    layout = ColumnMajor::NAME,
                    dim = r,
                    expected,
                    actual,
                    "rejected strided mapping conversion"
                );
                return Err(LayoutError::StrideMismatch {
                    layout: ColumnMajor::NAME,
                    dim: r,
                    expected,
                    actual,
                });
            }
            expected *= extents.extent(r);
        }
        Ok(Self::new(extents))
    }
}
