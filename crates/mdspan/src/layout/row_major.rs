//! Row-major (C order) layout: the right-most index varies fastest.

use super::column_major::ColumnMajorMapping;
use super::strided::StridedMapping;
use super::{debug_check_rank, Layout, Mapping, MappingFrom, MappingFromExtents, TryMappingFrom};
use crate::error::LayoutError;
use crate::extents::{Extents, ExtentsFrom};

/// Row-major layout policy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct RowMajor;

impl Layout for RowMajor {
    const NAME: &'static str = "row-major";

    type Mapping<E: Extents> = RowMajorMapping<E>;
}

/// Row-major mapping over extents `E`.
///
/// `stride(r)` is the product of the extents to the right of `r`.
#[derive(Clone, Copy, Debug, Default, Hash)]
pub struct RowMajorMapping<E> {
    extents: E,
}

impl<E: Extents> RowMajorMapping<E> {
    /// Mapping over `extents`.
    pub fn new(extents: E) -> Self {
        Self { extents }
    }
}

impl<E: Extents> Mapping for RowMajorMapping<E> {
    type Extents = E;
    type Layout = RowMajor;

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
        // Horner's rule from the left: x = x * extent(r) + index[r].
        let mut x = 0;
        for (r, &i) in index.iter().enumerate() {
            if r != 0 {
                x *= self.extents.extent(r);
            }
            x += i;
        }
        x
    }

    fn stride(&self, r: usize) -> usize {
        (r + 1..E::RANK).map(|d| self.extents.extent(d)).product()
    }

    fn required_span_size(&self) -> usize {
        self.extents.size()
    }
}

impl<E: Extents> MappingFromExtents for RowMajorMapping<E> {
    fn from_extents(extents: E) -> Self {
        Self::new(extents)
    }
}

impl<E, E2> PartialEq<RowMajorMapping<E2>> for RowMajorMapping<E>
where
    E: Extents,
    E2: Extents,
{
    fn eq(&self, other: &RowMajorMapping<E2>) -> bool {
        self.extents.eq_extents(&other.extents)
    }
}

impl<E: Extents> Eq for RowMajorMapping<E> {}

impl<E, E2> MappingFrom<RowMajorMapping<E2>> for RowMajorMapping<E>
where
    E: ExtentsFrom<E2>,
    E2: Extents,
{
    fn mapping_from(src: &RowMajorMapping<E2>) -> Self {
        Self::new(E::extents_from(&src.extents))
    }
}

/// A single dimension has no order, so rank 0 and 1 convert freely. Higher
/// ranks fail to compile.
impl<E, E2> MappingFrom<ColumnMajorMapping<E2>> for RowMajorMapping<E>
where
    E: ExtentsFrom<E2>,
    E2: Extents,
{
    fn mapping_from(src: &ColumnMajorMapping<E2>) -> Self {
        const {
            assert!(
                E::RANK <= 1,
                "column-major converts to row-major only at rank 0 or 1"
            )
        };
        Self::new(E::extents_from(&src.extents()))
    }
}

impl<E, E2> TryMappingFrom<StridedMapping<E2>> for RowMajorMapping<E>
where
    E: ExtentsFrom<E2>,
    E2: Extents,
{
    fn try_mapping_from(src: &StridedMapping<E2>) -> Result<Self, LayoutError> {
        let extents = E::extents_from(&src.extents());
        let mut expected = 1;
        for r in (0..E::RANK).rev() {
            let actual = src.stride(r);
            if actual != expected {
                tracing::debug!(
                    layout = RowMajor::NAME,
                    dim = r,
                    expected,
                    actual,
                    "rejected strided mapping conversion"
                );
                return Err(LayoutError::StrideMismatch {
                    layout: RowMajor::NAME,
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compliance;
    use crate::extents::{DExtents, Nil};
    use proptest::prelude::*;

    type E234 = crate::Extents![2, 3, 4];

    // ── Offsets ─────────────────────────────────────────────────

    #[test]
    fn offset_follows_horner_rule() {
        let m = RowMajorMapping::new(E234::default());
        assert_eq!(m.offset(&[1, 2, 3]), 23);
        assert_eq!(m.offset_of([1, 0, 2]), 14);
        assert_eq!(m.offset_of([0, 0, 0]), 0);
        assert_eq!(m.offset_of([0, 0, 1]), 1);
        assert_eq!(m.offset_of([0, 1, 0]), 4);
    }

    #[test]
    fn strides_are_trailing_products() {
        let m = RowMajorMapping::new(E234::default());
        assert_eq!(m.strides().as_slice(), &[12, 4, 1]);
        assert_eq!(m.required_span_size(), 24);
    }

    #[test]
    fn rank_zero_has_unit_span() {
        let m = RowMajorMapping::new(Nil);
        assert_eq!(m.required_span_size(), 1);
        assert_eq!(m.offset(&[]), 0);
    }

    #[test]
    fn zero_extent_has_empty_span() {
        let m = RowMajorMapping::new(DExtents::<2>::from_dynamic(&[3, 0]));
        assert_eq!(m.required_span_size(), 0);
    }

    #[test]
    fn always_unique_contiguous_strided() {
        let m = RowMajorMapping::new(E234::default());
        assert!(m.is_unique() && m.is_contiguous() && m.is_strided());
        assert!(RowMajorMapping::<E234>::IS_ALWAYS_CONTIGUOUS);
    }

    // ── Conversions ─────────────────────────────────────────────

    #[test]
    fn converts_between_extents_types() {
        let src = RowMajorMapping::new(E234::default());
        let dst = RowMajorMapping::<DExtents<3>>::mapping_from(&src);
        assert_eq!(dst, src);
        assert_eq!(dst.extents().to_dims().as_slice(), &[2, 3, 4]);
    }

    #[test]
    fn rank_one_column_major_converts() {
        let src = ColumnMajorMapping::new(DExtents::<1>::from_dynamic(&[5]));
        let dst = RowMajorMapping::<crate::Extents![5]>::mapping_from(&src);
        assert_eq!(dst.required_span_size(), 5);
        assert_eq!(dst.stride(0), 1);
    }

    #[test]
    fn strided_with_row_major_strides_converts() {
        let src = StridedMapping::new(E234::default(), [12, 4, 1]);
        let dst = RowMajorMapping::<E234>::try_mapping_from(&src).unwrap();
        assert_eq!(dst, RowMajorMapping::new(E234::default()));
    }

    #[test]
    fn strided_with_other_strides_is_rejected() {
        let src = StridedMapping::new(E234::default(), [1, 2, 6]);
        let err = RowMajorMapping::<E234>::try_mapping_from(&src).unwrap_err();
        assert_eq!(
            err,
            LayoutError::StrideMismatch {
                layout: "row-major",
                dim: 2,
                expected: 1,
                actual: 6,
            }
        );

        let padded = StridedMapping::new(E234::default(), [16, 4, 1]);
        assert!(matches!(
            RowMajorMapping::<E234>::try_mapping_from(&padded),
            Err(LayoutError::StrideMismatch { dim: 0, expected: 12, actual: 16, .. })
        ));
    }

    // ── Compliance ──────────────────────────────────────────────

    #[test]
    fn compliance_static_and_dynamic() {
        compliance::run_full_compliance(&RowMajorMapping::new(E234::default()));
        compliance::run_full_compliance(&RowMajorMapping::new(DExtents::<4>::from_dynamic(&[
            3, 1, 2, 5,
        ])));
        compliance::run_full_compliance(&RowMajorMapping::new(Nil));
    }

    // ── Property tests ──────────────────────────────────────────

    proptest! {
        #[test]
        fn offset_matches_stride_sum(
            (dims, index) in compliance::arb_dims_and_index(4),
        ) {
            let m = RowMajorMapping::new(DExtents::<4>::from_dynamic(&dims));
            let expected: usize = index.iter().enumerate().map(|(r, &i)| i * m.stride(r)).sum();
            prop_assert_eq!(m.offset(&index), expected);
            prop_assert!(m.offset(&index) < m.required_span_size());
        }
    }
}
