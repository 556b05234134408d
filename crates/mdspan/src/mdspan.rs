//! The [`Mdspan`] view: data handle, layout mapping, and accessor.
//!
//! A view never owns its elements. It borrows a slice whose first element
//! is the view's origin, maps multi-indices to offsets with its layout
//! mapping, and reads or writes through its accessor.
//!
//! ```
//! use mdspan::{Extents, MdspanRef};
//!
//! let data: Vec<i32> = (0..12).collect();
//! let m = MdspanRef::<i32, Extents![3, dyn]>::from_dynamic(&data, &[4]);
//! assert_eq!(m[[1, 2]], 6);
//! assert_eq!(m.size(), 12);
//! ```
//!
//! Indices are not range-checked in release builds beyond what slice
//! indexing does; use [`Mdspan::get`] for a checked lookup.

use crate::accessor::{Accessor, AccessorFrom, DefaultAccessor};
use crate::error::MdspanError;
use crate::extents::{DExtents, DynamicRank, Extents, Rank};
use crate::layout::{Layout, Mapping, MappingFrom, MappingFromExtents, RowMajor, TryMappingFrom};
use crate::storage::{Storage, StorageMut};
use std::fmt;
use std::ops::{Index, IndexMut};

/// A non-owning multidimensional view.
///
/// - `D`: data handle, `&[T]` or `&mut [T]`.
/// - `E`: [`Extents`](trait@Extents) type.
/// - `L`: [`Layout`] policy.
/// - `A`: [`Accessor`] policy.
pub struct Mdspan<D, E: Extents, L: Layout = RowMajor, A = DefaultAccessor> {
    data: D,
    mapping: L::Mapping<E>,
    accessor: A,
}

/// Shared view over `&'a [T]`.
pub type MdspanRef<'a, T, E, L = RowMajor, A = DefaultAccessor> = Mdspan<&'a [T], E, L, A>;

/// Mutable view over `&'a mut [T]`.
pub type MdspanMut<'a, T, E, L = RowMajor, A = DefaultAccessor> = Mdspan<&'a mut [T], E, L, A>;

/// Row-major view with all-dynamic extents of rank `N`.
pub fn dynamic<D, const N: usize>(data: D, extents: [usize; N]) -> Mdspan<D, DExtents<N>>
where
    D: Storage,
    Rank<N>: DynamicRank,
{
    Mdspan::new(data, <DExtents<N> as Extents>::from_array(extents))
}

// ── Construction ────────────────────────────────────────────────

impl<D, E, L, A> Mdspan<D, E, L, A>
where
    D: Storage,
    E: Extents,
    L: Layout,
    A: Accessor<D::Elem>,
{
    /// View over `data` with the given extents.
    pub fn new(data: D, extents: E) -> Self
    where
        L::Mapping<E>: MappingFromExtents,
    {
        Self::from_mapping(data, MappingFromExtents::from_extents(extents))
    }

    /// View over `data` given only the dynamic extents.
    pub fn from_dynamic(data: D, dynamic: &[usize]) -> Self
    where
        L::Mapping<E>: MappingFromExtents,
    {
        Self::new(data, E::from_dynamic(dynamic))
    }

    /// View over `data` given every extent or only the dynamic ones.
    pub fn from_array<const N: usize>(data: D, extents: [usize; N]) -> Self
    where
        L::Mapping<E>: MappingFromExtents,
    {
        Self::new(data, E::from_array(extents))
    }

    /// View over `data` with an explicit mapping.
    pub fn from_mapping(data: D, mapping: L::Mapping<E>) -> Self {
        Self::from_mapping_and_accessor(data, mapping, A::default())
    }

    /// View over `data` with an explicit mapping and accessor.
    pub fn from_mapping_and_accessor(data: D, mapping: L::Mapping<E>, accessor: A) -> Self {
        Self {
            data,
            mapping,
            accessor,
        }
    }

    /// Like [`new`](Self::new), but fails if `data` is too short for some
    /// valid index.
    pub fn try_new(data: D, extents: E) -> Result<Self, MdspanError>
    where
        L::Mapping<E>: MappingFromExtents,
    {
        Self::try_from_mapping(data, MappingFromExtents::from_extents(extents))
    }

    /// Like [`from_mapping`](Self::from_mapping), but fails if `data` is
    /// shorter than [`Mapping::required_buffer_len`], so every valid index
    /// lands inside the buffer.
    pub fn try_from_mapping(data: D, mapping: L::Mapping<E>) -> Result<Self, MdspanError> {
        let required = mapping.required_buffer_len();
        let len = data.len();
        if len < required {
            tracing::debug!(
                layout = L::NAME,
                required,
                len,
                "rejected buffer shorter than mapping reach"
            );
            return Err(MdspanError::BufferTooSmall { required, len });
        }
        Ok(Self::from_mapping(data, mapping))
    }

    /// Convert a view whose extents, mapping, and accessor all convert
    /// without loss.
    pub fn from_mdspan<D2, E2, L2, A2>(other: Mdspan<D2, E2, L2, A2>) -> Self
    where
        D2: Into<D>,
        E2: Extents,
        L2: Layout,
        L::Mapping<E>: MappingFrom<L2::Mapping<E2>>,
        A: AccessorFrom<A2>,
    {
        Self {
            mapping: MappingFrom::mapping_from(&other.mapping),
            accessor: A::accessor_from(&other.accessor),
            data: other.data.into(),
        }
    }

    /// Convert a view whose mapping conversion depends on run-time strides,
    /// such as strided to row-major.
    pub fn try_from_mdspan<D2, E2, L2, A2>(
        other: Mdspan<D2, E2, L2, A2>,
    ) -> Result<Self, MdspanError>
    where
        D2: Into<D>,
        E2: Extents,
        L2: Layout,
        L::Mapping<E>: TryMappingFrom<L2::Mapping<E2>>,
        A: AccessorFrom<A2>,
    {
        let mapping = TryMappingFrom::try_mapping_from(&other.mapping)?;
        Ok(Self {
            mapping,
            accessor: A::accessor_from(&other.accessor),
            data: other.data.into(),
        })
    }

    pub(crate) fn into_parts(self) -> (D, L::Mapping<E>, A) {
        (self.data, self.mapping, self.accessor)
    }
}

// ── Queries ─────────────────────────────────────────────────────

impl<D, E, L, A> Mdspan<D, E, L, A>
where
    D: Storage,
    E: Extents,
    L: Layout,
    A: Accessor<D::Elem>,
{
    /// Number of dimensions.
    pub fn rank(&self) -> usize {
        E::RANK
    }

    /// Number of run-time sized dimensions.
    pub fn rank_dynamic(&self) -> usize {
        E::RANK_DYNAMIC
    }

    /// Declared size of dimension `r`, or 0 if it is dynamic.
    pub fn static_extent(&self, r: usize) -> usize {
        E::static_extent(r)
    }

    /// The view's extents.
    pub fn extents(&self) -> E {
        self.mapping.extents()
    }

    /// Size of dimension `r`.
    pub fn extent(&self, r: usize) -> usize {
        self.mapping.extents().extent(r)
    }

    /// Number of elements the view spans: the product of all extents.
    pub fn size(&self) -> usize {
        self.mapping.extents().size()
    }

    /// Whether some extent is zero.
    pub fn is_empty(&self) -> bool {
        self.size() == 0
    }

    /// Elements from the view's origin onwards.
    pub fn data(&self) -> &[D::Elem] {
        self.data.elems()
    }

    /// The layout mapping.
    pub fn mapping(&self) -> &L::Mapping<E> {
        &self.mapping
    }

    /// The accessor.
    pub fn accessor(&self) -> &A {
        &self.accessor
    }

    /// Whether every mapping of this layout is unique.
    pub fn is_always_unique() -> bool {
        <L::Mapping<E> as Mapping>::IS_ALWAYS_UNIQUE
    }

    /// Whether every mapping of this layout is contiguous.
    pub fn is_always_contiguous() -> bool {
        <L::Mapping<E> as Mapping>::IS_ALWAYS_CONTIGUOUS
    }

    /// Whether every mapping of this layout is strided.
    pub fn is_always_strided() -> bool {
        <L::Mapping<E> as Mapping>::IS_ALWAYS_STRIDED
    }

    /// Whether this view's mapping is unique.
    pub fn is_unique(&self) -> bool {
        self.mapping.is_unique()
    }

    /// Whether this view's mapping is contiguous.
    pub fn is_contiguous(&self) -> bool {
        self.mapping.is_contiguous()
    }

    /// Whether this view's mapping is strided.
    pub fn is_strided(&self) -> bool {
        self.mapping.is_strided()
    }

    /// Stride of dimension `r`.
    pub fn stride(&self, r: usize) -> usize {
        self.mapping.stride(r)
    }

    fn in_bounds(&self, index: &[usize]) -> bool {
        let extents = self.mapping.extents();
        index.len() == E::RANK && index.iter().enumerate().all(|(r, &i)| i < extents.extent(r))
    }

    // ── Element access ──────────────────────────────────────────

    /// Element at `index`, one component per dimension.
    ///
    /// Range checks on `index` are debug-only; an offset outside the buffer
    /// still panics.
    #[inline]
    pub fn at(&self, index: &[usize]) -> &D::Elem {
        debug_assert!(
            self.in_bounds(index),
            "index {index:?} out of bounds for {:?}",
            self.extents()
        );
        self.accessor
            .access(self.data.elems(), self.mapping.offset(index))
    }

    /// Element at `index`, or `None` if it is out of bounds.
    pub fn get(&self, index: &[usize]) -> Option<&D::Elem> {
        if !self.in_bounds(index) {
            return None;
        }
        let offset = self.mapping.offset(index);
        let data = self.data.elems();
        (offset < data.len()).then(|| self.accessor.access(data, offset))
    }

    /// Shared view of the same elements.
    pub fn view(&self) -> MdspanRef<'_, D::Elem, E, L, A> {
        Mdspan {
            data: self.data.elems(),
            mapping: self.mapping.clone(),
            accessor: self.accessor.clone(),
        }
    }
}

impl<D, E, L, A> Mdspan<D, E, L, A>
where
    D: StorageMut,
    E: Extents,
    L: Layout,
    A: Accessor<D::Elem>,
{
    /// Mutable element at `index`.
    #[inline]
    pub fn at_mut(&mut self, index: &[usize]) -> &mut D::Elem {
        debug_assert!(
            self.in_bounds(index),
            "index {index:?} out of bounds for {:?}",
            self.extents()
        );
        let offset = self.mapping.offset(index);
        self.accessor.access_mut(self.data.elems_mut(), offset)
    }

    /// Mutable element at `index`, or `None` if it is out of bounds.
    pub fn get_mut(&mut self, index: &[usize]) -> Option<&mut D::Elem> {
        if !self.in_bounds(index) {
            return None;
        }
        let offset = self.mapping.offset(index);
        if offset >= self.data.len() {
            return None;
        }
        Some(self.accessor.access_mut(self.data.elems_mut(), offset))
    }

    /// Mutable view reborrowing the same elements.
    pub fn view_mut(&mut self) -> MdspanMut<'_, D::Elem, E, L, A> {
        Mdspan {
            data: self.data.elems_mut(),
            mapping: self.mapping.clone(),
            accessor: self.accessor.clone(),
        }
    }
}

impl<'a, T, E, L, A> MdspanMut<'a, T, E, L, A>
where
    E: Extents,
    L: Layout,
    A: Accessor<T>,
{
    /// Give up write access, keeping the full lifetime.
    pub fn into_view(self) -> MdspanRef<'a, T, E, L, A> {
        Mdspan {
            data: self.data,
            mapping: self.mapping,
            accessor: self.accessor,
        }
    }
}

// ── Indexing ────────────────────────────────────────────────────

impl<D, E, L, A, const N: usize> Index<[usize; N]> for Mdspan<D, E, L, A>
where
    D: Storage,
    E: Extents,
    L: Layout,
    A: Accessor<D::Elem>,
{
    type Output = D::Elem;

    #[inline]
    fn index(&self, index: [usize; N]) -> &D::Elem {
        const { assert!(N == E::RANK, "index length must equal the rank") };
        self.at(&index)
    }
}

impl<D, E, L, A, const N: usize> IndexMut<[usize; N]> for Mdspan<D, E, L, A>
where
    D: StorageMut,
    E: Extents,
    L: Layout,
    A: Accessor<D::Elem>,
{
    #[inline]
    fn index_mut(&mut self, index: [usize; N]) -> &mut D::Elem {
        const { assert!(N == E::RANK, "index length must equal the rank") };
        self.at_mut(&index)
    }
}

// ── Trait impls ─────────────────────────────────────────────────

impl<D: Clone, E: Extents, L: Layout, A: Clone> Clone for Mdspan<D, E, L, A> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
            mapping: self.mapping.clone(),
            accessor: self.accessor.clone(),
        }
    }
}

impl<D, E, L, A> Copy for Mdspan<D, E, L, A>
where
    D: Copy,
    E: Extents,
    L: Layout,
    L::Mapping<E>: Copy,
    A: Copy,
{
}

impl<D, E, L, A> fmt::Debug for Mdspan<D, E, L, A>
where
    D: Storage,
    E: Extents,
    L: Layout,
    A: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Mdspan")
            .field("mapping", &self.mapping)
            .field("accessor", &self.accessor)
            .field("len", &self.data.len())
            .finish()
    }
}
