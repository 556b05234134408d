//! Sub-views selected by one slice specification per dimension.
//!
//! [`submdspan()`] takes a view and a tuple of slice specifications, one per
//! dimension, and returns a view of the same elements:
//!
//! - an index (`usize`) fixes the dimension and removes it,
//! - a range (`a..b` or `(a, b)`) keeps `b - a` positions and becomes dynamic,
//! - [`FULL_EXTENT`] or `..` keeps the dimension as it was.
//!
//! The result's extents type and layout are computed from the slice types
//! at compile time. Row- and column-major sources keep their layout when the
//! kept dimensions still form a dense block in that order (see
//! [`SliceState`]); otherwise the result is [`Strided`](crate::Strided).
//!
//! ```
//! use mdspan::{Extents, MdspanRef, Strided, FULL_EXTENT};
//!
//! let data: Vec<usize> = (0..120).collect();
//! let m = MdspanRef::<usize, Extents![4, 5, 6]>::new(&data, Default::default());
//! let sub: MdspanRef<'_, usize, Extents![4, dyn], Strided> =
//!     m.submdspan((FULL_EXTENT, 1..3usize, 2usize));
//! assert_eq!(sub.extents().to_dims().as_slice(), &[4, 2]);
//! assert_eq!(sub[[0, 0]], 8);
//! assert_eq!(sub[[3, 1]], m[[3, 2, 2]]);
//! ```

mod slice;
mod state;

pub use slice::{
    FullExtent, FullKind, IndexKind, RangeKind, Slice, SliceKind, SliceSpec, FULL_EXTENT,
};
pub use state::{ColStart, ColTail, Reject, RowStart, RowTail, SliceState, SubmdspanLayout};

use crate::accessor::Accessor;
use crate::extent::Extent;
use crate::extents::{Cons, Dims, Extents, Nil, MAX_INLINE_RANK};
use crate::layout::{Layout, Mapping};
use crate::mdspan::Mdspan;
use crate::storage::Storage;
use smallvec::SmallVec;
use std::marker::PhantomData;

/// Run-time slices, one per dimension.
pub type Slices = SmallVec<[Slice; MAX_INLINE_RANK]>;

/// A tuple of slice specifications for a view with extents `E` and
/// layout `L`. Implemented for tuples of up to 8 [`SliceSpec`]s whose length
/// equals the rank.
pub trait SubmdspanSlices<E: Extents, L: SubmdspanLayout> {
    /// Extents of the result.
    type Extents: Extents;

    /// Layout of the result.
    type Layout: SubmdspanLayout;

    /// The specifications in run-time form.
    fn to_slices(&self) -> Slices;
}

#[doc(hidden)]
pub struct SliceCons<S, Rest>(PhantomData<(S, Rest)>);

#[doc(hidden)]
pub struct SliceNil;

/// Fold over a type-level list of slice specifications, paired slot by slot
/// with extents `E`, running the layout automaton from state `S`.
#[doc(hidden)]
pub trait SliceList<E: Extents, S: SliceState> {
    /// Extents left after slicing.
    type Extents: Extents;
    /// Layout named by the final automaton state.
    type Layout: SubmdspanLayout;
}

impl<S: SliceState> SliceList<Nil, S> for SliceNil {
    type Extents = Nil;
    type Layout = S::Layout;
}

impl<H, T, St, Spec, Rest> SliceList<Cons<H, T>, St> for SliceCons<Spec, Rest>
where
    H: Extent,
    T: Extents,
    St: SliceState,
    Spec: SliceSpec,
    Rest: SliceList<T, St::Step<Spec::Kind>>,
{
    type Extents = <Spec::Kind as SliceKind>::Sub<
        H,
        <Rest as SliceList<T, St::Step<Spec::Kind>>>::Extents,
    >;
    type Layout = <Rest as SliceList<T, St::Step<Spec::Kind>>>::Layout;
}

macro_rules! slice_list {
    () => { SliceNil };
    ($head:ident $(, $tail:ident)*) => { SliceCons<$head, slice_list!($($tail),*)> };
}

macro_rules! tuple_slices {
    ($($name:ident $var:ident),*) => {
        impl<E, L, $($name),*> SubmdspanSlices<E, L> for ($($name,)*)
        where
            E: Extents,
            L: SubmdspanLayout,
            $($name: SliceSpec,)*
            slice_list!($($name),*): SliceList<E, L::Start>,
        {
            type Extents = <slice_list!($($name),*) as SliceList<E, L::Start>>::Extents;
            type Layout = <slice_list!($($name),*) as SliceList<E, L::Start>>::Layout;

            fn to_slices(&self) -> Slices {
                let ($($var,)*) = self;
                smallvec::smallvec![$($var.to_slice()),*]
            }
        }
    };
}

tuple_slices!();
tuple_slices!(S0 s0);
tuple_slices!(S0 s0, S1 s1);
tuple_slices!(S0 s0, S1 s1, S2 s2);
tuple_slices!(S0 s0, S1 s1, S2 s2, S3 s3);
tuple_slices!(S0 s0, S1 s1, S2 s2, S3 s3, S4 s4);
tuple_slices!(S0 s0, S1 s1, S2 s2, S3 s3, S4 s4, S5 s5);
tuple_slices!(S0 s0, S1 s1, S2 s2, S3 s3, S4 s4, S5 s5, S6 s6);
tuple_slices!(S0 s0, S1 s1, S2 s2, S3 s3, S4 s4, S5 s5, S6 s6, S7 s7);

/// Sub-view of `src` selected by `slices`, one specification per dimension.
///
/// Index values must be below their extent and ranges must satisfy
/// `lower <= upper <= extent`; both are checked in debug builds only.
pub fn submdspan<D, E, L, A, S>(
    src: Mdspan<D, E, L, A>,
    slices: S,
) -> Mdspan<D, S::Extents, S::Layout, A>
where
    D: Storage,
    E: Extents,
    L: SubmdspanLayout,
    A: Accessor<D::Elem>,
    S: SubmdspanSlices<E, L>,
{
    let slices = slices.to_slices();
    let (data, mapping, accessor) = src.into_parts();
    let extents = mapping.extents();

    let mut origin = Dims::new();
    let mut kept_extents = Dims::new();
    let mut kept_strides = Dims::new();
    for (r, slice) in slices.iter().enumerate() {
        let extent = extents.extent(r);
        match *slice {
            Slice::Index(i) => {
                debug_assert!(
                    i < extent,
                    "index {i} out of bounds for extent {extent} in dimension {r}"
                );
                origin.push(i);
            }
            Slice::Range(lower, upper) => {
                debug_assert!(
                    lower <= upper && upper <= extent,
                    "range {lower}..{upper} out of bounds for extent {extent} in dimension {r}"
                );
                origin.push(lower);
                kept_extents.push(upper.saturating_sub(lower));
                kept_strides.push(mapping.stride(r));
            }
            Slice::Full => {
                origin.push(0);
                kept_extents.push(extent);
                kept_strides.push(mapping.stride(r));
            }
        }
    }

    let offset = mapping.offset(&origin);
    let sub_extents = <S::Extents as Extents>::from_extents(&kept_extents);
    let sub_mapping = <S::Layout as SubmdspanLayout>::sub_mapping(sub_extents, kept_strides);
    tracing::trace!(
        source_rank = E::RANK,
        rank = <S::Extents as Extents>::RANK,
        source_layout = L::NAME,
        layout = <S::Layout as Layout>::NAME,
        offset,
        "built sub-view"
    );
    Mdspan::from_mapping_and_accessor(data.advance(&accessor, offset), sub_mapping, accessor)
}

impl<D, E, L, A> Mdspan<D, E, L, A>
where
    D: Storage,
    E: Extents,
    L: SubmdspanLayout,
    A: Accessor<D::Elem>,
{
    /// Method form of [`submdspan()`]. Consumes the view; shared views are
    /// `Copy` only when their mapping is, so strided and mutable views must be
    /// sliced through [`view`](Self::view) or [`view_mut`](Self::view_mut) to
    /// keep the original.
    pub fn submdspan<S>(self, slices: S) -> Mdspan<D, S::Extents, S::Layout, A>
    where
        S: SubmdspanSlices<E, L>,
    {
        submdspan(self, slices)
    }
}
