//! Multidimensional extents with mixed compile-time and run-time sizes.
//!
//! An extents type is a type-level list of [`Extent`] slots terminated by
//! [`Nil`]. Only [`Dyn`] slots occupy storage; [`Static`](crate::extent::Static)
//! slots are zero-sized, so `Extents![3, 4, dyn, dyn, 7]` is exactly two `usize`s wide.
//!
//! ```
//! use mdspan::Extents;
//!
//! type E = Extents![3, dyn, 5];
//! let e = E::from_dynamic(&[4]);
//! assert_eq!(E::RANK, 3);
//! assert_eq!(E::RANK_DYNAMIC, 1);
//! assert_eq!((e.extent(0), e.extent(1), e.extent(2)), (3, 4, 5));
//! assert_eq!(std::mem::size_of::<E>(), std::mem::size_of::<usize>());
//! ```

use crate::extent::{Dyn, Extent, ExtentFrom, DYNAMIC_EXTENT};
use smallvec::SmallVec;
use std::fmt;
use std::hash::Hash;

/// Inline capacity of [`Dims`]; ranks above this spill to the heap.
pub const MAX_INLINE_RANK: usize = 8;

/// A run-time list of per-dimension values (extents, strides, indices).
pub type Dims = SmallVec<[usize; MAX_INLINE_RANK]>;

/// The shape of a multidimensional view.
///
/// Implemented by [`Nil`] (rank 0) and [`Cons<H, T>`] (one more slot in
/// front of `T`). Name concrete types with the [`Extents!`](crate::Extents!)
/// macro or [`DExtents`].
pub trait Extents: Copy + fmt::Debug + Default + Eq + Hash + Send + Sync + 'static {
    /// Number of dimensions.
    const RANK: usize;

    /// Number of run-time sized dimensions.
    const RANK_DYNAMIC: usize;

    /// Declared size of dimension `r`, or 0 if it is dynamic or out of range.
    fn static_extent(r: usize) -> usize;

    /// Whether dimension `r` is sized at run time.
    fn is_dynamic(r: usize) -> bool;

    /// Size of dimension `r`, or 0 if `r >= RANK`.
    fn extent(&self, r: usize) -> usize;

    #[doc(hidden)]
    fn build_all(values: &[usize]) -> Self;

    #[doc(hidden)]
    fn build_dynamic(values: &[usize]) -> Self;

    #[doc(hidden)]
    fn debug_slots(&self, list: &mut fmt::DebugList<'_, '_>);

    /// Position of dimension `r` among the dynamic dimensions, i.e. the
    /// number of dynamic dimensions before it.
    fn dynamic_index(r: usize) -> usize {
        (0..r.min(Self::RANK))
            .filter(|&i| Self::is_dynamic(i))
            .count()
    }

    /// Build from one value per dimension.
    ///
    /// Values for static dimensions must equal the declared size; this is
    /// checked by a debug assertion only.
    fn from_extents(values: &[usize]) -> Self {
        debug_assert_eq!(
            values.len(),
            Self::RANK,
            "expected {} extents, got {}",
            Self::RANK,
            values.len()
        );
        Self::build_all(values)
    }

    /// Build from the values of the dynamic dimensions only, in declaration
    /// order. Static dimensions keep their declared size.
    fn from_dynamic(values: &[usize]) -> Self {
        debug_assert_eq!(
            values.len(),
            Self::RANK_DYNAMIC,
            "expected {} dynamic extents, got {}",
            Self::RANK_DYNAMIC,
            values.len()
        );
        Self::build_dynamic(values)
    }

    /// Build from an array holding either every extent (`N == RANK`) or only
    /// the dynamic ones (`N == RANK_DYNAMIC`). Any other length fails to
    /// compile.
    fn from_array<const N: usize>(values: [usize; N]) -> Self {
        const {
            assert!(
                N == Self::RANK || N == Self::RANK_DYNAMIC,
                "array length must equal the rank or the dynamic rank"
            )
        };
        if N == Self::RANK {
            Self::build_all(&values)
        } else {
            Self::build_dynamic(&values)
        }
    }

    /// Size of dimension `I`, checked against the rank at compile time.
    fn get<const I: usize>(&self) -> usize {
        const { assert!(I < Self::RANK, "extent index out of range") };
        self.extent(I)
    }

    /// Product of all extents; 1 for rank 0.
    fn size(&self) -> usize {
        (0..Self::RANK).map(|r| self.extent(r)).product()
    }

    /// All extents as a run-time list.
    fn to_dims(&self) -> Dims {
        (0..Self::RANK).map(|r| self.extent(r)).collect()
    }

    /// Value equality against any other extents type: equal rank and equal
    /// sizes, regardless of which dimensions are static.
    fn eq_extents<Other: Extents>(&self, other: &Other) -> bool {
        Self::RANK == Other::RANK && (0..Self::RANK).all(|r| self.extent(r) == other.extent(r))
    }
}

/// Rank-0 extents.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Nil;

/// Extents with slot `H` in front of the remaining dimensions `T`.
#[derive(Clone, Copy, Default, Hash)]
pub struct Cons<H, T> {
    head: H,
    tail: T,
}

impl Extents for Nil {
    const RANK: usize = 0;
    const RANK_DYNAMIC: usize = 0;

    fn static_extent(_r: usize) -> usize {
        0
    }

    fn is_dynamic(_r: usize) -> bool {
        false
    }

    #[inline]
    fn extent(&self, _r: usize) -> usize {
        0
    }

    fn build_all(_values: &[usize]) -> Self {
        Nil
    }

    fn build_dynamic(_values: &[usize]) -> Self {
        Nil
    }

    fn debug_slots(&self, _list: &mut fmt::DebugList<'_, '_>) {}
}

impl<H: Extent, T: Extents> Extents for Cons<H, T> {
    const RANK: usize = 1 + T::RANK;
    const RANK_DYNAMIC: usize = (H::STATIC == DYNAMIC_EXTENT) as usize + T::RANK_DYNAMIC;

    fn static_extent(r: usize) -> usize {
        match r {
            0 if H::STATIC == DYNAMIC_EXTENT => 0,
            0 => H::STATIC,
            _ => T::static_extent(r - 1),
        }
    }

    fn is_dynamic(r: usize) -> bool {
        match r {
            0 => H::STATIC == DYNAMIC_EXTENT,
            _ => T::is_dynamic(r - 1),
        }
    }

    #[inline]
    fn extent(&self, r: usize) -> usize {
        match r {
            0 => self.head.value(),
            _ => self.tail.extent(r - 1),
        }
    }

    fn build_all(values: &[usize]) -> Self {
        Self {
            head: H::with_value(values[0]),
            tail: T::build_all(&values[1..]),
        }
    }

    fn build_dynamic(values: &[usize]) -> Self {
        if H::STATIC == DYNAMIC_EXTENT {
            Self {
                head: H::with_value(values[0]),
                tail: T::build_dynamic(&values[1..]),
            }
        } else {
            Self {
                head: H::with_value(H::STATIC),
                tail: T::build_dynamic(values),
            }
        }
    }

    fn debug_slots(&self, list: &mut fmt::DebugList<'_, '_>) {
        list.entry(&self.head);
        self.tail.debug_slots(list);
    }
}

impl fmt::Debug for Nil {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Extents[]")
    }
}

impl<H: Extent, T: Extents> fmt::Debug for Cons<H, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Extents")?;
        let mut list = f.debug_list();
        self.debug_slots(&mut list);
        list.finish()
    }
}

// Equality compares sizes only, so extents that differ in which slots are
// static still compare equal when their values agree. Lists of different
// length are never equal.

impl<H, T, H2, T2> PartialEq<Cons<H2, T2>> for Cons<H, T>
where
    H: Extent,
    H2: Extent,
    T: PartialEq<T2>,
{
    fn eq(&self, other: &Cons<H2, T2>) -> bool {
        self.head.value() == other.head.value() && self.tail == other.tail
    }
}

impl<H: Extent, T: Extents> Eq for Cons<H, T> {}

impl<H, T> PartialEq<Nil> for Cons<H, T> {
    fn eq(&self, _other: &Nil) -> bool {
        false
    }
}

impl<H, T> PartialEq<Cons<H, T>> for Nil {
    fn eq(&self, _other: &Cons<H, T>) -> bool {
        false
    }
}

/// The natural conversion from exactly the dynamic extents.
///
/// Only `N == RANK_DYNAMIC` compiles; use [`Extents::from_array`] to pass
/// every extent.
impl<H: Extent, T: Extents, const N: usize> From<[usize; N]> for Cons<H, T> {
    fn from(values: [usize; N]) -> Self {
        const {
            assert!(
                N == <Self as Extents>::RANK_DYNAMIC,
                "implicit conversion takes exactly the dynamic extents"
            )
        };
        Self::build_dynamic(&values)
    }
}

impl<const N: usize> From<[usize; N]> for Nil {
    fn from(_values: [usize; N]) -> Self {
        const { assert!(N == 0, "rank-0 extents take no values") };
        Nil
    }
}

/// Conversion between extents of equal rank whose slots are pairwise
/// compatible (see [`ExtentFrom`]).
pub trait ExtentsFrom<Src: Extents>: Extents {
    /// `true` if some dynamic source slot lands in a static destination slot,
    /// making this an explicit, value-checked conversion.
    const NARROWING: bool;

    /// Convert `src`. Narrowed slots are checked by debug assertions.
    fn extents_from(src: &Src) -> Self;
}

impl ExtentsFrom<Nil> for Nil {
    const NARROWING: bool = false;

    fn extents_from(_src: &Nil) -> Self {
        Nil
    }
}

impl<H, T, H2, T2> ExtentsFrom<Cons<H2, T2>> for Cons<H, T>
where
    H: ExtentFrom<H2>,
    T: ExtentsFrom<T2>,
    H2: Extent,
    T2: Extents,
{
    const NARROWING: bool =
        <H as ExtentFrom<H2>>::NARROWING || <T as ExtentsFrom<T2>>::NARROWING;

    fn extents_from(src: &Cons<H2, T2>) -> Self {
        Self {
            head: H::extent_from(src.head),
            tail: T::extents_from(&src.tail),
        }
    }
}

/// Type-level rank used to name all-dynamic extents.
pub struct Rank<const R: usize>;

/// Maps a [`Rank`] to the extents type with that many dynamic slots.
pub trait DynamicRank {
    /// `R` dynamic slots.
    type Extents: Extents;
}

impl DynamicRank for Rank<0> {
    type Extents = Nil;
}

macro_rules! dynamic_ranks {
    ($($rank:literal => $lower:literal),* $(,)?) => {
        $(
            impl DynamicRank for Rank<$rank> {
                type Extents = Cons<Dyn, <Rank<$lower> as DynamicRank>::Extents>;
            }
        )*
    };
}

dynamic_ranks!(1 => 0, 2 => 1, 3 => 2, 4 => 3, 5 => 4, 6 => 5, 7 => 6, 8 => 7);

/// Extents of rank `R` whose dimensions are all dynamic (`R <= 8`).
pub type DExtents<const R: usize> = <Rank<R> as DynamicRank>::Extents;

/// Names an extents type from a list of sizes, `dyn` marking run-time sized
/// dimensions.
///
/// ```
/// use mdspan::extent::{Dyn, Static};
/// use mdspan::extents::{Cons, Nil};
///
/// type E = mdspan::Extents![2, dyn, 4];
/// let _: Cons<Static<2>, Cons<Dyn, Cons<Static<4>, Nil>>> = E::default();
/// ```
#[macro_export]
macro_rules! Extents {
    () => { $crate::extents::Nil };
    (dyn $(, $($rest:tt)*)?) => {
        $crate::extents::Cons<$crate::extent::Dyn, $crate::Extents!($($($rest)*)?)>
    };
    ($n:expr $(, $($rest:tt)*)?) => {
        $crate::extents::Cons<$crate::extent::Static<{ $n }>, $crate::Extents!($($($rest)*)?)>
    };
}
