//! Single-dimension extent slots.
//!
//! An extent slot is either [`Static<N>`], whose size is part of the type and
//! which occupies no storage, or [`Dyn`], which stores its size at run time.
//! [`Extents`](trait@crate::Extents) types are built from a list of slots.

use std::fmt;
use std::hash::Hash;

/// Sentinel reported by [`Extent::STATIC`] for a run-time sized slot.
pub const DYNAMIC_EXTENT: usize = usize::MAX;

/// One dimension of an extents list.
pub trait Extent: Copy + fmt::Debug + Default + Eq + Hash + Send + Sync + 'static {
    /// Declared size of the slot, or [`DYNAMIC_EXTENT`] for [`Dyn`].
    const STATIC: usize;

    /// Build the slot from a run-time value.
    ///
    /// For a static slot the value must equal the declared size. A mismatch
    /// is a programming error and is only caught by a debug assertion.
    fn with_value(value: usize) -> Self;

    /// Run-time size of the slot.
    fn value(&self) -> usize;
}

/// Compile-time sized slot. Zero-sized.
///
/// `N` must not be [`DYNAMIC_EXTENT`].
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Static<const N: usize>;

impl<const N: usize> Extent for Static<N> {
    const STATIC: usize = N;

    #[inline]
    fn with_value(value: usize) -> Self {
        debug_assert_eq!(
            value, N,
            "static extent {N} constructed with run-time value {value}"
        );
        Static
    }

    #[inline]
    fn value(&self) -> usize {
        N
    }
}

impl<const N: usize> fmt::Debug for Static<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{N}")
    }
}

/// Run-time sized slot.
///
/// Defaults to 0.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Dyn(usize);

impl Dyn {
    /// A dynamic slot holding `value`.
    pub const fn new(value: usize) -> Self {
        Self(value)
    }
}

impl Extent for Dyn {
    const STATIC: usize = DYNAMIC_EXTENT;

    #[inline]
    fn with_value(value: usize) -> Self {
        Self(value)
    }

    #[inline]
    fn value(&self) -> usize {
        self.0
    }
}

impl fmt::Debug for Dyn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "dyn({})", self.0)
    }
}

/// Slot-wise conversion between compatible extent slots.
///
/// Implemented for exactly the compatible pairs: dynamic from dynamic,
/// dynamic from static, static from the same static, and static from dynamic.
/// Two static slots of different sizes never convert.
pub trait ExtentFrom<Src: Extent>: Extent {
    /// `true` when a run-time source is narrowed into a static destination,
    /// which is only correct if the run-time value matches.
    const NARROWING: bool;

    /// Convert the slot.
    #[inline]
    fn extent_from(src: Src) -> Self {
        Self::with_value(src.value())
    }
}

impl ExtentFrom<Dyn> for Dyn {
    const NARROWING: bool = false;
}

impl<const N: usize> ExtentFrom<Static<N>> for Dyn {
    const NARROWING: bool = false;
}

impl<const N: usize> ExtentFrom<Static<N>> for Static<N> {
    const NARROWING: bool = false;
}

impl<const N: usize> ExtentFrom<Dyn> for Static<N> {
    const NARROWING: bool = true;
}
