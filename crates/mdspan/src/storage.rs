//! Data handles a view can hold.
//!
//! A view borrows its elements as a slice starting at the view's origin.
//! Shared handles (`&[T]`) are `Copy`; mutable handles (`&mut [T]`) are
//! move-only, so at most one mutable view reaches any element.

use crate::accessor::Accessor;

mod sealed {
    pub trait Sealed {}

    impl<T> Sealed for &[T] {}
    impl<T> Sealed for &mut [T] {}
}

/// A borrowed element buffer. Implemented for `&[T]` and `&mut [T]`.
pub trait Storage: sealed::Sealed {
    /// Element type.
    type Elem;

    /// The elements as a shared slice.
    fn elems(&self) -> &[Self::Elem];

    /// Number of addressable elements.
    fn len(&self) -> usize {
        self.elems().len()
    }

    /// Whether the buffer is empty.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Move the handle's origin forward by `offset` elements.
    fn advance<A: Accessor<Self::Elem>>(self, accessor: &A, offset: usize) -> Self;
}

/// A buffer that allows writes.
pub trait StorageMut: Storage {
    /// The elements as a mutable slice.
    fn elems_mut(&mut self) -> &mut [Self::Elem];
}

impl<'a, T> Storage for &'a [T] {
    type Elem = T;

    #[inline]
    fn elems(&self) -> &[T] {
        self
    }

    fn advance<A: Accessor<T>>(self, accessor: &A, offset: usize) -> Self {
        accessor.offset(self, offset)
    }
}

impl<'a, T> Storage for &'a mut [T] {
    type Elem = T;

    #[inline]
    fn elems(&self) -> &[T] {
        self
    }

    fn advance<A: Accessor<T>>(self, accessor: &A, offset: usize) -> Self {
        accessor.offset_mut(self, offset)
    }
}

impl<'a, T> StorageMut for &'a mut [T] {
    #[inline]
    fn elems_mut(&mut self) -> &mut [T] {
        self
    }
}
