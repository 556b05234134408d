//! Accessor policies: how a view turns an offset into an element reference.

use std::fmt;

/// Element access through a data handle.
///
/// `offset` advances a handle by `i` elements and `access` dereferences at
/// `i`. A view only ever calls these four methods, so a bounds-checked,
/// logging, or otherwise decorated accessor can be substituted freely.
pub trait Accessor<T>: Clone + fmt::Debug + Default + Send + Sync + 'static {
    /// The handle advanced by `i` elements.
    fn offset<'a>(&self, data: &'a [T], i: usize) -> &'a [T];

    /// Mutable form of [`offset`](Self::offset).
    fn offset_mut<'a>(&self, data: &'a mut [T], i: usize) -> &'a mut [T];

    /// Reference to element `i`.
    fn access<'a>(&self, data: &'a [T], i: usize) -> &'a T;

    /// Mutable reference to element `i`.
    fn access_mut<'a>(&self, data: &'a mut [T], i: usize) -> &'a mut T;
}

/// Plain slice indexing. Zero-sized and valid for every element type.
///
/// Offsetting past the end yields an empty handle; accessing past the end
/// panics like slice indexing.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct DefaultAccessor;

impl<T> Accessor<T> for DefaultAccessor {
    #[inline]
    fn offset<'a>(&self, data: &'a [T], i: usize) -> &'a [T] {
        data.get(i..).unwrap_or_default()
    }

    #[inline]
    fn offset_mut<'a>(&self, data: &'a mut [T], i: usize) -> &'a mut [T] {
        if i <= data.len() {
            &mut data[i..]
        } else {
            &mut []
        }
    }

    #[inline]
    fn access<'a>(&self, data: &'a [T], i: usize) -> &'a T {
        &data[i]
    }

    #[inline]
    fn access_mut<'a>(&self, data: &'a mut [T], i: usize) -> &'a mut T {
        &mut data[i]
    }
}

/// Conversion between accessors, used when converting whole views.
pub trait AccessorFrom<Src>: Sized {
    /// Convert `src`.
    fn accessor_from(src: &Src) -> Self;
}

impl AccessorFrom<DefaultAccessor> for DefaultAccessor {
    fn accessor_from(_src: &DefaultAccessor) -> Self {
        DefaultAccessor
    }
}
