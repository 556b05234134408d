//! Non-owning multidimensional array views.
//!
//! An [`Mdspan`] borrows a flat buffer and presents it as an N-dimensional
//! array. Its shape is an [`Extents`](trait@Extents) type in which every dimension is either
//! fixed at compile time or stored at run time, and a [`Layout`] policy
//! decides how a multi-index becomes a buffer offset.
//!
//! # Layouts
//!
//! - [`RowMajor`]: right-most index varies fastest (the default)
//! - [`ColumnMajor`]: left-most index varies fastest
//! - [`Strided`]: one explicit stride per dimension
//!
//! # Slicing
//!
//! [`submdspan()`] selects a sub-view with one slice specification per
//! dimension. The result's rank, static extents, and layout are computed from
//! the types of the specifications.
//!
//! ```
//! use mdspan::{Extents, MdspanMut, FULL_EXTENT};
//!
//! let mut buf = vec![0.0f32; 2 * 3 * 4];
//! let mut m = MdspanMut::<f32, Extents![2, dyn, 4]>::from_dynamic(&mut buf, &[3]);
//! m[[1, 2, 3]] = 1.5;
//!
//! let row = m.view().submdspan((1usize, 2usize, FULL_EXTENT));
//! assert_eq!(row[[3]], 1.5);
//! assert_eq!(buf[23], 1.5);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod accessor;
pub mod error;
pub mod extent;
pub mod extents;
pub mod layout;
pub mod mdspan;
pub mod storage;
pub mod submdspan;

#[cfg(test)]
pub(crate) mod compliance;

pub use accessor::{Accessor, AccessorFrom, DefaultAccessor};
pub use error::{LayoutError, MdspanError};
pub use extent::{Dyn, Extent, Static, DYNAMIC_EXTENT};
pub use extents::{DExtents, Dims, Extents, ExtentsFrom, MAX_INLINE_RANK};
pub use layout::{
    ColumnMajor, ColumnMajorMapping, Layout, Mapping, MappingFrom, MappingFromExtents, RowMajor,
    RowMajorMapping, Strided, StridedMapping, TryMappingFrom,
};
pub use mdspan::{dynamic, Mdspan, MdspanMut, MdspanRef};
pub use storage::{Storage, StorageMut};
pub use submdspan::{submdspan, FullExtent, Slice, SliceSpec, SubmdspanSlices, FULL_EXTENT};
