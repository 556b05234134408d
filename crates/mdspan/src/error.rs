//! Error types for layout conversion and view construction.

use std::error::Error;
use std::fmt;

/// Errors arising from building or converting a layout mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LayoutError {
    /// A strided mapping cannot be reinterpreted as a dense layout because
    /// its strides differ from the ones that layout would produce.
    StrideMismatch {
        /// Name of the destination layout.
        layout: &'static str,
        /// First dimension whose stride disagrees.
        dim: usize,
        /// Stride the destination layout requires for `dim`.
        expected: usize,
        /// Stride actually stored in the source mapping.
        actual: usize,
    },
    /// A stride list whose length differs from the rank of the extents.
    RankMismatch {
        /// Rank of the extents.
        expected: usize,
        /// Number of strides supplied.
        actual: usize,
    },
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StrideMismatch {
                layout,
                dim,
                expected,
                actual,
            } => {
                write!(
                    f,
                    "cannot convert strided mapping to {layout}: dimension {dim} has stride {actual}, expected {expected}"
                )
            }
            Self::RankMismatch { expected, actual } => {
                write!(f, "expected {expected} strides, got {actual}")
            }
        }
    }
}

impl Error for LayoutError {}

/// Errors from the checked [`Mdspan`](crate::Mdspan) constructors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MdspanError {
    /// The mapping could not be built or converted.
    Layout(LayoutError),
    /// The buffer is shorter than the mapping's required span size.
    BufferTooSmall {
        /// `required_buffer_len()` of the mapping.
        required: usize,
        /// Length of the supplied buffer.
        len: usize,
    },
}

impl fmt::Display for MdspanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Layout(err) => write!(f, "layout error: {err}"),
            Self::BufferTooSmall { required, len } => {
                write!(
                    f,
                    "buffer too small: mapping requires {required} elements, buffer has {len}"
                )
            }
        }
    }
}

impl Error for MdspanError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Layout(err) => Some(err),
            Self::BufferTooSmall { .. } => None,
        }
    }
}

impl From<LayoutError> for MdspanError {
    fn from(err: LayoutError) -> Self {
        Self::Layout(err)
    }
}
