//! Read and write access traits shared by every array view.

use crate::element::ArrayElement;
use crate::error::BoundsError;

/// Read-only, bounds-checked access to a contiguous run of elements.
///
/// Implemented by both handle types in `hostarray-handle` and by plain
/// slices, so numeric kernels can be written once and run against host
/// buffers or owned data alike.
pub trait ArrayRead<T: ArrayElement> {
    /// The elements as a slice.
    fn as_slice(&self) -> &[T];

    /// Number of elements.
    fn len(&self) -> usize {
        self.as_slice().len()
    }

    /// Whether the array has no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checked element access.
    fn get(&self, index: usize) -> Result<&T, BoundsError> {
        let data = self.as_slice();
        data.get(index).ok_or(BoundsError {
            index,
            len: data.len(),
        })
    }
}

/// Write access on top of [`ArrayRead`].
pub trait ArrayWrite<T: ArrayElement>: ArrayRead<T> {
    /// The elements as a mutable slice.
    fn as_mut_slice(&mut self) -> &mut [T];

    /// Checked mutable element access.
    fn get_mut(&mut self, index: usize) -> Result<&mut T, BoundsError> {
        let data = self.as_mut_slice();
        let len = data.len();
        data.get_mut(index).ok_or(BoundsError { index, len })
    }
}

impl<T: ArrayElement> ArrayRead<T> for [T] {
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T: ArrayElement> ArrayWrite<T> for [T] {
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}

impl<T: ArrayElement> ArrayRead<T> for Vec<T> {
    fn as_slice(&self) -> &[T] {
        self
    }
}

impl<T: ArrayElement> ArrayWrite<T> for Vec<T> {
    fn as_mut_slice(&mut self) -> &mut [T] {
        self
    }
}
