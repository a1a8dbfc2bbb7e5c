//! Fixed-capacity vector that never reallocates.
//!
//! Purpose
//! - Scratch storage for hot loops (the polygon scan converter) where the maximum
//!   size is known up front and a heap allocation per call is measurable.
//! - Behaves like a `Vec` prefix: ordering, removal shifting, and slice access match
//!   `Vec` exactly. Only growth differs: exceeding `N` returns `CapacityError` and
//!   leaves the contents untouched.
//!
//! Storage is an `arrayvec::ArrayVec`; this wrapper only turns its overflow into the
//! crate's `CapacityError` and adds the all-or-nothing bulk operations.

use std::fmt;
use std::ops::{Deref, DerefMut, Range};

use arrayvec::ArrayVec;

use crate::error::CapacityError;

/// Vector with inline storage for at most `N` elements.
#[derive(Clone)]
pub struct BoundedVec<T, const N: usize> {
    inner: ArrayVec<T, N>,
}

impl<T, const N: usize> BoundedVec<T, N> {
    /// Empty vector.
    #[inline]
    pub fn new() -> Self {
        Self {
            inner: ArrayVec::new(),
        }
    }

    /// Maximum number of elements.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.inner.is_full()
    }

    #[inline]
    fn overflow(requested: usize) -> CapacityError {
        CapacityError {
            capacity: N,
            requested,
        }
    }

    /// Append `value`, failing if the vector is full.
    #[inline]
    pub fn try_push(&mut self, value: T) -> Result<(), CapacityError> {
        let requested = self.len() + 1;
        self.inner
            .try_push(value)
            .map_err(|_| Self::overflow(requested))
    }

    /// Remove and return the last element.
    #[inline]
    pub fn pop(&mut self) -> Option<T> {
        self.inner.pop()
    }

    /// Insert `value` at `index`, shifting later elements right.
    ///
    /// Panics if `index > len`, like `Vec::insert`.
    pub fn try_insert(&mut self, index: usize, value: T) -> Result<(), CapacityError> {
        let requested = self.len() + 1;
        self.inner
            .try_insert(index, value)
            .map_err(|_| Self::overflow(requested))
    }

    /// Remove the element at `index`, shifting later elements left.
    ///
    /// Panics if `index >= len`, like `Vec::remove`.
    #[inline]
    pub fn remove(&mut self, index: usize) -> T {
        self.inner.remove(index)
    }

    /// Erase the half-open range `[range.start, range.end)`.
    ///
    /// Panics if the range is decreasing or out of bounds.
    pub fn remove_range(&mut self, range: Range<usize>) {
        self.inner.drain(range);
    }

    /// Keep only the elements for which `keep` returns true, in order.
    /// `keep` may modify the elements it visits.
    #[inline]
    pub fn retain_mut<F>(&mut self, keep: F)
    where
        F: FnMut(&mut T) -> bool,
    {
        self.inner.retain(keep);
    }

    /// Shorten to `len` elements; no effect if already shorter.
    #[inline]
    pub fn truncate(&mut self, len: usize) {
        self.inner.truncate(len);
    }

    #[inline]
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Check that `additional` more elements fit. Never allocates.
    #[inline]
    pub fn try_reserve(&self, additional: usize) -> Result<(), CapacityError> {
        let requested = self.len().saturating_add(additional);
        if requested > N {
            return Err(Self::overflow(requested));
        }
        Ok(())
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.inner.as_slice()
    }

    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.inner.as_mut_slice()
    }
}

impl<T: Clone, const N: usize> BoundedVec<T, N> {
    /// Append all of `values`, or nothing if they do not fit.
    pub fn try_extend_from_slice(&mut self, values: &[T]) -> Result<(), CapacityError> {
        self.try_reserve(values.len())?;
        self.inner.extend(values.iter().cloned());
        Ok(())
    }
}

impl<T, const N: usize> Default for BoundedVec<T, N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> Deref for BoundedVec<T, N> {
    type Target = [T];
    #[inline]
    fn deref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T, const N: usize> DerefMut for BoundedVec<T, N> {
    #[inline]
    fn deref_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a BoundedVec<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl<T, const N: usize> IntoIterator for BoundedVec<T, N> {
    type Item = T;
    type IntoIter = arrayvec::IntoIter<T, N>;
    fn into_iter(self) -> Self::IntoIter {
        self.inner.into_iter()
    }
}

impl<T: Clone, const N: usize> TryFrom<&[T]> for BoundedVec<T, N> {
    type Error = CapacityError;
    fn try_from(values: &[T]) -> Result<Self, Self::Error> {
        let mut out = Self::new();
        out.try_extend_from_slice(values)?;
        Ok(out)
    }
}

impl<T: PartialEq, const N: usize> PartialEq for BoundedVec<T, N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, const N: usize> Eq for BoundedVec<T, N> {}

impl<T: fmt::Debug, const N: usize> fmt::Debug for BoundedVec<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}
