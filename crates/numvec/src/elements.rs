use std::slice;

use crate::{
    error::{Result, VectorError},
    Scalar,
};

/// Element access shared by [`DVector`][crate::DVector] and [`Vector`][crate::Vector].
///
/// Only [`Elements::as_slice`] and [`Elements::as_mut_slice`] have to be provided, everything else
/// is derived from them.
///
/// There are three ways to access a single element:
///
/// - [`Index`] and [`IndexMut`] panic when the index is out of range, like they do for slices.
/// - [`Elements::get`] and [`Elements::get_mut`] return [`VectorError::OutOfRange`] instead.
/// - [`Elements::get_unchecked`] and [`Elements::get_unchecked_mut`] skip the bounds check and
///   leave it to the caller.
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
pub trait Elements {
    type Scalar: Scalar;

    /// Returns the elements as a slice of length [`Elements::dim`].
    fn as_slice(&self) -> &[Self::Scalar];

    /// Returns the elements as a mutable slice of length [`Elements::dim`].
    fn as_mut_slice(&mut self) -> &mut [Self::Scalar];

    /// Returns the number of elements.
    #[inline]
    fn dim(&self) -> usize {
        self.as_slice().len()
    }

    /// Returns a reference to the element at `index`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let v = DVector::from_vec(vec![1, 2, 3]);
    /// assert_eq!(v.get(2), Ok(&3));
    /// assert_eq!(v.get(3), Err(VectorError::OutOfRange { index: 3, dim: 3 }));
    /// ```
    fn get(&self, index: usize) -> Result<&Self::Scalar> {
        let dim = self.dim();
        self.as_slice()
            .get(index)
            .ok_or(VectorError::OutOfRange { index, dim })
    }

    /// Returns a mutable reference to the element at `index`.
    fn get_mut(&mut self, index: usize) -> Result<&mut Self::Scalar> {
        let dim = self.dim();
        self.as_mut_slice()
            .get_mut(index)
            .ok_or(VectorError::OutOfRange { index, dim })
    }

    /// Returns a reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`Elements::dim`].
    #[inline]
    unsafe fn get_unchecked(&self, index: usize) -> &Self::Scalar {
        // SAFETY: forwarded to the caller.
        unsafe { self.as_slice().get_unchecked(index) }
    }

    /// Returns a mutable reference to the element at `index` without bounds checking.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`Elements::dim`].
    #[inline]
    unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut Self::Scalar {
        // SAFETY: forwarded to the caller.
        unsafe { self.as_mut_slice().get_unchecked_mut(index) }
    }

    /// Overwrites every element with the value returned by `generator` for its index.
    ///
    /// Each index is visited exactly once. The existing storage is reused and the dimension does
    /// not change.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let mut v = DVector::<f32>::zeroed(3);
    /// v.fill(|i| 2.0 * i as f32);
    /// assert_eq!(v, [0.0, 2.0, 4.0]);
    /// ```
    fn fill<F>(&mut self, mut generator: F)
    where
        F: FnMut(usize) -> Self::Scalar,
    {
        for (i, slot) in self.as_mut_slice().iter_mut().enumerate() {
            *slot = generator(i);
        }
    }

    /// Returns an iterator over the elements.
    #[inline]
    fn iter(&self) -> slice::Iter<'_, Self::Scalar> {
        self.as_slice().iter()
    }

    /// Returns an iterator that allows modifying each element.
    #[inline]
    fn iter_mut(&mut self) -> slice::IterMut<'_, Self::Scalar> {
        self.as_mut_slice().iter_mut()
    }
}
