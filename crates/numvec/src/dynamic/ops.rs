//! Implementations of `std::ops` for [`DVector`].
//!
//! Vector-vector operations can fail with a dimension mismatch, so they produce a [`Result`]. The
//! compound forms are inherent `try_*_assign` methods, since the `*Assign` traits have no way to
//! report that.

use std::ops::{Add, Index, IndexMut, Mul, MulAssign, Neg, Sub};

use crate::{
    error::{check_dim, infallible, Result},
    kernel, CastFrom, Elements, Scalar,
};

use super::DVector;

impl<'a, T> Index<usize> for DVector<'a, T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.buf.as_slice()[index]
    }
}

impl<'a, T> IndexMut<usize> for DVector<'a, T> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.buf.as_mut_slice()[index]
    }
}

impl<'a, 'b, T, U> PartialEq<DVector<'b, U>> for DVector<'a, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &DVector<'b, U>) -> bool {
        self.buf.as_slice() == other.buf.as_slice()
    }
}

impl<'a, T> Eq for DVector<'a, T> where T: Eq {}

impl<'a, T, U, const N: usize> PartialEq<[U; N]> for DVector<'a, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.buf.as_slice() == other
    }
}

impl<'a, T, U> PartialEq<[U]> for DVector<'a, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.buf.as_slice() == other
    }
}

impl<'a, 'b, T, U> PartialEq<&'b [U]> for DVector<'a, T>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &&'b [U]) -> bool {
        self.buf.as_slice() == *other
    }
}

impl<'a, T: Scalar> DVector<'a, T> {
    /// Element-wise `self += cast(rhs)`, returning `self` for chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let mut v = DVector::from_vec(vec![1.0f64, 2.0]);
    /// v.try_add_assign(&DVector::from_vec(vec![1i32, 1]))?
    ///     .try_sub_assign(&DVector::from_vec(vec![0.5f32, 0.5]))?;
    /// assert_eq!(v, [1.5, 2.5]);
    /// # Ok::<(), VectorError>(())
    /// ```
    pub fn try_add_assign<U>(&mut self, rhs: &DVector<'_, U>) -> Result<&mut Self>
    where
        U: Scalar,
        T: CastFrom<U>,
    {
        check_dim(self.dim(), rhs.dim())?;
        kernel::zip_apply(self.as_mut_slice(), rhs.as_slice(), |l, r| *l = l.wrapping_add(r));
        Ok(self)
    }

    /// Element-wise `self -= cast(rhs)`, returning `self` for chaining.
    pub fn try_sub_assign<U>(&mut self, rhs: &DVector<'_, U>) -> Result<&mut Self>
    where
        U: Scalar,
        T: CastFrom<U>,
    {
        check_dim(self.dim(), rhs.dim())?;
        kernel::zip_apply(self.as_mut_slice(), rhs.as_slice(), |l, r| *l = l.wrapping_sub(r));
        Ok(self)
    }

    /// Scales every element by `cast(factor)`, returning `self` for chaining.
    ///
    /// This never fails; it is the chaining form of `*=`.
    pub fn scale<U>(&mut self, factor: U) -> &mut Self
    where
        U: Scalar,
        T: CastFrom<U>,
    {
        kernel::scale_in_place(self.as_mut_slice(), T::cast_from(factor));
        self
    }
}

/// Element-wise addition.
impl<T, U> Add<&DVector<'_, U>> for &DVector<'_, T>
where
    T: Scalar + CastFrom<U>,
    U: Scalar,
{
    type Output = Result<DVector<'static, T>>;

    fn add(self, rhs: &DVector<'_, U>) -> Self::Output {
        check_dim(self.dim(), rhs.dim())?;
        kernel::zip_map(self.as_slice(), rhs.as_slice(), T::wrapping_add).map(DVector::from_buffer)
    }
}

/// Element-wise subtraction.
impl<T, U> Sub<&DVector<'_, U>> for &DVector<'_, T>
where
    T: Scalar + CastFrom<U>,
    U: Scalar,
{
    type Output = Result<DVector<'static, T>>;

    fn sub(self, rhs: &DVector<'_, U>) -> Self::Output {
        check_dim(self.dim(), rhs.dim())?;
        kernel::zip_map(self.as_slice(), rhs.as_slice(), T::wrapping_sub).map(DVector::from_buffer)
    }
}

/// Dot product.
impl<T, U> Mul<&DVector<'_, U>> for &DVector<'_, T>
where
    T: Scalar + CastFrom<U>,
    U: Scalar,
{
    type Output = Result<T>;

    fn mul(self, rhs: &DVector<'_, U>) -> Self::Output {
        self.try_dot(rhs)
    }
}

/// Element-wise negation.
impl<T> Neg for &DVector<'_, T>
where
    T: Scalar + Neg<Output = T>,
{
    type Output = DVector<'static, T>;

    fn neg(self) -> Self::Output {
        self.map(T::wrapping_neg)
    }
}

// Scalars are spelled out per type: a blanket `Mul<U>` would overlap with the dot product, and
// `scalar * vector` can only be implemented on concrete left-hand types anyway.
macro_rules! scalar_ops {
    ($($s:ty),+) => {
        $(
            /// Vector-Scalar multiplication (scaling).
            impl<T> Mul<$s> for &DVector<'_, T>
            where
                T: Scalar + CastFrom<$s>,
            {
                type Output = DVector<'static, T>;

                fn mul(self, rhs: $s) -> Self::Output {
                    let factor = T::cast_from(rhs);
                    infallible(kernel::scale(self.as_slice(), factor).map(DVector::from_buffer))
                }
            }

            /// Vector-Scalar multiplication (scaling), reusing the buffer of `self`.
            impl<'a, T> Mul<$s> for DVector<'a, T>
            where
                T: Scalar + CastFrom<$s>,
            {
                type Output = DVector<'a, T>;

                fn mul(mut self, rhs: $s) -> Self::Output {
                    self.scale(rhs);
                    self
                }
            }

            /// Scalar-Vector multiplication (scaling). The result has the scalar's type.
            impl<U> Mul<&DVector<'_, U>> for $s
            where
                U: Scalar,
                $s: CastFrom<U>,
            {
                type Output = DVector<'static, $s>;

                fn mul(self, rhs: &DVector<'_, U>) -> Self::Output {
                    infallible(kernel::scale_by(self, rhs.as_slice()).map(DVector::from_buffer))
                }
            }

            /// Vector-Scalar multiplication (scaling).
            impl<'a, T> MulAssign<$s> for DVector<'a, T>
            where
                T: Scalar + CastFrom<$s>,
            {
                fn mul_assign(&mut self, rhs: $s) {
                    self.scale(rhs);
                }
            }
        )+
    };
}
scalar_ops!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);
