//! Implementations of `std::ops` for [`Vector`].

use std::ops::{Add, AddAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::{error::infallible, kernel, CastFrom, DVector, Scalar};

use super::Vector;

impl<'a, T, const N: usize> Index<usize> for Vector<'a, T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.buf.as_slice()[index]
    }
}

impl<'a, T, const N: usize> IndexMut<usize> for Vector<'a, T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.buf.as_mut_slice()[index]
    }
}

impl<'a, 'b, T, U, const N: usize> PartialEq<Vector<'b, U, N>> for Vector<'a, T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<'b, U, N>) -> bool {
        self.buf.as_slice() == other.buf.as_slice()
    }
}

impl<'a, T, const N: usize> Eq for Vector<'a, T, N> where T: Eq {}

impl<'a, 'b, T, U, const N: usize> PartialEq<DVector<'b, U>> for Vector<'a, T, N>
where
    T: PartialEq<U>,
    U: Scalar,
{
    fn eq(&self, other: &DVector<'b, U>) -> bool {
        self.buf.as_slice() == other.as_slice()
    }
}

impl<'a, 'b, T, U, const N: usize> PartialEq<Vector<'b, U, N>> for DVector<'a, T>
where
    T: Scalar + PartialEq<U>,
{
    fn eq(&self, other: &Vector<'b, U, N>) -> bool {
        self.as_slice() == other.buf.as_slice()
    }
}

impl<'a, T, U, const N: usize> PartialEq<[U; N]> for Vector<'a, T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.buf.as_slice() == other
    }
}

impl<'a, T, U, const N: usize> PartialEq<[U]> for Vector<'a, T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U]) -> bool {
        self.buf.as_slice() == other
    }
}

impl<'a, T: Scalar, const N: usize> Vector<'a, T, N> {
    /// Element-wise `self += cast(rhs)`, returning `self` for chaining.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let mut v = vec2(1u8, 2);
    /// v.add_in_place(&vec2(255u8, 1)).sub_in_place(&vec2(1i32, 1)).scale(2);
    /// assert_eq!(v, [254, 4]);
    /// ```
    pub fn add_in_place<U>(&mut self, rhs: &Vector<'_, U, N>) -> &mut Self
    where
        U: Scalar,
        T: CastFrom<U>,
    {
        kernel::zip_apply(self.as_mut_slice(), rhs.as_slice(), |l, r| *l = l.wrapping_add(r));
        self
    }

    /// Element-wise `self -= cast(rhs)`, returning `self` for chaining.
    pub fn sub_in_place<U>(&mut self, rhs: &Vector<'_, U, N>) -> &mut Self
    where
        U: Scalar,
        T: CastFrom<U>,
    {
        kernel::zip_apply(self.as_mut_slice(), rhs.as_slice(), |l, r| *l = l.wrapping_sub(r));
        self
    }

    /// Scales every element by `cast(factor)`, returning `self` for chaining.
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
impl<T, U, const N: usize> Add<&Vector<'_, U, N>> for &Vector<'_, T, N>
where
    T: Scalar + CastFrom<U>,
    U: Scalar,
{
    type Output = Vector<'static, T, N>;

    fn add(self, rhs: &Vector<'_, U, N>) -> Self::Output {
        let buf = kernel::zip_map(self.as_slice(), rhs.as_slice(), T::wrapping_add);
        infallible(buf.map(Vector::from_buffer))
    }
}

/// Element-wise addition, reusing the buffer of `self`.
impl<'a, T, U, const N: usize> Add<Vector<'_, U, N>> for Vector<'a, T, N>
where
    T: Scalar + CastFrom<U>,
    U: Scalar,
{
    type Output = Vector<'a, T, N>;

    fn add(mut self, rhs: Vector<'_, U, N>) -> Self::Output {
        self += &rhs;
        self
    }
}

/// Element-wise subtraction.
impl<T, U, const N: usize> Sub<&Vector<'_, U, N>> for &Vector<'_, T, N>
where
    T: Scalar + CastFrom<U>,
    U: Scalar,
{
    type Output = Vector<'static, T, N>;

    fn sub(self, rhs: &Vector<'_, U, N>) -> Self::Output {
        let buf = kernel::zip_map(self.as_slice(), rhs.as_slice(), T::wrapping_sub);
        infallible(buf.map(Vector::from_buffer))
    }
}

/// Element-wise subtraction, reusing the buffer of `self`.
impl<'a, T, U, const N: usize> Sub<Vector<'_, U, N>> for Vector<'a, T, N>
where
    T: Scalar + CastFrom<U>,
    U: Scalar,
{
    type Output = Vector<'a, T, N>;

    fn sub(mut self, rhs: Vector<'_, U, N>) -> Self::Output {
        self -= &rhs;
        self
    }
}

/// Element-wise addition.
impl<T, U, const N: usize> AddAssign<&Vector<'_, U, N>> for Vector<'_, T, N>
where
    T: Scalar + CastFrom<U>,
    U: Scalar,
{
    fn add_assign(&mut self, rhs: &Vector<'_, U, N>) {
        self.add_in_place(rhs);
    }
}

/// Element-wise subtraction.
impl<T, U, const N: usize> SubAssign<&Vector<'_, U, N>> for Vector<'_, T, N>
where
    T: Scalar + CastFrom<U>,
    U: Scalar,
{
    fn sub_assign(&mut self, rhs: &Vector<'_, U, N>) {
        self.sub_in_place(rhs);
    }
}

/// Dot product.
impl<T, U, const N: usize> Mul<&Vector<'_, U, N>> for &Vector<'_, T, N>
where
    T: Scalar + CastFrom<U>,
    U: Scalar,
{
    type Output = T;

    fn mul(self, rhs: &Vector<'_, U, N>) -> Self::Output {
        self.dot(rhs)
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for &Vector<'_, T, N>
where
    T: Scalar + Neg<Output = T>,
{
    type Output = Vector<'static, T, N>;

    fn neg(self) -> Self::Output {
        self.map(T::wrapping_neg)
    }
}

/// Element-wise negation, reusing the buffer of `self`.
impl<'a, T, const N: usize> Neg for Vector<'a, T, N>
where
    T: Scalar + Neg<Output = T>,
{
    type Output = Vector<'a, T, N>;

    fn neg(mut self) -> Self::Output {
        kernel::negate_in_place(self.as_mut_slice());
        self
    }
}

macro_rules! scalar_ops {
    ($($s:ty),+) => {
        $(
            /// Vector-Scalar multiplication (scaling).
            impl<T, const N: usize> Mul<$s> for &Vector<'_, T, N>
            where
                T: Scalar + CastFrom<$s>,
            {
                type Output = Vector<'static, T, N>;

                fn mul(self, rhs: $s) -> Self::Output {
                    let factor = T::cast_from(rhs);
                    infallible(kernel::scale(self.as_slice(), factor).map(Vector::from_buffer))
                }
            }

            /// Vector-Scalar multiplication (scaling), reusing the buffer of `self`.
            impl<'a, T, const N: usize> Mul<$s> for Vector<'a, T, N>
            where
                T: Scalar + CastFrom<$s>,
            {
                type Output = Vector<'a, T, N>;

                fn mul(mut self, rhs: $s) -> Self::Output {
                    self *= rhs;
                    self
                }
            }

            /// Scalar-Vector multiplication (scaling). The result has the scalar's type.
            impl<U, const N: usize> Mul<&Vector<'_, U, N>> for $s
            where
                U: Scalar,
                $s: CastFrom<U>,
            {
                type Output = Vector<'static, $s, N>;

                fn mul(self, rhs: &Vector<'_, U, N>) -> Self::Output {
                    infallible(kernel::scale_by(self, rhs.as_slice()).map(Vector::from_buffer))
                }
            }

            /// Vector-Scalar multiplication (scaling).
            impl<'a, T, const N: usize> MulAssign<$s> for Vector<'a, T, N>
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

#[cfg(test)]
mod tests {
    use crate::*;

    #[test]
    fn add_sub() {
        let a = vec3(1.0f32, 2.0, 3.0);
        let b = vec3(10i32, 20, 30);
        let sum = &a + &b;
        assert_eq!(sum, [11.0, 22.0, 33.0]);
        assert_eq!(&sum - &b, a);

        let ptr = sum.as_ptr();
        let by_value = sum - b.clone();
        assert_eq!(by_value.as_ptr(), ptr);
        assert_eq!(by_value + b, [11.0, 22.0, 33.0]);
    }

    #[test]
    fn compound() {
        let mut v = vec2(1u8, 2);
        v += &vec2(250.0f64, 3.9);
        assert_eq!(v, [251, 5]);
        v -= &vec2(1i64, 1);
        assert_eq!(v, [250, 4]);
    }

    #[test]
    fn compound_on_view() {
        let mut storage = [1.0f64, 2.0];
        let mut v = Vector::view(&mut storage);
        v += &vec2(1i32, 1);
        v *= 2.0f64;
        drop(v);
        assert_eq!(storage, [4.0, 6.0]);
    }

    #[test]
    fn scalar_mul() {
        let a = vec2(1.5f64, -2.0);
        assert_eq!(&a * 2u8, [3.0, -4.0]);
        assert_eq!(2.0f64 * &a, [3.0, -4.0]);
        assert_eq!(2i32 * &a, [2, -4]);
        assert_eq!(a * 0.5f32, [0.75, -1.0]);
    }

    #[test]
    fn dot_and_neg() {
        let a = vec3(1i32, 3, -5);
        let b = vec3(4.0f32, -2.0, -1.0);
        assert_eq!(&a * &b, 3);
        assert_eq!(&b * &a, 3.0);
        assert_eq!(-&a, [-1, -3, 5]);
        assert_eq!(-a, [-1, -3, 5]);
    }

    #[test]
    fn integer_overflow_wraps() {
        assert_eq!(&vec2(200u8, 0) + &vec2(100u8, 0), [44, 0]);
        assert_eq!(&vec2(1u32, 0) - &vec2(2u32, 0), [u32::MAX, 0]);
        assert_eq!(&vec3(100i8, 1, 1) * 2i8, [-56, 2, 2]);
        assert_eq!(2u8 * &vec2(200u8, 1), [144, 2]);
        assert_eq!(&vec2(200u8, 200) * &vec2(1u8, 1), 144);
        assert_eq!(-vec2(i8::MIN, 1), [i8::MIN, -1]);

        let mut v = vec2(250u8, 0);
        v += &vec2(10u8, 0);
        assert_eq!(v, [4, 0]);
        v -= &vec2(5u8, 1);
        assert_eq!(v, [255, 255]);
        v *= 2u8;
        assert_eq!(v, [254, 254]);
    }

    #[test]
    fn chaining() {
        let mut storage = [1i32, 2, 3];
        let mut v = Vector::view(&mut storage);
        v.add_in_place(&vec3(1.0f32, 1.0, 1.0))
            .scale(10u8)
            .sub_in_place(&vec3(0i64, 10, 20));
        drop(v);
        assert_eq!(storage, [20, 20, 20]);
    }

    #[test]
    fn mixed_comparisons() {
        let v = vec3(1, 2, 3);
        let d = DVector::from_vec(vec![1, 2, 3]);
        assert_eq!(v, d);
        assert_eq!(d, v);
        assert_eq!(v, [1, 2, 3][..]);
    }
}
