//! Slice-level arithmetic shared by both vector types.
//!
//! Callers are responsible for checking that the operands have the same length. The right-hand
//! operand is always converted to the left-hand scalar type before the operation. Integer arithmetic
//! wraps around on overflow (see [`Wrapping`][crate::Wrapping]).

use crate::{buffer::Buffer, error::Result, CastFrom, Scalar};

/// Computes `op(lhs[i], cast(rhs[i]))` for every element into a new buffer.
pub(crate) fn zip_map<'a, T, U, F>(lhs: &[T], rhs: &[U], mut op: F) -> Result<Buffer<'a, T>>
where
    T: Scalar + CastFrom<U>,
    U: Scalar,
    F: FnMut(T, T) -> T,
{
    debug_assert_eq!(lhs.len(), rhs.len());
    Buffer::from_fn(lhs.len(), |i| op(lhs[i], T::cast_from(rhs[i])))
}

/// Applies `op(&mut lhs[i], cast(rhs[i]))` to every element in place.
pub(crate) fn zip_apply<T, U, F>(lhs: &mut [T], rhs: &[U], mut op: F)
where
    T: Scalar + CastFrom<U>,
    U: Scalar,
    F: FnMut(&mut T, T),
{
    debug_assert_eq!(lhs.len(), rhs.len());
    lhs.iter_mut()
        .zip(rhs)
        .for_each(|(lhs, &rhs)| op(lhs, T::cast_from(rhs)));
}

/// Multiplies every element of `src` with `factor` into a new buffer.
pub(crate) fn scale<'a, T: Scalar>(src: &[T], factor: T) -> Result<Buffer<'a, T>> {
    Buffer::from_fn(src.len(), |i| src[i].wrapping_mul(factor))
}

/// Multiplies every element of `dst` with `factor` in place.
pub(crate) fn scale_in_place<T: Scalar>(dst: &mut [T], factor: T) {
    dst.iter_mut().for_each(|elem| *elem = elem.wrapping_mul(factor));
}

/// Negates every element of `dst` in place.
pub(crate) fn negate_in_place<T: Scalar>(dst: &mut [T]) {
    dst.iter_mut().for_each(|elem| *elem = elem.wrapping_neg());
}

/// Computes `factor * cast(src[i])` for every element, yielding elements of the factor's type.
pub(crate) fn scale_by<'a, T, U>(factor: T, src: &[U]) -> Result<Buffer<'a, T>>
where
    T: Scalar + CastFrom<U>,
    U: Scalar,
{
    Buffer::from_fn(src.len(), |i| factor.wrapping_mul(T::cast_from(src[i])))
}

/// `sum(lhs[i] * cast(rhs[i]))`, accumulated in the left-hand scalar type.
pub(crate) fn dot<T, U>(lhs: &[T], rhs: &[U]) -> T
where
    T: Scalar + CastFrom<U>,
    U: Scalar,
{
    debug_assert_eq!(lhs.len(), rhs.len());
    lhs.iter()
        .zip(rhs)
        .fold(T::ZERO, |acc, (&a, &b)| {
            acc.wrapping_add(a.wrapping_mul(T::cast_from(b)))
        })
}

/// Determinant expansion of the 3-dimensional cross product.
pub(crate) fn cross<T, U>(lhs: [T; 3], rhs: [U; 3]) -> [T; 3]
where
    T: Scalar + CastFrom<U>,
    U: Scalar,
{
    let [a1, a2, a3] = lhs;
    let [b1, b2, b3] = rhs.map(T::cast_from);

    let det = |a: T, b: T, c: T, d: T| a.wrapping_mul(b).wrapping_sub(c.wrapping_mul(d));

    #[rustfmt::skip]
    let cross = [
        det(a2, b3, a3, b2),
        det(a3, b1, a1, b3),
        det(a1, b2, a2, b1),
    ];
    cross
}
