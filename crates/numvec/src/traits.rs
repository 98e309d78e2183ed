//! Scalar element traits.

use std::{fmt, ops};

/// Types that have a "zero" value (an additive identity).
pub trait Zero {
    /// The *0* value of this type.
    const ZERO: Self;
}

/// Types that have a "one" value (a multiplicative identity).
pub trait One {
    /// The *1* value of this type.
    const ONE: Self;
}

/// Types that support computing their square root.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// A trait for numeric types that support basic arithmetic operations.
///
/// Unlike a full field, this does not require [`ops::Neg`], so unsigned integers qualify.
pub trait Number:
    Zero
    + One
    + ops::Add<Output = Self>
    + ops::Sub<Output = Self>
    + ops::Mul<Output = Self>
    + ops::Div<Output = Self>
    + ops::AddAssign
    + ops::SubAssign
    + ops::MulAssign
    + PartialEq
    + Copy
{
}
impl<T> Number for T where
    T: Zero
        + One
        + ops::Add<Output = Self>
        + ops::Sub<Output = Self>
        + ops::Mul<Output = Self>
        + ops::Div<Output = Self>
        + ops::AddAssign
        + ops::SubAssign
        + ops::MulAssign
        + PartialEq
        + Copy
{
}

mod sealed {
    pub trait Sealed {}
}

/// Element types that can be stored in a [`DVector`][crate::DVector] or
/// [`Vector`][crate::Vector].
///
/// This trait is sealed and implemented for the built-in integer types up to 64 bits, [`f32`] and
/// [`f64`]. All of them are plain old data, which is what makes the buffer reinterpretation
/// performed by [`DVector::from_vector`][crate::DVector::from_vector] possible.
pub trait Scalar:
    Number
    + Wrapping
    + CastFrom<Self>
    + bytemuck::Pod
    + PartialOrd
    + fmt::Debug
    + fmt::Display
    + sealed::Sealed
    + 'static
{
}

/// Arithmetic that wraps around at the bounds of the type instead of overflowing.
///
/// Built-in integer types implement this in terms of their inherent `wrapping_*` methods, so
/// `200u8 + 100u8` yields `44` and `1u32 - 2u32` yields `u32::MAX`. [`f32`] and [`f64`] cannot
/// overflow and forward to the regular operators.
pub trait Wrapping: Sized {
    fn wrapping_add(self, rhs: Self) -> Self;
    fn wrapping_sub(self, rhs: Self) -> Self;
    fn wrapping_mul(self, rhs: Self) -> Self;
    fn wrapping_neg(self) -> Self;
}
macro_rules! int_wrapping {
    ($($types:ty),+) => {
        $(
            impl Wrapping for $types {
                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    <$types>::wrapping_add(self, rhs)
                }
                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    <$types>::wrapping_sub(self, rhs)
                }
                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    <$types>::wrapping_mul(self, rhs)
                }
                #[inline]
                fn wrapping_neg(self) -> Self {
                    <$types>::wrapping_neg(self)
                }
            }
        )+
    };
}
int_wrapping!(u8, u16, u32, u64, i8, i16, i32, i64);
macro_rules! float_wrapping {
    ($($types:ty),+) => {
        $(
            impl Wrapping for $types {
                #[inline]
                fn wrapping_add(self, rhs: Self) -> Self {
                    self + rhs
                }
                #[inline]
                fn wrapping_sub(self, rhs: Self) -> Self {
                    self - rhs
                }
                #[inline]
                fn wrapping_mul(self, rhs: Self) -> Self {
                    self * rhs
                }
                #[inline]
                fn wrapping_neg(self) -> Self {
                    -self
                }
            }
        )+
    };
}
float_wrapping!(f32, f64);

/// Value conversion from scalar type `U`.
///
/// This performs the same conversion as an `as` cast: float to integer truncates towards zero and
/// saturates at the integer bounds (`NaN` becomes 0), integer narrowing wraps, and widening
/// preserves the value.
///
/// This is *never* a reinterpretation of the bit pattern.
pub trait CastFrom<U>: Sized {
    fn cast_from(value: U) -> Self;
}

/// The reverse direction of [`CastFrom`], implemented automatically.
///
/// # Examples
///
/// ```
/// # use numvec::*;
/// assert_eq!(2.9f32.cast_into::<i32>(), 2);
/// assert_eq!((-1i32).cast_into::<u8>(), 255);
/// assert_eq!(300.0f64.cast_into::<u8>(), 255);
/// ```
pub trait CastInto: Sized {
    fn cast_into<T: CastFrom<Self>>(self) -> T {
        T::cast_from(self)
    }
}
impl<U> CastInto for U {}

macro_rules! scalar {
    ($($types:ty: $zero:literal, $one:literal;)+) => {
        $(
            impl sealed::Sealed for $types {}
            impl Scalar for $types {}

            impl Zero for $types {
                const ZERO: Self = $zero;
            }

            impl One for $types {
                const ONE: Self = $one;
            }
        )+
    };
}
scalar! {
    u8: 0, 1;
    u16: 0, 1;
    u32: 0, 1;
    u64: 0, 1;
    i8: 0, 1;
    i16: 0, 1;
    i32: 0, 1;
    i64: 0, 1;
    f32: 0.0, 1.0;
    f64: 0.0, 1.0;
}

macro_rules! cast_from {
    ($($to:ty),+) => {
        $(
            cast_from!(@impl $to; u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);
        )+
    };
    (@impl $to:ty; $($from:ty),+) => {
        $(
            impl CastFrom<$from> for $to {
                #[inline]
                fn cast_from(value: $from) -> Self {
                    value as $to
                }
            }
        )+
    };
}
cast_from!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64);

impl Sqrt for f32 {
    fn sqrt(self) -> Self {
        self.sqrt()
    }
}
impl Sqrt for f64 {
    fn sqrt(self) -> Self {
        self.sqrt()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_to_int_truncates() {
        assert_eq!(i32::cast_from(2.9f32), 2);
        assert_eq!(i32::cast_from(-2.9f32), -2);
        assert_eq!(u8::cast_from(-1.0f64), 0);
        assert_eq!(u8::cast_from(f32::NAN), 0);
        assert_eq!(i16::cast_from(1e9f64), i16::MAX);
    }

    #[test]
    fn widening_preserves_value() {
        assert_eq!(i64::cast_from(i32::MIN), i32::MIN as i64);
        assert_eq!(f64::cast_from(0.1f32), 0.1f32 as f64);
        assert_eq!(u64::cast_from(u32::MAX), 4_294_967_295);
    }

    #[test]
    fn integers_wrap() {
        assert_eq!(Wrapping::wrapping_add(200u8, 100), 44);
        assert_eq!(Wrapping::wrapping_sub(1u32, 2), u32::MAX);
        assert_eq!(Wrapping::wrapping_mul(100i8, 2), -56);
        assert_eq!(Wrapping::wrapping_neg(i8::MIN), i8::MIN);
        assert_eq!(Wrapping::wrapping_sub(0.5f64, 1.0), -0.5);
        assert_eq!(Wrapping::wrapping_neg(2.0f32), -2.0);
    }

    #[test]
    fn same_width_is_a_value_cast() {
        // Same storage width, different representation: the value survives, the bits do not.
        let f = f32::cast_from(7u32);
        assert_eq!(f, 7.0);
        assert_ne!(f.to_bits(), 7);
        assert_eq!(u32::cast_from(7.75f32), 7);
    }
}
