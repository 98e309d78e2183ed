use std::{array, fmt};

use crate::{
    buffer::Buffer,
    error::{check_dim, infallible, Result},
    kernel, CastFrom, DVector, Elements, Scalar, Sqrt,
};

mod ops;

/// A 2-dimensional owned vector.
pub type Vec2<T> = Vector<'static, T, 2>;
/// A 2-dimensional owned vector with [`f32`] elements.
pub type Vec2f = Vec2<f32>;
/// A 3-dimensional owned vector.
pub type Vec3<T> = Vector<'static, T, 3>;
/// A 3-dimensional owned vector with [`f32`] elements.
pub type Vec3f = Vec3<f32>;
/// A 4-dimensional owned vector.
pub type Vec4<T> = Vector<'static, T, 4>;
/// A 4-dimensional owned vector with [`f32`] elements.
pub type Vec4f = Vec4<f32>;

/// An `N`-element vector storing elements of type `T`.
///
/// This is the compile-time sized counterpart of [`DVector`]. It follows the same storage and
/// conversion rules (see the [`DVector`] docs), but since the dimension is part of the type, all
/// binary operations are infallible: vectors of different dimensions simply don't type-check.
///
/// ```compile_fail
/// # use numvec::*;
/// let a = vec3(1, 2, 3);
/// let b = vec2(1, 2);
/// let _ = &a + &b;
/// ```
///
/// # Construction
///
/// - The freestanding [`vec2`], [`vec3`] and [`vec4`] functions directly create vectors from
///   provided values.
/// - [`Vector::zeroed`], [`Vector::splat`] and [`Vector::from_fn`] allocate and initialize a new
///   buffer.
/// - [`Vector::view`] wraps caller-supplied storage of exactly `N` elements without taking
///   ownership.
/// - [`Vector::cast_from`] and [`Vector::from_vector`] convert from other [`Vector`]s of the same
///   dimension, by copy and by move respectively.
///
/// # Element Access
///
/// The [`Index`] and [`IndexMut`] impls can be used just like on arrays. The [`Elements`] trait
/// provides checked and unchecked access, iteration and [`Elements::fill`].
///
/// [`Index`]: std::ops::Index
/// [`IndexMut`]: std::ops::IndexMut
pub struct Vector<'a, T, const N: usize> {
    buf: Buffer<'a, T>,
}

impl<T: Scalar, const N: usize> Vector<'static, T, N> {
    /// Creates a vector with every element set to 0.
    ///
    /// # Panics
    ///
    /// Panics if the buffer cannot be allocated.
    pub fn zeroed() -> Self {
        infallible(Self::try_zeroed())
    }

    /// Creates a vector with every element set to 0, reporting allocation failure.
    pub fn try_zeroed() -> Result<Self> {
        Buffer::zeroed(N).map(Self::from_buffer)
    }

    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let v = Vector::splat(2);
    /// assert_eq!(v, vec3(2, 2, 2));
    /// ```
    pub fn splat(elem: T) -> Self {
        Self::from_fn(|_| elem)
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// Analogous to [`array::from_fn`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let v = Vector::from_fn(|i| i as i32 + 100);
    /// assert_eq!(v, vec3(100, 101, 102));
    /// ```
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        infallible(Buffer::from_fn(N, f).map(Self::from_buffer))
    }

    /// Moves the elements of `array` into a new buffer.
    pub fn from_array(array: [T; N]) -> Self {
        Self::from_buffer(Buffer::Owned(array.to_vec()))
    }

    /// Copies the elements of `src` into a new buffer, converting each of them to `T`.
    pub fn cast_from<U>(src: &Vector<'_, U, N>) -> Self
    where
        U: Scalar,
        T: CastFrom<U>,
    {
        infallible(Self::try_cast_from(src))
    }

    /// Fallible version of [`Vector::cast_from`].
    pub fn try_cast_from<U>(src: &Vector<'_, U, N>) -> Result<Self>
    where
        U: Scalar,
        T: CastFrom<U>,
    {
        Buffer::copied(src.as_slice()).map(Self::from_buffer)
    }
}

impl<'a, T: Scalar, const N: usize> Vector<'a, T, N> {
    /// The dimension of this vector type.
    pub const DIM: usize = N;

    pub(crate) fn from_buffer(buf: Buffer<'a, T>) -> Self {
        debug_assert_eq!(buf.len(), N);
        Self { buf }
    }

    /// Creates a vector that views `storage` instead of owning its elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let mut storage = [0.0; 3];
    /// Vector::view(&mut storage).fill(|i| i as f64);
    /// assert_eq!(storage, [0.0, 1.0, 2.0]);
    /// ```
    pub fn view(storage: &'a mut [T; N]) -> Self {
        log::trace!("view: {} elements", N);
        Self::from_buffer(Buffer::View(storage))
    }

    /// Creates a vector that views `storage`, which must have exactly `N` elements.
    pub fn try_view(storage: &'a mut [T]) -> Result<Self> {
        check_dim(N, storage.len())?;
        log::trace!("view: {} elements", N);
        Ok(Self::from_buffer(Buffer::View(storage)))
    }

    /// Converts `src` into a vector of scalar type `T`, reusing its buffer when possible.
    ///
    /// Follows the same rules as [`DVector::from_vector`].
    pub fn from_vector<U>(src: Vector<'a, U, N>) -> Self
    where
        U: Scalar,
        T: CastFrom<U>,
    {
        infallible(Self::try_from_vector(src))
    }

    /// Fallible version of [`Vector::from_vector`].
    pub fn try_from_vector<U>(src: Vector<'a, U, N>) -> Result<Self>
    where
        U: Scalar,
        T: CastFrom<U>,
    {
        Buffer::moved(src.buf).map(Self::from_buffer)
    }

    /// Copy-assigns the elements of `src` to `self`, converting them to `T`.
    ///
    /// The dimensions always match, so this writes into the existing storage and never
    /// allocates.
    pub fn assign<U>(&mut self, src: &Vector<'_, U, N>)
    where
        U: Scalar,
        T: CastFrom<U>,
    {
        kernel::zip_apply(self.buf.as_mut_slice(), src.as_slice(), |l, r| *l = r);
    }

    /// Move-assigns `src` to `self`, following the rules of [`Vector::from_vector`].
    pub fn assign_from<U>(&mut self, src: Vector<'a, U, N>)
    where
        U: Scalar,
        T: CastFrom<U>,
    {
        infallible(self.try_assign_from(src))
    }

    /// Fallible version of [`Vector::assign_from`].
    ///
    /// On error, `self` is left unchanged and `src` is dropped.
    pub fn try_assign_from<U>(&mut self, src: Vector<'a, U, N>) -> Result<()>
    where
        U: Scalar,
        T: CastFrom<U>,
    {
        let fresh = Buffer::moved(src.buf)?;
        self.buf.replace(fresh);
        Ok(())
    }

    /// Returns whether this vector releases its elements when dropped.
    #[inline]
    pub fn owns_buffer(&self) -> bool {
        self.buf.is_owned()
    }

    /// Returns whether this vector is a view into caller-supplied storage.
    #[inline]
    pub fn is_view(&self) -> bool {
        !self.buf.is_owned()
    }

    /// Returns the elements as a slice of length `N`.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    /// Returns the elements as a mutable slice of length `N`.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf.as_mut_slice()
    }

    /// Returns a raw pointer to the first element.
    #[inline]
    pub fn as_ptr(&self) -> *const T {
        self.as_slice().as_ptr()
    }

    /// Returns a raw mutable pointer to the first element.
    #[inline]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.as_mut_slice().as_mut_ptr()
    }

    /// Copies the elements into an array.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// assert_eq!(vec3(1, 2, 3).to_array(), [1, 2, 3]);
    /// ```
    pub fn to_array(&self) -> [T; N] {
        let src = self.as_slice();
        array::from_fn(|i| src[i])
    }

    /// Detaches this vector from any borrowed storage, copying the elements of a view.
    pub fn into_owned(self) -> Vector<'static, T, N> {
        Vector::from_buffer(self.buf.into_owned())
    }

    /// Turns this vector into a [`DVector`] without touching its buffer.
    pub fn into_dynamic(self) -> DVector<'a, T> {
        DVector::from_buffer(self.buf)
    }

    /// Applies a closure to each element, returning a new, owned vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let v = vec3(1, 2, 3).map(|i| i * 10);
    /// assert_eq!(v, vec3(10, 20, 30));
    /// ```
    pub fn map<U, F>(&self, mut f: F) -> Vector<'static, U, N>
    where
        U: Scalar,
        F: FnMut(T) -> U,
    {
        let src = self.as_slice();
        Vector::from_fn(|i| f(src[i]))
    }

    /// Computes the dot product between `self` and `other`, accumulated in `T`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let a = vec3(1, 3, -5);
    /// let b = vec3(4.0f32, -2.0, -1.0);
    /// assert_eq!(a.dot(&b), 3);
    /// assert_eq!(&a * &a, 35);
    /// ```
    pub fn dot<U>(&self, other: &Vector<'_, U, N>) -> T
    where
        U: Scalar,
        T: CastFrom<U>,
    {
        kernel::dot(self.as_slice(), other.as_slice())
    }

    /// Returns the squared length of this vector.
    pub fn length2(&self) -> T {
        self.dot(self)
    }

    /// Returns the length of this vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// assert_eq!(vec2(3.0f64, 4.0).length(), 5.0);
    /// ```
    pub fn length(&self) -> T
    where
        T: Sqrt,
    {
        self.length2().sqrt()
    }
}

impl<'a, T: Scalar> Vector<'a, T, 3> {
    /// Computes the cross product of `self` and `other`.
    ///
    /// The result is a vector that is perpendicular to both `self` and `other`. Its direction
    /// depends on the order of the arguments: swapping them will invert the direction of the
    /// resulting vector.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let x = vec3(1.0f32, 0.0, 0.0);
    /// let y = vec3(0.0f32, 1.0, 0.0);
    /// assert_eq!(x.cross(&y), vec3(0.0, 0.0, 1.0));
    /// assert_eq!(y.cross(&x), vec3(0.0, 0.0, -1.0));
    /// ```
    pub fn cross<U>(&self, other: &Vector<'_, U, 3>) -> Vector<'static, T, 3>
    where
        U: Scalar,
        T: CastFrom<U>,
    {
        Vector::from_array(kernel::cross(self.to_array(), other.to_array()))
    }
}

impl<'a, T: Scalar, const N: usize> Elements for Vector<'a, T, N> {
    type Scalar = T;

    #[inline]
    fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf.as_mut_slice()
    }

    #[inline]
    fn dim(&self) -> usize {
        N
    }
}

/// Deep copy: the clone always owns its elements, even if `self` is a view.
impl<'a, T: Scalar, const N: usize> Clone for Vector<'a, T, N> {
    fn clone(&self) -> Self {
        Self::from_buffer(Buffer::Owned(self.as_slice().to_vec()))
    }
}

impl<T: Scalar, const N: usize> Default for Vector<'static, T, N> {
    #[inline]
    fn default() -> Self {
        Self::zeroed()
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<'static, T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self::from_array(value)
    }
}

impl<'a, T: Scalar, const N: usize> From<Vector<'a, T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<'a, T, N>) -> Self {
        value.to_array()
    }
}

/// Copies a [`DVector`] with exactly `N` elements, see [`DVector::to_fixed`].
impl<'a, 'b, T: Scalar, const N: usize> TryFrom<&'b DVector<'a, T>> for Vector<'static, T, N> {
    type Error = crate::VectorError;

    fn try_from(value: &'b DVector<'a, T>) -> Result<Self> {
        value.to_fixed()
    }
}

impl<'a, T: Scalar, const N: usize> AsRef<[T]> for Vector<'a, T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<'a, T: Scalar, const N: usize> AsMut<[T]> for Vector<'a, T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, T, const N: usize> fmt::Debug for Vector<'a, T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::fmt_tuple(f, self.buf.as_slice(), |elem, f| fmt::Debug::fmt(elem, f))
    }
}

impl<'a, T, const N: usize> fmt::Display for Vector<'a, T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::fmt_tuple(f, self.buf.as_slice(), |elem, f| fmt::Display::fmt(elem, f))
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub fn vec2<T: Scalar>(x: T, y: T) -> Vec2<T> {
    Vector::from_array([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub fn vec3<T: Scalar>(x: T, y: T, z: T) -> Vec3<T> {
    Vector::from_array([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub fn vec4<T: Scalar>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector::from_array([x, y, z, w])
}
