use std::fmt;

use crate::{
    buffer::Buffer,
    error::{check_dim, infallible, Result},
    kernel, CastFrom, Elements, Scalar, Sqrt, Vector,
};

mod ops;

/// A vector whose dimension is only known at runtime.
///
/// # Storage
///
/// A [`DVector`] either *owns* its elements (in which case they are released when it is dropped),
/// or it is a *view* into memory supplied by the caller, created with [`DVector::view`]. Views
/// borrow that memory for `'a`, so the compiler ensures they cannot outlive it. Owned vectors
/// don't borrow anything and are typically spelled `DVector<'static, T>`.
///
/// ```
/// # use numvec::*;
/// let mut storage = [1.0, 2.0, 3.0];
/// let mut view = DVector::view(&mut storage);
/// assert!(view.is_view());
/// view[1] = 20.0;
/// assert_eq!(storage, [1.0, 20.0, 3.0]);
/// ```
///
/// # Conversion
///
/// - [`DVector::cast_from`] copies the elements of another vector into a new buffer, converting
///   them to `T` if necessary. [`Clone`] does the same without a type change.
/// - [`DVector::from_vector`] consumes another vector. The buffer is handed over if the scalar
///   type matches, reinterpreted in place if `T` and `U` have the same size, and reallocated
///   otherwise.
/// - [`DVector::assign`] and [`DVector::assign_from`] are the assignment counterparts. The
///   existing buffer is reused when the dimension does not change.
///
/// Each of these has a `try_` variant that reports allocation failure instead of panicking.
///
/// # Arithmetic
///
/// Binary operations between two [`DVector`]s check that both have the same dimension and report
/// [`VectorError::DimensionMismatch`][crate::VectorError::DimensionMismatch] otherwise, which is
/// why `+`, `-` and the dot product `*` return a [`Result`]:
///
/// ```
/// # use numvec::*;
/// let a = DVector::from_vec(vec![1.0f64, 2.0, 3.0]);
/// let b = DVector::from_vec(vec![1i32, 1, 1]);
/// assert_eq!((&a + &b)?, [2.0, 3.0, 4.0]);
/// assert_eq!((&a * &b)?, 6.0);
///
/// let c = DVector::from_vec(vec![1.0f64, 2.0, 3.0, 4.0]);
/// assert_eq!(
///     (&a - &c).unwrap_err(),
///     VectorError::DimensionMismatch { expected: 3, found: 4 },
/// );
/// # Ok::<(), VectorError>(())
/// ```
///
/// Scaling by a scalar cannot fail and returns a [`DVector`] directly.
pub struct DVector<'a, T> {
    buf: Buffer<'a, T>,
}

/// An owned [`DVector`].
pub type DVec<T> = DVector<'static, T>;

impl<T: Scalar> DVector<'static, T> {
    /// Creates an owned vector of dimension `dim` with every element set to 0.
    ///
    /// A dimension of 0 does not allocate.
    ///
    /// # Panics
    ///
    /// Panics if the buffer cannot be allocated. Use [`DVector::try_zeroed`] to handle that case.
    pub fn zeroed(dim: usize) -> Self {
        infallible(Self::try_zeroed(dim))
    }

    /// Creates an owned vector of dimension `dim` with every element set to 0.
    pub fn try_zeroed(dim: usize) -> Result<Self> {
        Buffer::zeroed(dim).map(Self::from_buffer)
    }

    /// Creates a vector with each element initialized to `elem`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// assert_eq!(DVector::splat(2, 7u8), [7, 7]);
    /// ```
    pub fn splat(dim: usize, elem: T) -> Self {
        Self::from_fn(dim, |_| elem)
    }

    /// Creates a vector where each element is initialized by invoking a closure with its index.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let v = DVector::from_fn(3, |i| i as u32 + 100);
    /// assert_eq!(v, [100, 101, 102]);
    /// ```
    pub fn from_fn<F>(dim: usize, f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        infallible(Buffer::from_fn(dim, f).map(Self::from_buffer))
    }

    /// Takes ownership of `vec` without copying.
    pub fn from_vec(vec: Vec<T>) -> Self {
        Self::from_buffer(Buffer::Owned(vec))
    }

    /// Copies the elements of `src` into a new buffer, converting each of them to `T`.
    ///
    /// `src` is left untouched.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let f = DVector::from_vec(vec![1.5f32, -2.5, 3.9]);
    /// let i = DVector::<i16>::cast_from(&f);
    /// assert_eq!(i, [1, -2, 3]);
    /// assert_eq!(f, [1.5, -2.5, 3.9]);
    /// ```
    pub fn cast_from<U>(src: &DVector<'_, U>) -> Self
    where
        U: Scalar,
        T: CastFrom<U>,
    {
        infallible(Self::try_cast_from(src))
    }

    /// Fallible version of [`DVector::cast_from`].
    pub fn try_cast_from<U>(src: &DVector<'_, U>) -> Result<Self>
    where
        U: Scalar,
        T: CastFrom<U>,
    {
        Buffer::copied(src.as_slice()).map(Self::from_buffer)
    }
}

impl<'a, T: Scalar> DVector<'a, T> {
    pub(crate) fn from_buffer(buf: Buffer<'a, T>) -> Self {
        Self { buf }
    }

    pub(crate) fn into_buffer(self) -> Buffer<'a, T> {
        self.buf
    }

    /// Creates a vector that views `storage` instead of owning its elements.
    ///
    /// The dimension is the length of `storage`. Writes through the vector are visible in
    /// `storage`, and nothing is released when the vector is dropped.
    pub fn view(storage: &'a mut [T]) -> Self {
        log::trace!("view: {} elements", storage.len());
        Self::from_buffer(Buffer::View(storage))
    }

    /// Converts `src` into a vector of scalar type `T`, reusing its buffer when possible.
    ///
    /// - If `U` is `T`, the buffer is handed over unchanged; views stay views.
    /// - If `U` has the same size as `T`, an owned buffer is reinterpreted as `T` and every element
    ///   is converted in place, without allocating.
    /// - Otherwise, a new buffer is allocated and the old one is released.
    ///
    /// Views are never reinterpreted; converting a view to a different type copies it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let v = DVector::from_vec(vec![1.25f32, 2.75]);
    /// let ptr = v.as_ptr() as *const u8;
    /// let v = DVector::<u32>::from_vector(v);
    /// assert_eq!(v, [1, 2]);
    /// assert_eq!(v.as_ptr() as *const u8, ptr);
    /// ```
    pub fn from_vector<U>(src: DVector<'a, U>) -> Self
    where
        U: Scalar,
        T: CastFrom<U>,
    {
        infallible(Self::try_from_vector(src))
    }

    /// Fallible version of [`DVector::from_vector`].
    pub fn try_from_vector<U>(src: DVector<'a, U>) -> Result<Self>
    where
        U: Scalar,
        T: CastFrom<U>,
    {
        Buffer::moved(src.into_buffer()).map(Self::from_buffer)
    }

    /// Copy-assigns the elements of `src` to `self`, converting them to `T`.
    ///
    /// If the dimensions are equal, the elements are written into the existing storage, which
    /// also works for views. Otherwise `self` gets a new, owned buffer of the dimension of `src`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let mut v = DVector::<f64>::zeroed(3);
    /// v.assign(&DVector::from_vec(vec![1i32, 2, 3, 4, 5]));
    /// assert_eq!(v.dim(), 5);
    /// assert_eq!(v, [1.0, 2.0, 3.0, 4.0, 5.0]);
    /// ```
    pub fn assign<U>(&mut self, src: &DVector<'_, U>)
    where
        U: Scalar,
        T: CastFrom<U>,
    {
        infallible(self.try_assign(src))
    }

    /// Fallible version of [`DVector::assign`].
    ///
    /// On error, `self` is left unchanged.
    pub fn try_assign<U>(&mut self, src: &DVector<'_, U>) -> Result<()>
    where
        U: Scalar,
        T: CastFrom<U>,
    {
        self.buf.assign(src.as_slice())
    }

    /// Move-assigns `src` to `self`, following the rules of [`DVector::from_vector`].
    ///
    /// The previous buffer of `self` is released only after the new one is in place.
    pub fn assign_from<U>(&mut self, src: DVector<'a, U>)
    where
        U: Scalar,
        T: CastFrom<U>,
    {
        infallible(self.try_assign_from(src))
    }

    /// Fallible version of [`DVector::assign_from`].
    ///
    /// On error, `self` is left unchanged and `src` is dropped.
    pub fn try_assign_from<U>(&mut self, src: DVector<'a, U>) -> Result<()>
    where
        U: Scalar,
        T: CastFrom<U>,
    {
        let fresh = Buffer::moved(src.into_buffer())?;
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

    /// Returns the elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    /// Returns the elements as a mutable slice.
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

    /// Detaches this vector from any borrowed storage, copying the elements of a view.
    pub fn into_owned(self) -> DVector<'static, T> {
        DVector::from_buffer(self.buf.into_owned())
    }

    /// Converts this vector into a [`Vec`], copying the elements of a view.
    pub fn into_vec(self) -> Vec<T> {
        self.buf.into_vec()
    }

    /// Copies the elements into a [`Vector`] with the compile-time dimension `N`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let v = DVector::from_vec(vec![1, 2, 3]);
    /// assert_eq!(v.to_fixed::<3>()?, vec3(1, 2, 3));
    /// assert!(v.to_fixed::<2>().is_err());
    /// # Ok::<(), VectorError>(())
    /// ```
    pub fn to_fixed<const N: usize>(&self) -> Result<Vector<'static, T, N>> {
        check_dim(N, self.dim())?;
        Buffer::copied(self.as_slice()).map(Vector::from_buffer)
    }

    /// Applies a closure to each element, returning a new, owned vector.
    pub fn map<U, F>(&self, mut f: F) -> DVector<'static, U>
    where
        U: Scalar,
        F: FnMut(T) -> U,
    {
        let src = self.as_slice();
        DVector::from_fn(src.len(), |i| f(src[i]))
    }

    /// Computes the dot product `sum(self[i] * cast(other[i]))`, accumulated in `T`.
    ///
    /// This is the same as `&self * &other`.
    pub fn try_dot<U>(&self, other: &DVector<'_, U>) -> Result<T>
    where
        U: Scalar,
        T: CastFrom<U>,
    {
        check_dim(self.dim(), other.dim())?;
        Ok(kernel::dot(self.as_slice(), other.as_slice()))
    }

    /// Computes the cross product of two 3-dimensional vectors.
    ///
    /// Fails with [`VectorError::DimensionMismatch`][crate::VectorError::DimensionMismatch] if
    /// either vector does not have exactly 3 elements.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numvec::*;
    /// let x = DVector::from_vec(vec![1, 0, 0]);
    /// let y = DVector::from_vec(vec![0, 1, 0]);
    /// assert_eq!(x.try_cross(&y)?, [0, 0, 1]);
    /// assert_eq!(y.try_cross(&x)?, [0, 0, -1]);
    /// # Ok::<(), VectorError>(())
    /// ```
    pub fn try_cross<U>(&self, other: &DVector<'_, U>) -> Result<DVector<'static, T>>
    where
        U: Scalar,
        T: CastFrom<U>,
    {
        check_dim(3, self.dim())?;
        check_dim(3, other.dim())?;
        let (a, b) = (self.as_slice(), other.as_slice());
        let cross = kernel::cross([a[0], a[1], a[2]], [b[0], b[1], b[2]]);
        Ok(DVector::from_vec(cross.to_vec()))
    }

    /// Returns the squared length of this vector.
    pub fn length2(&self) -> T {
        kernel::dot(self.as_slice(), self.as_slice())
    }

    /// Returns the length of this vector.
    pub fn length(&self) -> T
    where
        T: Sqrt,
    {
        self.length2().sqrt()
    }
}

impl<'a, T: Scalar> Elements for DVector<'a, T> {
    type Scalar = T;

    #[inline]
    fn as_slice(&self) -> &[T] {
        self.buf.as_slice()
    }

    #[inline]
    fn as_mut_slice(&mut self) -> &mut [T] {
        self.buf.as_mut_slice()
    }
}

/// Deep copy: the clone always owns its elements, even if `self` is a view.
impl<'a, T: Scalar> Clone for DVector<'a, T> {
    fn clone(&self) -> Self {
        Self::from_buffer(Buffer::Owned(self.as_slice().to_vec()))
    }
}

/// Creates an empty vector, which does not allocate.
impl<T: Scalar> Default for DVector<'static, T> {
    fn default() -> Self {
        Self::from_vec(Vec::new())
    }
}

impl<T: Scalar> From<Vec<T>> for DVector<'static, T> {
    #[inline]
    fn from(vec: Vec<T>) -> Self {
        Self::from_vec(vec)
    }
}

impl<'a, T: Scalar> From<DVector<'a, T>> for Vec<T> {
    #[inline]
    fn from(value: DVector<'a, T>) -> Self {
        value.into_vec()
    }
}

impl<'a, T: Scalar> AsRef<[T]> for DVector<'a, T> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<'a, T: Scalar> AsMut<[T]> for DVector<'a, T> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        self.as_mut_slice()
    }
}

impl<'a, T> fmt::Debug for DVector<'a, T>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::fmt_tuple(f, self.buf.as_slice(), |elem, f| fmt::Debug::fmt(elem, f))
    }
}

impl<'a, T> fmt::Display for DVector<'a, T>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        crate::fmt_tuple(f, self.buf.as_slice(), |elem, f| fmt::Display::fmt(elem, f))
    }
}
