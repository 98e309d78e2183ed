//! Vector backing storage and the rules for handing it from one vector to another.
//!
//! Every constructor and assignment of [`DVector`][crate::DVector] and [`Vector`][crate::Vector]
//! funnels through [`Buffer`]. Ownership is encoded in the variant: an [`Buffer::Owned`] buffer is
//! released when it is dropped, a [`Buffer::View`] borrows caller memory and is never released by
//! the vector. Since ownership of a `Vec` can only ever be moved, two vectors can never both
//! believe they own the same block.
//!
//! | Operation | Same scalar type | Same storage width | Different storage width |
//! |-----------|------------------|--------------------|-------------------------|
//! | copy      | new buffer       | new buffer, cast   | new buffer, cast        |
//! | move      | hand over        | reinterpret, cast in place | new buffer, cast |
//!
//! Moving a view to a different scalar type always produces an owned buffer: the caller's memory is
//! never rewritten as a type it was not declared as.
//!
//! Assignments between different dimensions allocate and fill the new buffer first and only then
//! swap it in, so a failed allocation leaves the target untouched.

use std::{
    any::{type_name, TypeId},
    mem,
};

use bytemuck::allocation::try_cast_vec;

#[cfg(test)]
use std::cell::Cell;

use crate::{
    error::{Result, VectorError},
    CastFrom, Scalar,
};

pub(crate) enum Buffer<'a, T> {
    Owned(Vec<T>),
    View(&'a mut [T]),
}

/// Reserves space for exactly `dim` elements, reporting allocator failure instead of aborting.
///
/// A `dim` of 0 does not allocate.
pub(crate) fn try_alloc<T>(dim: usize) -> Result<Vec<T>> {
    let error = || VectorError::Allocation {
        requested: dim.saturating_mul(mem::size_of::<T>()),
    };

    #[cfg(test)]
    if dim > 0 && FAIL_ALLOCATIONS.with(Cell::get) {
        return Err(error());
    }

    let mut vec = Vec::new();
    vec.try_reserve_exact(dim).map_err(|_| error())?;
    Ok(vec)
}

#[cfg(test)]
thread_local! {
    static FAIL_ALLOCATIONS: Cell<bool> = Cell::new(false);
}

/// Runs `f` while every non-empty buffer allocation on this thread fails.
#[cfg(test)]
pub(crate) fn with_failing_allocations<R>(f: impl FnOnce() -> R) -> R {
    FAIL_ALLOCATIONS.with(|fail| fail.set(true));
    let result = f();
    FAIL_ALLOCATIONS.with(|fail| fail.set(false));
    result
}

fn same_type<T: 'static, U: 'static>() -> bool {
    TypeId::of::<T>() == TypeId::of::<U>()
}

impl<'a, T: Scalar> Buffer<'a, T> {
    /// Allocates an owned buffer and initializes slot `i` with `f(i)`.
    pub(crate) fn from_fn<F>(dim: usize, f: F) -> Result<Self>
    where
        F: FnMut(usize) -> T,
    {
        let mut vec = try_alloc(dim)?;
        vec.extend((0..dim).map(f));
        Ok(Self::Owned(vec))
    }

    pub(crate) fn zeroed(dim: usize) -> Result<Self> {
        Self::from_fn(dim, |_| T::ZERO)
    }

    /// Copy: the source is left untouched, the result always owns a fresh buffer.
    pub(crate) fn copied<U>(src: &[U]) -> Result<Self>
    where
        U: Scalar,
        T: CastFrom<U>,
    {
        log::trace!(
            "copy: {} x {} -> new buffer of {}",
            src.len(),
            type_name::<U>(),
            type_name::<T>()
        );
        Self::from_fn(src.len(), |i| T::cast_from(src[i]))
    }

    /// Move: consumes `src`, reusing its storage whenever that is sound.
    pub(crate) fn moved<U>(src: Buffer<'a, U>) -> Result<Self>
    where
        U: Scalar,
        T: CastFrom<U>,
    {
        match src {
            Buffer::Owned(vec) if mem::size_of::<T>() == mem::size_of::<U>() => {
                match try_cast_vec::<U, T>(vec) {
                    Ok(mut vec) => {
                        if same_type::<T, U>() {
                            log::trace!("move: handing over buffer of {} elements", vec.len());
                        } else {
                            log::trace!(
                                "move: reinterpreting {} x {} as {}",
                                vec.len(),
                                type_name::<U>(),
                                type_name::<T>()
                            );
                            // Every slot still holds the bits of a `U`; walk them and store the
                            // converted value in place.
                            for slot in &mut vec {
                                let raw: U = bytemuck::cast(*slot);
                                *slot = T::cast_from(raw);
                            }
                        }
                        Ok(Self::Owned(vec))
                    }
                    // Equal width but different alignment.
                    Err((_, vec)) => Self::copied(&vec),
                }
            }
            Buffer::Owned(vec) => Self::copied(&vec),
            Buffer::View(slice) if same_type::<T, U>() => {
                log::trace!("move: handing over view of {} elements", slice.len());
                Ok(Self::View(bytemuck::cast_slice_mut(slice)))
            }
            Buffer::View(slice) => Self::copied(slice),
        }
    }

    /// Copy-assignment.
    ///
    /// If the dimensions already match, the elements are written into the existing storage (which
    /// may be a view). Otherwise a new buffer is allocated and filled before the old one is dropped.
    pub(crate) fn assign<U>(&mut self, src: &[U]) -> Result<()>
    where
        U: Scalar,
        T: CastFrom<U>,
    {
        let dst = self.as_mut_slice();
        if dst.len() == src.len() {
            log::trace!("assign: reusing buffer of {} elements", dst.len());
            for (dst, &src) in dst.iter_mut().zip(src) {
                *dst = T::cast_from(src);
            }
        } else {
            log::trace!("assign: resizing {} -> {} elements", dst.len(), src.len());
            let fresh = Self::copied(src)?;
            self.replace(fresh);
        }
        Ok(())
    }

    /// Swaps in `fresh` and releases the previous buffer (if it was owned).
    pub(crate) fn replace(&mut self, fresh: Self) {
        let old = mem::replace(self, fresh);
        if old.is_owned() {
            log::trace!("release: {} elements", old.len());
        }
    }

    pub(crate) fn into_owned(self) -> Buffer<'static, T> {
        match self {
            Buffer::Owned(vec) => Buffer::Owned(vec),
            Buffer::View(slice) => Buffer::Owned(slice.to_vec()),
        }
    }

    pub(crate) fn into_vec(self) -> Vec<T> {
        match self {
            Buffer::Owned(vec) => vec,
            Buffer::View(slice) => slice.to_vec(),
        }
    }
}

impl<'a, T> Buffer<'a, T> {
    #[inline]
    pub(crate) fn is_owned(&self) -> bool {
        matches!(self, Buffer::Owned(_))
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.as_slice().len()
    }

    #[inline]
    pub(crate) fn as_slice(&self) -> &[T] {
        match self {
            Buffer::Owned(vec) => vec,
            Buffer::View(slice) => slice,
        }
    }

    #[inline]
    pub(crate) fn as_mut_slice(&mut self) -> &mut [T] {
        match self {
            Buffer::Owned(vec) => vec,
            Buffer::View(slice) => slice,
        }
    }
}
