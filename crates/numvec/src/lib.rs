//! Generic numeric vectors with explicit buffer ownership.
//!
//! # Motivation
//!
//! Numeric code frequently has to operate on element buffers it does not own: memory-mapped
//! files, buffers shared with C libraries, or a sub-range of some larger allocation. It also has
//! to move data between scalar types (eg. `f32` sensor readings into `i32` fixed-point math)
//! without paying for an allocation every time.
//!
//! This library provides two vector types that make both of these explicit:
//!
//! - [`DVector`], whose dimension is chosen at runtime.
//! - [`Vector`], whose dimension is a const generic parameter.
//!
//! Both of them either *own* their buffer or *view* storage supplied by the caller. A view is
//! never freed or reallocated by the vector, and ownership is tracked by the type system through
//! the vector's lifetime parameter rather than a runtime flag.
//!
//! # Goals & Non-Goals
//!
//! - Support the built-in integer types up to 64 bits, [`f32`] and [`f64`] as element types.
//!   Conversions between them follow the semantics of the `as` operator (see [`CastFrom`]).
//! - Moving a vector into another scalar type of the same size reuses the existing allocation and
//!   converts the elements in place. Only a change in element size requires a new buffer.
//! - Report dimension mismatches, failed allocations and out-of-range accesses as
//!   [`VectorError`]s instead of aborting. Infallible convenience wrappers panic with the same
//!   message.
//! - Don't support matrices, SIMD, or arbitrary-precision arithmetic.
//!
//! # Logging
//!
//! Buffer transfers (copies, hand-overs, in-place reinterpretation and releases) are logged at
//! *trace* level through the [`log`] crate. Applications and tests can install a logger with
//! [`init_logger!`].

use std::fmt;

use log::LevelFilter;

mod buffer;
mod dynamic;
mod elements;
mod error;
mod fixed;
mod kernel;
mod traits;

pub use dynamic::{DVec, DVector};
pub use elements::Elements;
pub use error::{Result, VectorError};
pub use fixed::*;
pub use traits::*;

/// Writes `elems` as a parenthesized, comma-separated tuple, honoring `{:#?}`-style alternate
/// formatting.
pub(crate) fn fmt_tuple<T, F>(f: &mut fmt::Formatter<'_>, elems: &[T], fmt_elem: F) -> fmt::Result
where
    F: Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
{
    struct Via<'a, T, F>(&'a T, &'a F);
    impl<T, F> fmt::Debug for Via<'_, T, F>
    where
        F: Fn(&T, &mut fmt::Formatter<'_>) -> fmt::Result,
    {
        fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            (self.1)(self.0, f)
        }
    }

    let mut tup = f.debug_tuple("");
    for elem in elems {
        tup.field(&Via(elem, &fmt_elem));
    }
    tup.finish()
}

/// macro-use only, not part of public API.
#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    let log_level = if cfg!(debug_assertions) {
        LevelFilter::Trace
    } else {
        LevelFilter::Debug
    };
    env_logger::Builder::new()
        .filter(Some(calling_crate), log_level)
        .filter(Some(env!("CARGO_CRATE_NAME")), log_level)
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// If `cfg!(debug_assertions)` is enabled, the calling crate and this library will log at *trace*
/// level. Otherwise, they will log at *debug* level. The `RUST_LOG` environment variable can
/// override both.
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}
