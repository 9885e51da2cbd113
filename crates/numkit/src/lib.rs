//! Fixed-size linear algebra and allocator-aware containers.
//!
//! # Linear Algebra
//!
//! [`Vector`] and [`Matrix`] are small, `Copy`, stack-allocated value types with their dimensions
//! in const generic parameters. The library targets 2-, 3- and 4-element vectors and matrices with
//! 2 to 4 rows and columns, with [`f64`] as the default element type ([`Vec3d`], [`Mat4d`], ...)
//! and [`f32`] aliases for 32-bit paths ([`Vec3f`], [`Mat4f`], ...).
//!
//! - Matrices are stored row-major and unpadded. Products are checked at compile time: a
//!   [`Mat2x3d`] can only be multiplied by a matrix with 3 rows.
//! - Determinants and inverses are provided in closed form for 2x2, 3x3 and 4x4 matrices.
//! - The [`transform`] generators build scale, shear, rotation and translation matrices.
//! - Comparisons use an absolute tolerance of [`EPSILON`] (or [`EPSILON_F32`]) per element, see
//!   [`approx`].
//!
//! ```
//! # use numkit::*;
//! let a = Mat3d::from_rows([
//!     [1.0, 2.0, 3.0],
//!     [0.0, 1.0, 4.0],
//!     [5.0, 6.0, 0.0],
//! ]);
//! let inv = a.inverse()?;
//! assert_approx_eq!(a * inv, Mat3d::IDENTITY);
//! # Ok::<_, Error>(())
//! ```
//!
//! # Containers
//!
//! [`DArray`] is a growable array that obtains its memory from a borrowed [`Allocator`], with an
//! optional per-element destructor. [`Stack`] is layered on top of it.
//!
//! # Errors
//!
//! Every fallible operation returns [`Result`], failing with one of the [`Error`] variants. The
//! [`ffi`] module exposes the same operations to C, reporting the [`Status`] code instead.

pub mod alloc;
pub mod approx;
pub mod darray;
mod diff;
pub mod ffi;
mod matrix;
pub mod stack;
mod status;
pub mod transform;
mod traits;
mod vector;

use log::LevelFilter;

pub use alloc::{Allocator, FnAllocator, System};
pub use darray::DArray;
pub use diff::{debug_diff, DebugDiff};
pub use matrix::*;
pub use stack::Stack;
pub use status::{Error, Result, Status};
pub use traits::*;
pub use vector::*;

/// Absolute tolerance for comparing [`f64`] values.
///
/// Two values are considered equal if they differ by at most this much. A determinant or vector
/// length whose magnitude does not exceed it counts as zero.
pub const EPSILON: f64 = 1e-12;

/// Absolute tolerance for comparing [`f32`] values.
pub const EPSILON_F32: f32 = 1e-6;

/// Default filter for this library's own records.
///
/// `info` keeps the per-operation `trace!`/`debug!` records of [`DArray`] and matrix inversion
/// quiet unless they are asked for.
const LIBRARY_LOG_LEVEL: LevelFilter = LevelFilter::Info;

#[doc(hidden)]
pub fn init_logger(calling_crate: &'static str) {
    env_logger::Builder::new()
        .filter_level(LevelFilter::Warn)
        .filter_module(calling_crate, LevelFilter::Debug)
        .filter_module(env!("CARGO_CRATE_NAME"), LIBRARY_LOG_LEVEL)
        .format_timestamp_millis()
        .parse_default_env()
        .try_init()
        .ok();
}

/// Initializes logging to *stderr*.
///
/// The calling crate logs at *debug* level, `numkit` at *info* and everything else at *warn*.
/// `RUST_LOG` overrides this, so `RUST_LOG=numkit=trace` shows every capacity change of a
/// [`DArray`].
///
/// If a global logger is already registered, this macro will do nothing.
#[macro_export]
macro_rules! init_logger {
    () => {
        $crate::init_logger(env!("CARGO_CRATE_NAME"))
    };
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_logger_is_idempotent() {
        init_logger!();
        init_logger!();
        log::info!("logger initialized twice");
    }
}
