//! "Expected / Got" formatting for test failures.

use std::fmt::{self, Display, Write};

use itertools::Itertools;

use crate::{Matrix, Vector};

/// Number of fractional digits printed for every element.
pub const PRECISION: usize = 6;

/// Types that can describe a mismatch between an expected and an actual value.
///
/// The produced string has two labeled blocks, `Expected:` and `Got:`, each listing the entries in
/// row-major layout with [`PRECISION`] fractional digits.
///
/// # Examples
///
/// ```
/// # use numkit::*;
/// let expected = Mat2d::from_rows([[1.0, 2.0], [3.0, 4.0]]);
/// let got = Mat2d::from_rows([[1.0, 2.0], [3.0, 4.5]]);
/// assert_eq!(
///     DebugDiff::debug_diff(&expected, &got),
///     "Expected:\n  [1.000000, 2.000000]\n  [3.000000, 4.000000]\n\
///      Got:\n  [1.000000, 2.000000]\n  [3.000000, 4.500000]\n",
/// );
/// ```
pub trait DebugDiff {
    /// Writes the entries of `self`, one row per line.
    fn write_rows(&self, out: &mut String) -> fmt::Result;

    /// Formats `expected` and `got` as two labeled blocks.
    fn debug_diff(expected: &Self, got: &Self) -> String
    where
        Self: Sized,
    {
        let mut out = String::new();
        // Writing into a `String` cannot fail.
        let _ = write_block(&mut out, "Expected", expected)
            .and_then(|()| write_block(&mut out, "Got", got));
        out
    }
}

/// Formats `expected` and `got` via [`DebugDiff::debug_diff`].
pub fn debug_diff<T: DebugDiff>(expected: &T, got: &T) -> String {
    T::debug_diff(expected, got)
}

fn write_block<T: DebugDiff>(out: &mut String, label: &str, value: &T) -> fmt::Result {
    writeln!(out, "{label}:")?;
    value.write_rows(out)
}

fn write_row<T: Display>(out: &mut String, row: &[T]) -> fmt::Result {
    writeln!(
        out,
        "  [{}]",
        row.iter()
            .format_with(", ", |elem, f| f(&format_args!("{:.*}", PRECISION, elem)))
    )
}

macro_rules! scalar_debug_diff {
    ($($t:ty),+) => {
        $(
            impl DebugDiff for $t {
                fn write_rows(&self, out: &mut String) -> fmt::Result {
                    writeln!(out, "  {:.*}", PRECISION, self)
                }
            }
        )+
    };
}
scalar_debug_diff!(f32, f64);

impl<T: Display, const N: usize> DebugDiff for Vector<T, N> {
    fn write_rows(&self, out: &mut String) -> fmt::Result {
        write_row(out, self.as_slice())
    }
}

impl<T: Display, const R: usize, const C: usize> DebugDiff for Matrix<T, R, C> {
    fn write_rows(&self, out: &mut String) -> fmt::Result {
        self.as_rows()
            .iter()
            .try_for_each(|row| write_row(out, row))
    }
}
