//! Approximate equality.
//!
//! Two vectors or matrices are *epsilon-equal* if every pair of corresponding elements satisfies
//! `|a - b| <= eps`, where `eps` is [`EPSILON`][crate::EPSILON] for [`f64`] elements and
//! [`EPSILON_F32`][crate::EPSILON_F32] for [`f32`] elements. [`ApproxEq::approx_eq`] is that
//! predicate.
//!
//! Tests often need a different tolerance than the library one. [`assert_approx_eq!`] and
//! [`assert_approx_ne!`] accept per-assertion overrides for absolute, relative and ULPs
//! comparisons.
//!
//! [`assert_approx_eq!`]: crate::assert_approx_eq
//! [`assert_approx_ne!`]: crate::assert_approx_ne

mod impls;

use std::{fmt, panic::Location};

/// Values that can be compared with a tolerance.
///
/// Compound values (arrays, [`Vector`][crate::Vector], [`Matrix`][crate::Matrix]) compare equal
/// when every element does.
///
/// Background on the three comparison modes:
/// <https://randomascii.wordpress.com/2012/02/25/comparing-floating-point-numbers-2012-edition/>
pub trait ApproxEq<Rhs: ?Sized = Self> {
    /// The scalar type the tolerances are expressed in ([`f32`] or [`f64`]).
    type Tolerance: DefaultTolerances + Copy;

    /// Returns `true` if `|self - other| <= abs_tolerance`.
    fn abs_diff_eq(&self, other: &Rhs, abs_tolerance: Self::Tolerance) -> bool;

    /// Returns `true` if `|self - other| <= max(|self|, |other|) * rel_tolerance`.
    fn rel_diff_eq(&self, other: &Rhs, rel_tolerance: Self::Tolerance) -> bool;

    /// Returns `true` if at most `ulps_tolerance` representable values lie between `self` and
    /// `other`.
    ///
    /// `NaN` never compares equal. Zeroes of either sign compare equal; all other values of
    /// opposite sign do not.
    fn ulps_diff_eq(&self, other: &Rhs, ulps_tolerance: u32) -> bool;

    /// Epsilon equality: an absolute comparison against the library tolerance.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numkit::{*, approx::ApproxEq};
    /// let a = vec3(1.0, 2.0, 3.0);
    /// assert!(a.approx_eq(&vec3(1.0, 2.0, 3.0 + 1e-13)));
    /// assert!(!a.approx_eq(&vec3(1.0, 2.0, 3.0 + 1e-9)));
    /// ```
    #[inline]
    fn approx_eq(&self, other: &Rhs) -> bool {
        self.abs_diff_eq(other, Self::Tolerance::DEFAULT_ABS_TOLERANCE)
    }
}

/// Per-precision default tolerances.
pub trait DefaultTolerances {
    /// The library epsilon.
    ///
    /// Used by [`ApproxEq::approx_eq`], by the singularity check of matrix inversion, and by the
    /// zero-length checks of the vector operations.
    const DEFAULT_ABS_TOLERANCE: Self;
    /// Relative tolerance used by the assertion macros when no override is given.
    const DEFAULT_REL_TOLERANCE: Self;
    /// ULPs tolerance used by [`Asserter::ulps`] callers that want a sensible starting point.
    const DEFAULT_ULPS_TOLERANCE: u32;
}

impl DefaultTolerances for f32 {
    const DEFAULT_ABS_TOLERANCE: Self = crate::EPSILON_F32;
    const DEFAULT_REL_TOLERANCE: Self = crate::EPSILON_F32;
    const DEFAULT_ULPS_TOLERANCE: u32 = 4;
}

impl DefaultTolerances for f64 {
    const DEFAULT_ABS_TOLERANCE: Self = crate::EPSILON;
    const DEFAULT_REL_TOLERANCE: Self = crate::EPSILON;
    const DEFAULT_ULPS_TOLERANCE: u32 = 4;
}

/// The comparisons requested for one assertion.
///
/// The values count as equal if any requested comparison accepts them.
#[derive(Clone, Copy)]
struct Tolerances<T> {
    abs: Option<T>,
    rel: Option<T>,
    ulps: Option<u32>,
}

impl<T: DefaultTolerances + Copy> Tolerances<T> {
    const UNSET: Self = Self {
        abs: None,
        rel: None,
        ulps: None,
    };

    /// Falls back to the library absolute and relative tolerances if nothing was requested.
    fn or_defaults(self) -> Self {
        match self {
            Self {
                abs: None,
                rel: None,
                ulps: None,
            } => Self {
                abs: Some(T::DEFAULT_ABS_TOLERANCE),
                rel: Some(T::DEFAULT_REL_TOLERANCE),
                ulps: None,
            },
            requested => requested,
        }
    }

    fn accept<L>(&self, left: &L, right: &L) -> bool
    where
        L: ApproxEq<Tolerance = T> + ?Sized,
    {
        self.abs.map_or(false, |abs| left.abs_diff_eq(right, abs))
            || self.rel.map_or(false, |rel| left.rel_diff_eq(right, rel))
            || self.ulps.map_or(false, |ulps| left.ulps_diff_eq(right, ulps))
    }
}

/// Pending assertion created by [`assert_approx_eq!`][crate::assert_approx_eq] and
/// [`assert_approx_ne!`][crate::assert_approx_ne].
///
/// The comparison runs when the value is dropped, at the end of the statement. Before that, the
/// builder methods select how the operands are compared:
///
/// - [`Asserter::abs`]: absolute difference ([`ApproxEq::abs_diff_eq`]);
/// - [`Asserter::rel`]: difference relative to the larger operand ([`ApproxEq::rel_diff_eq`]);
/// - [`Asserter::ulps`]: distance in representable values ([`ApproxEq::ulps_diff_eq`]).
///
/// Several methods can be combined. The operands are then equal if any of the comparisons says
/// so. Without any method call, an absolute comparison with [`DEFAULT_ABS_TOLERANCE`] and a
/// relative one with [`DEFAULT_REL_TOLERANCE`] are used.
///
/// [`DEFAULT_ABS_TOLERANCE`]: DefaultTolerances::DEFAULT_ABS_TOLERANCE
/// [`DEFAULT_REL_TOLERANCE`]: DefaultTolerances::DEFAULT_REL_TOLERANCE
pub struct Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    left: &'a T,
    right: &'a T,
    expect_equal: bool,
    caller: &'static Location<'static>,
    message: Option<fmt::Arguments<'a>>,
    tolerances: Tolerances<T::Tolerance>,
}

impl<'a, T> Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    #[doc(hidden)]
    #[track_caller]
    pub fn eq(left: &'a T, right: &'a T, message: Option<fmt::Arguments<'a>>) -> Self {
        Self::new(left, right, true, message)
    }

    #[doc(hidden)]
    #[track_caller]
    pub fn ne(left: &'a T, right: &'a T, message: Option<fmt::Arguments<'a>>) -> Self {
        Self::new(left, right, false, message)
    }

    #[track_caller]
    fn new(
        left: &'a T,
        right: &'a T,
        expect_equal: bool,
        message: Option<fmt::Arguments<'a>>,
    ) -> Self {
        Self {
            left,
            right,
            expect_equal,
            caller: Location::caller(),
            message,
            tolerances: Tolerances::UNSET,
        }
    }

    /// Accepts the operands if their absolute difference is at most `abs`.
    ///
    /// Suited to values near zero, or of opposite sign.
    pub fn abs(&mut self, abs: T::Tolerance) -> &mut Self {
        self.tolerances.abs = Some(abs);
        self
    }

    /// Accepts the operands if their difference is at most `rel` times the larger magnitude.
    ///
    /// Suited to results whose magnitude grows with the inputs, such as determinants of products.
    pub fn rel(&mut self, rel: T::Tolerance) -> &mut Self {
        self.tolerances.rel = Some(rel);
        self
    }

    /// Accepts the operands if at most `ulps` representable values lie between them.
    pub fn ulps(&mut self, ulps: u32) -> &mut Self {
        self.tolerances.ulps = Some(ulps);
        self
    }
}

impl<'a, T> Drop for Asserter<'a, T>
where
    T: ApproxEq + fmt::Debug,
{
    // `#[track_caller]` does not apply to `drop`, hence `caller`.
    fn drop(&mut self) {
        let equal = self.tolerances.or_defaults().accept(self.left, self.right);
        if equal != self.expect_equal {
            fail(
                self.left,
                self.right,
                self.expect_equal,
                self.caller,
                self.message,
            );
        }
    }
}

#[cold]
fn fail(
    left: &dyn fmt::Debug,
    right: &dyn fmt::Debug,
    expect_equal: bool,
    caller: &Location<'_>,
    message: Option<fmt::Arguments<'_>>,
) -> ! {
    let op = if expect_equal { "==" } else { "!=" };
    let message = message.map(|m| format!(": {m}")).unwrap_or_default();
    panic!("assertion `left {op} right` failed at {caller}{message}\n  left: {left:?}\n right: {right:?}")
}

/// Asserts that two values are approximately equal, using [`ApproxEq`].
///
/// Works like [`assert_eq!`], but evaluates to an [`Asserter`] whose methods override the
/// tolerance. An optional trailing format string is included in the panic message.
///
/// # Examples
///
/// ```
/// # use numkit::*;
/// let sum = (0..10).fold(0.0, |acc, _| acc + 0.1);
/// assert_approx_eq!(sum, 1.0);
/// assert_approx_eq!(100.0, 99.0).abs(1.0);
/// assert_approx_eq!(100.0, 99.0).rel(0.01);
/// assert_approx_eq!(1.0, 1.0 + f64::EPSILON).ulps(1);
/// ```
#[macro_export]
macro_rules! assert_approx_eq {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::eq(&$lhs, &$rhs, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::eq(&$lhs, &$rhs, ::core::option::Option::Some(::core::format_args!($($arg)+)))
    };
}

/// Asserts that two values are *not* approximately equal, using [`ApproxEq`].
///
/// See [`assert_approx_eq!`].
///
/// # Examples
///
/// ```
/// # use numkit::*;
/// assert_approx_ne!(100.0, 99.0).abs(0.5);
/// assert_approx_ne!(vec2(0.0, 1.0), vec2(0.0, 1.0 + 1e-9));
/// ```
#[macro_export]
macro_rules! assert_approx_ne {
    ($lhs:expr, $rhs:expr $(,)?) => {
        $crate::approx::Asserter::ne(&$lhs, &$rhs, ::core::option::Option::None)
    };
    ($lhs:expr, $rhs:expr, $($arg:tt)+) => {
        $crate::approx::Asserter::ne(&$lhs, &$rhs, ::core::option::Option::Some(::core::format_args!($($arg)+)))
    };
}

#[cfg(test)]
mod tests {
    use super::ApproxEq;

    #[test]
    #[should_panic(expected = "assertion `left != right` failed")]
    fn ne_panics_on_equal_values() {
        assert_approx_ne!(1.0, 1.0);
    }

    #[test]
    #[should_panic(expected = "assertion `left == right` failed")]
    fn eq_panics_on_distinct_values() {
        assert_approx_eq!(1.0, 2.0);
    }

    #[test]
    #[should_panic(expected = "determinant mismatch")]
    fn message_is_reported() {
        assert_approx_eq!(1.0, 2.0, "determinant mismatch");
    }

    #[test]
    fn library_epsilon() {
        assert!(1.0f64.approx_eq(&(1.0 + 5e-13)));
        assert!(!1.0f64.approx_eq(&(1.0 + 1e-11)));
        assert!(1.0f32.approx_eq(&(1.0 + 1e-7)));
        assert!(!1.0f32.approx_eq(&(1.0 + 1e-5)));
    }

    #[test]
    fn any_requested_comparison_suffices() {
        // The absolute check fails, the relative one passes.
        assert_approx_eq!(1000.0, 1000.5).abs(0.1).rel(1e-3);
        // Both fail.
        assert_approx_ne!(1000.0, 1001.5).abs(0.1).rel(1e-3);
    }

    #[test]
    fn relative() {
        assert_approx_eq!(1.0, 1.001).rel(0.01);
        assert_approx_eq!(1.0, -1.0).rel(2.0);
        assert_approx_eq!(0.0, 0.00001).rel(1.0);
    }

    #[test]
    fn signs() {
        assert_approx_ne!(1.0, -1.0);
        assert_approx_ne!(1.0, -1.0).abs(1.0);
        assert_approx_eq!(1.0, -1.0).abs(2.0);
        assert_approx_eq!(-1.0, -1.0).abs(0.0);
        assert_approx_eq!(-1.0, -1.0).ulps(0);
        assert_approx_eq!(0.0, -0.0).ulps(0);
    }

    #[test]
    fn nan() {
        assert_approx_ne!(f64::NAN, f64::NAN).abs(1.0);
        assert_approx_ne!(f64::NAN, f64::NAN).rel(1.0);
        assert_approx_ne!(f64::NAN, f64::NAN).ulps(100);
        assert_approx_ne!(f64::NAN, 0.0).abs(1.0);
        assert!(!f64::NAN.approx_eq(&f64::NAN));
    }

    #[test]
    fn infinities() {
        assert_approx_eq!(f64::INFINITY, f64::INFINITY).abs(0.0);
        assert_approx_ne!(f64::INFINITY, f64::MAX).abs(10000.0);
        assert_approx_ne!(f64::INFINITY, f64::NEG_INFINITY).rel(10000.0);
        assert_approx_eq!(f64::MAX, f64::INFINITY).ulps(1);
    }
}
