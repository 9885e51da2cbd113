//! Numeric element traits.
//!
//! [`Vector`][crate::Vector] and [`Matrix`][crate::Matrix] are generic over their element type.
//! The traits in here describe what an element type has to support for a given operation, so that
//! the same code serves both [`f64`] (the default precision of this library) and [`f32`].

use std::ops::{Add, Div, Mul, Neg, Sub};

use crate::approx::{ApproxEq, DefaultTolerances};

/// Additive identity.
pub trait Zero {
    const ZERO: Self;
}

/// Multiplicative identity.
pub trait One {
    const ONE: Self;
}

/// Signed element types closed under the four arithmetic operations.
///
/// Implemented for every type that meets the bounds; there is nothing to implement by hand.
pub trait Number:
    Zero
    + One
    + Neg<Output = Self>
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + PartialEq
    + Copy
{
}

impl<T> Number for T where
    T: Zero
        + One
        + Neg<Output = T>
        + Add<Output = T>
        + Sub<Output = T>
        + Mul<Output = T>
        + Div<Output = T>
        + PartialEq
        + Copy
{
}

/// Square root, used by vector lengths and normalization.
pub trait Sqrt {
    fn sqrt(self) -> Self;
}

/// Trigonometry on angles in radians.
pub trait Trig: Sized {
    /// Returns `(sin(self), cos(self))`.
    fn sin_cos(self) -> (Self, Self);
    /// Inverse cosine, in `[0, π]` for inputs in `[-1, 1]`.
    fn acos(self) -> Self;
}

/// Ordering helpers shared by floats and integers.
///
/// Floats follow [`f64::min`]/[`f64::max`], so a `NaN` operand yields the other one.
pub trait MinMax: Sized {
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;

    /// Restricts `self` to `[lo, hi]`.
    fn clamp(self, lo: Self, hi: Self) -> Self {
        self.max(lo).min(hi)
    }
}

/// Floating-point element types.
///
/// This bundles everything the fallible operations (normalization, inversion, rotation
/// generators) need: arithmetic, square roots, trigonometry, and the library tolerance
/// [`DefaultTolerances::DEFAULT_ABS_TOLERANCE`] that decides when a magnitude or determinant
/// counts as zero.
pub trait Float:
    Number
    + Sqrt
    + Trig
    + MinMax
    + PartialOrd
    + ApproxEq<Tolerance = Self>
    + DefaultTolerances
    + std::fmt::Display
{
    fn abs(self) -> Self;

    /// Returns `true` if `self` is within the library tolerance of zero.
    #[inline]
    fn is_near_zero(self) -> bool {
        self.abs() <= Self::DEFAULT_ABS_TOLERANCE
    }
}

/// `Zero`, `One` and `MinMax` for a primitive, given its literals and its `min`/`max` functions.
macro_rules! primitive {
    ($ty:ty, $zero:literal, $one:literal, $min:path, $max:path) => {
        impl Zero for $ty {
            const ZERO: Self = $zero;
        }

        impl One for $ty {
            const ONE: Self = $one;
        }

        impl MinMax for $ty {
            #[inline]
            fn min(self, other: Self) -> Self {
                $min(self, other)
            }

            #[inline]
            fn max(self, other: Self) -> Self {
                $max(self, other)
            }
        }
    };
}

macro_rules! integers {
    ($($ty:ty),+) => {
        $( primitive!($ty, 0, 1, Ord::min, Ord::max); )+
    };
}

integers!(u8, u16, u32, u64, u128, i8, i16, i32, i64, i128);

macro_rules! floats {
    ($($ty:ident),+) => {
        $(
            primitive!($ty, 0.0, 1.0, $ty::min, $ty::max);

            impl Sqrt for $ty {
                #[inline]
                fn sqrt(self) -> Self {
                    $ty::sqrt(self)
                }
            }

            impl Trig for $ty {
                #[inline]
                fn sin_cos(self) -> (Self, Self) {
                    $ty::sin_cos(self)
                }

                #[inline]
                fn acos(self) -> Self {
                    $ty::acos(self)
                }
            }

            impl Float for $ty {
                #[inline]
                fn abs(self) -> Self {
                    $ty::abs(self)
                }
            }
        )+
    };
}

floats!(f32, f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn near_zero() {
        assert!(0.0f64.is_near_zero());
        assert!(1e-13f64.is_near_zero());
        assert!((-1e-13f64).is_near_zero());
        assert!(!1e-11f64.is_near_zero());

        assert!(5e-7f32.is_near_zero());
        assert!(!1e-5f32.is_near_zero());
    }

    #[test]
    fn clamp() {
        assert_eq!(MinMax::clamp(5, 0, 3), 3);
        assert_eq!(MinMax::clamp(-1.5f64, -1.0, 1.0), -1.0);
        assert_eq!(MinMax::clamp(0.5f32, -1.0, 1.0), 0.5);
    }
}
