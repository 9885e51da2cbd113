use super::ApproxEq;

/// Shared shape of the three float comparisons: non-finite operands only match themselves.
macro_rules! impl_float {
    ($($float:ty),+) => {
        $(
            impl ApproxEq for $float {
                type Tolerance = $float;

                fn abs_diff_eq(&self, other: &$float, abs_tolerance: $float) -> bool {
                    match (self.is_finite(), other.is_finite()) {
                        (true, true) => (self - other).abs() <= abs_tolerance,
                        // `inf` matches `inf`, `NaN` matches nothing.
                        _ => self == other,
                    }
                }

                fn rel_diff_eq(&self, other: &$float, rel_tolerance: $float) -> bool {
                    match (self.is_finite(), other.is_finite()) {
                        (true, true) => {
                            let scale = self.abs().max(other.abs());
                            (self - other).abs() <= scale * rel_tolerance
                        }
                        _ => self == other,
                    }
                }

                fn ulps_diff_eq(&self, other: &$float, ulps_tolerance: u32) -> bool {
                    if self.is_nan() || other.is_nan() {
                        false
                    } else if self.is_sign_negative() != other.is_sign_negative() {
                        // Only the two zeroes straddle the sign bit and still compare equal.
                        self == other
                    } else {
                        self.to_bits().abs_diff(other.to_bits()) <= ulps_tolerance.into()
                    }
                }
            }
        )+
    };
}

impl_float!(f32, f64);

impl<T, U> ApproxEq<U> for &T
where
    T: ApproxEq<U> + ?Sized,
    U: ?Sized,
{
    type Tolerance = T::Tolerance;

    #[inline]
    fn abs_diff_eq(&self, other: &U, abs_tolerance: Self::Tolerance) -> bool {
        (**self).abs_diff_eq(other, abs_tolerance)
    }

    #[inline]
    fn rel_diff_eq(&self, other: &U, rel_tolerance: Self::Tolerance) -> bool {
        (**self).rel_diff_eq(other, rel_tolerance)
    }

    #[inline]
    fn ulps_diff_eq(&self, other: &U, ulps_tolerance: u32) -> bool {
        (**self).ulps_diff_eq(other, ulps_tolerance)
    }
}

/// `true` if both slices have the same length and `pred` holds for every element pair.
fn elementwise<T, U>(lhs: &[T], rhs: &[U], pred: impl FnMut((&T, &U)) -> bool) -> bool {
    lhs.len() == rhs.len() && lhs.iter().zip(rhs).all(pred)
}

impl<T: ApproxEq<U>, U> ApproxEq<[U]> for [T] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U], abs_tolerance: Self::Tolerance) -> bool {
        elementwise(self, other, |(a, b)| a.abs_diff_eq(b, abs_tolerance))
    }

    fn rel_diff_eq(&self, other: &[U], rel_tolerance: Self::Tolerance) -> bool {
        elementwise(self, other, |(a, b)| a.rel_diff_eq(b, rel_tolerance))
    }

    fn ulps_diff_eq(&self, other: &[U], ulps_tolerance: u32) -> bool {
        elementwise(self, other, |(a, b)| a.ulps_diff_eq(b, ulps_tolerance))
    }
}

impl<T: ApproxEq<U>, U, const N: usize> ApproxEq<[U; N]> for [T; N] {
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &[U; N], abs_tolerance: Self::Tolerance) -> bool {
        self[..].abs_diff_eq(&other[..], abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &[U; N], rel_tolerance: Self::Tolerance) -> bool {
        self[..].rel_diff_eq(&other[..], rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &[U; N], ulps_tolerance: u32) -> bool {
        self[..].ulps_diff_eq(&other[..], ulps_tolerance)
    }
}

#[cfg(test)]
mod tests {
    use super::ApproxEq;

    #[test]
    fn slices_of_different_length_differ() {
        let short: &[f64] = &[1.0, 2.0];
        let long: &[f64] = &[1.0, 2.0, 3.0];
        assert!(!short.abs_diff_eq(long, 10.0));
        assert!(!short.ulps_diff_eq(long, u32::MAX));
    }

    #[test]
    fn arrays_compare_elementwise() {
        assert!([1.0f32, 2.0].abs_diff_eq(&[1.0, 2.5], 0.5));
        assert!(![1.0f32, 2.0].abs_diff_eq(&[1.0, 2.5], 0.4));
    }
}
