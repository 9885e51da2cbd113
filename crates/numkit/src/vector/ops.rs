//! Implementations of `std::ops`.

use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::approx::ApproxEq;

use super::Vector;

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.0[index]
    }
}

// Lets `Vector<T, N>` compare against `Vector<U, N>` whenever `T: PartialEq<U>`.
impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.0 == other.0
    }
}

impl<T, const N: usize> Eq for Vector<T, N> where T: Eq {}

impl<T, U, const N: usize> PartialEq<[U; N]> for Vector<T, N>
where
    T: PartialEq<U>,
{
    fn eq(&self, other: &[U; N]) -> bool {
        self.0.eq(other)
    }
}

impl<T, const N: usize> ApproxEq for Vector<T, N>
where
    T: ApproxEq,
{
    type Tolerance = T::Tolerance;

    fn abs_diff_eq(&self, other: &Self, abs_tolerance: Self::Tolerance) -> bool {
        self.0.abs_diff_eq(&other.0, abs_tolerance)
    }

    fn rel_diff_eq(&self, other: &Self, rel_tolerance: Self::Tolerance) -> bool {
        self.0.rel_diff_eq(&other.0, rel_tolerance)
    }

    fn ulps_diff_eq(&self, other: &Self, ulps_tolerance: u32) -> bool {
        self.0.ulps_diff_eq(&other.0, ulps_tolerance)
    }
}

/// Element-wise negation.
impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Neg,
{
    type Output = Vector<T::Output, N>;

    fn neg(self) -> Self::Output {
        self.map(T::neg)
    }
}

/// Element-wise `Vector op Vector`, plus the in-place form.
macro_rules! elementwise_ops {
    ($($op:ident::$f:ident, $op_assign:ident::$f_assign:ident;)+) => {
        $(
            impl<T, const N: usize> $op for Vector<T, N>
            where
                T: $op,
            {
                type Output = Vector<T::Output, N>;

                #[inline]
                fn $f(self, rhs: Self) -> Self::Output {
                    self.zip(rhs).map(|(l, r)| l.$f(r))
                }
            }

            impl<T, const N: usize> $op_assign for Vector<T, N>
            where
                T: $op_assign,
            {
                #[inline]
                fn $f_assign(&mut self, rhs: Self) {
                    for (l, r) in self.0.iter_mut().zip(rhs.0) {
                        l.$f_assign(r);
                    }
                }
            }
        )+
    };
}

elementwise_ops! {
    Add::add, AddAssign::add_assign;
    Sub::sub, SubAssign::sub_assign;
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
}

// `Vector * Vector` is element-wise, so scalar operands are taken as `T` rather than any `U`.

/// `Vector op scalar`, applied to every element, plus the in-place form.
macro_rules! scalar_ops {
    ($($op:ident::$f:ident, $op_assign:ident::$f_assign:ident;)+) => {
        $(
            impl<T, const N: usize> $op<T> for Vector<T, N>
            where
                T: $op + Copy,
            {
                type Output = Vector<T::Output, N>;

                #[inline]
                fn $f(self, rhs: T) -> Self::Output {
                    self.map(|elem| elem.$f(rhs))
                }
            }

            impl<T, const N: usize> $op_assign<T> for Vector<T, N>
            where
                T: $op_assign + Copy,
            {
                #[inline]
                fn $f_assign(&mut self, rhs: T) {
                    for elem in &mut self.0 {
                        elem.$f_assign(rhs);
                    }
                }
            }
        )+
    };
}

scalar_ops! {
    Mul::mul, MulAssign::mul_assign;
    Div::div, DivAssign::div_assign;
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, vec4, Vec3d};

    #[test]
    fn arithmetic() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(4.0, 5.0, 6.0);
        assert_eq!(a + b, vec3(5.0, 7.0, 9.0));
        assert_eq!(b - a, vec3(3.0, 3.0, 3.0));
        assert_eq!(a * b, vec3(4.0, 10.0, 18.0));
        assert_eq!(b / a, vec3(4.0, 2.5, 2.0));
        assert_eq!(a * 2.0, vec3(2.0, 4.0, 6.0));
        assert_eq!(a / 2.0, vec3(0.5, 1.0, 1.5));
        assert_eq!(-a, vec3(-1.0, -2.0, -3.0));
    }

    #[test]
    fn assign() {
        let mut v = vec4(1.0, 1.0, 1.0, 1.0);
        v += vec4(1.0, 2.0, 3.0, 4.0);
        assert_eq!(v, [2.0, 3.0, 4.0, 5.0]);
        v -= vec4(1.0, 1.0, 1.0, 1.0);
        assert_eq!(v, [1.0, 2.0, 3.0, 4.0]);
        v *= 3.0;
        assert_eq!(v, [3.0, 6.0, 9.0, 12.0]);
        v /= 3.0;
        assert_eq!(v, [1.0, 2.0, 3.0, 4.0]);
    }

    #[test]
    fn index() {
        let mut v = vec2(0.0, 1.0);
        v[1] = 7.0;
        assert_eq!(v[0], 0.0);
        assert_eq!(v[1], 7.0);
        assert_eq!(Vec3d::Z[2], 1.0);
    }
}
