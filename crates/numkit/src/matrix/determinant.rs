//! Determinants and inverses of square matrices.

use super::Matrix;
use crate::{traits::Float, Error, Number, Result};

fn check_invertible<T: Float>(det: T) -> Result<T> {
    if det.is_near_zero() {
        log::trace!("rejecting inverse of singular matrix (det = {det})");
        Err(Error::SingularMatrix)
    } else {
        Ok(det)
    }
}

impl<T: Number> Matrix<T, 2, 2> {
    /// Computes the determinant of this 2x2 matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numkit::*;
    /// let mat = Mat2d::from_rows([[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(mat.determinant(), -2.0);
    /// ```
    pub fn determinant(&self) -> T {
        let [[a, b], [c, d]] = self.0;
        a * d - b * c
    }

    /// Computes the inverse of this matrix.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SingularMatrix`] if the determinant is within epsilon of zero.
    pub fn inverse(&self) -> Result<Self>
    where
        T: Float,
    {
        let det = check_invertible(self.determinant())?;
        let [[a, b], [c, d]] = self.0;
        Ok(Matrix([[d, -b], [-c, a]]) / det)
    }
}

impl<T: Number> Matrix<T, 3, 3> {
    /// Computes the determinant of this 3x3 matrix by cofactor expansion along the first row.
    pub fn determinant(&self) -> T {
        let [[a, b, c], [d, e, f], [g, h, i]] = self.0;
        a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
    }

    /// Computes the inverse of this matrix as its adjugate divided by its determinant.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SingularMatrix`] if the determinant is within epsilon of zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numkit::*;
    /// let mat = Mat3d::from_rows([
    ///     [1.0, 2.0, 3.0],
    ///     [0.0, 1.0, 4.0],
    ///     [5.0, 6.0, 0.0],
    /// ]);
    /// assert_eq!(mat.inverse()?, Mat3d::from_rows([
    ///     [-24.0, 18.0, 5.0],
    ///     [20.0, -15.0, -4.0],
    ///     [-5.0, 4.0, 1.0],
    /// ]));
    ///
    /// assert_eq!(Mat3d::ZERO.inverse(), Err(Error::SingularMatrix));
    /// # Ok::<_, Error>(())
    /// ```
    pub fn inverse(&self) -> Result<Self>
    where
        T: Float,
    {
        let det = check_invertible(self.determinant())?;
        let [[a, b, c], [d, e, f], [g, h, i]] = self.0;

        #[rustfmt::skip]
        let adjugate = Matrix([
            [e * i - f * h, c * h - b * i, b * f - c * e],
            [f * g - d * i, a * i - c * g, c * d - a * f],
            [d * h - e * g, b * g - a * h, a * e - b * d],
        ]);
        Ok(adjugate / det)
    }
}

/// The 2x2 minors of the top two rows (`s`) and bottom two rows (`c`) of a 4x4 matrix.
///
/// `s[k]` and `c[5 - k]` use complementary column pairs, so the determinant is the alternating
/// sum of `s[k] * c[5 - k]`.
struct Minors4<T> {
    s: [T; 6],
    c: [T; 6],
}

impl<T: Number> Minors4<T> {
    fn new(m: &[[T; 4]; 4]) -> Self {
        let pair = |r0: usize, r1: usize, c0: usize, c1: usize| {
            m[r0][c0] * m[r1][c1] - m[r1][c0] * m[r0][c1]
        };
        Self {
            s: [
                pair(0, 1, 0, 1),
                pair(0, 1, 0, 2),
                pair(0, 1, 0, 3),
                pair(0, 1, 1, 2),
                pair(0, 1, 1, 3),
                pair(0, 1, 2, 3),
            ],
            c: [
                pair(2, 3, 0, 1),
                pair(2, 3, 0, 2),
                pair(2, 3, 0, 3),
                pair(2, 3, 1, 2),
                pair(2, 3, 1, 3),
                pair(2, 3, 2, 3),
            ],
        }
    }

    fn determinant(&self) -> T {
        let Self { s, c } = self;
        s[0] * c[5] - s[1] * c[4] + s[2] * c[3] + s[3] * c[2] - s[4] * c[1] + s[5] * c[0]
    }
}

impl<T: Number> Matrix<T, 4, 4> {
    /// Computes the determinant of this 4x4 matrix.
    ///
    /// This is a Laplace expansion along the first two rows, which reuses the 2x2 minors needed by
    /// [`Matrix::inverse`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use numkit::*;
    /// assert_eq!(Mat4d::IDENTITY.determinant(), 1.0);
    /// assert_eq!(Mat4d::from_diagonal([1.0, 2.0, 3.0, 4.0]).determinant(), 24.0);
    /// ```
    pub fn determinant(&self) -> T {
        Minors4::new(&self.0).determinant()
    }

    /// Computes the inverse of this matrix using the closed-form adjugate.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SingularMatrix`] if the determinant is within epsilon of zero.
    pub fn inverse(&self) -> Result<Self>
    where
        T: Float,
    {
        let minors = Minors4::new(&self.0);
        let det = check_invertible(minors.determinant())?;
        let Minors4 { s, c } = minors;
        let m = &self.0;

        #[rustfmt::skip]
        let adjugate = Matrix([
            [
                m[1][1] * c[5] - m[1][2] * c[4] + m[1][3] * c[3],
                -m[0][1] * c[5] + m[0][2] * c[4] - m[0][3] * c[3],
                m[3][1] * s[5] - m[3][2] * s[4] + m[3][3] * s[3],
                -m[2][1] * s[5] + m[2][2] * s[4] - m[2][3] * s[3],
            ],
            [
                -m[1][0] * c[5] + m[1][2] * c[2] - m[1][3] * c[1],
                m[0][0] * c[5] - m[0][2] * c[2] + m[0][3] * c[1],
                -m[3][0] * s[5] + m[3][2] * s[2] - m[3][3] * s[1],
                m[2][0] * s[5] - m[2][2] * s[2] + m[2][3] * s[1],
            ],
            [
                m[1][0] * c[4] - m[1][1] * c[2] + m[1][3] * c[0],
                -m[0][0] * c[4] + m[0][1] * c[2] - m[0][3] * c[0],
                m[3][0] * s[4] - m[3][1] * s[2] + m[3][3] * s[0],
                -m[2][0] * s[4] + m[2][1] * s[2] - m[2][3] * s[0],
            ],
            [
                -m[1][0] * c[3] + m[1][1] * c[1] - m[1][2] * c[0],
                m[0][0] * c[3] - m[0][1] * c[1] + m[0][2] * c[0],
                -m[3][0] * s[3] + m[3][1] * s[1] - m[3][2] * s[0],
                m[2][0] * s[3] - m[2][1] * s[1] + m[2][2] * s[0],
            ],
        ]);
        Ok(adjugate / det)
    }
}

#[cfg(test)]
mod tests {
    use crate::{assert_approx_eq, Mat2d, Mat3d, Mat4d};

    use super::*;

    #[test]
    fn det2() {
        let mat = Mat2d::from_rows([[3.0, 8.0], [4.0, 6.0]]);
        assert_eq!(mat.determinant(), -14.0);
        assert_eq!(Mat2d::IDENTITY.determinant(), 1.0);
        assert_eq!(Matrix::from_rows([[1, 2], [2, 4]]).determinant(), 0);
    }

    #[test]
    fn inverse2() {
        let mat = Mat2d::from_rows([[4.0, 7.0], [2.0, 6.0]]);
        let inv = mat.inverse().unwrap();
        assert_approx_eq!(inv, Mat2d::from_rows([[0.6, -0.7], [-0.2, 0.4]]));
        assert_approx_eq!(mat * inv, Mat2d::IDENTITY);
        assert_eq!(
            Mat2d::from_rows([[1.0, 2.0], [2.0, 4.0]]).inverse(),
            Err(Error::SingularMatrix)
        );
    }

    #[test]
    fn det3() {
        let mat = Mat3d::from_rows([[6.0, 1.0, 1.0], [4.0, -2.0, 5.0], [2.0, 8.0, 7.0]]);
        assert_eq!(mat.determinant(), -306.0);
    }

    #[test]
    fn inverse3() {
        let mat = Mat3d::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        assert_eq!(mat.determinant(), 1.0);
        let inv = mat.inverse().unwrap();
        assert_eq!(
            inv,
            Mat3d::from_rows([[-24.0, 18.0, 5.0], [20.0, -15.0, -4.0], [-5.0, 4.0, 1.0]])
        );
        assert_eq!(mat * inv, Mat3d::IDENTITY);
    }

    #[test]
    fn det4() {
        let counting = Mat4d::from_fn(|row, col| (row * 4 + col + 1) as f64);
        assert_eq!(counting.determinant(), 0.0);

        let mat = Mat4d::from_rows([
            [1.0, 0.0, 2.0, -1.0],
            [3.0, 0.0, 0.0, 5.0],
            [2.0, 1.0, 4.0, -3.0],
            [1.0, 0.0, 5.0, 0.0],
        ]);
        assert_eq!(mat.determinant(), 30.0);
        assert_eq!(mat.transpose().determinant(), 30.0);
    }

    #[test]
    fn inverse4() {
        let mat = Mat4d::from_rows([
            [1.0, 0.0, 2.0, -1.0],
            [3.0, 0.0, 0.0, 5.0],
            [2.0, 1.0, 4.0, -3.0],
            [1.0, 0.0, 5.0, 0.0],
        ]);
        let inv = mat.inverse().unwrap();
        assert_approx_eq!(mat * inv, Mat4d::IDENTITY).abs(1e-10);
        assert_approx_eq!(inv * mat, Mat4d::IDENTITY).abs(1e-10);
        assert_approx_eq!(inv.determinant(), 1.0 / 30.0).abs(1e-10);

        let counting = Mat4d::from_fn(|row, col| (row * 4 + col + 1) as f64);
        assert_eq!(counting.inverse(), Err(Error::SingularMatrix));
    }

    #[test]
    fn near_singular() {
        let mat = Mat2d::from_rows([[1.0, 1.0], [1.0, 1.0 + 1e-13]]);
        assert_eq!(mat.inverse(), Err(Error::SingularMatrix));
        let mat = Mat2d::from_rows([[1.0, 1.0], [1.0, 1.0 + 1e-6]]);
        assert!(mat.inverse().is_ok());
    }
}
