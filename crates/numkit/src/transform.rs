//! Affine transform generators.
//!
//! All generators are associated functions on [`Mat2`], [`Mat3`] and [`Mat4`] and produce matrices
//! meant to be applied to column vectors (`mat * vec`).
//!
//! # Handedness
//!
//! A *left-handed* rotation by a positive angle rotates the second coordinate toward the first
//! one: in 2D, [`Mat2::rotation_left`] is `[[cos, sin], [-sin, cos]]`. The *right-handed* rotation
//! is its transpose, which is the counter-clockwise rotation of the usual mathematical convention.
//!
//! ```
//! # use numkit::*;
//! use std::f64::consts::FRAC_PI_2;
//!
//! assert_approx_eq!(Mat2d::rotation_left(FRAC_PI_2) * Vec2d::Y, Vec2d::X);
//! assert_approx_eq!(Mat2d::rotation_right(FRAC_PI_2) * Vec2d::X, Vec2d::Y);
//! ```
//!
//! # Homogeneous coordinates
//!
//! The [`Mat4`] generators are the [`Mat3`] generators lifted with [`Mat3::to_homogeneous`]: the
//! lower-right element is 1 and the translation column is zero. Only [`Mat4::translation`] writes
//! the translation column.

use crate::{traits::Float, Error, Mat2, Mat3, Mat4, Number, Result, Vec3, Vector};

fn reciprocal<T: Float>(factor: T) -> Result<T> {
    if factor.is_near_zero() {
        Err(Error::InvalidSize)
    } else {
        Ok(T::ONE / factor)
    }
}

impl<T: Number> Mat2<T> {
    /// Creates an axis-aligned scaling matrix.
    pub fn scale(sx: T, sy: T) -> Self {
        Self::from_diagonal([sx, sy])
    }

    /// Creates the inverse of [`Mat2::scale`] with the same factors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if any factor is within epsilon of zero.
    pub fn inverse_scale(sx: T, sy: T) -> Result<Self>
    where
        T: Float,
    {
        Ok(Self::scale(reciprocal(sx)?, reciprocal(sy)?))
    }

    /// Creates a shear that adds `k * y` to the X coordinate.
    pub fn shear_x(k: T) -> Self {
        Self::from_rows([[T::ONE, k], [T::ZERO, T::ONE]])
    }

    /// Creates a shear that adds `k * x` to the Y coordinate.
    pub fn shear_y(k: T) -> Self {
        Self::from_rows([[T::ONE, T::ZERO], [k, T::ONE]])
    }

    /// Inverts a shear matrix created by [`Mat2::shear_x`] or [`Mat2::shear_y`] by negating its
    /// off-diagonal elements.
    pub fn inverse_shear(&self) -> Self {
        let mut inv = *self;
        inv[(0, 1)] = -inv[(0, 1)];
        inv[(1, 0)] = -inv[(1, 0)];
        inv
    }

    /// Creates a left-handed rotation by `radians`.
    ///
    /// The result is `[[cos, sin], [-sin, cos]]`.
    pub fn rotation_left(radians: T) -> Self
    where
        T: Float,
    {
        let (sin, cos) = radians.sin_cos();
        Self::from_rows([[cos, sin], [-sin, cos]])
    }

    /// Creates a right-handed rotation by `radians`.
    ///
    /// The result is the transpose of [`Mat2::rotation_left`].
    pub fn rotation_right(radians: T) -> Self
    where
        T: Float,
    {
        Self::rotation_left(radians).transpose()
    }

    /// Inverts a rotation matrix by transposing it.
    pub fn inverse_rotation(&self) -> Self {
        self.transpose()
    }
}

impl<T: Number> Mat3<T> {
    /// Creates an axis-aligned scaling matrix.
    pub fn scale(sx: T, sy: T, sz: T) -> Self {
        Self::from_diagonal([sx, sy, sz])
    }

    /// Creates the inverse of [`Mat3::scale`] with the same factors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if any factor is within epsilon of zero.
    pub fn inverse_scale(sx: T, sy: T, sz: T) -> Result<Self>
    where
        T: Float,
    {
        Ok(Self::scale(
            reciprocal(sx)?,
            reciprocal(sy)?,
            reciprocal(sz)?,
        ))
    }

    /// Creates a shear along the X axis: X gains `ky * y + kz * z`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numkit::*;
    /// let shear = Mat3d::shear_x(2.0, 3.0);
    /// assert_eq!(shear * vec3(1.0, 1.0, 1.0), vec3(6.0, 1.0, 1.0));
    /// ```
    pub fn shear_x(ky: T, kz: T) -> Self {
        Self::from_rows([
            [T::ONE, ky, kz],
            [T::ZERO, T::ONE, T::ZERO],
            [T::ZERO, T::ZERO, T::ONE],
        ])
    }

    /// Creates a shear along the Y axis: Y gains `kx * x + kz * z`.
    pub fn shear_y(kx: T, kz: T) -> Self {
        Self::from_rows([
            [T::ONE, T::ZERO, T::ZERO],
            [kx, T::ONE, kz],
            [T::ZERO, T::ZERO, T::ONE],
        ])
    }

    /// Creates a shear along the Z axis: Z gains `kx * x + ky * y`.
    pub fn shear_z(kx: T, ky: T) -> Self {
        Self::from_rows([
            [T::ONE, T::ZERO, T::ZERO],
            [T::ZERO, T::ONE, T::ZERO],
            [kx, ky, T::ONE],
        ])
    }

    /// Inverts a single-axis shear by negating its off-diagonal elements.
    pub fn inverse_shear(&self) -> Self {
        Self::from_fn(|row, col| {
            if row == col {
                self[(row, col)]
            } else {
                -self[(row, col)]
            }
        })
    }

    /// Creates a left-handed rotation about the X axis (Z rotates toward Y).
    pub fn rotation_x_left(radians: T) -> Self
    where
        T: Float,
    {
        Self::rotation_x_right(radians).transpose()
    }

    /// Creates a right-handed rotation about the X axis (Y rotates toward Z).
    pub fn rotation_x_right(radians: T) -> Self
    where
        T: Float,
    {
        let (sin, cos) = radians.sin_cos();
        Self::from_rows([
            [T::ONE, T::ZERO, T::ZERO],
            [T::ZERO, cos, -sin],
            [T::ZERO, sin, cos],
        ])
    }

    /// Creates a left-handed rotation about the Y axis (X rotates toward Z).
    pub fn rotation_y_left(radians: T) -> Self
    where
        T: Float,
    {
        Self::rotation_y_right(radians).transpose()
    }

    /// Creates a right-handed rotation about the Y axis (Z rotates toward X).
    pub fn rotation_y_right(radians: T) -> Self
    where
        T: Float,
    {
        let (sin, cos) = radians.sin_cos();
        Self::from_rows([
            [cos, T::ZERO, sin],
            [T::ZERO, T::ONE, T::ZERO],
            [-sin, T::ZERO, cos],
        ])
    }

    /// Creates a left-handed rotation about the Z axis (Y rotates toward X).
    pub fn rotation_z_left(radians: T) -> Self
    where
        T: Float,
    {
        Self::rotation_z_right(radians).transpose()
    }

    /// Creates a right-handed rotation about the Z axis (X rotates toward Y).
    pub fn rotation_z_right(radians: T) -> Self
    where
        T: Float,
    {
        let (sin, cos) = radians.sin_cos();
        Self::from_rows([
            [cos, -sin, T::ZERO],
            [sin, cos, T::ZERO],
            [T::ZERO, T::ZERO, T::ONE],
        ])
    }

    /// Creates a left-handed rotation by `radians` about an arbitrary `axis`.
    ///
    /// This is the transpose of [`Mat3::rotation_about_axis_right`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if `axis` has (near) zero length.
    pub fn rotation_about_axis_left(axis: Vec3<T>, radians: T) -> Result<Self>
    where
        T: Float,
    {
        Ok(Self::rotation_about_axis_right(axis, radians)?.transpose())
    }

    /// Creates a right-handed rotation by `radians` about an arbitrary `axis`.
    ///
    /// `axis` is normalized first, then Rodrigues' formula `I + sin(θ) K + (1 - cos(θ)) K²` is
    /// evaluated, with `K` being the cross-product matrix of the unit axis.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if `axis` has (near) zero length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numkit::*;
    /// use std::f64::consts::PI;
    ///
    /// let rot = Mat3d::rotation_about_axis_right(vec3(1.0, 1.0, 0.0), PI)?;
    /// assert_approx_eq!(rot * vec3(1.0, 1.0, 1.0), vec3(1.0, 1.0, -1.0));
    ///
    /// assert_eq!(
    ///     Mat3d::rotation_about_axis_right(Vec3d::ZERO, PI),
    ///     Err(Error::InvalidSize),
    /// );
    /// # Ok::<_, Error>(())
    /// ```
    pub fn rotation_about_axis_right(axis: Vec3<T>, radians: T) -> Result<Self>
    where
        T: Float,
    {
        let [x, y, z] = axis.normalize()?.into_array();
        let (sin, cos) = radians.sin_cos();

        let k = Self::from_rows([
            [T::ZERO, -z, y],
            [z, T::ZERO, -x],
            [-y, x, T::ZERO],
        ]);
        Ok(Self::IDENTITY + k * sin + (k * k) * (T::ONE - cos))
    }

    /// Inverts a rotation matrix by transposing it.
    pub fn inverse_rotation(&self) -> Self {
        self.transpose()
    }

    /// Embeds this matrix in the upper-left corner of a 4x4 identity matrix.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numkit::*;
    /// let mat = Mat3d::scale(2.0, 3.0, 4.0).to_homogeneous();
    /// assert_eq!(mat, Mat4d::scale(2.0, 3.0, 4.0));
    /// assert_eq!(mat[(3, 3)], 1.0);
    /// ```
    pub fn to_homogeneous(self) -> Mat4<T> {
        let mut mat = self.resize::<4, 4>();
        mat[(3, 3)] = T::ONE;
        mat
    }
}

impl<T: Number> Mat4<T> {
    /// Creates an axis-aligned scaling matrix.
    pub fn scale(sx: T, sy: T, sz: T) -> Self {
        Mat3::scale(sx, sy, sz).to_homogeneous()
    }

    /// Creates the inverse of [`Mat4::scale`] with the same factors.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if any factor is within epsilon of zero.
    pub fn inverse_scale(sx: T, sy: T, sz: T) -> Result<Self>
    where
        T: Float,
    {
        Ok(Mat3::inverse_scale(sx, sy, sz)?.to_homogeneous())
    }

    /// Homogeneous form of [`Mat3::shear_x`].
    pub fn shear_x(ky: T, kz: T) -> Self {
        Mat3::shear_x(ky, kz).to_homogeneous()
    }

    /// Homogeneous form of [`Mat3::shear_y`].
    pub fn shear_y(kx: T, kz: T) -> Self {
        Mat3::shear_y(kx, kz).to_homogeneous()
    }

    /// Homogeneous form of [`Mat3::shear_z`].
    pub fn shear_z(kx: T, ky: T) -> Self {
        Mat3::shear_z(kx, ky).to_homogeneous()
    }

    /// Inverts a single-axis shear by negating the off-diagonal elements of the upper-left 3x3
    /// block.
    pub fn inverse_shear(&self) -> Self {
        Self::from_fn(|row, col| {
            if row == col || row == 3 || col == 3 {
                self[(row, col)]
            } else {
                -self[(row, col)]
            }
        })
    }

    /// Homogeneous form of [`Mat3::rotation_x_left`].
    pub fn rotation_x_left(radians: T) -> Self
    where
        T: Float,
    {
        Mat3::rotation_x_left(radians).to_homogeneous()
    }

    /// Homogeneous form of [`Mat3::rotation_x_right`].
    pub fn rotation_x_right(radians: T) -> Self
    where
        T: Float,
    {
        Mat3::rotation_x_right(radians).to_homogeneous()
    }

    /// Homogeneous form of [`Mat3::rotation_y_left`].
    pub fn rotation_y_left(radians: T) -> Self
    where
        T: Float,
    {
        Mat3::rotation_y_left(radians).to_homogeneous()
    }

    /// Homogeneous form of [`Mat3::rotation_y_right`].
    pub fn rotation_y_right(radians: T) -> Self
    where
        T: Float,
    {
        Mat3::rotation_y_right(radians).to_homogeneous()
    }

    /// Homogeneous form of [`Mat3::rotation_z_left`].
    pub fn rotation_z_left(radians: T) -> Self
    where
        T: Float,
    {
        Mat3::rotation_z_left(radians).to_homogeneous()
    }

    /// Homogeneous form of [`Mat3::rotation_z_right`].
    pub fn rotation_z_right(radians: T) -> Self
    where
        T: Float,
    {
        Mat3::rotation_z_right(radians).to_homogeneous()
    }

    /// Homogeneous form of [`Mat3::rotation_about_axis_left`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if `axis` has (near) zero length.
    pub fn rotation_about_axis_left(axis: Vec3<T>, radians: T) -> Result<Self>
    where
        T: Float,
    {
        Ok(Mat3::rotation_about_axis_left(axis, radians)?.to_homogeneous())
    }

    /// Homogeneous form of [`Mat3::rotation_about_axis_right`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if `axis` has (near) zero length.
    pub fn rotation_about_axis_right(axis: Vec3<T>, radians: T) -> Result<Self>
    where
        T: Float,
    {
        Ok(Mat3::rotation_about_axis_right(axis, radians)?.to_homogeneous())
    }

    /// Inverts a pure rotation matrix by transposing it.
    pub fn inverse_rotation(&self) -> Self {
        self.transpose()
    }

    /// Creates a translation by `(tx, ty, tz)`, stored in the rightmost column.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numkit::*;
    /// let t = Mat4d::translation(vec3(1.0, 2.0, 3.0));
    /// assert_eq!(t * vec4(0.0, 0.0, 0.0, 1.0), vec4(1.0, 2.0, 3.0, 1.0));
    /// // Directions (w = 0) are unaffected.
    /// assert_eq!(t * vec4(1.0, 0.0, 0.0, 0.0), vec4(1.0, 0.0, 0.0, 0.0));
    /// ```
    pub fn translation<V: Into<Vec3<T>>>(offset: V) -> Self {
        let offset = offset.into();
        let mut mat = Self::IDENTITY;
        for row in 0..3 {
            mat[(row, 3)] = offset[row];
        }
        mat
    }

    /// Negates the translation column of `self`, keeping the rotation/scale block.
    ///
    /// For a pure translation this is its exact inverse.
    pub fn inverse_translation(&self) -> Self {
        let mut inv = *self;
        for row in 0..3 {
            inv[(row, 3)] = -inv[(row, 3)];
        }
        inv
    }

    /// Returns the translation column of this matrix.
    pub fn translation_part(&self) -> Vec3<T> {
        Vector::from_fn(|row| self[(row, 3)])
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_3, PI};

    use crate::{assert_approx_eq, vec2, vec3, vec4, Mat2d, Mat3d, Mat4d, Vec2d, Vec3d};

    use super::*;

    #[test]
    fn scale() {
        assert_eq!(Mat2d::scale(2.0, 3.0) * vec2(1.0, 1.0), vec2(2.0, 3.0));
        assert_eq!(
            Mat2d::inverse_scale(2.0, 4.0).unwrap(),
            Mat2d::from_diagonal([0.5, 0.25])
        );
        assert_eq!(Mat3d::inverse_scale(1.0, 0.0, 1.0), Err(Error::InvalidSize));
        assert_approx_eq!(
            Mat4d::scale(2.0, 3.0, 4.0) * Mat4d::inverse_scale(2.0, 3.0, 4.0).unwrap(),
            Mat4d::IDENTITY
        );
    }

    #[test]
    fn shear() {
        assert_eq!(Mat2d::shear_x(2.0) * vec2(1.0, 1.0), vec2(3.0, 1.0));
        assert_eq!(Mat2d::shear_y(2.0) * vec2(1.0, 1.0), vec2(1.0, 3.0));
        assert_eq!(
            Mat2d::shear_x(2.0).inverse_shear(),
            Mat2d::from_rows([[1.0, -2.0], [0.0, 1.0]])
        );

        for shear in [
            Mat3d::shear_x(0.5, -2.0),
            Mat3d::shear_y(1.5, 3.0),
            Mat3d::shear_z(-0.25, 4.0),
        ] {
            assert_eq!(shear * shear.inverse_shear(), Mat3d::IDENTITY);
        }

        let shear = Mat4d::shear_y(1.5, 3.0);
        assert_eq!(shear * shear.inverse_shear(), Mat4d::IDENTITY);
        assert_eq!(shear.inverse_shear()[(3, 3)], 1.0);
    }

    #[test]
    fn rotation_2d_handedness() {
        let left = Mat2d::rotation_left(FRAC_PI_3);
        let right = Mat2d::rotation_right(FRAC_PI_3);
        assert_eq!(left.transpose(), right);
        assert_approx_eq!(left * right, Mat2d::IDENTITY);
        assert_approx_eq!(left.inverse_rotation() * left, Mat2d::IDENTITY);

        let (s, c) = FRAC_PI_3.sin_cos();
        assert_eq!(left, Mat2d::from_rows([[c, s], [-s, c]]));
        assert_approx_eq!(Mat2d::rotation_right(FRAC_PI_2) * Vec2d::X, Vec2d::Y);
    }

    #[test]
    fn rotation_principal_axes() {
        // Right-handed: X -> Y about Z, Y -> Z about X, Z -> X about Y.
        assert_approx_eq!(Mat3d::rotation_z_right(FRAC_PI_2) * Vec3d::X, Vec3d::Y);
        assert_approx_eq!(Mat3d::rotation_x_right(FRAC_PI_2) * Vec3d::Y, Vec3d::Z);
        assert_approx_eq!(Mat3d::rotation_y_right(FRAC_PI_2) * Vec3d::Z, Vec3d::X);

        // Left-handed rotations go the other way.
        assert_approx_eq!(Mat3d::rotation_z_left(FRAC_PI_2) * Vec3d::Y, Vec3d::X);
        assert_approx_eq!(Mat3d::rotation_x_left(FRAC_PI_2) * Vec3d::Z, Vec3d::Y);
        assert_approx_eq!(Mat3d::rotation_y_left(FRAC_PI_2) * Vec3d::X, Vec3d::Z);

        // The Z rotation matches the 2D one on the XY plane.
        let rot = Mat3d::rotation_z_left(1.0);
        let flat = Mat2d::rotation_left(1.0);
        assert_eq!(rot.resize::<2, 2>(), flat);
    }

    #[test]
    fn rotation_about_axis() {
        let rot = Mat3d::rotation_about_axis_right(vec3(1.0, 1.0, 0.0), PI).unwrap();
        assert_approx_eq!(rot * vec3(1.0, 1.0, 1.0), vec3(1.0, 1.0, -1.0));

        // Principal axes agree with the dedicated generators.
        for angle in [0.3, -1.2, 2.5] {
            assert_approx_eq!(
                Mat3d::rotation_about_axis_right(Vec3d::Z * 3.0, angle).unwrap(),
                Mat3d::rotation_z_right(angle)
            );
            assert_approx_eq!(
                Mat3d::rotation_about_axis_left(Vec3d::X, angle).unwrap(),
                Mat3d::rotation_x_left(angle)
            );
        }

        let axis = vec3(1.0, -2.0, 0.5);
        let rot = Mat3d::rotation_about_axis_left(axis, 0.7).unwrap();
        // The axis is a fixed point.
        assert_approx_eq!(rot * axis, axis);
        assert_approx_eq!(rot.inverse_rotation() * rot, Mat3d::IDENTITY);
        assert_approx_eq!(rot.determinant(), 1.0);

        assert_eq!(
            Mat4d::rotation_about_axis_left(Vec3d::ZERO, 1.0),
            Err(Error::InvalidSize)
        );
    }

    #[test]
    fn homogeneous() {
        let rot = Mat4d::rotation_y_right(0.4);
        assert_eq!(rot[(3, 3)], 1.0);
        assert_eq!(rot.translation_part(), Vec3d::ZERO);
        assert_eq!(rot.resize::<3, 3>(), Mat3d::rotation_y_right(0.4));
        assert_approx_eq!(rot.inverse_rotation() * rot, Mat4d::IDENTITY);
    }

    #[test]
    fn translation() {
        let t = Mat4d::translation([1.0, -2.0, 3.0]);
        assert_eq!(t.translation_part(), vec3(1.0, -2.0, 3.0));
        assert_eq!(t * vec4(1.0, 1.0, 1.0, 1.0), vec4(2.0, -1.0, 4.0, 1.0));
        assert_eq!(t * t.inverse_translation(), Mat4d::IDENTITY);

        // The rotation/scale block is kept.
        let mut m = Mat4d::scale(2.0, 2.0, 2.0);
        m[(0, 3)] = 5.0;
        let inv = m.inverse_translation();
        assert_eq!(inv[(0, 3)], -5.0);
        assert_eq!(inv[(0, 0)], 2.0);
    }
}
