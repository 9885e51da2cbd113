use std::{array, fmt};

use crate::{
    traits::{Float, Number},
    Error, Mat2, MinMax, One, Result, Zero,
};

mod ops;

/// Two elements.
pub type Vec2<T> = Vector<T, 2>;
/// `Vec2` in the library's default precision ([`f64`]).
pub type Vec2d = Vec2<f64>;
/// Single-precision [`Vec2`].
pub type Vec2f = Vec2<f32>;
/// Three elements.
pub type Vec3<T> = Vector<T, 3>;
/// `Vec3` in the library's default precision ([`f64`]).
pub type Vec3d = Vec3<f64>;
/// Single-precision [`Vec3`].
pub type Vec3f = Vec3<f32>;
/// Four elements.
pub type Vec4<T> = Vector<T, 4>;
/// `Vec4` in the library's default precision ([`f64`]).
pub type Vec4d = Vec4<f64>;
/// Single-precision [`Vec4`].
pub type Vec4f = Vec4<f32>;

/// An `N`-element vector storing elements of type `T`.
///
/// [`Vector`] is a plain value type: it is [`Copy`] when `T` is, lives on the stack, and has the
/// same layout as `[T; N]`. The library is built around `N` in `2..=4` with [`f64`] elements
/// ([`Vec2d`], [`Vec3d`], [`Vec4d`]), but nothing in here is restricted to those.
///
/// # Construction
///
/// [`vec2`], [`vec3`] and [`vec4`] take the elements in order. `[T; N]` converts with [`From`].
/// [`Vector::splat`] repeats one value and [`Vector::from_fn`] computes each element from its
/// index. [`Vector::ZERO`] and the axis constants (`X`, `Y`, `Z`, `W`) cover the usual literals.
///
/// # Fallible Operations
///
/// Operations that divide by a magnitude ([`Vector::normalize`], [`Vector::angle_to`],
/// [`Vector::project_onto`], [`Vector::reflect_about`]) return [`Error::InvalidSize`] if that
/// magnitude is within epsilon of zero. The input is never modified, since every operation takes
/// `self` by value and returns a new vector.
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Vector<T, const N: usize>([T; N]);

unsafe impl<T: bytemuck::Zeroable, const N: usize> bytemuck::Zeroable for Vector<T, N> {}
unsafe impl<T: bytemuck::Pod, const N: usize> bytemuck::Pod for Vector<T, N> {}

impl<T: Zero, const N: usize> Vector<T, N> {
    /// All elements zero.
    pub const ZERO: Self = Self([T::ZERO; N]);
}

impl<T: Zero + One> Vector<T, 2> {
    /// `+X` axis.
    pub const X: Self = Self([T::ONE, T::ZERO]);
    /// `+Y` axis.
    pub const Y: Self = Self([T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 3> {
    /// `+X` axis.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO]);
    /// `+Y` axis.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO]);
    /// `+Z` axis.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE]);
}

impl<T: Zero + One> Vector<T, 4> {
    /// `+X` axis.
    pub const X: Self = Self([T::ONE, T::ZERO, T::ZERO, T::ZERO]);
    /// `+Y` axis.
    pub const Y: Self = Self([T::ZERO, T::ONE, T::ZERO, T::ZERO]);
    /// `+Z` axis.
    pub const Z: Self = Self([T::ZERO, T::ZERO, T::ONE, T::ZERO]);
    /// `+W` axis.
    pub const W: Self = Self([T::ZERO, T::ZERO, T::ZERO, T::ONE]);
}

impl<T, const N: usize> Vector<T, N> {
    /// Repeats `elem` in every slot.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numkit::*;
    /// let v = Vector::splat(2.0);
    /// assert_eq!(v, vec3(2.0, 2.0, 2.0));
    /// ```
    #[inline]
    pub fn splat(elem: T) -> Self
    where
        T: Copy,
    {
        Self([elem; N])
    }

    /// Builds a vector by calling `f(i)` for each index `i` in `0..N`, in order.
    pub fn from_fn<F>(f: F) -> Self
    where
        F: FnMut(usize) -> T,
    {
        Self(array::from_fn(f))
    }

    /// Transforms every element with `f`.
    pub fn map<F, U>(self, f: F) -> Vector<U, N>
    where
        F: FnMut(T) -> U,
    {
        Vector(self.0.map(f))
    }

    /// Pairs up the elements of `self` and `other` by index.
    pub fn zip<U>(self, other: Vector<U, N>) -> Vector<(T, U), N> {
        let mut rhs = other.0.into_iter();
        // Both sides have exactly `N` elements.
        Vector(self.0.map(|l| (l, rhs.next().unwrap())))
    }

    /// Borrows the elements as `[T; N]`.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.0
    }

    /// Mutably borrows the elements as `[T; N]`.
    #[inline]
    pub fn as_mut_array(&mut self) -> &mut [T; N] {
        &mut self.0
    }

    /// Borrows the elements as a slice.
    #[inline]
    pub const fn as_slice(&self) -> &[T] {
        &self.0
    }

    /// Mutably borrows the elements as a slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.0
    }

    /// Unwraps the element array.
    #[inline]
    pub fn into_array(self) -> [T; N] {
        self.0
    }

    /// Returns a reference to the element at `index`, or [`None`] if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.0.get(index)
    }

    /// Adds `scalar` to every element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numkit::*;
    /// assert_eq!(vec2(1.0, -1.0).add_scalar(0.5), vec2(1.5, -0.5));
    /// ```
    pub fn add_scalar(self, scalar: T) -> Self
    where
        T: Number,
    {
        self.map(|elem| elem + scalar)
    }

    /// Subtracts `scalar` from every element.
    pub fn sub_scalar(self, scalar: T) -> Self
    where
        T: Number,
    {
        self.map(|elem| elem - scalar)
    }

    /// Multiplies every element by `factor`.
    ///
    /// This is the same as `self * factor`.
    pub fn scale(self, factor: T) -> Self
    where
        T: Number,
    {
        self.map(|elem| elem * factor)
    }

    /// Returns the squared length (sum of squares) of this [`Vector`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use numkit::*;
    /// assert_eq!(vec2(4.0, 0.0).length2(), 16.0);
    /// ```
    pub fn length2(&self) -> T
    where
        T: Number,
    {
        self.dot(*self)
    }

    /// Returns the length (modulus) of this [`Vector`].
    pub fn length(&self) -> T
    where
        T: Float,
    {
        self.length2().sqrt()
    }

    /// Returns the unit vector pointing the same way as `self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if the length of `self` is within epsilon of zero.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numkit::*;
    /// let z = vec3(0.0, 0.0, 4.0).normalize()?;
    /// assert_eq!(z, vec3(0.0, 0.0, 1.0));
    ///
    /// assert_eq!(Vec3d::ZERO.normalize(), Err(Error::InvalidSize));
    /// # Ok::<_, Error>(())
    /// ```
    pub fn normalize(self) -> Result<Self>
    where
        T: Float,
    {
        let length = nonzero_length(&self)?;
        Ok(self.map(|elem| elem / length))
    }

    /// Sum of the element-wise products.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numkit::*;
    /// let a = vec3(1.0, 3.0, -5.0);
    /// let b = vec3(4.0, -2.0, -1.0);
    /// assert_eq!(a.dot(b), 3.0);
    /// ```
    pub fn dot(self, other: Self) -> T
    where
        T: Number,
    {
        let mut sum = T::ZERO;
        for (a, b) in self.0.into_iter().zip(other.0) {
            sum = sum + a * b;
        }
        sum
    }

    /// Returns the squared distance between the points `self` and `other`.
    pub fn distance2(self, other: Self) -> T
    where
        T: Number,
    {
        (self - other).length2()
    }

    /// Returns the distance between the points `self` and `other`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numkit::*;
    /// assert_eq!(vec2(1.0, 1.0).distance(vec2(4.0, 5.0)), 5.0);
    /// ```
    pub fn distance(self, other: Self) -> T
    where
        T: Float,
    {
        (self - other).length()
    }

    /// Unsigned angle between `self` and `other`, in radians, in `[0, π]`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if either vector has (near) zero length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numkit::*;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// assert_approx_eq!(Vec3d::Y.angle_to(Vec3d::X)?, FRAC_PI_2);
    /// assert!(Vec3d::Y.angle_to(Vec3d::ZERO).is_err());
    /// # Ok::<_, Error>(())
    /// ```
    pub fn angle_to(self, other: Self) -> Result<T>
    where
        T: Float,
    {
        let denom = nonzero_length(&self)? * nonzero_length(&other)?;
        // Rounding can push the cosine slightly outside of `[-1, 1]`.
        let cos = (self.dot(other) / denom).clamp(-T::ONE, T::ONE);
        Ok(cos.acos())
    }

    /// Projects `self` onto `onto`, returning a vector parallel to `onto`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if `onto` has (near) zero length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numkit::*;
    /// let p = vec2(3.0, 4.0).project_onto(vec2(2.0, 0.0))?;
    /// assert_eq!(p, vec2(3.0, 0.0));
    /// # Ok::<_, Error>(())
    /// ```
    pub fn project_onto(self, onto: Self) -> Result<Self>
    where
        T: Float,
    {
        let len2 = onto.length2();
        if len2.is_near_zero() {
            return Err(Error::InvalidSize);
        }
        Ok(onto * (self.dot(onto) / len2))
    }

    /// Reflects `self` about the line spanned by `axis`.
    ///
    /// The component parallel to `axis` is kept, the perpendicular component is negated:
    /// `2 * proj(self, axis) - self`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidSize`] if `axis` has (near) zero length.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numkit::*;
    /// let r = vec2(1.0, 1.0).reflect_about(Vec2d::X)?;
    /// assert_eq!(r, vec2(1.0, -1.0));
    /// # Ok::<_, Error>(())
    /// ```
    pub fn reflect_about(self, axis: Self) -> Result<Self>
    where
        T: Float,
    {
        let proj = self.project_onto(axis)?;
        Ok(proj + proj - self)
    }

    /// Per-element [`MinMax::min`].
    pub fn min(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].min(other[i]))
    }

    /// Per-element [`MinMax::max`].
    pub fn max(self, other: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].max(other[i]))
    }

    /// Restricts each element to the matching range `min[i]..=max[i]`.
    pub fn clamp(self, min: Self, max: Self) -> Self
    where
        T: MinMax + Copy,
    {
        Self::from_fn(|i| self[i].clamp(min[i], max[i]))
    }
}

fn nonzero_length<T: Float, const N: usize>(v: &Vector<T, N>) -> Result<T> {
    let length = v.length();
    if length.is_near_zero() {
        Err(Error::InvalidSize)
    } else {
        Ok(length)
    }
}

impl<T> Vector<T, 2> {
    /// Adds `value` as the third element.
    pub fn extend(self, value: T) -> Vector<T, 3> {
        let [x, y] = self.into_array();
        [x, y, value].into()
    }

    /// Rotates `self` with the left-handed rotation [`Mat2::rotation_left`].
    ///
    /// # Examples
    ///
    /// ```
    /// # use numkit::*;
    /// use std::f64::consts::FRAC_PI_2;
    ///
    /// assert_approx_eq!(Vec2d::Y.rotate_left(FRAC_PI_2), Vec2d::X);
    /// ```
    pub fn rotate_left(self, radians: T) -> Self
    where
        T: Float,
    {
        Mat2::rotation_left(radians) * self
    }

    /// Rotates `self` with the right-handed rotation [`Mat2::rotation_right`].
    pub fn rotate_right(self, radians: T) -> Self
    where
        T: Float,
    {
        Mat2::rotation_right(radians) * self
    }

    /// 2D cross product: `self.x * other.y - self.y * other.x`.
    ///
    /// Positive if `other` lies counter-clockwise of `self`.
    pub fn perp_dot(self, other: Self) -> T
    where
        T: Number,
    {
        let ([x1, y1], [x2, y2]) = (self.0, other.0);
        x1 * y2 - y1 * x2
    }
}

impl<T> Vector<T, 3> {
    /// Drops the Z element.
    pub fn truncate(self) -> Vector<T, 2> {
        let [x, y, _] = self.into_array();
        [x, y].into()
    }

    /// Adds `value` as the fourth element.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numkit::*;
    /// let v = vec3(-1.0, 2.0, 3.5).extend(1.0);
    /// assert_eq!(v, vec4(-1.0, 2.0, 3.5, 1.0));
    /// ```
    pub fn extend(self, value: T) -> Vector<T, 4> {
        let [x, y, z] = self.into_array();
        [x, y, z, value].into()
    }

    /// Computes the right-handed cross product of `self` and `other`.
    ///
    /// The result is perpendicular to both inputs. Swapping the arguments negates it.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numkit::*;
    /// assert_eq!(Vec3d::X.cross(Vec3d::Y), Vec3d::Z);
    /// assert_eq!(Vec3d::Y.cross(Vec3d::X), -Vec3d::Z);
    /// ```
    pub fn cross(self, other: Self) -> Self
    where
        T: Number,
    {
        let ([x1, y1, z1], [x2, y2, z2]) = (self.0, other.0);
        Vector([y1 * z2 - z1 * y2, z1 * x2 - x1 * z2, x1 * y2 - y1 * x2])
    }
}

impl<T> Vector<T, 4> {
    /// Drops the W element.
    ///
    /// This discards the homogeneous coordinate without dividing by it.
    pub fn truncate(self) -> Vector<T, 3> {
        let [x, y, z, _] = self.into_array();
        [x, y, z].into()
    }
}

impl<T, const N: usize> Default for Vector<T, N>
where
    T: Default,
{
    #[inline]
    fn default() -> Self {
        Self::from_fn(|_| T::default())
    }
}

impl<T, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(value: [T; N]) -> Self {
        Self(value)
    }
}

impl<T, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(value: Vector<T, N>) -> Self {
        value.0
    }
}

impl<T, const N: usize> fmt::Debug for Vector<T, N>
where
    T: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut tup = f.debug_tuple("");
        for elem in &self.0 {
            tup.field(elem);
        }
        tup.finish()
    }
}

impl<T, const N: usize> fmt::Display for Vector<T, N>
where
    T: fmt::Display,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, elem) in self.0.iter().enumerate() {
            if i != 0 {
                write!(f, ", ")?;
            }
            fmt::Display::fmt(elem, f)?;
        }
        write!(f, ")")
    }
}

impl<T, const N: usize> AsRef<[T]> for Vector<T, N> {
    #[inline]
    fn as_ref(&self) -> &[T] {
        &self.0
    }
}

impl<T, const N: usize> AsMut<[T]> for Vector<T, N> {
    #[inline]
    fn as_mut(&mut self) -> &mut [T] {
        &mut self.0
    }
}

/// Constructs a [`Vec2`] from its two elements.
#[inline]
pub const fn vec2<T>(x: T, y: T) -> Vec2<T> {
    Vector([x, y])
}

/// Constructs a [`Vec3`] from its three elements.
#[inline]
pub const fn vec3<T>(x: T, y: T, z: T) -> Vec3<T> {
    Vector([x, y, z])
}

/// Constructs a [`Vec4`] from its four elements.
#[inline]
pub const fn vec4<T>(x: T, y: T, z: T, w: T) -> Vec4<T> {
    Vector([x, y, z, w])
}
