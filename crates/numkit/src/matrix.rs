use std::{array, fmt, slice};

use crate::{Number, One, Vector, Zero};

mod determinant;
mod ops;

// Shape aliases. `MatRxC` has `R` rows and `C` columns; the square ones drop the `xC`.

pub type Mat2<T> = Matrix<T, 2, 2>;
pub type Mat3<T> = Matrix<T, 3, 3>;
pub type Mat4<T> = Matrix<T, 4, 4>;
pub type Mat2x3<T> = Matrix<T, 2, 3>;
pub type Mat2x4<T> = Matrix<T, 2, 4>;
pub type Mat3x2<T> = Matrix<T, 3, 2>;
pub type Mat3x4<T> = Matrix<T, 3, 4>;
pub type Mat4x2<T> = Matrix<T, 4, 2>;
pub type Mat4x3<T> = Matrix<T, 4, 3>;

/// A 2x2 matrix with [`f64`] elements.
pub type Mat2d = Mat2<f64>;
/// A 3x3 matrix with [`f64`] elements.
pub type Mat3d = Mat3<f64>;
/// A 4x4 matrix with [`f64`] elements.
pub type Mat4d = Mat4<f64>;
/// A 2x3 matrix with [`f64`] elements.
pub type Mat2x3d = Mat2x3<f64>;
/// A 2x4 matrix with [`f64`] elements.
pub type Mat2x4d = Mat2x4<f64>;
/// A 3x2 matrix with [`f64`] elements.
pub type Mat3x2d = Mat3x2<f64>;
/// A 3x4 matrix with [`f64`] elements.
pub type Mat3x4d = Mat3x4<f64>;
/// A 4x2 matrix with [`f64`] elements.
pub type Mat4x2d = Mat4x2<f64>;
/// A 4x3 matrix with [`f64`] elements.
pub type Mat4x3d = Mat4x3<f64>;

/// Single-precision [`Mat2`].
pub type Mat2f = Mat2<f32>;
/// Single-precision [`Mat3`].
pub type Mat3f = Mat3<f32>;
/// Single-precision [`Mat4`].
pub type Mat4f = Mat4<f32>;

/// A row-major matrix with `R` rows and `C` columns, and element type `T`.
///
/// The elements are stored as `R` contiguous rows of `C` elements each, with no padding, so a
/// `Matrix<f64, 3, 4>` has the same layout as `[f64; 12]`.
///
/// Matrices are usually written out with [`Matrix::from_rows`], computed with
/// [`Matrix::from_fn`], or produced by one of the transform generators in
/// [`transform`](crate::transform). [`Matrix::ZERO`] and [`Matrix::IDENTITY`] are constants.
///
/// `mat[(row, col)]` reads or writes a single element (0-based, panics when out of range), and
/// [`Matrix::get`] is the checked variant.
///
/// ```
/// # use numkit::*;
/// let mut mat = Mat2x3d::ZERO;
/// mat[(1, 2)] = 4.0;
/// assert_eq!(mat.row(1), vec3(0.0, 0.0, 4.0));
/// assert_eq!(mat.get(2, 0), None);
/// ```
#[derive(Clone, Copy, Hash)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize>([[T; C]; R]);

unsafe impl<T: bytemuck::Zeroable, const R: usize, const C: usize> bytemuck::Zeroable for Matrix<T, R, C> {}
unsafe impl<T: bytemuck::Pod, const R: usize, const C: usize> bytemuck::Pod for Matrix<T, R, C> {}

impl<T, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The number of rows.
    pub const ROWS: usize = R;
    /// The number of columns.
    pub const COLUMNS: usize = C;

    /// Builds a matrix from `R` rows, each an array or a [`Vector`] of length `C`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numkit::*;
    /// let m = Matrix::from_rows([vec2(1.0, 2.0), vec2(3.0, 4.0)]);
    /// assert_eq!(m, Matrix::from_columns([[1.0, 3.0], [2.0, 4.0]]));
    /// ```
    pub fn from_rows<U: Into<Vector<T, C>>>(rows: [U; R]) -> Self {
        Self(rows.map(|row| row.into().into_array()))
    }

    /// Builds a matrix from `C` columns of length `R`.
    pub fn from_columns<U: Into<Vector<T, R>>>(columns: [U; C]) -> Self {
        Matrix::<T, C, R>::from_rows(columns).transpose()
    }

    /// Computes every element as `f(row, col)`, walking the rows top to bottom.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numkit::*;
    /// let mat = Matrix::from_fn(|row, col| (row * 10 + col) as f64);
    /// assert_eq!(mat, Matrix::from_rows([
    ///     [ 0.0,  1.0,  2.0],
    ///     [10.0, 11.0, 12.0],
    /// ]));
    /// ```
    pub fn from_fn<F>(mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        Self(array::from_fn(|row| array::from_fn(|col| f(row, col))))
    }

    /// Transforms every element with `f`.
    pub fn map<F, U>(self, mut f: F) -> Matrix<U, R, C>
    where
        F: FnMut(T) -> U,
    {
        Matrix(self.0.map(|row| row.map(&mut f)))
    }

    /// Returns the matrix with element `(i, j)` moved to `(j, i)`.
    ///
    /// An `R`x`C` matrix becomes a `C`x`R` one.
    pub fn transpose(self) -> Matrix<T, C, R> {
        // Pulling one element from every row yields one column.
        let mut rows = self.0.map(|row| row.into_iter());
        Matrix(array::from_fn(|_| {
            array::from_fn(|row| rows[row].next().unwrap())
        }))
    }

    /// Checked element access; [`None`] when `row >= R` or `col >= C`.
    pub fn get(&self, row: usize, col: usize) -> Option<&T> {
        self.0.get(row)?.get(col)
    }

    /// Returns row `index` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `index >= R`.
    pub fn row(&self, index: usize) -> Vector<T, C>
    where
        T: Copy,
    {
        self.0[index].into()
    }

    /// Returns column `index` as a [`Vector`].
    ///
    /// # Panics
    ///
    /// Panics if `index >= C`.
    pub fn column(&self, index: usize) -> Vector<T, R>
    where
        T: Copy,
    {
        Vector::from_fn(|row| self.0[row][index])
    }

    /// Returns the rows of this matrix as arrays.
    #[inline]
    pub const fn as_rows(&self) -> &[[T; C]; R] {
        &self.0
    }

    /// Returns all `R * C` elements in row-major order.
    ///
    /// Row `i` occupies `[i * C .. (i + 1) * C]`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use numkit::*;
    /// let mat = Matrix::from_rows([[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(mat.as_flat_slice(), &[1.0, 2.0, 3.0, 4.0]);
    /// ```
    #[inline]
    pub fn as_flat_slice(&self) -> &[T] {
        // Safety: `[[T; C]; R]` is `R * C` contiguous `T`s without padding.
        unsafe { slice::from_raw_parts(self.0.as_ptr().cast::<T>(), R * C) }
    }

    /// Copies `self` into the top-left corner of an `R2`x`C2` zero matrix.
    ///
    /// Rows and columns that do not fit are cut off. Embedding a 3x3 linear transform in a 4x4
    /// homogeneous one also needs the lower-right 1, which the transform module sets itself.
    pub fn resize<const R2: usize, const C2: usize>(self) -> Matrix<T, R2, C2>
    where
        T: Zero + Copy,
    {
        Matrix::from_fn(|row, col| {
            if row < R && col < C {
                self.0[row][col]
            } else {
                T::ZERO
            }
        })
    }
}

impl<T: fmt::Debug, const R: usize, const C: usize> fmt::Debug for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        struct FormatRow<'a, T: fmt::Debug>(&'a [T]);
        impl<'a, T: fmt::Debug> fmt::Debug for FormatRow<'a, T> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "[")?;
                for (i, elem) in self.0.iter().enumerate() {
                    if i != 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{:?}", elem)?;
                }
                write!(f, "]")
            }
        }

        let mut list = f.debug_list();
        for row in &self.0 {
            list.entry(&FormatRow(row));
        }
        list.finish()
    }
}

impl<T: Zero + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// All elements zero.
    pub const ZERO: Self = Self([[T::ZERO; C]; R]);
}

impl<T: Zero + One + Copy, const R: usize, const C: usize> Matrix<T, R, C> {
    /// Ones on the main diagonal, zeroes elsewhere.
    ///
    /// Non-square shapes get `min(R, C)` ones.
    pub const IDENTITY: Self = {
        let mut rows = [[T::ZERO; C]; R];
        let mut i = 0;
        while i < R && i < C {
            rows[i][i] = T::ONE;
            i += 1;
        }
        Self(rows)
    };
}

impl<T, const N: usize> Matrix<T, N, N> {
    /// Square matrix with `diag` on the main diagonal and zeroes elsewhere.
    pub fn from_diagonal<D: Into<Vector<T, N>>>(diag: D) -> Self
    where
        T: Zero + Copy,
    {
        let diag = diag.into();
        Self::from_fn(|row, col| if row == col { diag[row] } else { T::ZERO })
    }

    /// Sum of the main diagonal.
    ///
    /// ```
    /// # use numkit::*;
    /// assert_eq!(Mat3d::from_rows([[1.0, 9.0, 9.0], [9.0, 2.0, 9.0], [9.0, 9.0, 3.0]]).trace(), 6.0);
    /// ```
    pub fn trace(&self) -> T
    where
        T: Number,
    {
        (0..N).fold(T::ZERO, |acc, i| acc + self.0[i][i])
    }
}

impl<T, const R: usize, const C: usize> Default for Matrix<T, R, C>
where
    T: Default,
{
    fn default() -> Self {
        Self::from_fn(|_, _| T::default())
    }
}

impl<T, const R: usize, const C: usize> From<[[T; C]; R]> for Matrix<T, R, C> {
    #[inline]
    fn from(rows: [[T; C]; R]) -> Self {
        Self(rows)
    }
}

impl<T, const R: usize, const C: usize> From<Matrix<T, R, C>> for [[T; C]; R] {
    #[inline]
    fn from(mat: Matrix<T, R, C>) -> Self {
        mat.0
    }
}

#[cfg(test)]
mod tests {
    use crate::{vec2, vec3, Mat2x3d, Mat3x2d};

    use super::*;

    #[test]
    fn from_rows_columns() {
        assert_eq!(
            Mat2x3::from_rows([[1, 2, 3], [4, 5, 6]]),
            Mat2x3::from_columns([[1, 4], [2, 5], [3, 6]]),
        );
        assert_eq!(
            Mat2x3d::from_rows([vec3(1.0, 2.0, 3.0), vec3(4.0, 5.0, 6.0)]).as_flat_slice(),
            &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0],
        );
    }

    #[test]
    fn rows_and_columns() {
        let mat = Mat3x2d::from_rows([[1.0, 2.0], [3.0, 4.0], [5.0, 6.0]]);
        assert_eq!(mat.row(1), vec2(3.0, 4.0));
        assert_eq!(mat.column(1), vec3(2.0, 4.0, 6.0));
        assert_eq!(mat.as_rows()[2], [5.0, 6.0]);
        assert_eq!(Mat3x2d::ROWS, 3);
        assert_eq!(Mat3x2d::COLUMNS, 2);
    }

    #[test]
    fn transpose() {
        let mat = Mat2x3d::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let t: Mat3x2d = mat.transpose();
        assert_eq!(t, Matrix::from_rows([[1.0, 4.0], [2.0, 5.0], [3.0, 6.0]]));
        assert_eq!(t.transpose(), mat);
        assert_eq!(Mat4d::IDENTITY.transpose(), Mat4d::IDENTITY);
    }

    #[test]
    fn diagonal() {
        let mat = Matrix::from_diagonal([1, 2]);

        #[rustfmt::skip]
        assert_eq!(mat, Matrix::from_rows([
            [1, 0],
            [0, 2],
        ]));

        assert_eq!(mat.trace(), 3);
    }

    #[test]
    fn fmt() {
        let mat = Matrix::from_rows([[0, 1], [2, 3]]);

        // Natural writing order (row-wise) for debug output.
        assert_eq!(format!("{:?}", mat), "[[0, 1], [2, 3]]");

        // `#` modifier prints each row in its own line, but not each individual element.
        assert_eq!(
            format!("{:#?}", mat),
            "
[
    [0, 1],
    [2, 3],
]
"
            .trim()
        );
    }

    #[test]
    fn constants() {
        assert_eq!(format!("{:?}", Mat2d::ZERO), "[[0.0, 0.0], [0.0, 0.0]]");
        assert_eq!(format!("{:?}", Mat2d::IDENTITY), "[[1.0, 0.0], [0.0, 1.0]]");
        assert_eq!(
            Mat2x3d::IDENTITY,
            Matrix::from_rows([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0]])
        );
        assert_eq!(Mat4d::IDENTITY.trace(), 4.0);
    }

    #[rustfmt::skip]
    #[test]
    fn resize() {
        let mat = Matrix::from_rows([
            [1, 2],
            [3, 4],
        ]);

        let larger = mat.resize::<3, 3>();
        assert_eq!(larger, Matrix::from_rows([
            [1, 2, 0],
            [3, 4, 0],
            [0, 0, 0],
        ]));

        let smaller = mat.resize::<1, 2>();
        assert_eq!(smaller, Matrix::from_rows([
            [1, 2]
        ]));
    }
}
