//! C ABI over the [`f64`] vectors and matrices.
//!
//! Every function takes its operands as `*const` pointers and writes its result through a `*mut`
//! output pointer, returning a [`Status`]. Any null pointer yields [`Status::NullPointer`] and
//! all pointers are checked before anything is computed. On any error the output is left
//! untouched.
//!
//! Vectors are passed as `double[N]` and matrices as row-major `double[R][C]`. Function names
//! spell the shape out: `numkit_mat2x3_add` adds two 2x3 matrices, `numkit_mat2x3_mul_mat3x4`
//! multiplies a 2x3 by a 3x4 matrix, `numkit_vec2_mul_mat2x3` multiplies a row vector from the
//! left.

use crate::{approx::ApproxEq, Error, Matrix, Result, Status, Vector};

type Mat<const R: usize, const C: usize> = Matrix<f64, R, C>;
type Vect<const N: usize> = Vector<f64, N>;

/// Copies an operand out of its pointer.
///
/// Operands are read by value so that the output pointer may alias any of them.
///
/// # Safety
///
/// `ptr` must be null or valid for reads.
unsafe fn read<T: Copy>(ptr: *const T) -> Result<T> {
    if ptr.is_null() {
        Err(Error::NullPointer)
    } else {
        Ok(ptr.read())
    }
}

/// Checks the output pointer without forming a reference to it.
fn out_ptr<T>(ptr: *mut T) -> Result<*mut T> {
    if ptr.is_null() {
        Err(Error::NullPointer)
    } else {
        Ok(ptr)
    }
}

/// Runs a unary operation `f(a) -> out`.
///
/// # Safety
///
/// `a` must be null or valid for reads, `out` null or valid for writes. They may overlap.
unsafe fn unary<A: Copy, O>(a: *const A, out: *mut O, f: impl FnOnce(A) -> Result<O>) -> Status {
    let run = || -> Result<()> {
        let a = read(a)?;
        let out = out_ptr(out)?;
        let value = f(a)?;
        out.write(value);
        Ok(())
    };
    run().into()
}

/// Runs a binary operation `f(a, b) -> out`.
///
/// # Safety
///
/// `a` and `b` must be null or valid for reads, `out` null or valid for writes. They may overlap.
unsafe fn binary<A: Copy, B: Copy, O>(
    a: *const A,
    b: *const B,
    out: *mut O,
    f: impl FnOnce(A, B) -> Result<O>,
) -> Status {
    let run = || -> Result<()> {
        let a = read(a)?;
        let b = read(b)?;
        let out = out_ptr(out)?;
        let value = f(a, b)?;
        out.write(value);
        Ok(())
    };
    run().into()
}

macro_rules! matrix_ffi {
    ($(
        $r:literal x $c:literal {
            add: $add:ident,
            sub: $sub:ident,
            scale: $scale:ident,
            transpose: $transpose:ident,
            equal: $equal:ident,
            mul_vec: $mul_vec:ident,
            vec_mul: $vec_mul:ident,
        }
    )+) => {
        $(
            /// Element-wise sum `out = a + b`.
            ///
            /// # Safety
            ///
            /// Every pointer must be null or valid for the duration of the call.
            #[no_mangle]
            pub unsafe extern "C" fn $add(a: *const Mat<$r, $c>, b: *const Mat<$r, $c>, out: *mut Mat<$r, $c>) -> Status {
                binary(a, b, out, |a, b| Ok(a + b))
            }

            /// Element-wise difference `out = a - b`.
            ///
            /// # Safety
            ///
            /// Every pointer must be null or valid for the duration of the call.
            #[no_mangle]
            pub unsafe extern "C" fn $sub(a: *const Mat<$r, $c>, b: *const Mat<$r, $c>, out: *mut Mat<$r, $c>) -> Status {
                binary(a, b, out, |a, b| Ok(a - b))
            }

            /// Scaling `out = a * factor`.
            ///
            /// # Safety
            ///
            /// Every pointer must be null or valid for the duration of the call.
            #[no_mangle]
            pub unsafe extern "C" fn $scale(a: *const Mat<$r, $c>, factor: f64, out: *mut Mat<$r, $c>) -> Status {
                unary(a, out, |a| Ok(a * factor))
            }

            /// Transpose `out = aᵀ`.
            ///
            /// # Safety
            ///
            /// Every pointer must be null or valid for the duration of the call.
            #[no_mangle]
            pub unsafe extern "C" fn $transpose(a: *const Mat<$r, $c>, out: *mut Mat<$c, $r>) -> Status {
                unary(a, out, |a| Ok(a.transpose()))
            }

            /// Epsilon equality of every element.
            ///
            /// # Safety
            ///
            /// Every pointer must be null or valid for the duration of the call.
            #[no_mangle]
            pub unsafe extern "C" fn $equal(a: *const Mat<$r, $c>, b: *const Mat<$r, $c>, out: *mut bool) -> Status {
                binary(a, b, out, |a, b| Ok(a.approx_eq(&b)))
            }

            /// Right multiplication by a column vector `out = a * v`.
            ///
            /// # Safety
            ///
            /// Every pointer must be null or valid for the duration of the call.
            #[no_mangle]
            pub unsafe extern "C" fn $mul_vec(a: *const Mat<$r, $c>, v: *const Vect<$c>, out: *mut Vect<$r>) -> Status {
                binary(a, v, out, |a, v| Ok(a * v))
            }

            /// Left multiplication by a row vector `out = v * a`.
            ///
            /// # Safety
            ///
            /// Every pointer must be null or valid for the duration of the call.
            #[no_mangle]
            pub unsafe extern "C" fn $vec_mul(v: *const Vect<$r>, a: *const Mat<$r, $c>, out: *mut Vect<$c>) -> Status {
                binary(v, a, out, |v, a| Ok(v * a))
            }
        )+
    };
}

matrix_ffi! {
    2 x 2 {
        add: numkit_mat2x2_add,
        sub: numkit_mat2x2_sub,
        scale: numkit_mat2x2_scale,
        transpose: numkit_mat2x2_transpose,
        equal: numkit_mat2x2_equal,
        mul_vec: numkit_mat2x2_mul_vec2,
        vec_mul: numkit_vec2_mul_mat2x2,
    }
    2 x 3 {
        add: numkit_mat2x3_add,
        sub: numkit_mat2x3_sub,
        scale: numkit_mat2x3_scale,
        transpose: numkit_mat2x3_transpose,
        equal: numkit_mat2x3_equal,
        mul_vec: numkit_mat2x3_mul_vec3,
        vec_mul: numkit_vec2_mul_mat2x3,
    }
    2 x 4 {
        add: numkit_mat2x4_add,
        sub: numkit_mat2x4_sub,
        scale: numkit_mat2x4_scale,
        transpose: numkit_mat2x4_transpose,
        equal: numkit_mat2x4_equal,
        mul_vec: numkit_mat2x4_mul_vec4,
        vec_mul: numkit_vec2_mul_mat2x4,
    }
    3 x 2 {
        add: numkit_mat3x2_add,
        sub: numkit_mat3x2_sub,
        scale: numkit_mat3x2_scale,
        transpose: numkit_mat3x2_transpose,
        equal: numkit_mat3x2_equal,
        mul_vec: numkit_mat3x2_mul_vec2,
        vec_mul: numkit_vec3_mul_mat3x2,
    }
    3 x 3 {
        add: numkit_mat3x3_add,
        sub: numkit_mat3x3_sub,
        scale: numkit_mat3x3_scale,
        transpose: numkit_mat3x3_transpose,
        equal: numkit_mat3x3_equal,
        mul_vec: numkit_mat3x3_mul_vec3,
        vec_mul: numkit_vec3_mul_mat3x3,
    }
    3 x 4 {
        add: numkit_mat3x4_add,
        sub: numkit_mat3x4_sub,
        scale: numkit_mat3x4_scale,
        transpose: numkit_mat3x4_transpose,
        equal: numkit_mat3x4_equal,
        mul_vec: numkit_mat3x4_mul_vec4,
        vec_mul: numkit_vec3_mul_mat3x4,
    }
    4 x 2 {
        add: numkit_mat4x2_add,
        sub: numkit_mat4x2_sub,
        scale: numkit_mat4x2_scale,
        transpose: numkit_mat4x2_transpose,
        equal: numkit_mat4x2_equal,
        mul_vec: numkit_mat4x2_mul_vec2,
        vec_mul: numkit_vec4_mul_mat4x2,
    }
    4 x 3 {
        add: numkit_mat4x3_add,
        sub: numkit_mat4x3_sub,
        scale: numkit_mat4x3_scale,
        transpose: numkit_mat4x3_transpose,
        equal: numkit_mat4x3_equal,
        mul_vec: numkit_mat4x3_mul_vec3,
        vec_mul: numkit_vec4_mul_mat4x3,
    }
    4 x 4 {
        add: numkit_mat4x4_add,
        sub: numkit_mat4x4_sub,
        scale: numkit_mat4x4_scale,
        transpose: numkit_mat4x4_transpose,
        equal: numkit_mat4x4_equal,
        mul_vec: numkit_mat4x4_mul_vec4,
        vec_mul: numkit_vec4_mul_mat4x4,
    }
}

macro_rules! matrix_mul_ffi {
    ($($m:literal x $n:literal * $n2:literal x $p:literal => $name:ident;)+) => {
        $(
            /// Matrix product `out = a * b`.
            ///
            /// # Safety
            ///
            /// Every pointer must be null or valid for the duration of the call.
            #[no_mangle]
            pub unsafe extern "C" fn $name(a: *const Mat<$m, $n>, b: *const Mat<$n2, $p>, out: *mut Mat<$m, $p>) -> Status {
                binary(a, b, out, |a, b| Ok(a * b))
            }
        )+
    };
}

matrix_mul_ffi! {
    2 x 2 * 2 x 2 => numkit_mat2x2_mul_mat2x2;
    2 x 2 * 2 x 3 => numkit_mat2x2_mul_mat2x3;
    2 x 2 * 2 x 4 => numkit_mat2x2_mul_mat2x4;
    2 x 3 * 3 x 2 => numkit_mat2x3_mul_mat3x2;
    2 x 3 * 3 x 3 => numkit_mat2x3_mul_mat3x3;
    2 x 3 * 3 x 4 => numkit_mat2x3_mul_mat3x4;
    2 x 4 * 4 x 2 => numkit_mat2x4_mul_mat4x2;
    2 x 4 * 4 x 3 => numkit_mat2x4_mul_mat4x3;
    2 x 4 * 4 x 4 => numkit_mat2x4_mul_mat4x4;
    3 x 2 * 2 x 2 => numkit_mat3x2_mul_mat2x2;
    3 x 2 * 2 x 3 => numkit_mat3x2_mul_mat2x3;
    3 x 2 * 2 x 4 => numkit_mat3x2_mul_mat2x4;
    3 x 3 * 3 x 2 => numkit_mat3x3_mul_mat3x2;
    3 x 3 * 3 x 3 => numkit_mat3x3_mul_mat3x3;
    3 x 3 * 3 x 4 => numkit_mat3x3_mul_mat3x4;
    3 x 4 * 4 x 2 => numkit_mat3x4_mul_mat4x2;
    3 x 4 * 4 x 3 => numkit_mat3x4_mul_mat4x3;
    3 x 4 * 4 x 4 => numkit_mat3x4_mul_mat4x4;
    4 x 2 * 2 x 2 => numkit_mat4x2_mul_mat2x2;
    4 x 2 * 2 x 3 => numkit_mat4x2_mul_mat2x3;
    4 x 2 * 2 x 4 => numkit_mat4x2_mul_mat2x4;
    4 x 3 * 3 x 2 => numkit_mat4x3_mul_mat3x2;
    4 x 3 * 3 x 3 => numkit_mat4x3_mul_mat3x3;
    4 x 3 * 3 x 4 => numkit_mat4x3_mul_mat3x4;
    4 x 4 * 4 x 2 => numkit_mat4x4_mul_mat4x2;
    4 x 4 * 4 x 3 => numkit_mat4x4_mul_mat4x3;
    4 x 4 * 4 x 4 => numkit_mat4x4_mul_mat4x4;
}

macro_rules! square_ffi {
    ($($n:literal => $det:ident, $inverse:ident, $trace:ident;)+) => {
        $(
            /// Determinant `out = det(a)`.
            ///
            /// # Safety
            ///
            /// Every pointer must be null or valid for the duration of the call.
            #[no_mangle]
            pub unsafe extern "C" fn $det(a: *const Mat<$n, $n>, out: *mut f64) -> Status {
                unary(a, out, |a| Ok(a.determinant()))
            }

            /// Inverse `out = a⁻¹`. Reports [`Status::SingularMatrix`] if `|det(a)| <= EPSILON`.
            ///
            /// # Safety
            ///
            /// Every pointer must be null or valid for the duration of the call.
            #[no_mangle]
            pub unsafe extern "C" fn $inverse(a: *const Mat<$n, $n>, out: *mut Mat<$n, $n>) -> Status {
                unary(a, out, |a| a.inverse())
            }

            /// Trace `out = tr(a)`.
            ///
            /// # Safety
            ///
            /// Every pointer must be null or valid for the duration of the call.
            #[no_mangle]
            pub unsafe extern "C" fn $trace(a: *const Mat<$n, $n>, out: *mut f64) -> Status {
                unary(a, out, |a| Ok(a.trace()))
            }
        )+
    };
}

square_ffi! {
    2 => numkit_mat2x2_determinant, numkit_mat2x2_inverse, numkit_mat2x2_trace;
    3 => numkit_mat3x3_determinant, numkit_mat3x3_inverse, numkit_mat3x3_trace;
    4 => numkit_mat4x4_determinant, numkit_mat4x4_inverse, numkit_mat4x4_trace;
}

macro_rules! vector_ffi {
    ($(
        $n:literal {
            add: $add:ident,
            sub: $sub:ident,
            scale: $scale:ident,
            dot: $dot:ident,
            length: $length:ident,
            normalize: $normalize:ident,
            distance: $distance:ident,
            equal: $equal:ident,
            add_scalar: $add_scalar:ident,
            sub_scalar: $sub_scalar:ident,
            length2: $length2:ident,
            distance2: $distance2:ident,
            angle: $angle:ident,
            project: $project:ident,
            reflect: $reflect:ident,
        }
    )+) => {
        $(
            /// Element-wise sum `out = a + b`.
            ///
            /// # Safety
            ///
            /// Every pointer must be null or valid for the duration of the call.
            #[no_mangle]
            pub unsafe extern "C" fn $add(a: *const Vect<$n>, b: *const Vect<$n>, out: *mut Vect<$n>) -> Status {
                binary(a, b, out, |a, b| Ok(a + b))
            }

            /// Element-wise difference `out = a - b`.
            ///
            /// # Safety
            ///
            /// Every pointer must be null or valid for the duration of the call.
            #[no_mangle]
            pub unsafe extern "C" fn $sub(a: *const Vect<$n>, b: *const Vect<$n>, out: *mut Vect<$n>) -> Status {
                binary(a, b, out, |a, b| Ok(a - b))
            }

            /// Scaling `out = a * factor`.
            ///
            /// # Safety
            ///
            /// Every pointer must be null or valid for the duration of the call.
            #[no_mangle]
            pub unsafe extern "C" fn $scale(a: *const Vect<$n>, factor: f64, out: *mut Vect<$n>) -> Status {
                unary(a, out, |a| Ok(a.scale(factor)))
            }

            /// Dot product `out = a · b`.
            ///
            /// # Safety
            ///
            /// Every pointer must be null or valid for the duration of the call.
            #[no_mangle]
            pub unsafe extern "C" fn $dot(a: *const Vect<$n>, b: *const Vect<$n>, out: *mut f64) -> Status {
                binary(a, b, out, |a, b| Ok(a.dot(b)))
            }

            /// Length `out = |a|`.
            ///
            /// # Safety
            ///
            /// Every pointer must be null or valid for the duration of the call.
            #[no_mangle]
            pub unsafe extern "C" fn $length(a: *const Vect<$n>, out: *mut f64) -> Status {
                unary(a, out, |a| Ok(a.length()))
            }

            /// Unit vector `out = a / |a|`. Reports [`Status::InvalidSize`] if `a` has zero length.
            ///
            /// # Safety
            ///
            /// Every pointer must be null or valid for the duration of the call.
            #[no_mangle]
            pub unsafe extern "C" fn $normalize(a: *const Vect<$n>, out: *mut Vect<$n>) -> Status {
                unary(a, out, |a| a.normalize())
            }

            /// Distance `out = |a - b|`.
            ///
            /// # Safety
            ///
            /// Every pointer must be null or valid for the duration of the call.
            #[no_mangle]
            pub unsafe extern "C" fn $distance(a: *const Vect<$n>, b: *const Vect<$n>, out: *mut f64) -> Status {
                binary(a, b, out, |a, b| Ok(a.distance(b)))
            }

            /// Epsilon equality of every element.
            ///
            /// # Safety
            ///
            /// Every pointer must be null or valid for the duration of the call.
            #[no_mangle]
            pub unsafe extern "C" fn $equal(a: *const Vect<$n>, b: *const Vect<$n>, out: *mut bool) -> Status {
                binary(a, b, out, |a, b| Ok(a.approx_eq(&b)))
            }

            /// Adds `scalar` to every element.
            ///
            /// # Safety
            ///
            /// Every pointer must be null or valid for the duration of the call.
            #[no_mangle]
            pub unsafe extern "C" fn $add_scalar(a: *const Vect<$n>, scalar: f64, out: *mut Vect<$n>) -> Status {
                unary(a, out, |a| Ok(a.add_scalar(scalar)))
            }

            /// Subtracts `scalar` from every element.
            ///
            /// # Safety
            ///
            /// Every pointer must be null or valid for the duration of the call.
            #[no_mangle]
            pub unsafe extern "C" fn $sub_scalar(a: *const Vect<$n>, scalar: f64, out: *mut Vect<$n>) -> Status {
                unary(a, out, |a| Ok(a.sub_scalar(scalar)))
            }

            /// Squared length `out = a · a`.
            ///
            /// # Safety
            ///
            /// Every pointer must be null or valid for the duration of the call.
            #[no_mangle]
            pub unsafe extern "C" fn $length2(a: *const Vect<$n>, out: *mut f64) -> Status {
                unary(a, out, |a| Ok(a.length2()))
            }

            /// Squared distance `out = |a - b|²`.
            ///
            /// # Safety
            ///
            /// Every pointer must be null or valid for the duration of the call.
            #[no_mangle]
            pub unsafe extern "C" fn $distance2(a: *const Vect<$n>, b: *const Vect<$n>, out: *mut f64) -> Status {
                binary(a, b, out, |a, b| Ok(a.distance2(b)))
            }

            /// Angle in radians between `a` and `b`. Reports [`Status::InvalidSize`] if either has
            /// zero length.
            ///
            /// # Safety
            ///
            /// Every pointer must be null or valid for the duration of the call.
            #[no_mangle]
            pub unsafe extern "C" fn $angle(a: *const Vect<$n>, b: *const Vect<$n>, out: *mut f64) -> Status {
                binary(a, b, out, |a, b| a.angle_to(b))
            }

            /// Projection of `a` onto `onto`. Reports [`Status::InvalidSize`] if `onto` has zero
            /// length.
            ///
            /// # Safety
            ///
            /// Every pointer must be null or valid for the duration of the call.
            #[no_mangle]
            pub unsafe extern "C" fn $project(a: *const Vect<$n>, onto: *const Vect<$n>, out: *mut Vect<$n>) -> Status {
                binary(a, onto, out, |a, onto| a.project_onto(onto))
            }

            /// Reflection of `a` about the line spanned by `axis`. Reports [`Status::InvalidSize`]
            /// if `axis` has zero length.
            ///
            /// # Safety
            ///
            /// Every pointer must be null or valid for the duration of the call.
            #[no_mangle]
            pub unsafe extern "C" fn $reflect(a: *const Vect<$n>, axis: *const Vect<$n>, out: *mut Vect<$n>) -> Status {
                binary(a, axis, out, |a, axis| a.reflect_about(axis))
            }
        )+
    };
}

vector_ffi! {
    2 {
        add: numkit_vec2_add,
        sub: numkit_vec2_sub,
        scale: numkit_vec2_scale,
        dot: numkit_vec2_dot,
        length: numkit_vec2_length,
        normalize: numkit_vec2_normalize,
        distance: numkit_vec2_distance,
        equal: numkit_vec2_equal,
        add_scalar: numkit_vec2_add_scalar,
        sub_scalar: numkit_vec2_sub_scalar,
        length2: numkit_vec2_length2,
        distance2: numkit_vec2_distance2,
        angle: numkit_vec2_angle,
        project: numkit_vec2_project,
        reflect: numkit_vec2_reflect,
    }
    3 {
        add: numkit_vec3_add,
        sub: numkit_vec3_sub,
        scale: numkit_vec3_scale,
        dot: numkit_vec3_dot,
        length: numkit_vec3_length,
        normalize: numkit_vec3_normalize,
        distance: numkit_vec3_distance,
        equal: numkit_vec3_equal,
        add_scalar: numkit_vec3_add_scalar,
        sub_scalar: numkit_vec3_sub_scalar,
        length2: numkit_vec3_length2,
        distance2: numkit_vec3_distance2,
        angle: numkit_vec3_angle,
        project: numkit_vec3_project,
        reflect: numkit_vec3_reflect,
    }
    4 {
        add: numkit_vec4_add,
        sub: numkit_vec4_sub,
        scale: numkit_vec4_scale,
        dot: numkit_vec4_dot,
        length: numkit_vec4_length,
        normalize: numkit_vec4_normalize,
        distance: numkit_vec4_distance,
        equal: numkit_vec4_equal,
        add_scalar: numkit_vec4_add_scalar,
        sub_scalar: numkit_vec4_sub_scalar,
        length2: numkit_vec4_length2,
        distance2: numkit_vec4_distance2,
        angle: numkit_vec4_angle,
        project: numkit_vec4_project,
        reflect: numkit_vec4_reflect,
    }
}

/// Cross product `out = a × b`.
///
/// # Safety
///
/// Every pointer must be null or valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn numkit_vec3_cross(a: *const Vect<3>, b: *const Vect<3>, out: *mut Vect<3>) -> Status {
    binary(a, b, out, |a, b| Ok(a.cross(b)))
}

#[cfg(test)]
mod tests {
    use std::{f64::consts::FRAC_PI_2, ptr};

    use crate::{assert_approx_eq, vec2, vec3, Mat2d, Mat2x3d, Mat3d, Mat3x2d, Mat3x4d, Vec2d, Vec3d, Vec4d};

    use super::*;

    #[test]
    fn null_pointers() {
        let a = Mat3d::IDENTITY;
        let mut out = Mat3d::ZERO;
        unsafe {
            assert_eq!(numkit_mat3x3_add(ptr::null(), &a, &mut out), Status::NullPointer);
            assert_eq!(numkit_mat3x3_add(&a, ptr::null(), &mut out), Status::NullPointer);
            assert_eq!(numkit_mat3x3_add(&a, &a, ptr::null_mut()), Status::NullPointer);
            assert_eq!(numkit_mat3x3_inverse(&a, ptr::null_mut()), Status::NullPointer);
            assert_eq!(numkit_vec3_cross(ptr::null(), ptr::null(), ptr::null_mut()), Status::NullPointer);
        }
        assert_eq!(out, Mat3d::ZERO);
    }

    #[test]
    fn results() {
        let a = Mat3d::from_rows([[1.0, 2.0, 3.0], [0.0, 1.0, 4.0], [5.0, 6.0, 0.0]]);
        let mut inv = Mat3d::ZERO;
        let mut det = 0.0;
        unsafe {
            assert_eq!(numkit_mat3x3_inverse(&a, &mut inv), Status::Success);
            assert_eq!(numkit_mat3x3_determinant(&a, &mut det), Status::Success);
        }
        assert_eq!(inv, a.inverse().unwrap());
        assert_eq!(det, 1.0);

        let b = Mat2x3d::from_rows([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]]);
        let mut t = Mat3x2d::ZERO;
        let mut prod = Matrix::<f64, 2, 4>::ZERO;
        unsafe {
            assert_eq!(numkit_mat2x3_transpose(&b, &mut t), Status::Success);
            assert_eq!(numkit_mat2x3_mul_mat3x4(&b, &Mat3x4d::IDENTITY, &mut prod), Status::Success);
        }
        assert_eq!(t, b.transpose());
        assert_eq!(prod, b.resize::<2, 4>());

        let mut cross = Vec3d::ZERO;
        let mut equal = false;
        unsafe {
            assert_eq!(
                numkit_vec3_cross(&vec3(1.0, 2.0, 3.0), &vec3(4.0, 5.0, 6.0), &mut cross),
                Status::Success
            );
            assert_eq!(numkit_vec3_equal(&cross, &vec3(-3.0, 6.0, -3.0), &mut equal), Status::Success);
        }
        assert!(equal);
    }

    #[test]
    fn errors_leave_output_untouched() {
        let singular = Mat3d::ZERO;
        let mut out = Mat3d::from_diagonal([7.0, 7.0, 7.0]);
        let status = unsafe { numkit_mat3x3_inverse(&singular, &mut out) };
        assert_eq!(status, Status::SingularMatrix);
        assert_eq!(out, Mat3d::from_diagonal([7.0, 7.0, 7.0]));

        let mut unit = vec3(9.0, 9.0, 9.0);
        let status = unsafe { numkit_vec3_normalize(&Vec3d::ZERO, &mut unit) };
        assert_eq!(status, Status::InvalidSize);
        assert_eq!(unit, vec3(9.0, 9.0, 9.0));

        let a = vec2(3.0, 4.0);
        let mut v = vec2(9.0, 9.0);
        let mut angle = -1.0;
        unsafe {
            assert_eq!(numkit_vec2_project(&a, &Vec2d::ZERO, &mut v), Status::InvalidSize);
            assert_eq!(numkit_vec2_reflect(&a, &Vec2d::ZERO, &mut v), Status::InvalidSize);
            assert_eq!(numkit_vec4_angle(&Vec4d::X, &Vec4d::ZERO, &mut angle), Status::InvalidSize);
        }
        assert_eq!(v, vec2(9.0, 9.0));
        assert_eq!(angle, -1.0);
    }

    #[test]
    fn vector_operations() {
        let a = vec2(3.0, 4.0);
        let b = vec2(2.0, 0.0);
        let mut v = Vec2d::ZERO;
        let mut x = 0.0;
        unsafe {
            assert_eq!(numkit_vec2_add_scalar(&a, 1.0, &mut v), Status::Success);
            assert_eq!(v, vec2(4.0, 5.0));
            assert_eq!(numkit_vec2_sub_scalar(&a, 1.0, &mut v), Status::Success);
            assert_eq!(v, vec2(2.0, 3.0));
            assert_eq!(numkit_vec2_length2(&a, &mut x), Status::Success);
            assert_eq!(x, 25.0);
            assert_eq!(numkit_vec2_distance2(&a, &b, &mut x), Status::Success);
            assert_eq!(x, 17.0);
            assert_eq!(numkit_vec2_project(&a, &b, &mut v), Status::Success);
            assert_eq!(v, vec2(3.0, 0.0));
            assert_eq!(numkit_vec2_reflect(&a, &b, &mut v), Status::Success);
            assert_eq!(v, vec2(3.0, -4.0));
            assert_eq!(numkit_vec4_angle(&Vec4d::X, &Vec4d::W, &mut x), Status::Success);
        }
        assert_approx_eq!(x, FRAC_PI_2);
    }

    #[test]
    fn vector_null_pointers() {
        let a = vec3(1.0, 2.0, 3.0);
        let mut v = vec3(9.0, 9.0, 9.0);
        let mut x = 9.0;
        unsafe {
            assert_eq!(numkit_vec3_add_scalar(ptr::null(), 1.0, &mut v), Status::NullPointer);
            assert_eq!(numkit_vec3_sub_scalar(&a, 1.0, ptr::null_mut()), Status::NullPointer);
            assert_eq!(numkit_vec3_length2(ptr::null(), &mut x), Status::NullPointer);
            assert_eq!(numkit_vec3_distance2(&a, ptr::null(), &mut x), Status::NullPointer);
            assert_eq!(numkit_vec3_angle(&a, &a, ptr::null_mut()), Status::NullPointer);
            assert_eq!(numkit_vec3_project(ptr::null(), &a, &mut v), Status::NullPointer);
            assert_eq!(numkit_vec3_reflect(&a, ptr::null(), &mut v), Status::NullPointer);
        }
        assert_eq!(v, vec3(9.0, 9.0, 9.0));
        assert_eq!(x, 9.0);
    }

    #[test]
    fn output_may_alias_operands() {
        let mut m = Mat2d::from_rows([[1.0, 2.0], [3.0, 4.0]]);
        let q = Mat2d::IDENTITY;
        let p = ptr::addr_of_mut!(m);
        let status = unsafe { numkit_mat2x2_add(p, &q, p) };
        assert_eq!(status, Status::Success);
        assert_eq!(m, Mat2d::from_rows([[2.0, 2.0], [3.0, 5.0]]));

        let p = ptr::addr_of_mut!(m);
        let status = unsafe { numkit_mat2x2_mul_mat2x2(p, p, p) };
        assert_eq!(status, Status::Success);
        assert_eq!(m, Mat2d::from_rows([[10.0, 14.0], [21.0, 31.0]]));

        let mut v = vec3(0.0, 3.0, 4.0);
        let pv = ptr::addr_of_mut!(v);
        let status = unsafe { numkit_vec3_normalize(pv, pv) };
        assert_eq!(status, Status::Success);
        assert_eq!(v, vec3(0.0, 0.6, 0.8));
    }
}
