// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Mul, MulAssign};

use crate::angle::Angle;
use crate::error::MathError;
use crate::quat::Quat;
use crate::scalar::{self, Scalar};
use crate::vec3::Vec3;
use crate::vec4::Vec4;

/// 4×4 matrix, the homogeneous form of a 3D transform or projection.
///
/// - Elements are named `mRC` (row, column); the layout is conceptually
///   row-major, and [`Mat4::column_major_array`] produces GPU upload order.
/// - Vectors are columns multiplied on the right: `a * b` applies `b` first.
/// - Translation occupies the fourth column (`m14`, `m24`, `m34`).
///
/// # Examples
/// ```
/// use lintra::dprec::{Mat4, Vec3};
/// let t = Mat4::from_translation(5.0, -3.0, 2.0);
/// let p = t.transform_point(Vec3::new(2.0, 4.0, -1.0));
/// assert_eq!(p, Vec3::new(7.0, 1.0, 1.0));
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4<T: Scalar> {
    /// Row 1, column 1.
    pub m11: T,
    /// Row 1, column 2.
    pub m12: T,
    /// Row 1, column 3.
    pub m13: T,
    /// Row 1, column 4.
    pub m14: T,
    /// Row 2, column 1.
    pub m21: T,
    /// Row 2, column 2.
    pub m22: T,
    /// Row 2, column 3.
    pub m23: T,
    /// Row 2, column 4.
    pub m24: T,
    /// Row 3, column 1.
    pub m31: T,
    /// Row 3, column 2.
    pub m32: T,
    /// Row 3, column 3.
    pub m33: T,
    /// Row 3, column 4.
    pub m34: T,
    /// Row 4, column 1.
    pub m41: T,
    /// Row 4, column 2.
    pub m42: T,
    /// Row 4, column 3.
    pub m43: T,
    /// Row 4, column 4.
    pub m44: T,
}

impl<T: Scalar> Mat4<T> {
    /// Creates a matrix from elements listed row by row.
    #[rustfmt::skip]
    pub const fn new(
        m11: T, m12: T, m13: T, m14: T,
        m21: T, m22: T, m23: T, m24: T,
        m31: T, m32: T, m33: T, m34: T,
        m41: T, m42: T, m43: T, m44: T,
    ) -> Self {
        Self {
            m11, m12, m13, m14,
            m21, m22, m23, m24,
            m31, m32, m33, m34,
            m41, m42, m43, m44,
        }
    }

    /// The all-zero matrix.
    pub const fn zero() -> Self {
        Self::from_row_major_array([T::ZERO; 16])
    }

    /// The identity matrix.
    #[rustfmt::skip]
    pub const fn identity() -> Self {
        let (o, l) = (T::ZERO, T::ONE);
        Self::new(
            l, o, o, o,
            o, l, o, o,
            o, o, l, o,
            o, o, o, l,
        )
    }

    /// Translation by `(x, y, z)`.
    #[rustfmt::skip]
    pub const fn from_translation(x: T, y: T, z: T) -> Self {
        let (o, l) = (T::ZERO, T::ONE);
        Self::new(
            l, o, o, x,
            o, l, o, y,
            o, o, l, z,
            o, o, o, l,
        )
    }

    /// Non-uniform scale by `(x, y, z)`.
    #[rustfmt::skip]
    pub const fn from_scale(x: T, y: T, z: T) -> Self {
        let (o, l) = (T::ZERO, T::ONE);
        Self::new(
            x, o, o, o,
            o, y, o, o,
            o, o, z, o,
            o, o, o, l,
        )
    }

    /// Rotation of `angle` about `axis` (right-hand rule). The axis is
    /// normalised first.
    #[rustfmt::skip]
    pub fn from_rotation(angle: Angle<T>, axis: Vec3<T>) -> Self {
        let (o, l) = (T::ZERO, T::ONE);
        let Vec3 { x, y, z } = axis.unit();
        let cs = scalar::cos(angle);
        let sn = scalar::sin(angle);
        let t = l - cs;
        Self::new(
            x * x * t + cs,     y * x * t - z * sn, z * x * t + y * sn, o,
            x * y * t + z * sn, y * y * t + cs,     z * y * t - x * sn, o,
            x * z * t - y * sn, y * z * t + x * sn, z * z * t + cs,     o,
            o, o, o, l,
        )
    }

    /// Orthographic projection of the box `[left, right] × [bottom, top] ×
    /// [-near, -far]` onto the `[-1, 1]³` cube.
    #[rustfmt::skip]
    pub fn ortho(left: T, right: T, top: T, bottom: T, near: T, far: T) -> Self {
        let (o, l, two) = (T::ZERO, T::ONE, T::TWO);
        Self::new(
            two / (right - left), o, o, (right + left) / (left - right),
            o, two / (top - bottom), o, (top + bottom) / (bottom - top),
            o, o, two / (near - far), (far + near) / (near - far),
            o, o, o, l,
        )
    }

    /// Perspective projection of the frustum whose near plane spans
    /// `[left, right] × [bottom, top]` at distance `near`. After the divide by
    /// `w`, the frustum maps onto the `[-1, 1]³` cube.
    ///
    /// Note the argument order differs from [`Mat4::ortho`].
    #[rustfmt::skip]
    pub fn perspective(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let (o, two) = (T::ZERO, T::TWO);
        Self::new(
            two * near / (right - left), o, (right + left) / (right - left), o,
            o, two * near / (top - bottom), (top + bottom) / (top - bottom), o,
            o, o, (far + near) / (near - far), two * far * near / (near - far),
            o, o, -T::ONE, o,
        )
    }

    /// Affine transform whose columns are the given basis vectors and
    /// translation.
    #[rustfmt::skip]
    pub const fn transformation(
        orient_x: Vec3<T>,
        orient_y: Vec3<T>,
        orient_z: Vec3<T>,
        translation: Vec3<T>,
    ) -> Self {
        let (o, l) = (T::ZERO, T::ONE);
        Self::new(
            orient_x.x, orient_y.x, orient_z.x, translation.x,
            orient_x.y, orient_y.y, orient_z.y, translation.y,
            orient_x.z, orient_y.z, orient_z.z, translation.z,
            o, o, o, l,
        )
    }

    /// Linear transform whose columns are the given basis vectors.
    pub const fn orientation(orient_x: Vec3<T>, orient_y: Vec3<T>, orient_z: Vec3<T>) -> Self {
        Self::transformation(orient_x, orient_y, orient_z, Vec3::zero())
    }

    /// Translation, rotation and scale composed as `T * R * S`, built
    /// directly from the scaled rotation basis.
    ///
    /// # Examples
    /// ```
    /// use lintra::dprec::{Mat4, Quat, Vec3};
    /// let m = Mat4::trs(Vec3::new(1.0, 2.0, 3.0), Quat::identity(), Vec3::new(2.0, 2.0, 2.0));
    /// assert_eq!(m.transform_point(Vec3::new(1.0, 1.0, 1.0)), Vec3::new(3.0, 4.0, 5.0));
    /// ```
    pub fn trs(translation: Vec3<T>, rotation: Quat<T>, scale: Vec3<T>) -> Self {
        Self::transformation(
            rotation.orientation_x() * scale.x,
            rotation.orientation_y() * scale.y,
            rotation.orientation_z() * scale.z,
            translation,
        )
    }

    /// Builds a matrix from sixteen values listed row by row.
    #[rustfmt::skip]
    pub const fn from_row_major_array(values: [T; 16]) -> Self {
        let [
            m11, m12, m13, m14,
            m21, m22, m23, m24,
            m31, m32, m33, m34,
            m41, m42, m43, m44,
        ] = values;
        Self::new(
            m11, m12, m13, m14,
            m21, m22, m23, m24,
            m31, m32, m33, m34,
            m41, m42, m43, m44,
        )
    }

    /// Builds a matrix from sixteen values listed column by column.
    #[rustfmt::skip]
    pub const fn from_column_major_array(values: [T; 16]) -> Self {
        let [
            m11, m21, m31, m41,
            m12, m22, m32, m42,
            m13, m23, m33, m43,
            m14, m24, m34, m44,
        ] = values;
        Self::new(
            m11, m12, m13, m14,
            m21, m22, m23, m24,
            m31, m32, m33, m34,
            m41, m42, m43, m44,
        )
    }

    /// Like [`Mat4::from_row_major_array`] for slices of unknown length.
    pub fn try_from_row_major_slice(values: &[T]) -> Result<Self, MathError> {
        let array: [T; 16] = values.try_into().map_err(|_| MathError::SliceLength {
            expected: 16,
            actual: values.len(),
        })?;
        Ok(Self::from_row_major_array(array))
    }

    /// Elements listed row by row.
    #[rustfmt::skip]
    pub const fn row_major_array(self) -> [T; 16] {
        [
            self.m11, self.m12, self.m13, self.m14,
            self.m21, self.m22, self.m23, self.m24,
            self.m31, self.m32, self.m33, self.m34,
            self.m41, self.m42, self.m43, self.m44,
        ]
    }

    /// Elements listed column by column (GPU upload order).
    #[rustfmt::skip]
    pub const fn column_major_array(self) -> [T; 16] {
        [
            self.m11, self.m21, self.m31, self.m41,
            self.m12, self.m22, self.m32, self.m42,
            self.m13, self.m23, self.m33, self.m43,
            self.m14, self.m24, self.m34, self.m44,
        ]
    }

    /// Rows become columns.
    pub const fn transposed(self) -> Self {
        Self::from_column_major_array(self.row_major_array())
    }

    /// Inverse of a rigid transform (rotation and translation only).
    ///
    /// Transposes the rotation block and negates the translation through it.
    /// Any scale, shear or projection produces a wrong result; use
    /// [`Mat4::inverse`] then.
    pub fn fast_inverse(self) -> Self {
        let inverse_rotate =
            Self::orientation(self.row1().xyz(), self.row2().xyz(), self.row3().xyz());
        inverse_rotate * Self::from_translation(-self.m14, -self.m24, -self.m34)
    }

    /// General inverse via the adjugate (transposed cofactors over the
    /// determinant).
    ///
    /// A singular matrix divides by a zero determinant, so the result is
    /// `NaN`/`±∞`.
    #[rustfmt::skip]
    pub fn inverse(self) -> Self {
        let m = self;
        let minor11 = m.m22 * m.m33 * m.m44 + m.m23 * m.m34 * m.m42 + m.m24 * m.m32 * m.m43 - m.m24 * m.m33 * m.m42 - m.m23 * m.m32 * m.m44 - m.m22 * m.m34 * m.m43;
        let minor12 = m.m21 * m.m33 * m.m44 + m.m23 * m.m34 * m.m41 + m.m24 * m.m31 * m.m43 - m.m24 * m.m33 * m.m41 - m.m23 * m.m31 * m.m44 - m.m21 * m.m34 * m.m43;
        let minor13 = m.m21 * m.m32 * m.m44 + m.m22 * m.m34 * m.m41 + m.m24 * m.m31 * m.m42 - m.m24 * m.m32 * m.m41 - m.m22 * m.m31 * m.m44 - m.m21 * m.m34 * m.m42;
        let minor14 = m.m21 * m.m32 * m.m43 + m.m22 * m.m33 * m.m41 + m.m23 * m.m31 * m.m42 - m.m23 * m.m32 * m.m41 - m.m22 * m.m31 * m.m43 - m.m21 * m.m33 * m.m42;
        let minor21 = m.m12 * m.m33 * m.m44 + m.m13 * m.m34 * m.m42 + m.m14 * m.m32 * m.m43 - m.m14 * m.m33 * m.m42 - m.m13 * m.m32 * m.m44 - m.m12 * m.m34 * m.m43;
        let minor22 = m.m11 * m.m33 * m.m44 + m.m13 * m.m34 * m.m41 + m.m14 * m.m31 * m.m43 - m.m14 * m.m33 * m.m41 - m.m13 * m.m31 * m.m44 - m.m11 * m.m34 * m.m43;
        let minor23 = m.m11 * m.m32 * m.m44 + m.m12 * m.m34 * m.m41 + m.m14 * m.m31 * m.m42 - m.m14 * m.m32 * m.m41 - m.m12 * m.m31 * m.m44 - m.m11 * m.m34 * m.m42;
        let minor24 = m.m11 * m.m32 * m.m43 + m.m12 * m.m33 * m.m41 + m.m13 * m.m31 * m.m42 - m.m13 * m.m32 * m.m41 - m.m12 * m.m31 * m.m43 - m.m11 * m.m33 * m.m42;
        let minor31 = m.m12 * m.m23 * m.m44 + m.m13 * m.m24 * m.m42 + m.m14 * m.m22 * m.m43 - m.m14 * m.m23 * m.m42 - m.m13 * m.m22 * m.m44 - m.m12 * m.m24 * m.m43;
        let minor32 = m.m11 * m.m23 * m.m44 + m.m13 * m.m24 * m.m41 + m.m14 * m.m21 * m.m43 - m.m14 * m.m23 * m.m41 - m.m13 * m.m21 * m.m44 - m.m11 * m.m24 * m.m43;
        let minor33 = m.m11 * m.m22 * m.m44 + m.m12 * m.m24 * m.m41 + m.m14 * m.m21 * m.m42 - m.m14 * m.m22 * m.m41 - m.m12 * m.m21 * m.m44 - m.m11 * m.m24 * m.m42;
        let minor34 = m.m11 * m.m22 * m.m43 + m.m12 * m.m23 * m.m41 + m.m13 * m.m21 * m.m42 - m.m13 * m.m22 * m.m41 - m.m12 * m.m21 * m.m43 - m.m11 * m.m23 * m.m42;
        let minor41 = m.m12 * m.m23 * m.m34 + m.m13 * m.m24 * m.m32 + m.m14 * m.m22 * m.m33 - m.m14 * m.m23 * m.m32 - m.m13 * m.m22 * m.m34 - m.m12 * m.m24 * m.m33;
        let minor42 = m.m11 * m.m23 * m.m34 + m.m13 * m.m24 * m.m31 + m.m14 * m.m21 * m.m33 - m.m14 * m.m23 * m.m31 - m.m13 * m.m21 * m.m34 - m.m11 * m.m24 * m.m33;
        let minor43 = m.m11 * m.m22 * m.m34 + m.m12 * m.m24 * m.m31 + m.m14 * m.m21 * m.m32 - m.m14 * m.m22 * m.m31 - m.m12 * m.m21 * m.m34 - m.m11 * m.m24 * m.m32;
        let minor44 = m.m11 * m.m22 * m.m33 + m.m12 * m.m23 * m.m31 + m.m13 * m.m21 * m.m32 - m.m13 * m.m22 * m.m31 - m.m12 * m.m21 * m.m33 - m.m11 * m.m23 * m.m32;

        let det = m.m11 * minor11 - m.m12 * minor12 + m.m13 * minor13 - m.m14 * minor14;

        Self::new(
            minor11 / det, -minor21 / det, minor31 / det, -minor41 / det,
            -minor12 / det, minor22 / det, -minor32 / det, minor42 / det,
            minor13 / det, -minor23 / det, minor33 / det, -minor43 / det,
            -minor14 / det, minor24 / det, -minor34 / det, minor44 / det,
        )
    }

    /// Multiplies `first` by each of `others` in turn, left to right.
    pub fn multi_prod(first: Self, others: &[Self]) -> Self {
        others.iter().fold(first, |acc, m| acc * *m)
    }

    /// Transforms a point with implicit `w = 1`. The bottom row is ignored, so
    /// no perspective divide happens.
    pub fn transform_point(self, p: Vec3<T>) -> Vec3<T> {
        Vec3::new(
            self.m11 * p.x + self.m12 * p.y + self.m13 * p.z + self.m14,
            self.m21 * p.x + self.m22 * p.y + self.m23 * p.z + self.m24,
            self.m31 * p.x + self.m32 * p.y + self.m33 * p.z + self.m34,
        )
    }

    /// First row.
    pub const fn row1(self) -> Vec4<T> {
        Vec4::new(self.m11, self.m12, self.m13, self.m14)
    }

    /// Second row.
    pub const fn row2(self) -> Vec4<T> {
        Vec4::new(self.m21, self.m22, self.m23, self.m24)
    }

    /// Third row.
    pub const fn row3(self) -> Vec4<T> {
        Vec4::new(self.m31, self.m32, self.m33, self.m34)
    }

    /// Fourth row.
    pub const fn row4(self) -> Vec4<T> {
        Vec4::new(self.m41, self.m42, self.m43, self.m44)
    }

    /// First column.
    pub const fn column1(self) -> Vec4<T> {
        Vec4::new(self.m11, self.m21, self.m31, self.m41)
    }

    /// Second column.
    pub const fn column2(self) -> Vec4<T> {
        Vec4::new(self.m12, self.m22, self.m32, self.m42)
    }

    /// Third column.
    pub const fn column3(self) -> Vec4<T> {
        Vec4::new(self.m13, self.m23, self.m33, self.m43)
    }

    /// Fourth column.
    pub const fn column4(self) -> Vec4<T> {
        Vec4::new(self.m14, self.m24, self.m34, self.m44)
    }

    /// Image of the local X axis (first column without `w`).
    pub const fn orientation_x(self) -> Vec3<T> {
        Vec3::new(self.m11, self.m21, self.m31)
    }

    /// Image of the local Y axis.
    pub const fn orientation_y(self) -> Vec3<T> {
        Vec3::new(self.m12, self.m22, self.m32)
    }

    /// Image of the local Z axis.
    pub const fn orientation_z(self) -> Vec3<T> {
        Vec3::new(self.m13, self.m23, self.m33)
    }

    /// Translation part.
    pub const fn translation(self) -> Vec3<T> {
        Vec3::new(self.m14, self.m24, self.m34)
    }

    /// Per-axis scale, the lengths of the three orientation vectors.
    pub fn scale(self) -> Vec3<T> {
        Vec3::new(
            self.orientation_x().length(),
            self.orientation_y().length(),
            self.orientation_z().length(),
        )
    }

    /// Rotation held in the upper 3×3 block.
    ///
    /// Assumes the block is a pure rotation (unit scale); use
    /// [`Mat4::to_trs`] when the matrix may be scaled.
    pub fn rotation(self) -> Quat<T> {
        Quat::from_basis(self.orientation_x(), self.orientation_y(), self.orientation_z())
    }

    /// Splits a matrix built by [`Mat4::trs`] back into translation, rotation
    /// and scale.
    ///
    /// The recovered rotation may be the negation of the original quaternion;
    /// both describe the same rotation.
    pub fn to_trs(self) -> (Vec3<T>, Quat<T>, Vec3<T>) {
        let rotation = Quat::from_basis(
            self.orientation_x().unit(),
            self.orientation_y().unit(),
            self.orientation_z().unit(),
        );
        (self.translation(), rotation, self.scale())
    }

    /// Returns `true` if any element is `NaN`.
    pub fn is_nan(self) -> bool {
        self.row_major_array().iter().any(|v| v.is_nan())
    }

    /// Returns `true` if any element is infinite.
    pub fn is_inf(self) -> bool {
        self.row_major_array().iter().any(|v| v.is_infinite())
    }
}

impl<T: Scalar> Mul for Mat4<T> {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        let rows = [self.row1(), self.row2(), self.row3(), self.row4()];
        let cols = [rhs.column1(), rhs.column2(), rhs.column3(), rhs.column4()];
        let mut out = [T::ZERO; 16];
        for (r, row) in rows.iter().enumerate() {
            for (c, col) in cols.iter().enumerate() {
                out[r * 4 + c] = row.dot(*col);
            }
        }
        Self::from_row_major_array(out)
    }
}

impl<T: Scalar> MulAssign for Mat4<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> Mul<Vec4<T>> for Mat4<T> {
    type Output = Vec4<T>;

    fn mul(self, v: Vec4<T>) -> Vec4<T> {
        Vec4::new(
            self.row1().dot(v),
            self.row2().dot(v),
            self.row3().dot(v),
            self.row4().dot(v),
        )
    }
}

impl<T: Scalar> From<[T; 16]> for Mat4<T> {
    fn from(values: [T; 16]) -> Self {
        Self::from_row_major_array(values)
    }
}

impl<T: Scalar> fmt::Display for Mat4<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {}, {})",
            self.row1(),
            self.row2(),
            self.row3(),
            self.row4()
        )
    }
}
