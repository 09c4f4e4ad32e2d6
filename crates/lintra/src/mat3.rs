// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Mul, MulAssign};

use crate::angle::Angle;
use crate::error::MathError;
use crate::scalar::{self, Scalar};
use crate::vec2::Vec2;
use crate::vec3::Vec3;

/// 3×3 matrix, the homogeneous form of a 2D affine transform.
///
/// Elements are named `mRC` (row, column). Vectors are columns and multiply on
/// the right, so `a * b` applies `b` first, then `a`. Translation lives in the
/// third column (`m13`, `m23`).
///
/// # Examples
/// ```
/// use lintra::dprec::{Angle, Mat3, Vec3};
/// let m = Mat3::from_translation(2.0, -3.0) * Mat3::from_rotation(Angle::from_degrees(90.0));
/// let p = m * Vec3::new(1.0, 0.0, 1.0);
/// assert!((p - Vec3::new(2.0, -2.0, 1.0)).length() < 1e-12);
/// ```
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3<T: Scalar> {
    /// Row 1, column 1.
    pub m11: T,
    /// Row 1, column 2.
    pub m12: T,
    /// Row 1, column 3.
    pub m13: T,
    /// Row 2, column 1.
    pub m21: T,
    /// Row 2, column 2.
    pub m22: T,
    /// Row 2, column 3.
    pub m23: T,
    /// Row 3, column 1.
    pub m31: T,
    /// Row 3, column 2.
    pub m32: T,
    /// Row 3, column 3.
    pub m33: T,
}

impl<T: Scalar> Mat3<T> {
    /// Creates a matrix from elements listed row by row.
    #[rustfmt::skip]
    pub const fn new(
        m11: T, m12: T, m13: T,
        m21: T, m22: T, m23: T,
        m31: T, m32: T, m33: T,
    ) -> Self {
        Self { m11, m12, m13, m21, m22, m23, m31, m32, m33 }
    }

    /// The all-zero matrix.
    pub const fn zero() -> Self {
        let o = T::ZERO;
        Self::new(o, o, o, o, o, o, o, o, o)
    }

    /// The identity matrix.
    #[rustfmt::skip]
    pub const fn identity() -> Self {
        let (o, l) = (T::ZERO, T::ONE);
        Self::new(
            l, o, o,
            o, l, o,
            o, o, l,
        )
    }

    /// Translation by `(x, y)`.
    #[rustfmt::skip]
    pub const fn from_translation(x: T, y: T) -> Self {
        let (o, l) = (T::ZERO, T::ONE);
        Self::new(
            l, o, x,
            o, l, y,
            o, o, l,
        )
    }

    /// Non-uniform scale by `(x, y)`.
    #[rustfmt::skip]
    pub const fn from_scale(x: T, y: T) -> Self {
        let (o, l) = (T::ZERO, T::ONE);
        Self::new(
            x, o, o,
            o, y, o,
            o, o, l,
        )
    }

    /// Counter-clockwise rotation about the origin.
    #[rustfmt::skip]
    pub fn from_rotation(angle: Angle<T>) -> Self {
        let (o, l) = (T::ZERO, T::ONE);
        let cs = scalar::cos(angle);
        let sn = scalar::sin(angle);
        Self::new(
            cs, -sn, o,
            sn, cs,  o,
            o,  o,   l,
        )
    }

    /// Orthographic projection mapping `[left, right] × [bottom, top]` onto
    /// `[-1, 1]²`.
    #[rustfmt::skip]
    pub fn ortho(left: T, right: T, top: T, bottom: T) -> Self {
        let (o, l) = (T::ZERO, T::ONE);
        Self::new(
            T::TWO / (right - left), o, (right + left) / (left - right),
            o, T::TWO / (top - bottom), (top + bottom) / (bottom - top),
            o, o, l,
        )
    }

    /// Affine transform whose columns are the given basis vectors and
    /// translation.
    #[rustfmt::skip]
    pub const fn transformation(orient_x: Vec2<T>, orient_y: Vec2<T>, translation: Vec2<T>) -> Self {
        let (o, l) = (T::ZERO, T::ONE);
        Self::new(
            orient_x.x, orient_y.x, translation.x,
            orient_x.y, orient_y.y, translation.y,
            o, o, l,
        )
    }

    /// Builds a matrix from nine values listed row by row.
    #[rustfmt::skip]
    pub const fn from_row_major_array(values: [T; 9]) -> Self {
        let [m11, m12, m13, m21, m22, m23, m31, m32, m33] = values;
        Self::new(
            m11, m12, m13,
            m21, m22, m23,
            m31, m32, m33,
        )
    }

    /// Builds a matrix from nine values listed column by column.
    #[rustfmt::skip]
    pub const fn from_column_major_array(values: [T; 9]) -> Self {
        let [m11, m21, m31, m12, m22, m32, m13, m23, m33] = values;
        Self::new(
            m11, m12, m13,
            m21, m22, m23,
            m31, m32, m33,
        )
    }

    /// Like [`Mat3::from_row_major_array`] for slices of unknown length.
    pub fn try_from_row_major_slice(values: &[T]) -> Result<Self, MathError> {
        let array: [T; 9] = values.try_into().map_err(|_| MathError::SliceLength {
            expected: 9,
            actual: values.len(),
        })?;
        Ok(Self::from_row_major_array(array))
    }

    /// Elements listed row by row.
    #[rustfmt::skip]
    pub const fn row_major_array(self) -> [T; 9] {
        [
            self.m11, self.m12, self.m13,
            self.m21, self.m22, self.m23,
            self.m31, self.m32, self.m33,
        ]
    }

    /// Elements listed column by column (GPU upload order).
    #[rustfmt::skip]
    pub const fn column_major_array(self) -> [T; 9] {
        [
            self.m11, self.m21, self.m31,
            self.m12, self.m22, self.m32,
            self.m13, self.m23, self.m33,
        ]
    }

    /// Rows become columns.
    #[rustfmt::skip]
    pub const fn transposed(self) -> Self {
        Self::new(
            self.m11, self.m21, self.m31,
            self.m12, self.m22, self.m32,
            self.m13, self.m23, self.m33,
        )
    }

    /// Inverse of a rigid transform (rotation and translation only).
    ///
    /// Transposes the rotation block and negates the translation through it.
    /// Any scale or shear produces a wrong result; use [`Mat3::inverse`] then.
    #[rustfmt::skip]
    pub fn fast_inverse(self) -> Self {
        let (o, l) = (T::ZERO, T::ONE);
        let inverse_rotate = Self::new(
            self.m11, self.m21, o,
            self.m12, self.m22, o,
            o, o, l,
        );
        inverse_rotate * Self::from_translation(-self.m13, -self.m23)
    }

    /// General inverse via the adjugate.
    ///
    /// A singular matrix divides by a zero determinant, so the result is
    /// `NaN`/`±∞`.
    #[rustfmt::skip]
    pub fn inverse(self) -> Self {
        let m = self;
        let minor11 = m.m22 * m.m33 - m.m23 * m.m32;
        let minor12 = m.m21 * m.m33 - m.m23 * m.m31;
        let minor13 = m.m21 * m.m32 - m.m22 * m.m31;
        let minor21 = m.m12 * m.m33 - m.m13 * m.m32;
        let minor22 = m.m11 * m.m33 - m.m13 * m.m31;
        let minor23 = m.m11 * m.m32 - m.m12 * m.m31;
        let minor31 = m.m12 * m.m23 - m.m13 * m.m22;
        let minor32 = m.m11 * m.m23 - m.m13 * m.m21;
        let minor33 = m.m11 * m.m22 - m.m12 * m.m21;
        let det = m.m11 * minor11 - m.m12 * minor12 + m.m13 * minor13;
        Self::new(
            minor11 / det, -minor21 / det, minor31 / det,
            -minor12 / det, minor22 / det, -minor32 / det,
            minor13 / det, -minor23 / det, minor33 / det,
        )
    }

    /// Multiplies `first` by each of `others` in turn, left to right.
    pub fn multi_prod(first: Self, others: &[Self]) -> Self {
        others.iter().fold(first, |acc, m| acc * *m)
    }

    /// First row.
    pub const fn row1(self) -> Vec3<T> {
        Vec3::new(self.m11, self.m12, self.m13)
    }

    /// Second row.
    pub const fn row2(self) -> Vec3<T> {
        Vec3::new(self.m21, self.m22, self.m23)
    }

    /// Third row.
    pub const fn row3(self) -> Vec3<T> {
        Vec3::new(self.m31, self.m32, self.m33)
    }

    /// First column.
    pub const fn column1(self) -> Vec3<T> {
        Vec3::new(self.m11, self.m21, self.m31)
    }

    /// Second column.
    pub const fn column2(self) -> Vec3<T> {
        Vec3::new(self.m12, self.m22, self.m32)
    }

    /// Third column.
    pub const fn column3(self) -> Vec3<T> {
        Vec3::new(self.m13, self.m23, self.m33)
    }

    /// Image of the local X axis.
    pub const fn orientation_x(self) -> Vec2<T> {
        Vec2::new(self.m11, self.m21)
    }

    /// Image of the local Y axis.
    pub const fn orientation_y(self) -> Vec2<T> {
        Vec2::new(self.m12, self.m22)
    }

    /// Translation part.
    pub const fn translation(self) -> Vec2<T> {
        Vec2::new(self.m13, self.m23)
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

impl<T: Scalar> Mul for Mat3<T> {
    type Output = Self;

    #[rustfmt::skip]
    fn mul(self, rhs: Self) -> Self {
        let (l, r) = (self, rhs);
        Self::new(
            l.m11 * r.m11 + l.m12 * r.m21 + l.m13 * r.m31,
            l.m11 * r.m12 + l.m12 * r.m22 + l.m13 * r.m32,
            l.m11 * r.m13 + l.m12 * r.m23 + l.m13 * r.m33,

            l.m21 * r.m11 + l.m22 * r.m21 + l.m23 * r.m31,
            l.m21 * r.m12 + l.m22 * r.m22 + l.m23 * r.m32,
            l.m21 * r.m13 + l.m22 * r.m23 + l.m23 * r.m33,

            l.m31 * r.m11 + l.m32 * r.m21 + l.m33 * r.m31,
            l.m31 * r.m12 + l.m32 * r.m22 + l.m33 * r.m32,
            l.m31 * r.m13 + l.m32 * r.m23 + l.m33 * r.m33,
        )
    }
}

impl<T: Scalar> MulAssign for Mat3<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> Mul<Vec3<T>> for Mat3<T> {
    type Output = Vec3<T>;

    fn mul(self, v: Vec3<T>) -> Vec3<T> {
        Vec3::new(
            self.m11 * v.x + self.m12 * v.y + self.m13 * v.z,
            self.m21 * v.x + self.m22 * v.y + self.m23 * v.z,
            self.m31 * v.x + self.m32 * v.y + self.m33 * v.z,
        )
    }
}

impl<T: Scalar> From<[T; 9]> for Mat3<T> {
    fn from(values: [T; 9]) -> Self {
        Self::from_row_major_array(values)
    }
}

impl<T: Scalar> fmt::Display for Mat3<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.row1(), self.row2(), self.row3())
    }
}
