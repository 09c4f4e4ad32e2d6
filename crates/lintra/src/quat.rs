// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use core::fmt;
use core::ops::{Div, Mul, MulAssign, Neg};
use core::str::FromStr;

use crate::angle::Angle;
use crate::error::MathError;
use crate::scalar::{self, Scalar};
use crate::vec3::Vec3;

/// Order in which per-axis rotations are applied when composing or
/// decomposing Euler angles.
///
/// The six variants are *global* (extrinsic) orders: `GlobalXYZ` rotates about
/// the fixed X axis first, then fixed Y, then fixed Z. Each local (intrinsic)
/// order is the global order reversed and is exposed as an associated constant
/// aliasing that variant, so `RotationOrder::LOCAL_XYZ == RotationOrder::GlobalZYX`.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RotationOrder {
    /// X, then Y, then Z about the fixed axes.
    #[default]
    GlobalXYZ,
    /// X, then Z, then Y about the fixed axes.
    GlobalXZY,
    /// Y, then X, then Z about the fixed axes.
    GlobalYXZ,
    /// Y, then Z, then X about the fixed axes.
    GlobalYZX,
    /// Z, then X, then Y about the fixed axes.
    GlobalZXY,
    /// Z, then Y, then X about the fixed axes.
    GlobalZYX,
}

impl RotationOrder {
    /// X, then Y, then Z about the rotating axes.
    pub const LOCAL_XYZ: Self = Self::GlobalZYX;
    /// X, then Z, then Y about the rotating axes.
    pub const LOCAL_XZY: Self = Self::GlobalYZX;
    /// Y, then X, then Z about the rotating axes.
    pub const LOCAL_YXZ: Self = Self::GlobalZXY;
    /// Y, then Z, then X about the rotating axes.
    pub const LOCAL_YZX: Self = Self::GlobalXZY;
    /// Z, then X, then Y about the rotating axes.
    pub const LOCAL_ZXY: Self = Self::GlobalYXZ;
    /// Z, then Y, then X about the rotating axes.
    pub const LOCAL_ZYX: Self = Self::GlobalXYZ;

    /// All six distinct orders.
    pub const ALL: [Self; 6] = [
        Self::GlobalXYZ,
        Self::GlobalXZY,
        Self::GlobalYXZ,
        Self::GlobalYZX,
        Self::GlobalZXY,
        Self::GlobalZYX,
    ];

    const fn axes(self) -> &'static str {
        match self {
            Self::GlobalXYZ => "xyz",
            Self::GlobalXZY => "xzy",
            Self::GlobalYXZ => "yxz",
            Self::GlobalYZX => "yzx",
            Self::GlobalZXY => "zxy",
            Self::GlobalZYX => "zyx",
        }
    }

    fn from_global_axes(axes: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|order| order.axes() == axes)
    }
}

impl fmt::Display for RotationOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "global-{}", self.axes())
    }
}

/// Parses `global-xyz`, `local-zyx` and friends (case-insensitive, `-` or `_`
/// separator). A bare axis triple such as `xyz` is read as a global order.
impl FromStr for RotationOrder {
    type Err = MathError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase().replace('_', "-");
        let (local, axes) = match lowered.split_once('-') {
            Some(("global", axes)) => (false, axes),
            Some(("local", axes)) => (true, axes),
            None => (false, lowered.as_str()),
            Some(_) => return Err(MathError::UnknownRotationOrder(s.to_owned())),
        };
        let lookup = if local {
            let reversed: String = axes.chars().rev().collect();
            Self::from_global_axes(&reversed)
        } else {
            Self::from_global_axes(axes)
        };
        lookup.ok_or_else(|| MathError::UnknownRotationOrder(s.to_owned()))
    }
}

/// Quaternion `w + xi + yj + zk`, with `w` as the scalar part.
///
/// Unit quaternions represent rotations; nothing enforces unit length, so
/// callers renormalise with [`Quat::unit`] where drift matters. Composition
/// follows the matrix convention: `a * b` applies `b` first, then `a`.
///
/// # Examples
/// ```
/// use lintra::dprec::{Angle, Quat, Vec3};
/// let q = Quat::rotation(Angle::from_degrees(90.0), Vec3::basis_z());
/// let v = q.rotate(Vec3::basis_x());
/// assert!((v - Vec3::basis_y()).length() < 1e-12);
/// ```
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat<T: Scalar> {
    /// Scalar part.
    pub w: T,
    /// Coefficient of `i`.
    pub x: T,
    /// Coefficient of `j`.
    pub y: T,
    /// Coefficient of `k`.
    pub z: T,
}

impl<T: Scalar> Default for Quat<T> {
    fn default() -> Self {
        Self::identity()
    }
}

impl<T: Scalar> Quat<T> {
    /// Creates a quaternion from its scalar part and vector part.
    pub const fn new(w: T, x: T, y: T, z: T) -> Self {
        Self { w, x, y, z }
    }

    /// The identity rotation `(1, 0, 0, 0)`.
    pub const fn identity() -> Self {
        Self::new(T::ONE, T::ZERO, T::ZERO, T::ZERO)
    }

    /// Rotation of `angle` about `axis` (right-hand rule). The axis is
    /// normalised first; a zero axis yields `NaN` components.
    pub fn rotation(angle: Angle<T>, axis: Vec3<T>) -> Self {
        let half = angle * T::HALF;
        let cs = scalar::cos(half);
        let sn = scalar::sin(half);
        let axis = axis.unit();
        Self::new(cs, sn * axis.x, sn * axis.y, sn * axis.z)
    }

    /// Composes per-axis rotations about X, Y and Z in the given order.
    pub fn euler(x: Angle<T>, y: Angle<T>, z: Angle<T>, order: RotationOrder) -> Self {
        let x_rot = Self::rotation(x, Vec3::basis_x());
        let y_rot = Self::rotation(y, Vec3::basis_y());
        let z_rot = Self::rotation(z, Vec3::basis_z());
        match order {
            RotationOrder::GlobalXYZ => (z_rot * y_rot) * x_rot,
            RotationOrder::GlobalXZY => (y_rot * z_rot) * x_rot,
            RotationOrder::GlobalYXZ => (z_rot * x_rot) * y_rot,
            RotationOrder::GlobalYZX => (x_rot * z_rot) * y_rot,
            RotationOrder::GlobalZXY => (y_rot * x_rot) * z_rot,
            RotationOrder::GlobalZYX => (x_rot * y_rot) * z_rot,
        }
    }

    /// Rotation whose [`orientation_x`](Self::orientation_x),
    /// [`orientation_y`](Self::orientation_y) and
    /// [`orientation_z`](Self::orientation_z) are the given orthonormal basis
    /// vectors.
    ///
    /// Picks the best-conditioned of the four extraction branches (trace or
    /// largest diagonal element) and renormalises the result.
    pub fn from_basis(orient_x: Vec3<T>, orient_y: Vec3<T>, orient_z: Vec3<T>) -> Self {
        let (m11, m21, m31) = (orient_x.x, orient_x.y, orient_x.z);
        let (m12, m22, m32) = (orient_y.x, orient_y.y, orient_y.z);
        let (m13, m23, m33) = (orient_z.x, orient_z.y, orient_z.z);
        let four = T::TWO * T::TWO;

        let trace = m11 + m22 + m33;
        let q = if trace > T::ZERO {
            let s = (trace + T::ONE).sqrt() * T::TWO;
            Self::new(s / four, (m32 - m23) / s, (m13 - m31) / s, (m21 - m12) / s)
        } else if m11 > m22 && m11 > m33 {
            let s = (T::ONE + m11 - m22 - m33).sqrt() * T::TWO;
            Self::new((m32 - m23) / s, s / four, (m12 + m21) / s, (m13 + m31) / s)
        } else if m22 > m33 {
            let s = (T::ONE + m22 - m11 - m33).sqrt() * T::TWO;
            Self::new((m13 - m31) / s, (m12 + m21) / s, s / four, (m23 + m32) / s)
        } else {
            let s = (T::ONE + m33 - m11 - m22).sqrt() * T::TWO;
            Self::new((m21 - m12) / s, (m13 + m31) / s, (m23 + m32) / s, s / four)
        };
        q.unit()
    }

    /// Conjugate `(w, -x, -y, -z)`.
    pub fn conjugate(self) -> Self {
        Self::new(self.w, -self.x, -self.y, -self.z)
    }

    /// Four-dimensional dot product.
    pub fn dot(self, other: Self) -> T {
        self.w * other.w + self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Squared norm.
    pub fn sqr_norm(self) -> T {
        self.dot(self)
    }

    /// Norm.
    pub fn norm(self) -> T {
        self.sqr_norm().sqrt()
    }

    /// Scales to unit norm.
    pub fn unit(self) -> Self {
        self / self.norm()
    }

    /// Multiplicative inverse, `conjugate / sqr_norm`.
    pub fn inverse(self) -> Self {
        self.conjugate() / self.sqr_norm()
    }

    /// Rotates `v` by this (unit) quaternion: `q * (0, v) * conj(q)`.
    pub fn rotate(self, v: Vec3<T>) -> Vec3<T> {
        let pure = Self::new(T::ZERO, v.x, v.y, v.z);
        let res = self * pure * self.conjugate();
        Vec3::new(res.x, res.y, res.z)
    }

    /// Rotation taking `first` to `second`, i.e. `second * conj(first)`.
    ///
    /// With `shortest`, `second` is negated first when the two lie in opposite
    /// hemispheres so the result takes the short way round.
    pub fn diff(second: Self, first: Self, shortest: bool) -> Self {
        let second = if shortest && second.dot(first) < T::ZERO {
            -second
        } else {
            second
        };
        second * first.conjugate()
    }

    /// Scales the rotation angle of a unit quaternion by `power`.
    ///
    /// `w` outside `[-1, 1]` (accumulated drift) snaps to `±identity`; a
    /// vector part indistinguishable from zero returns the identity.
    pub fn pow(self, power: T) -> Self {
        if self.w > T::ONE {
            return Self::identity();
        }
        if self.w < -T::ONE {
            return -Self::identity();
        }
        let axis = Vec3::new(self.x, self.y, self.z);
        if axis.is_zero() {
            return Self::identity();
        }
        let angle = scalar::acos(self.w) * T::TWO * power;
        Self::rotation(angle, axis)
    }

    /// Spherical interpolation along the shortest arc. Exact at `t = 0` and
    /// `t = 1` up to renormalisation.
    ///
    /// # Examples
    /// ```
    /// use lintra::dprec::{Angle, Quat, Vec3};
    /// let axis = Vec3::new(1.0, 2.0, 3.0);
    /// let a = Quat::rotation(Angle::from_degrees(25.0), axis);
    /// let b = Quat::rotation(Angle::from_degrees(45.0), axis);
    /// let mid = Quat::slerp(a, b, 0.5);
    /// let expected = Quat::rotation(Angle::from_degrees(35.0), axis);
    /// assert!((mid.dot(expected) - 1.0).abs() < 1e-12);
    /// ```
    pub fn slerp(first: Self, second: Self, t: T) -> Self {
        let delta = Self::diff(second, first, true);
        (delta.pow(t) * first).unit()
    }

    /// Component-wise blend, renormalised. Cheaper than [`Quat::slerp`] but
    /// not constant-velocity.
    pub fn lerp(first: Self, second: Self, t: T) -> Self {
        Self::new(
            scalar::mix(first.w, second.w, t),
            scalar::mix(first.x, second.x, t),
            scalar::mix(first.y, second.y, t),
            scalar::mix(first.z, second.z, t),
        )
        .unit()
    }

    /// Image of +X under this rotation.
    pub fn orientation_x(self) -> Vec3<T> {
        let Self { w, x, y, z } = self;
        Vec3::new(
            T::ONE - T::TWO * (y * y + z * z),
            T::TWO * (x * y + w * z),
            T::TWO * (x * z - w * y),
        )
    }

    /// Image of +Y under this rotation.
    pub fn orientation_y(self) -> Vec3<T> {
        let Self { w, x, y, z } = self;
        Vec3::new(
            T::TWO * (x * y - w * z),
            T::ONE - T::TWO * (x * x + z * z),
            T::TWO * (y * z + w * x),
        )
    }

    /// Image of +Z under this rotation.
    pub fn orientation_z(self) -> Vec3<T> {
        let Self { w, x, y, z } = self;
        Vec3::new(
            T::TWO * (x * z + w * y),
            T::TWO * (y * z - w * x),
            T::ONE - T::TWO * (x * x + y * y),
        )
    }

    /// Decomposes a unit quaternion into X, Y and Z angles for the order it
    /// was presumably composed with (see [`Quat::euler`]).
    ///
    /// The middle rotation goes through `asin`, whose argument is clamped to
    /// `[-1, 1]` so rounding drift near gimbal lock cannot produce `NaN`.
    pub fn euler_angles(self, order: RotationOrder) -> (Angle<T>, Angle<T>, Angle<T>) {
        let Self { w, x, y, z } = self;
        let two = T::TWO;
        let one = T::ONE;
        let asin = |v: T| scalar::asin(scalar::clamp(v, -one, one));
        match order {
            RotationOrder::GlobalXYZ => (
                scalar::atan2(two * (w * x + y * z), one - two * (x * x + y * y)),
                asin(two * (w * y - x * z)),
                scalar::atan2(two * (w * z + x * y), one - two * (y * y + z * z)),
            ),
            RotationOrder::GlobalXZY => (
                scalar::atan2(two * (w * x - z * y), one - two * (x * x + z * z)),
                scalar::atan2(two * (w * y - x * z), one - two * (z * z + y * y)),
                asin(two * (w * z + x * y)),
            ),
            RotationOrder::GlobalYXZ => (
                asin(two * (w * x + z * y)),
                scalar::atan2(two * (w * y - z * x), one - two * (x * x + y * y)),
                scalar::atan2(two * (w * z - x * y), one - two * (z * z + x * x)),
            ),
            RotationOrder::GlobalYZX => (
                scalar::atan2(two * (w * x + z * y), one - two * (x * x + z * z)),
                scalar::atan2(two * (w * y + x * z), one - two * (z * z + y * y)),
                asin(two * (w * z - x * y)),
            ),
            RotationOrder::GlobalZXY => (
                asin(two * (w * x - z * y)),
                scalar::atan2(two * (w * y + z * x), one - two * (x * x + y * y)),
                scalar::atan2(two * (w * z + x * y), one - two * (z * z + x * x)),
            ),
            RotationOrder::GlobalZYX => (
                scalar::atan2(two * (w * x - z * y), one - two * (y * y + x * x)),
                asin(two * (w * y + z * x)),
                scalar::atan2(two * (w * z - y * x), one - two * (z * z + y * y)),
            ),
        }
    }

    /// Returns `[w, x, y, z]`.
    pub fn to_array(self) -> [T; 4] {
        [self.w, self.x, self.y, self.z]
    }

    /// Returns `true` if any component is `NaN`.
    pub fn is_nan(self) -> bool {
        self.w.is_nan() || self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Returns `true` if any component is infinite.
    pub fn is_inf(self) -> bool {
        self.w.is_infinite() || self.x.is_infinite() || self.y.is_infinite() || self.z.is_infinite()
    }

    /// Returns `true` if every component is within epsilon of the identity.
    pub fn is_identity(self) -> bool {
        scalar::eq(self.w, T::ONE)
            && scalar::eq(self.x, T::ZERO)
            && scalar::eq(self.y, T::ZERO)
            && scalar::eq(self.z, T::ZERO)
    }
}

/// Hamilton product.
impl<T: Scalar> Mul for Quat<T> {
    type Output = Self;
    fn mul(self, rhs: Self) -> Self {
        let (a, b) = (self, rhs);
        Self::new(
            a.w * b.w - a.x * b.x - a.y * b.y - a.z * b.z,
            a.w * b.x + a.x * b.w + a.y * b.z - a.z * b.y,
            a.w * b.y - a.x * b.z + a.y * b.w + a.z * b.x,
            a.w * b.z + a.x * b.y - a.y * b.x + a.z * b.w,
        )
    }
}

impl<T: Scalar> MulAssign for Quat<T> {
    fn mul_assign(&mut self, rhs: Self) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> Mul<T> for Quat<T> {
    type Output = Self;
    fn mul(self, rhs: T) -> Self {
        Self::new(self.w * rhs, self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<T: Scalar> Div<T> for Quat<T> {
    type Output = Self;
    fn div(self, rhs: T) -> Self {
        Self::new(self.w / rhs, self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl<T: Scalar> Neg for Quat<T> {
    type Output = Self;
    fn neg(self) -> Self {
        Self::new(-self.w, -self.x, -self.y, -self.z)
    }
}

/// Converts `[w, x, y, z]` verbatim; unit length is not enforced.
impl<T: Scalar> From<[T; 4]> for Quat<T> {
    fn from(value: [T; 4]) -> Self {
        let [w, x, y, z] = value;
        Self::new(w, x, y, z)
    }
}

impl<T: Scalar> fmt::Display for Quat<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.6}, {:.6}, {:.6}, {:.6})", self.w, self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn local_orders_alias_reversed_globals() {
        assert_eq!(RotationOrder::LOCAL_XYZ, RotationOrder::GlobalZYX);
        assert_eq!(RotationOrder::LOCAL_YZX, RotationOrder::GlobalXZY);
        assert_eq!(RotationOrder::LOCAL_ZYX, RotationOrder::GlobalXYZ);
    }

    #[test]
    fn rotation_order_parses_both_families() {
        assert_eq!("global-xyz".parse::<RotationOrder>(), Ok(RotationOrder::GlobalXYZ));
        assert_eq!("LOCAL_XZY".parse::<RotationOrder>(), Ok(RotationOrder::LOCAL_XZY));
        assert_eq!("zxy".parse::<RotationOrder>(), Ok(RotationOrder::GlobalZXY));
        assert_eq!(
            "sideways-xyz".parse::<RotationOrder>(),
            Err(MathError::UnknownRotationOrder("sideways-xyz".to_owned()))
        );
        assert!("global-xxy".parse::<RotationOrder>().is_err());
    }

    #[test]
    fn display_round_trips_through_from_str() {
        for order in RotationOrder::ALL {
            assert_eq!(order.to_string().parse::<RotationOrder>(), Ok(order));
        }
    }

    #[test]
    fn pow_snaps_out_of_range_scalar_part() {
        let drifted = Quat::new(1.0000001_f64, 0.0, 0.0, 0.0);
        assert_eq!(drifted.pow(0.5), Quat::identity());
        assert_eq!(Quat::new(-1.0000001_f64, 0.0, 0.0, 0.0).pow(0.5), -Quat::identity());
    }
}
