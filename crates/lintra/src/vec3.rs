// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

use crate::angle::Angle;
use crate::scalar::{self, Scalar};

/// Three-component vector.
///
/// * Represents points or directions depending on context.
/// * Use [`crate::Mat4::transform_point`] for points (homogeneous `w = 1`) and
///   [`crate::Quat::rotate`] for pure rotations.
/// * Nothing is guarded: [`Vec3::unit`] on the zero vector yields `NaN`.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3<T: Scalar> {
    /// X component.
    pub x: T,
    /// Y component.
    pub y: T,
    /// Z component.
    pub z: T,
}

impl<T: Scalar> Vec3<T> {
    /// Creates a vector from components.
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// The zero vector.
    pub const fn zero() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ZERO)
    }

    /// Unit vector along +X.
    pub const fn basis_x() -> Self {
        Self::new(T::ONE, T::ZERO, T::ZERO)
    }

    /// Unit vector along +Y.
    pub const fn basis_y() -> Self {
        Self::new(T::ZERO, T::ONE, T::ZERO)
    }

    /// Unit vector along +Z.
    pub const fn basis_z() -> Self {
        Self::new(T::ZERO, T::ZERO, T::ONE)
    }

    /// Dot product.
    pub fn dot(self, other: Self) -> T {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    /// Right-handed cross product `self × other`.
    ///
    /// # Examples
    /// ```
    /// use lintra::dprec::Vec3;
    /// let c = Vec3::new(2.0, 3.0, 4.0).cross(Vec3::new(-1.0, 2.0, 5.0));
    /// assert_eq!(c, Vec3::new(7.0, -14.0, 7.0));
    /// ```
    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    /// Squared length.
    pub fn sqr_length(self) -> T {
        self.dot(self)
    }

    /// Euclidean length.
    pub fn length(self) -> T {
        self.sqr_length().sqrt()
    }

    /// Scales the vector to length one.
    pub fn unit(self) -> Self {
        self / self.length()
    }

    /// Rescales the vector to the given length, keeping its direction.
    pub fn resized(self, length: T) -> Self {
        self.unit() * length
    }

    /// Some unit vector perpendicular to `self`.
    ///
    /// The component with the largest magnitude is solved for so the division
    /// stays well conditioned. Ties fall through from Z to X to Y: Z wins only
    /// when strictly larger than both others, X when strictly larger than Y.
    pub fn normal(self) -> Self {
        let sqr_x = self.x * self.x;
        let sqr_y = self.y * self.y;
        let sqr_z = self.z * self.z;
        let perpendicular = if sqr_z > sqr_x && sqr_z > sqr_y {
            Self::new(T::ONE, T::ONE, -(self.x + self.y) / self.z)
        } else if sqr_x > sqr_y {
            Self::new(-(self.y + self.z) / self.x, T::ONE, T::ONE)
        } else {
            Self::new(T::ONE, -(self.x + self.z) / self.y, T::ONE)
        };
        perpendicular.unit()
    }

    /// Unsigned angle between two vectors, in `[0, π]`.
    pub fn angle(self, other: Self) -> Angle<T> {
        let a = self.unit();
        let b = other.unit();
        scalar::atan2(a.cross(b).length(), a.dot(b))
    }

    /// Projects `self` onto the plane through the origin with the given unit
    /// `normal`.
    pub fn projection(self, normal: Self) -> Self {
        self - normal * self.dot(normal)
    }

    /// Signed angle from `self` to `other` after projecting both onto the plane
    /// with unit `normal`; positive when counter-clockwise seen from the tip
    /// of `normal`.
    pub fn projection_angle(self, other: Self, normal: Self) -> Angle<T> {
        let a = self.projection(normal);
        let b = other.projection(normal);
        scalar::atan2(a.cross(b).dot(normal), a.dot(b))
    }
}

impl_vector_ops!(Vec3, 3 { x, y, z });
