// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

//! Double precision (`f64`, epsilon `1e-12`).

use crate::scalar::Scalar;

/// Tolerance used by every epsilon-aware comparison in this precision.
pub const EPSILON: f64 = <f64 as Scalar>::EPSILON;
/// Archimedes' constant.
pub const PI: f64 = <f64 as Scalar>::PI;

/// Angle in double precision.
pub type Angle = crate::Angle<f64>;
/// 2D vector in double precision.
pub type Vec2 = crate::Vec2<f64>;
/// 3D vector in double precision.
pub type Vec3 = crate::Vec3<f64>;
/// 4D vector in double precision.
pub type Vec4 = crate::Vec4<f64>;
/// Quaternion in double precision.
pub type Quat = crate::Quat<f64>;
/// 3×3 matrix in double precision.
pub type Mat3 = crate::Mat3<f64>;
/// 4×4 matrix in double precision.
pub type Mat4 = crate::Mat4<f64>;

/// Euler rotation order (precision independent).
pub use crate::quat::RotationOrder;
