// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! lintra: linear-algebra primitives for graphics and simulation code.
//!
//! Vectors, 3×3 and 4×4 matrices, quaternions and an angle type, each generic
//! over a sealed [`Scalar`] and instantiated in two precisions:
//!
//! - [`sprec`]: `f32`, epsilon `1e-6`;
//! - [`dprec`]: `f64`, epsilon `1e-12`.
//!
//! Every type is a small `Copy` value and every operation is pure. Numeric
//! degeneracies (singular matrices, zero-length axes) are not reported as
//! errors; they propagate IEEE-754 `NaN`/`±∞` and can be audited afterwards
//! with `is_nan`/`is_inf`. [`convert`] moves values between the precisions.
//!
//! # Examples
//! ```
//! use lintra::dprec::{Angle, Mat4, Quat, Vec3};
//!
//! let rotation = Quat::rotation(Angle::from_degrees(30.0), Vec3::basis_x());
//! let m = Mat4::trs(Vec3::new(15.0, 5.0, -3.0), rotation, Vec3::new(0.1, 0.5, 0.3));
//! let identity = m.inverse() * m;
//! assert!((identity.m11 - 1.0).abs() < 1e-9);
//!
//! let (t, _, s) = m.to_trs();
//! assert!((t - Vec3::new(15.0, 5.0, -3.0)).length() < 1e-12);
//! assert!((s - Vec3::new(0.1, 0.5, 0.3)).length() < 1e-12);
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs, rust_2018_idioms, unused_must_use)]

#[macro_use]
mod macros;

pub mod angle;
pub mod convert;
pub mod dprec;
pub mod error;
pub mod scalar;
pub mod sprec;

mod mat3;
mod mat4;
mod quat;
mod vec2;
mod vec3;
mod vec4;

pub use angle::Angle;
pub use error::MathError;
pub use mat3::Mat3;
pub use mat4::Mat4;
pub use quat::{Quat, RotationOrder};
pub use scalar::Scalar;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use vec4::Vec4;
