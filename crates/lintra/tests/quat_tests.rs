// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
mod common;

use common::{approx_eq, approx_eq_f32, same_rotation};
use lintra::dprec::{Angle, Quat, RotationOrder, Vec3};
use lintra::sprec;

fn deg(value: f64) -> Angle {
    Angle::from_degrees(value)
}

fn axis() -> Vec3 {
    Vec3::new(1.0, 2.0, 3.0)
}

#[test]
fn rotation_from_axis_angle() {
    let q = Quat::rotation(deg(60.0), Vec3::new(2.0, 5.0, 3.0));
    approx_eq(
        q.to_array(),
        [0.866025403784, 0.162221421130763, 0.405553552826907, 0.243332131696144],
    );
    let s = sprec::Quat::rotation(sprec::Angle::from_degrees(60.0), sprec::Vec3::new(2.0, 5.0, 3.0));
    approx_eq_f32(s.to_array(), [0.866025403, 0.162221421, 0.405553552, 0.243332131]);
}

#[test]
fn hamilton_product() {
    let a = Quat::new(5.1, -4.1, 3.1, -2.1);
    let b = Quat::new(1.2, 1.3, 1.4, 1.5);
    approx_eq((a * b).to_array(), [10.26, 9.3, 14.28, -4.64]);
    let mut c = a;
    c *= b;
    assert_eq!(c, a * b);
}

#[test]
fn norms_and_unit() {
    let q = Quat::new(5.1, -4.1, 3.1, -2.1);
    assert!((q.sqr_norm() - 56.84).abs() < 1e-9);
    assert!((q.norm() - 7.539230729988).abs() < 1e-9);
    approx_eq(
        q.unit().to_array(),
        [0.676461589073, -0.543822061804, 0.411182534534, -0.278543007265],
    );
}

#[test]
fn conjugate_negate_and_scalar_ops() {
    let q = Quat::new(1.0, 2.0, -3.0, 4.0);
    assert_eq!(q.conjugate(), Quat::new(1.0, -2.0, 3.0, -4.0));
    assert_eq!(-q, Quat::new(-1.0, -2.0, 3.0, -4.0));
    assert_eq!(q * 2.0, Quat::new(2.0, 4.0, -6.0, 8.0));
    assert_eq!(q / 2.0, Quat::new(0.5, 1.0, -1.5, 2.0));
    assert_eq!(q.dot(q), 30.0);
}

#[test]
fn inverse_cancels_product() {
    let q = Quat::new(5.1, -4.1, 3.1, -2.1);
    assert!((q * q.inverse()).is_identity());
    assert!((q.inverse() * q).is_identity());
}

#[test]
fn rotates_vectors() {
    let q = Quat::rotation(deg(180.0), Vec3::new(1.0, 1.0, 1.0));
    let v = q.rotate(Vec3::basis_x());
    approx_eq(v.to_array(), [-1.0 / 3.0, 2.0 / 3.0, 2.0 / 3.0]);

    let quarter = Quat::rotation(deg(90.0), Vec3::basis_y());
    approx_eq(quarter.rotate(Vec3::basis_z()).to_array(), [1.0, 0.0, 0.0]);
}

#[test]
fn rotation_preserves_length() {
    let q = Quat::rotation(deg(73.0), axis());
    let v = Vec3::new(-4.0, 0.5, 2.5);
    assert!((q.rotate(v).length() - v.length()).abs() < 1e-12);
}

#[test]
fn identity_checks() {
    assert!(Quat::identity().is_identity());
    assert!(Quat::default().is_identity());
    assert!(!Quat::rotation(deg(1.0), axis()).is_identity());
    assert!(Quat::rotation(deg(0.0), axis()).is_identity());
}

#[test]
fn diff_recovers_relative_rotation() {
    let first = Quat::rotation(deg(25.0), axis());
    let second = Quat::rotation(deg(45.0), axis());
    same_rotation(Quat::diff(second, first, false), Quat::rotation(deg(20.0), axis()));
    approx_eq(
        Quat::diff(second, first, false).to_array(),
        Quat::rotation(deg(20.0), axis()).to_array(),
    );
}

#[test]
fn diff_shortest_flips_opposite_hemisphere() {
    let first = Quat::rotation(deg(25.0), axis());
    let second = -Quat::rotation(deg(45.0), axis());
    let long = Quat::diff(second, first, false);
    let short = Quat::diff(second, first, true);
    approx_eq(short.to_array(), Quat::rotation(deg(20.0), axis()).to_array());
    approx_eq(long.to_array(), (-Quat::rotation(deg(20.0), axis())).to_array());
}

#[test]
fn pow_scales_rotation_angle() {
    let q = Quat::rotation(deg(40.0), axis());
    approx_eq(q.pow(0.5).to_array(), Quat::rotation(deg(20.0), axis()).to_array());
    approx_eq(q.pow(2.0).to_array(), Quat::rotation(deg(80.0), axis()).to_array());
    assert!(Quat::identity().pow(0.3).is_identity());
}

#[test]
fn slerp_follows_the_arc() {
    let first = Quat::rotation(deg(25.0), axis());
    let second = Quat::rotation(deg(45.0), axis());
    approx_eq(
        Quat::slerp(first, second, 0.5).to_array(),
        Quat::rotation(deg(35.0), axis()).to_array(),
    );
    approx_eq(
        Quat::slerp(first, second, 0.25).to_array(),
        Quat::rotation(deg(30.0), axis()).to_array(),
    );
    approx_eq(Quat::slerp(first, second, 0.0).to_array(), first.to_array());
    approx_eq(Quat::slerp(first, second, 1.0).to_array(), second.to_array());
}

#[test]
fn lerp_diverges_from_slerp_inside_interval() {
    let first = Quat::rotation(deg(25.0), axis());
    let second = Quat::rotation(deg(45.0), axis());
    let lerped = Quat::lerp(first, second, 0.25);
    let exact = Quat::rotation(deg(30.0), axis());
    assert!((lerped.norm() - 1.0).abs() < 1e-12);
    assert!((lerped.w - exact.w).abs() > 1e-6);
    assert!((lerped.x - exact.x).abs() > 1e-6);
    approx_eq(Quat::lerp(first, second, 0.0).to_array(), first.to_array());
}

#[test]
fn orientation_vectors_are_rotated_basis() {
    let q = Quat::rotation(deg(35.0), Vec3::new(1.0, 0.5, 0.25));
    approx_eq(q.orientation_x().to_array(), q.rotate(Vec3::basis_x()).to_array());
    approx_eq(q.orientation_y().to_array(), q.rotate(Vec3::basis_y()).to_array());
    approx_eq(q.orientation_z().to_array(), q.rotate(Vec3::basis_z()).to_array());
}

#[test]
fn from_basis_inverts_orientation_in_every_branch() {
    let samples = [
        Quat::identity(),
        Quat::rotation(deg(35.0), Vec3::new(1.0, 0.5, 0.25)),
        Quat::rotation(deg(180.0), Vec3::basis_x()),
        Quat::rotation(deg(180.0), Vec3::basis_y()),
        Quat::rotation(deg(180.0), Vec3::basis_z()),
        Quat::rotation(deg(170.0), Vec3::new(0.2, 1.0, 0.1)),
        Quat::rotation(deg(200.0), Vec3::new(-1.0, 0.3, 2.0)),
    ];
    for q in samples {
        let back = Quat::from_basis(q.orientation_x(), q.orientation_y(), q.orientation_z());
        same_rotation(back, q);
    }
}

#[test]
fn euler_composes_global_rotations() {
    // Global XYZ: rotate about X first; 90° about X maps +Y to +Z.
    let q = Quat::euler(deg(90.0), deg(0.0), deg(0.0), RotationOrder::GlobalXYZ);
    approx_eq(q.rotate(Vec3::basis_y()).to_array(), [0.0, 0.0, 1.0]);

    // X then Z (fixed axes): +Y -> +Z -> +Z stays.
    let xz = Quat::euler(deg(90.0), deg(0.0), deg(90.0), RotationOrder::GlobalXZY);
    approx_eq(xz.rotate(Vec3::basis_y()).to_array(), [0.0, 0.0, 1.0]);
    // Z then X: +Y -> -X -> -X.
    let zx = Quat::euler(deg(90.0), deg(0.0), deg(90.0), RotationOrder::GlobalZXY);
    approx_eq(zx.rotate(Vec3::basis_y()).to_array(), [-1.0, 0.0, 0.0]);
}

#[test]
fn local_orders_alias_reversed_globals() {
    let (x, y, z) = (deg(10.0), deg(20.0), deg(30.0));
    assert_eq!(
        Quat::euler(x, y, z, RotationOrder::LOCAL_XYZ),
        Quat::euler(x, y, z, RotationOrder::GlobalZYX)
    );
    assert_eq!(RotationOrder::LOCAL_XZY, RotationOrder::GlobalYZX);
    assert_eq!(RotationOrder::LOCAL_YXZ, RotationOrder::GlobalZXY);
    assert_eq!(RotationOrder::LOCAL_YZX, RotationOrder::GlobalXZY);
    assert_eq!(RotationOrder::LOCAL_ZXY, RotationOrder::GlobalYXZ);
    assert_eq!(RotationOrder::LOCAL_ZYX, RotationOrder::GlobalXYZ);
}

#[test]
fn euler_angles_round_trip_for_every_order() {
    for order in RotationOrder::ALL {
        let q = Quat::euler(deg(10.0), deg(20.0), deg(30.0), order);
        let (x, y, z) = q.euler_angles(order);
        approx_eq([x.degrees(), y.degrees(), z.degrees()], [10.0, 20.0, 30.0]);
    }
    for order in RotationOrder::ALL {
        let q = Quat::euler(deg(-45.0), deg(60.0), deg(-120.0), order);
        let (x, y, z) = q.euler_angles(order);
        let back = Quat::euler(x, y, z, order);
        same_rotation(back, q);
    }
}

#[test]
fn euler_angles_clamp_drift_at_gimbal_lock() {
    // A slightly non-unit quaternion at pitch 90° pushes the asin argument past 1.
    let q = Quat::euler(deg(0.0), deg(90.0), deg(0.0), RotationOrder::GlobalXYZ) * 1.000001;
    let (x, y, z) = q.euler_angles(RotationOrder::GlobalXYZ);
    assert!(!x.is_nan() && !y.is_nan() && !z.is_nan());
    assert!((y.degrees() - 90.0).abs() < 1e-9);
}

#[test]
fn nan_checks() {
    assert!(Quat::rotation(deg(30.0), Vec3::zero()).is_nan());
    assert!(Quat::new(f64::INFINITY, 0.0, 0.0, 0.0).is_inf());
    assert!(!Quat::identity().is_nan());
}

#[test]
fn display_lists_scalar_part_first() {
    assert_eq!(
        Quat::new(1.0, 0.0, -0.5, 0.25).to_string(),
        "(1.000000, 0.000000, -0.500000, 0.250000)"
    );
}
