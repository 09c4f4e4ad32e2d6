// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use proptest::prelude::*;

use lintra::dprec::{Angle, Mat4, Quat, Vec3};

fn vec3(range: std::ops::Range<f64>) -> impl Strategy<Value = Vec3> {
    (range.clone(), range.clone(), range).prop_map(|(x, y, z)| Vec3::new(x, y, z))
}

fn unit_axis() -> impl Strategy<Value = Vec3> {
    vec3(-1.0..1.0)
        .prop_filter("axis must not vanish", |v| v.length() > 0.1)
        .prop_map(Vec3::unit)
}

fn rotation() -> impl Strategy<Value = Quat> {
    (unit_axis(), -180.0..180.0_f64)
        .prop_map(|(axis, degrees)| Quat::rotation(Angle::from_degrees(degrees), axis))
}

fn close(a: f64, b: f64, tol: f64) -> bool {
    (a - b).abs() <= tol * (1.0 + a.abs().max(b.abs()))
}

fn mat_close(a: Mat4, b: Mat4, tol: f64) -> bool {
    a.row_major_array()
        .iter()
        .zip(b.row_major_array().iter())
        .all(|(x, y)| close(*x, *y, tol))
}

proptest! {
    #[test]
    fn inverse_of_trs_cancels(
        t in vec3(-50.0..50.0),
        r in rotation(),
        s in vec3(0.25..4.0),
    ) {
        let m = Mat4::trs(t, r, s);
        prop_assert!(mat_close(m.inverse() * m, Mat4::identity(), 1e-9));
    }

    #[test]
    fn fast_inverse_matches_inverse_for_rigid_transforms(
        t in vec3(-50.0..50.0),
        r in rotation(),
    ) {
        let m = Mat4::trs(t, r, Vec3::new(1.0, 1.0, 1.0));
        prop_assert!(mat_close(m.fast_inverse(), m.inverse(), 1e-9));
    }

    #[test]
    fn trs_decomposition_round_trips(
        t in vec3(-50.0..50.0),
        r in rotation(),
        s in vec3(0.25..4.0),
    ) {
        let (t2, r2, s2) = Mat4::trs(t, r, s).to_trs();
        prop_assert!((t2 - t).length() < 1e-9);
        prop_assert!((s2 - s).length() < 1e-9);
        prop_assert!(close(r2.dot(r).abs(), 1.0, 1e-9));
    }

    #[test]
    fn rotation_preserves_length(r in rotation(), v in vec3(-100.0..100.0)) {
        prop_assert!(close(r.rotate(v).length(), v.length(), 1e-12));
    }

    #[test]
    fn slerp_hits_its_endpoints(a in rotation(), b in rotation()) {
        prop_assert!(close(Quat::slerp(a, b, 0.0).dot(a).abs(), 1.0, 1e-9));
        prop_assert!(close(Quat::slerp(a, b, 1.0).dot(b).abs(), 1.0, 1e-9));
    }

    #[test]
    fn degrees_round_trip_through_radians(degrees in -1.0e4..1.0e4_f64) {
        let back = Angle::from_radians(Angle::from_degrees(degrees).radians()).degrees();
        prop_assert!(close(back, degrees, 1e-12));
    }

    #[test]
    fn normalize_stays_in_range(degrees in -1.0e4..1.0e4_f64) {
        let a = Angle::from_degrees(degrees);
        let signed = a.normalize().degrees();
        let pos = a.normalize_pos().degrees();
        let neg = a.normalize_neg().degrees();
        prop_assert!((-180.0 - 1e-9..=180.0 + 1e-9).contains(&signed));
        prop_assert!((-1e-9..360.0 + 1e-9).contains(&pos));
        prop_assert!((-360.0 - 1e-9..=1e-9).contains(&neg));
        // All three describe the same direction.
        let dir = |deg: f64| Vec3::new(deg.to_radians().cos(), deg.to_radians().sin(), 0.0);
        prop_assert!((dir(signed) - dir(degrees)).length() < 1e-9);
        prop_assert!((dir(pos) - dir(degrees)).length() < 1e-9);
        prop_assert!((dir(neg) - dir(degrees)).length() < 1e-9);
    }
}
