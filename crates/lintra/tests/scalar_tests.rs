// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(missing_docs)]
use lintra::scalar;
use lintra::{dprec, sprec};

#[test]
fn precision_constants_stay_distinct() {
    assert_eq!(sprec::EPSILON, 0.000001);
    assert_eq!(dprec::EPSILON, 0.000000000001);
    assert_eq!(dprec::PI, core::f64::consts::PI);
    assert_eq!(sprec::PI, core::f32::consts::PI);
}

#[test]
fn eq_uses_the_precision_epsilon() {
    // 1e-9 apart: equal in single precision, distinct in double.
    assert!(scalar::eq(1.0_f32, 1.0 + 1e-9));
    assert!(!scalar::eq(1.0_f64, 1.0 + 1e-9));
    assert!(scalar::eq(1.0_f64, 1.0 + 1e-13));
}

#[test]
fn clamp_min_max() {
    assert_eq!(scalar::clamp(1.5_f64, 0.0, 1.0), 1.0);
    assert_eq!(scalar::clamp(-0.5_f64, 0.0, 1.0), 0.0);
    assert_eq!(scalar::clamp(0.25_f64, 0.0, 1.0), 0.25);
    assert_eq!(scalar::min(2.0_f32, -3.0), -3.0);
    assert_eq!(scalar::max(2.0_f32, -3.0), 2.0);
}

#[test]
fn mix_blends_linearly() {
    assert_eq!(scalar::mix(10.0_f64, 20.0, 0.0), 10.0);
    assert_eq!(scalar::mix(10.0_f64, 20.0, 1.0), 20.0);
    assert_eq!(scalar::mix(10.0_f64, 20.0, 0.25), 12.5);
}

#[test]
fn validity_checks() {
    assert!(scalar::is_valid(1.0_f64));
    assert!(!scalar::is_valid(f64::NAN));
    assert!(!scalar::is_valid(f32::NEG_INFINITY));
    assert_eq!(scalar::abs(-2.5_f64), 2.5);
    assert_eq!(scalar::sqrt(16.0_f32), 4.0);
    assert!(scalar::sqrt(-1.0_f64).is_nan());
}

#[test]
fn trig_wrappers_bridge_angles() {
    let a = dprec::Angle::from_degrees(60.0);
    assert!((scalar::cos(a) - 0.5).abs() < 1e-12);
    assert!((scalar::sin(a) - 0.75_f64.sqrt()).abs() < 1e-12);
    assert!((scalar::tan(dprec::Angle::from_degrees(45.0)) - 1.0).abs() < 1e-12);
    assert!((scalar::acos(0.5_f64).degrees() - 60.0).abs() < 1e-9);
    assert!((scalar::asin(0.5_f64).degrees() - 30.0).abs() < 1e-9);
    assert!((scalar::atan2(1.0_f64, -1.0).degrees() - 135.0).abs() < 1e-9);
    assert!(scalar::acos(1.5_f64).is_nan());
}
