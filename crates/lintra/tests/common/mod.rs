// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>

#![allow(dead_code)]

use lintra::dprec;

pub fn approx_eq<const N: usize>(a: [f64; N], b: [f64; N]) {
    const ABS_TOL: f64 = 1e-9;
    const REL_TOL: f64 = 1e-9;
    for i in 0..N {
        let diff = (a[i] - b[i]).abs();
        let scale = a[i].abs().max(b[i].abs());
        let tol = ABS_TOL.max(REL_TOL * scale);
        assert!(
            diff <= tol,
            "index {i}: {a:?} vs {b:?}, diff={diff}, tol={tol} (scale={scale})"
        );
    }
}

pub fn approx_eq_f32<const N: usize>(a: [f32; N], b: [f32; N]) {
    const ABS_TOL: f32 = 1e-5;
    const REL_TOL: f32 = 1e-5;
    for i in 0..N {
        let diff = (a[i] - b[i]).abs();
        let scale = a[i].abs().max(b[i].abs());
        let tol = ABS_TOL.max(REL_TOL * scale);
        assert!(
            diff <= tol,
            "index {i}: {a:?} vs {b:?}, diff={diff}, tol={tol} (scale={scale})"
        );
    }
}

pub fn approx_eq_mat4(a: dprec::Mat4, b: dprec::Mat4) {
    approx_eq(a.row_major_array(), b.row_major_array());
}

pub fn approx_eq_mat3(a: dprec::Mat3, b: dprec::Mat3) {
    approx_eq(a.row_major_array(), b.row_major_array());
}

/// Unit quaternions `q` and `-q` describe the same rotation.
pub fn same_rotation(a: dprec::Quat, b: dprec::Quat) {
    let dot = a.dot(b).abs();
    assert!((dot - 1.0).abs() < 1e-9, "{a} vs {b}: |dot|={dot}");
}
