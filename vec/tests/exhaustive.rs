//! Exhaustive coverage: every permutation round-trips, and reads/writes hold
//! for every boolean component combination.

use exhaust::Exhaust as _;
use pretty_assertions::assert_eq;

use swizzle_vec::{Vec2, Vec4, vec2, vec3, vec4};

/// Asserts `v.P = v.P` leaves `v` unchanged for each listed permutation
/// accessor pair.
macro_rules! permutation_round_trips {
    ($v:expr; $($read:ident / $write:ident),+ $(,)?) => {
        $(
            {
                let mut v = $v;
                let before = v;
                let m = v.$read();
                v.$write().set(m);
                assert_eq!(v, before, stringify!($read));
            }
        )+
    };
}

#[test]
fn every_vec2_permutation_round_trips() {
    permutation_round_trips!(vec2(1.0_f32, 2.0); xy / xy_mut, yx / yx_mut);
}

#[test]
fn every_vec3_permutation_round_trips() {
    permutation_round_trips!(
        vec3(1_i32, 2, 3);
        xyz / xyz_mut, xzy / xzy_mut,
        yxz / yxz_mut, yzx / yzx_mut,
        zxy / zxy_mut, zyx / zyx_mut,
    );
}

#[test]
fn every_vec4_permutation_round_trips() {
    permutation_round_trips!(
        vec4(1_i32, 2, 3, 4);
        xyzw / xyzw_mut, xywz / xywz_mut, xzyw / xzyw_mut, xzwy / xzwy_mut,
        xwyz / xwyz_mut, xwzy / xwzy_mut,
        yxzw / yxzw_mut, yxwz / yxwz_mut, yzxw / yzxw_mut, yzwx / yzwx_mut,
        ywxz / ywxz_mut, ywzx / ywzx_mut,
        zxyw / zxyw_mut, zxwy / zxwy_mut, zyxw / zyxw_mut, zywx / zywx_mut,
        zwxy / zwxy_mut, zwyx / zwyx_mut,
        wxyz / wxyz_mut, wxzy / wxzy_mut, wyxz / wyxz_mut, wyzx / wyzx_mut,
        wzxy / wzxy_mut, wzyx / wzyx_mut,
    );
}

#[test]
fn reads_hold_for_every_bool_vector() {
    for [a, b, c, d] in <[bool; 4]>::exhaust() {
        let v = Vec4::new(a, b, c, d);
        assert_eq!(v.wzyx(), Vec4::new(d, c, b, a));
        assert_eq!(v.xxzz(), Vec4::new(a, a, c, c));
        assert_eq!(v.yw(), Vec2::new(b, d));
    }
}

#[test]
fn writes_hold_for_every_bool_vector() {
    for [a, b, c, d] in <[bool; 4]>::exhaust() {
        let mut v = Vec4::new(a, b, c, d);
        v.wx_mut().set(Vec2::new(a, d));
        assert_eq!(v, Vec4::new(d, b, c, a));

        let mut v = Vec4::new(a, b, c, d);
        v.xyzw_mut().splat(a);
        assert_eq!(v, Vec4::splat(a));
    }
}

#[test]
fn self_assignment_holds_for_every_bool_vector() {
    for [a, b] in <[bool; 2]>::exhaust() {
        let mut v = Vec2::new(a, b);
        let m = v.yx();
        v.yx_mut().set(m);
        assert_eq!(v, Vec2::new(a, b));
    }
}
