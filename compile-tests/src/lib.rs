//! Compile-time properties of the `swizzle-vec` surface.
//!
//! The load-bearing guarantees of the swizzle views are negative: writing
//! through a pattern that repeats a component must not compile, with no
//! runtime check standing in for the rejection. Those properties cannot be
//! exercised by ordinary `#[test]` functions, so this crate expresses them as
//! documentation tests — each `compile_fail` example pins a rejection, next
//! to a compiling twin that shows the accepted form. Run them with
//! `cargo test --doc`.

/// Assignment through swizzle views.
///
/// A pattern without repeated components accepts a vector:
///
/// ```
/// use swizzle_vec::{Vec2, vec3};
///
/// let mut v = vec3(1.0_f32, 2.0, 3.0);
/// v.zx_mut().set(Vec2::new(30.0, 10.0));
/// assert_eq!(v.to_array(), [10.0, 2.0, 30.0]);
/// ```
///
/// A pattern that repeats a component instantiates the view shape that has no
/// `set` method, so the same call does not compile:
///
/// ```compile_fail,E0599
/// use swizzle_vec::{Vec2, vec3};
///
/// let mut v = vec3(1.0_f32, 2.0, 3.0);
/// v.zz_mut().set(Vec2::new(30.0, 10.0));
/// ```
///
/// The rule is per-pattern, not per-length; a four-letter pattern with any
/// repeat is rejected the same way:
///
/// ```compile_fail,E0599
/// use swizzle_vec::{Vec4, vec2};
///
/// let mut v = vec2(1_i32, 2);
/// v.xxyy_mut().set(Vec4::new(1, 2, 3, 4));
/// ```
pub mod assignment {}

/// Compound assignment through swizzle views.
///
/// The four compound operators exist only on views whose pattern has no
/// repeated component:
///
/// ```
/// use swizzle_vec::{vec2, vec4};
///
/// let mut v = vec4(1.0_f32, 2.0, 3.0, 4.0);
/// let mut view = v.wy_mut();
/// view += vec2(10.0, 20.0);
/// assert_eq!(v.to_array(), [1.0, 22.0, 3.0, 14.0]);
/// ```
///
/// On a repeated-component pattern the operator is simply not implemented:
///
/// ```compile_fail,E0368
/// use swizzle_vec::{vec2, vec4};
///
/// let mut v = vec4(1.0_f32, 2.0, 3.0, 4.0);
/// let mut view = v.ww_mut();
/// view += vec2(10.0, 20.0);
/// ```
///
/// and neither is the explicit trait method:
///
/// ```compile_fail,E0599
/// use core::ops::MulAssign as _;
/// use swizzle_vec::{vec2, vec3};
///
/// let mut v = vec3(1.0_f32, 2.0, 3.0);
/// v.yzy_mut().mul_assign(vec3(1.0, 2.0, 3.0));
/// ```
pub mod compound_assignment {}

/// Broadcast through swizzle views.
///
/// Writing the same scalar to every selected slot is order-independent, so it
/// remains available on repeated-component patterns:
///
/// ```
/// use swizzle_vec::vec3;
///
/// let mut v = vec3(1_i32, 2, 3);
/// v.xx_mut().splat(9);
/// v.zy_mut().splat(0);
/// assert_eq!(v.to_array(), [9, 0, 0]);
/// ```
pub mod broadcast {}

/// Hand-built views.
///
/// The generated accessors always instantiate views consistently; a view
/// built by hand is checked when its instantiation is compiled. A component
/// rank outside the source vector is rejected:
///
/// ```compile_fail
/// use swizzle_vec::{Swizzle2, Vec2};
///
/// let mut v = Vec2::new(1.0_f32, 2.0);
/// let view = Swizzle2::<Vec2<f32>, 0, 2, false>::new(&mut v);
/// ```
///
/// as is a duplicate flag that contradicts the pattern:
///
/// ```compile_fail
/// use swizzle_vec::{Swizzle2, Vec2};
///
/// let mut v = Vec2::new(1.0_f32, 2.0);
/// let view = Swizzle2::<Vec2<f32>, 0, 0, false>::new(&mut v);
/// ```
///
/// while a consistent hand-built view behaves like a generated one:
///
/// ```
/// use swizzle_vec::{Swizzle2, Vec2};
///
/// let mut v = Vec2::new(1.0_f32, 2.0);
/// let mut view = Swizzle2::<Vec2<f32>, 1, 0, false>::new(&mut v);
/// view.set(Vec2::new(20.0, 10.0));
/// assert_eq!(v.to_array(), [10.0, 20.0]);
/// ```
pub mod hand_built {}
