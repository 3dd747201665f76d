//! Shader-style swizzle accessors for small fixed-size vectors.
//!
//! This crate provides plain 2-, 3- and 4-component vector types together with
//! the full swizzle accessor surface of shading languages: every 2- to 4-letter
//! combination of a component-name family is a method, both as a value-producing
//! read (`v.zyx()`) and as a writable view over the vector's own storage
//! (`v.zyx_mut()`).
//!
//! Views are where the interesting rules live:
//!
//! - a view borrows the vector and owns nothing, so it can never dangle;
//! - reading a view (or converting it with [`From`]/[`Into`]) builds a fresh
//!   vector and never mutates the source;
//! - writing through a view (`set`, `+=`, `-=`, `*=`, `/=`) copies the operand
//!   out before touching any destination slot, so assigning a vector to a
//!   swizzle of itself is well-defined;
//! - a pattern that repeats a component (`xx`, `xzx`, …) has no assignment
//!   interface at all — writing through it is a compile error, not a runtime
//!   one. Broadcast ([`Swizzle2::splat`] etc.) stays available because it is
//!   order-independent.
//!
//! ```
//! use swizzle_vec::{Vec2, vec3};
//!
//! let mut v = vec3(1.0_f32, 2.0, 3.0);
//! assert_eq!(v.zxy(), vec3(3.0, 1.0, 2.0));
//!
//! v.xz_mut().set(Vec2::new(10.0, 30.0));
//! assert_eq!(v.to_array(), [10.0, 2.0, 30.0]);
//!
//! let mut view = v.yz_mut();
//! view += Vec2::splat(1.0);
//! assert_eq!(v.to_array(), [10.0, 3.0, 31.0]);
//! ```
//!
//! Arithmetic (`+ - * /`) accepts any mix of views, vectors and scalars, always
//! by reading views into vectors first; see the [`dot`] and [`abs`] functions
//! for the same treatment of the free functions.
//!
//! # Crate features
//!
//! The accessor-name families are individually selectable; all three are on by
//! default.
//!
//! - `xyzw` — positional names.
//! - `rgba` — color names.
//! - `stpq` — texture-coordinate names.
//! - `glam` (off by default) — `From` conversions to and from the matching
//!   [`glam`] types.
//!
//! The crate is `no_std`.

#![no_std]

mod ops;
mod scalar;
mod swizzle;
mod vector;

#[cfg(feature = "glam")]
mod convert;

pub use scalar::Scalar;
pub use swizzle::{Comp, Swizzle2, Swizzle3, Swizzle4};
pub use vector::*;

/// Returns the dot product of `a` and `b`.
///
/// Both arguments may be vectors or swizzle views in any combination; a view
/// argument is read into a concrete vector first.
///
/// ```
/// use swizzle_vec::{dot, vec3};
///
/// let a = vec3(1.0_f32, 2.0, 3.0);
/// let mut b = vec3(4.0, 5.0, 6.0);
/// assert_eq!(dot(a, b.zyx_mut()), 1.0 * 6.0 + 2.0 * 5.0 + 3.0 * 4.0);
/// ```
#[inline]
#[must_use]
pub fn dot<A, B>(a: A, b: B) -> <A::Vector as Vector>::Scalar
where
    A: IntoVector,
    B: IntoVector<Vector = A::Vector>,
    <A::Vector as Vector>::Scalar: Scalar,
{
    Vector::dot(a.into_vector(), b.into_vector())
}

/// Returns the component-wise absolute value.
///
/// The argument may be a vector or a swizzle view; a view is read into a
/// concrete vector first.
///
/// ```
/// use swizzle_vec::{abs, vec2};
///
/// let mut v = vec2(-1.0_f32, 2.0);
/// assert_eq!(abs(v.yx_mut()), vec2(2.0, 1.0));
/// ```
#[inline]
#[must_use]
pub fn abs<A>(v: A) -> A::Vector
where
    A: IntoVector,
    <A::Vector as Vector>::Scalar: Scalar + num_traits::Signed,
{
    Vector::abs(v.into_vector())
}
