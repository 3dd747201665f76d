//! Binary arithmetic between swizzle views, vectors, and scalars.
//!
//! Every operator here follows the same discipline: read each view operand
//! into a concrete vector first, then delegate to the vector (or scalar)
//! operators, returning a fresh vector. Operands are never written through —
//! writing goes through a view's own `set`/compound-assignment interface.
//!
//! Scalar operands on either side are provided per concrete scalar type
//! (`f32`, `f64`, `i32`, `u32`); a generic left-hand scalar impl would be
//! rejected by the orphan rules.

use crate::scalar::Scalar;
use crate::swizzle::{Swizzle2, Swizzle3, Swizzle4};
use crate::vector::{Vec2, Vec3, Vec4, Vector};

macro_rules! swizzle_binop {
    ($View:ident [$($E:ident)+] [$($F:ident)+] => $Vec:ident, $Op:ident $method:ident) => {
        // view ⊕ view, with independent sources and patterns
        impl<'a, 'b, V, W, $(const $E: usize,)+ $(const $F: usize,)+ const DA: bool, const DB: bool>
            core::ops::$Op<$View<'b, W, $($F,)+ DB>> for $View<'a, V, $($E,)+ DA>
        where
            V: Vector,
            W: Vector<Scalar = V::Scalar>,
            V::Scalar: Scalar,
        {
            type Output = $Vec<V::Scalar>;

            #[inline]
            fn $method(self, rhs: $View<'b, W, $($F,)+ DB>) -> Self::Output {
                core::ops::$Op::$method(self.get(), rhs.get())
            }
        }

        // view ⊕ vector
        impl<'a, V, $(const $E: usize,)+ const DA: bool> core::ops::$Op<$Vec<V::Scalar>>
            for $View<'a, V, $($E,)+ DA>
        where
            V: Vector,
            V::Scalar: Scalar,
        {
            type Output = $Vec<V::Scalar>;

            #[inline]
            fn $method(self, rhs: $Vec<V::Scalar>) -> Self::Output {
                core::ops::$Op::$method(self.get(), rhs)
            }
        }

        // vector ⊕ view
        impl<'a, V, $(const $E: usize,)+ const DA: bool> core::ops::$Op<$View<'a, V, $($E,)+ DA>>
            for $Vec<V::Scalar>
        where
            V: Vector,
            V::Scalar: Scalar,
        {
            type Output = $Vec<V::Scalar>;

            #[inline]
            fn $method(self, rhs: $View<'a, V, $($E,)+ DA>) -> Self::Output {
                core::ops::$Op::$method(self, rhs.get())
            }
        }
    };
}

macro_rules! swizzle_binops {
    ($View:ident [$($E:ident)+] [$($F:ident)+] => $Vec:ident) => {
        swizzle_binop!($View [$($E)+] [$($F)+] => $Vec, Add add);
        swizzle_binop!($View [$($E)+] [$($F)+] => $Vec, Sub sub);
        swizzle_binop!($View [$($E)+] [$($F)+] => $Vec, Mul mul);
        swizzle_binop!($View [$($E)+] [$($F)+] => $Vec, Div div);
    };
}

swizzle_binops!(Swizzle2 [E0 E1] [F0 F1] => Vec2);
swizzle_binops!(Swizzle3 [E0 E1 E2] [F0 F1 F2] => Vec3);
swizzle_binops!(Swizzle4 [E0 E1 E2 E3] [F0 F1 F2 F3] => Vec4);

macro_rules! swizzle_scalar_binop {
    ($View:ident [$($E:ident)+] => $Vec:ident, $t:ty, $Op:ident $method:ident) => {
        // view ⊕ scalar
        impl<'a, V, $(const $E: usize,)+ const DA: bool> core::ops::$Op<$t>
            for $View<'a, V, $($E,)+ DA>
        where
            V: Vector<Scalar = $t>,
        {
            type Output = $Vec<$t>;

            #[inline]
            fn $method(self, rhs: $t) -> Self::Output {
                core::ops::$Op::$method(self.get(), rhs)
            }
        }

        // scalar ⊕ view
        impl<'a, V, $(const $E: usize,)+ const DA: bool> core::ops::$Op<$View<'a, V, $($E,)+ DA>>
            for $t
        where
            V: Vector<Scalar = $t>,
        {
            type Output = $Vec<$t>;

            #[inline]
            fn $method(self, rhs: $View<'a, V, $($E,)+ DA>) -> Self::Output {
                core::ops::$Op::$method(self, rhs.get())
            }
        }
    };
}

macro_rules! swizzle_scalar_binops {
    ($View:ident [$($E:ident)+] => $Vec:ident, $t:ty $(, $rest:ty)*) => {
        swizzle_scalar_binop!($View [$($E)+] => $Vec, $t, Add add);
        swizzle_scalar_binop!($View [$($E)+] => $Vec, $t, Sub sub);
        swizzle_scalar_binop!($View [$($E)+] => $Vec, $t, Mul mul);
        swizzle_scalar_binop!($View [$($E)+] => $Vec, $t, Div div);
        swizzle_scalar_binops!($View [$($E)+] => $Vec $(, $rest)*);
    };
    ($View:ident [$($E:ident)+] => $Vec:ident $(,)?) => {};
}

swizzle_scalar_binops!(Swizzle2 [E0 E1] => Vec2, f32, f64, i32, u32);
swizzle_scalar_binops!(Swizzle3 [E0 E1 E2] => Vec3, f32, f64, i32, u32);
swizzle_scalar_binops!(Swizzle4 [E0 E1 E2 E3] => Vec4, f32, f64, i32, u32);
