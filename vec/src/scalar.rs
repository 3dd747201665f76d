//! The scalar bound shared by vector and swizzle arithmetic.

use num_traits::{Num, NumAssignOps};

/// Numeric component types.
///
/// Anything with the four arithmetic operators, their assigning forms, and `Copy`
/// semantics qualifies; the blanket impl covers the primitive float and integer
/// types. Overflow, `NaN`, and division-by-zero behavior are the scalar type's
/// own — nothing here adds checks on top of it.
pub trait Scalar: Num + NumAssignOps + Copy {}

impl<T: Num + NumAssignOps + Copy> Scalar for T {}
