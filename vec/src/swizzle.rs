//! Swizzle views: write-capable component-pattern views over vectors.
//!
//! A view borrows its backing vector mutably and carries the selected component
//! ranks as const generics, so it owns no storage of its own and cannot outlive
//! the vector it reads from. Reading ([`Swizzle3::get`] and friends) builds a
//! fresh vector from the selected components and is legal for every pattern.
//! Writing (`set` and the compound-assignment operators) exists only on views
//! whose pattern does not repeat a component: a repeated destination would make
//! the write order observable, so those shapes provide [`splat`](Swizzle3::splat)
//! broadcast and nothing else, and an attempted write fails to compile.
//!
//! Views are transient. The accessor methods generated on the vector types
//! (`v.zyx_mut()` etc.) create one for the duration of an expression or a short
//! binding; holding one pins a mutable borrow of the vector, which is exactly
//! the lifetime discipline the aliasing requires.

use crate::scalar::Scalar;
use crate::vector::{IntoVector, Vec2, Vec3, Vec4, Vector};

/// Symbolic rank of one vector component.
///
/// The accessor-name families are synonyms for the same four ranks: `x`/`r`/`s`
/// select rank 0, `y`/`g`/`t` rank 1, `z`/`b`/`p` rank 2, and `w`/`a`/`q`
/// rank 3. Rust enums cannot repeat discriminants, so the color and
/// texture-coordinate names are associated constants of the positional
/// variants.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Comp {
    /// First component.
    X = 0,
    /// Second component.
    Y = 1,
    /// Third component.
    Z = 2,
    /// Fourth component.
    W = 3,
}

impl Comp {
    /// Every rank, in order.
    pub const ALL: [Comp; 4] = [Comp::X, Comp::Y, Comp::Z, Comp::W];

    /// The rank as a storage index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }
}

#[cfg(feature = "rgba")]
impl Comp {
    /// Color-family name of [`Comp::X`].
    pub const R: Comp = Comp::X;
    /// Color-family name of [`Comp::Y`].
    pub const G: Comp = Comp::Y;
    /// Color-family name of [`Comp::Z`].
    pub const B: Comp = Comp::Z;
    /// Color-family name of [`Comp::W`].
    pub const A: Comp = Comp::W;
}

#[cfg(feature = "stpq")]
impl Comp {
    /// Texture-coordinate-family name of [`Comp::X`].
    pub const S: Comp = Comp::X;
    /// Texture-coordinate-family name of [`Comp::Y`].
    pub const T: Comp = Comp::Y;
    /// Texture-coordinate-family name of [`Comp::Z`].
    pub const P: Comp = Comp::Z;
    /// Texture-coordinate-family name of [`Comp::W`].
    pub const Q: Comp = Comp::W;
}

macro_rules! comp_index {
    ($Vec:ident) => {
        impl<T> core::ops::Index<Comp> for $Vec<T> {
            type Output = T;

            #[inline]
            fn index(&self, comp: Comp) -> &T {
                &self[comp.index()]
            }
        }

        impl<T> core::ops::IndexMut<Comp> for $Vec<T> {
            #[inline]
            fn index_mut(&mut self, comp: Comp) -> &mut T {
                &mut self[comp.index()]
            }
        }
    };
}

comp_index!(Vec2);
comp_index!(Vec3);
comp_index!(Vec4);

// -------------------------------------------------------------------------------------------------

macro_rules! swizzle_compound_assign {
    ($View:ident => $Vec:ident, $OpAssign:ident $method:ident, $Op:ident $apply:ident, $($E:ident @ $k:tt),+) => {
        impl<'v, V, $(const $E: usize),+> core::ops::$OpAssign<$Vec<V::Scalar>>
            for $View<'v, V, $($E,)+ false>
        where
            V: Vector,
            V::Scalar: Scalar,
        {
            #[inline]
            fn $method(&mut self, rhs: $Vec<V::Scalar>) {
                // Same scratch discipline as `set`: `rhs` is fully copied out
                // before any destination slot changes.
                let scratch = rhs.to_array();
                $(
                    let current = self.source.component($E);
                    self.source
                        .set_component($E, core::ops::$Op::$apply(current, scratch[$k]));
                )+
            }
        }
    };
}

macro_rules! swizzle_view {
    (
        $(#[$doc:meta])*
        $View:ident => $Vec:ident, dup: ($dup:expr), $($E:ident @ $k:tt),+
    ) => {
        $(#[$doc])*
        #[derive(Debug)]
        pub struct $View<'v, V: Vector, $(const $E: usize,)+ const DUP: bool> {
            source: &'v mut V,
        }

        impl<'v, V: Vector, $(const $E: usize,)+ const DUP: bool> $View<'v, V, $($E,)+ DUP> {
            /// Creates the view over `source`.
            ///
            /// The const parameters are checked when the instantiation is
            /// compiled: every component rank must lie inside the source
            /// vector, and `DUP` must state whether the pattern repeats a
            /// rank. An inconsistent instantiation is a compile error, never a
            /// runtime branch.
            #[inline]
            #[must_use]
            pub fn new(source: &'v mut V) -> Self {
                const {
                    assert!(
                        $($E < V::DIM)&&+,
                        "swizzle component out of range for the source vector",
                    );
                    assert!(DUP == ($dup), "DUP must match the component pattern");
                }
                Self { source }
            }

            /// Reads the selected components into a new vector, in pattern
            /// order.
            ///
            /// Reading never mutates the source and is legal for every
            /// pattern, repeated components included.
            #[inline]
            #[must_use]
            pub fn get(&self) -> $Vec<V::Scalar> {
                $Vec::new($(self.source.component($E)),+)
            }

            /// Writes `value` into every selected component.
            ///
            /// Broadcast is order-independent, so unlike `set` it is available
            /// when the pattern repeats a component.
            #[inline]
            pub fn splat(&mut self, value: V::Scalar) {
                $(self.source.set_component($E, value);)+
            }
        }

        impl<'v, V: Vector, $(const $E: usize),+> $View<'v, V, $($E,)+ false> {
            /// Writes the components of `rhs` into the selected components, in
            /// pattern order.
            ///
            /// `rhs` is copied into a scratch array before the first
            /// destination slot is written, so assigning a vector to a swizzle
            /// of that same vector can never read a slot it has already
            /// overwritten.
            #[inline]
            pub fn set(&mut self, rhs: $Vec<V::Scalar>) {
                let scratch = rhs.to_array();
                $(self.source.set_component($E, scratch[$k]);)+
            }
        }

        impl<'v, V: Vector, $(const $E: usize,)+ const DUP: bool> From<$View<'v, V, $($E,)+ DUP>>
            for $Vec<V::Scalar>
        {
            #[inline]
            fn from(view: $View<'v, V, $($E,)+ DUP>) -> Self {
                view.get()
            }
        }

        impl<'v, V: Vector, $(const $E: usize,)+ const DUP: bool> IntoVector
            for $View<'v, V, $($E,)+ DUP>
        {
            type Vector = $Vec<V::Scalar>;

            #[inline]
            fn into_vector(self) -> Self::Vector {
                self.get()
            }
        }

        swizzle_compound_assign!($View => $Vec, AddAssign add_assign, Add add, $($E @ $k),+);
        swizzle_compound_assign!($View => $Vec, SubAssign sub_assign, Sub sub, $($E @ $k),+);
        swizzle_compound_assign!($View => $Vec, MulAssign mul_assign, Mul mul, $($E @ $k),+);
        swizzle_compound_assign!($View => $Vec, DivAssign div_assign, Div div, $($E @ $k),+);
    };
}

swizzle_view! {
    /// View of two components of a vector.
    ///
    /// Obtained from the generated two-letter `*_mut` accessors, for example
    /// [`Vec3::zx_mut`](crate::Vec3::zx_mut). `E0` and `E1` are the selected
    /// ranks; `DUP` records whether they coincide, which removes the
    /// assignment interface.
    Swizzle2 => Vec2, dup: (E0 == E1), E0 @ 0, E1 @ 1
}

swizzle_view! {
    /// View of three components of a vector.
    ///
    /// Obtained from the generated three-letter `*_mut` accessors, for example
    /// [`Vec4::wzy_mut`](crate::Vec4::wzy_mut). `E0..=E2` are the selected
    /// ranks; `DUP` records whether any two coincide, which removes the
    /// assignment interface.
    Swizzle3 => Vec3, dup: (E0 == E1 || E0 == E2 || E1 == E2), E0 @ 0, E1 @ 1, E2 @ 2
}

swizzle_view! {
    /// View of four components of a vector.
    ///
    /// Obtained from the generated four-letter `*_mut` accessors, for example
    /// [`Vec4::wzyx_mut`](crate::Vec4::wzyx_mut). `E0..=E3` are the selected
    /// ranks; `DUP` records whether any two coincide, which removes the
    /// assignment interface.
    Swizzle4 => Vec4,
    dup: (E0 == E1 || E0 == E2 || E0 == E3 || E1 == E2 || E1 == E3 || E2 == E3),
    E0 @ 0, E1 @ 1, E2 @ 2, E3 @ 3
}
