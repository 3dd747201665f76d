//! Conversions to and from the matching [`glam`] vector types.
//!
//! Enabled by the `glam` feature. Only the dimensions and scalars both
//! libraries agree on are covered; `glam`'s SIMD-aligned types (`Vec3A`,
//! `BVec4A`) are not, because their layout is not the plain component layout
//! these conversions promise.

use crate::vector::{Vec2, Vec3, Vec4};

macro_rules! glam_conversions {
    ($Vec:ident, $t:ty, $Glam:ty, { $($field:ident),+ }) => {
        impl From<$Glam> for $Vec<$t> {
            #[inline]
            fn from(v: $Glam) -> Self {
                Self { $($field: v.$field),+ }
            }
        }

        impl From<$Vec<$t>> for $Glam {
            #[inline]
            fn from(v: $Vec<$t>) -> Self {
                <$Glam>::new($(v.$field),+)
            }
        }
    };
}

glam_conversions!(Vec2, f32, glam::Vec2, { x, y });
glam_conversions!(Vec2, f64, glam::DVec2, { x, y });
glam_conversions!(Vec2, i32, glam::IVec2, { x, y });
glam_conversions!(Vec2, u32, glam::UVec2, { x, y });

glam_conversions!(Vec3, f32, glam::Vec3, { x, y, z });
glam_conversions!(Vec3, f64, glam::DVec3, { x, y, z });
glam_conversions!(Vec3, i32, glam::IVec3, { x, y, z });
glam_conversions!(Vec3, u32, glam::UVec3, { x, y, z });

glam_conversions!(Vec4, f32, glam::Vec4, { x, y, z, w });
glam_conversions!(Vec4, f64, glam::DVec4, { x, y, z, w });
glam_conversions!(Vec4, i32, glam::IVec4, { x, y, z, w });
glam_conversions!(Vec4, u32, glam::UVec4, { x, y, z, w });
