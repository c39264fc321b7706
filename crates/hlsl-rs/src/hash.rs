//! The public `hash` routine.
//!
//! Every value type hashes to a `u32` by multiplying its component bit
//! patterns with per-type odd constants and summing with wraparound.
//! Structurally equal values hash equal whenever their components are
//! bit-identical; this is the whole-structure hash the vector, matrix
//! and quaternion types share.

use crate::half::Half;
use crate::matrix::{Mat2x2, Mat2x3, Mat2x4, Mat3x2, Mat3x3, Mat3x4, Mat4x2, Mat4x3, Mat4x4};
use crate::quaternion::Quat;
use crate::vector::{Vec2, Vec3, Vec4};

/// Provides the intrinsic function `hash`.
pub trait IntrinsicHash {
    /// A 32-bit hash of the whole structure.
    fn hash(self) -> u32;
}

/// Returns a 32-bit hash of `v`, derived from its component bit
/// patterns.
pub fn hash<T: IntrinsicHash>(v: T) -> u32 {
    <T as IntrinsicHash>::hash(v)
}

/// Folds a 64-bit pattern into 32 bits.
fn fold64(bits: u64) -> u32 {
    (bits as u32) ^ ((bits >> 32) as u32)
}

impl IntrinsicHash for u32 {
    fn hash(self) -> u32 {
        self.wrapping_mul(0x9B13B92D).wrapping_add(0x4688474D)
    }
}

impl IntrinsicHash for i32 {
    fn hash(self) -> u32 {
        (self as u32).wrapping_mul(0x6E050B01).wrapping_add(0x75C917C5)
    }
}

impl IntrinsicHash for f32 {
    fn hash(self) -> u32 {
        self.to_bits().wrapping_mul(0x68EEE0F5).wrapping_add(0xBC3B0A59)
    }
}

impl IntrinsicHash for f64 {
    fn hash(self) -> u32 {
        fold64(self.to_bits())
            .wrapping_mul(0xB36DE767)
            .wrapping_add(0x6FCA387D)
    }
}

impl IntrinsicHash for bool {
    fn hash(self) -> u32 {
        if self { 0x90A285BB } else { 0xAF0F3103 }
    }
}

impl IntrinsicHash for Half {
    fn hash(self) -> u32 {
        (self.bits as u32)
            .wrapping_mul(0x745ED837)
            .wrapping_add(0x9CDC88F5)
    }
}

/// Hashes a vector as the wrapping sum of its component bit patterns
/// times per-lane odd constants, plus a per-type offset.
macro_rules! impl_hash_vec {
    ($scalar:ty, $to_bits:expr, [$k2a:literal, $k2b:literal, $off2:literal],
     [$k3a:literal, $k3b:literal, $k3c:literal, $off3:literal],
     [$k4a:literal, $k4b:literal, $k4c:literal, $k4d:literal, $off4:literal]) => {
        impl IntrinsicHash for Vec2<$scalar> {
            fn hash(self) -> u32 {
                let b = $to_bits;
                b(self.x)
                    .wrapping_mul($k2a)
                    .wrapping_add(b(self.y).wrapping_mul($k2b))
                    .wrapping_add($off2)
            }
        }

        impl IntrinsicHash for Vec3<$scalar> {
            fn hash(self) -> u32 {
                let b = $to_bits;
                b(self.x)
                    .wrapping_mul($k3a)
                    .wrapping_add(b(self.y).wrapping_mul($k3b))
                    .wrapping_add(b(self.z).wrapping_mul($k3c))
                    .wrapping_add($off3)
            }
        }

        impl IntrinsicHash for Vec4<$scalar> {
            fn hash(self) -> u32 {
                let b = $to_bits;
                b(self.x)
                    .wrapping_mul($k4a)
                    .wrapping_add(b(self.y).wrapping_mul($k4b))
                    .wrapping_add(b(self.z).wrapping_mul($k4c))
                    .wrapping_add(b(self.w).wrapping_mul($k4d))
                    .wrapping_add($off4)
            }
        }
    };
}

impl_hash_vec!(
    u32,
    |v: u32| v,
    [0x83B58237u32, 0x833E3E29u32, 0xA9D919BFu32],
    [0xC3EC1D97u32, 0xB8B208C7u32, 0x5D3ED947u32, 0x4473BBB1u32],
    [0xCBB6B20Bu32, 0x33C0D1E3u32, 0x77EF2D91u32, 0x1053E2C1u32, 0x8C4CA03Fu32]
);
impl_hash_vec!(
    i32,
    |v: i32| v as u32,
    [0xB63D23E7u32, 0x7B6037C3u32, 0x4303AF8Bu32],
    [0x3BEA8FB9u32, 0x829E3F61u32, 0xC8638B43u32, 0x72456BCDu32],
    [0x9DF50593u32, 0xF842C995u32, 0x7CC1B5A9u32, 0xA2C7C02Fu32, 0xBBCB1D79u32]
);
impl_hash_vec!(
    f32,
    |v: f32| v.to_bits(),
    [0x4B7F25C1u32, 0x6E2BF6A9u32, 0xCC74B3B7u32],
    [0x9B13B92Du32, 0x4688474Du32, 0x75C917C5u32, 0x6E050B01u32],
    [0xB492B66Fu32, 0x9D2C5681u32, 0x1B84E297u32, 0xFAD4D543u32, 0x68EEE0F5u32]
);
impl_hash_vec!(
    f64,
    |v: f64| fold64(v.to_bits()),
    [0x5AB3E8CDu32, 0xE16B7B25u32, 0xBFCAB24Fu32],
    [0x9C8A2F05u32, 0x4DDC6509u32, 0x7CF083CBu32, 0x5C4D6CEDu32],
    [0xF9137117u32, 0xE857DCE1u32, 0xF62213C5u32, 0x9CDAA959u32, 0xAA269ABFu32]
);
impl_hash_vec!(
    bool,
    |v: bool| if v { 0x9E3779B9u32 } else { 0x01000193u32 },
    [0x6E624EB7u32, 0x7383ED49u32, 0xDD49C23Bu32],
    [0xEBD0D005u32, 0x91475DF7u32, 0x55E84827u32, 0x90A285BBu32],
    [0xA3D58B6Du32, 0xE18F1F59u32, 0x54B34D7Bu32, 0xE1CB2B09u32, 0xAF0F3103u32]
);

/// Hashes a matrix by folding its column hashes with a wrapping
/// multiplier.
macro_rules! impl_hash_mat {
    ($mat:ident, $vec:ident, [$($c:ident),+]) => {
        impl<T> IntrinsicHash for $mat<T>
        where
            $vec<T>: IntrinsicHash,
        {
            fn hash(self) -> u32 {
                let mut h: u32 = 0x811C9DC5;
                $(
                    h = h
                        .wrapping_mul(0x9E3779B1)
                        .wrapping_add(IntrinsicHash::hash(self.$c));
                )+
                h
            }
        }
    };
}

impl_hash_mat!(Mat2x2, Vec2, [c0, c1]);
impl_hash_mat!(Mat2x3, Vec3, [c0, c1]);
impl_hash_mat!(Mat2x4, Vec4, [c0, c1]);
impl_hash_mat!(Mat3x2, Vec2, [c0, c1, c2]);
impl_hash_mat!(Mat3x3, Vec3, [c0, c1, c2]);
impl_hash_mat!(Mat3x4, Vec4, [c0, c1, c2]);
impl_hash_mat!(Mat4x2, Vec2, [c0, c1, c2, c3]);
impl_hash_mat!(Mat4x3, Vec3, [c0, c1, c2, c3]);
impl_hash_mat!(Mat4x4, Vec4, [c0, c1, c2, c3]);

impl IntrinsicHash for Quat {
    fn hash(self) -> u32 {
        IntrinsicHash::hash(self.to_vec4()).wrapping_add(0x9536A0F5)
    }
}

#[cfg(test)]
mod test {
    use crate::*;

    #[test]
    fn equal_values_hash_equal() {
        let a = vec3f(1.0, 2.0, 3.0);
        let b = vec3f(1.0, 2.0, 3.0);
        assert_eq!(a, b);
        assert_eq!(hash(a), hash(b));

        let m = Mat3x3f::IDENTITY;
        assert_eq!(hash(m), hash(Mat3x3f::IDENTITY));

        assert_eq!(hash(Quat::IDENTITY), hash(quat(0.0, 0.0, 0.0, 1.0)));
        assert_eq!(hash(Half::from_f32(1.5)), hash(Half::from_f32(1.5)));
    }

    #[test]
    fn different_values_hash_differently() {
        assert_ne!(hash(vec2f(1.0, 2.0)), hash(vec2f(2.0, 1.0)));
        assert_ne!(hash(vec2i(0, 1)), hash(vec2i(1, 0)));
        assert_ne!(hash(vec2b(true, false)), hash(vec2b(false, true)));
        assert_ne!(hash(Mat2x2f::IDENTITY), hash(Mat2x2f::ZERO));
        assert_ne!(hash(Quat::IDENTITY), hash(quat(1.0, 0.0, 0.0, 0.0)));
    }

    #[test]
    fn scalar_and_vector_hashes_are_decorrelated() {
        // The same bit pattern in different shapes gets different hashes.
        assert_ne!(hash(1.0f32), hash(1.0f64));
        assert_ne!(hash(vec2f(1.0, 0.0)), hash(vec2d(1.0, 0.0)));
        assert_ne!(hash(1u32), hash(1i32));
    }

    #[test]
    fn hash_does_not_panic_on_extremes() {
        // Wrapping arithmetic: large bit patterns must not overflow.
        let _ = hash(vec4u(u32::MAX, u32::MAX, u32::MAX, u32::MAX));
        let _ = hash(vec4i(i32::MIN, i32::MAX, -1, 0));
        let _ = hash(vec4d(f64::MAX, f64::MIN, f64::INFINITY, 0.0));
        let _ = hash(Mat4x4f::splat(f32::MAX));
    }
}
