//! Bit-reinterpretation intrinsics: `asfloat`, `asint`, `asuint`.
//!
//! These reinterpret the raw bit pattern of the source value as the target
//! type (e.g. `asfloat(0x3F800000u32)` yields `1.0`), unlike the value
//! conversions on the vector types, which preserve numeric value.

use crate::vector::{Vec2, Vec3, Vec4, Vec2f, Vec2i, Vec2u, Vec3f, Vec3i, Vec3u, Vec4f, Vec4i, Vec4u};

/// Trait for bitcast operations that reinterpret bits from one type as
/// another.
pub trait Bitcast<T> {
    /// Reinterpret the bits of `self` as type `T`.
    fn bitcast(self) -> T;
}

/// Maps a 32-bit-component value type to its same-layout float, int and
/// uint counterparts, so the `as*` intrinsics can name their target type.
pub trait BitPatterns {
    /// The `f32`-component counterpart.
    type Float;
    /// The `i32`-component counterpart.
    type Int;
    /// The `u32`-component counterpart.
    type Uint;
}

macro_rules! impl_bit_patterns {
    ($float:ty, $int:ty, $uint:ty) => {
        impl BitPatterns for $float {
            type Float = $float;
            type Int = $int;
            type Uint = $uint;
        }
        impl BitPatterns for $int {
            type Float = $float;
            type Int = $int;
            type Uint = $uint;
        }
        impl BitPatterns for $uint {
            type Float = $float;
            type Int = $int;
            type Uint = $uint;
        }
    };
}

impl_bit_patterns!(f32, i32, u32);
impl_bit_patterns!(Vec2f, Vec2i, Vec2u);
impl_bit_patterns!(Vec3f, Vec3i, Vec3u);
impl_bit_patterns!(Vec4f, Vec4i, Vec4u);

/// Reinterpret the bits of `e` as the float counterpart of its type.
///
/// Component-wise when `e` is a vector.
pub fn asfloat<T>(e: T) -> T::Float
where
    T: BitPatterns + Bitcast<<T as BitPatterns>::Float>,
{
    e.bitcast()
}

/// Reinterpret the bits of `e` as the signed-integer counterpart of its
/// type.
///
/// Component-wise when `e` is a vector.
pub fn asint<T>(e: T) -> T::Int
where
    T: BitPatterns + Bitcast<<T as BitPatterns>::Int>,
{
    e.bitcast()
}

/// Reinterpret the bits of `e` as the unsigned-integer counterpart of its
/// type.
///
/// Component-wise when `e` is a vector.
pub fn asuint<T>(e: T) -> T::Uint
where
    T: BitPatterns + Bitcast<<T as BitPatterns>::Uint>,
{
    e.bitcast()
}

// Identity impls: reinterpreting as the same type is self.
impl Bitcast<f32> for f32 {
    fn bitcast(self) -> f32 {
        self
    }
}
impl Bitcast<u32> for u32 {
    fn bitcast(self) -> u32 {
        self
    }
}
impl Bitcast<i32> for i32 {
    fn bitcast(self) -> i32 {
        self
    }
}

// Scalar cross-type bitcasts.
impl Bitcast<f32> for u32 {
    fn bitcast(self) -> f32 {
        f32::from_bits(self)
    }
}
impl Bitcast<f32> for i32 {
    fn bitcast(self) -> f32 {
        f32::from_ne_bytes(self.to_ne_bytes())
    }
}
impl Bitcast<u32> for f32 {
    fn bitcast(self) -> u32 {
        self.to_bits()
    }
}
impl Bitcast<u32> for i32 {
    fn bitcast(self) -> u32 {
        u32::from_ne_bytes(self.to_ne_bytes())
    }
}
impl Bitcast<i32> for f32 {
    fn bitcast(self) -> i32 {
        i32::from_ne_bytes(self.to_ne_bytes())
    }
}
impl Bitcast<i32> for u32 {
    fn bitcast(self) -> i32 {
        i32::from_ne_bytes(self.to_ne_bytes())
    }
}

// Vector bitcasts: component-wise reinterpretation of bits.
macro_rules! impl_vec_bitcast {
    ($vec:ident, $src_scalar:ty, $dst_scalar:ty) => {
        impl Bitcast<$vec<$dst_scalar>> for $vec<$src_scalar> {
            fn bitcast(self) -> $vec<$dst_scalar> {
                self.map(|s| Bitcast::<$dst_scalar>::bitcast(s))
            }
        }
    };
}

macro_rules! impl_vec_bitcast_grid {
    ($vec:ident) => {
        impl_vec_bitcast!($vec, f32, f32);
        impl_vec_bitcast!($vec, i32, i32);
        impl_vec_bitcast!($vec, u32, u32);
        impl_vec_bitcast!($vec, u32, f32);
        impl_vec_bitcast!($vec, i32, f32);
        impl_vec_bitcast!($vec, f32, u32);
        impl_vec_bitcast!($vec, i32, u32);
        impl_vec_bitcast!($vec, f32, i32);
        impl_vec_bitcast!($vec, u32, i32);
    };
}

impl_vec_bitcast_grid!(Vec2);
impl_vec_bitcast_grid!(Vec3);
impl_vec_bitcast_grid!(Vec4);

#[cfg(test)]
mod test {
    use crate::*;

    #[test]
    fn sanity_scalar_bitcasts() {
        // IEEE 754: 0x3F800000 == 1.0f32
        assert_eq!(asfloat(0x3F800000u32), 1.0f32);
        assert_eq!(asfloat(0x3F800000i32), 1.0f32);
        assert_eq!(asuint(1.0f32), 0x3F800000u32);
        assert_eq!(asint(1.0f32), 0x3F800000i32);
        assert_eq!(asint(0xFFFFFFFFu32), -1i32);
        assert_eq!(asuint(-1i32), 0xFFFFFFFFu32);
    }

    #[test]
    fn sanity_identity_bitcasts() {
        assert_eq!(asfloat(2.5f32), 2.5f32);
        assert_eq!(asuint(42u32), 42u32);
        assert_eq!(asint(-42i32), -42i32);
    }

    #[test]
    fn bitcast_roundtrip() {
        let original = std::f32::consts::PI;
        let bits: u32 = asuint(original);
        let back: f32 = asfloat(bits);
        assert_eq!(original, back);

        let neg = -std::f32::consts::E;
        let signed: i32 = asint(neg);
        let back: f32 = asfloat(signed);
        assert_eq!(neg, back);
    }

    #[test]
    fn sign_bit_flip_via_xor() {
        // Flipping the sign bit through the integer domain negates the
        // float; this idiom backs the branchless rotation constructions.
        let x = 3.5f32;
        let flipped: f32 = asfloat(asuint(x) ^ 0x80000000u32);
        assert_eq!(flipped, -3.5f32);
    }

    #[test]
    fn sanity_vector_bitcasts() {
        let v = vec2u(0x3F800000, 0x40000000); // 1.0, 2.0
        let f: Vec2f = asfloat(v);
        assert_eq!(f, vec2f(1.0, 2.0));

        let u: Vec2u = asuint(f);
        assert_eq!(u, v);

        let i: Vec4i = asint(vec4u(0xFFFFFFFF, 0, 1, 0x80000000));
        assert_eq!(i, vec4i(-1, 0, 1, i32::MIN));

        let idem: Vec3f = asfloat(vec3f(1.0, 2.0, 3.0));
        assert_eq!(idem, vec3f(1.0, 2.0, 3.0));
    }
}
