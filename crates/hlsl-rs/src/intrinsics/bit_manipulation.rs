//! Bit manipulation intrinsics.

use crate::vector::*;

/// Provides the intrinsic function `countbits`.
pub trait IntrinsicCountBits {
    /// The number of 1 bits in the representation of each component.
    /// Also known as "population count".
    fn countbits(self) -> Self;
}

/// The number of 1 bits in the representation of `e`. Component-wise when
/// `T` is a vector. Also known as "population count".
pub fn countbits<T: IntrinsicCountBits>(e: T) -> T {
    <T as IntrinsicCountBits>::countbits(e)
}

mod countbits {
    use super::*;

    impl IntrinsicCountBits for u32 {
        fn countbits(self) -> Self {
            self.count_ones()
        }
    }

    impl IntrinsicCountBits for i32 {
        fn countbits(self) -> Self {
            self.count_ones() as i32
        }
    }

    macro_rules! impl_countbits_vec {
        ($vec:ident, $scalar:ty) => {
            impl IntrinsicCountBits for $vec<$scalar> {
                fn countbits(self) -> Self {
                    self.map(|c| c.count_ones() as $scalar)
                }
            }
        };
    }
    impl_countbits_vec!(Vec2, u32);
    impl_countbits_vec!(Vec3, u32);
    impl_countbits_vec!(Vec4, u32);
    impl_countbits_vec!(Vec2, i32);
    impl_countbits_vec!(Vec3, i32);
    impl_countbits_vec!(Vec4, i32);
}

/// Provides the intrinsic function `lzcnt`.
pub trait IntrinsicLzcnt {
    /// The number of consecutive 0 bits starting from the most significant
    /// bit. Also known as "clz" in some languages.
    fn lzcnt(self) -> Self;
}

/// The number of consecutive 0 bits starting from the most significant
/// bit of `e`. Component-wise when `T` is a vector.
pub fn lzcnt<T: IntrinsicLzcnt>(e: T) -> T {
    <T as IntrinsicLzcnt>::lzcnt(e)
}

mod lzcnt {
    use super::*;

    impl IntrinsicLzcnt for u32 {
        fn lzcnt(self) -> Self {
            self.leading_zeros()
        }
    }

    impl IntrinsicLzcnt for i32 {
        fn lzcnt(self) -> Self {
            self.leading_zeros() as i32
        }
    }

    macro_rules! impl_lzcnt_vec {
        ($vec:ident, $scalar:ty) => {
            impl IntrinsicLzcnt for $vec<$scalar> {
                fn lzcnt(self) -> Self {
                    self.map(|c| c.leading_zeros() as $scalar)
                }
            }
        };
    }
    impl_lzcnt_vec!(Vec2, u32);
    impl_lzcnt_vec!(Vec3, u32);
    impl_lzcnt_vec!(Vec4, u32);
    impl_lzcnt_vec!(Vec2, i32);
    impl_lzcnt_vec!(Vec3, i32);
    impl_lzcnt_vec!(Vec4, i32);
}

/// Provides the intrinsic function `tzcnt`.
pub trait IntrinsicTzcnt {
    /// The number of consecutive 0 bits starting from the least
    /// significant bit. Also known as "ctz" in some languages.
    fn tzcnt(self) -> Self;
}

/// The number of consecutive 0 bits starting from the least significant
/// bit of `e`. Component-wise when `T` is a vector.
pub fn tzcnt<T: IntrinsicTzcnt>(e: T) -> T {
    <T as IntrinsicTzcnt>::tzcnt(e)
}

mod tzcnt {
    use super::*;

    impl IntrinsicTzcnt for u32 {
        fn tzcnt(self) -> Self {
            self.trailing_zeros()
        }
    }

    impl IntrinsicTzcnt for i32 {
        fn tzcnt(self) -> Self {
            self.trailing_zeros() as i32
        }
    }

    macro_rules! impl_tzcnt_vec {
        ($vec:ident, $scalar:ty) => {
            impl IntrinsicTzcnt for $vec<$scalar> {
                fn tzcnt(self) -> Self {
                    self.map(|c| c.trailing_zeros() as $scalar)
                }
            }
        };
    }
    impl_tzcnt_vec!(Vec2, u32);
    impl_tzcnt_vec!(Vec3, u32);
    impl_tzcnt_vec!(Vec4, u32);
    impl_tzcnt_vec!(Vec2, i32);
    impl_tzcnt_vec!(Vec3, i32);
    impl_tzcnt_vec!(Vec4, i32);
}

/// Provides the intrinsic function `reversebits`.
pub trait IntrinsicReverseBits {
    /// Reverses the bits: the bit at position k of the result equals the
    /// bit at position 31-k of the input.
    fn reversebits(self) -> Self;
}

/// Reverses the bits in `e`: the bit at position k of the result equals
/// the bit at position 31-k of `e`. Component-wise when `T` is a vector.
pub fn reversebits<T: IntrinsicReverseBits>(e: T) -> T {
    <T as IntrinsicReverseBits>::reversebits(e)
}

mod reversebits {
    use super::*;

    impl IntrinsicReverseBits for u32 {
        fn reversebits(self) -> Self {
            self.reverse_bits()
        }
    }

    impl IntrinsicReverseBits for i32 {
        fn reversebits(self) -> Self {
            self.reverse_bits()
        }
    }

    macro_rules! impl_reversebits_vec {
        ($vec:ident, $scalar:ty) => {
            impl IntrinsicReverseBits for $vec<$scalar> {
                fn reversebits(self) -> Self {
                    self.map(|c| c.reverse_bits())
                }
            }
        };
    }
    impl_reversebits_vec!(Vec2, u32);
    impl_reversebits_vec!(Vec3, u32);
    impl_reversebits_vec!(Vec4, u32);
    impl_reversebits_vec!(Vec2, i32);
    impl_reversebits_vec!(Vec3, i32);
    impl_reversebits_vec!(Vec4, i32);
}

#[cfg(test)]
mod test {
    use crate::*;

    #[test]
    fn sanity_countbits() {
        assert_eq!(countbits(0u32), 0);
        assert_eq!(countbits(0b1111u32), 4);
        assert_eq!(countbits(u32::MAX), 32);
        assert_eq!(countbits(-1i32), 32);

        let v = countbits(vec2u(0b1010, 0b1111));
        assert_eq!(v, vec2u(2, 4));
    }

    #[test]
    fn sanity_lzcnt() {
        assert_eq!(lzcnt(0u32), 32);
        assert_eq!(lzcnt(1u32), 31);
        assert_eq!(lzcnt(0x80000000u32), 0);
        assert_eq!(lzcnt(-1i32), 0);

        let v = lzcnt(vec3u(1, 2, 4));
        assert_eq!(v, vec3u(31, 30, 29));
    }

    #[test]
    fn sanity_tzcnt() {
        assert_eq!(tzcnt(0u32), 32);
        assert_eq!(tzcnt(1u32), 0);
        assert_eq!(tzcnt(0b1000u32), 3);
        assert_eq!(tzcnt(0x80000000u32), 31);

        let v = tzcnt(vec2i(0b1000, 0b0100));
        assert_eq!(v, vec2i(3, 2));
    }

    #[test]
    fn sanity_reversebits() {
        assert_eq!(reversebits(0u32), 0);
        assert_eq!(reversebits(1u32), 0x80000000);
        assert_eq!(reversebits(u32::MAX), u32::MAX);
        assert_eq!(reversebits(1i32), i32::MIN);

        let v = reversebits(vec2u(1, 0x80000000));
        assert_eq!(v, vec2u(0x80000000, 1));
    }
}
