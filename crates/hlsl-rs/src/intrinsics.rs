//! Traits that provide HLSL's intrinsic functions.
//!
//! Each intrinsic is a trait (`IntrinsicAbs`, `IntrinsicDot`, ...) plus a
//! free function that dispatches through it, so one name covers scalars
//! and every vector arity. Component-wise unless noted otherwise.

use crate::vector::*;

pub mod bit_manipulation;

/// Defines one component-wise float intrinsic: the trait, the dispatching
/// free function, and impls for `f32`, `f64` and their vectors.
macro_rules! float_unary_intrinsic {
    ($trait:ident, $name:ident, $scalar_fn:expr, $doc:literal) => {
        #[doc = concat!("Provides the intrinsic function `", stringify!($name), "`.")]
        pub trait $trait {
            #[doc = $doc]
            fn $name(self) -> Self;
        }

        #[doc = $doc]
        #[doc = ""]
        #[doc = "Component-wise when `T` is a vector."]
        pub fn $name<T: $trait>(e: T) -> T {
            <T as $trait>::$name(e)
        }

        impl $trait for f32 {
            fn $name(self) -> Self {
                let f: fn(f32) -> f32 = $scalar_fn;
                f(self)
            }
        }

        impl $trait for f64 {
            fn $name(self) -> Self {
                let f: fn(f64) -> f64 = $scalar_fn;
                f(self)
            }
        }

        impl $trait for Vec2<f32> {
            fn $name(self) -> Self {
                self.map($scalar_fn)
            }
        }

        impl $trait for Vec3<f32> {
            fn $name(self) -> Self {
                self.map($scalar_fn)
            }
        }

        impl $trait for Vec4<f32> {
            fn $name(self) -> Self {
                self.map($scalar_fn)
            }
        }

        impl $trait for Vec2<f64> {
            fn $name(self) -> Self {
                self.map($scalar_fn)
            }
        }

        impl $trait for Vec3<f64> {
            fn $name(self) -> Self {
                self.map($scalar_fn)
            }
        }

        impl $trait for Vec4<f64> {
            fn $name(self) -> Self {
                self.map($scalar_fn)
            }
        }
    };
}

float_unary_intrinsic!(
    IntrinsicAcos,
    acos,
    |x| x.acos(),
    "Returns the principal value, in radians, of the inverse cosine of `e`."
);
float_unary_intrinsic!(
    IntrinsicAsin,
    asin,
    |x| x.asin(),
    "Returns the principal value, in radians, of the inverse sine of `e`."
);
float_unary_intrinsic!(
    IntrinsicAtan,
    atan,
    |x| x.atan(),
    "Returns the principal value, in radians, of the inverse tangent of `e`."
);
float_unary_intrinsic!(IntrinsicCeil, ceil, |x| x.ceil(), "Returns the ceiling of `e`.");
float_unary_intrinsic!(
    IntrinsicCos,
    cos,
    |x| x.cos(),
    "Returns the cosine of `e`, where `e` is in radians."
);
float_unary_intrinsic!(
    IntrinsicDegrees,
    degrees,
    |x| x.to_degrees(),
    "Converts radians to degrees."
);
float_unary_intrinsic!(
    IntrinsicExp,
    exp,
    |x| x.exp(),
    "Returns the natural exponentiation of `e`."
);
float_unary_intrinsic!(
    IntrinsicExp2,
    exp2,
    |x| x.exp2(),
    "Returns 2 raised to the power `e`."
);
float_unary_intrinsic!(IntrinsicFloor, floor, |x| x.floor(), "Returns the floor of `e`.");
float_unary_intrinsic!(
    IntrinsicFrac,
    frac,
    |x| x - x.floor(),
    "Returns the fractional part of `e`, computed as `e - floor(e)`."
);
float_unary_intrinsic!(
    IntrinsicLog,
    log,
    |x| x.ln(),
    "Returns the natural logarithm of `e`."
);
float_unary_intrinsic!(
    IntrinsicLog2,
    log2,
    |x| x.log2(),
    "Returns the base-2 logarithm of `e`."
);
float_unary_intrinsic!(
    IntrinsicRadians,
    radians,
    |x| x.to_radians(),
    "Converts degrees to radians."
);
float_unary_intrinsic!(
    IntrinsicRound,
    round,
    |x| x.round(),
    "Rounds `e` to the nearest integer."
);
float_unary_intrinsic!(
    IntrinsicRsqrt,
    rsqrt,
    |x| x.sqrt().recip(),
    "Returns the reciprocal of the square root of `e`."
);
float_unary_intrinsic!(
    IntrinsicSaturate,
    saturate,
    |x| x.clamp(0.0, 1.0),
    "Clamps `e` to the range [0, 1]."
);
float_unary_intrinsic!(
    IntrinsicSin,
    sin,
    |x| x.sin(),
    "Returns the sine of `e`, where `e` is in radians."
);
float_unary_intrinsic!(
    IntrinsicSqrt,
    sqrt,
    |x| x.sqrt(),
    "Returns the square root of `e`."
);
float_unary_intrinsic!(
    IntrinsicTan,
    tan,
    |x| x.tan(),
    "Returns the tangent of `e`, where `e` is in radians."
);
float_unary_intrinsic!(
    IntrinsicTrunc,
    trunc,
    |x| x.trunc(),
    "Truncates `e` towards zero."
);

/// Provides the intrinsic function `abs`.
pub trait IntrinsicAbs {
    /// The absolute value of `e`.
    /// * For floats the result is `e` with a positive sign bit.
    /// * For unsigned integers the result is `e`.
    /// * For the largest negative signed integer, the result is `e`.
    fn abs(self) -> Self;
}

/// The absolute value of `e`. Component-wise when `T` is a vector.
pub fn abs<T: IntrinsicAbs>(e: T) -> T {
    <T as IntrinsicAbs>::abs(e)
}

mod abs {
    use super::*;

    macro_rules! impl_abs_scalar {
        ($ty:ty) => {
            impl IntrinsicAbs for $ty {
                fn abs(self) -> Self {
                    self.abs()
                }
            }
        };
    }
    impl_abs_scalar!(f32);
    impl_abs_scalar!(f64);
    impl_abs_scalar!(i32);

    macro_rules! impl_abs_uself {
        ($ty:ty) => {
            impl IntrinsicAbs for $ty {
                fn abs(self) -> Self {
                    self
                }
            }
        };
    }
    impl_abs_uself!(u32);
    impl_abs_uself!(Vec2u);
    impl_abs_uself!(Vec3u);
    impl_abs_uself!(Vec4u);

    macro_rules! impl_abs_vec {
        ($vec:ident, $scalar:ty) => {
            impl IntrinsicAbs for $vec<$scalar> {
                fn abs(self) -> Self {
                    self.map(|c| c.abs())
                }
            }
        };
    }
    impl_abs_vec!(Vec2, f32);
    impl_abs_vec!(Vec3, f32);
    impl_abs_vec!(Vec4, f32);
    impl_abs_vec!(Vec2, f64);
    impl_abs_vec!(Vec3, f64);
    impl_abs_vec!(Vec4, f64);
    impl_abs_vec!(Vec2, i32);
    impl_abs_vec!(Vec3, i32);
    impl_abs_vec!(Vec4, i32);
}

/// Provides the intrinsic function `sign`.
pub trait IntrinsicSign {
    /// Returns -1, 0 or 1 matching the sign of each component.
    fn sign(self) -> Self;
}

/// Returns -1, 0 or 1 matching the sign of `e`. Component-wise when `T`
/// is a vector.
pub fn sign<T: IntrinsicSign>(e: T) -> T {
    <T as IntrinsicSign>::sign(e)
}

mod sign {
    use super::*;

    macro_rules! impl_sign_float {
        ($ty:ty) => {
            impl IntrinsicSign for $ty {
                fn sign(self) -> Self {
                    if self > 0.0 {
                        1.0
                    } else if self < 0.0 {
                        -1.0
                    } else {
                        0.0
                    }
                }
            }
        };
    }
    impl_sign_float!(f32);
    impl_sign_float!(f64);

    impl IntrinsicSign for i32 {
        fn sign(self) -> Self {
            self.signum()
        }
    }

    macro_rules! impl_sign_vec {
        ($vec:ident, $scalar:ty) => {
            impl IntrinsicSign for $vec<$scalar> {
                fn sign(self) -> Self {
                    self.map(IntrinsicSign::sign)
                }
            }
        };
    }
    impl_sign_vec!(Vec2, f32);
    impl_sign_vec!(Vec3, f32);
    impl_sign_vec!(Vec4, f32);
    impl_sign_vec!(Vec2, f64);
    impl_sign_vec!(Vec3, f64);
    impl_sign_vec!(Vec4, f64);
    impl_sign_vec!(Vec2, i32);
    impl_sign_vec!(Vec3, i32);
    impl_sign_vec!(Vec4, i32);
}

/// Provides the intrinsic function `isfinite`.
pub trait IntrinsicIsFinite {
    /// `bool` for scalars, a `bool` vector for vectors.
    type Output;

    /// Whether each component is neither infinite nor NaN.
    fn isfinite(self) -> Self::Output;
}

/// Whether `e` is neither infinite nor NaN. Component-wise when `T` is a
/// vector.
pub fn isfinite<T: IntrinsicIsFinite>(e: T) -> T::Output {
    <T as IntrinsicIsFinite>::isfinite(e)
}

mod isfinite {
    use super::*;

    impl IntrinsicIsFinite for f32 {
        type Output = bool;

        fn isfinite(self) -> bool {
            self.is_finite()
        }
    }

    impl IntrinsicIsFinite for f64 {
        type Output = bool;

        fn isfinite(self) -> bool {
            self.is_finite()
        }
    }

    macro_rules! impl_isfinite_vec {
        ($vec:ident, $scalar:ty) => {
            impl IntrinsicIsFinite for $vec<$scalar> {
                type Output = $vec<bool>;

                fn isfinite(self) -> $vec<bool> {
                    self.map(|c| c.is_finite())
                }
            }
        };
    }
    impl_isfinite_vec!(Vec2, f32);
    impl_isfinite_vec!(Vec3, f32);
    impl_isfinite_vec!(Vec4, f32);
    impl_isfinite_vec!(Vec2, f64);
    impl_isfinite_vec!(Vec3, f64);
    impl_isfinite_vec!(Vec4, f64);
}

/// Defines one binary intrinsic over floats: trait, free function, and
/// impls for `f32`, `f64` and their vectors.
macro_rules! float_binary_intrinsic {
    ($trait:ident, $name:ident, $scalar_fn:expr, $doc:literal) => {
        #[doc = concat!("Provides the intrinsic function `", stringify!($name), "`.")]
        pub trait $trait {
            #[doc = $doc]
            fn $name(self, e2: Self) -> Self;
        }

        #[doc = $doc]
        #[doc = ""]
        #[doc = "Component-wise when `T` is a vector."]
        pub fn $name<T: $trait>(e1: T, e2: T) -> T {
            <T as $trait>::$name(e1, e2)
        }

        impl $trait for f32 {
            fn $name(self, e2: Self) -> Self {
                let f: fn(f32, f32) -> f32 = $scalar_fn;
                f(self, e2)
            }
        }

        impl $trait for f64 {
            fn $name(self, e2: Self) -> Self {
                let f: fn(f64, f64) -> f64 = $scalar_fn;
                f(self, e2)
            }
        }

        impl $trait for Vec2<f32> {
            fn $name(self, e2: Self) -> Self {
                let f: fn(f32, f32) -> f32 = $scalar_fn;
                Vec2 {
                    x: f(self.x, e2.x),
                    y: f(self.y, e2.y),
                }
            }
        }

        impl $trait for Vec3<f32> {
            fn $name(self, e2: Self) -> Self {
                let f: fn(f32, f32) -> f32 = $scalar_fn;
                Vec3 {
                    x: f(self.x, e2.x),
                    y: f(self.y, e2.y),
                    z: f(self.z, e2.z),
                }
            }
        }

        impl $trait for Vec4<f32> {
            fn $name(self, e2: Self) -> Self {
                let f: fn(f32, f32) -> f32 = $scalar_fn;
                Vec4 {
                    x: f(self.x, e2.x),
                    y: f(self.y, e2.y),
                    z: f(self.z, e2.z),
                    w: f(self.w, e2.w),
                }
            }
        }

        impl $trait for Vec2<f64> {
            fn $name(self, e2: Self) -> Self {
                let f: fn(f64, f64) -> f64 = $scalar_fn;
                Vec2 {
                    x: f(self.x, e2.x),
                    y: f(self.y, e2.y),
                }
            }
        }

        impl $trait for Vec3<f64> {
            fn $name(self, e2: Self) -> Self {
                let f: fn(f64, f64) -> f64 = $scalar_fn;
                Vec3 {
                    x: f(self.x, e2.x),
                    y: f(self.y, e2.y),
                    z: f(self.z, e2.z),
                }
            }
        }

        impl $trait for Vec4<f64> {
            fn $name(self, e2: Self) -> Self {
                let f: fn(f64, f64) -> f64 = $scalar_fn;
                Vec4 {
                    x: f(self.x, e2.x),
                    y: f(self.y, e2.y),
                    z: f(self.z, e2.z),
                    w: f(self.w, e2.w),
                }
            }
        }
    };
}

float_binary_intrinsic!(
    IntrinsicAtan2,
    atan2,
    |y, x| y.atan2(x),
    "Returns the angle, in radians, whose tangent is `e1 / e2`, honoring the quadrant."
);
float_binary_intrinsic!(
    IntrinsicPow,
    pow,
    |a, b| a.powf(b),
    "Returns `e1` raised to the power `e2`."
);
float_binary_intrinsic!(
    IntrinsicStep,
    step,
    |edge, x| if x >= edge { 1.0 } else { 0.0 },
    "Returns 1 when `e2 >= e1`, otherwise 0."
);

/// Provides the intrinsic function `min`.
pub trait IntrinsicMin {
    /// Returns `e2` if it is less than `e1`, otherwise `e1`.
    fn min(self, e2: Self) -> Self;
}

/// Returns the smaller of `e1` and `e2`. Component-wise when `T` is a
/// vector.
pub fn min<T: IntrinsicMin>(e1: T, e2: T) -> T {
    <T as IntrinsicMin>::min(e1, e2)
}

/// Provides the intrinsic function `max`.
pub trait IntrinsicMax {
    /// Returns `e2` if `e1` is less than `e2`, otherwise `e1`.
    fn max(self, e2: Self) -> Self;
}

/// Returns the larger of `e1` and `e2`. Component-wise when `T` is a
/// vector.
pub fn max<T: IntrinsicMax>(e1: T, e2: T) -> T {
    <T as IntrinsicMax>::max(e1, e2)
}

mod min_max {
    use super::*;

    macro_rules! impl_min_max_float {
        ($ty:ty) => {
            impl IntrinsicMin for $ty {
                fn min(self, e2: Self) -> Self {
                    self.min(e2)
                }
            }
            impl IntrinsicMax for $ty {
                fn max(self, e2: Self) -> Self {
                    self.max(e2)
                }
            }
        };
    }
    impl_min_max_float!(f32);
    impl_min_max_float!(f64);

    macro_rules! impl_min_max_int {
        ($ty:ty) => {
            impl IntrinsicMin for $ty {
                fn min(self, e2: Self) -> Self {
                    std::cmp::Ord::min(self, e2)
                }
            }
            impl IntrinsicMax for $ty {
                fn max(self, e2: Self) -> Self {
                    std::cmp::Ord::max(self, e2)
                }
            }
        };
    }
    impl_min_max_int!(i32);
    impl_min_max_int!(u32);

    macro_rules! impl_min_max_vec2 {
        ($scalar:ty) => {
            impl IntrinsicMin for Vec2<$scalar> {
                fn min(self, e2: Self) -> Self {
                    Vec2 {
                        x: IntrinsicMin::min(self.x, e2.x),
                        y: IntrinsicMin::min(self.y, e2.y),
                    }
                }
            }
            impl IntrinsicMax for Vec2<$scalar> {
                fn max(self, e2: Self) -> Self {
                    Vec2 {
                        x: IntrinsicMax::max(self.x, e2.x),
                        y: IntrinsicMax::max(self.y, e2.y),
                    }
                }
            }
        };
    }
    macro_rules! impl_min_max_vec3 {
        ($scalar:ty) => {
            impl IntrinsicMin for Vec3<$scalar> {
                fn min(self, e2: Self) -> Self {
                    Vec3 {
                        x: IntrinsicMin::min(self.x, e2.x),
                        y: IntrinsicMin::min(self.y, e2.y),
                        z: IntrinsicMin::min(self.z, e2.z),
                    }
                }
            }
            impl IntrinsicMax for Vec3<$scalar> {
                fn max(self, e2: Self) -> Self {
                    Vec3 {
                        x: IntrinsicMax::max(self.x, e2.x),
                        y: IntrinsicMax::max(self.y, e2.y),
                        z: IntrinsicMax::max(self.z, e2.z),
                    }
                }
            }
        };
    }
    macro_rules! impl_min_max_vec4 {
        ($scalar:ty) => {
            impl IntrinsicMin for Vec4<$scalar> {
                fn min(self, e2: Self) -> Self {
                    Vec4 {
                        x: IntrinsicMin::min(self.x, e2.x),
                        y: IntrinsicMin::min(self.y, e2.y),
                        z: IntrinsicMin::min(self.z, e2.z),
                        w: IntrinsicMin::min(self.w, e2.w),
                    }
                }
            }
            impl IntrinsicMax for Vec4<$scalar> {
                fn max(self, e2: Self) -> Self {
                    Vec4 {
                        x: IntrinsicMax::max(self.x, e2.x),
                        y: IntrinsicMax::max(self.y, e2.y),
                        z: IntrinsicMax::max(self.z, e2.z),
                        w: IntrinsicMax::max(self.w, e2.w),
                    }
                }
            }
        };
    }
    impl_min_max_vec2!(f32);
    impl_min_max_vec3!(f32);
    impl_min_max_vec4!(f32);
    impl_min_max_vec2!(f64);
    impl_min_max_vec3!(f64);
    impl_min_max_vec4!(f64);
    impl_min_max_vec2!(i32);
    impl_min_max_vec3!(i32);
    impl_min_max_vec4!(i32);
    impl_min_max_vec2!(u32);
    impl_min_max_vec3!(u32);
    impl_min_max_vec4!(u32);
}

/// Provides the intrinsic function `clamp`.
pub trait IntrinsicClamp {
    /// Restricts each component of `e` to `[low, high]`.
    fn clamp(self, low: Self, high: Self) -> Self;
}

/// Restricts `e` to the range `[low, high]`. Component-wise when `T` is a
/// vector.
pub fn clamp<T: IntrinsicClamp>(e: T, low: T, high: T) -> T {
    <T as IntrinsicClamp>::clamp(e, low, high)
}

impl<T: IntrinsicMin + IntrinsicMax> IntrinsicClamp for T {
    fn clamp(self, low: Self, high: Self) -> Self {
        IntrinsicMin::min(IntrinsicMax::max(self, low), high)
    }
}

/// Provides the intrinsic function `lerp`.
pub trait IntrinsicLerp {
    /// The linear blend `e1 + t * (e2 - e1)`.
    fn lerp(self, e2: Self, t: Self) -> Self;
}

/// Returns the linear blend of `e1` and `e2` by factor `t`, computed as
/// `e1 + t * (e2 - e1)`. Component-wise when `T` is a vector.
pub fn lerp<T: IntrinsicLerp>(e1: T, e2: T, t: T) -> T {
    <T as IntrinsicLerp>::lerp(e1, e2, t)
}

/// Provides the intrinsic function `mad`.
pub trait IntrinsicMad {
    /// The multiply-add `e1 * e2 + e3`.
    fn mad(self, e2: Self, e3: Self) -> Self;
}

/// Returns `e1 * e2 + e3`. Component-wise when `T` is a vector.
pub fn mad<T: IntrinsicMad>(e1: T, e2: T, e3: T) -> T {
    <T as IntrinsicMad>::mad(e1, e2, e3)
}

mod lerp_mad {
    use super::*;

    macro_rules! impl_lerp_mad {
        ($ty:ty) => {
            impl IntrinsicLerp for $ty {
                fn lerp(self, e2: Self, t: Self) -> Self {
                    self + t * (e2 - self)
                }
            }
            impl IntrinsicMad for $ty {
                fn mad(self, e2: Self, e3: Self) -> Self {
                    self * e2 + e3
                }
            }
        };
    }
    impl_lerp_mad!(f32);
    impl_lerp_mad!(f64);
    impl_lerp_mad!(Vec2f);
    impl_lerp_mad!(Vec3f);
    impl_lerp_mad!(Vec4f);
    impl_lerp_mad!(Vec2d);
    impl_lerp_mad!(Vec3d);
    impl_lerp_mad!(Vec4d);
}

/// Provides the intrinsic function `sincos`.
pub trait IntrinsicSincos: Sized {
    /// Returns the sine and cosine of `e` in one call.
    fn sincos(self) -> (Self, Self);
}

/// Returns `(sin(e), cos(e))`, where `e` is in radians. Component-wise
/// when `T` is a vector.
pub fn sincos<T: IntrinsicSincos>(e: T) -> (T, T) {
    <T as IntrinsicSincos>::sincos(e)
}

mod sincos {
    use super::*;

    impl IntrinsicSincos for f32 {
        fn sincos(self) -> (Self, Self) {
            self.sin_cos()
        }
    }

    impl IntrinsicSincos for f64 {
        fn sincos(self) -> (Self, Self) {
            self.sin_cos()
        }
    }

    macro_rules! impl_sincos_vec {
        ($vec:ident, $scalar:ty) => {
            impl IntrinsicSincos for $vec<$scalar> {
                fn sincos(self) -> (Self, Self) {
                    (self.map(|c| c.sin()), self.map(|c| c.cos()))
                }
            }
        };
    }
    impl_sincos_vec!(Vec2, f32);
    impl_sincos_vec!(Vec3, f32);
    impl_sincos_vec!(Vec4, f32);
    impl_sincos_vec!(Vec2, f64);
    impl_sincos_vec!(Vec3, f64);
    impl_sincos_vec!(Vec4, f64);
}

/// Provides the intrinsic function `dot`.
pub trait IntrinsicDot {
    /// The scalar type of the vector components.
    type Scalar;

    /// Returns the dot product of `self` and `e2`.
    fn dot(self, e2: Self) -> Self::Scalar;
}

/// Returns the dot product of `e1` and `e2`.
pub fn dot<T: IntrinsicDot>(e1: T, e2: T) -> T::Scalar {
    <T as IntrinsicDot>::dot(e1, e2)
}

mod dot {
    use super::*;

    macro_rules! impl_dot {
        ($scalar:ty) => {
            impl IntrinsicDot for Vec2<$scalar> {
                type Scalar = $scalar;

                fn dot(self, e2: Self) -> $scalar {
                    self.x * e2.x + self.y * e2.y
                }
            }
            impl IntrinsicDot for Vec3<$scalar> {
                type Scalar = $scalar;

                fn dot(self, e2: Self) -> $scalar {
                    self.x * e2.x + self.y * e2.y + self.z * e2.z
                }
            }
            impl IntrinsicDot for Vec4<$scalar> {
                type Scalar = $scalar;

                fn dot(self, e2: Self) -> $scalar {
                    self.x * e2.x + self.y * e2.y + self.z * e2.z + self.w * e2.w
                }
            }
        };
    }
    impl_dot!(f32);
    impl_dot!(f64);
    impl_dot!(i32);
    impl_dot!(u32);
}

/// Provides the intrinsic function `cross`.
pub trait IntrinsicCross {
    /// Returns the cross product of `self` and `e2`.
    fn cross(self, e2: Self) -> Self;
}

/// Returns the cross product of two 3-component vectors.
pub fn cross<T: IntrinsicCross>(e1: T, e2: T) -> T {
    <T as IntrinsicCross>::cross(e1, e2)
}

mod cross {
    use super::*;

    macro_rules! impl_cross {
        ($scalar:ty) => {
            impl IntrinsicCross for Vec3<$scalar> {
                fn cross(self, e2: Self) -> Self {
                    Vec3 {
                        x: self.y * e2.z - self.z * e2.y,
                        y: self.z * e2.x - self.x * e2.z,
                        z: self.x * e2.y - self.y * e2.x,
                    }
                }
            }
        };
    }
    impl_cross!(f32);
    impl_cross!(f64);
}

/// Provides the intrinsic function `lengthsq`.
pub trait IntrinsicLengthSq {
    /// The scalar type of the vector components.
    type Scalar;

    /// Returns the squared length of the vector.
    fn lengthsq(self) -> Self::Scalar;
}

/// Returns the squared length of `e`.
pub fn lengthsq<T: IntrinsicLengthSq>(e: T) -> T::Scalar {
    <T as IntrinsicLengthSq>::lengthsq(e)
}

impl<T: IntrinsicDot + Copy> IntrinsicLengthSq for T {
    type Scalar = T::Scalar;

    fn lengthsq(self) -> T::Scalar {
        IntrinsicDot::dot(self, self)
    }
}

/// Provides the intrinsic function `length`.
pub trait IntrinsicLength {
    /// The scalar type of the vector components.
    type Scalar;

    /// Returns the length of the vector.
    fn length(self) -> Self::Scalar;
}

/// Returns the length of `e`, `sqrt(dot(e, e))`.
pub fn length<T: IntrinsicLength>(e: T) -> T::Scalar {
    <T as IntrinsicLength>::length(e)
}

/// Returns the distance between `e1` and `e2`, `length(e2 - e1)`.
pub fn distance<T>(e1: T, e2: T) -> T::Scalar
where
    T: IntrinsicLength + std::ops::Sub<Output = T>,
{
    length(e2 - e1)
}

/// Provides the intrinsic function `normalize`.
pub trait IntrinsicNormalize {
    /// Returns a unit vector in the same direction as `self`.
    fn normalize(self) -> Self;
}

/// Returns a unit vector in the same direction as `e`, computed as
/// `e * rsqrt(dot(e, e))`.
pub fn normalize<T: IntrinsicNormalize>(e: T) -> T {
    <T as IntrinsicNormalize>::normalize(e)
}

mod length_normalize {
    use super::*;

    macro_rules! impl_length_normalize {
        ($vec:ident, $scalar:ty) => {
            impl IntrinsicLength for $vec<$scalar> {
                type Scalar = $scalar;

                fn length(self) -> $scalar {
                    dot(self, self).sqrt()
                }
            }

            impl IntrinsicNormalize for $vec<$scalar> {
                fn normalize(self) -> Self {
                    self * rsqrt(dot(self, self))
                }
            }
        };
    }
    impl_length_normalize!(Vec2, f32);
    impl_length_normalize!(Vec3, f32);
    impl_length_normalize!(Vec4, f32);
    impl_length_normalize!(Vec2, f64);
    impl_length_normalize!(Vec3, f64);
    impl_length_normalize!(Vec4, f64);
}

/// Provides the intrinsic function `csum`.
pub trait IntrinsicCsum {
    /// The scalar type of the vector components.
    type Scalar;

    /// Returns the horizontal sum of the components.
    fn csum(self) -> Self::Scalar;
}

/// Returns the horizontal sum of the components of `e`. Integer sums
/// wrap.
pub fn csum<T: IntrinsicCsum>(e: T) -> T::Scalar {
    <T as IntrinsicCsum>::csum(e)
}

mod csum {
    use super::*;

    macro_rules! impl_csum_float {
        ($scalar:ty) => {
            impl IntrinsicCsum for Vec2<$scalar> {
                type Scalar = $scalar;

                fn csum(self) -> $scalar {
                    self.x + self.y
                }
            }
            impl IntrinsicCsum for Vec3<$scalar> {
                type Scalar = $scalar;

                fn csum(self) -> $scalar {
                    self.x + self.y + self.z
                }
            }
            impl IntrinsicCsum for Vec4<$scalar> {
                type Scalar = $scalar;

                fn csum(self) -> $scalar {
                    self.x + self.y + self.z + self.w
                }
            }
        };
    }
    impl_csum_float!(f32);
    impl_csum_float!(f64);

    macro_rules! impl_csum_wrapping {
        ($scalar:ty) => {
            impl IntrinsicCsum for Vec2<$scalar> {
                type Scalar = $scalar;

                fn csum(self) -> $scalar {
                    self.x.wrapping_add(self.y)
                }
            }
            impl IntrinsicCsum for Vec3<$scalar> {
                type Scalar = $scalar;

                fn csum(self) -> $scalar {
                    self.x.wrapping_add(self.y).wrapping_add(self.z)
                }
            }
            impl IntrinsicCsum for Vec4<$scalar> {
                type Scalar = $scalar;

                fn csum(self) -> $scalar {
                    self.x
                        .wrapping_add(self.y)
                        .wrapping_add(self.z)
                        .wrapping_add(self.w)
                }
            }
        };
    }
    impl_csum_wrapping!(i32);
    impl_csum_wrapping!(u32);
}

/// Provides the intrinsic function `select`.
///
/// The condition is either a single `bool`, selecting whole values, or a
/// `bool` vector, selecting component-wise.
pub trait IntrinsicSelect<C> {
    /// Returns `t` where the condition holds, otherwise `self`.
    fn select(self, t: Self, cond: C) -> Self;
}

/// Returns `t` when `cond` is true, otherwise `f`. With a `bool` vector
/// condition the choice is made per component.
pub fn select<T: IntrinsicSelect<C>, C>(f: T, t: T, cond: C) -> T {
    <T as IntrinsicSelect<C>>::select(f, t, cond)
}

impl<T> IntrinsicSelect<bool> for T {
    fn select(self, t: Self, cond: bool) -> Self {
        if cond { t } else { self }
    }
}

impl<T> IntrinsicSelect<Vec2<bool>> for Vec2<T> {
    fn select(self, t: Self, cond: Vec2<bool>) -> Self {
        Vec2 {
            x: if cond.x { t.x } else { self.x },
            y: if cond.y { t.y } else { self.y },
        }
    }
}

impl<T> IntrinsicSelect<Vec3<bool>> for Vec3<T> {
    fn select(self, t: Self, cond: Vec3<bool>) -> Self {
        Vec3 {
            x: if cond.x { t.x } else { self.x },
            y: if cond.y { t.y } else { self.y },
            z: if cond.z { t.z } else { self.z },
        }
    }
}

impl<T> IntrinsicSelect<Vec4<bool>> for Vec4<T> {
    fn select(self, t: Self, cond: Vec4<bool>) -> Self {
        Vec4 {
            x: if cond.x { t.x } else { self.x },
            y: if cond.y { t.y } else { self.y },
            z: if cond.z { t.z } else { self.z },
            w: if cond.w { t.w } else { self.w },
        }
    }
}

/// Provides the intrinsic function `all`.
pub trait IntrinsicAll {
    /// Whether every component is true.
    fn all(self) -> bool;
}

/// Returns true when every component of `e` is true.
pub fn all<T: IntrinsicAll>(e: T) -> bool {
    <T as IntrinsicAll>::all(e)
}

/// Provides the intrinsic function `any`.
pub trait IntrinsicAny {
    /// Whether at least one component is true.
    fn any(self) -> bool;
}

/// Returns true when at least one component of `e` is true.
pub fn any<T: IntrinsicAny>(e: T) -> bool {
    <T as IntrinsicAny>::any(e)
}

mod all_any {
    use super::*;

    impl IntrinsicAll for Vec2<bool> {
        fn all(self) -> bool {
            self.x && self.y
        }
    }
    impl IntrinsicAll for Vec3<bool> {
        fn all(self) -> bool {
            self.x && self.y && self.z
        }
    }
    impl IntrinsicAll for Vec4<bool> {
        fn all(self) -> bool {
            self.x && self.y && self.z && self.w
        }
    }

    impl IntrinsicAny for Vec2<bool> {
        fn any(self) -> bool {
            self.x || self.y
        }
    }
    impl IntrinsicAny for Vec3<bool> {
        fn any(self) -> bool {
            self.x || self.y || self.z
        }
    }
    impl IntrinsicAny for Vec4<bool> {
        fn any(self) -> bool {
            self.x || self.y || self.z || self.w
        }
    }
}

#[cfg(test)]
mod test {
    use crate::*;

    #[test]
    fn sanity_unary_float() {
        assert_eq!(floor(1.7f32), 1.0);
        assert_eq!(ceil(1.2f32), 2.0);
        assert_eq!(frac(1.25f32), 0.25);
        assert_eq!(frac(-0.25f32), 0.75);
        assert_eq!(saturate(2.0f32), 1.0);
        assert_eq!(saturate(-1.0f32), 0.0);
        assert!((rsqrt(4.0f32) - 0.5).abs() < 1e-6);
        assert_eq!(
            floor(vec3f(1.7, -1.7, 0.5)),
            vec3f(1.0, -2.0, 0.0)
        );
        assert_eq!(abs(vec2i(-3, 4)), vec2i(3, 4));
        assert_eq!(abs(vec2u(3, 4)), vec2u(3, 4));
        assert_eq!(sign(vec3f(-2.0, 0.0, 5.0)), vec3f(-1.0, 0.0, 1.0));
    }

    #[test]
    fn sanity_binary_float() {
        assert_eq!(pow(2.0f32, 10.0), 1024.0);
        assert_eq!(step(0.5f32, 0.4), 0.0);
        assert_eq!(step(0.5f32, 0.6), 1.0);
        assert!((atan2(1.0f32, 1.0) - std::f32::consts::FRAC_PI_4).abs() < 1e-6);
        assert_eq!(min(vec2f(1.0, 5.0), vec2f(2.0, 4.0)), vec2f(1.0, 4.0));
        assert_eq!(max(vec2i(1, 5), vec2i(2, 4)), vec2i(2, 5));
    }

    #[test]
    fn sanity_ternary() {
        assert_eq!(clamp(5.0f32, 0.0, 1.0), 1.0);
        assert_eq!(clamp(vec2i(-5, 5), vec2i(0, 0), vec2i(3, 3)), vec2i(0, 3));
        assert_eq!(lerp(0.0f32, 10.0, 0.5), 5.0);
        assert_eq!(
            lerp(vec2f(0.0, 0.0), vec2f(2.0, 4.0), vec2f(0.5, 0.25)),
            vec2f(1.0, 1.0)
        );
        assert_eq!(mad(2.0f32, 3.0, 4.0), 10.0);
    }

    #[test]
    fn sanity_sincos() {
        let (s, c) = sincos(0.0f32);
        assert_eq!(s, 0.0);
        assert_eq!(c, 1.0);

        let (s, c) = sincos(vec2f(0.0, std::f32::consts::FRAC_PI_2));
        assert!((s.y - 1.0).abs() < 1e-6);
        assert!(c.x == 1.0);
    }

    #[test]
    fn sanity_geometric() {
        assert_eq!(dot(vec3f(1.0, 2.0, 3.0), vec3f(4.0, 5.0, 6.0)), 32.0);
        assert_eq!(dot(vec2i(1, 2), vec2i(3, 4)), 11);
        assert_eq!(
            cross(vec3f(1.0, 0.0, 0.0), vec3f(0.0, 1.0, 0.0)),
            vec3f(0.0, 0.0, 1.0)
        );
        assert_eq!(length(vec2f(3.0, 4.0)), 5.0);
        assert_eq!(lengthsq(vec2f(3.0, 4.0)), 25.0);
        assert_eq!(distance(vec2f(1.0, 1.0), vec2f(4.0, 5.0)), 5.0);

        let n = normalize(vec3f(0.0, 3.0, 4.0));
        assert!((length(n) - 1.0).abs() < 1e-6);
        assert!((n.y - 0.6).abs() < 1e-6);
    }

    #[test]
    fn sanity_csum() {
        assert_eq!(csum(vec4f(1.0, 2.0, 3.0, 4.0)), 10.0);
        assert_eq!(csum(vec2u(u32::MAX, 1)), 0); // wraps
        assert_eq!(csum(vec3i(1, 2, 3)), 6);
    }

    #[test]
    fn sanity_select() {
        assert_eq!(select(1.0f32, 2.0, false), 1.0);
        assert_eq!(select(1.0f32, 2.0, true), 2.0);

        // Whole-value select over vectors.
        assert_eq!(
            select(vec2f(1.0, 1.0), vec2f(2.0, 2.0), true),
            vec2f(2.0, 2.0)
        );

        // Component-wise select.
        assert_eq!(
            select(
                vec3f(1.0, 1.0, 1.0),
                vec3f(2.0, 2.0, 2.0),
                vec3b(true, false, true)
            ),
            vec3f(2.0, 1.0, 2.0)
        );
    }

    #[test]
    fn sanity_all_any() {
        assert!(all(vec3b(true, true, true)));
        assert!(!all(vec3b(true, false, true)));
        assert!(any(vec3b(false, false, true)));
        assert!(!any(vec2b(false, false)));
    }

    #[test]
    fn sanity_isfinite() {
        assert!(isfinite(1.0f32));
        assert!(!isfinite(f32::INFINITY));
        assert!(!isfinite(f32::NAN));
        assert_eq!(
            isfinite(vec3f(1.0, f32::NAN, f32::INFINITY)),
            vec3b(true, false, false)
        );
    }
}
