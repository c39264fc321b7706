//! Vector implementations.
//!
//! Plain structs with public fields that mirror HLSL's vector types.
//! Components are accessed directly via `.x`, `.y`, `.z`, `.w` fields,
//! or by index with `v[0]`, `v[1]`, etc.
//!
//! Vectors support swizzling by method-calling, e.g. [`Vec3::zxy`] and
//! [`Vec4::wzyx`]. On 2-component vectors the two-letter permutations of
//! the type's own axes are also writable through [`Vec2::set_xy`] and
//! [`Vec2::set_yx`].
//!
//! Comparisons are element-wise and produce a `bool` vector of the same
//! arity (`cmp_eq`, `cmp_lt`, ...); reduce with [`crate::all`] or
//! [`crate::any`]. The derived `==` stays whole-value structural equality.
#![expect(
    clippy::self_named_constructors,
    reason = "HLSL uses self named constructors"
)]

/// A 2-dimensional vector.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<T> {
    pub x: T,
    pub y: T,
}

/// A 3-dimensional vector.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

/// A 4-dimensional vector.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec4<T> {
    pub x: T,
    pub y: T,
    pub z: T,
    pub w: T,
}

/// Concrete type alias for a 2-dimensional vector of `f32` scalar components.
pub type Vec2f = Vec2<f32>;
/// Concrete type alias for a 2-dimensional vector of `f64` scalar components.
pub type Vec2d = Vec2<f64>;
/// Concrete type alias for a 2-dimensional vector of `i32` scalar components.
pub type Vec2i = Vec2<i32>;
/// Concrete type alias for a 2-dimensional vector of `u32` scalar components.
pub type Vec2u = Vec2<u32>;
/// Concrete type alias for a 2-dimensional vector of `bool` scalar components.
pub type Vec2b = Vec2<bool>;

/// Concrete type alias for a 3-dimensional vector of `f32` scalar components.
pub type Vec3f = Vec3<f32>;
/// Concrete type alias for a 3-dimensional vector of `f64` scalar components.
pub type Vec3d = Vec3<f64>;
/// Concrete type alias for a 3-dimensional vector of `i32` scalar components.
pub type Vec3i = Vec3<i32>;
/// Concrete type alias for a 3-dimensional vector of `u32` scalar components.
pub type Vec3u = Vec3<u32>;
/// Concrete type alias for a 3-dimensional vector of `bool` scalar components.
pub type Vec3b = Vec3<bool>;

/// Concrete type alias for a 4-dimensional vector of `f32` scalar components.
pub type Vec4f = Vec4<f32>;
/// Concrete type alias for a 4-dimensional vector of `f64` scalar components.
pub type Vec4d = Vec4<f64>;
/// Concrete type alias for a 4-dimensional vector of `i32` scalar components.
pub type Vec4i = Vec4<i32>;
/// Concrete type alias for a 4-dimensional vector of `u32` scalar components.
pub type Vec4u = Vec4<u32>;
/// Concrete type alias for a 4-dimensional vector of `bool` scalar components.
pub type Vec4b = Vec4<bool>;

impl<T> Vec2<T> {
    /// Construct a 2-dimensional vector from components.
    pub const fn vec2(x: T, y: T) -> Self {
        Self { x, y }
    }

    /// Convert to an array of components.
    pub fn to_array(self) -> [T; 2] {
        [self.x, self.y]
    }

    /// Extend with a `z` component.
    pub fn extend(self, z: T) -> Vec3<T> {
        Vec3 {
            x: self.x,
            y: self.y,
            z,
        }
    }

    /// Apply `f` to every component.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Vec2<U> {
        Vec2 {
            x: f(self.x),
            y: f(self.y),
        }
    }
}

impl<T: Copy> Vec2<T> {
    /// Construct from an array of components.
    pub fn from_array(arr: [T; 2]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
        }
    }

    /// Construct with every component set to `v`.
    pub const fn splat(v: T) -> Self {
        Self { x: v, y: v }
    }
}

impl<T> Vec3<T> {
    /// Construct a 3-dimensional vector from components.
    pub const fn vec3(x: T, y: T, z: T) -> Self {
        Self { x, y, z }
    }

    /// Convert to an array of components.
    pub fn to_array(self) -> [T; 3] {
        [self.x, self.y, self.z]
    }

    /// Extend with a `w` component.
    pub fn extend(self, w: T) -> Vec4<T> {
        Vec4 {
            x: self.x,
            y: self.y,
            z: self.z,
            w,
        }
    }

    /// Drop the `z` component.
    pub fn truncate(self) -> Vec2<T> {
        Vec2 {
            x: self.x,
            y: self.y,
        }
    }

    /// Apply `f` to every component.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Vec3<U> {
        Vec3 {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
        }
    }
}

impl<T: Copy> Vec3<T> {
    /// Construct from an array of components.
    pub fn from_array(arr: [T; 3]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
        }
    }

    /// Construct with every component set to `v`.
    pub const fn splat(v: T) -> Self {
        Self { x: v, y: v, z: v }
    }
}

impl<T> Vec4<T> {
    /// Construct a 4-dimensional vector from components.
    pub const fn vec4(x: T, y: T, z: T, w: T) -> Self {
        Self { x, y, z, w }
    }

    /// Convert to an array of components.
    pub fn to_array(self) -> [T; 4] {
        [self.x, self.y, self.z, self.w]
    }

    /// Drop the `w` component.
    pub fn truncate(self) -> Vec3<T> {
        Vec3 {
            x: self.x,
            y: self.y,
            z: self.z,
        }
    }

    /// Apply `f` to every component.
    pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> Vec4<U> {
        Vec4 {
            x: f(self.x),
            y: f(self.y),
            z: f(self.z),
            w: f(self.w),
        }
    }
}

impl<T: Copy> Vec4<T> {
    /// Construct from an array of components.
    pub fn from_array(arr: [T; 4]) -> Self {
        Self {
            x: arr[0],
            y: arr[1],
            z: arr[2],
            w: arr[3],
        }
    }

    /// Construct with every component set to `v`.
    pub const fn splat(v: T) -> Self {
        Self {
            x: v,
            y: v,
            z: v,
            w: v,
        }
    }
}

// Const constructor functions matching HLSL naming conventions.

/// Constructor for a 2-dimensional vector of `f32` scalar components.
pub const fn vec2f(x: f32, y: f32) -> Vec2<f32> {
    Vec2 { x, y }
}

/// Constructor for a 2-dimensional vector of `f64` scalar components.
pub const fn vec2d(x: f64, y: f64) -> Vec2<f64> {
    Vec2 { x, y }
}

/// Constructor for a 2-dimensional vector of `i32` scalar components.
pub const fn vec2i(x: i32, y: i32) -> Vec2<i32> {
    Vec2 { x, y }
}

/// Constructor for a 2-dimensional vector of `u32` scalar components.
pub const fn vec2u(x: u32, y: u32) -> Vec2<u32> {
    Vec2 { x, y }
}

/// Constructor for a 2-dimensional vector of `bool` scalar components.
pub const fn vec2b(x: bool, y: bool) -> Vec2<bool> {
    Vec2 { x, y }
}

/// Constructor for a 3-dimensional vector of `f32` scalar components.
pub const fn vec3f(x: f32, y: f32, z: f32) -> Vec3<f32> {
    Vec3 { x, y, z }
}

/// Constructor for a 3-dimensional vector of `f64` scalar components.
pub const fn vec3d(x: f64, y: f64, z: f64) -> Vec3<f64> {
    Vec3 { x, y, z }
}

/// Constructor for a 3-dimensional vector of `i32` scalar components.
pub const fn vec3i(x: i32, y: i32, z: i32) -> Vec3<i32> {
    Vec3 { x, y, z }
}

/// Constructor for a 3-dimensional vector of `u32` scalar components.
pub const fn vec3u(x: u32, y: u32, z: u32) -> Vec3<u32> {
    Vec3 { x, y, z }
}

/// Constructor for a 3-dimensional vector of `bool` scalar components.
pub const fn vec3b(x: bool, y: bool, z: bool) -> Vec3<bool> {
    Vec3 { x, y, z }
}

/// Constructor for a 4-dimensional vector of `f32` scalar components.
pub const fn vec4f(x: f32, y: f32, z: f32, w: f32) -> Vec4<f32> {
    Vec4 { x, y, z, w }
}

/// Constructor for a 4-dimensional vector of `f64` scalar components.
pub const fn vec4d(x: f64, y: f64, z: f64, w: f64) -> Vec4<f64> {
    Vec4 { x, y, z, w }
}

/// Constructor for a 4-dimensional vector of `i32` scalar components.
pub const fn vec4i(x: i32, y: i32, z: i32, w: i32) -> Vec4<i32> {
    Vec4 { x, y, z, w }
}

/// Constructor for a 4-dimensional vector of `u32` scalar components.
pub const fn vec4u(x: u32, y: u32, z: u32, w: u32) -> Vec4<u32> {
    Vec4 { x, y, z, w }
}

/// Constructor for a 4-dimensional vector of `bool` scalar components.
pub const fn vec4b(x: bool, y: bool, z: bool, w: bool) -> Vec4<bool> {
    Vec4 { x, y, z, w }
}

// Index impls for `usize` and `u32`.

impl<T> std::ops::Index<usize> for Vec2<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            _ => panic!("index out of bounds: Vec2 has 2 components but index is {index}"),
        }
    }
}

impl<T> std::ops::IndexMut<usize> for Vec2<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => panic!("index out of bounds: Vec2 has 2 components but index is {index}"),
        }
    }
}

impl<T> std::ops::Index<u32> for Vec2<T> {
    type Output = T;

    fn index(&self, index: u32) -> &T {
        &self[index as usize]
    }
}

impl<T> std::ops::IndexMut<u32> for Vec2<T> {
    fn index_mut(&mut self, index: u32) -> &mut T {
        &mut self[index as usize]
    }
}

impl<T> std::ops::Index<usize> for Vec3<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("index out of bounds: Vec3 has 3 components but index is {index}"),
        }
    }
}

impl<T> std::ops::IndexMut<usize> for Vec3<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            _ => panic!("index out of bounds: Vec3 has 3 components but index is {index}"),
        }
    }
}

impl<T> std::ops::Index<u32> for Vec3<T> {
    type Output = T;

    fn index(&self, index: u32) -> &T {
        &self[index as usize]
    }
}

impl<T> std::ops::IndexMut<u32> for Vec3<T> {
    fn index_mut(&mut self, index: u32) -> &mut T {
        &mut self[index as usize]
    }
}

impl<T> std::ops::Index<usize> for Vec4<T> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            3 => &self.w,
            _ => panic!("index out of bounds: Vec4 has 4 components but index is {index}"),
        }
    }
}

impl<T> std::ops::IndexMut<usize> for Vec4<T> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        match index {
            0 => &mut self.x,
            1 => &mut self.y,
            2 => &mut self.z,
            3 => &mut self.w,
            _ => panic!("index out of bounds: Vec4 has 4 components but index is {index}"),
        }
    }
}

impl<T> std::ops::Index<u32> for Vec4<T> {
    type Output = T;

    fn index(&self, index: u32) -> &T {
        &self[index as usize]
    }
}

impl<T> std::ops::IndexMut<u32> for Vec4<T> {
    fn index_mut(&mut self, index: u32) -> &mut T {
        &mut self[index as usize]
    }
}

// Swizzle methods (generated by proc macro).
// Every 2-, 3- and 4-letter combination of the type's axis letters is a
// read accessor; the 2-vector additionally gets set_xy/set_yx.

hlsl_rs_macros::swizzle!(Vec2, [x, y]);
hlsl_rs_macros::swizzle!(Vec3, [x, y, z]);
hlsl_rs_macros::swizzle!(Vec4, [x, y, z, w]);

// From/Into conversions for glam types and arrays.

macro_rules! impl_from_vec2 {
    ($glam_ty:ty, $scalar:ty) => {
        impl From<$glam_ty> for Vec2<$scalar> {
            fn from(v: $glam_ty) -> Self {
                Vec2 { x: v.x, y: v.y }
            }
        }

        impl From<Vec2<$scalar>> for $glam_ty {
            fn from(v: Vec2<$scalar>) -> Self {
                <$glam_ty>::new(v.x, v.y)
            }
        }

        impl From<[$scalar; 2]> for Vec2<$scalar> {
            fn from(arr: [$scalar; 2]) -> Self {
                Vec2 {
                    x: arr[0],
                    y: arr[1],
                }
            }
        }

        impl From<Vec2<$scalar>> for [$scalar; 2] {
            fn from(v: Vec2<$scalar>) -> [$scalar; 2] {
                [v.x, v.y]
            }
        }
    };
}

macro_rules! impl_from_vec3 {
    ($glam_ty:ty, $scalar:ty) => {
        impl From<$glam_ty> for Vec3<$scalar> {
            fn from(v: $glam_ty) -> Self {
                Vec3 {
                    x: v.x,
                    y: v.y,
                    z: v.z,
                }
            }
        }

        impl From<Vec3<$scalar>> for $glam_ty {
            fn from(v: Vec3<$scalar>) -> Self {
                <$glam_ty>::new(v.x, v.y, v.z)
            }
        }

        impl From<[$scalar; 3]> for Vec3<$scalar> {
            fn from(arr: [$scalar; 3]) -> Self {
                Vec3 {
                    x: arr[0],
                    y: arr[1],
                    z: arr[2],
                }
            }
        }

        impl From<Vec3<$scalar>> for [$scalar; 3] {
            fn from(v: Vec3<$scalar>) -> [$scalar; 3] {
                [v.x, v.y, v.z]
            }
        }
    };
}

macro_rules! impl_from_vec4 {
    ($glam_ty:ty, $scalar:ty) => {
        impl From<$glam_ty> for Vec4<$scalar> {
            fn from(v: $glam_ty) -> Self {
                Vec4 {
                    x: v.x,
                    y: v.y,
                    z: v.z,
                    w: v.w,
                }
            }
        }

        impl From<Vec4<$scalar>> for $glam_ty {
            fn from(v: Vec4<$scalar>) -> Self {
                <$glam_ty>::new(v.x, v.y, v.z, v.w)
            }
        }

        impl From<[$scalar; 4]> for Vec4<$scalar> {
            fn from(arr: [$scalar; 4]) -> Self {
                Vec4 {
                    x: arr[0],
                    y: arr[1],
                    z: arr[2],
                    w: arr[3],
                }
            }
        }

        impl From<Vec4<$scalar>> for [$scalar; 4] {
            fn from(v: Vec4<$scalar>) -> [$scalar; 4] {
                [v.x, v.y, v.z, v.w]
            }
        }
    };
}

impl_from_vec2!(glam::Vec2, f32);
impl_from_vec2!(glam::DVec2, f64);
impl_from_vec2!(glam::IVec2, i32);
impl_from_vec2!(glam::UVec2, u32);
impl_from_vec2!(glam::BVec2, bool);

impl_from_vec3!(glam::Vec3, f32);
impl_from_vec3!(glam::DVec3, f64);
impl_from_vec3!(glam::IVec3, i32);
impl_from_vec3!(glam::UVec3, u32);
impl_from_vec3!(glam::BVec3, bool);

impl_from_vec4!(glam::Vec4, f32);
impl_from_vec4!(glam::DVec4, f64);
impl_from_vec4!(glam::IVec4, i32);
impl_from_vec4!(glam::UVec4, u32);
impl_from_vec4!(glam::BVec4, bool);

// Widening scalar-type conversions. These are the conversions the source
// system performs implicitly, so they are `From` impls; every narrowing
// conversion is an explicit `as_*` method further down.

macro_rules! impl_vec_widen {
    ($from:ty => $to:ty) => {
        impl From<Vec2<$from>> for Vec2<$to> {
            fn from(v: Vec2<$from>) -> Self {
                Vec2 {
                    x: v.x as $to,
                    y: v.y as $to,
                }
            }
        }

        impl From<Vec3<$from>> for Vec3<$to> {
            fn from(v: Vec3<$from>) -> Self {
                Vec3 {
                    x: v.x as $to,
                    y: v.y as $to,
                    z: v.z as $to,
                }
            }
        }

        impl From<Vec4<$from>> for Vec4<$to> {
            fn from(v: Vec4<$from>) -> Self {
                Vec4 {
                    x: v.x as $to,
                    y: v.y as $to,
                    z: v.z as $to,
                    w: v.w as $to,
                }
            }
        }
    };
}

impl_vec_widen!(i32 => f32);
impl_vec_widen!(i32 => f64);
impl_vec_widen!(u32 => f32);
impl_vec_widen!(u32 => f64);
impl_vec_widen!(f32 => f64);

/// Implements the explicit (narrowing) scalar-type casts for one source
/// scalar.
macro_rules! impl_vec_casts {
    ($from:ty => $(($method:ident, $to:ty)),+) => {
        impl Vec2<$from> {
            $(
                #[doc = concat!("Component-wise cast to `", stringify!($to), "`.")]
                pub fn $method(self) -> Vec2<$to> {
                    Vec2 {
                        x: self.x as $to,
                        y: self.y as $to,
                    }
                }
            )+
        }

        impl Vec3<$from> {
            $(
                #[doc = concat!("Component-wise cast to `", stringify!($to), "`.")]
                pub fn $method(self) -> Vec3<$to> {
                    Vec3 {
                        x: self.x as $to,
                        y: self.y as $to,
                        z: self.z as $to,
                    }
                }
            )+
        }

        impl Vec4<$from> {
            $(
                #[doc = concat!("Component-wise cast to `", stringify!($to), "`.")]
                pub fn $method(self) -> Vec4<$to> {
                    Vec4 {
                        x: self.x as $to,
                        y: self.y as $to,
                        z: self.z as $to,
                        w: self.w as $to,
                    }
                }
            )+
        }
    };
}

impl_vec_casts!(f32 => (as_i32, i32), (as_u32, u32));
impl_vec_casts!(f64 => (as_f32, f32), (as_i32, i32), (as_u32, u32));
impl_vec_casts!(i32 => (as_u32, u32));
impl_vec_casts!(u32 => (as_i32, i32));

/// Explicit bool-to-numeric casts: `false` maps to 0, `true` to 1.
macro_rules! impl_vec_bool_casts {
    ($(($method:ident, $to:ty)),+) => {
        impl Vec2<bool> {
            $(
                #[doc = concat!(
                    "Component-wise cast to `", stringify!($to),
                    "`; `false` maps to 0 and `true` to 1."
                )]
                pub fn $method(self) -> Vec2<$to> {
                    Vec2 {
                        x: self.x as i32 as $to,
                        y: self.y as i32 as $to,
                    }
                }
            )+
        }

        impl Vec3<bool> {
            $(
                #[doc = concat!(
                    "Component-wise cast to `", stringify!($to),
                    "`; `false` maps to 0 and `true` to 1."
                )]
                pub fn $method(self) -> Vec3<$to> {
                    Vec3 {
                        x: self.x as i32 as $to,
                        y: self.y as i32 as $to,
                        z: self.z as i32 as $to,
                    }
                }
            )+
        }

        impl Vec4<bool> {
            $(
                #[doc = concat!(
                    "Component-wise cast to `", stringify!($to),
                    "`; `false` maps to 0 and `true` to 1."
                )]
                pub fn $method(self) -> Vec4<$to> {
                    Vec4 {
                        x: self.x as i32 as $to,
                        y: self.y as i32 as $to,
                        z: self.z as i32 as $to,
                        w: self.w as i32 as $to,
                    }
                }
            )+
        }
    };
}

impl_vec_bool_casts!((as_f32, f32), (as_f64, f64), (as_i32, i32), (as_u32, u32));

// Arithmetic operations, instantiated per scalar type.

/// Implements vector-vector binary operations (Add, Sub, Mul, Div, Rem)
/// for Vec2.
macro_rules! impl_vec2_ops {
    ($scalar:ty) => {
        impl std::ops::Add for Vec2<$scalar> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Vec2 {
                    x: self.x + rhs.x,
                    y: self.y + rhs.y,
                }
            }
        }
        impl std::ops::Sub for Vec2<$scalar> {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Vec2 {
                    x: self.x - rhs.x,
                    y: self.y - rhs.y,
                }
            }
        }
        impl std::ops::Mul for Vec2<$scalar> {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                Vec2 {
                    x: self.x * rhs.x,
                    y: self.y * rhs.y,
                }
            }
        }
        impl std::ops::Div for Vec2<$scalar> {
            type Output = Self;
            fn div(self, rhs: Self) -> Self {
                Vec2 {
                    x: self.x / rhs.x,
                    y: self.y / rhs.y,
                }
            }
        }
        impl std::ops::Rem for Vec2<$scalar> {
            type Output = Self;
            fn rem(self, rhs: Self) -> Self {
                Vec2 {
                    x: self.x % rhs.x,
                    y: self.y % rhs.y,
                }
            }
        }
    };
}

/// Implements vector-vector binary operations (Add, Sub, Mul, Div, Rem)
/// for Vec3.
macro_rules! impl_vec3_ops {
    ($scalar:ty) => {
        impl std::ops::Add for Vec3<$scalar> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Vec3 {
                    x: self.x + rhs.x,
                    y: self.y + rhs.y,
                    z: self.z + rhs.z,
                }
            }
        }
        impl std::ops::Sub for Vec3<$scalar> {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Vec3 {
                    x: self.x - rhs.x,
                    y: self.y - rhs.y,
                    z: self.z - rhs.z,
                }
            }
        }
        impl std::ops::Mul for Vec3<$scalar> {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                Vec3 {
                    x: self.x * rhs.x,
                    y: self.y * rhs.y,
                    z: self.z * rhs.z,
                }
            }
        }
        impl std::ops::Div for Vec3<$scalar> {
            type Output = Self;
            fn div(self, rhs: Self) -> Self {
                Vec3 {
                    x: self.x / rhs.x,
                    y: self.y / rhs.y,
                    z: self.z / rhs.z,
                }
            }
        }
        impl std::ops::Rem for Vec3<$scalar> {
            type Output = Self;
            fn rem(self, rhs: Self) -> Self {
                Vec3 {
                    x: self.x % rhs.x,
                    y: self.y % rhs.y,
                    z: self.z % rhs.z,
                }
            }
        }
    };
}

/// Implements vector-vector binary operations (Add, Sub, Mul, Div, Rem)
/// for Vec4.
macro_rules! impl_vec4_ops {
    ($scalar:ty) => {
        impl std::ops::Add for Vec4<$scalar> {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Vec4 {
                    x: self.x + rhs.x,
                    y: self.y + rhs.y,
                    z: self.z + rhs.z,
                    w: self.w + rhs.w,
                }
            }
        }
        impl std::ops::Sub for Vec4<$scalar> {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Vec4 {
                    x: self.x - rhs.x,
                    y: self.y - rhs.y,
                    z: self.z - rhs.z,
                    w: self.w - rhs.w,
                }
            }
        }
        impl std::ops::Mul for Vec4<$scalar> {
            type Output = Self;
            fn mul(self, rhs: Self) -> Self {
                Vec4 {
                    x: self.x * rhs.x,
                    y: self.y * rhs.y,
                    z: self.z * rhs.z,
                    w: self.w * rhs.w,
                }
            }
        }
        impl std::ops::Div for Vec4<$scalar> {
            type Output = Self;
            fn div(self, rhs: Self) -> Self {
                Vec4 {
                    x: self.x / rhs.x,
                    y: self.y / rhs.y,
                    z: self.z / rhs.z,
                    w: self.w / rhs.w,
                }
            }
        }
        impl std::ops::Rem for Vec4<$scalar> {
            type Output = Self;
            fn rem(self, rhs: Self) -> Self {
                Vec4 {
                    x: self.x % rhs.x,
                    y: self.y % rhs.y,
                    z: self.z % rhs.z,
                    w: self.w % rhs.w,
                }
            }
        }
    };
}

/// Implements vector-scalar and scalar-vector binary operations for Vec2.
macro_rules! impl_vec2_scalar_ops {
    ($scalar:ty) => {
        impl std::ops::Add<$scalar> for Vec2<$scalar> {
            type Output = Self;
            fn add(self, rhs: $scalar) -> Self {
                Vec2 {
                    x: self.x + rhs,
                    y: self.y + rhs,
                }
            }
        }
        impl std::ops::Sub<$scalar> for Vec2<$scalar> {
            type Output = Self;
            fn sub(self, rhs: $scalar) -> Self {
                Vec2 {
                    x: self.x - rhs,
                    y: self.y - rhs,
                }
            }
        }
        impl std::ops::Mul<$scalar> for Vec2<$scalar> {
            type Output = Self;
            fn mul(self, rhs: $scalar) -> Self {
                Vec2 {
                    x: self.x * rhs,
                    y: self.y * rhs,
                }
            }
        }
        impl std::ops::Div<$scalar> for Vec2<$scalar> {
            type Output = Self;
            fn div(self, rhs: $scalar) -> Self {
                Vec2 {
                    x: self.x / rhs,
                    y: self.y / rhs,
                }
            }
        }
        impl std::ops::Rem<$scalar> for Vec2<$scalar> {
            type Output = Self;
            fn rem(self, rhs: $scalar) -> Self {
                Vec2 {
                    x: self.x % rhs,
                    y: self.y % rhs,
                }
            }
        }
        impl std::ops::Add<Vec2<$scalar>> for $scalar {
            type Output = Vec2<$scalar>;
            fn add(self, rhs: Vec2<$scalar>) -> Vec2<$scalar> {
                Vec2 {
                    x: self + rhs.x,
                    y: self + rhs.y,
                }
            }
        }
        impl std::ops::Sub<Vec2<$scalar>> for $scalar {
            type Output = Vec2<$scalar>;
            fn sub(self, rhs: Vec2<$scalar>) -> Vec2<$scalar> {
                Vec2 {
                    x: self - rhs.x,
                    y: self - rhs.y,
                }
            }
        }
        impl std::ops::Mul<Vec2<$scalar>> for $scalar {
            type Output = Vec2<$scalar>;
            fn mul(self, rhs: Vec2<$scalar>) -> Vec2<$scalar> {
                Vec2 {
                    x: self * rhs.x,
                    y: self * rhs.y,
                }
            }
        }
        impl std::ops::Div<Vec2<$scalar>> for $scalar {
            type Output = Vec2<$scalar>;
            fn div(self, rhs: Vec2<$scalar>) -> Vec2<$scalar> {
                Vec2 {
                    x: self / rhs.x,
                    y: self / rhs.y,
                }
            }
        }
        impl std::ops::Rem<Vec2<$scalar>> for $scalar {
            type Output = Vec2<$scalar>;
            fn rem(self, rhs: Vec2<$scalar>) -> Vec2<$scalar> {
                Vec2 {
                    x: self % rhs.x,
                    y: self % rhs.y,
                }
            }
        }
    };
}

/// Implements vector-scalar and scalar-vector binary operations for Vec3.
macro_rules! impl_vec3_scalar_ops {
    ($scalar:ty) => {
        impl std::ops::Add<$scalar> for Vec3<$scalar> {
            type Output = Self;
            fn add(self, rhs: $scalar) -> Self {
                Vec3 {
                    x: self.x + rhs,
                    y: self.y + rhs,
                    z: self.z + rhs,
                }
            }
        }
        impl std::ops::Sub<$scalar> for Vec3<$scalar> {
            type Output = Self;
            fn sub(self, rhs: $scalar) -> Self {
                Vec3 {
                    x: self.x - rhs,
                    y: self.y - rhs,
                    z: self.z - rhs,
                }
            }
        }
        impl std::ops::Mul<$scalar> for Vec3<$scalar> {
            type Output = Self;
            fn mul(self, rhs: $scalar) -> Self {
                Vec3 {
                    x: self.x * rhs,
                    y: self.y * rhs,
                    z: self.z * rhs,
                }
            }
        }
        impl std::ops::Div<$scalar> for Vec3<$scalar> {
            type Output = Self;
            fn div(self, rhs: $scalar) -> Self {
                Vec3 {
                    x: self.x / rhs,
                    y: self.y / rhs,
                    z: self.z / rhs,
                }
            }
        }
        impl std::ops::Rem<$scalar> for Vec3<$scalar> {
            type Output = Self;
            fn rem(self, rhs: $scalar) -> Self {
                Vec3 {
                    x: self.x % rhs,
                    y: self.y % rhs,
                    z: self.z % rhs,
                }
            }
        }
        impl std::ops::Add<Vec3<$scalar>> for $scalar {
            type Output = Vec3<$scalar>;
            fn add(self, rhs: Vec3<$scalar>) -> Vec3<$scalar> {
                Vec3 {
                    x: self + rhs.x,
                    y: self + rhs.y,
                    z: self + rhs.z,
                }
            }
        }
        impl std::ops::Sub<Vec3<$scalar>> for $scalar {
            type Output = Vec3<$scalar>;
            fn sub(self, rhs: Vec3<$scalar>) -> Vec3<$scalar> {
                Vec3 {
                    x: self - rhs.x,
                    y: self - rhs.y,
                    z: self - rhs.z,
                }
            }
        }
        impl std::ops::Mul<Vec3<$scalar>> for $scalar {
            type Output = Vec3<$scalar>;
            fn mul(self, rhs: Vec3<$scalar>) -> Vec3<$scalar> {
                Vec3 {
                    x: self * rhs.x,
                    y: self * rhs.y,
                    z: self * rhs.z,
                }
            }
        }
        impl std::ops::Div<Vec3<$scalar>> for $scalar {
            type Output = Vec3<$scalar>;
            fn div(self, rhs: Vec3<$scalar>) -> Vec3<$scalar> {
                Vec3 {
                    x: self / rhs.x,
                    y: self / rhs.y,
                    z: self / rhs.z,
                }
            }
        }
        impl std::ops::Rem<Vec3<$scalar>> for $scalar {
            type Output = Vec3<$scalar>;
            fn rem(self, rhs: Vec3<$scalar>) -> Vec3<$scalar> {
                Vec3 {
                    x: self % rhs.x,
                    y: self % rhs.y,
                    z: self % rhs.z,
                }
            }
        }
    };
}

/// Implements vector-scalar and scalar-vector binary operations for Vec4.
macro_rules! impl_vec4_scalar_ops {
    ($scalar:ty) => {
        impl std::ops::Add<$scalar> for Vec4<$scalar> {
            type Output = Self;
            fn add(self, rhs: $scalar) -> Self {
                Vec4 {
                    x: self.x + rhs,
                    y: self.y + rhs,
                    z: self.z + rhs,
                    w: self.w + rhs,
                }
            }
        }
        impl std::ops::Sub<$scalar> for Vec4<$scalar> {
            type Output = Self;
            fn sub(self, rhs: $scalar) -> Self {
                Vec4 {
                    x: self.x - rhs,
                    y: self.y - rhs,
                    z: self.z - rhs,
                    w: self.w - rhs,
                }
            }
        }
        impl std::ops::Mul<$scalar> for Vec4<$scalar> {
            type Output = Self;
            fn mul(self, rhs: $scalar) -> Self {
                Vec4 {
                    x: self.x * rhs,
                    y: self.y * rhs,
                    z: self.z * rhs,
                    w: self.w * rhs,
                }
            }
        }
        impl std::ops::Div<$scalar> for Vec4<$scalar> {
            type Output = Self;
            fn div(self, rhs: $scalar) -> Self {
                Vec4 {
                    x: self.x / rhs,
                    y: self.y / rhs,
                    z: self.z / rhs,
                    w: self.w / rhs,
                }
            }
        }
        impl std::ops::Rem<$scalar> for Vec4<$scalar> {
            type Output = Self;
            fn rem(self, rhs: $scalar) -> Self {
                Vec4 {
                    x: self.x % rhs,
                    y: self.y % rhs,
                    z: self.z % rhs,
                    w: self.w % rhs,
                }
            }
        }
        impl std::ops::Add<Vec4<$scalar>> for $scalar {
            type Output = Vec4<$scalar>;
            fn add(self, rhs: Vec4<$scalar>) -> Vec4<$scalar> {
                Vec4 {
                    x: self + rhs.x,
                    y: self + rhs.y,
                    z: self + rhs.z,
                    w: self + rhs.w,
                }
            }
        }
        impl std::ops::Sub<Vec4<$scalar>> for $scalar {
            type Output = Vec4<$scalar>;
            fn sub(self, rhs: Vec4<$scalar>) -> Vec4<$scalar> {
                Vec4 {
                    x: self - rhs.x,
                    y: self - rhs.y,
                    z: self - rhs.z,
                    w: self - rhs.w,
                }
            }
        }
        impl std::ops::Mul<Vec4<$scalar>> for $scalar {
            type Output = Vec4<$scalar>;
            fn mul(self, rhs: Vec4<$scalar>) -> Vec4<$scalar> {
                Vec4 {
                    x: self * rhs.x,
                    y: self * rhs.y,
                    z: self * rhs.z,
                    w: self * rhs.w,
                }
            }
        }
        impl std::ops::Div<Vec4<$scalar>> for $scalar {
            type Output = Vec4<$scalar>;
            fn div(self, rhs: Vec4<$scalar>) -> Vec4<$scalar> {
                Vec4 {
                    x: self / rhs.x,
                    y: self / rhs.y,
                    z: self / rhs.z,
                    w: self / rhs.w,
                }
            }
        }
        impl std::ops::Rem<Vec4<$scalar>> for $scalar {
            type Output = Vec4<$scalar>;
            fn rem(self, rhs: Vec4<$scalar>) -> Vec4<$scalar> {
                Vec4 {
                    x: self % rhs.x,
                    y: self % rhs.y,
                    z: self % rhs.z,
                    w: self % rhs.w,
                }
            }
        }
    };
}

// Float vectors.
impl_vec2_ops!(f32);
impl_vec3_ops!(f32);
impl_vec4_ops!(f32);
impl_vec2_scalar_ops!(f32);
impl_vec3_scalar_ops!(f32);
impl_vec4_scalar_ops!(f32);

// Double vectors.
impl_vec2_ops!(f64);
impl_vec3_ops!(f64);
impl_vec4_ops!(f64);
impl_vec2_scalar_ops!(f64);
impl_vec3_scalar_ops!(f64);
impl_vec4_scalar_ops!(f64);

// Signed integer vectors.
impl_vec2_ops!(i32);
impl_vec3_ops!(i32);
impl_vec4_ops!(i32);
impl_vec2_scalar_ops!(i32);
impl_vec3_scalar_ops!(i32);
impl_vec4_scalar_ops!(i32);

// Unsigned integer vectors.
impl_vec2_ops!(u32);
impl_vec3_ops!(u32);
impl_vec4_ops!(u32);
impl_vec2_scalar_ops!(u32);
impl_vec3_scalar_ops!(u32);
impl_vec4_scalar_ops!(u32);

// Bitwise operations for integer and bool vectors.

/// Implements vector-vector, vector-scalar and scalar-vector bitwise
/// operations (BitAnd, BitOr, BitXor) for Vec2.
macro_rules! impl_vec2_bit_ops {
    ($scalar:ty) => {
        impl std::ops::BitAnd for Vec2<$scalar> {
            type Output = Self;
            fn bitand(self, rhs: Self) -> Self {
                Vec2 {
                    x: self.x & rhs.x,
                    y: self.y & rhs.y,
                }
            }
        }
        impl std::ops::BitOr for Vec2<$scalar> {
            type Output = Self;
            fn bitor(self, rhs: Self) -> Self {
                Vec2 {
                    x: self.x | rhs.x,
                    y: self.y | rhs.y,
                }
            }
        }
        impl std::ops::BitXor for Vec2<$scalar> {
            type Output = Self;
            fn bitxor(self, rhs: Self) -> Self {
                Vec2 {
                    x: self.x ^ rhs.x,
                    y: self.y ^ rhs.y,
                }
            }
        }
        impl std::ops::BitAnd<$scalar> for Vec2<$scalar> {
            type Output = Self;
            fn bitand(self, rhs: $scalar) -> Self {
                Vec2 {
                    x: self.x & rhs,
                    y: self.y & rhs,
                }
            }
        }
        impl std::ops::BitOr<$scalar> for Vec2<$scalar> {
            type Output = Self;
            fn bitor(self, rhs: $scalar) -> Self {
                Vec2 {
                    x: self.x | rhs,
                    y: self.y | rhs,
                }
            }
        }
        impl std::ops::BitXor<$scalar> for Vec2<$scalar> {
            type Output = Self;
            fn bitxor(self, rhs: $scalar) -> Self {
                Vec2 {
                    x: self.x ^ rhs,
                    y: self.y ^ rhs,
                }
            }
        }
        impl std::ops::BitAnd<Vec2<$scalar>> for $scalar {
            type Output = Vec2<$scalar>;
            fn bitand(self, rhs: Vec2<$scalar>) -> Vec2<$scalar> {
                Vec2 {
                    x: self & rhs.x,
                    y: self & rhs.y,
                }
            }
        }
        impl std::ops::BitOr<Vec2<$scalar>> for $scalar {
            type Output = Vec2<$scalar>;
            fn bitor(self, rhs: Vec2<$scalar>) -> Vec2<$scalar> {
                Vec2 {
                    x: self | rhs.x,
                    y: self | rhs.y,
                }
            }
        }
        impl std::ops::BitXor<Vec2<$scalar>> for $scalar {
            type Output = Vec2<$scalar>;
            fn bitxor(self, rhs: Vec2<$scalar>) -> Vec2<$scalar> {
                Vec2 {
                    x: self ^ rhs.x,
                    y: self ^ rhs.y,
                }
            }
        }
    };
}

/// Implements vector-vector, vector-scalar and scalar-vector bitwise
/// operations (BitAnd, BitOr, BitXor) for Vec3.
macro_rules! impl_vec3_bit_ops {
    ($scalar:ty) => {
        impl std::ops::BitAnd for Vec3<$scalar> {
            type Output = Self;
            fn bitand(self, rhs: Self) -> Self {
                Vec3 {
                    x: self.x & rhs.x,
                    y: self.y & rhs.y,
                    z: self.z & rhs.z,
                }
            }
        }
        impl std::ops::BitOr for Vec3<$scalar> {
            type Output = Self;
            fn bitor(self, rhs: Self) -> Self {
                Vec3 {
                    x: self.x | rhs.x,
                    y: self.y | rhs.y,
                    z: self.z | rhs.z,
                }
            }
        }
        impl std::ops::BitXor for Vec3<$scalar> {
            type Output = Self;
            fn bitxor(self, rhs: Self) -> Self {
                Vec3 {
                    x: self.x ^ rhs.x,
                    y: self.y ^ rhs.y,
                    z: self.z ^ rhs.z,
                }
            }
        }
        impl std::ops::BitAnd<$scalar> for Vec3<$scalar> {
            type Output = Self;
            fn bitand(self, rhs: $scalar) -> Self {
                Vec3 {
                    x: self.x & rhs,
                    y: self.y & rhs,
                    z: self.z & rhs,
                }
            }
        }
        impl std::ops::BitOr<$scalar> for Vec3<$scalar> {
            type Output = Self;
            fn bitor(self, rhs: $scalar) -> Self {
                Vec3 {
                    x: self.x | rhs,
                    y: self.y | rhs,
                    z: self.z | rhs,
                }
            }
        }
        impl std::ops::BitXor<$scalar> for Vec3<$scalar> {
            type Output = Self;
            fn bitxor(self, rhs: $scalar) -> Self {
                Vec3 {
                    x: self.x ^ rhs,
                    y: self.y ^ rhs,
                    z: self.z ^ rhs,
                }
            }
        }
        impl std::ops::BitAnd<Vec3<$scalar>> for $scalar {
            type Output = Vec3<$scalar>;
            fn bitand(self, rhs: Vec3<$scalar>) -> Vec3<$scalar> {
                Vec3 {
                    x: self & rhs.x,
                    y: self & rhs.y,
                    z: self & rhs.z,
                }
            }
        }
        impl std::ops::BitOr<Vec3<$scalar>> for $scalar {
            type Output = Vec3<$scalar>;
            fn bitor(self, rhs: Vec3<$scalar>) -> Vec3<$scalar> {
                Vec3 {
                    x: self | rhs.x,
                    y: self | rhs.y,
                    z: self | rhs.z,
                }
            }
        }
        impl std::ops::BitXor<Vec3<$scalar>> for $scalar {
            type Output = Vec3<$scalar>;
            fn bitxor(self, rhs: Vec3<$scalar>) -> Vec3<$scalar> {
                Vec3 {
                    x: self ^ rhs.x,
                    y: self ^ rhs.y,
                    z: self ^ rhs.z,
                }
            }
        }
    };
}

/// Implements vector-vector, vector-scalar and scalar-vector bitwise
/// operations (BitAnd, BitOr, BitXor) for Vec4.
macro_rules! impl_vec4_bit_ops {
    ($scalar:ty) => {
        impl std::ops::BitAnd for Vec4<$scalar> {
            type Output = Self;
            fn bitand(self, rhs: Self) -> Self {
                Vec4 {
                    x: self.x & rhs.x,
                    y: self.y & rhs.y,
                    z: self.z & rhs.z,
                    w: self.w & rhs.w,
                }
            }
        }
        impl std::ops::BitOr for Vec4<$scalar> {
            type Output = Self;
            fn bitor(self, rhs: Self) -> Self {
                Vec4 {
                    x: self.x | rhs.x,
                    y: self.y | rhs.y,
                    z: self.z | rhs.z,
                    w: self.w | rhs.w,
                }
            }
        }
        impl std::ops::BitXor for Vec4<$scalar> {
            type Output = Self;
            fn bitxor(self, rhs: Self) -> Self {
                Vec4 {
                    x: self.x ^ rhs.x,
                    y: self.y ^ rhs.y,
                    z: self.z ^ rhs.z,
                    w: self.w ^ rhs.w,
                }
            }
        }
        impl std::ops::BitAnd<$scalar> for Vec4<$scalar> {
            type Output = Self;
            fn bitand(self, rhs: $scalar) -> Self {
                Vec4 {
                    x: self.x & rhs,
                    y: self.y & rhs,
                    z: self.z & rhs,
                    w: self.w & rhs,
                }
            }
        }
        impl std::ops::BitOr<$scalar> for Vec4<$scalar> {
            type Output = Self;
            fn bitor(self, rhs: $scalar) -> Self {
                Vec4 {
                    x: self.x | rhs,
                    y: self.y | rhs,
                    z: self.z | rhs,
                    w: self.w | rhs,
                }
            }
        }
        impl std::ops::BitXor<$scalar> for Vec4<$scalar> {
            type Output = Self;
            fn bitxor(self, rhs: $scalar) -> Self {
                Vec4 {
                    x: self.x ^ rhs,
                    y: self.y ^ rhs,
                    z: self.z ^ rhs,
                    w: self.w ^ rhs,
                }
            }
        }
        impl std::ops::BitAnd<Vec4<$scalar>> for $scalar {
            type Output = Vec4<$scalar>;
            fn bitand(self, rhs: Vec4<$scalar>) -> Vec4<$scalar> {
                Vec4 {
                    x: self & rhs.x,
                    y: self & rhs.y,
                    z: self & rhs.z,
                    w: self & rhs.w,
                }
            }
        }
        impl std::ops::BitOr<Vec4<$scalar>> for $scalar {
            type Output = Vec4<$scalar>;
            fn bitor(self, rhs: Vec4<$scalar>) -> Vec4<$scalar> {
                Vec4 {
                    x: self | rhs.x,
                    y: self | rhs.y,
                    z: self | rhs.z,
                    w: self | rhs.w,
                }
            }
        }
        impl std::ops::BitXor<Vec4<$scalar>> for $scalar {
            type Output = Vec4<$scalar>;
            fn bitxor(self, rhs: Vec4<$scalar>) -> Vec4<$scalar> {
                Vec4 {
                    x: self ^ rhs.x,
                    y: self ^ rhs.y,
                    z: self ^ rhs.z,
                    w: self ^ rhs.w,
                }
            }
        }
    };
}

impl_vec2_bit_ops!(i32);
impl_vec3_bit_ops!(i32);
impl_vec4_bit_ops!(i32);
impl_vec2_bit_ops!(u32);
impl_vec3_bit_ops!(u32);
impl_vec4_bit_ops!(u32);
impl_vec2_bit_ops!(bool);
impl_vec3_bit_ops!(bool);
impl_vec4_bit_ops!(bool);

// Neg impls for signed types, Not for integer and bool vectors.

/// Implements unary Neg component-wise.
macro_rules! impl_vec_neg {
    ($scalar:ty) => {
        impl std::ops::Neg for Vec2<$scalar> {
            type Output = Self;
            fn neg(self) -> Self {
                Vec2 {
                    x: -self.x,
                    y: -self.y,
                }
            }
        }
        impl std::ops::Neg for Vec3<$scalar> {
            type Output = Self;
            fn neg(self) -> Self {
                Vec3 {
                    x: -self.x,
                    y: -self.y,
                    z: -self.z,
                }
            }
        }
        impl std::ops::Neg for Vec4<$scalar> {
            type Output = Self;
            fn neg(self) -> Self {
                Vec4 {
                    x: -self.x,
                    y: -self.y,
                    z: -self.z,
                    w: -self.w,
                }
            }
        }
    };
}

impl_vec_neg!(f32);
impl_vec_neg!(f64);
impl_vec_neg!(i32);

/// Implements unary Not component-wise. Rust's `!` is both logical not
/// (bool) and bitwise complement (integers), so one impl covers the
/// source's `!` and `~` operators.
macro_rules! impl_vec_not {
    ($scalar:ty) => {
        impl std::ops::Not for Vec2<$scalar> {
            type Output = Self;
            fn not(self) -> Self {
                Vec2 {
                    x: !self.x,
                    y: !self.y,
                }
            }
        }
        impl std::ops::Not for Vec3<$scalar> {
            type Output = Self;
            fn not(self) -> Self {
                Vec3 {
                    x: !self.x,
                    y: !self.y,
                    z: !self.z,
                }
            }
        }
        impl std::ops::Not for Vec4<$scalar> {
            type Output = Self;
            fn not(self) -> Self {
                Vec4 {
                    x: !self.x,
                    y: !self.y,
                    z: !self.z,
                    w: !self.w,
                }
            }
        }
    };
}

impl_vec_not!(bool);
impl_vec_not!(i32);
impl_vec_not!(u32);

// Compound assignment, delegating component-wise.

macro_rules! impl_vec_assign_ops {
    ($vec:ident, $($field:ident),+) => {
        impl<T: Copy + std::ops::Add<Output = T>> std::ops::AddAssign for $vec<T> {
            fn add_assign(&mut self, rhs: Self) {
                $(self.$field = self.$field + rhs.$field;)+
            }
        }
        impl<T: Copy + std::ops::Add<Output = T>> std::ops::AddAssign<T> for $vec<T> {
            fn add_assign(&mut self, rhs: T) {
                $(self.$field = self.$field + rhs;)+
            }
        }
        impl<T: Copy + std::ops::Sub<Output = T>> std::ops::SubAssign for $vec<T> {
            fn sub_assign(&mut self, rhs: Self) {
                $(self.$field = self.$field - rhs.$field;)+
            }
        }
        impl<T: Copy + std::ops::Sub<Output = T>> std::ops::SubAssign<T> for $vec<T> {
            fn sub_assign(&mut self, rhs: T) {
                $(self.$field = self.$field - rhs;)+
            }
        }
        impl<T: Copy + std::ops::Mul<Output = T>> std::ops::MulAssign for $vec<T> {
            fn mul_assign(&mut self, rhs: Self) {
                $(self.$field = self.$field * rhs.$field;)+
            }
        }
        impl<T: Copy + std::ops::Mul<Output = T>> std::ops::MulAssign<T> for $vec<T> {
            fn mul_assign(&mut self, rhs: T) {
                $(self.$field = self.$field * rhs;)+
            }
        }
        impl<T: Copy + std::ops::Div<Output = T>> std::ops::DivAssign for $vec<T> {
            fn div_assign(&mut self, rhs: Self) {
                $(self.$field = self.$field / rhs.$field;)+
            }
        }
        impl<T: Copy + std::ops::Div<Output = T>> std::ops::DivAssign<T> for $vec<T> {
            fn div_assign(&mut self, rhs: T) {
                $(self.$field = self.$field / rhs;)+
            }
        }
        impl<T: Copy + std::ops::Rem<Output = T>> std::ops::RemAssign for $vec<T> {
            fn rem_assign(&mut self, rhs: Self) {
                $(self.$field = self.$field % rhs.$field;)+
            }
        }
        impl<T: Copy + std::ops::Rem<Output = T>> std::ops::RemAssign<T> for $vec<T> {
            fn rem_assign(&mut self, rhs: T) {
                $(self.$field = self.$field % rhs;)+
            }
        }
    };
}

impl_vec_assign_ops!(Vec2, x, y);
impl_vec_assign_ops!(Vec3, x, y, z);
impl_vec_assign_ops!(Vec4, x, y, z, w);

// Element-wise comparisons. Unlike the derived `==`, these produce a bool
// vector of the same arity; reduce with `all`/`any`.

macro_rules! impl_vec_cmp_eq {
    ($vec:ident, $($field:ident),+) => {
        impl<T: PartialEq + Copy> $vec<T> {
            /// Element-wise `==`, producing a `bool` vector.
            pub fn cmp_eq(self, rhs: Self) -> $vec<bool> {
                $vec {
                    $($field: self.$field == rhs.$field),+
                }
            }

            /// Element-wise `!=`, producing a `bool` vector.
            pub fn cmp_ne(self, rhs: Self) -> $vec<bool> {
                $vec {
                    $($field: self.$field != rhs.$field),+
                }
            }
        }
    };
}

impl_vec_cmp_eq!(Vec2, x, y);
impl_vec_cmp_eq!(Vec3, x, y, z);
impl_vec_cmp_eq!(Vec4, x, y, z, w);

/// Implements the ordering comparisons for one numeric scalar.
macro_rules! impl_vec_cmp_ord {
    ($vec:ident, $scalar:ty, $($field:ident),+) => {
        impl $vec<$scalar> {
            /// Element-wise `<`, producing a `bool` vector.
            pub fn cmp_lt(self, rhs: Self) -> $vec<bool> {
                $vec {
                    $($field: self.$field < rhs.$field),+
                }
            }

            /// Element-wise `<=`, producing a `bool` vector.
            pub fn cmp_le(self, rhs: Self) -> $vec<bool> {
                $vec {
                    $($field: self.$field <= rhs.$field),+
                }
            }

            /// Element-wise `>`, producing a `bool` vector.
            pub fn cmp_gt(self, rhs: Self) -> $vec<bool> {
                $vec {
                    $($field: self.$field > rhs.$field),+
                }
            }

            /// Element-wise `>=`, producing a `bool` vector.
            pub fn cmp_ge(self, rhs: Self) -> $vec<bool> {
                $vec {
                    $($field: self.$field >= rhs.$field),+
                }
            }
        }
    };
}

impl_vec_cmp_ord!(Vec2, f32, x, y);
impl_vec_cmp_ord!(Vec3, f32, x, y, z);
impl_vec_cmp_ord!(Vec4, f32, x, y, z, w);
impl_vec_cmp_ord!(Vec2, f64, x, y);
impl_vec_cmp_ord!(Vec3, f64, x, y, z);
impl_vec_cmp_ord!(Vec4, f64, x, y, z, w);
impl_vec_cmp_ord!(Vec2, i32, x, y);
impl_vec_cmp_ord!(Vec3, i32, x, y, z);
impl_vec_cmp_ord!(Vec4, i32, x, y, z, w);
impl_vec_cmp_ord!(Vec2, u32, x, y);
impl_vec_cmp_ord!(Vec3, u32, x, y, z);
impl_vec_cmp_ord!(Vec4, u32, x, y, z, w);

// ZERO/ONE constants for the numeric aliases.

macro_rules! impl_vec_consts {
    ($scalar:ty, $zero:expr, $one:expr) => {
        impl Vec2<$scalar> {
            /// All components zero.
            pub const ZERO: Self = Self { x: $zero, y: $zero };
            /// All components one.
            pub const ONE: Self = Self { x: $one, y: $one };
        }
        impl Vec3<$scalar> {
            /// All components zero.
            pub const ZERO: Self = Self {
                x: $zero,
                y: $zero,
                z: $zero,
            };
            /// All components one.
            pub const ONE: Self = Self {
                x: $one,
                y: $one,
                z: $one,
            };
        }
        impl Vec4<$scalar> {
            /// All components zero.
            pub const ZERO: Self = Self {
                x: $zero,
                y: $zero,
                z: $zero,
                w: $zero,
            };
            /// All components one.
            pub const ONE: Self = Self {
                x: $one,
                y: $one,
                z: $one,
                w: $one,
            };
        }
    };
}

impl_vec_consts!(f32, 0.0, 1.0);
impl_vec_consts!(f64, 0.0, 1.0);
impl_vec_consts!(i32, 0, 1);
impl_vec_consts!(u32, 0, 1);

// Display: the canonical culture-invariant text form, `f`-suffixed for
// `f32` components.

macro_rules! impl_vec_display {
    ($vec:ident<$scalar:ty>, $fmt:literal, $($field:ident),+) => {
        impl std::fmt::Display for $vec<$scalar> {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, $fmt, $(self.$field),+)
            }
        }
    };
}

impl_vec_display!(Vec2<f32>, "Vec2f({}f, {}f)", x, y);
impl_vec_display!(Vec3<f32>, "Vec3f({}f, {}f, {}f)", x, y, z);
impl_vec_display!(Vec4<f32>, "Vec4f({}f, {}f, {}f, {}f)", x, y, z, w);
impl_vec_display!(Vec2<f64>, "Vec2d({}, {})", x, y);
impl_vec_display!(Vec3<f64>, "Vec3d({}, {}, {})", x, y, z);
impl_vec_display!(Vec4<f64>, "Vec4d({}, {}, {}, {})", x, y, z, w);
impl_vec_display!(Vec2<i32>, "Vec2i({}, {})", x, y);
impl_vec_display!(Vec3<i32>, "Vec3i({}, {}, {})", x, y, z);
impl_vec_display!(Vec4<i32>, "Vec4i({}, {}, {}, {})", x, y, z, w);
impl_vec_display!(Vec2<u32>, "Vec2u({}, {})", x, y);
impl_vec_display!(Vec3<u32>, "Vec3u({}, {}, {})", x, y, z);
impl_vec_display!(Vec4<u32>, "Vec4u({}, {}, {}, {})", x, y, z, w);
impl_vec_display!(Vec2<bool>, "Vec2b({}, {})", x, y);
impl_vec_display!(Vec3<bool>, "Vec3b({}, {}, {})", x, y, z);
impl_vec_display!(Vec4<bool>, "Vec4b({}, {}, {}, {})", x, y, z, w);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn sanity_constructors() {
        let v = vec3f(1.0, 2.0, 3.0);
        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(Vec3f::splat(2.0), vec3f(2.0, 2.0, 2.0));
        assert_eq!(Vec3f::from_array([1.0, 2.0, 3.0]), v);
        assert_eq!(v.to_array(), [1.0, 2.0, 3.0]);
    }

    #[test]
    fn sanity_extend_truncate() {
        assert_eq!(vec2i(1, 2).extend(3), vec3i(1, 2, 3));
        assert_eq!(vec3i(1, 2, 3).extend(4), vec4i(1, 2, 3, 4));
        assert_eq!(vec4i(1, 2, 3, 4).truncate(), vec3i(1, 2, 3));
        assert_eq!(vec3i(1, 2, 3).truncate(), vec2i(1, 2));
    }

    #[test]
    fn sanity_index() {
        let v = vec4u(10, 20, 30, 40);
        assert_eq!(v[0usize], v.x);
        assert_eq!(v[1usize], v.y);
        assert_eq!(v[2usize], v.z);
        assert_eq!(v[3usize], v.w);
        assert_eq!(v[3u32], 40);

        let mut m = vec2f(1.0, 2.0);
        m[1usize] = 5.0;
        assert_eq!(m, vec2f(1.0, 5.0));
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn index_out_of_range_vec2() {
        let v = vec2f(1.0, 2.0);
        let _ = v[2usize];
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn index_out_of_range_vec3() {
        let v = vec3i(1, 2, 3);
        let _ = v[3usize];
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn index_out_of_range_vec4() {
        let v = vec4f(1.0, 2.0, 3.0, 4.0);
        let _ = v[4usize];
    }

    #[test]
    fn sanity_swizzle_read() {
        let v = vec3f(1.0, 2.0, 3.0);
        assert_eq!(v.zyx(), vec3f(3.0, 2.0, 1.0));
        assert_eq!(v.xy(), vec2f(1.0, 2.0));
        assert_eq!(v.zz(), vec2f(3.0, 3.0));
        assert_eq!(v.xyzx(), vec4f(1.0, 2.0, 3.0, 1.0));

        let w = vec4i(1, 2, 3, 4);
        assert_eq!(w.wzyx(), vec4i(4, 3, 2, 1));
        assert_eq!(w.ww(), vec2i(4, 4));
    }

    #[test]
    fn swizzle_roundtrip_vec2() {
        let v = vec2f(1.5, -2.5);
        assert_eq!(v.xy(), v);

        // Writing a swizzle's own value back through it is the identity.
        let mut w = v;
        let yx = w.yx();
        w.set_yx(yx);
        assert_eq!(w, v);

        let mut s = vec2i(7, 9);
        s.set_xy(vec2i(1, 2));
        assert_eq!(s, vec2i(1, 2));
        s.set_yx(vec2i(1, 2));
        assert_eq!(s, vec2i(2, 1));
    }

    #[test]
    fn sanity_arithmetic() {
        let a = vec3f(1.0, 2.0, 3.0);
        let b = vec3f(4.0, 5.0, 6.0);
        assert_eq!(a + b, vec3f(5.0, 7.0, 9.0));
        assert_eq!(b - a, vec3f(3.0, 3.0, 3.0));
        assert_eq!(a * b, vec3f(4.0, 10.0, 18.0));
        assert_eq!(b / a, vec3f(4.0, 2.5, 2.0));
        assert_eq!(vec3i(7, 8, 9) % vec3i(2, 3, 5), vec3i(1, 2, 4));
    }

    #[test]
    fn sanity_scalar_ops_both_sides() {
        let v = vec2f(1.0, 2.0);
        assert_eq!(v + 1.0, vec2f(2.0, 3.0));
        assert_eq!(1.0 + v, vec2f(2.0, 3.0));
        assert_eq!(v * 2.0, vec2f(2.0, 4.0));
        assert_eq!(2.0 * v, vec2f(2.0, 4.0));
        assert_eq!(10.0 - v, vec2f(9.0, 8.0));
        assert_eq!(4.0 / v, vec2f(4.0, 2.0));
    }

    #[test]
    fn sanity_compound_assignment() {
        let mut v = vec3i(1, 2, 3);
        v += vec3i(1, 1, 1);
        assert_eq!(v, vec3i(2, 3, 4));
        v *= 2;
        assert_eq!(v, vec3i(4, 6, 8));
        v -= 1;
        assert_eq!(v, vec3i(3, 5, 7));
    }

    #[test]
    fn sanity_bit_ops() {
        let a = vec2u(0b1100, 0b1010);
        let b = vec2u(0b1010, 0b0110);
        assert_eq!(a & b, vec2u(0b1000, 0b0010));
        assert_eq!(a | b, vec2u(0b1110, 0b1110));
        assert_eq!(a ^ b, vec2u(0b0110, 0b1100));
        assert_eq!(!vec2b(true, false), vec2b(false, true));
        assert_eq!(
            vec2b(true, false) & vec2b(true, true),
            vec2b(true, false)
        );
    }

    #[test]
    fn sanity_neg() {
        assert_eq!(-vec3f(1.0, -2.0, 3.0), vec3f(-1.0, 2.0, -3.0));
        assert_eq!(-vec2i(5, -6), vec2i(-5, 6));
    }

    #[test]
    fn cmp_produces_bool_vectors() {
        let a = vec3f(1.0, 5.0, 3.0);
        let b = vec3f(1.0, 2.0, 4.0);
        assert_eq!(a.cmp_eq(b), vec3b(true, false, false));
        assert_eq!(a.cmp_ne(b), vec3b(false, true, true));
        assert_eq!(a.cmp_lt(b), vec3b(false, false, true));
        assert_eq!(a.cmp_le(b), vec3b(true, false, true));
        assert_eq!(a.cmp_gt(b), vec3b(false, true, false));
        assert_eq!(a.cmp_ge(b), vec3b(true, true, false));
    }

    #[test]
    fn sanity_widening_conversions() {
        let v: Vec3f = vec3i(1, -2, 3).into();
        assert_eq!(v, vec3f(1.0, -2.0, 3.0));
        let d: Vec2d = vec2f(1.5, 2.5).into();
        assert_eq!(d, vec2d(1.5, 2.5));
        let u: Vec4d = vec4u(1, 2, 3, 4).into();
        assert_eq!(u, vec4d(1.0, 2.0, 3.0, 4.0));
    }

    #[test]
    fn sanity_narrowing_conversions() {
        assert_eq!(vec2f(1.9, -2.9).as_i32(), vec2i(1, -2));
        assert_eq!(vec2d(1.5, 2.5).as_f32(), vec2f(1.5, 2.5));
        assert_eq!(vec3b(true, false, true).as_i32(), vec3i(1, 0, 1));
        assert_eq!(vec3b(true, false, true).as_f32(), vec3f(1.0, 0.0, 1.0));
        assert_eq!(vec2i(-1, 1).as_u32(), vec2u(u32::MAX, 1));
    }

    #[test]
    fn sanity_glam_interop() {
        let v: Vec3f = glam::Vec3::new(1.0, 2.0, 3.0).into();
        assert_eq!(v, vec3f(1.0, 2.0, 3.0));
        let g: glam::Vec3 = v.into();
        assert_eq!(g, glam::Vec3::new(1.0, 2.0, 3.0));
        let d: glam::DVec2 = vec2d(1.0, 2.0).into();
        assert_eq!(d, glam::DVec2::new(1.0, 2.0));
    }

    #[test]
    fn display_forms() {
        assert_eq!(vec2f(1.0, 2.5).to_string(), "Vec2f(1f, 2.5f)");
        assert_eq!(vec3d(1.0, 2.0, 3.5).to_string(), "Vec3d(1, 2, 3.5)");
        assert_eq!(vec3i(1, -2, 3).to_string(), "Vec3i(1, -2, 3)");
        assert_eq!(vec2b(true, false).to_string(), "Vec2b(true, false)");
        assert_eq!(
            vec4u(1, 2, 3, 4).to_string(),
            "Vec4u(1, 2, 3, 4)"
        );
    }

    #[test]
    fn sanity_constants() {
        assert_eq!(Vec3f::ZERO, vec3f(0.0, 0.0, 0.0));
        assert_eq!(Vec3f::ONE, vec3f(1.0, 1.0, 1.0));
        assert_eq!(Vec4i::ZERO, vec4i(0, 0, 0, 0));
    }
}
