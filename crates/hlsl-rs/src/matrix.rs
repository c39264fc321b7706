//! Matrix implementations.
//!
//! An `MatCxR` matrix is `C` columns of `R`-component vectors, stored in
//! the public fields `c0`, `c1`, ... Indexing with `m[i]` yields column
//! `i`.
//!
//! Scalar constructors (`Mat3x3::new`) take their arguments in row-major
//! reading order and store them column-major; the transposition between
//! the argument list and the field layout is deliberate and matches the
//! system these types mirror.
//!
//! All binary operators are component-wise, broadcast over columns. In
//! particular `*` is the Hadamard product, *not* the linear-algebra
//! matrix product; that one is [`mul`].

use crate::vector::{Vec2, Vec3, Vec4};

/// A matrix of 2 columns of 2-component vectors.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat2x2<T> {
    pub c0: Vec2<T>,
    pub c1: Vec2<T>,
}

/// A matrix of 2 columns of 3-component vectors.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat2x3<T> {
    pub c0: Vec3<T>,
    pub c1: Vec3<T>,
}

/// A matrix of 2 columns of 4-component vectors.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat2x4<T> {
    pub c0: Vec4<T>,
    pub c1: Vec4<T>,
}

/// A matrix of 3 columns of 2-component vectors.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3x2<T> {
    pub c0: Vec2<T>,
    pub c1: Vec2<T>,
    pub c2: Vec2<T>,
}

/// A matrix of 3 columns of 3-component vectors.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3x3<T> {
    pub c0: Vec3<T>,
    pub c1: Vec3<T>,
    pub c2: Vec3<T>,
}

/// A matrix of 3 columns of 4-component vectors.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat3x4<T> {
    pub c0: Vec4<T>,
    pub c1: Vec4<T>,
    pub c2: Vec4<T>,
}

/// A matrix of 4 columns of 2-component vectors.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4x2<T> {
    pub c0: Vec2<T>,
    pub c1: Vec2<T>,
    pub c2: Vec2<T>,
    pub c3: Vec2<T>,
}

/// A matrix of 4 columns of 3-component vectors.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4x3<T> {
    pub c0: Vec3<T>,
    pub c1: Vec3<T>,
    pub c2: Vec3<T>,
    pub c3: Vec3<T>,
}

/// A matrix of 4 columns of 4-component vectors.
#[repr(C)]
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Mat4x4<T> {
    pub c0: Vec4<T>,
    pub c1: Vec4<T>,
    pub c2: Vec4<T>,
    pub c3: Vec4<T>,
}

/// Writes one column in the matrix text form, `(x, y, ...)`.
trait DisplayColumn {
    fn fmt_column(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result;
}

macro_rules! impl_column_display {
    ($vec:ident<$scalar:ty>, $fmt:literal, $($field:ident),+) => {
        impl DisplayColumn for $vec<$scalar> {
            fn fmt_column(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, $fmt, $(self.$field),+)
            }
        }
    };
}

impl_column_display!(Vec2<f32>, "({}f, {}f)", x, y);
impl_column_display!(Vec3<f32>, "({}f, {}f, {}f)", x, y, z);
impl_column_display!(Vec4<f32>, "({}f, {}f, {}f, {}f)", x, y, z, w);
impl_column_display!(Vec2<f64>, "({}, {})", x, y);
impl_column_display!(Vec3<f64>, "({}, {}, {})", x, y, z);
impl_column_display!(Vec4<f64>, "({}, {}, {}, {})", x, y, z, w);
impl_column_display!(Vec2<i32>, "({}, {})", x, y);
impl_column_display!(Vec3<i32>, "({}, {}, {})", x, y, z);
impl_column_display!(Vec4<i32>, "({}, {}, {}, {})", x, y, z, w);
impl_column_display!(Vec2<u32>, "({}, {})", x, y);
impl_column_display!(Vec3<u32>, "({}, {}, {})", x, y, z);
impl_column_display!(Vec4<u32>, "({}, {}, {}, {})", x, y, z, w);
impl_column_display!(Vec2<bool>, "({}, {})", x, y);
impl_column_display!(Vec3<bool>, "({}, {}, {})", x, y, z);
impl_column_display!(Vec4<bool>, "({}, {}, {}, {})", x, y, z, w);

/// matrix_types! generates, for one scalar suffix:
/// * concretized type aliases for all nine shapes
/// * const column-taking constructor functions
/// * `Display` impls producing `MatCxR?((..), (..), ...)`
macro_rules! matrix_types {
    ($suffix:ident, $ty:ty) => {
        matrix_types!(@shape $suffix, $ty, Mat2x2, mat2x2, Vec2, [c0, c1]);
        matrix_types!(@shape $suffix, $ty, Mat2x3, mat2x3, Vec3, [c0, c1]);
        matrix_types!(@shape $suffix, $ty, Mat2x4, mat2x4, Vec4, [c0, c1]);
        matrix_types!(@shape $suffix, $ty, Mat3x2, mat3x2, Vec2, [c0, c1, c2]);
        matrix_types!(@shape $suffix, $ty, Mat3x3, mat3x3, Vec3, [c0, c1, c2]);
        matrix_types!(@shape $suffix, $ty, Mat3x4, mat3x4, Vec4, [c0, c1, c2]);
        matrix_types!(@shape $suffix, $ty, Mat4x2, mat4x2, Vec2, [c0, c1, c2, c3]);
        matrix_types!(@shape $suffix, $ty, Mat4x3, mat4x3, Vec3, [c0, c1, c2, c3]);
        matrix_types!(@shape $suffix, $ty, Mat4x4, mat4x4, Vec4, [c0, c1, c2, c3]);
    };
    (@shape $suffix:ident, $ty:ty, $mat:ident, $ctor:ident, $vec:ident, [$($c:ident),+]) => {
        paste::paste! {
            #[doc = concat!(
                "Concrete type alias for a `", stringify!($mat),
                "` matrix of `", stringify!($ty), "` scalar components."
            )]
            pub type [<$mat $suffix>] = $mat<$ty>;

            #[doc = concat!(
                "Constructs a `", stringify!($mat), "` matrix of `",
                stringify!($ty), "` scalar components from its columns."
            )]
            pub const fn [<$ctor $suffix>]($($c: $vec<$ty>),+) -> $mat<$ty> {
                $mat { $($c),+ }
            }

            impl std::fmt::Display for $mat<$ty> {
                fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                    write!(f, concat!(stringify!($mat), stringify!($suffix), "("))?;
                    let mut first = true;
                    $(
                        if !first {
                            write!(f, ", ")?;
                        }
                        first = false;
                        self.$c.fmt_column(f)?;
                    )+
                    write!(f, ")")
                }
            }
        }
    };
}

matrix_types!(f, f32);
matrix_types!(d, f64);
matrix_types!(i, i32);
matrix_types!(u, u32);
matrix_types!(b, bool);

/// Shared per-shape surface: column constructor, broadcast, map, and the
/// bounds-checked column indexers.
macro_rules! impl_matrix {
    ($mat:ident, $vec:ident, $cols:literal, [$(($idx:literal, $c:ident)),+]) => {
        impl<T: Copy> $mat<T> {
            /// Construct from columns.
            pub const fn from_cols($($c: $vec<T>),+) -> Self {
                Self { $($c),+ }
            }

            /// Construct with every component set to `v`.
            pub const fn splat(v: T) -> Self {
                Self {
                    $($c: $vec::splat(v)),+
                }
            }

            /// Apply `f` to every component.
            pub fn map<U>(self, mut f: impl FnMut(T) -> U) -> $mat<U> {
                $mat {
                    $($c: self.$c.map(&mut f)),+
                }
            }
        }

        impl<T> std::ops::Index<usize> for $mat<T> {
            type Output = $vec<T>;

            fn index(&self, index: usize) -> &$vec<T> {
                match index {
                    $($idx => &self.$c,)+
                    _ => panic!(
                        "index out of bounds: {} has {} columns but index is {index}",
                        stringify!($mat),
                        $cols
                    ),
                }
            }
        }

        impl<T> std::ops::IndexMut<usize> for $mat<T> {
            fn index_mut(&mut self, index: usize) -> &mut $vec<T> {
                match index {
                    $($idx => &mut self.$c,)+
                    _ => panic!(
                        "index out of bounds: {} has {} columns but index is {index}",
                        stringify!($mat),
                        $cols
                    ),
                }
            }
        }

        impl<T> std::ops::Index<u32> for $mat<T> {
            type Output = $vec<T>;

            fn index(&self, index: u32) -> &$vec<T> {
                &self[index as usize]
            }
        }

        impl<T> std::ops::IndexMut<u32> for $mat<T> {
            fn index_mut(&mut self, index: u32) -> &mut $vec<T> {
                &mut self[index as usize]
            }
        }
    };
}

impl_matrix!(Mat2x2, Vec2, 2, [(0, c0), (1, c1)]);
impl_matrix!(Mat2x3, Vec3, 2, [(0, c0), (1, c1)]);
impl_matrix!(Mat2x4, Vec4, 2, [(0, c0), (1, c1)]);
impl_matrix!(Mat3x2, Vec2, 3, [(0, c0), (1, c1), (2, c2)]);
impl_matrix!(Mat3x3, Vec3, 3, [(0, c0), (1, c1), (2, c2)]);
impl_matrix!(Mat3x4, Vec4, 3, [(0, c0), (1, c1), (2, c2)]);
impl_matrix!(Mat4x2, Vec2, 4, [(0, c0), (1, c1), (2, c2), (3, c3)]);
impl_matrix!(Mat4x3, Vec3, 4, [(0, c0), (1, c1), (2, c2), (3, c3)]);
impl_matrix!(Mat4x4, Vec4, 4, [(0, c0), (1, c1), (2, c2), (3, c3)]);

// Row-major scalar constructors. The argument list reads row by row
// (m00 m01 ... are the first row) while the fields store columns, so
// column j is assembled from every row's j-th argument.

impl<T: Copy> Mat2x2<T> {
    /// Construct from scalars in row-major reading order.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(m00: T, m01: T, m10: T, m11: T) -> Self {
        Self {
            c0: Vec2::vec2(m00, m10),
            c1: Vec2::vec2(m01, m11),
        }
    }
}

impl<T: Copy> Mat2x3<T> {
    /// Construct from scalars in row-major reading order.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(m00: T, m01: T, m10: T, m11: T, m20: T, m21: T) -> Self {
        Self {
            c0: Vec3::vec3(m00, m10, m20),
            c1: Vec3::vec3(m01, m11, m21),
        }
    }
}

impl<T: Copy> Mat2x4<T> {
    /// Construct from scalars in row-major reading order.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m00: T,
        m01: T,
        m10: T,
        m11: T,
        m20: T,
        m21: T,
        m30: T,
        m31: T,
    ) -> Self {
        Self {
            c0: Vec4::vec4(m00, m10, m20, m30),
            c1: Vec4::vec4(m01, m11, m21, m31),
        }
    }
}

impl<T: Copy> Mat3x2<T> {
    /// Construct from scalars in row-major reading order.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(m00: T, m01: T, m02: T, m10: T, m11: T, m12: T) -> Self {
        Self {
            c0: Vec2::vec2(m00, m10),
            c1: Vec2::vec2(m01, m11),
            c2: Vec2::vec2(m02, m12),
        }
    }
}

impl<T: Copy> Mat3x3<T> {
    /// Construct from scalars in row-major reading order.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m00: T,
        m01: T,
        m02: T,
        m10: T,
        m11: T,
        m12: T,
        m20: T,
        m21: T,
        m22: T,
    ) -> Self {
        Self {
            c0: Vec3::vec3(m00, m10, m20),
            c1: Vec3::vec3(m01, m11, m21),
            c2: Vec3::vec3(m02, m12, m22),
        }
    }
}

impl<T: Copy> Mat3x4<T> {
    /// Construct from scalars in row-major reading order.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m00: T,
        m01: T,
        m02: T,
        m10: T,
        m11: T,
        m12: T,
        m20: T,
        m21: T,
        m22: T,
        m30: T,
        m31: T,
        m32: T,
    ) -> Self {
        Self {
            c0: Vec4::vec4(m00, m10, m20, m30),
            c1: Vec4::vec4(m01, m11, m21, m31),
            c2: Vec4::vec4(m02, m12, m22, m32),
        }
    }
}

impl<T: Copy> Mat4x2<T> {
    /// Construct from scalars in row-major reading order.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m00: T,
        m01: T,
        m02: T,
        m03: T,
        m10: T,
        m11: T,
        m12: T,
        m13: T,
    ) -> Self {
        Self {
            c0: Vec2::vec2(m00, m10),
            c1: Vec2::vec2(m01, m11),
            c2: Vec2::vec2(m02, m12),
            c3: Vec2::vec2(m03, m13),
        }
    }
}

impl<T: Copy> Mat4x3<T> {
    /// Construct from scalars in row-major reading order.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m00: T,
        m01: T,
        m02: T,
        m03: T,
        m10: T,
        m11: T,
        m12: T,
        m13: T,
        m20: T,
        m21: T,
        m22: T,
        m23: T,
    ) -> Self {
        Self {
            c0: Vec3::vec3(m00, m10, m20),
            c1: Vec3::vec3(m01, m11, m21),
            c2: Vec3::vec3(m02, m12, m22),
            c3: Vec3::vec3(m03, m13, m23),
        }
    }
}

impl<T: Copy> Mat4x4<T> {
    /// Construct from scalars in row-major reading order.
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m00: T,
        m01: T,
        m02: T,
        m03: T,
        m10: T,
        m11: T,
        m12: T,
        m13: T,
        m20: T,
        m21: T,
        m22: T,
        m23: T,
        m30: T,
        m31: T,
        m32: T,
        m33: T,
    ) -> Self {
        Self {
            c0: Vec4::vec4(m00, m10, m20, m30),
            c1: Vec4::vec4(m01, m11, m21, m31),
            c2: Vec4::vec4(m02, m12, m22, m32),
            c3: Vec4::vec4(m03, m13, m23, m33),
        }
    }
}

// Truncating conversion from the 4x4 shape, column-wise.

impl<T: Copy> Mat3x3<T> {
    /// The upper-left 3x3 of a 4x4 matrix.
    pub fn from_mat4(m: Mat4x4<T>) -> Self {
        Self {
            c0: m.c0.truncate(),
            c1: m.c1.truncate(),
            c2: m.c2.truncate(),
        }
    }
}

impl<T: Copy> Mat2x2<T> {
    /// The upper-left 2x2 of a 3x3 matrix.
    pub fn from_mat3(m: Mat3x3<T>) -> Self {
        Self {
            c0: m.c0.truncate(),
            c1: m.c1.truncate(),
        }
    }
}

// Component-wise operators, broadcast over columns. `Mul` here is the
// Hadamard product; the linear-algebra product is the `mul` function.

macro_rules! impl_mat_binops {
    ($mat:ident, $vec:ident, [$($c:ident),+]) => {
        impl<T> std::ops::Add for $mat<T>
        where
            $vec<T>: std::ops::Add<Output = $vec<T>>,
        {
            type Output = Self;
            fn add(self, rhs: Self) -> Self {
                Self {
                    $($c: self.$c + rhs.$c),+
                }
            }
        }
        impl<T> std::ops::Sub for $mat<T>
        where
            $vec<T>: std::ops::Sub<Output = $vec<T>>,
        {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self {
                Self {
                    $($c: self.$c - rhs.$c),+
                }
            }
        }
        impl<T> std::ops::Mul for $mat<T>
        where
            $vec<T>: std::ops::Mul<Output = $vec<T>>,
        {
            type Output = Self;
            /// Component-wise (Hadamard) product of same-shape matrices.
            fn mul(self, rhs: Self) -> Self {
                Self {
                    $($c: self.$c * rhs.$c),+
                }
            }
        }
        impl<T> std::ops::Div for $mat<T>
        where
            $vec<T>: std::ops::Div<Output = $vec<T>>,
        {
            type Output = Self;
            fn div(self, rhs: Self) -> Self {
                Self {
                    $($c: self.$c / rhs.$c),+
                }
            }
        }
        impl<T> std::ops::Rem for $mat<T>
        where
            $vec<T>: std::ops::Rem<Output = $vec<T>>,
        {
            type Output = Self;
            fn rem(self, rhs: Self) -> Self {
                Self {
                    $($c: self.$c % rhs.$c),+
                }
            }
        }
        impl<T: Copy> std::ops::Add<T> for $mat<T>
        where
            $vec<T>: std::ops::Add<T, Output = $vec<T>>,
        {
            type Output = Self;
            fn add(self, rhs: T) -> Self {
                Self {
                    $($c: self.$c + rhs),+
                }
            }
        }
        impl<T: Copy> std::ops::Sub<T> for $mat<T>
        where
            $vec<T>: std::ops::Sub<T, Output = $vec<T>>,
        {
            type Output = Self;
            fn sub(self, rhs: T) -> Self {
                Self {
                    $($c: self.$c - rhs),+
                }
            }
        }
        impl<T: Copy> std::ops::Mul<T> for $mat<T>
        where
            $vec<T>: std::ops::Mul<T, Output = $vec<T>>,
        {
            type Output = Self;
            fn mul(self, rhs: T) -> Self {
                Self {
                    $($c: self.$c * rhs),+
                }
            }
        }
        impl<T: Copy> std::ops::Div<T> for $mat<T>
        where
            $vec<T>: std::ops::Div<T, Output = $vec<T>>,
        {
            type Output = Self;
            fn div(self, rhs: T) -> Self {
                Self {
                    $($c: self.$c / rhs),+
                }
            }
        }
        impl<T: Copy> std::ops::Rem<T> for $mat<T>
        where
            $vec<T>: std::ops::Rem<T, Output = $vec<T>>,
        {
            type Output = Self;
            fn rem(self, rhs: T) -> Self {
                Self {
                    $($c: self.$c % rhs),+
                }
            }
        }
        impl<T> std::ops::BitAnd for $mat<T>
        where
            $vec<T>: std::ops::BitAnd<Output = $vec<T>>,
        {
            type Output = Self;
            fn bitand(self, rhs: Self) -> Self {
                Self {
                    $($c: self.$c & rhs.$c),+
                }
            }
        }
        impl<T> std::ops::BitOr for $mat<T>
        where
            $vec<T>: std::ops::BitOr<Output = $vec<T>>,
        {
            type Output = Self;
            fn bitor(self, rhs: Self) -> Self {
                Self {
                    $($c: self.$c | rhs.$c),+
                }
            }
        }
        impl<T> std::ops::BitXor for $mat<T>
        where
            $vec<T>: std::ops::BitXor<Output = $vec<T>>,
        {
            type Output = Self;
            fn bitxor(self, rhs: Self) -> Self {
                Self {
                    $($c: self.$c ^ rhs.$c),+
                }
            }
        }
        impl<T> std::ops::Neg for $mat<T>
        where
            $vec<T>: std::ops::Neg<Output = $vec<T>>,
        {
            type Output = Self;
            fn neg(self) -> Self {
                Self {
                    $($c: -self.$c),+
                }
            }
        }
        impl<T> std::ops::Not for $mat<T>
        where
            $vec<T>: std::ops::Not<Output = $vec<T>>,
        {
            type Output = Self;
            fn not(self) -> Self {
                Self {
                    $($c: !self.$c),+
                }
            }
        }
    };
}

impl_mat_binops!(Mat2x2, Vec2, [c0, c1]);
impl_mat_binops!(Mat2x3, Vec3, [c0, c1]);
impl_mat_binops!(Mat2x4, Vec4, [c0, c1]);
impl_mat_binops!(Mat3x2, Vec2, [c0, c1, c2]);
impl_mat_binops!(Mat3x3, Vec3, [c0, c1, c2]);
impl_mat_binops!(Mat3x4, Vec4, [c0, c1, c2]);
impl_mat_binops!(Mat4x2, Vec2, [c0, c1, c2, c3]);
impl_mat_binops!(Mat4x3, Vec3, [c0, c1, c2, c3]);
impl_mat_binops!(Mat4x4, Vec4, [c0, c1, c2, c3]);

/// Implements scalar-on-the-left arithmetic for one scalar over all nine
/// shapes.
macro_rules! impl_mat_scalar_left {
    ($scalar:ty => $(($mat:ident, [$($c:ident),+])),+) => {
        $(
            impl std::ops::Add<$mat<$scalar>> for $scalar {
                type Output = $mat<$scalar>;
                fn add(self, rhs: $mat<$scalar>) -> $mat<$scalar> {
                    $mat {
                        $($c: self + rhs.$c),+
                    }
                }
            }
            impl std::ops::Sub<$mat<$scalar>> for $scalar {
                type Output = $mat<$scalar>;
                fn sub(self, rhs: $mat<$scalar>) -> $mat<$scalar> {
                    $mat {
                        $($c: self - rhs.$c),+
                    }
                }
            }
            impl std::ops::Mul<$mat<$scalar>> for $scalar {
                type Output = $mat<$scalar>;
                fn mul(self, rhs: $mat<$scalar>) -> $mat<$scalar> {
                    $mat {
                        $($c: self * rhs.$c),+
                    }
                }
            }
            impl std::ops::Div<$mat<$scalar>> for $scalar {
                type Output = $mat<$scalar>;
                fn div(self, rhs: $mat<$scalar>) -> $mat<$scalar> {
                    $mat {
                        $($c: self / rhs.$c),+
                    }
                }
            }
            impl std::ops::Rem<$mat<$scalar>> for $scalar {
                type Output = $mat<$scalar>;
                fn rem(self, rhs: $mat<$scalar>) -> $mat<$scalar> {
                    $mat {
                        $($c: self % rhs.$c),+
                    }
                }
            }
        )+
    };
}

macro_rules! impl_mat_scalar_left_all_shapes {
    ($scalar:ty) => {
        impl_mat_scalar_left!(
            $scalar =>
            (Mat2x2, [c0, c1]),
            (Mat2x3, [c0, c1]),
            (Mat2x4, [c0, c1]),
            (Mat3x2, [c0, c1, c2]),
            (Mat3x3, [c0, c1, c2]),
            (Mat3x4, [c0, c1, c2]),
            (Mat4x2, [c0, c1, c2, c3]),
            (Mat4x3, [c0, c1, c2, c3]),
            (Mat4x4, [c0, c1, c2, c3])
        );
    };
}

impl_mat_scalar_left_all_shapes!(f32);
impl_mat_scalar_left_all_shapes!(f64);
impl_mat_scalar_left_all_shapes!(i32);
impl_mat_scalar_left_all_shapes!(u32);

// Element-wise comparisons producing a bool matrix of the same shape.

macro_rules! impl_mat_cmp_eq {
    ($mat:ident, [$($c:ident),+]) => {
        impl<T: PartialEq + Copy> $mat<T> {
            /// Element-wise `==`, producing a `bool` matrix.
            pub fn cmp_eq(self, rhs: Self) -> $mat<bool> {
                $mat {
                    $($c: self.$c.cmp_eq(rhs.$c)),+
                }
            }

            /// Element-wise `!=`, producing a `bool` matrix.
            pub fn cmp_ne(self, rhs: Self) -> $mat<bool> {
                $mat {
                    $($c: self.$c.cmp_ne(rhs.$c)),+
                }
            }
        }
    };
}

impl_mat_cmp_eq!(Mat2x2, [c0, c1]);
impl_mat_cmp_eq!(Mat2x3, [c0, c1]);
impl_mat_cmp_eq!(Mat2x4, [c0, c1]);
impl_mat_cmp_eq!(Mat3x2, [c0, c1, c2]);
impl_mat_cmp_eq!(Mat3x3, [c0, c1, c2]);
impl_mat_cmp_eq!(Mat3x4, [c0, c1, c2]);
impl_mat_cmp_eq!(Mat4x2, [c0, c1, c2, c3]);
impl_mat_cmp_eq!(Mat4x3, [c0, c1, c2, c3]);
impl_mat_cmp_eq!(Mat4x4, [c0, c1, c2, c3]);

/// Implements the ordering comparisons for one numeric scalar over all
/// nine shapes, delegating to the vector `cmp_*` family.
macro_rules! impl_mat_cmp_ord {
    ($scalar:ty => $(($mat:ident, [$($c:ident),+])),+) => {
        $(
            impl $mat<$scalar> {
                /// Element-wise `<`, producing a `bool` matrix.
                pub fn cmp_lt(self, rhs: Self) -> $mat<bool> {
                    $mat {
                        $($c: self.$c.cmp_lt(rhs.$c)),+
                    }
                }

                /// Element-wise `<=`, producing a `bool` matrix.
                pub fn cmp_le(self, rhs: Self) -> $mat<bool> {
                    $mat {
                        $($c: self.$c.cmp_le(rhs.$c)),+
                    }
                }

                /// Element-wise `>`, producing a `bool` matrix.
                pub fn cmp_gt(self, rhs: Self) -> $mat<bool> {
                    $mat {
                        $($c: self.$c.cmp_gt(rhs.$c)),+
                    }
                }

                /// Element-wise `>=`, producing a `bool` matrix.
                pub fn cmp_ge(self, rhs: Self) -> $mat<bool> {
                    $mat {
                        $($c: self.$c.cmp_ge(rhs.$c)),+
                    }
                }
            }
        )+
    };
}

macro_rules! impl_mat_cmp_ord_all_shapes {
    ($scalar:ty) => {
        impl_mat_cmp_ord!(
            $scalar =>
            (Mat2x2, [c0, c1]),
            (Mat2x3, [c0, c1]),
            (Mat2x4, [c0, c1]),
            (Mat3x2, [c0, c1, c2]),
            (Mat3x3, [c0, c1, c2]),
            (Mat3x4, [c0, c1, c2]),
            (Mat4x2, [c0, c1, c2, c3]),
            (Mat4x3, [c0, c1, c2, c3]),
            (Mat4x4, [c0, c1, c2, c3])
        );
    };
}

impl_mat_cmp_ord_all_shapes!(f32);
impl_mat_cmp_ord_all_shapes!(f64);
impl_mat_cmp_ord_all_shapes!(i32);
impl_mat_cmp_ord_all_shapes!(u32);

// Widening scalar-type conversions (`From`), column-wise, mirroring the
// vector rules.

macro_rules! impl_mat_widen {
    ($from:ty => $to:ty, $(($mat:ident, [$($c:ident),+])),+) => {
        $(
            impl From<$mat<$from>> for $mat<$to> {
                fn from(m: $mat<$from>) -> Self {
                    $mat {
                        $($c: m.$c.into()),+
                    }
                }
            }
        )+
    };
}

macro_rules! impl_mat_widen_all_shapes {
    ($from:ty => $to:ty) => {
        impl_mat_widen!(
            $from => $to,
            (Mat2x2, [c0, c1]),
            (Mat2x3, [c0, c1]),
            (Mat2x4, [c0, c1]),
            (Mat3x2, [c0, c1, c2]),
            (Mat3x3, [c0, c1, c2]),
            (Mat3x4, [c0, c1, c2]),
            (Mat4x2, [c0, c1, c2, c3]),
            (Mat4x3, [c0, c1, c2, c3]),
            (Mat4x4, [c0, c1, c2, c3])
        );
    };
}

impl_mat_widen_all_shapes!(i32 => f32);
impl_mat_widen_all_shapes!(i32 => f64);
impl_mat_widen_all_shapes!(u32 => f32);
impl_mat_widen_all_shapes!(u32 => f64);
impl_mat_widen_all_shapes!(f32 => f64);

/// Implements the explicit (narrowing) casts for one source scalar over
/// all nine shapes, delegating to the vector `as_*` methods.
macro_rules! impl_mat_casts {
    ($from:ty => $(($method:ident, $to:ty)),+ ; $mat:ident, $cols:tt) => {
        $(
            impl_mat_casts!(@one $from, $method, $to, $mat, $cols);
        )+
    };
    (@one $from:ty, $method:ident, $to:ty, $mat:ident, [$($c:ident),+]) => {
        impl $mat<$from> {
            #[doc = concat!("Component-wise cast to `", stringify!($to), "`.")]
            pub fn $method(self) -> $mat<$to> {
                $mat {
                    $($c: self.$c.$method()),+
                }
            }
        }
    };
}

macro_rules! impl_mat_casts_all_shapes {
    ($from:ty => $(($method:ident, $to:ty)),+) => {
        impl_mat_casts!($from => $(($method, $to)),+ ; Mat2x2, [c0, c1]);
        impl_mat_casts!($from => $(($method, $to)),+ ; Mat2x3, [c0, c1]);
        impl_mat_casts!($from => $(($method, $to)),+ ; Mat2x4, [c0, c1]);
        impl_mat_casts!($from => $(($method, $to)),+ ; Mat3x2, [c0, c1, c2]);
        impl_mat_casts!($from => $(($method, $to)),+ ; Mat3x3, [c0, c1, c2]);
        impl_mat_casts!($from => $(($method, $to)),+ ; Mat3x4, [c0, c1, c2]);
        impl_mat_casts!($from => $(($method, $to)),+ ; Mat4x2, [c0, c1, c2, c3]);
        impl_mat_casts!($from => $(($method, $to)),+ ; Mat4x3, [c0, c1, c2, c3]);
        impl_mat_casts!($from => $(($method, $to)),+ ; Mat4x4, [c0, c1, c2, c3]);
    };
}

impl_mat_casts_all_shapes!(f32 => (as_i32, i32), (as_u32, u32));
impl_mat_casts_all_shapes!(f64 => (as_f32, f32), (as_i32, i32), (as_u32, u32));
impl_mat_casts_all_shapes!(i32 => (as_u32, u32));
impl_mat_casts_all_shapes!(u32 => (as_i32, i32));
impl_mat_casts_all_shapes!(bool => (as_f32, f32), (as_f64, f64), (as_i32, i32), (as_u32, u32));

// ZERO for every numeric shape, IDENTITY for the square ones.

macro_rules! impl_mat_consts {
    ($scalar:ty, $zero:expr, $one:expr) => {
        impl Mat2x2<$scalar> {
            /// All components zero.
            pub const ZERO: Self = Self::splat($zero);
            /// The multiplicative identity under [`mul`].
            pub const IDENTITY: Self = Self::new($one, $zero, $zero, $one);
        }
        impl Mat2x3<$scalar> {
            /// All components zero.
            pub const ZERO: Self = Self::splat($zero);
        }
        impl Mat2x4<$scalar> {
            /// All components zero.
            pub const ZERO: Self = Self::splat($zero);
        }
        impl Mat3x2<$scalar> {
            /// All components zero.
            pub const ZERO: Self = Self::splat($zero);
        }
        impl Mat3x3<$scalar> {
            /// All components zero.
            pub const ZERO: Self = Self::splat($zero);
            /// The multiplicative identity under [`mul`].
            pub const IDENTITY: Self = Self::new(
                $one, $zero, $zero, $zero, $one, $zero, $zero, $zero, $one,
            );
        }
        impl Mat3x4<$scalar> {
            /// All components zero.
            pub const ZERO: Self = Self::splat($zero);
        }
        impl Mat4x2<$scalar> {
            /// All components zero.
            pub const ZERO: Self = Self::splat($zero);
        }
        impl Mat4x3<$scalar> {
            /// All components zero.
            pub const ZERO: Self = Self::splat($zero);
        }
        impl Mat4x4<$scalar> {
            /// All components zero.
            pub const ZERO: Self = Self::splat($zero);
            /// The multiplicative identity under [`mul`].
            pub const IDENTITY: Self = Self::new(
                $one, $zero, $zero, $zero, $zero, $one, $zero, $zero, $zero,
                $zero, $one, $zero, $zero, $zero, $zero, $one,
            );
        }
    };
}

impl_mat_consts!(f32, 0.0, 1.0);
impl_mat_consts!(f64, 0.0, 1.0);
impl_mat_consts!(i32, 0, 1);
impl_mat_consts!(u32, 0, 1);

// From/Into conversions for glam's square matrix types.

macro_rules! impl_from_mat {
    ($glam_ty:ty, $mat:ident<$scalar:ty>, [$($c:ident: $axis:ident),+]) => {
        impl From<$glam_ty> for $mat<$scalar> {
            fn from(m: $glam_ty) -> Self {
                $mat {
                    $($c: m.$axis.into()),+
                }
            }
        }

        impl From<$mat<$scalar>> for $glam_ty {
            fn from(m: $mat<$scalar>) -> Self {
                <$glam_ty>::from_cols($(m.$c.into()),+)
            }
        }
    };
}

impl_from_mat!(glam::Mat2, Mat2x2<f32>, [c0: x_axis, c1: y_axis]);
impl_from_mat!(glam::Mat3, Mat3x3<f32>, [c0: x_axis, c1: y_axis, c2: z_axis]);
impl_from_mat!(
    glam::Mat4,
    Mat4x4<f32>,
    [c0: x_axis, c1: y_axis, c2: z_axis, c3: w_axis]
);
impl_from_mat!(glam::DMat2, Mat2x2<f64>, [c0: x_axis, c1: y_axis]);
impl_from_mat!(glam::DMat3, Mat3x3<f64>, [c0: x_axis, c1: y_axis, c2: z_axis]);
impl_from_mat!(
    glam::DMat4,
    Mat4x4<f64>,
    [c0: x_axis, c1: y_axis, c2: z_axis, c3: w_axis]
);

/// Provides the intrinsic function `transpose`.
pub trait IntrinsicTranspose {
    /// The transposed matrix type (columns and rows swapped).
    type Output;

    /// Returns the transpose of the matrix.
    fn transpose(self) -> Self::Output;
}

/// Returns the transpose of a matrix.
///
/// For a `MatCxR` input, returns a `MatRxC` output.
pub fn transpose<T: IntrinsicTranspose>(e: T) -> T::Output {
    <T as IntrinsicTranspose>::transpose(e)
}

impl<T: Copy> IntrinsicTranspose for Mat2x2<T> {
    type Output = Mat2x2<T>;

    fn transpose(self) -> Mat2x2<T> {
        Mat2x2 {
            c0: Vec2::vec2(self.c0.x, self.c1.x),
            c1: Vec2::vec2(self.c0.y, self.c1.y),
        }
    }
}

impl<T: Copy> IntrinsicTranspose for Mat2x3<T> {
    type Output = Mat3x2<T>;

    fn transpose(self) -> Mat3x2<T> {
        // 2 columns of Vec3 transpose to 3 columns of Vec2.
        Mat3x2 {
            c0: Vec2::vec2(self.c0.x, self.c1.x),
            c1: Vec2::vec2(self.c0.y, self.c1.y),
            c2: Vec2::vec2(self.c0.z, self.c1.z),
        }
    }
}

impl<T: Copy> IntrinsicTranspose for Mat2x4<T> {
    type Output = Mat4x2<T>;

    fn transpose(self) -> Mat4x2<T> {
        Mat4x2 {
            c0: Vec2::vec2(self.c0.x, self.c1.x),
            c1: Vec2::vec2(self.c0.y, self.c1.y),
            c2: Vec2::vec2(self.c0.z, self.c1.z),
            c3: Vec2::vec2(self.c0.w, self.c1.w),
        }
    }
}

impl<T: Copy> IntrinsicTranspose for Mat3x2<T> {
    type Output = Mat2x3<T>;

    fn transpose(self) -> Mat2x3<T> {
        Mat2x3 {
            c0: Vec3::vec3(self.c0.x, self.c1.x, self.c2.x),
            c1: Vec3::vec3(self.c0.y, self.c1.y, self.c2.y),
        }
    }
}

impl<T: Copy> IntrinsicTranspose for Mat3x3<T> {
    type Output = Mat3x3<T>;

    fn transpose(self) -> Mat3x3<T> {
        Mat3x3 {
            c0: Vec3::vec3(self.c0.x, self.c1.x, self.c2.x),
            c1: Vec3::vec3(self.c0.y, self.c1.y, self.c2.y),
            c2: Vec3::vec3(self.c0.z, self.c1.z, self.c2.z),
        }
    }
}

impl<T: Copy> IntrinsicTranspose for Mat3x4<T> {
    type Output = Mat4x3<T>;

    fn transpose(self) -> Mat4x3<T> {
        Mat4x3 {
            c0: Vec3::vec3(self.c0.x, self.c1.x, self.c2.x),
            c1: Vec3::vec3(self.c0.y, self.c1.y, self.c2.y),
            c2: Vec3::vec3(self.c0.z, self.c1.z, self.c2.z),
            c3: Vec3::vec3(self.c0.w, self.c1.w, self.c2.w),
        }
    }
}

impl<T: Copy> IntrinsicTranspose for Mat4x2<T> {
    type Output = Mat2x4<T>;

    fn transpose(self) -> Mat2x4<T> {
        Mat2x4 {
            c0: Vec4::vec4(self.c0.x, self.c1.x, self.c2.x, self.c3.x),
            c1: Vec4::vec4(self.c0.y, self.c1.y, self.c2.y, self.c3.y),
        }
    }
}

impl<T: Copy> IntrinsicTranspose for Mat4x3<T> {
    type Output = Mat3x4<T>;

    fn transpose(self) -> Mat3x4<T> {
        Mat3x4 {
            c0: Vec4::vec4(self.c0.x, self.c1.x, self.c2.x, self.c3.x),
            c1: Vec4::vec4(self.c0.y, self.c1.y, self.c2.y, self.c3.y),
            c2: Vec4::vec4(self.c0.z, self.c1.z, self.c2.z, self.c3.z),
        }
    }
}

impl<T: Copy> IntrinsicTranspose for Mat4x4<T> {
    type Output = Mat4x4<T>;

    fn transpose(self) -> Mat4x4<T> {
        Mat4x4 {
            c0: Vec4::vec4(self.c0.x, self.c1.x, self.c2.x, self.c3.x),
            c1: Vec4::vec4(self.c0.y, self.c1.y, self.c2.y, self.c3.y),
            c2: Vec4::vec4(self.c0.z, self.c1.z, self.c2.z, self.c3.z),
            c3: Vec4::vec4(self.c0.w, self.c1.w, self.c2.w, self.c3.w),
        }
    }
}

/// Provides the intrinsic function `determinant`.
pub trait IntrinsicDeterminant {
    /// The scalar type of the matrix elements.
    type Scalar;

    /// Returns the determinant of a square matrix.
    fn determinant(self) -> Self::Scalar;
}

/// Returns the determinant of a square matrix.
///
/// Only defined for square float/double matrices.
pub fn determinant<T: IntrinsicDeterminant>(e: T) -> T::Scalar {
    <T as IntrinsicDeterminant>::determinant(e)
}

macro_rules! impl_determinant {
    ($scalar:ty) => {
        impl IntrinsicDeterminant for Mat2x2<$scalar> {
            type Scalar = $scalar;

            fn determinant(self) -> $scalar {
                self.c0.x * self.c1.y - self.c1.x * self.c0.y
            }
        }

        impl IntrinsicDeterminant for Mat3x3<$scalar> {
            type Scalar = $scalar;

            fn determinant(self) -> $scalar {
                let (u, v, w) = (self.c0, self.c1, self.c2);
                u.x * (v.y * w.z - w.y * v.z) - v.x * (u.y * w.z - w.y * u.z)
                    + w.x * (u.y * v.z - v.y * u.z)
            }
        }

        impl IntrinsicDeterminant for Mat4x4<$scalar> {
            type Scalar = $scalar;

            fn determinant(self) -> $scalar {
                // Laplace expansion along column 0 with 3x3 minors.
                fn det3(
                    a: $scalar,
                    b: $scalar,
                    c: $scalar,
                    d: $scalar,
                    e: $scalar,
                    f: $scalar,
                    g: $scalar,
                    h: $scalar,
                    i: $scalar,
                ) -> $scalar {
                    a * (e * i - f * h) - b * (d * i - f * g) + c * (d * h - e * g)
                }

                let (c0, c1, c2, c3) = (self.c0, self.c1, self.c2, self.c3);
                let m00 = det3(
                    c1.y, c2.y, c3.y, c1.z, c2.z, c3.z, c1.w, c2.w, c3.w,
                );
                let m10 = det3(
                    c1.x, c2.x, c3.x, c1.z, c2.z, c3.z, c1.w, c2.w, c3.w,
                );
                let m20 = det3(
                    c1.x, c2.x, c3.x, c1.y, c2.y, c3.y, c1.w, c2.w, c3.w,
                );
                let m30 = det3(
                    c1.x, c2.x, c3.x, c1.y, c2.y, c3.y, c1.z, c2.z, c3.z,
                );
                c0.x * m00 - c0.y * m10 + c0.z * m20 - c0.w * m30
            }
        }
    };
}

impl_determinant!(f32);
impl_determinant!(f64);

/// Provides the intrinsic function `mul`: the linear-algebra product, as
/// opposed to the component-wise `*` operator.
pub trait IntrinsicMul<Rhs> {
    /// The product type.
    type Output;

    /// Returns the linear-algebra product of `self` and `rhs`.
    fn mul(self, rhs: Rhs) -> Self::Output;
}

/// The linear-algebra product: matrix × matrix or matrix × column vector.
///
/// Not to be confused with the `*` operator, which is component-wise for
/// both vectors and matrices.
pub fn mul<A: IntrinsicMul<B>, B>(a: A, b: B) -> A::Output {
    <A as IntrinsicMul<B>>::mul(a, b)
}

macro_rules! impl_mul {
    ($scalar:ty) => {
        impl IntrinsicMul<Vec2<$scalar>> for Mat2x2<$scalar> {
            type Output = Vec2<$scalar>;

            fn mul(self, rhs: Vec2<$scalar>) -> Vec2<$scalar> {
                self.c0 * rhs.x + self.c1 * rhs.y
            }
        }

        impl IntrinsicMul<Mat2x2<$scalar>> for Mat2x2<$scalar> {
            type Output = Mat2x2<$scalar>;

            fn mul(self, rhs: Mat2x2<$scalar>) -> Mat2x2<$scalar> {
                Mat2x2 {
                    c0: mul(self, rhs.c0),
                    c1: mul(self, rhs.c1),
                }
            }
        }

        impl IntrinsicMul<Vec3<$scalar>> for Mat3x3<$scalar> {
            type Output = Vec3<$scalar>;

            fn mul(self, rhs: Vec3<$scalar>) -> Vec3<$scalar> {
                self.c0 * rhs.x + self.c1 * rhs.y + self.c2 * rhs.z
            }
        }

        impl IntrinsicMul<Mat3x3<$scalar>> for Mat3x3<$scalar> {
            type Output = Mat3x3<$scalar>;

            fn mul(self, rhs: Mat3x3<$scalar>) -> Mat3x3<$scalar> {
                Mat3x3 {
                    c0: mul(self, rhs.c0),
                    c1: mul(self, rhs.c1),
                    c2: mul(self, rhs.c2),
                }
            }
        }

        impl IntrinsicMul<Vec4<$scalar>> for Mat4x4<$scalar> {
            type Output = Vec4<$scalar>;

            fn mul(self, rhs: Vec4<$scalar>) -> Vec4<$scalar> {
                self.c0 * rhs.x + self.c1 * rhs.y + self.c2 * rhs.z + self.c3 * rhs.w
            }
        }

        impl IntrinsicMul<Mat4x4<$scalar>> for Mat4x4<$scalar> {
            type Output = Mat4x4<$scalar>;

            fn mul(self, rhs: Mat4x4<$scalar>) -> Mat4x4<$scalar> {
                Mat4x4 {
                    c0: mul(self, rhs.c0),
                    c1: mul(self, rhs.c1),
                    c2: mul(self, rhs.c2),
                    c3: mul(self, rhs.c3),
                }
            }
        }
    };
}

impl_mul!(f32);
impl_mul!(f64);

#[cfg(test)]
mod test {
    use super::*;
    use crate::vector::*;

    #[test]
    fn sanity_constructors() {
        let m = mat2x2f(vec2f(1.0, 2.0), vec2f(3.0, 4.0));
        assert_eq!(m.c0, vec2f(1.0, 2.0));
        assert_eq!(m.c1, vec2f(3.0, 4.0));
        assert_eq!(Mat2x2f::from_cols(vec2f(1.0, 2.0), vec2f(3.0, 4.0)), m);
        assert_eq!(Mat2x3f::splat(7.0).c1, vec3f(7.0, 7.0, 7.0));
    }

    #[test]
    fn new_is_row_major_reading_order() {
        // Arguments read row by row, storage is column-major.
        let m = Mat2x2i::new(1, 2, 3, 4);
        assert_eq!(m.c0, vec2i(1, 3));
        assert_eq!(m.c1, vec2i(2, 4));

        let m = Mat3x3f::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        assert_eq!(m.c0, vec3f(1.0, 4.0, 7.0));
        assert_eq!(m.c1, vec3f(2.0, 5.0, 8.0));
        assert_eq!(m.c2, vec3f(3.0, 6.0, 9.0));

        // Non-square: 2 columns of Vec3.
        let m = Mat2x3i::new(1, 2, 3, 4, 5, 6);
        assert_eq!(m.c0, vec3i(1, 3, 5));
        assert_eq!(m.c1, vec3i(2, 4, 6));
    }

    #[test]
    fn sanity_index() {
        let m = mat3x3f(
            vec3f(1.0, 2.0, 3.0),
            vec3f(4.0, 5.0, 6.0),
            vec3f(7.0, 8.0, 9.0),
        );
        assert_eq!(m[0], m.c0);
        assert_eq!(m[1], m.c1);
        assert_eq!(m[2], m.c2);
        assert_eq!(m[2u32], m.c2);

        let mut w = m;
        w[1] = vec3f(0.0, 0.0, 0.0);
        assert_eq!(w.c1, Vec3f::ZERO);
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn index_out_of_range_mat2x2() {
        let m = Mat2x2f::IDENTITY;
        let _ = m[2];
    }

    #[test]
    #[should_panic(expected = "index out of bounds")]
    fn index_out_of_range_mat4x4() {
        let m = Mat4x4f::IDENTITY;
        let _ = m[4];
    }

    #[test]
    fn mat_mul_operator_is_hadamard() {
        // The `*` operator multiplies corresponding columns component-wise,
        // never as the linear-algebra product.
        let a = Mat2x2f::new(1.0, 0.0, 0.0, 1.0);
        let b = Mat2x2f::new(2.0, 3.0, 4.0, 5.0);
        let h = a * b;
        assert_eq!(h.c0, a.c0 * b.c0);
        assert_eq!(h.c1, a.c1 * b.c1);
        assert_eq!(h, Mat2x2f::new(2.0, 0.0, 0.0, 5.0));

        // The linear-algebra product of the same operands is b itself.
        assert_eq!(mul(a, b), b);
    }

    #[test]
    fn sanity_componentwise_ops() {
        let a = Mat2x2i::new(1, 2, 3, 4);
        let b = Mat2x2i::new(10, 20, 30, 40);
        assert_eq!(a + b, Mat2x2i::new(11, 22, 33, 44));
        assert_eq!(b - a, Mat2x2i::new(9, 18, 27, 36));
        assert_eq!(a * 2, Mat2x2i::new(2, 4, 6, 8));
        assert_eq!(2 * a, Mat2x2i::new(2, 4, 6, 8));
        assert_eq!(b / a, Mat2x2i::new(10, 10, 10, 10));
        assert_eq!(-a, Mat2x2i::new(-1, -2, -3, -4));
    }

    #[test]
    fn sanity_cmp() {
        let a = Mat2x2i::new(1, 2, 3, 4);
        let b = Mat2x2i::new(1, 0, 5, 4);
        let eq = a.cmp_eq(b);
        assert_eq!(eq.c0, vec2b(true, false));
        assert_eq!(eq.c1, vec2b(false, true));
        let lt = a.cmp_lt(b);
        assert_eq!(lt.c0, vec2b(false, true));
        assert_eq!(lt.c1, vec2b(false, false));
    }

    #[test]
    fn sanity_conversions() {
        let m: Mat2x2f = Mat2x2i::new(1, 2, 3, 4).into();
        assert_eq!(m, Mat2x2f::new(1.0, 2.0, 3.0, 4.0));

        let b = Mat2x2b::new(true, false, false, true);
        assert_eq!(b.as_i32(), Mat2x2i::new(1, 0, 0, 1));
        assert_eq!(b.as_f32(), Mat2x2f::new(1.0, 0.0, 0.0, 1.0));

        let d = Mat3x3d::new(1.5, 0.0, 0.0, 0.0, 2.5, 0.0, 0.0, 0.0, 3.5);
        assert_eq!(
            d.as_f32(),
            Mat3x3f::new(1.5, 0.0, 0.0, 0.0, 2.5, 0.0, 0.0, 0.0, 3.5)
        );
    }

    #[test]
    fn sanity_truncating_conversions() {
        let m = Mat4x4f::new(
            1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0, 10.0, 11.0, 12.0,
            13.0, 14.0, 15.0, 16.0,
        );
        let t = Mat3x3f::from_mat4(m);
        assert_eq!(t, Mat3x3f::new(1.0, 2.0, 3.0, 5.0, 6.0, 7.0, 9.0, 10.0, 11.0));
        assert_eq!(
            Mat2x2f::from_mat3(t),
            Mat2x2f::new(1.0, 2.0, 5.0, 6.0)
        );
    }

    #[test]
    fn sanity_glam_interop() {
        let m: Mat3x3f = glam::Mat3::IDENTITY.into();
        assert_eq!(m, Mat3x3f::IDENTITY);
        let g: glam::Mat3 = m.into();
        assert_eq!(g, glam::Mat3::IDENTITY);
    }

    #[test]
    fn sanity_transpose() {
        let m = mat2x3f(vec3f(1.0, 2.0, 3.0), vec3f(4.0, 5.0, 6.0));
        let t = transpose(m);
        assert_eq!(t.c0, vec2f(1.0, 4.0));
        assert_eq!(t.c1, vec2f(2.0, 5.0));
        assert_eq!(t.c2, vec2f(3.0, 6.0));

        let roundtrip = transpose(transpose(m));
        assert_eq!(roundtrip, m);

        let s = Mat3x3f::new(1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0);
        let st = transpose(s);
        assert_eq!(st.c0, vec3f(1.0, 2.0, 3.0));
    }

    #[test]
    fn sanity_determinant() {
        assert_eq!(determinant(Mat2x2f::IDENTITY), 1.0);
        assert_eq!(determinant(Mat2x2f::new(2.0, 1.0, 1.0, 3.0)), 5.0);
        assert_eq!(determinant(Mat3x3f::IDENTITY), 1.0);
        assert_eq!(determinant(Mat4x4f::IDENTITY), 1.0);
        assert_eq!(determinant(Mat4x4d::IDENTITY), 1.0);

        // Singular matrix.
        let singular = Mat3x3f::new(1.0, 2.0, 3.0, 2.0, 4.0, 6.0, 1.0, 0.0, 1.0);
        assert_eq!(determinant(singular), 0.0);
    }

    #[test]
    fn sanity_mul() {
        let id = Mat3x3f::IDENTITY;
        let v = vec3f(1.0, 2.0, 3.0);
        assert_eq!(mul(id, v), v);

        // Column-major composition: mul(A, B) applied to v equals
        // A applied to (B applied to v).
        let a = Mat2x2f::new(0.0, -1.0, 1.0, 0.0);
        let b = Mat2x2f::new(2.0, 0.0, 0.0, 3.0);
        let v2 = vec2f(1.0, 1.0);
        assert_eq!(mul(mul(a, b), v2), mul(a, mul(b, v2)));
    }

    #[test]
    fn display_forms() {
        assert_eq!(
            Mat2x2f::IDENTITY.to_string(),
            "Mat2x2f((1f, 0f), (0f, 1f))"
        );
        assert_eq!(
            Mat2x2i::new(1, 2, 3, 4).to_string(),
            "Mat2x2i((1, 3), (2, 4))"
        );
        assert_eq!(
            Mat2x2b::new(true, false, false, true).to_string(),
            "Mat2x2b((true, false), (false, true))"
        );
    }
}
