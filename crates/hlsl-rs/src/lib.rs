//! HLSL's value types, in Rust.
//!
//! Vectors (`Vec2f`, `Vec3i`, `Vec4b`, ...), column-major matrices
//! (`Mat2x2f` through `Mat4x4d`), [`Quat`] and [`Half`], with the
//! component-wise operator semantics of the shading-language originals:
//! `*` multiplies element-wise even for matrices, comparisons are
//! element-wise through the `cmp_*` family, and the linear-algebra
//! product is the separate [`mul`] function.
//!
//! Everything is a plain `Copy` value; operations are pure functions of
//! their inputs. Rotation and projection constructors live on the square
//! float/double matrices and on [`Quat`].
//!
//! ```
//! use hlsl_rs::*;
//!
//! let v = vec3f(1.0, 2.0, 3.0);
//! assert_eq!(v.zyx(), vec3f(3.0, 2.0, 1.0));
//!
//! let m = Mat4x4f::translate(vec3f(1.0, 2.0, 3.0));
//! assert_eq!(mul(m, vec4f(0.0, 0.0, 0.0, 1.0)), vec4f(1.0, 2.0, 3.0, 1.0));
//!
//! // `*` is the Hadamard product; `mul` is the matrix product.
//! let id = Mat2x2f::IDENTITY;
//! let b = Mat2x2f::new(2.0, 3.0, 4.0, 5.0);
//! assert_eq!(id * b, Mat2x2f::new(2.0, 0.0, 0.0, 5.0));
//! assert_eq!(mul(id, b), b);
//! ```

pub mod bitcast;
pub mod half;
pub mod hash;
pub mod intrinsics;
pub mod matrix;
pub mod quaternion;
pub mod transform;
pub mod vector;

pub use bitcast::*;
pub use hash::*;
pub use intrinsics::bit_manipulation::*;
pub use intrinsics::*;
pub use matrix::*;
pub use quaternion::*;
pub use self::half::*;
pub use transform::*;
pub use vector::*;
