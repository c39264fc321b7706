//! Quaternion implementation.
//!
//! A 4-component `f32` rotation in the Hamilton convention, stored as
//! `(x, y, z, w)` with `identity = (0, 0, 0, 1)`. The type itself does
//! not guarantee unit length; the matrix conversions normalize their
//! result, direct construction does not.
//!
//! No arithmetic operators are defined here; the surface is rotation
//! construction and matrix conversion.

use crate::bitcast::{asfloat, asint, asuint};
use crate::intrinsics::*;
use crate::matrix::{Mat3x3, Mat4x4};
use crate::transform::RotationOrder;
use crate::vector::{Vec4, Vec3f, Vec4f, Vec4u, vec4f, vec4u};

/// A rotation, stored as the four components of a unit-length
/// quaternion.
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

/// Constructor for a quaternion from its four components.
///
/// The result is not normalized.
pub const fn quat(x: f32, y: f32, z: f32, w: f32) -> Quat {
    Quat { x, y, z, w }
}

impl Default for Quat {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Quat {
    /// The identity rotation.
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Construct from four components. The result is not normalized.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Construct from a 4-component vector. The result is not
    /// normalized.
    pub const fn from_vec4(v: Vec4f) -> Self {
        Self {
            x: v.x,
            y: v.y,
            z: v.z,
            w: v.w,
        }
    }

    /// The components as a 4-component vector.
    pub const fn to_vec4(self) -> Vec4f {
        Vec4 {
            x: self.x,
            y: self.y,
            z: self.z,
            w: self.w,
        }
    }

    /// A rotation of `angle` radians around the unit vector `axis`.
    ///
    /// `axis` is assumed normalized.
    pub fn axis_angle(axis: Vec3f, angle: f32) -> Self {
        let (s, c) = sincos(0.5 * angle);
        Self::from_vec4((axis * s).extend(c))
    }

    /// A rotation around the x-axis by `angle` radians.
    pub fn rotate_x(angle: f32) -> Self {
        let (s, c) = sincos(0.5 * angle);
        Self::new(s, 0.0, 0.0, c)
    }

    /// A rotation around the y-axis by `angle` radians.
    pub fn rotate_y(angle: f32) -> Self {
        let (s, c) = sincos(0.5 * angle);
        Self::new(0.0, s, 0.0, c)
    }

    /// A rotation around the z-axis by `angle` radians.
    pub fn rotate_z(angle: f32) -> Self {
        let (s, c) = sincos(0.5 * angle);
        Self::new(0.0, 0.0, s, c)
    }

    /// The rotation composed by rotating around x, then y, then z.
    pub fn euler_xyz(xyz: Vec3f) -> Self {
        let (s, c) = sincos(0.5 * xyz);
        Self::new(
            s.x * c.y * c.z - s.y * s.z * c.x,
            s.y * c.x * c.z + s.x * s.z * c.y,
            s.z * c.x * c.y - s.x * s.y * c.z,
            c.x * c.y * c.z + s.y * s.z * s.x,
        )
    }

    /// The rotation composed by rotating around x, then z, then y.
    pub fn euler_xzy(xyz: Vec3f) -> Self {
        let (s, c) = sincos(0.5 * xyz);
        Self::new(
            s.x * c.y * c.z + s.y * s.z * c.x,
            s.y * c.x * c.z + s.x * s.z * c.y,
            s.z * c.x * c.y - s.x * s.y * c.z,
            c.x * c.y * c.z - s.y * s.z * s.x,
        )
    }

    /// The rotation composed by rotating around y, then x, then z.
    pub fn euler_yxz(xyz: Vec3f) -> Self {
        let (s, c) = sincos(0.5 * xyz);
        Self::new(
            s.x * c.y * c.z - s.y * s.z * c.x,
            s.y * c.x * c.z + s.x * s.z * c.y,
            s.z * c.x * c.y + s.x * s.y * c.z,
            c.x * c.y * c.z - s.y * s.z * s.x,
        )
    }

    /// The rotation composed by rotating around y, then z, then x.
    pub fn euler_yzx(xyz: Vec3f) -> Self {
        let (s, c) = sincos(0.5 * xyz);
        Self::new(
            s.x * c.y * c.z - s.y * s.z * c.x,
            s.y * c.x * c.z - s.x * s.z * c.y,
            s.z * c.x * c.y + s.x * s.y * c.z,
            c.x * c.y * c.z + s.y * s.z * s.x,
        )
    }

    /// The rotation composed by rotating around z, then x, then y.
    pub fn euler_zxy(xyz: Vec3f) -> Self {
        let (s, c) = sincos(0.5 * xyz);
        Self::new(
            s.x * c.y * c.z + s.y * s.z * c.x,
            s.y * c.x * c.z - s.x * s.z * c.y,
            s.z * c.x * c.y - s.x * s.y * c.z,
            c.x * c.y * c.z + s.y * s.z * s.x,
        )
    }

    /// The rotation composed by rotating around z, then y, then x.
    pub fn euler_zyx(xyz: Vec3f) -> Self {
        let (s, c) = sincos(0.5 * xyz);
        Self::new(
            s.x * c.y * c.z + s.y * s.z * c.x,
            s.y * c.x * c.z - s.x * s.z * c.y,
            s.z * c.x * c.y + s.x * s.y * c.z,
            c.x * c.y * c.z - s.y * s.z * s.x,
        )
    }

    /// The Euler rotation for `order`.
    pub fn euler(xyz: Vec3f, order: RotationOrder) -> Self {
        match order {
            RotationOrder::Xyz => Self::euler_xyz(xyz),
            RotationOrder::Xzy => Self::euler_xzy(xyz),
            RotationOrder::Yxz => Self::euler_yxz(xyz),
            RotationOrder::Yzx => Self::euler_yzx(xyz),
            RotationOrder::Zxy => Self::euler_zxy(xyz),
            RotationOrder::Zyx => Self::euler_zyx(xyz),
        }
    }

    /// The rotation of a 3x3 rotation matrix.
    ///
    /// Branchless largest-diagonal extraction: the signs of `c0.x` and of
    /// the derived scalar `t = c1.y ± c2.z` pick which of the four
    /// candidate component sets survives, via sign-bit masks instead of
    /// branches. The result is always normalized.
    pub fn from_mat3(m: Mat3x3<f32>) -> Self {
        let u = m.c0;
        let v = m.c1;
        let w = m.c2;

        let u_sign = asuint(u.x) & 0x80000000;
        let t = v.y + asfloat(asuint(w.z) ^ u_sign);
        let u_mask = Vec4u::splat(((u_sign as i32) >> 31) as u32);
        let t_mask = Vec4u::splat((asint(t) >> 31) as u32);

        let tr = 1.0 + abs(u.x);

        let sign_flips = vec4u(0x00000000, 0x80000000, 0x80000000, 0x80000000)
            ^ (u_mask & vec4u(0x00000000, 0x80000000, 0x00000000, 0x80000000))
            ^ (t_mask & vec4u(0x80000000, 0x80000000, 0x80000000, 0x00000000));

        // +---, +++-, ++-+ or ++-- depending on the masks.
        let value = vec4f(tr, u.y, w.x, v.z)
            + asfloat(asuint(vec4f(t, v.x, u.z, w.y)) ^ sign_flips);

        let bits = (asuint(value) & !u_mask) | (asuint(value.zwxy()) & u_mask);
        let value: Vec4f = asfloat(bits);
        let bits = (asuint(value.wzyx()) & !t_mask) | (asuint(value) & t_mask);
        let value: Vec4f = asfloat(bits);

        Self::from_vec4(normalize(value))
    }

    /// The rotation of the upper-left 3x3 of a 4x4 matrix.
    pub fn from_mat4(m: Mat4x4<f32>) -> Self {
        Self::from_mat3(Mat3x3::from_mat4(m))
    }

    /// The rotation with the given forward and up directions.
    ///
    /// The inputs are assumed non-zero and non-parallel; see
    /// [`Quat::look_rotation_safe`] for the guarded variant.
    pub fn look_rotation(forward: Vec3f, up: Vec3f) -> Self {
        let t = normalize(cross(up, forward));
        Self::from_mat3(Mat3x3::from_cols(t, cross(forward, t), forward))
    }

    /// Like [`Quat::look_rotation`] but returns the identity on
    /// degenerate input.
    ///
    /// The fallback triggers when any of the three squared lengths leaves
    /// (1e-35, 1e35) or is not finite.
    pub fn look_rotation_safe(forward: Vec3f, up: Vec3f) -> Self {
        let forward_length_sq = dot(forward, forward);
        let up_length_sq = dot(up, up);

        let forward = forward * rsqrt(forward_length_sq);
        let up = up * rsqrt(up_length_sq);

        let t = cross(up, forward);
        let t_length_sq = dot(t, t);
        let t = t * rsqrt(t_length_sq);

        let mn = min(min(forward_length_sq, up_length_sq), t_length_sq);
        let mx = max(max(forward_length_sq, up_length_sq), t_length_sq);

        let accept = mn > 1e-35
            && mx < 1e35
            && isfinite(forward_length_sq)
            && isfinite(up_length_sq)
            && isfinite(t_length_sq);

        let rotation = Self::from_mat3(Mat3x3::from_cols(t, cross(forward, t), forward));
        Self::from_vec4(select(
            vec4f(0.0, 0.0, 0.0, 1.0),
            rotation.to_vec4(),
            accept,
        ))
    }
}

impl From<Vec4f> for Quat {
    fn from(v: Vec4f) -> Self {
        Self::from_vec4(v)
    }
}

impl From<Quat> for Vec4f {
    fn from(q: Quat) -> Self {
        q.to_vec4()
    }
}

impl From<glam::Quat> for Quat {
    fn from(q: glam::Quat) -> Self {
        Self::new(q.x, q.y, q.z, q.w)
    }
}

impl From<Quat> for glam::Quat {
    fn from(q: Quat) -> Self {
        glam::Quat::from_xyzw(q.x, q.y, q.z, q.w)
    }
}

impl std::fmt::Display for Quat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Quat({}f, {}f, {}f, {}f)",
            self.x, self.y, self.z, self.w
        )
    }
}

#[cfg(test)]
mod test {
    use crate::*;
    use std::f32::consts::{FRAC_PI_2, PI};

    /// Quaternions double-cover rotations: `q` and `-q` are the same
    /// rotation, so compare up to sign.
    fn assert_same_rotation(a: Quat, b: Quat, eps: f32) {
        let direct = (a.x - b.x).abs().max((a.y - b.y).abs()).max((a.z - b.z).abs())
            .max((a.w - b.w).abs());
        let flipped = (a.x + b.x).abs().max((a.y + b.y).abs()).max((a.z + b.z).abs())
            .max((a.w + b.w).abs());
        assert!(
            direct.min(flipped) < eps,
            "{a} and {b} are not the same rotation"
        );
    }

    #[test]
    fn sanity_identity() {
        assert_eq!(Quat::IDENTITY, quat(0.0, 0.0, 0.0, 1.0));
        assert_eq!(Quat::default(), Quat::IDENTITY);
        let q = Quat::from_mat3(Mat3x3f::IDENTITY);
        assert_same_rotation(q, Quat::IDENTITY, 1e-6);
    }

    #[test]
    fn sanity_axis_angle() {
        let q = Quat::axis_angle(vec3f(0.0, 0.0, 1.0), FRAC_PI_2);
        let h = (FRAC_PI_2 * 0.5).sin();
        assert!((q.z - h).abs() < 1e-6);
        assert!((q.w - (FRAC_PI_2 * 0.5).cos()).abs() < 1e-6);
        assert!(q.x == 0.0 && q.y == 0.0);

        assert_same_rotation(
            Quat::rotate_x(0.7),
            Quat::axis_angle(vec3f(1.0, 0.0, 0.0), 0.7),
            1e-6,
        );
        assert_same_rotation(
            Quat::rotate_y(0.7),
            Quat::axis_angle(vec3f(0.0, 1.0, 0.0), 0.7),
            1e-6,
        );
        assert_same_rotation(
            Quat::rotate_z(0.7),
            Quat::axis_angle(vec3f(0.0, 0.0, 1.0), 0.7),
            1e-6,
        );
    }

    #[test]
    fn quaternion_matrix_roundtrip() {
        // An axis-angle rotation survives the trip through a matrix and
        // back, up to quaternion sign.
        let axes = [
            vec3f(1.0, 0.0, 0.0),
            vec3f(0.0, 1.0, 0.0),
            vec3f(0.0, 0.0, 1.0),
            normalize(vec3f(1.0, 1.0, 0.0)),
            normalize(vec3f(-1.0, 2.0, 3.0)),
            normalize(vec3f(0.3, -0.5, 0.8)),
        ];
        let angles = [0.0, 0.25, FRAC_PI_2, 2.0, PI - 0.01, -1.3];
        for axis in axes {
            for angle in angles {
                let q = Quat::axis_angle(axis, angle);
                let back3 = Quat::from_mat3(Mat3x3f::from_quat(q));
                assert_same_rotation(q, back3, 1e-5);

                let m4 = Mat4x4f::from_quat_translation(q, Vec3f::ZERO);
                let back4 = Quat::from_mat4(m4);
                assert_same_rotation(q, back4, 1e-5);
            }
        }
    }

    #[test]
    fn from_mat3_exercises_every_mask_branch() {
        // Rotations around each axis by large angles push each diagonal
        // term in turn to be the dominant one.
        for angle in [0.1, 1.0, 2.0, 3.0, -2.5] {
            for q in [
                Quat::rotate_x(angle),
                Quat::rotate_y(angle),
                Quat::rotate_z(angle),
                Quat::euler_zxy(vec3f(2.0, -2.0, 3.0)),
            ] {
                let back = Quat::from_mat3(Mat3x3f::from_quat(q));
                assert_same_rotation(q, back, 1e-5);
                let len = length(back.to_vec4());
                assert!((len - 1.0).abs() < 1e-5);
            }
        }
    }

    #[test]
    fn euler_matches_matrix_euler() {
        // The quaternion and matrix Euler constructors describe the same
        // rotation for every order.
        let v = vec3f(0.4, -0.7, 1.1);
        for order in [
            RotationOrder::Xyz,
            RotationOrder::Xzy,
            RotationOrder::Yxz,
            RotationOrder::Yzx,
            RotationOrder::Zxy,
            RotationOrder::Zyx,
        ] {
            let from_euler = Quat::euler(v, order);
            let via_matrix = Quat::from_mat3(Mat3x3f::euler(v, order));
            assert_same_rotation(from_euler, via_matrix, 1e-5);
        }
    }

    #[test]
    fn euler_orders_are_distinct() {
        let v = vec3f(0.3, 0.5, 0.7);
        let a = Quat::euler_xyz(v);
        let b = Quat::euler_zyx(v);
        let diff = (a.x - b.x).abs() + (a.y - b.y).abs() + (a.z - b.z).abs();
        let flipped = (a.x + b.x).abs() + (a.y + b.y).abs() + (a.z + b.z).abs();
        assert!(diff.min(flipped) > 1e-3);
    }

    #[test]
    fn sanity_look_rotation() {
        // Canonical forward/up is the identity rotation.
        let q = Quat::look_rotation(vec3f(0.0, 0.0, 1.0), vec3f(0.0, 1.0, 0.0));
        assert_same_rotation(q, Quat::IDENTITY, 1e-6);

        // Agreement with the matrix construction.
        let f = normalize(vec3f(1.0, 2.0, 3.0));
        let u = vec3f(0.0, 1.0, 0.0);
        assert_same_rotation(
            Quat::look_rotation(f, u),
            Quat::from_mat3(Mat3x3f::look_rotation(f, u)),
            1e-5,
        );
    }

    #[test]
    fn look_rotation_safe_degenerate_returns_identity() {
        let f = vec3f(0.0, 0.0, 1.0);
        assert_eq!(Quat::look_rotation_safe(f, f), Quat::IDENTITY);
        assert_eq!(
            Quat::look_rotation_safe(Vec3f::ZERO, vec3f(0.0, 1.0, 0.0)),
            Quat::IDENTITY
        );
    }

    #[test]
    fn look_rotation_safe_matches_unsafe_when_well_conditioned() {
        let f = vec3f(1.0, 0.0, 0.0);
        let u = vec3f(0.0, 1.0, 0.0);
        assert_same_rotation(
            Quat::look_rotation_safe(f, u),
            Quat::look_rotation(f, u),
            1e-6,
        );
    }

    #[test]
    fn display_form() {
        assert_eq!(Quat::IDENTITY.to_string(), "Quat(0f, 0f, 0f, 1f)");
    }

    #[test]
    fn sanity_glam_interop() {
        let q: Quat = glam::Quat::IDENTITY.into();
        assert_eq!(q, Quat::IDENTITY);
        let g: glam::Quat = Quat::IDENTITY.into();
        assert_eq!(g, glam::Quat::IDENTITY);
    }
}
