//! Rotation, transform and projection constructors for the square float
//! and double matrices.
//!
//! The six `euler_*` constructors are distinct closed-form expansions of
//! the corresponding axis-rotation compositions; they are not
//! interchangeable. Angles are in radians. The projection builders follow
//! the convention where `perspective_*` carry `-1` in the `w` row and
//! `ortho_*` do not.

use crate::intrinsics::*;
use crate::matrix::{Mat2x2, Mat3x3, Mat4x4};
use crate::quaternion::Quat;
use crate::vector::{Vec2, Vec3, Vec4};

/// The axis order an Euler-angle rotation composes in.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RotationOrder {
    /// Rotate around x, then y, then z (world axes).
    Xyz,
    /// Rotate around x, then z, then y (world axes).
    Xzy,
    /// Rotate around y, then x, then z (world axes).
    Yxz,
    /// Rotate around y, then z, then x (world axes).
    Yzx,
    /// Rotate around z, then x, then y (world axes). The default order.
    #[default]
    Zxy,
    /// Rotate around z, then y, then x (world axes).
    Zyx,
}

macro_rules! impl_transforms {
    ($t:ty) => {
        impl Mat2x2<$t> {
            /// A counter-clockwise rotation by `angle` radians.
            pub fn rotate(angle: $t) -> Self {
                let (s, c) = sincos(angle);
                Self::new(c, -s, s, c)
            }

            /// A non-uniform scale along x and y.
            pub fn scale(v: Vec2<$t>) -> Self {
                Self::new(v.x, 0.0, 0.0, v.y)
            }
        }

        impl Mat3x3<$t> {
            /// A rotation around the x-axis by `angle` radians.
            pub fn rotate_x(angle: $t) -> Self {
                let (s, c) = sincos(angle);
                Self::new(1.0, 0.0, 0.0, 0.0, c, -s, 0.0, s, c)
            }

            /// A rotation around the y-axis by `angle` radians.
            pub fn rotate_y(angle: $t) -> Self {
                let (s, c) = sincos(angle);
                Self::new(c, 0.0, s, 0.0, 1.0, 0.0, -s, 0.0, c)
            }

            /// A rotation around the z-axis by `angle` radians.
            pub fn rotate_z(angle: $t) -> Self {
                let (s, c) = sincos(angle);
                Self::new(c, -s, 0.0, s, c, 0.0, 0.0, 0.0, 1.0)
            }

            /// A rotation of `angle` radians around the unit vector `axis`.
            ///
            /// `axis` is assumed normalized.
            pub fn axis_angle(axis: Vec3<$t>, angle: $t) -> Self {
                let (s, c) = sincos(angle);
                let t = 1.0 - c;
                let (x, y, z) = (axis.x, axis.y, axis.z);
                Self::new(
                    t * x * x + c,
                    t * x * y - s * z,
                    t * x * z + s * y,
                    t * x * y + s * z,
                    t * y * y + c,
                    t * y * z - s * x,
                    t * x * z - s * y,
                    t * y * z + s * x,
                    t * z * z + c,
                )
            }

            /// The rotation composed by rotating around x, then y, then z.
            pub fn euler_xyz(xyz: Vec3<$t>) -> Self {
                let (s, c) = sincos(xyz);
                Self::new(
                    c.y * c.z,
                    c.z * s.x * s.y - c.x * s.z,
                    c.x * c.z * s.y + s.x * s.z,
                    c.y * s.z,
                    c.x * c.z + s.x * s.y * s.z,
                    c.x * s.y * s.z - c.z * s.x,
                    -s.y,
                    c.y * s.x,
                    c.x * c.y,
                )
            }

            /// The rotation composed by rotating around x, then z, then y.
            pub fn euler_xzy(xyz: Vec3<$t>) -> Self {
                let (s, c) = sincos(xyz);
                Self::new(
                    c.y * c.z,
                    s.x * s.y - c.x * c.y * s.z,
                    c.x * s.y + c.y * s.x * s.z,
                    s.z,
                    c.x * c.z,
                    -c.z * s.x,
                    -c.z * s.y,
                    c.y * s.x + c.x * s.y * s.z,
                    c.x * c.y - s.x * s.y * s.z,
                )
            }

            /// The rotation composed by rotating around y, then x, then z.
            pub fn euler_yxz(xyz: Vec3<$t>) -> Self {
                let (s, c) = sincos(xyz);
                Self::new(
                    c.y * c.z - s.x * s.y * s.z,
                    -c.x * s.z,
                    c.z * s.y + c.y * s.x * s.z,
                    c.z * s.x * s.y + c.y * s.z,
                    c.x * c.z,
                    s.y * s.z - c.y * c.z * s.x,
                    -c.x * s.y,
                    s.x,
                    c.x * c.y,
                )
            }

            /// The rotation composed by rotating around y, then z, then x.
            pub fn euler_yzx(xyz: Vec3<$t>) -> Self {
                let (s, c) = sincos(xyz);
                Self::new(
                    c.y * c.z,
                    -s.z,
                    c.z * s.y,
                    s.x * s.y + c.x * c.y * s.z,
                    c.x * c.z,
                    c.x * s.y * s.z - c.y * s.x,
                    c.y * s.x * s.z - c.x * s.y,
                    c.z * s.x,
                    c.x * c.y + s.x * s.y * s.z,
                )
            }

            /// The rotation composed by rotating around z, then x, then y.
            pub fn euler_zxy(xyz: Vec3<$t>) -> Self {
                let (s, c) = sincos(xyz);
                Self::new(
                    c.y * c.z + s.x * s.y * s.z,
                    c.z * s.x * s.y - c.y * s.z,
                    c.x * s.y,
                    c.x * s.z,
                    c.x * c.z,
                    -s.x,
                    c.y * s.x * s.z - c.z * s.y,
                    c.y * c.z * s.x + s.y * s.z,
                    c.x * c.y,
                )
            }

            /// The rotation composed by rotating around z, then y, then x.
            pub fn euler_zyx(xyz: Vec3<$t>) -> Self {
                let (s, c) = sincos(xyz);
                Self::new(
                    c.y * c.z,
                    -c.y * s.z,
                    s.y,
                    c.z * s.x * s.y + c.x * s.z,
                    c.x * c.z - s.x * s.y * s.z,
                    -c.y * s.x,
                    s.x * s.z - c.x * c.z * s.y,
                    c.z * s.x + c.x * s.y * s.z,
                    c.x * c.y,
                )
            }

            /// The Euler rotation for `order`.
            pub fn euler(xyz: Vec3<$t>, order: RotationOrder) -> Self {
                match order {
                    RotationOrder::Xyz => Self::euler_xyz(xyz),
                    RotationOrder::Xzy => Self::euler_xzy(xyz),
                    RotationOrder::Yxz => Self::euler_yxz(xyz),
                    RotationOrder::Yzx => Self::euler_yzx(xyz),
                    RotationOrder::Zxy => Self::euler_zxy(xyz),
                    RotationOrder::Zyx => Self::euler_zyx(xyz),
                }
            }

            /// A non-uniform scale along the axes.
            pub fn scale(v: Vec3<$t>) -> Self {
                Self::new(v.x, 0.0, 0.0, 0.0, v.y, 0.0, 0.0, 0.0, v.z)
            }

            /// The rotation with the given forward and up directions.
            ///
            /// Builds the right-handed basis `(r, cross(forward, r),
            /// forward)` with `r = normalize(cross(up, forward))`. The
            /// inputs are assumed non-zero and non-parallel; no defensive
            /// normalization is performed beyond the one shown.
            pub fn look_rotation(forward: Vec3<$t>, up: Vec3<$t>) -> Self {
                let t = normalize(cross(up, forward));
                Self::from_cols(t, cross(forward, t), forward)
            }

            /// Like [`Mat3x3::look_rotation`] but falls back to the
            /// standard basis on degenerate input.
            ///
            /// The fallback triggers when any of the three squared lengths
            /// leaves (1e-35, 1e35) or is not finite; the selection is
            /// branchless per column.
            pub fn look_rotation_safe(forward: Vec3<$t>, up: Vec3<$t>) -> Self {
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

                Self::from_cols(
                    select(Vec3::vec3(1.0, 0.0, 0.0), t, accept),
                    select(Vec3::vec3(0.0, 1.0, 0.0), cross(forward, t), accept),
                    select(Vec3::vec3(0.0, 0.0, 1.0), forward, accept),
                )
            }
        }

        impl Mat4x4<$t> {
            /// A 4x4 matrix with `rotation` in the upper-left 3x3 and
            /// `translation` in column 3.
            pub fn from_mat3_translation(rotation: Mat3x3<$t>, translation: Vec3<$t>) -> Self {
                Self::from_cols(
                    rotation.c0.extend(0.0),
                    rotation.c1.extend(0.0),
                    rotation.c2.extend(0.0),
                    translation.extend(1.0),
                )
            }

            /// A rotation around the x-axis by `angle` radians.
            pub fn rotate_x(angle: $t) -> Self {
                Self::from_mat3_translation(Mat3x3::<$t>::rotate_x(angle), Vec3::<$t>::ZERO)
            }

            /// A rotation around the y-axis by `angle` radians.
            pub fn rotate_y(angle: $t) -> Self {
                Self::from_mat3_translation(Mat3x3::<$t>::rotate_y(angle), Vec3::<$t>::ZERO)
            }

            /// A rotation around the z-axis by `angle` radians.
            pub fn rotate_z(angle: $t) -> Self {
                Self::from_mat3_translation(Mat3x3::<$t>::rotate_z(angle), Vec3::<$t>::ZERO)
            }

            /// A rotation of `angle` radians around the unit vector `axis`.
            pub fn axis_angle(axis: Vec3<$t>, angle: $t) -> Self {
                Self::from_mat3_translation(Mat3x3::<$t>::axis_angle(axis, angle), Vec3::<$t>::ZERO)
            }

            /// The rotation composed by rotating around x, then y, then z.
            pub fn euler_xyz(xyz: Vec3<$t>) -> Self {
                Self::from_mat3_translation(Mat3x3::<$t>::euler_xyz(xyz), Vec3::<$t>::ZERO)
            }

            /// The rotation composed by rotating around x, then z, then y.
            pub fn euler_xzy(xyz: Vec3<$t>) -> Self {
                Self::from_mat3_translation(Mat3x3::<$t>::euler_xzy(xyz), Vec3::<$t>::ZERO)
            }

            /// The rotation composed by rotating around y, then x, then z.
            pub fn euler_yxz(xyz: Vec3<$t>) -> Self {
                Self::from_mat3_translation(Mat3x3::<$t>::euler_yxz(xyz), Vec3::<$t>::ZERO)
            }

            /// The rotation composed by rotating around y, then z, then x.
            pub fn euler_yzx(xyz: Vec3<$t>) -> Self {
                Self::from_mat3_translation(Mat3x3::<$t>::euler_yzx(xyz), Vec3::<$t>::ZERO)
            }

            /// The rotation composed by rotating around z, then x, then y.
            pub fn euler_zxy(xyz: Vec3<$t>) -> Self {
                Self::from_mat3_translation(Mat3x3::<$t>::euler_zxy(xyz), Vec3::<$t>::ZERO)
            }

            /// The rotation composed by rotating around z, then y, then x.
            pub fn euler_zyx(xyz: Vec3<$t>) -> Self {
                Self::from_mat3_translation(Mat3x3::<$t>::euler_zyx(xyz), Vec3::<$t>::ZERO)
            }

            /// The Euler rotation for `order`.
            pub fn euler(xyz: Vec3<$t>, order: RotationOrder) -> Self {
                Self::from_mat3_translation(Mat3x3::<$t>::euler(xyz, order), Vec3::<$t>::ZERO)
            }

            /// A non-uniform scale along the axes.
            pub fn scale(v: Vec3<$t>) -> Self {
                Self::new(
                    v.x, 0.0, 0.0, 0.0, 0.0, v.y, 0.0, 0.0, 0.0, 0.0, v.z, 0.0,
                    0.0, 0.0, 0.0, 1.0,
                )
            }

            /// A translation by `t`.
            pub fn translate(t: Vec3<$t>) -> Self {
                Self::from_cols(
                    Vec4::vec4(1.0, 0.0, 0.0, 0.0),
                    Vec4::vec4(0.0, 1.0, 0.0, 0.0),
                    Vec4::vec4(0.0, 0.0, 1.0, 0.0),
                    t.extend(1.0),
                )
            }

            /// A view matrix looking from `eye` towards `target`.
            pub fn look_at(eye: Vec3<$t>, target: Vec3<$t>, up: Vec3<$t>) -> Self {
                let rot = Mat3x3::<$t>::look_rotation(normalize(target - eye), up);
                Self::from_mat3_translation(rot, eye)
            }

            /// An orthographic projection of the given width and height.
            pub fn ortho(width: $t, height: $t, near: $t, far: $t) -> Self {
                let rcpdx = 1.0 / width;
                let rcpdy = 1.0 / height;
                let rcpdz = 1.0 / (far - near);
                Self::new(
                    2.0 * rcpdx,
                    0.0,
                    0.0,
                    0.0,
                    0.0,
                    2.0 * rcpdy,
                    0.0,
                    0.0,
                    0.0,
                    0.0,
                    -2.0 * rcpdz,
                    -(far + near) * rcpdz,
                    0.0,
                    0.0,
                    0.0,
                    1.0,
                )
            }

            /// An off-center orthographic projection.
            pub fn ortho_off_center(
                left: $t,
                right: $t,
                bottom: $t,
                top: $t,
                near: $t,
                far: $t,
            ) -> Self {
                let rcpdx = 1.0 / (right - left);
                let rcpdy = 1.0 / (top - bottom);
                let rcpdz = 1.0 / (far - near);
                Self::new(
                    2.0 * rcpdx,
                    0.0,
                    0.0,
                    -(right + left) * rcpdx,
                    0.0,
                    2.0 * rcpdy,
                    0.0,
                    -(top + bottom) * rcpdy,
                    0.0,
                    0.0,
                    -2.0 * rcpdz,
                    -(far + near) * rcpdz,
                    0.0,
                    0.0,
                    0.0,
                    1.0,
                )
            }

            /// A perspective projection from a vertical field of view.
            pub fn perspective_fov(vertical_fov: $t, aspect: $t, near: $t, far: $t) -> Self {
                let cotangent = 1.0 / tan(vertical_fov * 0.5);
                let rcpdz = 1.0 / (near - far);
                Self::new(
                    cotangent / aspect,
                    0.0,
                    0.0,
                    0.0,
                    0.0,
                    cotangent,
                    0.0,
                    0.0,
                    0.0,
                    0.0,
                    (far + near) * rcpdz,
                    2.0 * near * far * rcpdz,
                    0.0,
                    0.0,
                    -1.0,
                    0.0,
                )
            }

            /// An off-center perspective projection.
            pub fn perspective_off_center(
                left: $t,
                right: $t,
                bottom: $t,
                top: $t,
                near: $t,
                far: $t,
            ) -> Self {
                let rcpdz = 1.0 / (near - far);
                let rcp_width = 1.0 / (right - left);
                let rcp_height = 1.0 / (top - bottom);
                Self::new(
                    2.0 * near * rcp_width,
                    0.0,
                    (left + right) * rcp_width,
                    0.0,
                    0.0,
                    2.0 * near * rcp_height,
                    (bottom + top) * rcp_height,
                    0.0,
                    0.0,
                    0.0,
                    (far + near) * rcpdz,
                    2.0 * near * far * rcpdz,
                    0.0,
                    0.0,
                    -1.0,
                    0.0,
                )
            }
        }
    };
}

impl_transforms!(f32);
impl_transforms!(f64);

impl Mat3x3<f32> {
    /// The rotation matrix of a quaternion.
    pub fn from_quat(q: Quat) -> Self {
        let (x, y, z, w) = (q.x, q.y, q.z, q.w);
        let x2 = x + x;
        let y2 = y + y;
        let z2 = z + z;
        let xx = x * x2;
        let yy = y * y2;
        let zz = z * z2;
        let xy = x * y2;
        let xz = x * z2;
        let yz = y * z2;
        let wx = w * x2;
        let wy = w * y2;
        let wz = w * z2;
        Self::new(
            1.0 - yy - zz,
            xy - wz,
            xz + wy,
            xy + wz,
            1.0 - xx - zz,
            yz - wx,
            xz - wy,
            yz + wx,
            1.0 - xx - yy,
        )
    }
}

impl Mat4x4<f32> {
    /// A 4x4 matrix with the rotation of `q` and `translation` in column
    /// 3.
    pub fn from_quat_translation(q: Quat, translation: Vec3<f32>) -> Self {
        Self::from_mat3_translation(Mat3x3::from_quat(q), translation)
    }

    /// The composition of a scale, a rotation and a translation.
    ///
    /// The rotation columns are scaled per-axis, the translation lands in
    /// column 3.
    pub fn trs(translation: Vec3<f32>, rotation: Quat, scale: Vec3<f32>) -> Self {
        let r = Mat3x3::from_quat(rotation);
        Self::from_cols(
            (r.c0 * scale.x).extend(0.0),
            (r.c1 * scale.y).extend(0.0),
            (r.c2 * scale.z).extend(0.0),
            translation.extend(1.0),
        )
    }
}

#[cfg(test)]
mod test {
    use crate::*;
    use std::f32::consts::FRAC_PI_2;

    fn assert_mat3_approx(a: Mat3x3f, b: Mat3x3f, eps: f32) {
        for i in 0..3usize {
            let (ca, cb) = (a[i], b[i]);
            for j in 0..3usize {
                assert!(
                    (ca[j] - cb[j]).abs() < eps,
                    "column {i} row {j}: {ca:?} vs {cb:?}"
                );
            }
        }
    }

    fn assert_vec3_approx(a: Vec3f, b: Vec3f, eps: f32) {
        assert!(
            (a.x - b.x).abs() < eps && (a.y - b.y).abs() < eps && (a.z - b.z).abs() < eps,
            "{a} vs {b}"
        );
    }

    #[test]
    fn sanity_rotate() {
        let r = Mat3x3f::rotate_z(FRAC_PI_2);
        assert_vec3_approx(mul(r, vec3f(1.0, 0.0, 0.0)), vec3f(0.0, 1.0, 0.0), 1e-6);

        let r = Mat3x3f::rotate_x(FRAC_PI_2);
        assert_vec3_approx(mul(r, vec3f(0.0, 1.0, 0.0)), vec3f(0.0, 0.0, 1.0), 1e-6);

        let r = Mat3x3f::rotate_y(FRAC_PI_2);
        assert_vec3_approx(mul(r, vec3f(0.0, 0.0, 1.0)), vec3f(1.0, 0.0, 0.0), 1e-6);

        let r2 = Mat2x2f::rotate(FRAC_PI_2);
        let v = mul(r2, vec2f(1.0, 0.0));
        assert!((v.x - 0.0).abs() < 1e-6 && (v.y - 1.0).abs() < 1e-6);
    }

    #[test]
    fn axis_angle_matches_cardinal_rotations() {
        let angle = 0.7;
        assert_mat3_approx(
            Mat3x3f::axis_angle(vec3f(1.0, 0.0, 0.0), angle),
            Mat3x3f::rotate_x(angle),
            1e-6,
        );
        assert_mat3_approx(
            Mat3x3f::axis_angle(vec3f(0.0, 1.0, 0.0), angle),
            Mat3x3f::rotate_y(angle),
            1e-6,
        );
        assert_mat3_approx(
            Mat3x3f::axis_angle(vec3f(0.0, 0.0, 1.0), angle),
            Mat3x3f::rotate_z(angle),
            1e-6,
        );
    }

    #[test]
    fn euler_orders_match_their_compositions() {
        let v = vec3f(0.4, -0.7, 1.1);
        let rx = Mat3x3f::rotate_x(v.x);
        let ry = Mat3x3f::rotate_y(v.y);
        let rz = Mat3x3f::rotate_z(v.z);

        // euler_abc applies a, then b, then c around world axes, which is
        // the matrix product Rc * Rb * Ra.
        assert_mat3_approx(Mat3x3f::euler_xyz(v), mul(rz, mul(ry, rx)), 1e-5);
        assert_mat3_approx(Mat3x3f::euler_xzy(v), mul(ry, mul(rz, rx)), 1e-5);
        assert_mat3_approx(Mat3x3f::euler_yxz(v), mul(rz, mul(rx, ry)), 1e-5);
        assert_mat3_approx(Mat3x3f::euler_yzx(v), mul(rx, mul(rz, ry)), 1e-5);
        assert_mat3_approx(Mat3x3f::euler_zxy(v), mul(ry, mul(rx, rz)), 1e-5);
        assert_mat3_approx(Mat3x3f::euler_zyx(v), mul(rx, mul(ry, rz)), 1e-5);
    }

    #[test]
    fn euler_orders_are_distinct() {
        let v = vec3f(0.3, 0.5, 0.7);
        let xyz = Mat3x3f::euler_xyz(v);
        let zyx = Mat3x3f::euler_zyx(v);
        // A generic angle triple must distinguish the orders.
        assert!(any(xyz.c0.cmp_ne(zyx.c0)) || any(xyz.c1.cmp_ne(zyx.c1)));

        // The default order is ZXY.
        assert_eq!(
            Mat3x3f::euler(v, RotationOrder::default()),
            Mat3x3f::euler_zxy(v)
        );
    }

    #[test]
    fn sanity_look_rotation() {
        // Canonical forward/up is the identity basis.
        let m = Mat3x3f::look_rotation(vec3f(0.0, 0.0, 1.0), vec3f(0.0, 1.0, 0.0));
        assert_mat3_approx(m, Mat3x3f::IDENTITY, 1e-6);

        // The result's columns form an orthonormal basis with c2 = forward.
        let f = normalize(vec3f(1.0, 2.0, 3.0));
        let m = Mat3x3f::look_rotation(f, vec3f(0.0, 1.0, 0.0));
        assert_vec3_approx(m.c2, f, 1e-6);
        assert!((dot(m.c0, m.c1)).abs() < 1e-6);
        assert!((length(m.c0) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn look_rotation_safe_degenerate_falls_back() {
        let f = vec3f(0.0, 0.0, 1.0);
        // Parallel forward and up has no valid right vector.
        let m = Mat3x3f::look_rotation_safe(f, f);
        assert_eq!(m, Mat3x3f::IDENTITY);

        // Zero-length input falls back too.
        let m = Mat3x3f::look_rotation_safe(Vec3f::ZERO, vec3f(0.0, 1.0, 0.0));
        assert_eq!(m, Mat3x3f::IDENTITY);
    }

    #[test]
    fn look_rotation_safe_matches_unsafe_when_well_conditioned() {
        let f = vec3f(1.0, 0.0, 0.0);
        let u = vec3f(0.0, 1.0, 0.0);
        assert_mat3_approx(
            Mat3x3f::look_rotation_safe(f, u),
            Mat3x3f::look_rotation(f, u),
            1e-6,
        );
    }

    #[test]
    fn translate_moves_the_origin() {
        let m = Mat4x4f::translate(vec3f(1.0, 2.0, 3.0));
        assert_eq!(mul(m, vec4f(0.0, 0.0, 0.0, 1.0)), vec4f(1.0, 2.0, 3.0, 1.0));
        // Directions (w = 0) are unaffected.
        assert_eq!(mul(m, vec4f(1.0, 0.0, 0.0, 0.0)), vec4f(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn scale_scales_points() {
        let m = Mat4x4f::scale(vec3f(2.0, 3.0, 4.0));
        assert_eq!(mul(m, vec4f(1.0, 1.0, 1.0, 1.0)), vec4f(2.0, 3.0, 4.0, 1.0));
    }

    #[test]
    fn sanity_trs() {
        // Identity rotation: TRS is scale-then-translate.
        let m = Mat4x4f::trs(vec3f(1.0, 2.0, 3.0), Quat::IDENTITY, vec3f(2.0, 2.0, 2.0));
        assert_eq!(mul(m, vec4f(1.0, 1.0, 1.0, 1.0)), vec4f(3.0, 4.0, 5.0, 1.0));
    }

    #[test]
    fn sanity_look_at() {
        let eye = vec3f(0.0, 0.0, -5.0);
        let m = Mat4x4f::look_at(eye, Vec3f::ZERO, vec3f(0.0, 1.0, 0.0));
        // The eye position lands in column 3.
        assert_eq!(m.c3, vec4f(0.0, 0.0, -5.0, 1.0));
        // Forward column points from eye to target.
        assert_vec3_approx(m.c2.truncate(), vec3f(0.0, 0.0, 1.0), 1e-6);
    }

    #[test]
    fn projection_sign_patterns() {
        let p = Mat4x4f::perspective_fov(FRAC_PI_2, 1.0, 0.1, 100.0);
        // Perspective matrices carry -1 in the w row (row 3, column 2).
        assert_eq!(p.c2.w, -1.0);
        assert_eq!(p.c3.w, 0.0);

        let o = Mat4x4f::ortho(2.0, 2.0, 0.1, 100.0);
        assert_eq!(o.c2.w, 0.0);
        assert_eq!(o.c3.w, 1.0);
    }

    #[test]
    fn sanity_perspective_fov() {
        // With fov = 90 degrees and aspect 1, the cotangent is 1.
        let p = Mat4x4f::perspective_fov(FRAC_PI_2, 1.0, 1.0, 101.0);
        assert!((p.c0.x - 1.0).abs() < 1e-6);
        assert!((p.c1.y - 1.0).abs() < 1e-6);

        // A point on the near plane maps to w' = near.
        let v = mul(p, vec4f(0.0, 0.0, -1.0, 1.0));
        assert!((v.w - 1.0).abs() < 1e-6);
    }

    #[test]
    fn sanity_ortho() {
        let o = Mat4x4f::ortho(4.0, 2.0, -1.0, 1.0);
        let v = mul(o, vec4f(2.0, 1.0, 0.0, 1.0));
        assert!((v.x - 1.0).abs() < 1e-6);
        assert!((v.y - 1.0).abs() < 1e-6);

        let oc = Mat4x4f::ortho_off_center(0.0, 4.0, 0.0, 2.0, -1.0, 1.0);
        let v = mul(oc, vec4f(2.0, 1.0, 0.0, 1.0));
        assert!(v.x.abs() < 1e-6);
        assert!(v.y.abs() < 1e-6);
    }

    #[test]
    fn double_builders_mirror_float() {
        let rf = Mat3x3f::euler_xyz(vec3f(0.2, 0.4, 0.6));
        let rd = Mat3x3d::euler_xyz(vec3d(0.2, 0.4, 0.6));
        for i in 0..3usize {
            for j in 0..3usize {
                assert!((rf[i][j] as f64 - rd[i][j]).abs() < 1e-6);
            }
        }

        let t = Mat4x4d::translate(vec3d(1.0, 2.0, 3.0));
        assert_eq!(mul(t, vec4d(0.0, 0.0, 0.0, 1.0)), vec4d(1.0, 2.0, 3.0, 1.0));
    }
}
