//! Rotation algebra for the intrinsic XYZ Euler convention.
//!
//! The whole workspace expresses orientation as intrinsic XYZ Euler angles
//! `(roll, pitch, yaw)` with the base→origin rotation
//! `R = Rx(roll) · Ry(pitch) · Rz(yaw)`.

use stride_autodiff::{Mat3, Real, Vec3};

/// Rotation matrix taking base-frame coordinates to origin-frame
/// coordinates for the given Euler angles.
#[must_use]
pub fn rotation_base_to_origin<T: Real>(euler: &Vec3<T>) -> Mat3<T> {
    let (s1, c1) = (euler.x.sin(), euler.x.cos());
    let (s2, c2) = (euler.y.sin(), euler.y.cos());
    let (s3, c3) = (euler.z.sin(), euler.z.cos());

    Mat3::from_rows(
        Vec3::new(c2 * c3, -c2 * s3, s2),
        Vec3::new(c1 * s3 + s1 * s2 * c3, c1 * c3 - s1 * s2 * s3, -s1 * c2),
        Vec3::new(s1 * s3 - c1 * s2 * c3, s1 * c3 + c1 * s2 * s3, c1 * c2),
    )
}

/// Rotation matrix taking origin-frame coordinates to base-frame
/// coordinates (the transpose of [`rotation_base_to_origin`]).
#[must_use]
pub fn rotation_origin_to_base<T: Real>(euler: &Vec3<T>) -> Mat3<T> {
    rotation_base_to_origin(euler).transpose()
}

/// Matrix mapping a CoM-frame angular velocity to XYZ Euler angle rates.
///
/// Singular at pitch = ±90° (gimbal lock): the 1/cos(pitch) entries blow
/// up there. This is a property of the three-parameter orientation, and it
/// is deliberately left unhandled — callers operating near that pitch need
/// a different orientation parameterization, not a clamped rate.
#[must_use]
pub fn euler_rate_transform<T: Real>(euler: &Vec3<T>) -> Mat3<T> {
    let (s2, c2) = (euler.y.sin(), euler.y.cos());
    let (s3, c3) = (euler.z.sin(), euler.z.cos());
    let z = T::zero();
    let o = T::one();

    Mat3::from_rows(
        Vec3::new(c3 / c2, -s3 / c2, z),
        Vec3::new(s3, c3, z),
        Vec3::new(-c3 * s2 / c2, s3 * s2 / c2, o),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use nalgebra::Matrix3;

    #[test]
    fn zero_angles_give_identity() {
        let r = rotation_base_to_origin(&Vec3::<f64>::zero());
        assert_relative_eq!(r.to_matrix3(), Matrix3::identity(), epsilon = 1e-15);

        let m = euler_rate_transform(&Vec3::<f64>::zero());
        assert_relative_eq!(m.to_matrix3(), Matrix3::identity(), epsilon = 1e-15);
    }

    #[test]
    fn single_axis_rotations() {
        let quarter = std::f64::consts::FRAC_PI_2;

        // Roll by 90°: base +Y maps to origin +Z.
        let r = rotation_base_to_origin(&Vec3::new(quarter, 0.0, 0.0));
        let y = r * Vec3::new(0.0, 1.0, 0.0);
        assert_relative_eq!(
            y.to_vector3(),
            nalgebra::Vector3::new(0.0, 0.0, 1.0),
            epsilon = 1e-12
        );

        // Yaw by 90°: base +X maps to origin +Y.
        let r = rotation_base_to_origin(&Vec3::new(0.0, 0.0, quarter));
        let x = r * Vec3::new(1.0, 0.0, 0.0);
        assert_relative_eq!(
            x.to_vector3(),
            nalgebra::Vector3::new(0.0, 1.0, 0.0),
            epsilon = 1e-12
        );
    }

    #[test]
    fn rotation_is_orthonormal() {
        let e = Vec3::new(0.31, -0.42, 1.17);
        let r = rotation_base_to_origin(&e);
        let rt_r = (r.transpose() * r).to_matrix3();
        assert_relative_eq!(rt_r, Matrix3::identity(), epsilon = 1e-13);
        assert_relative_eq!(r.determinant(), 1.0, epsilon = 1e-13);
    }

    #[test]
    fn origin_to_base_is_the_inverse() {
        let e = Vec3::new(-0.2, 0.55, 0.8);
        let prod = (rotation_origin_to_base(&e) * rotation_base_to_origin(&e)).to_matrix3();
        assert_relative_eq!(prod, Matrix3::identity(), epsilon = 1e-13);
    }

    /// The rate transform must satisfy dR/dt = R·skew(ω) when the Euler
    /// angles evolve at the rates it produces.
    #[test]
    fn rate_transform_matches_rotation_kinematics() {
        let e = Vec3::new(0.3, -0.4, 0.8);
        let omega = Vec3::new(0.5, -0.2, 0.7);
        let eps = 1e-6;

        let e_rate = euler_rate_transform(&e) * omega;
        let perturbed = rotation_base_to_origin(&(e + e_rate * eps)).to_matrix3();

        let r = rotation_base_to_origin(&e);
        let expected =
            (r * (Mat3::identity() + Mat3::skew(omega) * eps)).to_matrix3();

        assert_relative_eq!(perturbed, expected, epsilon = 1e-10);
    }

    #[test]
    fn rate_transform_grows_toward_gimbal_lock() {
        // Approaching pitch = 90° the 1/cos(pitch) entries diverge; nothing
        // clamps them.
        let near = euler_rate_transform(&Vec3::new(0.0, 1.57, 0.0));
        assert!(near.at(0, 0).abs() > 1e2);
    }
}
