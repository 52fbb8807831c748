//! Centroidal spatial inertia and the robot's inertial description.

use nalgebra::{Matrix3, Matrix6, Vector3};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use stride_autodiff::{Mat3, Real, Vec3};

use crate::{DynamicsError, Result, SpatialForce, SpatialMotion};

/// The 6×6 centroidal spatial inertia in block form.
///
/// About the CoM the rotational and translational blocks are uncoupled:
///
/// ```text
/// M = [ I_rot   0      ]
///     [ 0       m·I₃   ]
/// ```
///
/// which is what makes the closed-form block inversion of
/// [`Self::inverse`] exact — no generic 6×6 inversion anywhere.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpatialInertia<T> {
    /// Rotational inertia about the CoM (kg·m²), symmetric
    /// positive-definite.
    pub rotational: Mat3<T>,
    /// Total mass (kg), strictly positive.
    pub mass: T,
}

impl<T: Real> SpatialInertia<T> {
    /// Create from the rotational block and the mass.
    #[must_use]
    pub const fn new(rotational: Mat3<T>, mass: T) -> Self {
        Self { rotational, mass }
    }

    /// Map a spatial motion through the inertia: `[I_rot·ω, m·v]`.
    #[must_use]
    pub fn apply(&self, motion: &SpatialMotion<T>) -> SpatialForce<T> {
        SpatialForce::new(self.rotational * motion.angular, motion.linear * self.mass)
    }

    /// Closed-form block inverse: the rotational block is inverted on its
    /// own, the translational block is `1/m · I₃`.
    #[must_use]
    pub fn inverse(&self) -> SpatialInertiaInverse<T> {
        SpatialInertiaInverse {
            rotational: self.rotational.inverse(),
            inverse_mass: T::one() / self.mass,
        }
    }
}

impl SpatialInertia<f64> {
    /// Expand to the full 6×6 matrix (angular rows first) for
    /// linearization consumers.
    #[must_use]
    pub fn to_matrix6(&self) -> Matrix6<f64> {
        let mut m = Matrix6::zeros();
        for row in 0..3 {
            for col in 0..3 {
                m[(row, col)] = self.rotational.at(row, col);
            }
        }
        m[(3, 3)] = self.mass;
        m[(4, 4)] = self.mass;
        m[(5, 5)] = self.mass;
        m
    }
}

/// Inverse of a [`SpatialInertia`], in the same block form.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpatialInertiaInverse<T> {
    /// Inverse of the rotational block.
    pub rotational: Mat3<T>,
    /// Reciprocal of the mass.
    pub inverse_mass: T,
}

impl<T: Real> SpatialInertiaInverse<T> {
    /// Map a wrench to an acceleration: `[I_rot⁻¹·τ, f/m]`.
    #[must_use]
    pub fn apply(&self, wrench: &SpatialForce<T>) -> SpatialMotion<T> {
        SpatialMotion::new(
            self.rotational * wrench.torque,
            wrench.force * self.inverse_mass,
        )
    }
}

impl SpatialInertiaInverse<f64> {
    /// Expand to the full 6×6 matrix (angular rows first).
    #[must_use]
    pub fn to_matrix6(&self) -> Matrix6<f64> {
        let mut m = Matrix6::zeros();
        for row in 0..3 {
            for col in 0..3 {
                m[(row, col)] = self.rotational.at(row, col);
            }
        }
        m[(3, 3)] = self.inverse_mass;
        m[(4, 4)] = self.inverse_mass;
        m[(5, 5)] = self.inverse_mass;
        m
    }
}

/// Plain-`f64` inertial description of a robot, the input from which a
/// centroidal model caches its [`SpatialInertia`].
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RobotInertialInfo {
    /// Total mass (kg).
    pub mass: f64,
    /// Rotational inertia about the CoM (kg·m²).
    pub rotational_inertia: Matrix3<f64>,
    /// CoM offset from the base link, in the base frame (m).
    pub com_offset_base_frame: Vector3<f64>,
}

impl RobotInertialInfo {
    /// Create an inertial description.
    #[must_use]
    pub const fn new(
        mass: f64,
        rotational_inertia: Matrix3<f64>,
        com_offset_base_frame: Vector3<f64>,
    ) -> Self {
        Self {
            mass,
            rotational_inertia,
            com_offset_base_frame,
        }
    }

    /// Inertial description of a uniform box trunk.
    ///
    /// - Ixx = (1/12)·m·(y² + z²), and cyclically for the other axes,
    ///   with (x, y, z) the full side lengths.
    #[must_use]
    pub fn uniform_box_trunk(
        mass: f64,
        side_lengths: Vector3<f64>,
        com_offset_base_frame: Vector3<f64>,
    ) -> Self {
        let sq = side_lengths.component_mul(&side_lengths);
        let diag = Vector3::new(sq.y + sq.z, sq.x + sq.z, sq.x + sq.y) * (mass / 12.0);
        Self::new(
            mass,
            Matrix3::from_diagonal(&diag),
            com_offset_base_frame,
        )
    }

    /// Validate the description.
    ///
    /// # Errors
    ///
    /// Rejects non-positive or non-finite mass, a rotational inertia that
    /// is not symmetric positive-definite, and non-finite offsets.
    pub fn validate(&self) -> Result<()> {
        if !self.mass.is_finite() || self.mass <= 0.0 {
            return Err(DynamicsError::invalid_inertial(
                "mass must be finite and strictly positive",
            ));
        }

        if !self.com_offset_base_frame.iter().all(|x| x.is_finite()) {
            return Err(DynamicsError::invalid_inertial(
                "CoM offset must be finite",
            ));
        }

        let asym = self.rotational_inertia - self.rotational_inertia.transpose();
        if asym.iter().any(|x| x.abs() > 1e-9) {
            return Err(DynamicsError::invalid_inertial(
                "rotational inertia must be symmetric",
            ));
        }

        let eigenvalues = self.rotational_inertia.symmetric_eigenvalues();
        if eigenvalues.iter().any(|&e| e <= 0.0) {
            return Err(DynamicsError::invalid_inertial(
                "rotational inertia must be positive-definite",
            ));
        }

        Ok(())
    }

    /// Cache the description as a [`SpatialInertia`] over any scalar.
    #[must_use]
    pub fn spatial_inertia<T: Real>(&self) -> SpatialInertia<T> {
        SpatialInertia::new(Mat3::lift(&self.rotational_inertia), T::from_f64(self.mass))
    }

    /// The CoM offset lifted to any scalar.
    #[must_use]
    pub fn com_offset<T: Real>(&self) -> Vec3<T> {
        Vec3::lift(&self.com_offset_base_frame)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sample() -> RobotInertialInfo {
        RobotInertialInfo::new(
            52.0,
            Matrix3::new(2.1, 0.1, 0.0, 0.1, 4.0, 0.05, 0.0, 0.05, 4.4),
            Vector3::new(0.0, 0.0, 0.04),
        )
    }

    #[test]
    fn validation_accepts_physical_properties() {
        assert!(sample().validate().is_ok());
    }

    #[test]
    fn validation_rejects_bad_mass_and_inertia() {
        let mut info = sample();
        info.mass = 0.0;
        assert!(info.validate().is_err());

        let mut info = sample();
        info.rotational_inertia[(0, 1)] = 0.5; // breaks symmetry
        assert!(info.validate().is_err());

        let mut info = sample();
        info.rotational_inertia = Matrix3::from_diagonal(&Vector3::new(1.0, -1.0, 1.0));
        assert!(info.validate().is_err());
    }

    #[test]
    fn block_inverse_times_inertia_is_identity() {
        let inertia: SpatialInertia<f64> = sample().spatial_inertia();
        let product = inertia.inverse().to_matrix6() * inertia.to_matrix6();
        assert_relative_eq!(product, Matrix6::identity(), epsilon = 1e-12);
    }

    #[test]
    fn apply_and_inverse_apply_round_trip() {
        let inertia: SpatialInertia<f64> = sample().spatial_inertia();
        let motion = SpatialMotion::new(Vec3::new(0.2, -0.4, 0.9), Vec3::new(1.0, 0.5, -0.2));
        let back = inertia.inverse().apply(&inertia.apply(&motion));
        assert_relative_eq!(
            back.angular.to_vector3(),
            motion.angular.to_vector3(),
            epsilon = 1e-12
        );
        assert_relative_eq!(
            back.linear.to_vector3(),
            motion.linear.to_vector3(),
            epsilon = 1e-12
        );
    }

    #[test]
    fn box_trunk_inertia_diagonal() {
        let info =
            RobotInertialInfo::uniform_box_trunk(12.0, Vector3::new(1.0, 1.0, 1.0), Vector3::zeros());
        // (1/12)·12·(1+1) = 2 on each axis
        assert_relative_eq!(info.rotational_inertia[(0, 0)], 2.0, epsilon = 1e-12);
        assert!(info.validate().is_ok());
    }
}
