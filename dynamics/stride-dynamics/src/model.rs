//! The centroidal model: cached inertial properties and exact frame
//! transport between the base link and the CoM.

use stride_autodiff::{Mat3, Real, Vec3};
use stride_types::{
    EulerPose, JointConfiguration, JointVelocities, Result, RobotInertialInfo, SpatialInertia,
    SpatialInertiaInverse, SpatialMotion,
};

use crate::rotations::rotation_base_to_origin;

/// Inertial properties cached for the current joint posture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CentroidalProperties<T> {
    /// Base→CoM offset in the base frame (m).
    pub com_position_base_frame: Vec3<T>,
    /// Centroidal spatial inertia.
    pub inertia: SpatialInertia<T>,
}

/// Centroidal model of a legged robot's trunk.
///
/// Holds the robot's inertial description and the [`CentroidalProperties`]
/// cached for the current posture, and performs the exact rigid-body
/// conversions between base-link and CoM poses, twists, and accelerations.
///
/// This model is trunk-dominant: the cached properties do not vary with
/// the leg posture, so [`Self::set_joint_configuration`] is a
/// deterministic, idempotent recomputation. The cache protocol still runs
/// through that method so posture-dependent variants keep the same
/// call sequence.
///
/// `Clone` produces an independently owned copy that shares no mutable
/// state with the original — the form required for concurrent rollouts.
#[derive(Debug, Clone)]
pub struct CentroidalModel<T: Real> {
    info: RobotInertialInfo,
    properties: CentroidalProperties<T>,
}

impl<T: Real> CentroidalModel<T> {
    /// Build a model from a validated inertial description.
    ///
    /// # Errors
    ///
    /// Propagates [`RobotInertialInfo::validate`] failures: non-positive
    /// mass or a rotational inertia that is not symmetric
    /// positive-definite.
    pub fn new(info: RobotInertialInfo) -> Result<Self> {
        info.validate()?;
        let properties = Self::properties_for(&info);
        Ok(Self { info, properties })
    }

    fn properties_for(info: &RobotInertialInfo) -> CentroidalProperties<T> {
        CentroidalProperties {
            com_position_base_frame: info.com_offset(),
            inertia: info.spatial_inertia(),
        }
    }

    /// Recompute the cached properties for posture `q`.
    pub fn set_joint_configuration(&mut self, _q: &JointConfiguration<T>) {
        self.properties = Self::properties_for(&self.info);
    }

    /// The robot's inertial description.
    #[must_use]
    pub fn info(&self) -> &RobotInertialInfo {
        &self.info
    }

    /// Cached properties for the current posture.
    #[must_use]
    pub fn properties(&self) -> &CentroidalProperties<T> {
        &self.properties
    }

    /// Base→CoM offset in the base frame.
    #[must_use]
    pub fn com_position_base_frame(&self) -> Vec3<T> {
        self.properties.com_position_base_frame
    }

    /// Total mass.
    #[must_use]
    pub fn total_mass(&self) -> T {
        self.properties.inertia.mass
    }

    /// Centroidal spatial inertia.
    #[must_use]
    pub fn com_inertia(&self) -> SpatialInertia<T> {
        self.properties.inertia
    }

    /// The rotational block of the spatial inertia, exactly.
    #[must_use]
    pub fn rotational_inertia(&self) -> Mat3<T> {
        self.properties.inertia.rotational
    }

    /// Block-form inverse of the spatial inertia.
    #[must_use]
    pub fn com_inertia_inverse(&self) -> SpatialInertiaInverse<T> {
        self.properties.inertia.inverse()
    }

    /// Rotational block of dM/dt for the given posture and joint
    /// velocities.
    ///
    /// Zero for this trunk-dominant model (the translational block has
    /// constant mass in any case); kept in the interface so the Coriolis
    /// assembly is written in its general form.
    #[must_use]
    pub fn com_inertia_derivative(
        &self,
        _q: &JointConfiguration<T>,
        _dq: &JointVelocities<T>,
    ) -> Mat3<T> {
        Mat3::zero()
    }

    /// Base pose from the CoM pose: same orientation, position shifted by
    /// the rotated base→CoM offset.
    #[must_use]
    pub fn base_pose_from_com(&self, com_pose: &EulerPose<T>) -> EulerPose<T> {
        let o_r_b = rotation_base_to_origin(&com_pose.orientation);
        EulerPose::new(
            com_pose.orientation,
            com_pose.position - o_r_b * self.com_position_base_frame(),
        )
    }

    /// CoM pose from the base pose; inverse of [`Self::base_pose_from_com`].
    #[must_use]
    pub fn com_pose_from_base(&self, base_pose: &EulerPose<T>) -> EulerPose<T> {
        let o_r_b = rotation_base_to_origin(&base_pose.orientation);
        EulerPose::new(
            base_pose.orientation,
            base_pose.position + o_r_b * self.com_position_base_frame(),
        )
    }

    /// Base-frame twist from the CoM twist: same angular velocity, linear
    /// velocity carried across the lever arm.
    #[must_use]
    pub fn base_velocities_from_com(&self, com_twist: &SpatialMotion<T>) -> SpatialMotion<T> {
        let com_to_base = -self.com_position_base_frame();
        SpatialMotion::new(
            com_twist.angular,
            com_twist.linear + com_twist.angular.cross(com_to_base),
        )
    }

    /// CoM twist from the base-frame twist; inverse of
    /// [`Self::base_velocities_from_com`].
    #[must_use]
    pub fn com_velocities_from_base(&self, base_twist: &SpatialMotion<T>) -> SpatialMotion<T> {
        let base_to_com = self.com_position_base_frame();
        SpatialMotion::new(
            base_twist.angular,
            base_twist.linear + base_twist.angular.cross(base_to_com),
        )
    }

    /// Base accelerations from CoM accelerations: the lever-arm term plus
    /// the centripetal term ω×(ω×r).
    #[must_use]
    pub fn base_accelerations_from_com(
        &self,
        com_accel: &SpatialMotion<T>,
        com_twist: &SpatialMotion<T>,
    ) -> SpatialMotion<T> {
        let com_to_base = -self.com_position_base_frame();
        let omega = com_twist.angular;
        SpatialMotion::new(
            com_accel.angular,
            com_accel.linear
                + com_accel.angular.cross(com_to_base)
                + omega.cross(omega.cross(com_to_base)),
        )
    }

    /// CoM accelerations from base accelerations; inverse of
    /// [`Self::base_accelerations_from_com`] for a consistent twist.
    #[must_use]
    pub fn com_accelerations_from_base(
        &self,
        base_accel: &SpatialMotion<T>,
        base_twist: &SpatialMotion<T>,
    ) -> SpatialMotion<T> {
        let base_to_com = self.com_position_base_frame();
        let omega = base_twist.angular;
        SpatialMotion::new(
            base_accel.angular,
            base_accel.linear
                + base_accel.angular.cross(base_to_com)
                + omega.cross(omega.cross(base_to_com)),
        )
    }
}
