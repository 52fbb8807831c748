//! Centroidal state and spatial motion/force types.
//!
//! The centroidal state is 12-dimensional:
//!
//! - orientation of the base/CoM frame as intrinsic XYZ Euler angles (3)
//! - CoM position in the fixed origin frame (3)
//! - angular and linear velocity expressed in the CoM frame (6)
//!
//! Every consumer shares this layout and the Euler convention; the flat
//! vector form is `[orientation, position, angular velocity, linear
//! velocity]`.

use nalgebra::SVector;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use stride_autodiff::{Real, Vec3};

/// Dimension of the centroidal state vector.
pub const STATE_DIM: usize = 12;

/// Angular and linear components of a frame's motion (a twist when the
/// components are velocities, an acceleration otherwise).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpatialMotion<T> {
    /// Angular component (rad/s or rad/s²).
    pub angular: Vec3<T>,
    /// Linear component (m/s or m/s²).
    pub linear: Vec3<T>,
}

impl<T: Real> SpatialMotion<T> {
    /// Create from angular and linear parts.
    #[must_use]
    pub const fn new(angular: Vec3<T>, linear: Vec3<T>) -> Self {
        Self { angular, linear }
    }

    /// Zero motion.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(Vec3::zero(), Vec3::zero())
    }
}

/// Torque and force acting on a frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SpatialForce<T> {
    /// Torque component (N·m).
    pub torque: Vec3<T>,
    /// Force component (N).
    pub force: Vec3<T>,
}

impl<T: Real> SpatialForce<T> {
    /// Create from torque and force parts.
    #[must_use]
    pub const fn new(torque: Vec3<T>, force: Vec3<T>) -> Self {
        Self { torque, force }
    }

    /// Zero wrench.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(Vec3::zero(), Vec3::zero())
    }

    /// Component-wise sum.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        Self::new(self.torque + other.torque, self.force + other.force)
    }

    /// Component-wise difference.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        Self::new(self.torque - other.torque, self.force - other.force)
    }
}

/// Orientation (XYZ Euler angles) and position of a frame in the origin
/// frame.
///
/// Used for both the base-link pose and the CoM pose; the two are related
/// by the rotated base→CoM offset.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EulerPose<T> {
    /// Intrinsic XYZ Euler angles (rad).
    pub orientation: Vec3<T>,
    /// Position in the origin frame (m).
    pub position: Vec3<T>,
}

impl<T: Real> EulerPose<T> {
    /// Create from orientation and position.
    #[must_use]
    pub const fn new(orientation: Vec3<T>, position: Vec3<T>) -> Self {
        Self {
            orientation,
            position,
        }
    }
}

/// The full 12-dimensional centroidal state.
///
/// # Example
///
/// ```
/// use stride_types::CentroidalState;
///
/// let state = CentroidalState::<f64>::zero();
/// let x = state.to_vector();
/// assert_eq!(x, CentroidalState::from_vector(&x).to_vector());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CentroidalState<T> {
    /// Base/CoM orientation as intrinsic XYZ Euler angles (rad).
    pub orientation: Vec3<T>,
    /// CoM position in the origin frame (m).
    pub position: Vec3<T>,
    /// Angular velocity in the CoM frame (rad/s).
    pub angular_velocity: Vec3<T>,
    /// Linear velocity in the CoM frame (m/s).
    pub linear_velocity: Vec3<T>,
}

impl<T: Real> CentroidalState<T> {
    /// Create a state from its four 3-vector blocks.
    #[must_use]
    pub const fn new(
        orientation: Vec3<T>,
        position: Vec3<T>,
        angular_velocity: Vec3<T>,
        linear_velocity: Vec3<T>,
    ) -> Self {
        Self {
            orientation,
            position,
            angular_velocity,
            linear_velocity,
        }
    }

    /// The state at the origin, level and at rest.
    #[must_use]
    pub fn zero() -> Self {
        Self::new(Vec3::zero(), Vec3::zero(), Vec3::zero(), Vec3::zero())
    }

    /// The CoM pose block.
    #[must_use]
    pub fn pose(&self) -> EulerPose<T> {
        EulerPose::new(self.orientation, self.position)
    }

    /// The CoM-frame twist block.
    #[must_use]
    pub fn twist(&self) -> SpatialMotion<T> {
        SpatialMotion::new(self.angular_velocity, self.linear_velocity)
    }

    /// Flatten to `[orientation, position, angular velocity, linear
    /// velocity]`.
    #[must_use]
    pub fn to_vector(&self) -> SVector<T, STATE_DIM> {
        SVector::from([
            self.orientation.x,
            self.orientation.y,
            self.orientation.z,
            self.position.x,
            self.position.y,
            self.position.z,
            self.angular_velocity.x,
            self.angular_velocity.y,
            self.angular_velocity.z,
            self.linear_velocity.x,
            self.linear_velocity.y,
            self.linear_velocity.z,
        ])
    }

    /// Rebuild from the flat layout produced by [`Self::to_vector`].
    #[must_use]
    pub fn from_vector(x: &SVector<T, STATE_DIM>) -> Self {
        Self::new(
            Vec3::new(x[0], x[1], x[2]),
            Vec3::new(x[3], x[4], x[5]),
            Vec3::new(x[6], x[7], x[8]),
            Vec3::new(x[9], x[10], x[11]),
        )
    }
}

impl CentroidalState<f64> {
    /// Check that no component is `NaN` or infinite.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.to_vector().iter().all(|x| x.is_finite())
    }
}

/// Time derivative of a [`CentroidalState`]: orientation rate, origin-frame
/// CoM velocity, and CoM-frame acceleration.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CentroidalStateDerivative<T> {
    /// Euler angle rates (rad/s).
    pub orientation_rate: Vec3<T>,
    /// CoM velocity in the origin frame (m/s).
    pub position_rate: Vec3<T>,
    /// Angular and linear acceleration in the CoM frame.
    pub acceleration: SpatialMotion<T>,
}

impl<T: Real> CentroidalStateDerivative<T> {
    /// Flatten to the same layout as [`CentroidalState::to_vector`].
    #[must_use]
    pub fn to_vector(&self) -> SVector<T, STATE_DIM> {
        SVector::from([
            self.orientation_rate.x,
            self.orientation_rate.y,
            self.orientation_rate.z,
            self.position_rate.x,
            self.position_rate.y,
            self.position_rate.z,
            self.acceleration.angular.x,
            self.acceleration.angular.y,
            self.acceleration.angular.z,
            self.acceleration.linear.x,
            self.acceleration.linear.y,
            self.acceleration.linear.z,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn vector_round_trip() {
        let state = CentroidalState::new(
            Vec3::new(0.1, -0.2, 0.3),
            Vec3::new(1.0, 2.0, 0.5),
            Vec3::new(0.0, 0.4, -0.1),
            Vec3::new(0.7, 0.0, -0.3),
        );
        let rebuilt = CentroidalState::from_vector(&state.to_vector());
        assert_eq!(state, rebuilt);
    }

    #[test]
    fn vector_layout_is_orientation_position_twist() {
        let mut state = CentroidalState::<f64>::zero();
        state.orientation.z = 1.0;
        state.position.x = 2.0;
        state.angular_velocity.y = 3.0;
        state.linear_velocity.z = 4.0;

        let x = state.to_vector();
        assert_relative_eq!(x[2], 1.0);
        assert_relative_eq!(x[3], 2.0);
        assert_relative_eq!(x[7], 3.0);
        assert_relative_eq!(x[11], 4.0);
    }

    #[test]
    fn finite_check_catches_nan() {
        let mut state = CentroidalState::<f64>::zero();
        assert!(state.is_finite());
        state.linear_velocity.x = f64::NAN;
        assert!(!state.is_finite());
    }
}
