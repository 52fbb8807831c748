//! Joint-space configuration of the four legs.

use nalgebra::SVector;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use stride_autodiff::{Real, Vec3};

use crate::{DynamicsError, Result, NUM_FEET};

/// Joints per leg (hip abduction, hip flexion, knee flexion).
pub const JOINTS_PER_LEG: usize = 3;

/// Total actuated joints.
pub const NUM_JOINTS: usize = NUM_FEET * JOINTS_PER_LEG;

/// Joint angles for all four legs, three joints per leg, in foot order.
///
/// The same shape carries joint velocities; see [`JointVelocities`].
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct JointConfiguration<T> {
    legs: [Vec3<T>; NUM_FEET],
}

/// Joint velocities share the per-leg layout of [`JointConfiguration`].
pub type JointVelocities<T> = JointConfiguration<T>;

impl<T: Real> JointConfiguration<T> {
    /// Create from one 3-joint block per leg.
    #[must_use]
    pub const fn new(legs: [Vec3<T>; NUM_FEET]) -> Self {
        Self { legs }
    }

    /// All joints at zero.
    #[must_use]
    pub fn zero() -> Self {
        Self::new([Vec3::zero(); NUM_FEET])
    }

    /// Create from a flat slice of exactly one entry per joint.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicsError::JointCountMismatch`] if `joints.len() != 12`.
    pub fn from_slice(joints: &[T]) -> Result<Self> {
        if joints.len() != NUM_JOINTS {
            return Err(DynamicsError::JointCountMismatch {
                expected: NUM_JOINTS,
                actual: joints.len(),
            });
        }
        let leg = |i: usize| {
            Vec3::new(
                joints[JOINTS_PER_LEG * i],
                joints[JOINTS_PER_LEG * i + 1],
                joints[JOINTS_PER_LEG * i + 2],
            )
        };
        Ok(Self::new([leg(0), leg(1), leg(2), leg(3)]))
    }

    /// The 3-joint block of leg `leg`.
    #[must_use]
    pub fn leg(&self, leg: usize) -> Vec3<T> {
        self.legs[leg]
    }

    /// Flatten to one entry per joint, leg-major.
    #[must_use]
    pub fn to_vector(&self) -> SVector<T, NUM_JOINTS> {
        SVector::from([
            self.legs[0].x,
            self.legs[0].y,
            self.legs[0].z,
            self.legs[1].x,
            self.legs[1].y,
            self.legs[1].z,
            self.legs[2].x,
            self.legs[2].y,
            self.legs[2].z,
            self.legs[3].x,
            self.legs[3].y,
            self.legs[3].z,
        ])
    }
}
