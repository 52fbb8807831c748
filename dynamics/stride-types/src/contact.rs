//! Stance flags and per-foot contact forces.

use nalgebra::SVector;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use stride_autodiff::{Real, Vec3};

use crate::{DynamicsError, Result};

/// Number of feet. Foot order is left-front, right-front, left-hind,
/// right-hind throughout the workspace.
pub const NUM_FEET: usize = 4;

/// Dimension of the flat contact-force input vector.
pub const INPUT_DIM: usize = 3 * NUM_FEET;

/// Which feet are in ground contact.
///
/// A stance foot couples its contact force into the centroidal dynamics; a
/// swing foot contributes nothing. This is the switched part of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct StanceFlags {
    flags: [bool; NUM_FEET],
}

impl StanceFlags {
    /// Create from one flag per foot.
    #[must_use]
    pub const fn new(flags: [bool; NUM_FEET]) -> Self {
        Self { flags }
    }

    /// All four feet in contact.
    #[must_use]
    pub const fn all_stance() -> Self {
        Self::new([true; NUM_FEET])
    }

    /// No foot in contact (full flight).
    #[must_use]
    pub const fn all_swing() -> Self {
        Self::new([false; NUM_FEET])
    }

    /// Create from a slice, rejecting anything but exactly one flag per
    /// foot.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicsError::FootCountMismatch`] if `flags.len() != 4`;
    /// wrong cardinality is never truncated or padded.
    pub fn from_slice(flags: &[bool]) -> Result<Self> {
        let flags: [bool; NUM_FEET] =
            flags
                .try_into()
                .map_err(|_| DynamicsError::FootCountMismatch {
                    expected: NUM_FEET,
                    actual: flags.len(),
                })?;
        Ok(Self::new(flags))
    }

    /// Whether foot `foot` is in contact.
    #[must_use]
    pub fn is_stance(&self, foot: usize) -> bool {
        self.flags[foot]
    }

    /// Number of feet in contact.
    #[must_use]
    pub fn num_stance(&self) -> usize {
        self.flags.iter().filter(|&&s| s).count()
    }

    /// Iterate over the per-foot flags in foot order.
    pub fn iter(&self) -> impl Iterator<Item = bool> + '_ {
        self.flags.iter().copied()
    }
}

impl Default for StanceFlags {
    fn default() -> Self {
        Self::all_stance()
    }
}

/// One contact force per foot, expressed in the CoM frame.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ContactForces<T> {
    forces: [Vec3<T>; NUM_FEET],
}

impl<T: Real> ContactForces<T> {
    /// Create from one force per foot.
    #[must_use]
    pub const fn new(forces: [Vec3<T>; NUM_FEET]) -> Self {
        Self { forces }
    }

    /// Zero force on every foot.
    #[must_use]
    pub fn zero() -> Self {
        Self::new([Vec3::zero(); NUM_FEET])
    }

    /// Create from a slice, rejecting anything but exactly one force per
    /// foot.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicsError::FootCountMismatch`] if `forces.len() != 4`.
    pub fn from_slice(forces: &[Vec3<T>]) -> Result<Self> {
        let forces: [Vec3<T>; NUM_FEET] =
            forces
                .try_into()
                .map_err(|_| DynamicsError::FootCountMismatch {
                    expected: NUM_FEET,
                    actual: forces.len(),
                })?;
        Ok(Self::new(forces))
    }

    /// Force on foot `foot`.
    #[must_use]
    pub fn foot(&self, foot: usize) -> Vec3<T> {
        self.forces[foot]
    }

    /// Flatten to `[f0, f1, f2, f3]`, three components per foot.
    #[must_use]
    pub fn to_vector(&self) -> SVector<T, INPUT_DIM> {
        SVector::from([
            self.forces[0].x,
            self.forces[0].y,
            self.forces[0].z,
            self.forces[1].x,
            self.forces[1].y,
            self.forces[1].z,
            self.forces[2].x,
            self.forces[2].y,
            self.forces[2].z,
            self.forces[3].x,
            self.forces[3].y,
            self.forces[3].z,
        ])
    }

    /// Rebuild from the flat layout produced by [`Self::to_vector`].
    #[must_use]
    pub fn from_vector(u: &SVector<T, INPUT_DIM>) -> Self {
        Self::new([
            Vec3::new(u[0], u[1], u[2]),
            Vec3::new(u[3], u[4], u[5]),
            Vec3::new(u[6], u[7], u[8]),
            Vec3::new(u[9], u[10], u[11]),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stance_counts() {
        let stance = StanceFlags::new([true, false, true, false]);
        assert_eq!(stance.num_stance(), 2);
        assert!(stance.is_stance(0));
        assert!(!stance.is_stance(1));
        assert_eq!(StanceFlags::all_swing().num_stance(), 0);
        assert_eq!(StanceFlags::all_stance().num_stance(), 4);
    }

    #[test]
    fn stance_slice_cardinality_is_enforced() {
        assert!(StanceFlags::from_slice(&[true, true, false, false]).is_ok());

        let err = StanceFlags::from_slice(&[true, true, false]);
        assert_eq!(
            err,
            Err(DynamicsError::FootCountMismatch {
                expected: 4,
                actual: 3
            })
        );

        assert!(StanceFlags::from_slice(&[true; 5]).is_err());
    }

    #[test]
    fn force_slice_cardinality_is_enforced() {
        let f = Vec3::new(0.0, 0.0, 1.0);
        assert!(ContactForces::from_slice(&[f, f, f, f]).is_ok());
        assert!(ContactForces::from_slice(&[f, f]).is_err());
        assert!(ContactForces::from_slice(&[f; 6]).is_err());
    }

    #[test]
    fn force_vector_round_trip() {
        let forces = ContactForces::new([
            Vec3::new(1.0, 2.0, 3.0),
            Vec3::new(-1.0, 0.0, 4.0),
            Vec3::new(0.5, -0.5, 9.0),
            Vec3::new(0.0, 0.0, 0.0),
        ]);
        let rebuilt = ContactForces::from_vector(&forces.to_vector());
        assert_eq!(forces, rebuilt);
    }
}
