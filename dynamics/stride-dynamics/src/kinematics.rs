//! The kinematics interface consumed by the centroidal dynamics.

use nalgebra::Vector3;
use stride_autodiff::{Real, Vec3};
use stride_types::{JointConfiguration, NUM_FEET};

/// Forward kinematics as the centroidal dynamics consumes it.
///
/// Implementations map a joint posture to per-foot positions in the base
/// frame. The full joint-space model (analytic FK, Jacobians, link
/// geometry) lives outside this workspace; dynamics only injects this
/// narrow capability and derives the contact coupling from it.
pub trait KinematicsModel<T: Real> {
    /// Position of foot `foot` relative to the base link, in the base
    /// frame.
    fn foot_position_base_frame(&self, foot: usize, q: &JointConfiguration<T>) -> Vec3<T>;
}

/// The simplest conforming kinematics: one fixed base-frame foothold per
/// foot, independent of posture.
///
/// Useful for tests, demos, and as a stand-in while a real kinematics
/// model is wired up.
#[derive(Debug, Clone, PartialEq)]
pub struct FixedFootholds {
    positions: [Vector3<f64>; NUM_FEET],
}

impl FixedFootholds {
    /// Create from one base-frame position per foot.
    #[must_use]
    pub const fn new(positions: [Vector3<f64>; NUM_FEET]) -> Self {
        Self { positions }
    }

    /// Rectangular stance: feet at `(±half_length, ±half_width, height)`
    /// in foot order (left-front, right-front, left-hind, right-hind).
    #[must_use]
    pub fn rectangular(half_length: f64, half_width: f64, height: f64) -> Self {
        Self::new([
            Vector3::new(half_length, half_width, height),
            Vector3::new(half_length, -half_width, height),
            Vector3::new(-half_length, half_width, height),
            Vector3::new(-half_length, -half_width, height),
        ])
    }

    /// The configured foothold for foot `foot`.
    #[must_use]
    pub fn foothold(&self, foot: usize) -> Vector3<f64> {
        self.positions[foot]
    }
}

impl<T: Real> KinematicsModel<T> for FixedFootholds {
    fn foot_position_base_frame(&self, foot: usize, _q: &JointConfiguration<T>) -> Vec3<T> {
        Vec3::lift(&self.positions[foot])
    }
}
