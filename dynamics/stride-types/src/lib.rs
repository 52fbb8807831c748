//! Core data types for centroidal legged-robot dynamics.
//!
//! This crate provides the pure data vocabulary shared by the dynamics
//! components and their consumers:
//!
//! - [`CentroidalState`] - the 12-dimensional trunk state
//! - [`ContactForces`] / [`StanceFlags`] - per-foot contact input
//! - [`JointConfiguration`] - leg joint angles and velocities
//! - [`SpatialInertia`] - the block-form 6×6 centroidal inertia
//! - [`GravityConfig`] - gravity as an explicit configuration value
//! - [`DynamicsError`] - construction-time validation failures
//!
//! # Design Philosophy
//!
//! These types are **pure data** with conversions, no dynamics. Everything
//! is generic over the [`stride_autodiff::Real`] scalar so the same types
//! flow through plain `f64` simulation and dual-number differentiation.
//!
//! # Coordinate Conventions
//!
//! - Origin frame: fixed world frame, Z up, right-handed.
//! - CoM frame: centered at the CoM, axes parallel to the base link.
//! - Orientation: intrinsic XYZ Euler angles, shared by every consumer.

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]

mod config;
mod contact;
mod error;
mod inertia;
mod joint;
mod state;

pub use config::GravityConfig;
pub use contact::{ContactForces, StanceFlags, INPUT_DIM, NUM_FEET};
pub use error::{DynamicsError, Result};
pub use inertia::{RobotInertialInfo, SpatialInertia, SpatialInertiaInverse};
pub use joint::{JointConfiguration, JointVelocities, JOINTS_PER_LEG, NUM_JOINTS};
pub use state::{
    CentroidalState, CentroidalStateDerivative, EulerPose, SpatialForce, SpatialMotion, STATE_DIM,
};

// Re-export math types for convenience
pub use nalgebra::{Matrix3, Matrix6, SVector, Vector3};
pub use stride_autodiff::{Jet, Mat3, Real, Vec3};
