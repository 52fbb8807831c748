//! Centroidal rigid-body dynamics for legged robots.
//!
//! This crate models a legged robot's trunk in centroidal coordinates:
//!
//! - [`CentroidalModel`] - cached mass/inertia/CoM-offset and exact frame
//!   transport between the base link and the CoM
//! - [`CentroidalDynamics`] - the switched state derivative under per-foot
//!   contact forces, bundled with the M / M⁻¹ / C / G linearization terms
//! - [`KinematicsModel`] - the injected foot-position interface
//! - [`FlowMapFn`] + fixed-step integrators - generic integration of any
//!   state-derivative function
//!
//! All formulas are generic over the [`stride_autodiff::Real`] scalar, so
//! the exact same code runs in plain `f64` for simulation and with
//! [`stride_autodiff::Jet`] dual numbers when an optimizer needs
//! derivatives of the dynamics.
//!
//! # Example
//!
//! ```
//! use nalgebra::{Matrix3, Vector3};
//! use stride_dynamics::{CentroidalDynamics, CentroidalModel, FixedFootholds, StepData};
//! use stride_types::{CentroidalState, ContactForces, GravityConfig, RobotInertialInfo};
//!
//! let info = RobotInertialInfo::new(
//!     52.0,
//!     Matrix3::from_diagonal(&Vector3::new(2.1, 4.0, 4.4)),
//!     Vector3::new(0.0, 0.0, 0.04),
//! );
//! let model = CentroidalModel::<f64>::new(info)?;
//! let kinematics = FixedFootholds::rectangular(0.36, 0.23, -0.5);
//! let dynamics = CentroidalDynamics::new(model, kinematics, GravityConfig::earth())?;
//!
//! // Standing still with no contact force: the trunk falls.
//! let eval = dynamics.evaluate(
//!     0.0,
//!     &CentroidalState::zero(),
//!     &ContactForces::zero(),
//!     &StepData::default(),
//! );
//! assert!(eval.derivative.acceleration.linear.z < 0.0);
//! # Ok::<(), stride_types::DynamicsError>(())
//! ```

#![deny(clippy::unwrap_used, clippy::expect_used)]
#![warn(missing_docs)]

mod dynamics;
mod flow_map;
mod integrators;
mod kinematics;
mod model;
pub mod rotations;

pub use dynamics::{CentroidalDynamics, ControlledDynamics, DynamicsEvaluation, StepData};
pub use flow_map::{FlowMap, FlowMapFn};
pub use integrators::{rollout, ExplicitEuler, FixedStepIntegrator, RungeKutta4};
pub use kinematics::{FixedFootholds, KinematicsModel};
pub use model::{CentroidalModel, CentroidalProperties};
