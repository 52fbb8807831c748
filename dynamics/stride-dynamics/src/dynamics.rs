//! Centroidal dynamics: the switched state derivative under contact
//! forces, plus the cached linearization quantities.

use nalgebra::SVector;
use stride_autodiff::{Real, Vec3};
use stride_types::{
    CentroidalState, CentroidalStateDerivative, ContactForces, GravityConfig, JointConfiguration,
    JointVelocities, Result, SpatialForce, SpatialInertia, SpatialInertiaInverse, SpatialMotion,
    StanceFlags, INPUT_DIM, NUM_FEET, STATE_DIM,
};

use crate::kinematics::KinematicsModel;
use crate::model::CentroidalModel;
use crate::rotations::{euler_rate_transform, rotation_base_to_origin};

/// Narrow capability interface for a controlled system: time, state, and
/// input in, state derivative out.
///
/// One dynamics variant implements this directly; there is no class
/// hierarchy behind it.
pub trait ControlledDynamics<T: Real, const X: usize, const U: usize> {
    /// The state derivative at `(t, x, u)`.
    fn compute_derivative(&self, t: T, x: &SVector<T, X>, u: &SVector<T, U>) -> SVector<T, X>;
}

/// Per-step snapshot the dynamics needs besides state and input: which
/// feet are in stance, and the joint posture and velocities.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StepData<T> {
    /// Contact state per foot.
    pub stance: StanceFlags,
    /// Joint angles.
    pub joint_positions: JointConfiguration<T>,
    /// Joint velocities.
    pub joint_velocities: JointVelocities<T>,
}

impl<T: Real> StepData<T> {
    /// Create a snapshot.
    #[must_use]
    pub const fn new(
        stance: StanceFlags,
        joint_positions: JointConfiguration<T>,
        joint_velocities: JointVelocities<T>,
    ) -> Self {
        Self {
            stance,
            joint_positions,
            joint_velocities,
        }
    }
}

impl<T: Real> Default for StepData<T> {
    /// All feet in stance, joints at zero.
    fn default() -> Self {
        Self::new(
            StanceFlags::all_stance(),
            JointConfiguration::zero(),
            JointVelocities::zero(),
        )
    }
}

/// Everything one derivative evaluation produces: the state derivative and
/// the quantities an outer optimizer reads back for linearization.
///
/// Returned as a value object so consumers never depend on call ordering
/// to see consistent M / M⁻¹ / C / G.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DynamicsEvaluation<T> {
    /// The 12-dimensional state derivative.
    pub derivative: CentroidalStateDerivative<T>,
    /// Inertia matrix M (block form).
    pub inertia: SpatialInertia<T>,
    /// Closed-form block inverse M⁻¹.
    pub inertia_inverse: SpatialInertiaInverse<T>,
    /// Coriolis/centrifugal vector C.
    pub coriolis: SpatialForce<T>,
    /// Gravity wrench G in the CoM frame.
    pub gravity: SpatialForce<T>,
    /// Stance flags the evaluation used.
    pub stance: StanceFlags,
    /// Per-foot positions relative to the base link, base frame.
    pub feet_position_base_frame: [Vec3<T>; NUM_FEET],
}

/// Centroidal dynamics of a legged robot's trunk under per-foot contact
/// forces.
///
/// Owns a [`CentroidalModel`] and an injected [`KinematicsModel`]. Gravity
/// is an explicit construction parameter and is validated up front — a
/// dynamics value that exists is a valid one.
///
/// The primary API is the pure [`Self::evaluate`], which takes the
/// per-step [`StepData`] directly and returns a [`DynamicsEvaluation`]
/// bundle. For integrator loops, [`Self::set_step_data`] stores a snapshot
/// that the [`ControlledDynamics`] implementation then evaluates against;
/// the stored snapshot stays in effect until replaced.
#[derive(Debug, Clone)]
pub struct CentroidalDynamics<T: Real, K> {
    model: CentroidalModel<T>,
    kinematics: K,
    gravity_origin_frame: Vec3<T>,
    step: StepData<T>,
}

impl<T: Real, K: KinematicsModel<T>> CentroidalDynamics<T, K> {
    /// Build the dynamics from a model/kinematics pair and an explicit
    /// gravity configuration.
    ///
    /// # Errors
    ///
    /// Returns [`stride_types::DynamicsError::NonPositiveGravity`] unless
    /// the configured acceleration is finite and strictly positive. No
    /// default is ever substituted.
    pub fn new(model: CentroidalModel<T>, kinematics: K, gravity: GravityConfig) -> Result<Self> {
        gravity.validate()?;
        tracing::debug!(
            mass = model.info().mass,
            gravity = gravity.acceleration,
            "centroidal dynamics constructed"
        );
        Ok(Self {
            gravity_origin_frame: Vec3::lift(&gravity.origin_frame_vector()),
            model,
            kinematics,
            step: StepData::default(),
        })
    }

    /// The owned centroidal model.
    #[must_use]
    pub fn model(&self) -> &CentroidalModel<T> {
        &self.model
    }

    /// The injected kinematics model.
    #[must_use]
    pub fn kinematics(&self) -> &K {
        &self.kinematics
    }

    /// Store the per-step snapshot used by the [`ControlledDynamics`]
    /// path. Call before each integration step whose stance or posture
    /// changed.
    pub fn set_step_data(&mut self, step: StepData<T>) {
        self.step = step;
    }

    /// The currently stored per-step snapshot.
    #[must_use]
    pub fn step_data(&self) -> &StepData<T> {
        &self.step
    }

    /// Evaluate the centroidal derivative and linearization quantities at
    /// `(t, state, forces)` under the given per-step snapshot.
    ///
    /// The derivative is assembled as:
    ///
    /// 1. Euler angle rates from the CoM-frame angular velocity (singular
    ///    at ±90° pitch — see
    ///    [`crate::rotations::euler_rate_transform`]).
    /// 2. CoM position rate: the linear velocity rotated into the origin
    ///    frame.
    /// 3. M, M⁻¹ and dM/dt from the model.
    /// 4. C from the twist and joint velocities, G from the orientation
    ///    and the configured gravity.
    /// 5. The contact wrench `[r × f, f]` summed over stance feet only —
    ///    swing feet contribute nothing, which is the switched part of
    ///    the dynamics.
    /// 6. The CoM-frame acceleration from `M·a = Σ wrench − C − G`, via
    ///    the closed-form block inverse.
    ///
    /// The dynamics are time-invariant; `t` only exists so the signature
    /// matches the integrable interface.
    #[must_use]
    pub fn evaluate(
        &self,
        _t: T,
        state: &CentroidalState<T>,
        forces: &ContactForces<T>,
        step: &StepData<T>,
    ) -> DynamicsEvaluation<T> {
        let o_r_b = rotation_base_to_origin(&state.orientation);
        let omega = state.angular_velocity;

        let orientation_rate = euler_rate_transform(&state.orientation) * omega;
        let position_rate = o_r_b * state.linear_velocity;

        // Contact wrench about the CoM, stance feet only.
        let com_offset = self.model.com_position_base_frame();
        let mut feet = [Vec3::zero(); NUM_FEET];
        let mut contact_wrench = SpatialForce::zero();
        for foot in 0..NUM_FEET {
            feet[foot] = self
                .kinematics
                .foot_position_base_frame(foot, &step.joint_positions);
            if step.stance.is_stance(foot) {
                let lever = feet[foot] - com_offset;
                let force = forces.foot(foot);
                contact_wrench = contact_wrench.add(&SpatialForce::new(lever.cross(force), force));
            }
        }

        let inertia = self.model.com_inertia();
        let inertia_inverse = self.model.com_inertia_inverse();
        let inertia_rate = self
            .model
            .com_inertia_derivative(&step.joint_positions, &step.joint_velocities);

        let coriolis = SpatialForce::new(
            omega.cross(inertia.rotational * omega) + inertia_rate * omega,
            Vec3::zero(),
        );

        // Gravity in the CoM frame. The wrench G = [0, -m·Rᵀ·g] is what
        // linearization consumers read; the solve applies M⁻¹·G directly as
        // [0, Rᵀ·g] so no mass factor round-trips through the inverse.
        let gravity_accel = o_r_b.transpose() * self.gravity_origin_frame;
        let gravity = SpatialForce::new(Vec3::zero(), -(gravity_accel * inertia.mass));

        let unforced = inertia_inverse.apply(&contact_wrench.sub(&coriolis));
        let acceleration =
            SpatialMotion::new(unforced.angular, unforced.linear + gravity_accel);

        DynamicsEvaluation {
            derivative: CentroidalStateDerivative {
                orientation_rate,
                position_rate,
                acceleration,
            },
            inertia,
            inertia_inverse,
            coriolis,
            gravity,
            stance: step.stance,
            feet_position_base_frame: feet,
        }
    }
}

impl<T: Real, K: KinematicsModel<T>> ControlledDynamics<T, STATE_DIM, INPUT_DIM>
    for CentroidalDynamics<T, K>
{
    fn compute_derivative(
        &self,
        t: T,
        x: &SVector<T, STATE_DIM>,
        u: &SVector<T, INPUT_DIM>,
    ) -> SVector<T, STATE_DIM> {
        let state = CentroidalState::from_vector(x);
        let forces = ContactForces::from_vector(u);
        self.evaluate(t, &state, &forces, &self.step)
            .derivative
            .to_vector()
    }
}
