//! Fixed-step numerical integration over [`FlowMap`]s.
//!
//! Two explicit methods with the usual accuracy/cost trade-off:
//!
//! - **Explicit Euler**: one derivative evaluation per step
//! - **RK4**: four evaluations, fourth-order accuracy
//!
//! The integrators are stateless associated functions; all state lives in
//! the caller and the flow map, so a flow map can be hot-swapped between
//! steps without losing anything.

use nalgebra::SVector;

use crate::flow_map::FlowMap;

/// A single-step explicit integration method.
pub trait FixedStepIntegrator {
    /// Advance `x` from `t` to `t + dt`.
    fn step<F: FlowMap<D>, const D: usize>(
        flow: &mut F,
        t: f64,
        x: &SVector<f64, D>,
        dt: f64,
    ) -> SVector<f64, D>;
}

/// First-order explicit Euler:
///
/// ```text
/// x(t+dt) = x(t) + f(t, x) * dt
/// ```
#[derive(Debug)]
pub struct ExplicitEuler;

impl FixedStepIntegrator for ExplicitEuler {
    fn step<F: FlowMap<D>, const D: usize>(
        flow: &mut F,
        t: f64,
        x: &SVector<f64, D>,
        dt: f64,
    ) -> SVector<f64, D> {
        x + flow.flow_map(t, x) * dt
    }
}

/// Classic fourth-order Runge-Kutta with the standard Butcher tableau.
#[derive(Debug)]
pub struct RungeKutta4;

impl FixedStepIntegrator for RungeKutta4 {
    fn step<F: FlowMap<D>, const D: usize>(
        flow: &mut F,
        t: f64,
        x: &SVector<f64, D>,
        dt: f64,
    ) -> SVector<f64, D> {
        let half = 0.5 * dt;
        let k1 = flow.flow_map(t, x);
        let k2 = flow.flow_map(t + half, &(x + k1 * half));
        let k3 = flow.flow_map(t + half, &(x + k2 * half));
        let k4 = flow.flow_map(t + dt, &(x + k3 * dt));
        x + (k1 + k2 * 2.0 + k3 * 2.0 + k4) * (dt / 6.0)
    }
}

/// Integrate over a fixed horizon, returning the trajectory including the
/// initial state.
pub fn rollout<I, F, const D: usize>(
    flow: &mut F,
    t0: f64,
    x0: SVector<f64, D>,
    dt: f64,
    steps: usize,
) -> Vec<(f64, SVector<f64, D>)>
where
    I: FixedStepIntegrator,
    F: FlowMap<D>,
{
    let mut trajectory = Vec::with_capacity(steps + 1);
    trajectory.push((t0, x0));
    let mut x = x0;
    for k in 0..steps {
        let t = t0 + dt * k as f64;
        x = I::step(flow, t, &x, dt);
        trajectory.push((t + dt, x));
    }
    trajectory
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::flow_map::FlowMapFn;
    use approx::assert_relative_eq;

    #[test]
    fn euler_constant_velocity() {
        let mut flow = FlowMapFn::<2>::new(|_t, x| SVector::<f64, 2>::new(x[1], 0.0));
        let x0 = SVector::<f64, 2>::new(0.0, 1.0);
        let x1 = ExplicitEuler::step(&mut flow, 0.0, &x0, 0.5);
        assert_relative_eq!(x1[0], 0.5, epsilon = 1e-15);
        assert_relative_eq!(x1[1], 1.0, epsilon = 1e-15);
    }

    #[test]
    fn rk4_is_exact_for_constant_acceleration() {
        // [position, velocity] under unit acceleration.
        let mut flow = FlowMapFn::<2>::new(|_t, x| SVector::<f64, 2>::new(x[1], 1.0));
        let x0 = SVector::<f64, 2>::new(0.0, 0.0);
        let x1 = RungeKutta4::step(&mut flow, 0.0, &x0, 2.0);
        // x = t²/2, v = t
        assert_relative_eq!(x1[0], 2.0, epsilon = 1e-12);
        assert_relative_eq!(x1[1], 2.0, epsilon = 1e-12);
    }

    #[test]
    fn rk4_tracks_exponential_decay() {
        let mut flow = FlowMapFn::<1>::new(|_t, x| -x);
        let x = rollout::<RungeKutta4, _, 1>(
            &mut flow,
            0.0,
            SVector::<f64, 1>::new(1.0),
            0.01,
            100,
        );
        let (t_end, x_end) = x[x.len() - 1];
        assert_relative_eq!(t_end, 1.0, epsilon = 1e-12);
        assert_relative_eq!(x_end[0], (-1.0_f64).exp(), epsilon = 1e-9);
    }

    #[test]
    fn rollout_includes_initial_state() {
        let mut flow = FlowMapFn::<1>::new(|_t, _x| SVector::<f64, 1>::new(1.0));
        let traj = rollout::<ExplicitEuler, _, 1>(
            &mut flow,
            2.0,
            SVector::<f64, 1>::new(5.0),
            0.1,
            3,
        );
        assert_eq!(traj.len(), 4);
        assert_eq!(traj[0], (2.0, SVector::<f64, 1>::new(5.0)));
    }

    #[test]
    fn rk4_beats_euler_on_the_oscillator() {
        let spring = |_t: f64, x: &SVector<f64, 2>| SVector::<f64, 2>::new(x[1], -x[0]);
        let mut euler_flow = FlowMapFn::<2>::new(spring);
        let mut rk4_flow = FlowMapFn::<2>::new(spring);

        let x0 = SVector::<f64, 2>::new(1.0, 0.0);
        let mut xe = x0;
        let mut xr = x0;
        let dt = 0.05;
        for k in 0..200 {
            let t = dt * f64::from(k);
            xe = ExplicitEuler::step(&mut euler_flow, t, &xe, dt);
            xr = RungeKutta4::step(&mut rk4_flow, t, &xr, dt);
        }

        let exact = (10.0_f64).cos();
        assert!((xr[0] - exact).abs() < 1e-5);
        assert!((xr[0] - exact).abs() < (xe[0] - exact).abs() * 1e-2);
    }
}
