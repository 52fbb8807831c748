//! Uniform integrable interface over arbitrary state-derivative functions.

use nalgebra::SVector;

/// A flow map: computes a state's time derivative from time and state.
///
/// This is the interface the fixed-step integrators consume. Dynamics with
/// inputs get here by capturing their input (and per-step data) in a
/// closure wrapped by [`FlowMapFn`].
pub trait FlowMap<const D: usize> {
    /// The derivative `dx/dt` at `(t, x)`.
    fn flow_map(&mut self, t: f64, x: &SVector<f64, D>) -> SVector<f64, D>;
}

/// Adapts any derivative closure to the [`FlowMap`] interface.
///
/// The wrapped function can be replaced at any time with
/// [`Self::set_flow_map`] — hot-swapping the dynamics (for instance on a
/// contact-mode switch) without reconstructing the integration loop around
/// it. The integrators themselves are stateless, so nothing else is lost
/// in the swap.
///
/// # Example
///
/// ```
/// use nalgebra::SVector;
/// use stride_dynamics::{FlowMap, FlowMapFn};
///
/// // dx/dt = -x
/// let mut decay = FlowMapFn::<1>::new(|_t, x| -x);
/// let rate = decay.flow_map(0.0, &SVector::<f64, 1>::new(2.0));
/// assert_eq!(rate[0], -2.0);
///
/// // Swap in different dynamics; the adapter itself is unchanged.
/// decay.set_flow_map(|_t, x| x * 3.0);
/// let rate = decay.flow_map(0.0, &SVector::<f64, 1>::new(2.0));
/// assert_eq!(rate[0], 6.0);
/// ```
pub struct FlowMapFn<const D: usize> {
    flow_map: Box<dyn FnMut(f64, &SVector<f64, D>) -> SVector<f64, D>>,
}

impl<const D: usize> FlowMapFn<D> {
    /// Wrap a derivative function.
    pub fn new(flow_map: impl FnMut(f64, &SVector<f64, D>) -> SVector<f64, D> + 'static) -> Self {
        Self {
            flow_map: Box::new(flow_map),
        }
    }

    /// Replace the wrapped derivative function.
    pub fn set_flow_map(
        &mut self,
        flow_map: impl FnMut(f64, &SVector<f64, D>) -> SVector<f64, D> + 'static,
    ) {
        self.flow_map = Box::new(flow_map);
    }
}

impl<const D: usize> std::fmt::Debug for FlowMapFn<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FlowMapFn").field("dim", &D).finish()
    }
}

impl<const D: usize> FlowMap<D> for FlowMapFn<D> {
    fn flow_map(&mut self, t: f64, x: &SVector<f64, D>) -> SVector<f64, D> {
        (self.flow_map)(t, x)
    }
}
