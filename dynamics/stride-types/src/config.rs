//! Configuration values for dynamics construction.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use nalgebra::Vector3;

use crate::{DynamicsError, Result};

/// Gravity as an explicit configuration value.
///
/// Dynamics components take this at construction; there is no implicit
/// global gravity constant anywhere in the workspace.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GravityConfig {
    /// Gravitational acceleration magnitude (m/s²), strictly positive.
    pub acceleration: f64,
}

impl Default for GravityConfig {
    fn default() -> Self {
        Self::earth()
    }
}

impl GravityConfig {
    /// Standard Earth gravity, 9.81 m/s².
    #[must_use]
    pub const fn earth() -> Self {
        Self {
            acceleration: 9.81,
        }
    }

    /// Custom gravity magnitude.
    #[must_use]
    pub const fn custom(acceleration: f64) -> Self {
        Self { acceleration }
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`DynamicsError::NonPositiveGravity`] unless the magnitude
    /// is finite and strictly positive. There is no fallback value; an
    /// invalid gravity is a construction failure.
    pub fn validate(&self) -> Result<()> {
        if !self.acceleration.is_finite() || self.acceleration <= 0.0 {
            return Err(DynamicsError::NonPositiveGravity(self.acceleration));
        }
        Ok(())
    }

    /// The gravity vector in the origin frame: `(0, 0, -acceleration)`.
    #[must_use]
    pub fn origin_frame_vector(&self) -> Vector3<f64> {
        Vector3::new(0.0, 0.0, -self.acceleration)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn earth_is_valid() {
        assert!(GravityConfig::earth().validate().is_ok());
        assert_eq!(GravityConfig::default(), GravityConfig::earth());
    }

    #[test]
    fn non_positive_gravity_is_rejected() {
        assert_eq!(
            GravityConfig::custom(-1.0).validate(),
            Err(DynamicsError::NonPositiveGravity(-1.0))
        );
        assert!(GravityConfig::custom(0.0).validate().is_err());
        assert!(GravityConfig::custom(f64::NAN).validate().is_err());
    }

    #[test]
    fn origin_vector_points_down() {
        let g = GravityConfig::custom(9.81).origin_frame_vector();
        assert_eq!(g, Vector3::new(0.0, 0.0, -9.81));
    }
}
