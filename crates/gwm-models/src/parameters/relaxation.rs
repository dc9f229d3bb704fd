//! Albedo relaxation parameters

use gwm_core::solver::Convergence;
use gwm_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for iterating temperature and ice albedo to consistency.
///
/// The luminosity sweep runs from `from_l` to `to_l` (and back) in steps of
/// `step`, reusing the converged albedo from the previous luminosity.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RelaxationParameters {
    /// Emissivity (dimensionless).
    /// Default: 1.0
    pub epsilon: FloatValue,

    /// Lowest luminosity of the sweep ($\text{W/m}^2$).
    /// Default: 1150
    pub from_l: FloatValue,

    /// Highest luminosity of the sweep ($\text{W/m}^2$).
    /// Default: 1350
    pub to_l: FloatValue,

    /// Luminosity increment of the sweep ($\text{W/m}^2$).
    /// Default: 10
    pub step: FloatValue,

    /// Albedo used to start each sweep.
    /// Default: 0.15
    pub initial_albedo: FloatValue,

    /// Allowed change in albedo between iterations.
    /// Default: 1e-9
    pub tolerance: FloatValue,

    /// Iterations before giving up on a luminosity.
    /// Default: 10000
    pub max_iterations: usize,
}

impl Default for RelaxationParameters {
    fn default() -> Self {
        Self {
            epsilon: 1.0,
            from_l: 1150.0,
            to_l: 1350.0,
            step: 10.0,
            initial_albedo: 0.15,
            tolerance: 1e-9,
            max_iterations: 10_000,
        }
    }
}

impl RelaxationParameters {
    pub fn convergence(&self) -> Convergence {
        Convergence::new(self.tolerance, self.max_iterations)
    }
}
