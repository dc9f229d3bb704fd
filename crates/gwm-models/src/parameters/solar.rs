//! Solar irradiance parameters

use crate::solar::Planet;
use gwm_core::constants::SOLAR_CONSTANT_1AU;
use gwm_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for the top of atmosphere irradiance calculations.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SolarParameters {
    /// Orbit and axial tilt of the planet.
    /// Default: Earth
    pub planet: Planet,

    /// Beam irradiance at 1 AU ($\text{W/m}^2$).
    /// Default: 1371
    pub solar_constant: FloatValue,

    /// Latitude used for surface irradiance (degrees north).
    /// Default: 22.3
    pub latitude: FloatValue,

    /// Length of a solar day in local hours.
    /// Default: 24
    pub hours_per_day: FloatValue,
}

impl Default for SolarParameters {
    fn default() -> Self {
        Self {
            planet: Planet::earth(),
            solar_constant: SOLAR_CONSTANT_1AU,
            latitude: 22.3,
            hours_per_day: 24.0,
        }
    }
}
