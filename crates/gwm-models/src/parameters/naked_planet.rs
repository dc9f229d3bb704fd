//! Naked Planet Parameters
//!
//! Parameters for the time-dependent energy balance of a planet without an
//! atmosphere whose heat capacity is set by a layer of water.

use gwm_core::constants::{specific_heat_water, DENSITY_WATER};
use gwm_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for the naked planet energy balance model.
///
/// # Default Values
///
/// The defaults correspond to the Earth with a 4 km ocean, stepped a
/// century at a time from absolute zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NakedPlanetParameters {
    /// Solar constant ($\text{W/m}^2$).
    /// Default: 1350
    pub solar_constant: FloatValue,

    /// Planetary albedo (dimensionless).
    /// Default: 0.3
    pub albedo: FloatValue,

    /// Emissivity of the surface (dimensionless).
    /// Default: 1.0
    pub epsilon: FloatValue,

    /// Time step (yr). May be a fraction of a year.
    /// Default: 100
    pub time_step: FloatValue,

    /// Depth of the water layer (m).
    /// Default: 4000
    pub water_depth: FloatValue,

    /// Starting temperature (K).
    /// Default: 0
    pub initial_temperature: FloatValue,
}

impl Default for NakedPlanetParameters {
    fn default() -> Self {
        Self {
            solar_constant: 1350.0,
            albedo: 0.3,
            epsilon: 1.0,
            time_step: 100.0,
            water_depth: 4000.0,
            initial_temperature: 0.0,
        }
    }
}

impl NakedPlanetParameters {
    /// Heat capacity of a 1 $\text{m}^2$ water column ($\text{J m}^{-2}\text{ K}^{-1}$).
    pub fn heat_capacity(&self) -> FloatValue {
        let water_column = self.water_depth * DENSITY_WATER;
        water_column * specific_heat_water()
    }

    /// Absorbed solar flux averaged over the sphere ($\text{W/m}^2$).
    pub fn heat_flux_in(&self) -> FloatValue {
        self.solar_constant * (1.0 - self.albedo) / 4.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heat_capacity() {
        let params = NakedPlanetParameters::default();
        // 4000 m * 1000 kg/m^3 * 4184 J/(kg K)
        assert!((params.heat_capacity() - 1.6736e10).abs() < 1.0);
    }

    #[test]
    fn test_heat_flux_in() {
        let params = NakedPlanetParameters::default();
        assert!((params.heat_flux_in() - 236.25).abs() < 1e-10);
    }
}
