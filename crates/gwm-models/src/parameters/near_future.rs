//! Near-future warming parameters
//!
//! Parameters for the "business as usual" and "world without us" CO2
//! scenarios, including aerosol masking.

use gwm_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for the CO2/aerosol warming scenarios.
///
/// CO2 grows exponentially above its pre-industrial value:
///
/// $$C_{t+\Delta t} = C_0 + (C_t - C_0)(1 + r)^{\Delta t}$$
///
/// Radiative forcing is logarithmic in concentration and the transient
/// temperature relaxes towards the equilibrium temperature with timescale
/// `time_response`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NearFutureParameters {
    /// Pre-industrial (equilibrium) CO2 concentration (ppm).
    /// Default: 280.0
    pub co2_equilibrium: FloatValue,

    /// CO2 concentration in the first year (ppm).
    /// Default: 290.0
    pub co2_initial: FloatValue,

    /// Exponential growth rate of the CO2 excess (1/yr).
    /// Default: 0.0225
    pub co2_growth_rate: FloatValue,

    /// Relaxation timescale of transient temperature (yr).
    /// Default: 20
    pub time_response: FloatValue,

    /// Radiative forcing for a doubling of CO2 ($\text{W/m}^2$).
    /// Default: 4.0
    pub rf_2xco2: FloatValue,

    /// First simulated year.
    /// Default: 1900
    pub start_year: i32,

    /// Last simulated year (inclusive).
    /// Default: 2100
    pub end_year: i32,

    /// Time step (yr).
    /// Default: 5
    pub time_step: i32,

    /// Equilibrium warming for doubled CO2 (K).
    /// Default: 3.0
    pub climate_sensitivity_2x: FloatValue,

    /// Aerosol masking in the reference year ($\text{W/m}^2$).
    /// Default: -0.75
    pub aerosol_forcing_now: FloatValue,

    /// Year in which the aerosol masking equals `aerosol_forcing_now`.
    /// Default: 2015
    pub reference_year: i32,

    /// Observed transient warming in the reference year (K).
    /// Default: 0.8
    pub target_temperature: FloatValue,

    /// CO2 at which emissions stop in the "world without us" (ppm).
    /// Default: 400
    pub wwu_threshold: FloatValue,

    /// Concentration CO2 relaxes to once emissions stop (ppm).
    /// Default: 340
    pub co2_relaxation_target: FloatValue,

    /// Timescale of the CO2 relaxation (yr).
    /// Default: 100
    pub co2_relaxation_timescale: FloatValue,
}

impl Default for NearFutureParameters {
    fn default() -> Self {
        Self {
            co2_equilibrium: 280.0,
            co2_initial: 290.0,
            co2_growth_rate: 0.0225,
            time_response: 20.0,
            rf_2xco2: 4.0,
            start_year: 1900,
            end_year: 2100,
            time_step: 5,
            climate_sensitivity_2x: 3.0,
            aerosol_forcing_now: -0.75,
            reference_year: 2015,
            target_temperature: 0.8,
            wwu_threshold: 400.0,
            co2_relaxation_target: 340.0,
            co2_relaxation_timescale: 100.0,
        }
    }
}

impl NearFutureParameters {
    /// Warming per unit forcing ($\text{K m}^2\text{/W}$) for a given
    /// sensitivity per doubling of CO2.
    pub fn sensitivity_per_wm2(&self, climate_sensitivity_2x: FloatValue) -> FloatValue {
        climate_sensitivity_2x / self.rf_2xco2
    }

    /// Simulated years, from `start_year` to `end_year` inclusive.
    pub fn years(&self) -> Vec<i32> {
        if self.time_step <= 0 {
            return Vec::new();
        }
        (self.start_year..=self.end_year)
            .step_by(self.time_step as usize)
            .collect()
    }
}
