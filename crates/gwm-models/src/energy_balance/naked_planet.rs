//! Time-Stepping Naked Planet Model
//!
//! A planet starts at some initial temperature and warms (or cools) towards
//! radiative equilibrium. The heat capacity of the planet comes from a layer
//! of water; a thick layer takes longer to change temperature.
//!
//! Each step integrates the net flux over the time step:
//!
//! $$H_{n+1} = H_n + \left(\frac{L (1 - \alpha)}{4} - \epsilon \sigma T_n^4\right) \Delta t$$
//!
//! $$T_{n+1} = H_{n+1} / C$$

use crate::parameters::NakedPlanetParameters;
use gwm_core::constants::{SECONDS_PER_YEAR, STEFAN_BOLTZMANN};
use gwm_core::{FloatValue, Time, Timeseries};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Temperature at which outgoing and absorbed radiation balance (K).
///
/// $$T_{eq} = \left(\frac{L (1 - \alpha)}{4 \epsilon \sigma}\right)^{1/4}$$
pub fn equilibrium_temperature(
    solar_constant: FloatValue,
    albedo: FloatValue,
    epsilon: FloatValue,
) -> FloatValue {
    (solar_constant * (1.0 - albedo) / (4.0 * epsilon * STEFAN_BOLTZMANN)).powf(0.25)
}

/// Diagnostics for a single step of the model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NakedPlanetStep {
    /// Time at the start of the step (yr).
    pub time: Time,
    pub heat_flux_in: FloatValue,
    pub heat_flux_out: FloatValue,
    /// Heat gained over the step ($\text{J/m}^2$).
    pub heat_gain: FloatValue,
    /// Heat stored in the water column after the step ($\text{J/m}^2$).
    pub heat_stored: FloatValue,
    /// Temperature after the step (K).
    pub temperature: FloatValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NakedPlanet {
    parameters: NakedPlanetParameters,
    heat_capacity: FloatValue,
    heat_stored: FloatValue,
    temperature: FloatValue,
    time: Time,
}

impl NakedPlanet {
    pub fn new() -> Self {
        Self::from_parameters(NakedPlanetParameters::default())
    }

    pub fn from_parameters(parameters: NakedPlanetParameters) -> Self {
        let heat_capacity = parameters.heat_capacity();
        let temperature = parameters.initial_temperature;
        debug!(
            water_column = parameters.water_depth,
            heat_capacity, "Created naked planet"
        );
        Self {
            heat_stored: heat_capacity * temperature,
            parameters,
            heat_capacity,
            temperature,
            time: 0.0,
        }
    }

    pub fn parameters(&self) -> &NakedPlanetParameters {
        &self.parameters
    }

    pub fn temperature(&self) -> FloatValue {
        self.temperature
    }

    pub fn time(&self) -> Time {
        self.time
    }

    /// Radiated heat flux at the current temperature ($\text{W/m}^2$).
    pub fn heat_flux_out(&self) -> FloatValue {
        self.parameters.epsilon * STEFAN_BOLTZMANN * self.temperature.powi(4)
    }

    pub fn equilibrium_temperature(&self) -> FloatValue {
        equilibrium_temperature(
            self.parameters.solar_constant,
            self.parameters.albedo,
            self.parameters.epsilon,
        )
    }

    /// Advance by one time step.
    pub fn step(&mut self) -> NakedPlanetStep {
        let heat_flux_in = self.parameters.heat_flux_in();
        let heat_flux_out = self.heat_flux_out();
        let heat_flux_net = heat_flux_in - heat_flux_out;
        let heat_gain = heat_flux_net * self.parameters.time_step * SECONDS_PER_YEAR;

        let start = self.time;
        self.heat_stored += heat_gain;
        self.temperature = self.heat_stored / self.heat_capacity;
        self.time += self.parameters.time_step;

        let step = NakedPlanetStep {
            time: start,
            heat_flux_in,
            heat_flux_out,
            heat_gain,
            heat_stored: self.heat_stored,
            temperature: self.temperature,
        };
        debug!(
            "{}: T={:5.2}, flux in={:.4}, flux out={:.4}, nett={:.4}, gain={:.2e}, stored={:.2e}",
            step.time,
            step.temperature,
            heat_flux_in,
            heat_flux_out,
            heat_flux_net,
            heat_gain,
            step.heat_stored
        );
        step
    }

    /// Take `n_steps` steps and return the temperature history, initial state included.
    pub fn run(&mut self, n_steps: usize) -> Timeseries {
        let mut history = Timeseries::with_capacity(n_steps + 1);
        history.push(self.time, self.temperature);
        for _ in 0..n_steps {
            self.step();
            history.push(self.time, self.temperature);
        }
        history
    }
}

impl Default for NakedPlanet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_equilibrium_temperature() {
        // L = 1350, albedo = 0.3 gives the familiar ~254 K
        let t = equilibrium_temperature(1350.0, 0.3, 1.0);
        assert_relative_eq!(t, 254.0621799259924, max_relative = 1e-12);
    }

    #[test]
    fn test_first_step_from_absolute_zero() {
        let mut planet = NakedPlanet::new();
        let step = planet.step();

        assert_eq!(step.time, 0.0);
        assert_eq!(step.heat_flux_out, 0.0);
        assert_relative_eq!(step.heat_flux_in, 236.25);
        assert_relative_eq!(planet.temperature(), 44.517088910133836, max_relative = 1e-12);
        assert_eq!(planet.time(), 100.0);
    }

    #[test]
    fn test_reference_values() {
        let mut planet = NakedPlanet::new();
        planet.run(10);
        assert_relative_eq!(planet.temperature(), 253.81173557216852, max_relative = 1e-12);
        assert_relative_eq!(planet.heat_flux_out(), 235.3198332403346, max_relative = 1e-12);
    }

    #[test]
    fn test_converges_to_equilibrium() {
        let mut planet = NakedPlanet::new();
        let history = planet.run(200);

        assert_eq!(history.len(), 201);
        assert_relative_eq!(
            planet.temperature(),
            planet.equilibrium_temperature(),
            max_relative = 1e-10
        );
        assert_relative_eq!(
            planet.heat_flux_out(),
            planet.parameters().heat_flux_in(),
            max_relative = 1e-9
        );
    }

    #[test]
    fn test_cooling_from_hot_start() {
        let mut planet = NakedPlanet::from_parameters(NakedPlanetParameters {
            initial_temperature: 300.0,
            time_step: 1.0,
            ..Default::default()
        });
        let history = planet.run(5);
        let values = history.values();
        for pair in values.windows(2) {
            assert!(pair[1] < pair[0], "Temperature should fall: {:?}", values);
        }
        assert!(planet.temperature() > planet.equilibrium_temperature());
    }

    #[test]
    fn test_thicker_ocean_responds_slower() {
        let mut shallow = NakedPlanet::from_parameters(NakedPlanetParameters {
            water_depth: 100.0,
            time_step: 0.05,
            ..Default::default()
        });
        let mut deep = NakedPlanet::from_parameters(NakedPlanetParameters {
            water_depth: 4000.0,
            time_step: 0.05,
            ..Default::default()
        });
        shallow.run(20);
        deep.run(20);
        assert!(shallow.temperature() > deep.temperature());
    }
}
