//! Business as Usual and World Without Us
//!
//! CO2 grows exponentially above its pre-industrial value and produces a
//! logarithmic radiative forcing
//!
//! $$RF = RF_{2\times} \log_2(C / C_0)$$
//!
//! Sulphate aerosols emitted alongside the CO2 partially mask this forcing.
//! The masking is proportional to the rate of CO2 growth, scaled so that it
//! matches the present day estimate in the reference year, and is never
//! stronger than that estimate.
//!
//! The transient temperature lags the equilibrium temperature:
//!
//! $$T_{i} = T_{i-1} + (T^{eq}_i - T_{i-1}) \frac{\Delta t}{\tau}$$

use crate::parameters::NearFutureParameters;
use gwm_core::{FloatValue, GwmError, GwmResult, Time, Timeseries};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Radiative forcing ($\text{W/m}^2$) for a CO2 concentration (ppm).
pub fn radiative_forcing(
    co2: FloatValue,
    co2_equilibrium: FloatValue,
    rf_2xco2: FloatValue,
) -> FloatValue {
    rf_2xco2 * (co2 / co2_equilibrium).log2()
}

/// Output of one scenario; every series shares the same years.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Scenario {
    /// CO2 concentration (ppm).
    pub co2: Timeseries,
    /// Radiative forcing from CO2 alone ($\text{W/m}^2$).
    pub rf_co2: Timeseries,
    /// Aerosol masking ($\text{W/m}^2$, non-positive).
    pub aerosol_masking: Timeseries,
    /// Equilibrium temperature anomaly (K).
    pub temp_eq: Timeseries,
    /// Transient temperature anomaly (K).
    pub temp_trans: Timeseries,
}

impl Scenario {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            co2: Timeseries::with_capacity(capacity),
            rf_co2: Timeseries::with_capacity(capacity),
            aerosol_masking: Timeseries::with_capacity(capacity),
            temp_eq: Timeseries::with_capacity(capacity),
            temp_trans: Timeseries::with_capacity(capacity),
        }
    }

    pub fn years(&self) -> &[Time] {
        self.co2.time()
    }

    pub fn len(&self) -> usize {
        self.co2.len()
    }

    pub fn is_empty(&self) -> bool {
        self.co2.is_empty()
    }

    /// Interval between the first two years.
    pub fn time_step(&self) -> GwmResult<FloatValue> {
        match self.years() {
            [first, second, ..] => Ok(second - first),
            _ => Err(GwmError::InvalidInput(
                "a scenario needs at least two years".to_string(),
            )),
        }
    }

    /// Index of `year` in the scenario.
    pub fn index_of(&self, year: Time) -> GwmResult<usize> {
        self.co2.index_of(year).ok_or(GwmError::MissingTime(year))
    }

    /// The first `len` years of every series.
    fn truncated(&self, len: usize) -> Self {
        Self {
            co2: self.co2.truncated(len),
            rf_co2: self.rf_co2.truncated(len),
            aerosol_masking: self.aerosol_masking.truncated(len),
            temp_eq: self.temp_eq.truncated(len),
            temp_trans: self.temp_trans.truncated(len),
        }
    }
}

/// Near-future warming scenarios sharing one set of parameters.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NearFuture {
    parameters: NearFutureParameters,
}

impl NearFuture {
    pub fn from_parameters(parameters: NearFutureParameters) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &NearFutureParameters {
        &self.parameters
    }

    fn rf(&self, co2: FloatValue) -> FloatValue {
        radiative_forcing(co2, self.parameters.co2_equilibrium, self.parameters.rf_2xco2)
    }

    /// Business as usual with the configured sensitivity and aerosol masking.
    pub fn business_as_usual(&self) -> GwmResult<Scenario> {
        self.business_as_usual_with(
            self.parameters.climate_sensitivity_2x,
            self.parameters.aerosol_forcing_now,
        )
    }

    /// Business as usual for a given sensitivity (K per doubling) and
    /// present day aerosol masking ($\text{W/m}^2$).
    pub fn business_as_usual_with(
        &self,
        climate_sensitivity_2x: FloatValue,
        aerosol_forcing_now: FloatValue,
    ) -> GwmResult<Scenario> {
        let p = &self.parameters;
        let years = p.years();
        if years.len() < 2 {
            return Err(GwmError::InvalidInput(format!(
                "need at least two years between {} and {} with step {}",
                p.start_year, p.end_year, p.time_step
            )));
        }
        let dt = p.time_step as FloatValue;
        let growth = (1.0 + p.co2_growth_rate).powi(p.time_step);

        let mut co2 = Vec::with_capacity(years.len());
        co2.push(p.co2_initial);
        for i in 1..years.len() {
            co2.push(p.co2_equilibrium + (co2[i - 1] - p.co2_equilibrium) * growth);
        }

        let aerosol_coefficient = self.aerosol_coefficient(&years, &co2, aerosol_forcing_now)?;
        let sensitivity = p.sensitivity_per_wm2(climate_sensitivity_2x);

        let mut scenario = Scenario::with_capacity(years.len());
        let first_year = years[0] as Time;
        scenario.co2.push(first_year, co2[0]);
        scenario.rf_co2.push(first_year, 0.0);
        scenario.aerosol_masking.push(first_year, 0.0);
        scenario.temp_eq.push(first_year, 0.0);
        scenario.temp_trans.push(first_year, 0.0);

        let mut temp_trans = 0.0;
        for i in 1..years.len() {
            let year = years[i] as Time;
            let rf_co2 = self.rf(co2[i]);
            let masking =
                ((co2[i] - co2[i - 1]) / dt * aerosol_coefficient).max(aerosol_forcing_now);
            let temp_eq = sensitivity * (rf_co2 + masking);
            temp_trans += (temp_eq - temp_trans) * dt / p.time_response;

            scenario.co2.push(year, co2[i]);
            scenario.rf_co2.push(year, rf_co2);
            scenario.aerosol_masking.push(year, masking);
            scenario.temp_eq.push(year, temp_eq);
            scenario.temp_trans.push(year, temp_trans);
        }

        debug!(
            climate_sensitivity_2x,
            aerosol_forcing_now,
            aerosol_coefficient,
            final_temperature = temp_trans,
            "Business as usual"
        );
        Ok(scenario)
    }

    /// Scaling from CO2 growth rate to masking that gives `aerosol_forcing_now`
    /// in the reference year.
    fn aerosol_coefficient(
        &self,
        years: &[i32],
        co2: &[FloatValue],
        aerosol_forcing_now: FloatValue,
    ) -> GwmResult<FloatValue> {
        let reference_year = self.parameters.reference_year;
        let index = years
            .iter()
            .position(|&y| y == reference_year)
            .ok_or(GwmError::MissingTime(reference_year as Time))?;
        if index == 0 {
            return Err(GwmError::InvalidInput(format!(
                "reference year {reference_year} must not be the first simulated year"
            )));
        }
        let growth_rate =
            (co2[index] - co2[index - 1]) / (years[index] - years[index - 1]) as FloatValue;
        Ok(aerosol_forcing_now / growth_rate)
    }

    /// Follow `bau` until CO2 first reaches the threshold, then stop emitting.
    ///
    /// Afterwards CO2 relaxes towards `co2_relaxation_target` and the aerosol
    /// masking vanishes. If the threshold is never reached the scenario is
    /// identical to `bau`.
    pub fn world_without_us(
        &self,
        bau: &Scenario,
        climate_sensitivity_2x: FloatValue,
    ) -> GwmResult<Scenario> {
        let p = &self.parameters;
        let dt = bau.time_step()?;
        let Some(index) = bau.co2.first_crossing(p.wwu_threshold) else {
            info!(
                threshold = p.wwu_threshold,
                "CO2 never reaches the threshold, world without us matches business as usual"
            );
            return Ok(bau.clone());
        };
        if index == 0 {
            return Err(GwmError::InvalidInput(format!(
                "CO2 already exceeds the threshold of {} ppm in the first year",
                p.wwu_threshold
            )));
        }
        debug!(
            year = bau.years()[index],
            threshold = p.wwu_threshold,
            "Emissions stop"
        );

        let sensitivity = p.sensitivity_per_wm2(climate_sensitivity_2x);
        let mut scenario = bau.truncated(index);
        let mut co2 = bau.co2.values()[index - 1];
        let mut temp_trans = bau.temp_trans.values()[index - 1];

        for &year in &bau.years()[index..] {
            co2 += (p.co2_relaxation_target - co2) * (dt / p.co2_relaxation_timescale);
            let rf_co2 = self.rf(co2);
            let temp_eq = sensitivity * rf_co2;
            temp_trans += (temp_eq - temp_trans) * dt / p.time_response;

            scenario.co2.push(year, co2);
            scenario.rf_co2.push(year, rf_co2);
            scenario.aerosol_masking.push(year, 0.0);
            scenario.temp_eq.push(year, temp_eq);
            scenario.temp_trans.push(year, temp_trans);
        }
        Ok(scenario)
    }
}
