//! A Simple 1-D Ice Sheet Flow Model
//!
//! Ice accumulates from snowfall and flows downhill towards the two edges
//! of the domain, where the thickness is held at zero. The flux between
//! neighbouring cells is
//!
//! $$F_{i+\frac12} = \frac{e_i - e_{i+1}}{\Delta x} \, k \, \frac{e_i + e_{i+1}}{2 \Delta x}$$
//!
//! and each interior cell is updated with an explicit Euler step
//!
//! $$e_i \leftarrow e_i + (s + F_{i-\frac12} - F_{i+\frac12}) \Delta t$$
//!
//! The sheet approaches a steady, symmetric dome after a few tens of
//! thousands of years.

use crate::parameters::IceSheetParameters;
use gwm_core::math::count_steps;
use gwm_core::{FloatValue, GwmError, GwmResult, Time};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ice sheet elevation profile and the parameters that evolve it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IceSheet {
    parameters: IceSheetParameters,

    /// Elevation at each grid point (m), including the two fixed edges.
    elevation: Vec<FloatValue>,

    /// Simulated time (yr).
    year: Time,
}

impl IceSheet {
    /// Create a new, ice free sheet with default parameters.
    pub fn new() -> Self {
        Self::from_parameters(IceSheetParameters::default())
    }

    pub fn from_parameters(parameters: IceSheetParameters) -> Self {
        let n_points = parameters.n_x + 2;
        Self {
            parameters,
            elevation: vec![0.0; n_points],
            year: 0.0,
        }
    }

    pub fn parameters(&self) -> &IceSheetParameters {
        &self.parameters
    }

    /// Elevation at every grid point, edges included.
    pub fn elevation(&self) -> &[FloatValue] {
        &self.elevation
    }

    /// Elevation at grid point `index`.
    pub fn elevation_at(&self, index: usize) -> GwmResult<FloatValue> {
        self.elevation.get(index).copied().ok_or_else(|| {
            GwmError::InvalidInput(format!(
                "grid point {} requested but the sheet only has {} points",
                index,
                self.elevation.len()
            ))
        })
    }

    pub fn year(&self) -> Time {
        self.year
    }

    /// Ice flux across each cell face (m/yr), positive towards increasing index.
    ///
    /// Face `i` lies between grid points `i` and `i + 1`.
    pub fn fluxes(&self) -> Vec<FloatValue> {
        let dx = self.parameters.dx();
        let k = self.parameters.flow_param;
        self.elevation
            .windows(2)
            .map(|pair| (pair[0] - pair[1]) / dx * k * (pair[0] + pair[1]) / 2.0 / dx)
            .collect()
    }

    /// Advance the sheet by one time step.
    pub fn step(&mut self) {
        let flow = self.fluxes();
        let snow_fall = self.parameters.snow_fall;
        let dt = self.parameters.time_step;

        for i in 1..=self.parameters.n_x {
            self.elevation[i] += (snow_fall + flow[i - 1] - flow[i]) * dt;
        }
        self.year += dt;
    }

    /// Number of steps needed to cover `n_years`.
    ///
    /// Time runs over `0, dt, 2dt, ...` up to but excluding `n_years + dt`,
    /// so the final state is at (or just beyond) `n_years`.
    pub fn n_steps(&self) -> usize {
        let end = (self.parameters.n_years + self.parameters.time_step).trunc();
        count_steps(0.0, end, self.parameters.time_step)
    }

    /// Run the full simulation, calling `observer` after every step.
    pub fn run_with<F>(&mut self, mut observer: F) -> &[FloatValue]
    where
        F: FnMut(Time, &[FloatValue]),
    {
        let n_steps = self.n_steps();
        debug!(n_steps, "Running ice sheet model");
        for _ in 0..n_steps {
            self.step();
            observer(self.year, &self.elevation);
        }
        &self.elevation
    }

    /// Run the full simulation and return the final elevation profile.
    pub fn run(&mut self) -> &[FloatValue] {
        self.run_with(|_, _| {})
    }

    /// Pairs of (distance from the western edge (m), elevation (m)).
    pub fn profile(&self) -> Vec<(FloatValue, FloatValue)> {
        let dx = self.parameters.dx();
        self.elevation
            .iter()
            .enumerate()
            .map(|(i, &e)| (i as FloatValue * dx, e))
            .collect()
    }
}

impl Default for IceSheet {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn sheet_for(n_years: FloatValue) -> IceSheet {
        IceSheet::from_parameters(IceSheetParameters {
            n_years,
            ..Default::default()
        })
    }

    #[test]
    fn test_new_sheet_is_flat() {
        let sheet = IceSheet::new();
        assert_eq!(sheet.elevation().len(), 12);
        assert!(sheet.elevation().iter().all(|&e| e == 0.0));
    }

    #[test]
    fn test_n_steps() {
        assert_eq!(sheet_for(50000.0).n_steps(), 501);
        assert_eq!(sheet_for(100.0).n_steps(), 2);
        assert_eq!(sheet_for(150.0).n_steps(), 3);
    }

    #[test]
    fn test_first_steps_only_lose_ice_at_edges() {
        let mut sheet = sheet_for(100.0);
        let elevation = sheet.run().to_vec();

        // Two steps of 50 m snowfall; only the cells next to the edges feel the flow.
        assert_relative_eq!(elevation[5], 100.0, epsilon = 1e-12);
        assert_relative_eq!(elevation[1], 99.875, epsilon = 1e-12);
        assert_relative_eq!(elevation[10], 99.875, epsilon = 1e-12);
    }

    #[test]
    fn test_reference_centre_elevation() {
        let mut sheet = sheet_for(1000.0);
        sheet.run();
        assert_relative_eq!(
            sheet.elevation_at(5).unwrap(),
            549.9998215226102,
            max_relative = 1e-12
        );

        let mut sheet = sheet_for(50000.0);
        sheet.run();
        assert_relative_eq!(
            sheet.elevation_at(5).unwrap(),
            3872.979815235871,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_profile_is_symmetric_and_non_negative() {
        let mut sheet = sheet_for(20000.0);
        let elevation = sheet.run().to_vec();
        let n = elevation.len();

        for i in 0..n {
            assert!(elevation[i] >= 0.0);
            assert_relative_eq!(elevation[i], elevation[n - 1 - i], max_relative = 1e-12);
        }
        assert_eq!(elevation[0], 0.0);
        assert_eq!(elevation[n - 1], 0.0);
    }

    #[test]
    fn test_run_with_reports_each_step() {
        let mut sheet = sheet_for(1000.0);
        let mut years = Vec::new();
        sheet.run_with(|year, _| years.push(year));
        assert_eq!(years.len(), 11);
        assert_eq!(years[0], 100.0);
        assert_eq!(*years.last().unwrap(), 1100.0);
    }

    #[test]
    fn test_profile_coordinates() {
        let sheet = IceSheet::new();
        let profile = sheet.profile();
        assert_eq!(profile.len(), 12);
        assert_eq!(profile[0].0, 0.0);
        assert_relative_eq!(profile[11].0, 1.1e6);
    }

    #[test]
    fn test_elevation_out_of_range() {
        let sheet = IceSheet::new();
        assert!(sheet.elevation_at(12).is_err());
    }
}
