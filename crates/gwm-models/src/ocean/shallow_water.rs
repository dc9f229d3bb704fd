//! Shallow Water Ocean Model
//!
//! A toy ocean on a small staggered grid, stepped forward with explicit Euler:
//!
//! $$\frac{\partial U}{\partial t} = f V - g \frac{\partial H}{\partial x} - k U + \tau_x$$
//!
//! $$\frac{\partial V}{\partial t} = -f U - g \frac{\partial H}{\partial y} - k V$$
//!
//! $$\frac{\partial H}{\partial t} = -\left(\frac{\partial U}{\partial x} + \frac{\partial V}{\partial y}\right) \frac{H_0}{\Delta x}$$
//!
//! The northern and southern edges are always walls. The eastern and western
//! edges are either walls or wrap around, in which case the ghost column
//! mirrors column 0.

use crate::ocean::coriolis::{self, rotation_constants};
use crate::ocean::wind::wind_profile;
use crate::ocean::ShallowWaterState;
use crate::parameters::ShallowWaterParameters;
use gwm_core::constants::SECONDS_PER_DAY;
use gwm_core::{FloatValue, GwmError, GwmResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

/// Values reported for a single grid cell.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellValues {
    pub h: FloatValue,
    pub dh_dt: FloatValue,
    pub u: FloatValue,
    pub v: FloatValue,
    pub coriolis_u: FloatValue,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShallowWaterModel {
    parameters: ShallowWaterParameters,
    state: ShallowWaterState,
    /// Coriolis parameter for each row (1/s).
    rotation: Vec<FloatValue>,
    /// Wind forcing for each row.
    wind: Vec<FloatValue>,
    steps_taken: usize,
}

impl ShallowWaterModel {
    pub fn from_parameters(parameters: ShallowWaterParameters) -> GwmResult<Self> {
        if parameters.nrow == 0 || parameters.ncol == 0 {
            return Err(GwmError::InvalidInput(format!(
                "grid must have at least one cell, got {}x{}",
                parameters.nrow, parameters.ncol
            )));
        }
        for (name, value) in [
            ("dt", parameters.dt),
            ("dx", parameters.dx),
            ("dy", parameters.dy),
        ] {
            if !(value > 0.0) {
                return Err(GwmError::InvalidInput(format!(
                    "{name} must be positive, got {value}"
                )));
            }
        }

        let mut state = ShallowWaterState::at_rest(parameters.nrow, parameters.ncol);
        state.perturb(parameters.initial_perturbation)?;
        let rotation = rotation_constants(&parameters);
        let wind = wind_profile(parameters.wind_scheme, parameters.nrow);

        debug!(
            nrow = parameters.nrow,
            ncol = parameters.ncol,
            wrap = parameters.horizontal_wrap,
            rotation = %parameters.rotation_scheme,
            coriolis = %parameters.coriolis,
            wind = %parameters.wind_scheme,
            perturbation = %parameters.initial_perturbation,
            "Created shallow water model"
        );

        Ok(Self {
            parameters,
            state,
            rotation,
            wind,
            steps_taken: 0,
        })
    }

    pub fn parameters(&self) -> &ShallowWaterParameters {
        &self.parameters
    }

    pub fn state(&self) -> &ShallowWaterState {
        &self.state
    }

    pub fn rotation(&self) -> &[FloatValue] {
        &self.rotation
    }

    pub fn wind(&self) -> &[FloatValue] {
        &self.wind
    }

    pub fn steps_taken(&self) -> usize {
        self.steps_taken
    }

    /// Simulated time (days).
    pub fn elapsed_days(&self) -> FloatValue {
        self.steps_taken as FloatValue * self.parameters.dt / SECONDS_PER_DAY
    }

    /// Advance by a single time step.
    pub fn step(&mut self) {
        let p = &self.parameters;
        let s = &mut self.state;
        let (nrow, ncol) = (p.nrow, p.ncol);

        // Zonal derivatives; the western neighbour of column 0 is the ghost column
        for i in 0..nrow {
            for j in 0..=ncol {
                let west = if j == 0 { ncol } else { j - 1 };
                s.dh_dx[[i, j]] = (s.h[[i, j]] - s.h[[i, west]]) / p.dx;
            }
            for j in 0..ncol {
                s.du_dx[[i, j]] = (s.u[[i, j + 1]] - s.u[[i, j]]) / p.dx;
            }
        }

        // Meridional derivatives
        for i in 0..nrow {
            for j in 0..ncol {
                s.dh_dy[[i, j]] = if i == 0 {
                    0.0
                } else {
                    (s.h[[i, j]] - s.h[[i - 1, j]]) / p.dy
                };
                s.dv_dy[[i, j]] = (s.v[[i + 1, j]] - s.v[[i, j]]) / p.dy;
            }
        }

        coriolis::apply(p.coriolis, &self.rotation, p.horizontal_wrap, s);

        for i in 0..nrow {
            for j in 0..ncol {
                s.du_dt[[i, j]] = s.coriolis_u[[i, j]] - p.gravity * s.dh_dx[[i, j]]
                    - p.drag * s.u[[i, j]]
                    + self.wind[i];
                s.dv_dt[[i, j]] =
                    s.coriolis_v[[i, j]] - p.gravity * s.dh_dy[[i, j]] - p.drag * s.v[[i, j]];
                s.dh_dt[[i, j]] = -(s.du_dx[[i, j]] + s.dv_dy[[i, j]]) * p.h_background / p.dx;
            }
        }

        for i in 0..nrow {
            for j in 0..ncol {
                s.u[[i, j]] += s.du_dt[[i, j]] * p.dt;
                s.v[[i, j]] += s.dv_dt[[i, j]] * p.dt;
                s.h[[i, j]] += s.dh_dt[[i, j]] * p.dt;
            }
        }

        if p.horizontal_wrap {
            let h_west = s.h.column(0).to_owned();
            s.h.column_mut(ncol).assign(&h_west);
            let u_west = s.u.column(0).to_owned();
            s.u.column_mut(ncol).assign(&u_west);
        } else {
            s.u.column_mut(0).fill(0.0);
            s.u.column_mut(ncol).fill(0.0);
        }
        s.v.row_mut(0).fill(0.0);
        s.v.row_mut(nrow).fill(0.0);

        self.steps_taken += 1;
    }

    /// Take `steps_per_slice` steps.
    pub fn run_slice(&mut self) {
        for _ in 0..self.parameters.steps_per_slice {
            self.step();
        }
        info!(
            "Time: {:.1} days",
            (self.elapsed_days() * 10.0).floor() / 10.0
        );
    }

    /// Run every slice, calling `observer` with the slice index after each one.
    pub fn run_with<F>(&mut self, mut observer: F) -> &ShallowWaterState
    where
        F: FnMut(usize, &Self),
    {
        for slice in 0..self.parameters.n_slices {
            self.run_slice();
            observer(slice, self);
        }
        &self.state
    }

    pub fn run(&mut self) -> &ShallowWaterState {
        self.run_with(|_, _| {})
    }

    /// Elevation, its tendency and the velocities at cell (`row`, `col`).
    pub fn value_at(&self, row: usize, col: usize) -> GwmResult<CellValues> {
        let (nrow, ncol) = (self.parameters.nrow, self.parameters.ncol);
        if row >= nrow || col >= ncol {
            return Err(GwmError::OutOfGrid {
                row,
                col,
                nrow,
                ncol,
            });
        }
        let s = &self.state;
        Ok(CellValues {
            h: s.h[[row, col]],
            dh_dt: s.dh_dt[[row, col]],
            u: s.u[[row, col]],
            v: s.v[[row, col]],
            coriolis_u: s.coriolis_u[[row, col]],
        })
    }
}
