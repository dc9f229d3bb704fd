use crate::parameters::Perturbation;
use gwm_core::{FloatValue, GwmError, GwmResult};
use ndarray::{s, Array2};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Prognostic fields and diagnostics on the staggered grid.
///
/// ```text
///     ----V(00)-------V(01)----
///     |           |           |
///   U(00) H(00) U(01) H(01) [U(02)]
///     |           |           |
///     ----V(10)-------V(11)----
///     |           |           |
///   U(10) H(10) U(11) H(11) [U(12)]
///     |           |           |
///     ---[V(20)]-----[V(21)]---
/// ```
///
/// `U` and `H` carry a ghost column at index `ncol` and `V` a ghost row at
/// index `nrow`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShallowWaterState {
    /// Eastward velocity (m/s), shape (nrow, ncol + 1).
    pub u: Array2<FloatValue>,
    /// Southward velocity (m/s), shape (nrow + 1, ncol).
    pub v: Array2<FloatValue>,
    /// Sea surface elevation (m), shape (nrow, ncol + 1).
    pub h: Array2<FloatValue>,

    pub du_dt: Array2<FloatValue>,
    pub dv_dt: Array2<FloatValue>,
    pub dh_dt: Array2<FloatValue>,
    /// Shape (nrow, ncol + 1), one value per U point.
    pub dh_dx: Array2<FloatValue>,
    pub dh_dy: Array2<FloatValue>,
    pub du_dx: Array2<FloatValue>,
    pub dv_dy: Array2<FloatValue>,
    /// Rotation term in the U equation, placed on U points.
    pub coriolis_u: Array2<FloatValue>,
    /// Rotation term in the V equation, placed on V points.
    pub coriolis_v: Array2<FloatValue>,
}

impl ShallowWaterState {
    /// A flat ocean with no motion.
    pub fn at_rest(nrow: usize, ncol: usize) -> Self {
        let cells = || Array2::zeros((nrow, ncol));
        Self {
            u: Array2::zeros((nrow, ncol + 1)),
            v: Array2::zeros((nrow + 1, ncol)),
            h: Array2::zeros((nrow, ncol + 1)),
            du_dt: cells(),
            dv_dt: cells(),
            dh_dt: cells(),
            dh_dx: Array2::zeros((nrow, ncol + 1)),
            dh_dy: cells(),
            du_dx: cells(),
            dv_dy: cells(),
            coriolis_u: cells(),
            coriolis_v: cells(),
        }
    }

    pub fn nrow(&self) -> usize {
        self.h.nrows()
    }

    pub fn ncol(&self) -> usize {
        self.h.ncols() - 1
    }

    /// Raise part of the sea surface.
    ///
    /// The affected region is anchored on the middle column, `ncol / 2`.
    pub fn perturb(&mut self, perturbation: Perturbation) -> GwmResult<()> {
        let mid = self.ncol() / 2;
        match perturbation {
            Perturbation::Tower => {
                if mid >= self.nrow() {
                    return Err(GwmError::InvalidInput(format!(
                        "tower at ({mid}, {mid}) does not fit a {}x{} grid",
                        self.nrow(),
                        self.ncol()
                    )));
                }
                self.h[[mid, mid]] = 1.0;
            }
            Perturbation::NSGradient => {
                let rows = mid.min(self.nrow());
                self.h.slice_mut(s![0..rows, ..]).fill(0.1);
            }
            Perturbation::EWGradient => self.h.slice_mut(s![.., 0..mid]).fill(0.1),
            Perturbation::None => {}
        }
        Ok(())
    }

    /// Total elevation summed over the computational cells, ghosts excluded.
    pub fn volume(&self) -> FloatValue {
        let ncol = self.ncol();
        self.h.slice(s![.., 0..ncol]).sum()
    }

    /// Log every array at debug level.
    pub fn dump(&self, step: usize) {
        debug!("time step {step}");
        debug!("H\n{}", self.h);
        debug!("dHdX\n{}", self.dh_dx);
        debug!("dHdY\n{}", self.dh_dy);
        debug!("U\n{}", self.u);
        debug!("dUdX\n{}", self.du_dx);
        debug!("coriolis_u\n{}", self.coriolis_u);
        debug!("V\n{}", self.v);
        debug!("dVdY\n{}", self.dv_dy);
        debug!("coriolis_v\n{}", self.coriolis_v);
        debug!("dHdT\n{}", self.dh_dt);
        debug!("dUdT\n{}", self.du_dt);
        debug!("dVdT\n{}", self.dv_dt);
    }
}
