//! Ice Sheet Parameters

use gwm_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Parameters for the 1-D ice sheet flow model.
///
/// Snow falls uniformly on a flat bed of width `domain_width` and the ice
/// flows downhill with a flux proportional to the surface slope times the
/// ice thickness. The ice is held at zero thickness at both edges.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IceSheetParameters {
    /// Number of interior grid points.
    /// Default: 10
    pub n_x: usize,

    /// Width of the domain (m).
    /// Default: 1e6
    pub domain_width: FloatValue,

    /// Time step (yr).
    /// Default: 100
    pub time_step: FloatValue,

    /// Length of the simulation (yr).
    /// Default: 50000
    pub n_years: FloatValue,

    /// Horizontal flow parameter (m/yr).
    /// Default: 1e4
    pub flow_param: FloatValue,

    /// Snowfall accumulation rate (m/yr).
    /// Default: 0.5
    pub snow_fall: FloatValue,
}

impl Default for IceSheetParameters {
    fn default() -> Self {
        Self {
            n_x: 10,
            domain_width: 1e6,
            time_step: 100.0,
            n_years: 50000.0,
            flow_param: 1e4,
            snow_fall: 0.5,
        }
    }
}

impl IceSheetParameters {
    /// Grid spacing (m).
    pub fn dx(&self) -> FloatValue {
        self.domain_width / self.n_x as FloatValue
    }
}
