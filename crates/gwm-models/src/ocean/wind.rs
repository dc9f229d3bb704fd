use crate::parameters::WindScheme;
use gwm_core::FloatValue;
use std::f64::consts::TAU;

/// Zonal wind forcing ($\text{m/s}^2$) applied to U in every row.
pub fn wind_profile(scheme: WindScheme, nrow: usize) -> Vec<FloatValue> {
    (0..nrow)
        .map(|i| match scheme {
            WindScheme::Curled => 1.0e-8 * ((i as FloatValue + 0.5) / nrow as FloatValue * TAU).sin(),
            WindScheme::Uniform => 1.0e-8,
            WindScheme::None => 0.0,
        })
        .collect()
}
