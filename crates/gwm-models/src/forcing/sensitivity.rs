//! Inferring climate sensitivity and the effect of aerosol unmasking

use crate::forcing::{NearFuture, Scenario};
use crate::parameters::NearFutureParameters;
use gwm_core::solver::{bisect, Convergence};
use gwm_core::{FloatValue, GwmResult, Time};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Search interval for the doubled-CO2 climate sensitivity (K).
const SENSITIVITY_BRACKET: (FloatValue, FloatValue) = (0.0, 10.0);

/// Climate sensitivity (K per doubling) for which business as usual reaches
/// `target_temperature` in `reference_year`, given the present day aerosol
/// masking `aerosol_forcing_now`.
pub fn climate_sensitivity_for(
    model: &NearFuture,
    aerosol_forcing_now: FloatValue,
) -> GwmResult<FloatValue> {
    let p = model.parameters();
    let reference_year = p.reference_year as Time;
    let target = p.target_temperature;

    let sensitivity = bisect(
        |climate_sensitivity_2x| {
            let bau = model.business_as_usual_with(climate_sensitivity_2x, aerosol_forcing_now)?;
            Ok(bau.temp_trans.at_time(reference_year)? - target)
        },
        SENSITIVITY_BRACKET.0,
        SENSITIVITY_BRACKET.1,
        Convergence::default(),
    )?;
    info!(
        aerosol_forcing_now,
        sensitivity, "Climate sensitivity for {} K in {}", target, p.reference_year
    );
    Ok(sensitivity)
}

/// Transient temperatures of the two scenarios in one year.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    pub year: Time,
    pub business_as_usual: FloatValue,
    pub world_without_us: FloatValue,
}

/// Side by side transient temperatures for `duration` samples starting at `from_year`.
pub fn compare(
    bau: &Scenario,
    wwu: &Scenario,
    from_year: Time,
    duration: usize,
) -> GwmResult<Vec<ComparisonRow>> {
    let start = bau.index_of(from_year)?;
    Ok(bau
        .temp_trans
        .iter()
        .zip(wwu.temp_trans.values())
        .skip(start)
        .take(duration)
        .map(|((year, business_as_usual), &world_without_us)| ComparisonRow {
            year,
            business_as_usual,
            world_without_us,
        })
        .collect())
}

/// Years from the reference year on in which stopping emissions leaves the
/// planet at least as warm as carrying on.
///
/// The sensitivity is first solved for the given aerosol masking, then both
/// scenarios are rerun with an annual time step.
pub fn unmasking_years(model: &NearFuture, aerosol_forcing_now: FloatValue) -> GwmResult<Vec<i32>> {
    let sensitivity = climate_sensitivity_for(model, aerosol_forcing_now)?;
    let annual = NearFuture::from_parameters(NearFutureParameters {
        time_step: 1,
        ..model.parameters().clone()
    });
    let bau = annual.business_as_usual_with(sensitivity, aerosol_forcing_now)?;
    let wwu = annual.world_without_us(&bau, sensitivity)?;

    let reference_year = model.parameters().reference_year as Time;
    Ok(bau
        .temp_trans
        .iter()
        .zip(wwu.temp_trans.values())
        .filter(|((year, bau_temp), &wwu_temp)| *year >= reference_year && *bau_temp <= wwu_temp)
        .map(|((year, _), _)| year as i32)
        .collect())
}
