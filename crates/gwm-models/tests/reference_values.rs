//! Reference outputs for the inputs used by the automated course checker.

use approx::assert_relative_eq;
use gwm_models::energy_balance::{AlbedoRelaxation, NakedPlanet};
use gwm_models::forcing::{climate_sensitivity_for, NearFuture};
use gwm_models::ice::IceSheet;
use gwm_models::ocean::ShallowWaterModel;
use gwm_models::parameters::{IceSheetParameters, ShallowWaterParameters};

#[test]
fn test_ice_sheet_centre() {
    let mut sheet = IceSheet::from_parameters(IceSheetParameters {
        n_years: 50000.0,
        ..Default::default()
    });
    let elevation = sheet.run();
    assert_relative_eq!(elevation[5], 3872.979815235871, max_relative = 1e-12);
}

#[test]
fn test_naked_planet_ten_steps() {
    let mut planet = NakedPlanet::new();
    planet.run(10);
    assert_relative_eq!(planet.temperature(), 253.81173557216852, max_relative = 1e-12);
    assert_relative_eq!(planet.heat_flux_out(), 235.3198332403346, max_relative = 1e-12);
}

#[test]
fn test_relaxation() {
    let model = AlbedoRelaxation::default();
    for (l, albedo, n_iters, temperature, final_albedo) in [
        (1350.0, 0.15, 1, 266.69829641644293, 0.15),
        (1200.0, 0.3, 5, 235.67441734614152, 0.443255826538585),
        (1275.0, 0.4, 100, 253.72519392435495, 0.2627480607564504),
    ] {
        let state = model.relax_repeatedly(l, albedo, n_iters).unwrap();
        assert_relative_eq!(state.temperature, temperature, max_relative = 1e-10);
        assert_relative_eq!(state.albedo, final_albedo, max_relative = 1e-10);
    }
}

#[test]
fn test_near_future_sensitivity() {
    let model = NearFuture::default();
    assert_relative_eq!(
        climate_sensitivity_for(&model, -0.75).unwrap(),
        2.78827474186984,
        max_relative = 1e-9
    );
}

/// The default grid run for 400 slices of 1000 steps, as the checker does.
#[test]
fn test_shallow_water_default_run() {
    let mut model = ShallowWaterModel::from_parameters(ShallowWaterParameters::default()).unwrap();
    model.run();
    let cell = model.value_at(2, 2).unwrap();

    assert_relative_eq!(cell.h, 0.6387380556866626, max_relative = 1e-6);
    assert_relative_eq!(cell.u, -4.77009023050335e-06, max_relative = 1e-6);
    assert_relative_eq!(cell.v, -0.0002240408287485974, max_relative = 1e-6);
    assert_relative_eq!(cell.coriolis_u, -6.736313723605186e-08, max_relative = 1e-6);
    assert!(cell.dh_dt.abs() < 1e-9);
    assert_relative_eq!(model.elapsed_days(), 400.0 * 1000.0 * 600.0 / 86400.0);
}
