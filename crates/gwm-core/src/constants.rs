//! Physical constants shared by the models
//!
//! Values follow CODATA 2018 where applicable. Calendar constants use a
//! 365 day year, which is what the course material assumes.

use crate::timeseries::FloatValue;

/// Stefan-Boltzmann constant ($\text{W m}^{-2}\text{ K}^{-4}$).
pub const STEFAN_BOLTZMANN: FloatValue = 5.670374419e-8;

/// Thermochemical calorie (J).
pub const CALORIE: FloatValue = 4.184;

/// One gram expressed in kilograms.
pub const GRAM: FloatValue = 1e-3;

/// Density of fresh water ($\text{kg/m}^3$).
pub const DENSITY_WATER: FloatValue = 1000.0;

/// Seconds per day.
pub const SECONDS_PER_DAY: FloatValue = 86400.0;

/// Seconds per (365 day) year.
pub const SECONDS_PER_YEAR: FloatValue = 365.0 * SECONDS_PER_DAY;

/// Mean solar beam irradiance at 1 AU ($\text{W/m}^2$), Appelbaum & Flood (1990).
pub const SOLAR_CONSTANT_1AU: FloatValue = 1371.0;

/// Specific heat capacity of water ($\text{J kg}^{-1}\text{ K}^{-1}$).
///
/// One calorie per gram per kelvin.
pub fn specific_heat_water() -> FloatValue {
    CALORIE / GRAM
}
