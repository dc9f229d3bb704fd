//! Solar Radiation at the Top of the Atmosphere
//!
//! Following Appelbaum & Flood, "Solar Radiation on Mars" (NASA TM-102299),
//! the beam irradiance falls off with the square of the distance from the sun:
//!
//! $$G_{ob} = \frac{S_0}{r^2}$$
//!
//! and on a horizontal surface it is reduced by the cosine of the zenith angle
//!
//! $$\cos z = \sin\phi \sin\delta + \cos\phi \cos\delta \cos\omega$$
//!
//! where $\omega$ is the hour angle, zero at local noon.

use crate::parameters::SolarParameters;
use crate::solar::Planet;
use gwm_core::solver::parabolic_extremum;
use gwm_core::{FloatValue, GwmError, GwmResult};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use tracing::debug;

/// Orbital geometry and irradiance at one true longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OrbitPoint {
    /// True longitude (degrees).
    pub ls: FloatValue,
    /// Distance from the sun (AU).
    pub distance: FloatValue,
    /// Beam irradiance at the top of the atmosphere ($\text{W/m}^2$).
    pub irradiance: FloatValue,
    /// Solar declination (degrees).
    pub declination: FloatValue,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Solar {
    parameters: SolarParameters,
}

impl Solar {
    pub fn from_parameters(parameters: SolarParameters) -> Self {
        Self { parameters }
    }

    pub fn parameters(&self) -> &SolarParameters {
        &self.parameters
    }

    pub fn planet(&self) -> &Planet {
        &self.parameters.planet
    }

    /// Beam irradiance ($\text{W/m}^2$) at `distance` AU from the sun.
    pub fn beam_irradiance(&self, distance: FloatValue) -> FloatValue {
        self.parameters.solar_constant / (distance * distance)
    }

    /// Beam irradiance at the mean distance, the semi-major axis.
    pub fn mean_beam_irradiance(&self) -> FloatValue {
        self.beam_irradiance(self.planet().semi_major_axis)
    }

    /// Hour angle (radians) at local solar time `solar_time` (hours).
    fn hour_angle(&self, solar_time: FloatValue) -> FloatValue {
        let hours = self.parameters.hours_per_day;
        (2.0 * PI / hours) * (solar_time - hours / 2.0)
    }

    /// Cosine of the solar zenith angle, negative when the sun is below the horizon.
    pub fn cos_zenith(&self, latitude: FloatValue, ls: FloatValue, solar_time: FloatValue) -> FloatValue {
        let phi = latitude.to_radians();
        let sin_delta = self.planet().sin_declination(ls);
        let cos_delta = (1.0 - sin_delta * sin_delta).sqrt();
        phi.sin() * sin_delta + phi.cos() * cos_delta * self.hour_angle(solar_time).cos()
    }

    /// Beam irradiance on a horizontal surface ($\text{W/m}^2$).
    pub fn horizontal_irradiance(
        &self,
        latitude: FloatValue,
        ls: FloatValue,
        solar_time: FloatValue,
    ) -> FloatValue {
        let beam = self.beam_irradiance(self.planet().distance(ls));
        beam * self.cos_zenith(latitude, ls, solar_time).max(0.0)
    }

    /// Horizontal irradiance averaged over a whole day ($\text{W/m}^2$).
    ///
    /// Integrates between sunrise and sunset, with the sunrise hour angle
    /// $\cos\omega_0 = -\tan\phi\tan\delta$ clamped for polar day and night.
    pub fn daily_insolation(&self, latitude: FloatValue, ls: FloatValue) -> FloatValue {
        let beam = self.beam_irradiance(self.planet().distance(ls));
        let phi = latitude.to_radians();
        let delta = self.planet().sin_declination(ls).asin();

        let cos_sunrise = (-phi.tan() * delta.tan()).clamp(-1.0, 1.0);
        let omega_0 = cos_sunrise.acos();
        beam / PI * (omega_0 * phi.sin() * delta.sin() + phi.cos() * delta.cos() * omega_0.sin())
    }

    /// Horizontal irradiance every `step` hours over one day.
    pub fn diurnal_table(
        &self,
        latitude: FloatValue,
        ls: FloatValue,
        step: FloatValue,
    ) -> GwmResult<Vec<(FloatValue, FloatValue)>> {
        if !(step > 0.0) {
            return Err(GwmError::InvalidInput(format!(
                "time step must be positive, got {step}"
            )));
        }
        let n = (self.parameters.hours_per_day / step).floor() as usize;
        Ok((0..=n)
            .map(|k| {
                let t = k as FloatValue * step;
                (t, self.horizontal_irradiance(latitude, ls, t))
            })
            .collect())
    }

    pub fn orbit_point(&self, ls: FloatValue) -> OrbitPoint {
        let distance = self.planet().distance(ls);
        OrbitPoint {
            ls,
            distance,
            irradiance: self.beam_irradiance(distance),
            declination: self.planet().declination(ls),
        }
    }

    /// Orbit points for each whole degree of true longitude, 0 to 359.
    pub fn annual_table(&self) -> Vec<OrbitPoint> {
        (0..360).map(|ls| self.orbit_point(ls as FloatValue)).collect()
    }

    /// Perihelion and aphelion located from the annual table.
    ///
    /// The largest and smallest tabulated irradiances are refined with a
    /// parabola through the neighbouring degrees.
    pub fn extrema(&self) -> GwmResult<(OrbitPoint, OrbitPoint)> {
        let table = self.annual_table();
        let by_irradiance = |a: &&OrbitPoint, b: &&OrbitPoint| a.irradiance.total_cmp(&b.irradiance);
        let brightest = table
            .iter()
            .max_by(by_irradiance)
            .ok_or_else(|| GwmError::Error("empty annual table".to_string()))?;
        let dimmest = table
            .iter()
            .min_by(by_irradiance)
            .ok_or_else(|| GwmError::Error("empty annual table".to_string()))?;

        let perihelion = self.orbit_point(self.refine(brightest.ls)?);
        let aphelion = self.orbit_point(self.refine(dimmest.ls)?);
        debug!(
            perihelion = perihelion.ls,
            aphelion = aphelion.ls,
            "Located orbital extremes"
        );
        Ok((perihelion, aphelion))
    }

    fn refine(&self, ls: FloatValue) -> GwmResult<FloatValue> {
        let x = [ls - 1.0, ls, ls + 1.0];
        let y = x.map(|l| self.beam_irradiance(self.planet().distance(l)));
        parabolic_extremum(x, y)
            .map(|vertex| vertex.rem_euclid(360.0))
            .ok_or_else(|| {
                GwmError::InvalidInput(format!(
                    "irradiance has no extremum near Ls={ls}, is the orbit circular?"
                ))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_beam_irradiance_at_1au() {
        let solar = Solar::default();
        assert_eq!(solar.beam_irradiance(1.0), 1371.0);
        assert_eq!(solar.mean_beam_irradiance(), 1371.0);
        assert_relative_eq!(solar.beam_irradiance(2.0), 1371.0 / 4.0);
    }

    #[test]
    fn test_earth_extrema() {
        let (perihelion, aphelion) = Solar::default().extrema().unwrap();
        assert!((perihelion.ls - 102.94719).abs() < 0.01);
        assert!((aphelion.ls - 282.94719).abs() < 0.01);
        assert_relative_eq!(perihelion.irradiance, 1418.83, max_relative = 1e-5);
        assert_relative_eq!(aphelion.irradiance, 1325.55, max_relative = 1e-5);
    }

    #[test]
    fn test_circular_orbit_has_no_extremum() {
        let solar = Solar::from_parameters(SolarParameters {
            planet: Planet {
                eccentricity: 0.0,
                ..Planet::earth()
            },
            ..Default::default()
        });
        assert!(solar.extrema().is_err());
    }

    #[test]
    fn test_horizontal_irradiance_noon_and_night() {
        let solar = Solar::default();
        // At the equinox the noon sun is overhead at the equator
        let beam = solar.beam_irradiance(solar.planet().distance(0.0));
        assert_relative_eq!(solar.horizontal_irradiance(0.0, 0.0, 12.0), beam, max_relative = 1e-12);
        assert_eq!(solar.horizontal_irradiance(0.0, 0.0, 0.0), 0.0);
        assert_relative_eq!(
            solar.horizontal_irradiance(60.0, 0.0, 12.0),
            beam * 0.5,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_diurnal_table_is_symmetric_about_noon() {
        let solar = Solar::default();
        let table = solar.diurnal_table(22.3, 69.0, 1.0).unwrap();
        assert_eq!(table.len(), 25);
        for k in 0..=12 {
            assert_relative_eq!(table[12 - k].1, table[12 + k].1, max_relative = 1e-9, epsilon = 1e-9);
        }
        assert!(solar.diurnal_table(22.3, 69.0, 0.0).is_err());
    }

    #[test]
    fn test_daily_insolation() {
        let solar = Solar::default();
        let beam = solar.beam_irradiance(solar.planet().distance(0.0));
        // Equator at equinox: beam / pi
        assert_relative_eq!(solar.daily_insolation(0.0, 0.0), beam / PI, max_relative = 1e-12);
        // Polar night and polar day around the northern summer solstice
        assert_eq!(solar.daily_insolation(-85.0, 90.0), 0.0);
        assert!(solar.daily_insolation(85.0, 90.0) > solar.daily_insolation(0.0, 90.0));
    }

    #[test]
    fn test_daily_insolation_matches_hourly_mean() {
        let solar = Solar::default();
        let n = 2400;
        let mean = (0..n)
            .map(|k| solar.horizontal_irradiance(40.0, 45.0, (k as f64 + 0.5) * 24.0 / n as f64))
            .sum::<f64>()
            / n as f64;
        assert_relative_eq!(solar.daily_insolation(40.0, 45.0), mean, max_relative = 1e-4);
    }
}
