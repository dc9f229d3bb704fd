use gwm_core::FloatValue;
use serde::{Deserialize, Serialize};

/// Keplerian orbit and axial tilt of a planet.
///
/// Positions along the orbit are given by the true (areocentric for Mars)
/// longitude $L_s$ in degrees, measured from the vernal equinox.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Planet {
    /// Semi-major axis (AU).
    pub semi_major_axis: FloatValue,
    pub eccentricity: FloatValue,
    /// True longitude of perihelion (degrees).
    pub longitude_of_perihelion: FloatValue,
    /// Obliquity (degrees).
    pub obliquity: FloatValue,
}

impl Planet {
    pub fn earth() -> Self {
        Self {
            semi_major_axis: 1.0,
            eccentricity: 0.017,
            longitude_of_perihelion: 102.94719,
            obliquity: 23.4393,
        }
    }

    /// Orbital elements from Appelbaum & Flood (1990).
    pub fn mars() -> Self {
        Self {
            semi_major_axis: 1.5236915,
            eccentricity: 0.093377,
            longitude_of_perihelion: 248.0,
            obliquity: 24.936,
        }
    }

    /// True anomaly (degrees) at true longitude `ls`.
    pub fn true_anomaly(&self, ls: FloatValue) -> FloatValue {
        ls - self.longitude_of_perihelion
    }

    /// Distance from the sun (AU) at true longitude `ls`.
    ///
    /// $$r = \frac{a (1 - e^2)}{1 + e \cos \nu}$$
    pub fn distance(&self, ls: FloatValue) -> FloatValue {
        let nu = self.true_anomaly(ls).to_radians();
        let e = self.eccentricity;
        self.semi_major_axis * (1.0 - e * e) / (1.0 + e * nu.cos())
    }

    pub fn perihelion_distance(&self) -> FloatValue {
        self.semi_major_axis * (1.0 - self.eccentricity)
    }

    pub fn aphelion_distance(&self) -> FloatValue {
        self.semi_major_axis * (1.0 + self.eccentricity)
    }

    /// Sine of the solar declination at true longitude `ls`.
    pub fn sin_declination(&self, ls: FloatValue) -> FloatValue {
        self.obliquity.to_radians().sin() * ls.to_radians().sin()
    }

    /// Solar declination (degrees) at true longitude `ls`.
    pub fn declination(&self, ls: FloatValue) -> FloatValue {
        self.sin_declination(ls).asin().to_degrees()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_distance_extremes() {
        let earth = Planet::earth();
        assert_relative_eq!(
            earth.distance(earth.longitude_of_perihelion),
            earth.perihelion_distance(),
            max_relative = 1e-12
        );
        assert_relative_eq!(
            earth.distance(earth.longitude_of_perihelion + 180.0),
            earth.aphelion_distance(),
            max_relative = 1e-12
        );
        assert_relative_eq!(earth.perihelion_distance(), 0.983);
    }

    #[test]
    fn test_declination() {
        let earth = Planet::earth();
        assert_eq!(earth.sin_declination(0.0), 0.0);
        assert_relative_eq!(earth.declination(90.0), 23.4393, max_relative = 1e-12);
        assert_relative_eq!(earth.declination(270.0), -23.4393, max_relative = 1e-12);
    }

    #[test]
    fn test_mars_is_further_and_more_eccentric() {
        let earth = Planet::earth();
        let mars = Planet::mars();
        assert!(mars.perihelion_distance() > earth.aphelion_distance());
        assert!(
            mars.aphelion_distance() / mars.perihelion_distance()
                > earth.aphelion_distance() / earth.perihelion_distance()
        );
    }

    #[test]
    fn test_planet_from_json() {
        let mars: Planet = serde_json::from_str(
            r#"{"semi_major_axis": 1.5236915, "eccentricity": 0.093377,
                "longitude_of_perihelion": 248.0, "obliquity": 24.936}"#,
        )
        .unwrap();
        assert_eq!(mars, Planet::mars());
    }
}
