//! Shallow water parameters
//!
//! Parameters for the toy ocean on a staggered U/V/H grid. The ocean is
//! deliberately tiny with a hacked, low gravity so that it equilibrates
//! within a few hundred simulated days.

use gwm_core::{FloatValue, GwmError};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How the Coriolis parameter varies between rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RotationScheme {
    /// $f = -7\times10^{-5} \sin(\phi)$ with latitude varying by row.
    WithLatitude,
    /// Uniform rotation with a +/- 40% gradient across the grid.
    PlusMinus,
    /// $f = -3.5\times10^{-5}$ everywhere.
    Uniform,
    /// No rotation.
    None,
}

/// How the rotation terms are placed on the staggered grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CoriolisAlgorithm {
    /// Ignore rotation altogether.
    Trivial,
    /// Use the neighbouring velocity component at the same index.
    ///
    /// Cheap but biased, produces diagonal stripes in long runs.
    Easy,
    /// Interpolate velocities onto cell centres, rotate, then interpolate back.
    Interpolated,
}

/// Zonal wind stress profile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WindScheme {
    /// One full sine wave across the rows, driving a gyre.
    Curled,
    /// The same eastward stress in every row.
    Uniform,
    None,
}

/// Initial displacement of the sea surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Perturbation {
    /// A single raised cell in the middle of the grid.
    Tower,
    /// The northern half raised by 10 cm.
    NSGradient,
    /// The western half raised by 10 cm.
    EWGradient,
    None,
}

macro_rules! impl_scheme_text {
    ($ty:ident { $($variant:ident => $text:literal),+ $(,)? }) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let text = match self {
                    $($ty::$variant => $text,)+
                };
                f.write_str(text)
            }
        }

        impl FromStr for $ty {
            type Err = GwmError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                $(
                    if s.eq_ignore_ascii_case($text) {
                        return Ok($ty::$variant);
                    }
                )+
                let expected = [$($text),+].join(", ");
                Err(GwmError::InvalidInput(format!(
                    "unknown {} '{}', expected one of: {}",
                    stringify!($ty),
                    s,
                    expected
                )))
            }
        }
    };
}

impl_scheme_text!(RotationScheme {
    WithLatitude => "WithLatitude",
    PlusMinus => "PlusMinus",
    Uniform => "Uniform",
    None => "None",
});

impl_scheme_text!(CoriolisAlgorithm {
    Trivial => "trivial",
    Easy => "easy",
    Interpolated => "interpolated",
});

impl_scheme_text!(WindScheme {
    Curled => "Curled",
    Uniform => "Uniform",
    None => "None",
});

impl_scheme_text!(Perturbation {
    Tower => "Tower",
    NSGradient => "NSGradient",
    EWGradient => "EWGradient",
    None => "None",
});

/// Parameters for the shallow water model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShallowWaterParameters {
    /// Number of grid columns.
    /// Default: 5
    pub ncol: usize,

    /// Number of grid rows.
    /// Default: 5
    pub nrow: usize,

    /// Number of output slices (frames).
    /// Default: 400
    pub n_slices: usize,

    /// Time steps taken per slice.
    /// Default: 1000
    pub steps_per_slice: usize,

    /// Connect the eastern and western edges instead of placing walls there.
    /// Default: false
    pub horizontal_wrap: bool,

    /// Default: PlusMinus
    pub rotation_scheme: RotationScheme,

    /// Default: Interpolated
    pub coriolis: CoriolisAlgorithm,

    /// Default: Curled
    pub wind_scheme: WindScheme,

    /// Default: None
    pub initial_perturbation: Perturbation,

    /// Time step (s).
    /// Default: 600
    pub dt: FloatValue,

    /// Gravitational acceleration ($\text{m/s}^2$), hacked low to run faster.
    /// Default: 9.8e-4
    pub gravity: FloatValue,

    /// Resting depth of the ocean (m).
    /// Default: 4000
    pub h_background: FloatValue,

    /// Zonal grid spacing (m).
    /// Default: 10e3
    pub dx: FloatValue,

    /// Meridional grid spacing (m).
    /// Default: 10e3
    pub dy: FloatValue,

    /// Linear drag coefficient (1/s), about a 10 day decay time.
    /// Default: 1e-6
    pub drag: FloatValue,

    /// Latitude of the grid centre (degrees), used by `WithLatitude`.
    /// Default: 30
    pub mean_latitude: FloatValue,
}

impl Default for ShallowWaterParameters {
    fn default() -> Self {
        Self {
            ncol: 5,
            nrow: 5,
            n_slices: 400,
            steps_per_slice: 1000,
            horizontal_wrap: false,
            rotation_scheme: RotationScheme::PlusMinus,
            coriolis: CoriolisAlgorithm::Interpolated,
            wind_scheme: WindScheme::Curled,
            initial_perturbation: Perturbation::None,
            dt: 600.0,
            gravity: 9.8e-4,
            h_background: 4000.0,
            dx: 10.0e3,
            dy: 10.0e3,
            drag: 1.0e-6,
            mean_latitude: 30.0,
        }
    }
}

impl ShallowWaterParameters {
    /// Grid spacing in degrees of latitude (110 km per degree).
    pub fn dx_degrees(&self) -> FloatValue {
        self.dx / 110.0e3
    }

    /// Square grid of `n` by `n` cells with all other values at their defaults.
    pub fn square(n: usize) -> Self {
        Self {
            ncol: n,
            nrow: n,
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_parsing_is_case_insensitive() {
        assert_eq!(
            "plusminus".parse::<RotationScheme>().unwrap(),
            RotationScheme::PlusMinus
        );
        assert_eq!(
            "Easy".parse::<CoriolisAlgorithm>().unwrap(),
            CoriolisAlgorithm::Easy
        );
        assert_eq!("curled".parse::<WindScheme>().unwrap(), WindScheme::Curled);
        assert_eq!(
            "nsgradient".parse::<Perturbation>().unwrap(),
            Perturbation::NSGradient
        );
    }

    #[test]
    fn test_unknown_scheme() {
        let err = "Sideways".parse::<RotationScheme>().unwrap_err();
        assert!(err.to_string().contains("WithLatitude"));
    }

    #[test]
    fn test_display_roundtrip() {
        for scheme in [
            WindScheme::Curled,
            WindScheme::Uniform,
            WindScheme::None,
        ] {
            assert_eq!(scheme.to_string().parse::<WindScheme>().unwrap(), scheme);
        }
    }

    #[test]
    fn test_enum_deserialization() {
        let json = r#"{"rotation_scheme": "Uniform", "coriolis": "Easy", "ncol": 10}"#;
        let params: ShallowWaterParameters = serde_json::from_str(json).unwrap();
        assert_eq!(params.rotation_scheme, RotationScheme::Uniform);
        assert_eq!(params.coriolis, CoriolisAlgorithm::Easy);
        assert_eq!(params.ncol, 10);
        assert_eq!(params.nrow, 5);
    }
}
