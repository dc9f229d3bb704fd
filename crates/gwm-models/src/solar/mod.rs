//! Solar irradiance for a planet on a Keplerian orbit
//!
//! - `Planet`: orbital elements with Earth and Mars presets
//! - `Solar`: beam, horizontal and daily mean irradiance at the top of the atmosphere

mod irradiance;
mod orbit;

pub use irradiance::{OrbitPoint, Solar};
pub use orbit::Planet;
