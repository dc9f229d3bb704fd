//! Model parameters
//!
//! This module contains parameter structures for all models. Each parameter
//! struct provides defaults matching the course configuration and can be
//! partially overridden from a TOML file.

mod ice_sheet;
mod naked_planet;
mod near_future;
mod relaxation;
mod shallow_water;
mod solar;

pub use ice_sheet::IceSheetParameters;
pub use naked_planet::NakedPlanetParameters;
pub use near_future::NearFutureParameters;
pub use relaxation::RelaxationParameters;
pub use shallow_water::{
    CoriolisAlgorithm, Perturbation, RotationScheme, ShallowWaterParameters, WindScheme,
};
pub use solar::SolarParameters;
