//! Energy balance models
//!
//! - `NakedPlanet`: time stepping of a planet without an atmosphere towards
//!   radiative equilibrium
//! - `AlbedoRelaxation`: iterating temperature and ice albedo to a consistent
//!   state for a given solar luminosity

mod naked_planet;
mod relaxation;

pub use naked_planet::{equilibrium_temperature, NakedPlanet, NakedPlanetStep};
pub use relaxation::{
    albedo_from_latitude, ice_latitude, AlbedoRelaxation, RelaxedState, SweepPoint,
};
