//! Ocean models
//!
//! - `ShallowWaterModel`: wind and rotation driven flow on a staggered U/V/H grid

mod coriolis;
mod shallow_water;
mod state;
mod wind;

pub use coriolis::rotation_constants;
pub use shallow_water::{CellValues, ShallowWaterModel};
pub use state::ShallowWaterState;
pub use wind::wind_profile;
