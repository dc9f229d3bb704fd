pub mod config;
pub mod constants;
pub mod math;
pub mod solver;
pub mod timeseries;

pub mod errors;

pub use errors::{GwmError, GwmResult};
pub use timeseries::{FloatValue, Time, Timeseries};
