//! CO2 driven warming with aerosol masking
//!
//! - `NearFuture`: "business as usual" growth of CO2 and the "world without
//!   us" scenario in which emissions stop once CO2 crosses a threshold
//! - `climate_sensitivity_for`: the doubled-CO2 sensitivity that reproduces
//!   an observed transient warming
//! - `unmasking_years`: years in which stopping emissions is warmer than
//!   continuing, because the aerosol masking disappears with them

mod scenario;
mod sensitivity;

pub use scenario::{radiative_forcing, NearFuture, Scenario};
pub use sensitivity::{compare, climate_sensitivity_for, unmasking_years, ComparisonRow};
