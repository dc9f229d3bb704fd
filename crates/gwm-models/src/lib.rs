//! Simplified climate models for the Global Warming II exercises
//!
//! Each module implements one of the Global Warming II course models as a
//! small owned struct that is stepped in place.
//!
//! # Module Organisation
//!
//! Models are organised by domain:
//! - `ice`: 1-D ice sheet flow
//! - `energy_balance`: naked planet time stepping and albedo/temperature relaxation
//! - `forcing`: CO2 driven warming with aerosol masking
//! - `ocean`: shallow water model on a staggered grid
//! - `solar`: top of atmosphere irradiance for a planet on a Keplerian orbit
//!
//! # Parameters
//!
//! Each model has an associated parameters struct in the `parameters` module
//! with defaults matching the values used in the course.

pub mod energy_balance;
pub mod forcing;
pub mod ice;
pub mod ocean;
pub mod parameters;
pub mod solar;
