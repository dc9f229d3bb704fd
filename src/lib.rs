//! Global Warming II course models
//!
//! The physics lives in [`gwm_models`] with shared numerics in [`gwm_core`].
//! This crate holds the command line plumbing used by the binaries in
//! `src/bin`.

pub mod cli;

pub use gwm_core;
pub use gwm_models;
