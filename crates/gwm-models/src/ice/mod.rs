//! Ice sheet models
//!
//! - `IceSheet`: 1-D ice sheet on a flat bed fed by uniform snowfall

mod sheet;

pub use sheet::IceSheet;
