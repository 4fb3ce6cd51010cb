//! Category reference data.

mod model;

pub use model::*;
