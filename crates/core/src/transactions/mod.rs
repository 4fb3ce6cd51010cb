//! Transaction log records and storage contract.

mod model;

pub use model::*;
