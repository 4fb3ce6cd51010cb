//! Linked-account credentials: model, storage contract, and service.

mod model;
mod service;

pub use model::*;
pub use service::*;
