// src/config/mod.rs

pub mod parameters;
pub mod scenario;

pub use parameters::Parameters;
pub use scenario::Scenario;
