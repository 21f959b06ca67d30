// src/models/mod.rs

pub mod distribution;
pub mod fallspeed;

pub use distribution::DistributionCurve;
pub use fallspeed::FallSpeedResult;
