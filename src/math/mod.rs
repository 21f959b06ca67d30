// src/math/mod.rs

pub mod error;
pub mod grid;
pub mod integrate;

pub use error::MathError;
pub use grid::diameter_grid_mm;
pub use grid::to_centimeters;
pub use integrate::weighted_mean;
