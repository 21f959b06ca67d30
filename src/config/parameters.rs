// src/config/parameters.rs

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone)]
pub struct Parameters {
    pub distribution: DistributionParameters,
    pub grid: GridParameters,
    pub fall_speed: FallSpeedParameters,
}

#[derive(Debug, Deserialize, Clone)]
pub struct DistributionParameters {
    pub intercept_n0: f64, // 切片パラメータ N0 (m^-3 mm^-1)
    pub slope_coefficient: f64, // Λ = a * R^b の係数 a
    pub slope_exponent: f64, // Λ = a * R^b の指数 b
}

#[derive(Debug, Deserialize, Clone)]
pub struct GridParameters {
    pub diameter_max_mm: f64, // 粒径グリッドの上限 (mm、含まない)
    pub step_mm: f64, // グリッド間隔 (mm)
}

#[derive(Debug, Deserialize, Clone)]
pub struct FallSpeedParameters {
    pub air_density: f64,            // 大気密度 ρ_air（kg/m³）
    pub liquid_density: f64,         // 液滴密度 ρ_liq（kg/m³）
    pub gravity: f64,                // 重力加速度 g（m/s²）
    pub small_drop_coefficient: f64, // 小滴域の経験係数（1.2e8）
    pub drop_diameters_um: Vec<f64>, // 固定粒径セット（µm）
}
