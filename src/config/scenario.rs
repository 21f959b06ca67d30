// src/config/scenario.rs

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Scenario {
    pub rain_rate_cases: Vec<RainRateCase>,
    pub weighted_diameter: WeightedDiameterCase,
}

#[derive(Debug, Deserialize)]
pub struct RainRateCase {
    pub label: String,
    pub rain_rate: f64, // 降雨強度 (mm/hr)
}

#[derive(Debug, Deserialize)]
pub struct WeightedDiameterCase {
    pub rain_rate: f64, // 重み付き平均粒径の評価に使う降雨強度 (mm/hr)
}
