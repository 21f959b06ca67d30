// src/simulation/mod.rs

pub mod load_parameters;
pub mod csv;
pub mod framework;
pub mod plot;

use crate::models::{DistributionCurve, FallSpeedResult};

/// 解析の全体結果を表す構造体
pub struct AnalysisState {
    pub grid_mm: Vec<f64>,                  // 粒径グリッド（mm）
    pub grid_cm: Vec<f64>,                  // 粒径グリッド（cm）
    pub curves: Vec<DistributionCurve>,     // 降雨強度ごとの分布曲線
    pub weighted_diameter_cm: f64,          // 重み付き平均粒径（cm）
    pub fall_speed: FallSpeedResult,        // 落下速度計算の結果
}
