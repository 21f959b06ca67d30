// src/math/grid.rs

/// 等間隔の粒径グリッドを生成する純粋関数
///
/// 終端 `max` は含まない（0, step, 2*step, ... < max）。
///
/// # 引数
/// - `max`: グリッドの上限（mm、この値自体は含まない）
/// - `step`: グリッド間隔（mm）
///
/// # 戻り値
/// - 粒径グリッド（mm）
pub fn diameter_grid_mm(max: f64, step: f64) -> Vec<f64> {
    let count = (max / step).ceil() as usize;
    (0..count).map(|i| i as f64 * step).collect()
}

/// mm単位のグリッドをcm単位に変換する純粋関数
pub fn to_centimeters(grid_mm: &[f64]) -> Vec<f64> {
    grid_mm.iter().map(|d| d * 0.1).collect()
}
