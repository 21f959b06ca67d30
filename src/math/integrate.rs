// src/math/integrate.rs

use crate::math::error::MathError;

/// 重み付き平均粒径の推定
///
/// 分子 Σ g[i]·v[i]·Δ[i] と分母 Σ v[i]·Δ[i] を左端点リーマン和
/// （Δ[i] = g[i+1] - g[i]、i = 0..len-1）で計算し、その比を返す。
/// 最終グリッド点の値は重みに使われない。
///
/// # 引数
/// - `grid`: 粒径グリッド（昇順）
/// - `values`: 各グリッド点における分布値（グリッドと同じ長さ）
///
/// # 戻り値
/// - 重み付き平均粒径（グリッドと同じ単位）
pub fn weighted_mean(grid: &[f64], values: &[f64]) -> Result<f64, MathError> {
    if grid.len() != values.len() {
        return Err(MathError::LengthMismatch {
            grid: grid.len(),
            values: values.len(),
        });
    }
    if grid.len() < 2 {
        return Err(MathError::GridTooShort(grid.len()));
    }

    let mut numerator = 0.0;
    let mut denominator = 0.0;
    for i in 0..grid.len() - 1 {
        let delta = grid[i + 1] - grid[i];
        numerator += grid[i] * values[i] * delta;
        denominator += values[i] * delta;
    }

    if denominator == 0.0 {
        return Err(MathError::ZeroDenominator);
    }
    Ok(numerator / denominator)
}
