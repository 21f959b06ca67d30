// src/models/distribution.rs

use crate::math::MathError;

/// 1つの降雨強度に対する粒径分布曲線
#[derive(Debug, Clone, PartialEq)]
pub struct DistributionCurve {
    pub label: String,          // 凡例ラベル（例: "1 mm/hr"）
    pub rain_rate: f64,         // 降雨強度（mm/hr）
    pub slope: f64,             // 勾配パラメータ Λ
    pub values: Vec<f64>,       // 各グリッド点の数密度 n(D)
}

/// Marshall-Palmer分布の勾配パラメータ Λ(R) を計算する純粋関数
///
/// Λ = a * R^b（経験則: a = 41, b = -0.21）。
/// R <= 0 では冪乗が定義されないため、NaNを返す代わりにエラーとする。
///
/// # 引数
/// - `rain_rate`: 降雨強度 R（mm/hr、正の値）
/// - `coefficient`: 係数 a
/// - `exponent`: 指数 b
///
/// # 戻り値
/// - 勾配パラメータ Λ
pub fn slope_parameter(
    rain_rate: f64,
    coefficient: f64,
    exponent: f64,
) -> Result<f64, MathError> {
    if rain_rate <= 0.0 {
        return Err(MathError::NonPositiveRainRate(rain_rate));
    }
    Ok(coefficient * rain_rate.powf(exponent))
}

/// 数密度曲線 n(D) = N0 * exp(-Λ * D) を計算する純粋関数
///
/// # 引数
/// - `grid_cm`: 粒径グリッド（cm）
/// - `intercept_n0`: 切片パラメータ N0
/// - `slope`: 勾配パラメータ Λ
///
/// # 戻り値
/// - グリッドと同じ長さの数密度列
pub fn number_density_curve(grid_cm: &[f64], intercept_n0: f64, slope: f64) -> Vec<f64> {
    grid_cm
        .iter()
        .map(|d| intercept_n0 * (-slope * d).exp())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::{diameter_grid_mm, to_centimeters};

    /// test_slope_parameter_unit_rain_rate
    /// R = 1 のとき 1^(-0.21) = 1 なので Λ = 41 ちょうどになります。
    #[test]
    fn test_slope_parameter_unit_rain_rate() {
        let slope = slope_parameter(1.0, 41.0, -0.21).unwrap();
        assert!((slope - 41.0).abs() < 1e-12);
    }

    /// test_slope_parameter_decreases_with_rain_rate
    /// 指数が負であるため、Λ(R) は R について単調減少します:
    /// Λ(25) < Λ(5) < Λ(1)。
    #[test]
    fn test_slope_parameter_decreases_with_rain_rate() {
        let slope_1 = slope_parameter(1.0, 41.0, -0.21).unwrap();
        let slope_5 = slope_parameter(5.0, 41.0, -0.21).unwrap();
        let slope_25 = slope_parameter(25.0, 41.0, -0.21).unwrap();
        assert!(slope_25 < slope_5);
        assert!(slope_5 < slope_1);
    }

    /// test_slope_parameter_rejects_non_positive_rain_rate
    /// R = 0 および R < 0 はエラーになります。
    #[test]
    fn test_slope_parameter_rejects_non_positive_rain_rate() {
        assert_eq!(
            slope_parameter(0.0, 41.0, -0.21),
            Err(MathError::NonPositiveRainRate(0.0))
        );
        assert_eq!(
            slope_parameter(-1.0, 41.0, -0.21),
            Err(MathError::NonPositiveRainRate(-1.0))
        );
    }

    /// test_number_density_at_origin_equals_intercept
    /// D = 0 では exp(0) = 1 なので、降雨強度によらず n(0) = N0 = 8000
    /// になります（3本の曲線は原点で一致する）。
    #[test]
    fn test_number_density_at_origin_equals_intercept() {
        let grid_cm = to_centimeters(&diameter_grid_mm(5.0, 0.1));
        let n0 = 0.08 * 1.0e6 * 1.0e-1;
        for rate in [1.0, 5.0, 25.0] {
            let slope = slope_parameter(rate, 41.0, -0.21).unwrap();
            let curve = number_density_curve(&grid_cm, n0, slope);
            assert!((curve[0] - 8000.0).abs() < 1e-9);
        }
    }

    /// test_number_density_is_monotonically_non_increasing
    /// Λ > 0 のとき exp(-ΛD) は減少関数なので、n(D) は D について
    /// 単調非増加になります。
    #[test]
    fn test_number_density_is_monotonically_non_increasing() {
        let grid_cm = to_centimeters(&diameter_grid_mm(5.0, 0.1));
        let slope = slope_parameter(5.0, 41.0, -0.21).unwrap();
        let curve = number_density_curve(&grid_cm, 8000.0, slope);
        for pair in curve.windows(2) {
            assert!(pair[1] <= pair[0]);
        }
    }
}
