// src/models/fallspeed.rs

/// 落下速度計算の結果
#[derive(Debug, Clone, PartialEq)]
pub struct FallSpeedResult {
    pub diameters_um: Vec<f64>,     // 固定粒径セット（µm）
    pub radii_m: Vec<f64>,          // 対応する半径（m）
    pub small_drop_w: Vec<f64>,     // 小滴域の経験式 W1（radii_m に対応）
    pub stokes_w: Vec<f64>,         // Stokes型の項 W2（粒径グリッドに対応）
}

/// µm単位の粒径列をm単位の半径列に変換する純粋関数
pub fn radii_from_diameters_um(diameters_um: &[f64]) -> Vec<f64> {
    diameters_um.iter().map(|d| d * 1.0e-6 / 2.0).collect()
}

/// 小滴域の終端速度項 W1 = c * r^2 を計算する純粋関数
///
/// # 引数
/// - `radius_m`: 半径（m）
/// - `coefficient`: 経験係数 c（典型値 1.2e8）
pub fn small_drop_terminal_velocity(radius_m: f64, coefficient: f64) -> f64 {
    coefficient * radius_m.powi(2)
}

/// Stokes型の沈降項 W2 = -sqrt(ρ_liq/ρ_air * g * D) を計算する純粋関数
///
/// D >= 0 かつ密度・重力加速度が正であれば平方根の引数は非負であり、
/// 結果は常に実数になる。
///
/// # 引数
/// - `diameter`: 粒径
/// - `air_density`: 大気密度 ρ_air（kg/m³）
/// - `liquid_density`: 液滴密度 ρ_liq（kg/m³）
/// - `gravity`: 重力加速度 g（m/s²）
pub fn stokes_settling_term(
    diameter: f64,
    air_density: f64,
    liquid_density: f64,
    gravity: f64,
) -> f64 {
    -(liquid_density / air_density * gravity * diameter).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// test_radii_conversion
    /// {0, 50, 1000, 5000} µm → 半径 {0, 25e-6, 500e-6, 2500e-6} m。
    #[test]
    fn test_radii_conversion() {
        let radii = radii_from_diameters_um(&[0.0, 50.0, 1000.0, 5000.0]);
        let expected = [0.0, 25.0e-6, 500.0e-6, 2500.0e-6];
        for (r, e) in radii.iter().zip(expected.iter()) {
            assert!((r - e).abs() < 1e-15);
        }
    }

    /// test_small_drop_zero_diameter
    /// 粒径0では W1 = 0 ちょうどになります。
    #[test]
    fn test_small_drop_zero_diameter() {
        assert_eq!(small_drop_terminal_velocity(0.0, 1.2e8), 0.0);
    }

    /// test_small_drop_strictly_increasing
    /// W1 は半径（したがって粒径）について狭義単調増加します。
    #[test]
    fn test_small_drop_strictly_increasing() {
        let radii = radii_from_diameters_um(&[50.0, 1000.0, 5000.0]);
        let w: Vec<f64> = radii
            .iter()
            .map(|r| small_drop_terminal_velocity(*r, 1.2e8))
            .collect();
        assert!(w[0] < w[1]);
        assert!(w[1] < w[2]);
    }

    /// test_small_drop_reference_value
    /// r = 25e-6 m のとき W1 = 1.2e8 * (25e-6)^2 = 0.075 m/s。
    #[test]
    fn test_small_drop_reference_value() {
        let w = small_drop_terminal_velocity(25.0e-6, 1.2e8);
        assert!((w - 0.075).abs() < 1e-12);
    }

    /// test_stokes_term_is_real_and_non_positive
    /// D >= 0 では平方根の引数が非負なので、W2 は常に実数（NaNでない）
    /// かつ非正になります。
    #[test]
    fn test_stokes_term_is_real_and_non_positive() {
        for i in 0..50 {
            let d = i as f64 * 0.1;
            let w = stokes_settling_term(d, 1.0, 1000.0, 9.81);
            assert!(w.is_finite());
            assert!(w <= 0.0);
        }
    }

    /// test_stokes_term_zero_diameter
    /// D = 0 では W2 = 0 になります。
    #[test]
    fn test_stokes_term_zero_diameter() {
        assert_eq!(stokes_settling_term(0.0, 1.0, 1000.0, 9.81), 0.0);
    }
}
