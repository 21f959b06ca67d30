// src/math/error.rs

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("降雨強度は正の値である必要があります（指定値: {0} mm/hr）。")]
    NonPositiveRainRate(f64),
    #[error("積分には2点以上のグリッドが必要です（指定点数: {0}）。")]
    GridTooShort(usize),
    #[error("グリッド長（{grid}）と分布値の長さ（{values}）が一致しません。")]
    LengthMismatch { grid: usize, values: usize },
    #[error("重み付き平均の分母がゼロになりました。")]
    ZeroDenominator,
}
