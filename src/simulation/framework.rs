// src/simulation/framework.rs

use std::error::Error;

use crate::config::parameters::Parameters;
use crate::config::scenario::Scenario;
use crate::math::{diameter_grid_mm, to_centimeters, weighted_mean};
use crate::models::distribution::{number_density_curve, slope_parameter};
use crate::models::fallspeed::{
    radii_from_diameters_um, small_drop_terminal_velocity, stokes_settling_term,
};
use crate::models::{DistributionCurve, FallSpeedResult};
use crate::simulation::AnalysisState;

/// 解析パイプラインの実行
///
/// グリッド生成 → 降雨強度ごとの分布曲線 → 重み付き平均粒径 →
/// 落下速度計算、の順に逐次実行する。降雨強度と Λ は呼び出しごとの
/// 明示的な引数であり、前のケースの値を引き継ぐことはない。
pub fn run_analysis(
    params: &Parameters,
    scenario: &Scenario,
) -> Result<AnalysisState, Box<dyn Error>> {
    let grid_mm = diameter_grid_mm(params.grid.diameter_max_mm, params.grid.step_mm);
    let grid_cm = to_centimeters(&grid_mm);

    // 降雨強度ごとの分布曲線
    let dist = &params.distribution;
    let curves: Vec<DistributionCurve> = scenario
        .rain_rate_cases
        .iter()
        .map(|case| -> Result<DistributionCurve, Box<dyn Error>> {
            let slope =
                slope_parameter(case.rain_rate, dist.slope_coefficient, dist.slope_exponent)?;
            let values = number_density_curve(&grid_cm, dist.intercept_n0, slope);
            Ok(DistributionCurve {
                label: case.label.clone(),
                rain_rate: case.rain_rate,
                slope,
                values,
            })
        })
        .collect::<Result<_, _>>()?;

    // 重み付き平均粒径（シナリオで指定された降雨強度で評価）
    let wd_slope = slope_parameter(
        scenario.weighted_diameter.rain_rate,
        dist.slope_coefficient,
        dist.slope_exponent,
    )?;
    let wd_values = number_density_curve(&grid_cm, dist.intercept_n0, wd_slope);
    let weighted_diameter_cm = weighted_mean(&grid_cm, &wd_values)?;

    // 落下速度計算
    let fs = &params.fall_speed;
    let radii_m = radii_from_diameters_um(&fs.drop_diameters_um);
    let small_drop_w: Vec<f64> = radii_m
        .iter()
        .map(|r| small_drop_terminal_velocity(*r, fs.small_drop_coefficient))
        .collect();
    let stokes_w: Vec<f64> = grid_mm
        .iter()
        .map(|d| stokes_settling_term(*d, fs.air_density, fs.liquid_density, fs.gravity))
        .collect();

    Ok(AnalysisState {
        grid_mm,
        grid_cm,
        curves,
        weighted_diameter_cm,
        fall_speed: FallSpeedResult {
            diameters_um: fs.drop_diameters_um.clone(),
            radii_m,
            small_drop_w,
            stokes_w,
        },
    })
}
