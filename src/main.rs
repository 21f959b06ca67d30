// src/main.rs

use std::error::Error;
use std::fs::create_dir_all;

use log::info;

use simulation::csv::*;
use simulation::framework::*;
use simulation::load_parameters::*;
use simulation::plot::*;

mod config;
mod math;
mod models;
mod simulation;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();

    // 設定とシナリオの読み込み
    let params = load_parameters("config/parameters.yaml")?;
    let scenario = load_scenario("config/scenario.yaml")?;
    info!(
        "設定を読み込みました（降雨強度ケース: {}件）",
        scenario.rain_rate_cases.len()
    );

    // 解析の実行
    let state = run_analysis(&params, &scenario)?;
    info!(
        "重み付き平均粒径: {:.4} cm（R = {} mm/hr で評価）",
        state.weighted_diameter_cm, scenario.weighted_diameter.rain_rate
    );

    // 出力先の準備
    create_dir_all("output")?;

    // CSV出力
    let mut dist_writer = setup_csv_output("output/distribution.csv")?;
    write_distribution_csv(&mut dist_writer, &state)?;
    let mut fall_writer = setup_csv_output("output/fallspeed.csv")?;
    write_fall_speed_csv(&mut fall_writer, &state)?;
    info!("CSVを書き出しました: output/distribution.csv, output/fallspeed.csv");

    // 分布図の描画
    render_distribution_plot("output/distribution.svg", &state)?;
    info!("分布図を書き出しました: output/distribution.svg");

    Ok(())
}
