// src/simulation/csv.rs

use std::error::Error;
use std::fs::File;
use std::io::BufWriter;
use std::io::Write;

use crate::simulation::AnalysisState;

/// CSV出力の設定
pub fn setup_csv_output(path: &str) -> Result<Box<dyn Write>, Box<dyn Error>> {
    let output_file = File::create(path)?;
    let writer = BufWriter::new(output_file);
    Ok(Box::new(writer))
}

/// 分布CSVのヘッダーの作成
pub fn create_distribution_header(state: &AnalysisState) -> String {
    let mut header = String::from("diameter(mm),");

    // 降雨強度ごとの数密度列
    for curve in &state.curves {
        header.push_str(&format!("n_{}(m^-3 mm^-1),", curve.rain_rate));
    }

    // Stokes型の沈降項
    header.push_str("stokes_w(m/s)");
    header.push('\n');
    header
}

/// 分布CSVの1行（グリッド点ごと）の作成
pub fn create_distribution_row(state: &AnalysisState, index: usize) -> String {
    let mut row = format!("{},", state.grid_mm[index]);

    for curve in &state.curves {
        row.push_str(&format!("{},", curve.values[index]));
    }

    row.push_str(&format!("{}", state.fall_speed.stokes_w[index]));
    row.push('\n');
    row
}

/// 分布CSV全体の書き込み
pub fn write_distribution_csv<W: Write>(
    writer: &mut W,
    state: &AnalysisState,
) -> Result<(), std::io::Error> {
    writer.write_all(create_distribution_header(state).as_bytes())?;
    for index in 0..state.grid_mm.len() {
        writer.write_all(create_distribution_row(state, index).as_bytes())?;
    }
    Ok(())
}

/// 落下速度CSV全体の書き込み（固定粒径セット）
pub fn write_fall_speed_csv<W: Write>(
    writer: &mut W,
    state: &AnalysisState,
) -> Result<(), std::io::Error> {
    writer.write_all(b"diameter(um),radius(m),small_drop_w(m/s)\n")?;
    let fs = &state.fall_speed;
    for ((diameter, radius), w) in fs
        .diameters_um
        .iter()
        .zip(fs.radii_m.iter())
        .zip(fs.small_drop_w.iter())
    {
        writer.write_all(format!("{},{},{}\n", diameter, radius, w).as_bytes())?;
    }
    Ok(())
}
