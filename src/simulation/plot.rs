// src/simulation/plot.rs

use std::error::Error;

use plotters::prelude::*;

use crate::simulation::AnalysisState;

const SERIES_COLORS: [RGBColor; 3] = [BLUE, RED, GREEN];

/// 片対数（log-y）プロットのy軸範囲の決定
///
/// 全曲線の正の最小値と最大値を取り、上下に1桁ずつ余裕を持たせる。
pub fn log_axis_range(state: &AnalysisState) -> (f64, f64) {
    let mut y_min = f64::INFINITY;
    let mut y_max = f64::NEG_INFINITY;
    for curve in &state.curves {
        for &v in &curve.values {
            if v > 0.0 {
                y_min = y_min.min(v);
                y_max = y_max.max(v);
            }
        }
    }
    (y_min / 10.0, y_max * 10.0)
}

/// Marshall-Palmer分布の片対数プロットをSVGに描画する
pub fn render_distribution_plot(
    path: &str,
    state: &AnalysisState,
) -> Result<(), Box<dyn Error>> {
    let (y_min, y_max) = log_axis_range(state);
    let x_max = state.grid_mm.last().copied().unwrap_or(0.0);

    let root = SVGBackend::new(path, (1000, 800)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption(
            "Marshall Palmer distribution for three rain rates",
            ("sans-serif", 24),
        )
        .margin(10)
        .x_label_area_size(50)
        .y_label_area_size(70)
        .build_cartesian_2d(0.0..x_max, (y_min..y_max).log_scale())?;

    chart
        .configure_mesh()
        .x_desc("Drop diameter (mm)")
        .y_desc("n(D) m^-3 mm^-1")
        .draw()?;

    for (index, curve) in state.curves.iter().enumerate() {
        let color = SERIES_COLORS[index % SERIES_COLORS.len()];
        let points = state
            .grid_mm
            .iter()
            .copied()
            .zip(curve.values.iter().copied());
        chart
            .draw_series(LineSeries::new(points, color))?
            .label(curve.label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color));
    }

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    Ok(())
}
