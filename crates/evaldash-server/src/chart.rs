//! Inline SVG bar chart for the transposed score row

use std::fmt::Write;

use evaldash_core::ChartData;

use crate::render::escape_html;

const WIDTH: f64 = 640.0;
const HEIGHT: f64 = 320.0;
const PAD_LEFT: f64 = 48.0;
const PAD_RIGHT: f64 = 16.0;
const PAD_TOP: f64 = 16.0;
const PAD_BOTTOM: f64 = 40.0;
const GRID_STEPS: usize = 5;
const SERIES_COLORS: &[&str] = &["#3498db", "#e67e22", "#2ecc71"];

/// Axis top: scores live in [0, 1], so the axis never goes past 1.0
/// unless a value does.
fn axis_max(chart: &ChartData) -> f64 {
    chart.max_value().max(1.0)
}

pub fn bar_chart_svg(chart: &ChartData) -> String {
    let plot_w = WIDTH - PAD_LEFT - PAD_RIGHT;
    let plot_h = HEIGHT - PAD_TOP - PAD_BOTTOM;
    let y_max = axis_max(chart);
    let categories = chart.categories.len().max(1);
    let series = chart.series.len().max(1);
    let band = plot_w / categories as f64;
    let bar_w = band * 0.7 / series as f64;

    let mut svg = String::new();
    let _ = writeln!(
        svg,
        "<svg class='chart' xmlns='http://www.w3.org/2000/svg' viewBox='0 0 {WIDTH:.0} {HEIGHT:.0}' role='img'>"
    );

    for step in 0..=GRID_STEPS {
        let value = y_max * step as f64 / GRID_STEPS as f64;
        let y = PAD_TOP + plot_h - value / y_max * plot_h;
        let _ = writeln!(
            svg,
            "  <line class='grid' x1='{PAD_LEFT:.0}' y1='{y:.2}' x2='{:.0}' y2='{y:.2}' stroke='#e5e8ec'/>",
            WIDTH - PAD_RIGHT
        );
        let _ = writeln!(
            svg,
            "  <text x='{:.0}' y='{:.2}' font-size='11' text-anchor='end' fill='#7f8c8d'>{value:.1}</text>",
            PAD_LEFT - 6.0,
            y + 4.0
        );
    }

    for (c, category) in chart.categories.iter().enumerate() {
        let band_x = PAD_LEFT + band * c as f64;
        for (s, series_data) in chart.series.iter().enumerate() {
            let Some(value) = series_data.values.get(c).copied() else {
                continue;
            };
            let h = value / y_max * plot_h;
            let x = band_x + band * 0.15 + bar_w * s as f64;
            let y = PAD_TOP + plot_h - h;
            let color = SERIES_COLORS[s % SERIES_COLORS.len()];
            let _ = writeln!(
                svg,
                "  <rect class='bar' data-series='{}' data-category='{}' x='{x:.2}' y='{y:.2}' width='{bar_w:.2}' height='{h:.2}' fill='{color}'><title>{}: {value:.2}</title></rect>",
                escape_html(&series_data.name),
                escape_html(category),
                escape_html(category)
            );
        }
        let _ = writeln!(
            svg,
            "  <text x='{:.2}' y='{:.0}' font-size='12' text-anchor='middle' fill='#2c3e50'>{}</text>",
            band_x + band / 2.0,
            HEIGHT - PAD_BOTTOM + 18.0,
            escape_html(category)
        );
    }

    let legend_y = HEIGHT - 8.0;
    for (s, series_data) in chart.series.iter().enumerate() {
        let x = PAD_LEFT + 140.0 * s as f64;
        let color = SERIES_COLORS[s % SERIES_COLORS.len()];
        let _ = writeln!(
            svg,
            "  <rect x='{x:.0}' y='{:.0}' width='10' height='10' fill='{color}'/><text x='{:.0}' y='{legend_y:.0}' font-size='11' fill='#2c3e50'>{}</text>",
            legend_y - 9.0,
            x + 14.0,
            escape_html(&series_data.name)
        );
    }

    svg.push_str("</svg>");
    svg
}

#[cfg(test)]
mod tests {
    use super::*;
    use evaldash_core::{ModelName, ScoreTable};

    fn svm_chart() -> ChartData {
        let row = ScoreTable::builtin().unwrap().get_scores(ModelName::Svm);
        ChartData::from_row(ModelName::Svm, &row)
    }

    #[test]
    fn test_one_bar_per_metric() {
        let svg = bar_chart_svg(&svm_chart());
        assert_eq!(svg.matches("class='bar'").count(), 4);
        for metric in ["Accuracy", "Precision", "Recall", "F1-score"] {
            assert!(svg.contains(&format!("data-category='{metric}'")), "{metric}");
        }
        assert_eq!(svg.matches("data-series='SVM'").count(), 4);
    }

    #[test]
    fn test_bar_heights_scale_with_value() {
        let svg = bar_chart_svg(&svm_chart());
        let plot_h = HEIGHT - PAD_TOP - PAD_BOTTOM;
        assert!(svg.contains(&format!("height='{:.2}'", 0.88 * plot_h)));
        assert!(svg.contains(&format!("height='{:.2}'", 0.84 * plot_h)));
    }

    #[test]
    fn test_axis_caps_at_one() {
        assert_eq!(axis_max(&svm_chart()), 1.0);
    }
}
