use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints};

use crate::color::ColorMap;
use crate::data::query::{Slice, Trend};
use crate::state::ChartKind;

const PLOT_HEIGHT: f32 = 320.0;

fn base_plot(id: &str) -> Plot<'_> {
    Plot::new(id)
        .legend(Legend::default())
        .x_axis_label("Year")
        .y_axis_label("Immigrants")
        .height(PLOT_HEIGHT)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
}

/// Owned plot points; they do not borrow from `points`.
fn to_points(points: &[(i32, u64)]) -> PlotPoints<'static> {
    points.iter().map(|&(y, c)| [y as f64, c as f64]).collect()
}

// ---------------------------------------------------------------------------
// Single-country trend: filled area
// ---------------------------------------------------------------------------

pub fn trend_plot(ui: &mut Ui, trend: &Trend) {
    if trend.is_empty() {
        return;
    }
    base_plot("trend_plot").show(ui, |plot_ui| {
        let line = Line::new(to_points(trend.points()))
            .name(&trend.country)
            .color(Color32::LIGHT_BLUE)
            .fill(0.0)
            .width(1.5);
        plot_ui.line(line);
    });
}

// ---------------------------------------------------------------------------
// Multi-country comparison
// ---------------------------------------------------------------------------

pub fn comparison_plot(ui: &mut Ui, slice: &Slice<'_>, kind: ChartKind, colors: &ColorMap) {
    if slice.is_empty() {
        ui.label("Select countries to compare.");
        return;
    }

    let series: Vec<(&str, Vec<(i32, u64)>)> = slice.series().collect();
    // Stacked: each layer sits on the running sum of the previous ones.
    let stacked = match kind {
        ChartKind::Area => stack(&series),
        ChartKind::Line | ChartKind::Bar => Vec::new(),
    };

    base_plot("comparison_plot").show(ui, |plot_ui| match kind {
        ChartKind::Line => {
            for (country, points) in &series {
                let line = Line::new(to_points(points))
                    .name(*country)
                    .color(colors.color_for(country))
                    .width(1.5);
                plot_ui.line(line);
            }
        }
        ChartKind::Bar => {
            let width = 0.8 / series.len() as f64;
            for (i, (country, points)) in series.iter().enumerate() {
                let offset = (i as f64 + 0.5) * width - 0.4;
                let bars: Vec<Bar> = points
                    .iter()
                    .map(|&(year, count)| Bar::new(year as f64 + offset, count as f64).width(width))
                    .collect();
                let chart = BarChart::new(bars)
                    .name(*country)
                    .color(colors.color_for(country));
                plot_ui.bar_chart(chart);
            }
        }
        ChartKind::Area => {
            // Top layer first so lower layers stay visible.
            for (country, points) in stacked.iter().rev() {
                let line = Line::new(to_points(points))
                    .name(*country)
                    .color(colors.color_for(country))
                    .fill(0.0)
                    .width(1.0);
                plot_ui.line(line);
            }
        }
    });
}

/// Running per-year sums across series, in series order.
fn stack<'s>(series: &[(&'s str, Vec<(i32, u64)>)]) -> Vec<(&'s str, Vec<(i32, u64)>)> {
    let mut baseline: Vec<u64> = Vec::new();
    series
        .iter()
        .map(|(country, points)| {
            baseline.resize(points.len(), 0);
            let layer = points
                .iter()
                .zip(baseline.iter_mut())
                .map(|(&(year, count), base)| {
                    *base += count;
                    (year, *base)
                })
                .collect();
            (*country, layer)
        })
        .collect()
}
