use eframe::egui::{self, Align2, Color32, FontId, Sense, Shape, Stroke, Ui, vec2};
use egui_plot::{Bar, BarChart, BoxElem, BoxPlot, BoxSpread, Legend, Plot, PlotPoints, Points};

use crate::color;
use crate::data::model::survival_label;
use crate::session::Session;
use crate::session::derived::{Companion, Distribution, ScatterPoint, VariableSummary};
use crate::stats::{Histogram, Quartiles};

/// Bin count for the static distribution panel.
const STATIC_BINS: usize = 20;
/// Bin count for the interactive chart.
const INTERACTIVE_BINS: usize = 30;

// ---------------------------------------------------------------------------
// Value-count bar chart (the "survival chart" slot)
// ---------------------------------------------------------------------------

/// Bar chart of value counts for the selected variable.
pub fn distribution_bars(ui: &mut Ui, session: &mut Session) {
    let summary = session.variable_summary();
    if summary.counts.is_empty() {
        super::placeholder(ui, "No data for the selected variable.");
        return;
    }

    let palette = color::generate_palette(summary.counts.len());
    Plot::new("distribution_bars")
        .legend(Legend::default())
        .height(240.0)
        .x_axis_label(summary.variable.label())
        .y_axis_label("Frequency")
        .show(ui, |plot_ui| {
            for (i, ((label, count), fill)) in summary.counts.iter().zip(palette).enumerate() {
                let bar = Bar::new(i as f64, *count as f64).width(0.6);
                plot_ui.bar_chart(BarChart::new(vec![bar]).color(fill).name(label));
            }
        });
}

// ---------------------------------------------------------------------------
// Advanced distribution – histogram/bars plus boxplot-or-pie companion
// ---------------------------------------------------------------------------

/// Two-panel distribution view: the variable's distribution on the left,
/// its survival companion (boxplot or pie) on the right.
pub fn advanced_distribution(ui: &mut Ui, session: &mut Session) {
    let summary = session.variable_summary();
    if summary.counts.is_empty() {
        super::placeholder(ui, "No data for the selected variable.");
        return;
    }

    ui.columns(2, |columns: &mut [Ui]| {
        distribution_panel(&mut columns[0], &summary, STATIC_BINS, "advanced_dist");
        companion_panel(&mut columns[1], &summary);
    });
}

fn distribution_panel(ui: &mut Ui, summary: &VariableSummary, bins: usize, plot_id: &str) {
    match &summary.dist {
        Distribution::Numeric { values, by_survival } => {
            if values.is_empty() {
                super::placeholder(ui, "No observed values.");
                return;
            }
            let min = values.iter().copied().fold(f64::INFINITY, f64::min);
            let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);

            let mut charts: Vec<BarChart> = Vec::new();
            match by_survival {
                Some([perished, survived]) if !perished.is_empty() || !survived.is_empty() => {
                    if let Some(h) = Histogram::with_range(perished, bins, min, max) {
                        charts.push(histogram_chart(&h, false));
                    }
                    if let Some(h) = Histogram::with_range(survived, bins, min, max) {
                        charts.push(histogram_chart(&h, true));
                    }
                }
                _ => {
                    if let Some(h) = Histogram::with_range(values, bins, min, max) {
                        charts.push(
                            plain_histogram_chart(&h).name(summary.variable.label()),
                        );
                    }
                }
            }

            Plot::new(plot_id.to_owned() + "_numeric")
                .legend(Legend::default())
                .height(260.0)
                .x_axis_label(summary.variable.label())
                .y_axis_label("Frequency")
                .show(ui, |plot_ui| {
                    for chart in charts {
                        plot_ui.bar_chart(chart);
                    }
                });
        }
        Distribution::Categorical { by_survival } => {
            let counts = &summary.counts;
            Plot::new(plot_id.to_owned() + "_categorical")
                .legend(Legend::default())
                .height(260.0)
                .x_axis_label(summary.variable.label())
                .y_axis_label("Frequency")
                .show(ui, |plot_ui| match by_survival {
                    Some(split) => {
                        for flag in [false, true] {
                            let bars: Vec<Bar> = split
                                .iter()
                                .enumerate()
                                .map(|(i, pair)| {
                                    let offset = if flag { 0.2 } else { -0.2 };
                                    Bar::new(i as f64 + offset, pair[usize::from(flag)] as f64)
                                        .width(0.35)
                                })
                                .collect();
                            plot_ui.bar_chart(
                                BarChart::new(bars)
                                    .color(color::survival_color(flag))
                                    .name(survival_label(u8::from(flag))),
                            );
                        }
                    }
                    None => {
                        let bars: Vec<Bar> = counts
                            .iter()
                            .enumerate()
                            .map(|(i, (_, n))| Bar::new(i as f64, *n as f64).width(0.6))
                            .collect();
                        plot_ui.bar_chart(
                            BarChart::new(bars).name(summary.variable.label()),
                        );
                    }
                });
        }
    }
}

fn companion_panel(ui: &mut Ui, summary: &VariableSummary) {
    match &summary.companion {
        Companion::Pie => draw_pie(ui, summary),
        Companion::SurvivalBoxes { perished, survived } => {
            if perished.is_none() && survived.is_none() {
                super::placeholder(ui, "No survival groups to compare.");
                return;
            }
            let boxes: Vec<BoxElem> = [(false, perished), (true, survived)]
                .into_iter()
                .filter_map(|(flag, quartiles)| {
                    quartiles.map(|q: Quartiles| {
                        BoxElem::new(
                            f64::from(u8::from(flag)),
                            BoxSpread::new(q.whisker_low, q.q1, q.median, q.q3, q.whisker_high),
                        )
                        .name(survival_label(u8::from(flag)))
                        .fill(color::survival_color(flag))
                        .stroke(Stroke::new(1.0, Color32::DARK_GRAY))
                    })
                })
                .collect();

            Plot::new("survival_boxes")
                .legend(Legend::default())
                .height(260.0)
                .x_axis_label("Survived")
                .y_axis_label(summary.variable.label())
                .show(ui, |plot_ui| {
                    plot_ui.box_plot(BoxPlot::new(boxes).name(summary.variable.label()));
                });
        }
    }
}

// ---------------------------------------------------------------------------
// Correlation heatmap
// ---------------------------------------------------------------------------

/// Pairwise Pearson correlation of the numeric columns.
pub fn correlation_matrix(ui: &mut Ui, session: &mut Session) {
    let outcome = session.correlation_grid();
    let Some(grid) = &*outcome else {
        super::placeholder(ui, "Insufficient numeric variables.");
        return;
    };

    let labels: Vec<String> = grid.labels.iter().map(|s| s.to_string()).collect();
    super::heatmap::annotated_grid(ui, &labels, &labels, 72.0, (64.0, 34.0), |row, col| {
        match grid.value(row, col) {
            Some(v) => (format!("{v:.2}"), color::diverging(v)),
            None => ("–".to_string(), Color32::from_gray(110)),
        }
    });
}

// ---------------------------------------------------------------------------
// Interactive chart
// ---------------------------------------------------------------------------

/// Interactive histogram (numeric) or count bars (categorical). Hover,
/// zoom and pan come with the plot widget.
pub fn interactive_chart(ui: &mut Ui, session: &mut Session) {
    let summary = session.variable_summary();
    if summary.counts.is_empty() {
        super::placeholder(ui, "No data for the selected variable.");
        return;
    }
    distribution_panel(ui, &summary, INTERACTIVE_BINS, "interactive_chart");
}

// ---------------------------------------------------------------------------
// Three-dimensional analysis
// ---------------------------------------------------------------------------

/// Orthographic Age × Fare × Pclass scatter colored by survival, rotatable
/// via azimuth/elevation.
pub fn relationships_3d(
    ui: &mut Ui,
    session: &mut Session,
    azimuth: &mut f32,
    elevation: &mut f32,
) {
    let scatter = session.scatter_points();
    if !scatter.is_sufficient() {
        super::placeholder(ui, "Insufficient data for 3-D visualization.");
        return;
    }

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Azimuth");
        ui.add(egui::Slider::new(azimuth, 0.0..=360.0).suffix("°"));
        ui.label("Elevation");
        ui.add(egui::Slider::new(elevation, -90.0..=90.0).suffix("°"));
    });

    let age_max = scatter.points.iter().map(|p| p.age).fold(1.0, f64::max);
    let fare_max = scatter.points.iter().map(|p| p.fare).fold(1.0, f64::max);
    let az = f64::from(azimuth.to_radians());
    let el = f64::from(elevation.to_radians());

    let project = |p: &ScatterPoint| -> [f64; 2] {
        // normalize to a unit cube centered on the origin
        let x = p.age / age_max - 0.5;
        let y = p.fare / fare_max - 0.5;
        let z = (p.pclass - 1.0) / 2.0 - 0.5;
        let x1 = x * az.cos() - y * az.sin();
        let y1 = x * az.sin() + y * az.cos();
        [x1, y1 * el.sin() + z * el.cos()]
    };

    Plot::new("relationships_3d")
        .legend(Legend::default())
        .height(320.0)
        .data_aspect(1.0)
        .show(ui, |plot_ui| {
            for flag in [false, true] {
                let points: PlotPoints = scatter
                    .points
                    .iter()
                    .filter(|p| (p.survived != 0) == flag)
                    .map(|p| project(p))
                    .collect();
                plot_ui.points(
                    Points::new(points)
                        .radius(2.5)
                        .color(color::survival_color(flag))
                        .name(survival_label(u8::from(flag))),
                );
            }
        });
}

// ---------------------------------------------------------------------------
// Pie
// ---------------------------------------------------------------------------

/// Paint the value-count pie. Slices are triangle fans, labels sit at the
/// mid-angle of slices big enough to hold them.
fn draw_pie(ui: &mut Ui, summary: &VariableSummary) {
    let fractions = summary.fractions();
    if fractions.is_empty() {
        super::placeholder(ui, "No categories to chart.");
        return;
    }

    let palette = color::generate_palette(fractions.len());
    let size = ui.available_width().clamp(120.0, 260.0);
    let (rect, _response) = ui.allocate_exact_size(vec2(size, size), Sense::hover());
    if !ui.is_rect_visible(rect) {
        return;
    }

    let painter = ui.painter();
    let center = rect.center();
    let radius = rect.width() * 0.42;
    let mut start = -std::f64::consts::FRAC_PI_2;

    for ((label, fraction), fill) in fractions.iter().zip(palette) {
        let sweep = fraction * std::f64::consts::TAU;
        let steps = ((sweep / 0.08).ceil() as usize).max(1);
        for step in 0..steps {
            let a0 = start + sweep * step as f64 / steps as f64;
            let a1 = start + sweep * (step + 1) as f64 / steps as f64;
            let triangle = vec![
                center,
                center + vec2(a0.cos() as f32, a0.sin() as f32) * radius,
                center + vec2(a1.cos() as f32, a1.sin() as f32) * radius,
            ];
            painter.add(Shape::convex_polygon(triangle, fill, Stroke::NONE));
        }

        if *fraction >= 0.04 {
            let mid = start + sweep / 2.0;
            let pos = center + vec2(mid.cos() as f32, mid.sin() as f32) * radius * 0.62;
            painter.text(
                pos,
                Align2::CENTER_CENTER,
                format!("{label}\n{:.1}%", fraction * 100.0),
                FontId::proportional(12.0),
                color::contrast_text(fill),
            );
        }
        start += sweep;
    }
}

// ---------------------------------------------------------------------------
// Bar-chart helpers
// ---------------------------------------------------------------------------

fn histogram_chart(hist: &Histogram, survived: bool) -> BarChart {
    let width = effective_bin_width(hist);
    let offset = width * if survived { 0.22 } else { -0.22 };
    let bars: Vec<Bar> = hist
        .counts
        .iter()
        .enumerate()
        .filter(|(_, &n)| n > 0)
        .map(|(i, &n)| Bar::new(hist.bin_center(i) + offset, n as f64).width(width * 0.4))
        .collect();
    BarChart::new(bars)
        .color(color::survival_color(survived))
        .name(survival_label(u8::from(survived)))
}

fn plain_histogram_chart(hist: &Histogram) -> BarChart {
    let width = effective_bin_width(hist);
    let bars: Vec<Bar> = hist
        .counts
        .iter()
        .enumerate()
        .filter(|(_, &n)| n > 0)
        .map(|(i, &n)| Bar::new(hist.bin_center(i), n as f64).width(width * 0.9))
        .collect();
    BarChart::new(bars)
}

fn effective_bin_width(hist: &Histogram) -> f64 {
    if hist.bin_width > 0.0 { hist.bin_width } else { 1.0 }
}
