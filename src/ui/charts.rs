use eframe::egui::{RichText, Ui};
use egui_plot::{Bar, BarChart, Legend, Line, Plot, PlotPoints, Points};

use crate::state::AppState;

/// Bin count of the active-cases histogram.
const HISTOGRAM_BINS: usize = 30;

// ---------------------------------------------------------------------------
// KPI tiles
// ---------------------------------------------------------------------------

/// Render the four summary metrics as a row of tiles.
pub fn metric_tiles(ui: &mut Ui, state: &AppState) {
    let m = state.dashboard.metrics;
    let tiles = [
        ("Confirmed", m.confirmed),
        ("Deaths", m.deaths),
        ("Recovered", m.recovered),
        ("Active", m.active),
    ];

    ui.columns(4, |cols| {
        for (col, (label, value)) in cols.iter_mut().zip(tiles) {
            col.vertical_centered(|ui: &mut Ui| {
                ui.label(RichText::new(label).strong());
                ui.heading(format_count(value));
            });
        }
    });
}

/// Group digits for readability: 1480000 → "1 480 000".
fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push('\u{202f}');
        }
        out.push(ch);
    }
    out
}

// ---------------------------------------------------------------------------
// Chart grid
// ---------------------------------------------------------------------------

/// Render the 2×2 chart grid below the KPI tiles.
pub fn chart_grid(ui: &mut Ui, state: &AppState) {
    let half = (ui.available_height() / 2.0 - 30.0).max(160.0);

    ui.columns(2, |cols| {
        cols[0].strong("Top 10 Countries by Confirmed Cases");
        top_countries_chart(&mut cols[0], state, half);
        cols[1].strong("Region-wise Confirmed Cases");
        region_chart(&mut cols[1], state, half);
    });

    ui.columns(2, |cols| {
        cols[0].strong("Recovery Rate vs Death Rate");
        rate_scatter_chart(&mut cols[0], state, half);
        cols[1].strong("Active Cases Distribution");
        active_distribution_chart(&mut cols[1], state, half);
    });
}

/// Horizontal bar chart of the first rows of the sorted view.
fn top_countries_chart(ui: &mut Ui, state: &AppState, height: f32) {
    let pairs = &state.dashboard.top_countries;

    // Highest-ranked country at the top of the chart.
    let bars: Vec<Bar> = pairs
        .iter()
        .enumerate()
        .map(|(rank, (country, confirmed))| {
            Bar::new((pairs.len() - rank) as f64, *confirmed as f64)
                .name(country)
                .width(0.6)
        })
        .collect();

    Plot::new("top_countries")
        .height(height)
        .show_axes([true, false])
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).horizontal().name("Confirmed"));
        });
}

/// Vertical bar chart of the per-region confirmed sums, coloured like the
/// scatter so both region views read together.
fn region_chart(ui: &mut Ui, state: &AppState, height: f32) {
    let bars: Vec<Bar> = state
        .dashboard
        .region_bars
        .iter()
        .enumerate()
        .map(|(i, (region, confirmed))| {
            Bar::new(i as f64, *confirmed as f64)
                .name(region)
                .fill(state.region_colors.color_for(region))
                .width(0.6)
        })
        .collect();

    Plot::new("region_bars")
        .height(height)
        .show_axes([false, true])
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            plot_ui.bar_chart(BarChart::new(bars).name("Confirmed"));
        });
}

/// Scatter of recovery rate against death rate, one series per region so the
/// legend doubles as a colour key.
fn rate_scatter_chart(ui: &mut Ui, state: &AppState, height: f32) {
    Plot::new("rate_scatter")
        .height(height)
        .legend(Legend::default())
        .x_axis_label("Recovered / 100 Cases")
        .y_axis_label("Deaths / 100 Cases")
        .show(ui, |plot_ui| {
            for (region, _) in &state.dashboard.region_bars {
                let points: PlotPoints = state
                    .dashboard
                    .rate_scatter
                    .iter()
                    .filter(|p| p.region == *region)
                    .map(|p| [p.recovered_per_100, p.deaths_per_100])
                    .collect();

                plot_ui.points(
                    Points::new(points)
                        .name(region)
                        .color(state.region_colors.color_for(region))
                        .radius(3.0),
                );
            }
        });
}

/// Histogram of active-case values with a kernel-density overlay.
fn active_distribution_chart(ui: &mut Ui, state: &AppState, height: f32) {
    let values = &state.dashboard.active_values;
    let histogram = bin_values(values, HISTOGRAM_BINS);

    Plot::new("active_distribution")
        .height(height)
        .x_axis_label("Active")
        .allow_drag(false)
        .allow_scroll(false)
        .show(ui, |plot_ui| {
            let Some(hist) = histogram else {
                return; // empty view: blank plot
            };

            let bars: Vec<Bar> = hist
                .counts
                .iter()
                .enumerate()
                .map(|(i, &count)| {
                    Bar::new(hist.center(i), count as f64).width(hist.bin_width * 0.95)
                })
                .collect();
            plot_ui.bar_chart(BarChart::new(bars).name("Active"));

            let curve: PlotPoints = density_curve(values, &hist).into_iter().collect();
            plot_ui.line(Line::new(curve).width(1.5).name("Density"));
        });
}

// ---------------------------------------------------------------------------
// Binning and density estimation
// ---------------------------------------------------------------------------

/// A fixed-width binning of a value sequence.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    pub min: f64,
    pub bin_width: f64,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Midpoint of bin `i`, the bar's plot coordinate.
    pub fn center(&self, i: usize) -> f64 {
        self.min + (i as f64 + 0.5) * self.bin_width
    }
}

/// Bin `values` into `bins` equal-width buckets spanning [min, max].  The
/// maximum value lands in the last bin.  Returns `None` for an empty input.
pub fn bin_values(values: &[f64], bins: usize) -> Option<Histogram> {
    if values.is_empty() || bins == 0 {
        return None;
    }

    let min = values.iter().cloned().fold(f64::INFINITY, f64::min);
    let max = values.iter().cloned().fold(f64::NEG_INFINITY, f64::max);
    // All-equal input still gets a drawable non-zero bin width.
    let span = (max - min).max(f64::EPSILON);
    let bin_width = span / bins as f64;

    let mut counts = vec![0usize; bins];
    for &v in values {
        let idx = (((v - min) / bin_width) as usize).min(bins - 1);
        counts[idx] += 1;
    }

    Some(Histogram {
        min,
        bin_width,
        counts,
    })
}

/// Gaussian kernel density estimate over the histogram's span, scaled to
/// count units so the curve overlays the bars directly.
pub fn density_curve(values: &[f64], hist: &Histogram) -> Vec<[f64; 2]> {
    let n = values.len();
    if n == 0 {
        return Vec::new();
    }

    let mean = values.iter().sum::<f64>() / n as f64;
    let variance = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / n as f64;
    // Silverman's rule of thumb; fall back to the bin width for degenerate
    // (zero-variance) input.
    let bandwidth = if variance > 0.0 {
        1.06 * variance.sqrt() * (n as f64).powf(-0.2)
    } else {
        hist.bin_width
    };

    let span = hist.bin_width * hist.counts.len() as f64;
    let samples = 120;
    let scale = n as f64 * hist.bin_width;

    (0..=samples)
        .map(|s| {
            let x = hist.min + span * s as f64 / samples as f64;
            let density = values
                .iter()
                .map(|&v| {
                    let z = (x - v) / bandwidth;
                    (-0.5 * z * z).exp()
                })
                .sum::<f64>()
                / (n as f64 * bandwidth * (2.0 * std::f64::consts::PI).sqrt());
            [x, density * scale]
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bins_cover_every_value() {
        let values: Vec<f64> = (0..100).map(|i| i as f64).collect();
        let hist = bin_values(&values, 30).expect("non-empty input");
        assert_eq!(hist.counts.len(), 30);
        assert_eq!(hist.counts.iter().sum::<usize>(), 100);
    }

    #[test]
    fn maximum_value_lands_in_last_bin() {
        let hist = bin_values(&[0.0, 5.0, 10.0], 5).expect("non-empty input");
        assert_eq!(hist.counts.iter().sum::<usize>(), 3);
        assert_eq!(*hist.counts.last().unwrap(), 1);
    }

    #[test]
    fn empty_input_yields_no_histogram() {
        assert!(bin_values(&[], 30).is_none());
    }

    #[test]
    fn identical_values_fit_one_bin() {
        let hist = bin_values(&[7.0; 4], 30).expect("non-empty input");
        assert!(hist.bin_width > 0.0);
        assert_eq!(hist.counts.iter().sum::<usize>(), 4);
        assert_eq!(hist.counts[0], 4);
    }

    #[test]
    fn density_curve_is_finite_and_non_negative() {
        let values = vec![1.0, 2.0, 2.5, 4.0, 8.0];
        let hist = bin_values(&values, 10).expect("non-empty input");
        let curve = density_curve(&values, &hist);
        assert_eq!(curve.len(), 121);
        for [x, y] in curve {
            assert!(x.is_finite());
            assert!(y.is_finite());
            assert!(y >= 0.0);
        }
    }

    #[test]
    fn count_formatting_groups_digits() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(1_480_000), "1\u{202f}480\u{202f}000");
    }
}
