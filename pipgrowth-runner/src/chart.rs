//! Chart series: `(trial, end balance)` points plus axis bounds and ticks.
//!
//! Balances span several orders of magnitude, so the default y-axis is
//! logarithmic. In log mode the plotted y value is `log10(balance)` and tick
//! labels are placed on whole decades.

use serde::Serialize;

use pipgrowth_core::GrowthSimulation;

use crate::format::{format_money, format_money_cents};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Default)]
pub enum AxisScale {
    Linear,
    #[default]
    Log,
}

impl AxisScale {
    pub fn toggle(self) -> Self {
        match self {
            AxisScale::Linear => AxisScale::Log,
            AxisScale::Log => AxisScale::Linear,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AxisScale::Linear => "linear",
            AxisScale::Log => "log",
        }
    }
}

/// A tick at `position` (in plot coordinates) with its display label.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSeries {
    /// `(trial_index, end_balance)` in trial order.
    pub points: Vec<(f64, f64)>,
    pub currency_symbol: String,
}

impl ChartSeries {
    pub fn from_simulation(simulation: &GrowthSimulation, currency_symbol: &str) -> Self {
        Self {
            points: simulation
                .records
                .iter()
                .map(|r| (r.trial_index as f64, r.end_balance))
                .collect(),
            currency_symbol: currency_symbol.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Points transformed for plotting on `scale`.
    ///
    /// Non-positive balances cannot be placed on a log axis and are dropped.
    pub fn plot_points(&self, scale: AxisScale) -> Vec<(f64, f64)> {
        match scale {
            AxisScale::Linear => self.points.clone(),
            AxisScale::Log => self
                .points
                .iter()
                .filter(|&&(_, y)| y > 0.0)
                .map(|&(x, y)| (x, y.log10()))
                .collect(),
        }
    }

    pub fn x_bounds(&self) -> [f64; 2] {
        let last = self.points.last().map_or(1.0, |&(x, _)| x);
        [0.0, last.max(1.0)]
    }

    pub fn x_ticks(&self) -> Vec<AxisTick> {
        let [_, max] = self.x_bounds();
        let mid = (max / 2.0).round();
        let mut ticks = vec![tick(0.0, "0".to_string())];
        if mid > 0.0 && mid < max {
            ticks.push(tick(mid, format!("{}", mid as u64)));
        }
        ticks.push(tick(max, format!("{}", max as u64)));
        ticks
    }

    /// Y bounds in plot coordinates.
    pub fn y_bounds(&self, scale: AxisScale) -> [f64; 2] {
        let plotted = self.plot_points(scale);
        let (min, max) = plotted
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &(_, y)| {
                (lo.min(y), hi.max(y))
            });
        if !min.is_finite() || !max.is_finite() {
            return [0.0, 1.0];
        }

        match scale {
            AxisScale::Log => {
                let lo = min.floor();
                let hi = max.ceil();
                if hi > lo {
                    [lo, hi]
                } else {
                    [lo, lo + 1.0]
                }
            }
            AxisScale::Linear => {
                let range = max - min;
                let pad = if range > 0.0 { range * 0.05 } else { max.abs().max(1.0) * 0.05 };
                [(min - pad).max(0.0), max + pad]
            }
        }
    }

    pub fn y_ticks(&self, scale: AxisScale) -> Vec<AxisTick> {
        let [lo, hi] = self.y_bounds(scale);
        match scale {
            AxisScale::Log => (lo as i32..=hi as i32)
                .map(|exp| {
                    let value = 10f64.powi(exp);
                    tick(exp as f64, format_money(&self.currency_symbol, value))
                })
                .collect(),
            AxisScale::Linear => {
                let mid = (lo + hi) / 2.0;
                [lo, mid, hi]
                    .into_iter()
                    .map(|v| tick(v, format_money(&self.currency_symbol, v.round())))
                    .collect()
            }
        }
    }

    /// Tooltip text for the point at `index`: (`Trade #n`, `$balance`).
    pub fn tooltip(&self, index: usize) -> Option<(String, String)> {
        self.points.get(index).map(|&(x, y)| {
            (
                format!("Trade #{}", x as u64),
                format_money_cents(&self.currency_symbol, y),
            )
        })
    }
}

fn tick(position: f64, label: String) -> AxisTick {
    AxisTick { position, label }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pipgrowth_core::{simulate, SimulationParameters};

    fn reference_series() -> ChartSeries {
        ChartSeries::from_simulation(&simulate(&SimulationParameters::reference()), "$")
    }

    #[test]
    fn one_point_per_trial() {
        let series = reference_series();
        assert_eq!(series.points.len(), 30);
        assert_eq!(series.points[0].0, 1.0);
        assert!((series.points[0].1 - 25.98).abs() < 1e-9);
        assert_eq!(series.x_bounds(), [0.0, 30.0]);
    }

    #[test]
    fn log_bounds_cover_whole_decades() {
        let series = reference_series();
        // 25.98 .. 51,204.08 → 10^1 .. 10^5
        assert_eq!(series.y_bounds(AxisScale::Log), [1.0, 5.0]);

        let labels: Vec<String> = series
            .y_ticks(AxisScale::Log)
            .into_iter()
            .map(|t| t.label)
            .collect();
        assert_eq!(labels, ["$10", "$100", "$1,000", "$10,000", "$100,000"]);
    }

    #[test]
    fn log_points_are_log10() {
        let series = reference_series();
        let plotted = series.plot_points(AxisScale::Log);
        assert!((plotted[0].1 - 25.98_f64.log10()).abs() < 1e-12);
    }

    #[test]
    fn linear_bounds_are_padded() {
        let series = reference_series();
        let [lo, hi] = series.y_bounds(AxisScale::Linear);
        assert_eq!(lo, 0.0);
        assert!(hi > 51_204.0);
        assert_eq!(series.y_ticks(AxisScale::Linear).len(), 3);
    }

    #[test]
    fn empty_series_has_default_bounds() {
        let mut params = SimulationParameters::reference();
        params.max_trials = 0;
        let series = ChartSeries::from_simulation(&simulate(&params), "$");

        assert!(series.is_empty());
        assert_eq!(series.y_bounds(AxisScale::Log), [0.0, 1.0]);
        assert_eq!(series.x_bounds(), [0.0, 1.0]);
        assert_eq!(series.tooltip(0), None);
    }

    #[test]
    fn flat_series_still_spans_a_decade() {
        let params = SimulationParameters::new(100.0, 0.0, 1.0, 200.0, 3);
        let series = ChartSeries::from_simulation(&simulate(&params), "$");
        assert_eq!(series.y_bounds(AxisScale::Log), [2.0, 3.0]);
    }

    #[test]
    fn tooltip_matches_trade() {
        let series = reference_series();
        assert_eq!(
            series.tooltip(0),
            Some(("Trade #1".to_string(), "$25.98".to_string()))
        );
    }

    #[test]
    fn x_ticks_include_midpoint() {
        let series = reference_series();
        let labels: Vec<String> = series.x_ticks().into_iter().map(|t| t.label).collect();
        assert_eq!(labels, ["0", "15", "30"]);
    }

    #[test]
    fn scale_toggles() {
        assert_eq!(AxisScale::default(), AxisScale::Log);
        assert_eq!(AxisScale::Log.toggle(), AxisScale::Linear);
        assert_eq!(AxisScale::Linear.toggle().label(), "log");
    }
}
