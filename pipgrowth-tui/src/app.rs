//! Application state, owned by the main thread.
//!
//! The run is computed once up front; everything else here is view state
//! (focus, selection, axis scale, overlays).

use pipgrowth_runner::{build_table, AxisScale, ChartSeries, GrowthRun, Summary, TableRow};

/// Which pane receives navigation keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Chart,
    Ledger,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Chart => Focus::Ledger,
            Focus::Ledger => Focus::Chart,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Focus::Chart => "Chart",
            Focus::Ledger => "Ledger",
        }
    }
}

pub struct App {
    pub run: GrowthRun,
    pub summary: Summary,
    pub rows: Vec<TableRow>,
    pub series: ChartSeries,
    pub scale: AxisScale,
    pub focus: Focus,
    /// Index into `rows` (and `series.points`) of the highlighted trial.
    pub selected: usize,
    pub show_help: bool,
    pub should_quit: bool,
    pub status_message: Option<String>,
}

impl App {
    pub fn new(run: GrowthRun) -> Self {
        let summary = Summary::from_run(&run);
        let rows = build_table(&run.simulation);
        let series = ChartSeries::from_simulation(&run.simulation, &run.config.display.currency_symbol);

        Self {
            run,
            summary,
            rows,
            series,
            scale: AxisScale::default(),
            focus: Focus::Ledger,
            selected: 0,
            show_help: false,
            should_quit: false,
            status_message: None,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn select_next(&mut self) {
        if !self.rows.is_empty() {
            self.selected = (self.selected + 1).min(self.rows.len() - 1);
        }
    }

    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.rows.len().saturating_sub(1);
    }

    pub fn page_down(&mut self, page: usize) {
        for _ in 0..page {
            self.select_next();
        }
    }

    pub fn page_up(&mut self, page: usize) {
        self.selected = self.selected.saturating_sub(page);
    }

    pub fn toggle_scale(&mut self) {
        self.scale = self.scale.toggle();
        self.status_message = Some(format!("Balance axis: {}", self.scale.label()));
    }

    pub fn toggle_focus(&mut self) {
        self.focus = self.focus.toggle();
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    /// Tooltip for the highlighted trial: (`Trade #n`, balance).
    pub fn selected_tooltip(&self) -> Option<(String, String)> {
        self.series.tooltip(self.selected)
    }
}
