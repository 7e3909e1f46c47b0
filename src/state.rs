use std::fmt;

use crate::color::ColorMap;
use crate::data::model::Table;
use crate::data::query::{multi_country_slice, single_country_trend, summary, Slice, Summary, Trend};

// ---------------------------------------------------------------------------
// Chart kind for the comparison section
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChartKind {
    #[default]
    Line,
    Bar,
    Area,
}

impl ChartKind {
    pub const ALL: [ChartKind; 3] = [ChartKind::Line, ChartKind::Bar, ChartKind::Area];
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ChartKind::Line => "Line",
            ChartKind::Bar => "Bar",
            ChartKind::Area => "Area",
        };
        f.write_str(label)
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState<'a> {
    /// Loaded dataset, shared for the lifetime of the app.
    pub table: &'a Table,

    /// Headline metrics, computed once.
    pub summary: Summary,

    /// Country shown in the trend section.
    pub selected_country: Option<String>,

    /// Trend of `selected_country` (cached).
    pub trend: Option<Trend>,

    /// Countries in the comparison, in the order they were picked.
    pub compared: Vec<String>,

    /// Text typed into the comparison search box.
    pub compare_search: String,

    /// Chart used for the comparison.
    pub chart_kind: ChartKind,

    /// Series colours for `compared`.
    pub color_map: ColorMap,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl<'a> AppState<'a> {
    /// Start with the largest country selected and nothing compared.
    pub fn new(table: &'a Table) -> Self {
        let mut state = AppState {
            table,
            summary: summary(table),
            selected_country: None,
            trend: None,
            compared: Vec::new(),
            compare_search: String::new(),
            chart_kind: ChartKind::default(),
            color_map: ColorMap::default(),
            status_message: None,
        };
        if let Some(first) = table.countries().next() {
            state.select_country(first);
        }
        if table.is_empty() {
            state.status_message = Some("The dataset contains no countries.".to_string());
        }
        state
    }

    /// Select the trend country and recompute its trend.
    pub fn select_country(&mut self, country: &str) {
        self.selected_country = Some(country.to_string());
        match single_country_trend(self.table, country) {
            Ok(trend) => {
                self.trend = Some(trend);
                self.status_message = None;
            }
            Err(e) => {
                log::warn!("Trend query failed: {e}");
                self.trend = None;
                self.status_message = Some(format!("Error: {e}"));
            }
        }
    }

    pub fn is_compared(&self, country: &str) -> bool {
        self.compared.iter().any(|c| c == country)
    }

    /// Add `country` to the comparison, or remove it if already present.
    /// Names missing from the table are ignored.
    pub fn toggle_compared(&mut self, country: &str) {
        if !self.table.contains(country) {
            log::debug!("Not comparing unknown country {country:?}");
            return;
        }
        if let Some(pos) = self.compared.iter().position(|c| c == country) {
            self.compared.remove(pos);
        } else {
            self.compared.push(country.to_string());
        }
        self.rebuild_color_map();
    }

    pub fn clear_compared(&mut self) {
        self.compared.clear();
        self.rebuild_color_map();
    }

    fn rebuild_color_map(&mut self) {
        let slice = self.slice();
        self.color_map = ColorMap::new(slice.countries());
    }

    /// Rows of the compared countries, in selection order.
    pub fn slice(&self) -> Slice<'a> {
        multi_country_slice(self.table, &self.compared)
    }

    /// Countries whose name contains the search text (case-insensitive),
    /// in canonical table order.
    pub fn search_matches(&self) -> Vec<&'a str> {
        let table = self.table;
        let needle = self.compare_search.trim().to_lowercase();
        table
            .countries()
            .filter(|c| needle.is_empty() || c.to_lowercase().contains(&needle))
            .collect()
    }
}
