use crate::color::RegionColors;
use crate::data::aggregate::{self, SummaryMetrics};
use crate::data::charts::{self, RatePoint, TOP_COUNTRIES};
use crate::data::filter::{filtered_indices, sort_indices, FilterState};
use crate::data::model::Dataset;

// ---------------------------------------------------------------------------
// DashboardData – everything the UI renders, derived per interaction
// ---------------------------------------------------------------------------

/// All derived outputs for one filter state: the sorted view plus the
/// prepared inputs of every KPI tile and chart.  Rebuilt wholesale by
/// [`AppState::recompute`]; never mutated in place.
#[derive(Debug, Clone, Default)]
pub struct DashboardData {
    /// Indices into the dataset, filtered and sorted descending.
    pub view: Vec<usize>,
    pub metrics: SummaryMetrics,
    pub top_countries: Vec<(String, u64)>,
    pub region_bars: Vec<(String, u64)>,
    pub rate_scatter: Vec<RatePoint>,
    pub active_values: Vec<f64>,
}

impl DashboardData {
    /// Run the whole filter → sort → aggregate → chart-data pipeline.
    pub fn compute(dataset: &Dataset, filters: &FilterState) -> Self {
        let view = sort_indices(dataset, filtered_indices(dataset, filters), filters.sort_by);

        DashboardData {
            metrics: aggregate::summarize(dataset, &view),
            top_countries: charts::top_countries(dataset, &view, TOP_COUNTRIES),
            region_bars: charts::region_bars(dataset, &view),
            rate_scatter: charts::rate_scatter(dataset, &view),
            active_values: charts::active_values(dataset, &view),
            view,
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which central view is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CentralTab {
    Charts,
    Table,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until the user opens a file).
    pub dataset: Option<Dataset>,

    /// Current sidebar selections.
    pub filters: FilterState,

    /// Derived view + chart inputs for the current selections (cached).
    pub dashboard: DashboardData,

    /// Region → colour mapping for the scatter plot and region bars.
    pub region_colors: RegionColors,

    /// Status / error message shown in the top bar.
    pub status_message: Option<String>,

    /// Selected central view (charts or filtered table).
    pub tab: CentralTab,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            filters: FilterState {
                region: None,
                country: None,
                case_range: (0, 0),
                sort_by: crate::data::model::SortColumn::Confirmed,
            },
            dashboard: DashboardData::default(),
            region_colors: RegionColors::empty(),
            status_message: None,
            tab: CentralTab::Charts,
        }
    }
}

impl AppState {
    /// Ingest a newly loaded dataset: reset the controls to their defaults,
    /// rebuild the region colour map, and derive the first dashboard.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.filters = FilterState::for_dataset(&dataset);
        self.region_colors = RegionColors::new(&dataset.regions);
        self.dashboard = DashboardData::compute(&dataset, &self.filters);
        self.dataset = Some(dataset);
        self.status_message = None;
    }

    /// Recompute the dashboard after a control change.
    pub fn recompute(&mut self) {
        if let Some(ds) = &self.dataset {
            self.dashboard = DashboardData::compute(ds, &self.filters);
        }
    }

    /// Put every control back to its post-load default.
    pub fn reset_filters(&mut self) {
        if let Some(ds) = &self.dataset {
            self.filters = FilterState::for_dataset(ds);
            self.dashboard = DashboardData::compute(ds, &self.filters);
        }
    }
}
