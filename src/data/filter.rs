use std::cmp::Reverse;

use super::model::{CountryRecord, Dataset, SortColumn};

// ---------------------------------------------------------------------------
// FilterState – the current control selections
// ---------------------------------------------------------------------------

/// The current sidebar selections.  `None` for a selector means "All".
/// Rebuilt from the controls on every interaction; never persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterState {
    /// WHO region to keep, or `None` for all regions.
    pub region: Option<String>,
    /// Country to keep, or `None` for all countries.
    pub country: Option<String>,
    /// Inclusive confirmed-cases range `[min, max]`.
    pub case_range: (u64, u64),
    /// Column the filtered view is ordered by (descending).
    pub sort_by: SortColumn,
}

/// Default lower bound of the confirmed-cases slider.
const DEFAULT_MIN_CASES: u64 = 1000;

impl FilterState {
    /// Initial selections for a freshly loaded dataset: no categorical
    /// filters, range `[1000, max]` clamped to the observed bounds, sorted
    /// by confirmed cases.
    pub fn for_dataset(dataset: &Dataset) -> Self {
        let (lo, hi) = dataset.confirmed_bounds;
        FilterState {
            region: None,
            country: None,
            case_range: (DEFAULT_MIN_CASES.clamp(lo, hi), hi),
            sort_by: SortColumn::Confirmed,
        }
    }

    /// Whether a record passes all three predicates.  The predicates are
    /// independent row-level tests, so conjunction order is irrelevant.
    fn matches(&self, rec: &CountryRecord) -> bool {
        if let Some(region) = &self.region {
            if rec.region != *region {
                return false;
            }
        }
        if let Some(country) = &self.country {
            if rec.country != *country {
                return false;
            }
        }
        let (min_cases, max_cases) = self.case_range;
        // An inverted range (min > max) matches nothing, by construction.
        rec.confirmed >= min_cases && rec.confirmed <= max_cases
    }
}

// ---------------------------------------------------------------------------
// Filter engine
// ---------------------------------------------------------------------------

/// Return indices of records that pass all active filters, in table order.
/// An empty result is a valid (empty) view, not an error.
pub fn filtered_indices(dataset: &Dataset, filters: &FilterState) -> Vec<usize> {
    dataset
        .records
        .iter()
        .enumerate()
        .filter(|(_, rec)| filters.matches(rec))
        .map(|(i, _)| i)
        .collect()
}

// ---------------------------------------------------------------------------
// Sort stage
// ---------------------------------------------------------------------------

/// Order view indices descending by the chosen count column.  The sort is
/// stable: rows with equal values keep their relative table order.
pub fn sort_indices(dataset: &Dataset, mut indices: Vec<usize>, column: SortColumn) -> Vec<usize> {
    indices.sort_by_key(|&i| Reverse(column.value(&dataset.records[i])));
    indices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::tests::record;
    use crate::data::model::Dataset;

    fn five_row_dataset() -> Dataset {
        Dataset::from_records(vec![
            record("Italy", "Europe", 245_000, 35_000, 198_000),
            record("Spain", "Europe", 280_000, 28_000, 150_000),
            record("India", "South-East Asia", 1_480_000, 33_000, 950_000),
            record("Thailand", "South-East Asia", 3_300, 58, 3_100),
            record("Indonesia", "South-East Asia", 100_000, 4_800, 58_000),
        ])
    }

    fn all_rows(ds: &Dataset) -> FilterState {
        FilterState {
            region: None,
            country: None,
            case_range: (0, ds.confirmed_bounds.1),
            sort_by: SortColumn::Confirmed,
        }
    }

    #[test]
    fn no_filters_keep_every_row() {
        let ds = five_row_dataset();
        let view = filtered_indices(&ds, &all_rows(&ds));
        assert_eq!(view, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn filtering_is_idempotent() {
        let ds = five_row_dataset();
        let filters = FilterState {
            region: Some("Europe".to_string()),
            country: None,
            case_range: (10_000, 300_000),
            sort_by: SortColumn::Confirmed,
        };
        let once = filtered_indices(&ds, &filters);
        // Re-running the same FilterState over the same table is a no-op.
        let twice = filtered_indices(&ds, &filters);
        assert_eq!(once, twice);
        assert_eq!(once, vec![0, 1]);
    }

    #[test]
    fn conjunction_is_order_independent() {
        let ds = five_row_dataset();
        let filters = FilterState {
            region: Some("South-East Asia".to_string()),
            country: None,
            case_range: (50_000, 2_000_000),
            sort_by: SortColumn::Confirmed,
        };
        let combined = filtered_indices(&ds, &filters);

        // Apply the same predicates one axis at a time, in both orders.
        let region_first: Vec<usize> = (0..ds.len())
            .filter(|&i| ds.records[i].region == "South-East Asia")
            .filter(|&i| (50_000..=2_000_000).contains(&ds.records[i].confirmed))
            .collect();
        let range_first: Vec<usize> = (0..ds.len())
            .filter(|&i| (50_000..=2_000_000).contains(&ds.records[i].confirmed))
            .filter(|&i| ds.records[i].region == "South-East Asia")
            .collect();

        assert_eq!(combined, region_first);
        assert_eq!(combined, range_first);
        assert_eq!(combined, vec![2, 4]);
    }

    #[test]
    fn unmatched_region_yields_empty_view() {
        let ds = five_row_dataset();
        let filters = FilterState {
            region: Some("Africa".to_string()),
            ..all_rows(&ds)
        };
        assert!(filtered_indices(&ds, &filters).is_empty());
    }

    #[test]
    fn range_bounds_are_inclusive() {
        let ds = five_row_dataset();
        // Degenerate single-value range hitting exactly one row.
        let filters = FilterState {
            region: None,
            country: None,
            case_range: (3_300, 3_300),
            sort_by: SortColumn::Confirmed,
        };
        assert_eq!(filtered_indices(&ds, &filters), vec![3]);
    }

    #[test]
    fn inverted_range_matches_nothing() {
        let ds = five_row_dataset();
        let filters = FilterState {
            region: None,
            country: None,
            case_range: (500_000, 100),
            sort_by: SortColumn::Confirmed,
        };
        assert!(filtered_indices(&ds, &filters).is_empty());
    }

    #[test]
    fn country_filter_selects_single_row() {
        let ds = five_row_dataset();
        let filters = FilterState {
            country: Some("India".to_string()),
            ..all_rows(&ds)
        };
        assert_eq!(filtered_indices(&ds, &filters), vec![2]);
    }

    #[test]
    fn sort_is_descending() {
        let ds = five_row_dataset();
        let view = sort_indices(&ds, vec![0, 1, 2, 3, 4], SortColumn::Confirmed);
        assert_eq!(view, vec![2, 1, 0, 4, 3]);
    }

    #[test]
    fn sort_ties_keep_table_order() {
        let ds = Dataset::from_records(vec![
            record("A", "Europe", 100, 10, 50),
            record("B", "Europe", 200, 10, 80),
            record("C", "Europe", 300, 20, 90),
            record("D", "Europe", 400, 10, 200),
        ]);
        // Deaths: 10, 10, 20, 10 – A, B, D tie and must keep table order.
        let view = sort_indices(&ds, vec![0, 1, 2, 3], SortColumn::Deaths);
        assert_eq!(view, vec![2, 0, 1, 3]);
    }
}
