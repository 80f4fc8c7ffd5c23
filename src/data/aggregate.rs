use super::model::Dataset;

// ---------------------------------------------------------------------------
// SummaryMetrics – the four KPI sums
// ---------------------------------------------------------------------------

/// Component-wise sums over the filtered view.  All zero for an empty view.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryMetrics {
    pub confirmed: u64,
    pub deaths: u64,
    pub recovered: u64,
    pub active: u64,
}

/// Sum the four count columns over the view.
pub fn summarize(dataset: &Dataset, view: &[usize]) -> SummaryMetrics {
    let mut totals = SummaryMetrics::default();
    for &i in view {
        let rec = &dataset.records[i];
        totals.confirmed += rec.confirmed;
        totals.deaths += rec.deaths;
        totals.recovered += rec.recovered;
        totals.active += rec.active;
    }
    totals
}

// ---------------------------------------------------------------------------
// Region group-by
// ---------------------------------------------------------------------------

/// Sum confirmed cases per WHO region over the view.
///
/// Keys appear in first-appearance order within the view, and only regions
/// actually present in the view appear at all (no zero-filling from the full
/// table's region universe).
pub fn region_confirmed(dataset: &Dataset, view: &[usize]) -> Vec<(String, u64)> {
    let mut sums: Vec<(String, u64)> = Vec::new();
    for &i in view {
        let rec = &dataset.records[i];
        match sums.iter_mut().find(|(region, _)| *region == rec.region) {
            Some((_, total)) => *total += rec.confirmed,
            None => sums.push((rec.region.clone(), rec.confirmed)),
        }
    }
    sums
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::{filtered_indices, FilterState};
    use crate::data::model::tests::record;
    use crate::data::model::SortColumn;

    fn five_row_dataset() -> Dataset {
        Dataset::from_records(vec![
            record("Italy", "Europe", 245_000, 35_000, 198_000),
            record("Spain", "Europe", 280_000, 28_000, 150_000),
            record("India", "South-East Asia", 1_480_000, 33_000, 950_000),
            record("Thailand", "South-East Asia", 3_300, 58, 3_100),
            record("Indonesia", "South-East Asia", 100_000, 4_800, 58_000),
        ])
    }

    #[test]
    fn sums_match_the_whole_table_when_unfiltered() {
        let ds = five_row_dataset();
        let view: Vec<usize> = (0..ds.len()).collect();
        let totals = summarize(&ds, &view);
        assert_eq!(totals.confirmed, 2_108_300);
        assert_eq!(totals.deaths, 100_858);
        assert_eq!(
            totals.confirmed,
            ds.records.iter().map(|r| r.confirmed).sum::<u64>()
        );
    }

    #[test]
    fn empty_view_sums_to_zero() {
        let ds = five_row_dataset();
        let filters = FilterState {
            region: Some("Africa".to_string()),
            country: None,
            case_range: (0, u64::MAX),
            sort_by: SortColumn::Confirmed,
        };
        let view = filtered_indices(&ds, &filters);
        assert!(view.is_empty());
        assert_eq!(summarize(&ds, &view), SummaryMetrics::default());
        assert!(region_confirmed(&ds, &view).is_empty());
    }

    #[test]
    fn group_keys_are_exactly_the_views_regions() {
        let ds = five_row_dataset();
        let view: Vec<usize> = (0..ds.len()).collect();
        let groups = region_confirmed(&ds, &view);
        assert_eq!(
            groups,
            vec![
                ("Europe".to_string(), 525_000),
                ("South-East Asia".to_string(), 1_583_300),
            ]
        );
    }

    #[test]
    fn filtered_out_regions_are_absent_not_zero() {
        let ds = five_row_dataset();
        // Only the two European rows.
        let groups = region_confirmed(&ds, &[0, 1]);
        assert_eq!(groups, vec![("Europe".to_string(), 525_000)]);
    }
}
