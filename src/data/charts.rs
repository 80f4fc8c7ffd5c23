use super::aggregate;
use super::model::Dataset;

// ---------------------------------------------------------------------------
// Chart-data preparer
// ---------------------------------------------------------------------------
//
// Each function shapes the (already filtered and sorted) view into exactly
// the series one chart needs.  None of them mutate the view; each returns a
// freshly allocated structure, and each degrades to empty output for an
// empty view.

/// How many rows the top-countries bar chart shows.
pub const TOP_COUNTRIES: usize = 10;

/// One point of the recovery-rate vs death-rate scatter.
#[derive(Debug, Clone, PartialEq)]
pub struct RatePoint {
    pub recovered_per_100: f64,
    pub deaths_per_100: f64,
    pub region: String,
}

/// The first `n` rows of the sorted view as (country, confirmed) pairs.
/// Shorter views yield fewer pairs, never an error.
pub fn top_countries(dataset: &Dataset, view: &[usize], n: usize) -> Vec<(String, u64)> {
    view.iter()
        .take(n)
        .map(|&i| {
            let rec = &dataset.records[i];
            (rec.country.clone(), rec.confirmed)
        })
        .collect()
}

/// Per-region confirmed sums as bar inputs, in aggregation order.
pub fn region_bars(dataset: &Dataset, view: &[usize]) -> Vec<(String, u64)> {
    aggregate::region_confirmed(dataset, view)
}

/// One scatter point per view row; no ordering or thinning beyond the view
/// itself.
pub fn rate_scatter(dataset: &Dataset, view: &[usize]) -> Vec<RatePoint> {
    view.iter()
        .map(|&i| {
            let rec = &dataset.records[i];
            RatePoint {
                recovered_per_100: rec.recovered_per_100,
                deaths_per_100: rec.deaths_per_100,
                region: rec.region.clone(),
            }
        })
        .collect()
}

/// The raw active-case values for the distribution chart.  Binning and
/// density estimation belong to the rendering layer.
pub fn active_values(dataset: &Dataset, view: &[usize]) -> Vec<f64> {
    view.iter().map(|&i| dataset.records[i].active as f64).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::filter::sort_indices;
    use crate::data::model::tests::record;
    use crate::data::model::SortColumn;

    fn dataset() -> Dataset {
        Dataset::from_records(vec![
            record("Italy", "Europe", 245_000, 35_000, 198_000),
            record("Spain", "Europe", 280_000, 28_000, 150_000),
            record("India", "South-East Asia", 1_480_000, 33_000, 950_000),
        ])
    }

    #[test]
    fn top_countries_follow_sorted_order() {
        let ds = dataset();
        let view = sort_indices(&ds, vec![0, 1, 2], SortColumn::Confirmed);
        let top = top_countries(&ds, &view, TOP_COUNTRIES);
        assert_eq!(
            top,
            vec![
                ("India".to_string(), 1_480_000),
                ("Spain".to_string(), 280_000),
                ("Italy".to_string(), 245_000),
            ]
        );
    }

    #[test]
    fn top_countries_is_bounded_by_n_and_view_length() {
        let ds = dataset();
        let view = vec![0, 1, 2];
        assert_eq!(top_countries(&ds, &view, 2).len(), 2);
        // Fewer rows than n: return them all.
        assert_eq!(top_countries(&ds, &view, TOP_COUNTRIES).len(), 3);
        assert!(top_countries(&ds, &[], TOP_COUNTRIES).is_empty());
    }

    #[test]
    fn scatter_has_one_point_per_row() {
        let ds = dataset();
        let points = rate_scatter(&ds, &[0, 1, 2]);
        assert_eq!(points.len(), 3);
        assert_eq!(points[2].region, "South-East Asia");
        assert!((points[0].recovered_per_100 - 198_000.0 * 100.0 / 245_000.0).abs() < 1e-9);
    }

    #[test]
    fn active_values_forwards_raw_counts() {
        let ds = dataset();
        let values = active_values(&ds, &[1]);
        assert_eq!(values, vec![(280_000 - 28_000 - 150_000) as f64]);
        assert!(active_values(&ds, &[]).is_empty());
    }
}
