use std::fmt;

use serde::Deserialize;

// ---------------------------------------------------------------------------
// CountryRecord – one row of the source table
// ---------------------------------------------------------------------------

/// A single country's pandemic snapshot.
///
/// Field names are mapped onto the exact header names of the
/// `country_wise_latest.csv` schema via serde renames.
#[derive(Debug, Clone, Deserialize)]
pub struct CountryRecord {
    #[serde(rename = "Country/Region")]
    pub country: String,

    #[serde(rename = "WHO Region")]
    pub region: String,

    #[serde(rename = "Confirmed")]
    pub confirmed: u64,

    #[serde(rename = "Deaths")]
    pub deaths: u64,

    #[serde(rename = "Recovered")]
    pub recovered: u64,

    #[serde(rename = "Active")]
    pub active: u64,

    /// Recovery rate per 100 confirmed cases, precomputed in the source data.
    #[serde(rename = "Recovered / 100 Cases")]
    pub recovered_per_100: f64,

    /// Death rate per 100 confirmed cases, precomputed in the source data.
    #[serde(rename = "Deaths / 100 Cases")]
    pub deaths_per_100: f64,
}

// ---------------------------------------------------------------------------
// SortColumn – the four sortable count columns
// ---------------------------------------------------------------------------

/// The numeric columns a view can be ordered by.  The derived rate columns
/// are intentionally not sortable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortColumn {
    Confirmed,
    Deaths,
    Recovered,
    Active,
}

impl SortColumn {
    pub const ALL: [SortColumn; 4] = [
        SortColumn::Confirmed,
        SortColumn::Deaths,
        SortColumn::Recovered,
        SortColumn::Active,
    ];

    /// The value of this column for a given record.
    pub fn value(&self, rec: &CountryRecord) -> u64 {
        match self {
            SortColumn::Confirmed => rec.confirmed,
            SortColumn::Deaths => rec.deaths,
            SortColumn::Recovered => rec.recovered,
            SortColumn::Active => rec.active,
        }
    }
}

impl fmt::Display for SortColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SortColumn::Confirmed => "Confirmed",
            SortColumn::Deaths => "Deaths",
            SortColumn::Recovered => "Recovered",
            SortColumn::Active => "Active",
        };
        write!(f, "{name}")
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The full parsed table with precomputed selector domains and range bounds.
/// Loaded once per session and treated as immutable ground truth.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All records (rows), in file order.
    pub records: Vec<CountryRecord>,
    /// Unique WHO regions in first-appearance order.
    pub regions: Vec<String>,
    /// Unique country names in first-appearance order.
    pub countries: Vec<String>,
    /// Observed `[min, max]` of the `Confirmed` column.
    pub confirmed_bounds: (u64, u64),
}

impl Dataset {
    /// Build the selector domains and confirmed-case bounds from the rows.
    pub fn from_records(records: Vec<CountryRecord>) -> Self {
        let mut regions: Vec<String> = Vec::new();
        let mut countries: Vec<String> = Vec::new();
        let mut min_confirmed = u64::MAX;
        let mut max_confirmed = 0u64;

        for rec in &records {
            if !regions.contains(&rec.region) {
                regions.push(rec.region.clone());
            }
            if !countries.contains(&rec.country) {
                countries.push(rec.country.clone());
            }
            min_confirmed = min_confirmed.min(rec.confirmed);
            max_confirmed = max_confirmed.max(rec.confirmed);
        }

        if records.is_empty() {
            min_confirmed = 0;
        }

        Dataset {
            records,
            regions,
            countries,
            confirmed_bounds: (min_confirmed, max_confirmed),
        }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the table is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    /// Test helper: build a record with consistent derived columns.
    pub(crate) fn record(
        country: &str,
        region: &str,
        confirmed: u64,
        deaths: u64,
        recovered: u64,
    ) -> CountryRecord {
        let rate = |n: u64| {
            if confirmed == 0 {
                0.0
            } else {
                n as f64 * 100.0 / confirmed as f64
            }
        };
        CountryRecord {
            country: country.to_string(),
            region: region.to_string(),
            confirmed,
            deaths,
            recovered,
            active: confirmed - deaths - recovered,
            recovered_per_100: rate(recovered),
            deaths_per_100: rate(deaths),
        }
    }

    #[test]
    fn domains_keep_first_appearance_order() {
        let ds = Dataset::from_records(vec![
            record("Italy", "Europe", 100, 10, 50),
            record("Spain", "Europe", 80, 5, 40),
            record("India", "South-East Asia", 200, 8, 120),
        ]);
        assert_eq!(ds.regions, vec!["Europe", "South-East Asia"]);
        assert_eq!(ds.countries, vec!["Italy", "Spain", "India"]);
        assert_eq!(ds.confirmed_bounds, (80, 200));
    }

    #[test]
    fn empty_table_has_zero_bounds() {
        let ds = Dataset::from_records(Vec::new());
        assert!(ds.is_empty());
        assert_eq!(ds.confirmed_bounds, (0, 0));
    }
}
