//! Writes a deterministic synthetic `country_wise_latest.csv` so the
//! dashboard can be exercised without the real dataset.

use anyhow::{Context, Result};

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Uniform integer in `[lo, hi)`.
    fn range(&mut self, lo: u64, hi: u64) -> u64 {
        lo + (self.next_f64() * (hi - lo) as f64) as u64
    }
}

const REGIONS: [(&str, &[&str]); 6] = [
    (
        "Europe",
        &["Italy", "Spain", "France", "Germany", "Sweden", "Poland"],
    ),
    (
        "Americas",
        &["US", "Brazil", "Mexico", "Peru", "Canada", "Argentina"],
    ),
    (
        "South-East Asia",
        &["India", "Indonesia", "Thailand", "Bangladesh", "Nepal"],
    ),
    (
        "Eastern Mediterranean",
        &["Iran", "Pakistan", "Egypt", "Saudi Arabia"],
    ),
    (
        "Africa",
        &["South Africa", "Nigeria", "Kenya", "Ghana", "Ethiopia"],
    ),
    (
        "Western Pacific",
        &["China", "Japan", "Philippines", "Australia", "South Korea"],
    ),
];

fn main() -> Result<()> {
    let mut rng = SimpleRng::new(42);
    let output_path = "country_wise_latest.csv";

    let mut writer = csv::Writer::from_path(output_path)
        .with_context(|| format!("creating {output_path}"))?;
    writer
        .write_record([
            "Country/Region",
            "WHO Region",
            "Confirmed",
            "Deaths",
            "Recovered",
            "Active",
            "Recovered / 100 Cases",
            "Deaths / 100 Cases",
        ])
        .context("writing header")?;

    let mut rows = 0usize;
    for (region, countries) in REGIONS {
        for country in countries {
            let confirmed = rng.range(800, 2_000_000);
            let deaths = (confirmed as f64 * (0.005 + 0.06 * rng.next_f64())) as u64;
            let recovered = ((confirmed - deaths) as f64 * (0.3 + 0.65 * rng.next_f64())) as u64;
            let active = confirmed - deaths - recovered;
            let recovered_per_100 = recovered as f64 * 100.0 / confirmed as f64;
            let deaths_per_100 = deaths as f64 * 100.0 / confirmed as f64;

            writer
                .write_record([
                    country.to_string(),
                    region.to_string(),
                    confirmed.to_string(),
                    deaths.to_string(),
                    recovered.to_string(),
                    active.to_string(),
                    format!("{recovered_per_100:.2}"),
                    format!("{deaths_per_100:.2}"),
                ])
                .with_context(|| format!("writing row for {country}"))?;
            rows += 1;
        }
    }

    writer.flush().context("flushing output")?;
    println!("Wrote {rows} countries to {output_path}");
    Ok(())
}
