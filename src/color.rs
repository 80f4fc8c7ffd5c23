use std::collections::BTreeMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    if n == 0 {
        return Vec::new();
    }
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let hsl = Hsl::new(hue, 0.75, 0.55);
            let rgb: Srgb = hsl.into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: WHO region → Color32
// ---------------------------------------------------------------------------

/// Maps each WHO region to a distinct colour, used by the scatter plot and
/// the region bar chart.  Built once per loaded dataset from the full region
/// domain so colours stay stable while filters change.
#[derive(Debug, Clone)]
pub struct RegionColors {
    mapping: BTreeMap<String, Color32>,
    default_color: Color32,
}

impl RegionColors {
    /// Build the mapping from the dataset's region domain.
    pub fn new(regions: &[String]) -> Self {
        let palette = generate_palette(regions.len());
        let mapping: BTreeMap<String, Color32> = regions
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();

        RegionColors {
            mapping,
            default_color: Color32::GRAY,
        }
    }

    /// An empty mapping for the no-dataset state.
    pub fn empty() -> Self {
        RegionColors {
            mapping: BTreeMap::new(),
            default_color: Color32::GRAY,
        }
    }

    /// Look up the colour for a region.
    pub fn color_for(&self, region: &str) -> Color32 {
        self.mapping
            .get(region)
            .copied()
            .unwrap_or(self.default_color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn regions_get_distinct_colors() {
        let regions = vec![
            "Africa".to_string(),
            "Americas".to_string(),
            "Europe".to_string(),
        ];
        let colors = RegionColors::new(&regions);
        let a = colors.color_for("Africa");
        let b = colors.color_for("Americas");
        let c = colors.color_for("Europe");
        assert_ne!(a, b);
        assert_ne!(b, c);
        assert_ne!(a, c);
    }

    #[test]
    fn unknown_region_falls_back_to_gray() {
        let colors = RegionColors::new(&["Europe".to_string()]);
        assert_eq!(colors.color_for("Atlantis"), Color32::GRAY);
    }
}
