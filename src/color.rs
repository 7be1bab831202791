use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use crate::data::model::Species;

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
            let hsl = Hsl::new(hue, 0.75, 0.45);
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
// Color mapping: species → Color32
// ---------------------------------------------------------------------------

/// Maps each species to a fixed colour.  Built once when the dataset is
/// loaded and reused by every cell, so the assignment is identical across
/// the whole grid.
#[derive(Debug, Clone)]
pub struct ColorMap {
    colors: [Color32; Species::ALL.len()],
}

impl ColorMap {
    /// Assign palette colours following the [`Species::ALL`] order.
    pub fn new() -> Self {
        let palette = generate_palette(Species::ALL.len());
        let mut colors = [Color32::GRAY; Species::ALL.len()];
        for (slot, color) in colors.iter_mut().zip(palette) {
            *slot = color;
        }
        ColorMap { colors }
    }

    /// Look up the colour for a species.
    pub fn color_for(&self, species: Species) -> Color32 {
        self.colors[species as usize]
    }

    /// Legend entries (species label → colour) for the UI.
    pub fn legend_entries(&self) -> Vec<(&'static str, Color32)> {
        Species::ALL
            .iter()
            .map(|&sp| (sp.name(), self.color_for(sp)))
            .collect()
    }
}

impl Default for ColorMap {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_has_requested_length_and_distinct_colors() {
        let palette = generate_palette(3);
        assert_eq!(palette.len(), 3);
        assert_ne!(palette[0], palette[1]);
        assert_ne!(palette[1], palette[2]);
        assert_ne!(palette[0], palette[2]);
        assert!(generate_palette(0).is_empty());
    }

    #[test]
    fn color_assignment_is_deterministic() {
        let a = ColorMap::new();
        let b = ColorMap::new();
        for sp in Species::ALL {
            assert_eq!(a.color_for(sp), b.color_for(sp));
        }
    }

    #[test]
    fn species_colors_are_pairwise_distinct() {
        let cm = ColorMap::new();
        assert_ne!(cm.color_for(Species::Setosa), cm.color_for(Species::Versicolor));
        assert_ne!(cm.color_for(Species::Versicolor), cm.color_for(Species::Virginica));
        assert_ne!(cm.color_for(Species::Setosa), cm.color_for(Species::Virginica));
    }

    #[test]
    fn legend_follows_the_canonical_species_order() {
        let cm = ColorMap::new();
        let entries = cm.legend_entries();
        let names: Vec<_> = entries.iter().map(|(n, _)| *n).collect();
        assert_eq!(names, vec!["setosa", "versicolor", "virginica"]);
    }
}
