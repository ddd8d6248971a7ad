use std::collections::{BTreeMap, BTreeSet};

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
// Color mapping: profession → Color32
// ---------------------------------------------------------------------------

/// Assigns each profession a stable distinct colour, used for both the
/// dropdown labels and the per-profession curve lines.
#[derive(Debug, Clone, Default)]
pub struct ProfessionColors {
    mapping: BTreeMap<String, Color32>,
}

impl ProfessionColors {
    /// Build the colour map from the sorted set of professions.
    pub fn new(professions: &BTreeSet<String>) -> Self {
        let palette = generate_palette(professions.len());
        let mapping = professions
            .iter()
            .cloned()
            .zip(palette.into_iter())
            .collect();
        ProfessionColors { mapping }
    }

    /// Look up the colour for a profession.
    pub fn color_for(&self, profession: &str) -> Color32 {
        self.mapping
            .get(profession)
            .copied()
            .unwrap_or(Color32::GRAY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_produces_distinct_colors() {
        let palette = generate_palette(8);
        assert_eq!(palette.len(), 8);
        for (i, a) in palette.iter().enumerate() {
            for b in palette.iter().skip(i + 1) {
                assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn unknown_profession_falls_back_to_gray() {
        let colors = ProfessionColors::new(&BTreeSet::new());
        assert_eq!(colors.color_for("Manager"), Color32::GRAY);
    }
}
