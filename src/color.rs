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
// Color mapping: country → Color32
// ---------------------------------------------------------------------------

/// Assigns each compared country its own colour, in selection order.
#[derive(Debug, Clone, Default)]
pub struct ColorMap {
    mapping: BTreeMap<String, Color32>,
}

impl ColorMap {
    pub fn new<'a>(countries: impl IntoIterator<Item = &'a str>) -> Self {
        let countries: Vec<&str> = countries.into_iter().collect();
        let palette = generate_palette(countries.len());
        let mapping = countries
            .into_iter()
            .zip(palette)
            .map(|(c, col)| (c.to_string(), col))
            .collect();
        ColorMap { mapping }
    }

    /// Colour of `country`, grey if it is not part of the comparison.
    pub fn color_for(&self, country: &str) -> Color32 {
        self.mapping.get(country).copied().unwrap_or(Color32::GRAY)
    }
}
