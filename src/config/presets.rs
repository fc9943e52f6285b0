use crate::domain::model::{slugify, ColorInput};
use crate::utils::error::{PaletteError, Result};

/// A named set of base colors: `(id, name, color)` triples.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub name: &'static str,
    pub colors: &'static [(&'static str, &'static str, &'static str)],
}

pub const PRESETS: &[Preset] = &[
    Preset {
        name: "Material Design",
        colors: &[
            ("primary", "Primary", "#6200ee"),
            ("secondary", "Secondary", "#03dac6"),
            ("error", "Error", "#b00020"),
        ],
    },
    Preset {
        name: "Nord",
        colors: &[
            ("polar-night", "Polar Night", "#2e3440"),
            ("snow-storm", "Snow Storm", "#eceff4"),
            ("frost", "Frost", "#5e81ac"),
            ("aurora", "Aurora", "#bf616a"),
        ],
    },
    Preset {
        name: "Brand Example",
        colors: &[
            ("brand1", "Brand Primary", "#6831F2"),
            ("brand2", "Product A", "#2385F6"),
            ("brand3", "Product B", "#A227B0"),
        ],
    },
];

impl Preset {
    pub fn slug(&self) -> String {
        slugify(self.name)
    }

    pub fn color_inputs(&self) -> Vec<ColorInput> {
        self.colors
            .iter()
            .map(|&(id, name, color)| ColorInput::new(id, name, color))
            .collect()
    }
}

/// Looks a preset up by display name or slug, ignoring case.
pub fn find_preset(name: &str) -> Result<&'static Preset> {
    let wanted = name.trim();
    PRESETS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(wanted) || preset.slug() == slugify(wanted))
        .ok_or_else(|| PaletteError::UnknownPreset {
            name: name.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::validate_color_inputs;

    #[test]
    fn test_find_preset_by_name_or_slug() {
        assert_eq!(find_preset("Nord").unwrap().name, "Nord");
        assert_eq!(find_preset("material design").unwrap().name, "Material Design");
        assert_eq!(find_preset("brand-example").unwrap().name, "Brand Example");
        assert!(matches!(
            find_preset("Solarized"),
            Err(PaletteError::UnknownPreset { .. })
        ));
    }

    #[test]
    fn test_presets_are_valid_inputs() {
        for preset in PRESETS {
            let inputs = preset.color_inputs();
            assert!(!inputs.is_empty());
            validate_color_inputs(preset.name, &inputs).unwrap();
        }
    }
}
