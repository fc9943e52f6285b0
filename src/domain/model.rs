use crate::utils::error::{PaletteError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::ops::Index;
use std::str::FromStr;

/// One rung of a color scale. The set is closed: every scale holds exactly
/// these nine steps, in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub enum Step {
    S50,
    S100,
    S200,
    S300,
    S400,
    S500,
    S600,
    S700,
    S800,
}

impl Step {
    /// All steps from lightest to darkest.
    pub const ALL: [Step; 9] = [
        Step::S50,
        Step::S100,
        Step::S200,
        Step::S300,
        Step::S400,
        Step::S500,
        Step::S600,
        Step::S700,
        Step::S800,
    ];

    /// The anchor step; always equal to the base color.
    pub const BASE: Step = Step::S500;

    pub const fn value(self) -> u16 {
        match self {
            Step::S50 => 50,
            Step::S100 => 100,
            Step::S200 => 200,
            Step::S300 => 300,
            Step::S400 => 400,
            Step::S500 => 500,
            Step::S600 => 600,
            Step::S700 => 700,
            Step::S800 => 800,
        }
    }

    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_value(value: u16) -> Option<Step> {
        Step::ALL.into_iter().find(|step| step.value() == value)
    }
}

impl TryFrom<u16> for Step {
    type Error = PaletteError;

    fn try_from(value: u16) -> Result<Self> {
        Step::from_value(value).ok_or_else(|| PaletteError::IncompleteScale {
            missing: value.to_string(),
        })
    }
}

impl From<Step> for u16 {
    fn from(step: Step) -> Self {
        step.value()
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value())
    }
}

/// An 8-bit sRGB color, exchanged as `#rrggbb`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const BLACK: Color = Color::from_rgb(0, 0, 0);
    pub const WHITE: Color = Color::from_rgb(255, 255, 255);

    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parses `#RRGGBB` (either case). Anything else, including the 3-digit
    /// shorthand, is rejected.
    pub fn from_hex(input: &str) -> Result<Self> {
        let invalid = || PaletteError::InvalidColorFormat {
            input: input.to_string(),
        };

        let digits = input.strip_prefix('#').ok_or_else(invalid)?;
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(invalid());
        }

        let channel = |range: std::ops::Range<usize>| {
            u8::from_str_radix(&digits[range], 16).map_err(|_| invalid())
        };

        Ok(Self {
            r: channel(0..2)?,
            g: channel(2..4)?,
            b: channel(4..6)?,
        })
    }

    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// YIQ perceived brightness in `0.0..=255.0`.
    pub fn yiq_brightness(self) -> f64 {
        (self.r as f64 * 299.0 + self.g as f64 * 587.0 + self.b as f64 * 114.0) / 1000.0
    }

    /// Black or white, whichever reads better on top of this color.
    pub fn contrast_text(self) -> Color {
        if self.yiq_brightness() > 128.0 {
            Color::BLACK
        } else {
            Color::WHITE
        }
    }
}

impl FromStr for Color {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        Color::from_hex(s)
    }
}

impl TryFrom<String> for Color {
    type Error = PaletteError;

    fn try_from(value: String) -> Result<Self> {
        Color::from_hex(&value)
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// A base color expanded into the nine fixed steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(
    try_from = "BTreeMap<Step, Color>",
    into = "BTreeMap<Step, Color>"
)]
pub struct ColorScale {
    colors: [Color; 9],
}

impl ColorScale {
    /// Builds a scale by asking `f` for the color of every step, lightest first.
    pub fn from_fn(mut f: impl FnMut(Step) -> Color) -> Self {
        Self {
            colors: Step::ALL.map(&mut f),
        }
    }

    pub fn get(&self, step: Step) -> Color {
        self.colors[step.index()]
    }

    pub fn base(&self) -> Color {
        self.get(Step::BASE)
    }

    /// Steps paired with their colors, ordered by step.
    pub fn iter(&self) -> impl Iterator<Item = (Step, Color)> + '_ {
        Step::ALL.into_iter().zip(self.colors.iter().copied())
    }
}

impl Index<Step> for ColorScale {
    type Output = Color;

    fn index(&self, step: Step) -> &Self::Output {
        &self.colors[step.index()]
    }
}

impl TryFrom<BTreeMap<Step, Color>> for ColorScale {
    type Error = PaletteError;

    fn try_from(map: BTreeMap<Step, Color>) -> Result<Self> {
        if let Some(step) = Step::ALL.into_iter().find(|step| !map.contains_key(step)) {
            return Err(PaletteError::IncompleteScale {
                missing: step.to_string(),
            });
        }
        Ok(Self::from_fn(|step| map[&step]))
    }
}

impl From<ColorScale> for BTreeMap<Step, Color> {
    fn from(scale: ColorScale) -> Self {
        scale.iter().collect()
    }
}

/// Scales keyed by caller-supplied id. Sorted keys keep every aggregation
/// over the set independent of insertion order.
pub type ScaleSet = BTreeMap<String, ColorScale>;

/// A named base color as supplied by a preset, the CLI or a palette file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorInput {
    #[serde(default)]
    pub id: String,
    pub name: String,
    pub color: String,
}

impl ColorInput {
    pub fn new(id: impl Into<String>, name: impl Into<String>, color: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }

    /// CSS-friendly identifier: the lower-cased name with whitespace runs
    /// collapsed to `-`, or the id when the name is blank.
    pub fn slug(&self) -> String {
        let slug = slugify(&self.name);
        if slug.is_empty() {
            self.id.clone()
        } else {
            slug
        }
    }
}

/// `Name=#RRGGBB` or a bare `#RRGGBB`. The color itself is validated later.
impl FromStr for ColorInput {
    type Err = PaletteError;

    fn from_str(s: &str) -> Result<Self> {
        let (name, color) = match s.split_once('=') {
            Some((name, color)) => (name.trim().to_string(), color.trim().to_string()),
            None => {
                let color = s.trim().to_string();
                (color.trim_start_matches('#').to_lowercase(), color)
            }
        };

        if name.is_empty() {
            return Err(PaletteError::InvalidConfigValueError {
                field: "color".to_string(),
                value: s.to_string(),
                reason: "Color name cannot be empty".to_string(),
            });
        }

        Ok(Self {
            id: slugify(&name),
            name,
            color,
        })
    }
}

pub fn slugify(name: &str) -> String {
    name.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Css,
    Json,
    Csv,
}

impl OutputFormat {
    pub fn default_filename(self) -> &'static str {
        match self {
            OutputFormat::Css => "tintoria-palette.css",
            OutputFormat::Json => "palette.json",
            OutputFormat::Csv => "palette.csv",
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputFormat::Css => "css",
            OutputFormat::Json => "json",
            OutputFormat::Csv => "csv",
        };
        f.write_str(name)
    }
}

/// Output of the transform stage: the generated scales, and their
/// harmonized counterpart when harmonization ran.
#[derive(Debug, Clone)]
pub struct PaletteResult {
    pub name: String,
    pub description: Option<String>,
    pub inputs: Vec<ColorInput>,
    pub scales: ScaleSet,
    pub harmonized: Option<ScaleSet>,
}

impl PaletteResult {
    /// The scales to export: harmonized when available.
    pub fn active(&self) -> &ScaleSet {
        self.harmonized.as_ref().unwrap_or(&self.scales)
    }

    pub fn is_harmonized(&self) -> bool {
        self.harmonized.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_order_and_values() {
        let values: Vec<u16> = Step::ALL.iter().map(|s| s.value()).collect();
        assert_eq!(values, vec![50, 100, 200, 300, 400, 500, 600, 700, 800]);
        assert_eq!(Step::from_value(500), Some(Step::BASE));
        assert_eq!(Step::from_value(550), None);
    }

    #[test]
    fn test_color_parse_accepts_both_cases() {
        let upper = Color::from_hex("#6831F2").unwrap();
        let lower = Color::from_hex("#6831f2").unwrap();
        assert_eq!(upper, lower);
        assert_eq!(upper, Color::from_rgb(0x68, 0x31, 0xf2));
        assert_eq!(upper.to_hex(), "#6831f2");
    }

    #[test]
    fn test_color_parse_rejects_malformed() {
        for input in ["notacolor", "#ZZZZZZ", "#fff", "6831F2", "#6831F2FF", "", "#", "#6831F"] {
            assert!(
                matches!(
                    Color::from_hex(input),
                    Err(PaletteError::InvalidColorFormat { .. })
                ),
                "{} should be rejected",
                input
            );
        }
    }

    #[test]
    fn test_color_parse_rejects_multibyte() {
        // six bytes, but not six hex digits
        assert!(Color::from_hex("#ééé").is_err());
    }

    #[test]
    fn test_contrast_text() {
        assert_eq!(Color::WHITE.contrast_text(), Color::BLACK);
        assert_eq!(Color::BLACK.contrast_text(), Color::WHITE);
        assert_eq!(Color::from_hex("#6831F2").unwrap().contrast_text(), Color::WHITE);
        assert_eq!(Color::from_hex("#cfceff").unwrap().contrast_text(), Color::BLACK);
    }

    #[test]
    fn test_scale_serializes_as_step_keyed_map() {
        let scale = ColorScale::from_fn(|step| {
            if step == Step::BASE {
                Color::from_rgb(0x68, 0x31, 0xf2)
            } else {
                Color::WHITE
            }
        });

        let json = serde_json::to_value(scale).unwrap();
        let object = json.as_object().unwrap();
        assert_eq!(object.len(), 9);
        assert_eq!(object["500"], "#6831f2");
        assert_eq!(object["50"], "#ffffff");

        let back: ColorScale = serde_json::from_value(json).unwrap();
        assert_eq!(back, scale);
    }

    #[test]
    fn test_scale_deserialize_requires_every_step() {
        let json = serde_json::json!({
            "50": "#ffffff", "100": "#ffffff", "200": "#ffffff", "300": "#ffffff",
            "400": "#ffffff", "500": "#ffffff", "600": "#ffffff", "700": "#ffffff"
        });
        let err = serde_json::from_value::<ColorScale>(json).unwrap_err();
        assert!(err.to_string().contains("800"));

        let extra = serde_json::json!({
            "50": "#ffffff", "100": "#ffffff", "200": "#ffffff", "300": "#ffffff",
            "400": "#ffffff", "500": "#ffffff", "600": "#ffffff", "700": "#ffffff",
            "800": "#ffffff", "900": "#000000"
        });
        assert!(serde_json::from_value::<ColorScale>(extra).is_err());
    }

    #[test]
    fn test_color_input_from_str() {
        let named: ColorInput = "Brand Primary=#6831F2".parse().unwrap();
        assert_eq!(named.id, "brand-primary");
        assert_eq!(named.name, "Brand Primary");
        assert_eq!(named.color, "#6831F2");

        let bare: ColorInput = "#2385F6".parse().unwrap();
        assert_eq!(bare.id, "2385f6");
        assert_eq!(bare.color, "#2385F6");

        assert!("=#2385F6".parse::<ColorInput>().is_err());
    }

    #[test]
    fn test_slug_falls_back_to_id() {
        let input = ColorInput::new("accent", "   ", "#A227B0");
        assert_eq!(input.slug(), "accent");
        let input = ColorInput::new("x", "Polar  Night", "#2e3440");
        assert_eq!(input.slug(), "polar-night");
    }
}
