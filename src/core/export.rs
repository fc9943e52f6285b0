use crate::domain::model::{ColorInput, ColorScale, OutputFormat, PaletteResult, ScaleSet};
use crate::utils::error::{PaletteError, Result};
use serde::Serialize;

pub fn render(format: OutputFormat, result: &PaletteResult) -> Result<String> {
    match format {
        OutputFormat::Css => Ok(render_css(result)),
        OutputFormat::Json => render_json(result),
        OutputFormat::Csv => render_csv(result),
    }
}

/// Scales in input order, skipping inputs that produced no scale.
fn ordered_scales(result: &PaletteResult) -> impl Iterator<Item = (&ColorInput, &ColorScale)> {
    let scales = result.active();
    result
        .inputs
        .iter()
        .filter_map(move |input| scales.get(&input.id).map(|scale| (input, scale)))
}

/// CSS custom properties on `:root`, one block per color.
pub fn render_css(result: &PaletteResult) -> String {
    let mut css = String::from(":root {\n");

    for (input, scale) in ordered_scales(result) {
        let name = input.slug();
        for (step, color) in scale.iter() {
            css.push_str(&format!("  --{}-{}: {};\n", name, step, color));
        }
        css.push('\n');
    }

    css.push_str("}\n");
    css
}

#[derive(Serialize)]
struct PaletteDocument<'a> {
    name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    description: Option<&'a str>,
    harmonized: bool,
    colors: &'a [ColorInput],
    scales: &'a ScaleSet,
}

pub fn render_json(result: &PaletteResult) -> Result<String> {
    let document = PaletteDocument {
        name: &result.name,
        description: result.description.as_deref(),
        harmonized: result.is_harmonized(),
        colors: &result.inputs,
        scales: result.active(),
    };
    Ok(serde_json::to_string_pretty(&document)?)
}

#[derive(Serialize)]
struct CsvRow<'a> {
    id: &'a str,
    name: &'a str,
    step: u16,
    color: String,
    text_color: String,
}

pub fn render_csv(result: &PaletteResult) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());

    for (input, scale) in ordered_scales(result) {
        for (step, color) in scale.iter() {
            writer.serialize(CsvRow {
                id: &input.id,
                name: &input.name,
                step: step.value(),
                color: color.to_hex(),
                text_color: color.contrast_text().to_hex(),
            })?;
        }
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| PaletteError::IoError(e.into_error()))?;
    String::from_utf8(bytes)
        .map_err(|e| PaletteError::IoError(std::io::Error::new(std::io::ErrorKind::InvalidData, e)))
}
