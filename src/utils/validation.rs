use crate::domain::model::{Color, ColorInput};
use crate::utils::error::{PaletteError, Result};
use std::collections::HashSet;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PaletteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PaletteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(PaletteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Value cannot be empty or whitespace-only".to_string(),
        });
    }
    Ok(())
}

pub fn validate_hex_color(field_name: &str, value: &str) -> Result<()> {
    value
        .parse::<Color>()
        .map(|_| ())
        .map_err(|_| PaletteError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: "Expected a 6-digit hex color like #6831F2".to_string(),
        })
}

pub fn validate_non_empty<T>(field_name: &str, items: &[T]) -> Result<()> {
    if items.is_empty() {
        return Err(PaletteError::MissingConfigError {
            field: field_name.to_string(),
        });
    }
    Ok(())
}

/// Duplicate ids would collapse two scales into one entry of the scale set.
pub fn validate_unique_ids(field_name: &str, inputs: &[ColorInput]) -> Result<()> {
    let mut seen = HashSet::new();

    for (index, input) in inputs.iter().enumerate() {
        if !seen.insert(input.id.as_str()) {
            return Err(PaletteError::InvalidConfigValueError {
                field: format!("{}[{}].id", field_name, index),
                value: input.id.clone(),
                reason: "Duplicate color id".to_string(),
            });
        }
    }

    Ok(())
}

pub fn validate_color_inputs(field_name: &str, inputs: &[ColorInput]) -> Result<()> {
    for (index, input) in inputs.iter().enumerate() {
        let field = format!("{}[{}]", field_name, index);
        validate_non_empty_string(&format!("{}.id", field), &input.id)?;
        validate_hex_color(&format!("{}.color", field), &input.color)?;
    }

    validate_unique_ids(field_name, inputs)
}
