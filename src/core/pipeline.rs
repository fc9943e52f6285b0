use crate::core::export;
use crate::core::generator::generate;
use crate::core::harmonizer::harmonize;
use crate::core::{ColorInput, ConfigProvider, PaletteResult, Pipeline, ScaleSet, Storage};
use crate::utils::error::{PaletteError, Result};
use crate::utils::validation::validate_unique_ids;
use std::path::Path;

pub struct PalettePipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
}

impl<S: Storage, C: ConfigProvider> PalettePipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for PalettePipeline<S, C> {
    async fn extract(&self) -> Result<Vec<ColorInput>> {
        let inputs = self.config.colors()?;
        if inputs.is_empty() {
            return Err(PaletteError::EmptyInput);
        }
        validate_unique_ids("colors", &inputs)?;

        for input in &inputs {
            tracing::debug!("Input color {} ({}): {}", input.id, input.name, input.color);
        }

        Ok(inputs)
    }

    async fn transform(&self, inputs: Vec<ColorInput>) -> Result<PaletteResult> {
        // 任一顏色無效即整體失敗，不回傳部分結果
        let scales = inputs
            .iter()
            .map(|input| generate(&input.color).map(|scale| (input.id.clone(), scale)))
            .collect::<Result<ScaleSet>>()?;

        let harmonized = if self.config.harmonize() && scales.len() > 1 {
            tracing::debug!("Harmonizing {} scales", scales.len());
            Some(harmonize(&scales)?)
        } else {
            if self.config.harmonize() {
                tracing::debug!("Only one scale, skipping harmonization");
            }
            None
        };

        Ok(PaletteResult {
            name: self.config.palette_name().to_string(),
            description: self.config.description().map(str::to_string),
            inputs,
            scales,
            harmonized,
        })
    }

    async fn load(&self, result: PaletteResult) -> Result<Vec<String>> {
        let mut written = Vec::new();

        for &format in self.config.output_formats() {
            let content = export::render(format, &result)?;
            let filename = self.config.filename(format);

            tracing::debug!(
                "Writing {} output ({} bytes) to {}",
                format,
                content.len(),
                filename
            );
            self.storage.write_file(&filename, content.as_bytes()).await?;

            written.push(
                Path::new(self.config.output_path())
                    .join(&filename)
                    .display()
                    .to_string(),
            );
        }

        Ok(written)
    }
}
