use crate::core::{PaletteResult, Pipeline};
use crate::utils::error::Result;

pub struct PaletteEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> PaletteEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    /// Extract, transform and load. Returns the paths of the written files.
    pub async fn run(&self) -> Result<Vec<String>> {
        tracing::info!("Starting palette generation");

        let result = self.preview().await?;

        tracing::info!("Writing outputs...");
        let written = self.pipeline.load(result).await?;
        for path in &written {
            tracing::info!("Output saved to: {}", path);
        }

        Ok(written)
    }

    /// Extract and transform only; nothing is written.
    pub async fn preview(&self) -> Result<PaletteResult> {
        tracing::info!("Collecting input colors...");
        let inputs = self.pipeline.extract().await?;
        tracing::info!("Collected {} colors", inputs.len());

        tracing::info!("Generating scales...");
        let result = self.pipeline.transform(inputs).await?;
        tracing::info!(
            "Generated {} scales{}",
            result.scales.len(),
            if result.is_harmonized() {
                " (harmonized)"
            } else {
                ""
            }
        );

        Ok(result)
    }
}
