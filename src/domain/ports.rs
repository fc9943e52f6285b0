use crate::domain::model::{ColorInput, OutputFormat, PaletteResult};
use crate::utils::error::Result;
use async_trait::async_trait;

pub trait Storage: Send + Sync {
    fn read_file(&self, path: &str) -> impl std::future::Future<Output = Result<Vec<u8>>> + Send;
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn palette_name(&self) -> &str;
    fn description(&self) -> Option<&str> {
        None
    }
    /// Preset colors first, then explicitly listed ones.
    fn colors(&self) -> Result<Vec<ColorInput>>;
    fn output_path(&self) -> &str;
    fn output_formats(&self) -> &[OutputFormat];
    fn harmonize(&self) -> bool;

    fn filename(&self, format: OutputFormat) -> String {
        format.default_filename().to_string()
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<Vec<ColorInput>>;
    async fn transform(&self, inputs: Vec<ColorInput>) -> Result<PaletteResult>;
    async fn load(&self, result: PaletteResult) -> Result<Vec<String>>;
}
