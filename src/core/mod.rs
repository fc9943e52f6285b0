pub mod color_space;
pub mod engine;
pub mod export;
pub mod generator;
pub mod harmonizer;
pub mod pipeline;

pub use crate::domain::model::{
    Color, ColorInput, ColorScale, OutputFormat, PaletteResult, ScaleSet, Step,
};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
