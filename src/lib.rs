pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::{cli::LocalStorage, toml_config::TomlConfig};
pub use crate::core::{
    engine::PaletteEngine, generator::generate, harmonizer::harmonize, pipeline::PalettePipeline,
};
pub use crate::domain::model::{Color, ColorScale, ScaleSet, Step};
pub use crate::utils::error::{PaletteError, Result};
