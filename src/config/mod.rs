pub mod cli;
pub mod presets;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use crate::config::presets::find_preset;
    use crate::core::{ColorInput, ConfigProvider, OutputFormat};
    use crate::utils::error::Result;
    use crate::utils::validation::{
        validate_color_inputs, validate_non_empty, validate_path, Validate,
    };
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "tintoria")]
    #[command(about = "Generate perceptually uniform, harmonized color scales")]
    pub struct CliConfig {
        /// Base color as `Name=#RRGGBB` or `#RRGGBB` (repeatable)
        #[arg(short, long = "color", value_delimiter = ',', conflicts_with = "config")]
        pub colors: Vec<ColorInput>,

        /// Start from a built-in preset
        #[arg(short, long, conflicts_with = "config")]
        pub preset: Option<String>,

        /// Load a TOML palette file; its settings replace the palette and output options
        #[arg(long)]
        pub config: Option<String>,

        #[arg(long, default_value = "palette", conflicts_with = "config")]
        pub name: String,

        #[arg(short, long, default_value = "./output", conflicts_with = "config")]
        pub output_path: String,

        #[arg(
            short,
            long = "format",
            value_enum,
            value_delimiter = ',',
            default_value = "css",
            conflicts_with = "config"
        )]
        pub formats: Vec<OutputFormat>,

        /// Export the raw scales without harmonizing them
        #[arg(long, conflicts_with = "config")]
        pub no_harmonize: bool,

        #[arg(long, help = "List the built-in presets and exit")]
        pub list_presets: bool,

        #[arg(long, help = "Print the scales instead of writing files")]
        pub dry_run: bool,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON lines")]
        pub log_json: bool,
    }

    impl ConfigProvider for CliConfig {
        fn palette_name(&self) -> &str {
            &self.name
        }

        fn colors(&self) -> Result<Vec<ColorInput>> {
            let mut colors = match &self.preset {
                Some(name) => find_preset(name)?.color_inputs(),
                None => Vec::new(),
            };
            colors.extend(self.colors.iter().cloned());
            Ok(colors)
        }

        fn output_path(&self) -> &str {
            &self.output_path
        }

        fn output_formats(&self) -> &[OutputFormat] {
            &self.formats
        }

        fn harmonize(&self) -> bool {
            !self.no_harmonize
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validate_path("output_path", &self.output_path)?;
            validate_non_empty("format", &self.formats)?;

            let colors = self.colors()?;
            validate_non_empty("color", &colors)?;
            validate_color_inputs("color", &colors)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use crate::utils::error::PaletteError;

        #[test]
        fn test_parse_colors_and_formats() {
            let config = CliConfig::parse_from([
                "tintoria",
                "--color",
                "Primary=#6831F2,Accent=#A227B0",
                "-c",
                "#2385F6",
                "--format",
                "css,json",
            ]);

            let colors = config.colors().unwrap();
            assert_eq!(colors.len(), 3);
            assert_eq!(colors[0].id, "primary");
            assert_eq!(colors[2].id, "2385f6");
            assert_eq!(config.formats, vec![OutputFormat::Css, OutputFormat::Json]);
            assert!(config.harmonize());
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_defaults() {
            let config = CliConfig::parse_from(["tintoria", "--preset", "nord"]);
            assert_eq!(config.output_path, "./output");
            assert_eq!(config.formats, vec![OutputFormat::Css]);
            assert_eq!(config.colors().unwrap().len(), 4);
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_preset_colors_come_first() {
            let config = CliConfig::parse_from([
                "tintoria",
                "--preset",
                "Brand Example",
                "--color",
                "Extra=#00ff00",
                "--no-harmonize",
            ]);
            let colors = config.colors().unwrap();
            assert_eq!(colors.first().unwrap().id, "brand1");
            assert_eq!(colors.last().unwrap().id, "extra");
            assert!(!config.harmonize());
        }

        #[test]
        fn test_config_file_excludes_palette_options() {
            let config = CliConfig::try_parse_from(["tintoria", "--config", "palette.toml", "-v"]);
            assert_eq!(config.unwrap().config.as_deref(), Some("palette.toml"));

            for flag in [
                vec!["--no-harmonize"],
                vec!["--format", "json"],
                vec!["--output-path", "./elsewhere"],
                vec!["--name", "other"],
                vec!["--color", "#6831F2"],
                vec!["--preset", "nord"],
            ] {
                let mut args = vec!["tintoria", "--config", "palette.toml"];
                args.extend(flag.iter().copied());
                assert!(CliConfig::try_parse_from(args).is_err(), "{:?}", flag);
            }
        }

        #[test]
        fn test_validation_failures() {
            let empty = CliConfig::parse_from(["tintoria"]);
            assert!(matches!(
                empty.validate(),
                Err(PaletteError::MissingConfigError { .. })
            ));

            let bad = CliConfig::parse_from(["tintoria", "--color", "Bad=#fff"]);
            assert!(bad.validate().is_err());

            let unknown = CliConfig::parse_from(["tintoria", "--preset", "Solarized"]);
            assert!(matches!(
                unknown.validate(),
                Err(PaletteError::UnknownPreset { .. })
            ));
        }
    }
}
