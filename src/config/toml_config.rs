use crate::config::presets::find_preset;
use crate::core::{ColorInput, ConfigProvider, OutputFormat};
use crate::domain::model::slugify;
use crate::utils::error::{PaletteError, Result};
use crate::utils::validation::{
    validate_color_inputs, validate_non_empty, validate_non_empty_string, validate_path, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub palette: PaletteConfig,
    #[serde(default)]
    pub colors: Vec<ColorInput>,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaletteConfig {
    pub name: String,
    pub description: Option<String>,
    pub harmonize: Option<bool>,
    pub preset: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub path: String,
    pub formats: Vec<OutputFormat>,
    pub filenames: Option<FilenameConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilenameConfig {
    pub css: Option<String>,
    pub json: Option<String>,
    pub csv: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(PaletteError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content)?;

        let mut config: TomlConfig =
            toml::from_str(&processed_content).map_err(|e| PaletteError::ConfigValidationError {
                field: "toml_parsing".to_string(),
                message: format!("TOML parsing error: {}", e),
            })?;

        config.fill_missing_ids();
        Ok(config)
    }

    /// 替換環境變數 (例如 ${BRAND_COLOR})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| PaletteError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// 未指定 id 的顏色以名稱產生 id
    fn fill_missing_ids(&mut self) {
        for (index, color) in self.colors.iter_mut().enumerate() {
            if color.id.trim().is_empty() {
                let slug = slugify(&color.name);
                color.id = if slug.is_empty() {
                    format!("color-{}", index + 1)
                } else {
                    slug
                };
            }
        }
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        validate_non_empty_string("palette.name", &self.palette.name)?;
        validate_path("output.path", &self.output.path)?;
        validate_non_empty("output.formats", &self.output.formats)?;

        if let Some(filenames) = &self.output.filenames {
            for (field, name) in [
                ("output.filenames.css", &filenames.css),
                ("output.filenames.json", &filenames.json),
                ("output.filenames.csv", &filenames.csv),
            ] {
                if let Some(name) = name {
                    validate_path(field, name)?;
                }
            }
        }

        let colors = self.colors()?;
        validate_non_empty("colors", &colors)?;
        validate_color_inputs("colors", &colors)
    }
}

impl ConfigProvider for TomlConfig {
    fn palette_name(&self) -> &str {
        &self.palette.name
    }

    fn description(&self) -> Option<&str> {
        self.palette.description.as_deref()
    }

    fn colors(&self) -> Result<Vec<ColorInput>> {
        let mut colors = match &self.palette.preset {
            Some(name) => find_preset(name)?.color_inputs(),
            None => Vec::new(),
        };
        colors.extend(self.colors.iter().cloned());
        Ok(colors)
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn output_formats(&self) -> &[OutputFormat] {
        &self.output.formats
    }

    fn harmonize(&self) -> bool {
        self.palette.harmonize.unwrap_or(true)
    }

    fn filename(&self, format: OutputFormat) -> String {
        let filenames = self.output.filenames.clone().unwrap_or_default();
        let custom = match format {
            OutputFormat::Css => filenames.css,
            OutputFormat::Json => filenames.json,
            OutputFormat::Csv => filenames.csv,
        };
        custom.unwrap_or_else(|| format.default_filename().to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_parse_basic_toml_config() {
        let toml_content = r##"
[palette]
name = "brand"
description = "Brand colors"

[[colors]]
id = "primary"
name = "Primary"
color = "#6831F2"

[[colors]]
name = "Product A"
color = "#2385F6"

[output]
path = "./test-output"
formats = ["css", "json"]
"##;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.palette.name, "brand");
        assert_eq!(config.description(), Some("Brand colors"));
        assert_eq!(config.colors.len(), 2);
        assert_eq!(config.colors[0].id, "primary");
        assert_eq!(config.colors[1].id, "product-a");
        assert!(config.harmonize());
        assert_eq!(
            config.output_formats(),
            &[OutputFormat::Css, OutputFormat::Json]
        );
        assert_eq!(config.filename(OutputFormat::Css), "tintoria-palette.css");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("TINTORIA_TEST_BRAND_COLOR", "#A227B0");

        let toml_content = r##"
[palette]
name = "env"

[[colors]]
name = "Brand"
color = "${TINTORIA_TEST_BRAND_COLOR}"

[[colors]]
name = "Unset"
color = "${TINTORIA_TEST_UNSET_VARIABLE}"

[output]
path = "./output"
formats = ["css"]
"##;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.colors[0].color, "#A227B0");
        assert_eq!(config.colors[1].color, "${TINTORIA_TEST_UNSET_VARIABLE}");
        assert!(config.validate().is_err());

        std::env::remove_var("TINTORIA_TEST_BRAND_COLOR");
    }

    #[test]
    fn test_preset_and_overrides() {
        let toml_content = r##"
[palette]
name = "nordish"
harmonize = false
preset = "Nord"

[[colors]]
name = "Accent"
color = "#ebcb8b"

[output]
path = "./output"
formats = ["csv"]

[output.filenames]
csv = "nord.csv"
"##;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        let colors = config.colors().unwrap();

        assert_eq!(colors.len(), 5);
        assert_eq!(colors[0].id, "polar-night");
        assert_eq!(colors[4].id, "accent");
        assert!(!config.harmonize());
        assert_eq!(config.description(), None);
        assert_eq!(config.filename(OutputFormat::Csv), "nord.csv");
        assert_eq!(config.filename(OutputFormat::Json), "palette.json");
    }

    #[test]
    fn test_config_validation() {
        let toml_content = r##"
[palette]
name = "broken"

[[colors]]
name = "Short"
color = "#fff"

[output]
path = "./output"
formats = ["css"]
"##;

        let config = TomlConfig::from_toml_str(toml_content).unwrap();
        assert!(config.validate().is_err());

        let no_formats = r##"
[palette]
name = "empty"

[[colors]]
name = "Brand"
color = "#6831F2"

[output]
path = "./output"
formats = []
"##;
        let config = TomlConfig::from_toml_str(no_formats).unwrap();
        assert!(matches!(
            config.validate(),
            Err(PaletteError::MissingConfigError { .. })
        ));
    }

    #[test]
    fn test_unknown_format_fails_to_parse() {
        let toml_content = r##"
[palette]
name = "x"

[output]
path = "./output"
formats = ["scss"]
"##;
        assert!(matches!(
            TomlConfig::from_toml_str(toml_content),
            Err(PaletteError::ConfigValidationError { .. })
        ));
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();

        let toml_content = r##"
[palette]
name = "file-test"
preset = "material-design"

[output]
path = "./output"
formats = ["json"]
"##;

        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = TomlConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.palette.name, "file-test");
        assert_eq!(config.colors().unwrap().len(), 3);
        assert!(config.validate().is_ok());
    }
}
