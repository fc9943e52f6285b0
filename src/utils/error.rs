use thiserror::Error;

#[derive(Error, Debug)]
pub enum PaletteError {
    #[error("Invalid color format: '{input}' (expected #RRGGBB)")]
    InvalidColorFormat { input: String },

    #[error("No color scales to process")]
    EmptyInput,

    #[error("Color scale is incomplete: missing or unknown step {missing}")]
    IncompleteScale { missing: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Unknown preset: {name}")]
    UnknownPreset { name: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Io,
    Rendering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl PaletteError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            PaletteError::InvalidColorFormat { .. }
            | PaletteError::EmptyInput
            | PaletteError::IncompleteScale { .. } => ErrorCategory::Input,
            PaletteError::ConfigValidationError { .. }
            | PaletteError::InvalidConfigValueError { .. }
            | PaletteError::MissingConfigError { .. }
            | PaletteError::UnknownPreset { .. } => ErrorCategory::Configuration,
            PaletteError::IoError(_) => ErrorCategory::Io,
            PaletteError::SerializationError(_) | PaletteError::CsvError(_) => {
                ErrorCategory::Rendering
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input | ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Io => ErrorSeverity::Medium,
            ErrorCategory::Rendering => ErrorSeverity::Critical,
        }
    }

    /// 根據錯誤嚴重程度決定退出碼，任何錯誤都不會回傳 0
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::High => 1,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::Critical => 3,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            PaletteError::InvalidColorFormat { .. } => {
                "Use a 6-digit hex color such as #6831F2".to_string()
            }
            PaletteError::EmptyInput => {
                "Pass at least one --color, a --preset, or a [[colors]] entry".to_string()
            }
            PaletteError::IncompleteScale { .. } => {
                "A scale must contain exactly the steps 50, 100, 200 ... 800".to_string()
            }
            PaletteError::IoError(_) => {
                "Check that the output directory exists and is writable".to_string()
            }
            PaletteError::SerializationError(_) | PaletteError::CsvError(_) => {
                "This is most likely a bug, please report it".to_string()
            }
            PaletteError::ConfigValidationError { .. } => {
                "Check the TOML syntax of the palette file".to_string()
            }
            PaletteError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}'", field)
            }
            PaletteError::MissingConfigError { field } => {
                format!("Add the '{}' setting", field)
            }
            PaletteError::UnknownPreset { .. } => {
                "Run with --list-presets to see the available presets".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self.category() {
            ErrorCategory::Input => format!("Input problem: {}", self),
            ErrorCategory::Configuration => format!("Configuration problem: {}", self),
            ErrorCategory::Io => format!("Could not read or write a file: {}", self),
            ErrorCategory::Rendering => format!("Could not render the palette: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, PaletteError>;
