use crate::adapters::logging::{JsonLinesLogger, TracingLogger};
use crate::domain::model::{Level, NumericKind};
use crate::domain::ports::Logger;
use crate::utils::error::{MathsError, Result};
use crate::utils::validation::{self, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct GuestConfig {
    pub component: ComponentConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ComponentConfig {
    pub name: String,
    pub language: String,
    pub numeric: NumericKind,
}

impl Default for ComponentConfig {
    fn default() -> Self {
        Self {
            name: "maths".to_string(),
            language: "rust".to_string(),
            numeric: NumericKind::default(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Compact,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    #[default]
    Tracing,
    File,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: String,
    pub format: LogFormat,
    pub sink: SinkKind,
    pub file: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            format: LogFormat::default(),
            sink: SinkKind::default(),
            file: None,
        }
    }
}

impl GuestConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(MathsError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| MathsError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${GUEST_LANGUAGE})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| MathsError::ConfigError {
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn log_level(&self) -> Result<Level> {
        validation::validate_level("logging.level", &self.logging.level)
    }

    /// Open the sink the host hands to guest components.
    pub fn build_logger(&self) -> Result<Box<dyn Logger>> {
        match self.logging.sink {
            SinkKind::Tracing => Ok(Box::new(TracingLogger)),
            SinkKind::File => {
                let path = validation::validate_required_field("logging.file", &self.logging.file)?;
                Ok(Box::new(JsonLinesLogger::open(path)?))
            }
        }
    }
}

impl Validate for GuestConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_tag_segment("component.name", &self.component.name)?;
        validation::validate_tag_segment("component.language", &self.component.language)?;
        self.log_level()?;

        if self.logging.sink == SinkKind::File {
            let path = validation::validate_required_field("logging.file", &self.logging.file)?;
            validation::validate_path("logging.file", path)?;
        }

        Ok(())
    }
}
