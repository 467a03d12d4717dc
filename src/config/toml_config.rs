use super::{DEFAULT_OUTPUT_FORMATS, DEFAULT_OUTPUT_PATH};
use crate::core::ConfigProvider;
use crate::domain::model::OutputFilenames;
use crate::utils::error::{EtlError, Result};
use crate::utils::validation::{
    validate_input_file, validate_non_empty_string, validate_output_formats, validate_path,
    Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub pipeline: PipelineConfig,
    pub source: SourceConfig,
    #[serde(default)]
    pub load: LoadConfig,
    pub monitoring: Option<MonitoringConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    pub name: String,
    pub description: Option<String>,
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SourceConfig {
    pub ivr_details: Option<String>,
    pub prompts: Option<String>,
    #[serde(default)]
    pub na_values: Vec<String>,
    pub keep_default_na: Option<bool>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoadConfig {
    #[serde(default = "default_output_path")]
    pub output_path: String,
    #[serde(default = "default_output_formats")]
    pub output_formats: Vec<String>,
    pub filenames: Option<FilenameConfig>,
}

impl Default for LoadConfig {
    fn default() -> Self {
        Self {
            output_path: default_output_path(),
            output_formats: default_output_formats(),
            filenames: None,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FilenameConfig {
    pub csv: Option<String>,
    pub json: Option<String>,
    pub zip: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MonitoringConfig {
    pub enabled: bool,
}

fn default_output_path() -> String {
    DEFAULT_OUTPUT_PATH.to_string()
}

fn default_output_formats() -> Vec<String> {
    DEFAULT_OUTPUT_FORMATS.to_vec()
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(EtlError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| EtlError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未設定的保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| EtlError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.into_owned())
    }

    /// 命令列參數優先於設定檔
    #[cfg(feature = "cli")]
    pub fn apply_cli_overrides(&mut self, cli: &crate::config::CliConfig) {
        if let Some(path) = &cli.ivr_details {
            self.source.ivr_details = Some(path.clone());
        }
        if let Some(path) = &cli.prompts {
            self.source.prompts = Some(path.clone());
        }
        if let Some(path) = &cli.output_path {
            self.load.output_path = path.clone();
        }
        if let Some(formats) = &cli.output_formats {
            self.load.output_formats = formats.clone();
        }
        if !cli.na_values.is_empty() {
            self.source.na_values.extend(cli.na_values.iter().cloned());
        }
        if cli.no_default_na {
            self.source.keep_default_na = Some(false);
        }
        if cli.monitor {
            self.monitoring = Some(MonitoringConfig { enabled: true });
        }
    }

    pub fn monitoring_enabled(&self) -> bool {
        self.monitoring.as_ref().map(|m| m.enabled).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn ivr_details_path(&self) -> &str {
        self.source.ivr_details.as_deref().unwrap_or_default()
    }

    fn prompts_path(&self) -> &str {
        self.source.prompts.as_deref().unwrap_or_default()
    }

    fn output_path(&self) -> &str {
        &self.load.output_path
    }

    fn output_formats(&self) -> &[String] {
        &self.load.output_formats
    }

    fn na_values(&self) -> &[String] {
        &self.source.na_values
    }

    fn keep_default_na(&self) -> bool {
        self.source.keep_default_na.unwrap_or(true)
    }

    fn output_filenames(&self) -> OutputFilenames {
        let mut filenames = OutputFilenames::default();
        if let Some(custom) = &self.load.filenames {
            if let Some(csv) = &custom.csv {
                filenames.csv = csv.clone();
            }
            if let Some(json) = &custom.json {
                filenames.json = json.clone();
            }
            if let Some(zip) = &custom.zip {
                filenames.zip = zip.clone();
            }
        }
        filenames
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("pipeline.name", &self.pipeline.name)?;
        validate_input_file(
            "source.ivr_details",
            self.source.ivr_details.as_deref(),
            &["csv"],
        )?;
        validate_input_file("source.prompts", self.source.prompts.as_deref(), &["csv"])?;
        validate_path("load.output_path", &self.load.output_path)?;
        validate_output_formats("load.output_formats", &self.load.output_formats)?;

        let filenames = self.output_filenames();
        for (field, name) in [
            ("load.filenames.csv", &filenames.csv),
            ("load.filenames.json", &filenames.json),
            ("load.filenames.zip", &filenames.zip),
        ] {
            validate_path(field, name)?;
        }
        Ok(())
    }
}
