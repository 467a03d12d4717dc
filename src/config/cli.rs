use super::{DEFAULT_OUTPUT_FORMATS, DEFAULT_OUTPUT_PATH};
use crate::core::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_input_file, validate_output_formats, validate_path, Validate,
};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "ivr-mapper")]
#[command(about = "Maps IVR prompts to their associated campaigns")]
pub struct CliConfig {
    #[arg(long, help = "CSV file containing IVR names and associated campaigns")]
    pub ivr_details: Option<String>,

    #[arg(long, help = "CSV file containing IVR names and prompt names")]
    pub prompts: Option<String>,

    #[arg(long, help = "Output directory [default: ./output]")]
    pub output_path: Option<String>,

    #[arg(long, value_delimiter = ',', help = "csv, json and/or zip [default: csv]")]
    pub output_formats: Option<Vec<String>>,

    #[arg(
        long,
        value_delimiter = ',',
        allow_hyphen_values = true,
        help = "Extra cell values to read as missing"
    )]
    pub na_values: Vec<String>,

    #[arg(long, help = "Only treat --na-values cells as missing")]
    pub no_default_na: bool,

    #[arg(short, long, help = "Path to TOML configuration file")]
    pub config: Option<String>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Log CPU and memory usage after each phase")]
    pub monitor: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

impl ConfigProvider for CliConfig {
    fn ivr_details_path(&self) -> &str {
        self.ivr_details.as_deref().unwrap_or_default()
    }

    fn prompts_path(&self) -> &str {
        self.prompts.as_deref().unwrap_or_default()
    }

    fn output_path(&self) -> &str {
        self.output_path.as_deref().unwrap_or(DEFAULT_OUTPUT_PATH)
    }

    fn output_formats(&self) -> &[String] {
        self.output_formats
            .as_deref()
            .unwrap_or(DEFAULT_OUTPUT_FORMATS.as_slice())
    }

    fn na_values(&self) -> &[String] {
        &self.na_values
    }

    fn keep_default_na(&self) -> bool {
        !self.no_default_na
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_input_file("ivr_details", self.ivr_details.as_deref(), &["csv"])?;
        validate_input_file("prompts", self.prompts.as_deref(), &["csv"])?;
        validate_path("output_path", self.output_path())?;
        validate_output_formats("output_formats", self.output_formats())
    }
}
