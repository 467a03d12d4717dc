#[cfg(feature = "cli")]
pub mod cli;
pub mod local;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use cli::CliConfig;

use std::sync::LazyLock;

pub const DEFAULT_OUTPUT_PATH: &str = "./output";

/// 未指定時只輸出 csv
pub static DEFAULT_OUTPUT_FORMATS: LazyLock<Vec<String>> =
    LazyLock::new(|| vec!["csv".to_string()]);
