pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{local::LocalStorage, toml_config::TomlConfig};
pub use core::{
    etl::{EtlEngine, RunReport},
    pipeline::MappingPipeline,
};
pub use domain::model::{CampaignRecord, MappingResult, MappingStats, PromptRecord};
pub use domain::services::{
    compute_stats, join_prompts, normalize_ivr_name, unmapped_ivr_names, CampaignIndex,
};
pub use utils::error::{EtlError, Result};
