use serde::{Deserialize, Serialize};

/// IVR details 檔案中的一列
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignRecord {
    pub ivr_name: Option<String>,
    pub associated_campaigns: Option<String>,
}

impl CampaignRecord {
    pub fn new(ivr_name: impl Into<String>, associated_campaigns: impl Into<String>) -> Self {
        Self {
            ivr_name: Some(ivr_name.into()),
            associated_campaigns: Some(associated_campaigns.into()),
        }
    }
}

/// Prompts 檔案中的一列
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptRecord {
    pub ivr_name: String,
    pub prompt_name: String,
}

impl PromptRecord {
    pub fn new(ivr_name: impl Into<String>, prompt_name: impl Into<String>) -> Self {
        Self {
            ivr_name: ivr_name.into(),
            prompt_name: prompt_name.into(),
        }
    }
}

/// One output row per prompt. `associated_campaigns` is empty when unresolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MappingResult {
    pub ivr_name: String,
    pub prompt_name: String,
    pub associated_campaigns: String,
}

impl MappingResult {
    pub fn is_mapped(&self) -> bool {
        !self.associated_campaigns.is_empty()
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MappingStats {
    pub total: usize,
    pub mapped: usize,
    pub unmapped: usize,
}

/// 兩個已載入的輸入表
#[derive(Debug, Clone, Default)]
pub struct SourceTables {
    pub campaigns: Vec<CampaignRecord>,
    pub prompts: Vec<PromptRecord>,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub results: Vec<MappingResult>,
    pub stats: MappingStats,
    pub unmapped_ivrs: Vec<String>,
    pub csv_output: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputFilenames {
    pub csv: String,
    pub json: String,
    pub zip: String,
}

impl Default for OutputFilenames {
    fn default() -> Self {
        Self {
            csv: "prompt_campaign_mapping.csv".to_string(),
            json: "mapping_summary.json".to_string(),
            zip: "prompt_campaign_mapping.zip".to_string(),
        }
    }
}
