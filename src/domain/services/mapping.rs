use super::normalizer::{normalize_ivr_name, IVR_SUFFIX};
use crate::domain::model::{CampaignRecord, MappingResult, PromptRecord};
use std::collections::HashMap;

/// IVR 名稱 -> campaign 字串的查詢表
///
/// Every indexed record is stored under two keys: its normalized name and the
/// normalized name with `.five9ivr` re-appended.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CampaignIndex {
    entries: HashMap<String, String>,
}

impl CampaignIndex {
    /// 依序建立索引，同名以最後一筆為準
    pub fn build<'a, I>(records: I) -> Self
    where
        I: IntoIterator<Item = &'a CampaignRecord>,
    {
        let mut index = Self::default();
        for record in records {
            // 名稱或 campaign 缺值的列直接略過
            let (Some(ivr_name), Some(campaigns)) =
                (&record.ivr_name, &record.associated_campaigns)
            else {
                continue;
            };
            index.upsert(ivr_name, campaigns);
        }
        index
    }

    /// Inserts or overwrites both surface forms of `ivr_name`.
    pub fn upsert(&mut self, ivr_name: &str, campaigns: &str) {
        let base = normalize_ivr_name(ivr_name);
        self.entries
            .insert(format!("{}{}", base, IVR_SUFFIX), campaigns.to_string());
        self.entries.insert(base, campaigns.to_string());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    /// 先用原始名稱查，查不到或值為空字串時再用正規化名稱查
    pub fn resolve(&self, raw_ivr_name: &str) -> &str {
        match self.get(raw_ivr_name) {
            Some(campaigns) if !campaigns.is_empty() => campaigns,
            _ => self
                .get(&normalize_ivr_name(raw_ivr_name))
                .unwrap_or_default(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// One result per prompt, in prompt order.
pub fn join_prompts(index: &CampaignIndex, prompts: &[PromptRecord]) -> Vec<MappingResult> {
    prompts
        .iter()
        .map(|prompt| MappingResult {
            ivr_name: prompt.ivr_name.clone(),
            prompt_name: prompt.prompt_name.clone(),
            associated_campaigns: index.resolve(&prompt.ivr_name).to_string(),
        })
        .collect()
}
