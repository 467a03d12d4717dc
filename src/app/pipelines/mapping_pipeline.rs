use crate::core::table::{read_campaign_records, read_prompt_records, write_mapping_csv, NaValues};
use crate::core::{ConfigProvider, Pipeline, SourceTables, Storage, TransformResult};
use crate::domain::model::MappingStats;
use crate::domain::services::{compute_stats, join_prompts, unmapped_ivr_names, CampaignIndex};
use crate::utils::error::{EtlError, Result};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use std::path::Path;
use zip::write::{SimpleFileOptions, ZipWriter};

/// `json` 輸出的內容
#[derive(Debug, Clone, Serialize)]
pub struct MappingSummary {
    pub generated_at: DateTime<Utc>,
    pub ivr_details_file: String,
    pub prompts_file: String,
    pub stats: MappingStats,
    pub unmapped_ivrs: Vec<String>,
}

/// IVR details + prompts -> prompt/campaign 對照表
pub struct MappingPipeline<S: Storage, C: ConfigProvider> {
    pub(crate) storage: S,
    pub(crate) config: C,
}

impl<S: Storage, C: ConfigProvider> MappingPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self { storage, config }
    }

    fn summary(&self, result: &TransformResult) -> MappingSummary {
        MappingSummary {
            generated_at: Utc::now(),
            ivr_details_file: self.config.ivr_details_path().to_string(),
            prompts_file: self.config.prompts_path().to_string(),
            stats: result.stats,
            unmapped_ivrs: result.unmapped_ivrs.clone(),
        }
    }

    fn output_file(&self, filename: &str) -> String {
        Path::new(self.config.output_path())
            .join(filename)
            .to_string_lossy()
            .into_owned()
    }
}

fn bundle_zip(entries: &[(&str, &[u8])]) -> Result<Vec<u8>> {
    let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
    for (name, data) in entries {
        zip.start_file(*name, SimpleFileOptions::default())?;
        zip.write_all(data)?;
    }
    let cursor = zip.finish()?;
    Ok(cursor.into_inner())
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for MappingPipeline<S, C> {
    async fn extract(&self) -> Result<SourceTables> {
        let na_values = NaValues::new(self.config.keep_default_na(), self.config.na_values());

        tracing::info!(
            "📥 Reading IVR details from: {}",
            self.config.ivr_details_path()
        );
        let ivr_details = self
            .storage
            .read_file(self.config.ivr_details_path())
            .await?;

        tracing::info!("📥 Reading prompts from: {}", self.config.prompts_path());
        let prompts = self.storage.read_file(self.config.prompts_path()).await?;

        // 兩個檔案都要先通過欄位檢查才開始處理
        let campaigns = read_campaign_records(&ivr_details, &na_values)?;
        let prompts = read_prompt_records(&prompts, &na_values)?;

        tracing::debug!(
            "Loaded {} IVR detail rows and {} prompt rows",
            campaigns.len(),
            prompts.len()
        );

        Ok(SourceTables { campaigns, prompts })
    }

    async fn transform(&self, tables: SourceTables) -> Result<TransformResult> {
        let index = CampaignIndex::build(&tables.campaigns);
        tracing::debug!(
            "Campaign index has {} keys from {} IVR detail rows",
            index.len(),
            tables.campaigns.len()
        );

        let results = join_prompts(&index, &tables.prompts);
        let stats = compute_stats(&results);
        let unmapped_ivrs = unmapped_ivr_names(&results);
        let csv_output = write_mapping_csv(&results)?;

        if !unmapped_ivrs.is_empty() {
            tracing::warn!(
                "{} prompts across {} IVRs could not be matched to a campaign",
                stats.unmapped,
                unmapped_ivrs.len()
            );
        }

        Ok(TransformResult {
            results,
            stats,
            unmapped_ivrs,
            csv_output,
        })
    }

    async fn load(&self, result: TransformResult) -> Result<String> {
        let filenames = self.config.output_filenames();
        let summary_json = serde_json::to_vec_pretty(&self.summary(&result))?;

        // 先全部產生好再寫檔，失敗時不會留下部分輸出
        let mut outputs: Vec<(String, Vec<u8>)> = Vec::new();
        for format in self.config.output_formats() {
            match format.as_str() {
                "csv" => outputs.push((
                    self.output_file(&filenames.csv),
                    result.csv_output.as_bytes().to_vec(),
                )),
                "json" => outputs.push((self.output_file(&filenames.json), summary_json.clone())),
                "zip" => {
                    let archive = bundle_zip(&[
                        (filenames.csv.as_str(), result.csv_output.as_bytes()),
                        (filenames.json.as_str(), summary_json.as_slice()),
                    ])?;
                    outputs.push((self.output_file(&filenames.zip), archive));
                }
                other => {
                    return Err(EtlError::InvalidConfigValueError {
                        field: "output_formats".to_string(),
                        value: other.to_string(),
                        reason: "Unsupported output format".to_string(),
                    })
                }
            }
        }

        let primary = outputs
            .first()
            .map(|(path, _)| path.clone())
            .ok_or_else(|| EtlError::ProcessingError {
                message: "No output formats configured".to_string(),
            })?;

        for (path, data) in &outputs {
            tracing::debug!("Writing {} bytes to {}", data.len(), path);
            self.storage.write_file(path, data).await?;
        }

        Ok(primary)
    }
}
