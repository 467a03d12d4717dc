use crate::domain::model::{CampaignRecord, MappingResult, PromptRecord};
use crate::utils::error::{EtlError, Result};
use csv::{ReaderBuilder, StringRecord, Terminator, WriterBuilder};
use std::collections::HashSet;

pub const IVR_DETAILS_TABLE: &str = "IVR details";
pub const PROMPTS_TABLE: &str = "prompts";

pub const IVR_DETAILS_NAME_COLUMN: &str = "IVR name";
pub const IVR_DETAILS_CAMPAIGNS_COLUMN: &str = "Associated campaign(s)";
pub const PROMPTS_IVR_NAME_COLUMN: &str = "IVR Name";
pub const PROMPTS_PROMPT_NAME_COLUMN: &str = "Prompt Name";

pub const OUTPUT_HEADERS: [&str; 3] = ["IVR Name", "Prompt Name", "Associated Campaigns"];

/// 預設視為缺值的儲存格內容 (與常見試算表/資料框工具一致)
pub const DEFAULT_NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Set of cell texts that are read as a missing value.
#[derive(Debug, Clone)]
pub struct NaValues {
    tokens: HashSet<String>,
}

impl NaValues {
    pub fn new(keep_default_na: bool, extra: &[String]) -> Self {
        let mut tokens = HashSet::new();
        if keep_default_na {
            tokens.extend(DEFAULT_NA_VALUES.iter().map(|v| v.to_string()));
        }
        tokens.extend(extra.iter().cloned());
        Self { tokens }
    }

    pub fn is_missing(&self, cell: &str) -> bool {
        self.tokens.contains(cell)
    }

    /// 欄位不足的列也視為缺值
    fn cell(&self, row: &StringRecord, index: usize) -> Option<String> {
        row.get(index)
            .filter(|value| !self.is_missing(value))
            .map(str::to_string)
    }
}

impl Default for NaValues {
    fn default() -> Self {
        Self::new(true, &[])
    }
}

struct Table {
    name: &'static str,
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl Table {
    fn parse(name: &'static str, data: &[u8]) -> Result<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(data);

        let headers = reader.headers()?.clone();
        let mut rows = Vec::new();
        for row in reader.records() {
            let row = row?;
            if row.len() == 1 && row[0].is_empty() {
                continue;
            }
            // 欄位不足可補缺值，多出來的欄位則無法對應
            if row.len() > headers.len() {
                return Err(EtlError::MalformedRow {
                    table: name.to_string(),
                    line: row.position().map(|p| p.line()).unwrap_or_default(),
                    expected: headers.len(),
                    found: row.len(),
                });
            }
            rows.push(row);
        }

        tracing::debug!("Parsed {} rows from {} file", rows.len(), name);
        Ok(Self {
            name,
            headers,
            rows,
        })
    }

    /// 同名欄位取第一個
    fn column(&self, column: &str) -> Result<usize> {
        self.headers
            .iter()
            .position(|header| header.trim_start_matches('\u{feff}') == column)
            .ok_or_else(|| EtlError::MissingColumn {
                table: self.name.to_string(),
                column: column.to_string(),
            })
    }
}

pub fn read_campaign_records(data: &[u8], na_values: &NaValues) -> Result<Vec<CampaignRecord>> {
    let table = Table::parse(IVR_DETAILS_TABLE, data)?;
    let name_col = table.column(IVR_DETAILS_NAME_COLUMN)?;
    let campaigns_col = table.column(IVR_DETAILS_CAMPAIGNS_COLUMN)?;

    Ok(table
        .rows
        .iter()
        .map(|row| CampaignRecord {
            ivr_name: na_values.cell(row, name_col),
            associated_campaigns: na_values.cell(row, campaigns_col),
        })
        .collect())
}

/// Missing prompt cells are read as empty strings; the row is still kept.
pub fn read_prompt_records(data: &[u8], na_values: &NaValues) -> Result<Vec<PromptRecord>> {
    let table = Table::parse(PROMPTS_TABLE, data)?;
    let ivr_col = table.column(PROMPTS_IVR_NAME_COLUMN)?;
    let prompt_col = table.column(PROMPTS_PROMPT_NAME_COLUMN)?;

    Ok(table
        .rows
        .iter()
        .map(|row| PromptRecord {
            ivr_name: na_values.cell(row, ivr_col).unwrap_or_default(),
            prompt_name: na_values.cell(row, prompt_col).unwrap_or_default(),
        })
        .collect())
}

pub fn write_mapping_csv(results: &[MappingResult]) -> Result<String> {
    let mut writer = WriterBuilder::new()
        .terminator(Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    writer.write_record(OUTPUT_HEADERS)?;
    for result in results {
        writer.write_record([
            result.ivr_name.as_str(),
            result.prompt_name.as_str(),
            result.associated_campaigns.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| EtlError::IoError(e.into_error()))?;
    String::from_utf8(bytes).map_err(|e| EtlError::ProcessingError {
        message: format!("Mapping CSV is not valid UTF-8: {}", e),
    })
}
