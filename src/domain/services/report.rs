use crate::domain::model::{MappingResult, MappingStats};
use std::collections::HashSet;

pub fn compute_stats(results: &[MappingResult]) -> MappingStats {
    let total = results.len();
    let mapped = results.iter().filter(|r| r.is_mapped()).count();
    MappingStats {
        total,
        mapped,
        unmapped: total - mapped,
    }
}

/// 未對應的 IVR 名稱，去重並保留首次出現順序
pub fn unmapped_ivr_names(results: &[MappingResult]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut names = Vec::new();
    for result in results.iter().filter(|r| r.associated_campaigns.is_empty()) {
        if seen.insert(result.ivr_name.as_str()) {
            names.push(result.ivr_name.clone());
        }
    }
    names
}
