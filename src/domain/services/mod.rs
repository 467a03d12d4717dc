pub mod mapping;
pub mod normalizer;
pub mod report;

pub use mapping::{join_prompts, CampaignIndex};
pub use normalizer::{normalize_ivr_name, IVR_SUFFIX};
pub use report::{compute_stats, unmapped_ivr_names};
