pub use crate::app::pipelines::mapping_pipeline::{MappingPipeline, MappingSummary};
