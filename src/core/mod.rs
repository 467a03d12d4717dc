pub mod etl;
pub mod pipeline;
pub mod table;

pub use crate::domain::model::{MappingResult, MappingStats, SourceTables, TransformResult};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
